//! Global Application State
//!
//! Reactive shell state using Leptos signals: the active view, the mobile
//! menu flag, and the error toast slot.

use leptos::*;

/// Top-level views reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Home,
    Dashboard,
    Alerts,
    Chatbot,
}

impl Tab {
    /// All tabs in navigation order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Dashboard, Tab::Alerts, Tab::Chatbot];

    /// Resolve a string key to a tab. Unrecognized keys land on the
    /// landing page rather than erroring.
    pub fn from_key(key: &str) -> Self {
        match key {
            "home" => Tab::Home,
            "dashboard" => Tab::Dashboard,
            "alerts" => Tab::Alerts,
            "chatbot" => Tab::Chatbot,
            _ => Tab::Home,
        }
    }

    /// Stable string key for this tab.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Dashboard => "dashboard",
            Tab::Alerts => "alerts",
            Tab::Chatbot => "chatbot",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Dashboard => "Dashboard",
            Tab::Alerts => "Alerts",
            Tab::Chatbot => "AI Chatbot",
        }
    }
}

/// Application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently active view
    pub active_tab: RwSignal<Tab>,
    /// Whether the mobile navigation menu is expanded
    pub menu_open: RwSignal<bool>,
    /// Error message to display (toast)
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_tab: create_rw_signal(Tab::Home),
            menu_open: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    /// Switch the active view. Navigating always collapses the mobile
    /// menu, so selecting a destination on a small screen closes it.
    pub fn set_tab(&self, next: Tab) {
        self.active_tab.set(next);
        self.menu_open.set(false);
    }

    /// Toggle the mobile navigation menu.
    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial view, honoring the optional local-storage override (an
/// operator/demo convenience, same mechanism as the API base override).
/// Unknown keys land on the landing page.
fn initial_tab() -> Tab {
    let key = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("alertindia_start_tab").ok().flatten());

    match key {
        Some(key) => Tab::from_key(&key),
        None => Tab::Home,
    }
}

/// Provide application state to the component tree
pub fn provide_app_state() {
    let state = AppState::new();
    state.active_tab.set(initial_tab());
    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_key_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_key(tab.key()), tab);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_home() {
        assert_eq!(Tab::from_key("unknown"), Tab::Home);
        assert_eq!(Tab::from_key(""), Tab::Home);
        assert_eq!(Tab::from_key("Dashboard"), Tab::Home);
    }

    #[test]
    fn test_set_tab_selects_each_view() {
        let runtime = create_runtime();
        let state = AppState::new();

        assert_eq!(state.active_tab.get_untracked(), Tab::Home);
        for tab in Tab::ALL {
            state.set_tab(tab);
            assert_eq!(state.active_tab.get_untracked(), tab);
        }

        runtime.dispose();
    }

    #[test]
    fn test_set_tab_closes_mobile_menu() {
        let runtime = create_runtime();
        let state = AppState::new();

        state.toggle_menu();
        assert!(state.menu_open.get_untracked());

        state.set_tab(Tab::Alerts);
        assert!(!state.menu_open.get_untracked());
        assert_eq!(state.active_tab.get_untracked(), Tab::Alerts);

        runtime.dispose();
    }

    #[test]
    fn test_toggle_menu_flips_flag() {
        let runtime = create_runtime();
        let state = AppState::new();

        assert!(!state.menu_open.get_untracked());
        state.toggle_menu();
        assert!(state.menu_open.get_untracked());
        state.toggle_menu();
        assert!(!state.menu_open.get_untracked());

        runtime.dispose();
    }
}
