//! Navigation Component
//!
//! Header bar with brand, tab links, and the collapsible mobile menu.

use leptos::*;

use crate::state::global::{AppState, Tab};

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <nav class="sticky top-0 z-40 bg-white/80 backdrop-blur border-b border-purple-100">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <button
                        on:click=move |_| state.set_tab(Tab::Home)
                        class="flex items-center space-x-2"
                    >
                        <span class="text-2xl">"🔔"</span>
                        <span class="text-xl font-bold text-purple-800">"AlertIndia"</span>
                    </button>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        {Tab::ALL
                            .into_iter()
                            .map(|tab| view! { <NavButton tab=tab /> })
                            .collect_view()}
                    </div>

                    // Mobile menu toggle
                    <div class="md:hidden">
                        <button
                            on:click=move |_| state.toggle_menu()
                            class="p-2 text-slate-700"
                        >
                            {move || if state.menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            {move || {
                if state.menu_open.get() {
                    view! {
                        <div class="md:hidden bg-white border-b border-purple-100 px-4 py-4 space-y-2 shadow-lg">
                            {Tab::ALL
                                .into_iter()
                                .map(|tab| view! { <MobileNavButton tab=tab /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavButton(tab: Tab) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let is_active = create_memo(move |_| state.active_tab.get() == tab);

    view! {
        <button
            on:click=move |_| state.set_tab(tab)
            class=move || {
                let base = "px-4 py-2 rounded-full text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-purple-100 text-purple-700", base)
                } else {
                    format!("{} text-slate-600 hover:text-purple-700 hover:bg-purple-50", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}

/// Full-width link for the mobile menu. Selecting a destination closes
/// the menu (handled by `AppState::set_tab`).
#[component]
fn MobileNavButton(tab: Tab) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <button
            on:click=move |_| state.set_tab(tab)
            class="block w-full text-left px-4 py-3 rounded-xl font-medium text-slate-600
                   hover:bg-purple-50 hover:text-purple-700 transition-colors"
        >
            {tab.label()}
        </button>
    }
}
