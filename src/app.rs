//! App Root Component
//!
//! Shell composing the navigation bar, the active view, the footer, and
//! toast notifications.

use leptos::*;

use crate::components::{Navbar, Toast};
use crate::pages::{Alerts, Chatbot, Dashboard, Home};
use crate::state::global::{provide_app_state, AppState, Tab};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide shell state to all components
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-900 flex flex-col">
            // Navigation header
            <Navbar />

            // Active view, with a per-view class hook for styling
            <main class=move || format!("flex-1 view-{}", state.active_tab.get().key())>
                {move || match state.active_tab.get() {
                    Tab::Home => view! { <Home /> }.into_view(),
                    Tab::Dashboard => view! { <Dashboard /> }.into_view(),
                    Tab::Alerts => view! { <Alerts /> }.into_view(),
                    Tab::Chatbot => view! { <Chatbot /> }.into_view(),
                }}
            </main>

            // Footer
            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Static footer
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-purple-100 py-8">
            <div class="max-w-7xl mx-auto px-4 text-center">
                <div class="flex justify-center items-center gap-2 mb-2">
                    <span class="text-lg">"🔔"</span>
                    <span class="font-bold text-slate-700">"AlertIndia"</span>
                </div>
                <p class="text-slate-400 text-sm">"© 2026 National Aadhaar Intelligence Platform."</p>
            </div>
        </footer>
    }
}
