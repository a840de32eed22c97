//! Landing Page
//!
//! Hero section with calls to action and the feature overview.

use leptos::*;

use crate::state::global::{AppState, Tab};

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="min-h-screen bg-[#f8f7ff]">
            <div class="max-w-7xl mx-auto px-4 pt-16 lg:pt-24 pb-20">
                // Hero
                <div class="max-w-2xl space-y-8">
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/80
                                border border-purple-200 shadow-sm text-purple-700 text-xs
                                font-bold tracking-wide uppercase">
                        "National Intelligence System"
                    </div>

                    <h1 class="text-5xl lg:text-6xl font-bold leading-tight text-slate-900">
                        "Monitor Aadhaar "
                        <span class="text-purple-600">"Updates in Real Time"</span>
                    </h1>

                    <p class="text-lg text-slate-600 leading-relaxed">
                        "Get data-driven insights and track Aadhaar activities across India \
                         instantly using our advanced AI-powered analytics platform."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 pt-2">
                        <button
                            on:click=move |_| state.set_tab(Tab::Dashboard)
                            class="px-8 py-4 bg-purple-600 hover:bg-purple-700 text-white
                                   rounded-full shadow-lg font-semibold transition-colors"
                        >
                            "View Dashboard"
                        </button>
                        <button
                            on:click=move |_| state.set_tab(Tab::Alerts)
                            class="px-8 py-4 bg-white border border-purple-200 text-purple-700
                                   hover:bg-purple-50 rounded-full shadow font-semibold
                                   transition-colors"
                        >
                            "Live Alerts"
                        </button>
                    </div>
                </div>

                // Feature cards
                <div class="mt-20 grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon="📈"
                        title="Interactive Graphs"
                        description="Visualize trends with dynamic charts and real-time data updates."
                    />
                    <FeatureCard
                        icon="💬"
                        title="AI Chatbot Insights"
                        description="Get instant answers with our AI assistant trained on national data."
                    />
                    <FeatureCard
                        icon="🔔"
                        title="Real-Time Alerts"
                        description="Receive instant Aadhaar activity notifications and risk warnings."
                    />
                </div>
            </div>
        </div>
    }
}

/// One feature highlight card
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-3xl p-8 border border-purple-100 shadow-lg">
            <div class="w-14 h-14 rounded-2xl bg-purple-100 flex items-center justify-center mb-6">
                <span class="text-2xl">{icon}</span>
            </div>
            <h3 class="text-xl font-bold text-slate-900 mb-3">{title}</h3>
            <p class="text-slate-600 leading-relaxed">{description}</p>
        </div>
    }
}
