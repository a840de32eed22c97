//! Stat Card Component
//!
//! Dashboard tile showing one summary count.

use leptos::*;

/// Visual tone of a stat tile.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Critical,
    Warning,
    Stable,
}

impl StatTone {
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            StatTone::Neutral => ("bg-purple-50", "text-purple-600"),
            StatTone::Critical => ("bg-red-50", "text-red-600"),
            StatTone::Warning => ("bg-amber-50", "text-amber-600"),
            StatTone::Stable => ("bg-green-50", "text-green-600"),
        }
    }
}

/// Summary tile. Shows an em-dash until the value arrives.
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<Option<u64>>,
    #[prop(default = StatTone::Neutral)] tone: StatTone,
) -> impl IntoView {
    let (bg, fg) = tone.classes();

    view! {
        <div class="p-6 rounded-2xl border border-slate-100 bg-white shadow-sm flex items-center gap-4">
            <div class=format!("w-12 h-12 rounded-xl flex items-center justify-center {} {}", bg, fg)>
                <span class="text-xl">"📊"</span>
            </div>
            <div>
                <p class="text-slate-500 text-sm font-medium">{label}</p>
                <h3 class="text-2xl font-bold text-slate-800">
                    {move || {
                        value.get()
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "—".to_string())
                    }}
                </h3>
            </div>
        </div>
    }
}
