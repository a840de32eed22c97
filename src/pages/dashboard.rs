//! Dashboard Page
//!
//! Analytics view: severity stat tiles, the monthly update trend, state
//! performance bars, and the status distribution pie.

use leptos::*;

use crate::api::{self, StatsSummary};
use crate::components::{BarChart, PieChart, SeriesPoint, StatCard, StatTone, TrendChart};
use crate::state::global::AppState;

/// Monthly update counts shown in the trend chart. The reporting feed
/// only exposes current snapshots, so the trend series is fixed.
fn trend_series() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Jan", 4000.0),
        SeriesPoint::new("Feb", 4500.0),
        SeriesPoint::new("Mar", 3800.0),
        SeriesPoint::new("Apr", 5100.0),
        SeriesPoint::new("May", 4800.0),
        SeriesPoint::new("Jun", 6200.0),
    ]
}

/// Per-state update counts for the bar chart.
fn state_series() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("MH", 12400.0),
        SeriesPoint::new("KA", 10200.0),
        SeriesPoint::new("DL", 8500.0),
        SeriesPoint::new("TN", 9100.0),
        SeriesPoint::new("UP", 7600.0),
        SeriesPoint::new("GJ", 6400.0),
        SeriesPoint::new("WB", 5200.0),
    ]
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (stats, set_stats) = create_signal(None::<StatsSummary>);

    // Fetch severity counts on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(summary) => {
                    set_stats.set(Some(summary));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stats: {}", e).into());
                    state.show_error(&format!("Failed to fetch stats: {}", e));
                }
            }
        });
    });

    let trend = create_rw_signal(trend_series());
    let states = create_rw_signal(state_series());

    // Status distribution for the pie, derived from the stats summary
    let distribution = create_memo(move |_| {
        stats
            .get()
            .map(|s| {
                vec![
                    SeriesPoint::new("Critical", s.critical as f64),
                    SeriesPoint::new("Warning", s.warning as f64),
                    SeriesPoint::new("Stable", s.stable as f64),
                ]
            })
            .unwrap_or_default()
    });

    let total = create_memo(move |_| stats.get().map(|s| s.total));
    let critical = create_memo(move |_| stats.get().map(|s| s.critical));
    let warning = create_memo(move |_| stats.get().map(|s| s.warning));
    let stable = create_memo(move |_| stats.get().map(|s| s.stable));

    view! {
        <div class="min-h-screen bg-slate-50 py-12 px-4">
            <div class="max-w-7xl mx-auto space-y-8">
                // Page header
                <div>
                    <h2 class="text-2xl font-bold text-slate-800">"Analytics Dashboard"</h2>
                    <p class="text-slate-500">"Real-time Aadhaar update metrics."</p>
                </div>

                // Severity tiles
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                    <StatCard label="Total Records" value=total />
                    <StatCard label="Critical" value=critical tone=StatTone::Critical />
                    <StatCard label="Warning" value=warning tone=StatTone::Warning />
                    <StatCard label="Stable" value=stable tone=StatTone::Stable />
                </div>

                // Trend chart
                <section class="bg-white rounded-3xl shadow-xl border border-purple-50 p-6">
                    <h3 class="text-xl font-semibold text-slate-800 mb-4">"Update Trend"</h3>
                    <TrendChart points=trend />
                </section>

                // Two column layout for state bars and status pie
                <div class="grid lg:grid-cols-2 gap-8">
                    <section class="bg-white rounded-3xl shadow-xl border border-purple-50 p-6">
                        <h3 class="text-xl font-semibold text-slate-800 mb-4">"State Performance"</h3>
                        <BarChart points=states />
                    </section>

                    <section class="bg-white rounded-3xl shadow-xl border border-purple-50 p-6">
                        <h3 class="text-xl font-semibold text-slate-800 mb-4">"Status Distribution"</h3>
                        <PieChart points=distribution />
                    </section>
                </div>
            </div>
        </div>
    }
}
