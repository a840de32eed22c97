//! Alerts Page
//!
//! Live alert feed: one `/preview` fetch per mount rendered as a card
//! grid, plus the per-state movement strip.

use leptos::*;

use crate::api::{self, AlertRecord, StateAlert};
use crate::components::{AlertCard, CardSkeleton, ListSkeleton};
use crate::state::global::AppState;

/// Alerts page component
#[component]
pub fn Alerts() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (records, set_records) = create_signal(Vec::<AlertRecord>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (fetched_at, set_fetched_at) = create_signal(None::<String>);

    // One fetch per mount; switching tabs unmounts the page, so every
    // visit starts fresh.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_preview().await {
                Ok(items) => {
                    set_records.set(items);
                    set_fetched_at.set(Some(
                        chrono::Local::now().format("%H:%M:%S").to_string(),
                    ));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch alerts: {}", e).into());
                    state.show_error(&format!("Failed to fetch alerts: {}", e));
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-slate-50 py-12 px-4">
            <div class="max-w-6xl mx-auto space-y-12">
                <div>
                    // Header with fetch timestamp
                    <div class="flex items-end justify-between mb-8">
                        <h2 class="text-3xl font-bold text-slate-900">"Live Aadhaar Data"</h2>
                        {move || fetched_at.get().map(|at| view! {
                            <span class="text-sm text-slate-400">"Fetched at " {at}</span>
                        })}
                    </div>

                    {move || {
                        if loading.get() {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                                </div>
                            }
                            .into_view()
                        } else if let Some(message) = error.get() {
                            view! {
                                <div class="bg-red-50 border border-red-200 rounded-2xl p-6 text-center">
                                    <p class="text-red-700 font-medium">"Could not load alert data"</p>
                                    <p class="text-red-500 text-sm mt-1">{message}</p>
                                </div>
                            }
                            .into_view()
                        } else if records.get().is_empty() {
                            view! {
                                <p class="text-slate-400 text-center py-12">"No records to show"</p>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {records.get()
                                        .into_iter()
                                        .map(|record| view! { <AlertCard record=record /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }}
                </div>

                <StateMovement />
            </div>
        </div>
    }
}

/// Per-state change between the last two reporting rows.
#[component]
fn StateMovement() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (alerts, set_alerts) = create_signal(Vec::<StateAlert>::new());
    let (loading, set_loading) = create_signal(true);
    let (failed, set_failed) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_state_alerts().await {
                Ok(items) => {
                    set_alerts.set(items);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch state movement: {}", e).into(),
                    );
                    state.show_error(&format!("Failed to fetch state movement: {}", e));
                    set_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="bg-white rounded-3xl shadow-xl border border-purple-50 p-6">
            <h3 class="text-xl font-semibold text-slate-800 mb-4">"State Movement"</h3>

            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=4 /> }.into_view()
                } else if failed.get() {
                    view! {
                        <p class="text-slate-400 text-sm">"State movement is unavailable"</p>
                    }
                    .into_view()
                } else if alerts.get().is_empty() {
                    view! {
                        <p class="text-slate-400 text-sm">"Not enough reporting rows yet"</p>
                    }
                    .into_view()
                } else {
                    alerts.get()
                        .into_iter()
                        .map(|alert| {
                            let change_class = if alert.change < 0.0 {
                                "text-red-600"
                            } else {
                                "text-green-600"
                            };
                            view! {
                                <div class="flex items-center justify-between py-3 border-b
                                            border-slate-100 last:border-0">
                                    <div class="flex items-center gap-3">
                                        <span class="font-medium text-slate-700">{alert.state}</span>
                                        {alert.status.map(|status| view! {
                                            <span class=format!(
                                                "px-2 py-0.5 rounded-full text-xs font-semibold {}",
                                                status.badge_class()
                                            )>
                                                {status.label()}
                                            </span>
                                        })}
                                    </div>
                                    <span class=format!("font-semibold {}", change_class)>
                                        {format!("{:+.1}%", alert.change)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }
            }}
        </section>
    }
}
