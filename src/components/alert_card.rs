//! Alert Card Component
//!
//! One card per preview record in the alert feed grid.

use leptos::*;

use crate::api::AlertRecord;

/// Card showing a single reporting unit's snapshot.
#[component]
pub fn AlertCard(record: AlertRecord) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-6 shadow-md border border-slate-100">
            // Header with state name and status badge
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="font-bold text-lg text-slate-800">{record.state}</h3>
                    <p class="text-sm text-slate-500">{record.district}</p>
                </div>
                {record.status.map(|status| view! {
                    <span class=format!(
                        "px-2 py-1 rounded-full text-xs font-semibold {}",
                        status.badge_class()
                    )>
                        {status.label()}
                    </span>
                })}
            </div>

            <div class="mt-3 space-y-1 text-sm text-slate-700">
                <p>"Pincode: " {record.pincode}</p>
                <p>"Age 5-17: " {record.demo_age_5_17.to_string()}</p>
                <p>"Age 17+: " {record.demo_age_17_plus.to_string()}</p>
            </div>
        </div>
    }
}
