//! Loading Component
//!
//! Skeleton states shown while a fetch is outstanding.

use leptos::*;

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-6 border border-slate-100 animate-pulse">
            <div class="h-4 bg-slate-200 rounded w-1/3 mb-4" />
            <div class="h-3 bg-slate-200 rounded w-1/2 mb-6" />
            <div class="h-3 bg-slate-200 rounded w-2/3 mb-2" />
            <div class="h-3 bg-slate-200 rounded w-1/2" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-slate-200 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
