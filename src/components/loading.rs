//! Loading Component
//!
//! Skeleton placeholders shown while the first list request is outstanding.

use leptos::*;

/// Card-shaped skeletons filling the clinic grid
#[component]
pub fn CardGridSkeleton(
    #[prop(default = 6)]
    count: usize,
) -> impl IntoView {
    view! {
        {(0..count).map(|_| view! {
            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 animate-pulse">
                <div class="h-5 bg-gray-700 rounded w-2/3 mb-3" />
                <div class="h-4 bg-gray-700 rounded w-1/2 mb-2" />
                <div class="h-4 bg-gray-700 rounded w-1/3" />
            </div>
        }).collect_view()}
    }
}
