//! Placeholder cards shown while the menu loads

use leptos::prelude::*;

#[component]
pub fn MenuCardSkeleton(cards: usize) -> impl IntoView {
    (0..cards)
        .map(|_| {
            view! {
                <div class="card-skeleton">
                    <div class="left-col">
                        <div class="skeleton skeleton-circle"></div>
                    </div>
                    <div class="right-col">
                        {(0..5).map(|_| view! { <div class="skeleton skeleton-line"></div> }).collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view()
}
