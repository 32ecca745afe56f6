//! Product Page Component
//!
//! Fetches one menu item by id; a 404 gets the dedicated not-found view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{MenuCard, MenuCardSkeleton, NotFoundPage};
use crate::context::use_app_context;
use crate::store::MenuItemDetail;
use crate::view_state::{detail_status, ViewStatus};

#[component]
pub fn ProductPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let detail = StoredValue::new_local(MenuItemDetail::new(ctx.gateway(), id));

    let loader = detail.get_value();
    spawn_local(async move {
        loader.load().await;
        ctx.refresh();
    });
    on_cleanup(move || {
        detail.try_with_value(|d| d.dispose());
    });

    view! {
        <div class="product-page">
            {move || {
                ctx.track();
                let detail = detail.get_value();
                match detail_status(&detail.load_state()) {
                    ViewStatus::Loading => view! { <MenuCardSkeleton cards=1 /> }.into_any(),
                    ViewStatus::NotFound => view! { <NotFoundPage /> }.into_any(),
                    ViewStatus::Error(_) => view! {
                        <p class="error">"Failed to load menu item. Please try again later."</p>
                    }
                    .into_any(),
                    ViewStatus::Empty | ViewStatus::Ready => {
                        detail.item().map(|item| view! { <MenuCard item=item /> }).into_any()
                    }
                }
            }}
        </div>
    }
}
