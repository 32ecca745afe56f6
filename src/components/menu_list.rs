//! Menu List Component
//!
//! Loads the collection on mount, filters it by the search box and
//! handles deletes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{MenuCard, MenuCardSkeleton};
use crate::context::{use_app_context, UiStateStoreFields};
use crate::store::LoadState;
use crate::view_state::{list_status, ViewStatus};

const SKELETON_CARDS: usize = 6;

#[component]
pub fn MenuList() -> impl IntoView {
    let ctx = use_app_context();
    let (delete_error, set_delete_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal::<Option<String>>(None);

    let reload = move || {
        let menu = ctx.menu();
        spawn_local(async move {
            menu.load().await;
            ctx.refresh();
        });
    };

    // Load on mount; a reload fully replaces what was there
    Effect::new(move |_| reload());

    let can_retry = move || {
        ctx.track();
        matches!(ctx.menu().load_state(), LoadState::Failed(err) if err.is_retryable())
    };

    let on_delete = Callback::new(move |id: String| {
        set_delete_error.set(None);
        set_deleting.set(Some(id.clone()));
        let menu = ctx.menu();
        spawn_local(async move {
            if let Err(err) = menu.remove_item(&id).await {
                set_delete_error.set(Some(format!("Could not delete item: {}", err)));
            }
            set_deleting.set(None);
            ctx.refresh();
        });
    });

    let status = move || {
        ctx.track();
        let menu = ctx.menu();
        list_status(&menu.load_state(), menu.len())
    };

    view! {
        <div class="menu-list">
            <input
                type="search"
                class="search-input"
                placeholder="Search by name..."
                prop:value=move || ctx.ui.query().get()
                on:input=move |ev| ctx.ui.query().set(event_target_value(&ev))
            />

            {move || delete_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            {move || match status() {
                ViewStatus::Loading => view! { <MenuCardSkeleton cards=SKELETON_CARDS /> }.into_any(),
                ViewStatus::Empty => view! { <p class="empty">"No menu items yet."</p> }.into_any(),
                ViewStatus::Error(msg) => view! {
                    <div class="load-error">
                        <p class="error">"Error: " {msg}</p>
                        <Show when=can_retry>
                            <button class="btn-retry" on:click=move |_| reload()>"Retry"</button>
                        </Show>
                    </div>
                }
                .into_any(),
                ViewStatus::NotFound | ViewStatus::Ready => {
                    let query = ctx.ui.query().get();
                    let items = ctx.menu().search(&query);
                    if items.is_empty() {
                        return view! { <p class="empty">"Nothing matches your search."</p> }.into_any();
                    }
                    let in_flight = deleting.get();
                    items
                        .into_iter()
                        .map(|item| {
                            let is_deleting = in_flight.is_some() && in_flight == item.id;
                            view! { <MenuCard item=item on_delete=on_delete deleting=is_deleting /> }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
