//! Menu Card Component
//!
//! One menu item with its size picker and item actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, Page};
use crate::models::MenuItem;

#[component]
pub fn MenuCard(
    item: MenuItem,
    /// Shows the delete button when set; receives the item id
    #[prop(optional)]
    on_delete: Option<Callback<String>>,
    /// A delete for this item is in flight
    #[prop(optional)]
    deleting: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let (selected_size, set_selected_size) = signal(item.sizes.first().cloned());
    let id = item.id.clone().unwrap_or_default();

    let sizes = item
        .sizes
        .iter()
        .cloned()
        .map(|size| {
            let label = size.clone();
            let is_selected = {
                let size = size.clone();
                move || selected_size.get().as_deref() == Some(size.as_str())
            };
            view! {
                <button
                    type="button"
                    class=move || if is_selected() { "size-btn active" } else { "size-btn" }
                    on:click=move |_| set_selected_size.set(Some(size.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let actions = {
        let view_id = id.clone();
        let edit_id = id.clone();
        let delete_id = id.clone();
        view! {
            <div class="card-actions">
                <button class="button" on:click=move |_| ctx.navigate(Page::Detail(view_id.clone()))>"View"</button>
                <button class="button" on:click=move |_| ctx.navigate(Page::Edit(edit_id.clone()))>"Edit"</button>
                {on_delete.map(|on_delete| view! {
                    <DeleteConfirmButton
                        on_confirm=move |_| on_delete.run(delete_id.clone())
                        disabled=deleting
                    />
                })}
            </div>
        }
    };

    view! {
        <div class="menu-card">
            <img class="avatar" src=item.image.clone() alt=item.name.clone() />
            <div class="info">
                <h3>{item.name.clone()}</h3>
                <p>{item.description.clone()}</p>
                <p class="price">"$" {item.price.to_string()}</p>
                <p class="category">{item.category.clone()}</p>
                <div class="size-row">{sizes}</div>
            </div>
            {actions}
        </div>
    }
}
