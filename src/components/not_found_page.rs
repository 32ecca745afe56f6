use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404"</h2>
            <p>"Menu item not found"</p>
        </div>
    }
}
