//! Header and Footer Components

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <h1>"Cafe"</h1>
            <nav class="header-nav">
                <button class="nav-btn" on:click=move |_| ctx.navigate(Page::List)>"Menu"</button>
                <button class="nav-btn" on:click=move |_| ctx.navigate(Page::Create)>"New item"</button>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <span>"© Cafe"</span>
        </footer>
    }
}
