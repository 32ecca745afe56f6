//! Cafe Menu App
//!
//! Root component: header, current page, footer.

use leptos::prelude::*;

use crate::components::{Footer, Header, MenuForm, MenuList, ProductPage};
use crate::config::AppConfig;
use crate::context::{AppContext, Page, UiStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match ctx.ui.page().get() {
                    Page::List => view! { <MenuList /> }.into_any(),
                    Page::Detail(id) => view! { <ProductPage id=id /> }.into_any(),
                    Page::Create => view! { <MenuForm source_id=None /> }.into_any(),
                    Page::Edit(id) => view! { <MenuForm source_id=Some(id) /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
