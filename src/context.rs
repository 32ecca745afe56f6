//! Application Context
//!
//! UI-level state (current page, search query, revision counter) lives in
//! a `reactive_stores` store; the menu collection and gateway are held in
//! local `StoredValue`s and shared through context.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{ReqwestTransport, RemoteMenuGateway};
use crate::config::AppConfig;
use crate::store::MenuCollectionStore;

/// Gateway used by the running app
pub type AppGateway = RemoteMenuGateway<ReqwestTransport>;

/// Which screen is shown
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Page {
    #[default]
    List,
    Detail(String),
    Create,
    Edit(String),
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub page: Page,
    /// Live search box contents
    pub query: String,
    /// Bumped whenever core state changes outside the reactive graph
    pub revision: u32,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub ui: Store<UiState>,
    gateway: StoredValue<Rc<AppGateway>, LocalStorage>,
    menu: StoredValue<MenuCollectionStore<AppGateway>, LocalStorage>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let gateway = Rc::new(RemoteMenuGateway::new(ReqwestTransport::new(
            config.api_base_url.clone(),
        )));
        let menu = MenuCollectionStore::new(Rc::clone(&gateway));
        Self {
            ui: Store::new(UiState::default()),
            gateway: StoredValue::new_local(gateway),
            menu: StoredValue::new_local(menu),
        }
    }

    pub fn gateway(&self) -> Rc<AppGateway> {
        self.gateway.get_value()
    }

    pub fn menu(&self) -> MenuCollectionStore<AppGateway> {
        self.menu.get_value()
    }

    /// Re-render everything reading core state
    pub fn refresh(&self) {
        self.ui.revision().update(|v| *v += 1);
    }

    /// Subscribe the current reactive scope to `refresh()`
    pub fn track(&self) {
        self.ui.revision().track();
    }

    pub fn navigate(&self, page: Page) {
        self.ui.page().set(page);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
