//! Menu State Store
//!
//! Owns the loaded menu collection and the single-item detail fetch.
//! Handles are cheap to clone; clones share state. All state lives on
//! the UI thread, so `Rc`/`RefCell` is enough and no borrow is ever held
//! across an `.await`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::commands::{GatewayError, GatewayResult, MenuGateway};
use crate::models::MenuItem;
use crate::search;

/// Lifecycle of one independent fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(GatewayError),
}

/// Set once the owning view is torn down; late async results are dropped.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn dispose(&self) {
        self.0.set(false);
    }
}

#[derive(Debug, Default)]
struct CollectionState {
    items: Vec<MenuItem>,
    load_state: LoadState,
}

/// The authoritative in-memory menu collection
pub struct MenuCollectionStore<G> {
    gateway: Rc<G>,
    state: Rc<RefCell<CollectionState>>,
    liveness: Liveness,
}

impl<G> Clone for MenuCollectionStore<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            state: Rc::clone(&self.state),
            liveness: self.liveness.clone(),
        }
    }
}

impl<G: MenuGateway> MenuCollectionStore<G> {
    pub fn new(gateway: Rc<G>) -> Self {
        Self {
            gateway,
            state: Rc::default(),
            liveness: Liveness::default(),
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state.borrow().load_state.clone()
    }

    #[cfg(test)]
    pub fn items(&self) -> Vec<MenuItem> {
        self.state.borrow().items.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items matching `query` (see `search::project`)
    pub fn search(&self, query: &str) -> Vec<MenuItem> {
        let state = self.state.borrow();
        search::project(&state.items, query).into_iter().cloned().collect()
    }

    /// Fetch the full menu and replace the collection with it.
    ///
    /// On failure the previous collection stays in place. Racing loads
    /// are not cancelled: whichever resolves last wins.
    pub async fn load(&self) {
        self.state.borrow_mut().load_state = LoadState::Loading;
        log::debug!("menu load started");

        let result = self.gateway.fetch_all().await;
        if !self.liveness.is_alive() {
            log::warn!("menu load finished after dispose, result dropped");
            return;
        }

        let mut state = self.state.borrow_mut();
        match result {
            Ok(items) => {
                log::info!("menu loaded: {} items", items.len());
                state.items = items;
                state.load_state = LoadState::Loaded;
            }
            Err(err) => {
                log::error!("menu load failed: {}", err);
                state.load_state = LoadState::Failed(err);
            }
        }
    }

    /// Delete remotely, then drop the item locally.
    ///
    /// The local collection is only touched after the server confirms.
    pub async fn remove_item(&self, id: &str) -> GatewayResult<()> {
        if let Err(err) = self.gateway.remove(id).await {
            log::warn!("delete of menu item {} failed: {}", id, err);
            return Err(err);
        }
        if !self.liveness.is_alive() {
            log::warn!("delete of {} confirmed after dispose, collection left as is", id);
            return Ok(());
        }
        self.state
            .borrow_mut()
            .items
            .retain(|item| item.id() != Some(id));
        log::info!("menu item {} deleted", id);
        Ok(())
    }

    pub fn dispose(&self) {
        self.liveness.dispose();
    }
}

#[derive(Debug, Default)]
struct DetailState {
    item: Option<MenuItem>,
    load_state: LoadState,
}

/// Single-item fetch backing the product page
pub struct MenuItemDetail<G> {
    gateway: Rc<G>,
    id: String,
    state: Rc<RefCell<DetailState>>,
    liveness: Liveness,
}

impl<G> Clone for MenuItemDetail<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            id: self.id.clone(),
            state: Rc::clone(&self.state),
            liveness: self.liveness.clone(),
        }
    }
}

impl<G: MenuGateway> MenuItemDetail<G> {
    pub fn new(gateway: Rc<G>, id: impl Into<String>) -> Self {
        Self {
            gateway,
            id: id.into(),
            state: Rc::default(),
            liveness: Liveness::default(),
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state.borrow().load_state.clone()
    }

    pub fn item(&self) -> Option<MenuItem> {
        self.state.borrow().item.clone()
    }

    pub async fn load(&self) {
        self.state.borrow_mut().load_state = LoadState::Loading;

        let result = self.gateway.fetch_one(&self.id).await;
        if !self.liveness.is_alive() {
            log::warn!("menu item {} arrived after dispose, result dropped", self.id);
            return;
        }

        let mut state = self.state.borrow_mut();
        match result {
            Ok(item) => {
                state.item = Some(item);
                state.load_state = LoadState::Loaded;
            }
            Err(err) => {
                if err.is_not_found() {
                    log::info!("menu item {} not found", self.id);
                } else {
                    log::error!("loading menu item {} failed: {}", self.id, err);
                }
                state.load_state = LoadState::Failed(err);
            }
        }
    }

    pub fn dispose(&self) {
        self.liveness.dispose();
    }
}
