//! Test Doubles
//!
//! In-memory `MenuGateway` that records calls and can fail or stall on demand.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::commands::{GatewayError, GatewayResult, MenuGateway};
use crate::models::{MenuItem, Price};

pub fn make_item(id: &str, name: &str) -> MenuItem {
    MenuItem {
        id: Some(id.to_string()),
        name: name.to_string(),
        ..Default::default()
    }
}

/// A menu item that passes validation
pub fn complete_item(id: &str, name: &str) -> MenuItem {
    MenuItem {
        id: Some(id.to_string()),
        name: name.to_string(),
        description: format!("{} from the bar", name),
        price: Price::from("4.50"),
        image: format!("https://cdn.example.com/{}.png", id),
        category: "coffee".to_string(),
        sizes: vec!["S".to_string(), "L".to_string()],
    }
}

#[derive(Default)]
pub struct FakeGateway {
    items: RefCell<Vec<MenuItem>>,
    next_error: RefCell<Option<GatewayError>>,
    scripted_lists: RefCell<VecDeque<(usize, Vec<MenuItem>)>>,
    delayed: Cell<bool>,
    calls: RefCell<HashMap<&'static str, usize>>,
    last_payload: RefCell<Option<MenuItem>>,
    next_id: Cell<u32>,
}

impl FakeGateway {
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(100),
            ..Default::default()
        }
    }

    pub fn set_items(&self, items: Vec<MenuItem>) {
        *self.items.borrow_mut() = items;
    }

    /// The next call fails with `err`
    pub fn fail_next(&self, err: GatewayError) {
        *self.next_error.borrow_mut() = Some(err);
    }

    /// Every call yields once before answering, so it is observably in flight
    pub fn set_delayed(&self, delayed: bool) {
        self.delayed.set(delayed);
    }

    /// Queue an answer for the next `fetch_all`, given after `yields` yields
    pub fn script_fetch_all(&self, yields: usize, items: Vec<MenuItem>) {
        self.scripted_lists.borrow_mut().push_back((yields, items));
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.borrow().get(method).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    /// Body of the last create/update
    pub fn last_payload(&self) -> Option<MenuItem> {
        self.last_payload.borrow().clone()
    }

    fn record(&self, method: &'static str) {
        *self.calls.borrow_mut().entry(method).or_insert(0) += 1;
    }

    async fn enter(&self, method: &'static str) -> GatewayResult<()> {
        self.record(method);
        if self.delayed.get() {
            tokio::task::yield_now().await;
        }
        match self.next_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(id: &str) -> GatewayError {
        GatewayError::NotFound { id: id.to_string() }
    }
}

#[async_trait(?Send)]
impl MenuGateway for FakeGateway {
    async fn fetch_all(&self) -> GatewayResult<Vec<MenuItem>> {
        let scripted = self.scripted_lists.borrow_mut().pop_front();
        if let Some((yields, items)) = scripted {
            self.record("fetch_all");
            for _ in 0..yields {
                tokio::task::yield_now().await;
            }
            return Ok(items);
        }
        self.enter("fetch_all").await?;
        Ok(self.items.borrow().clone())
    }

    async fn fetch_one(&self, id: &str) -> GatewayResult<MenuItem> {
        self.enter("fetch_one").await?;
        self.items
            .borrow()
            .iter()
            .find(|item| item.id() == Some(id))
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, item: &MenuItem) -> GatewayResult<MenuItem> {
        self.enter("create").await?;
        *self.last_payload.borrow_mut() = Some(item.clone());
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = MenuItem { id: Some(id.to_string()), ..item.clone() };
        self.items.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, item: &MenuItem) -> GatewayResult<MenuItem> {
        self.enter("update").await?;
        *self.last_payload.borrow_mut() = Some(item.clone());
        let mut items = self.items.borrow_mut();
        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == Some(id))
            .ok_or_else(|| Self::not_found(id))?;
        *slot = MenuItem { id: Some(id.to_string()), ..item.clone() };
        Ok(slot.clone())
    }

    async fn remove(&self, id: &str) -> GatewayResult<()> {
        self.enter("remove").await?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| item.id() != Some(id));
        if items.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
