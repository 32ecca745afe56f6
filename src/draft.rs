//! Draft Form Engine
//!
//! Holds the in-progress edit of one menu item and walks it through
//! hydrate -> edit -> submit. Every mutation re-runs validation; submit
//! is refused while errors remain and only one submit may be in flight.

use std::cell::RefCell;
use std::iter;
use std::rc::Rc;

use crate::commands::{GatewayError, MenuGateway};
use crate::models::{MenuItem, Price};
use crate::store::Liveness;
use crate::validation::{self, DraftField, FieldPath, ValidationErrors};

/// Where the engine is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum DraftPhase {
    /// Edit mode, hydration not started yet
    Empty,
    Hydrating,
    /// Fetching the source item failed (404 or otherwise)
    LoadFailed(GatewayError),
    Editing,
    Submitting,
    Submitted,
    /// Draft kept; the user may fix things and retry
    SubmitFailed(GatewayError),
}

impl DraftPhase {
    pub fn is_editable(&self) -> bool {
        matches!(self, DraftPhase::Editing | DraftPhase::SubmitFailed(_))
    }
}

/// A menu item under edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDraft {
    /// `None` = create mode
    pub source_id: Option<String>,
    pub item: MenuItem,
    pub validation_errors: ValidationErrors,
}

impl MenuDraft {
    pub fn error(&self, path: impl Into<FieldPath>) -> Option<&str> {
        self.validation_errors.get(&path.into()).map(String::as_str)
    }

    fn apply(&mut self, change: impl FnOnce(&mut MenuItem)) {
        change(&mut self.item);
        self.validation_errors = validation::validate(&self.item);
    }
}

/// What a `submit()` call did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Persisted; the caller should navigate away
    Saved(MenuItem),
    /// Blocked by validation, nothing sent
    Invalid,
    /// Not in a submittable phase (already submitting, not hydrated, ...)
    Ignored,
    Failed(GatewayError),
}

/// A validated payload on its way to the gateway
#[derive(Debug)]
pub struct PendingSubmit {
    payload: MenuItem,
    source_id: Option<String>,
}

#[derive(Debug)]
struct EngineState {
    phase: DraftPhase,
    draft: MenuDraft,
}

pub struct DraftFormEngine<G> {
    gateway: Rc<G>,
    state: Rc<RefCell<EngineState>>,
    liveness: Liveness,
}

impl<G> Clone for DraftFormEngine<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            state: Rc::clone(&self.state),
            liveness: self.liveness.clone(),
        }
    }
}

impl<G: MenuGateway> DraftFormEngine<G> {
    /// Create mode starts editing a blank item right away; edit mode
    /// (`source_id` given) waits for `hydrate()`.
    pub fn new(gateway: Rc<G>, source_id: Option<String>) -> Self {
        let phase = match source_id {
            Some(_) => DraftPhase::Empty,
            None => DraftPhase::Editing,
        };
        Self {
            gateway,
            state: Rc::new(RefCell::new(EngineState {
                phase,
                draft: MenuDraft { source_id, ..Default::default() },
            })),
            liveness: Liveness::default(),
        }
    }

    pub fn phase(&self) -> DraftPhase {
        self.state.borrow().phase.clone()
    }

    pub fn draft(&self) -> MenuDraft {
        self.state.borrow().draft.clone()
    }

    pub fn validation_errors(&self) -> ValidationErrors {
        self.state.borrow().draft.validation_errors.clone()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.borrow().draft.source_id.is_some()
    }

    pub fn submit_error(&self) -> Option<GatewayError> {
        match &self.state.borrow().phase {
            DraftPhase::SubmitFailed(err) => Some(err.clone()),
            _ => None,
        }
    }

    /// Text currently shown for `field`
    pub fn field_value(&self, field: DraftField) -> String {
        let state = self.state.borrow();
        let item = &state.draft.item;
        match field {
            DraftField::Name => item.name.clone(),
            DraftField::Description => item.description.clone(),
            DraftField::Price => item.price.to_string(),
            DraftField::Image => item.image.clone(),
            DraftField::Category => item.category.clone(),
        }
    }

    /// Load the source item into the draft (edit mode only)
    pub async fn hydrate(&self) {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = match (&state.phase, &state.draft.source_id) {
                (DraftPhase::Empty, Some(id)) => id.clone(),
                _ => return,
            };
            state.phase = DraftPhase::Hydrating;
            id
        };
        log::debug!("hydrating draft from menu item {}", id);

        let result = self.gateway.fetch_one(&id).await;
        if !self.liveness.is_alive() {
            log::warn!("draft source {} arrived after dispose, result dropped", id);
            return;
        }

        let mut state = self.state.borrow_mut();
        match result {
            Ok(item) => {
                state.draft.item = item;
                state.draft.validation_errors.clear();
                state.phase = DraftPhase::Editing;
            }
            Err(err) => {
                log::warn!("hydrating draft {} failed: {}", id, err);
                state.phase = DraftPhase::LoadFailed(err);
            }
        }
    }

    /// Run `change` against the draft if it is editable.
    /// Returns whether anything was applied.
    fn edit(&self, change: impl FnOnce(&mut MenuItem) -> bool) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.phase.is_editable() {
            log::debug!("draft edit ignored in phase {:?}", state.phase);
            return false;
        }
        let mut next = state.draft.item.clone();
        if !change(&mut next) {
            return false;
        }
        state.draft.apply(|item| *item = next);
        state.phase = DraftPhase::Editing;
        true
    }

    pub fn set_field(&self, field: DraftField, value: &str) -> bool {
        let value = value.to_string();
        self.edit(|item| {
            match field {
                DraftField::Name => item.name = value,
                DraftField::Description => item.description = value,
                DraftField::Price => item.price = Price::Text(value),
                DraftField::Image => item.image = value,
                DraftField::Category => item.category = value,
            }
            true
        })
    }

    pub fn append_size(&self) -> bool {
        self.edit(|item| {
            item.sizes = item
                .sizes
                .iter()
                .cloned()
                .chain(iter::once(String::new()))
                .collect();
            true
        })
    }

    /// Out-of-range indices are a no-op
    pub fn remove_size(&self, index: usize) -> bool {
        self.edit(|item| {
            if index >= item.sizes.len() {
                return false;
            }
            item.sizes = item
                .sizes
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, size)| size.clone())
                .collect();
            true
        })
    }

    /// Out-of-range indices are a no-op
    pub fn set_size(&self, index: usize, value: &str) -> bool {
        self.edit(|item| {
            if index >= item.sizes.len() {
                return false;
            }
            item.sizes = item
                .sizes
                .iter()
                .enumerate()
                .map(|(i, size)| if i == index { value.to_string() } else { size.clone() })
                .collect();
            true
        })
    }

    /// Validate, then create or update remotely.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(pending) => self.complete_submit(pending).await,
            Err(outcome) => outcome,
        }
    }

    /// Synchronous half of `submit()`: validate and move to `Submitting`.
    ///
    /// `Err` carries the outcome when nothing is to be sent.
    pub fn begin_submit(&self) -> Result<PendingSubmit, SubmitOutcome> {
        let mut state = self.state.borrow_mut();
        if state.phase == DraftPhase::Submitting {
            log::warn!("submit ignored: another submit is in flight");
            return Err(SubmitOutcome::Ignored);
        }
        if !state.phase.is_editable() {
            log::debug!("submit ignored in phase {:?}", state.phase);
            return Err(SubmitOutcome::Ignored);
        }
        let errors = validation::validate(&state.draft.item);
        if !errors.is_empty() {
            log::debug!("submit blocked by {} validation errors", errors.len());
            state.draft.validation_errors = errors;
            return Err(SubmitOutcome::Invalid);
        }
        state.draft.validation_errors.clear();
        state.phase = DraftPhase::Submitting;
        Ok(PendingSubmit {
            payload: state.draft.item.clone(),
            source_id: state.draft.source_id.clone(),
        })
    }

    /// Send a submit started by `begin_submit()` and record the result
    pub async fn complete_submit(&self, pending: PendingSubmit) -> SubmitOutcome {
        let PendingSubmit { payload, source_id } = pending;
        let result = match &source_id {
            Some(id) => self.gateway.update(id, &payload).await,
            None => self.gateway.create(&payload).await,
        };

        let outcome = match result {
            Ok(saved) => SubmitOutcome::Saved(saved),
            Err(err) => SubmitOutcome::Failed(err),
        };
        if !self.liveness.is_alive() {
            log::warn!("submit finished after dispose, draft state left as is");
            return outcome;
        }

        let mut state = self.state.borrow_mut();
        match &outcome {
            SubmitOutcome::Saved(saved) => {
                log::info!("menu item {} saved", saved.id().unwrap_or("?"));
                state.phase = DraftPhase::Submitted;
            }
            SubmitOutcome::Failed(err) => {
                log::error!("saving menu item failed: {}", err);
                state.phase = DraftPhase::SubmitFailed(err.clone());
            }
            SubmitOutcome::Invalid | SubmitOutcome::Ignored => {}
        }
        outcome
    }

    pub fn dispose(&self) {
        self.liveness.dispose();
    }
}
