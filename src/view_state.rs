//! View Status
//!
//! Folds store and draft states into what a screen should render.
//! Pure mapping; nothing here is stored.

use crate::commands::GatewayError;
use crate::draft::DraftPhase;
use crate::store::LoadState;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    /// Render skeleton placeholders
    Loading,
    /// Loaded, nothing to show
    Empty,
    Ready,
    /// Dedicated not-found view
    NotFound,
    Error(String),
}

fn failure(err: &GatewayError) -> ViewStatus {
    if err.is_not_found() {
        ViewStatus::NotFound
    } else {
        ViewStatus::Error(err.to_string())
    }
}

/// Menu list screen. `Idle` counts as loading: the fetch is about to start.
pub fn list_status(state: &LoadState, item_count: usize) -> ViewStatus {
    match state {
        LoadState::Idle | LoadState::Loading => ViewStatus::Loading,
        LoadState::Loaded if item_count == 0 => ViewStatus::Empty,
        LoadState::Loaded => ViewStatus::Ready,
        LoadState::Failed(err) => ViewStatus::Error(err.to_string()),
    }
}

/// Single product screen
pub fn detail_status(state: &LoadState) -> ViewStatus {
    match state {
        LoadState::Idle | LoadState::Loading => ViewStatus::Loading,
        LoadState::Loaded => ViewStatus::Ready,
        LoadState::Failed(err) => failure(err),
    }
}

/// Create/edit form. Submit failures stay `Ready`: the form is still
/// shown and the error is displayed on top of it.
pub fn form_status(phase: &DraftPhase) -> ViewStatus {
    match phase {
        DraftPhase::Empty | DraftPhase::Hydrating => ViewStatus::Loading,
        DraftPhase::LoadFailed(err) => failure(err),
        DraftPhase::Editing
        | DraftPhase::Submitting
        | DraftPhase::Submitted
        | DraftPhase::SubmitFailed(_) => ViewStatus::Ready,
    }
}
