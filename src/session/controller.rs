//! Serving scale controller
//!
//! Owns the recipe under inspection and re-derives the scaled view whenever the
//! serving count changes.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::signal::ServingSignal;
use super::state::ScaleState;
use crate::models::{RecipeSnapshot, RenderModel};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No recipe is open for inspection")]
    NoRecipeOpen,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// A recipe open for inspection
#[derive(Debug, Clone)]
pub struct OpenRecipe {
    snapshot: RecipeSnapshot,
    state: ScaleState,
    view: RenderModel,
    opened_at: DateTime<Utc>,
}

impl OpenRecipe {
    fn new(snapshot: RecipeSnapshot) -> Self {
        let state = ScaleState::new(snapshot.base_servings());
        let view = RenderModel::from_snapshot(&snapshot, state.base_servings(), state.current_servings());
        Self {
            snapshot,
            state,
            view,
            opened_at: Utc::now(),
        }
    }

    pub fn snapshot(&self) -> &RecipeSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> ScaleState {
        self.state
    }

    pub fn view(&self) -> &RenderModel {
        &self.view
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    fn recompute(&mut self) {
        self.view = RenderModel::from_snapshot(
            &self.snapshot,
            self.state.base_servings(),
            self.state.current_servings(),
        );
        tracing::debug!(
            "Rescaled '{}' to {} servings (factor {})",
            self.view.title,
            self.state.current_servings(),
            self.state.scale_factor()
        );
    }
}

#[derive(Debug, Clone, Default)]
pub enum ControllerState {
    #[default]
    Closed,
    Open(OpenRecipe),
}

/// Serving scale controller for one view session
///
/// At most one recipe is open at a time; opening another replaces it.
#[derive(Debug, Clone, Default)]
pub struct ServingController {
    state: ControllerState,
}

impl ServingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ControllerState::Open(_))
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn open_recipe(&self) -> Option<&OpenRecipe> {
        match &self.state {
            ControllerState::Open(open) => Some(open),
            ControllerState::Closed => None,
        }
    }

    fn open_mut(&mut self) -> SessionResult<&mut OpenRecipe> {
        match &mut self.state {
            ControllerState::Open(open) => Ok(open),
            ControllerState::Closed => Err(SessionError::NoRecipeOpen),
        }
    }

    /// Open a recipe at its own serving count
    pub fn open(&mut self, snapshot: RecipeSnapshot) -> RenderModel {
        if let ControllerState::Open(previous) = &self.state {
            tracing::info!("Replacing open recipe '{}'", previous.view.title);
        }

        let open = OpenRecipe::new(snapshot);
        tracing::info!(
            "Opened recipe '{}' at {} servings",
            open.view.title,
            open.state.base_servings()
        );
        let view = open.view.clone();
        self.state = ControllerState::Open(open);
        view
    }

    pub fn increment(&mut self) -> SessionResult<RenderModel> {
        let open = self.open_mut()?;
        open.state.increment();
        open.recompute();
        Ok(open.view.clone())
    }

    /// Remove one serving; at 1 serving this is a silent no-op
    pub fn decrement(&mut self) -> SessionResult<RenderModel> {
        let open = self.open_mut()?;
        if open.state.decrement() {
            open.recompute();
        }
        Ok(open.view.clone())
    }

    pub fn set_servings(&mut self, servings: i64) -> SessionResult<RenderModel> {
        let open = self.open_mut()?;
        if servings < 1 {
            tracing::warn!("Serving count {} is not positive, using 1", servings);
        }
        open.state.set(servings);
        open.recompute();
        Ok(open.view.clone())
    }

    pub fn apply(&mut self, signal: ServingSignal) -> SessionResult<RenderModel> {
        match signal {
            ServingSignal::Increment => self.increment(),
            ServingSignal::Decrement => self.decrement(),
            ServingSignal::Set(n) => self.set_servings(n),
        }
    }

    pub fn view(&self) -> SessionResult<&RenderModel> {
        self.open_recipe()
            .map(OpenRecipe::view)
            .ok_or(SessionError::NoRecipeOpen)
    }

    /// Close the inspection view, discarding the snapshot
    ///
    /// Returns the snapshot that was open, if any.
    pub fn close(&mut self) -> Option<RecipeSnapshot> {
        match std::mem::take(&mut self.state) {
            ControllerState::Open(open) => {
                tracing::info!("Closed recipe '{}'", open.view.title);
                Some(open.snapshot)
            }
            ControllerState::Closed => None,
        }
    }
}
