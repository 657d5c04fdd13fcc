//! Serving scale state
//!
//! Base and current servings for the recipe under inspection.

use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_SERVINGS;

/// Serving counts for one inspection session
///
/// `current_servings` never drops below 1. The scale factor is derived on
/// every call rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleState {
    base_servings: u32,
    current_servings: u32,
}

impl ScaleState {
    /// Start at the recipe's own serving count (2 when it is below 1)
    pub fn new(base_servings: u32) -> Self {
        let base = if base_servings >= 1 {
            base_servings
        } else {
            DEFAULT_SERVINGS
        };
        Self {
            base_servings: base,
            current_servings: base,
        }
    }

    pub fn base_servings(&self) -> u32 {
        self.base_servings
    }

    pub fn current_servings(&self) -> u32 {
        self.current_servings
    }

    pub fn scale_factor(&self) -> f64 {
        self.current_servings as f64 / self.base_servings as f64
    }

    pub fn increment(&mut self) {
        self.current_servings = self.current_servings.saturating_add(1);
    }

    /// Drop one serving; returns false (and changes nothing) at 1 serving
    pub fn decrement(&mut self) -> bool {
        if self.current_servings > 1 {
            self.current_servings -= 1;
            true
        } else {
            false
        }
    }

    /// Set an absolute serving count, clamping non-positive values to 1
    pub fn set(&mut self, servings: i64) {
        self.current_servings = if servings < 1 {
            1
        } else {
            u32::try_from(servings).unwrap_or(u32::MAX)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_invalid_base() {
        let state = ScaleState::new(0);
        assert_eq!(state.base_servings(), 2);
        assert_eq!(state.current_servings(), 2);

        let state = ScaleState::new(4);
        assert_eq!(state.base_servings(), 4);
        assert_eq!(state.current_servings(), 4);
    }

    #[test]
    fn test_scale_factor_tracks_changes() {
        let mut state = ScaleState::new(2);
        assert!((state.scale_factor() - 1.0).abs() < 1e-12);

        state.increment();
        assert!((state.scale_factor() - 1.5).abs() < 1e-12);

        state.set(8);
        assert!((state.scale_factor() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_decrement_floor() {
        let mut state = ScaleState::new(2);
        assert!(state.decrement());
        assert_eq!(state.current_servings(), 1);

        let before = state;
        assert!(!state.decrement());
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_clamps() {
        let mut state = ScaleState::new(3);
        state.set(0);
        assert_eq!(state.current_servings(), 1);
        state.set(-7);
        assert_eq!(state.current_servings(), 1);
        state.set(i64::MAX);
        assert_eq!(state.current_servings(), u32::MAX);
    }

    #[test]
    fn test_increment_saturates() {
        let mut state = ScaleState::new(1);
        state.set(u32::MAX as i64);
        state.increment();
        assert_eq!(state.current_servings(), u32::MAX);
    }
}
