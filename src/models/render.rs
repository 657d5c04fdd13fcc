//! Render model
//!
//! What the inspection view displays for a recipe at the current serving count.

use serde::Serialize;

use super::recipe::RecipeSnapshot;
use crate::scaling::{scale_ingredient_lines, scale_macros};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub title: String,
    pub servings_display: u32,
    pub base_servings: u32,
    pub scale_factor: f64,
    pub ingredients_display: Vec<String>,
    pub macros_display: String,
    pub instructions: String,
}

impl RenderModel {
    /// Scale `snapshot` from its base servings to `servings`
    ///
    /// Always works from the unscaled snapshot, so repeated changes never compound
    /// rounding.
    pub fn from_snapshot(snapshot: &RecipeSnapshot, base_servings: u32, servings: u32) -> Self {
        let scale_factor = servings as f64 / base_servings.max(1) as f64;

        Self {
            title: snapshot.display_title().to_string(),
            servings_display: servings,
            base_servings,
            scale_factor,
            ingredients_display: scale_ingredient_lines(&snapshot.ingredients, scale_factor),
            macros_display: scale_macros(snapshot.macros.as_deref(), scale_factor),
            instructions: snapshot.instructions.clone(),
        }
    }
}
