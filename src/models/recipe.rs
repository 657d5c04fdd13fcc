//! Recipe snapshot model
//!
//! The unscaled recipe handed to the serving controller when a recipe is opened.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::recipe_information::RecipeInformation;
use super::see_more::SeeMoreResponse;

/// Servings assumed when a recipe does not state a usable count
pub const DEFAULT_SERVINGS: u32 = 2;

/// Title shown for recipes without one
pub const UNTITLED: &str = "Untitled";

/// Errors while reading recipe documents
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Recipe detail request failed: {0}")]
    Upstream(String),

    #[error("Recipe document must be a JSON object")]
    NotAnObject,
}

/// Immutable recipe snapshot as received from the recipe detail collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        default = "default_servings",
        alias = "baseServings",
        alias = "base_servings",
        deserialize_with = "deserialize_servings"
    )]
    pub servings: u32,
    #[serde(default, deserialize_with = "deserialize_lines")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub macros: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ingredient arrays may contain nulls; those entries are dropped
fn deserialize_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let lines: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(lines.unwrap_or_default().into_iter().flatten().collect())
}

/// Accept integers, floats, numeric strings, or null for a serving count
pub(crate) fn deserialize_servings<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(servings_from_value(&value))
}

/// Interpret a JSON value as a serving count, falling back to [`DEFAULT_SERVINGS`]
pub fn servings_from_value(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match raw {
        Some(n) if n.is_finite() && n >= 1.0 => n.floor().min(u32::MAX as f64) as u32,
        _ => DEFAULT_SERVINGS,
    }
}

impl RecipeSnapshot {
    pub fn new(
        title: impl Into<String>,
        servings: u32,
        ingredients: Vec<String>,
        macros: Option<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            servings,
            ingredients,
            macros,
            instructions: instructions.into(),
        }
    }

    /// Serving count the recipe was written for, defaulting unset counts to 2
    pub fn base_servings(&self) -> u32 {
        if self.servings >= 1 {
            self.servings
        } else {
            DEFAULT_SERVINGS
        }
    }

    /// Title to display, "Untitled" when blank
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Read a snapshot from any of the accepted JSON shapes
    ///
    /// - a see-more response: `{"info": {...}}` or `{"error": "..."}`
    /// - an upstream recipe information document (has `extendedIngredients`)
    /// - a bare snapshot object
    pub fn from_json_str(text: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self, ModelError> {
        let object = value.as_object().ok_or(ModelError::NotAnObject)?;

        if object.contains_key("info") || object.contains_key("error") {
            let response: SeeMoreResponse = serde_json::from_value(value)?;
            return response.into_snapshot();
        }

        if object.contains_key("extendedIngredients")
            || object.contains_key("analyzedInstructions")
            || object.contains_key("nutrition")
        {
            let info: RecipeInformation = serde_json::from_value(value)?;
            return Ok(info.to_snapshot());
        }

        Ok(serde_json::from_value(value)?)
    }
}
