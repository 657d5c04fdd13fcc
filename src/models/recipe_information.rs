//! Upstream recipe information document
//!
//! The full recipe document returned by the recipe provider, reduced to the
//! fields needed to build a [`RecipeSnapshot`].

use serde::{Deserialize, Serialize};

use super::nutrition::{build_macros_summary, NutritionInfo};
use super::recipe::{deserialize_servings, RecipeSnapshot, DEFAULT_SERVINGS};

/// Instructions text used when a recipe has neither analyzed steps nor raw instructions
pub const NO_INSTRUCTIONS: &str = "No instructions found.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    /// Ingredient line as written in the recipe, e.g. "2 tbsp soy sauce"
    #[serde(default)]
    pub original: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionStep {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub step: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzedInstruction {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_servings", deserialize_with = "deserialize_servings")]
    pub servings: u32,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<AnalyzedInstruction>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub nutrition: Option<NutritionInfo>,
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

impl RecipeInformation {
    /// Ingredient lines in recipe order; missing lines become empty strings
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.extended_ingredients
            .iter()
            .map(|ing| ing.original.clone().unwrap_or_default())
            .collect()
    }

    /// Numbered steps of the first analyzed instruction block, else the raw text
    pub fn instructions_text(&self) -> String {
        if let Some(first) = self.analyzed_instructions.first() {
            return first
                .steps
                .iter()
                .map(|s| format!("{}. {}", s.number, s.step))
                .collect::<Vec<_>>()
                .join("\n");
        }

        self.instructions
            .clone()
            .unwrap_or_else(|| NO_INSTRUCTIONS.to_string())
    }

    pub fn macros_summary(&self) -> String {
        let nutrients = self
            .nutrition
            .as_ref()
            .map(|n| n.nutrients.as_slice())
            .unwrap_or(&[]);
        build_macros_summary(nutrients)
    }

    pub fn to_snapshot(&self) -> RecipeSnapshot {
        RecipeSnapshot {
            title: self.title.clone().unwrap_or_else(|| "Recipe".to_string()),
            servings: self.servings,
            ingredients: self.ingredient_lines(),
            macros: Some(self.macros_summary()),
            instructions: self.instructions_text(),
        }
    }
}
