//! Nutrient data and macro summary text
//!
//! Builds the line-per-macro summary shown with a recipe from the nutrient list
//! of an upstream recipe information document.

use serde::{Deserialize, Serialize};

/// Summary used when none of the tracked macros are present
pub const NO_MACRO_DATA_FOUND: &str = "No macro data found.";

/// A single nutrient entry (e.g. `{"name": "Calories", "amount": 316.5, "unit": "kcal"}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

/// Nutrition block of a recipe information document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

/// Displayed label and the upstream nutrient name it is read from
const MACRO_LINES: [(&str, &str); 4] = [
    ("Calories", "calories"),
    ("Carbs", "carbohydrates"),
    ("Fat", "fat"),
    ("Protein", "protein"),
];

/// Build a macro summary with one `Label: amount unit` line per macro
///
/// Macros missing from `nutrients` show as `N/A`. When none of them are present
/// the summary is [`NO_MACRO_DATA_FOUND`]. A later duplicate overrides an earlier one.
pub fn build_macros_summary(nutrients: &[Nutrient]) -> String {
    let values: Vec<Option<String>> = MACRO_LINES
        .iter()
        .map(|(_, source)| {
            nutrients
                .iter()
                .rev()
                .find(|n| n.name.trim().eq_ignore_ascii_case(source))
                .map(|n| format!("{} {}", n.amount, n.unit).trim_end().to_string())
        })
        .collect();

    if values.iter().all(Option::is_none) {
        return NO_MACRO_DATA_FOUND.to_string();
    }

    MACRO_LINES
        .iter()
        .zip(values)
        .map(|((label, _), value)| {
            format!("{}: {}", label, value.unwrap_or_else(|| "N/A".to_string()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
