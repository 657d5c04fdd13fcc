//! Data models
//!
//! Recipe documents consumed by the serving controller and the view it produces.

mod nutrition;
mod recipe;
mod recipe_information;
mod render;
mod see_more;

pub use nutrition::{build_macros_summary, Nutrient, NutritionInfo, NO_MACRO_DATA_FOUND};
pub use recipe::{servings_from_value, ModelError, RecipeSnapshot, DEFAULT_SERVINGS, UNTITLED};
pub use recipe_information::{
    AnalyzedInstruction, ExtendedIngredient, InstructionStep, RecipeInformation, NO_INSTRUCTIONS,
};
pub use render::RenderModel;
pub use see_more::SeeMoreResponse;
