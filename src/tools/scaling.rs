//! Scaling MCP Tools
//!
//! Tool implementations over the serving controller and the scaling engine.

use serde::Serialize;

use crate::models::{RecipeSnapshot, RenderModel};
use crate::scaling::{parse_quantity, scale_ingredient_line, scale_macros, ParsedQuantity};
use crate::session::{ServingController, ServingSignal};

/// Response for scale_ingredient_line
#[derive(Debug, Serialize)]
pub struct ScaleLineResponse {
    pub original: String,
    pub scaled: String,
    pub factor: f64,
    /// False when the line had no leading quantity and passed through unchanged
    pub matched: bool,
}

/// Response for scale_macros
#[derive(Debug, Serialize)]
pub struct ScaleMacrosResponse {
    pub original: Option<String>,
    pub scaled: String,
    pub factor: f64,
}

/// Response for adjust_servings
#[derive(Debug, Serialize)]
pub struct AdjustServingsResponse {
    pub signal: String,
    pub changed: bool,
    pub recipe: RenderModel,
}

/// Response for close_recipe
#[derive(Debug, Serialize)]
pub struct CloseRecipeResponse {
    pub closed: bool,
    pub title: Option<String>,
}

fn check_factor(factor: f64) -> Result<f64, String> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(format!("Scale factor must be a positive number, got {}", factor))
    }
}

/// Scale a single ingredient line
pub fn scale_line(line: &str, factor: f64) -> Result<ScaleLineResponse, String> {
    let factor = check_factor(factor)?;
    Ok(ScaleLineResponse {
        original: line.to_string(),
        scaled: scale_ingredient_line(line, factor),
        factor,
        matched: matches!(parse_quantity(line), ParsedQuantity::Matched { .. }),
    })
}

/// Scale a macro summary
pub fn scale_macro_summary(
    summary: Option<&str>,
    factor: f64,
) -> Result<ScaleMacrosResponse, String> {
    let factor = check_factor(factor)?;
    Ok(ScaleMacrosResponse {
        original: summary.map(str::to_string),
        scaled: scale_macros(summary, factor),
        factor,
    })
}

/// Open a recipe for inspection, replacing any open one
pub fn open_recipe(controller: &mut ServingController, snapshot: RecipeSnapshot) -> RenderModel {
    controller.open(snapshot)
}

/// Open a recipe from raw JSON (see-more response, recipe information, or snapshot)
pub fn open_recipe_json(
    controller: &mut ServingController,
    recipe_json: &str,
) -> Result<RenderModel, String> {
    let snapshot = RecipeSnapshot::from_json_str(recipe_json).map_err(|e| e.to_string())?;
    Ok(controller.open(snapshot))
}

/// Apply a serving control signal to the open recipe
pub fn adjust_servings(
    controller: &mut ServingController,
    signal: ServingSignal,
) -> Result<AdjustServingsResponse, String> {
    let before = controller
        .open_recipe()
        .map(|open| open.state().current_servings());
    let recipe = controller.apply(signal).map_err(|e| e.to_string())?;

    Ok(AdjustServingsResponse {
        signal: signal.to_string(),
        changed: before != Some(recipe.servings_display),
        recipe,
    })
}

/// Current scaled view of the open recipe
pub fn current_view(controller: &ServingController) -> Result<RenderModel, String> {
    controller.view().cloned().map_err(|e| e.to_string())
}

pub fn close_recipe(controller: &mut ServingController) -> CloseRecipeResponse {
    let closed = controller.close();
    CloseRecipeResponse {
        closed: closed.is_some(),
        title: closed.map(|snapshot| snapshot.display_title().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_pancakes(controller: &mut ServingController) -> RenderModel {
        open_recipe_json(
            controller,
            r#"{"info": {"title": "Pancakes", "servings": 2,
                "ingredients": ["1.5 cups flour", "2 eggs", "milk as needed"],
                "macros": "Calories: 300 kcal\nProtein: 9 g"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_scale_line() {
        let result = scale_line("200g tofu", 1.5).unwrap();
        assert_eq!(result.scaled, "300g tofu");
        assert!(result.matched);

        let result = scale_line("salt to taste", 2.0).unwrap();
        assert_eq!(result.scaled, "salt to taste");
        assert!(!result.matched);
    }

    #[test]
    fn test_invalid_factor_rejected() {
        assert!(scale_line("1 egg", 0.0).is_err());
        assert!(scale_line("1 egg", -2.0).is_err());
        assert!(scale_macro_summary(Some("Fat: 1g"), f64::NAN).is_err());
    }

    #[test]
    fn test_scale_macro_summary() {
        let result = scale_macro_summary(None, 2.0).unwrap();
        assert_eq!(result.scaled, "No macros data");
        assert!(result.original.is_none());
    }

    #[test]
    fn test_open_and_adjust() {
        let mut controller = ServingController::new();
        let view = open_pancakes(&mut controller);
        assert_eq!(view.servings_display, 2);

        let result = adjust_servings(&mut controller, ServingSignal::parse("+1")).unwrap();
        assert!(result.changed);
        assert_eq!(result.signal, "+1");
        assert_eq!(
            result.recipe.ingredients_display,
            vec!["2.25 cups flour", "3 eggs", "milk as needed"]
        );
        assert_eq!(result.recipe.macros_display, "Calories: 450 kcal\nProtein: 13.5 g");

        let result = adjust_servings(&mut controller, ServingSignal::Set(1)).unwrap();
        assert!(result.changed);
        let result = adjust_servings(&mut controller, ServingSignal::Decrement).unwrap();
        assert!(!result.changed);
        assert_eq!(result.recipe.servings_display, 1);
    }

    #[test]
    fn test_adjust_without_recipe() {
        let mut controller = ServingController::new();
        let err = adjust_servings(&mut controller, ServingSignal::Increment).unwrap_err();
        assert_eq!(err, "No recipe is open for inspection");
        assert!(current_view(&controller).is_err());
    }

    #[test]
    fn test_open_rejects_error_payload() {
        let mut controller = ServingController::new();
        let err = open_recipe_json(&mut controller, r#"{"error": "Couldn't fetch details."}"#)
            .unwrap_err();
        assert!(err.contains("Couldn't fetch details."));
        assert!(!controller.is_open());
    }

    #[test]
    fn test_close_recipe() {
        let mut controller = ServingController::new();
        open_pancakes(&mut controller);

        let result = close_recipe(&mut controller);
        assert!(result.closed);
        assert_eq!(result.title.as_deref(), Some("Pancakes"));

        let result = close_recipe(&mut controller);
        assert!(!result.closed);
        assert!(result.title.is_none());
    }
}
