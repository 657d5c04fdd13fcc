//! Recipe Scaler MCP Server Implementation
//!
//! Exposes the scaling engine and the serving controller as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::RecipeSnapshot;
use crate::session::{ServingController, ServingSignal};
use crate::tools::scaling;
use crate::tools::status::StatusTracker;

/// Recipe Scaler MCP Service
///
/// Each service instance owns its own inspection session.
#[derive(Clone)]
pub struct RecipeScalerService {
    status_tracker: Arc<StatusTracker>,
    controller: Arc<Mutex<ServingController>>,
    tool_router: ToolRouter<RecipeScalerService>,
}

impl Default for RecipeScalerService {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeScalerService {
    pub fn new() -> Self {
        Self::with_controller(ServingController::new())
    }

    /// Start with `snapshot` already open for inspection
    pub fn with_recipe(snapshot: RecipeSnapshot) -> Self {
        let mut controller = ServingController::new();
        controller.open(snapshot);
        Self::with_controller(controller)
    }

    fn with_controller(controller: ServingController) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            controller: Arc::new(Mutex::new(controller)),
            tool_router: Self::tool_router(),
        }
    }

    /// Shared handle to the inspection session
    pub fn controller(&self) -> Arc<Mutex<ServingController>> {
        Arc::clone(&self.controller)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleIngredientLineParams {
    /// Free-text ingredient line, e.g. "200g tofu"
    pub line: String,
    /// Multiplier applied to the leading quantity (must be > 0)
    pub factor: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleMacrosParams {
    /// Macro summary, e.g. "Calories: 100, Protein: 10g" (optional)
    pub summary: Option<String>,
    /// Multiplier applied to every macro value (must be > 0)
    pub factor: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OpenRecipeParams {
    /// Recipe title
    pub title: Option<String>,
    /// Servings the recipe is written for (default 2)
    pub servings: Option<i64>,
    /// Ingredient lines in recipe order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Macro summary text (optional)
    pub macros: Option<String>,
    /// Instructions text (optional)
    pub instructions: Option<String>,
}

impl OpenRecipeParams {
    fn into_snapshot(self) -> RecipeSnapshot {
        let servings = match self.servings {
            Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => 0,
        };
        RecipeSnapshot::new(
            self.title.unwrap_or_default(),
            servings,
            self.ingredients,
            self.macros,
            self.instructions.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OpenRecipeInformationParams {
    /// Raw JSON: a see-more response ({"info": ...}), a recipe information document, or a recipe object
    pub recipe_json: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AdjustServingsParams {
    /// "+1" to add a serving, "-1" to remove one, or an absolute count such as "6"
    pub signal: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl RecipeScalerService {
    // --- Status ---

    #[tool(description = "Get the current status of the recipe scaler including build info, process information, and the recipe currently open")]
    async fn scaler_status(&self) -> Result<CallToolResult, McpError> {
        let controller = self.controller.lock().await;
        let status = self.status_tracker.get_status(&controller);
        json_result(&status)
    }

    #[tool(description = "Get instructions for scaling recipes. Call this when unsure how to use the scaling tools.")]
    fn scaling_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::SCALING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(SCALING_INSTRUCTIONS)]))
    }

    // --- Stateless scaling ---

    #[tool(description = "Scale the leading quantity of one ingredient line by a factor. Lines without a leading number are returned unchanged.")]
    fn scale_ingredient_line(&self, Parameters(p): Parameters<ScaleIngredientLineParams>) -> Result<CallToolResult, McpError> {
        let result = scaling::scale_line(&p.line, p.factor)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Scale every 'Label: number[unit]' entry of a macro summary by a factor")]
    fn scale_macros(&self, Parameters(p): Parameters<ScaleMacrosParams>) -> Result<CallToolResult, McpError> {
        let result = scaling::scale_macro_summary(p.summary.as_deref(), p.factor)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Inspection session ---

    #[tool(description = "Open a recipe for inspection at its own serving count. Replaces any recipe already open.")]
    async fn open_recipe(&self, Parameters(p): Parameters<OpenRecipeParams>) -> Result<CallToolResult, McpError> {
        let mut controller = self.controller.lock().await;
        let view = scaling::open_recipe(&mut controller, p.into_snapshot());
        json_result(&view)
    }

    #[tool(description = "Open a recipe for inspection from raw JSON returned by the recipe detail endpoint")]
    async fn open_recipe_information(&self, Parameters(p): Parameters<OpenRecipeInformationParams>) -> Result<CallToolResult, McpError> {
        let mut controller = self.controller.lock().await;
        let view = scaling::open_recipe_json(&mut controller, &p.recipe_json)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Change the serving count of the open recipe: '+1', '-1', or an absolute count. Never drops below 1 serving.")]
    async fn adjust_servings(&self, Parameters(p): Parameters<AdjustServingsParams>) -> Result<CallToolResult, McpError> {
        let mut controller = self.controller.lock().await;
        let result = scaling::adjust_servings(&mut controller, ServingSignal::parse(&p.signal))
            .map_err(|e| McpError::invalid_request(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the scaled ingredients and macros of the open recipe")]
    async fn get_scaled_recipe(&self) -> Result<CallToolResult, McpError> {
        let controller = self.controller.lock().await;
        let view = scaling::current_view(&controller)
            .map_err(|e| McpError::invalid_request(e, None))?;
        json_result(&view)
    }

    #[tool(description = "Close the open recipe and discard it")]
    async fn close_recipe(&self) -> Result<CallToolResult, McpError> {
        let mut controller = self.controller.lock().await;
        let result = scaling::close_recipe(&mut controller);
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for RecipeScalerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "recipe-scaler".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Recipe Scaler".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Recipe Scaler - rescale recipe ingredient quantities and macros by serving count. \
                 Call scaling_instructions first. \
                 One-off: scale_ingredient_line, scale_macros. \
                 Session: open_recipe/open_recipe_information, adjust_servings, get_scaled_recipe, close_recipe. \
                 Status: scaler_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tofu_params() -> OpenRecipeParams {
        OpenRecipeParams {
            title: Some("Tofu Bowl".to_string()),
            servings: Some(2),
            ingredients: vec!["200g tofu".to_string(), "salt to taste".to_string()],
            macros: Some("Calories: 100, Protein: 10g".to_string()),
            instructions: None,
        }
    }

    #[test]
    fn test_server_info() {
        let info = RecipeScalerService::new().get_info();
        assert_eq!(info.server_info.name, "recipe-scaler");
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_open_params_default_servings() {
        let mut params = tofu_params();
        params.servings = Some(-3);
        assert_eq!(params.into_snapshot().base_servings(), 2);

        let mut params = tofu_params();
        params.servings = None;
        assert_eq!(params.into_snapshot().base_servings(), 2);
    }

    #[tokio::test]
    async fn test_session_tools() {
        let service = RecipeScalerService::new();

        let result = service.open_recipe(Parameters(tofu_params())).await.unwrap();
        assert_eq!(result.is_error, Some(false));

        service
            .adjust_servings(Parameters(AdjustServingsParams { signal: "+1".to_string() }))
            .await
            .unwrap();

        {
            let handle = service.controller();
            let controller = handle.lock().await;
            let view = controller.view().unwrap();
            assert_eq!(view.servings_display, 3);
            assert_eq!(view.ingredients_display, vec!["300g tofu", "salt to taste"]);
            assert_eq!(view.macros_display, "Calories: 150, Protein: 15g");
        }

        service.close_recipe().await.unwrap();
        assert!(service.get_scaled_recipe().await.is_err());
        assert!(service
            .adjust_servings(Parameters(AdjustServingsParams { signal: "-1".to_string() }))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_services_do_not_share_sessions() {
        let a = RecipeScalerService::new();
        let b = RecipeScalerService::new();
        a.open_recipe(Parameters(tofu_params())).await.unwrap();

        assert!(a.get_scaled_recipe().await.is_ok());
        assert!(b.get_scaled_recipe().await.is_err());
    }

    #[tokio::test]
    async fn test_with_recipe_starts_open() {
        let service = RecipeScalerService::with_recipe(RecipeSnapshot::new(
            "Soup",
            4,
            vec!["1 l stock".to_string()],
            None,
            "",
        ));
        assert!(service.get_scaled_recipe().await.is_ok());
        assert!(service.scaler_status().await.is_ok());
    }

    #[test]
    fn test_stateless_tools() {
        let service = RecipeScalerService::new();
        let ok = service.scale_ingredient_line(Parameters(ScaleIngredientLineParams {
            line: "1.5 cups water".to_string(),
            factor: 2.0,
        }));
        assert!(ok.is_ok());

        let err = service.scale_macros(Parameters(ScaleMacrosParams {
            summary: None,
            factor: 0.0,
        }));
        assert!(err.is_err());
    }
}
