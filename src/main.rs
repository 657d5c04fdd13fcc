//! Recipe Scaler
//!
//! An MCP server for rescaling recipes by serving count.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use recipe_scaler::build_info;
use recipe_scaler::config::ScalerConfig;
use recipe_scaler::mcp::RecipeScalerService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ScalerConfig::from_env()?;

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = match config.load_initial_recipe()? {
        Some(snapshot) => {
            eprintln!("Opening recipe: {}", snapshot.display_title());
            RecipeScalerService::with_recipe(snapshot)
        }
        None => RecipeScalerService::new(),
    };

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
