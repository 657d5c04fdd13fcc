//! One-shot recipe scaling
//! Usage: cargo run --bin scale_recipe -- <recipe.json> [servings | +1 | -1]

use std::path::PathBuf;

use recipe_scaler::config::load_recipe_file;
use recipe_scaler::session::{ServingController, ServingSignal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1).map(PathBuf::from) else {
        eprintln!("Usage: scale_recipe <recipe.json> [servings | +1 | -1]");
        std::process::exit(2);
    };

    let snapshot = load_recipe_file(&path)?;

    let mut controller = ServingController::new();
    let mut view = controller.open(snapshot);
    if let Some(arg) = args.get(2) {
        view = controller.apply(ServingSignal::parse(arg))?;
    }

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
