//! Recipe Scaler Status Tool
//!
//! Provides runtime status information about the scaler service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::session::ServingController;

/// Usage instructions for AI assistants
pub const SCALING_INSTRUCTIONS: &str = r#"
# Recipe Scaler Instructions

The scaler rescales the numbers already written in a recipe. It does not convert
units or compute nutrition.

## One-off scaling

- `scale_ingredient_line` - `line` and `factor`. "200g tofu" at 1.5 becomes "300g tofu".
  Lines without a leading number ("salt to taste") come back unchanged.
- `scale_macros` - `summary` and `factor`. "Calories: 100, Protein: 10g" at 1.5 becomes
  "Calories: 150, Protein: 15g". A missing summary returns "No macros data".

## Inspecting a recipe

1. `open_recipe` with title, servings, ingredients, macros and instructions, or
   `open_recipe_information` with the raw JSON from the recipe detail endpoint.
2. `adjust_servings` with `signal`: "+1", "-1" or an absolute count such as "6".
   The count never drops below 1; "-1" at 1 serving does nothing.
3. `get_scaled_recipe` to read the current view again.
4. `close_recipe` when done.

Only one recipe is open at a time. Every view is scaled from the original recipe,
so going 2 -> 7 -> 2 servings gives back the original numbers.
"#;

/// Open recipe summary
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub title: String,
    pub base_servings: u32,
    pub current_servings: u32,
    pub scale_factor: f64,
    pub opened_at: String,
}

/// Service status information
#[derive(Debug, Clone, Serialize)]
pub struct ScalerStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Recipe under inspection, if any
    pub session: Option<SessionStatus>,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, controller: &ServingController) -> ScalerStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        let session = controller.open_recipe().map(|open| {
            let state = open.state();
            SessionStatus {
                title: open.view().title.clone(),
                base_servings: state.base_servings(),
                current_servings: state.current_servings(),
                scale_factor: state.scale_factor(),
                opened_at: open.opened_at().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            }
        });

        ScalerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            session,
        }
    }
}
