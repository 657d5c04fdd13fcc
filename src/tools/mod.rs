//! Recipe Scaler Tools module
//!
//! MCP tool implementations for the recipe scaler.

pub mod scaling;
pub mod status;
