//! Recipe Scaler Library
//!
//! Rescales recipe ingredient quantities and macro summaries by serving count.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod scaling;
pub mod session;
pub mod tools;
