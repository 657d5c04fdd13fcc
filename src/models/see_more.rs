//! See-more response model
//!
//! The recipe detail endpoint answers with either `{"info": {...}}` or
//! `{"error": "..."}`.

use serde::Deserialize;

use super::recipe::{ModelError, RecipeSnapshot};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeeMoreResponse {
    Info { info: RecipeSnapshot },
    Error { error: String },
}

impl SeeMoreResponse {
    /// Unwrap the snapshot, turning an error payload into [`ModelError::Upstream`]
    pub fn into_snapshot(self) -> Result<RecipeSnapshot, ModelError> {
        match self {
            SeeMoreResponse::Info { info } => Ok(info),
            SeeMoreResponse::Error { error } => Err(ModelError::Upstream(error)),
        }
    }
}
