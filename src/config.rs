//! Runtime configuration
//!
//! Read from environment variables at startup.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::filter::Directive;

use crate::models::{ModelError, RecipeSnapshot};

/// Log filter directive, e.g. `recipe_scaler=debug`
pub const LOG_ENV_VAR: &str = "RECIPE_SCALER_LOG";
/// Optional recipe JSON opened when the server starts
pub const RECIPE_PATH_ENV_VAR: &str = "RECIPE_SCALER_RECIPE_PATH";

pub const DEFAULT_LOG_DIRECTIVE: &str = "recipe_scaler=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log directive in {var}: '{value}'")]
    InvalidLogDirective { var: &'static str, value: String },

    #[error("{var} is set but empty")]
    Empty { var: &'static str },

    #[error("Failed to read recipe file {path}: {source}")]
    ReadRecipe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid recipe file {path}: {source}")]
    ParseRecipe {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalerConfig {
    pub log_directive: String,
    pub recipe_path: Option<PathBuf>,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            recipe_path: None,
        }
    }
}

impl ScalerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_directive = match lookup(LOG_ENV_VAR) {
            Some(value) => {
                let value = value.trim().to_string();
                if value.parse::<Directive>().is_err() {
                    return Err(ConfigError::InvalidLogDirective {
                        var: LOG_ENV_VAR,
                        value,
                    });
                }
                value
            }
            None => DEFAULT_LOG_DIRECTIVE.to_string(),
        };

        let recipe_path = match lookup(RECIPE_PATH_ENV_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: RECIPE_PATH_ENV_VAR,
                })
            }
            Some(value) => Some(PathBuf::from(value.trim())),
            None => None,
        };

        Ok(Self {
            log_directive,
            recipe_path,
        })
    }

    pub fn log_directive(&self) -> Result<Directive, ConfigError> {
        self.log_directive
            .parse()
            .map_err(|_| ConfigError::InvalidLogDirective {
                var: LOG_ENV_VAR,
                value: self.log_directive.clone(),
            })
    }

    /// Load the startup recipe, if one is configured
    pub fn load_initial_recipe(&self) -> Result<Option<RecipeSnapshot>, ConfigError> {
        self.recipe_path
            .as_deref()
            .map(load_recipe_file)
            .transpose()
    }
}

/// Read a recipe snapshot from a JSON file in any accepted shape
pub fn load_recipe_file(path: &Path) -> Result<RecipeSnapshot, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadRecipe {
        path: path.to_path_buf(),
        source,
    })?;

    RecipeSnapshot::from_json_str(&text).map_err(|source| ConfigError::ParseRecipe {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("recipe_scaler_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults() {
        let config = ScalerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ScalerConfig::default());
        assert!(config.log_directive().is_ok());
    }

    #[test]
    fn test_custom_values() {
        let config = ScalerConfig::from_lookup(lookup_from(&[
            (LOG_ENV_VAR, "recipe_scaler=debug"),
            (RECIPE_PATH_ENV_VAR, " /tmp/recipe.json "),
        ]))
        .unwrap();
        assert_eq!(config.log_directive, "recipe_scaler=debug");
        assert_eq!(config.recipe_path, Some(PathBuf::from("/tmp/recipe.json")));
    }

    #[test]
    fn test_invalid_values() {
        let err = ScalerConfig::from_lookup(lookup_from(&[(LOG_ENV_VAR, "recipe_scaler=loud")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogDirective { .. }));

        let err = ScalerConfig::from_lookup(lookup_from(&[(RECIPE_PATH_ENV_VAR, "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }

    #[test]
    fn test_load_recipe_file() {
        let path = temp_path("see_more.json");
        std::fs::write(
            &path,
            r#"{"info": {"title": "Chili", "servings": 4, "ingredients": ["500g beans"]}}"#,
        )
        .unwrap();

        let config = ScalerConfig {
            recipe_path: Some(path.clone()),
            ..ScalerConfig::default()
        };
        let snapshot = config.load_initial_recipe().unwrap().unwrap();
        assert_eq!(snapshot.title, "Chili");
        assert_eq!(snapshot.servings, 4);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_recipe_file_errors() {
        let missing = temp_path("missing.json");
        assert!(matches!(
            load_recipe_file(&missing),
            Err(ConfigError::ReadRecipe { .. })
        ));

        let bad = temp_path("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert!(matches!(
            load_recipe_file(&bad),
            Err(ConfigError::ParseRecipe { .. })
        ));
        std::fs::remove_file(&bad).ok();
    }

    #[test]
    fn test_no_initial_recipe() {
        let config = ScalerConfig::default();
        assert!(config.load_initial_recipe().unwrap().is_none());
    }
}
