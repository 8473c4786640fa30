use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::shades::standard_labels;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub shades: ShadesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory both artifacts are written into.
    pub dir: PathBuf,
    pub tailwind_file: String,
    pub stylesheet_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            tailwind_file: "tailwind.config.js".to_string(),
            stylesheet_file: "colors.css".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn tailwind_path(&self) -> PathBuf {
        self.dir.join(&self.tailwind_file)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.dir.join(&self.stylesheet_file)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShadesConfig {
    /// Shade labels to generate, in output order.
    pub scale: Vec<String>,
}

impl Default for ShadesConfig {
    fn default() -> Self {
        Self {
            scale: standard_labels(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        // Load .env file (silently ignore if not present)
        let _ = dotenvy::dotenv();

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shadegen");

        let defaults = OutputConfig::default();

        let builder = Config::builder()
            // 1. Load default values
            // Output
            .set_default("output.dir", ".")?
            .set_default("output.tailwind_file", defaults.tailwind_file)?
            .set_default("output.stylesheet_file", defaults.stylesheet_file)?
            // Shades
            .set_default("shades.scale", standard_labels())?

            // 2. Load from local config file (optional, lowest priority)
            .add_source(File::from(PathBuf::from("shadegen.toml")).required(false))

            // 3. Load from user config directory (optional, overrides local)
            .add_source(File::from(config_dir.join("config.toml")).required(false))

            // 4. Load from Environment variables (SHADEGEN__OUTPUT__DIR=...)
            .add_source(
                Environment::with_prefix("SHADEGEN")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("shades.scale")
                    .try_parsing(true),
            );

        let s = builder.build()?;
        Ok(s.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default Value Tests ====================

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.dir, PathBuf::from("."));
        assert_eq!(config.tailwind_file, "tailwind.config.js");
        assert_eq!(config.stylesheet_file, "colors.css");
    }

    #[test]
    fn test_output_paths_join_dir() {
        let config = OutputConfig {
            dir: PathBuf::from("web/styles"),
            ..OutputConfig::default()
        };
        assert_eq!(
            config.tailwind_path(),
            PathBuf::from("web/styles/tailwind.config.js")
        );
        assert_eq!(
            config.stylesheet_path(),
            PathBuf::from("web/styles/colors.css")
        );
    }

    #[test]
    fn test_shades_config_defaults_to_standard_scale() {
        let config = ShadesConfig::default();
        assert_eq!(config.scale.first().map(String::as_str), Some("50"));
        assert_eq!(config.scale.last().map(String::as_str), Some("950"));
        assert!(config.scale.iter().any(|s| s == "500"));
    }

    // ==================== Config Loading Tests ====================

    #[test]
    fn test_config_load_with_defaults() {
        // Should succeed even without a config file (uses defaults)
        let result = AppConfig::load();
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn test_loaded_config_has_expected_structure() {
        let config = AppConfig::load().expect("Config should load");

        assert!(!config.output.tailwind_file.is_empty());
        assert!(!config.shades.scale.is_empty());
    }

    // ==================== Environment Variable Override Tests ====================

    /// Helper to safely set and remove environment variables in tests.
    fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        // SAFETY: Test environment, the key is only touched by this test
        unsafe {
            std::env::set_var(key, value);
        }
        let result = f();
        unsafe {
            std::env::remove_var(key);
        }
        result
    }

    #[test]
    fn test_env_var_overrides_stylesheet_file() {
        let config = with_env_var("SHADEGEN__OUTPUT__STYLESHEET_FILE", "tokens.css", || {
            AppConfig::load().expect("Config should load")
        });

        assert_eq!(
            config.output.stylesheet_file, "tokens.css",
            "Environment variable should override output.stylesheet_file"
        );
    }
}
