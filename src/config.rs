use config::{Config as ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Settings shipped with the bundle
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    pub dom: DomConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Location of the menu document, relative to the page
    pub url: String,
    /// Image shown when an item has no image or its image fails to load
    pub fallback_image: String,
}

/// Ids and classes of the page elements the menu is mounted on
#[derive(Debug, Deserialize, Clone)]
pub struct DomConfig {
    pub sections_id: String,
    pub empty_state_id: String,
    pub select_id: String,
    pub button_class: String,
    /// Optional mount that receives generated filter controls when empty
    pub filters_id: String,
}

impl DomConfig {
    pub fn button_selector(&self) -> String {
        format!(".{}", self.button_class)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration
    ///
    /// Priority (highest to lowest):
    /// 1. `overrides`, TOML supplied by the hosting page
    /// 2. Environment variables (MENUBOARD__DATA__URL, etc.)
    /// 3. Bundled config/default.toml
    /// 4. Hardcoded defaults
    pub fn load(overrides: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("data.url", "menu-data.json")?
            .set_default("data.fallback_image", "images/logo.png")?
            .set_default("dom.sections_id", "menu-sections")?
            .set_default("dom.empty_state_id", "menu-empty-state")?
            .set_default("dom.select_id", "categorySelect")?
            .set_default("dom.button_class", "filter-btn")?
            .set_default("dom.filters_id", "menu-filters")?
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(
                Environment::with_prefix("MENUBOARD")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(overrides) = overrides.filter(|text| !text.trim().is_empty()) {
            builder = builder.add_source(File::from_str(overrides, FileFormat::Toml));
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.data.url.trim().is_empty() {
            return Err("Menu data url must not be empty".to_string());
        }
        if self.data.fallback_image.trim().is_empty() {
            return Err("Fallback image path must not be empty".to_string());
        }

        let mounts = [
            ("sections_id", &self.dom.sections_id),
            ("empty_state_id", &self.dom.empty_state_id),
            ("select_id", &self.dom.select_id),
            ("button_class", &self.dom.button_class),
            ("filters_id", &self.dom.filters_id),
        ];
        for (key, value) in mounts {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                return Err(format!("dom.{key} must be a single non-empty token"));
            }
        }

        Ok(())
    }
}
