use crate::error::Result;
use crate::rofi::DEFAULT_ACCENT_COLOR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.yaml";

/// Environment variable overriding `fg_color` from the config file.
pub const FG_COLOR_ENV: &str = "ROFI_WEB_FG_COLOR";

/// Configuration for rofi-web, stored in config.yaml.
///
/// Loaded once at start-up and passed down by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RofiWebConfig {
    /// Color of the tag annotation next to each link name (e.g. "#928374")
    #[serde(default, alias = "fgColor")]
    pub fg_color: String,
}

impl RofiWebConfig {
    /// Load config from the given file, or return defaults if it is missing or blank
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RofiWebConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Applies an `fg_color` override; empty values are ignored.
    pub fn with_fg_color_override(mut self, fg_color: Option<String>) -> Self {
        if let Some(color) = fg_color.filter(|c| !c.is_empty()) {
            self.fg_color = color;
        }
        self
    }

    /// The accent color to render with, falling back to the default.
    pub fn accent_color(&self) -> &str {
        if self.fg_color.is_empty() {
            DEFAULT_ACCENT_COLOR
        } else {
            &self.fg_color
        }
    }
}
