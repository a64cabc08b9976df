use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use super::ConfigError;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding `accounts.json`, `snapshots.json` and `settings.json`.
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] = [
        "data_dir",
        "theme",
        "plain_output",
        "high_contrast",
        "color",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Plain output is requested either by theme or by the accessibility flag.
    pub fn plain_mode(&self) -> bool {
        self.theme == Theme::Plain || self.accessibility.plain_output
    }

    /// Applies a `config set <key> <value>` change.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "data_dir" => {
                self.data_dir = match value.trim() {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "theme" => self.theme = Theme::from_str(value).ok_or_else(invalid)?,
            "plain_output" => self.accessibility.plain_output = parse_flag(value).ok_or_else(invalid)?,
            "high_contrast" => {
                self.accessibility.high_contrast = parse_flag(value).ok_or_else(invalid)?
            }
            "color" => self.ui_color_enabled = parse_flag(value).ok_or_else(invalid)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "data_dir",
                self.data_dir
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(default)".into()),
            ),
            ("theme", self.theme.to_string()),
            (
                "plain_output",
                self.accessibility.plain_output.to_string(),
            ),
            (
                "high_contrast",
                self.accessibility.high_contrast.to_string(),
            ),
            ("color", self.ui_color_enabled.to_string()),
        ]
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Theme::Plain),
            "iconic" => Some(Theme::Iconic),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .and_then(Theme::from_str)
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
