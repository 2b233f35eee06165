use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const ENV_SERVER_URL: &str = "GAMESMITH_SERVER_URL";
pub const ENV_USER_ID: &str = "GAMESMITH_USER_ID";
pub const ENV_TIMEOUT_SECS: &str = "GAMESMITH_TIMEOUT_SECS";

/// Keys accepted by [`Config::set_value`], in display order.
pub const KEYS: [&str; 6] = [
    "server_url",
    "user_id",
    "request_timeout_secs",
    "ui_color_enabled",
    "plain_output",
    "last_template_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Zero disables the request timeout.
    #[serde(default = "Config::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    /// Template used by the most recent `create-game` run.
    #[serde(default)]
    pub last_template_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccessibilitySettings {
    /// Drops colors and glyph prefixes from CLI output.
    #[serde(default)]
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: Self::default_server_url(),
            user_id: None,
            request_timeout_secs: Self::default_request_timeout_secs(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
            last_template_id: None,
        }
    }
}

impl Config {
    pub fn default_server_url() -> String {
        "http://localhost:8000".into()
    }

    pub fn default_request_timeout_secs() -> u64 {
        30
    }

    fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Applies `GAMESMITH_*` environment overrides on top of the stored values.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::apply_env`] but reads from an arbitrary lookup.
    /// Empty or whitespace-only values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = read(ENV_SERVER_URL) {
            self.server_url = url;
        }
        if let Some(user) = read(ENV_USER_ID) {
            self.user_id = Some(user);
        }
        if let Some(raw) = read(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_seconds(ENV_TIMEOUT_SECS, &raw)?;
        }
        Ok(())
    }

    /// Updates one setting from its textual form, as typed on the command line.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "server_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(ConfigError::InvalidValue {
                        key: key.into(),
                        message: "expected an http:// or https:// URL".into(),
                    });
                }
                self.server_url = value.to_string();
            }
            "user_id" => self.user_id = optional(value),
            "last_template_id" => self.last_template_id = optional(value),
            "request_timeout_secs" => self.request_timeout_secs = parse_seconds(key, value)?,
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(key, value)?,
            "plain_output" => self.accessibility.plain_output = parse_bool(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Textual form of one setting; unset optional values render as `-`.
    pub fn value_of(&self, key: &str) -> Result<String, ConfigError> {
        let rendered = match key {
            "server_url" => self.server_url.clone(),
            "user_id" => display_optional(self.user_id.as_deref()),
            "last_template_id" => display_optional(self.last_template_id.as_deref()),
            "request_timeout_secs" => self.request_timeout_secs.to_string(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "plain_output" => self.accessibility.plain_output.to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(rendered)
    }
}

fn optional(value: &str) -> Option<String> {
    match value {
        "" | "-" => None,
        other => Some(other.to_string()),
    }
}

fn display_optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn parse_seconds(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.into(),
        message: format!("`{raw}` is not a whole number of seconds"),
    })
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.into(),
            message: format!("`{raw}` is not true or false"),
        }),
    }
}
