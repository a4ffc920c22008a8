use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use super::http::DEFAULT_API_BASE;

pub const SETTINGS_FILE: &str = "settings.json";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User settings persisted as JSON. Missing fields take their defaults so
/// older settings files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_base: String,
    pub timeout_secs: u64,
    pub dark_mode: bool,
    pub zoom: f32,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dark_mode: true,
            zoom: 1.0,
        }
    }
}

/// Values given on the command line. They win over the settings file for
/// this run but are not written back.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
    pub light: bool,
}

impl SettingsData {
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        if let Some(api_base) = &overrides.api_base {
            self.api_base = api_base.clone();
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if overrides.light {
            self.dark_mode = false;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
