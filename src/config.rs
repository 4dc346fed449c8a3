use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::GroupId;
use crate::controller::ControllerSettings;

pub const DEFAULT_CONFIG_PATH: &str = "config/message_tracker.json";
const DEFAULT_BOT_INTERVAL_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub initial_group: u32,
    pub dark_mode: bool,
    pub bot_interval_ms: u64,
    pub typing_reset_ms: u64,
    pub self_name: String,
    pub self_avatar: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_group: 1,
            dark_mode: false,
            bot_interval_ms: DEFAULT_BOT_INTERVAL_MS,
            typing_reset_ms: 1_500,
            self_name: "You".to_string(),
            self_avatar: "🙋‍♂️".to_string(),
        }
    }
}

impl AppConfig {
    pub fn settings(&self) -> ControllerSettings {
        // tokio::time::interval không chấp nhận chu kỳ 0
        let bot_interval_ms = if self.bot_interval_ms == 0 {
            log::warn!(
                "bot_interval_ms must be positive; using default {DEFAULT_BOT_INTERVAL_MS}"
            );
            DEFAULT_BOT_INTERVAL_MS
        } else {
            self.bot_interval_ms
        };

        ControllerSettings {
            initial_group: GroupId(self.initial_group),
            dark_mode: self.dark_mode,
            bot_interval: Duration::from_millis(bot_interval_ms),
            typing_reset: Duration::from_millis(self.typing_reset_ms),
            self_name: self.self_name.clone(),
            self_avatar: self.self_avatar.clone(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
