use std::str::FromStr;

use failure::Fail;

use serde::{Deserialize, Serialize};

use crate::model::Gender;

const DEFAULT_LOGLEVEL: &str = "info";
const DEFAULT_RESOURCE_PATH: &str = "resources/contacts.json";
const DEFAULT_PORTRAIT_BASE: &str = "http://api.randomuser.me/portraits/";
const DEFAULT_PORTRAIT_INDEX: u32 = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loglevel: String,
    pub resource_path: String,
    pub avatar: AvatarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            loglevel: DEFAULT_LOGLEVEL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            avatar: AvatarConfig::default(),
        }
    }
}

impl Config {
    pub fn from_json(serialised: &str) -> Result<Config, ConfigurationError> {
        serde_json::from_str(serialised).map_err(|e| ConfigurationError::FormatError {
            message: "Configuration".to_string(),
            cause: e,
        })
    }

    /// Configured log level, `Info` when the value is not a known level
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.loglevel).unwrap_or(log::Level::Info)
    }
}

/// Where contact portraits are taken from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub base_url: String,
    pub index: u32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        AvatarConfig {
            base_url: DEFAULT_PORTRAIT_BASE.to_string(),
            index: DEFAULT_PORTRAIT_INDEX,
        }
    }
}

impl AvatarConfig {
    pub fn portrait_url(&self, gender: Gender, img: u32) -> String {
        format!("{}{}/{}.jpg", self.base_url, gender, img)
    }
}

#[derive(Debug, Fail)]
pub enum ConfigurationError {
    #[fail(display = "Invalid format: {}", message)]
    FormatError {
        message: String,
        #[fail(cause)]
        cause: serde_json::Error,
    },
}
