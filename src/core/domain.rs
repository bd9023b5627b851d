use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::{LibraryError, LibraryResult};

pub const BRANCH_ENV: &str = "LIBRARY_BRANCH_ID";
pub const LOG_LEVEL_ENV: &str = "LIBRARY_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "LIBRARY_LOG_FORMAT";

// ItemId is the identity of a single catalog item instance. Two items with the
// same content are still different items.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable {
    fn id(&self) -> ItemId;
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum LogFormat {
    Compact,
    Json,
}

impl TryFrom<&str> for LogFormat {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(LibraryError::validation(
                format!("unsupported log format {}", other).as_str(), Some(LOG_FORMAT_ENV.to_string()))),
        }
    }
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> LibraryResult<Self> {
        let mut config = Configuration::new(lookup(BRANCH_ENV).as_deref().unwrap_or("main"));
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.log_format = LogFormat::try_from(format.as_str())?;
        }
        Ok(config)
    }
}
