//! Run configuration (`config.json`) and bot credentials.
//!
//! `config.json` layout:
//!
//! ```json
//! {
//!   "filters": {
//!     "keywords": ["rust", "backend"],
//!     "excludeProvinces": ["ontario"],
//!     "excludeLocationKeywords": ["on-site"],
//!     "maxExperienceYears": 5,
//!     "maxSend": 10,
//!     "country": "Canada",
//!     "maxResults": 30
//!   },
//!   "schedule": { "time": "09:00", "timezone": "America/Toronto" },
//!   "delivery": { "maxMessageLength": 4096, "markSeen": "consider", "timezone": "America/Toronto" }
//! }
//! ```
//!
//! Every key is optional except where a command needs it (`fetch` needs
//! keywords).

use std::collections::HashMap;
use std::env;
use std::path::Path;

use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;

use crate::common::utils::read_json;
use crate::error::{JobPushError, Result};

pub const DEFAULT_TIMEZONE: &str = "America/Toronto";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub filters: FilterConfig,
    pub schedule: ScheduleConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub keywords: Vec<String>,
    pub exclude_provinces: Vec<String>,
    pub exclude_location_keywords: Vec<String>,
    /// No ceiling when absent or null
    pub max_experience_years: Option<u32>,
    /// Cap on jobs included in one run's message
    pub max_send: usize,
    pub country: String,
    pub max_results: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            exclude_provinces: Vec::new(),
            exclude_location_keywords: Vec::new(),
            max_experience_years: None,
            max_send: 10,
            country: "Canada".to_string(),
            max_results: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// "HH:MM"; when absent the heartbeat check always passes
    pub time: Option<String>,
    pub timezone: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            time: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Which job ids get recorded as seen at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeenPolicy {
    /// Every new job that survived filtering, including ones cut by `maxSend`.
    #[default]
    Consider,
    /// Only jobs that made it into the outgoing message.
    Deliver,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryConfig {
    pub max_message_length: usize,
    pub mark_seen: SeenPolicy,
    /// Zone for the message timestamp and `last_run`
    pub timezone: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_message_length: telegram::MAX_MESSAGE_LENGTH,
            mark_seen: SeenPolicy::Consider,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

pub(crate) fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| JobPushError::Config(format!("unknown timezone: {}", name)))
}

impl DeliveryConfig {
    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }
}

impl Config {
    /// Load and validate `config.json`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Config = read_json(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.filters.max_send == 0 {
            return Err(JobPushError::Config("filters.maxSend must be positive".into()));
        }
        if self.delivery.max_message_length == 0 {
            return Err(JobPushError::Config(
                "delivery.maxMessageLength must be positive".into(),
            ));
        }
        self.delivery.tz()?;
        self.schedule.tz()?;
        self.schedule.target_minute()?;
        Ok(())
    }

    /// Scraping needs at least one search term.
    pub fn validate_for_fetch(&self) -> Result<()> {
        if self.filters.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(JobPushError::Config(
                "no keywords configured in filters.keywords".into(),
            ));
        }
        Ok(())
    }

    /// Keywords as shown in the message header.
    pub fn keyword_label(&self) -> String {
        self.filters.keywords.join(", ")
    }
}

/// Telegram bot credentials.
#[derive(Clone)]
pub struct Secrets {
    pub bot_token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Secrets {
    /// Load credentials from `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID`
    /// (a `.env` file is honored), falling back to the secrets file.
    pub fn load(secrets_path: &Path) -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::resolve(
            env::var("TELEGRAM_BOT_TOKEN").ok(),
            env::var("TELEGRAM_CHAT_ID").ok(),
            secrets_path,
        )
    }

    /// Env values win only when both are non-empty; otherwise the file is
    /// read. Empty values after resolution are a config error.
    pub fn resolve(
        env_token: Option<String>,
        env_chat_id: Option<String>,
        secrets_path: &Path,
    ) -> Result<Self> {
        let secrets = match (env_token, env_chat_id) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => Self {
                bot_token: token,
                chat_id,
            },
            _ if secrets_path.exists() => {
                let mut file: HashMap<String, String> = read_json(secrets_path)?;
                Self {
                    bot_token: file.remove("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
                    chat_id: file.remove("TELEGRAM_CHAT_ID").unwrap_or_default(),
                }
            }
            _ => {
                return Err(JobPushError::MissingCredentials {
                    path: secrets_path.to_path_buf(),
                })
            }
        };

        if secrets.bot_token.is_empty() || secrets.chat_id.is_empty() {
            return Err(JobPushError::Config(
                "TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is empty".into(),
            ));
        }

        Ok(secrets)
    }
}

impl From<Secrets> for telegram::TelegramOptions {
    fn from(secrets: Secrets) -> Self {
        Self {
            bot_token: secrets.bot_token,
            chat_id: secrets.chat_id,
        }
    }
}
