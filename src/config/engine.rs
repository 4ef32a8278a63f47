//! Engine and catalog configuration structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::history::DEFAULT_HISTORY_CAPACITY;
use crate::core::registry::{EmotionRegistry, EmotionState};
use crate::core::ReactionError;

/// Scheduler timing and capacity settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Added to each state's duration before the hide timer fires.
    pub grace_period_ms: u64,
    /// Pause between one reaction expiring and the next being promoted.
    pub inter_reaction_delay_ms: u64,
    /// Maximum number of history entries kept.
    pub history_capacity: usize,
    /// Whether triggered reactions start a hide timer when promoted.
    pub auto_hide: bool,
    /// Fixed seed for message selection; OS randomness when absent.
    pub message_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grace_period_ms: 2000,
            inter_reaction_delay_ms: 500,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            auto_hide: true,
            message_seed: None,
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.history_capacity == 0 {
            return Err("history_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse engine configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by `REACTION_*` environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut cfg = Self::default();
        if let Some(v) = parse_var(&lookup, "REACTION_GRACE_PERIOD_MS")? {
            cfg.grace_period_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "REACTION_INTER_DELAY_MS")? {
            cfg.inter_reaction_delay_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "REACTION_HISTORY_CAPACITY")? {
            cfg.history_capacity = v;
        }
        if let Some(v) = parse_var(&lookup, "REACTION_AUTO_HIDE")? {
            cfg.auto_hide = v;
        }
        if let Some(v) = parse_var(&lookup, "REACTION_MESSAGE_SEED")? {
            cfg.message_seed = Some(v);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| format!("{key}: {e}"))
        })
        .transpose()
}

/// Emotion catalog as loaded from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// States in registration order; order breaks priority ties.
    pub emotions: Vec<EmotionState>,
}

impl RegistryConfig {
    /// Parse a catalog from JSON.
    pub fn from_json_str(input: &str) -> Result<Self, ReactionError> {
        serde_json::from_str(input).map_err(|e| ReactionError::Parse(e.to_string()))
    }

    /// Validate and build the registry.
    pub fn into_registry(self) -> Result<EmotionRegistry, ReactionError> {
        EmotionRegistry::new(self.emotions)
    }
}
