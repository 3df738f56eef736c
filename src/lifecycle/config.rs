//! # Configuration
//!
//! Runtime settings for the [`OrderSystem`](super::OrderSystem), read from the
//! environment (and a `.env` file, if present):
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `ORDERS_CHANNEL_BUFFER` | 32 | request channel capacity per actor |
//! | `ORDERS_PICKUP_CODE_ATTEMPTS` | 64 | candidates drawn before giving up |
//! | `ORDERS_CREATE_RETRIES` | 3 | re-inserts after losing a pickup code race |
//! | `ORDERS_STRICT_STATUS` | true | status updates must follow the lifecycle |

use crate::ordering::TransitionMode;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub channel_buffer: usize,
    pub pickup_code_attempts: u32,
    pub create_retries: u32,
    pub transition_mode: TransitionMode,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            pickup_code_attempts: 64,
            create_retries: 3,
            transition_mode: TransitionMode::Strict,
        }
    }
}

impl SystemConfig {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Builds a config from `lookup`, falling back to the defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let channel_buffer = positive(&lookup, "ORDERS_CHANNEL_BUFFER", defaults.channel_buffer)?;
        let pickup_code_attempts = positive(
            &lookup,
            "ORDERS_PICKUP_CODE_ATTEMPTS",
            defaults.pickup_code_attempts,
        )?;
        let create_retries = parsed(&lookup, "ORDERS_CREATE_RETRIES", defaults.create_retries)?;
        let strict = match lookup("ORDERS_STRICT_STATUS") {
            None => defaults.transition_mode == TransitionMode::Strict,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                key: "ORDERS_STRICT_STATUS",
                value: raw,
            })?,
        };

        Ok(Self {
            channel_buffer,
            pickup_code_attempts,
            create_retries,
            transition_mode: if strict {
                TransitionMode::Strict
            } else {
                TransitionMode::Permissive
            },
        })
    }
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => parse_raw(key, raw),
    }
}

fn parse_raw<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

/// Like [`parsed`], but zero is refused too.
fn positive<T: FromStr + PartialEq + Default>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = parse_raw(key, raw.clone())?;
    if value == T::default() {
        return Err(ConfigError::Invalid { key, value: raw });
    }
    Ok(value)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
