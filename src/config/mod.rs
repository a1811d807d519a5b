//! Settings resolution.
//!
//! Each setting is taken from the first non-empty source in this order:
//! explicit argument, environment variable, config file. Resolution happens
//! once, at the edge, and operations only ever see a [`Settings`].

mod models;

pub use models::{FileConfig, Settings};

use crate::error::{Error, Result};
use std::{borrow::Cow, fs, path::Path};
use validator::Validate;

pub const DEFAULT_API_URL: &str = "https://dns.hetzner.com/api/v1";
pub const DEFAULT_ZONE_NOT_FOUND_MESSAGE: &str = "record not found";

pub const TOKEN_ENV: &str = "HETZNER_DNS_TOKEN";
pub const ZONE_ID_ENV: &str = "ZONE_ID";
pub const ZONE_NAME_ENV: &str = "ZONE_NAME";
pub const API_URL_ENV: &str = "HETZNER_DNS_API_URL";

/// Values passed explicitly by the caller (function arguments or CLI flags).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub token: Option<String>,
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    pub api_url: Option<String>,
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: FileConfig = serde_yaml::from_str(&contents).map_err(|e| {
            Error::InvalidConfig(format!("failed to parse {}: {}", path.display(), e))
        })?;

        config
            .validate()
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;

        Ok(config)
    }
}

impl Settings {
    /// Resolves settings against the process environment.
    pub fn resolve(overrides: Overrides, file: Option<FileConfig>) -> Result<Self> {
        Self::resolve_with(overrides, file, |key| std::env::var(key).ok())
    }

    /// Resolves settings with a caller-supplied environment lookup.
    pub fn resolve_with<F>(overrides: Overrides, file: Option<FileConfig>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let pick = |explicit: Option<String>, key: &str, from_file: Option<String>| {
            non_empty(explicit)
                .or_else(|| non_empty(env(key)))
                .or_else(|| non_empty(from_file))
        };

        let token = pick(overrides.token, TOKEN_ENV, file.api_token).ok_or(
            Error::ConfigurationMissing {
                setting: "API token",
                env: TOKEN_ENV,
            },
        )?;

        let api_url = pick(overrides.api_url, API_URL_ENV, file.api_url)
            .map(|url| Cow::Owned(url.trim_end_matches('/').to_string()))
            .unwrap_or(Cow::Borrowed(DEFAULT_API_URL));

        let zone_not_found_message = non_empty(file.zone_not_found_message)
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(DEFAULT_ZONE_NOT_FOUND_MESSAGE));

        // A set but empty ZONE_NAME still asks for a lookup, which then
        // fails instead of widening the request to every zone.
        let zone_name = non_empty(overrides.zone_name)
            .or_else(|| env(ZONE_NAME_ENV))
            .or_else(|| non_empty(file.zone_name));

        Ok(Self {
            token,
            zone_id: pick(overrides.zone_id, ZONE_ID_ENV, file.zone_id),
            zone_name,
            api_url,
            zone_not_found_message,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
