use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

/// On-disk YAML configuration. Every key is optional; the file is the lowest
/// precedence layer under environment variables and explicit arguments.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: Option<String>,

    #[validate(length(min = 1, message = "Zone ID cannot be empty"))]
    pub zone_id: Option<String>,

    #[validate(length(min = 1, message = "Zone name cannot be empty"))]
    pub zone_name: Option<String>,

    #[validate(length(min = 1, message = "API URL cannot be empty"))]
    pub api_url: Option<String>,

    #[validate(length(min = 1, message = "Zone not found message cannot be empty"))]
    pub zone_not_found_message: Option<String>,
}

/// Fully resolved settings handed to every operation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: String,
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    pub api_url: Cow<'static, str>,
    pub zone_not_found_message: Cow<'static, str>,
}

impl Settings {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            zone_id: None,
            zone_name: None,
            api_url: Cow::Borrowed(super::DEFAULT_API_URL),
            zone_not_found_message: Cow::Borrowed(super::DEFAULT_ZONE_NOT_FOUND_MESSAGE),
        }
    }

    pub fn with_zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    pub fn with_zone_name(mut self, zone_name: impl Into<String>) -> Self {
        self.zone_name = Some(zone_name.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Cow::Owned(api_url.into());
        self
    }
}
