use std::borrow::Cow;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong between resolving settings and handing back a
/// response body.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required setting (the API token) was neither passed nor found in the
    /// environment or config file.
    #[error("missing {setting}: pass it explicitly or set {env}")]
    ConfigurationMissing {
        setting: &'static str,
        env: &'static str,
    },

    /// A zone name was given but no zone with that name exists. Displays the
    /// configured not-found message.
    #[error("{message}")]
    ZoneNotFound {
        name: String,
        message: Cow<'static, str>,
    },

    /// The service answered with an error payload.
    #[error("{message}")]
    Api { message: String, code: Option<i64> },

    /// The request never produced a usable JSON body.
    #[error("{0}")]
    Transport(String),

    /// The config file could not be read or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else if err.is_decode() {
            "could not decode response"
        } else {
            "request failed"
        };
        Self::Transport(format!("{}: {}", kind, err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("malformed JSON response: {}", err))
    }
}

impl Error {
    /// The server-provided error code, if the service sent one.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => *code,
            _ => None,
        }
    }
}
