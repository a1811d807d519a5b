use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A DNS zone as returned by `GET /zones`. Fields beyond id and name are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ZonesResponse {
    pub zones: Vec<Zone>,
}

/// A decoded response: the body text exactly as received, its parsed JSON,
/// and the HTTP status it came with.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub text: String,
    pub json: Value,
}

impl ApiResponse {
    /// Builds a response from a JSON value, as if the service had sent it with
    /// a 200 status.
    pub fn from_json(json: Value) -> Self {
        Self {
            status: 200,
            text: json.to_string(),
            json,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
