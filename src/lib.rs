//! A small client for the Hetzner DNS API.
//!
//! [`record_list`] and [`zone_list`] mirror the command-line tools: settings
//! not passed explicitly are read from the environment, and the parsed JSON
//! body is returned. Callers that manage their own configuration can build a
//! [`Settings`] and call [`records::list`] or [`zones::list`] directly with any
//! [`DnsApi`] implementation.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod records;
pub mod zones;

#[cfg(test)]
mod tests;

pub use api::{check_response_for_errors, ApiResponse, DnsApi, HetznerClient, Zone};
pub use config::{FileConfig, Overrides, Settings};
pub use error::{Error, Result};

use serde_json::Value;

/// Lists records, scoped to a zone when an id or name is given here or in
/// `ZONE_ID` / `ZONE_NAME`.
pub async fn record_list(
    token: Option<&str>,
    zone_id: Option<&str>,
    zone_name: Option<&str>,
) -> Result<Value> {
    let settings = Settings::resolve(
        Overrides {
            token: token.map(str::to_owned),
            zone_id: zone_id.map(str::to_owned),
            zone_name: zone_name.map(str::to_owned),
            ..Overrides::default()
        },
        None,
    )?;
    let client = HetznerClient::new(&settings)?;
    Ok(records::list(&client, &settings).await?.json)
}

/// Lists all zones visible to the token.
pub async fn zone_list(token: Option<&str>) -> Result<Value> {
    let settings = Settings::resolve(
        Overrides {
            token: token.map(str::to_owned),
            ..Overrides::default()
        },
        None,
    )?;
    let client = HetznerClient::new(&settings)?;
    Ok(zones::list(&client).await?.json)
}
