use crate::{
    api::{validate, ApiResponse, DnsApi, Zone, ZonesResponse},
    config::Settings,
    error::{Error, Result},
};
use log::info;

/// Lists every zone the token can see.
pub async fn list(api: &impl DnsApi) -> Result<ApiResponse> {
    validate(api.list_zones().await?)
}

/// Finds the zone called `name`. A missing zone fails with
/// [`Error::ZoneNotFound`] carrying the configured message.
pub async fn find_by_name(
    api: &impl DnsApi,
    settings: &Settings,
    name: &str,
) -> Result<Zone> {
    let response = list(api).await?;
    let zones: ZonesResponse = serde_json::from_value(response.json).map_err(|e| {
        Error::Transport(format!("unexpected zone list response: {}", e))
    })?;

    let zone = zones
        .zones
        .into_iter()
        .find(|zone| zone.name == name)
        .ok_or_else(|| Error::ZoneNotFound {
            name: name.to_string(),
            message: settings.zone_not_found_message.clone(),
        })?;

    info!("Resolved zone {} to id {}", zone.name, zone.id);
    Ok(zone)
}

/// Like [`find_by_name`], but returns the zone as a response so it can be
/// printed the same way as any other command's output.
pub async fn get(
    api: &impl DnsApi,
    settings: &Settings,
    name: &str,
) -> Result<ApiResponse> {
    let zone = find_by_name(api, settings, name).await?;
    let json = serde_json::to_value(&zone)?;
    Ok(ApiResponse::from_json(json))
}
