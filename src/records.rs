use crate::{
    api::{validate, ApiResponse, DnsApi},
    config::Settings,
    error::Result,
    zones,
};
use log::{info, warn};

/// Lists DNS records.
///
/// With a zone name the zone is looked up first and its id scopes the
/// request; an unknown name fails before any record request goes out. With
/// only a zone id that id is used as given. With neither, records of every
/// zone are returned.
pub async fn list(api: &impl DnsApi, settings: &Settings) -> Result<ApiResponse> {
    let zone_id = match settings.zone_name.as_deref() {
        Some(name) => {
            let zone = zones::find_by_name(api, settings, name).await?;
            if let Some(given) = settings.zone_id.as_deref() {
                if given != zone.id {
                    warn!(
                        "Zone id {} does not match zone {} ({}), using the looked up id",
                        given, name, zone.id
                    );
                }
            }
            Some(zone.id)
        }
        None => settings.zone_id.clone(),
    };

    match zone_id.as_deref() {
        Some(id) => info!("Listing records of zone {}", id),
        None => info!("Listing records of all zones"),
    }

    validate(api.list_records(zone_id.as_deref()).await?)
}
