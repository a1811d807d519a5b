use super::models::ApiResponse;
use crate::error::Result;
use async_trait::async_trait;

/// The raw endpoints an operation may call. Implementations perform the
/// request and decode the body; they do not inspect it for error payloads.
#[async_trait]
pub trait DnsApi {
    async fn list_zones(&self) -> Result<ApiResponse>;
    async fn list_records(&self, zone_id: Option<&str>) -> Result<ApiResponse>;
}
