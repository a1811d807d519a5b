use super::{client::DnsApi, models::ApiResponse};
use crate::{
    config::Settings,
    error::{Error, Result},
};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};

const AUTH_HEADER: &str = "Auth-API-Token";

pub struct HetznerClient {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl DnsApi for HetznerClient {
    async fn list_zones(&self) -> Result<ApiResponse> {
        self.get("zones", &[]).await
    }

    async fn list_records(&self, zone_id: Option<&str>) -> Result<ApiResponse> {
        match zone_id {
            Some(zone_id) => self.get("records", &[("zone_id", zone_id)]).await,
            None => self.get("records", &[]).await,
        }
    }
}

impl HetznerClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(Self::build_headers(&settings.token)?)
                .build()?,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_headers(token: &str) -> Result<HeaderMap> {
        let mut token = HeaderValue::from_str(token).map_err(|_| {
            Error::InvalidConfig("API token contains characters not allowed in a header".into())
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, token);
        Ok(headers)
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        debug!("{} answered {} ({} bytes)", url, status, bytes.len());

        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Transport(format!("response is not valid UTF-8: {}", e)))?;
        let json = serde_json::from_str(&text)?;

        Ok(ApiResponse { status, text, json })
    }
}
