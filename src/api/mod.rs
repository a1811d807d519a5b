pub mod client;
pub mod hetzner;
pub mod models;
pub mod validate;

pub use client::DnsApi;
pub use hetzner::HetznerClient;
pub use models::{ApiResponse, Zone, ZonesResponse};
pub use validate::{check_response_for_errors, validate};
