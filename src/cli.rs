//! Command-line front end. Parses arguments, resolves settings once and runs a
//! single operation, handing back the raw response body for printing.

use crate::{
    api::{ApiResponse, HetznerClient},
    config::{FileConfig, Overrides, Settings, ZONE_NAME_ENV},
    error::{Error, Result},
    records, zones,
};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[command(name = "hetzner-dns", version, about = "Query the Hetzner DNS API")]
pub struct Args {
    /// API token (defaults to $HETZNER_DNS_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// YAML config file, consulted after arguments and environment
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// API base URL (defaults to $HETZNER_DNS_API_URL, then the public endpoint)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// DNS record operations
    #[command(subcommand)]
    Records(RecordsCommand),

    /// DNS zone operations
    #[command(subcommand)]
    Zones(ZonesCommand),
}

#[derive(Debug, Subcommand)]
enum RecordsCommand {
    /// List records, optionally limited to one zone
    List {
        /// Zone id (defaults to $ZONE_ID)
        #[arg(long)]
        zone_id: Option<String>,

        /// Zone name, looked up to find its id (defaults to $ZONE_NAME)
        #[arg(long)]
        zone_name: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum ZonesCommand {
    /// List all zones
    List,

    /// Show the zone with the given name
    Get {
        /// Zone name (defaults to $ZONE_NAME)
        #[arg(long)]
        name: Option<String>,
    },
}

impl Args {
    pub async fn execute(self) -> Result<String> {
        self.execute_with(|key| std::env::var(key).ok()).await
    }

    /// Runs the command with a caller-supplied environment lookup and returns
    /// the response body to print.
    pub async fn execute_with<F>(self, env: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.config.as_deref().map(FileConfig::load).transpose()?;

        let mut overrides = Overrides {
            token: self.token,
            api_url: self.api_url,
            ..Overrides::default()
        };
        match &self.command {
            Command::Records(RecordsCommand::List { zone_id, zone_name }) => {
                overrides.zone_id = zone_id.clone();
                overrides.zone_name = zone_name.clone();
            }
            Command::Zones(ZonesCommand::Get { name }) => {
                overrides.zone_name = name.clone();
            }
            Command::Zones(ZonesCommand::List) => {}
        }

        let settings = Settings::resolve_with(overrides, file, env)?;
        let client = HetznerClient::new(&settings)?;

        let response: ApiResponse = match self.command {
            Command::Records(RecordsCommand::List { .. }) => {
                records::list(&client, &settings).await?
            }
            Command::Zones(ZonesCommand::List) => zones::list(&client).await?,
            Command::Zones(ZonesCommand::Get { .. }) => {
                let name = settings
                    .zone_name
                    .as_deref()
                    .ok_or(Error::ConfigurationMissing {
                        setting: "zone name",
                        env: ZONE_NAME_ENV,
                    })?;
                zones::get(&client, &settings, name).await?
            }
        };

        Ok(response.text)
    }
}

/// Turns a command's outcome into the text to print on stdout and the process
/// exit code: the body and success, or `Error: <message>` and failure.
pub fn render(result: Result<String>) -> (String, ExitCode) {
    match result {
        Ok(body) => (body, ExitCode::SUCCESS),
        Err(e) => (format!("Error: {}", e), ExitCode::FAILURE),
    }
}
