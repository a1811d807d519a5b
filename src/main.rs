use clap::Parser;
use hetzner_dns::cli::{self, Args};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let (output, code) = cli::render(Args::parse().execute().await);
    println!("{}", output);
    code
}
