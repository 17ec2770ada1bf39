use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_core::{HttpFetchService, MainController};
use tracing::info;

mod config;
mod render;

use config::{load_settings, validate_people_url};

#[derive(Parser, Debug)]
#[command(about = "Fetch and list Star Wars character profiles")]
struct Args {
    #[arg(long, default_value = "profiles.toml")]
    config: PathBuf,
    /// Overrides the configured people listing endpoint.
    #[arg(long)]
    people_url: Option<String>,
    /// Print the loaded records as JSON.
    #[arg(long)]
    json: bool,
    /// Exit with an error when the load fails instead of printing an empty state.
    #[arg(long)]
    strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    if let Some(people_url) = args.people_url {
        settings.people_url = people_url;
    }
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let people_url = validate_people_url(&settings.people_url)?;
    info!(%people_url, "loading characters");
    let service = HttpFetchService::with_url(people_url);

    let controller = if args.strict {
        let mut controller = MainController::unloaded(service);
        controller.load_characters().await?;
        controller
    } else {
        MainController::new(service).await
    };

    println!("{}", render::render_users(controller.users(), args.json)?);
    Ok(())
}
