use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::Password;
use weathernow_core::{Config, OpenWeatherClient};

use crate::app::{self, SearchSession};
use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(&city).await,
            None => app::run_interactive(client_from_config()?).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    if city.trim().is_empty() {
        bail!("City name is required");
    }

    let mut session = SearchSession::new(client_from_config()?);
    session.submit(city).await;
    render::render(session.state());

    Ok(())
}

fn client_from_config() -> anyhow::Result<OpenWeatherClient> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?;
    Ok(OpenWeatherClient::new(api_key))
}
