use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use forecast_core::{
    Applied, Config, Controller, Cycle, ForecastProvider, ForecastQuery, UnitSystem,
    provider_from_config,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Multi-day weather forecast dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store API key and defaults in the config file.
    Configure,

    /// Show the forecast once and exit.
    Show {
        /// Location to search for; defaults to the configured location.
        location: Option<String>,

        /// Unit system: "metric" or "us".
        #[arg(long, value_parser = parse_units)]
        units: Option<UnitSystem>,
    },

    /// Keep the dashboard open and search or toggle units from a prompt.
    Interactive,
}

fn parse_units(value: &str) -> Result<UnitSystem, String> {
    UnitSystem::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, units } => {
                let config = Config::load()?;
                let mut query = config.default_query();
                if let Some(location) = location {
                    query.location = location;
                }
                if let Some(units) = units {
                    query.units = units;
                }
                tracing::debug!(?query, "showing forecast");
                show(&config, query).await
            }
            Command::Interactive => {
                let config = Config::load()?;
                tracing::debug!(query = ?config.default_query(), "starting interactive dashboard");
                interactive(&config).await
            }
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("Visual Crossing API key (leave empty for the built-in key):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.api_key = Some(api_key.trim().to_string()).filter(|k| !k.is_empty());

    let current = config.default_query();
    let location = Text::new("Default location:")
        .with_default(&current.location)
        .prompt()
        .context("Failed to read default location")?;
    config.default_location = Some(location.trim().to_string()).filter(|l| !l.is_empty());

    let start = UnitSystem::all().iter().position(|u| *u == current.units).unwrap_or(0);
    let units = Select::new("Default units:", UnitSystem::all().to_vec())
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read default units")?;
    config.default_units = Some(units);

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(config: &Config, query: ForecastQuery) -> Result<()> {
    let provider = provider_from_config(config)?;
    let mut controller = Controller::new(query);

    let cycle = controller.startup();
    match refresh(&mut controller, provider.as_ref(), cycle).await {
        Applied::Failed => anyhow::bail!("No forecast for '{}'", controller.query().location),
        _ => Ok(()),
    }
}

const SEARCH: &str = "Search location";
const QUIT: &str = "Quit";

async fn interactive(config: &Config) -> Result<()> {
    let provider = provider_from_config(config)?;
    let mut controller = Controller::new(config.default_query());

    let cycle = controller.startup();
    refresh(&mut controller, provider.as_ref(), cycle).await;

    loop {
        // The toggle entry names the unit system it switches to.
        let toggle = format!("Switch to {}", controller.query().units.toggled().label());
        let action = Select::new("Next:", vec![SEARCH, toggle.as_str(), QUIT]).prompt();
        let Some(choice) = unless_canceled(action, "Failed to read action")? else {
            break;
        };

        let cycle = match choice {
            SEARCH => {
                let input = Text::new("Location:").prompt();
                let Some(input) = unless_canceled(input, "Failed to read location")? else {
                    continue;
                };
                controller.search(&input)
            }
            QUIT => break,
            _ => controller.toggle_units(),
        };

        refresh(&mut controller, provider.as_ref(), cycle).await;
    }

    Ok(())
}

/// `None` when the user backs out of a prompt with Esc.
fn unless_canceled<T>(
    answer: Result<T, InquireError>,
    context: &'static str,
) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err).context(context),
    }
}

async fn refresh(
    controller: &mut Controller,
    provider: &dyn ForecastProvider,
    cycle: Cycle,
) -> Applied {
    let applied = controller.run(provider, cycle, Local::now().date_naive()).await;
    print!("{}", view::Dashboard(controller.page()));
    applied
}
