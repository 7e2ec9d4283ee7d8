use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use weather_core::{Config, Panel, WeatherWidget, codes, provider_from_config};

use crate::view::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for Atlanta, GA")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current conditions and show the widget (default).
    Show,

    /// List every weather code and its label.
    Codes,

    /// Show the label for a single weather code.
    Code {
        /// WMO weather code, e.g. 3 or 95.
        #[arg(allow_negative_numbers = true)]
        code: i64,
    },

    /// Interactively set the API base URL and user agent.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Show) {
            Command::Show => {
                let config = load_config(self.config.as_deref())?;
                show(&config).await?;
            }
            Command::Codes => {
                for code in codes::KNOWN_CODES {
                    println!("{code:>3}  {}", codes::describe(code));
                }
            }
            Command::Code { code } => {
                println!("{}", codes::describe(code));
            }
            Command::Configure => {
                let path = config_path(self.config.as_deref())?;
                configure(&path)?;
            }
            Command::ConfigPath => {
                println!("{}", config_path(self.config.as_deref())?.display());
            }
        }

        Ok(())
    }
}

async fn show(config: &Config) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;

    let widget = WeatherWidget::new(Panel::default());
    println!("{}", TerminalView::new(widget.surface()));

    let widget = widget
        .initialize(provider)
        .await
        .context("Weather widget task panicked")?;

    println!("{}", TerminalView::new(widget.surface()));
    Ok(())
}

fn configure(path: &Path) -> anyhow::Result<()> {
    let mut config = Config::load_from(path)?;

    let api_base = inquire::Text::new("Open-Meteo API base URL:")
        .with_default(&config.api_base)
        .prompt()
        .context("Failed to read API base URL")?;
    config.set_api_base(&api_base);

    let user_agent = inquire::Text::new("User-Agent header:")
        .with_default(&config.user_agent)
        .prompt()
        .context("Failed to read user agent")?;
    config.user_agent = user_agent.trim().to_string();

    config.save_to(path)?;
    info!("Saved configuration to {}", path.display());
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path(),
    }
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    Config::load_from(&config_path(explicit)?)
}
