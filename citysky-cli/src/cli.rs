use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::info;

use citysky_core::{Config, OpenWeatherClient, SearchSession, source_from_config};

use crate::display::Painter;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citysky", version, about = "Current weather and 5-day forecast for a city")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// OpenWeather API key; overrides the configured one.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Print without the mood background color.
    #[arg(long, global = true)]
    pub plain: bool,

    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Look up a single city and print the result.
    Show {
        /// City name; several words are joined with spaces.
        city: Vec<String>,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { api_key, plain, command, .. } = self;
        let painter = Painter::new(!plain);

        match command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city } => {
                let session = open_session(api_key.as_deref())?;
                session.search(&city.join(" ")).await;
                painter.print(&session.snapshot().await);
                Ok(())
            }
            Command::Interactive => {
                let session = open_session(api_key.as_deref())?;
                interactive(&session, &painter).await
            }
        }
    }
}

fn open_session(api_key: Option<&str>) -> anyhow::Result<SearchSession<OpenWeatherClient>> {
    let config = Config::load()?;
    let source = source_from_config(&config, api_key)?;
    Ok(SearchSession::new(source))
}

fn configure() -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt()
        .context("API key prompt failed")?;

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "configuration saved");
    println!("Saved API key to {}", path.display());

    Ok(())
}

async fn interactive(
    session: &SearchSession<OpenWeatherClient>,
    painter: &Painter,
) -> anyhow::Result<()> {
    painter.print(&session.snapshot().await);

    while let Some(input) = prompt_city().await? {
        session.search(&input).await;
        painter.print(&session.snapshot().await);
    }

    Ok(())
}

/// Reads one line off the runtime's worker threads; `None` once the user quits.
async fn prompt_city() -> anyhow::Result<Option<String>> {
    let answer = tokio::task::spawn_blocking(|| Text::new("City:").prompt())
        .await
        .context("City prompt task failed")?;

    city_from_prompt(answer)
}

fn city_from_prompt(answer: Result<String, InquireError>) -> anyhow::Result<Option<String>> {
    match answer {
        Ok(input) => Ok(Some(input)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("City prompt failed"),
    }
}
