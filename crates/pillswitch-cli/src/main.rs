//! Pillswitch CLI - render and preview toggle switches as draw commands.

mod output;

use clap::{Args, Parser, Subcommand};
use output::{format_commands, Format};
use pillswitch_core::{Size, ThemeError, ThemeTokens, ThemeVariant};
use pillswitch_widgets::{render, render_sample, PreviewHost, SwitchColors, DEFAULT_SIZE};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "pillswitch")]
#[command(about = "Render toggle switches to draw commands")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sample column: a checked switch above an unchecked one
    Sample {
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render a single switch
    Render {
        /// State to draw
        #[arg(long, action = clap::ArgAction::Set, default_value_t = false)]
        checked: bool,

        /// Surface width in logical units
        #[arg(long, default_value_t = DEFAULT_SIZE.width)]
        width: f32,

        /// Surface height in logical units
        #[arg(long, default_value_t = DEFAULT_SIZE.height)]
        height: f32,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Click a switch and show the state the host ends up with
    Toggle {
        /// Initial state
        #[arg(long, action = clap::ArgAction::Set, default_value_t = false)]
        checked: bool,

        /// Number of clicks
        #[arg(long, default_value_t = 1)]
        clicks: u32,

        #[command(flatten)]
        style: StyleArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct StyleArgs {
    /// Built-in palette
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Theme TOML file; overrides --theme
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Theme {
    Light,
    Dark,
}

impl From<Theme> for ThemeVariant {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("failed to encode draw commands: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid surface size {width}x{height}: dimensions must be finite")]
    InvalidSize { width: f32, height: f32 },
}

impl StyleArgs {
    fn colors(&self) -> Result<SwitchColors, CliError> {
        let tokens = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading theme file");
                ThemeTokens::load(path)?
            }
            None => ThemeTokens::for_variant(self.theme.into()),
        };
        Ok(SwitchColors::from_theme(&tokens))
    }
}

fn surface(width: f32, height: f32) -> Result<Size, CliError> {
    if width.is_finite() && height.is_finite() {
        Ok(Size::new(width, height))
    } else {
        Err(CliError::InvalidSize { width, height })
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Sample { style } => {
            let commands = render_sample(style.colors()?);
            info!(commands = commands.len(), "rendered sample column");
            Ok(format_commands(&commands, style.format)?)
        }
        Commands::Render {
            checked,
            width,
            height,
            style,
        } => {
            let size = surface(width, height)?;
            let commands = render(checked, &style.colors()?, size);
            info!(checked, width, height, "rendered switch");
            Ok(format_commands(&commands, style.format)?)
        }
        Commands::Toggle {
            checked,
            clicks,
            style,
        } => {
            let mut host = PreviewHost::new(checked, style.colors()?, DEFAULT_SIZE);
            for _ in 0..clicks {
                host.click();
            }
            let frame = format_commands(&host.frame(), style.format)?;
            Ok(format!("checked={}\n{frame}", host.checked()))
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pillswitch=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() -> Result<(), CliError> {
    init_logging();
    let output = run(Cli::parse())?;
    println!("{output}");
    Ok(())
}
