//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};

use super::output::Output;
use crate::config::{ConfigError, FileConfig, Overrides, Settings};
use crate::domain::{build_grouped_model, Board, DateStyle};
use crate::remote::DeckClient;
use crate::render::{self, OutputMode, RenderOptions};

/// Exit status when required settings are missing or the config is unusable
pub const EXIT_CONFIG: u8 = 2;

/// Exit status when fetching or rendering the board fails
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(name = "deck-cards")]
#[command(
    author,
    version,
    about = "List Nextcloud Deck cards from a board, grouped by lists (stacks)"
)]
pub struct Cli {
    /// Base URL, e.g. https://cloud.example.com
    #[arg(long, env = "NEXTCLOUD_BASE_URL")]
    pub url: Option<String>,

    /// Username
    #[arg(long, short = 'u', env = "NEXTCLOUD_USERNAME")]
    pub username: Option<String>,

    /// App password
    #[arg(long, short = 'p', env = "NEXTCLOUD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Board ID
    #[arg(long, short = 'b', env = "NEXTCLOUD_BOARD_ID", value_parser = parse_board_id)]
    pub board_id: Option<u64>,

    /// Include archived cards
    #[arg(
        long,
        env = "NEXTCLOUD_INCLUDE_ARCHIVED",
        action = ArgAction::SetTrue,
        value_parser = parse_switch
    )]
    pub include_archived: bool,

    /// Output grouped JSON (always includes owner)
    #[arg(long)]
    pub json: bool,

    /// ANSI-colored terminal output with emojis
    #[arg(long)]
    pub color: bool,

    /// Pango-markup text (for GTK labels)
    #[arg(long)]
    pub pango: bool,

    /// Markdown-formatted output
    #[arg(long)]
    pub markdown: bool,

    /// Show card owner (always included in JSON)
    #[arg(long)]
    pub show_owner: bool,

    /// How to display due dates [default: relative]
    #[arg(long, value_enum)]
    pub date_format: Option<DateStyle>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "DECK_CARDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(
        long,
        short = 'v',
        env = "DECK_CARDS_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = parse_switch
    )]
    pub verbose: bool,
}

impl Cli {
    /// Output mode from the mode flags, by precedence
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.json, self.markdown, self.pango, self.color)
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            board_id: self.board_id,
            include_archived: self.include_archived,
            show_owner: self.show_owner,
            date_format: self.date_format,
        }
    }
}

/// Board id; an empty value (e.g. `NEXTCLOUD_BOARD_ID=`) reads as 0, i.e. unset
fn parse_board_id(value: &str) -> Result<u64, std::num::ParseIntError> {
    if value.trim().is_empty() {
        return Ok(0);
    }
    value.trim().parse()
}

/// Boolean switch from a flag or environment variable; empty means off
fn parse_switch(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "n" | "no" | "f" | "false" | "off" => Ok(false),
        "1" | "y" | "yes" | "t" | "true" | "on" => Ok(true),
        other => Err(format!(
            "expected a boolean such as 1/0 or true/false, got '{}'",
            other
        )),
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.output_mode(), cli.verbose);

    output.verbose("deck-cards starting");

    let settings = load_settings(&cli, &output)?;
    output.verbose_ctx(
        "config",
        &format!(
            "board={} include_archived={} show_owner={} date_format={}",
            settings.board_id,
            settings.include_archived,
            settings.show_owner,
            settings.date_style.as_str()
        ),
    );

    let client = DeckClient::new(&settings.base_url, &settings.username, &settings.password);
    output.verbose_ctx("fetch", &format!("GET {}", client.stacks_url(settings.board_id)));

    let stacks = client
        .fetch_stacks(settings.board_id)
        .with_context(|| format!("failed to fetch stacks for board {}", settings.board_id))?;
    output.verbose_ctx("fetch", &format!("Received {} stacks", stacks.len()));

    let grouped = build_grouped_model(&stacks, settings.include_archived);
    let board = Board::new(settings.board_id, client.api_base(), grouped);
    output.verbose_ctx(
        "render",
        &format!(
            "Rendering {} cards as {}",
            board.card_count(),
            output.mode().as_str()
        ),
    );

    let options = RenderOptions::new(settings.show_owner, settings.date_style);
    let rendered =
        render::render(output.mode(), &board, &options).context("failed to render board")?;
    output.emit(&rendered);

    output.verbose("Command completed successfully");
    Ok(())
}

/// Resolves flags, environment and config file into settings
fn load_settings(cli: &Cli, output: &Output) -> Result<Settings> {
    let file = match cli.config.clone().or_else(FileConfig::default_path) {
        Some(path) => {
            output.verbose_ctx("config", &format!("Reading {}", path.display()));
            FileConfig::load(&path)?
        }
        None => FileConfig::default(),
    };

    Ok(Settings::resolve(cli.overrides(), file)?)
}

/// Reports a failed run on stderr and returns the process exit status
pub fn report(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ConfigError>() {
        Some(config_err) => {
            eprintln!("{}", config_err);
            if config_err.is_missing() {
                let _ = Cli::command().write_help(&mut io::stderr());
            }
            EXIT_CONFIG
        }
        None => {
            eprintln!("Error: {:#}", err);
            EXIT_FAILURE
        }
    }
}
