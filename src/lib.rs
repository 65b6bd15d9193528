//! deck-cards - Read a Nextcloud Deck board from the command line
//!
//! Fetches the stacks of one board over the Deck REST API, normalizes them
//! into an ordered stack/card model and renders that model as JSON, plain
//! text, ANSI-colored text, Pango markup or Markdown.

pub mod config;
pub mod domain;
pub mod remote;
pub mod render;
pub mod cli;

pub use domain::{build_grouped_model, Board, Card, DateStyle, Stack, StackGroup};
pub use remote::{DeckClient, RequestError};
pub use render::{render, OutputMode, RenderOptions};
