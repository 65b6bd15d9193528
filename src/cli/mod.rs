//! # Command-Line Interface
//!
//! A single command: fetch one board and print it.
//!
//! ## Settings
//!
//! | Flag | Environment | Required |
//! |------|-------------|----------|
//! | `--url` | `NEXTCLOUD_BASE_URL` | yes |
//! | `-u, --username` | `NEXTCLOUD_USERNAME` | yes |
//! | `-p, --password` | `NEXTCLOUD_PASSWORD` | yes |
//! | `-b, --board-id` | `NEXTCLOUD_BOARD_ID` | yes |
//! | `--include-archived` | `NEXTCLOUD_INCLUDE_ARCHIVED` | no |
//! | `--config` | `DECK_CARDS_CONFIG` | no |
//!
//! Anything not given on the command line or in the environment is taken from
//! the config file, see [`crate::config`].
//!
//! ## Output Modes
//!
//! `--json`, `--markdown`, `--pango`, `--color`, or plain text. When several
//! are given the first in that order wins.
//!
//! ## Exit Status
//!
//! - `0` - board printed (an empty board included)
//! - `1` - the request failed
//! - `2` - required settings missing or config file unusable
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and print the board, then [`report()`]
//! on failure to obtain the exit status.

mod app;
mod output;

pub use app::{report, run, Cli, EXIT_CONFIG, EXIT_FAILURE};
pub use output::Output;
