//! Domain models for Deck boards
//!
//! Contains the normalization logic without any I/O concerns.

mod board;
mod due;
mod wire;

pub use board::{build_grouped_model, format_user, Board, Card, Stack, StackGroup};
pub use due::{format_due, format_iso, format_local, format_relative, parse_due, DateStyle};
pub use wire::{RawCard, RawLabel, RawStack, RawUser, UserRecord};
