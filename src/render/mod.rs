//! # Board Rendering
//!
//! Turns a [`Board`] into one output string. Every renderer is a pure
//! function of the board and [`RenderOptions`].
//!
//! | Mode | Flag | Notes |
//! |------|------|-------|
//! | [`OutputMode::Json`] | `--json` | Full model, owner always included |
//! | [`OutputMode::Markdown`] | `--markdown` | Headings and bullet lists |
//! | [`OutputMode::Pango`] | `--pango` | Markup for GTK labels |
//! | [`OutputMode::Color`] | `--color` | ANSI escapes and emoji |
//! | [`OutputMode::Plain`] | (default) | Plain text |
//!
//! The text renderers share one traversal ([`walk`]) that yields stacks in
//! board order and, per card, the metadata present in fixed order: labels,
//! owner (when enabled), assignees, due date, archived.

mod ansi;
mod json;
mod markdown;
mod pango;
mod plain;

use chrono::{DateTime, Utc};

use crate::domain::{format_due, Board, Card, DateStyle, Stack};

/// Placeholder line for stacks without visible cards
pub(crate) const NO_CARDS: &str = "(no cards)";

/// Output presentation, chosen by mutually exclusive flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Json,
    Markdown,
    Pango,
    Color,
    #[default]
    Plain,
}

impl OutputMode {
    /// Picks a mode when several flags are given: json > markdown > pango > color > plain
    pub fn from_flags(json: bool, markdown: bool, pango: bool, color: bool) -> Self {
        if json {
            OutputMode::Json
        } else if markdown {
            OutputMode::Markdown
        } else if pango {
            OutputMode::Pango
        } else if color {
            OutputMode::Color
        } else {
            OutputMode::Plain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Json => "json",
            OutputMode::Markdown => "markdown",
            OutputMode::Pango => "pango",
            OutputMode::Color => "color",
            OutputMode::Plain => "plain",
        }
    }
}

/// Display switches shared by the text renderers
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_owner: bool,
    pub date_style: DateStyle,
    /// Reference instant for relative due dates
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    pub fn new(show_owner: bool, date_style: DateStyle) -> Self {
        Self {
            show_owner,
            date_style,
            now: Utc::now(),
        }
    }

    /// Pins "now", making relative dates reproducible
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Renders a board in the given mode
pub fn render(
    mode: OutputMode,
    board: &Board,
    options: &RenderOptions,
) -> serde_json::Result<String> {
    Ok(match mode {
        OutputMode::Json => json::render(board)?,
        OutputMode::Markdown => markdown::render(board, options),
        OutputMode::Pango => pango::render(board, options),
        OutputMode::Color => ansi::render(board, options),
        OutputMode::Plain => plain::render(board, options),
    })
}

/// One piece of card metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Meta<'a> {
    Labels(&'a [String]),
    Owner(&'a str),
    Assignees(&'a [String]),
    Due(String),
    Archived,
}

impl Meta<'_> {
    /// The metadata value as displayed, e.g. `a, b` for a list
    pub fn value(&self) -> String {
        match self {
            Meta::Labels(items) | Meta::Assignees(items) => items.join(", "),
            Meta::Owner(owner) => owner.to_string(),
            Meta::Due(due) => due.clone(),
            Meta::Archived => "archived".to_string(),
        }
    }

    /// `key: value`, or just `archived`
    pub fn keyed(&self) -> String {
        let key = match self {
            Meta::Labels(_) => "labels",
            Meta::Owner(_) => "owner",
            Meta::Assignees(_) => "assignees",
            Meta::Due(_) => "due",
            Meta::Archived => return self.value(),
        };
        format!("{}: {}", key, self.value())
    }
}

pub(crate) struct CardView<'a> {
    pub title: &'a str,
    pub meta: Vec<Meta<'a>>,
}

pub(crate) struct StackView<'a> {
    pub stack: &'a Stack,
    pub heading: String,
    pub cards: Vec<CardView<'a>>,
}

/// Walks stacks and cards in board order, collecting present metadata
pub(crate) fn walk<'a>(
    board: &'a Board,
    options: &'a RenderOptions,
) -> impl Iterator<Item = StackView<'a>> + 'a {
    board.stacks.iter().map(move |group| StackView {
        stack: &group.stack,
        heading: group.stack.heading(),
        cards: group
            .cards
            .iter()
            .map(|card| CardView {
                title: card.display_title(),
                meta: card_meta(card, options),
            })
            .collect(),
    })
}

fn card_meta<'a>(card: &'a Card, options: &RenderOptions) -> Vec<Meta<'a>> {
    let mut meta = Vec::new();

    if !card.labels.is_empty() {
        meta.push(Meta::Labels(&card.labels));
    }
    if options.show_owner {
        if let Some(owner) = card.owner.as_deref() {
            meta.push(Meta::Owner(owner));
        }
    }
    if !card.assignees.is_empty() {
        meta.push(Meta::Assignees(&card.assignees));
    }
    if card.duedate.is_some() {
        meta.push(Meta::Due(format_due(
            card.duedate.as_ref(),
            options.date_style,
            options.now,
        )));
    }
    if card.archived {
        meta.push(Meta::Archived);
    }

    meta
}
