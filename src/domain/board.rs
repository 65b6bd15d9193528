//! Board domain model
//!
//! A board is rebuilt from scratch on every run: the raw stacks are sorted,
//! filtered and flattened into [`StackGroup`]s that every renderer shares.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::due::{parse_due, serialize_iso};
use super::wire::{RawCard, RawLabel, RawStack, RawUser};

/// A list/column on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stack {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub order: i64,
}

impl Stack {
    /// The title to show, falling back to `List {id}` for untitled stacks
    pub fn heading(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => match self.id {
                Some(id) => format!("List {}", id),
                None => "List ?".to_string(),
            },
        }
    }

    /// Stack title compared case-insensitively, e.g. for "todo"/"done" styling
    pub fn title_is(&self, names: &[&str]) -> bool {
        let title = self.title.as_deref().unwrap_or_default().to_lowercase();
        names.iter().any(|name| title == *name)
    }
}

/// A card within a stack
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub order: i64,
    pub archived: bool,

    #[serde(serialize_with = "serialize_iso")]
    pub duedate: Option<DateTime<FixedOffset>>,

    pub owner: Option<String>,
    pub assignees: Vec<String>,
    pub labels: Vec<String>,
}

impl Card {
    /// The title to show, `(untitled)` when missing or empty
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => "(untitled)",
        }
    }
}

/// A stack together with its visible cards, both in board order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackGroup {
    pub stack: Stack,
    pub cards: Vec<Card>,
}

/// Everything the structured output reports about one board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub board_id: u64,
    pub api_base: String,
    pub stacks: Vec<StackGroup>,
}

impl Board {
    pub fn new(board_id: u64, api_base: impl Into<String>, stacks: Vec<StackGroup>) -> Self {
        Self {
            board_id,
            api_base: api_base.into(),
            stacks,
        }
    }

    /// Total number of cards across all stacks
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(|group| group.cards.len()).sum()
    }
}

/// Resolves a user reference to a display name
///
/// Prefers the display name, then the primary key, then the uid. Assignment
/// wrappers are unwrapped through their participant. Never returns an empty
/// string.
pub fn format_user(user: &RawUser) -> Option<String> {
    match user {
        RawUser::Id(id) => non_empty(Some(id)),
        RawUser::Record(record) => non_empty(record.displayname.as_ref())
            .or_else(|| non_empty(record.primary_key.as_ref()))
            .or_else(|| non_empty(record.uid.as_ref()))
            .or_else(|| record.participant.as_deref().and_then(format_user)),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}

/// Builds the grouped model from raw stacks
///
/// Stacks and cards are ordered by their `order` field (missing counts as 0)
/// with ties kept in API order. Archived cards are dropped unless
/// `include_archived` is set.
pub fn build_grouped_model(stacks: &[RawStack], include_archived: bool) -> Vec<StackGroup> {
    let mut sorted: Vec<&RawStack> = stacks.iter().collect();
    sorted.sort_by_key(|stack| stack.order.unwrap_or(0));

    sorted
        .into_iter()
        .map(|raw| {
            let mut cards: Vec<&RawCard> = raw
                .cards
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter(|card| include_archived || !card.archived.unwrap_or(false))
                .collect();
            cards.sort_by_key(|card| card.order.unwrap_or(0));

            StackGroup {
                stack: Stack {
                    id: raw.id,
                    title: raw.title.clone(),
                    order: raw.order.unwrap_or(0),
                },
                cards: cards.into_iter().map(normalize_card).collect(),
            }
        })
        .collect()
}

fn normalize_card(raw: &RawCard) -> Card {
    Card {
        id: raw.id,
        title: raw.title.clone(),
        order: raw.order.unwrap_or(0),
        archived: raw.archived.unwrap_or(false),
        duedate: parse_due(raw.duedate.as_deref()),
        owner: raw.owner.as_ref().and_then(format_user),
        assignees: raw
            .assigned_users
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(format_user)
            .collect(),
        labels: raw
            .labels
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(label_title)
            .collect(),
    }
}

fn label_title(label: &RawLabel) -> Option<String> {
    non_empty(label.title.as_ref())
}
