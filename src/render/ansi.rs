//! ANSI-colored terminal output with emoji markers

use super::{walk, Meta, RenderOptions, NO_CARDS};
use crate::domain::Board;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const STACK: &str = "🗂️";
const CARD: &str = "📝";

/// Color and glyph for a metadata fragment
fn style(meta: &Meta<'_>) -> (&'static str, &'static str) {
    match meta {
        Meta::Labels(_) => (MAGENTA, "🏷️"),
        Meta::Owner(_) => (CYAN, "👤"),
        Meta::Assignees(_) => (CYAN, "👥"),
        Meta::Due(_) => (YELLOW, "📅"),
        Meta::Archived => (DIM, "📦"),
    }
}

pub(crate) fn render(board: &Board, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    for stack in walk(board, options) {
        lines.push(format!("\n{BOLD}{BLUE}{STACK} {}{RESET}", stack.heading));

        if stack.cards.is_empty() {
            lines.push(format!("{DIM}{NO_CARDS}{RESET}"));
            continue;
        }

        for card in stack.cards {
            let mut line = format!("- {BOLD}{CARD} {}{RESET}", card.title);
            for meta in &card.meta {
                let (color, glyph) = style(meta);
                line.push_str(&format!("  {color}{glyph} {}{RESET}", meta.value()));
            }
            lines.push(line);
        }
    }

    lines.join("\n").trim_start_matches('\n').to_string()
}
