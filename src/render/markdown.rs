//! Markdown output

use super::{walk, Meta, RenderOptions, NO_CARDS};
use crate::domain::Board;

pub(crate) fn render(board: &Board, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    for stack in walk(board, options) {
        lines.push(format!("## {}", stack.heading));

        if stack.cards.is_empty() {
            lines.push(format!("_{}_", NO_CARDS));
        }

        for card in stack.cards {
            let mut line = format!("- **{}**", card.title);
            if !card.meta.is_empty() {
                let meta: Vec<_> = card.meta.iter().map(Meta::keyed).collect();
                line.push_str(&format!(" — _{}_", meta.join("; ")));
            }
            lines.push(line);
        }

        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}
