//! Pango markup for GTK labels (status bars, desktop widgets)

use super::{walk, Meta, RenderOptions, NO_CARDS};
use crate::domain::Board;

const MUTED: &str = "#6e7781";
const DONE_TITLE: &str = "#888888";

/// Escapes text for embedding in Pango markup
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn span(color: &str, text: &str) -> String {
    format!("<span foreground='{}'>{}</span>", color, text)
}

fn meta_span(meta: &Meta<'_>) -> String {
    let (color, glyph) = match meta {
        Meta::Labels(_) => ("#a371f7", "🏷️"),
        Meta::Owner(_) => ("#58a6ff", "👤"),
        Meta::Assignees(_) => ("#58a6ff", "👥"),
        Meta::Due(_) => ("#d29922", "📅"),
        Meta::Archived => (MUTED, "📦"),
    };
    span(color, &format!("{} {}", glyph, escape(&meta.value())))
}

pub(crate) fn render(board: &Board, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    for stack in walk(board, options) {
        lines.push(format!("<b><u>{}</u></b>", escape(&stack.heading)));

        if stack.cards.is_empty() {
            lines.push(span(MUTED, NO_CARDS));
            continue;
        }

        let todo = stack.stack.title_is(&["todo", "to do"]);
        let done = stack.stack.title_is(&["done"]);

        for card in stack.cards {
            let title = escape(card.title);
            let mut line = if todo {
                format!("✔️  {}", title)
            } else if done {
                format!("✅ {}", span(DONE_TITLE, &title))
            } else {
                format!("📝 {}", title)
            };

            if !card.meta.is_empty() {
                let spans: Vec<_> = card.meta.iter().map(meta_span).collect();
                line.push_str("  ");
                line.push_str(&spans.join("  "));
            }
            lines.push(line);
        }
        lines.push(" ".to_string());
    }

    lines.join("\n")
}
