//! Plain-text output

use super::{walk, Meta, RenderOptions, NO_CARDS};
use crate::domain::Board;

pub(crate) fn render(board: &Board, options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    for stack in walk(board, options) {
        lines.push(format!("\n=== {} ===", stack.heading));

        if stack.cards.is_empty() {
            lines.push(NO_CARDS.to_string());
            continue;
        }

        for card in stack.cards {
            let mut line = format!("- {}", card.title);
            if !card.meta.is_empty() {
                let bits: Vec<_> = card.meta.iter().map(Meta::keyed).collect();
                line.push_str(&format!("  [{}]", bits.join("; ")));
            }
            lines.push(line);
        }
    }

    lines.join("\n").trim_start_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::domain::DateStyle;

    #[test]
    fn renders_banners_and_cards() {
        let board = board(vec![
            group(1, "Todo", vec![card(1, "Write docs"), full_card(2, "Ship")]),
            group(2, "Done", vec![]),
        ]);
        let options = RenderOptions::new(false, DateStyle::Relative).at(now());

        let out = render(&board, &options);
        assert_eq!(
            out,
            "=== Todo ===\n\
             - Write docs\n\
             - Ship  [labels: urgent, docs; assignees: Bob, Carol; due: in 2 days; archived]\n\
             \n\
             === Done ===\n\
             (no cards)"
        );
    }

    #[test]
    fn shows_owner_when_enabled() {
        let board = board(vec![group(1, "Todo", vec![full_card(1, "Ship")])]);
        let options = RenderOptions::new(true, DateStyle::Iso).at(now());

        let out = render(&board, &options);
        assert!(out.contains(
            "[labels: urgent, docs; owner: Alice; assignees: Bob, Carol; \
             due: 2024-06-03T12:00:00+00:00; archived]"
        ));
    }

    #[test]
    fn untitled_fallbacks() {
        let mut group = group(4, "", vec![card(1, "")]);
        group.stack.title = None;
        let board = board(vec![group]);
        let options = RenderOptions::new(false, DateStyle::Relative).at(now());

        assert_eq!(render(&board, &options), "=== List 4 ===\n- (untitled)");
    }

    #[test]
    fn empty_board_is_empty_string() {
        let options = RenderOptions::new(false, DateStyle::Relative).at(now());
        assert_eq!(render(&board(vec![]), &options), "");
    }
}
