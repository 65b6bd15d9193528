//! Structured JSON output
//!
//! Emits the whole board, owner included regardless of display switches.
//! Keys follow the model's field order; due dates are ISO-8601.

use crate::domain::Board;

pub(crate) fn render(board: &Board) -> serde_json::Result<String> {
    serde_json::to_string_pretty(board)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use serde_json::Value;

    #[test]
    fn full_model_with_owner() {
        let board = board(vec![group(1, "Todo", vec![full_card(1, "Ship"), card(2, "Plain")])]);
        let json: Value = serde_json::from_str(&render(&board).unwrap()).unwrap();

        assert_eq!(json["board_id"], 7);
        assert_eq!(
            json["api_base"],
            "https://cloud.example.com/index.php/apps/deck/api/v1.1"
        );

        let stack = &json["stacks"][0];
        assert_eq!(stack["stack"]["title"], "Todo");
        assert_eq!(stack["stack"]["id"], 1);

        let ship = &stack["cards"][0];
        assert_eq!(ship["owner"], "Alice");
        assert_eq!(ship["duedate"], "2024-06-03T12:00:00+00:00");
        assert_eq!(ship["archived"], true);
        assert_eq!(ship["labels"], serde_json::json!(["urgent", "docs"]));
        assert_eq!(ship["assignees"], serde_json::json!(["Bob", "Carol"]));

        let plain = &stack["cards"][1];
        assert!(plain.as_object().unwrap().contains_key("owner"));
        assert_eq!(plain["owner"], Value::Null);
    }

    #[test]
    fn pretty_printed_with_stable_order() {
        let out = render(&empty_backlog()).unwrap();
        assert!(out.starts_with("{\n  \"board_id\": 7,\n  \"api_base\": "));
        assert!(out.contains("\"title\": \"Backlog\""));
        assert!(out.contains("\"cards\": []"));
    }

    #[test]
    fn non_ascii_kept_verbatim() {
        let board = board(vec![group(1, "Erledigt ✅", vec![])]);
        assert!(render(&board).unwrap().contains("Erledigt ✅"));
    }
}
