//! GraphQL string assembly for the handful of operations the object model
//! performs. Only query construction lives here; response parsing stays with
//! the entity that issued the query.

use boardsync_core::SyncResult;
use serde_json::Value;

/// Escape a value for embedding inside a double-quoted GraphQL string
/// literal.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Account-level state: tags, non-guest users, and board summaries, in one
/// round-trip.
pub fn account_info() -> String {
    "query { \
        tags { id name color } \
        boards { id name } \
        users (kind: non_guests) { id name email } \
    }"
    .to_string()
}

/// One board's id, name, groups, and column schema.
pub fn board_info(board_id: &str) -> String {
    format!(
        "query {{ \
            boards (ids: {board_id}) {{ \
                id name \
                groups {{ id title archived deleted }} \
                columns {{ id title type archived }} \
            }} \
        }}"
    )
}

/// Create an item and return its full initial column-value set.
pub fn create_item(board_id: &str, group_id: &str, name: &str) -> String {
    format!(
        "mutation {{ \
            create_item (board_id: {board_id}, group_id: \"{}\", item_name: \"{}\") {{ \
                id \
                column_values {{ id value type title }} \
            }} \
        }}",
        escape(group_id),
        escape(name)
    )
}

/// Update the given cells of an item in one mutation.
///
/// The API expects the column map as a JSON *string* argument, so the encoded
/// map is JSON-encoded a second time to become a quoted, escaped literal.
pub fn change_column_values(board_id: &str, item_id: &str, values: &Value) -> SyncResult<String> {
    let map = serde_json::to_string(values)?;
    let literal = serde_json::to_string(&map)?;
    Ok(format!(
        "mutation {{ \
            change_multiple_column_values (board_id: {board_id}, item_id: {item_id}, column_values: {literal}) {{ \
                id \
                column_values {{ id value type title }} \
            }} \
        }}"
    ))
}

pub fn delete_item(item_id: &str) -> String {
    format!("mutation {{ delete_item (item_id: {item_id}) {{ id }} }}")
}

/// All column values of one item, by id.
pub fn item_column_values(item_id: &str) -> String {
    format!(
        "query {{ \
            items (ids: [{item_id}]) {{ \
                column_values {{ id value type title }} \
            }} \
        }}"
    )
}

/// Exact-value lookup over one column of a board.
pub fn items_by_column_value(board_id: &str, column_id: &str, value: &str) -> String {
    format!(
        "query {{ \
            items_by_column_values (board_id: {board_id}, column_id: \"{}\", column_value: \"{}\") {{ \
                id name \
            }} \
        }}",
        escape(column_id),
        escape(value)
    )
}

/// One page of a group's items. The service pages from 1; an empty page means
/// the scan is done.
pub fn group_items_page(board_id: &str, group_id: &str, page: u32) -> String {
    format!(
        "query {{ \
            boards (ids: {board_id}) {{ \
                groups (ids: \"{}\") {{ \
                    items (page: {page}) {{ id name }} \
                }} \
            }} \
        }}",
        escape(group_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("line\nbreak"), "line\\nbreak");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_create_item_escapes_name() {
        let query = create_item("577318853", "topics", "An \"odd\" name");
        assert!(query.contains(r#"item_name: "An \"odd\" name""#));
        assert!(query.contains("board_id: 577318853"));
        assert!(query.contains("group_id: \"topics\""));
    }

    #[test]
    fn test_change_column_values_double_encodes() {
        let values = json!({"text_1": "hello"});
        let query = change_column_values("1", "2", &values).unwrap();
        // The map must appear as a quoted literal with escaped inner quotes.
        assert!(query.contains(r#"column_values: "{\"text_1\":\"hello\"}""#));
    }

    #[test]
    fn test_items_by_column_value() {
        let query = items_by_column_value("42", "text_1", "needle");
        assert!(query.contains("items_by_column_values (board_id: 42, column_id: \"text_1\", column_value: \"needle\")"));
    }
}
