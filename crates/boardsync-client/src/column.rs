use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Board-level column schema, shared between the board and the groups and
/// items that consult it. Replaced wholesale on every board pull.
pub type SharedColumns = Arc<RwLock<Vec<Column>>>;

/// The column types a board schema can declare, keyed by the service's wire
/// codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    AutoNumber,
    Checkbox,
    ColorPicker,
    Country,
    CreationLog,
    Date,
    Dependency,
    Dropdown,
    Email,
    Files,
    Formula,
    Hour,
    ItemId,
    Link,
    LinkToItem,
    LongText,
    Mirror,
    Name,
    Number,
    People,
    Phone,
    Rating,
    Status,
    Tags,
    Team,
    Text,
    Timeline,
    TimeTracking,
    Vote,
    Week,
    /// A type code this crate does not know.
    Unknown(String),
}

impl ColumnType {
    pub fn code(&self) -> &str {
        match self {
            ColumnType::AutoNumber => "autonumber",
            ColumnType::Checkbox => "boolean",
            ColumnType::ColorPicker => "color-picker",
            ColumnType::Country => "country",
            ColumnType::CreationLog => "pulse-log",
            ColumnType::Date => "date",
            ColumnType::Dependency => "dependency",
            ColumnType::Dropdown => "dropdown",
            ColumnType::Email => "email",
            ColumnType::Files => "file",
            ColumnType::Formula => "formula",
            ColumnType::Hour => "hour",
            ColumnType::ItemId => "pulse-id",
            ColumnType::Link => "link",
            ColumnType::LinkToItem => "board-relation",
            ColumnType::LongText => "long-text",
            ColumnType::Mirror => "lookup",
            ColumnType::Name => "name",
            ColumnType::Number => "numeric",
            ColumnType::People => "multiple-person",
            ColumnType::Phone => "phone",
            ColumnType::Rating => "rating",
            ColumnType::Status => "color",
            ColumnType::Tags => "tag",
            ColumnType::Team => "team",
            ColumnType::Text => "text",
            ColumnType::Timeline => "timerange",
            ColumnType::TimeTracking => "duration",
            ColumnType::Vote => "votes",
            ColumnType::Week => "week",
            ColumnType::Unknown(code) => code,
        }
    }
}

impl From<String> for ColumnType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "autonumber" => ColumnType::AutoNumber,
            "boolean" => ColumnType::Checkbox,
            "color-picker" => ColumnType::ColorPicker,
            "country" => ColumnType::Country,
            "pulse-log" => ColumnType::CreationLog,
            "date" => ColumnType::Date,
            "dependency" => ColumnType::Dependency,
            "dropdown" => ColumnType::Dropdown,
            "email" => ColumnType::Email,
            "file" => ColumnType::Files,
            "formula" => ColumnType::Formula,
            "hour" => ColumnType::Hour,
            "pulse-id" => ColumnType::ItemId,
            "link" => ColumnType::Link,
            "board-relation" => ColumnType::LinkToItem,
            "long-text" => ColumnType::LongText,
            "lookup" => ColumnType::Mirror,
            "name" => ColumnType::Name,
            "numeric" => ColumnType::Number,
            "multiple-person" => ColumnType::People,
            "phone" => ColumnType::Phone,
            "rating" => ColumnType::Rating,
            "color" => ColumnType::Status,
            "tag" => ColumnType::Tags,
            "team" => ColumnType::Team,
            "text" => ColumnType::Text,
            "timerange" => ColumnType::Timeline,
            "duration" => ColumnType::TimeTracking,
            "votes" => ColumnType::Vote,
            "week" => ColumnType::Week,
            _ => ColumnType::Unknown(code),
        }
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.code().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A schema-level field definition on a board. Immutable snapshot, replaced
/// wholesale on every board pull.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(id: String, title: String, column_type: ColumnType) -> Self {
        Self {
            id,
            title,
            column_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_code_roundtrip() {
        for code in [
            "boolean",
            "color",
            "tag",
            "multiple-person",
            "timerange",
            "numeric",
        ] {
            let column_type = ColumnType::from(code.to_string());
            assert!(!matches!(column_type, ColumnType::Unknown(_)));
            assert_eq!(column_type.code(), code);
        }
    }

    #[test]
    fn test_unknown_code_preserved() {
        let column_type = ColumnType::from("subtasks".to_string());
        assert_eq!(column_type, ColumnType::Unknown("subtasks".to_string()));
        assert_eq!(column_type.code(), "subtasks");
    }

    #[test]
    fn test_column_deserializes_wire_type() {
        let column: Column =
            serde_json::from_str(r#"{"id":"status","title":"Status","type":"color"}"#).unwrap();
        assert_eq!(column.column_type, ColumnType::Status);
    }
}
