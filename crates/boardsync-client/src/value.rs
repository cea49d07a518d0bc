//! Payload shapes for the column types this crate models.
//!
//! A cell's wire value is either a JSON document or a bare string, and which
//! one depends on the column type. `ColumnData` is the tagged union over
//! those shapes: typed setters on a column value construct variants, typed
//! getters project them back out, and hydration parses a remote value into
//! the variant the column's declared type calls for.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::ColumnType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxValue {
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryValue {
    #[serde(rename = "countryCode")]
    pub country_code: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
}

/// Dates are broken into separate date and time components, in UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownValue {
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailValue {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourValue {
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkValue {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTextValue {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonOrTeam {
    pub id: u64,
    pub kind: String,
}

impl PersonOrTeam {
    pub fn person(id: u64) -> Self {
        Self {
            id,
            kind: "person".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleValue {
    #[serde(rename = "personsAndTeams")]
    pub persons_and_teams: Vec<PersonOrTeam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneValue {
    pub phone: String,
    #[serde(rename = "countryShortName")]
    pub country_short_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingValue {
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusValue {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsValue {
    pub tag_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineValue {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRange {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekValue {
    pub week: WeekRange,
}

/// An item cell's typed payload.
///
/// Serialization emits the exact wire shape of each variant, so a payload can
/// be embedded verbatim in an update mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnData {
    Checkbox(CheckboxValue),
    Country(CountryValue),
    Date(DateValue),
    Dropdown(DropdownValue),
    Email(EmailValue),
    Hour(HourValue),
    Link(LinkValue),
    LongText(LongTextValue),
    People(PeopleValue),
    Phone(PhoneValue),
    Rating(RatingValue),
    Status(StatusValue),
    Tags(TagsValue),
    Timeline(TimelineValue),
    Week(WeekValue),
    /// Bare string cells: text, name, and number columns.
    Text(String),
    /// Structured payload of a column type this crate does not model.
    Json(Value),
}

impl ColumnData {
    /// Interpret an already-serialized value, falling back to storing the raw
    /// string unchanged when it is not valid JSON.
    pub fn parse_serialized(column_type: &ColumnType, raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_wire(column_type, value),
            Err(_) => Some(ColumnData::Text(raw.to_string())),
        }
    }

    /// Interpret a decoded wire value according to the column's declared
    /// type. Payloads that do not match the expected shape are kept as
    /// [`ColumnData::Json`] rather than dropped.
    pub fn from_wire(column_type: &ColumnType, value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(ColumnData::Text(text)),
            other => Some(Self::structured(column_type, other)),
        }
    }

    fn structured(column_type: &ColumnType, value: Value) -> Self {
        fn parse<T, F>(value: &Value, wrap: F) -> Option<ColumnData>
        where
            T: for<'de> Deserialize<'de>,
            F: FnOnce(T) -> ColumnData,
        {
            serde_json::from_value(value.clone()).ok().map(wrap)
        }

        let parsed = match column_type {
            ColumnType::Checkbox => parse(&value, ColumnData::Checkbox),
            ColumnType::Country => parse(&value, ColumnData::Country),
            ColumnType::Date => parse(&value, ColumnData::Date),
            ColumnType::Dropdown => parse(&value, ColumnData::Dropdown),
            ColumnType::Email => parse(&value, ColumnData::Email),
            ColumnType::Hour => parse(&value, ColumnData::Hour),
            ColumnType::Link => parse(&value, ColumnData::Link),
            ColumnType::LongText => parse(&value, ColumnData::LongText),
            ColumnType::People => parse(&value, ColumnData::People),
            ColumnType::Phone => parse(&value, ColumnData::Phone),
            ColumnType::Rating => parse(&value, ColumnData::Rating),
            ColumnType::Status => parse(&value, ColumnData::Status),
            ColumnType::Tags => parse(&value, ColumnData::Tags),
            ColumnType::Timeline => parse(&value, ColumnData::Timeline),
            ColumnType::Week => parse(&value, ColumnData::Week),
            _ => None,
        };
        parsed.unwrap_or(ColumnData::Json(value))
    }

    /// The raw payload to place in an update mutation for this cell.
    pub fn to_wire(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_structured_payloads() {
        let country = ColumnData::from_wire(
            &ColumnType::Country,
            json!({"countryCode": "NO", "countryName": "Norway"}),
        )
        .unwrap();
        assert_eq!(
            country,
            ColumnData::Country(CountryValue {
                country_code: "NO".into(),
                country_name: "Norway".into(),
            })
        );

        let people = ColumnData::from_wire(
            &ColumnType::People,
            json!({"personsAndTeams": [{"id": 5, "kind": "person"}]}),
        )
        .unwrap();
        assert_eq!(
            people,
            ColumnData::People(PeopleValue {
                persons_and_teams: vec![PersonOrTeam::person(5)],
            })
        );
    }

    #[test]
    fn test_null_clears_value() {
        assert_eq!(ColumnData::from_wire(&ColumnType::Text, Value::Null), None);
    }

    #[test]
    fn test_bare_string_stays_text() {
        let data = ColumnData::from_wire(&ColumnType::Number, json!("42.5")).unwrap();
        assert_eq!(data, ColumnData::Text("42.5".into()));
    }

    #[test]
    fn test_unmodeled_type_kept_as_json() {
        let payload = json!({"linkedPulseIds": [{"linkedPulseId": 123}]});
        let data = ColumnData::from_wire(&ColumnType::LinkToItem, payload.clone()).unwrap();
        assert_eq!(data, ColumnData::Json(payload));
    }

    #[test]
    fn test_mismatched_shape_kept_as_json() {
        let payload = json!({"unexpected": true});
        let data = ColumnData::from_wire(&ColumnType::Country, payload.clone()).unwrap();
        assert_eq!(data, ColumnData::Json(payload));
    }

    #[test]
    fn test_parse_serialized_falls_back_to_raw_string() {
        let data = ColumnData::parse_serialized(&ColumnType::Text, "not json at all").unwrap();
        assert_eq!(data, ColumnData::Text("not json at all".into()));
    }

    #[test]
    fn test_wire_shape_uses_service_field_names() {
        let data = ColumnData::Phone(PhoneValue {
            phone: "15551234567".into(),
            country_short_name: "US".into(),
        });
        assert_eq!(
            data.to_wire(),
            json!({"phone": "15551234567", "countryShortName": "US"})
        );
    }
}
