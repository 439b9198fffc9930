//! List column definitions and their pure evaluation against records

use crate::shared::record::Record;
use chrono::{DateTime, NaiveDate};

/// What a list column shows for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnValue {
    Text(&'static str),
    /// First media path of the field, resolved against the backend origin
    Image(&'static str),
    /// Field of a nested object, with a fallback when absent
    Related {
        object: &'static str,
        field: &'static str,
        fallback: &'static str,
    },
    /// One line per object of a list field
    RelatedList {
        list: &'static str,
        field: &'static str,
    },
    /// Number rendered with a trailing `%`, with a fallback when absent
    Percent {
        field: &'static str,
        fallback: &'static str,
    },
    /// `key: value` lines of an object field
    KeyValue(&'static str),
    Date(&'static str),
    /// Boolean rendered as Active/Inactive
    Flag(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub value: ColumnValue,
}

impl ColumnSpec {
    pub const fn new(header: &'static str, value: ColumnValue) -> Self {
        Self { header, value }
    }

    pub const fn text(header: &'static str, field: &'static str) -> Self {
        Self::new(header, ColumnValue::Text(field))
    }

    pub fn evaluate(&self, record: &Record) -> CellValue {
        match self.value {
            ColumnValue::Text(field) => CellValue::Text(record.text(field)),
            ColumnValue::Image(field) => match record.media_path(field) {
                Some(path) => CellValue::Image(path),
                None => CellValue::Placeholder("No Image"),
            },
            ColumnValue::Related {
                object,
                field,
                fallback,
            } => match record.nested_text(object, field) {
                Some(text) => CellValue::Text(text),
                None => CellValue::Placeholder(fallback),
            },
            ColumnValue::RelatedList { list, field } => {
                CellValue::Lines(record.list_texts(list, field))
            }
            ColumnValue::Percent { field, fallback } => {
                // Either a bare number or an embedded `{ "discount": n }` object
                let text = record
                    .nested_text(field, field)
                    .unwrap_or_else(|| record.text(field));
                if text.is_empty() || text == "0" {
                    CellValue::Placeholder(fallback)
                } else {
                    CellValue::Text(format!("{}%", text))
                }
            }
            ColumnValue::KeyValue(field) => CellValue::Lines(
                record
                    .pairs(field)
                    .into_iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect(),
            ),
            ColumnValue::Date(field) => CellValue::Text(format_date(&record.text(field))),
            ColumnValue::Flag(field) => match record.flag(field) {
                Some(true) => CellValue::Text("Active".to_string()),
                Some(false) => CellValue::Text("Inactive".to_string()),
                None => CellValue::Placeholder("-"),
            },
        }
    }
}

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    /// Media path relative to the backend origin
    Image(String),
    Lines(Vec<String>),
    /// Muted text shown when the value is absent
    Placeholder(&'static str),
}

/// Formats an ISO 8601 date or timestamp as `YYYY-MM-DD`; other input is
/// returned unchanged
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_related_fallback() {
        let col = ColumnSpec::new(
            "Category",
            ColumnValue::Related {
                object: "category",
                field: "name_en",
                fallback: "No Category",
            },
        );
        assert_eq!(
            col.evaluate(&record(json!({ "category": { "name_en": "Tops" } }))),
            CellValue::Text("Tops".into())
        );
        assert_eq!(
            col.evaluate(&record(json!({ "category": null }))),
            CellValue::Placeholder("No Category")
        );
    }

    #[test]
    fn test_percent_and_materials() {
        let discount = ColumnSpec::new(
            "Discount",
            ColumnValue::Percent {
                field: "discount",
                fallback: "No Discount",
            },
        );
        assert_eq!(
            discount.evaluate(&record(json!({ "discount": 15 }))),
            CellValue::Text("15%".into())
        );
        assert_eq!(
            discount.evaluate(&record(json!({ "discount": null }))),
            CellValue::Placeholder("No Discount")
        );

        let materials = ColumnSpec::new("Materials", ColumnValue::KeyValue("materials"));
        assert_eq!(
            materials.evaluate(&record(json!({ "materials": { "cotton": "80%", "wool": "20%" } }))),
            CellValue::Lines(vec!["cotton: 80%".into(), "wool: 20%".into()])
        );
    }

    #[test]
    fn test_image_and_flag() {
        let image = ColumnSpec::new("Image", ColumnValue::Image("images"));
        assert_eq!(
            image.evaluate(&record(json!({ "images": [] }))),
            CellValue::Placeholder("No Image")
        );
        let status = ColumnSpec::new("Status", ColumnValue::Flag("status"));
        assert_eq!(
            status.evaluate(&record(json!({ "status": true }))),
            CellValue::Text("Active".into())
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(format_date("2024-12-31"), "2024-12-31");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
