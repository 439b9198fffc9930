//! Loosely-typed view of a resource record as returned by the API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of a list response. Only `id` is guaranteed; every other field
/// is read through the resource schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(value_as_id)
    }

    /// Field rendered as plain text; missing and null become ""
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(value_to_text).unwrap_or_default()
    }

    /// Text of a field of a nested object, e.g. `category.name_en`
    pub fn nested_text(&self, object: &str, field: &str) -> Option<String> {
        let text = self.get(object)?.get(field).map(value_to_text)?;
        (!text.is_empty()).then_some(text)
    }

    /// Id of a nested object, e.g. `category.id`
    pub fn nested_id(&self, object: &str) -> Option<i64> {
        self.get(object)?.get("id").and_then(value_as_id)
    }

    /// Ids of the objects in a list field, e.g. `sizes: [{id: 1}, …]`.
    /// Bare numbers in the list are accepted as ids too.
    pub fn list_ids(&self, list: &str) -> Vec<i64> {
        let mut ids: Vec<i64> = Vec::new();
        if let Some(Value::Array(items)) = self.get(list) {
            for item in items {
                let id = match item {
                    Value::Object(obj) => obj.get("id").and_then(value_as_id),
                    other => value_as_id(other),
                };
                if let Some(id) = id {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
            }
        }
        ids
    }

    /// Texts of a field across the objects of a list field
    pub fn list_texts(&self, list: &str, field: &str) -> Vec<String> {
        match self.get(list) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.get(field).map(value_to_text))
                .filter(|t| !t.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// String pairs of an object field, e.g. `materials: {"cotton": "100%"}`.
    /// A JSON-encoded object string is accepted as well.
    pub fn pairs(&self, field: &str) -> Vec<(String, String)> {
        let parsed;
        let object = match self.get(field) {
            Some(Value::Object(map)) => map,
            Some(Value::String(raw)) => {
                parsed = serde_json::from_str::<Map<String, Value>>(raw).unwrap_or_default();
                &parsed
            }
            _ => return Vec::new(),
        };
        object
            .iter()
            .map(|(k, v)| (k.clone(), value_to_text(v)))
            .collect()
    }

    /// First media path of a field holding either a path or a list of paths
    pub fn media_path(&self, field: &str) -> Option<String> {
        let path = match self.get(field)? {
            Value::String(s) => s.clone(),
            Value::Array(items) => items.iter().find_map(|v| v.as_str())?.to_string(),
            _ => return None,
        };
        (!path.trim().is_empty()).then_some(path)
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|v| v != 0),
            Value::String(s) => match s.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Plain-text rendering of a JSON scalar
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn value_as_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Record {
        Record::from_value(json!({
            "id": 7,
            "title_en": "Shirt",
            "price": 19.99,
            "discount_id": null,
            "category": { "id": 3, "name_en": "Tops" },
            "sizes": [{ "id": 1, "size": "S" }, { "id": 2, "size": "M" }],
            "colors": [{ "id": 5, "color_en": "Red" }],
            "materials": { "cotton": "100%" },
            "images": ["uploads/a.png", "uploads/b.png"]
        }))
        .unwrap()
    }

    #[test]
    fn test_scalar_text() {
        let p = product();
        assert_eq!(p.id(), Some(7));
        assert_eq!(p.text("title_en"), "Shirt");
        assert_eq!(p.text("price"), "19.99");
        assert_eq!(p.text("discount_id"), "");
        assert_eq!(p.text("missing"), "");
    }

    #[test]
    fn test_nested_and_lists() {
        let p = product();
        assert_eq!(p.nested_id("category"), Some(3));
        assert_eq!(p.nested_text("category", "name_en").as_deref(), Some("Tops"));
        assert_eq!(p.list_ids("sizes"), vec![1, 2]);
        assert_eq!(p.list_texts("colors", "color_en"), vec!["Red".to_string()]);
        assert!(p.list_ids("missing").is_empty());
    }

    #[test]
    fn test_pairs_and_media() {
        let p = product();
        assert_eq!(p.pairs("materials"), vec![("cotton".to_string(), "100%".to_string())]);
        assert_eq!(p.media_path("images").as_deref(), Some("uploads/a.png"));

        let encoded = Record::from_value(json!({ "materials": "{\"wool\":\"20%\"}", "image": "" })).unwrap();
        assert_eq!(encoded.pairs("materials"), vec![("wool".to_string(), "20%".to_string())]);
        assert_eq!(encoded.media_path("image"), None);
    }

    #[test]
    fn test_string_ids() {
        let r = Record::from_value(json!({ "id": "12", "sizes": ["4", 4, 6] })).unwrap();
        assert_eq!(r.id(), Some(12));
        assert_eq!(r.list_ids("sizes"), vec![4, 6]);
        assert!(Record::from_value(json!([1, 2])).is_none());
    }
}
