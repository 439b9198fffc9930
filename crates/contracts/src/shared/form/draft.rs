//! In-memory draft of an entity being created or edited
//!
//! The draft is a field-name -> value map shaped by the resource schema.
//! Pending uploads are kept next to it, generic over the file handle so the
//! browser's `File` and plain test values both fit.

use crate::shared::metadata::{
    format_date, EntitySchema, FieldWidget, SeedRule, ValidationError,
};
use crate::shared::record::Record;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Raw input text (also numbers, dates and select ids)
    Text(String),
    Flag(bool),
    /// Ordered id set for many-to-many selections
    Ids(Vec<i64>),
    Pairs(BTreeMap<String, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityDraft<F> {
    values: BTreeMap<&'static str, FieldValue>,
    files: BTreeMap<&'static str, Vec<F>>,
}

impl<F> EntityDraft<F> {
    /// Draft for a new entity, filled with schema defaults
    pub fn empty(schema: &EntitySchema) -> Self {
        let mut values = BTreeMap::new();
        let mut files = BTreeMap::new();

        for field in schema.fields {
            let default = field.default.unwrap_or("");
            let value = match field.widget {
                FieldWidget::Text
                | FieldWidget::TextArea
                | FieldWidget::Number
                | FieldWidget::Date
                | FieldWidget::Select(_) => FieldValue::Text(default.to_string()),
                FieldWidget::Toggle => FieldValue::Flag(default == "true"),
                FieldWidget::CheckboxSet(_) => FieldValue::Ids(Vec::new()),
                FieldWidget::KeyValue => FieldValue::Pairs(BTreeMap::new()),
                FieldWidget::Files { .. } => {
                    files.insert(field.name, Vec::new());
                    continue;
                }
            };
            values.insert(field.name, value);
        }

        Self { values, files }
    }

    /// Draft seeded from the current server state of a record.
    ///
    /// Association objects become bare ids (`sizes: [{id}]` -> `sizes_id`,
    /// `category: {id}` -> `category_id`); fields absent from the record keep
    /// their defaults.
    pub fn from_record(schema: &EntitySchema, record: &Record) -> Self {
        let mut draft = Self::empty(schema);

        for field in schema.fields {
            let present = record.get(field.name).is_some_and(|v| !v.is_null());
            match (field.seed, field.widget) {
                (SeedRule::None, _) | (_, FieldWidget::Files { .. }) => {}
                (SeedRule::ObjectIds(list), _) => {
                    let mut ids = record.list_ids(list);
                    if ids.is_empty() {
                        ids = record.list_ids(field.name);
                    }
                    draft.values.insert(field.name, FieldValue::Ids(ids));
                }
                (_, FieldWidget::CheckboxSet(_)) => {
                    draft
                        .values
                        .insert(field.name, FieldValue::Ids(record.list_ids(field.name)));
                }
                (_, FieldWidget::KeyValue) => {
                    let pairs = record.pairs(field.name).into_iter().collect();
                    draft.values.insert(field.name, FieldValue::Pairs(pairs));
                }
                (_, FieldWidget::Toggle) => {
                    if let Some(flag) = record.flag(field.name) {
                        draft.values.insert(field.name, FieldValue::Flag(flag));
                    }
                }
                (SeedRule::FieldOrObjectId(object), _) => {
                    let text = if present {
                        record.text(field.name)
                    } else {
                        record
                            .nested_id(object)
                            .map(|id| id.to_string())
                            .unwrap_or_default()
                    };
                    draft.values.insert(field.name, FieldValue::Text(text));
                }
                (SeedRule::Field, widget) => {
                    if present {
                        let mut text = record.text(field.name);
                        if widget == FieldWidget::Date {
                            text = format_date(&text);
                        }
                        draft.values.insert(field.name, FieldValue::Text(text));
                    }
                }
            }
        }

        draft
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn set_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, FieldValue::Text(value.into()));
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn set_flag(&mut self, name: &'static str, value: bool) {
        self.values.insert(name, FieldValue::Flag(value));
    }

    pub fn ids(&self, name: &str) -> &[i64] {
        match self.values.get(name) {
            Some(FieldValue::Ids(ids)) => ids,
            _ => &[],
        }
    }

    pub fn contains_id(&self, name: &str, id: i64) -> bool {
        self.ids(name).contains(&id)
    }

    /// Adds or removes `id` from a many-to-many selection. Selecting an id
    /// already present and removing an absent one are no-ops.
    pub fn toggle_id(&mut self, name: &'static str, id: i64, selected: bool) {
        let entry = self
            .values
            .entry(name)
            .or_insert_with(|| FieldValue::Ids(Vec::new()));
        if !matches!(entry, FieldValue::Ids(_)) {
            *entry = FieldValue::Ids(Vec::new());
        }
        if let FieldValue::Ids(ids) = entry {
            if selected {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            } else {
                ids.retain(|existing| *existing != id);
            }
        }
    }

    pub fn pairs(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        match self.values.get(name) {
            Some(FieldValue::Pairs(pairs)) => Some(pairs),
            _ => None,
        }
    }

    /// Inserts `key -> value`, overwriting an existing key. Blank keys or
    /// values are rejected and leave the map unchanged.
    pub fn insert_pair(&mut self, name: &'static str, key: &str, value: &str) -> bool {
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return false;
        }
        let entry = self
            .values
            .entry(name)
            .or_insert_with(|| FieldValue::Pairs(BTreeMap::new()));
        if !matches!(entry, FieldValue::Pairs(_)) {
            *entry = FieldValue::Pairs(BTreeMap::new());
        }
        if let FieldValue::Pairs(pairs) = entry {
            pairs.insert(key.to_string(), value.to_string());
        }
        true
    }

    pub fn files(&self, name: &str) -> &[F] {
        self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces the pending uploads of a field with a new selection
    pub fn replace_files(&mut self, name: &'static str, files: Vec<F>) {
        self.files.insert(name, files);
    }

    /// Required/length/number checks, first failing field wins
    pub fn validate(&self, schema: &EntitySchema) -> Result<(), ValidationError> {
        for field in schema.fields {
            let rules = field.validation;
            match field.widget {
                FieldWidget::Text | FieldWidget::TextArea | FieldWidget::Date => {
                    rules.validate_string(self.text(field.name), field.label)?
                }
                FieldWidget::Number => {
                    rules.validate_numeric_text(self.text(field.name), field.label)?
                }
                FieldWidget::Select(_) => {
                    if rules.required && self.text(field.name).trim().is_empty() {
                        return Err(ValidationError::Missing(field.label));
                    }
                }
                FieldWidget::CheckboxSet(_) => {
                    if rules.required && self.ids(field.name).is_empty() {
                        return Err(ValidationError::Missing(field.label));
                    }
                }
                FieldWidget::KeyValue => {
                    if rules.required && self.pairs(field.name).map_or(true, |p| p.is_empty()) {
                        return Err(ValidationError::Missing(field.label));
                    }
                }
                FieldWidget::Files { .. } => {
                    if rules.required && self.files(field.name).is_empty() {
                        return Err(ValidationError::Missing(field.label));
                    }
                }
                FieldWidget::Toggle => {}
            }
        }
        Ok(())
    }
}

/// Key/value pair being typed before it is committed into the draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairStaging {
    pub key: String,
    pub value: String,
}

impl PairStaging {
    /// Moves the staged pair into the draft's map and clears the staging
    /// inputs. Returns false (and keeps the inputs) when either side is blank.
    pub fn commit<F>(&mut self, draft: &mut EntityDraft<F>, field: &'static str) -> bool {
        if !draft.insert_pair(field, &self.key, &self.value) {
            return false;
        }
        self.key.clear();
        self.value.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceKind;
    use serde_json::json;

    type Draft = EntityDraft<&'static str>;

    fn product_schema() -> &'static EntitySchema {
        ResourceKind::Product.schema()
    }

    #[test]
    fn test_empty_product_defaults() {
        let draft = Draft::empty(product_schema());
        assert_eq!(draft.text("title_en"), "");
        assert_eq!(draft.text("min_sell"), "1");
        assert!(draft.ids("sizes_id").is_empty());
        assert!(draft.pairs("materials").unwrap().is_empty());
        assert!(draft.files("files").is_empty());
    }

    #[test]
    fn test_toggle_sequence_is_set_semantics() {
        let mut draft = Draft::empty(product_schema());
        let sequence = [
            (1, true),
            (2, true),
            (1, true),
            (3, true),
            (2, false),
            (2, false),
            (4, false),
            (2, true),
        ];
        for (id, selected) in sequence {
            draft.toggle_id("sizes_id", id, selected);
        }
        assert_eq!(draft.ids("sizes_id"), &[1, 3, 2]);

        // Same net effect in another order gives the same set
        let mut other = Draft::empty(product_schema());
        for (id, selected) in [(3, true), (2, true), (1, true), (4, false)] {
            other.toggle_id("sizes_id", id, selected);
        }
        let mut a = draft.ids("sizes_id").to_vec();
        let mut b = other.ids("sizes_id").to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_material_overwrite_keeps_count() {
        let mut draft = Draft::empty(product_schema());
        let mut staging = PairStaging {
            key: "cotton".into(),
            value: "80%".into(),
        };
        assert!(staging.commit(&mut draft, "materials"));
        assert_eq!(staging, PairStaging::default());

        staging.key = "cotton".into();
        staging.value = "100%".into();
        assert!(staging.commit(&mut draft, "materials"));

        let materials = draft.pairs("materials").unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials["cotton"], "100%");
    }

    #[test]
    fn test_blank_material_is_rejected() {
        let mut draft = Draft::empty(product_schema());
        let mut staging = PairStaging {
            key: "wool".into(),
            value: "  ".into(),
        };
        assert!(!staging.commit(&mut draft, "materials"));
        assert_eq!(staging.key, "wool");
        assert!(draft.pairs("materials").unwrap().is_empty());
    }

    #[test]
    fn test_file_selection_replaces() {
        let mut draft = Draft::empty(product_schema());
        draft.replace_files("files", vec!["a.png", "b.png"]);
        draft.replace_files("files", vec!["c.png"]);
        assert_eq!(draft.files("files"), &["c.png"]);
    }

    #[test]
    fn test_seed_from_record() {
        let record = Record::from_value(json!({
            "id": 7,
            "title_en": "Shirt",
            "price": 19.99,
            "min_sell": 2,
            "category": { "id": 3, "name_en": "Tops" },
            "discount_id": null,
            "sizes": [{ "id": 1 }, { "id": 2 }],
            "colors": [{ "id": 5 }],
            "materials": { "cotton": "100%" },
            "images": ["uploads/a.png"]
        }))
        .unwrap();
        let draft = Draft::from_record(product_schema(), &record);
        assert_eq!(draft.text("title_en"), "Shirt");
        assert_eq!(draft.text("price"), "19.99");
        assert_eq!(draft.text("min_sell"), "2");
        assert_eq!(draft.text("category_id"), "3");
        assert_eq!(draft.text("discount_id"), "");
        assert_eq!(draft.ids("sizes_id"), &[1, 2]);
        assert_eq!(draft.ids("colors_id"), &[5]);
        assert_eq!(draft.pairs("materials").unwrap()["cotton"], "100%");
        assert!(draft.files("files").is_empty());
    }

    #[test]
    fn test_missing_category_fails_validation() {
        let mut draft = Draft::empty(product_schema());
        for (name, value) in [
            ("title_en", "Shirt"),
            ("title_ru", "Рубашка"),
            ("title_de", "Hemd"),
            ("description_en", "Cotton shirt"),
            ("description_ru", "Хлопковая рубашка"),
            ("description_de", "Baumwollhemd"),
            ("price", "19.99"),
        ] {
            draft.set_text(name, value);
        }
        assert_eq!(
            draft.validate(product_schema()),
            Err(ValidationError::Missing("Category"))
        );
        draft.set_text("category_id", "3");
        assert_eq!(draft.validate(product_schema()), Ok(()));
    }

    #[test]
    fn test_title_length_bound() {
        let mut draft = Draft::empty(product_schema());
        draft.set_text("title_en", "x".repeat(81));
        assert!(matches!(
            draft.validate(product_schema()),
            Err(ValidationError::TooLong { max: 80, .. })
        ));
    }
}
