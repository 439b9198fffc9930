//! Draft -> request payload mapping
//!
//! Multipart layout is driven by each field's `FieldEncoding`; JSON resources
//! get a typed object built from the field widgets.

use super::draft::{EntityDraft, FieldValue};
use crate::domain::ResourceKind;
use crate::shared::metadata::{
    EntitySchema, FieldEncoding, FieldWidget, Transport, ValidationError,
};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// One part of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

impl<F> FormPart<F> {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { value, .. } => Some(value),
            Self::File { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Json(Value),
    Multipart(Vec<FormPart<F>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

/// Create or update of the record with the given id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(i64),
}

impl SubmitMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Update(_) => HttpMethod::Patch,
        }
    }

    pub fn path(&self, resource: ResourceKind) -> String {
        match self {
            Self::Create => resource.collection_path(),
            Self::Update(id) => resource.item_path(*id),
        }
    }

    /// Create only counts 201 Created; update accepts any 2xx
    pub fn is_success(&self, status: u16) -> bool {
        match self {
            Self::Create => status == 201,
            Self::Update(_) => (200..300).contains(&status),
        }
    }
}

/// Fully prepared request, ready for the HTTP layer
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest<F> {
    pub method: HttpMethod,
    pub path: String,
    pub bearer: String,
    pub body: RequestBody<F>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Please login.")]
    MissingSession,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Checks the session, validates the draft and encodes it for the resource's
/// transport. Nothing is sent here.
pub fn prepare_submission<F: Clone>(
    schema: &EntitySchema,
    draft: &EntityDraft<F>,
    mode: SubmitMode,
    token: Option<&str>,
) -> Result<SubmitRequest<F>, SubmitError> {
    let bearer = match token.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return Err(SubmitError::MissingSession),
    };

    draft.validate(schema)?;

    let body = match schema.transport {
        Transport::Multipart => RequestBody::Multipart(encode_multipart(schema, draft)),
        Transport::Json => RequestBody::Json(encode_json(schema, draft)),
    };

    Ok(SubmitRequest {
        method: mode.method(),
        path: mode.path(schema.resource),
        bearer,
        body,
    })
}

pub fn encode_multipart<F: Clone>(schema: &EntitySchema, draft: &EntityDraft<F>) -> Vec<FormPart<F>> {
    let mut parts = Vec::new();

    for field in schema.fields {
        match field.encoding {
            FieldEncoding::Binary => {
                for file in draft.files(field.name) {
                    parts.push(FormPart::File {
                        name: field.name.to_string(),
                        file: file.clone(),
                    });
                }
            }
            FieldEncoding::Repeated => {
                let name = field.part_name();
                match draft.value(field.name) {
                    Some(FieldValue::Ids(ids)) => {
                        for id in ids {
                            parts.push(FormPart::Text {
                                name: name.clone(),
                                value: id.to_string(),
                            });
                        }
                    }
                    Some(other) => {
                        let value = scalar_text(other);
                        if !value.is_empty() {
                            parts.push(FormPart::Text { name, value });
                        }
                    }
                    None => {}
                }
            }
            FieldEncoding::Json => {
                let value = draft.value(field.name).map(json_text).unwrap_or_default();
                parts.push(FormPart::Text {
                    name: field.name.to_string(),
                    value,
                });
            }
            FieldEncoding::Scalar => {
                let value = draft.value(field.name).map(scalar_text).unwrap_or_default();
                parts.push(FormPart::Text {
                    name: field.name.to_string(),
                    value,
                });
            }
        }
    }

    parts
}

pub fn encode_json<F>(schema: &EntitySchema, draft: &EntityDraft<F>) -> Value {
    let mut object = Map::new();

    for field in schema.fields {
        let value = match field.widget {
            FieldWidget::Files { .. } => continue,
            FieldWidget::Text | FieldWidget::TextArea | FieldWidget::Date => {
                Value::String(draft.text(field.name).to_string())
            }
            FieldWidget::Number => number_value(draft.text(field.name)),
            FieldWidget::Select(_) => id_value(draft.text(field.name)),
            FieldWidget::Toggle => Value::Bool(draft.flag(field.name)),
            FieldWidget::CheckboxSet(_) => Value::Array(
                draft
                    .ids(field.name)
                    .iter()
                    .map(|id| Value::from(*id))
                    .collect(),
            ),
            FieldWidget::KeyValue => pairs_value(draft.value(field.name)),
        };
        object.insert(field.name.to_string(), value);
    }

    Value::Object(object)
}

fn scalar_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Flag(b) => b.to_string(),
        FieldValue::Ids(ids) => ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(","),
        FieldValue::Pairs(_) => json_text(value),
    }
}

fn json_text(value: &FieldValue) -> String {
    let json = match value {
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::Flag(b) => Value::Bool(*b),
        FieldValue::Ids(ids) => Value::Array(ids.iter().map(|id| Value::from(*id)).collect()),
        FieldValue::Pairs(_) => pairs_value(Some(value)),
    };
    json.to_string()
}

fn pairs_value(value: Option<&FieldValue>) -> Value {
    match value {
        Some(FieldValue::Pairs(pairs)) => Value::Object(
            pairs
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        ),
        _ => Value::Object(Map::new()),
    }
}

fn number_value(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::from(int);
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn id_value(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Null;
    }
    match raw.parse::<i64>() {
        Ok(id) => Value::from(id),
        Err(_) => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record::Record;
    use serde_json::json;

    type Draft = EntityDraft<&'static str>;

    fn texts<'a>(parts: &'a [FormPart<&'static str>], name: &str) -> Vec<&'a str> {
        parts
            .iter()
            .filter(|p| p.name() == name)
            .filter_map(|p| p.text())
            .collect()
    }

    fn shirt_draft() -> Draft {
        let schema = ResourceKind::Product.schema();
        let mut draft = Draft::empty(schema);
        for (name, value) in [
            ("title_en", "Shirt"),
            ("title_ru", "Рубашка"),
            ("title_de", "Hemd"),
            ("description_en", "Cotton shirt"),
            ("description_ru", "Хлопковая рубашка"),
            ("description_de", "Baumwollhemd"),
            ("price", "19.99"),
            ("category_id", "3"),
        ] {
            draft.set_text(name, value);
        }
        draft.toggle_id("sizes_id", 1, true);
        draft.toggle_id("sizes_id", 2, true);
        draft.toggle_id("colors_id", 5, true);
        assert!(draft.insert_pair("materials", "cotton", "100%"));
        draft.replace_files("files", vec!["shirt.png"]);
        draft
    }

    #[test]
    fn test_product_create_parts() {
        let schema = ResourceKind::Product.schema();
        let request =
            prepare_submission(schema, &shirt_draft(), SubmitMode::Create, Some("abc")).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/product");
        assert_eq!(request.bearer, "abc");

        let RequestBody::Multipart(parts) = request.body else {
            panic!("product must be multipart");
        };
        assert_eq!(texts(&parts, "title_en"), vec!["Shirt"]);
        assert_eq!(texts(&parts, "title_ru"), vec!["Рубашка"]);
        assert_eq!(texts(&parts, "title_de"), vec!["Hemd"]);
        assert_eq!(texts(&parts, "price"), vec!["19.99"]);
        assert_eq!(texts(&parts, "min_sell"), vec!["1"]);
        assert_eq!(texts(&parts, "category_id"), vec!["3"]);
        assert_eq!(texts(&parts, "discount_id"), vec![""]);
        assert_eq!(texts(&parts, "sizes_id[]"), vec!["1", "2"]);
        assert_eq!(texts(&parts, "colors_id[]"), vec!["5"]);
        assert_eq!(texts(&parts, "materials"), vec![r#"{"cotton":"100%"}"#]);

        let files: Vec<_> = parts
            .iter()
            .filter_map(|p| match p {
                FormPart::File { name, file } => Some((name.as_str(), *file)),
                _ => None,
            })
            .collect();
        assert_eq!(files, vec![("files", "shirt.png")]);

        assert!(SubmitMode::Create.is_success(201));
        assert!(!SubmitMode::Create.is_success(200));
    }

    #[test]
    fn test_multilingual_fields_present() {
        let schema = ResourceKind::Product.schema();
        let parts = encode_multipart(schema, &shirt_draft());
        for lang in ["en", "ru", "de"] {
            for prefix in ["title", "description"] {
                let name = format!("{prefix}_{lang}");
                let values = texts(&parts, &name);
                assert_eq!(values.len(), 1, "{name}");
                assert!(!values[0].is_empty(), "{name}");
            }
        }
    }

    #[test]
    fn test_missing_token_short_circuits() {
        let schema = ResourceKind::Product.schema();
        // Even an invalid draft reports the session first
        let empty = Draft::empty(schema);
        assert_eq!(
            prepare_submission(schema, &empty, SubmitMode::Create, None),
            Err(SubmitError::MissingSession)
        );
        assert_eq!(
            prepare_submission(schema, &shirt_draft(), SubmitMode::Update(7), Some("  ")),
            Err(SubmitError::MissingSession)
        );
        assert_eq!(SubmitError::MissingSession.to_string(), "Please login.");
    }

    #[test]
    fn test_missing_category_blocks_request() {
        let schema = ResourceKind::Product.schema();
        let mut draft = shirt_draft();
        draft.set_text("category_id", "");
        assert_eq!(
            prepare_submission(schema, &draft, SubmitMode::Create, Some("abc")),
            Err(SubmitError::Invalid(ValidationError::Missing("Category")))
        );
    }

    #[test]
    fn test_unchanged_edit_matches_record() {
        let schema = ResourceKind::Product.schema();
        let record = Record::from_value(json!({
            "id": 7,
            "title_en": "Shirt",
            "title_ru": "Рубашка",
            "title_de": "Hemd",
            "description_en": "Cotton shirt",
            "description_ru": "Хлопковая рубашка",
            "description_de": "Baumwollhemd",
            "price": 19.99,
            "min_sell": 2,
            "category": { "id": 3, "name_en": "Tops" },
            "discount": { "id": 4, "discount": 10 },
            "sizes": [{ "id": 1 }, { "id": 2 }],
            "colors": [{ "id": 5 }],
            "materials": { "cotton": "100%" },
            "images": ["uploads/a.png"]
        }))
        .unwrap();
        let draft = Draft::from_record(schema, &record);
        let request =
            prepare_submission(schema, &draft, SubmitMode::Update(7), Some("abc")).unwrap();

        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path, "/api/product/7");
        let RequestBody::Multipart(parts) = request.body else {
            panic!("product must be multipart");
        };
        assert_eq!(texts(&parts, "title_ru"), vec!["Рубашка"]);
        assert_eq!(texts(&parts, "price"), vec!["19.99"]);
        assert_eq!(texts(&parts, "min_sell"), vec!["2"]);
        assert_eq!(texts(&parts, "category_id"), vec!["3"]);
        assert_eq!(texts(&parts, "discount_id"), vec!["4"]);
        assert_eq!(texts(&parts, "sizes_id[]"), vec!["1", "2"]);
        assert_eq!(texts(&parts, "colors_id[]"), vec!["5"]);
        assert_eq!(texts(&parts, "materials"), vec![r#"{"cotton":"100%"}"#]);
        assert!(parts.iter().all(|p| matches!(p, FormPart::Text { .. })));
        assert!(SubmitMode::Update(7).is_success(200));
    }

    #[test]
    fn test_unchanged_edit_keeps_whitespace() {
        let schema = ResourceKind::Product.schema();
        let record = Record::from_value(json!({
            "id": 7,
            "title_en": "Shirt ",
            "title_ru": "Рубашка",
            "title_de": "Hemd",
            "description_en": "Line one\nLine two\n",
            "description_ru": "Хлопковая рубашка",
            "description_de": "Baumwollhemd",
            "price": 19.99,
            "category": { "id": 3 }
        }))
        .unwrap();
        let draft = Draft::from_record(schema, &record);
        let request =
            prepare_submission(schema, &draft, SubmitMode::Update(7), Some("abc")).unwrap();

        let RequestBody::Multipart(parts) = request.body else {
            panic!("product must be multipart");
        };
        assert_eq!(texts(&parts, "title_en"), vec!["Shirt "]);
        assert_eq!(texts(&parts, "description_en"), vec!["Line one\nLine two\n"]);
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
    }

    #[test]
    fn test_discount_json_body() {
        let schema = ResourceKind::Discount.schema();
        let mut draft = Draft::empty(schema);
        draft.set_text("discount", "15");
        draft.set_text("started_at", "2024-03-01");
        draft.set_flag("status", true);

        let request = prepare_submission(schema, &draft, SubmitMode::Create, Some("abc")).unwrap();
        assert_eq!(
            request.body,
            RequestBody::Json(json!({
                "discount": 15,
                "started_at": "2024-03-01",
                "finished_at": "",
                "status": true
            }))
        );
    }

    #[test]
    fn test_discount_range() {
        let schema = ResourceKind::Discount.schema();
        let mut draft = Draft::empty(schema);
        draft.set_text("discount", "150");
        assert!(matches!(
            prepare_submission(schema, &draft, SubmitMode::Create, Some("abc")),
            Err(SubmitError::Invalid(ValidationError::AboveMax { .. }))
        ));
    }

    #[test]
    fn test_news_single_file_part() {
        let schema = ResourceKind::News.schema();
        let mut draft = Draft::empty(schema);
        draft.replace_files("file", vec!["cover.jpg"]);
        let parts = encode_multipart(schema, &draft);
        assert_eq!(
            parts.last(),
            Some(&FormPart::File {
                name: "file".into(),
                file: "cover.jpg"
            })
        );
    }
}
