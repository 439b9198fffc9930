//! Field widget and wire-encoding enumerations for the schema system

use crate::domain::ResourceKind;

/// Lookup collection feeding a select or checkbox set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSource {
    pub resource: ResourceKind,
    /// Record field shown as the option label
    pub label_field: &'static str,
    /// Appended to the label, e.g. "%" for discounts
    pub label_suffix: &'static str,
}

impl ReferenceSource {
    pub const fn new(resource: ResourceKind, label_field: &'static str) -> Self {
        Self {
            resource,
            label_field,
            label_suffix: "",
        }
    }

    pub const fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.label_suffix = suffix;
        self
    }
}

/// Input control used to edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget {
    Text,
    TextArea,
    Number,
    Date,
    Toggle,
    /// Single id picked from reference data
    Select(ReferenceSource),
    /// Many-to-many id set picked from reference data
    CheckboxSet(ReferenceSource),
    /// Open key/value map built through a staging pair
    KeyValue,
    Files {
        multiple: bool,
        accept: Option<&'static str>,
    },
}

impl FieldWidget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Toggle => "toggle",
            Self::Select(_) => "select",
            Self::CheckboxSet(_) => "checkbox_set",
            Self::KeyValue => "key_value",
            Self::Files { .. } => "files",
        }
    }

    /// Reference collection this widget needs before the form is usable
    pub fn reference(&self) -> Option<ReferenceSource> {
        match self {
            Self::Select(source) | Self::CheckboxSet(source) => Some(*source),
            _ => None,
        }
    }
}

/// How a field is laid out in a multipart body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldEncoding {
    /// One text part under the field name
    #[default]
    Scalar,
    /// One text part holding the JSON text of the value
    Json,
    /// One part per element under `name[]`
    Repeated,
    /// One binary part per selected file under the field name
    Binary,
}

impl FieldEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Json => "json",
            Self::Repeated => "repeated",
            Self::Binary => "binary",
        }
    }
}

/// How a draft value is seeded from an existing record when editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedRule {
    /// Same-named record field
    #[default]
    Field,
    /// Same-named field, falling back to the `id` of the named nested object
    FieldOrObjectId(&'static str),
    /// Ids of the objects in the named record list (`sizes` -> `sizes_id`)
    ObjectIds(&'static str),
    /// Never seeded (pending uploads)
    None,
}
