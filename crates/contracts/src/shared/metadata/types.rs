//! Core schema types for the console's resources
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::column::ColumnSpec;
use super::field_type::{FieldEncoding, FieldWidget, ReferenceSource, SeedRule};
use super::validation::ValidationRules;
use crate::domain::ResourceKind;

// ============================================================================
// Entity-level schema
// ============================================================================

/// Body encoding used for create/update requests of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Json,
    Multipart,
}

/// Declarative description of one resource: form fields, wire encoding and
/// list columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySchema {
    pub resource: ResourceKind,
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub transport: Transport,
    pub fields: &'static [FieldSpec],
    pub columns: &'static [ColumnSpec],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Reference collections the form needs, one entry per resource
    pub fn references(&self) -> Vec<ReferenceSource> {
        let mut out: Vec<ReferenceSource> = Vec::new();
        for source in self.fields.iter().filter_map(|f| f.widget.reference()) {
            if !out.iter().any(|s| s.resource == source.resource) {
                out.push(source);
            }
        }
        out
    }

    pub fn has_files(&self) -> bool {
        self.fields
            .iter()
            .any(|f| matches!(f.widget, FieldWidget::Files { .. }))
    }
}

// ============================================================================
// Field-level schema
// ============================================================================

/// Schema of a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub widget: FieldWidget,
    pub encoding: FieldEncoding,
    pub validation: ValidationRules,
    /// Initial text for a new draft
    pub default: Option<&'static str>,
    pub seed: SeedRule,
}

impl FieldSpec {
    const fn base(name: &'static str, label: &'static str, widget: FieldWidget) -> Self {
        Self {
            name,
            label,
            placeholder: None,
            widget,
            encoding: FieldEncoding::Scalar,
            validation: ValidationRules::none(),
            default: None,
            seed: SeedRule::Field,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldWidget::Text)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldWidget::TextArea)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldWidget::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldWidget::Date)
    }

    pub const fn toggle(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldWidget::Toggle)
    }

    pub const fn select(name: &'static str, label: &'static str, source: ReferenceSource) -> Self {
        Self::base(name, label, FieldWidget::Select(source))
    }

    /// Many-to-many id set, sent as repeated `name[]` parts
    pub const fn checkbox_set(
        name: &'static str,
        label: &'static str,
        source: ReferenceSource,
    ) -> Self {
        let mut spec = Self::base(name, label, FieldWidget::CheckboxSet(source));
        spec.encoding = FieldEncoding::Repeated;
        spec
    }

    /// Key/value map, sent as one JSON text part
    pub const fn key_value(name: &'static str, label: &'static str) -> Self {
        let mut spec = Self::base(name, label, FieldWidget::KeyValue);
        spec.encoding = FieldEncoding::Json;
        spec
    }

    pub const fn files(
        name: &'static str,
        label: &'static str,
        multiple: bool,
        accept: Option<&'static str>,
    ) -> Self {
        let mut spec = Self::base(name, label, FieldWidget::Files { multiple, accept });
        spec.encoding = FieldEncoding::Binary;
        spec.seed = SeedRule::None;
        spec
    }

    pub const fn rules(mut self, validation: ValidationRules) -> Self {
        self.validation = validation;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn seed(mut self, seed: SeedRule) -> Self {
        self.seed = seed;
        self
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Multipart part name (`sizes_id[]` for repeated fields)
    pub fn part_name(&self) -> String {
        match self.encoding {
            FieldEncoding::Repeated => format!("{}[]", self.name),
            _ => self.name.to_string(),
        }
    }
}
