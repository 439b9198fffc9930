//! Declarative schema types describing the console's resources
//!
//! Every resource is a compile-time `EntitySchema`: its form fields (widget,
//! validation, multipart encoding, seeding rule) and its list columns. Forms,
//! encoders and tables are driven by these tables instead of per-page code.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::ResourceKind;
//!
//! let schema = ResourceKind::Product.schema();
//! for field in schema.fields {
//!     println!("{} -> {}", field.name, field.encoding.as_str());
//! }
//! ```

mod column;
mod field_type;
mod types;
mod validation;

pub use column::{format_date, CellValue, ColumnSpec, ColumnValue};
pub use field_type::{FieldEncoding, FieldWidget, ReferenceSource, SeedRule};
pub use types::{EntitySchema, FieldSpec, Transport};
pub use validation::{ValidationError, ValidationRules};
