use crate::domain::ResourceKind;
use crate::shared::metadata::{ColumnSpec, EntitySchema, FieldSpec, Transport, ValidationRules};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Sizes,
    element_name: "Size",
    list_name: "sizes",
    transport: Transport::Json,
    fields: &[FieldSpec::text("size", "Size")
        .rules(ValidationRules::required())
        .placeholder("Size")],
    columns: &[ColumnSpec::text("Size", "size")],
};
