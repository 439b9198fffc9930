use crate::domain::ResourceKind;
use crate::shared::metadata::{
    ColumnSpec, ColumnValue, EntitySchema, FieldSpec, Transport, ValidationRules,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Team,
    element_name: "Team member",
    list_name: "team members",
    transport: Transport::Multipart,
    fields: &[
        FieldSpec::text("full_name", "Full Name").rules(ValidationRules::required()),
        FieldSpec::text("position_en", "Position (EN)").rules(ValidationRules::required()),
        FieldSpec::text("position_ru", "Position (RU)").rules(ValidationRules::required()),
        FieldSpec::text("position_de", "Position (DE)").rules(ValidationRules::required()),
        FieldSpec::files("file", "Image", false, Some("image/*")),
    ],
    columns: &[
        ColumnSpec::new("Image", ColumnValue::Image("images")),
        ColumnSpec::text("Full Name", "full_name"),
        ColumnSpec::text("Position (EN)", "position_en"),
    ],
};
