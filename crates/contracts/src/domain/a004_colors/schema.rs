use crate::domain::ResourceKind;
use crate::shared::metadata::{ColumnSpec, EntitySchema, FieldSpec, Transport, ValidationRules};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Colors,
    element_name: "Color",
    list_name: "colors",
    transport: Transport::Json,
    fields: &[
        FieldSpec::text("color_en", "Color (EN)").rules(ValidationRules::required()),
        FieldSpec::text("color_ru", "Color (RU)").rules(ValidationRules::required()),
        FieldSpec::text("color_de", "Color (DE)").rules(ValidationRules::required()),
    ],
    columns: &[
        ColumnSpec::text("Color EN", "color_en"),
        ColumnSpec::text("Color RU", "color_ru"),
        ColumnSpec::text("Color DE", "color_de"),
    ],
};
