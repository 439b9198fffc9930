use crate::domain::ResourceKind;
use crate::shared::metadata::{ColumnSpec, EntitySchema, FieldSpec, Transport, ValidationRules};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Category,
    element_name: "Category",
    list_name: "categories",
    transport: Transport::Json,
    fields: &[
        FieldSpec::text("name_en", "Name (EN)")
            .rules(ValidationRules::required())
            .placeholder("EN name"),
        FieldSpec::text("name_ru", "Name (RU)")
            .rules(ValidationRules::required())
            .placeholder("RU name"),
        FieldSpec::text("name_de", "Name (DE)")
            .rules(ValidationRules::required())
            .placeholder("DE name"),
    ],
    columns: &[
        ColumnSpec::text("Title (ENG)", "name_en"),
        ColumnSpec::text("Title (RU)", "name_ru"),
        ColumnSpec::text("Title (DE)", "name_de"),
    ],
};
