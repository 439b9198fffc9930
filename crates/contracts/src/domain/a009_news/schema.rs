use crate::domain::ResourceKind;
use crate::shared::metadata::{
    ColumnSpec, ColumnValue, EntitySchema, FieldSpec, Transport, ValidationRules,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::News,
    element_name: "News",
    list_name: "news",
    transport: Transport::Multipart,
    fields: &[
        FieldSpec::text("title_en", "Title (EN)").rules(ValidationRules::required()),
        FieldSpec::text("title_ru", "Title (RU)").rules(ValidationRules::required()),
        FieldSpec::text("title_de", "Title (DE)").rules(ValidationRules::required()),
        FieldSpec::textarea("description_en", "Description (EN)")
            .rules(ValidationRules::required()),
        FieldSpec::textarea("description_ru", "Description (RU)")
            .rules(ValidationRules::required()),
        FieldSpec::textarea("description_de", "Description (DE)")
            .rules(ValidationRules::required()),
        FieldSpec::files("file", "Image", false, Some(".png,.jpg,.jpeg")),
    ],
    columns: &[
        ColumnSpec::new("Image", ColumnValue::Image("image")),
        ColumnSpec::text("Title (EN)", "title_en"),
        ColumnSpec::text("Description (EN)", "description_en"),
    ],
};
