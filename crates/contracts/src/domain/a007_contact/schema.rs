use crate::domain::ResourceKind;
use crate::shared::metadata::{ColumnSpec, EntitySchema, FieldSpec, Transport, ValidationRules};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Contact,
    element_name: "Contact",
    list_name: "contacts",
    transport: Transport::Json,
    fields: &[
        FieldSpec::text("phone_number", "Phone").rules(ValidationRules::required()),
        FieldSpec::text("email", "Email").rules(ValidationRules::required()),
        FieldSpec::text("address_en", "Address (EN)").rules(ValidationRules::required()),
        FieldSpec::text("address_ru", "Address (RU)").rules(ValidationRules::required()),
        FieldSpec::text("address_de", "Address (DE)").rules(ValidationRules::required()),
    ],
    columns: &[
        ColumnSpec::text("Phone", "phone_number"),
        ColumnSpec::text("Email", "email"),
        ColumnSpec::text("Address (EN)", "address_en"),
    ],
};
