use crate::domain::ResourceKind;
use crate::shared::metadata::{
    ColumnSpec, ColumnValue, EntitySchema, FieldSpec, Transport, ValidationRules,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Discount,
    element_name: "Discount",
    list_name: "discounts",
    transport: Transport::Json,
    fields: &[
        FieldSpec::number("discount", "Discount (%)")
            .rules(ValidationRules::required().with_min(0.0).with_max(100.0)),
        FieldSpec::date("started_at", "Started At"),
        FieldSpec::date("finished_at", "Finished At"),
        FieldSpec::toggle("status", "Active"),
    ],
    columns: &[
        ColumnSpec::new(
            "Discount",
            ColumnValue::Percent {
                field: "discount",
                fallback: "-",
            },
        ),
        ColumnSpec::new("Started", ColumnValue::Date("started_at")),
        ColumnSpec::new("Finished", ColumnValue::Date("finished_at")),
        ColumnSpec::new("Status", ColumnValue::Flag("status")),
    ],
};
