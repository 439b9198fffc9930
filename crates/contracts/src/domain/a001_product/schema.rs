//! Product: multilingual texts, associations, materials and images

use crate::domain::ResourceKind;
use crate::shared::metadata::{
    ColumnSpec, ColumnValue, EntitySchema, FieldSpec, ReferenceSource, SeedRule, Transport,
    ValidationRules,
};

const TITLE: ValidationRules = ValidationRules::required_text(80);
const DESCRIPTION: ValidationRules = ValidationRules::required_text(500);

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Product,
    element_name: "Product",
    list_name: "products",
    transport: Transport::Multipart,
    fields: &[
        FieldSpec::text("title_en", "Title (EN)").rules(TITLE),
        FieldSpec::text("title_ru", "Title (RU)").rules(TITLE),
        FieldSpec::text("title_de", "Title (DE)").rules(TITLE),
        FieldSpec::textarea("description_en", "Description (EN)").rules(DESCRIPTION),
        FieldSpec::textarea("description_ru", "Description (RU)").rules(DESCRIPTION),
        FieldSpec::textarea("description_de", "Description (DE)").rules(DESCRIPTION),
        FieldSpec::number("price", "Price")
            .rules(ValidationRules::required().with_min(0.01)),
        FieldSpec::number("min_sell", "Min Sell")
            .rules(ValidationRules::required().with_min(1.0).integer())
            .default_value("1"),
        FieldSpec::select(
            "category_id",
            "Category",
            ReferenceSource::new(ResourceKind::Category, "name_en"),
        )
        .rules(ValidationRules::required())
        .placeholder("Select Category")
        .seed(SeedRule::FieldOrObjectId("category")),
        FieldSpec::checkbox_set(
            "sizes_id",
            "Sizes",
            ReferenceSource::new(ResourceKind::Sizes, "size"),
        )
        .seed(SeedRule::ObjectIds("sizes")),
        FieldSpec::checkbox_set(
            "colors_id",
            "Colors",
            ReferenceSource::new(ResourceKind::Colors, "color_en"),
        )
        .seed(SeedRule::ObjectIds("colors")),
        FieldSpec::select(
            "discount_id",
            "Discount",
            ReferenceSource::new(ResourceKind::Discount, "discount").with_suffix("%"),
        )
        .placeholder("No Discount")
        .seed(SeedRule::FieldOrObjectId("discount")),
        FieldSpec::key_value("materials", "Materials"),
        FieldSpec::files("files", "Images", true, Some("image/*")),
    ],
    columns: &[
        ColumnSpec::new("Images", ColumnValue::Image("images")),
        ColumnSpec::text("Title", "title_en"),
        ColumnSpec::text("Description", "description_en"),
        ColumnSpec::text("Price", "price"),
        ColumnSpec::new(
            "Category",
            ColumnValue::Related {
                object: "category",
                field: "name_en",
                fallback: "No Category",
            },
        ),
        ColumnSpec::new(
            "Colors",
            ColumnValue::RelatedList {
                list: "colors",
                field: "color_en",
            },
        ),
        ColumnSpec::new(
            "Sizes",
            ColumnValue::RelatedList {
                list: "sizes",
                field: "size",
            },
        ),
        ColumnSpec::new(
            "Discount",
            ColumnValue::Percent {
                field: "discount",
                fallback: "No Discount",
            },
        ),
        ColumnSpec::new("Materials", ColumnValue::KeyValue("materials")),
    ],
};
