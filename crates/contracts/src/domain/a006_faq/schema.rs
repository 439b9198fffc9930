use crate::domain::ResourceKind;
use crate::shared::metadata::{ColumnSpec, EntitySchema, FieldSpec, Transport, ValidationRules};

pub static SCHEMA: EntitySchema = EntitySchema {
    resource: ResourceKind::Faq,
    element_name: "FAQ",
    list_name: "FAQs",
    transport: Transport::Json,
    fields: &[
        FieldSpec::text("question_en", "Question (EN)")
            .rules(ValidationRules::required())
            .placeholder("question_en"),
        FieldSpec::text("question_ru", "Question (RU)")
            .rules(ValidationRules::required())
            .placeholder("question_ru"),
        FieldSpec::text("question_de", "Question (DE)")
            .rules(ValidationRules::required())
            .placeholder("question_de"),
        FieldSpec::textarea("answer_en", "Answer (EN)")
            .rules(ValidationRules::required())
            .placeholder("answer_en"),
        FieldSpec::textarea("answer_ru", "Answer (RU)")
            .rules(ValidationRules::required())
            .placeholder("answer_ru"),
        FieldSpec::textarea("answer_de", "Answer (DE)")
            .rules(ValidationRules::required())
            .placeholder("answer_de"),
    ],
    columns: &[
        ColumnSpec::text("Question EN", "question_en"),
        ColumnSpec::text("Answer EN", "answer_en"),
    ],
};
