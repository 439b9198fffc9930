//! Select/checkbox options built from reference records

use crate::domain::ResourceKind;
use crate::shared::api_error::ApiError;
use crate::shared::metadata::ReferenceSource;
use crate::shared::record::Record;
use std::collections::HashMap;

/// Options per referenced resource
pub type OptionsMap = HashMap<ResourceKind, Vec<SelectOption>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

/// Options for a reference source; records without an id are skipped
pub fn build_options(source: &ReferenceSource, records: &[Record]) -> Vec<SelectOption> {
    records
        .iter()
        .filter_map(|record| {
            let id = record.id()?;
            let label = format!("{}{}", record.text(source.label_field), source.label_suffix);
            Some(SelectOption { id, label })
        })
        .collect()
}

/// Combines the fetch results of `sources`, in the same order. The form
/// waits for all of them, so one failed source fails the whole load.
pub fn collect_options(
    sources: &[ReferenceSource],
    results: Vec<Result<Vec<Record>, ApiError>>,
) -> Result<OptionsMap, ApiError> {
    let mut options = OptionsMap::new();
    for (source, result) in sources.iter().zip(results) {
        options.insert(source.resource, build_options(source, &result?));
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormPhase;
    use serde_json::json;

    fn records(values: Vec<serde_json::Value>) -> Vec<Record> {
        values.into_iter().filter_map(Record::from_value).collect()
    }

    #[test]
    fn test_collect_options() {
        let sources = ResourceKind::Product.schema().references();
        let results = sources
            .iter()
            .map(|source| Ok(records(vec![json!({ "id": 1, (source.label_field): "x" })])))
            .collect();

        let options = collect_options(&sources, results).unwrap();
        assert_eq!(options.len(), sources.len());
        assert_eq!(options[&ResourceKind::Category][0].id, 1);
    }

    #[test]
    fn test_failed_category_fetch_leaves_empty_form() {
        let sources = ResourceKind::Product.schema().references();
        let results = sources
            .iter()
            .map(|source| match source.resource {
                ResourceKind::Category => Err(ApiError::Network("offline".into())),
                _ => Ok(records(vec![json!({ "id": 2, (source.label_field): "ok" })])),
            })
            .collect();

        let loaded = collect_options(&sources, results);
        assert_eq!(loaded, Err(ApiError::Network("offline".into())));

        // The form still opens, with only the placeholder in every select
        let options = loaded.unwrap_or_default();
        assert!(options.is_empty());
        assert_eq!(
            FormPhase::open(!sources.is_empty()).references_loaded(),
            FormPhase::Ready
        );
    }

    #[test]
    fn test_discount_labels() {
        let source = ReferenceSource::new(ResourceKind::Discount, "discount").with_suffix("%");
        let records: Vec<Record> = [json!({ "id": 1, "discount": 10 }), json!({ "discount": 5 })]
            .into_iter()
            .filter_map(Record::from_value)
            .collect();
        assert_eq!(
            build_options(&source, &records),
            vec![SelectOption {
                id: 1,
                label: "10%".into()
            }]
        );
    }
}
