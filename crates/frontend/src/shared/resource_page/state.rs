use contracts::shared::record::Record;

/// Which form the page currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum FormTarget {
    Create,
    Edit(Record),
}

impl FormTarget {
    pub fn record(&self) -> Option<Record> {
        match self {
            Self::Create => None,
            Self::Edit(record) => Some(record.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub records: Vec<Record>,
    /// First fetch finished (successfully or not)
    pub is_loaded: bool,
    /// Id awaiting delete confirmation
    pub pending_delete: Option<i64>,
    pub is_deleting: bool,
    pub form: Option<FormTarget>,
}

impl ListState {
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.is_loaded = true;
    }

    pub fn mark_loaded(&mut self) {
        self.is_loaded = true;
    }

    pub fn is_empty(&self) -> bool {
        self.is_loaded && self.records.is_empty()
    }

    pub fn request_delete(&mut self, id: i64) {
        if !self.is_deleting {
            self.pending_delete = Some(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        if !self.is_deleting {
            self.pending_delete = None;
        }
    }

    /// Id to delete, once per confirmation
    pub fn confirm_delete(&mut self) -> Option<i64> {
        if self.is_deleting {
            return None;
        }
        let id = self.pending_delete?;
        self.is_deleting = true;
        Some(id)
    }

    pub fn finish_delete(&mut self) {
        self.is_deleting = false;
        self.pending_delete = None;
    }

    pub fn open_create(&mut self) {
        self.form = Some(FormTarget::Create);
    }

    pub fn open_edit(&mut self, record: Record) {
        self.form = Some(FormTarget::Edit(record));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        [json!({ "id": 1, "size": "S" }), json!({ "id": 2, "size": "M" })]
            .into_iter()
            .filter_map(Record::from_value)
            .collect()
    }

    #[test]
    fn test_cancelled_delete_issues_nothing() {
        let mut state = ListState::default();
        state.set_records(records());

        state.request_delete(2);
        state.cancel_delete();
        assert_eq!(state.confirm_delete(), None);
        assert_eq!(state.records, records());
    }

    #[test]
    fn test_confirm_once() {
        let mut state = ListState::default();
        state.request_delete(1);
        assert_eq!(state.confirm_delete(), Some(1));
        assert_eq!(state.confirm_delete(), None);

        // Dialog stays locked while the request runs
        state.cancel_delete();
        assert_eq!(state.pending_delete, Some(1));

        state.finish_delete();
        assert_eq!(state.pending_delete, None);
        assert!(!state.is_deleting);
    }

    #[test]
    fn test_empty_only_after_load() {
        let mut state = ListState::default();
        assert!(!state.is_empty());
        state.set_records(Vec::new());
        assert!(state.is_empty());
    }

    #[test]
    fn test_form_target() {
        let mut state = ListState::default();
        state.open_create();
        assert_eq!(state.form, Some(FormTarget::Create));
        let record = records().remove(0);
        state.open_edit(record.clone());
        assert_eq!(state.form.as_ref().and_then(FormTarget::record), Some(record));
        state.close_form();
        assert_eq!(state.form, None);
    }
}
