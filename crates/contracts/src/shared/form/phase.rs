//! Lifecycle of the entity form modal

/// `Closed -> LoadingReferences -> Ready -> Submitting -> (Closed | Ready)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    LoadingReferences,
    Ready,
    Submitting,
}

impl FormPhase {
    /// Opening skips reference loading for forms without selects
    pub fn open(needs_references: bool) -> Self {
        if needs_references {
            Self::LoadingReferences
        } else {
            Self::Ready
        }
    }

    pub fn references_loaded(self) -> Self {
        match self {
            Self::LoadingReferences => Self::Ready,
            other => other,
        }
    }

    /// Only a ready form may start a submission
    pub fn begin_submit(self) -> Option<Self> {
        match self {
            Self::Ready => Some(Self::Submitting),
            _ => None,
        }
    }

    pub fn submit_finished(self, success: bool) -> Self {
        match (self, success) {
            (Self::Submitting, true) => Self::Closed,
            (Self::Submitting, false) => Self::Ready,
            (other, _) => other,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Inputs and buttons are locked while loading or submitting
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::LoadingReferences | Self::Submitting)
    }

    pub fn submit_label(&self, editing: bool) -> &'static str {
        match (self, editing) {
            (Self::Submitting, true) => "Saving...",
            (Self::Submitting, false) => "Adding...",
            (_, true) => "Save",
            (_, false) => "Add",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let phase = FormPhase::open(true);
        assert_eq!(phase, FormPhase::LoadingReferences);
        assert!(phase.begin_submit().is_none());

        let phase = phase.references_loaded();
        assert_eq!(phase, FormPhase::Ready);

        let phase = phase.begin_submit().unwrap();
        assert!(phase.is_busy());
        assert_eq!(phase.submit_label(false), "Adding...");
        assert_eq!(phase.submit_finished(true), FormPhase::Closed);
    }

    #[test]
    fn test_failure_returns_to_ready() {
        let phase = FormPhase::open(false).begin_submit().unwrap();
        assert_eq!(phase.submit_label(true), "Saving...");
        let phase = phase.submit_finished(false);
        assert_eq!(phase, FormPhase::Ready);
        assert!(phase.is_open());
        assert!(phase.begin_submit().is_some());
    }

    #[test]
    fn test_stray_events_ignored() {
        assert_eq!(FormPhase::Closed.references_loaded(), FormPhase::Closed);
        assert_eq!(FormPhase::Ready.submit_finished(true), FormPhase::Ready);
        assert!(FormPhase::Submitting.begin_submit().is_none());
    }
}
