//! Per-control submission state for the post forms.

use crate::error::DomainError;

/// Lifecycle of a single form action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed,
    Succeeded,
}

impl SubmissionState {
    /// Enter `Submitting`. Refused while a submission is already in flight.
    pub fn begin(&mut self, action: &'static str) -> Result<(), DomainError> {
        if self.is_busy() {
            return Err(DomainError::AlreadySubmitting(action));
        }
        *self = SubmissionState::Submitting;
        Ok(())
    }

    pub fn succeed(&mut self) {
        *self = SubmissionState::Succeeded;
    }

    pub fn fail(&mut self) {
        *self = SubmissionState::Failed;
    }

    /// Busy controls are rendered disabled with their in-progress label.
    pub fn is_busy(self) -> bool {
        self == SubmissionState::Submitting
    }
}

/// The edit page has two independent actions: saving and deleting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorState {
    pub edit: SubmissionState,
    pub delete: SubmissionState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_submit_is_refused() {
        let mut state = SubmissionState::default();
        state.begin("create").unwrap();
        assert_eq!(
            state.begin("create"),
            Err(DomainError::AlreadySubmitting("create"))
        );
        state.fail();
        assert!(state.begin("create").is_ok());
    }

    #[test]
    fn test_edit_and_delete_are_independent() {
        let mut editor = EditorState::default();
        editor.edit.begin("edit").unwrap();
        assert!(editor.edit.is_busy());
        assert!(!editor.delete.is_busy());

        editor.delete.begin("delete").unwrap();
        assert!(editor.delete.begin("delete").is_err());
        assert!(editor.edit.begin("edit").is_err());

        editor.edit.succeed();
        assert_eq!(editor.edit, SubmissionState::Succeeded);
        assert!(editor.delete.is_busy());
    }
}
