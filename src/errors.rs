use thiserror::Error;

/// Errors surfaced by the comparison and reconciliation engine. None of them
/// come with partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// The caller supplied input the engine cannot work with, such as a
    /// binary payload or a selection for a disagreement that doesn't exist.
    #[error("Invalid input: {reason}")]
    Input {
        /// What was wrong with the input
        reason: String,
    },

    /// `assemble` was called before every disagreement had a selection.
    #[error("Cannot assemble the document: {unresolved} of {total} disagreements are unresolved")]
    NotReady {
        /// Number of disagreements without a selection
        unresolved: usize,
        /// Number of disagreements in the diff table
        total: usize,
    },

    /// The aligner or the table builder produced an inconsistent result.
    /// This is a bug and should be reported.
    #[error("Internal alignment failure: {reason}")]
    InternalAlignment {
        /// The violated invariant
        reason: String,
    },
}

/// The taxonomy of `ReconcileError` without the payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    NotReady,
    InternalAlignment,
}

impl ReconcileError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReconcileError::Input { .. } => ErrorKind::Input,
            ReconcileError::NotReady { .. } => ErrorKind::NotReady,
            ReconcileError::InternalAlignment { .. } => ErrorKind::InternalAlignment,
        }
    }

    pub(crate) fn input(reason: impl Into<String>) -> Self {
        ReconcileError::Input {
            reason: reason.into(),
        }
    }

    pub(crate) fn internal(reason: impl Into<String>) -> Self {
        ReconcileError::InternalAlignment {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_messages() {
        assert_snapshot!(
            ReconcileError::NotReady { unresolved: 2, total: 5 },
            @"Cannot assemble the document: 2 of 5 disagreements are unresolved"
        );
        assert_snapshot!(
            ReconcileError::input("document A is not valid UTF-8 text"),
            @"Invalid input: document A is not valid UTF-8 text"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(ReconcileError::internal("ids differ").kind(), ErrorKind::InternalAlignment);
        assert_eq!(
            ReconcileError::NotReady { unresolved: 1, total: 1 }.kind(),
            ErrorKind::NotReady
        );
    }
}
