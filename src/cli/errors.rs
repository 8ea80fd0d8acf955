use std::process::ExitCode;

use consent_reconcile::{ErrorKind, ReconcileError};
use log::{error, info};
use thiserror::Error;

use crate::cli::consts::{EXIT_CONFIG, EXIT_INPUT, EXIT_INTERNAL, EXIT_NOT_READY};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0:?}")]
    ConfigError(#[source] anyhow::Error),

    #[error("Input error: {0:?}")]
    InputError(#[source] anyhow::Error),

    #[error("Not ready: {0:?}")]
    NotReady(#[source] anyhow::Error),

    #[error("Internal alignment failure, this is a bug: {0:?}")]
    InternalError(#[source] anyhow::Error),

    #[error("{0:?}")]
    Other(#[source] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigError(_) => ExitCode::from(EXIT_CONFIG),
            Self::InputError(_) => ExitCode::from(EXIT_INPUT),
            Self::NotReady(_) => ExitCode::from(EXIT_NOT_READY),
            Self::InternalError(_) => ExitCode::from(EXIT_INTERNAL),
            Self::Other(_) => ExitCode::FAILURE,
        }
    }
}

pub fn config_error(error: anyhow::Error) -> CliError {
    info!("Configuration error: {error:?}");
    CliError::ConfigError(error)
}

pub fn input_error(error: anyhow::Error) -> CliError {
    info!("Input error: {error:?}");
    CliError::InputError(error)
}

pub fn other_error(error: anyhow::Error) -> CliError {
    error!("Unexpected error: {error:?}");
    CliError::Other(error)
}

/// Sort an engine error into the exit-code bucket matching its kind.
pub fn reconcile_error(error: ReconcileError, context: &'static str) -> CliError {
    let kind = error.kind();
    let error = anyhow::Error::new(error).context(context);

    match kind {
        ErrorKind::Input => input_error(error),
        ErrorKind::NotReady => {
            info!("Not ready: {error:?}");
            CliError::NotReady(error)
        }
        ErrorKind::InternalAlignment => {
            error!("Internal alignment failure: {error:?}");
            CliError::InternalError(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_the_error_kind() {
        let not_ready = reconcile_error(
            ReconcileError::NotReady {
                unresolved: 1,
                total: 2,
            },
            "Failed to assemble",
        );
        assert!(matches!(not_ready, CliError::NotReady(_)));

        let internal = reconcile_error(
            ReconcileError::InternalAlignment {
                reason: "ids are not contiguous".to_owned(),
            },
            "Failed to compare",
        );
        assert!(matches!(internal, CliError::InternalError(_)));

        let input = reconcile_error(
            ReconcileError::Input {
                reason: "unknown disagreement 7".to_owned(),
            },
            "Failed to select",
        );
        assert!(matches!(input, CliError::InputError(_)));
    }
}
