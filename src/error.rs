//! Error types surfaced to callers.

use std::path::PathBuf;

use crate::validation::ValidationError;

/// Errors returned by a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// The workload or policy parameters failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    /// Malformed policy selection (e.g. unknown algorithm tag).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SchedulerError {
    /// Validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            SchedulerError::Validation(errors) => Some(errors),
            SchedulerError::Configuration(_) => None,
        }
    }
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulerError::Validation(errors)
    }
}

/// Errors returned while loading a workload.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read workload file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse workload: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_quantum;

    #[test]
    fn test_validation_display_joins_messages() {
        let mut errors = validate_quantum(0).unwrap_err();
        errors.extend(validate_quantum(-1).unwrap_err());
        let err = SchedulerError::from(errors);
        let text = err.to_string();
        assert!(text.starts_with("invalid input: "));
        assert!(text.contains("got 0; "));
        assert_eq!(err.validation_errors().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_configuration_has_no_validation_errors() {
        let err = SchedulerError::Configuration("unknown algorithm 'fifo'".into());
        assert!(err.validation_errors().is_none());
        assert_eq!(
            err.to_string(),
            "configuration error: unknown algorithm 'fifo'"
        );
    }
}
