//! Input validation for simulation runs.
//!
//! Checks structural integrity of a workload and its policy parameters
//! before any runtime state is built. Detects:
//! - Empty workloads
//! - Duplicate process IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive Round Robin quanta
//!
//! All problems are collected and returned together so a caller can fix
//! an input file in one pass.

use crate::models::{Ticks, Workload};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Declaration position of the offending process, if any.
    pub index: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload has no processes.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before tick 0.
    NegativeArrival,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            index: None,
            message: message.into(),
        }
    }

    fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Validates a workload and, for Round Robin, its quantum.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst time is positive
/// 4. Every arrival time is non-negative
/// 5. `quantum`, when given, is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workload: &Workload, quantum: Option<Ticks>) -> ValidationResult {
    let mut errors = match validate_workload(workload) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    if let Some(q) = quantum {
        if let Err(mut quantum_errors) = validate_quantum(q) {
            errors.append(&mut quantum_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates workload structure only.
pub fn validate_workload(workload: &Workload) -> ValidationResult {
    let mut errors = Vec::new();

    if workload.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload contains no processes",
        ));
    }

    let mut ids = HashSet::new();
    for (idx, p) in workload.iter().enumerate() {
        if !ids.insert(p.id.as_str()) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate process ID '{}' at position {idx}", p.id),
                )
                .at(idx),
            );
        }

        if p.burst_time <= 0 {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::NonPositiveBurst,
                    format!(
                        "Process '{}' has non-positive burst time {}",
                        p.id, p.burst_time
                    ),
                )
                .at(idx),
            );
        }

        if p.arrival_time < 0 {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::NegativeArrival,
                    format!(
                        "Process '{}' has negative arrival time {}",
                        p.id, p.arrival_time
                    ),
                )
                .at(idx),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: Ticks) -> ValidationResult {
    if quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round Robin quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}
