//! Scheduling policy selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchedulerError;
use crate::models::Ticks;

/// Which algorithm a simulation run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Policy {
    /// Time-sliced dispatch from a FIFO ready queue.
    RoundRobin {
        /// Maximum ticks per dispatch.
        quantum: Ticks,
    },
    /// Preemptive dispatch of the ready process with the least remaining work.
    ShortestRemainingTimeFirst,
}

impl Policy {
    /// Quantum used when a Round Robin tag is parsed without one.
    pub const DEFAULT_QUANTUM: Ticks = 2;

    /// Round Robin with the given quantum.
    pub fn round_robin(quantum: Ticks) -> Self {
        Policy::RoundRobin { quantum }
    }

    /// Shortest Remaining Time First.
    pub fn srtf() -> Self {
        Policy::ShortestRemainingTimeFirst
    }

    /// Parses an algorithm tag (`rr`, `round-robin`, `srtf`,
    /// `shortest-remaining-time-first`; case-insensitive, `_` or `-`).
    ///
    /// `quantum` applies to Round Robin only and defaults to
    /// [`Policy::DEFAULT_QUANTUM`]. It is not range-checked here; the run
    /// validates it along with the workload.
    ///
    /// # Errors
    /// `SchedulerError::Configuration` for an unknown tag.
    pub fn from_tag(tag: &str, quantum: Option<Ticks>) -> Result<Self, SchedulerError> {
        let normalized = tag.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "rr" | "round-robin" => Ok(Policy::RoundRobin {
                quantum: quantum.unwrap_or(Self::DEFAULT_QUANTUM),
            }),
            "srtf" | "shortest-remaining-time-first" => Ok(Policy::ShortestRemainingTimeFirst),
            _ => Err(SchedulerError::Configuration(format!(
                "unknown scheduling algorithm '{tag}' (expected 'rr' or 'srtf')"
            ))),
        }
    }

    /// Short tag (`rr` / `srtf`).
    pub fn tag(&self) -> &'static str {
        match self {
            Policy::RoundRobin { .. } => "rr",
            Policy::ShortestRemainingTimeFirst => "srtf",
        }
    }

    /// Round Robin quantum, if applicable.
    pub fn quantum(&self) -> Option<Ticks> {
        match self {
            Policy::RoundRobin { quantum } => Some(*quantum),
            Policy::ShortestRemainingTimeFirst => None,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "Round Robin (quantum={quantum})"),
            Policy::ShortestRemainingTimeFirst => f.write_str("Shortest Remaining Time First"),
        }
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s, None)
    }
}
