//! Process specification model.
//!
//! A process is a unit of CPU work declared up front: it becomes eligible
//! at its arrival tick and needs a fixed number of ticks to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Virtual-clock tick count.
///
/// Signed so that malformed input (negative arrival, zero burst) can be
/// represented and rejected by validation rather than at parse time.
pub type Ticks = i64;

/// A process to be scheduled.
///
/// Immutable for the duration of a simulation run. The engine copies
/// whatever it needs into per-run state and never writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU ticks required to complete.
    pub burst_time: Ticks,
}

impl ProcessSpec {
    /// Creates a process arriving at `arrival_time` with `burst_time` ticks of work.
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival_time: Ticks) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst length.
    pub fn with_burst(mut self, burst_time: Ticks) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Whether the process has arrived by tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = ProcessSpec::new("P1", 0, 5).with_arrival(3).with_burst(7);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
    }

    #[test]
    fn test_has_arrived() {
        let p = ProcessSpec::new("P1", 4, 1);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_deserialize_field_names() {
        let p: ProcessSpec =
            serde_json::from_str(r#"{"id":"P9","arrival_time":2,"burst_time":6}"#).unwrap();
        assert_eq!(p, ProcessSpec::new("P9", 2, 6));
    }
}
