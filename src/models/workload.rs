//! Workload model.
//!
//! An ordered, immutable collection of [`ProcessSpec`]s. Declaration order
//! matters: it is the tie-break for SRTF selection and for processes that
//! arrive on the same tick.

use serde::{Deserialize, Serialize};

use super::{ProcessSpec, Ticks};

/// The complete set of processes for a simulation run.
///
/// Serializes transparently as a JSON array of process records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload {
    processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Creates an empty workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a workload from processes in declaration order.
    pub fn from_processes(processes: Vec<ProcessSpec>) -> Self {
        Self { processes }
    }

    /// Appends a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Processes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessSpec> {
        self.processes.iter()
    }

    /// Process at declaration position `index`.
    pub fn get(&self, index: usize) -> Option<&ProcessSpec> {
        self.processes.get(index)
    }

    /// Underlying slice.
    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }

    /// Sum of all burst times.
    pub fn total_burst_time(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Latest arrival tick, or `None` for an empty workload.
    pub fn latest_arrival(&self) -> Option<Ticks> {
        self.processes.iter().map(|p| p.arrival_time).max()
    }
}

impl From<Vec<ProcessSpec>> for Workload {
    fn from(processes: Vec<ProcessSpec>) -> Self {
        Self::from_processes(processes)
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a ProcessSpec;
    type IntoIter = std::slice::Iter<'a, ProcessSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Workload {
        Workload::new()
            .with_process(ProcessSpec::new("P1", 0, 5))
            .with_process(ProcessSpec::new("P2", 1, 3))
            .with_process(ProcessSpec::new("P3", 2, 1))
    }

    #[test]
    fn test_workload_totals() {
        let w = sample();
        assert_eq!(w.len(), 3);
        assert_eq!(w.total_burst_time(), 9);
        assert_eq!(w.latest_arrival(), Some(2));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let w = sample();
        let ids: Vec<&str> = w.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
        assert_eq!(w.get(1).map(|p| p.id.as_str()), Some("P2"));
    }

    #[test]
    fn test_empty_workload() {
        let w = Workload::new();
        assert!(w.is_empty());
        assert_eq!(w.total_burst_time(), 0);
        assert_eq!(w.latest_arrival(), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[2]["id"], "P3");
    }
}
