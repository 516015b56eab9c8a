//! Per-process and aggregate performance metrics.
//!
//! Derived once per run from completion ticks and the execution trace.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time | Tick at which remaining work first reaches 0 |
//! | Turnaround time | completion - arrival |
//! | Waiting time | turnaround - burst |
//! | Response time | first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | CPU utilization | busy ticks / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::runtime::ProcessRuntimeState;
use crate::models::{ExecutionTrace, ProcessSpec, Ticks, Workload};

/// Metrics for a single completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Arrival tick (from the `ProcessSpec`).
    pub arrival_time: Ticks,
    /// Burst length (from the `ProcessSpec`).
    pub burst_time: Ticks,
    /// Tick at which the process finished.
    pub completion_time: Ticks,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Ticks,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Ticks,
    /// `first dispatch - arrival_time`.
    pub response_time: Ticks,
}

impl ProcessMetrics {
    /// Derives metrics for a process that completed at `completion_time`.
    pub fn derive(spec: &ProcessSpec, completion_time: Ticks, first_dispatch: Ticks) -> Self {
        let turnaround_time = completion_time - spec.arrival_time;
        Self {
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - spec.burst_time,
            response_time: first_dispatch - spec.arrival_time,
        }
    }
}

/// Performance report for one simulation run, keyed by process id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Per-process metrics.
    pub processes: BTreeMap<String, ProcessMetrics>,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Latest completion tick.
    pub makespan: Ticks,
    /// Ticks with no ready process.
    pub idle_ticks: Ticks,
    /// Switches between distinct processes.
    pub context_switches: usize,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl MetricsReport {
    /// Computes the report from final run state.
    ///
    /// Processes without a completion tick are skipped; after a finished
    /// run every process has one.
    pub(crate) fn calculate(
        workload: &Workload,
        states: &[ProcessRuntimeState],
        trace: &ExecutionTrace,
    ) -> Self {
        let mut processes = BTreeMap::new();
        let mut total_waiting: Ticks = 0;
        let mut total_turnaround: Ticks = 0;
        let mut total_response: Ticks = 0;
        let mut makespan: Ticks = 0;

        for (spec, state) in workload.iter().zip(states) {
            let (Some(completion), Some(first)) = (state.completion_time(), state.first_dispatch())
            else {
                continue;
            };
            let m = ProcessMetrics::derive(spec, completion, first);
            total_waiting += m.waiting_time;
            total_turnaround += m.turnaround_time;
            total_response += m.response_time;
            makespan = makespan.max(completion);
            processes.insert(spec.id.clone(), m);
        }

        let counted = processes.len();
        let mean = |total: Ticks| {
            if counted == 0 {
                0.0
            } else {
                total as f64 / counted as f64
            }
        };

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            trace.busy_ticks() as f64 / makespan as f64
        };

        Self {
            processes,
            average_waiting_time: mean(total_waiting),
            average_turnaround_time: mean(total_turnaround),
            average_response_time: mean(total_response),
            makespan,
            idle_ticks: trace.idle_ticks(),
            context_switches: trace.context_switches(),
            cpu_utilization,
        }
    }

    /// Metrics for one process.
    pub fn get(&self, id: &str) -> Option<&ProcessMetrics> {
        self.processes.get(id)
    }

    /// Number of processes reported.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Completion tick per process id.
    pub fn completion_times(&self) -> BTreeMap<&str, Ticks> {
        self.project(|m| m.completion_time)
    }

    /// Waiting time per process id.
    pub fn waiting_times(&self) -> BTreeMap<&str, Ticks> {
        self.project(|m| m.waiting_time)
    }

    /// Turnaround time per process id.
    pub fn turnaround_times(&self) -> BTreeMap<&str, Ticks> {
        self.project(|m| m.turnaround_time)
    }

    /// Response time per process id.
    pub fn response_times(&self) -> BTreeMap<&str, Ticks> {
        self.project(|m| m.response_time)
    }

    fn project(&self, f: impl Fn(&ProcessMetrics) -> Ticks) -> BTreeMap<&str, Ticks> {
        self.processes
            .iter()
            .map(|(id, m)| (id.as_str(), f(m)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::runtime::RunState;

    #[test]
    fn test_derive_process_metrics() {
        let spec = ProcessSpec::new("P2", 1, 3);
        let m = ProcessMetrics::derive(&spec, 8, 2);
        assert_eq!(m.turnaround_time, 7);
        assert_eq!(m.waiting_time, 4);
        assert_eq!(m.response_time, 1);
    }

    #[test]
    fn test_calculate_from_run() {
        // P1 runs [0,2), idle [2,3), P2 runs [3,4)
        let w = Workload::from_processes(vec![
            ProcessSpec::new("P1", 0, 2),
            ProcessSpec::new("P2", 3, 1),
        ]);
        let mut run = RunState::new(&w);
        run.admit(0);
        run.execute(0, 2);
        run.idle_tick();
        run.admit(1);
        run.execute(1, 1);
        let report = run.finish(crate::scheduler::Policy::srtf()).metrics;

        assert_eq!(report.process_count(), 2);
        assert_eq!(report.makespan, 4);
        assert_eq!(report.idle_ticks, 1);
        assert_eq!(report.context_switches, 1);
        assert!((report.cpu_utilization - 0.75).abs() < 1e-10);
        assert!((report.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((report.average_turnaround_time - 1.5).abs() < 1e-10); // (2 + 1) / 2
    }

    #[test]
    fn test_projections_share_id_set() {
        let w = Workload::from_processes(vec![
            ProcessSpec::new("B", 0, 1),
            ProcessSpec::new("A", 0, 1),
        ]);
        let mut run = RunState::new(&w);
        run.admit(0);
        run.admit(1);
        run.execute(0, 1);
        run.execute(1, 1);
        let report = run.finish(crate::scheduler::Policy::srtf()).metrics;

        let ids: Vec<&str> = report.completion_times().keys().copied().collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(
            report.waiting_times().keys().collect::<Vec<_>>(),
            report.turnaround_times().keys().collect::<Vec<_>>()
        );
        assert_eq!(report.waiting_times()["A"], 1);
        assert_eq!(report.response_times()["B"], 0);
    }

    #[test]
    fn test_unfinished_processes_are_skipped() {
        let w = Workload::from_processes(vec![ProcessSpec::new("P1", 0, 2)]);
        let run = RunState::new(&w);
        let report = run.finish(crate::scheduler::Policy::srtf()).metrics;
        assert_eq!(report.process_count(), 0);
        assert!((report.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((report.cpu_utilization - 0.0).abs() < 1e-10);
    }
}
