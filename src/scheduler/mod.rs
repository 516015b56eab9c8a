//! Discrete-time scheduling engine and metrics.
//!
//! Runs a [`Workload`] under a [`Policy`] and returns the resulting
//! [`ExecutionTrace`] and [`MetricsReport`].
//!
//! # Algorithms
//!
//! - **Round Robin**: FIFO ready queue, multi-tick dispatches of at most
//!   `quantum` ticks. Processes that arrive during a slice are queued ahead
//!   of the process that was preempted at the end of it.
//! - **Shortest Remaining Time First**: one-tick dispatches, re-selecting the
//!   ready process with the least remaining work every tick; ties go to the
//!   earliest-declared process.
//!
//! Both share one skeleton: admit arrivals, idle a single tick when nothing
//! is ready, otherwise dispatch, then re-queue or record completion.
//!
//! # Determinism
//!
//! Each call builds its own runtime state from the immutable workload, so
//! repeated runs are identical and concurrent runs over a shared workload
//! do not interfere.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod metrics;
mod policy;
mod round_robin;
mod runtime;
mod srtf;

pub use metrics::{MetricsReport, ProcessMetrics};
pub use policy::Policy;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SchedulerError;
use crate::models::{ExecutionTrace, Workload};
use crate::validation::validate_input;

/// Result of a completed simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy the run used.
    pub policy: Policy,
    /// One slot per tick.
    pub trace: ExecutionTrace,
    /// Derived metrics.
    pub metrics: MetricsReport,
}

/// Simulates `workload` under `policy`.
///
/// # Errors
/// `SchedulerError::Validation` if the workload is empty, has duplicate
/// ids, non-positive bursts or negative arrivals, or if a Round Robin
/// quantum is not positive. Nothing is simulated in that case.
///
/// # Example
///
/// ```
/// use proc_schedule::models::{ProcessSpec, Workload};
/// use proc_schedule::scheduler::{run, Policy};
///
/// let workload = Workload::from_processes(vec![
///     ProcessSpec::new("P1", 0, 5),
///     ProcessSpec::new("P2", 1, 3),
///     ProcessSpec::new("P3", 2, 1),
/// ]);
///
/// let outcome = run(&workload, Policy::round_robin(2)).unwrap();
/// assert_eq!(outcome.trace.to_string(), "P1 P1 P2 P2 P3 P1 P1 P2 P1");
/// assert_eq!(outcome.metrics.completion_times()["P3"], 5);
/// ```
pub fn run(workload: &Workload, policy: Policy) -> Result<SimulationOutcome, SchedulerError> {
    if let Err(errors) = validate_input(workload, policy.quantum()) {
        warn!(%policy, errors = errors.len(), "rejected simulation input");
        return Err(SchedulerError::Validation(errors));
    }

    let state = match policy {
        Policy::RoundRobin { quantum } => round_robin::simulate(workload, quantum),
        Policy::ShortestRemainingTimeFirst => srtf::simulate(workload),
    };
    let outcome = state.finish(policy);

    info!(
        %policy,
        processes = workload.len(),
        makespan = outcome.metrics.makespan,
        avg_waiting = outcome.metrics.average_waiting_time,
        avg_turnaround = outcome.metrics.average_turnaround_time,
        "simulation complete"
    );
    Ok(outcome)
}

/// Input container for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub workload: Workload,
    /// Scheduling policy.
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(workload: Workload, policy: Policy) -> Self {
        Self { workload, policy }
    }

    /// Replaces the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationOutcome, SchedulerError> {
        run(&self.workload, self.policy)
    }
}
