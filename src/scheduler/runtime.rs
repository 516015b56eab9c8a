//! Per-run process state and the shared simulation skeleton.
//!
//! A [`RunState`] is an arena: one [`ProcessRuntimeState`] per process,
//! indexed by declaration position, built fresh from the immutable
//! [`Workload`] at the start of a run and dropped when the run ends.

use tracing::{debug, trace};

use super::metrics::MetricsReport;
use super::{Policy, SimulationOutcome};
use crate::models::{ExecutionTrace, ProcessSpec, Ticks, Workload};

/// Lifecycle of a process within one run.
///
/// `Unarrived → Ready → Running → (Ready | Completed)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessState {
    /// Arrival tick not yet reached (or not yet admitted).
    Unarrived,
    /// Admitted and waiting for the CPU.
    Ready,
    /// Holding the CPU for the current dispatch.
    Running,
    /// All work done; never transitions again.
    Completed,
}

/// Mutable bookkeeping for one process during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProcessRuntimeState {
    remaining_time: Ticks,
    state: ProcessState,
    first_dispatch: Option<Ticks>,
    completion_time: Option<Ticks>,
}

impl ProcessRuntimeState {
    fn new(spec: &ProcessSpec) -> Self {
        Self {
            remaining_time: spec.burst_time,
            state: ProcessState::Unarrived,
            first_dispatch: None,
            completion_time: None,
        }
    }

    /// Ticks of work still required.
    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Tick of the first dispatch, if dispatched yet.
    pub fn first_dispatch(&self) -> Option<Ticks> {
        self.first_dispatch
    }

    /// Tick at which `remaining_time` reached zero.
    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }
}

/// State of a single simulation run: virtual clock, process arena, trace.
#[derive(Debug)]
pub(crate) struct RunState<'w> {
    workload: &'w Workload,
    procs: Vec<ProcessRuntimeState>,
    clock: Ticks,
    trace: ExecutionTrace,
    completed: usize,
}

impl<'w> RunState<'w> {
    pub(crate) fn new(workload: &'w Workload) -> Self {
        let capacity = workload
            .iter()
            .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))
            .and_then(|ticks| usize::try_from(ticks).ok())
            .unwrap_or(0);
        Self {
            workload,
            procs: workload.iter().map(ProcessRuntimeState::new).collect(),
            clock: 0,
            trace: ExecutionTrace::with_capacity(capacity),
            completed: 0,
        }
    }

    pub(crate) fn workload(&self) -> &'w Workload {
        self.workload
    }

    pub(crate) fn clock(&self) -> Ticks {
        self.clock
    }

    pub(crate) fn len(&self) -> usize {
        self.procs.len()
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.completed == self.procs.len()
    }

    pub(crate) fn state(&self, idx: usize) -> ProcessState {
        self.procs[idx].state
    }

    pub(crate) fn remaining(&self, idx: usize) -> Ticks {
        self.procs[idx].remaining_time
    }

    /// `Unarrived → Ready`.
    pub(crate) fn admit(&mut self, idx: usize) {
        let proc = &mut self.procs[idx];
        debug_assert_eq!(proc.state, ProcessState::Unarrived);
        debug_assert!(self.workload.processes()[idx].arrival_time <= self.clock);
        proc.state = ProcessState::Ready;
    }

    /// Records one idle tick.
    pub(crate) fn idle_tick(&mut self) {
        trace!(clock = self.clock, "cpu idle");
        self.trace.push_idle();
        self.clock += 1;
    }

    /// Dispatches process `idx` for `slice` ticks.
    ///
    /// Returns `true` if the process completed. A process that did not
    /// complete is left `Ready`; re-queueing is the caller's concern.
    pub(crate) fn execute(&mut self, idx: usize, slice: Ticks) -> bool {
        let workload = self.workload;
        let spec = &workload.processes()[idx];
        let proc = &mut self.procs[idx];
        debug_assert_eq!(proc.state, ProcessState::Ready);
        debug_assert!(slice > 0 && slice <= proc.remaining_time);

        proc.state = ProcessState::Running;
        proc.first_dispatch.get_or_insert(self.clock);
        debug!(
            process = %spec.id,
            clock = self.clock,
            slice,
            remaining = proc.remaining_time,
            "dispatch"
        );

        self.trace.push_run(&spec.id, slice);
        self.clock += slice;
        proc.remaining_time -= slice;

        if proc.remaining_time == 0 {
            proc.state = ProcessState::Completed;
            proc.completion_time = Some(self.clock);
            self.completed += 1;
            debug!(process = %spec.id, completion = self.clock, "completed");
            true
        } else {
            proc.state = ProcessState::Ready;
            false
        }
    }

    /// Consumes the run and derives the metrics report.
    pub(crate) fn finish(self, policy: Policy) -> SimulationOutcome {
        let metrics = MetricsReport::calculate(self.workload, &self.procs, &self.trace);
        SimulationOutcome {
            policy,
            trace: self.trace,
            metrics,
        }
    }
}
