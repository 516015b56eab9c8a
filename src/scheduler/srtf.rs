//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! Every tick, from scratch:
//! 1. Admit processes whose arrival tick has been reached.
//! 2. Among admitted, unfinished processes, pick the one with the least
//!    remaining work. Candidates are scanned in declaration order and the
//!    first minimum wins, so ties go to the earliest-declared process.
//! 3. Run it for exactly one tick, or idle one tick if none is ready.
//!
//! Re-selecting every tick is what makes the policy preemptive: a
//! newcomer with less remaining work takes the CPU on the tick it arrives.
//!
//! # Complexity
//! O(n) per tick, O(n · T) overall where T is the makespan.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::debug;

use super::runtime::{ProcessState, RunState};
use crate::models::Workload;

/// Runs an SRTF simulation. Inputs must already be validated.
pub(crate) fn simulate(workload: &Workload) -> RunState<'_> {
    let mut run = RunState::new(workload);
    let mut previous: Option<usize> = None;

    while !run.is_finished() {
        admit_arrivals(&mut run);

        let Some(idx) = select_shortest(&run) else {
            run.idle_tick();
            continue;
        };

        if let Some(prev) = previous {
            if prev != idx && run.state(prev) == ProcessState::Ready {
                debug!(
                    preempted = %workload.processes()[prev].id,
                    by = %workload.processes()[idx].id,
                    clock = run.clock(),
                    "preemption"
                );
            }
        }

        run.execute(idx, 1);
        previous = Some(idx);
    }

    run
}

fn admit_arrivals(run: &mut RunState<'_>) {
    let clock = run.clock();
    let workload = run.workload();
    for (idx, spec) in workload.iter().enumerate() {
        if run.state(idx) == ProcessState::Unarrived && spec.has_arrived(clock) {
            run.admit(idx);
        }
    }
}

/// Ready process with minimum remaining time; first in declaration order on ties.
fn select_shortest(run: &RunState<'_>) -> Option<usize> {
    (0..run.len())
        .filter(|&idx| run.state(idx) == ProcessState::Ready)
        .min_by_key(|&idx| run.remaining(idx))
}
