//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Keep not-yet-admitted processes in declaration order.
//! 2. Admit every pending process whose arrival tick has been reached onto
//!    the tail of the FIFO ready queue, in declaration order, in one pass.
//! 3. Pop the head and run it for `min(quantum, remaining)` ticks as one
//!    dispatch.
//! 4. Admit processes that arrived during that slice, then re-queue the
//!    preempted process behind them.
//! 5. With an empty ready queue, idle one tick and admit again.
//!
//! Step 4's ordering means a newcomer never waits behind the process that
//! was on the CPU when it arrived. Several processes admitted by one pass
//! enter by declaration position, not by arrival tick.
//!
//! # Complexity
//! O(1) per dispatch; O(p) per admission pass over `p` pending processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use super::runtime::RunState;
use crate::models::{Ticks, Workload};

/// Runs a Round Robin simulation. Inputs must already be validated.
pub(crate) fn simulate(workload: &Workload, quantum: Ticks) -> RunState<'_> {
    let mut run = RunState::new(workload);
    let mut pending: Vec<usize> = (0..workload.len()).collect();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(workload.len());

    admit_arrivals(&mut run, &mut pending, &mut ready);

    while !run.is_finished() {
        let Some(idx) = ready.pop_front() else {
            run.idle_tick();
            admit_arrivals(&mut run, &mut pending, &mut ready);
            continue;
        };

        let slice = quantum.min(run.remaining(idx));
        let finished = run.execute(idx, slice);

        admit_arrivals(&mut run, &mut pending, &mut ready);
        if !finished {
            ready.push_back(idx);
        }
    }

    run
}

/// Moves every pending process with `arrival_time <= clock` to the ready
/// tail, scanning `pending` in declaration order. The rest keep their order.
fn admit_arrivals(run: &mut RunState<'_>, pending: &mut Vec<usize>, ready: &mut VecDeque<usize>) {
    let clock = run.clock();
    let workload = run.workload();
    pending.retain(|&idx| {
        if !workload.processes()[idx].has_arrived(clock) {
            return true;
        }
        run.admit(idx);
        ready.push_back(idx);
        false
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;
    use crate::scheduler::Policy;

    fn workload(specs: &[(&str, Ticks, Ticks)]) -> Workload {
        Workload::from_processes(
            specs
                .iter()
                .map(|&(id, arrival, burst)| ProcessSpec::new(id, arrival, burst))
                .collect(),
        )
    }

    #[test]
    fn test_admission_scans_in_declaration_order() {
        let w = workload(&[("A", 3, 1), ("B", 0, 1), ("C", 3, 1), ("D", 1, 1)]);
        let mut run = RunState::new(&w);
        let mut pending: Vec<usize> = (0..w.len()).collect();
        let mut ready = VecDeque::new();

        admit_arrivals(&mut run, &mut pending, &mut ready);
        assert_eq!(ready, VecDeque::from([1]));
        assert_eq!(pending, vec![0, 2, 3]);

        ready.clear();
        run.execute(1, 1);
        run.idle_tick();
        run.idle_tick();
        admit_arrivals(&mut run, &mut pending, &mut ready);
        // clock 3: D arrived first but is declared last
        assert_eq!(ready, VecDeque::from([0, 2, 3]));
        assert!(pending.is_empty());
    }

    #[test]
    fn test_arrivals_within_one_slice_keep_declaration_order() {
        // B (t=2) and C (t=1) both arrive while A holds the CPU for [0,3).
        let w = workload(&[("A", 0, 3), ("B", 2, 1), ("C", 1, 1)]);
        let outcome = simulate(&w, 3).finish(Policy::round_robin(3));
        assert_eq!(outcome.trace.to_string(), "A A A B C");
        let completions = outcome.metrics.completion_times();
        assert_eq!(completions["A"], 3);
        assert_eq!(completions["B"], 4);
        assert_eq!(completions["C"], 5);
    }

    #[test]
    fn test_newcomers_queue_ahead_of_preempted() {
        // A runs [0,2); B arrives at 1 and must run before A resumes.
        let w = workload(&[("A", 0, 4), ("B", 1, 2)]);
        let run = simulate(&w, 2);
        let outcome = run.finish(Policy::round_robin(2));
        assert_eq!(outcome.trace.labels(), vec!["A", "A", "B", "B", "A", "A"]);
    }

    #[test]
    fn test_arrival_exactly_at_slice_end_queues_ahead() {
        // B arrives at tick 2, the same tick A's slice ends.
        let w = workload(&[("A", 0, 3), ("B", 2, 1)]);
        let outcome = simulate(&w, 2).finish(Policy::round_robin(2));
        assert_eq!(outcome.trace.labels(), vec!["A", "A", "B", "A"]);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let w = workload(&[("A", 3, 2)]);
        let outcome = simulate(&w, 4).finish(Policy::round_robin(4));
        assert_eq!(outcome.trace.labels(), vec!["idle", "idle", "idle", "A", "A"]);
        assert_eq!(outcome.metrics.get("A").unwrap().completion_time, 5);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let w = workload(&[("A", 0, 1), ("B", 3, 1)]);
        let outcome = simulate(&w, 2).finish(Policy::round_robin(2));
        assert_eq!(outcome.trace.labels(), vec!["A", "idle", "idle", "B"]);
    }

    #[test]
    fn test_quantum_larger_than_bursts_is_fcfs() {
        let w = workload(&[("A", 0, 3), ("B", 0, 2), ("C", 1, 1)]);
        let outcome = simulate(&w, 10).finish(Policy::round_robin(10));
        assert_eq!(outcome.trace.to_string(), "A A A B B C");
    }

    #[test]
    fn test_lone_process_is_redispatched() {
        let w = workload(&[("A", 0, 5)]);
        let outcome = simulate(&w, 2).finish(Policy::round_robin(2));
        assert_eq!(outcome.trace.ticks_for("A"), 5);
        assert_eq!(outcome.metrics.get("A").unwrap().waiting_time, 0);
    }
}
