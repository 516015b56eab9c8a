//! Result presentation.
//!
//! Formats a [`SimulationOutcome`] for humans ([`TextReport`]) or machines
//! ([`render_json`]). Neither affects the simulation itself.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Ticks, TraceSlot};
use crate::scheduler::{Policy, SimulationOutcome};

/// Plain-text report: execution sequence, Gantt segments, per-process table, averages.
pub struct TextReport<'a>(pub &'a SimulationOutcome);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let m = &outcome.metrics;

        writeln!(f, "Policy: {}", outcome.policy)?;
        writeln!(f, "Execution: {}", outcome.trace)?;
        writeln!(f)?;

        writeln!(f, "Timeline:")?;
        for seg in outcome.trace.segments() {
            let label = match &seg.slot {
                TraceSlot::Run(id) => id.as_str(),
                TraceSlot::Idle => "-",
            };
            writeln!(f, "  [{:>4}, {:>4})  {}", seg.start, seg.end, label)?;
        }
        writeln!(f)?;

        let width = m.processes.keys().map(String::len).max().unwrap_or(2).max(2);
        writeln!(
            f,
            "{:<width$}  {:>7}  {:>5}  {:>10}  {:>10}  {:>7}  {:>8}",
            "id", "arrival", "burst", "completion", "turnaround", "waiting", "response"
        )?;
        for (id, p) in &m.processes {
            writeln!(
                f,
                "{:<width$}  {:>7}  {:>5}  {:>10}  {:>10}  {:>7}  {:>8}",
                id,
                p.arrival_time,
                p.burst_time,
                p.completion_time,
                p.turnaround_time,
                p.waiting_time,
                p.response_time
            )?;
        }
        writeln!(f)?;

        writeln!(f, "average_waiting_time: {:.2}", m.average_waiting_time)?;
        writeln!(f, "average_turnaround_time: {:.2}", m.average_turnaround_time)?;
        writeln!(f, "average_response_time: {:.2}", m.average_response_time)?;
        writeln!(f, "makespan: {}", m.makespan)?;
        writeln!(f, "idle_ticks: {}", m.idle_ticks)?;
        writeln!(f, "context_switches: {}", m.context_switches)?;
        write!(f, "cpu_utilization: {:.1}%", m.cpu_utilization * 100.0)
    }
}

/// Renders the text report.
pub fn render_text(outcome: &SimulationOutcome) -> String {
    TextReport(outcome).to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    policy: &'a Policy,
    execution_sequence: Vec<&'a str>,
    completion_times: BTreeMap<&'a str, Ticks>,
    waiting_times: BTreeMap<&'a str, Ticks>,
    turnaround_times: BTreeMap<&'a str, Ticks>,
    response_times: BTreeMap<&'a str, Ticks>,
    average_waiting_time: f64,
    average_turnaround_time: f64,
    average_response_time: f64,
    makespan: Ticks,
    idle_ticks: Ticks,
    context_switches: usize,
    cpu_utilization: f64,
}

/// Renders a pretty-printed JSON report.
///
/// Per-process maps are keyed by id; the execution sequence uses `"idle"`
/// for idle ticks.
pub fn render_json(outcome: &SimulationOutcome) -> Result<String, serde_json::Error> {
    let m = &outcome.metrics;
    let report = JsonReport {
        policy: &outcome.policy,
        execution_sequence: outcome.trace.labels(),
        completion_times: m.completion_times(),
        waiting_times: m.waiting_times(),
        turnaround_times: m.turnaround_times(),
        response_times: m.response_times(),
        average_waiting_time: m.average_waiting_time,
        average_turnaround_time: m.average_turnaround_time,
        average_response_time: m.average_response_time,
        makespan: m.makespan,
        idle_ticks: m.idle_ticks,
        context_switches: m.context_switches,
        cpu_utilization: m.cpu_utilization,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessSpec, Workload};
    use crate::scheduler::run;

    fn outcome() -> SimulationOutcome {
        let w = Workload::from_processes(vec![
            ProcessSpec::new("P1", 0, 5),
            ProcessSpec::new("P2", 1, 3),
            ProcessSpec::new("P3", 2, 1),
        ]);
        run(&w, Policy::round_robin(2)).unwrap()
    }

    #[test]
    fn test_text_report_sections() {
        let text = render_text(&outcome());
        assert!(text.starts_with("Policy: Round Robin (quantum=2)\n"));
        assert!(text.contains("Execution: P1 P1 P2 P2 P3 P1 P1 P2 P1\n"));
        assert!(text.contains("[   0,    2)  P1"));
        assert!(text.contains("average_waiting_time: 3.33"));
        assert!(text.contains("average_turnaround_time: 6.33"));
        assert!(text.ends_with("cpu_utilization: 100.0%"));
    }

    #[test]
    fn test_text_report_idle_segment() {
        let w = Workload::from_processes(vec![ProcessSpec::new("A", 2, 1)]);
        let text = render_text(&run(&w, Policy::srtf()).unwrap());
        assert!(text.contains("Execution: idle idle A"));
        assert!(text.contains("[   0,    2)  -"));
    }

    #[test]
    fn test_json_report_fields() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&outcome()).unwrap()).unwrap();
        assert_eq!(json["policy"]["algorithm"], "round_robin");
        assert_eq!(json["execution_sequence"][4], "P3");
        assert_eq!(json["completion_times"]["P3"], 5);
        assert_eq!(json["waiting_times"]["P1"], 4);
        assert_eq!(json["turnaround_times"]["P2"], 7);
        assert_eq!(json["makespan"], 9);
        assert!(json["average_waiting_time"].is_f64());
    }
}
