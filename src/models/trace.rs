//! Execution trace model.
//!
//! The trace is the raw output of a simulation: one slot per virtual-clock
//! tick, labeled with the process that held the CPU during that tick or
//! marked idle. Its length equals total burst time plus idle ticks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ticks;

/// Label used for idle ticks in textual output.
pub const IDLE_LABEL: &str = "idle";

/// What the CPU did during a single tick.
///
/// Serializes untagged: a process id string, or `null` for idle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceSlot {
    /// The named process executed.
    Run(String),
    /// No process was ready.
    Idle,
}

impl TraceSlot {
    /// Display label (`"idle"` for idle ticks).
    pub fn label(&self) -> &str {
        match self {
            TraceSlot::Run(id) => id.as_str(),
            TraceSlot::Idle => IDLE_LABEL,
        }
    }

    /// Whether this slot ran the given process.
    pub fn is_process(&self, id: &str) -> bool {
        matches!(self, TraceSlot::Run(run) if run == id)
    }
}

/// A maximal run of identical consecutive slots: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSegment {
    /// What occupied the CPU.
    pub slot: TraceSlot,
    /// First tick (inclusive).
    pub start: Ticks,
    /// Last tick (exclusive).
    pub end: Ticks,
}

impl TraceSegment {
    /// Segment length in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Tick-by-tick record of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionTrace {
    slots: Vec<TraceSlot>,
}

impl ExecutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trace with room for `ticks` slots.
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            slots: Vec::with_capacity(ticks),
        }
    }

    /// Appends `ticks` consecutive slots for process `id`.
    pub fn push_run(&mut self, id: &str, ticks: Ticks) {
        for _ in 0..ticks {
            self.slots.push(TraceSlot::Run(id.to_string()));
        }
    }

    /// Appends one idle slot.
    pub fn push_idle(&mut self) {
        self.slots.push(TraceSlot::Idle);
    }

    /// Number of ticks recorded.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no ticks were recorded.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in tick order.
    pub fn slots(&self) -> &[TraceSlot] {
        &self.slots
    }

    /// Slot at tick `tick`.
    pub fn at(&self, tick: usize) -> Option<&TraceSlot> {
        self.slots.get(tick)
    }

    /// Per-tick labels, with [`IDLE_LABEL`] for idle ticks.
    pub fn labels(&self) -> Vec<&str> {
        self.slots.iter().map(TraceSlot::label).collect()
    }

    /// Number of ticks process `id` executed.
    pub fn ticks_for(&self, id: &str) -> Ticks {
        self.slots.iter().filter(|s| s.is_process(id)).count() as Ticks
    }

    /// Number of idle ticks.
    pub fn idle_ticks(&self) -> Ticks {
        self.slots
            .iter()
            .filter(|s| matches!(s, TraceSlot::Idle))
            .count() as Ticks
    }

    /// Number of ticks any process executed.
    pub fn busy_ticks(&self) -> Ticks {
        self.len() as Ticks - self.idle_ticks()
    }

    /// Collapses consecutive identical slots into Gantt segments.
    pub fn segments(&self) -> Vec<TraceSegment> {
        let mut segments: Vec<TraceSegment> = Vec::new();
        for (tick, slot) in self.slots.iter().enumerate() {
            let tick = tick as Ticks;
            match segments.last_mut() {
                Some(last) if last.slot == *slot => last.end = tick + 1,
                _ => segments.push(TraceSegment {
                    slot: slot.clone(),
                    start: tick,
                    end: tick + 1,
                }),
            }
        }
        segments
    }

    /// Number of times the CPU switched from one process to a different one.
    ///
    /// Idle gaps are not counted as switches themselves.
    pub fn context_switches(&self) -> usize {
        let mut last: Option<&str> = None;
        let mut switches = 0;
        for slot in &self.slots {
            if let TraceSlot::Run(id) = slot {
                if last.is_some_and(|prev| prev != id.as_str()) {
                    switches += 1;
                }
                last = Some(id.as_str());
            }
        }
        switches
    }
}

impl fmt::Display for ExecutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(" "))
    }
}
