//! Simulation domain models.
//!
//! Provides the input and output types of a scheduling run. Inputs
//! ([`ProcessSpec`], [`Workload`]) are immutable; the engine never mutates
//! them. The output trace ([`ExecutionTrace`]) is produced fresh per run.
//!
//! # Domain Mappings
//!
//! | proc-schedule | Textbook term | JSON shape |
//! |---------------|---------------|------------|
//! | ProcessSpec | Process / job | `{id, arrival_time, burst_time}` |
//! | Workload | Job set | array of process records |
//! | ExecutionTrace | Gantt chart | array of ids, `null` = idle |

mod process;
mod trace;
mod workload;

pub use process::{ProcessSpec, Ticks};
pub use trace::{ExecutionTrace, TraceSegment, TraceSlot, IDLE_LABEL};
pub use workload::Workload;
