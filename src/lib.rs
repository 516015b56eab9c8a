//! Discrete-time CPU scheduling simulator.
//!
//! Runs a closed, fully-known set of processes on a virtual clock under a
//! classical scheduling policy and reports per-process and aggregate
//! metrics. This is an analytical tool, not a live OS scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `Workload`, `ExecutionTrace`
//! - **`validation`**: Input integrity checks (empty workload, duplicate IDs,
//!   burst/arrival ranges, quantum)
//! - **`scheduler`**: Round Robin and SRTF engines, `MetricsReport`
//! - **`loader`**: JSON workload files
//! - **`generator`**: Seeded synthetic workloads
//! - **`report`**: Text and JSON presentation
//!
//! # Example
//!
//! ```
//! use proc_schedule::models::{ProcessSpec, Workload};
//! use proc_schedule::scheduler::{run, Policy};
//!
//! let workload = Workload::new()
//!     .with_process(ProcessSpec::new("P1", 0, 5))
//!     .with_process(ProcessSpec::new("P2", 1, 3))
//!     .with_process(ProcessSpec::new("P3", 2, 1));
//!
//! let outcome = run(&workload, Policy::srtf()).unwrap();
//! assert_eq!(outcome.trace.to_string(), "P1 P2 P3 P2 P2 P1 P1 P1 P1");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod generator;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{LoadError, SchedulerError};
