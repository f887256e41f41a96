//! This crate provides the core logic for a single-tape deterministic Turing
//! Machine simulator. It includes the tape abstraction and stepping engine,
//! an injectable observer side-channel for tracing executions, pre-flight
//! analysis of transition tables, and a catalog of classic example machines.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod machine;
pub mod observer;
pub mod tape;
pub mod types;

/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the `Catalog` registry from the catalog module.
pub use catalog::Catalog;
/// Re-exports the `MachineConfig` record from the config module.
pub use config::MachineConfig;
/// Re-exports the `TuringMachine` struct from the machine module.
pub use machine::TuringMachine;
/// Re-exports the observer interface and its no-op default.
pub use observer::{NopObserver, Observer};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports various types related to machine definition and execution.
pub use types::{Direction, Rule, Rules, Step, TuringMachineError, DEFAULT_STEP_LIMIT};
