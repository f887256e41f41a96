//! An injectable side-channel for watching a simulation as it runs.
//!
//! The tape owns one observer per simulation and the machine routes its step
//! events through it, so a single sink sees the whole lifecycle of one
//! machine without any process-wide shared state. All methods have empty
//! default bodies; implementors override only what they care about. The core
//! never depends on an observer's presence or on any return value.

use crate::types::{Direction, Rule};

/// Receives notifications for every observable event of one Tape/Machine
/// pair: tape initialization, cell writes, head moves, tape extensions, and
/// the phases of each execution step.
pub trait Observer {
    /// The tape has been constructed with the given contents and head index.
    fn tape_initialized(&mut self, contents: &str, head: usize) {
        let _ = (contents, head);
    }

    /// The cell at `index` has been overwritten with `symbol`.
    fn cell_written(&mut self, index: usize, symbol: char) {
        let _ = (index, symbol);
    }

    /// The head now rests at `head`.
    fn head_moved(&mut self, head: usize) {
        let _ = head;
    }

    /// A blank cell has been materialized at the given end of the tape.
    fn tape_extended(&mut self, end: Direction) {
        let _ = end;
    }

    /// A step has begun in `state`.
    fn step_started(&mut self, state: char) {
        let _ = state;
    }

    /// The symbol under the head at the start of the current step.
    fn symbol_read(&mut self, symbol: char) {
        let _ = symbol;
    }

    /// The rule selected for (`state`, `read`) is about to be applied.
    fn transition_applied(&mut self, state: char, read: char, rule: &Rule) {
        let _ = (state, read, rule);
    }

    /// A step has finished; the machine is now in `state`.
    fn step_completed(&mut self, state: char, is_final: bool) {
        let _ = (state, is_final);
    }
}

/// The default observer: ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopObserver;

impl Observer for NopObserver {}
