//! This module defines the `TuringMachine` struct: a finite-state controller
//! over one [`Tape`], driven step by step from a transition table until a
//! final state is reached.

use crate::config::MachineConfig;
use crate::observer::Observer;
use crate::tape::Tape;
use crate::types::{Rules, Step, TuringMachineError};
use std::collections::HashSet;

/// A single-tape deterministic Turing Machine.
///
/// The machine owns its tape; the only field that mutates outside the tape is
/// the current state. Stepping is strictly sequential and caller-driven: a
/// machine that never reaches a final state steps forever unless the caller
/// imposes a budget (see [`TuringMachine::run`]).
pub struct TuringMachine {
    states: HashSet<char>,
    finals: HashSet<char>,
    rules: Rules,
    state: char,
    tape: Tape,
    step_count: usize,
}

impl TuringMachine {
    /// Creates a machine over `tape` with the given state set Q, transition
    /// table, initial state q0 and final-state set F.
    ///
    /// Validates that Q is non-empty with unique states, q0 ∈ Q, and F is
    /// non-empty with every member in Q. The transition table is not checked
    /// here; each entry is validated the first time it is consulted during
    /// stepping ([`crate::analyzer::analyze`] offers the eager alternative).
    pub fn new(
        tape: Tape,
        states: &str,
        rules: Rules,
        initial_state: char,
        final_states: &str,
    ) -> Result<Self, TuringMachineError> {
        let mut state_set = HashSet::new();
        for state in states.chars() {
            if !state_set.insert(state) {
                return Err(TuringMachineError::DuplicateState(state));
            }
        }
        if state_set.is_empty() {
            return Err(TuringMachineError::EmptyStates);
        }

        if !state_set.contains(&initial_state) {
            return Err(TuringMachineError::UnknownInitialState(initial_state));
        }

        if final_states.is_empty() {
            return Err(TuringMachineError::EmptyFinalStates);
        }
        let finals: HashSet<char> = final_states.chars().collect();
        if let Some(&state) = finals.iter().find(|s| !state_set.contains(*s)) {
            return Err(TuringMachineError::UnknownFinalState(state));
        }

        Ok(Self {
            states: state_set,
            finals,
            rules,
            state: initial_state,
            tape,
            step_count: 0,
        })
    }

    /// Builds the tape and machine described by `config`, with the default
    /// observer.
    pub fn from_config(config: &MachineConfig) -> Result<Self, TuringMachineError> {
        let tape = Tape::new(
            &config.tape_alphabet,
            config.blank,
            &config.input_alphabet,
            &config.initial_tape,
            config.head,
        )?;
        Self::new(
            tape,
            &config.states,
            config.rules.clone(),
            config.initial_state,
            &config.final_states,
        )
    }

    /// Builds the tape and machine described by `config`, reporting every
    /// tape and step event to `observer`.
    pub fn from_config_with_observer(
        config: &MachineConfig,
        observer: Box<dyn Observer>,
    ) -> Result<Self, TuringMachineError> {
        let tape = Tape::with_observer(
            &config.tape_alphabet,
            config.blank,
            &config.input_alphabet,
            &config.initial_tape,
            config.head,
            observer,
        )?;
        Self::new(
            tape,
            &config.states,
            config.rules.clone(),
            config.initial_state,
            &config.final_states,
        )
    }

    /// True iff the current state is a final state.
    pub fn is_final(&self) -> bool {
        self.finals.contains(&self.state)
    }

    /// Executes a single step of the machine's computation.
    ///
    /// Once the machine is in a final state this is a no-op returning
    /// [`Step::Halted`]; repeated calls after halting never error and never
    /// mutate anything. Otherwise the step reads the symbol under the head,
    /// looks up the (state, symbol) rule, checks the rule's next state is
    /// declared, applies the write-and-move to the tape and finally enters
    /// the next state.
    ///
    /// Fails with [`TuringMachineError::UndefinedTransition`] when the table
    /// has no entry for the pair, [`TuringMachineError::UnknownNextState`]
    /// when the entry names an undeclared state, or the tape's own write
    /// validation error. The next-state check runs before the tape write and
    /// the state update runs after it, so a failed step leaves both the tape
    /// and the current state untouched.
    pub fn step(&mut self) -> Result<Step, TuringMachineError> {
        if self.is_final() {
            return Ok(Step::Halted);
        }

        self.tape.observer.step_started(self.state);

        let symbol = self.tape.read();
        self.tape.observer.symbol_read(symbol);

        let rule = *self.rules.get(&(self.state, symbol)).ok_or(
            TuringMachineError::UndefinedTransition {
                state: self.state,
                symbol,
            },
        )?;

        if !self.states.contains(&rule.next) {
            return Err(TuringMachineError::UnknownNextState {
                state: self.state,
                symbol,
                next: rule.next,
            });
        }

        self.tape.observer.transition_applied(self.state, symbol, &rule);
        self.tape.write_and_move(rule.write, rule.direction)?;
        self.state = rule.next;
        self.step_count += 1;

        let is_final = self.is_final();
        self.tape.observer.step_completed(self.state, is_final);

        Ok(Step::Continue)
    }

    /// Steps the machine until it halts or `limit` steps have executed.
    ///
    /// Returns [`Step::Halted`] if a final state was reached within the
    /// budget and [`Step::Continue`] if the budget ran out first. Errors
    /// propagate from [`TuringMachine::step`] unchanged.
    pub fn run(&mut self, limit: usize) -> Result<Step, TuringMachineError> {
        for _ in 0..limit {
            if let Step::Halted = self.step()? {
                return Ok(Step::Halted);
            }
        }

        Ok(if self.is_final() {
            Step::Halted
        } else {
            Step::Continue
        })
    }

    /// Returns the current state of the machine.
    pub fn state(&self) -> char {
        self.state
    }

    /// Returns the total number of steps executed so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the machine's tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}
