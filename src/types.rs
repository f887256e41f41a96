//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator: head movement directions, transition rules, step outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The default number of steps the bundled CLI executes before giving up on a
/// machine that has not halted. The library itself imposes no limit; callers
/// drive stepping and pick their own budget.
pub const DEFAULT_STEP_LIMIT: usize = 10_000;

/// Represents the possible directions a Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

/// The effect of a single transition: the symbol to write at the head, the
/// direction to move afterwards, and the state to enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The symbol written over the cell at the current head position.
    pub write: char,
    /// The direction the head moves after writing.
    pub direction: Direction,
    /// The state the machine enters after the move.
    pub next: char,
}

/// The transition table δ: a mapping from (current state, symbol read) to the
/// rule applied for that pair. Keying on the pair makes the machine
/// deterministic by construction; duplicate entries cannot be represented.
pub type Rules = HashMap<(char, char), Rule>;

/// Represents the outcome of a Turing Machine execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine performed a step and can continue execution.
    Continue,
    /// The machine is in a final state; nothing was (or will be) mutated.
    Halted,
}

/// Represents the errors that can occur while constructing or running a
/// Turing Machine. Each variant names the specific violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// The tape alphabet Γ contains no symbols.
    #[error("tape alphabet is empty")]
    EmptyTapeAlphabet,
    /// The same symbol appears more than once in the tape alphabet string.
    #[error("duplicate symbol '{0}' in tape alphabet")]
    DuplicateTapeSymbol(char),
    /// The blank symbol is not a member of the tape alphabet.
    #[error("blank symbol '{0}' missing from tape alphabet")]
    BlankNotInTapeAlphabet(char),
    /// The input alphabet Σ contains no symbols.
    #[error("input alphabet is empty")]
    EmptyInputAlphabet,
    /// The blank symbol may never be part of the input alphabet.
    #[error("blank symbol '{0}' found in input alphabet")]
    BlankInInputAlphabet(char),
    /// An input-alphabet symbol is not a member of the tape alphabet.
    #[error("input symbol '{0}' missing from tape alphabet")]
    InputSymbolNotInTapeAlphabet(char),
    /// The initial tape contents contain a symbol outside the tape alphabet.
    #[error("tape symbol '{0}' missing from tape alphabet")]
    TapeSymbolNotInTapeAlphabet(char),
    /// The initial head position does not fall within the initial contents.
    #[error("head position {head} is outside of tape of length {len}")]
    HeadOutOfBounds { head: usize, len: usize },
    /// The state set Q contains no states.
    #[error("state set is empty")]
    EmptyStates,
    /// The same state appears more than once in the state-set string.
    #[error("duplicate state '{0}' in state set")]
    DuplicateState(char),
    /// The initial state is not a member of the state set.
    #[error("initial state '{0}' not found in state set")]
    UnknownInitialState(char),
    /// The final-state set F contains no states.
    #[error("final state set is empty")]
    EmptyFinalStates,
    /// A final state is not a member of the state set.
    #[error("final state '{0}' not found in state set")]
    UnknownFinalState(char),
    /// A transition tried to write a symbol outside the input alphabet.
    #[error("write symbol '{0}' not in input alphabet")]
    UnknownWriteSymbol(char),
    /// The transition table has no entry for the current (state, symbol) pair.
    #[error("no transition defined for state '{state}' reading '{symbol}'")]
    UndefinedTransition { state: char, symbol: char },
    /// A transition names a next state that is not in the state set.
    #[error("transition for state '{state}' reading '{symbol}' names undeclared next state '{next}'")]
    UnknownNextState { state: char, symbol: char, next: char },
    /// A named machine is not present in the catalog.
    #[error("machine '{0}' not found in catalog")]
    UnknownMachine(String),
    /// A pre-flight analysis finding, carried as a rendered message.
    #[error("validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left = Direction::Left;
        let right = Direction::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Direction = serde_json::from_str(&left_json).unwrap();
        let right_deserialized: Direction = serde_json::from_str(&right_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(right, right_deserialized);
    }

    #[test]
    fn test_rule_serialization_round_trip() {
        let rule = Rule {
            write: '1',
            direction: Direction::Right,
            next: 'B',
        };

        let json = serde_json::to_string(&rule).unwrap();
        let deserialized: Rule = serde_json::from_str(&json).unwrap();

        assert_eq!(rule, deserialized);
    }

    #[test]
    fn test_rules_are_deterministic_by_construction() {
        let mut rules = Rules::new();
        rules.insert(
            ('A', '0'),
            Rule {
                write: '1',
                direction: Direction::Right,
                next: 'B',
            },
        );
        // A second insert for the same pair replaces rather than duplicates.
        rules.insert(
            ('A', '0'),
            Rule {
                write: '1',
                direction: Direction::Left,
                next: 'C',
            },
        );

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[&('A', '0')].next, 'C');
    }

    #[test]
    fn test_error_display() {
        let error = TuringMachineError::UndefinedTransition {
            state: 'A',
            symbol: '0',
        };
        let message = format!("{}", error);
        assert!(message.contains("no transition defined"));
        assert!(message.contains('A'));
        assert!(message.contains('0'));

        let error = TuringMachineError::HeadOutOfBounds { head: 7, len: 3 };
        let message = format!("{}", error);
        assert!(message.contains('7'));
        assert!(message.contains('3'));
    }
}
