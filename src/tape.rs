//! The tape: a linear, bidirectionally growable sequence of symbols with one
//! read/write head.
//!
//! The tape is conceptually infinite in both directions but only materialized
//! as far as the head has traveled. Growth happens one blank cell at a time
//! at whichever end the head runs off; cells are never removed. A `VecDeque`
//! backs the cells so growth at either end stays amortized O(1), which keeps
//! machines that oscillate near the left boundary cheap.

use crate::observer::{NopObserver, Observer};
use crate::types::{Direction, TuringMachineError};
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// A single-head tape over a validated alphabet.
///
/// Invariants, upheld by every operation:
/// - the cell sequence is never empty;
/// - the head index is always within `[0, len)`;
/// - every cell holds a symbol from the tape alphabet Γ.
pub struct Tape {
    alphabet: HashSet<char>,
    blank: char,
    input: HashSet<char>,
    cells: VecDeque<char>,
    head: usize,
    pub(crate) observer: Box<dyn Observer>,
}

impl Tape {
    /// Creates a tape with the default (no-op) observer.
    ///
    /// `tape_alphabet` is Γ, `input_alphabet` is Σ (the symbols transitions
    /// may write; must exclude the blank). Empty `contents` default to a
    /// single blank cell. See [`Tape::with_observer`] for the validation
    /// contract.
    pub fn new(
        tape_alphabet: &str,
        blank: char,
        input_alphabet: &str,
        contents: &str,
        head: usize,
    ) -> Result<Self, TuringMachineError> {
        Self::with_observer(
            tape_alphabet,
            blank,
            input_alphabet,
            contents,
            head,
            Box::new(NopObserver),
        )
    }

    /// Creates a tape that reports every event to `observer`.
    ///
    /// Fails with the error naming the first violated invariant:
    /// non-empty, duplicate-free Γ; blank ∈ Γ; Σ non-empty, blank-free and
    /// ⊆ Γ; contents drawn from Γ; head within the initial contents. There
    /// is no partial construction.
    pub fn with_observer(
        tape_alphabet: &str,
        blank: char,
        input_alphabet: &str,
        contents: &str,
        head: usize,
        observer: Box<dyn Observer>,
    ) -> Result<Self, TuringMachineError> {
        let mut alphabet = HashSet::new();
        for symbol in tape_alphabet.chars() {
            if !alphabet.insert(symbol) {
                return Err(TuringMachineError::DuplicateTapeSymbol(symbol));
            }
        }
        if alphabet.is_empty() {
            return Err(TuringMachineError::EmptyTapeAlphabet);
        }

        if !alphabet.contains(&blank) {
            return Err(TuringMachineError::BlankNotInTapeAlphabet(blank));
        }

        let input: HashSet<char> = input_alphabet.chars().collect();
        if input.is_empty() {
            return Err(TuringMachineError::EmptyInputAlphabet);
        }
        if input.contains(&blank) {
            return Err(TuringMachineError::BlankInInputAlphabet(blank));
        }
        if let Some(&symbol) = input.iter().find(|s| !alphabet.contains(*s)) {
            return Err(TuringMachineError::InputSymbolNotInTapeAlphabet(symbol));
        }

        let cells: VecDeque<char> = if contents.is_empty() {
            VecDeque::from([blank])
        } else {
            contents.chars().collect()
        };
        if let Some(&symbol) = cells.iter().find(|s| !alphabet.contains(*s)) {
            return Err(TuringMachineError::TapeSymbolNotInTapeAlphabet(symbol));
        }

        if head >= cells.len() {
            return Err(TuringMachineError::HeadOutOfBounds {
                head,
                len: cells.len(),
            });
        }

        let mut tape = Self {
            alphabet,
            blank,
            input,
            cells,
            head,
            observer,
        };
        let contents = tape.contents();
        tape.observer.tape_initialized(&contents, tape.head);

        Ok(tape)
    }

    /// Returns the symbol at the current head position.
    ///
    /// Cannot fail: the head is always in bounds by invariant.
    pub fn read(&self) -> char {
        self.cells[self.head]
    }

    /// Overwrites the cell under the head with `symbol`, then moves the head
    /// one cell in `direction`.
    ///
    /// Fails with [`TuringMachineError::UnknownWriteSymbol`] if `symbol` is
    /// outside the input alphabet, leaving the tape untouched. On success the
    /// head move may grow the tape by one blank cell:
    ///
    /// - `Left` at index 0 prepends a blank and keeps the head at index 0
    ///   (the existing cells conceptually shift one position right);
    /// - `Right` past the last index appends a blank, which the head then
    ///   rests on.
    pub fn write_and_move(
        &mut self,
        symbol: char,
        direction: Direction,
    ) -> Result<(), TuringMachineError> {
        if !self.input.contains(&symbol) {
            return Err(TuringMachineError::UnknownWriteSymbol(symbol));
        }

        self.cells[self.head] = symbol;
        self.observer.cell_written(self.head, symbol);

        match direction {
            Direction::Left => {
                if self.head > 0 {
                    self.head -= 1;
                } else {
                    self.cells.push_front(self.blank);
                    self.observer.tape_extended(Direction::Left);
                }
            }
            Direction::Right => {
                self.head += 1;
                if self.head >= self.cells.len() {
                    self.cells.push_back(self.blank);
                    self.observer.tape_extended(Direction::Right);
                }
            }
        }
        self.observer.head_moved(self.head);

        Ok(())
    }

    /// Returns the current head index.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the number of materialized cells. Always at least 1.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a tape holds at least one cell. Present for symmetry
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the blank symbol used to fill newly materialized cells.
    pub fn blank(&self) -> char {
        self.blank
    }

    /// Returns the materialized cells, left to right, as a string.
    pub fn contents(&self) -> String {
        self.cells.iter().collect()
    }

    /// Counts the occurrences of `symbol` among the materialized cells.
    pub fn count(&self, symbol: char) -> usize {
        self.cells.iter().filter(|&&s| s == symbol).count()
    }

    /// True iff `symbol` belongs to the tape alphabet Γ.
    pub fn in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }
}

impl fmt::Debug for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tape")
            .field("contents", &self.contents())
            .field("head", &self.head)
            .field("blank", &self.blank)
            .finish()
    }
}

/// Renders the tape as two lines: a `v` marker above the head cell, then the
/// materialized contents. Display only; nothing in the engine depends on it.
impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}v", " ".repeat(self.head))?;
        for &symbol in &self.cells {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
