//! The configuration record describing one complete machine: alphabets,
//! initial tape and head, state sets, and the transition table. A config is
//! plain immutable data; the catalog produces them and
//! [`crate::machine::TuringMachine::from_config`] consumes them. Nothing is
//! validated here; the tape and machine constructors reject bad values.

use crate::types::Rules;
use serde::{Deserialize, Serialize};

/// Everything needed to construct a tape and machine pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Human-readable name, used for catalog lookup.
    pub name: String,
    /// The tape alphabet Γ, one character per symbol.
    pub tape_alphabet: String,
    /// The blank symbol used to fill newly materialized cells.
    pub blank: char,
    /// The input alphabet Σ: the symbols transitions may write.
    pub input_alphabet: String,
    /// Initial tape contents; empty means a single blank cell.
    pub initial_tape: String,
    /// Initial head index into the initial contents.
    pub head: usize,
    /// The state set Q, one character per state.
    pub states: String,
    /// The initial state q0.
    pub initial_state: char,
    /// The final-state set F, one character per state.
    pub final_states: String,
    /// The transition table δ.
    #[serde(with = "rules_serde")]
    pub rules: Rules,
}

/// Serializes the `(state, symbol)`-keyed rules map as a sequence of
/// `((state, symbol), rule)` entries, since self-describing formats like
/// JSON only accept string map keys.
mod rules_serde {
    use crate::types::{Rule, Rules};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(rules: &Rules, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&(char, char), &Rule)> = rules.iter().collect();
        // Stable output regardless of hash order.
        entries.sort_by_key(|(key, _)| **key);
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rules, D::Error> {
        let entries: Vec<((char, char), Rule)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
