//! Eager, opt-in validation of a whole machine configuration before any
//! stepping happens.
//!
//! The engine itself checks transition entries lazily, the first time a pair
//! is consulted. Running [`analyze`] first gives fail-fast behavior instead:
//! every rule's states and symbols are checked against the declared sets, and
//! unreachable declared states are reported. `TuringMachine` never calls this
//! module; callers choose when (and whether) it runs.

use crate::config::MachineConfig;
use crate::types::TuringMachineError;
use std::collections::HashSet;

/// A finding from pre-flight analysis of a machine configuration.
///
/// Offending characters are sorted so findings are deterministic regardless
/// of table iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Rule keys name states that are not in the declared state set.
    UndeclaredRuleStates(Vec<char>),
    /// Rules name next states that are not in the declared state set.
    UndeclaredNextStates(Vec<char>),
    /// Rule keys read symbols outside the tape alphabet.
    ReadSymbolsOutsideTapeAlphabet(Vec<char>),
    /// Rules write symbols outside the input alphabet; such entries fail at
    /// step time when consulted.
    WriteSymbolsOutsideInputAlphabet(Vec<char>),
    /// Declared states that no chain of rules can reach from the initial
    /// state.
    UnreachableStates(Vec<char>),
}

impl From<AnalysisError> for TuringMachineError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::UndeclaredRuleStates(states) => TuringMachineError::Validation(
                format!("rules keyed on undeclared states: {:?}", states),
            ),
            AnalysisError::UndeclaredNextStates(states) => TuringMachineError::Validation(
                format!("rules name undeclared next states: {:?}", states),
            ),
            AnalysisError::ReadSymbolsOutsideTapeAlphabet(symbols) => {
                TuringMachineError::Validation(format!(
                    "rules read symbols outside the tape alphabet: {:?}",
                    symbols
                ))
            }
            AnalysisError::WriteSymbolsOutsideInputAlphabet(symbols) => {
                TuringMachineError::Validation(format!(
                    "rules write symbols outside the input alphabet: {:?}",
                    symbols
                ))
            }
            AnalysisError::UnreachableStates(states) => TuringMachineError::Validation(format!(
                "unreachable states detected: {:?}",
                states
            )),
        }
    }
}

/// Analyzes a machine configuration for rule-table problems the lazy engine
/// would only surface mid-run.
///
/// Returns the first finding, converted to a
/// [`TuringMachineError::Validation`]. A clean result means every rule is
/// consultable without a step-time validation error and every declared state
/// is reachable.
pub fn analyze(config: &MachineConfig) -> Result<(), TuringMachineError> {
    let checks = [
        check_rule_states,
        check_rule_symbols,
        check_unreachable_states,
    ];

    for check in checks {
        check(config)?;
    }

    Ok(())
}

fn sorted(set: HashSet<char>) -> Vec<char> {
    let mut list: Vec<char> = set.into_iter().collect();
    list.sort_unstable();
    list
}

/// Checks that every rule key's state and every rule's next state belong to
/// the declared state set.
fn check_rule_states(config: &MachineConfig) -> Result<(), AnalysisError> {
    let declared: HashSet<char> = config.states.chars().collect();

    let undeclared_keys: HashSet<char> = config
        .rules
        .keys()
        .map(|&(state, _)| state)
        .filter(|state| !declared.contains(state))
        .collect();
    if !undeclared_keys.is_empty() {
        return Err(AnalysisError::UndeclaredRuleStates(sorted(undeclared_keys)));
    }

    let undeclared_next: HashSet<char> = config
        .rules
        .values()
        .map(|rule| rule.next)
        .filter(|state| !declared.contains(state))
        .collect();
    if !undeclared_next.is_empty() {
        return Err(AnalysisError::UndeclaredNextStates(sorted(undeclared_next)));
    }

    Ok(())
}

/// Checks that read symbols fall within the tape alphabet and write symbols
/// within the input alphabet.
fn check_rule_symbols(config: &MachineConfig) -> Result<(), AnalysisError> {
    let tape_alphabet: HashSet<char> = config.tape_alphabet.chars().collect();
    let input_alphabet: HashSet<char> = config.input_alphabet.chars().collect();

    let unknown_reads: HashSet<char> = config
        .rules
        .keys()
        .map(|&(_, read)| read)
        .filter(|symbol| !tape_alphabet.contains(symbol))
        .collect();
    if !unknown_reads.is_empty() {
        return Err(AnalysisError::ReadSymbolsOutsideTapeAlphabet(sorted(
            unknown_reads,
        )));
    }

    let unknown_writes: HashSet<char> = config
        .rules
        .values()
        .map(|rule| rule.write)
        .filter(|symbol| !input_alphabet.contains(symbol))
        .collect();
    if !unknown_writes.is_empty() {
        return Err(AnalysisError::WriteSymbolsOutsideInputAlphabet(sorted(
            unknown_writes,
        )));
    }

    Ok(())
}

/// Walks the rule graph from the initial state and reports declared states
/// that no transition chain can reach.
fn check_unreachable_states(config: &MachineConfig) -> Result<(), AnalysisError> {
    let mut visited = HashSet::new();
    let mut queue = vec![config.initial_state];

    while let Some(state) = queue.pop() {
        if !visited.insert(state) {
            continue;
        }
        for (&(from, _), rule) in &config.rules {
            if from == state && !visited.contains(&rule.next) {
                queue.push(rule.next);
            }
        }
    }

    let unreachable: HashSet<char> = config
        .states
        .chars()
        .filter(|state| !visited.contains(state))
        .collect();

    if !unreachable.is_empty() {
        return Err(AnalysisError::UnreachableStates(sorted(unreachable)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{Direction, Rule};
    use std::collections::HashMap;

    fn config_with_rules(rules: &[(char, char, char, Direction, char)]) -> MachineConfig {
        MachineConfig {
            name: "test".to_string(),
            tape_alphabet: "01".to_string(),
            blank: '0',
            input_alphabet: "1".to_string(),
            initial_tape: "0".to_string(),
            head: 0,
            states: "AH".to_string(),
            initial_state: 'A',
            final_states: "H".to_string(),
            rules: rules
                .iter()
                .map(|&(state, read, write, direction, next)| {
                    (
                        (state, read),
                        Rule {
                            write,
                            direction,
                            next,
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_clean_config_passes() {
        let config = config_with_rules(&[
            ('A', '0', '1', Direction::Right, 'H'),
            ('A', '1', '1', Direction::Left, 'H'),
        ]);
        assert!(analyze(&config).is_ok());
    }

    #[test]
    fn test_undeclared_rule_state() {
        let config = config_with_rules(&[('Z', '0', '1', Direction::Right, 'H')]);
        assert_eq!(
            check_rule_states(&config),
            Err(AnalysisError::UndeclaredRuleStates(vec!['Z']))
        );
    }

    #[test]
    fn test_undeclared_next_state() {
        let config = config_with_rules(&[('A', '0', '1', Direction::Right, 'Z')]);
        assert_eq!(
            check_rule_states(&config),
            Err(AnalysisError::UndeclaredNextStates(vec!['Z']))
        );
    }

    #[test]
    fn test_read_symbol_outside_tape_alphabet() {
        let config = config_with_rules(&[('A', '9', '1', Direction::Right, 'H')]);
        assert_eq!(
            check_rule_symbols(&config),
            Err(AnalysisError::ReadSymbolsOutsideTapeAlphabet(vec!['9']))
        );
    }

    #[test]
    fn test_write_symbol_outside_input_alphabet() {
        // Writing the blank is the classic offender.
        let config = config_with_rules(&[('A', '0', '0', Direction::Right, 'H')]);
        assert_eq!(
            check_rule_symbols(&config),
            Err(AnalysisError::WriteSymbolsOutsideInputAlphabet(vec!['0']))
        );
    }

    #[test]
    fn test_unreachable_state() {
        let mut config = config_with_rules(&[('A', '0', '1', Direction::Right, 'H')]);
        config.states = "ABH".to_string();
        // B is declared but no rule chain from A reaches it.
        assert_eq!(
            check_unreachable_states(&config),
            Err(AnalysisError::UnreachableStates(vec!['B']))
        );
    }

    #[test]
    fn test_findings_convert_to_validation_errors() {
        let error: TuringMachineError = AnalysisError::UnreachableStates(vec!['B']).into();
        match error {
            TuringMachineError::Validation(message) => {
                assert!(message.contains("unreachable"));
                assert!(message.contains('B'));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_analyze_returns_first_finding() {
        let config = config_with_rules(&[('A', '0', '0', Direction::Right, 'Z')]);
        // State checks run before symbol checks.
        match analyze(&config) {
            Err(TuringMachineError::Validation(message)) => {
                assert!(message.contains("next states"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_busy_beavers_analyze_clean() {
        for name in ["busy-beaver", "busy-beaver-wide"] {
            let config = Catalog::get(name).unwrap();
            assert!(analyze(&config).is_ok(), "'{}' should analyze clean", name);
        }
    }

    #[test]
    fn test_erasing_machines_are_flagged() {
        for name in ["zero-n-one-n", "power-of-two", "w#w"] {
            let config = Catalog::get(name).unwrap();
            match analyze(&config) {
                Err(TuringMachineError::Validation(message)) => {
                    assert!(
                        message.contains("input alphabet"),
                        "'{}' should be flagged for its write symbols, got: {}",
                        name,
                        message
                    );
                }
                other => panic!("expected Validation for '{}', got {:?}", name, other),
            }
        }
    }
}
