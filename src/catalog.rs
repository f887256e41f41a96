//! A registry of classic example machines, exposed as ready-made
//! [`MachineConfig`] bundles looked up by name.
//!
//! The configurations are static data; the catalog never constructs tapes or
//! machines itself. Note that the erasing machines (`zero-n-one-n`,
//! `power-of-two`, `w#w`) clear cells by writing their blank symbol, which
//! the tape's write validation rejects at step time since the blank is never
//! part of the input alphabet. They are kept as faithful reference material;
//! [`crate::analyzer::analyze`] reports the offending entries up front.

use crate::config::MachineConfig;
use crate::types::{Direction, Rule, Rules, TuringMachineError};

lazy_static::lazy_static! {
    static ref CATALOG: Vec<MachineConfig> = vec![
        busy_beaver(),
        busy_beaver_wide(),
        zero_n_one_n(),
        power_of_two(),
        marked_word_pair(),
    ];
}

/// Name-based access to the built-in machine configurations.
pub struct Catalog;

impl Catalog {
    /// Lists the names of all built-in machines, in catalog order.
    pub fn names() -> Vec<String> {
        CATALOG.iter().map(|config| config.name.clone()).collect()
    }

    /// Returns the number of built-in machines.
    pub fn count() -> usize {
        CATALOG.len()
    }

    /// Looks up a machine configuration by name.
    pub fn get(name: &str) -> Result<MachineConfig, TuringMachineError> {
        CATALOG
            .iter()
            .find(|config| config.name == name)
            .cloned()
            .ok_or_else(|| TuringMachineError::UnknownMachine(name.to_string()))
    }
}

fn rules(entries: &[(char, char, char, Direction, char)]) -> Rules {
    entries
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
        .collect()
}

/// The standard 3-state busy beaver. Halts after 13 steps leaving six 1s.
fn busy_beaver() -> MachineConfig {
    use Direction::{Left, Right};
    MachineConfig {
        name: "busy-beaver".to_string(),
        tape_alphabet: "01".to_string(),
        blank: '0',
        input_alphabet: "1".to_string(),
        initial_tape: "0".to_string(),
        head: 0,
        states: "ABCH".to_string(),
        initial_state: 'A',
        final_states: "H".to_string(),
        rules: rules(&[
            ('A', '0', '1', Right, 'B'),
            ('A', '1', '1', Left, 'C'),
            ('B', '0', '1', Left, 'A'),
            ('B', '1', '1', Right, 'B'),
            ('C', '0', '1', Left, 'B'),
            ('C', '1', '1', Right, 'H'),
        ]),
    }
}

/// The same busy beaver started in the middle of a pre-widened tape.
fn busy_beaver_wide() -> MachineConfig {
    MachineConfig {
        name: "busy-beaver-wide".to_string(),
        initial_tape: "0000000".to_string(),
        head: 3,
        ..busy_beaver()
    }
}

/// Recognizer for L = { 0ⁿ1ⁿ | n ∈ ℕ }. Final states: A accepts, R rejects.
fn zero_n_one_n() -> MachineConfig {
    use Direction::{Left, Right};
    MachineConfig {
        name: "zero-n-one-n".to_string(),
        tape_alphabet: "_01".to_string(),
        blank: '_',
        input_alphabet: "01".to_string(),
        initial_tape: "_0011_".to_string(),
        head: 1,
        states: "0123AR".to_string(),
        initial_state: '0',
        final_states: "AR".to_string(),
        rules: rules(&[
            ('0', '0', '_', Right, '1'),
            ('0', '1', '1', Right, 'R'),
            ('0', '_', '_', Right, 'A'),
            ('1', '0', '0', Right, '1'),
            ('1', '1', '1', Right, '1'),
            ('1', '_', '_', Left, '2'),
            ('2', '0', '0', Right, 'R'),
            ('2', '1', '_', Left, '3'),
            ('2', '_', '_', Right, 'R'),
            ('3', '0', '0', Left, '3'),
            ('3', '1', '1', Left, '3'),
            ('3', '_', '_', Right, '0'),
        ]),
    }
}

/// Recognizer for L = { 0^(2ⁿ) | n ≥ 0 }. Final states: A accepts, R rejects.
fn power_of_two() -> MachineConfig {
    use Direction::{Left, Right};
    MachineConfig {
        name: "power-of-two".to_string(),
        tape_alphabet: "_0x".to_string(),
        blank: '_',
        input_alphabet: "0".to_string(),
        initial_tape: "000".to_string(),
        head: 0,
        states: "12345AR".to_string(),
        initial_state: '1',
        final_states: "AR".to_string(),
        rules: rules(&[
            ('1', '0', '_', Right, '2'),
            ('1', 'x', 'x', Right, 'R'),
            ('1', '_', '_', Right, 'R'),
            ('2', '0', 'x', Right, '3'),
            ('2', 'x', 'x', Right, '2'),
            ('2', '_', '_', Right, 'A'),
            ('3', '0', '0', Right, '4'),
            ('3', 'x', 'x', Right, '3'),
            ('3', '_', '_', Left, '5'),
            ('4', '0', 'x', Right, '3'),
            ('4', 'x', 'x', Right, '4'),
            ('4', '_', '_', Right, 'R'),
            ('5', '0', '0', Left, '5'),
            ('5', 'x', 'x', Left, '5'),
            ('5', '_', '_', Right, '2'),
        ]),
    }
}

/// Recognizer for L = { w#w | w ∈ {0,1}* }, checking a marked duplicate.
/// Final states: A accepts, R rejects.
fn marked_word_pair() -> MachineConfig {
    use Direction::{Left, Right};
    MachineConfig {
        name: "w#w".to_string(),
        tape_alphabet: "01#x_".to_string(),
        blank: '_',
        input_alphabet: "01#".to_string(),
        initial_tape: "01#10".to_string(),
        head: 0,
        states: "12345687AR".to_string(),
        initial_state: '1',
        final_states: "AR".to_string(),
        rules: rules(&[
            ('1', '0', 'x', Right, '2'),
            ('1', '1', 'x', Right, '3'),
            ('1', '#', '#', Right, '8'),
            ('1', 'x', 'x', Right, 'R'),
            ('1', '_', '_', Right, 'R'),
            ('2', '0', '0', Right, '2'),
            ('2', '1', '1', Right, '2'),
            ('2', '#', '#', Right, '4'),
            ('2', 'x', 'x', Right, 'R'),
            ('2', '_', '_', Right, 'R'),
            ('3', '0', '0', Right, '3'),
            ('3', '1', '1', Right, '3'),
            ('3', '#', '#', Right, '5'),
            ('3', 'x', 'x', Right, 'R'),
            ('3', '_', '_', Right, 'R'),
            ('4', '0', 'x', Left, '6'),
            ('4', '1', '1', Right, 'R'),
            ('4', '#', '#', Right, 'R'),
            ('4', 'x', 'x', Right, '4'),
            ('4', '_', '_', Right, 'R'),
            ('5', '0', '0', Right, 'R'),
            ('5', '1', 'x', Left, '6'),
            ('5', '#', '#', Right, 'R'),
            ('5', 'x', 'x', Right, '5'),
            ('5', '_', '_', Right, 'R'),
            ('6', '0', '0', Left, '6'),
            ('6', '1', '1', Left, '6'),
            ('6', '#', '#', Left, '7'),
            ('6', 'x', 'x', Left, '6'),
            ('6', '_', '_', Right, 'R'),
            ('7', '0', '0', Left, '7'),
            ('7', '1', '1', Left, '7'),
            ('7', '#', '#', Right, 'R'),
            ('7', 'x', 'x', Right, '1'),
            ('7', '_', '_', Right, 'R'),
            ('8', '0', '0', Right, 'R'),
            ('8', '1', '1', Right, 'R'),
            ('8', '#', '#', Right, 'R'),
            ('8', 'x', 'x', Right, '8'),
            ('8', '_', '_', Right, 'A'),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::TuringMachine;
    use crate::types::{Step, TuringMachineError};

    #[test]
    fn test_catalog_names() {
        let names = Catalog::names();
        assert_eq!(Catalog::count(), 5);
        assert!(names.contains(&"busy-beaver".to_string()));
        assert!(names.contains(&"busy-beaver-wide".to_string()));
        assert!(names.contains(&"zero-n-one-n".to_string()));
        assert!(names.contains(&"power-of-two".to_string()));
        assert!(names.contains(&"w#w".to_string()));
    }

    #[test]
    fn test_unknown_machine_name() {
        let result = Catalog::get("collatz");
        assert_eq!(
            result.err(),
            Some(TuringMachineError::UnknownMachine("collatz".to_string()))
        );
    }

    #[test]
    fn test_all_configs_construct_machines() {
        for name in Catalog::names() {
            let config = Catalog::get(&name).unwrap();
            assert!(
                TuringMachine::from_config(&config).is_ok(),
                "config '{}' failed to construct",
                name
            );
        }
    }

    #[test]
    fn test_busy_beaver_runs_to_halt() {
        let config = Catalog::get("busy-beaver").unwrap();
        let mut machine = TuringMachine::from_config(&config).unwrap();

        assert_eq!(machine.run(100), Ok(Step::Halted));
        assert_eq!(machine.step_count(), 13);
        assert_eq!(machine.tape().count('1'), 6);
    }

    #[test]
    fn test_wide_busy_beaver_matches_narrow_result() {
        let config = Catalog::get("busy-beaver-wide").unwrap();
        let mut machine = TuringMachine::from_config(&config).unwrap();

        assert_eq!(machine.run(100), Ok(Step::Halted));
        assert_eq!(machine.step_count(), 13);
        assert_eq!(machine.tape().count('1'), 6);
    }

    #[test]
    fn test_erasing_machine_trips_write_validation() {
        // zero-n-one-n erases cells by writing its blank, which the input
        // alphabet excludes; the first such step is rejected.
        let config = Catalog::get("zero-n-one-n").unwrap();
        let mut machine = TuringMachine::from_config(&config).unwrap();

        assert_eq!(
            machine.step(),
            Err(TuringMachineError::UnknownWriteSymbol('_'))
        );
        assert_eq!(machine.state(), '0');
        assert_eq!(machine.tape().contents(), "_0011_");
    }
}
