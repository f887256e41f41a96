use clap::Parser;
use std::process::exit;
use turlet::{analyze, Catalog, Direction, Observer, Rule, Step, TuringMachine, DEFAULT_STEP_LIMIT};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The catalog machine to run
    #[clap(short, long)]
    machine: Option<String>,

    /// List the available catalog machines and exit
    #[clap(short, long)]
    list: bool,

    /// Maximum number of steps before giving up
    #[clap(short, long, default_value_t = DEFAULT_STEP_LIMIT)]
    steps: usize,

    /// Analyze the transition table before running
    #[clap(short, long)]
    check: bool,

    /// Print the state and tape after every step
    #[clap(short = 'd', long)]
    trace: bool,

    /// Print every raw tape/step event
    #[clap(short, long)]
    events: bool,
}

/// Observer that prints one line per raw event.
struct EventPrinter;

impl Observer for EventPrinter {
    fn tape_initialized(&mut self, contents: &str, head: usize) {
        println!("tape initialized: \"{}\" head {}", contents, head);
    }

    fn cell_written(&mut self, index: usize, symbol: char) {
        println!("write '{}' at {}", symbol, index);
    }

    fn head_moved(&mut self, head: usize) {
        println!("head -> {}", head);
    }

    fn tape_extended(&mut self, end: Direction) {
        println!("tape extended ({:?})", end);
    }

    fn step_started(&mut self, state: char) {
        println!("step: state '{}'", state);
    }

    fn symbol_read(&mut self, symbol: char) {
        println!("read '{}'", symbol);
    }

    fn transition_applied(&mut self, state: char, read: char, rule: &Rule) {
        println!(
            "({}, {}) -> ({}, {:?}, {})",
            state, read, rule.write, rule.direction, rule.next
        );
    }

    fn step_completed(&mut self, state: char, is_final: bool) {
        println!("now in '{}'{}", state, if is_final { " (final)" } else { "" });
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for name in Catalog::names() {
            println!("{}", name);
        }
        return;
    }

    let Some(name) = cli.machine else {
        eprintln!("No machine selected; use --machine or --list.");
        exit(2);
    };

    let config = Catalog::get(&name).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(2);
    });

    if cli.check {
        if let Err(e) = analyze(&config) {
            eprintln!("{}", e);
            exit(1);
        }
    }

    let machine = if cli.events {
        TuringMachine::from_config_with_observer(&config, Box::new(EventPrinter))
    } else {
        TuringMachine::from_config(&config)
    };
    let mut machine = machine.unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1);
    });

    if cli.trace {
        println!("{}", machine.tape());
    }

    for _ in 0..cli.steps {
        match machine.step() {
            Ok(Step::Continue) => {
                if cli.trace {
                    println!("{}", machine.tape());
                }
            }
            Ok(Step::Halted) => break,
            Err(e) => {
                eprintln!("{}", e);
                exit(1);
            }
        }
        if machine.is_final() {
            break;
        }
    }

    if machine.is_final() {
        println!(
            "halted in state '{}' after {} steps",
            machine.state(),
            machine.step_count()
        );
    } else {
        println!(
            "still running after {} steps (budget exhausted)",
            machine.step_count()
        );
    }
    println!("{}", machine.tape());
}
