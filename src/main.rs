//! Power Tools CLI
//!
//! Usage:
//!   powertools [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --settings <FILE>    Values settings file (TOML format)
//!   --set <NAME=VALUE>       Additional built-in value (repeatable)
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use powertools::{replace_values, ReplaceOptions, Value, ValueSettings};

#[derive(Parser)]
#[command(name = "powertools")]
#[command(about = "Replace ${NAME} placeholders using workspace value settings")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Values settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Additional built-in value, overridable by settings entries of the
    /// same name (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // Load value settings
    let settings = match &cli.settings {
        Some(path) => match ValueSettings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ValueSettings::default(),
    };

    // Built-in values from --set
    let mut options = ReplaceOptions::new();
    for assignment in &cli.set {
        match assignment.split_once('=') {
            Some((name, value)) => {
                options = options.with_built_in(Value::fixed(value).with_name(name));
            }
            None => {
                eprintln!(
                    "Error: invalid assignment '{}', expected NAME=VALUE",
                    assignment
                );
                std::process::exit(1);
            }
        }
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let input = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    print!("{}", replace_values(Some(&settings), &input, options));
}

fn print_intro() {
    println!(
        r#"Power Tools - ${{NAME}} placeholder substitution

USAGE:
    powertools [OPTIONS] [FILE]
    echo '<text>' | powertools

OPTIONS:
    -s, --settings <FILE>   Values settings file (TOML)
    --set <NAME=VALUE>      Additional built-in value (repeatable)
    -h, --help              Print help

QUICK START:
    echo 'Hello, ${{NAME}}!' | powertools --set NAME=world

Settings entries override --set built-ins of the same name. A settings
file declares its values in a [values] table:

    [values]
    NAME = "world"
    count = 3"#
    );
}
