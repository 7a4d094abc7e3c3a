use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use fsa_regexp_translator::translate;

fn main() -> ExitCode {
    env_logger::init();

    let input = match read_input() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("failed to read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // A diagnostic block is an ordinary outcome of the run; the failure
    // status is reserved for unreadable input.
    match translate(&input) {
        Ok(regexp) => println!("{}", regexp),
        Err(err) => println!("Error:\n{}", err),
    }

    ExitCode::SUCCESS
}

/// Read the description from the file named as the first argument, or from
/// stdin when no argument is given.
fn read_input() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
