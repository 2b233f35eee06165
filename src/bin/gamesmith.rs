use std::{env, process};

use gamesmith::cli::{self, output, CommandError};

fn main() {
    gamesmith::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = cli::run(args) {
        report(&err);
        process::exit(err.exit_code());
    }
}

fn report(err: &CommandError) {
    output::error(err);
    if matches!(err, CommandError::InvalidArguments(_)) {
        eprintln!("Run `gamesmith help` for usage.");
    }
}
