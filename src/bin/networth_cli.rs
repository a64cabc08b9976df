use std::{env, process::ExitCode};

use networth_core::{cli, init};

fn main() -> ExitCode {
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = if args.is_empty() {
        cli::run_cli()
    } else {
        cli::run_command_line(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
