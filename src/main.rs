//! scalc - scientific expression calculator
//!
//! Usage:
//!   scalc              Start interactive REPL
//!   scalc -c "expr"    Evaluate a single expression
//!   scalc script.calc  Evaluate a script file

mod cli;
mod rcfile;
mod repl;
mod terminal;

use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::{execute_command, execute_script, parse_args, print_help, print_version, Settings};
use crate::repl::run_repl;

/// Log to stderr, filtered by SCALC_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let settings = Settings::from_env();

    // Evaluate a single expression
    if let Some(cmd) = cli.command {
        return execute_command(&cmd, cli.rpn, &settings);
    }

    // Evaluate a script
    if let Some(script) = cli.script {
        return execute_script(&script, &settings);
    }

    match run_repl(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
