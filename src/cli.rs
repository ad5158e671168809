use scalc::display::{DEFAULT_PRECISION, MAX_PRECISION};
use scalc::{postfix_of, Session};
use std::env;
use std::fs;
use std::process::ExitCode;
use tracing::warn;

use crate::terminal::{execute_line, strip_comment};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    /// Decimals shown for results (SCALC_PRECISION)
    pub(crate) precision: usize,
    /// Show the startup banner (SCALC_BANNER)
    pub(crate) banner: bool,
}

impl Settings {
    pub(crate) fn from_env() -> Self {
        let precision = match env::var("SCALC_PRECISION") {
            Ok(raw) => parse_precision(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring invalid SCALC_PRECISION");
                DEFAULT_PRECISION
            }),
            Err(_) => DEFAULT_PRECISION,
        };
        Settings {
            precision,
            banner: env::var("SCALC_BANNER").is_ok(),
        }
    }
}

fn parse_precision(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|p| *p <= MAX_PRECISION)
}

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) rpn: bool,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--rpn" => {
                cli.rpn = true;
            }
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn help_text() -> String {
    format!(
        r#"scalc-{} - scientific expression calculator

USAGE:
    scalc                   Start interactive REPL
    scalc -c <expr>         Evaluate a single expression
    scalc --rpn -c <expr>   Print the postfix (RPN) form of an expression
    scalc <script>          Evaluate a script, one expression per line
    scalc --help            Show this help message
    scalc --version         Show version

STARTUP:
    ~/.scalcrc              Evaluated on REPL startup (if exists)
    SCALC_BANNER=1          Show startup banner (quiet by default)
    SCALC_PRECISION=<n>     Decimals to display (default 6, max 15)
    SCALC_LOG=<filter>      Log filter, e.g. debug (default warn)

OPERATORS (all left-associative):
    +  -                    Addition, subtraction
    *  /  %                 Multiplication, division, remainder
    ^                       Power: 2 ^ 3 ^ 2 = (2 ^ 3) ^ 2 = 64

FUNCTIONS:
    sin(x) cos(x) tan(x)    Trigonometry in degrees
    log(x)                  Base-10 logarithm
    ln(x)                   Natural logarithm
    sqrt(x)                 Square root
    abs(x)                  Absolute value
    exp(x)                  e^x

CONSTANTS:
    pi                      3.14159...
    e                       2.71828...

VARIABLES:
    x = 5                   Assign value to variable
    y = x * 2               Use variables in expressions

REPL COMMANDS:
    .help                   Show this help
    .vars                   List variables
    .history [json]         Show calculation history
    .clear-history          Clear calculation history
    .clear-vars             Remove variables, restore pi and e
    .rpn <expr>             Show postfix form
    .convert <v> <from> <to>  Units: c f, m ft, kg lb
    exit, quit              Leave the REPL

EXAMPLES:
    2 + 3 * 4
    (2 + 3) * 4
    sqrt(16) + log(100)
    sin(30) + cos(60)
    y = x * pi"#,
        VERSION
    )
}

pub(crate) fn print_help() {
    println!("{}", help_text());
}

pub(crate) fn print_version() {
    println!("scalc {}", VERSION);
}

/// Evaluate a single expression (or print its postfix form)
pub(crate) fn execute_command(cmd: &str, rpn: bool, settings: &Settings) -> ExitCode {
    let mut session = Session::new();

    let result = if rpn {
        postfix_of(cmd, session.env())
            .map(|postfix| postfix.to_string())
            .map_err(|e| e.to_string())
    } else {
        execute_line(&mut session, cmd.trim(), settings)
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute a script file, stopping at the first failing line
pub(crate) fn execute_script(path: &str, settings: &Settings) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new();

    for (line_num, line) in content.lines().enumerate() {
        let code = strip_comment(line).trim();

        // Skip empty lines and comments
        if code.is_empty() {
            continue;
        }

        match execute_line(&mut session, code, settings) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error at line {}: {}", line_num + 1, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
