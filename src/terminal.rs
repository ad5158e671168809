use scalc::{assignment_target, convert, display, postfix_of, Session, Unit};

use crate::cli::Settings;

/// Dot-prefixed commands understood by the REPL and in scripts
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DotCommand<'a> {
    Help,
    Vars,
    History { json: bool },
    ClearHistory,
    ClearVars,
    Rpn(&'a str),
    Convert(&'a str),
}

impl<'a> DotCommand<'a> {
    /// Recognise a dot command; `None` means the line is an expression
    pub(crate) fn parse(line: &'a str) -> Result<Option<Self>, String> {
        // `.5 + 1` is an expression
        let Some(rest) = line
            .strip_prefix('.')
            .filter(|rest| rest.starts_with(|c: char| c.is_ascii_alphabetic()))
        else {
            return Ok(None);
        };
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };
        let command = match name {
            "help" | "h" => DotCommand::Help,
            "vars" | "v" => DotCommand::Vars,
            "history" | "hist" => DotCommand::History { json: args == "json" },
            "clear-history" => DotCommand::ClearHistory,
            "clear-vars" => DotCommand::ClearVars,
            "rpn" => DotCommand::Rpn(args),
            "convert" => DotCommand::Convert(args),
            _ => return Err(format!("Unknown command: .{}", name)),
        };
        Ok(Some(command))
    }
}

/// Strip a trailing `#` comment
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Execute one line (expression, assignment or dot command) and return
/// what should be printed
pub(crate) fn execute_line(
    session: &mut Session,
    input: &str,
    settings: &Settings,
) -> Result<String, String> {
    if let Some(command) = DotCommand::parse(input)? {
        return run_command(session, command, settings);
    }

    let value = session.evaluate(input).map_err(|e| e.to_string())?;
    let output = match assignment_target(input) {
        Some(name) => display::format_assignment(&name, value, settings.precision),
        None => display::format_result(value, settings.precision),
    };
    Ok(output)
}

fn run_command(
    session: &mut Session,
    command: DotCommand<'_>,
    settings: &Settings,
) -> Result<String, String> {
    let precision = settings.precision;
    match command {
        DotCommand::Help => Ok(crate::cli::help_text()),
        DotCommand::Vars => Ok(display::format_variables(session.env(), precision)),
        DotCommand::History { json: false } => {
            Ok(display::format_history(session.history(), precision))
        }
        DotCommand::History { json: true } => {
            session.history().to_json().map_err(|e| e.to_string())
        }
        DotCommand::ClearHistory => {
            session.clear_history();
            Ok("History cleared!".to_string())
        }
        DotCommand::ClearVars => {
            session.reset_variables();
            Ok("Variables cleared!".to_string())
        }
        DotCommand::Rpn(expr) => postfix_of(expr, session.env())
            .map(|postfix| postfix.to_string())
            .map_err(|e| e.to_string()),
        DotCommand::Convert(args) => run_convert(args, precision),
    }
}

/// `.convert <value> <from> <to>`
fn run_convert(args: &str, precision: usize) -> Result<String, String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [value, from, to] = parts.as_slice() else {
        return Err("Usage: .convert <value> <from> <to>".to_string());
    };
    let value: f64 = value
        .parse()
        .map_err(|_| format!("Invalid number: {}", value))?;
    let from: Unit = from.parse().map_err(|e: scalc::ConvertError| e.to_string())?;
    let to: Unit = to.parse().map_err(|e: scalc::ConvertError| e.to_string())?;
    let result = convert(value, from, to).map_err(|e| e.to_string())?;
    Ok(display::format_conversion(value, from, result, to, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            precision: 2,
            banner: false,
        }
    }

    #[test]
    fn expression_line() {
        let mut session = Session::new();
        let out = execute_line(&mut session, "2 + 3 * 4", &settings()).unwrap();
        assert_eq!(out, "Result: 14.00");
    }

    #[test]
    fn assignment_line() {
        let mut session = Session::new();
        let out = execute_line(&mut session, "x = 10", &settings()).unwrap();
        assert_eq!(out, "x = 10.00");
        let out = execute_line(&mut session, ".vars", &settings()).unwrap();
        assert!(out.contains("x          = 10.00"));
    }

    #[test]
    fn error_line() {
        let mut session = Session::new();
        let err = execute_line(&mut session, "5 / 0", &settings()).unwrap_err();
        assert_eq!(err, "Division by zero");
        assert!(session.history().is_empty());
    }

    #[test]
    fn history_commands() {
        let mut session = Session::new();
        execute_line(&mut session, "1 + 1", &settings()).unwrap();
        let out = execute_line(&mut session, ".history", &settings()).unwrap();
        assert_eq!(out, "1. 1 + 1 = 2.00");
        let out = execute_line(&mut session, ".history json", &settings()).unwrap();
        assert!(out.contains("\"expression\": \"1 + 1\""));
        execute_line(&mut session, ".clear-history", &settings()).unwrap();
        assert!(session.history().is_empty());
    }

    #[test]
    fn clear_vars_command() {
        let mut session = Session::new();
        execute_line(&mut session, "pi = 3", &settings()).unwrap();
        execute_line(&mut session, ".clear-vars", &settings()).unwrap();
        assert_eq!(session.env().get("pi"), Some(std::f64::consts::PI));
    }

    #[test]
    fn rpn_command() {
        let mut session = Session::new();
        let out = execute_line(&mut session, ".rpn (2 + 3) * 4", &settings()).unwrap();
        assert_eq!(out, "2 3 + 4 *");
        assert!(session.history().is_empty());
    }

    #[test]
    fn convert_command() {
        let mut session = Session::new();
        let out = execute_line(&mut session, ".convert 100 c f", &settings()).unwrap();
        assert_eq!(out, "100.00°C = 212.00°F");
        assert!(execute_line(&mut session, ".convert 1 m kg", &settings()).is_err());
        assert!(execute_line(&mut session, ".convert 1 m", &settings()).is_err());
    }

    #[test]
    fn leading_decimal_point_is_an_expression() {
        let mut session = Session::new();
        let out = execute_line(&mut session, ".5 + 1.5", &settings()).unwrap();
        assert_eq!(out, "Result: 2.00");
    }

    #[test]
    fn unknown_command() {
        let mut session = Session::new();
        let err = execute_line(&mut session, ".frobnicate", &settings()).unwrap_err();
        assert_eq!(err, "Unknown command: .frobnicate");
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(strip_comment("x = 1 # one").trim(), "x = 1");
        assert_eq!(strip_comment("# only"), "");
    }
}
