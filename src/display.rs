//! Display formatting for results, variables and history
//!
//! Numbers are printed in fixed-point notation, six decimals unless the
//! caller asks otherwise.

use crate::env::Environment;
use crate::history::History;
use crate::units::Unit;

pub const DEFAULT_PRECISION: usize = 6;
pub const MAX_PRECISION: usize = 15;

/// Width of the name column in variable listings
const NAME_WIDTH: usize = 10;

/// Format a number with `precision` decimals
pub fn format_number(value: f64, precision: usize) -> String {
    format!("{:.*}", precision.min(MAX_PRECISION), value)
}

/// `Result: 14.000000`
pub fn format_result(value: f64, precision: usize) -> String {
    format!("Result: {}", format_number(value, precision))
}

/// `x = 10.000000`
pub fn format_assignment(name: &str, value: f64, precision: usize) -> String {
    format!("{} = {}", name, format_number(value, precision))
}

/// One line per binding, sorted by name
pub fn format_variables(env: &Environment, precision: usize) -> String {
    if env.is_empty() {
        return "No variables defined.".to_string();
    }
    env.iter()
        .map(|(name, value)| {
            format!(
                "{:<width$} = {}",
                name,
                format_number(value, precision),
                width = NAME_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered listing, oldest first
pub fn format_history(history: &History, precision: usize) -> String {
    if history.is_empty() {
        return "No calculations yet.".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}. {} = {}",
                i + 1,
                entry.expression,
                format_number(entry.result, precision)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `100m = 328.084000ft`
pub fn format_conversion(value: f64, from: Unit, result: f64, to: Unit, precision: usize) -> String {
    format!(
        "{}{} = {}{}",
        format_number(value, precision),
        from,
        format_number(result, precision),
        to
    )
}
