//! scalc - a scientific expression calculator
//!
//! # Overview
//!
//! scalc evaluates infix expressions with the usual operators, a handful
//! of scientific functions and named variables.
//!
//! ```text
//! 2 + 3 * 4              # 14
//! (2 + 3) * 4            # 20
//! sqrt(16) + log(100)    # 6
//! sin(30) + cos(60)      # 1 (trigonometry in degrees)
//! x = 10                 # binds x
//! y = x * pi
//! ```
//!
//! # Pipeline
//!
//! ```text
//! text --lex--> tokens --to_postfix--> RPN --evaluate_postfix--> f64
//!                            ^
//!                       Environment (variables are resolved here)
//! ```
//!
//! Operators are `+ - * / % ^`, all left-associative, so `2 ^ 3 ^ 2` is 64.
//! Functions are `sin cos tan log ln sqrt abs exp`. Characters outside that
//! vocabulary are ignored.
//!
//! # Example
//!
//! ```rust
//! use scalc::{evaluate, Environment};
//!
//! let mut env = Environment::new();
//! assert_eq!(evaluate("x = 10", &mut env).unwrap(), 10.0);
//! assert_eq!(evaluate("x * 2", &mut env).unwrap(), 20.0);
//! assert!(evaluate("5 / 0", &mut env).is_err());
//!
//! assert_eq!(scalc::eval("2 ^ 3 ^ 2"), Ok(64.0));
//! ```

pub mod ast;
pub mod display;
pub mod env;
pub mod eval;
pub mod history;
pub mod lexer;
pub mod parser;
pub mod session;
pub mod units;

// Re-export commonly used items
pub use ast::Postfix;
pub use env::Environment;
pub use eval::{assignment_target, evaluate, evaluate_postfix, postfix_of, EvalError};
pub use history::{History, HistoryEntry};
pub use lexer::{lex, Function, LexError, Operator, Token};
pub use parser::to_postfix;
pub use session::Session;
pub use units::{convert, ConvertError, Unit};

/// Convenience function to evaluate one expression in a fresh environment
pub fn eval(input: &str) -> Result<f64, String> {
    let mut env = Environment::new();
    evaluate(input, &mut env).map_err(|e| e.to_string())
}
