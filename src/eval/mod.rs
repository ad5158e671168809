//! Evaluator for scalc
//!
//! Evaluation runs three stages in sequence:
//! - `lex` turns the text into tokens
//! - `to_postfix` reorders them into RPN, resolving variables
//! - `evaluate_postfix` reduces the RPN sequence with a value stack
//!
//! Assignment (`name = expr`) is recognised before lexing. The right-hand
//! side is evaluated first and the binding is written only if it succeeds,
//! so a failed call leaves the environment untouched.

mod assign;
mod math;

pub use assign::assignment_target;

use crate::ast::Postfix;
use crate::env::Environment;
use crate::lexer::{lex, Function, LexError, Token};
use crate::parser::to_postfix;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Stack underflow: {0} needs more operands")]
    StackUnderflow(String),
    #[error("Malformed expression")]
    MalformedExpression,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("{function}: value {value} is outside the domain")]
    DomainError { function: Function, value: f64 },
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
    #[error("Invalid assignment target: {0:?}")]
    InvalidAssignment(String),
    #[error("Result is not a finite number")]
    NonFinite,
}

fn pop(stack: &mut Vec<f64>, what: &Token) -> Result<f64, EvalError> {
    stack
        .pop()
        .ok_or_else(|| EvalError::StackUnderflow(what.to_string()))
}

/// Reduce a postfix sequence to a single value
pub fn evaluate_postfix(postfix: &Postfix) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Operator(op) => {
                let b = pop(&mut stack, token)?;
                let a = pop(&mut stack, token)?;
                stack.push(op.apply(a, b)?);
            }
            Token::Function(func) => {
                let x = pop(&mut stack, token)?;
                stack.push(func.apply(x)?);
            }
            Token::LeftParen | Token::RightParen | Token::Identifier(_) => {
                return Err(EvalError::MalformedExpression);
            }
        }
    }

    match stack.as_slice() {
        [result] if result.is_finite() => Ok(*result),
        [_] => Err(EvalError::NonFinite),
        _ => Err(EvalError::MalformedExpression),
    }
}

/// Evaluate an expression or assignment against `env`
pub fn evaluate(text: &str, env: &mut Environment) -> Result<f64, EvalError> {
    if let Some((name, rhs)) = assign::split(text) {
        assign::validate_target(&name)?;
        let value = evaluate(rhs, env)?;
        debug!(name = %name, value, "binding variable");
        env.set(name, value);
        return Ok(value);
    }

    let tokens = lex(text)?;
    trace!(?tokens, "lexed expression");
    let postfix = to_postfix(&tokens, env)?;
    debug!(postfix = %postfix, "converted to postfix");
    evaluate_postfix(&postfix)
}

/// Convert an expression to its postfix form without evaluating it.
/// For an assignment (or a chain of them) this is the postfix form of
/// the final right-hand side.
pub fn postfix_of(text: &str, env: &Environment) -> Result<Postfix, EvalError> {
    let text = match text.rsplit_once('=') {
        Some((_, rhs)) => rhs,
        None => text,
    };
    let tokens = lex(text)?;
    to_postfix(&tokens, env)
}
