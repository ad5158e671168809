//! Infix to postfix conversion (shunting-yard)
//!
//! Identifiers are resolved against the environment here, so the postfix
//! output only ever holds numbers, operators and functions.
//!
//! There is no unary minus. A `-` that opens the expression or a
//! parenthesised group is read as `0 -`, so `-2 ^ 2` is `0 - 2 ^ 2`.
//! Anywhere else a `-` is strictly binary and `2 * -3` fails.

use crate::ast::Postfix;
use crate::env::Environment;
use crate::eval::EvalError;
use crate::lexer::{Function, Operator, Token};

/// Entries waiting on the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator),
    Function(Function),
    LeftParen,
}

impl Pending {
    fn into_token(self) -> Option<Token> {
        match self {
            Pending::Operator(op) => Some(Token::Operator(op)),
            Pending::Function(func) => Some(Token::Function(func)),
            Pending::LeftParen => None,
        }
    }
}

/// Converter state
pub struct Converter<'env> {
    env: &'env Environment,
    output: Vec<Token>,
    stack: Vec<Pending>,
    /// At the start of the input or right after `(`
    group_start: bool,
}

impl<'env> Converter<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Converter {
            env,
            output: Vec::new(),
            stack: Vec::new(),
            group_start: true,
        }
    }

    /// Move the top of the operator stack to the output
    fn emit_top(&mut self) {
        if let Some(token) = self.stack.pop().and_then(Pending::into_token) {
            self.output.push(token);
        }
    }

    fn push_token(&mut self, token: &Token) -> Result<(), EvalError> {
        match token {
            Token::Number(n) => self.output.push(Token::Number(*n)),
            Token::Identifier(name) => {
                let value = self
                    .env
                    .get(name)
                    .ok_or_else(|| EvalError::UndefinedVariable(name.clone()))?;
                self.output.push(Token::Number(value));
            }
            Token::Function(func) => self.stack.push(Pending::Function(*func)),
            Token::Operator(op) => {
                if self.group_start && *op == Operator::Sub {
                    self.output.push(Token::Number(0.0));
                }
                // >= keeps every operator left-associative
                while let Some(top) = self.stack.last() {
                    let pops = match top {
                        Pending::Function(_) => true,
                        Pending::Operator(prev) => prev.precedence() >= op.precedence(),
                        Pending::LeftParen => false,
                    };
                    if !pops {
                        break;
                    }
                    self.emit_top();
                }
                self.stack.push(Pending::Operator(*op));
            }
            Token::LeftParen => self.stack.push(Pending::LeftParen),
            Token::RightParen => {
                loop {
                    match self.stack.pop() {
                        Some(Pending::LeftParen) => break,
                        Some(pending) => self.output.extend(pending.into_token()),
                        None => return Err(EvalError::MismatchedParentheses),
                    }
                }
                if matches!(self.stack.last(), Some(Pending::Function(_))) {
                    self.emit_top();
                }
            }
        }
        self.group_start = matches!(token, Token::LeftParen);
        Ok(())
    }

    /// Drain the operator stack and return the finished program
    fn finish(mut self) -> Result<Postfix, EvalError> {
        while let Some(pending) = self.stack.pop() {
            match pending.into_token() {
                Some(token) => self.output.push(token),
                None => return Err(EvalError::MismatchedParentheses),
            }
        }
        Ok(Postfix::new(self.output))
    }

    /// Convert a complete token sequence
    pub fn convert(mut self, tokens: &[Token]) -> Result<Postfix, EvalError> {
        for token in tokens {
            self.push_token(token)?;
        }
        self.finish()
    }
}

/// Convert infix tokens to postfix, resolving identifiers against `env`
pub fn to_postfix(tokens: &[Token], env: &Environment) -> Result<Postfix, EvalError> {
    Converter::new(env).convert(tokens)
}
