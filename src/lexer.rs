//! Tokenization for scalc
//!
//! Tokens are the atomic elements of an infix expression: numbers,
//! operators, function names, identifiers and parentheses. Characters
//! outside that vocabulary are dropped while scanning.

use crate::eval::EvalError;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{anychar, char, multispace0, one_of},
    combinator::{map, value},
    multi::many0,
    sequence::preceded,
    IResult,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

/// Binary operators, in the order of the precedence table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Rem, // %
    Pow, // ^
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::Pow,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
            Operator::Pow => '^',
        }
    }

    /// Binding strength. Every operator is left-associative, `^` included.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div | Operator::Rem => 2,
            Operator::Pow => 3,
        }
    }

    fn from_symbol(c: char) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.symbol() == c)
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_symbol(c).ok_or_else(|| EvalError::UnknownOperator(s.to_string()))
            }
            _ => Err(EvalError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Built-in unary functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Abs,
    Exp,
}

impl Function {
    pub const ALL: [Function; 8] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Log,
        Function::Ln,
        Function::Sqrt,
        Function::Abs,
        Function::Exp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
            Function::Exp => "exp",
        }
    }
}

impl FromStr for Function {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|func| func.name() == s)
            .ok_or_else(|| EvalError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// A binary operator
    Operator(Operator),
    /// A built-in function name
    Function(Function),
    /// (
    LeftParen,
    /// )
    RightParen,
    /// Any other letter sequence, resolved against the environment later
    Identifier(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Function(func) => write!(f, "{}", func),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Identifier(name) => f.write_str(name),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// What a single scan step produced, before numeric runs are converted
#[derive(Debug, Clone, PartialEq)]
enum Lexeme<'a> {
    Numeric(&'a str),
    Token(Token),
    Ignored(char),
}

/// Parse a run of digits and decimal points
fn numeric(input: &str) -> IResult<&str, Lexeme<'_>> {
    map(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        Lexeme::Numeric,
    )(input)
}

/// Parse a run of letters: a function name or an identifier
fn word(input: &str) -> IResult<&str, Lexeme<'_>> {
    map(take_while1(|c: char| c.is_ascii_alphabetic()), |s: &str| {
        match s.parse::<Function>() {
            Ok(func) => Lexeme::Token(Token::Function(func)),
            Err(_) => Lexeme::Token(Token::Identifier(s.to_string())),
        }
    })(input)
}

/// Parse one of + - * / % ^
fn operator(input: &str) -> IResult<&str, Lexeme<'_>> {
    map(one_of("+-*/%^"), |c| match Operator::from_symbol(c) {
        Some(op) => Lexeme::Token(Token::Operator(op)),
        None => Lexeme::Ignored(c),
    })(input)
}

fn left_paren(input: &str) -> IResult<&str, Lexeme<'_>> {
    value(Lexeme::Token(Token::LeftParen), char('('))(input)
}

fn right_paren(input: &str) -> IResult<&str, Lexeme<'_>> {
    value(Lexeme::Token(Token::RightParen), char(')'))(input)
}

/// Anything else is consumed and dropped
fn ignored(input: &str) -> IResult<&str, Lexeme<'_>> {
    map(anychar, Lexeme::Ignored)(input)
}

/// Parse any single lexeme
fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    preceded(
        multispace0,
        alt((numeric, word, operator, left_paren, right_paren, ignored)),
    )(input)
}

/// Convert a numeric run using its longest valid decimal prefix,
/// so `1.2.3` reads as `1.2`.
fn parse_number(run: &str) -> Result<f64, LexError> {
    (1..=run.len())
        .rev()
        .find_map(|end| run[..end].parse::<f64>().ok())
        .ok_or_else(|| LexError::InvalidNumber(run.to_string()))
}

/// Tokenize a complete expression string
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let (remaining, lexemes) =
        many0(lexeme)(input).map_err(|e| LexError::ParseError(format!("{:?}", e)))?;

    // Only trailing whitespace can be left over
    if let Some(c) = remaining.trim().chars().next() {
        return Err(LexError::ParseError(format!("unexpected character {:?}", c)));
    }

    let mut tokens = Vec::with_capacity(lexemes.len());
    for lexeme in lexemes {
        match lexeme {
            Lexeme::Numeric(run) => tokens.push(Token::Number(parse_number(run)?)),
            Lexeme::Token(token) => tokens.push(token),
            Lexeme::Ignored(c) => trace!(character = ?c, "skipping unrecognized character"),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple_expression() {
        let tokens = lex("2 + 3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Operator(Operator::Add),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn tokenize_without_whitespace() {
        let tokens = lex("(1+2)*3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftParen,
                Token::Number(1.0),
                Token::Operator(Operator::Add),
                Token::Number(2.0),
                Token::RightParen,
                Token::Operator(Operator::Mul),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn tokenize_all_operators() {
        let tokens = lex("+ - * / % ^").unwrap();
        let ops: Vec<Token> = Operator::ALL.into_iter().map(Token::Operator).collect();
        assert_eq!(tokens, ops);
    }

    #[test]
    fn tokenize_decimals() {
        assert_eq!(lex("12.5").unwrap(), vec![Token::Number(12.5)]);
        assert_eq!(lex(".5").unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(lex("5.").unwrap(), vec![Token::Number(5.0)]);
    }

    #[test]
    fn tokenize_uses_longest_valid_prefix() {
        assert_eq!(lex("1.2.3").unwrap(), vec![Token::Number(1.2)]);
    }

    #[test]
    fn tokenize_lone_point_fails() {
        assert_eq!(lex("."), Err(LexError::InvalidNumber(".".to_string())));
        assert_eq!(lex("1 + .."), Err(LexError::InvalidNumber("..".to_string())));
    }

    #[test]
    fn tokenize_functions_and_identifiers() {
        let tokens = lex("sqrt(x) + sine").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Function(Function::Sqrt),
                Token::LeftParen,
                Token::Identifier("x".to_string()),
                Token::RightParen,
                Token::Operator(Operator::Add),
                Token::Identifier("sine".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_every_function_name() {
        for func in Function::ALL {
            assert_eq!(lex(func.name()).unwrap(), vec![Token::Function(func)]);
        }
    }

    #[test]
    fn tokenize_letters_then_digits_split() {
        let tokens = lex("x2").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Identifier("x".to_string()), Token::Number(2.0)]
        );
    }

    #[test]
    fn tokenize_drops_unknown_characters() {
        let tokens = lex("2 $ 3 _ #").unwrap();
        assert_eq!(tokens, vec![Token::Number(2.0), Token::Number(3.0)]);
    }

    #[test]
    fn tokenize_leading_minus_is_binary_operator() {
        let tokens = lex("-5").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Operator(Operator::Sub), Token::Number(5.0)]
        );
    }

    #[test]
    fn tokenize_empty_and_blank() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex("  \t ").unwrap().is_empty());
    }

    #[test]
    fn operator_from_str() {
        assert_eq!("^".parse::<Operator>().unwrap(), Operator::Pow);
        assert!(matches!(
            "&".parse::<Operator>(),
            Err(EvalError::UnknownOperator(s)) if s == "&"
        ));
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn function_from_str() {
        assert_eq!("ln".parse::<Function>().unwrap(), Function::Ln);
        assert!(matches!(
            "cosh".parse::<Function>(),
            Err(EvalError::UnknownFunction(s)) if s == "cosh"
        ));
    }

    #[test]
    fn precedence_table() {
        assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Rem.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
        assert!(Operator::Div.precedence() > Operator::Sub.precedence());
    }
}
