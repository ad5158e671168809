//! Common test utilities for scalc integration tests

pub use scalc::{evaluate, EvalError, Environment, Session};

/// Helper to evaluate one expression in a fresh environment
pub fn eval(input: &str) -> Result<f64, EvalError> {
    let mut env = Environment::new();
    evaluate(input, &mut env)
}

/// Helper to evaluate a sequence of lines against one environment,
/// returning the result of the last one
#[allow(dead_code)]
pub fn eval_all(lines: &[&str]) -> Result<f64, EvalError> {
    let mut env = Environment::new();
    let mut last = Err(EvalError::MalformedExpression);
    for line in lines {
        last = evaluate(line, &mut env);
    }
    last
}

/// Assert two floats agree within 1e-9
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be within 1e-9 of {}",
        actual,
        expected
    );
}
