//! Integration tests for variables, assignment and sessions

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{assert_close, eval, eval_all, evaluate, Environment, EvalError, Session};

#[test]
fn test_assignment_persists() {
    let mut env = Environment::new();
    assert_eq!(evaluate("x = 10", &mut env).unwrap(), 10.0);
    assert_eq!(evaluate("x * 2", &mut env).unwrap(), 20.0);
}

#[test]
fn test_variables_compose() {
    let result = eval_all(&["x = 10", "y = x * 2", "result = sqrt(x ^ 2 + y ^ 2)", "result"]);
    assert_close(result.unwrap(), 500f64.sqrt());
}

#[test]
fn test_constants() {
    assert_close(eval("pi").unwrap(), 3.14159265358979);
    assert_close(eval("e").unwrap(), 2.71828182845905);
    assert_close(eval("2 * pi").unwrap(), std::f64::consts::TAU);
}

#[test]
fn test_constant_shadowing_and_reset() {
    let mut session = Session::new();
    session.evaluate("pi = 3").unwrap();
    assert_eq!(session.evaluate("pi").unwrap(), 3.0);
    session.reset_variables();
    assert_eq!(session.evaluate("pi").unwrap(), std::f64::consts::PI);
}

#[test]
fn test_undefined_variable_does_not_bind() {
    let mut env = Environment::new();
    assert_eq!(
        evaluate("y + 1", &mut env),
        Err(EvalError::UndefinedVariable("y".to_string()))
    );
    assert!(env.get("y").is_none());
}

#[test]
fn test_failed_assignment_does_not_bind() {
    let mut session = Session::new();
    assert!(session.evaluate("x = 1 / 0").is_err());
    assert!(session.evaluate("x = (1").is_err());
    assert!(!session.env().contains("x"));
    assert!(session.history().is_empty());
}

#[test]
fn test_history_records_successes() {
    let mut session = Session::new();
    session.evaluate("x = 2").unwrap();
    session.evaluate("x ^ 10").unwrap();
    let _ = session.evaluate("x / 0");
    let results: Vec<f64> = session.history().iter().map(|e| e.result).collect();
    assert_eq!(results, vec![2.0, 1024.0]);
}

#[test]
fn test_reset_clears_user_bindings() {
    let mut session = Session::new();
    session.evaluate("a = 1").unwrap();
    session.reset_variables();
    assert!(matches!(session.evaluate("a"), Err(EvalError::UndefinedVariable(_))));
    assert_eq!(session.history().len(), 1);
}
