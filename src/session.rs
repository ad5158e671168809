//! Calculator session
//!
//! A `Session` owns one environment and one history. Independent sessions
//! share nothing.

use crate::env::Environment;
use crate::eval::{evaluate, EvalError};
use crate::history::History;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Session {
    env: Environment,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `text` and record it in the history if it succeeds
    pub fn evaluate(&mut self, text: &str) -> Result<f64, EvalError> {
        let result = evaluate(text, &mut self.env)?;
        self.history.push(text.trim(), result);
        Ok(result)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Forget user variables; `pi` and `e` return to their built-in values
    pub fn reset_variables(&mut self) {
        debug!(count = self.env.len(), "resetting variables");
        self.env.reset();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
