use super::EvalError;
use crate::lexer::{Function, Operator};

impl Operator {
    /// Apply the operator as `a <op> b`
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
            Operator::Rem => {
                // Truncated remainder, sign follows the dividend
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a % b)
            }
            Operator::Pow => Ok(a.powf(b)),
        }
    }
}

impl Function {
    /// Apply the function to one operand. Trigonometry works in degrees.
    pub fn apply(self, x: f64) -> Result<f64, EvalError> {
        match self {
            Function::Sin => Ok(x.to_radians().sin()),
            Function::Cos => Ok(x.to_radians().cos()),
            Function::Tan => Ok(x.to_radians().tan()),
            Function::Log => self.positive(x).map(f64::log10),
            Function::Ln => self.positive(x).map(f64::ln),
            Function::Sqrt => {
                if x < 0.0 {
                    return Err(self.domain_error(x));
                }
                Ok(x.sqrt())
            }
            Function::Abs => Ok(x.abs()),
            Function::Exp => Ok(x.exp()),
        }
    }

    fn positive(self, x: f64) -> Result<f64, EvalError> {
        if x <= 0.0 {
            Err(self.domain_error(x))
        } else {
            Ok(x)
        }
    }

    fn domain_error(self, value: f64) -> EvalError {
        EvalError::DomainError {
            function: self,
            value,
        }
    }
}
