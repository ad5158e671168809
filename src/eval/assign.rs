use super::EvalError;

/// Split `name = rhs` at the first `=`. Whitespace anywhere in the
/// target is discarded.
pub(crate) fn split(text: &str) -> Option<(String, &str)> {
    let (target, rhs) = text.split_once('=')?;
    let name: String = target.chars().filter(|c| !c.is_whitespace()).collect();
    Some((name, rhs))
}

/// The target must be something the lexer would read back as one identifier
pub(crate) fn validate_target(name: &str) -> Result<(), EvalError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EvalError::InvalidAssignment(name.to_string()));
    }
    Ok(())
}

/// Name bound by `text` if it is an assignment
pub fn assignment_target(text: &str) -> Option<String> {
    split(text).map(|(name, _)| name)
}
