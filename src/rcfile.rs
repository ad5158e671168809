use scalc::{evaluate, Session};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::terminal::strip_comment;

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Evaluate ~/.scalcrc if it exists
pub(crate) fn load_scalcrc(session: &mut Session) {
    let rc_path = match dirs_home() {
        Some(home) => home.join(".scalcrc"),
        None => return,
    };

    let content = match fs::read_to_string(&rc_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    let loaded = load_rc_content(session, &content, "~/.scalcrc");
    debug!(path = %rc_path.display(), loaded, "loaded rc file");
}

/// Evaluate rc content line by line. Bindings land in the environment but
/// not in the calculation history. Returns the number of lines that
/// evaluated successfully.
pub(crate) fn load_rc_content(session: &mut Session, content: &str, source: &str) -> usize {
    let mut loaded = 0;

    for (line_num, line) in content.lines().enumerate() {
        let code = strip_comment(line).trim();

        // Skip empty lines and comment-only lines
        if code.is_empty() {
            continue;
        }

        match evaluate(code, session.env_mut()) {
            Ok(_) => loaded += 1,
            Err(e) => eprintln!("Warning: {} line {}: {}", source, line_num + 1, e),
        }
    }

    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_content_defines_variables() {
        let mut session = Session::new();
        let content = "# constants\ng = 9.81\n\nhalf = 1 / 2  # inline\nbad = nope\n";
        let loaded = load_rc_content(&mut session, content, "test");
        assert_eq!(loaded, 2);
        assert_eq!(session.env().get("g"), Some(9.81));
        assert_eq!(session.env().get("half"), Some(0.5));
        assert!(!session.env().contains("bad"));
        assert!(session.history().is_empty());
    }
}
