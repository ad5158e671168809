use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper, Result as RlResult};
use scalc::{Function, Session};

use crate::cli::{Settings, VERSION};
use crate::rcfile::{dirs_home, load_scalcrc};
use crate::terminal::execute_line;

const DOT_COMMANDS: [&str; 7] = [
    ".help",
    ".vars",
    ".history",
    ".clear-history",
    ".clear-vars",
    ".rpn",
    ".convert",
];

/// Tab completion for function names, variables and dot commands
struct CalcHelper {
    /// Variable names, refreshed before each prompt
    variables: Vec<String>,
}

impl Helper for CalcHelper {}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];

        if before.starts_with('.') && !before.contains(char::is_whitespace) {
            let pairs = DOT_COMMANDS
                .iter()
                .filter(|c| c.starts_with(before))
                .map(|c| pair(c))
                .collect();
            return Ok((0, pairs));
        }

        // Find the word being completed
        let start = before
            .rfind(|c: char| !c.is_ascii_alphabetic())
            .map(|i| i + 1)
            .unwrap_or(0);
        let prefix = &before[start..];

        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }

        Ok((start, self.complete_word(prefix)))
    }
}

fn pair(candidate: &str) -> Pair {
    Pair {
        display: candidate.to_string(),
        replacement: candidate.to_string(),
    }
}

impl CalcHelper {
    fn complete_word(&self, prefix: &str) -> Vec<Pair> {
        let functions = Function::ALL
            .into_iter()
            .map(Function::name)
            .filter(|name| name.starts_with(prefix))
            .map(|name| pair(&format!("{}(", name)));
        let variables = self
            .variables
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| pair(name));
        functions.chain(variables).collect()
    }
}

impl Hinter for CalcHelper {
    type Hint = String;
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {}

/// Run the interactive REPL
pub(crate) fn run_repl(settings: &Settings) -> RlResult<()> {
    let mut rl: Editor<CalcHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CalcHelper {
        variables: Vec::new(),
    }));

    let mut session = Session::new();

    // Load ~/.scalcrc if it exists
    load_scalcrc(&mut session);

    // Line-editing history only; calculation history is never saved
    let history_path = dirs_home().map(|h| h.join(".scalc_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    if settings.banner {
        println!("scalc-{} - scientific expression calculator", VERSION);
        println!("  Type 'exit' or Ctrl-D to quit, '.help' for usage");
    }

    let prompt = "scalc> ";

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.variables = session.env().names().map(String::from).collect();
        }

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if matches!(trimmed, "exit" | "quit") {
                    break;
                }

                match execute_line(&mut session, trimmed, settings) {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - abandon the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|p| p.replacement).collect()
    }

    #[test]
    fn completes_functions_and_variables() {
        let helper = CalcHelper {
            variables: vec!["e".to_string(), "pi".to_string(), "speed".to_string()],
        };
        assert_eq!(replacements(helper.complete_word("s")), vec!["sin(", "sqrt(", "speed"]);
        assert_eq!(replacements(helper.complete_word("p")), vec!["pi"]);
        assert!(helper.complete_word("zz").is_empty());
    }
}
