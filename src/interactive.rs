use anyhow::{bail, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Asks for the target URL, falling back to `default` on empty input.
pub fn prompt_target(default: &str) -> Result<String> {
    let mut rl = DefaultEditor::new()?;

    match rl.readline("Enter target url: ") {
        Ok(line) => Ok(resolve_target(&line, default)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            bail!("No target given, exiting")
        }
        Err(err) => Err(err.into()),
    }
}

fn resolve_target(input: &str, default: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}
