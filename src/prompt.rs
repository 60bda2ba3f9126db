// src/prompt.rs

//! Line-based interactive prompting.
//!
//! Every interactive decision point in `fw` goes through the same loop:
//! print a question, read one line, re-ask until the answer parses. The
//! [`Prompter`] trait is the seam that lets tests script answers instead of
//! reading from stdin.

use std::io::{self, Write};

use thiserror::Error;

/// Errors from the interactive input side.
///
/// Re-prompting forever on a closed stdin would spin, so a closed input
/// stream is the one prompt failure that surfaces as an error.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("interactive input stream closed")]
    Closed,
    #[error("reading interactive input: {0}")]
    Io(#[from] io::Error),
}

/// Source of answers for interactive questions.
///
/// `ask` prints `prompt` (no trailing newline) and returns one line of input
/// with the line terminator stripped.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// The real prompter: writes to stdout, reads lines from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::Closed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Ask `question` until `parse` accepts the answer.
///
/// Unrecognized answers re-prompt indefinitely; there is no silent default.
pub fn prompt_until_valid<P, T, F>(
    prompter: &mut P,
    question: &str,
    parse: F,
) -> Result<T, PromptError>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let answer = prompter.ask(question)?;
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }
    }
}

/// Yes/no question where an empty answer means "no".
///
/// Accepts `y`, `n` and the empty string; anything else re-prompts.
pub fn confirm_default_no<P>(prompter: &mut P, question: &str) -> Result<bool, PromptError>
where
    P: Prompter + ?Sized,
{
    prompt_until_valid(prompter, question, |answer| match answer {
        "y" => Some(true),
        "n" | "" => Some(false),
        _ => None,
    })
}

/// Yes/no question with no default: only `y` or `n` are accepted.
pub fn confirm_strict<P>(prompter: &mut P, question: &str) -> Result<bool, PromptError>
where
    P: Prompter + ?Sized,
{
    prompt_until_valid(prompter, question, |answer| match answer {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    })
}

/// Print `message`, then collect lines entered at a `> ` prompt until the
/// first empty line. The empty line is consumed and not included.
pub fn read_lines_until_empty<P>(
    prompter: &mut P,
    message: &str,
) -> Result<Vec<String>, PromptError>
where
    P: Prompter + ?Sized,
{
    println!("{message}");
    let mut lines = Vec::new();
    loop {
        let line = prompter.ask("> ")?;
        if line.is_empty() {
            return Ok(lines);
        }
        lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    struct Scripted(VecDeque<&'static str>);

    impl Prompter for Scripted {
        fn ask(&mut self, _prompt: &str) -> Result<String, PromptError> {
            self.0
                .pop_front()
                .map(str::to_string)
                .ok_or(PromptError::Closed)
        }
    }

    #[test]
    fn confirm_default_no_accepts_empty_as_no() {
        let mut p = Scripted(VecDeque::from([""]));
        assert!(!confirm_default_no(&mut p, "? ").unwrap());
    }

    #[test]
    fn confirm_default_no_reprompts_on_garbage() {
        let mut p = Scripted(VecDeque::from(["yes", "maybe", "y"]));
        assert!(confirm_default_no(&mut p, "? ").unwrap());
    }

    #[test]
    fn confirm_strict_rejects_empty() {
        let mut p = Scripted(VecDeque::from(["", "", "n"]));
        assert!(!confirm_strict(&mut p, "? ").unwrap());
    }

    #[test]
    fn closed_input_is_an_error_not_a_default() {
        let mut p = Scripted(VecDeque::new());
        assert!(matches!(
            confirm_default_no(&mut p, "? "),
            Err(PromptError::Closed)
        ));
    }

    #[test]
    fn read_lines_stops_at_first_empty_line() {
        let mut p = Scripted(VecDeque::from(["echo a", "echo b", "", "echo c"]));
        let lines = read_lines_until_empty(&mut p, "commands:").unwrap();
        assert_eq!(lines, vec!["echo a".to_string(), "echo b".to_string()]);
    }
}
