use std::collections::VecDeque;

use fw::prompt::{PromptError, Prompter};

/// A prompter fed from a fixed script of answers.
///
/// Every question asked is recorded; running out of answers returns
/// `PromptError::Closed`, which doubles as an assertion that no unexpected
/// re-prompt happened.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Every prompt string asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of scripted answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }
}
