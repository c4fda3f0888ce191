//! Helpers shared by the integration tests in `tests/tests/`.

use anyhow::{anyhow, Result};
use presentation::Prompter;
use std::collections::VecDeque;

/// One scripted answer for the next prompt.
#[derive(Debug, Clone)]
pub enum Answer {
    Pick(usize),
    Text(String),
    Yes,
    No,
}

/// Plays back canned answers and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub shown: Vec<String>,
    pub refreshes: usize,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.shown.iter().any(|s| s.contains(needle))
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of answers at {:?}", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String], _default: usize) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Pick(idx) if idx < items.len() => Ok(idx),
            other => Err(anyhow!("expected a pick among {:?} at {:?}, got {:?}", items, prompt, other)),
        }
    }

    fn input(&mut self, prompt: &str, _initial: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            other => Err(anyhow!("expected text at {:?}, got {:?}", prompt, other)),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => Err(anyhow!("expected yes/no at {:?}, got {:?}", prompt, other)),
        }
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}

pub fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}
