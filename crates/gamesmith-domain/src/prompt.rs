//! Design questions, answers, and the append-only prompt log.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single server-posed design question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Free text typed by the user for the open question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub value: String,
}

impl Answer {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Only a zero-length answer is empty; whitespace is left for the
    /// server to judge.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// One rendered question plus its answer slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptRecord {
    pub index: usize,
    pub question: Question,
    pub answer: Answer,
    pub locked: bool,
}

/// Reasons a history mutation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryError {
    /// Every record is locked (or the log is empty).
    NoOpenPrompt,
    /// A new question was pushed while the previous one is still open.
    PromptStillOpen,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NoOpenPrompt => f.write_str("no open prompt"),
            HistoryError::PromptStillOpen => f.write_str("previous prompt is still open"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Ordered log of rendered prompts.
///
/// Records are only ever appended. At most one record is open and it is
/// always the last one; locked records never change again.
#[derive(Clone, Debug, Default)]
pub struct PromptHistory {
    records: Vec<PromptRecord>,
}

impl PromptHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `question` as the new open prompt and returns its index.
    pub fn push(&mut self, question: Question) -> Result<usize, HistoryError> {
        if self.open().is_some() {
            return Err(HistoryError::PromptStillOpen);
        }
        let index = self.records.len();
        self.records.push(PromptRecord {
            index,
            question,
            answer: Answer::default(),
            locked: false,
        });
        Ok(index)
    }

    pub fn open(&self) -> Option<&PromptRecord> {
        self.records.last().filter(|record| !record.locked)
    }

    /// Replaces the answer bound to the open prompt.
    pub fn set_answer(&mut self, value: impl Into<String>) -> Result<(), HistoryError> {
        let record = self.open_mut().ok_or(HistoryError::NoOpenPrompt)?;
        record.answer = Answer::new(value);
        Ok(())
    }

    /// Makes the open prompt read-only and returns its index.
    pub fn lock_open(&mut self) -> Result<usize, HistoryError> {
        let record = self.open_mut().ok_or(HistoryError::NoOpenPrompt)?;
        record.locked = true;
        Ok(record.index)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn locked_count(&self) -> usize {
        self.records.iter().filter(|record| record.locked).count()
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    fn open_mut(&mut self) -> Option<&mut PromptRecord> {
        self.records.last_mut().filter(|record| !record.locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_prompt_is_open() {
        let mut history = PromptHistory::new();
        history.push(Question::new("Choose a setting")).unwrap();
        assert_eq!(
            history.push(Question::new("Second")),
            Err(HistoryError::PromptStillOpen)
        );

        history.set_answer("Medieval").unwrap();
        assert_eq!(history.lock_open(), Ok(0));
        assert_eq!(history.push(Question::new("Second")), Ok(1));

        assert_eq!(history.open().map(|record| record.index), Some(1));
        assert_eq!(history.records()[0].answer.value, "Medieval");
        assert_eq!(history.locked_count(), 1);
    }

    #[test]
    fn locked_prompts_refuse_edits() {
        let mut history = PromptHistory::new();
        assert_eq!(history.set_answer("x"), Err(HistoryError::NoOpenPrompt));

        history.push(Question::new("Q")).unwrap();
        history.set_answer("A").unwrap();
        history.lock_open().unwrap();

        assert_eq!(history.set_answer("B"), Err(HistoryError::NoOpenPrompt));
        assert_eq!(history.lock_open(), Err(HistoryError::NoOpenPrompt));
        assert_eq!(history.records()[0].answer.value, "A");
    }

    #[test]
    fn only_zero_length_answers_are_empty() {
        assert!(Answer::new("").is_empty());
        assert!(!Answer::new("  \t").is_empty());
        assert!(!Answer::new(" Medieval ").is_empty());
    }
}
