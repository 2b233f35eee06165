//! Where wizard prompts are drawn.

use gamesmith_domain::PromptRecord;

/// User-facing messages raised by the controllers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    /// Recoverable problem with what the user typed.
    Validation(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message)
            | Notice::Success(message)
            | Notice::Validation(message)
            | Notice::Error(message) => message,
        }
    }
}

/// Rendering surface driven by [`crate::GameBuilder`].
pub trait PromptSurface {
    /// Appends `record` as a new input prompt and focuses it.
    fn render_prompt(&mut self, record: &PromptRecord);

    /// Marks an answered prompt read-only.
    fn lock_prompt(&mut self, record: &PromptRecord);

    /// Drops every prompt, returning to the initial empty surface.
    fn reset(&mut self);

    fn notify(&mut self, notice: Notice);
}

/// Surface that keeps everything in memory. Useful headless and in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub prompts: Vec<PromptRecord>,
    pub locked: Vec<usize>,
    pub notices: Vec<Notice>,
    pub resets: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt_texts(&self) -> Vec<&str> {
        self.prompts
            .iter()
            .map(|record| record.question.text.as_str())
            .collect()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl PromptSurface for RecordingSurface {
    fn render_prompt(&mut self, record: &PromptRecord) {
        self.prompts.push(record.clone());
    }

    fn lock_prompt(&mut self, record: &PromptRecord) {
        self.locked.push(record.index);
        if let Some(prompt) = self.prompts.get_mut(record.index) {
            prompt.locked = true;
            prompt.answer = record.answer.clone();
        }
    }

    fn reset(&mut self) {
        self.prompts.clear();
        self.locked.clear();
        self.resets += 1;
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
