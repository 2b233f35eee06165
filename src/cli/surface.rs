use gamesmith_core::{Notice, PromptSurface};
use gamesmith_domain::PromptRecord;

use crate::cli::output;

/// Prints the prompt log as it grows. Locked prompts are echoed with their
/// final answer; a reset prints a divider since scrollback cannot be erased.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    visible: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompts printed since the last reset.
    pub fn visible(&self) -> usize {
        self.visible
    }
}

impl PromptSurface for TerminalSurface {
    fn render_prompt(&mut self, record: &PromptRecord) {
        self.visible += 1;
        output::prompt(format!("Q{}: {}", record.index + 1, record.question.text));
    }

    fn lock_prompt(&mut self, record: &PromptRecord) {
        output::info(format!("Q{} answered: {}", record.index + 1, record.answer.value));
    }

    fn reset(&mut self) {
        self.visible = 0;
        output::section("Game builder reset");
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Info(message) => output::info(message),
            Notice::Success(message) => output::success(message),
            Notice::Validation(message) => output::warning(message),
            Notice::Error(message) => output::error(message),
        }
    }
}
