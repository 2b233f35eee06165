//! How commands obtain input: from a terminal, or from a script in tests and
//! automation.

use dialoguer::theme::ColorfulTheme;
use gamesmith_domain::Question;

use crate::cli::error::CommandError;
use crate::cli::io;

/// Typed at an answer prompt to abandon the wizard.
pub const CANCEL_COMMAND: &str = ":cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    Value(String),
    Cancel,
}

impl AnswerInput {
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == CANCEL_COMMAND {
            AnswerInput::Cancel
        } else {
            AnswerInput::Value(raw.to_string())
        }
    }
}

pub trait Interaction {
    fn answer(&mut self, question: &Question) -> Result<AnswerInput, CommandError>;

    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CommandError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CommandError>;

    /// `None` means the user backed out without choosing.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, CommandError>;

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[(String, bool)],
    ) -> Result<Vec<usize>, CommandError>;
}

/// Interactive implementation backed by dialoguer.
pub struct TerminalInteraction {
    theme: ColorfulTheme,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for TerminalInteraction {
    fn answer(&mut self, _question: &Question) -> Result<AnswerInput, CommandError> {
        let prompt = format!("Answer ({CANCEL_COMMAND} to cancel)");
        let raw = io::prompt_text(&self.theme, &prompt, "")?;
        Ok(AnswerInput::parse(&raw))
    }

    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CommandError> {
        io::prompt_text(&self.theme, prompt, initial)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        io::confirm_action(&self.theme, prompt, default)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, CommandError> {
        io::select_one(&self.theme, prompt, items)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[(String, bool)],
    ) -> Result<Vec<usize>, CommandError> {
        io::select_many(&self.theme, prompt, items)
    }
}
