//! Non-interactive input read from `GAMESMITH_SCRIPT_INPUTS`.
//!
//! The variable holds `|`-separated tokens consumed one per prompt:
//!
//! * answers and text: the literal value, `<BLANK>` for an empty line,
//!   `<CANCEL>` to cancel the wizard, `<KEEP>` to keep the initial text
//! * confirmations: `y`/`yes`/`n`/`no`, or `<KEEP>` for the default
//! * single choice: a 1-based position or an exact item label, `<ESC>` to back out
//! * checklists: comma-separated labels, `<NONE>`, or `<KEEP>`
//!
//! Each consumed token is echoed so transcripts read like a session.

use std::collections::VecDeque;
use std::env;

use gamesmith_domain::Question;

use crate::cli::error::CommandError;
use crate::cli::interaction::{AnswerInput, Interaction};
use crate::cli::output;

pub const SCRIPT_ENV: &str = "GAMESMITH_SCRIPT_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Value(String),
    Keep,
    Cancel,
    Escape,
    None,
}

fn parse_token(raw: &str) -> Token {
    match raw.to_ascii_uppercase().as_str() {
        "<BLANK>" | "<EMPTY>" => Token::Value(String::new()),
        "<KEEP>" => Token::Keep,
        "<CANCEL>" => Token::Cancel,
        "<ESC>" | "<ESCAPE>" => Token::Escape,
        "<NONE>" => Token::None,
        _ => Token::Value(raw.to_string()),
    }
}

#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    inputs: VecDeque<Token>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            inputs: inputs
                .into_iter()
                .map(|raw| parse_token(raw.as_ref().trim()))
                .collect(),
        }
    }

    /// `None` unless the environment variable is set.
    pub fn from_env() -> Option<Self> {
        env::var(SCRIPT_ENV).ok().map(|raw| Self::parse(&raw))
    }

    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split('|').map(str::trim).filter(|segment| !segment.is_empty()))
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    fn next(&mut self, label: &str) -> Result<Token, CommandError> {
        self.inputs
            .pop_front()
            .ok_or_else(|| CommandError::ScriptExhausted(label.to_string()))
    }

    fn unexpected(label: &str, token: &Token) -> CommandError {
        CommandError::InvalidArguments(format!(
            "Scripted input {token:?} does not fit `{label}`"
        ))
    }
}

impl Interaction for ScriptedInteraction {
    fn answer(&mut self, question: &Question) -> Result<AnswerInput, CommandError> {
        let answer = match self.next(&question.text)? {
            Token::Value(value) => AnswerInput::parse(&value),
            Token::Cancel | Token::Escape => AnswerInput::Cancel,
            other => return Err(Self::unexpected(&question.text, &other)),
        };
        match &answer {
            AnswerInput::Value(value) => output::info(format!("Answer: {value}")),
            AnswerInput::Cancel => output::info("Answer: :cancel"),
        }
        Ok(answer)
    }

    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CommandError> {
        let value = match self.next(prompt)? {
            Token::Value(value) => value,
            Token::Keep => initial.to_string(),
            other => return Err(Self::unexpected(prompt, &other)),
        };
        output::info(format!("{prompt}: {value}"));
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        let token = self.next(prompt)?;
        let choice = match &token {
            Token::Keep => default,
            Token::Value(value) => match value.to_ascii_lowercase().as_str() {
                "y" | "yes" | "true" => true,
                "n" | "no" | "false" => false,
                _ => return Err(Self::unexpected(prompt, &token)),
            },
            _ => return Err(Self::unexpected(prompt, &token)),
        };
        output::info(format!("{prompt} {}", if choice { "yes" } else { "no" }));
        Ok(choice)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, CommandError> {
        let token = self.next(prompt)?;
        let choice = match &token {
            Token::Escape | Token::Cancel => None,
            Token::Value(value) => {
                let by_position = value
                    .parse::<usize>()
                    .ok()
                    .filter(|position| (1..=items.len()).contains(position))
                    .map(|position| position - 1);
                let index = by_position.or_else(|| items.iter().position(|item| item == value));
                match index {
                    Some(index) => Some(index),
                    None => return Err(Self::unexpected(prompt, &token)),
                }
            }
            _ => return Err(Self::unexpected(prompt, &token)),
        };
        if let Some(index) = choice {
            output::info(format!("{prompt}: {}", items[index]));
        }
        Ok(choice)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[(String, bool)],
    ) -> Result<Vec<usize>, CommandError> {
        let token = self.next(prompt)?;
        let chosen = match &token {
            Token::None => Vec::new(),
            Token::Keep => items
                .iter()
                .enumerate()
                .filter(|(_, (_, checked))| *checked)
                .map(|(index, _)| index)
                .collect(),
            Token::Value(value) => {
                let mut chosen = Vec::new();
                for name in value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                {
                    match items.iter().position(|(item, _)| item == name) {
                        Some(index) => chosen.push(index),
                        None => return Err(Self::unexpected(prompt, &token)),
                    }
                }
                chosen
            }
            _ => return Err(Self::unexpected(prompt, &token)),
        };
        let names: Vec<&str> = chosen
            .iter()
            .map(|index| items[*index].0.as_str())
            .collect();
        output::info(format!("{prompt}: [{}]", names.join(", ")));
        Ok(chosen)
    }
}
