//! Thin wrappers over dialoguer prompts.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::cli::error::CommandError;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Free-form text; empty input is returned as-is so callers can validate it.
pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: &str,
) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Single choice; `None` when the user pressed Esc.
pub fn select_one(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}

/// Checklist; returns the indices left checked.
pub fn select_many(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[(String, bool)],
) -> Result<Vec<usize>, CommandError> {
    let mut select = MultiSelect::with_theme(theme).with_prompt(prompt);
    for (name, checked) in items {
        select = select.item_checked(name, *checked);
    }
    select.interact().map_err(CommandError::from)
}
