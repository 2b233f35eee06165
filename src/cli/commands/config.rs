//! `config show` and `config set <key> <value>`.

use gamesmith_config::KEYS;
use strsim::levenshtein;

use crate::cli::commands::CliContext;
use crate::cli::error::CommandError;
use crate::cli::output;

pub fn run_command(ctx: &mut CliContext, args: &[String]) -> Result<(), CommandError> {
    match args {
        [] => Err(CommandError::InvalidArguments(
            "Usage: gamesmith config <show|set <key> <value>>".into(),
        )),
        [action] if action == "show" => {
            for line in show_lines(ctx)? {
                println!("{line}");
            }
            Ok(())
        }
        [action, key, value] if action == "set" => set(ctx, key, value),
        [action, ..] if action == "set" => Err(CommandError::InvalidArguments(
            "Usage: gamesmith config set <key> <value>".into(),
        )),
        [other, ..] => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Use `show` or `set`."
        ))),
    }
}

/// Effective settings, environment overrides included.
pub fn show_lines(ctx: &CliContext) -> Result<Vec<String>, CommandError> {
    let mut lines = vec![format!("config_file = {}", ctx.manager.config_path().display())];
    for key in KEYS {
        lines.push(format!("{key} = {}", ctx.config.value_of(key)?));
    }
    Ok(lines)
}

/// Writes one key to the config file. Only the stored values are saved, so an
/// environment override active for this run never leaks into the file.
pub fn set(ctx: &mut CliContext, key: &str, value: &str) -> Result<(), CommandError> {
    if !KEYS.contains(&key) {
        let mut message = format!("Unknown configuration key `{key}`.");
        if let Some(best) = closest_key(key) {
            message.push_str(&format!(" Did you mean `{best}`?"));
        }
        return Err(CommandError::InvalidArguments(message));
    }

    let mut stored = ctx.manager.load()?;
    stored.set_value(key, value)?;
    ctx.manager.save(&stored)?;
    ctx.config.set_value(key, value)?;
    output::success(format!("{key} = {}", stored.value_of(key)?));
    Ok(())
}

fn closest_key(input: &str) -> Option<&'static str> {
    KEYS.iter()
        .map(|key| (levenshtein(key, input), *key))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, key)| key)
}
