//! Command dispatch for the `gamesmith` binary.

pub mod config;
pub mod game;
pub mod template;
pub mod templates;

use std::env;
use std::path::PathBuf;

use gamesmith_config::{Config, ConfigManager};
use gamesmith_domain::UserId;
use gamesmith_http::{HttpSettings, HttpTransport};
use strsim::levenshtein;
use tracing::debug;

use crate::cli::error::CommandError;
use crate::cli::interaction::{Interaction, TerminalInteraction};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::script::ScriptedInteraction;
use crate::utils::build_info;

/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "GAMESMITH_CONFIG_DIR";

pub const COMMANDS: [&str; 6] = [
    "create-game",
    "create-template",
    "templates",
    "config",
    "help",
    "version",
];

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Loaded configuration plus where it came from.
pub struct CliContext {
    pub config: Config,
    pub manager: ConfigManager,
}

impl CliContext {
    /// Reads the stored config and layers `GAMESMITH_*` overrides on top.
    pub fn load() -> Result<Self, CommandError> {
        let manager = match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => ConfigManager::with_base_dir(PathBuf::from(dir))?,
            None => ConfigManager::default_location()?,
        };
        let mut config = manager.load()?;
        config.apply_env()?;
        debug!(
            path = %manager.config_path().display(),
            server = %config.server_url,
            "configuration loaded"
        );
        Ok(Self { config, manager })
    }

    pub fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled,
            plain_output: self.config.accessibility.plain_output,
        });
        if !self.config.ui_color_enabled || self.config.accessibility.plain_output {
            colored::control::set_override(false);
        }
    }

    pub fn transport(&self) -> Result<HttpTransport, CommandError> {
        let transport = HttpTransport::new(HttpSettings {
            base_url: self.config.server_url.clone(),
            timeout: self.config.request_timeout(),
        })?;
        Ok(transport)
    }

    /// `--user` wins over the configured id.
    pub fn resolve_user(&self, flag: Option<&str>) -> Result<UserId, CommandError> {
        flag.map(str::to_string)
            .or_else(|| self.config.user_id.clone())
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(UserId::new)
            .ok_or(CommandError::MissingUser)
    }
}

/// Positional arguments with the `--user` flag pulled out.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub positional: Vec<String>,
    pub user: Option<String>,
}

pub fn parse_args<I>(args: I) -> Result<ParsedArgs, CommandError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = ParsedArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--user" {
            let value = args.next().ok_or_else(|| {
                CommandError::InvalidArguments("`--user` expects a value".into())
            })?;
            parsed.user = Some(value);
        } else if let Some(value) = arg.strip_prefix("--user=") {
            parsed.user = Some(value.to_string());
        } else if arg.starts_with("--") {
            return Err(CommandError::InvalidArguments(format!("Unknown option `{arg}`")));
        } else {
            parsed.positional.push(arg);
        }
    }
    Ok(parsed)
}

/// Closest known command within a small edit distance.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|name| (levenshtein(name, input), *name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, name)| name)
}

pub fn usage() -> String {
    [
        "Usage:",
        "  gamesmith create-game [templateId] [--user <id>]",
        "  gamesmith create-template <genre> [--user <id>]",
        "  gamesmith templates",
        "  gamesmith config show",
        "  gamesmith config set <key> <value>",
        "  gamesmith version",
        "",
        "During create-game type `:cancel` at any answer prompt to discard the game.",
    ]
    .join("\n")
}

fn interaction() -> Box<dyn Interaction> {
    match ScriptedInteraction::from_env() {
        Some(script) => Box::new(script),
        None => Box::new(TerminalInteraction::new()),
    }
}

/// Entry point shared by the binary; `args` excludes the program name.
pub fn run(args: Vec<String>) -> Result<(), CommandError> {
    let mut args = args.into_iter();
    let Some(command) = args.next() else {
        println!("{}", usage());
        return Err(CommandError::InvalidArguments("No command given".into()));
    };

    match command.as_str() {
        "help" | "-h" | "--help" => {
            println!("{}", usage());
            Ok(())
        }
        "version" | "-V" | "--version" => {
            println!("{}", build_info::current().version_line());
            Ok(())
        }
        "create-game" => {
            let parsed = parse_args(args)?;
            let mut ctx = CliContext::load()?;
            ctx.apply_output_preferences();
            game::run_command(&mut ctx, &parsed, interaction().as_mut())
        }
        "create-template" => {
            let parsed = parse_args(args)?;
            let ctx = CliContext::load()?;
            ctx.apply_output_preferences();
            template::run_command(&ctx, &parsed, interaction().as_mut())
        }
        "templates" => {
            let ctx = CliContext::load()?;
            ctx.apply_output_preferences();
            templates::run_command(&ctx)
        }
        "config" => {
            let parsed = parse_args(args)?;
            let mut ctx = CliContext::load()?;
            ctx.apply_output_preferences();
            config::run_command(&mut ctx, &parsed.positional)
        }
        other => {
            let mut message = format!("Unknown command `{other}`.");
            if let Some(best) = suggest_command(other) {
                message.push_str(&format!(" Did you mean `{best}`?"));
            }
            Err(CommandError::InvalidArguments(message))
        }
    }
}
