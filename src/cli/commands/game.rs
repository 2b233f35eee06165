//! `create-game`: answer the server's design questions until the game exists.

use gamesmith_core::{
    GameBuilder, PromptSurface, TemplateCatalog, Transport, WizardError, WizardEvent,
};
use gamesmith_domain::{Question, Session, TemplateId};
use tracing::{info, warn};

use crate::cli::commands::{CliContext, ParsedArgs};
use crate::cli::error::CommandError;
use crate::cli::interaction::{AnswerInput, Interaction};
use crate::cli::output;
use crate::cli::surface::TerminalSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Completed,
    Cancelled,
}

pub fn run_command<I>(
    ctx: &mut CliContext,
    args: &ParsedArgs,
    interaction: &mut I,
) -> Result<(), CommandError>
where
    I: Interaction + ?Sized,
{
    if args.positional.len() > 1 {
        return Err(CommandError::InvalidArguments(
            "Usage: gamesmith create-game [templateId] [--user <id>]".into(),
        ));
    }
    let user = ctx.resolve_user(args.user.as_deref())?;
    let mut transport = ctx.transport()?;

    let template = match args.positional.first() {
        Some(id) => TemplateId::new(id.clone()),
        None => match pick_template(&mut transport, interaction)? {
            Some(id) => id,
            None => {
                output::info("No template selected.");
                return Ok(());
            }
        },
    };

    if let Err(err) = remember_template(ctx, &template) {
        warn!(error = %err, "could not remember the last template");
    }

    let session = Session::for_template(user, template);
    let mut builder = GameBuilder::new(transport);
    let mut surface = TerminalSurface::new();
    output::section(format!("New game from template {}", session_template(&session)));
    run_wizard(&mut builder, &session, interaction, &mut surface)?;
    Ok(())
}

/// Records `template` in the config file. Starts from the stored values so
/// environment overrides active for this run stay out of the file.
fn remember_template(ctx: &mut CliContext, template: &TemplateId) -> Result<(), CommandError> {
    let mut stored = ctx.manager.load()?;
    stored.last_template_id = Some(template.as_str().to_string());
    ctx.manager.save(&stored)?;
    ctx.config.last_template_id = stored.last_template_id;
    Ok(())
}

fn session_template(session: &Session) -> &str {
    session.template_id.as_ref().map(TemplateId::as_str).unwrap_or("-")
}

/// Lists the catalog and lets the user choose; `None` if they back out.
pub fn pick_template<T, I>(
    transport: &mut T,
    interaction: &mut I,
) -> Result<Option<TemplateId>, CommandError>
where
    T: Transport + ?Sized,
    I: Interaction + ?Sized,
{
    let templates = TemplateCatalog::list(transport)?;
    if templates.is_empty() {
        return Err(CommandError::Message(
            "The server has no templates yet. Create one with `gamesmith create-template`."
                .into(),
        ));
    }
    let labels: Vec<String> = templates
        .iter()
        .map(|template| match &template.genre {
            Some(genre) => format!("{} ({genre})", template.title),
            None => template.title.clone(),
        })
        .collect();
    let choice = interaction.select("Pick a template", &labels)?;
    Ok(choice.map(|index| templates[index].id.clone()))
}

/// Drives one builder from start to completion or cancellation.
///
/// Empty and rejected answers re-prompt the same question. Server failures
/// during submit are shown and the same answer can be retried or changed.
pub fn run_wizard<T, I, S>(
    builder: &mut GameBuilder<T>,
    session: &Session,
    interaction: &mut I,
    surface: &mut S,
) -> Result<GameOutcome, CommandError>
where
    T: Transport,
    I: Interaction + ?Sized,
    S: PromptSurface + ?Sized,
{
    start_with_retry(builder, session, interaction, surface)?;

    loop {
        let question = builder
            .current_question()
            .cloned()
            .unwrap_or_else(|| Question::new(""));

        match interaction.answer(&question)? {
            AnswerInput::Cancel => match builder.cancel(session, surface) {
                Ok(_) => return Ok(GameOutcome::Cancelled),
                Err(WizardError::Api(_)) => continue,
                Err(err) => return Err(err.into()),
            },
            AnswerInput::Value(value) => {
                builder.set_answer(value)?;
                match builder.submit(session, surface) {
                    Ok(WizardEvent::Completed) => {
                        info!("game created");
                        return Ok(GameOutcome::Completed);
                    }
                    Ok(_) => {}
                    Err(WizardError::Validation(_) | WizardError::Api(_)) => {}
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }
}

fn start_with_retry<T, I, S>(
    builder: &mut GameBuilder<T>,
    session: &Session,
    interaction: &mut I,
    surface: &mut S,
) -> Result<(), CommandError>
where
    T: Transport,
    I: Interaction + ?Sized,
    S: PromptSurface + ?Sized,
{
    loop {
        match builder.start(session, surface) {
            Ok(_) => return Ok(()),
            Err(err @ WizardError::StartFailed(_)) => {
                if !interaction.confirm("Try starting again?", false)? {
                    return Err(err.into());
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}
