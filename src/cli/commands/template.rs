//! `create-template`: edit a genre's default attributes and save them as a
//! new template.

use gamesmith_core::{AttributeEditor, EditorError, TemplateCreated, Transport};
use tracing::info;

use crate::cli::commands::{CliContext, ParsedArgs};
use crate::cli::error::CommandError;
use crate::cli::interaction::Interaction;
use crate::cli::output;

pub const CREATED_MESSAGE: &str = "Successfully created template";
pub const INVALID_ATTRIBUTE_MESSAGE: &str = "There's an invalid attribute or value";

pub fn run_command<I>(
    ctx: &CliContext,
    args: &ParsedArgs,
    interaction: &mut I,
) -> Result<(), CommandError>
where
    I: Interaction + ?Sized,
{
    let [genre] = args.positional.as_slice() else {
        return Err(CommandError::InvalidArguments(
            "Usage: gamesmith create-template <genre> [--user <id>]".into(),
        ));
    };
    // Templates are not owned by a user server-side; the id only tags logs.
    let user = ctx.resolve_user(args.user.as_deref()).ok();
    info!(genre = %genre, user = ?user.as_ref().map(|id| id.as_str()), "authoring template");

    let mut transport = ctx.transport()?;
    run_editor(&mut transport, genre, interaction)?;
    Ok(())
}

/// Fetches defaults for `genre`, then edits and submits until the server
/// accepts the template or the user gives up.
pub fn run_editor<T, I>(
    transport: &mut T,
    genre: &str,
    interaction: &mut I,
) -> Result<TemplateCreated, CommandError>
where
    T: Transport + ?Sized,
    I: Interaction + ?Sized,
{
    let mut editor = match AttributeEditor::fetch(transport, genre) {
        Ok(editor) => editor,
        Err(err @ EditorError::InvalidGenre(_)) => {
            output::error("Invalid game genre.");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };
    output::section(format!("New {} template", editor.genre()));

    loop {
        edit_round(&mut editor, interaction)?;

        match editor.submit(transport) {
            Ok(created) => {
                output::success(format!("{CREATED_MESSAGE}: {}", created.title));
                return Ok(created);
            }
            Err(EditorError::Validation(message)) => output::warning(message),
            Err(EditorError::InvalidAttribute(detail)) => {
                if detail.is_empty() {
                    output::error(INVALID_ATTRIBUTE_MESSAGE);
                } else {
                    output::error(format!("{INVALID_ATTRIBUTE_MESSAGE}: {detail}"));
                }
            }
            Err(err) => return Err(err.into()),
        }

        if !interaction.confirm("Edit and submit again?", true)? {
            return Err(CommandError::Message("Template was not created.".into()));
        }
    }
}

fn edit_round<I>(editor: &mut AttributeEditor, interaction: &mut I) -> Result<(), CommandError>
where
    I: Interaction + ?Sized,
{
    let title = interaction.text("Template title", editor.title())?;
    editor.set_title(title);

    if editor.has_multiple_choice_flag() {
        let enabled = interaction.confirm("Allow multiple choice?", editor.multiple_choice())?;
        editor.set_multiple_choice(enabled)?;
    }

    let editable: Vec<(String, bool)> = editor
        .options()
        .iter()
        .filter(|option| option.enabled)
        .map(|option| (option.name.clone(), option.checked))
        .collect();

    if editable.is_empty() {
        if !editor.options().is_empty() {
            output::info("Attributes stay off while multiple choice is disabled.");
        }
        return Ok(());
    }

    let chosen = interaction.multi_select("Attributes", &editable)?;
    for (index, (name, _)) in editable.iter().enumerate() {
        editor.set_checked(name, chosen.contains(&index))?;
    }
    Ok(())
}
