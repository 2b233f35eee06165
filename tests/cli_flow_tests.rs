mod common;

use common::{session, ScriptedTransport};
use gamesmith::cli::commands::game::{pick_template, run_wizard, GameOutcome};
use gamesmith::cli::commands::template::run_editor;
use gamesmith::cli::script::ScriptedInteraction;
use gamesmith::cli::CommandError;
use gamesmith_core::{EditorError, GameBuilder, Notice, RecordingSurface, WizardError, WizardState};
use gamesmith_domain::TemplateId;
use serde_json::json;

#[test]
fn wizard_reprompts_on_blank_and_rejected_answers() {
    let transport = ScriptedTransport::new()
        .question(200, "Choose a setting")
        .respond(400, "bad choice")
        .question(200, "Choose a villain")
        .respond(201, "");
    let mut builder = GameBuilder::new(transport);
    let mut surface = RecordingSurface::new();
    let mut script = ScriptedInteraction::new(["<BLANK>", "???", "Medieval", "Dragon"]);

    let outcome = run_wizard(&mut builder, &session(), &mut script, &mut surface).unwrap();

    assert_eq!(outcome, GameOutcome::Completed);
    assert_eq!(surface.prompt_texts(), vec!["Choose a setting", "Choose a villain"]);
    assert_eq!(surface.locked, vec![0, 1]);
    assert_eq!(
        builder.transport().paths(),
        vec![
            "/game/create-builder",
            "/game/make-design-choice",
            "/game/make-design-choice",
            "/game/make-design-choice",
        ]
    );
    assert_eq!(script.remaining(), 0);
}

#[test]
fn wizard_cancel_command_discards_the_game() {
    let transport = ScriptedTransport::new()
        .question(200, "Choose a setting")
        .respond(200, "");
    let mut builder = GameBuilder::new(transport);
    let mut surface = RecordingSurface::new();
    let mut script = ScriptedInteraction::new([":cancel"]);

    let outcome = run_wizard(&mut builder, &session(), &mut script, &mut surface).unwrap();

    assert_eq!(outcome, GameOutcome::Cancelled);
    assert_eq!(builder.state(), WizardState::Cancelled);
    assert_eq!(surface.resets, 1);
    assert_eq!(
        builder.transport().sent[1].body,
        Some(json!({"userID": "user-1"}))
    );
}

#[test]
fn wizard_offers_to_retry_a_failed_start() {
    let transport = ScriptedTransport::new()
        .respond(500, "busy")
        .question(200, "Choose a setting")
        .respond(201, "");
    let mut builder = GameBuilder::new(transport);
    let mut surface = RecordingSurface::new();
    let mut script = ScriptedInteraction::new(["yes", "Medieval"]);

    let outcome = run_wizard(&mut builder, &session(), &mut script, &mut surface).unwrap();
    assert_eq!(outcome, GameOutcome::Completed);
    assert!(matches!(surface.last_notice(), Some(Notice::Success(_))));
}

#[test]
fn wizard_gives_up_when_retry_is_declined() {
    let transport = ScriptedTransport::new().respond(404, "no template");
    let mut builder = GameBuilder::new(transport);
    let mut surface = RecordingSurface::new();
    let mut script = ScriptedInteraction::new(["no"]);

    let err = run_wizard(&mut builder, &session(), &mut script, &mut surface).unwrap_err();
    assert!(matches!(err, CommandError::Wizard(WizardError::StartFailed(_))));
}

#[test]
fn running_out_of_script_stops_the_wizard() {
    let transport = ScriptedTransport::new().question(200, "Choose a setting");
    let mut builder = GameBuilder::new(transport);
    let mut surface = RecordingSurface::new();
    let mut script = ScriptedInteraction::new(Vec::<String>::new());

    let err = run_wizard(&mut builder, &session(), &mut script, &mut surface).unwrap_err();
    assert!(matches!(err, CommandError::ScriptExhausted(label) if label == "Choose a setting"));
}

#[test]
fn template_picker_returns_the_chosen_id() {
    let mut transport = ScriptedTransport::new().respond(
        200,
        r#"[{"id":"7","title":"Capitals","genre":"QUIZ"},{"templateID":"9","title":"Dungeon"}]"#,
    );
    let mut script = ScriptedInteraction::new(["Dungeon"]);

    let picked = pick_template(&mut transport, &mut script).unwrap();
    assert_eq!(picked, Some(TemplateId::new("9")));
}

#[test]
fn template_picker_rejects_an_empty_catalog() {
    let mut transport = ScriptedTransport::new().respond(200, "[]");
    let mut script = ScriptedInteraction::new(Vec::<String>::new());
    assert!(matches!(
        pick_template(&mut transport, &mut script),
        Err(CommandError::Message(_))
    ));
}

#[test]
fn editor_submits_the_edited_checklist() {
    let mut transport = ScriptedTransport::new()
        .respond(
            200,
            concat!(
                r#"{"attrMap":{"title":"Untitled","multipleChoice":"false","#,
                r#""chooseAllThatApply":"false","hasScoreWeight":"true"}}"#,
            ),
        )
        .respond(201, "");
    let mut script = ScriptedInteraction::new(["Capitals", "yes", "chooseAllThatApply"]);

    let created = run_editor(&mut transport, "QUIZ", &mut script).unwrap();

    assert_eq!(created.title, "Capitals");
    assert_eq!(
        transport.sent[1].body,
        Some(json!({"attrMap": {
            "title": "Capitals",
            "multipleChoice": "true",
            "chooseAllThatApply": "true",
            "hasScoreWeight": "false"
        }}))
    );
}

#[test]
fn editor_skips_the_checklist_while_multiple_choice_is_off() {
    let mut transport = ScriptedTransport::new()
        .respond(
            200,
            concat!(
                r#"{"attrMap":{"title":"Untitled","#,
                r#""multipleChoice":"true","chooseAllThatApply":"true"}}"#,
            ),
        )
        .respond(201, "");
    let mut script = ScriptedInteraction::new(["<KEEP>", "no"]);

    run_editor(&mut transport, "QUIZ", &mut script).unwrap();
    assert_eq!(
        transport.sent[1].body,
        Some(json!({"attrMap": {
            "title": "Untitled",
            "multipleChoice": "false",
            "chooseAllThatApply": "false"
        }}))
    );
    assert_eq!(script.remaining(), 0);
}

#[test]
fn editor_resubmits_after_a_rejection() {
    let mut transport = ScriptedTransport::new()
        .respond(200, r#"{"attrMap":{"title":"Untitled","combat":"true"}}"#)
        .respond(400, "bad value")
        .respond(201, "");
    let mut script = ScriptedInteraction::new(["Arena", "<KEEP>", "yes", "Arena 2", "<NONE>"]);

    let created = run_editor(&mut transport, "RPG", &mut script).unwrap();
    assert_eq!(created.title, "Arena 2");
    assert_eq!(transport.paths()[1..], ["/template/create", "/template/create"]);
}

#[test]
fn editor_stops_when_resubmit_is_declined() {
    let mut transport = ScriptedTransport::new()
        .respond(200, r#"{"attrMap":{"title":"Untitled","combat":"true"}}"#)
        .respond(400, "bad value");
    let mut script = ScriptedInteraction::new(["Arena", "<KEEP>", "no"]);

    let err = run_editor(&mut transport, "RPG", &mut script).unwrap_err();
    assert!(matches!(err, CommandError::Message(_)));
}

#[test]
fn editor_reports_an_invalid_genre() {
    let mut transport = ScriptedTransport::new().respond(400, "Invalid genre");
    let mut script = ScriptedInteraction::new(Vec::<String>::new());
    let err = run_editor(&mut transport, "NOPE", &mut script).unwrap_err();
    assert!(matches!(err, CommandError::Editor(EditorError::InvalidGenre(_))));
}
