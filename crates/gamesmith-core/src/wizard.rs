//! Game builder wizard: the question/answer exchange that turns a template
//! into a game.
//!
//! The server poses design questions one at a time. Each answer is either
//! accepted with a follow-up question (200), accepted as the last one (201),
//! or refused (400), in which case the same prompt stays open for a retry.

use std::fmt;

use gamesmith_domain::{
    CancelBuilderRequest, CreateBuilderRequest, DesignChoiceRequest, DesignQuestionResponse,
    PromptHistory, Question, Session,
};
use tracing::{debug, info, warn};

use crate::error::{ApiError, WizardError};
use crate::surface::{Notice, PromptSurface};
use crate::transport::{endpoints, ApiRequest, ApiResponse, Transport};

pub const EMPTY_ANSWER_MESSAGE: &str = "The input is invalid. Please re-enter";
pub const REJECTED_ANSWER_MESSAGE: &str = "The input is invalid. Please re-enter";
pub const COMPLETED_MESSAGE: &str = "Successfully created game";
pub const CANCELLED_MESSAGE: &str = "Game builder cancelled";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardState {
    Idle,
    AwaitingAnswer,
    Submitting,
    /// The last answer was refused; its prompt is still open.
    Rejected,
    Completed,
    Cancelled,
}

impl WizardState {
    fn accepts_answers(self) -> bool {
        matches!(self, WizardState::AwaitingAnswer | WizardState::Rejected)
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardState::Idle => "idle",
            WizardState::AwaitingAnswer => "awaiting an answer",
            WizardState::Submitting => "submitting",
            WizardState::Rejected => "awaiting a corrected answer",
            WizardState::Completed => "completed",
            WizardState::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Outcome of a wizard operation that reached the server successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardEvent {
    Started { question: Question },
    Advanced { question: Question },
    Rejected { message: String },
    Completed,
    Cancelled,
}

/// Drives one game-building session over a dedicated transport.
pub struct GameBuilder<T> {
    transport: T,
    state: WizardState,
    history: PromptHistory,
}

impl<T: Transport> GameBuilder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: WizardState::Idle,
            history: PromptHistory::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn history(&self) -> &PromptHistory {
        &self.history
    }

    /// Question bound to the open prompt, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.history.open().map(|record| &record.question)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, WizardState::Completed | WizardState::Cancelled)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Opens a builder for `session.template_id` and renders the first
    /// question.
    pub fn start<S>(
        &mut self,
        session: &Session,
        surface: &mut S,
    ) -> Result<WizardEvent, WizardError>
    where
        S: PromptSurface + ?Sized,
    {
        if !matches!(self.state, WizardState::Idle | WizardState::Cancelled) {
            return Err(self.invalid("start"));
        }
        let template_id = session
            .template_id
            .clone()
            .ok_or(WizardError::MissingTemplate)?;

        info!(template = %template_id, user = %session.user_id, "starting game builder");
        let body = CreateBuilderRequest {
            template_id,
            user_id: session.user_id.clone(),
        };
        let question = match self.request_first_question(&body) {
            Ok(question) => question,
            Err(err) => {
                warn!(error = %err, "game builder did not start");
                surface.notify(Notice::Error(format!(
                    "Could not start the game builder: {err}"
                )));
                return Err(WizardError::StartFailed(err));
            }
        };

        self.history.clear();
        self.present(question.clone(), surface)?;
        self.state = WizardState::AwaitingAnswer;
        Ok(WizardEvent::Started { question })
    }

    /// Binds `value` to the open prompt.
    pub fn set_answer(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        if !self.state.accepts_answers() {
            return Err(self.invalid("edit the answer"));
        }
        self.history.set_answer(value)?;
        Ok(())
    }

    /// Sends the open prompt's answer and applies the server's verdict.
    pub fn submit<S>(
        &mut self,
        session: &Session,
        surface: &mut S,
    ) -> Result<WizardEvent, WizardError>
    where
        S: PromptSurface + ?Sized,
    {
        let resume = self.state;
        if !resume.accepts_answers() {
            return Err(self.invalid("submit"));
        }
        let Some(open) = self.history.open() else {
            return Err(self.invalid("submit"));
        };
        if open.answer.is_empty() {
            surface.notify(Notice::Validation(EMPTY_ANSWER_MESSAGE.into()));
            return Err(WizardError::Validation(EMPTY_ANSWER_MESSAGE.into()));
        }

        let body = DesignChoiceRequest {
            user_id: session.user_id.clone(),
            design_choice: open.answer.value.clone(),
        };
        debug!(prompt = open.index, "submitting design choice");
        self.state = WizardState::Submitting;

        let request = ApiRequest::post_json(endpoints::MAKE_DESIGN_CHOICE, &body);
        let response = match self.exchange(request) {
            Ok(response) => response,
            Err(err) => {
                self.state = resume;
                surface.notify(Notice::Error(err.to_string()));
                return Err(err.into());
            }
        };
        self.apply_choice_response(response, resume, surface)
    }

    /// Discards the server-side builder and clears every prompt.
    ///
    /// Cancel is a separate request, never an abort of a pending submit. A
    /// submit holds `&mut self` for its whole exchange, so the two cannot
    /// overlap on one builder.
    pub fn cancel<S>(
        &mut self,
        session: &Session,
        surface: &mut S,
    ) -> Result<WizardEvent, WizardError>
    where
        S: PromptSurface + ?Sized,
    {
        if matches!(
            self.state,
            WizardState::Completed | WizardState::Cancelled | WizardState::Submitting
        ) {
            return Err(self.invalid("cancel"));
        }

        let body = CancelBuilderRequest {
            user_id: session.user_id.clone(),
        };
        let outcome = self
            .exchange(ApiRequest::post_json(endpoints::CANCEL_BUILDER, &body))
            .and_then(|response| match response.status {
                200 => Ok(()),
                _ => Err(response.into_error()),
            });
        if let Err(err) = outcome {
            warn!(error = %err, "cancel request failed");
            surface.notify(Notice::Error(format!(
                "Could not cancel the game builder: {err}"
            )));
            return Err(err.into());
        }

        info!(user = %session.user_id, "game builder cancelled");
        self.history.clear();
        surface.reset();
        self.state = WizardState::Cancelled;
        surface.notify(Notice::Info(CANCELLED_MESSAGE.into()));
        Ok(WizardEvent::Cancelled)
    }

    fn request_first_question(
        &mut self,
        body: &CreateBuilderRequest,
    ) -> Result<Question, ApiError> {
        let response = self.exchange(ApiRequest::post_json(endpoints::CREATE_BUILDER, body))?;
        match response.status {
            200 | 201 => {
                let payload: DesignQuestionResponse = response.decode()?;
                Ok(Question::new(payload.design_question))
            }
            _ => Err(response.into_error()),
        }
    }

    fn apply_choice_response<S>(
        &mut self,
        response: ApiResponse,
        resume: WizardState,
        surface: &mut S,
    ) -> Result<WizardEvent, WizardError>
    where
        S: PromptSurface + ?Sized,
    {
        match response.status {
            200 => {
                let payload: DesignQuestionResponse = match response.decode() {
                    Ok(payload) => payload,
                    Err(err) => {
                        self.state = resume;
                        surface.notify(Notice::Error(err.to_string()));
                        return Err(err.into());
                    }
                };
                let question = Question::new(payload.design_question);
                self.lock_open(surface)?;
                self.present(question.clone(), surface)?;
                self.state = WizardState::AwaitingAnswer;
                Ok(WizardEvent::Advanced { question })
            }
            201 => {
                self.lock_open(surface)?;
                self.state = WizardState::Completed;
                info!(prompts = self.history.len(), "game created");
                surface.notify(Notice::Success(COMPLETED_MESSAGE.into()));
                Ok(WizardEvent::Completed)
            }
            400 => {
                self.state = WizardState::Rejected;
                debug!(body = %response.body.trim(), "design choice rejected");
                surface.notify(Notice::Validation(REJECTED_ANSWER_MESSAGE.into()));
                Ok(WizardEvent::Rejected {
                    message: REJECTED_ANSWER_MESSAGE.into(),
                })
            }
            status => {
                self.state = resume;
                warn!(status, "unexpected response to design choice");
                let err = response.into_error();
                surface.notify(Notice::Error(err.to_string()));
                Err(err.into())
            }
        }
    }

    fn exchange(&mut self, request: Result<ApiRequest, ApiError>) -> Result<ApiResponse, ApiError> {
        let request = request?;
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.send(request)?;
        debug!(status = response.status, "response received");
        Ok(response)
    }

    fn present<S>(&mut self, question: Question, surface: &mut S) -> Result<(), WizardError>
    where
        S: PromptSurface + ?Sized,
    {
        self.history.push(question)?;
        if let Some(record) = self.history.open() {
            surface.render_prompt(record);
        }
        Ok(())
    }

    fn lock_open<S>(&mut self, surface: &mut S) -> Result<(), WizardError>
    where
        S: PromptSurface + ?Sized,
    {
        let index = self.history.lock_open()?;
        surface.lock_prompt(&self.history.records()[index]);
        Ok(())
    }

    fn invalid(&self, operation: &'static str) -> WizardError {
        WizardError::InvalidState {
            operation,
            state: self.state,
        }
    }
}
