//! gamesmith-core
//!
//! Wizard controllers for building games and authoring templates.
//! Depends on gamesmith-domain. No terminal I/O and no concrete HTTP client:
//! requests go through the [`Transport`] trait and prompts through
//! [`PromptSurface`].

pub mod catalog;
pub mod editor;
pub mod error;
pub mod surface;
pub mod transport;
pub mod wizard;

pub use catalog::TemplateCatalog;
pub use editor::{AttributeEditor, AttributeOption, TemplateCreated};
pub use error::{ApiError, EditorError, TransportError, WizardError};
pub use surface::{Notice, PromptSurface, RecordingSurface};
pub use transport::{endpoints, ApiRequest, ApiResponse, Method, Transport};
pub use wizard::{GameBuilder, WizardEvent, WizardState};
