//! gamesmith-domain
//!
//! Pure value types for the design wizards (sessions, prompts, attribute maps,
//! wire payloads). No I/O, no CLI, no transport.

pub mod attributes;
pub mod prompt;
pub mod session;
pub mod wire;

pub use attributes::*;
pub use prompt::*;
pub use session::*;
pub use wire::*;
