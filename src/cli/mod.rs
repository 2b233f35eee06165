//! Terminal front end: argument dispatch, prompts and colored output.

pub mod commands;
pub mod error;
pub mod interaction;
pub mod io;
pub mod output;
pub mod script;
pub mod surface;

pub use commands::run;
pub use error::CommandError;
