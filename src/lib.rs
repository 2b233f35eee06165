//! Gamesmith is a terminal client for a game-creation server: it walks a
//! user through the server's design questions and authors new templates from
//! genre defaults.

pub mod cli;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("gamesmith tracing initialized");
    });
}
