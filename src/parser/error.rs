//! Parser invocation errors.

/// Errors that can occur while invoking the external parser.
///
/// A parse that *runs* but rejects the input is not an error here; it
/// comes back as a [`super::ParseOutput`] and is judged by its text.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("parser command is empty")]
    EmptyCommand,

    #[error("failed to stage parser input: {0}")]
    Staging(#[from] std::io::Error),

    #[error("failed to launch parser '{program}': {source}. Is it installed?")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}
