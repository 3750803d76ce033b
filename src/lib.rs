//! cclight - CCL syntax highlighting demo and parse verification.
//!
//! Colorizes a hard-coded CCL sample with a shallow per-line heuristic and
//! checks that the real grammar (an external tree-sitter parser invoked as
//! a subprocess) recognizes multiline values, comments, and nesting.
//!
//! The heuristic lives in [`highlight`], the subprocess plumbing and
//! output classification in [`parser`]. Neither builds a syntax tree:
//! all real parsing is delegated to the external tool.

pub mod config;
pub mod highlight;
pub mod parser;
pub mod sample;
pub mod theme;

pub use config::Config;
pub use theme::Theme;

/// Version string for `--version`.
///
/// Dev builds append the short git SHA; builds with the `release`
/// feature show the bare crate version.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}
