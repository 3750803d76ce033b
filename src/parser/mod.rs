//! External parser invocation and output inspection.
//!
//! The real CCL grammar lives in a pre-built tree-sitter grammar; this
//! module shells out to its CLI and reasons about the textual parse tree
//! it prints. The parser is an injected capability behind the
//! [`ParseTool`] trait so everything downstream of the subprocess call
//! can be tested without spawning one.
//!
//! # Module Structure
//!
//! - [`tool`] - the `ParseTool` trait and captured-output type
//! - [`tree_sitter`] - production implementation via `npx tree-sitter parse`
//! - [`outcome`] - substring classification of parse-tree text
//! - [`error`] - invocation error type

mod error;
mod outcome;
mod tool;
mod tree_sitter;

pub use error::ParserError;
pub use outcome::{colorize_tree, Verdict};
pub use tool::{ParseOutput, ParseTool};
pub use tree_sitter::TreeSitterCli;
