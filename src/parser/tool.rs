//! ParseTool trait and captured subprocess output.

use super::error::ParserError;

/// Captured output of one parser invocation.
///
/// Non-zero exit is not folded into `Result`: the verification path
/// classifies by stdout text alone, so the raw streams are kept.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub stdout: String,
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
}

/// Something that can parse CCL text and report the parse tree as text.
///
/// The production implementation wraps the tree-sitter CLI; tests swap in
/// stubs so classification logic runs without subprocesses.
pub trait ParseTool {
    /// Human-readable name for error messages and logs.
    fn name(&self) -> &str;

    /// Parse `source` and capture the tool's textual output.
    ///
    /// `quiet` suppresses the full tree where the tool supports it
    /// (used by the verification path, which only needs node names).
    fn parse(&self, source: &str, quiet: bool) -> Result<ParseOutput, ParserError>;
}
