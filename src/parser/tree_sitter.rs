//! tree-sitter CLI parse tool.

use std::io::Write;
use std::process::Command;

use tracing::debug;

use super::error::ParserError;
use super::tool::{ParseOutput, ParseTool};

/// Default command for the pre-built CCL grammar.
const DEFAULT_COMMAND: &[&str] = &["npx", "tree-sitter", "parse"];

/// Parse tool backed by the tree-sitter CLI.
///
/// Stages the source in a temporary `.ccl` file and runs
/// `npx tree-sitter parse <file> [--quiet]`, capturing both streams.
/// The temporary file is removed when the invocation returns, success
/// or not.
#[derive(Debug, Clone)]
pub struct TreeSitterCli {
    program: String,
    args: Vec<String>,
}

impl TreeSitterCli {
    /// Create the default `npx tree-sitter parse` tool.
    pub fn new() -> Self {
        Self {
            program: DEFAULT_COMMAND[0].to_string(),
            args: DEFAULT_COMMAND[1..].iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a tool from an override command, e.g. from `--parser-cmd`
    /// or the config file. The first word is the program, the rest are
    /// leading arguments; the input path is appended per invocation.
    pub fn from_command(words: &[String]) -> Result<Self, ParserError> {
        let (program, args) = words.split_first().ok_or(ParserError::EmptyCommand)?;
        if program.is_empty() {
            return Err(ParserError::EmptyCommand);
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Default for TreeSitterCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseTool for TreeSitterCli {
    fn name(&self) -> &str {
        &self.program
    }

    fn parse(&self, source: &str, quiet: bool) -> Result<ParseOutput, ParserError> {
        // The grammar is selected by file extension, so the temp file
        // must end in `.ccl`. Dropped (and deleted) on every exit path.
        let mut file = tempfile::Builder::new()
            .prefix("cclight-")
            .suffix(".ccl")
            .tempfile()?;
        file.write_all(source.as_bytes())?;
        file.flush()?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(file.path());
        if quiet {
            cmd.arg("--quiet");
        }

        debug!(
            program = %self.program,
            path = %file.path().display(),
            quiet,
            "invoking external parser"
        );

        let output = cmd.output().map_err(|e| ParserError::Launch {
            program: self.program.clone(),
            source: e,
        })?;

        debug!(
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            "parser finished"
        );

        Ok(ParseOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}
