//! Substring classification of the parser's textual output.
//!
//! The tree-sitter CLI prints an s-expression tree whose node names are
//! stable (`multiline_value`, `single_line_value`, ...). Both the
//! colorized demo and the pass/fail verification key off those names as
//! plain substrings.

use crate::theme::{Category, Theme};

/// Node kinds the demo recognizes in parse-tree output, with the
/// highlight category each one gets. Replacement is applied in this
/// order; none of the names is a substring of another's replacement.
const NODE_KINDS: &[(&str, Category)] = &[
    ("single_line_key", Category::Key),
    ("single_line_value", Category::Value),
    ("multiline_value", Category::Value),
    ("assignment", Category::Assignment),
    ("comment", Category::Comment),
    ("marker", Category::Marker),
];

/// Wrap every known node-kind name in the parse-tree text with its color.
pub fn colorize_tree(tree: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(tree.len());
    for line in tree.lines() {
        let mut colored = line.to_string();
        for &(kind, category) in NODE_KINDS {
            if colored.contains(kind) {
                colored = colored.replace(kind, &theme.paint(category, kind));
            }
        }
        out.push_str(&colored);
        out.push('\n');
    }
    // lines() swallows a trailing newline; don't invent one
    if !tree.ends_with('\n') && out.ends_with('\n') {
        out.pop();
    }
    out
}

/// How one verification fixture fared, judged from parser stdout.
///
/// Priority order: an `ERROR` node anywhere means failure, otherwise the
/// most structured value kind present wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Output contained an `ERROR` node
    Failed,
    /// Parsed and contains a multiline value
    Multiline,
    /// Parsed and contains a single-line value
    SingleLine,
    /// Parsed without either value kind (e.g. comments only)
    Ok,
}

impl Verdict {
    /// Classify raw parser stdout.
    pub fn from_output(stdout: &str) -> Self {
        if stdout.contains("ERROR") {
            Verdict::Failed
        } else if stdout.contains("multiline_value") {
            Verdict::Multiline
        } else if stdout.contains("single_line_value") {
            Verdict::SingleLine
        } else {
            Verdict::Ok
        }
    }

    pub fn is_ok(&self) -> bool {
        !matches!(self, Verdict::Failed)
    }

    /// Human-readable result line.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Failed => "Failed to parse",
            Verdict::Multiline => "Parsed as multiline value",
            Verdict::SingleLine => "Parsed as single-line value",
            Verdict::Ok => "Parsed successfully",
        }
    }

    /// Stable machine-readable label for JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Failed => "error",
            Verdict::Multiline => "multiline_value",
            Verdict::SingleLine => "single_line_value",
            Verdict::Ok => "ok",
        }
    }
}
