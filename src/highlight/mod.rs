//! Heuristic per-line highlighting for CCL text.
//!
//! This is a shallow pattern match over individual lines, good enough to
//! colorize the demo sample for human eyes. It is explicitly **not** the
//! real parser: ambiguous lines (e.g. a key containing `=` in its text)
//! will be misclassified. Structural questions belong to the external
//! tree-sitter grammar, see [`crate::parser`].

use crate::theme::Theme;

/// What a single line looks like to the heuristic.
///
/// Borrowed segments point into the classified line so callers can check
/// exactly how the line was split.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# ...` outer comment (not part of the CCL language)
    OuterComment,
    /// `/= ...` in-language comment
    CclComment,
    /// `key = value`; `key` keeps its leading whitespace, `value` is the
    /// raw text after the first `=`
    KeyValue { key: &'a str, value: &'a str },
    /// `= item` list entry with no preceding key
    ListItem { value: &'a str },
    /// Non-empty continuation line indented by two or more spaces
    Indented { indent: &'a str, content: &'a str },
    /// Anything else, echoed unmodified
    Plain,
}

/// Classify one line. First matching rule wins:
///
/// 1. stripped line starts with `#` → outer comment
/// 2. stripped line starts with `/=` → CCL comment
/// 3. line contains `=` not at the start → key/value, split on first `=`
/// 4. stripped line starts with `=` → list item
/// 5. non-empty line starting with two spaces → indented continuation
/// 6. everything else → plain
pub fn classify(line: &str) -> LineKind<'_> {
    let stripped = line.trim();
    if stripped.starts_with('#') {
        return LineKind::OuterComment;
    }
    if stripped.starts_with("/=") {
        return LineKind::CclComment;
    }
    if let Some((key, value)) = line.split_once('=') {
        if stripped.starts_with('=') {
            return LineKind::ListItem { value };
        }
        return LineKind::KeyValue { key, value };
    }
    if !stripped.is_empty() && line.starts_with("  ") {
        let content = line.trim_start();
        let indent = &line[..line.len() - content.len()];
        return LineKind::Indented { indent, content };
    }
    LineKind::Plain
}

/// Render one line with the theme's colors.
///
/// Content and indentation are preserved; only escape codes are added.
/// The one deliberate loss is the whitespace around a key/value `=`,
/// which is reflowed as `key=` + value so each segment can be colored
/// independently.
pub fn render_line(line: &str, theme: &Theme) -> String {
    match classify(line) {
        LineKind::OuterComment => theme.indent_text(line),
        LineKind::CclComment => theme.comment_text(line),
        LineKind::KeyValue { key, value } => {
            let indent = key.len() - key.trim_start().len();
            format!(
                "{}{}{}{}",
                " ".repeat(indent),
                theme.key_text(key.trim()),
                theme.assignment_text("="),
                theme.value_text(value)
            )
        }
        LineKind::ListItem { value } => {
            format!("{}{}", theme.assignment_text("="), theme.value_text(value))
        }
        LineKind::Indented { indent, content } => {
            format!("{}{}", theme.indent_text(indent), theme.value_text(content))
        }
        LineKind::Plain => line.to_string(),
    }
}

/// Render a whole document, one colorized line per input line.
pub fn render(text: &str, theme: &Theme) -> String {
    text.lines()
        .map(|line| render_line(line, theme))
        .collect::<Vec<_>>()
        .join("\n")
}
