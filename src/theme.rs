//! Color themes for CLI output
//!
//! Centralizes the ANSI escape sequences used to colorize CCL lines and
//! parse-tree output. A theme maps the closed set of highlight categories
//! (key, assignment, value, comment, marker, indent) to escape codes.

/// Raw ANSI escape sequences.
pub mod ansi {
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_BLACK: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

/// A highlight category a piece of text can belong to.
///
/// These are the token classes of both the line heuristic and the
/// parse-tree node kinds the external parser reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    /// Configuration key (left of the `=`)
    Key,
    /// The `=` assignment operator
    Assignment,
    /// Value text (right of the `=`, or continuation lines)
    Value,
    /// In-language `/=` comment
    Comment,
    /// Comment marker node
    Marker,
    /// Leading indentation and outer `#` comments (dim)
    Indent,
}

/// Mapping from highlight categories to terminal escape codes.
///
/// Resolved once at startup and treated as read-only afterwards.
#[derive(Debug, Clone)]
pub struct Theme {
    pub key: &'static str,
    pub assignment: &'static str,
    pub value: &'static str,
    pub comment: &'static str,
    pub marker: &'static str,
    pub indent: &'static str,
    pub reset: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_colors()
    }
}

impl Theme {
    /// Standard theme - blue keys, green values, magenta comments.
    pub fn default_colors() -> Self {
        Self {
            key: ansi::BRIGHT_BLUE,
            assignment: ansi::BRIGHT_BLACK,
            value: ansi::BRIGHT_GREEN,
            comment: ansi::BRIGHT_MAGENTA,
            marker: ansi::BRIGHT_MAGENTA,
            indent: ansi::BRIGHT_BLACK,
            reset: ansi::RESET,
        }
    }

    /// Theme with all escape codes empty, for non-TTY or `NO_COLOR` output.
    pub fn monochrome() -> Self {
        Self {
            key: "",
            assignment: "",
            value: "",
            comment: "",
            marker: "",
            indent: "",
            reset: "",
        }
    }

    /// Look up a theme by its config-file name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default_colors()),
            "monochrome" => Some(Self::monochrome()),
            _ => None,
        }
    }

    /// The escape code for a category.
    pub fn code(&self, category: Category) -> &'static str {
        match category {
            Category::Key => self.key,
            Category::Assignment => self.assignment,
            Category::Value => self.value,
            Category::Comment => self.comment,
            Category::Marker => self.marker,
            Category::Indent => self.indent,
        }
    }

    /// Wrap text in the escape code for a category.
    pub fn paint(&self, category: Category, text: &str) -> String {
        format!("{}{}{}", self.code(category), text, self.reset)
    }

    // Convenience wrappers for CLI output

    pub fn key_text(&self, text: &str) -> String {
        self.paint(Category::Key, text)
    }

    pub fn assignment_text(&self, text: &str) -> String {
        self.paint(Category::Assignment, text)
    }

    pub fn value_text(&self, text: &str) -> String {
        self.paint(Category::Value, text)
    }

    pub fn comment_text(&self, text: &str) -> String {
        self.paint(Category::Comment, text)
    }

    pub fn indent_text(&self, text: &str) -> String {
        self.paint(Category::Indent, text)
    }
}

/// Resolve the theme to use for this process.
///
/// Colors are disabled when `--no-color` was passed, when the `NO_COLOR`
/// environment variable is set, or when stdout is not a TTY. Otherwise the
/// named theme from the config is used, falling back to the default.
pub fn resolve_theme(no_color: bool, name: &str) -> Theme {
    if no_color || std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
        return Theme::monochrome();
    }
    Theme::by_name(name).unwrap_or_default()
}
