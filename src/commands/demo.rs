//! Highlight and parse-demonstration handlers.

use anyhow::Result;

use cclight::highlight;
use cclight::parser::{colorize_tree, ParseTool};
use cclight::sample;
use cclight::theme::Theme;

/// Print the colorized sample document.
pub fn handle_highlight(theme: &Theme) {
    println!(
        "{}\n",
        theme.comment_text("=== Original CCL with Syntax Highlighting ===")
    );
    println!("{}", highlight::render(sample::DOCUMENT, theme));
}

/// Highlighted sample followed by the external parser's syntax tree with
/// the known node kinds colorized.
///
/// A failing or unlaunchable parser is reported with whatever output was
/// captured; the highlight half of the demo has already run by then, so
/// neither case is fatal.
pub fn handle(parser: &dyn ParseTool, theme: &Theme) -> Result<()> {
    handle_highlight(theme);

    println!(
        "\n{}\n",
        theme.comment_text("=== Parsing with tree-sitter-ccl ===")
    );

    match parser.parse(sample::DOCUMENT, false) {
        Ok(output) if output.success => {
            print!("{}", colorize_tree(&output.stdout, theme));
        }
        Ok(output) => {
            println!(
                "Error parsing: '{}' exited with a failure status",
                parser.name()
            );
            println!("Output: {}{}", output.stdout, output.stderr);
        }
        Err(e) => {
            println!("Error parsing: {}", e);
        }
    }

    Ok(())
}
