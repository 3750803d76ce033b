//! Multiline-parsing verification handler.

use anyhow::Result;
use serde::Serialize;

use cclight::parser::{ParseTool, Verdict};
use cclight::sample::FIXTURES;
use cclight::theme::Theme;

/// Outcome of one fixture, as reported on stdout or in JSON.
#[derive(Debug, Serialize)]
struct FixtureResult {
    name: &'static str,
    verdict: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run every fixture through the external parser and classify each result
/// by the node kinds in its output. Returns `true` when all fixtures
/// parsed.
///
/// The exit status of the parser is deliberately not consulted here; the
/// verdict comes from stdout text alone. A parser that cannot be launched
/// at all is the one thing that must not pass silently, so it is reported
/// as a failed fixture with the launch error attached.
pub fn handle(parser: &dyn ParseTool, theme: &Theme, json: bool) -> Result<bool> {
    if !json {
        println!(
            "\n{}\n",
            theme.comment_text("=== Testing Multiline Value Parsing ===")
        );
    }

    let mut results = Vec::with_capacity(FIXTURES.len());
    for fixture in FIXTURES {
        let (verdict, error) = match parser.parse(fixture.source, true) {
            Ok(output) => (Verdict::from_output(&output.stdout), None),
            Err(e) => (Verdict::Failed, Some(e.to_string())),
        };

        if !json {
            println!("{}", theme.key_text(&format!("{}:", fixture.name)));
            if verdict.is_ok() {
                println!("  {} {}", theme.value_text("\u{2713}"), verdict.message());
            } else {
                println!(
                    "  {} {}",
                    theme.assignment_text("\u{2717}"),
                    verdict.message()
                );
            }
            if let Some(err) = &error {
                println!("  {}", theme.assignment_text(err));
            }
            println!();
        }

        results.push(FixtureResult {
            name: fixture.name,
            verdict: verdict.label(),
            ok: verdict.is_ok(),
            error,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(results.iter().all(|r| r.ok))
}
