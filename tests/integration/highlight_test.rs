//! Highlight output tests.

use crate::helpers::run_cclight;

use cclight::highlight;
use cclight::theme::Theme;

#[test]
fn highlight_exits_0_and_prints_header() {
    let (stdout, _stderr, exit_code) = run_cclight(&["highlight"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("=== Original CCL with Syntax Highlighting ==="));
}

#[test]
fn highlight_with_no_color_has_no_escape_codes() {
    let (stdout, _stderr, _exit_code) = run_cclight(&["highlight"]);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn highlight_preserves_sample_content() {
    let (stdout, _stderr, _exit_code) = run_cclight(&["highlight"]);
    // outer comments, list items and continuations come through verbatim
    assert!(stdout.contains("# Basic key-value pairs"));
    assert!(stdout.contains("= first item"));
    assert!(stdout.contains("/= This is a CCL comment"));
    assert!(stdout.contains("  This is a multiline value"));
    // key/value spacing is reflowed around the `=`
    assert!(stdout.contains("name= John Doe"));
    assert!(stdout.contains("    username= admin"));
}

#[test]
fn snapshot_monochrome_render_of_flat_document() {
    let theme = Theme::monochrome();
    let rendered = highlight::render("# demo\nname = value\ndebug =\n= item", &theme);
    insta::assert_snapshot!(rendered, @r###"
    # demo
    name= value
    debug=
    = item
    "###);
}
