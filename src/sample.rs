//! Hard-coded CCL sample documents.
//!
//! The demo renders [`DOCUMENT`] and the verification path feeds the
//! [`FIXTURES`] to the external parser one by one.

/// The full demo document, exercising every surface construct: key-value
/// pairs, empty values, multiline values, nesting, lists, comments, and
/// multiline keys.
pub const DOCUMENT: &str = "\
# Basic key-value pairs
name = John Doe
age = 30
active = true

# Empty value
debug =

# Multiline values (important for comments!)
description =
  This is a multiline value
  that spans multiple lines
  with proper indentation

# Configuration with multiline
database =
  host = localhost
  port = 5432
  credentials =
    username = admin
    password = secret

# List syntax
= first item
= second item
= third item

# Comments
/= This is a CCL comment
/= Another comment with more info

# Multiline key example
very_long_key_name_that_needs_to_be
split_across_lines = some value

# Complex nested structure
server =
  /= Server configuration
  hostname = example.com
  ports =
    http = 80
    https = 443
";

/// A named verification input.
#[derive(Debug, Copy, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub source: &'static str,
}

/// The four multiline-parsing cases the verification path checks.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "Simple multiline",
        source: "config =\n  line 1\n  line 2\n  line 3",
    },
    Fixture {
        name: "Empty value",
        source: "empty =",
    },
    Fixture {
        name: "Multiline with nested structure",
        source: "data =\n  key1 = value1\n  key2 = value2\n  nested =\n    deep = value",
    },
    Fixture {
        name: "Comment in multiline",
        source: "section =\n  /= This is a comment\n  actual = data\n  /= Another comment\n  more = stuff",
    },
];
