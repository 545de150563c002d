//! Shared integration test helpers for nb-highlight.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{render_notebook, PYTHON_SNIPPET};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::io::Write;

use nb_highlight::{Cell, CellRenderer, HighlightError, NotebookCell, RenderStatus};

/// Python program used across the code-cell scenarios.
pub const PYTHON_SNIPPET: &str = r#"import math

def greet(name):
	print(f"Hello, {name}!")

numbers = [1, 2, 3, 4, 5]
squared_numbers = [math.pow(num, 2) for num in numbers]
print(squared_numbers)

class Animal:
	def __init__(self, species, sound):
		self.species = species
		self.sound = sound

cat = Animal("Cat", "Meow")
print(f"A {cat.species} says {cat.sound}")

# Simple Fibonacci sequence generator
def fibonacci(n):
	fib_sequence = [0, 1]
	while len(fib_sequence) < n:
		fib_sequence.append(fib_sequence[-1] + fib_sequence[-2])
	print(fib_sequence)

fibonacci(10)
"#;

/// Raw JSON output.
pub const JSON_OUTPUT: &str = r#"{"name": "John", "age": 30, "car": null}"#;

/// Raw XML output.
pub const XML_OUTPUT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<note>
	<to>Tove</to>
	<from>Jani</from>
	<heading>Reminder</heading>
	<body>Don't forget me this weekend!</body>
</note>"#;

/// A miniature host pipeline: offers every cell to `extension` and renders
/// the ones it declines as escaped `<pre>` blocks.
pub fn render_notebook(
    extension: &dyn CellRenderer,
    cells: &[NotebookCell],
) -> Result<String, HighlightError> {
    let mut out = Vec::new();
    for cell in cells {
        if extension.render_cell(cell, &mut out)? == RenderStatus::Unhandled {
            let text = String::from_utf8_lossy(cell.text());
            writeln!(out, "<pre>{}</pre>", escape(&text))?;
        }
    }
    Ok(String::from_utf8(out).expect("markup is valid UTF-8"))
}

/// Render a single cell through the miniature host.
pub fn render_one(extension: &dyn CellRenderer, cell: NotebookCell) -> String {
    render_notebook(extension, &[cell]).expect("cell renders")
}

/// The host's plain rendering of `text`.
pub fn plain(text: &str) -> String {
    format!("<pre>{}</pre>\n", escape(text))
}

/// Drop every tag, leaving the (still escaped) text content.
pub fn strip_tags(html: &str) -> String {
    let tags = regex::Regex::new(r"<[^>]*>").expect("valid pattern");
    tags.replace_all(html, "").into_owned()
}

/// Blank every attribute value, keeping tags and text. Two renderings with
/// the same skeleton differ only in presentation.
pub fn tag_skeleton(html: &str) -> String {
    let values = regex::Regex::new(r#"="[^"]*""#).expect("valid pattern");
    values.replace_all(html, "=\"\"").into_owned()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
