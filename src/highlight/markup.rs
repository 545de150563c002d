//! Markup generation.
//!
//! Lexes content with the engine's grammar for a resolved identifier and
//! formats the token stream as HTML, either with inline `style` attributes
//! (the default) or with CSS classes. The engine's syntax and theme sets are
//! loaded once per process and shared read-only.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::OnceLock;

use nb_highlight_config::FormatOption;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, FontStyle, Style, Theme, ThemeSet};
use syntect::html::{
    ClassStyle, css_for_theme_with_class_style, line_tokens_to_classed_spans,
    start_highlighted_html_snippet,
};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::error::HighlightError;
use super::options::Options;
use super::themes;

/// Class emitted on the wrapping `<pre>` in classes mode.
pub const CODE_CLASS: &str = "code";
/// Class emitted on line-number spans.
pub const LINE_NUMBER_CLASS: &str = "ln";

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The lexer/formatter engine: grammar and style registries.
pub struct Engine {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl Engine {
    /// Load the grammars and styles bundled with the engine, plus the extra
    /// styles in [`themes`].
    pub fn load_defaults() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: {
                let mut themes = ThemeSet::load_defaults();
                for (name, theme) in themes::extra_themes() {
                    themes.themes.insert(name.to_string(), theme);
                }
                themes
            },
        }
    }

    /// The process-wide engine. Loaded on first use.
    pub fn shared() -> &'static Engine {
        static ENGINE: OnceLock<Engine> = OnceLock::new();
        ENGINE.get_or_init(Self::load_defaults)
    }

    /// Look up a grammar by identifier: a file extension (`py`, `rs`) or a
    /// grammar name (`python`, `Rust`), compared case-insensitively.
    pub fn syntax(&self, grammar: &str) -> Option<&SyntaxReference> {
        if grammar.is_empty() {
            return None;
        }
        self.syntaxes.find_syntax_by_token(grammar)
    }

    /// Look up a style by exact name.
    pub fn theme(&self, style: &str) -> Option<&Theme> {
        self.themes.themes.get(style)
    }

    /// Names of every style the engine ships with, sorted.
    pub fn style_names(&self) -> Vec<String> {
        self.themes.themes.keys().cloned().collect()
    }

    /// CSS rules for `style`, matching the classes emitted in classes mode.
    pub fn stylesheet(&self, style: &str) -> Result<String, HighlightError> {
        let theme = self.theme(style).ok_or_else(|| HighlightError::UnknownStyle {
            name: style.to_string(),
            available: self.style_names(),
        })?;
        let mut css = css_for_theme_with_class_style(theme, CLASS_STYLE)?;
        let gutter = gutter_color(theme);
        let _ = writeln!(
            css,
            ".{LINE_NUMBER_CLASS} {{ color: #{:02x}{:02x}{:02x}; user-select: none; }}",
            gutter.r, gutter.g, gutter.b
        );
        Ok(css)
    }
}

// ---------------------------------------------------------------------------
// Formatter settings
// ---------------------------------------------------------------------------

/// Formatter settings folded from a list of [`FormatOption`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormatSettings {
    classes: bool,
    line_numbers: bool,
    base_line_number: usize,
    tab_width: Option<usize>,
    prevent_surrounding_pre: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            classes: false,
            line_numbers: false,
            base_line_number: 1,
            tab_width: None,
            prevent_surrounding_pre: false,
        }
    }
}

impl FormatSettings {
    /// Later options win over earlier ones for the same setting.
    fn from_options(options: &[FormatOption]) -> Self {
        let mut settings = Self::default();
        for option in options {
            match option {
                FormatOption::Classes(on) => settings.classes = *on,
                FormatOption::LineNumbers(on) => settings.line_numbers = *on,
                FormatOption::BaseLineNumber(n) => settings.base_line_number = *n,
                FormatOption::TabWidth(n) => settings.tab_width = Some(*n),
                FormatOption::PreventSurroundingPre(on) => settings.prevent_surrounding_pre = *on,
            }
        }
        settings
    }

    /// Right-aligned label for line `index` (0-based) of `total`.
    fn line_label(&self, index: usize, total: usize) -> String {
        let last = self.base_line_number.saturating_add(total.saturating_sub(1));
        let width = last.to_string().len();
        format!("{:>width$}", self.base_line_number.saturating_add(index))
    }
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// Highlight `content` with the grammar `grammar` using the style and
/// formatter settings in `options`.
///
/// Fails with [`HighlightError::UnknownGrammar`] if the engine has no such
/// grammar; never falls back to plain text.
pub fn highlight(grammar: &str, content: &str, options: &Options) -> Result<String, HighlightError> {
    highlight_with(Engine::shared(), grammar, content, options)
}

/// [`highlight`] against an explicit engine.
pub fn highlight_with(
    engine: &Engine,
    grammar: &str,
    content: &str,
    options: &Options,
) -> Result<String, HighlightError> {
    let syntax = engine
        .syntax(grammar)
        .ok_or_else(|| HighlightError::UnknownGrammar(grammar.to_string()))?;
    let theme = engine
        .theme(options.style())
        .ok_or_else(|| HighlightError::UnknownStyle {
            name: options.style().to_string(),
            available: engine.style_names(),
        })?;

    let settings = FormatSettings::from_options(options.format_options());
    let content = match settings.tab_width {
        Some(width) if width > 0 => expand_tabs(content, width),
        _ => Cow::Borrowed(content),
    };

    debug_trace!(
        "HIGHLIGHT",
        "lexing {} bytes as {} (style={}, {:?})",
        content.len(),
        syntax.name,
        options.style(),
        settings
    );

    if settings.classes {
        classed_html(&engine.syntaxes, syntax, &content, &settings)
    } else {
        inline_html(&engine.syntaxes, syntax, theme, &content, &settings)
    }
}

/// Tokens as spans with inline `style` attributes.
fn inline_html(
    syntaxes: &SyntaxSet,
    syntax: &SyntaxReference,
    theme: &Theme,
    content: &str,
    settings: &FormatSettings,
) -> Result<String, HighlightError> {
    let mut out = String::with_capacity(content.len() * 4);
    let (pre, bg) = start_highlighted_html_snippet(theme);
    if !settings.prevent_surrounding_pre {
        out.push_str(&pre);
    }

    let gutter = gutter_color(theme);
    let total = LinesWithEndings::from(content).count();
    let mut lines = HighlightLines::new(syntax, theme);
    for (index, line) in LinesWithEndings::from(content).enumerate() {
        if settings.line_numbers {
            let _ = write!(
                out,
                "<span class=\"{LINE_NUMBER_CLASS}\" style=\"color:#{:02x}{:02x}{:02x};\">{} </span>",
                gutter.r,
                gutter.g,
                gutter.b,
                settings.line_label(index, total)
            );
        }
        for (style, text) in lines.highlight_line(line, syntaxes)? {
            push_styled_span(&mut out, style, text, bg);
        }
    }

    if !settings.prevent_surrounding_pre {
        out.push_str("</pre>\n");
    }
    Ok(out)
}

/// One span per lexer region. Adjacent regions are never merged, so the span
/// layout depends only on the grammar and never on the style.
fn push_styled_span(out: &mut String, style: Style, text: &str, background: Color) {
    out.push_str("<span style=\"");
    if style.background != background {
        push_color(out, "background-color", style.background);
    }
    push_color(out, "color", style.foreground);
    if style.font_style.contains(FontStyle::BOLD) {
        out.push_str("font-weight:bold;");
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out.push_str("font-style:italic;");
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out.push_str("text-decoration:underline;");
    }
    let _ = write!(out, "\">{}</span>", Escape(text));
}

/// HTML-escaping display wrapper, mirroring the engine's own (crate-private)
/// `syntect::escape::Escape`.
struct Escape<'a>(&'a str);

impl std::fmt::Display for Escape<'_> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        let mut last = 0;
        for (i, ch) in s.bytes().enumerate() {
            let rep = match ch {
                b'>' => "&gt;",
                b'<' => "&lt;",
                b'&' => "&amp;",
                b'\'' => "&#39;",
                b'"' => "&quot;",
                _ => continue,
            };
            fmt.write_str(&s[last..i])?;
            fmt.write_str(rep)?;
            last = i + 1;
        }
        if last < s.len() {
            fmt.write_str(&s[last..])?;
        }
        Ok(())
    }
}

fn push_color(out: &mut String, property: &str, c: Color) {
    if c.a == 0xFF {
        let _ = write!(out, "{property}:#{:02x}{:02x}{:02x};", c.r, c.g, c.b);
    } else {
        let _ = write!(out, "{property}:#{:02x}{:02x}{:02x}{:02x};", c.r, c.g, c.b, c.a);
    }
}

/// Tokens as spans with CSS classes; pair with [`Engine::stylesheet`].
///
/// Scopes may stay open across lines (block comments, multi-line strings);
/// line-number spans are then nested inside them, which keeps the markup
/// well-formed.
fn classed_html(
    syntaxes: &SyntaxSet,
    syntax: &SyntaxReference,
    content: &str,
    settings: &FormatSettings,
) -> Result<String, HighlightError> {
    let mut out = String::with_capacity(content.len() * 4);
    if !settings.prevent_surrounding_pre {
        let _ = write!(out, "<pre class=\"{CODE_CLASS}\">");
    }

    let total = LinesWithEndings::from(content).count();
    let mut state = ParseState::new(syntax);
    let mut stack = ScopeStack::new();
    let mut open_spans: isize = 0;
    for (index, line) in LinesWithEndings::from(content).enumerate() {
        if settings.line_numbers {
            let _ = write!(
                out,
                "<span class=\"{LINE_NUMBER_CLASS}\">{} </span>",
                settings.line_label(index, total)
            );
        }
        let ops = state.parse_line(line, syntaxes)?;
        let (html, delta) = line_tokens_to_classed_spans(line, &ops, CLASS_STYLE, &mut stack)?;
        out.push_str(&html);
        open_spans += delta;
    }
    for _ in 0..open_spans.max(0) {
        out.push_str("</span>");
    }

    if !settings.prevent_surrounding_pre {
        out.push_str("</pre>\n");
    }
    Ok(out)
}

fn gutter_color(theme: &Theme) -> Color {
    theme
        .settings
        .gutter_foreground
        .or(theme.settings.foreground)
        .unwrap_or(Color::BLACK)
}

/// Replace tabs with spaces up to the next multiple of `width` on each line.
fn expand_tabs(content: &str, width: usize) -> Cow<'_, str> {
    if !content.contains('\t') {
        return Cow::Borrowed(content);
    }
    let mut out = String::with_capacity(content.len() + content.len() / 2);
    let mut column = 0;
    for ch in content.chars() {
        match ch {
            '\t' => {
                let pad = width - column % width;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::options::HighlightOption;

    fn options(format: Vec<FormatOption>) -> Options {
        Options::new([HighlightOption::FormatOptions(format)]).unwrap()
    }

    #[test]
    fn test_engine_knows_resolver_grammars() {
        let engine = Engine::shared();
        for grammar in ["python", "py", "json", "xml", "rust", "javascript", "sh", "sql"] {
            assert!(engine.syntax(grammar).is_some(), "{grammar}");
        }
        assert!(engine.syntax("").is_none());
        assert!(engine.syntax("not-a-language").is_none());
    }

    #[test]
    fn test_engine_styles() {
        let engine = Engine::shared();
        let names = engine.style_names();
        assert!(names.iter().any(|n| n == "InspiredGitHub"));
        assert!(names.iter().any(|n| n == "base16-ocean.dark"));
        assert!(engine.theme("inspiredgithub").is_none());
        assert!(engine.theme(themes::MONOKAI).is_some());
    }

    #[test]
    fn test_inline_spans_follow_regions_not_styles() {
        let content = "def f(a, b):\n    return a + b  # sum\n";
        let skeleton = |style: &str| {
            let options = Options::new([HighlightOption::Style(style.to_string())]).unwrap();
            let html = highlight("python", content, &options).unwrap();
            let values = regex::Regex::new(r#"="[^"]*""#).unwrap();
            values.replace_all(&html, "=\"\"").into_owned()
        };
        let reference = skeleton("InspiredGitHub");
        for style in ["base16-ocean.dark", "Solarized (dark)", themes::MONOKAI] {
            assert_eq!(skeleton(style), reference, "{style}");
        }
    }

    #[test]
    fn test_monokai_renders() {
        let options = Options::new([HighlightOption::Style(themes::MONOKAI.to_string())]).unwrap();
        let html = highlight("python", "x = 1\n", &options).unwrap();
        assert!(html.starts_with("<pre style=\"background-color:#272822"));
        assert!(html.contains("color:#ae81ff;\">1</span>"));
    }

    #[test]
    fn test_huge_base_line_number_saturates() {
        let html = highlight(
            "python",
            "a = 1\nb = 2\n",
            &options(vec![
                FormatOption::LineNumbers(true),
                FormatOption::BaseLineNumber(usize::MAX),
            ]),
        )
        .unwrap();
        let label = format!(">{} </span>", usize::MAX);
        assert_eq!(html.matches(&label).count(), 2);
    }

    #[test]
    fn test_inline_markup() {
        let html = highlight("python", "x = 1\n", &Options::default()).unwrap();
        assert!(html.starts_with("<pre style=\""));
        assert!(html.ends_with("</pre>\n"));
        assert!(html.contains("<span style=\""));
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_markup_escapes_content() {
        let html = highlight("python", "s = \"<b>&\"\n", &Options::default()).unwrap();
        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_classed_markup() {
        let html = highlight(
            "python",
            "def f():\n    return 1\n",
            &options(vec![FormatOption::Classes(true)]),
        )
        .unwrap();
        assert!(html.starts_with("<pre class=\"code\">"));
        assert!(html.contains("<span class=\""));
        assert!(!html.contains("style="));
        assert_eq!(html.matches("<span").count(), html.matches("</span>").count());
    }

    #[test]
    fn test_classed_markup_closes_multiline_scopes() {
        let html = highlight(
            "python",
            "s = \"\"\"never\nclosed",
            &options(vec![FormatOption::Classes(true), FormatOption::LineNumbers(true)]),
        )
        .unwrap();
        assert_eq!(html.matches("<span").count(), html.matches("</span>").count());
    }

    #[test]
    fn test_line_numbers() {
        let content = (1..=10).map(|i| format!("x{i} = {i}\n")).collect::<String>();
        let html = highlight(
            "python",
            &content,
            &options(vec![FormatOption::LineNumbers(true)]),
        )
        .unwrap();
        assert_eq!(html.matches("class=\"ln\"").count(), 10);
        assert!(html.contains("> 1 </span>"));
        assert!(html.contains(">10 </span>"));
    }

    #[test]
    fn test_base_line_number() {
        let html = highlight(
            "python",
            "a = 1\nb = 2\n",
            &options(vec![
                FormatOption::Classes(true),
                FormatOption::LineNumbers(true),
                FormatOption::BaseLineNumber(41),
            ]),
        )
        .unwrap();
        assert!(html.contains("<span class=\"ln\">41 </span>"));
        assert!(html.contains("<span class=\"ln\">42 </span>"));
    }

    #[test]
    fn test_prevent_surrounding_pre() {
        let html = highlight(
            "json",
            "{}",
            &options(vec![FormatOption::PreventSurroundingPre(true)]),
        )
        .unwrap();
        assert!(!html.contains("<pre"));
        assert!(!html.contains("</pre>"));
    }

    #[test]
    fn test_later_format_option_wins() {
        let html = highlight(
            "python",
            "x = 1\n",
            &options(vec![FormatOption::Classes(true), FormatOption::Classes(false)]),
        )
        .unwrap();
        assert!(html.starts_with("<pre style=\""));
    }

    #[test]
    fn test_unknown_grammar_is_error() {
        let err = highlight("brainfudge", "+++", &Options::default()).unwrap_err();
        assert!(matches!(err, HighlightError::UnknownGrammar(g) if g == "brainfudge"));
    }

    #[test]
    fn test_empty_content() {
        let html = highlight("python", "", &Options::default()).unwrap();
        assert!(html.starts_with("<pre"));
        assert!(html.ends_with("</pre>\n"));
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\tx", 4), "    x");
        assert_eq!(expand_tabs("ab\tc\n\td", 4), "ab  c\n    d");
        assert!(matches!(expand_tabs("no tabs", 4), Cow::Borrowed(_)));
    }

    #[test]
    fn test_stylesheet() {
        let css = Engine::shared().stylesheet("InspiredGitHub").unwrap();
        assert!(css.contains(".ln {"));
        assert!(matches!(
            Engine::shared().stylesheet("nope"),
            Err(HighlightError::UnknownStyle { .. })
        ));
    }
}
