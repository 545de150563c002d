//! Styles shipped on top of the engine's bundled set.

use syntect::highlighting::{
    Color, FontStyle, ScopeSelectors, StyleModifier, Theme, ThemeItem, ThemeSettings,
};

/// Name under which [`monokai`] is registered.
pub const MONOKAI: &str = "monokai";

/// Every extra style, keyed by the name it is registered under.
pub fn extra_themes() -> Vec<(&'static str, Theme)> {
    vec![(MONOKAI, monokai())]
}

fn hex(rgb: u32) -> Color {
    Color {
        r: (rgb >> 16) as u8,
        g: (rgb >> 8) as u8,
        b: rgb as u8,
        a: 0xFF,
    }
}

fn item(scope: &str, fg: u32, font_style: Option<FontStyle>) -> ThemeItem {
    ThemeItem {
        scope: scope.parse::<ScopeSelectors>().unwrap_or_default(),
        style: StyleModifier {
            foreground: Some(hex(fg)),
            background: None,
            font_style,
        },
    }
}

/// The classic dark Monokai palette.
pub fn monokai() -> Theme {
    let mut settings = ThemeSettings::default();
    settings.foreground = Some(hex(0xF8F8F2));
    settings.background = Some(hex(0x272822));
    settings.caret = Some(hex(0xF8F8F0));
    settings.selection = Some(hex(0x49483E));
    settings.line_highlight = Some(hex(0x3E3D32));
    settings.gutter = Some(hex(0x272822));
    settings.gutter_foreground = Some(hex(0x90908A));

    let italic = Some(FontStyle::ITALIC);
    let scopes = vec![
        item("comment", 0x75715E, None),
        item("string", 0xE6DB74, None),
        item("constant.numeric", 0xAE81FF, None),
        item("constant.language", 0xAE81FF, None),
        item("constant.character, constant.other", 0xAE81FF, None),
        item("keyword", 0xF92672, None),
        item("storage", 0xF92672, None),
        item("storage.type", 0x66D9EF, italic),
        item("entity.name.class, entity.name.type", 0xA6E22E, None),
        item(
            "entity.other.inherited-class",
            0xA6E22E,
            Some(FontStyle::ITALIC | FontStyle::UNDERLINE),
        ),
        item("entity.name.function", 0xA6E22E, None),
        item("variable.parameter", 0xFD971F, italic),
        item("entity.name.tag", 0xF92672, None),
        item("entity.other.attribute-name", 0xA6E22E, None),
        item("support.function", 0x66D9EF, None),
        item("support.constant", 0x66D9EF, None),
        item("support.type, support.class", 0x66D9EF, italic),
        item("meta.structure.dictionary.json string.quoted.double.json", 0xCFCFC2, None),
        ThemeItem {
            scope: "invalid".parse::<ScopeSelectors>().unwrap_or_default(),
            style: StyleModifier {
                foreground: Some(hex(0xF8F8F0)),
                background: Some(hex(0xF92672)),
                font_style: None,
            },
        },
    ];

    let mut theme = Theme::default();
    theme.name = Some("Monokai".to_string());
    theme.settings = settings;
    theme.scopes = scopes;
    theme
}
