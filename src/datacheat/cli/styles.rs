//! Styles for the datacheat CLI.
//!
//! Templates only ever name *semantic* styles (`card-title`, `code-keyword`);
//! the light and dark palettes below decide what those look like. Both
//! variants must register every name in [`names`], otherwise the renderer
//! marks the text with the missing-style indicator.
//!
//! Code tokens get one style per [`TokenKind`] so the detail overlay can
//! colour snippets without the templates knowing about lexing.

use super::theme::{rgb_to_ansi256, AdaptiveTheme, ColorMode, Theme};
use console::Style;
use datacheat::highlight::TokenKind;
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const HEADER: &str = "header";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    // Cards
    pub const GROUP: &str = "group";
    pub const CARD_INDEX: &str = "card-index";
    pub const CARD_TITLE: &str = "card-title";
    pub const CARD_ID: &str = "card-id";
    pub const CARD_PREVIEW: &str = "card-preview";
    pub const SHORTCUT: &str = "shortcut";
    // Detail overlay
    pub const DETAIL_TITLE: &str = "detail-title";
    pub const DETAIL_RULE: &str = "detail-rule";
    pub const CODE: &str = "code";
    pub const CODE_KEYWORD: &str = "code-keyword";
    pub const CODE_FUNCTION: &str = "code-function";
    pub const CODE_STRING: &str = "code-string";
    pub const CODE_NUMBER: &str = "code-number";
    pub const CODE_COMMENT: &str = "code-comment";
    pub const CODE_OPERATOR: &str = "code-operator";
    // Config and browse prompt
    pub const CONFIG_KEY: &str = "config-key";
    pub const PROMPT: &str = "prompt";
}

pub static DATACHEAT_THEME: Lazy<AdaptiveTheme> =
    Lazy::new(|| AdaptiveTheme::new(build_light_theme(), build_dark_theme()));

/// The theme variant for the current desktop colour mode.
pub fn resolved_theme() -> &'static Theme {
    DATACHEAT_THEME.resolve(ColorMode::detect())
}

/// Style name for a highlighted token.
pub fn token_style(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => names::CODE_KEYWORD,
        TokenKind::Function => names::CODE_FUNCTION,
        TokenKind::String => names::CODE_STRING,
        TokenKind::Number => names::CODE_NUMBER,
        TokenKind::Comment => names::CODE_COMMENT,
        TokenKind::Operator => names::CODE_OPERATOR,
        TokenKind::Punctuation | TokenKind::Identifier | TokenKind::Whitespace => names::CODE,
    }
}

struct Palette {
    regular: Style,
    muted: Style,
    faint: Style,
    accent: Style,
    keyword: Style,
    function: Style,
    string: Style,
    number: Style,
}

fn build_theme(p: Palette) -> Theme {
    Theme::new()
        .add(names::REGULAR, p.regular.clone())
        .add(names::MUTED, p.muted.clone())
        .add(names::FAINT, p.faint.clone())
        .add(names::HEADER, p.regular.clone().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, p.muted.clone())
        .add(names::GROUP, p.accent.clone().bold())
        .add(names::CARD_INDEX, p.accent.clone())
        .add(names::CARD_TITLE, p.regular.clone())
        .add(names::CARD_ID, p.faint.clone().italic())
        .add(names::CARD_PREVIEW, p.muted.clone())
        .add(names::SHORTCUT, p.accent.clone().underlined())
        .add(names::DETAIL_TITLE, p.regular.clone().bold())
        .add(names::DETAIL_RULE, p.faint.clone())
        .add(names::CODE, p.regular.clone())
        .add(names::CODE_KEYWORD, p.keyword.bold())
        .add(names::CODE_FUNCTION, p.function)
        .add(names::CODE_STRING, p.string)
        .add(names::CODE_NUMBER, p.number)
        .add(names::CODE_COMMENT, p.muted.clone().italic())
        .add(names::CODE_OPERATOR, p.muted)
        .add(names::CONFIG_KEY, p.accent.clone())
        .add(names::PROMPT, p.accent.bold())
}

fn build_light_theme() -> Theme {
    build_theme(Palette {
        regular: Style::new().black(),
        muted: Style::new().color256(rgb_to_ansi256((115, 115, 115))),
        faint: Style::new().color256(rgb_to_ansi256((173, 173, 173))),
        accent: Style::new().color256(rgb_to_ansi256((196, 140, 0))),
        keyword: Style::new().color256(rgb_to_ansi256((0, 92, 197))),
        function: Style::new().color256(rgb_to_ansi256((111, 66, 193))),
        string: Style::new().color256(rgb_to_ansi256((3, 130, 60))),
        number: Style::new().color256(rgb_to_ansi256((186, 33, 45))),
    })
}

fn build_dark_theme() -> Theme {
    build_theme(Palette {
        regular: Style::new().white(),
        muted: Style::new().color256(rgb_to_ansi256((180, 180, 180))),
        faint: Style::new().color256(rgb_to_ansi256((110, 110, 110))),
        accent: Style::new().color256(rgb_to_ansi256((255, 214, 10))),
        keyword: Style::new().color256(rgb_to_ansi256((121, 192, 255))),
        function: Style::new().color256(rgb_to_ansi256((210, 168, 255))),
        string: Style::new().color256(rgb_to_ansi256((144, 238, 144))),
        number: Style::new().color256(rgb_to_ansi256((255, 138, 128))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAMES: &[&str] = &[
        names::REGULAR,
        names::MUTED,
        names::FAINT,
        names::HEADER,
        names::ERROR,
        names::WARNING,
        names::SUCCESS,
        names::INFO,
        names::GROUP,
        names::CARD_INDEX,
        names::CARD_TITLE,
        names::CARD_ID,
        names::CARD_PREVIEW,
        names::SHORTCUT,
        names::DETAIL_TITLE,
        names::DETAIL_RULE,
        names::CODE,
        names::CODE_KEYWORD,
        names::CODE_FUNCTION,
        names::CODE_STRING,
        names::CODE_NUMBER,
        names::CODE_COMMENT,
        names::CODE_OPERATOR,
        names::CONFIG_KEY,
        names::PROMPT,
    ];

    fn registered(theme: &Theme, name: &str) -> bool {
        theme.styles().apply_plain(name, "x") == "x"
    }

    #[test]
    fn both_variants_register_every_name() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let theme = DATACHEAT_THEME.resolve(mode);
            for name in ALL_NAMES {
                assert!(registered(theme, name), "{:?} is missing {}", mode, name);
            }
        }
    }

    #[test]
    fn every_token_kind_has_a_registered_style() {
        let theme = DATACHEAT_THEME.resolve(ColorMode::Light);
        for kind in [
            TokenKind::Keyword,
            TokenKind::Function,
            TokenKind::String,
            TokenKind::Number,
            TokenKind::Comment,
            TokenKind::Operator,
            TokenKind::Punctuation,
            TokenKind::Identifier,
            TokenKind::Whitespace,
        ] {
            assert!(registered(theme, token_style(kind)));
        }
    }
}
