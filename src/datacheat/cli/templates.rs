//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone
//! `.tmp` files and embedded here with `include_str!`, so they can be edited
//! and diffed apart from the code.
//!
//! The renderer turns on `trim_blocks` and `lstrip_blocks`: a line holding
//! only a block tag produces no output. The flip side is that a line *ending*
//! in a block tag (an inline `{% for %}`/`{% if %}`) loses its newline, so such
//! lines are followed by an empty line that supplies it explicitly.
//!
//! Layout math (numbering, truncation, padding) happens in Rust; templates only
//! decide structure and which semantic style each piece gets.

pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const LANGUAGES_TEMPLATE: &str = include_str!("templates/languages.tmp");
pub const PAIRS_TEMPLATE: &str = include_str!("templates/pairs.tmp");
pub const PROMPT_TEMPLATE: &str = include_str!("templates/prompt.tmp");

/// Every template under the name the renderer registers it as.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("cards", CARDS_TEMPLATE),
    ("detail", DETAIL_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("languages", LANGUAGES_TEMPLATE),
    ("pairs", PAIRS_TEMPLATE),
    ("prompt", PROMPT_TEMPLATE),
];
