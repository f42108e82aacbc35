//! # Rendering
//!
//! Turns command results into terminal text through the templates in
//! [`super::templates`].
//!
//! Layout calculations (numbering, preview truncation, splitting code into
//! styled lines) stay in Rust because they need Unicode-aware width handling.
//! Templates pick structure and semantic styles.
//!
//! Card numbers run across groups in display order; they are the numbers the
//! `browse` session accepts. Quick-access entries are numbered separately
//! with a `!` prefix.

use super::styles::{names, resolved_theme, token_style, DATACHEAT_THEME};
use super::templates::TEMPLATES;
use super::theme::{ColorMode, Renderer};
use datacheat::api::{CardGroup, CmdMessage, LanguageSummary, MessageLevel};
use datacheat::catalog::Catalog;
use datacheat::error::{DataCheatError, Result};
use datacheat::highlight::Highlighter;
use datacheat::model::{Entry, Language};
use once_cell::sync::Lazy;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const EMPTY_MESSAGE: &str = "No entries match.";
const CODE_GUTTER: &str = "  │ ";
const MAX_RULE_WIDTH: usize = 60;

#[derive(Serialize)]
struct CardLine {
    number: String,
    title: String,
    id: String,
    preview: String,
}

#[derive(Serialize)]
struct GroupBlock {
    label: String,
    language: Option<String>,
    cards: Vec<CardLine>,
}

#[derive(Serialize)]
struct ShortcutLine {
    key: String,
    label: String,
    id: String,
}

#[derive(Serialize)]
struct CardsData {
    heading: String,
    groups: Vec<GroupBlock>,
    shortcuts: Vec<ShortcutLine>,
    empty: bool,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct CodeSpan {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct DetailEntry {
    title: String,
    meta: String,
    rule: String,
    content_lines: Vec<String>,
    code_lines: Vec<Vec<CodeSpan>>,
}

#[derive(Serialize)]
struct DetailData<'a> {
    entries: Vec<DetailEntry>,
    gutter: &'static str,
    footer: Option<&'a str>,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

#[derive(Serialize)]
struct CategoryLine {
    label: String,
    key: String,
    count: String,
}

#[derive(Serialize)]
struct LanguageBlock {
    label: String,
    key: String,
    count: String,
    categories: Vec<CategoryLine>,
}

#[derive(Serialize)]
struct LanguagesData {
    languages: Vec<LanguageBlock>,
}

#[derive(Serialize)]
struct Pair {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct PairsData<'a> {
    heading: Option<&'a str>,
    pairs: Vec<Pair>,
    separator: &'a str,
    empty_message: &'a str,
}

#[derive(Serialize)]
struct PromptData<'a> {
    text: &'a str,
}

/// What a card grid shows besides the groups themselves.
pub struct CardsView<'a> {
    pub heading: String,
    pub groups: &'a [CardGroup],
    pub shortcuts: &'a [Entry],
    pub preview_width: usize,
    /// Tag each group with its language (multi-language search results).
    pub show_language: bool,
}

/// Templates compiled once per colour setting and shared by every render.
static PLAIN_RENDERER: Lazy<std::result::Result<Renderer, String>> =
    Lazy::new(|| build_renderer(false));
static COLOR_RENDERER: Lazy<std::result::Result<Renderer, String>> =
    Lazy::new(|| build_renderer(true));

fn build_renderer(use_color: bool) -> std::result::Result<Renderer, String> {
    // Palette detection only matters when styles are actually emitted.
    let theme = if use_color {
        resolved_theme()
    } else {
        DATACHEAT_THEME.resolve(ColorMode::Light)
    };
    let mut renderer = Renderer::with_color(theme, use_color);
    for &(name, source) in TEMPLATES {
        renderer
            .add_template(name, source)
            .map_err(|e| e.to_string())?;
    }
    Ok(renderer)
}

fn renderer(use_color: bool) -> Result<&'static Renderer> {
    let cached = if use_color {
        &*COLOR_RENDERER
    } else {
        &*PLAIN_RENDERER
    };
    cached
        .as_ref()
        .map_err(|e| DataCheatError::Render(e.clone()))
}

fn render_template<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String> {
    renderer(use_color)?
        .render(name, data)
        .map_err(|e| DataCheatError::Render(e.to_string()))
}

/// Heading for one language's grid, naming the search text when there is one.
pub fn cards_heading(language: Language, search: &str) -> String {
    if search.is_empty() {
        language.label().to_string()
    } else {
        format!("{} matching \"{}\"", language.label(), search)
    }
}

pub fn render_cards(view: &CardsView<'_>, use_color: bool) -> Result<String> {
    let mut number = 0;
    let groups: Vec<GroupBlock> = view
        .groups
        .iter()
        .map(|group| GroupBlock {
            label: group.label.clone(),
            language: view
                .show_language
                .then(|| format!("({})", group.language.label())),
            cards: group
                .entries
                .iter()
                .map(|entry| {
                    number += 1;
                    CardLine {
                        number: format!("{:>3}.", number),
                        title: entry.title.clone(),
                        id: entry.id.clone(),
                        preview: preview(&entry.content, view.preview_width),
                    }
                })
                .collect(),
        })
        .collect();

    let shortcuts = view
        .shortcuts
        .iter()
        .enumerate()
        .map(|(i, entry)| ShortcutLine {
            key: format!("{:>4}", format!("!{}", i + 1)),
            label: entry.shortcut.clone().unwrap_or_else(|| entry.title.clone()),
            id: entry.id.clone(),
        })
        .collect();

    let data = CardsData {
        heading: view.heading.clone(),
        empty: groups.is_empty(),
        groups,
        shortcuts,
        empty_message: EMPTY_MESSAGE,
    };
    render_template("cards", &data, use_color)
}

/// Full view of entries with highlighted code. A highlighter that declines a
/// snippet leaves it plain.
pub fn render_detail(
    entries: &[Entry],
    catalog: &Catalog,
    highlighter: &dyn Highlighter,
    footer: Option<&str>,
    use_color: bool,
) -> Result<String> {
    let entries = entries
        .iter()
        .map(|entry| DetailEntry {
            title: entry.title.clone(),
            meta: format!("{} · {}", catalog.label(&entry.category), entry.id),
            rule: "─".repeat(entry.title.width().clamp(8, MAX_RULE_WIDTH)),
            content_lines: entry.content.lines().map(str::to_string).collect(),
            code_lines: entry
                .code
                .as_deref()
                .map(|code| code_lines(code, Language::from_prefix(entry.language()), highlighter))
                .unwrap_or_default(),
        })
        .collect();

    let data = DetailData {
        entries,
        gutter: CODE_GUTTER,
        footer,
    };
    render_template("detail", &data, use_color)
}

/// Renders command messages; falls back to bare text if templating fails.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: &msg.content,
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template("messages", &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_languages(languages: &[LanguageSummary], use_color: bool) -> Result<String> {
    let label_width = languages
        .iter()
        .flat_map(|l| l.categories.iter().map(|c| c.label.width()))
        .max()
        .unwrap_or(0);

    let data = LanguagesData {
        languages: languages
            .iter()
            .map(|lang| LanguageBlock {
                label: lang.label.clone(),
                key: format!("[{}]", lang.language),
                count: plural(lang.count, "entry", "entries"),
                categories: lang
                    .categories
                    .iter()
                    .map(|c| CategoryLine {
                        label: pad_to_width(&c.label, label_width),
                        key: c.key.clone(),
                        count: c.count.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };
    render_template("languages", &data, use_color)
}

/// Aligned `key<separator>value` lines, e.g. config listings.
pub fn render_pairs(
    heading: Option<&str>,
    pairs: &[(String, String)],
    separator: &str,
    empty_message: &str,
    use_color: bool,
) -> Result<String> {
    let key_width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let data = PairsData {
        heading,
        pairs: pairs
            .iter()
            .map(|(key, value)| Pair {
                key: pad_to_width(key, key_width),
                value: value.clone(),
            })
            .collect(),
        separator,
        empty_message,
    };
    render_template("pairs", &data, use_color)
}

pub fn render_prompt(text: &str, use_color: bool) -> String {
    render_template("prompt", &PromptData { text }, use_color)
        .unwrap_or_else(|_| format!("{} ", text))
}

fn code_lines(
    code: &str,
    language: Option<Language>,
    highlighter: &dyn Highlighter,
) -> Vec<Vec<CodeSpan>> {
    let mut lines: Vec<Vec<CodeSpan>> = vec![Vec::new()];
    match language.and_then(|lang| highlighter.highlight(code, lang)) {
        Some(spans) => {
            for span in spans {
                push_span(&mut lines, &span.text, token_style(span.kind));
            }
        }
        None => push_span(&mut lines, code, names::CODE),
    }
    while lines.len() > 1 && lines.last().is_some_and(Vec::is_empty) {
        lines.pop();
    }
    lines
}

/// Appends `text` to the last line, starting a new line at each `\n`.
fn push_span(lines: &mut Vec<Vec<CodeSpan>>, text: &str, style: &'static str) {
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        let part = part.trim_end_matches('\r');
        if part.is_empty() {
            continue;
        }
        if let Some(line) = lines.last_mut() {
            line.push(CodeSpan {
                text: part.to_string(),
                style,
            });
        }
    }
}

fn preview(content: &str, width: usize) -> String {
    let flat: String = content
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.width() <= width {
        flat
    } else {
        truncate_to_width(&flat, width)
    }
}

/// Cuts `s` to fit `max_width` columns, ending with an ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datacheat::highlight::{SyntaxHighlighter, Span};
    use datacheat::model::Taxonomy;

    struct Declining;

    impl Highlighter for Declining {
        fn highlight(&self, _code: &str, _language: Language) -> Option<Vec<Span>> {
            None
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Entry::new("a", "Basic Queries", "sql-basics", "select data")
                    .with_code("-- all rows\nSELECT *\nFROM t;\n"),
                Entry::new("b", "Joins", "sql-advanced", "combine tables"),
                Entry::new("idx", "Function Index", "sql-basics", "quick reference")
                    .with_shortcut("Function Index"),
            ],
            Taxonomy::builtin(),
        )
        .unwrap()
    }

    fn groups(catalog: &Catalog) -> Vec<CardGroup> {
        datacheat::commands::list::run(catalog, Language::Sql, "")
            .unwrap()
            .groups
    }

    fn view<'a>(groups: &'a [CardGroup], shortcuts: &'a [Entry]) -> CardsView<'a> {
        CardsView {
            heading: "SQL".into(),
            groups,
            shortcuts,
            preview_width: 72,
            show_language: false,
        }
    }

    #[test]
    fn renderer_is_built_once_and_reused() {
        let first = renderer(false).unwrap();
        let second = renderer(false).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn cards_show_labels_numbers_and_previews() {
        let catalog = catalog();
        let groups = groups(&catalog);
        let out = render_cards(&view(&groups, &[]), false).unwrap();

        assert!(out.starts_with("SQL\n"));
        assert!(out.contains("SQL Basics"));
        assert!(out.contains("SQL Advanced"));
        assert!(out.contains("  1. Basic Queries  a"));
        assert!(out.contains("  2. Joins  b"));
        assert!(out.contains("select data"));
        assert!(!out.contains("No entries match."));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn empty_grid_says_so() {
        let out = render_cards(&view(&[], &[]), false).unwrap();
        assert!(out.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn shortcuts_are_listed_with_bang_numbers() {
        let catalog = catalog();
        let groups = groups(&catalog);
        let shortcuts = vec![catalog.get("idx").unwrap().clone()];
        let out = render_cards(&view(&groups, &shortcuts), false).unwrap();
        assert!(out.contains("Quick access"));
        assert!(out.contains("!1 Function Index  idx"));
    }

    #[test]
    fn language_tags_for_mixed_results() {
        let catalog = catalog();
        let groups = groups(&catalog);
        let mut v = view(&groups, &[]);
        v.show_language = true;
        let out = render_cards(&v, false).unwrap();
        assert!(out.contains("SQL Basics (SQL)"));
    }

    #[test]
    fn previews_are_truncated_to_width() {
        let long = "x".repeat(100);
        let out = preview(&long, 20);
        assert_eq!(out.width(), 20);
        assert!(out.ends_with('…'));
        assert_eq!(preview("short", 20), "short");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn detail_contains_code_and_label() {
        let catalog = catalog();
        let entry = catalog.get("a").unwrap().clone();
        let out = render_detail(&[entry], &catalog, &SyntaxHighlighter, None, false).unwrap();
        assert!(out.contains("Basic Queries"));
        assert!(out.contains("SQL Basics · a"));
        assert!(out.contains("  │ -- all rows\n"));
        assert!(out.contains("  │ SELECT *\n"));
        assert!(out.contains("  │ FROM t;\n"));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn declining_highlighter_still_shows_code() {
        let catalog = catalog();
        let entry = catalog.get("a").unwrap().clone();
        let highlighted =
            render_detail(&[entry.clone()], &catalog, &SyntaxHighlighter, None, false).unwrap();
        let plain = render_detail(&[entry], &catalog, &Declining, None, false).unwrap();
        assert_eq!(highlighted, plain);
    }

    #[test]
    fn detail_footer_and_multiple_entries() {
        let catalog = catalog();
        let entries = vec![
            catalog.get("a").unwrap().clone(),
            catalog.get("b").unwrap().clone(),
        ];
        let out =
            render_detail(&entries, &catalog, &SyntaxHighlighter, Some("x close"), false).unwrap();
        assert!(out.contains("Joins"));
        assert!(out.trim_end().ends_with("x close"));
    }

    #[test]
    fn plain_output_has_no_ansi() {
        let catalog = catalog();
        let groups = groups(&catalog);
        let entry = catalog.get("a").unwrap().clone();
        let cards = render_cards(&view(&groups, &[]), false).unwrap();
        let detail = render_detail(&[entry], &catalog, &SyntaxHighlighter, None, false).unwrap();
        assert!(!cards.contains("\x1b["));
        assert!(!detail.contains("\x1b["));
    }

    #[test]
    fn code_lines_split_on_newlines() {
        let lines = code_lines("a\n\nb\n", Some(Language::Sql), &Declining);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2][0].text, "b");
        assert_eq!(lines[2][0].style, names::CODE);
    }

    #[test]
    fn messages_render_in_order() {
        let out = render_messages(
            &[CmdMessage::success("saved"), CmdMessage::error("broken")],
            false,
        );
        assert_eq!(out, "saved\nbroken\n");
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn languages_list_categories_and_counts() {
        let catalog = catalog();
        let result = datacheat::commands::languages::run(&catalog).unwrap();
        let out = render_languages(&result.languages, false).unwrap();
        assert!(out.contains("SQL [sql]  3 entries"));
        assert!(out.contains("Power Query [powerquery]  0 entries"));
        assert!(out.contains("sql-optimization  0"));
    }

    #[test]
    fn pairs_align_keys() {
        let pairs = vec![
            ("default-language".to_string(), "sql".to_string()),
            ("preview-width".to_string(), "72".to_string()),
        ];
        let out = render_pairs(None, &pairs, " = ", "Nothing.", false).unwrap();
        assert_eq!(out, "default-language = sql\npreview-width    = 72\n");

        let empty = render_pairs(Some("Config"), &[], " = ", "Nothing.", false).unwrap();
        assert_eq!(empty, "Config\nNothing.\n");
    }

    #[test]
    fn prompt_has_trailing_space() {
        assert_eq!(render_prompt("sql>", false), "sql> ");
    }
}
