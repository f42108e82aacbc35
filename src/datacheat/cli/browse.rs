//! # Interactive Browsing
//!
//! `datacheat browse` is a line-driven session over [`Shell`]. Each input line
//! becomes one shell event; the screen is redrawn whenever the shell reports a
//! change.
//!
//! | input              | event                                   |
//! |--------------------|-----------------------------------------|
//! | `:lang <language>` | select language                         |
//! | `/<text>`          | search (`/` alone clears)               |
//! | `<n>`              | activate the n-th card on screen        |
//! | `!<n>`             | activate the n-th quick-access entry    |
//! | `:open <id>`       | activate a card or quick-access entry   |
//! | `x`, `close`       | the overlay's close control             |
//! | `bg`               | a click on the overlay backdrop         |
//! | `in`               | a click inside the overlay content      |
//! | `:help`, `?`       | list these inputs                       |
//! | `q`, `:quit`, EOF  | leave                                   |
//!
//! Before the first screen the session waits on the loading gate.

use super::render::{
    cards_heading, render_cards, render_detail, render_messages, render_pairs, render_prompt,
    CardsView,
};
use datacheat::api::{parse_language, CardGroup, CmdMessage};
use datacheat::catalog::Catalog;
use datacheat::config::DataCheatConfig;
use datacheat::error::Result;
use datacheat::highlight::SyntaxHighlighter;
use datacheat::loading::{LoadingGate, LOADING_MESSAGE};
use datacheat::model::{Entry, Language};
use datacheat::shell::{Event, Outcome, Screen, Shell, ShellView};
use std::io::{BufRead, Write};

const PROMPT: &str = "datacheat>";
const OVERLAY_FOOTER: &str = "x close · bg backdrop · in inside";

const HELP: &[(&str, &str)] = &[
    (":lang <language>", "switch language (sql, powerquery, dax)"),
    ("/<text>", "search titles and descriptions; / alone clears"),
    ("<n>", "open card n"),
    ("!<n>", "open quick-access entry n"),
    (":open <id>", "open an entry by id"),
    ("x", "close the open entry"),
    ("bg", "click the backdrop (closes)"),
    ("in", "click inside the open entry"),
    ("q", "quit"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    Card(usize),
    Shortcut(usize),
    Open(String),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_input(line: &str) -> Input {
    // search text is taken verbatim, up to the line ending
    let raw = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = raw.trim_start().strip_prefix('/') {
        return Input::Event(Event::Search(text.to_string()));
    }

    let line = line.trim();
    if let Some(rest) = line.strip_prefix('!') {
        return match rest.trim().parse() {
            Ok(n) => Input::Shortcut(n),
            Err(_) => Input::Invalid(format!("Not a quick-access number: {}", rest)),
        };
    }
    if let Some(rest) = line.strip_prefix(":lang") {
        return match parse_language(rest.trim()) {
            Ok(language) => Input::Event(Event::SelectLanguage(language)),
            Err(e) => Input::Invalid(e.to_string()),
        };
    }
    if let Some(rest) = line.strip_prefix(":open") {
        let id = rest.trim();
        if id.is_empty() {
            return Input::Invalid("Usage: :open <id>".to_string());
        }
        return Input::Open(id.to_string());
    }

    match line {
        "" => Input::Empty,
        "q" | ":q" | ":quit" => Input::Quit,
        ":help" | "?" => Input::Help,
        "x" | "close" => Input::Event(Event::Close),
        "bg" => Input::Event(Event::BackdropActivated),
        "in" => Input::Event(Event::OverlayContentActivated),
        _ => match line.parse() {
            Ok(n) => Input::Card(n),
            Err(_) => Input::Invalid(format!("Unknown input: {} (try :help)", line)),
        },
    }
}

/// Runs a session until quit or end of input.
pub fn run_session<R: BufRead, W: Write>(
    catalog: &Catalog,
    language: Language,
    config: &DataCheatConfig,
    use_color: bool,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut shell = Shell::new(catalog, language);

    draw(&shell, catalog, config, use_color, out)?;
    LoadingGate::from_millis(config.loading_delay_ms).wait();
    shell.mark_ready();
    draw(&shell, catalog, config, use_color, out)?;

    loop {
        write!(out, "{}", render_prompt(PROMPT, use_color))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let event = match parse_input(&line) {
            Input::Quit => break,
            Input::Empty => continue,
            Input::Help => {
                let pairs: Vec<(String, String)> = HELP
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                write!(out, "{}", render_pairs(None, &pairs, "  ", "", use_color)?)?;
                continue;
            }
            Input::Invalid(msg) => {
                warn(out, msg, use_color)?;
                continue;
            }
            Input::Event(event) => event,
            Input::Card(n) => match on_screen(&shell, |screen| screen.card(n)) {
                Some(id) => Event::ActivateCard(id),
                None => {
                    warn(out, format!("No card {} on screen", n), use_color)?;
                    continue;
                }
            },
            Input::Shortcut(n) => match on_screen(&shell, |screen| screen.shortcut(n)) {
                Some(id) => Event::ActivateShortcut(id),
                None => {
                    warn(out, format!("No quick-access entry {}", n), use_color)?;
                    continue;
                }
            },
            Input::Open(id) => {
                let is_shortcut = catalog.shortcuts(shell.language()).iter().any(|e| e.id == id);
                if is_shortcut {
                    Event::ActivateShortcut(id)
                } else {
                    Event::ActivateCard(id)
                }
            }
        };

        match shell.handle(event) {
            Outcome::Changed => draw(&shell, catalog, config, use_color, out)?,
            Outcome::Unchanged => {}
            Outcome::Ignored => warn(out, "Not on screen", use_color)?,
        }
    }

    Ok(())
}

/// Id of the entry `pick` finds on the current screen.
fn on_screen<'c, F>(shell: &Shell<'c>, pick: F) -> Option<String>
where
    F: FnOnce(&Screen<'c>) -> Option<&'c Entry>,
{
    match shell.view() {
        ShellView::Ready(screen) => pick(&screen).map(|e| e.id.clone()),
        ShellView::Loading => None,
    }
}

fn draw<W: Write>(
    shell: &Shell<'_>,
    catalog: &Catalog,
    config: &DataCheatConfig,
    use_color: bool,
    out: &mut W,
) -> Result<()> {
    let screen = match shell.view() {
        ShellView::Loading => {
            let loading = CmdMessage::info(LOADING_MESSAGE);
            write!(out, "{}", render_messages(&[loading], use_color))?;
            return Ok(());
        }
        ShellView::Ready(screen) => screen,
    };

    let groups = CardGroup::from_grouped(catalog, screen.language, &screen.groups);
    let shortcuts: Vec<Entry> = screen.shortcuts.iter().map(|e| (*e).clone()).collect();
    let view = CardsView {
        heading: cards_heading(screen.language, &screen.search),
        groups: &groups,
        shortcuts: &shortcuts,
        preview_width: config.preview_width,
        show_language: false,
    };
    writeln!(out)?;
    write!(out, "{}", render_cards(&view, use_color)?)?;

    if let Some(entry) = screen.selected {
        writeln!(out)?;
        let detail = render_detail(
            std::slice::from_ref(entry),
            catalog,
            &SyntaxHighlighter,
            Some(OVERLAY_FOOTER),
            use_color,
        )?;
        write!(out, "{}", detail)?;
    }
    Ok(())
}

fn warn<W: Write>(out: &mut W, msg: impl Into<String>, use_color: bool) -> Result<()> {
    write!(
        out,
        "{}",
        render_messages(&[CmdMessage::warning(msg)], use_color)
    )?;
    Ok(())
}
