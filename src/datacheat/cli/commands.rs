//! # CLI Layer
//!
//! This module is **one possible UI client** for datacheat. The catalog, the
//! pipeline and the shell know nothing about terminals.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load config and build the API over the built-in catalog
//! 3. **API Dispatch**: Call the matching `CheatApi` method
//! 4. **Output Formatting**: Turn `CmdResult` into styled text, plain text or JSON
//!
//! The interactive `browse` command is the exception to step 3: it drives the
//! shell directly (see [`super::browse`]).

use super::browse;
use super::render::{
    cards_heading, render_cards, render_detail, render_languages, render_messages, render_pairs,
    CardsView,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
    CoreCommands, ExploreCommands, MiscCommands, OutputMode,
};
use clap::Parser;
use datacheat::api::{parse_language, CheatApi, CmdMessage, CmdResult, ConfigAction};
use datacheat::config::DataCheatConfig;
use datacheat::error::Result;
use datacheat::highlight::SyntaxHighlighter;
use datacheat::init::initialize;
use datacheat::model::Language;
use std::io;

struct AppContext {
    api: CheatApi<'static>,
    config: DataCheatConfig,
    output: OutputMode,
    use_color: bool,
}

impl AppContext {
    /// The `-l` argument when given, otherwise the configured default.
    fn language(&self, arg: Option<String>) -> Result<Language> {
        match arg {
            Some(name) => parse_language(&name),
            None => Ok(self.config.default_language),
        }
    }

    /// Writes a result as JSON, or returns false so the caller renders it.
    fn emit_json(&self, result: &CmdResult) -> Result<bool> {
        if self.output != OutputMode::Json {
            return Ok(false);
        }
        println!("{}", serde_json::to_string_pretty(result)?);
        Ok(true)
    }

    fn print_messages(&self, messages: &[CmdMessage]) {
        print!("{}", render_messages(messages, self.use_color));
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    // Help does not need the catalog or config
    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::List { language, search } => handle_list(&ctx, language, search),
            CoreCommands::Search { term, language } => {
                // Join all term words with spaces
                handle_search(&ctx, term.join(" "), language)
            }
            CoreCommands::View { ids } => handle_view(&ctx, ids),
        },
        Some(Commands::Explore(cmd)) => match cmd {
            ExploreCommands::Quick { id, language } => handle_quick(&ctx, id, language),
            ExploreCommands::Languages => handle_languages(&ctx),
            ExploreCommands::Browse { language } => handle_browse(&ctx, language),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_list(&ctx, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize()?;
    let use_color = match cli.output {
        OutputMode::Term => console::colors_enabled(),
        OutputMode::Text | OutputMode::Json => false,
    };

    if let Some(err) = &ctx.config_error {
        let warning = CmdMessage::warning(format!(
            "Ignoring broken config ({}); using defaults",
            err
        ));
        eprint!("{}", render_messages(&[warning], use_color));
    }

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        output: cli.output,
        use_color,
    })
}

fn handle_list(ctx: &AppContext, language: Option<String>, search: Option<String>) -> Result<()> {
    let language = ctx.language(language)?;
    let search = search.unwrap_or_default();
    let result = ctx.api.list(language, &search)?;
    if ctx.emit_json(&result)? {
        return Ok(());
    }

    let view = CardsView {
        heading: cards_heading(language, &search),
        groups: &result.groups,
        shortcuts: &result.shortcuts,
        preview_width: ctx.config.preview_width,
        show_language: false,
    };
    print!("{}", render_cards(&view, ctx.use_color)?);
    ctx.print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String, language: Option<String>) -> Result<()> {
    let language = language.map(|name| parse_language(&name)).transpose()?;
    let result = ctx.api.search(&term, language)?;
    if ctx.emit_json(&result)? {
        return Ok(());
    }

    let heading = match language {
        Some(language) => cards_heading(language, &term),
        None => format!("Matching \"{}\"", term),
    };
    let view = CardsView {
        heading,
        groups: &result.groups,
        shortcuts: &result.shortcuts,
        preview_width: ctx.config.preview_width,
        show_language: language.is_none(),
    };
    print!("{}", render_cards(&view, ctx.use_color)?);
    ctx.print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view(&ids[..])?;
    if ctx.emit_json(&result)? {
        return Ok(());
    }

    let output = render_detail(
        &result.entries,
        ctx.api.catalog(),
        &SyntaxHighlighter,
        None,
        ctx.use_color,
    )?;
    print!("{}", output);
    ctx.print_messages(&result.messages);
    Ok(())
}

fn handle_quick(ctx: &AppContext, id: Option<String>, language: Option<String>) -> Result<()> {
    let language = ctx.language(language)?;

    let Some(id) = id else {
        let result = ctx.api.shortcuts(language)?;
        if ctx.emit_json(&result)? {
            return Ok(());
        }
        let pairs: Vec<(String, String)> = result
            .shortcuts
            .iter()
            .map(|e| {
                let label = e.shortcut.clone().unwrap_or_else(|| e.title.clone());
                (e.id.clone(), label)
            })
            .collect();
        let heading = format!("Quick access ({})", language.label());
        let empty = format!("No quick-access entries for {}.", language.label());
        print!(
            "{}",
            render_pairs(Some(&heading), &pairs, "  ", &empty, ctx.use_color)?
        );
        return Ok(());
    };

    let result = ctx.api.open_shortcut(language, &id)?;
    if ctx.emit_json(&result)? {
        return Ok(());
    }
    let output = render_detail(
        &result.entries,
        ctx.api.catalog(),
        &SyntaxHighlighter,
        None,
        ctx.use_color,
    )?;
    print!("{}", output);
    Ok(())
}

fn handle_languages(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.languages()?;
    if ctx.emit_json(&result)? {
        return Ok(());
    }
    print!("{}", render_languages(&result.languages, ctx.use_color)?);
    Ok(())
}

fn handle_browse(ctx: &AppContext, language: Option<String>) -> Result<()> {
    let language = ctx.language(language)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    browse::run_session(
        ctx.api.catalog(),
        language,
        &ctx.config,
        ctx.use_color,
        stdin.lock(),
        &mut stdout,
    )
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if ctx.emit_json(&result)? {
        return Ok(());
    }

    if show_all {
        if let Some(config) = &result.config {
            let pairs: Vec<(String, String)> = config
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            print!(
                "{}",
                render_pairs(None, &pairs, " = ", "No configuration values.", ctx.use_color)?
            );
        }
    }
    ctx.print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
