use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

/// How results are written to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled when the terminal supports it
    #[default]
    Term,
    /// Never styled
    Text,
    /// The raw result as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "datacheat",
    bin_name = "datacheat",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Searchable cheatsheet for SQL, Power Query M and DAX", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Term, global = true, help_heading = "Options")]
    pub output: OutputMode,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Explore,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Explore => "Explore:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "view" => Some(CommandGroup::Core),
            "quick" | "languages" | "browse" => Some(CommandGroup::Explore),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Core, CommandGroup::Explore, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("datacheat {version}\n"));
    output.push_str("Searchable cheatsheet for SQL, Power Query M and DAX\n");
    output.push('\n');
    output.push_str("Usage: datacheat [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --output <MODE>  Output format [term, text, json]\n");
    output.push_str("  -h, --help           Print help\n");
    output.push_str("  -V, --version        Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::List { .. } => "list",
            CoreCommands::Search { .. } => "search",
            CoreCommands::View { .. } => "view",
        },
        Some(Commands::Explore(c)) => match c {
            ExploreCommands::Quick { .. } => "quick",
            ExploreCommands::Languages => "languages",
            ExploreCommands::Browse { .. } => "browse",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

/// Prints help for a command by name, falling back to the grouped help
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Explore(ExploreCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// List cards for one language, grouped by category
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Language (sql, powerquery, dax); defaults to the configured one
        #[arg(short, long)]
        language: Option<String>,

        /// Only cards whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search titles and descriptions across languages
    #[command(display_order = 2)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        /// Restrict the search to one language
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show entries in full, with highlighted code
    #[command(alias = "v", display_order = 3)]
    View {
        /// Entry ids (e.g. window-functions joins)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExploreCommands {
    /// List quick-access entries, or open one
    #[command(display_order = 10)]
    Quick {
        /// Quick-access entry id to open
        id: Option<String>,

        /// Language (sql, powerquery, dax); defaults to the configured one
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show languages, their categories and entry counts
    #[command(display_order = 11)]
    Languages,

    /// Interactive session: switch language, search, open cards
    #[command(display_order = 12)]
    Browse {
        /// Starting language; defaults to the configured one
        #[arg(short, long)]
        language: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (default-language, loading-delay-ms, preview-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for datacheat or a subcommand
    #[command(display_order = 21)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
