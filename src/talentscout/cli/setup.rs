use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "talentscout",
    bin_name = "talentscout",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Staged filtering over a catalog of creator profiles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON catalog to load instead of the configured or built-in one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Seed gender (female, male, anything else is other)
    #[arg(long, global = true, value_name = "G", help_heading = "Options")]
    pub gender: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply filters and list matching creators
    List(ListArgs),

    /// Show the options offered for label dimensions
    Facets {
        /// Only this dimension
        dimension: Option<String>,
    },

    /// Describe every filter dimension
    Dimensions,

    /// Interactive editing session over stdin
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },

    /// Print help
    Help {
        /// Command to show help for
        command: Option<String>,
    },
}

/// One flag per dimension. Label flags repeat or take comma-separated
/// lists; range flags take `A..B` with optional k/m suffixes.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[arg(long, value_name = "LABEL")]
    pub platform: Vec<String>,

    #[arg(long, value_name = "LABEL")]
    pub category: Vec<String>,

    #[arg(long, value_name = "LABEL")]
    pub content_type: Vec<String>,

    #[arg(long, value_name = "A..B")]
    pub followers: Option<String>,

    #[arg(long, value_name = "LABEL")]
    pub country: Vec<String>,

    /// Case-insensitive substring
    #[arg(long, value_name = "TEXT")]
    pub city: Option<String>,

    #[arg(long, value_name = "A..B")]
    pub price: Option<String>,

    #[arg(long, value_name = "A..B")]
    pub age: Option<String>,

    #[arg(long, value_name = "LABEL")]
    pub ethnicity: Vec<String>,

    #[arg(long, value_name = "LABEL")]
    pub language: Vec<String>,

    /// Page to show, starting at 1
    #[arg(long, value_name = "N")]
    pub page: Option<usize>,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Session,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse Commands:",
            CommandGroup::Session => "Session Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "facets" | "dimensions" => Some(CommandGroup::Browse),
            "shell" => Some(CommandGroup::Session),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Browse, CommandGroup::Session, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("talentscout {version}\n"));
    output.push_str("Staged filtering over a catalog of creator profiles\n");
    output.push('\n');
    output.push_str("Usage: talentscout [OPTIONS] [COMMAND]\n");

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
    output.push_str("      --catalog <PATH>  JSON catalog to load\n");
    output.push_str("      --gender <G>      Seed gender\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::List(_)) => "list",
        Some(Commands::Facets { .. }) => "facets",
        Some(Commands::Dimensions) => "dimensions",
        Some(Commands::Shell) => "shell",
        Some(Commands::Config { .. }) => "config",
        Some(Commands::Help { .. }) | None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    print_grouped_help();
}
