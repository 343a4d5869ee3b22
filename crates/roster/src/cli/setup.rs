use clap::{ArgAction, Args, Parser, Subcommand};
use rosterapp::domains::Domain;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version,
    disable_help_subcommand = true,
    after_help = "Domains: members, events, announcements, gallery\n\nExamples:\n  roster list events --search clean\n  roster list members --filter club=\"Rotaract Club of KPRCAS\"\n  roster list announcements --tab unread"
)]
#[command(about = "Search, filter and export a membership organization's records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Config file to use instead of the default roster.toml
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// Search box, dropdowns and tab, as flags.
#[derive(Args, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Case-insensitive search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Equality filter, repeatable (e.g. role=Member, year=2024)
    #[arg(short, long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Show only one tab (e.g. upcoming, pinned, unread, videos)
    #[arg(short, long)]
    pub tab: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a collection
    #[command(alias = "ls", display_order = 1)]
    List {
        #[arg(default_value = "members")]
        domain: Domain,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Show the values each filter accepts
    #[command(display_order = 2)]
    Options {
        #[arg(default_value = "members")]
        domain: Domain,
    },

    /// Show one record
    #[command(alias = "v", display_order = 3)]
    View { domain: Domain, id: String },

    /// Mark an announcement as read
    #[command(display_order = 4)]
    Read { id: String },

    /// Export the filtered collection to CSV
    #[command(display_order = 5)]
    Export {
        #[arg(default_value = "members")]
        domain: Domain,

        #[command(flatten)]
        query: QueryArgs,

        /// Directory to write the file into
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Email or call a member
    #[command(display_order = 6)]
    Contact {
        /// Member id
        id: String,

        /// Message body for an email
        #[arg(short, long, required_unless_present = "call", conflicts_with = "call")]
        message: Option<String>,

        /// Produce a tel: link instead
        #[arg(long)]
        call: bool,
    },

    /// Add a member
    #[command(display_order = 7)]
    Add(AddArgs),

    /// Create the data file with sample data
    #[command(display_order = 20)]
    Init,

    /// Show configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (e.g., export_prefix)
        key: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub club: Option<String>,
    /// Defaults to member
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    /// Comma separated
    #[arg(long)]
    pub interests: Option<String>,
}
