//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// blucky: classify, render and reorder on-chain link-in-bio profiles
#[derive(Parser, Debug)]
#[command(name = "blucky")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single link by URL and label
    Classify(ClassifyArgs),

    /// Compute the swaps that turn one order into another
    Plan(PlanArgs),

    /// Fetch and render a profile
    Show(ShowArgs),

    /// Reorder a profile's links through the mutation outbox
    Reorder(ReorderArgs),

    /// Queue creation of a new profile in the mutation outbox
    Create(CreateArgs),

    /// Queue link and profile edits in the mutation outbox
    Edit(EditArgs),

    /// Local view and click analytics
    Analytics(AnalyticsArgs),

    /// Manage linked zkLogin accounts
    Accounts(AccountsArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

/// Where a profile is read from
#[derive(Args, Debug, Clone)]
pub struct ProfileSourceArgs {
    /// Read the profile from a JSON file instead of the RPC endpoint
    #[arg(long)]
    pub profile_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Link URL
    #[arg(long)]
    pub url: String,

    /// Link label
    #[arg(long, default_value = "")]
    pub label: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Current order, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub current: Vec<String>,

    /// Desired order, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub desired: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Profile object ID
    pub object_id: String,

    #[command(flatten)]
    pub source: ProfileSourceArgs,

    /// Include share links
    #[arg(long)]
    pub share: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ReorderArgs {
    /// Profile object ID
    pub object_id: String,

    /// Desired order as link ids (e.g. link-2,link-0,link-1)
    #[arg(long, value_delimiter = ',', required = true)]
    pub order: Vec<String>,

    #[command(flatten)]
    pub source: ProfileSourceArgs,

    /// Print the plan without queueing any swaps
    #[arg(long)]
    pub dry_run: bool,

    /// Override the outbox path
    #[arg(long)]
    pub outbox: Option<PathBuf>,

    /// Override the pause between swaps in milliseconds
    #[arg(long)]
    pub swap_delay_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub bio: String,

    /// Avatar icon id or image URL
    #[arg(long, default_value = "")]
    pub avatar: String,

    /// Theme id (1-5)
    #[arg(long, default_value_t = 1)]
    pub theme: u64,

    /// Override the outbox path
    #[arg(long)]
    pub outbox: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Profile object ID
    pub object_id: String,

    /// Override the outbox path
    #[arg(long)]
    pub outbox: Option<PathBuf>,

    /// Used by link edits to check the current link list
    #[command(flatten)]
    pub source: ProfileSourceArgs,

    #[command(subcommand)]
    pub command: EditCommands,
}

#[derive(Subcommand, Debug)]
pub enum EditCommands {
    /// Append a link
    AddLink {
        #[arg(long)]
        label: String,

        #[arg(long)]
        url: String,
    },

    /// Replace the link at an index
    UpdateLink {
        #[arg(long)]
        index: usize,

        #[arg(long)]
        label: String,

        #[arg(long)]
        url: String,
    },

    /// Remove the link at an index
    RemoveLink {
        #[arg(long)]
        index: usize,
    },

    /// Replace the bio
    Bio {
        /// New bio text
        text: String,
    },

    /// Change the theme
    Theme {
        /// Theme id (1-5)
        id: u64,
    },

    /// Change the avatar
    Avatar {
        /// Icon id or image URL
        cid: String,
    },

    /// Delete the profile and its registry entry
    Delete,
}

#[derive(Args, Debug)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub command: AnalyticsCommands,
}

#[derive(Subcommand, Debug)]
pub enum AnalyticsCommands {
    /// Record a profile view
    View {
        /// Profile object ID
        profile_id: String,
    },

    /// Record a click on a link
    Click {
        /// Profile object ID
        profile_id: String,

        /// Label of the clicked link
        #[arg(long)]
        label: String,
    },

    /// Show counters for a profile
    Show {
        /// Profile object ID
        profile_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct AccountsArgs {
    #[command(subcommand)]
    pub command: AccountsCommands,
}

#[derive(Subcommand, Debug)]
pub enum AccountsCommands {
    /// Link a zkLogin email to a wallet address
    Link {
        #[arg(long)]
        email: String,

        #[arg(long)]
        wallet: String,
    },

    /// Remove the link for an email
    Unlink {
        #[arg(long)]
        email: String,
    },

    /// List linked accounts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the counterpart of an email or wallet
    Lookup {
        #[arg(long, conflicts_with = "wallet", required_unless_present = "wallet")]
        email: Option<String>,

        #[arg(long)]
        wallet: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
