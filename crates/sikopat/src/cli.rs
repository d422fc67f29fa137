//! Clap derive structures for the `sikopat` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// sikopat -- buy from the Sikopat storefront without a browser
#[derive(Debug, Parser)]
#[command(
    name = "sikopat",
    version,
    about = "Browse and buy from the Sikopat storefront",
    long_about = "Logs in to the Sikopat storefront, keeps the session between runs,\n\
        and caches the catalog and payment methods locally.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Storefront base URL, including the front controller
    #[arg(long, env = "SIKOPAT_BASE_URL", global = true)]
    pub url: Option<String>,

    /// Directory for the token file and cache
    #[arg(long, env = "SIKOPAT_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Cache file name inside the data directory
    #[arg(long, env = "SIKOPAT_DATA_FILE", global = true)]
    pub data_file: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SIKOPAT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session
    Login(LoginArgs),

    /// End the session and forget it
    Logout,

    /// Show balance and purchase history
    #[command(alias = "me")]
    Profile(ProfileArgs),

    /// List products matching a fuzzy filter
    #[command(alias = "ls")]
    Search(SearchArgs),

    /// List payment methods
    Methods,

    /// Buy a product with the default payment method
    Buy(BuyArgs),

    /// Show where the client points and stores its data
    Info,

    /// Show or edit the config file
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(long, short = 'u', env = "SIKOPAT_USERNAME")]
    pub username: Option<String>,

    /// Password (prompted without echo when omitted)
    #[arg(long, env = "SIKOPAT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Fetch from the storefront instead of the cache
    #[arg(long, short = 'r')]
    pub refresh: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Characters that must appear in order in the product name
    #[arg(default_value = "")]
    pub filter: String,
}

#[derive(Debug, Args)]
pub struct BuyArgs {
    /// Filter that must match exactly one product
    pub filter: String,

    /// Number of units
    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub quantity: u32,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y', alias = "force", short_alias = 'f')]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective file and environment settings
    Show,

    /// Set a key in the config file (an empty value clears it)
    Set {
        /// One of: base_url, data_dir, data_file, timeout
        key: String,
        value: String,
    },

    /// Print the config file path
    Path,
}
