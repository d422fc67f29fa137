mod cli;
mod commands;
mod error;
mod output;
mod token;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sikopat_core::{SikopatConfig, Storefront};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::commands::Context;
use crate::error::CliError;
use crate::token::TokenFile;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Config edits run without a storefront.
    if let Command::Config(args) = cli.command {
        return commands::config_cmd::handle(args, &cli.global);
    }

    let config = build_config(&cli.global)?;
    let token_file = TokenFile::in_dir(&config.data_dir);
    let token = token_file.read();

    let mut ctx = Context {
        shop: Storefront::new(config),
        token_file,
        token,
    };

    // Login starts a new session and info stays offline.
    if !matches!(cli.command, Command::Login(_) | Command::Info) && !ctx.token.is_empty() {
        let resumed = ctx.shop.resume(&ctx.token).await;
        tracing::debug!(resumed, "session resume");
    }

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &mut ctx, &cli.global).await
}

/// Config file and environment, overridden by command-line flags.
fn build_config(global: &GlobalOpts) -> Result<SikopatConfig, CliError> {
    let mut cfg = sikopat_config::load_config()?;

    if let Some(url) = &global.url {
        cfg.base_url.clone_from(url);
    }
    if let Some(dir) = &global.data_dir {
        cfg.data_dir = Some(dir.clone());
    }
    if let Some(file) = &global.data_file {
        cfg.data_file = Some(file.clone());
    }

    Ok(cfg.to_sikopat_config()?)
}
