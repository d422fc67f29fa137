//! Command handlers, one module per subcommand.

pub mod buy;
pub mod config_cmd;
pub mod info;
pub mod login;
pub mod logout;
pub mod methods;
pub mod profile;
pub mod search;
pub mod util;

use sikopat_core::Storefront;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::token::TokenFile;

/// Everything a handler needs: the facade, the token file and the token
/// read from it at startup (empty when logged out).
pub struct Context {
    pub shop: Storefront,
    pub token_file: TokenFile,
    pub token: String,
}

pub async fn dispatch(cmd: Command, ctx: &mut Context, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => login::handle(ctx, args, global).await,
        Command::Logout => logout::handle(ctx, global).await,
        Command::Profile(args) => profile::handle(ctx, &args, global).await,
        Command::Search(args) => search::handle(ctx, &args, global).await,
        Command::Methods => methods::handle(ctx, global).await,
        Command::Buy(args) => buy::handle(ctx, &args, global).await,
        Command::Info => info::handle(ctx, global),
        Command::Config(args) => config_cmd::handle(args, global),
    }
}
