//! `sikopat login`

use dialoguer::{Input, Password};
use sikopat_core::SecretString;

use crate::cli::{GlobalOpts, LoginArgs};
use crate::error::CliError;
use crate::output;

use super::Context;
use super::util::prompt_error;

pub async fn handle(ctx: &mut Context, args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let username = match args.username {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(prompt_error)?,
    };
    let username = username.trim().to_owned();
    if username.is_empty() {
        return Err(CliError::Validation {
            field: "username".into(),
            reason: "must not be empty".into(),
        });
    }

    let password = match args.password {
        Some(pw) => pw,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(prompt_error)?,
    };
    let password = SecretString::from(password.trim().to_owned());

    let token = ctx.shop.login(&username, &password).await?;
    ctx.token_file.write(&token)?;
    ctx.token = token;

    output::notice(&format!("Logged in as {username}"), global.quiet);
    Ok(())
}
