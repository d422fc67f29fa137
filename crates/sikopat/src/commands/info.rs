//! `sikopat info`

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Serialize)]
struct InfoView {
    version: String,
    base_url: String,
    data_dir: PathBuf,
    cache_file: PathBuf,
    token_file: PathBuf,
    logged_in_as: Option<String>,
}

fn detail(v: &InfoView) -> String {
    format!(
        "Version:     {}\nStorefront:  {}\nData dir:    {}\nCache file:  {}\nToken file:  {}\nLogged in:   {}",
        v.version,
        v.base_url,
        v.data_dir.display(),
        v.cache_file.display(),
        v.token_file.display(),
        v.logged_in_as.as_deref().unwrap_or("no"),
    )
}

pub fn handle(ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    let info = ctx.shop.info();
    let view = InfoView {
        version: info.version,
        base_url: info.base_url,
        data_dir: info.data_dir,
        cache_file: info.cache_file,
        token_file: ctx.token_file.path().to_path_buf(),
        logged_in_as: ctx
            .shop
            .store()
            .profile(&ctx.token)
            .map(|p| p.username.clone()),
    };

    let out = output::render_single(global.output, &view, detail, |v| v.base_url.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
