//! Shared helpers for command handlers.

use std::io::{self, IsTerminal};

use tabled::Tabled;

use sikopat_core::Product;

use crate::error::CliError;
use crate::output::rupiah;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.to_owned(),
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_error)
}

pub fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::Io(io::Error::other(err))
}

// ── Shared rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Stock")]
    pub qty: i64,
    #[tabled(rename = "Price")]
    pub price: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            qty: p.qty,
            price: rupiah(p.price),
        }
    }
}
