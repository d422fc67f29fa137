//! `sikopat config`

use sikopat_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn detail(c: &Config) -> String {
    let or_default = |v: Option<String>| v.unwrap_or_else(|| "(default)".into());
    format!(
        "base_url:   {}\ndata_dir:   {}\ndata_file:  {}\ntimeout:    {}",
        c.base_url,
        or_default(c.data_dir.as_deref().map(|d| d.display().to_string())),
        or_default(c.data_file.clone()),
        c.timeout.map_or_else(|| "none".into(), |t| format!("{t}s")),
    )
}

/// Apply `key = value` to `cfg`. An empty value resets optional keys.
fn set_key(cfg: &mut Config, key: &str, value: &str) -> Result<(), CliError> {
    let value = value.trim();
    let optional = |v: &str| (!v.is_empty()).then(|| v.to_owned());

    match key {
        "base_url" | "base-url" | "url" => value.clone_into(&mut cfg.base_url),
        "data_dir" | "data-dir" => cfg.data_dir = optional(value).map(Into::into),
        "data_file" | "data-file" => cfg.data_file = optional(value),
        "timeout" => {
            cfg.timeout = optional(value)
                .map(|v| v.parse())
                .transpose()
                .map_err(|_| CliError::Validation {
                    field: "timeout".into(),
                    reason: "must be a number (seconds)".into(),
                })?;
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: base_url, data_dir, data_file, timeout"
                ),
            });
        }
    }
    Ok(())
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_path();

    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_from(&path)?;
            let out = output::render_single(global.output, &cfg, detail, |c| c.base_url.clone())?;
            output::print_output(&out, global.quiet);
        }
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_from(&path)?;
            set_key(&mut cfg, &key, &value)?;
            cfg.to_sikopat_config()?;
            config::save_config(&cfg)?;
            output::notice(&format!("Set {key} in {}", path.display()), global.quiet);
        }
        ConfigCommand::Path => output::print_output(&path.display().to_string(), global.quiet),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn set_key_updates_and_clears() {
        let mut cfg = Config::default();
        set_key(&mut cfg, "data-file", "cache.json").unwrap();
        set_key(&mut cfg, "timeout", "30").unwrap();
        assert_eq!(cfg.data_file.as_deref(), Some("cache.json"));
        assert_eq!(cfg.timeout, Some(30));

        set_key(&mut cfg, "data_file", "").unwrap();
        assert_eq!(cfg.data_file, None);
    }

    #[test]
    fn set_key_rejects_unknown_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            set_key(&mut cfg, "colour", "red"),
            Err(CliError::Validation { .. })
        ));
        assert!(matches!(
            set_key(&mut cfg, "timeout", "soon"),
            Err(CliError::Validation { .. })
        ));
        assert_eq!(cfg, Config::default());
    }
}
