//! Resolves the effective `ClientConfig` for a command.
//!
//! Precedence: `--api-url` / `--timeout` (or their env vars) over the
//! active profile, over the built-in default endpoint. `--output` falls
//! back to `defaults.output` the same way.

use clap::ValueEnum;

use catchnet_config::{Config, parse_api_url, profile_to_client_config, timeout_from_secs};
use catchnet_core::ClientConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Name of the profile in effect: `--profile`, else the file's default.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Output format: `--output` / `CATCHNET_OUTPUT`, else `defaults.output`.
pub fn resolve_output(global: &GlobalOpts, cfg: &Config) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    OutputFormat::from_str(&cfg.defaults.output, true).map_err(|_| CliError::Validation {
        field: "defaults.output".into(),
        reason: format!(
            "unknown output format '{}' (expected table, json, json-compact, yaml or plain)",
            cfg.defaults.output
        ),
    })
}

pub fn resolve_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut client = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile_to_client_config(profile, &cfg.defaults)?,
        // Asking for a profile by name that doesn't exist is an error; a
        // missing implicit default just means "use the built-in endpoint".
        None if global.profile.is_some() => {
            let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
            names.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if names.is_empty() {
                    "(none)".into()
                } else {
                    names.join(", ")
                },
            });
        }
        None => ClientConfig {
            timeout: timeout_from_secs(cfg.defaults.timeout),
            ..ClientConfig::default()
        },
    };

    if let Some(ref raw) = global.api_url {
        client.base_url = parse_api_url(raw)?;
    }
    if global.timeout.is_some() {
        client.timeout = timeout_from_secs(global.timeout);
    }

    tracing::debug!(
        profile = %profile_name,
        base_url = %client.base_url,
        timeout = ?client.timeout,
        "resolved client config"
    );
    Ok(client)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use catchnet_config::Profile;

    use super::*;
    use crate::cli::ColorMode;

    fn opts() -> GlobalOpts {
        GlobalOpts {
            profile: None,
            api_url: None,
            output: None,
            color: ColorMode::Never,
            verbose: 0,
            quiet: false,
            timeout: None,
        }
    }

    fn config_with_profile() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                api_url: "http://10.1.1.1:9000".into(),
                ca_cert: None,
                timeout: Some(20),
            },
        );
        cfg
    }

    #[test]
    fn falls_back_to_builtin_endpoint() {
        let client = resolve_client_config(&opts(), &Config::default()).unwrap();
        assert_eq!(client.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(client.timeout, None);
    }

    #[test]
    fn profile_is_used_when_present() {
        let client = resolve_client_config(&opts(), &config_with_profile()).unwrap();
        assert_eq!(client.base_url.as_str(), "http://10.1.1.1:9000/");
        assert_eq!(client.timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn flags_override_profile() {
        let mut global = opts();
        global.api_url = Some("https://api.example.com/catchnet".into());
        global.timeout = Some(0);

        let client = resolve_client_config(&global, &config_with_profile()).unwrap();
        assert_eq!(client.base_url.as_str(), "https://api.example.com/catchnet");
        assert_eq!(client.timeout, None);
    }

    #[test]
    fn output_defaults_to_table() {
        assert_eq!(
            resolve_output(&opts(), &Config::default()).unwrap(),
            OutputFormat::Table
        );
    }

    #[test]
    fn output_comes_from_config_defaults() {
        let mut cfg = Config::default();
        cfg.defaults.output = "json-compact".into();
        assert_eq!(
            resolve_output(&opts(), &cfg).unwrap(),
            OutputFormat::JsonCompact
        );
    }

    #[test]
    fn output_flag_beats_config_defaults() {
        let mut cfg = Config::default();
        cfg.defaults.output = "yaml".into();
        let mut global = opts();
        global.output = Some(OutputFormat::Plain);
        assert_eq!(resolve_output(&global, &cfg).unwrap(), OutputFormat::Plain);
    }

    #[test]
    fn unknown_configured_output_is_rejected() {
        let mut cfg = Config::default();
        cfg.defaults.output = "xml".into();
        assert!(matches!(
            resolve_output(&opts(), &cfg),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn named_missing_profile_is_an_error() {
        let mut global = opts();
        global.profile = Some("prod".into());

        let err = resolve_client_config(&global, &config_with_profile()).unwrap_err();
        assert!(matches!(
            err,
            CliError::ProfileNotFound { ref name, ref available } if name == "prod" && available == "default"
        ));
    }
}
