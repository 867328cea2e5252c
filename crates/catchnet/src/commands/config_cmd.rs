//! Config subcommand handlers.

use catchnet_config::{self as config, Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, ConfigInitArgs, GlobalOpts, OutputFormat};
use crate::config::active_profile_name;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = match global.output_format() {
                OutputFormat::Table | OutputFormat::Plain => {
                    toml::to_string_pretty(&cfg).map_err(|e| CliError::Config {
                        message: format!("failed to render config: {e}"),
                    })?
                }
                OutputFormat::Json => output::render_json(&cfg, false),
                OutputFormat::JsonCompact => output::render_json(&cfg, true),
                OutputFormat::Yaml => output::render_yaml(&cfg),
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init(init) => {
            let mut cfg = config::load_config_or_default();
            let name = global.profile.clone().unwrap_or_else(|| "default".into());
            let path = init_profile(&mut cfg, &name, init)?;
            if !global.quiet {
                eprintln!("Saved profile '{name}' to {}", path.display());
                eprintln!("Active profile: {}", active_profile_name(global, &cfg));
            }
            Ok(())
        }
    }
}

/// Validate and insert a profile, then write the config file.
fn init_profile(
    cfg: &mut Config,
    name: &str,
    init: ConfigInitArgs,
) -> Result<std::path::PathBuf, CliError> {
    config::parse_api_url(&init.url)?;
    if let Some(ca) = init.ca_cert.as_ref().filter(|ca| !ca.is_file()) {
        return Err(CliError::Validation {
            field: "ca_cert".into(),
            reason: format!("{} is not a readable file", ca.display()),
        });
    }

    cfg.profiles.insert(
        name.to_owned(),
        Profile {
            api_url: init.url,
            ca_cert: init.ca_cert,
            timeout: init.profile_timeout,
        },
    );
    if init.set_default || cfg.profiles.len() == 1 {
        cfg.default_profile = Some(name.to_owned());
    }

    Ok(config::save_config(cfg)?)
}
