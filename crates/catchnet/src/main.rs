mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use catchnet_core::FilterCoordinator;

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;

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
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    let cfg = catchnet_config::load_config_or_default();
    let output = config::resolve_output(&cli.global, &cfg);

    match cli.command {
        // Config commands never talk to the API, and must keep working
        // when the file holds a bad output format so it can be inspected.
        Command::Config(args) => {
            cli.global.output = Some(output.unwrap_or(OutputFormat::Table));
            commands::config_cmd::handle(args, &cli.global)
        }

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "catchnet", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            cli.global.output = Some(output?);
            let client_config = config::resolve_client_config(&cli.global, &cfg)?;
            let coordinator = FilterCoordinator::new(&client_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &coordinator, &cli.global).await
        }
    }
}
