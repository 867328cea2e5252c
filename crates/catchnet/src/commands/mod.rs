//! Command dispatch: bridges CLI args -> coordinator calls -> output formatting.

pub mod config_cmd;
pub mod daily;
pub mod filters;
pub mod status;

use catchnet_core::FilterCoordinator;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    coordinator: &FilterCoordinator,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Filters(args) => filters::handle(coordinator, &args, global).await,
        Command::DailyView(args) => {
            daily::handle(coordinator, &args, daily::Report::DailyView, global).await
        }
        Command::Exports(args) => {
            daily::handle(coordinator, &args, daily::Report::Exports, global).await
        }
        Command::Status => status::handle(coordinator, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
