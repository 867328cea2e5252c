//! `catchnet status`: API liveness check.

use catchnet_core::FilterCoordinator;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(coordinator: &FilterCoordinator, global: &GlobalOpts) -> Result<(), CliError> {
    let status = coordinator.client().fetch_status().await?;
    let base_url = coordinator.client().base_url().to_string();

    let out = output::render_single(
        global.output_format(),
        &status,
        |s| format!("API:     {base_url}\nMessage: {}", s.message),
        |s| s.message.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
