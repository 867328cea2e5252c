//! `catchnet daily-view` and `catchnet exports`: per-port, per-date
//! reports for the current selection.

use tracing::warn;

use catchnet_core::{FilterCoordinator, IsoDate, Port};

use crate::cli::{GlobalOpts, ScopeArgs};
use crate::error::CliError;
use crate::output;

/// Which scoped report to fetch.
#[derive(Debug, Clone, Copy)]
pub enum Report {
    DailyView,
    Exports,
}

/// Parse a `--date` value, rejecting anything that is not `YYYY-MM-DD`.
fn parse_date(raw: &str) -> Result<IsoDate, CliError> {
    let date = IsoDate::new(raw);
    if date.to_naive_date().is_none() {
        return Err(CliError::Validation {
            field: "date".into(),
            reason: format!("expected YYYY-MM-DD, got '{raw}'"),
        });
    }
    Ok(date)
}

pub async fn handle(
    coordinator: &FilterCoordinator,
    args: &ScopeArgs,
    report: Report,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Validate before touching the network.
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let port = args.port.as_deref().map(Port::new);

    coordinator.initialize_filters().await?;

    if let Some(port) = port {
        coordinator.set_port(port);
    }
    if let Some(date) = date {
        coordinator.set_date(date);
    }

    let snapshot = coordinator.snapshot();
    for field in snapshot.stale_fields() {
        warn!(%field, "selected {field} is not among the advertised options");
    }

    let doc = match report {
        Report::DailyView => coordinator
            .daily_view_for_selection()
            .await?
            .map(catchnet_core::DailyView::into_json),
        Report::Exports => coordinator
            .daily_exports_for_selection()
            .await?
            .map(catchnet_core::DailyExports::into_json),
    };

    match doc {
        Some(doc) => {
            let out = output::render_document(global.output_format(), &doc);
            output::print_output(&out, global.quiet);
        }
        None => output::print_notice(
            "No data: no port and date available to select.",
            output::should_color(global.color),
            global.quiet,
        ),
    }
    Ok(())
}
