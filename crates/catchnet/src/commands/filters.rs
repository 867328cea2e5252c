//! `catchnet filters`: load the option lists and show them with the
//! default selection.

use serde::Serialize;
use tabled::Tabled;

use catchnet_core::{FilterCoordinator, FilterOptions, Selection};

use crate::cli::{FilterKind, FiltersArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct FiltersView<'a> {
    options: &'a FilterOptions,
    selection: &'a Selection,
}

#[derive(Tabled)]
struct FilterRow {
    #[tabled(rename = "Filter")]
    filter: &'static str,
    #[tabled(rename = "Selected")]
    selected: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Options")]
    options: String,
}

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Selected")]
    selected: &'static str,
}

fn joined<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn summary_rows(view: &FiltersView<'_>) -> Vec<FilterRow> {
    let (opts, sel) = (view.options, view.selection);
    vec![
        FilterRow {
            filter: "port",
            selected: sel.port.to_string(),
            count: opts.ports.len(),
            options: joined(&opts.ports),
        },
        FilterRow {
            filter: "date",
            selected: sel.date.to_string(),
            count: opts.dates.len(),
            options: joined(&opts.dates),
        },
        FilterRow {
            filter: "vessel",
            selected: sel.vessel.to_string(),
            count: opts.vessels.len(),
            options: joined(&opts.vessels),
        },
    ]
}

fn render_one_list<T>(global: &GlobalOpts, items: &[T], selected: &T) -> String
where
    T: Serialize + ToString + PartialEq,
{
    output::render_list(
        global.output_format(),
        items,
        |item| ValueRow {
            value: item.to_string(),
            selected: if item == selected { "*" } else { "" },
        },
        ToString::to_string,
    )
}

pub async fn handle(
    coordinator: &FilterCoordinator,
    args: &FiltersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    coordinator.initialize_filters().await?;
    let snapshot = coordinator.snapshot();
    let (opts, sel) = (&*snapshot.options, &snapshot.selection);

    let out = match args.only {
        Some(FilterKind::Ports) => render_one_list(global, &opts.ports, &sel.port),
        Some(FilterKind::Dates) => render_one_list(global, &opts.dates, &sel.date),
        Some(FilterKind::Vessels) => render_one_list(global, &opts.vessels, &sel.vessel),
        None => {
            let view = FiltersView {
                options: opts,
                selection: sel,
            };
            output::render_single(
                global.output_format(),
                &view,
                |v| {
                    tabled::Table::new(summary_rows(v))
                        .with(tabled::settings::Style::rounded())
                        .to_string()
                },
                |v| {
                    summary_rows(v)
                        .into_iter()
                        .map(|row| format!("{}\t{}", row.filter, row.selected))
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            )
        }
    };

    output::print_output(&out, global.quiet);
    Ok(())
}
