//! Table and JSON rendering of dimension rows.

use clap::ColorChoice;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use energy_model::{DimensionKind, DimensionSummary, Resolution, describe_kind};
use serde::Serialize;

/// How command output is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Output format plus the `--color` choice applied to tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl RenderOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: ColorChoice::Auto,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

/// One row of the `kinds` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    pub kind: DimensionKind,
    pub label: &'static str,
    pub values: usize,
}

/// Every dimension kind with its number of recognized values.
pub fn kind_summaries() -> Vec<KindSummary> {
    DimensionKind::ALL
        .into_iter()
        .map(|kind| KindSummary {
            kind,
            label: kind.label(),
            values: describe_kind(kind).len(),
        })
        .collect()
}

pub fn render_resolutions(
    resolutions: &[Resolution],
    options: RenderOptions,
) -> serde_json::Result<String> {
    render(resolutions, options, resolution_table)
}

pub fn render_summaries(
    rows: &[DimensionSummary],
    options: RenderOptions,
) -> serde_json::Result<String> {
    render(rows, options, summary_table)
}

pub fn render_kinds(rows: &[KindSummary], options: RenderOptions) -> serde_json::Result<String> {
    render(rows, options, kinds_table)
}

fn render<T: Serialize>(
    rows: &[T],
    options: RenderOptions,
    build: fn(&[T]) -> Table,
) -> serde_json::Result<String> {
    match options.format {
        OutputFormat::Table => {
            let mut table = build(rows);
            // `auto` leaves terminal detection to comfy-table.
            match options.color {
                ColorChoice::Always => {
                    table.enforce_styling();
                }
                ColorChoice::Never => {
                    table.force_no_tty();
                }
                ColorChoice::Auto => {}
            }
            Ok(table.to_string())
        }
        OutputFormat::Json => serde_json::to_string_pretty(rows),
    }
}

/// Parse results: the input, its lookup token and the resolved fields.
pub fn resolution_table(resolutions: &[Resolution]) -> Table {
    let with_abbreviation = resolutions
        .iter()
        .any(|resolution| resolution.value.abbreviation.is_some());
    let mut header = vec!["Input", "Token", "Recognized", "Id", "Name", "Code"];
    if with_abbreviation {
        header.push("Abbreviation");
    }

    let mut table = Table::new();
    table.set_header(header.into_iter().map(header_cell));
    apply_table_style(&mut table);
    for resolution in resolutions {
        let value = &resolution.value;
        let mut row = vec![
            Cell::new(&resolution.input),
            Cell::new(&resolution.token),
            recognized_cell(resolution.recognized),
            Cell::new(value.id).set_alignment(CellAlignment::Right),
            Cell::new(value.name),
            Cell::new(value.code),
        ];
        if with_abbreviation {
            row.push(Cell::new(value.abbreviation.unwrap_or_default()));
        }
        table.add_row(row);
    }
    table
}

/// Canonical values of one kind.
pub fn summary_table(rows: &[DimensionSummary]) -> Table {
    let with_abbreviation = rows.iter().any(|row| row.abbreviation.is_some());
    let mut header = vec!["Id", "Name", "Code", "Display Name"];
    if with_abbreviation {
        header.push("Abbreviation");
    }

    let mut table = Table::new();
    table.set_header(header.into_iter().map(header_cell));
    apply_table_style(&mut table);
    for summary in rows {
        let mut row = vec![
            Cell::new(summary.id).set_alignment(CellAlignment::Right),
            Cell::new(summary.name),
            Cell::new(summary.code),
            Cell::new(summary.display_name),
        ];
        if with_abbreviation {
            row.push(Cell::new(summary.abbreviation.unwrap_or_default()));
        }
        table.add_row(row);
    }
    table
}

pub fn kinds_table(rows: &[KindSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(["Kind", "Label", "Values"].map(header_cell));
    apply_table_style(&mut table);
    for summary in rows {
        table.add_row(vec![
            Cell::new(summary.kind),
            Cell::new(summary.label),
            Cell::new(summary.values).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn recognized_cell(recognized: bool) -> Cell {
    if recognized {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Yellow)
    }
}
