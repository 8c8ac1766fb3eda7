use anyhow::{Context, Result};
use clap::ColorChoice;
use energy_model::{Resolution, describe_kind, resolve};
use tracing::{debug, info, info_span, warn};

use energy_cli::logging::redact_value;
use energy_cli::outcome::ParseOutcome;
use energy_cli::render::{
    OutputFormat, RenderOptions, kind_summaries, render_kinds, render_resolutions,
    render_summaries,
};

use crate::cli::{KindsArgs, ListArgs, OutputFormatArg, ParseArgs};

pub fn run_parse(args: &ParseArgs, color: ColorChoice) -> Result<ParseOutcome> {
    let span = info_span!("parse", kind = %args.kind);
    let _guard = span.enter();

    let resolutions: Vec<Resolution> = args
        .values
        .iter()
        .map(|input| {
            debug!(input = redact_value(input), "resolving value");
            resolve(args.kind, input)
        })
        .collect();
    let outcome = ParseOutcome::from_resolutions(&resolutions);
    info!(
        total = outcome.total,
        unrecognized = outcome.unrecognized,
        "values resolved"
    );
    if args.fail_on_unrecognized {
        for resolution in resolutions.iter().filter(|resolution| !resolution.recognized) {
            warn!(input = redact_value(&resolution.input), "value is unrecognized");
        }
    }

    let output = render_resolutions(&resolutions, render_options(args.format, color))
        .context("render parse results")?;
    println!("{output}");
    Ok(outcome)
}

pub fn run_list(args: &ListArgs, color: ColorChoice) -> Result<()> {
    let rows = describe_kind(args.kind);
    info!(kind = %args.kind, values = rows.len(), "listing dimension values");
    let output = render_summaries(&rows, render_options(args.format, color))
        .with_context(|| format!("render {} values", args.kind))?;
    println!("{output}");
    Ok(())
}

pub fn run_kinds(args: &KindsArgs, color: ColorChoice) -> Result<()> {
    let rows = kind_summaries();
    debug!(kinds = rows.len(), "listing dimension kinds");
    let output = render_kinds(&rows, render_options(args.format, color))
        .context("render dimension kinds")?;
    println!("{output}");
    Ok(())
}

fn render_options(format: OutputFormatArg, color: ColorChoice) -> RenderOptions {
    let format = match format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    RenderOptions::new(format).with_color(color)
}
