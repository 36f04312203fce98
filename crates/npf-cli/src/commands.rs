use std::io::{self, Write};

use anyhow::{Context, Result};
use npf_core::{FormView, StateStore, log_snapshot};
use npf_model::{CameraConfiguration, Field};
use serde_json::json;
use tracing::{debug, info_span};

use crate::cli::{ComputeArgs, OutputArg};
use crate::render::{RenderOptions, options_text, render_form};
use crate::session::run_session;

/// Outcome of a one-shot computation.
#[derive(Debug)]
pub struct ComputeResult {
    pub configuration: CameraConfiguration,
    pub computable: bool,
}

pub fn run_session_stdio(options: RenderOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, options).context("interactive session")
}

/// Apply the raw values from `args` to a fresh store and print the result.
pub fn run_compute<W: Write>(
    args: &ComputeArgs,
    output: &mut W,
    options: RenderOptions,
) -> Result<ComputeResult> {
    let span = info_span!("compute");
    let _guard = span.enter();

    let mut store = StateStore::new();
    let _logger = store.subscribe(log_snapshot);
    for (field, raw) in raw_values(args) {
        debug!(%field, raw, "applying flag");
        store.apply(FormView::text_edit(field, raw));
    }

    let configuration = store.snapshot().clone();
    let view = FormView::from_snapshot(&configuration);
    match args.output {
        OutputArg::Table => {
            writeln!(output, "{}", render_form(&view, options)).context("write form")?;
        }
        OutputArg::Json => {
            let document = json!({
                "configuration": &configuration,
                "estimate": view.result.as_ref().ok(),
                "error": view.result.as_ref().err().map(ToString::to_string),
            });
            let text = serde_json::to_string_pretty(&document).context("serialize result")?;
            writeln!(output, "{text}").context("write result")?;
        }
    }

    Ok(ComputeResult {
        configuration,
        computable: view.result.is_ok(),
    })
}

pub fn run_options<W: Write>(output: &mut W) -> Result<()> {
    let view = FormView::from_snapshot(&CameraConfiguration::default());
    writeln!(output, "{}", options_text(&view)).context("write options")?;
    Ok(())
}

/// Flag values in form order, skipping flags that were not given.
fn raw_values(args: &ComputeArgs) -> Vec<(Field, &str)> {
    [
        (Field::SensorSize, &args.sensor_size),
        (Field::PixelWidth, &args.pixel_width),
        (Field::FocalLength, &args.focal_length),
        (Field::FNumber, &args.f_number),
        (Field::TrailType, &args.trail_type),
    ]
    .into_iter()
    .filter_map(|(field, raw)| raw.as_deref().map(|raw| (field, raw)))
    .collect()
}
