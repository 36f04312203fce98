//! Terminal rendering of the calculator form.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use npf_core::{
    Control, Dropdown, ExposureEstimate, FORM_TITLE, FormView, NotComputable, NumericInput,
    REFERENCE_TITLE, REFERENCE_URL, SliderSpec,
};
use npf_model::format_float;

const SLIDER_WIDTH: usize = 20;
const TABLE_WIDTH: u16 = 120;

/// Whether tables carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
}

/// Render the whole form: title, reference link, inputs and result.
pub fn render_form(view: &FormView, options: RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(FORM_TITLE);
    out.push('\n');
    out.push_str(&format!("Theory: {REFERENCE_TITLE} <{REFERENCE_URL}>\n"));
    out.push_str(&input_table(view, options).to_string());
    out.push('\n');
    out.push_str(&result_table(&view.result, options).to_string());
    out
}

/// Plain listing of the dropdown choices.
pub fn options_text(view: &FormView) -> String {
    let mut lines = Vec::new();
    for control in &view.controls {
        let Control::Dropdown(dropdown) = control else {
            continue;
        };
        lines.push(format!("{} ({}):", dropdown.label, dropdown.field));
        for option in &dropdown.options {
            lines.push(format!("  {:<10}{}", option.value, option.label));
        }
    }
    lines.join("\n")
}

fn input_table(view: &FormView, options: RenderOptions) -> Table {
    let mut table = new_table(options);
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Value"),
        header_cell("Slider"),
        header_cell("Choices / range"),
    ]);
    for control in &view.controls {
        match control {
            Control::Dropdown(dropdown) => table.add_row(dropdown_row(dropdown)),
            Control::Numeric(input) => table.add_row(numeric_row(input)),
        };
    }
    table
}

fn dropdown_row(dropdown: &Dropdown) -> Vec<Cell> {
    let value = match dropdown.selected() {
        Some(option) => Cell::new(format!("{} [{}]", option.label, option.value))
            .add_attribute(Attribute::Bold),
        None => Cell::new(format!("{} [unrecognized]", dropdown.value)).fg(Color::Yellow),
    };
    let choices = dropdown
        .options
        .iter()
        .map(|option| option.value.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        label_cell(dropdown.label),
        value,
        dim_cell("-"),
        dim_cell(choices),
    ]
}

fn numeric_row(input: &NumericInput) -> Vec<Cell> {
    let mut text = format!("{}{}", input.prefix.unwrap_or_default(), input.text);
    if let Some(unit) = input.unit {
        text.push(' ');
        text.push_str(unit);
    }
    let value = if input.value.is_nan() {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text).add_attribute(Attribute::Bold)
    };
    vec![
        label_cell(input.label),
        value,
        Cell::new(slider_bar(&input.slider, input.value)),
        dim_cell(range_text(&input.slider)),
    ]
}

fn result_table(result: &Result<ExposureEstimate, NotComputable>, options: RenderOptions) -> Table {
    let mut table = new_table(options);
    table.set_header(vec![header_cell("Result"), header_cell("Value")]);
    match result {
        Ok(estimate) => {
            table.add_row(vec![
                label_cell("Pixel pitch"),
                Cell::new(format!("{:.2} µm", estimate.pixel_pitch_um)),
            ]);
            table.add_row(vec![
                label_cell("Crop factor"),
                Cell::new(format!("{:.2}x", estimate.crop_factor)),
            ]);
            table.add_row(vec![
                label_cell("35 mm equivalent"),
                Cell::new(format!("{:.1} mm", estimate.equivalent_focal_length_mm)),
            ]);
            table.add_row(vec![
                label_cell("Max exposure (NPF)"),
                Cell::new(format!("{:.2} s", estimate.max_exposure_s))
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
        }
        Err(reason) => {
            table.add_row(vec![
                label_cell("Max exposure (NPF)"),
                Cell::new(format!("not computable: {reason}")).fg(Color::Yellow),
            ]);
        }
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Text track with the thumb at the stored value.
pub fn slider_bar(slider: &SliderSpec, value: f64) -> String {
    let thumb = (slider.fraction(value) * (SLIDER_WIDTH - 1) as f64).round() as usize;
    let mut bar = String::with_capacity(SLIDER_WIDTH + 2);
    bar.push('[');
    for index in 0..SLIDER_WIDTH {
        bar.push(if index == thumb { 'o' } else { '-' });
    }
    bar.push(']');
    bar
}

fn range_text(slider: &SliderSpec) -> String {
    format!(
        "{} to {}, step {}",
        format_float(slider.min),
        format_float(slider.max),
        format_float(slider.step)
    )
}

fn new_table(options: RenderOptions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
    if options.color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
