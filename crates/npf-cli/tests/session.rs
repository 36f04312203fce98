//! Integration tests for the interactive session.

use std::io::Cursor;

use npf_cli::render::RenderOptions;
use npf_cli::session::{CommandError, Flow, HELP, Session, run_session};
use npf_model::Numeric;

const PLAIN: RenderOptions = RenderOptions { color: false };

fn run_script(script: &str) -> String {
    let mut output = Vec::new();
    run_session(Cursor::new(script), &mut output, PLAIN).expect("session runs");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_session_renders_initial_form() {
    let session = Session::new(PLAIN);
    let frame = session.take_frame().expect("initial frame");
    assert!(frame.starts_with("NPF rule\n"));
    assert!(frame.contains("https://sahavre.fr/wp/les-coulisses-de-la-regle-npf/"));
    assert!(frame.contains("Full frame [full]"));
    assert!(frame.contains("6000 px"));
    assert!(frame.contains("F1.4"));
    assert!(frame.contains("2.22 s"));
    assert!(session.take_frame().is_none());
}

#[test]
fn test_each_edit_produces_one_frame() {
    let mut session = Session::new(PLAIN);
    session.take_frame();

    assert_eq!(
        session.handle_line("set focalLength 85").unwrap(),
        Flow::Continue(None)
    );
    let frame = session.take_frame().expect("frame after edit");
    assert!(frame.contains("85 mm"));
    assert!(session.take_frame().is_none());
}

#[test]
fn test_edits_apply_in_order() {
    let mut session = Session::new(PLAIN);
    for line in [
        "set sensor-size mft",
        "set fNumber 2.8",
        "set focal_length 85",
        "set trailType slight",
    ] {
        session.handle_line(line).unwrap();
    }
    insta::assert_snapshot!(session.snapshot().to_string(), @"{mft, 6000, 85, 2.8, slight}");
}

#[test]
fn test_slider_edit_is_clamped_but_text_edit_is_not() {
    let mut session = Session::new(PLAIN);
    session.handle_line("slide pixelWidth 25000").unwrap();
    assert_eq!(session.snapshot().pixel_width, Numeric::Number(10_000));

    session.handle_line("set pixelWidth 25000").unwrap();
    assert_eq!(session.snapshot().pixel_width, Numeric::Number(25_000));
}

#[test]
fn test_cleared_field_shows_nan() {
    let mut session = Session::new(PLAIN);
    session.take_frame();
    session.handle_line("set focalLength").unwrap();
    assert!(session.snapshot().focal_length.is_nan());
    let frame = session.take_frame().expect("frame after edit");
    assert!(frame.contains("NaN mm"));
    assert!(frame.contains("not computable"));
}

#[test]
fn test_slider_on_dropdown_is_rejected() {
    let mut session = Session::new(PLAIN);
    let error = session.handle_line("slide sensorSize 2").unwrap_err();
    assert!(matches!(error, CommandError::NoSlider { .. }));
}

#[test]
fn test_show_and_help() {
    let mut session = Session::new(PLAIN);
    session.take_frame();
    session.handle_line("show").unwrap();
    assert!(session.take_frame().is_some());
    assert_eq!(
        session.handle_line("help").unwrap(),
        Flow::Continue(Some(HELP.to_string()))
    );
    assert!(HELP.contains("Run with -v to log every configuration change."));
    assert_eq!(session.handle_line("quit").unwrap(), Flow::Quit);
}

#[test]
fn test_scripted_session_reports_errors_and_continues() {
    let output = run_script("set aperture 2\nset fNumber 4\nquit\nset fNumber 8\n");
    assert!(output.contains("error: unknown field: aperture"));
    assert!(output.contains("F4"));
    assert!(!output.contains("F8"));
}

#[test]
fn test_scripted_session_ends_at_end_of_input() {
    let output = run_script("set trailType visible\n");
    assert!(output.contains("Visible trail [visible]"));
    assert!(output.ends_with("> \n"));
}
