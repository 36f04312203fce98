//! Interactive form session.
//!
//! A [`Session`] is the application context: it owns the one [`StateStore`]
//! of the run, subscribes the diagnostic logger, and binds a [`FormView`]
//! whose render callback produces a fresh frame after every update. Commands
//! read from the terminal are translated into the same edits a form control
//! would issue.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use npf_core::{FormView, StateStore, Subscription, log_snapshot};
use npf_model::{CameraConfiguration, Field, NpfError};
use thiserror::Error;
use tracing::{info, warn};

use crate::render::{RenderOptions, options_text, render_form};

pub const HELP: &str = "\
Commands:
  set <field> <value>       type into a field (any field; empty value clears it)
  slide <field> <position>  drag a slider (pixelWidth, focalLength, fNumber)
  show                      render the form again
  options                   list sensor size and trail type choices
  help                      show this message
  quit                      leave the session
Fields: sensorSize, pixelWidth, focalLength, fNumber, trailType
Run with -v to log every configuration change.";

const PROMPT: &str = "> ";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),
    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error(transparent)]
    Field(#[from] NpfError),
    #[error("{field} has no slider")]
    NoSlider { field: Field },
    #[error("slider position must be a number, got {0:?}")]
    InvalidPosition(String),
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Set { field: Field, raw: String },
    Slide { field: Field, position: f64 },
    Show,
    Options,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, rest) = split_word(line);
        let command = match name.to_lowercase().as_str() {
            "set" => {
                let (field, raw) = split_word(rest);
                SessionCommand::Set {
                    field: parse_field("set", field)?,
                    raw: raw.to_string(),
                }
            }
            "slide" => {
                let (field, position) = split_word(rest);
                let field = parse_field("slide", field)?;
                if position.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "slide",
                        argument: "position",
                    });
                }
                let position = position
                    .parse::<f64>()
                    .map_err(|_| CommandError::InvalidPosition(position.to_string()))?;
                SessionCommand::Slide { field, position }
            }
            "show" => SessionCommand::Show,
            "options" => SessionCommand::Options,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => return Err(CommandError::UnknownCommand(name.to_string())),
        };
        Ok(Some(command))
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading, optionally printing a message first.
    Continue(Option<String>),
    Quit,
}

/// The application context of one interactive run.
pub struct Session {
    store: StateStore,
    render_options: RenderOptions,
    frame: Rc<RefCell<Option<String>>>,
    _logger: Subscription,
    _view: Subscription,
}

impl Session {
    pub fn new(render_options: RenderOptions) -> Self {
        let mut store = StateStore::new();
        log_snapshot(store.snapshot());
        let logger = store.subscribe(log_snapshot);

        let frame = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&frame);
        let view = FormView::bind(&mut store, move |view| {
            *sink.borrow_mut() = Some(render_form(view, render_options));
        });

        Self {
            store,
            render_options,
            frame,
            _logger: logger,
            _view: view,
        }
    }

    pub fn snapshot(&self) -> &CameraConfiguration {
        self.store.snapshot()
    }

    /// The frame rendered since the last call, if any.
    pub fn take_frame(&self) -> Option<String> {
        self.frame.borrow_mut().take()
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow, CommandError> {
        let Some(command) = SessionCommand::parse(line)? else {
            return Ok(Flow::Continue(None));
        };
        self.handle(command)
    }

    pub fn handle(&mut self, command: SessionCommand) -> Result<Flow, CommandError> {
        match command {
            SessionCommand::Set { field, raw } => {
                let update = if field.is_numeric() {
                    FormView::text_edit(field, &raw)
                } else {
                    FormView::select(field, &raw)
                };
                self.store.apply(update);
            }
            SessionCommand::Slide { field, position } => {
                let update = FormView::slider_edit(field, position)
                    .ok_or(CommandError::NoSlider { field })?;
                self.store.apply(update);
            }
            SessionCommand::Show => {
                let view = FormView::from_snapshot(self.store.snapshot());
                *self.frame.borrow_mut() = Some(render_form(&view, self.render_options));
            }
            SessionCommand::Options => {
                let view = FormView::from_snapshot(self.store.snapshot());
                return Ok(Flow::Continue(Some(options_text(&view))));
            }
            SessionCommand::Help => return Ok(Flow::Continue(Some(HELP.to_string()))),
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue(None))
    }
}

/// Run a session until `quit` or end of input.
pub fn run_session<R, W>(mut input: R, output: &mut W, options: RenderOptions) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(options);
    info!("session started");
    if let Some(frame) = session.take_frame() {
        writeln!(output, "{frame}")?;
    }
    writeln!(output, "Type `help` for commands.")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        match session.handle_line(&line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue(message)) => {
                if let Some(message) = message {
                    writeln!(output, "{message}")?;
                }
            }
            Err(error) => {
                warn!(%error, "rejected command");
                writeln!(output, "error: {error}")?;
            }
        }
        if let Some(frame) = session.take_frame() {
            writeln!(output, "{frame}")?;
        }
    }
    info!(configuration = %session.snapshot(), "session ended");
    Ok(())
}

fn parse_field(command: &'static str, text: &str) -> Result<Field, CommandError> {
    if text.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "field",
        });
    }
    Ok(text.parse::<Field>()?)
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}
