//! JSON shell around the engine: read a request, simulate, write a response.

use crate::error::InputError;
use crate::interpreter::simulate;
use crate::model::{Request, Response, Status};
use serde::Serialize;
use std::io::{self, Read, Write};
use tracing::debug;

/// Message sent to the error stream when the input cannot be used.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input JSON";

/// How responses are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON.
    #[default]
    Compact,
    /// Indented JSON.
    Pretty,
}

/// Result of one shell invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The engine ran and produced a response with this status.
    Completed(Status),
    /// The input was rejected before reaching the engine.
    InvalidInput,
}

#[derive(Serialize)]
struct InvalidInput<'a> {
    status: Status,
    message: &'a str,
}

/// Reads `reader` to the end and parses it as a single [`Request`].
pub fn read_request<R: Read>(mut reader: R) -> Result<Request, InputError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(serde_json::from_str(&buf)?)
}

/// Writes `response` as JSON followed by a newline.
pub fn write_response<W: Write>(
    mut writer: W,
    response: &Response,
    format: OutputFormat,
) -> io::Result<()> {
    write_json(&mut writer, response, format)
}

/// Writes the generic invalid-input payload followed by a newline.
pub fn write_invalid_input<W: Write>(mut writer: W) -> io::Result<()> {
    let payload = InvalidInput {
        status: Status::Error,
        message: INVALID_INPUT_MESSAGE,
    };
    write_json(&mut writer, &payload, OutputFormat::Compact)
}

/// Reads one request from `input`, simulates it and reports the result.
///
/// The response goes to `output`. If the input can't be read or parsed, the
/// invalid-input payload goes to `errors` instead and the engine is not run.
/// Only failures writing to `output` or `errors` are returned as `Err`.
pub fn run<R, W, E>(input: R, output: W, errors: E, format: OutputFormat) -> io::Result<RunOutcome>
where
    R: Read,
    W: Write,
    E: Write,
{
    let request = match read_request(input) {
        Ok(request) => request,
        Err(err) => {
            debug!(%err, "rejecting input");
            write_invalid_input(errors)?;
            return Ok(RunOutcome::InvalidInput);
        }
    };

    let response = simulate(&request);
    write_response(output, &response, format)?;
    Ok(RunOutcome::Completed(response.status))
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Compact => serde_json::to_writer(&mut *writer, value)?,
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *writer, value)?,
    }
    writeln!(writer)?;
    writer.flush()
}
