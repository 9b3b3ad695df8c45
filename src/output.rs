use serde::Serialize;

use crate::{Error, Result};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    ok: bool,
    command: &'a str,
    data: T,
}

/// Render the JSON envelope `{"ok": true, "command": ..., "data": ...}`.
pub fn success_json<T: Serialize>(command: &str, data: T) -> Result<String> {
    let envelope = Envelope { ok: true, command, data };
    serde_json::to_string_pretty(&envelope).map_err(|e| Error::Serialize(e.to_string()))
}

/// Print a command result in JSON mode. Human mode prints nothing here; the
/// caller renders its own output.
pub fn emit_success<T: Serialize>(mode: OutputMode, command: &str, data: T) -> Result<()> {
    if mode == OutputMode::Json {
        println!("{}", success_json(command, data)?);
    }
    Ok(())
}
