//! Writing command results to stdout or a file.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::OutputArgs;
use crate::log;

/// Serialize `value` as JSON and emit it.
pub(super) fn write_json<T: Serialize>(value: &T, args: &OutputArgs) -> Result<()> {
    let json = to_json(value, args.pretty)?;
    emit(&json, args)
}

pub(super) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Print `text` to stdout, or write it to `--output`.
pub(super) fn emit(text: &str, args: &OutputArgs) -> Result<()> {
    if let Some(ref path) = args.output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writeln!(file, "{}", text.trim_end())?;
        log!("output"; "wrote {}", path.display());
    } else {
        println!("{}", text.trim_end());
    }
    Ok(())
}
