//! Rendering of fetched resources for the terminal.

use std::fmt::Debug;

use serde::Serialize;

/// Output format of the command line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented JSON
    Json,
    /// Rust debug representation with field names
    Dump,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Dump
        }
    }
}

/// Formats `value` in the given format.
///
/// # Examples
///
/// ```
/// # use strava_wrapper::output::{OutputFormat, render};
/// let output = render(&vec![1, 2], OutputFormat::Json).unwrap();
/// assert_eq!(output, "[\n  1,\n  2\n]");
/// ```
pub fn render<T>(value: &T, format: OutputFormat) -> Result<String, serde_json::Error>
where
    T: Serialize + Debug,
{
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Dump => Ok(format!("{:#?}", value)),
    }
}
