//! User-facing options and their resolution against the defaults.
//!
//! Options arrive as JSON in the shape chord charts are usually written:
//!
//! ```json
//! {
//!   "strings": 6,
//!   "fingering": [
//!     { "string": 1, "fret": 0 },
//!     { "string": [3, 5], "fret": 2, "finger": 1 }
//!   ],
//!   "showNotes": true,
//!   "tuning": ["E", "A", "D", "G", "B", "E"]
//! }
//! ```
//!
//! Every field is optional. Missing fields take the defaults
//! `{frets: 5, strings: 6, fingering: [], showFretLabels: false,
//! showNotes: false, width: 500}`.

use serde::Deserialize;

use crate::error::{FretboardError, Result};
use crate::model::*;

/// Partial configuration as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardOptions {
    pub strings: Option<usize>,
    pub frets: Option<usize>,
    pub fingering: Option<Vec<FingeringOption>>,
    pub tuning: Option<Vec<String>>,
    pub show_fret_labels: Option<bool>,
    pub show_notes: Option<bool>,
    pub starting_fret: Option<u32>,
    pub width: Option<f64>,
}

/// One fingering entry before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct FingeringOption {
    pub string: RawStringRef,
    pub fret: RawNumber,
    #[serde(default)]
    pub finger: Option<RawLabel>,
}

/// A string index or a `[low, high]` barre pair.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RawStringRef {
    Single(i64),
    Range(i64, i64),
}

/// Numbers are also accepted as numeric strings (`"3"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Text(String),
}

/// Finger labels may be numerals or arbitrary text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawLabel {
    Number(serde_json::Number),
    Text(String),
}

impl RawLabel {
    fn into_label(self) -> String {
        match self {
            RawLabel::Number(n) => n.to_string(),
            RawLabel::Text(s) => s,
        }
    }
}

/// Parse JSON options without resolving them.
pub fn parse_options_json(json: &str) -> Result<FretboardOptions> {
    Ok(serde_json::from_str(json)?)
}

impl FretboardConfig {
    /// Merge user options with the defaults.
    ///
    /// Raw fingering values are converted into their typed form here; a
    /// negative string index or a fret below `CLOSED_STRING` is reported as
    /// `InvalidFingering`. Range checks against the string count happen at
    /// layout time so that directly built configs get the same treatment.
    pub fn resolve(options: FretboardOptions) -> Result<FretboardConfig> {
        let defaults = FretboardConfig::default();

        let fingering = options
            .fingering
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, raw)| convert_entry(index, raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(FretboardConfig {
            strings: options.strings.unwrap_or(defaults.strings),
            frets: options.frets.unwrap_or(defaults.frets),
            fingering,
            tuning: options.tuning,
            show_fret_labels: options.show_fret_labels.unwrap_or(defaults.show_fret_labels),
            show_notes: options.show_notes.unwrap_or(defaults.show_notes),
            starting_fret: options.starting_fret,
            width: options.width.unwrap_or(defaults.width),
        })
    }

    /// Parse and resolve JSON options in one step.
    pub fn from_json(json: &str) -> Result<FretboardConfig> {
        FretboardConfig::resolve(parse_options_json(json)?)
    }
}

fn convert_entry(index: usize, raw: FingeringOption) -> Result<FingeringEntry> {
    let invalid = |reason: String| FretboardError::InvalidFingering { index, reason };

    let string_index = |n: i64| {
        usize::try_from(n).map_err(|_| invalid(format!("string index {n} is negative")))
    };
    let string = match raw.string {
        RawStringRef::Single(s) => StringRef::Single(string_index(s)?),
        RawStringRef::Range(a, b) => StringRef::Range(string_index(a)?, string_index(b)?),
    };

    let fret_raw = match raw.fret {
        RawNumber::Int(n) => n,
        RawNumber::Text(ref s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(format!("fret '{s}' is not an integer")))?,
    };
    let fret = FretValue::from_raw(fret_raw)
        .ok_or_else(|| invalid(format!("fret {fret_raw} is outside {CLOSED_STRING}..={MAX_FRET_NUMBER}")))?;

    let finger = raw.finger.map(RawLabel::into_label).unwrap_or_default();

    Ok(FingeringEntry {
        string,
        fret,
        finger,
    })
}
