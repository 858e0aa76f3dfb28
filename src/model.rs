//! Data model for describing a chord diagram.
//!
//! Strings are numbered from 1 (the highest-pitched string, drawn on the
//! right) up to the configured string count. Frets are numbered from 1; the
//! two sentinel values `OPEN_STRING` and `CLOSED_STRING` mark strings played
//! open or muted.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

/// Raw fret value of an open string.
pub const OPEN_STRING: i32 = 0;
/// Raw fret value of a closed (muted) string.
pub const CLOSED_STRING: i32 = -1;

/// Default number of strings.
pub const DEFAULT_STRINGS: usize = 6;
/// Default number of visible frets.
pub const DEFAULT_FRETS: usize = 5;
/// Highest fret number a fingering entry may use.
pub const MAX_FRET_NUMBER: u32 = i32::MAX as u32;
/// Default rendered width of the SVG in user units.
pub const DEFAULT_WIDTH: f64 = 500.0;

/// Which string(s) a fingering entry covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StringRef {
    /// One string, 1-based.
    Single(usize),
    /// A barre across an inclusive range; the endpoints may come in any order.
    Range(usize, usize),
}

impl StringRef {
    /// Lowest and highest string index covered.
    pub fn bounds(&self) -> (usize, usize) {
        match *self {
            StringRef::Single(s) => (s, s),
            StringRef::Range(a, b) => (a.min(b), a.max(b)),
        }
    }

    /// Every string covered, ascending.
    pub fn strings(&self) -> RangeInclusive<usize> {
        let (low, high) = self.bounds();
        low..=high
    }
}

/// Where a string is stopped.
///
/// Variant order gives the numeric ordering of the raw values:
/// `Closed (-1) < Open (0) < Fretted(1) < Fretted(2) < ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "i32")]
pub enum FretValue {
    Closed,
    Open,
    Fretted(u32),
}

impl FretValue {
    /// Convert a raw fret number. Anything below `CLOSED_STRING` is rejected.
    pub fn from_raw(raw: i64) -> Option<FretValue> {
        match raw {
            -1 => Some(FretValue::Closed),
            0 => Some(FretValue::Open),
            n if n > 0 && n <= MAX_FRET_NUMBER as i64 => Some(FretValue::Fretted(n as u32)),
            _ => None,
        }
    }

    /// The raw fret number, with the sentinels for open and closed strings.
    pub fn raw(&self) -> i32 {
        match *self {
            FretValue::Closed => CLOSED_STRING,
            FretValue::Open => OPEN_STRING,
            FretValue::Fretted(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }

    /// Fret number of a stopped string, `None` for open and closed strings.
    pub fn fretted(&self) -> Option<u32> {
        match *self {
            FretValue::Fretted(n) => Some(n),
            _ => None,
        }
    }
}

impl From<FretValue> for i32 {
    fn from(fret: FretValue) -> i32 {
        fret.raw()
    }
}

impl fmt::Display for FretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FretValue::Closed => write!(f, "closed"),
            FretValue::Open => write!(f, "open"),
            FretValue::Fretted(n) => write!(f, "fret {n}"),
        }
    }
}

/// One played, open, or muted position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingeringEntry {
    pub string: StringRef,
    pub fret: FretValue,
    /// Label drawn inside a fretted marker (usually the finger number).
    pub finger: String,
}

impl FingeringEntry {
    pub fn new(string: StringRef, fret: FretValue, finger: impl Into<String>) -> Self {
        Self {
            string,
            fret,
            finger: finger.into(),
        }
    }

    /// Entry on a single string.
    pub fn single(string: usize, fret: FretValue, finger: impl Into<String>) -> Self {
        Self::new(StringRef::Single(string), fret, finger)
    }

    /// Barre across `low..=high`.
    pub fn barre(low: usize, high: usize, fret: FretValue, finger: impl Into<String>) -> Self {
        Self::new(StringRef::Range(low, high), fret, finger)
    }
}

/// A fully resolved diagram configuration.
///
/// Build one with `FretboardConfig::resolve` from user options, or directly
/// with struct update syntax over `FretboardConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FretboardConfig {
    /// Number of strings.
    pub strings: usize,
    /// Number of fret rows shown.
    pub frets: usize,
    /// Fingering, drawn in order.
    pub fingering: Vec<FingeringEntry>,
    /// Open-string pitch names, lowest string first: `tuning[0]` is string
    /// `strings` and the last entry is string 1.
    pub tuning: Option<Vec<String>>,
    /// Label every visible fret row with its fret number.
    pub show_fret_labels: bool,
    /// Print the sounding note name under each played string.
    pub show_notes: bool,
    /// Only consulted for the single nut label; see `renderer::labels`.
    pub starting_fret: Option<u32>,
    /// Rendered SVG width in user units.
    pub width: f64,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            strings: DEFAULT_STRINGS,
            frets: DEFAULT_FRETS,
            fingering: Vec::new(),
            tuning: None,
            show_fret_labels: false,
            show_notes: false,
            starting_fret: None,
            width: DEFAULT_WIDTH,
        }
    }
}
