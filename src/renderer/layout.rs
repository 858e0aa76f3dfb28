//! Layout computation — validates the configuration, picks the visible fret
//! window, folds the fingering into per-string frets, and maps strings and
//! frets to grid coordinates.

use crate::error::{FretboardError, Result};
use crate::model::*;
use super::commands::*;
use super::constants::*;

// ═══════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn validate(config: &FretboardConfig) -> Result<()> {
    if !(1..=MAX_STRINGS).contains(&config.strings) {
        return Err(FretboardError::InvalidConfig(format!(
            "string count must be within 1..={MAX_STRINGS}, got {}",
            config.strings
        )));
    }
    if !(1..=MAX_FRETS).contains(&config.frets) {
        return Err(FretboardError::InvalidConfig(format!(
            "fret count must be within 1..={MAX_FRETS}, got {}",
            config.frets
        )));
    }
    if !(config.width.is_finite() && config.width > 0.0) {
        return Err(FretboardError::InvalidConfig(format!(
            "width must be positive, got {}",
            config.width
        )));
    }

    for (index, entry) in config.fingering.iter().enumerate() {
        let (low, high) = entry.string.bounds();
        let reason = if low < 1 || high > config.strings {
            Some(format!(
                "string {:?} is outside 1..={}",
                entry.string, config.strings
            ))
        } else if entry.fret == FretValue::Fretted(0) {
            Some("fretted position 0 (use the open-string value)".to_string())
        } else if entry.fret.fretted().is_some_and(|n| n > MAX_FRET_NUMBER) {
            Some(format!("{} is above fret {MAX_FRET_NUMBER}", entry.fret))
        } else {
            None
        };

        if let Some(reason) = reason {
            log::warn!("rejecting fingering entry {index}: {reason}");
            return Err(FretboardError::InvalidFingering { index, reason });
        }
    }

    if config.show_notes {
        let tuning = config.tuning.as_ref().map_or(0, Vec::len);
        if tuning < config.strings {
            return Err(FretboardError::MissingTuning {
                strings: config.strings,
                tuning,
            });
        }
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Fret window
// ═══════════════════════════════════════════════════════════════════════

/// Lowest fret to display.
///
/// The nut is shown whenever every fretted note fits at or below fret 5
/// (including when nothing is fretted at all); otherwise the window starts
/// at the lowest fretted note.
pub fn resolve_visible_fret_window(fingering: &[FingeringEntry]) -> u32 {
    let fretted = fingering.iter().filter_map(|f| f.fret.fretted());
    let (min, max) = fretted.fold((u32::MAX, 0u32), |(min, max), fret| {
        (min.min(fret), max.max(fret))
    });

    if max <= NUT_WINDOW_MAX_FRET {
        1
    } else {
        min
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Fret structure
// ═══════════════════════════════════════════════════════════════════════

/// Highest fret value per string, indexed by string - 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FretStructure {
    frets: Vec<Option<FretValue>>,
}

impl FretStructure {
    /// Fret recorded for a 1-based string; `None` if the string was never
    /// mentioned.
    pub fn get(&self, string: usize) -> Option<FretValue> {
        string
            .checked_sub(1)
            .and_then(|i| self.frets.get(i))
            .copied()
            .flatten()
    }

    /// Raw per-string view, `-1` for strings that are closed or never
    /// mentioned.
    pub fn raw(&self) -> Vec<i32> {
        self.frets
            .iter()
            .map(|f| f.map_or(CLOSED_STRING, |f| f.raw()))
            .collect()
    }

    /// `(string, fret)` pairs, string 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<FretValue>)> + '_ {
        self.frets.iter().enumerate().map(|(i, f)| (i + 1, *f))
    }

    pub fn len(&self) -> usize {
        self.frets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frets.is_empty()
    }
}

/// Fold the fingering into one fret per string. When a string is referenced
/// more than once the highest fret wins, so a later open entry never
/// replaces a fretted one. Entries outside the fretboard are skipped.
pub fn build_fret_structure(config: &FretboardConfig) -> FretStructure {
    let mut frets: Vec<Option<FretValue>> = vec![None; config.strings];

    for entry in &config.fingering {
        for string in entry.string.strings() {
            let Some(slot) = string.checked_sub(1).and_then(|i| frets.get_mut(i)) else {
                continue;
            };
            if slot.map_or(true, |current| entry.fret > current) {
                *slot = Some(entry.fret);
            }
        }
    }

    FretStructure { frets }
}

/// Strings never mentioned by any entry, ascending.
pub fn unplayed_strings(structure: &FretStructure) -> Vec<usize> {
    structure
        .iter()
        .filter(|(_, fret)| fret.is_none())
        .map(|(string, _)| string)
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Grid geometry
// ═══════════════════════════════════════════════════════════════════════

/// Coordinate mapping for one diagram, in grid-layer units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub strings: usize,
    pub frets: usize,
    pub first_fret: u32,
}

impl Geometry {
    pub fn new(config: &FretboardConfig, first_fret: u32) -> Self {
        Self {
            strings: config.strings,
            frets: config.frets,
            first_fret,
        }
    }

    /// Strings are drawn mirrored: string 1 sits in the rightmost column.
    pub fn string_x(&self, string: usize) -> f64 {
        (self.strings as f64 - string as f64) * UNIT_X
    }

    /// Center of a fret cell within the visible window.
    pub fn relative_fret_y(&self, fret: u32) -> f64 {
        (fret as f64 - self.first_fret as f64 + 1.0) * UNIT_Y - HALF_UNIT_Y
    }

    /// Center of a fret cell counted from the top of the grid, ignoring the
    /// window. Row 0 lies above the nut.
    pub fn absolute_fret_y(fret: usize) -> f64 {
        fret as f64 * UNIT_Y - HALF_UNIT_Y
    }

    pub fn shows_nut(&self) -> bool {
        self.first_fret == 1
    }

    pub fn view_box(&self) -> (f64, f64) {
        (
            (self.strings + 1) as f64 * VIEW_UNIT_X,
            (self.frets + 1) as f64 * VIEW_UNIT_Y,
        )
    }

    fn fret_bar_width(&self) -> f64 {
        (self.strings - 1) as f64 * UNIT_X + STRING_WIDTH
    }

    fn string_height(&self) -> f64 {
        self.frets as f64 * UNIT_Y
    }
}

/// Fret bars (top one thickened into the nut when it is visible), then
/// string bars.
pub(super) fn grid_commands(geometry: &Geometry) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(geometry.frets + 1 + geometry.strings);
    let width = geometry.fret_bar_width();

    for i in 0..=geometry.frets {
        let height = if i == 0 && geometry.shows_nut() {
            NUT_HEIGHT
        } else {
            FRET_HEIGHT
        };
        out.push(DrawCommand::Rect {
            x: 0.0,
            y: i as f64 * UNIT_Y,
            width,
            height,
            fill: INK_COLOR,
        });
    }

    let height = geometry.string_height();
    for i in 0..geometry.strings {
        out.push(DrawCommand::Rect {
            x: i as f64 * UNIT_X,
            y: 0.0,
            width: STRING_WIDTH,
            height,
            fill: INK_COLOR,
        });
    }

    out
}
