//! Shared constants for the diagram renderer (all in SVG user units).

// ── Grid ────────────────────────────────────────────────────────────
pub(super) const UNIT_X: f64 = 25.0; // distance between strings
pub(super) const UNIT_Y: f64 = 30.0; // distance between frets
pub(super) const HALF_UNIT_Y: f64 = UNIT_Y / 2.0;
pub(super) const STRING_WIDTH: f64 = 2.0;
pub(super) const FRET_HEIGHT: f64 = 2.0;
pub(super) const NUT_HEIGHT: f64 = 6.0;

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const VIEW_UNIT_X: f64 = 25.0; // view box width per string (+1 for margins)
pub(super) const VIEW_UNIT_Y: f64 = 40.0; // view box height per fret (+1 for the note row)
pub(super) const GRID_OFFSET_X: f64 = 35.0; // room for fret labels on the left
pub(super) const GRID_OFFSET_Y: f64 = 20.0; // room for open/closed markers above the nut
pub(super) const FRET_LABEL_OFFSET_Y: f64 = 20.0;
pub(super) const FRET_LABEL_BASELINE: f64 = 8.0;

// ── Limits ──────────────────────────────────────────────────────────
pub(super) const MAX_STRINGS: usize = 24;
pub(super) const MAX_FRETS: usize = 36;

// ── Fret window ─────────────────────────────────────────────────────
/// Chords whose highest fretted note is at or below this fret are drawn
/// from the nut.
pub(super) const NUT_WINDOW_MAX_FRET: u32 = 5;

// ── Markers ─────────────────────────────────────────────────────────
pub(super) const MARKER_DIAMETER: f64 = 22.0;
pub(super) const MARKER_INSET: f64 = 10.0; // marker box starts this far left/up of the grid point
pub(super) const OPEN_MARKER_DIAMETER: f64 = 13.0;
pub(super) const OPEN_MARKER_STROKE: f64 = 2.0;
pub(super) const MUTED_MARKER_INSET: f64 = 6.0;
pub(super) const BARRE_HEIGHT: f64 = 10.0;
pub(super) const BARRE_RISE: f64 = 4.0;
/// 14×14 X glyph drawn on closed strings.
pub(super) const CLOSED_MARKER_POINTS: [(f64, f64); 12] = [
    (14.0, 2.0),
    (12.0, 0.0),
    (7.0, 5.0),
    (2.0, 0.0),
    (0.0, 2.0),
    (5.0, 7.0),
    (0.0, 12.0),
    (2.0, 14.0),
    (7.0, 9.0),
    (12.0, 14.0),
    (14.0, 12.0),
    (9.0, 7.0),
];

// ── Text ────────────────────────────────────────────────────────────
pub(super) const MARKER_FONT_SIZE: f64 = 18.0;
pub(super) const FRET_LABEL_FONT_SIZE: f64 = 18.0;
pub(super) const NOTE_FONT_SIZE: f64 = 14.0;
pub(super) const NOTE_SHIFT_WIDE: f64 = 7.0; // two-character names
pub(super) const NOTE_SHIFT_NARROW: f64 = 4.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const INK_COLOR: &str = "black";
pub(super) const PAPER_COLOR: &str = "white";
