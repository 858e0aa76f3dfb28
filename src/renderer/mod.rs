//! Diagram renderer — lays out a chord diagram and produces SVG output.
//!
//! Layout is a pure pass over the configuration: it validates the fingering,
//! picks the visible fret window, and emits drawing commands grouped into
//! layers (grid and markers, fret labels, note names). The SVG builder then
//! paints the layers in order.

mod commands;
mod constants;
mod labels;
mod layout;
mod markers;
mod svg_builder;

use crate::error::Result;
use crate::model::*;
use crate::pitch::{NoteSpeller, PitchSpeller};
use constants::*;
use labels::{fret_label_commands, note_name_commands};
use markers::marker_commands;

pub use commands::{Baseline, Diagram, DrawCommand, Layer, Stroke, TextAnchor, TextStyle};
pub use layout::{
    build_fret_structure, resolve_visible_fret_window, unplayed_strings, FretStructure, Geometry,
};

/// Layer ids, in paint order.
pub const GRID_LAYER: &str = "grid";
pub const FRET_LABEL_LAYER: &str = "fret_labels";
pub const NOTE_LAYER: &str = "notes";

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Lay out a diagram, naming notes with the built-in pitch speller.
pub fn layout_fretboard(config: &FretboardConfig) -> Result<Diagram> {
    layout_fretboard_with(config, &PitchSpeller)
}

/// Lay out a diagram with a caller-supplied note speller.
pub fn layout_fretboard_with(config: &FretboardConfig, speller: &dyn NoteSpeller) -> Result<Diagram> {
    layout::validate(config)?;

    let first_fret = resolve_visible_fret_window(&config.fingering);
    log::debug!(
        "laying out {} strings x {} frets from fret {}",
        config.strings,
        config.frets,
        first_fret
    );

    let structure = build_fret_structure(config);
    let geometry = Geometry::new(config, first_fret);
    let (view_width, view_height) = geometry.view_box();

    // Grid bars first, markers on top
    let mut grid = Layer::new(GRID_LAYER, (GRID_OFFSET_X, GRID_OFFSET_Y));
    grid.commands = layout::grid_commands(&geometry);
    grid.commands
        .extend(marker_commands(&geometry, &config.fingering, &structure));

    let mut fret_labels = Layer::new(FRET_LABEL_LAYER, (0.0, FRET_LABEL_OFFSET_Y));
    fret_labels.commands = fret_label_commands(config, first_fret);

    // Note row sits one fret below the last visible one
    let mut notes = Layer::new(
        NOTE_LAYER,
        (GRID_OFFSET_X, Geometry::absolute_fret_y(config.frets + 1)),
    );
    notes.commands = note_name_commands(config, &geometry, &structure, speller)?;

    Ok(Diagram {
        view_width,
        view_height,
        width: config.width,
        height: config.width * view_height / view_width,
        first_fret,
        layers: vec![grid, fret_labels, notes],
    })
}

/// Serialize a laid-out diagram to a self-contained SVG string.
pub fn render_diagram_to_svg(diagram: &Diagram) -> String {
    svg_builder::diagram_to_svg(diagram)
}

/// Lay out and render a diagram in one step.
pub fn render_fretboard_to_svg(config: &FretboardConfig) -> Result<String> {
    let diagram = layout_fretboard(config)?;
    Ok(render_diagram_to_svg(&diagram))
}
