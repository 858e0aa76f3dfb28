//! Fret number labels on the left of the grid and note names below it.

use crate::error::{FretboardError, Result};
use crate::model::*;
use crate::pitch::NoteSpeller;
use super::commands::*;
use super::constants::*;
use super::layout::{FretStructure, Geometry};

fn label_style(size: f64, baseline: Baseline) -> TextStyle {
    TextStyle {
        size,
        weight: "bold",
        fill: INK_COLOR,
        anchor: TextAnchor::Start,
        baseline,
    }
}

fn fret_label(row: usize, content: String) -> DrawCommand {
    DrawCommand::Text {
        x: 0.0,
        y: row as f64 * UNIT_Y + FRET_LABEL_BASELINE,
        content,
        style: label_style(FRET_LABEL_FONT_SIZE, Baseline::Middle),
    }
}

/// Fret numbers for each visible row when enabled. With labels off, a
/// diagram shown mid-neck can still carry a lone "1" at the top when the
/// caller sets `starting_fret` to 1. The nut itself is never labeled.
pub(super) fn fret_label_commands(config: &FretboardConfig, first_fret: u32) -> Vec<DrawCommand> {
    if config.show_fret_labels {
        (0..config.frets)
            .map(|row| fret_label(row, (first_fret as usize + row).to_string()))
            .collect()
    } else if first_fret != 1 && config.starting_fret == Some(1) {
        vec![fret_label(0, "1".to_string())]
    } else {
        Vec::new()
    }
}

/// Name of the sounding note under every open or fretted string.
pub(super) fn note_name_commands(
    config: &FretboardConfig,
    geometry: &Geometry,
    structure: &FretStructure,
    speller: &dyn NoteSpeller,
) -> Result<Vec<DrawCommand>> {
    if !config.show_notes {
        return Ok(Vec::new());
    }
    let tuning = config.tuning.as_deref().unwrap_or_default();

    let mut out = Vec::new();
    for (string, fret) in structure.iter() {
        let semitones = match fret {
            Some(FretValue::Open) => 0,
            Some(FretValue::Fretted(n)) => n,
            Some(FretValue::Closed) | None => continue,
        };

        // Tuning runs lowest string first
        let open = tuning
            .get(config.strings - string)
            .ok_or(FretboardError::MissingTuning {
                strings: config.strings,
                tuning: tuning.len(),
            })?;
        let name = speller.transpose(open, semitones)?;

        let shift = if name.chars().count() == 2 {
            NOTE_SHIFT_WIDE
        } else {
            NOTE_SHIFT_NARROW
        };
        out.push(DrawCommand::Text {
            x: geometry.string_x(string) - shift,
            y: 0.0,
            content: name,
            style: label_style(NOTE_FONT_SIZE, Baseline::Hanging),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchSpeller;
    use crate::renderer::layout::build_fret_structure;
    use pretty_assertions::assert_eq;

    fn contents(commands: &[DrawCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    fn standard_tuning() -> Option<Vec<String>> {
        Some(["E", "A", "D", "G", "B", "E"].iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn fret_labels_count_up_from_the_window() {
        let config = FretboardConfig {
            show_fret_labels: true,
            ..Default::default()
        };
        let labels = fret_label_commands(&config, 7);
        assert_eq!(contents(&labels), vec!["7", "8", "9", "10", "11"]);
        match &labels[2] {
            DrawCommand::Text { x, y, style, .. } => {
                assert_eq!((*x, *y), (0.0, 68.0));
                assert_eq!(style.baseline, Baseline::Middle);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn starting_fret_adds_single_label_mid_neck() {
        let config = FretboardConfig {
            starting_fret: Some(1),
            ..Default::default()
        };
        assert_eq!(contents(&fret_label_commands(&config, 7)), vec!["1"]);
        assert!(fret_label_commands(&config, 1).is_empty());

        let unset = FretboardConfig::default();
        assert!(fret_label_commands(&unset, 7).is_empty());
        assert!(fret_label_commands(&unset, 1).is_empty());
    }

    #[test]
    fn note_names_follow_the_tuning() {
        let config = FretboardConfig {
            show_notes: true,
            tuning: standard_tuning(),
            fingering: vec![
                FingeringEntry::single(1, FretValue::Fretted(3), "3"),
                FingeringEntry::single(2, FretValue::Open, ""),
                FingeringEntry::single(5, FretValue::Fretted(3), "2"),
                FingeringEntry::single(6, FretValue::Closed, ""),
            ],
            ..Default::default()
        };
        let geometry = Geometry::new(&config, 1);
        let structure = build_fret_structure(&config);
        let notes = note_name_commands(&config, &geometry, &structure, &PitchSpeller).unwrap();

        // string 1 first; strings 3, 4 unmentioned and 6 closed are skipped
        assert_eq!(contents(&notes), vec!["G", "B", "C"]);
        match &notes[0] {
            DrawCommand::Text { x, .. } => assert_eq!(*x, geometry.string_x(1) - NOTE_SHIFT_NARROW),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn two_letter_names_shift_further_left() {
        let config = FretboardConfig {
            show_notes: true,
            tuning: standard_tuning(),
            fingering: vec![FingeringEntry::single(6, FretValue::Fretted(2), "1")],
            ..Default::default()
        };
        let geometry = Geometry::new(&config, 1);
        let notes =
            note_name_commands(&config, &geometry, &build_fret_structure(&config), &PitchSpeller).unwrap();
        assert_eq!(
            notes,
            vec![DrawCommand::Text {
                x: -NOTE_SHIFT_WIDE,
                y: 0.0,
                content: "F#".to_string(),
                style: label_style(NOTE_FONT_SIZE, Baseline::Hanging),
            }]
        );
    }

    #[test]
    fn disabled_notes_draw_nothing() {
        let config = FretboardConfig {
            fingering: vec![FingeringEntry::single(1, FretValue::Fretted(3), "3")],
            ..Default::default()
        };
        let geometry = Geometry::new(&config, 1);
        let notes =
            note_name_commands(&config, &geometry, &build_fret_structure(&config), &PitchSpeller).unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn bad_tuning_entry_is_reported() {
        let config = FretboardConfig {
            show_notes: true,
            tuning: Some(["E", "A", "D", "G", "B", "X"].iter().map(|s| s.to_string()).collect()),
            fingering: vec![FingeringEntry::single(1, FretValue::Open, "")],
            ..Default::default()
        };
        let geometry = Geometry::new(&config, 1);
        let err = note_name_commands(&config, &geometry, &build_fret_structure(&config), &PitchSpeller)
            .unwrap_err();
        assert!(matches!(err, FretboardError::UnknownPitch(ref name) if name == "X"));
    }
}
