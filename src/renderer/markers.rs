//! Fret marker rendering — fretted dots with finger labels, barres, and the
//! open (O) and closed (X) markers above the nut.

use crate::model::*;
use super::commands::*;
use super::constants::*;
use super::layout::{FretStructure, Geometry, unplayed_strings};

/// Finger label given to markers synthesized for unplayed strings.
const UNPLAYED_LABEL: &str = "0";

/// Markers for every fingering entry in order, followed by closed markers
/// for the strings the fingering never mentions.
pub(super) fn marker_commands(
    geometry: &Geometry,
    fingering: &[FingeringEntry],
    structure: &FretStructure,
) -> Vec<DrawCommand> {
    let mut out = Vec::new();

    for entry in fingering {
        place_marker(&mut out, geometry, entry.string, entry.fret, &entry.finger);
    }

    let unplayed = unplayed_strings(structure);
    if !unplayed.is_empty() {
        log::debug!("marking unplayed strings {unplayed:?} as closed");
    }
    for string in unplayed {
        place_marker(&mut out, geometry, StringRef::Single(string), FretValue::Closed, UNPLAYED_LABEL);
    }

    out
}

/// Add the commands for one marker.
pub(super) fn place_marker(
    out: &mut Vec<DrawCommand>,
    geometry: &Geometry,
    string: StringRef,
    fret: FretValue,
    label: &str,
) {
    match (string, fret) {
        (StringRef::Range(..), FretValue::Fretted(n)) => {
            let (low, high) = string.bounds();
            // Higher string numbers sit further left
            let left = geometry.string_x(high);
            let right = geometry.string_x(low);
            out.push(DrawCommand::Rect {
                x: left,
                y: geometry.relative_fret_y(n) - BARRE_RISE,
                width: right - left,
                height: BARRE_HEIGHT,
                fill: INK_COLOR,
            });
            place_marker(out, geometry, StringRef::Single(low), fret, label);
            place_marker(out, geometry, StringRef::Single(high), fret, label);
        }
        // An open or muted "barre" has no bar to draw; mark each string.
        (StringRef::Range(..), _) => {
            for s in string.strings() {
                place_marker(out, geometry, StringRef::Single(s), fret, label);
            }
        }
        (StringRef::Single(s), FretValue::Closed) => closed_marker(out, geometry, s),
        (StringRef::Single(s), FretValue::Open) => open_marker(out, geometry, s),
        (StringRef::Single(s), FretValue::Fretted(n)) => fretted_marker(out, geometry, s, n, label),
    }
}

fn closed_marker(out: &mut Vec<DrawCommand>, geometry: &Geometry, string: usize) {
    let dx = geometry.string_x(string) - MUTED_MARKER_INSET;
    let dy = Geometry::absolute_fret_y(0) + 1.0;
    out.push(DrawCommand::Polygon {
        points: CLOSED_MARKER_POINTS
            .iter()
            .map(|&(x, y)| (x + dx, y + dy))
            .collect(),
        fill: INK_COLOR,
    });
}

fn open_marker(out: &mut Vec<DrawCommand>, geometry: &Geometry, string: usize) {
    let r = OPEN_MARKER_DIAMETER / 2.0;
    out.push(DrawCommand::Circle {
        cx: geometry.string_x(string) - MUTED_MARKER_INSET + r,
        cy: Geometry::absolute_fret_y(0) + 2.0 + r,
        r,
        fill: PAPER_COLOR,
        stroke: Some(Stroke {
            color: INK_COLOR,
            width: OPEN_MARKER_STROKE,
        }),
    });
}

fn fretted_marker(out: &mut Vec<DrawCommand>, geometry: &Geometry, string: usize, fret: u32, label: &str) {
    let r = MARKER_DIAMETER / 2.0;
    let cx = geometry.string_x(string) - MARKER_INSET + r;
    let cy = geometry.relative_fret_y(fret) - MARKER_INSET + r;

    out.push(DrawCommand::Circle {
        cx,
        cy,
        r,
        fill: INK_COLOR,
        stroke: None,
    });
    out.push(DrawCommand::Text {
        x: cx,
        y: cy,
        content: label.to_string(),
        style: TextStyle {
            size: MARKER_FONT_SIZE,
            weight: "bold",
            fill: PAPER_COLOR,
            anchor: TextAnchor::Middle,
            baseline: Baseline::Middle,
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::layout::{build_fret_structure, resolve_visible_fret_window};
    use pretty_assertions::assert_eq;

    fn geometry(first_fret: u32) -> Geometry {
        Geometry::new(&FretboardConfig::default(), first_fret)
    }

    fn markers(fingering: Vec<FingeringEntry>) -> Vec<DrawCommand> {
        let config = FretboardConfig {
            fingering,
            ..Default::default()
        };
        let first_fret = resolve_visible_fret_window(&config.fingering);
        marker_commands(&geometry(first_fret), &config.fingering, &build_fret_structure(&config))
    }

    #[test]
    fn fretted_marker_is_a_labeled_dot() {
        let mut out = Vec::new();
        place_marker(&mut out, &geometry(1), StringRef::Single(2), FretValue::Fretted(1), "1");

        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0],
            DrawCommand::Circle { cx: 101.0, cy: 16.0, r: 11.0, fill: INK_COLOR, stroke: None }
        );
        match &out[1] {
            DrawCommand::Text { x, y, content, style } => {
                assert_eq!((*x, *y), (101.0, 16.0));
                assert_eq!(content, "1");
                assert_eq!(style.fill, PAPER_COLOR);
                assert_eq!(style.anchor, TextAnchor::Middle);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn barre_draws_bar_then_both_ends() {
        let mut out = Vec::new();
        place_marker(&mut out, &geometry(1), StringRef::Range(3, 5), FretValue::Fretted(2), "1");

        // bar + (dot + label) * 2
        assert_eq!(out.len(), 5);
        assert_eq!(
            out[0],
            DrawCommand::Rect { x: 25.0, y: 41.0, width: 50.0, height: BARRE_HEIGHT, fill: INK_COLOR }
        );
        let dots: Vec<f64> = out
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { cx, .. } => Some(*cx),
                _ => None,
            })
            .collect();
        assert_eq!(dots, vec![76.0, 26.0]);
    }

    #[test]
    fn reversed_barre_spans_the_same_strings() {
        let mut forward = Vec::new();
        let mut reversed = Vec::new();
        place_marker(&mut forward, &geometry(1), StringRef::Range(3, 5), FretValue::Fretted(2), "1");
        place_marker(&mut reversed, &geometry(1), StringRef::Range(5, 3), FretValue::Fretted(2), "1");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn open_and_closed_markers_sit_above_the_nut() {
        let mut out = Vec::new();
        place_marker(&mut out, &geometry(1), StringRef::Single(1), FretValue::Open, "");
        place_marker(&mut out, &geometry(1), StringRef::Single(6), FretValue::Closed, "");

        match &out[0] {
            DrawCommand::Circle { cx, cy, r, fill, stroke } => {
                assert_eq!((*cx, *cy, *r), (125.5, -6.5, 6.5));
                assert_eq!(*fill, PAPER_COLOR);
                assert_eq!(stroke.as_ref().map(|s| s.width), Some(OPEN_MARKER_STROKE));
            }
            other => panic!("expected open circle, got {other:?}"),
        }
        match &out[1] {
            DrawCommand::Polygon { points, .. } => {
                assert_eq!(points.len(), 12);
                assert_eq!(points[0], (8.0, -12.0));
                assert!(points.iter().all(|&(_, y)| y <= 0.0));
            }
            other => panic!("expected X polygon, got {other:?}"),
        }
    }

    #[test]
    fn open_barre_marks_every_string() {
        let mut out = Vec::new();
        place_marker(&mut out, &geometry(1), StringRef::Range(1, 3), FretValue::Open, "");
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|c| matches!(c, DrawCommand::Circle { stroke: Some(_), .. })));
    }

    #[test]
    fn unplayed_strings_get_closed_markers() {
        let out = markers(vec![
            FingeringEntry::single(1, FretValue::Fretted(8), "1"),
            FingeringEntry::single(2, FretValue::Fretted(10), "3"),
        ]);
        let polygons = out.iter().filter(|c| matches!(c, DrawCommand::Polygon { .. })).count();
        assert_eq!(polygons, 4);
        // explicit markers come first
        assert!(matches!(out[0], DrawCommand::Circle { cy, .. } if cy == 16.0));
        assert!(matches!(out[2], DrawCommand::Circle { cy, .. } if cy == 76.0));
    }

    #[test]
    fn explicitly_closed_strings_are_not_doubled() {
        let out = markers(vec![
            FingeringEntry::single(1, FretValue::Open, ""),
            FingeringEntry::single(2, FretValue::Fretted(1), "1"),
            FingeringEntry::barre(3, 5, FretValue::Fretted(2), "2"),
            FingeringEntry::single(6, FretValue::Closed, ""),
        ]);
        let polygons = out.iter().filter(|c| matches!(c, DrawCommand::Polygon { .. })).count();
        assert_eq!(polygons, 1);
    }
}
