//! Drawing commands — the layout's output, consumed by the SVG builder or
//! by any host that draws with its own canvas.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    /// `y` is the vertical center of the glyphs.
    Middle,
    /// `y` is the top of the glyphs.
    Hanging,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub size: f64,
    pub weight: &'static str,
    pub fill: &'static str,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

/// One primitive, positioned relative to its layer's origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &'static str,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: &'static str,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: &'static str,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
    },
}

/// A translated group of commands. Layers are painted in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub id: &'static str,
    pub offset: (f64, f64),
    pub commands: Vec<DrawCommand>,
}

impl Layer {
    pub fn new(id: &'static str, offset: (f64, f64)) -> Self {
        Self {
            id,
            offset,
            commands: Vec::new(),
        }
    }
}

/// A laid-out chord diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    /// View box size in user units.
    pub view_width: f64,
    pub view_height: f64,
    /// Rendered size; the height keeps the view box aspect ratio.
    pub width: f64,
    pub height: f64,
    /// Fret shown in the first row of the grid.
    pub first_fret: u32,
    pub layers: Vec<Layer>,
}

impl Diagram {
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }
}
