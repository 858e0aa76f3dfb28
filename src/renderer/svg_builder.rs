//! SVG builder — accumulates SVG elements and produces the final string.

use super::commands::*;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    depth: usize,
    view_width: f64,
    view_height: f64,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(view_width: f64, view_height: f64, width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            depth: 1,
            view_width,
            view_height,
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{:.1}" height="{:.1}" style="font-family: sans-serif;">"#,
            self.view_width, self.view_height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn push(&mut self, element: String) {
        self.elements.push(format!("{}{}", "  ".repeat(self.depth), element));
    }

    pub(super) fn begin_group(&mut self, id: &str, dx: f64, dy: f64) {
        self.push(format!(
            r#"<g id="{}" transform="translate({:.1},{:.1})">"#,
            escape_text(id),
            dx,
            dy
        ));
        self.depth += 1;
    }

    pub(super) fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1).max(1);
        self.push("</g>".to_string());
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: Option<&Stroke>) {
        match stroke {
            Some(stroke) => self.push(format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                cx, cy, r, fill, stroke.color, stroke.width
            )),
            None => self.push(format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                cx, cy, r, fill
            )),
        }
    }

    pub(super) fn polygon(&mut self, points: &[(f64, f64)], fill: &str) {
        let points = points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        self.push(format!(r#"<polygon points="{}" fill="{}"/>"#, points, fill));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        };
        let baseline = match style.baseline {
            Baseline::Middle => "central",
            Baseline::Hanging => "hanging",
        };
        self.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}" dominant-baseline="{}">{}</text>"#,
            x,
            y,
            style.size,
            style.weight,
            style.fill,
            anchor,
            baseline,
            escape_text(content)
        ));
    }

    pub(super) fn command(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Rect { x, y, width, height, fill } => self.rect(*x, *y, *width, *height, fill),
            DrawCommand::Circle { cx, cy, r, fill, stroke } => self.circle(*cx, *cy, *r, fill, stroke.as_ref()),
            DrawCommand::Polygon { points, fill } => self.polygon(points, fill),
            DrawCommand::Text { x, y, content, style } => self.text(*x, *y, content, style),
        }
    }
}

/// Escape markup and drop control characters XML 1.0 cannot carry.
fn escape_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Serialize a laid-out diagram, one `<g>` per layer in paint order.
pub(super) fn diagram_to_svg(diagram: &Diagram) -> String {
    let mut svg = SvgBuilder::new(diagram.view_width, diagram.view_height, diagram.width, diagram.height);
    for layer in &diagram.layers {
        svg.begin_group(layer.id, layer.offset.0, layer.offset.1);
        for command in &layer.commands {
            svg.command(command);
        }
        svg.end_group();
    }
    svg.build()
}
