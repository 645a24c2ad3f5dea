//! SVG document assembly
//!
//! A small incremental builder: gradient definitions accumulate under
//! `<defs>`, shapes accumulate in document order, and `build` stitches
//! everything into the final document with the root `<svg>` element.

use crate::geometry::Point;

/// Build an SVG document incrementally
pub struct SvgBuilder {
    width: u32,
    height: u32,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a builder for a canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            defs: vec![],
            elements: vec![],
        }
    }

    /// Add a linear gradient running diagonally from the top-left to the
    /// bottom-right of the shape it paints
    pub fn add_diagonal_gradient(&mut self, id: &str, stops: &[(u32, &str)]) {
        let stop_lines = stops
            .iter()
            .map(|(offset, color)| {
                format!(r#"      <stop offset="{}%" stop-color="{}"/>"#, offset, color)
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.defs.push(format!(
            "    <linearGradient id=\"{}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n{}\n    </linearGradient>",
            id, stop_lines
        ));
    }

    /// Add an open polyline stroked with the given paint, rounded caps
    /// and joins, no fill
    pub fn add_open_path(&mut self, points: &[Point], stroke: &str, stroke_width: u32) {
        self.elements.push(format!(
            r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#,
            path_to_d(points),
            stroke,
            stroke_width
        ));
    }

    /// Add a filled circle
    pub fn add_circle(&mut self, center: Point, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            center.x, center.y, r, fill
        ));
    }

    /// Assemble the final document
    pub fn build(self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            doc.push_str("  <defs>\n");
            for def in &self.defs {
                doc.push_str(def);
                doc.push('\n');
            }
            doc.push_str("  </defs>\n");
        }
        for element in &self.elements {
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

/// Convert a list of points to an SVG path d attribute (open polyline)
fn path_to_d(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut d = format!("M {},{}", points[0].x, points[0].y);
    for point in &points[1..] {
        d.push_str(&format!(" L {},{}", point.x, point.y));
    }
    d
}
