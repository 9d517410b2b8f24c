//! SVG builder: accumulates SVG elements and produces the final string.

use super::constants::FONT_FAMILY;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(crate) struct SvgBuilder {
    elements: Vec<String>,
    depth: usize,
}

impl SvgBuilder {
    pub(crate) fn new() -> Self {
        Self {
            elements: Vec::new(),
            depth: 1,
        }
    }

    /// Wrap the accumulated elements in a root `<svg>` element.
    ///
    /// `view_width`/`view_height` set the user coordinate system (always
    /// millimeters); `width`/`height` are the document size attributes with
    /// their units.
    pub(crate) fn build(self, view_width: f64, view_height: f64, width: &str, height: &str) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            num(view_width),
            num(view_height),
            width,
            height
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
        let mut line = "  ".repeat(self.depth);
        line.push_str(&element);
        self.elements.push(line);
    }

    /// Emit a `<g>` whose children are whatever `build` draws.
    pub(crate) fn group(&mut self, class: &str, build: impl FnOnce(&mut SvgBuilder)) {
        self.push(format!(r#"<g class="{}">"#, class));
        self.depth += 1;
        build(self);
        self.depth -= 1;
        self.push("</g>".to_string());
    }

    pub(crate) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        self.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            stroke,
            num(width)
        ));
    }

    pub(crate) fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        corner_radius: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        let corners = if corner_radius > 0.0 {
            format!(r#" rx="{}" ry="{}""#, num(corner_radius), num(corner_radius))
        } else {
            String::new()
        };
        if stroke_width > 0.0 {
            self.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}"{} fill="{}" stroke="{}" stroke-width="{}"/>"#,
                num(x),
                num(y),
                num(w),
                num(h),
                corners,
                fill,
                stroke,
                num(stroke_width)
            ));
        } else {
            self.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}"{} fill="{}"/>"#,
                num(x),
                num(y),
                num(w),
                num(h),
                corners,
                fill
            ));
        }
    }

    pub(crate) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        if stroke_width > 0.0 {
            self.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                num(cx),
                num(cy),
                num(r),
                fill,
                stroke,
                num(stroke_width)
            ));
        } else {
            self.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                num(cx),
                num(cy),
                num(r),
                fill
            ));
        }
    }

    pub(crate) fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        fill: &str,
        anchor: &str,
        baseline: &str,
    ) {
        self.push(format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="{}">{}</text>"#,
            num(x),
            num(y),
            FONT_FAMILY,
            num(size),
            fill,
            anchor,
            baseline,
            escape(content)
        ));
    }
}

/// Format a coordinate, dropping float noise past the sixth decimal.
pub(crate) fn num(v: f64) -> String {
    let rounded = (v * 1e6).round() / 1e6;
    // Avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
