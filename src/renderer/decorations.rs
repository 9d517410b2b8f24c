//! Faceplate decorations that are not labels: connector lines and boxes.

use super::constants::*;
use super::svg_builder::SvgBuilder;
use crate::model::{Point, Rect};
use crate::palette::{Palette, Style};

/// A straight connector between two points.
///
/// Lines take no part in layout; their bounds exist only so they can be
/// drawn through the same path as every other shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            top: self.start.y.min(self.end.y),
            right: self.start.x.max(self.end.x),
            bottom: self.start.y.max(self.end.y),
            left: self.start.x.min(self.end.x),
        }
        .expanded(STROKE_WIDTH / 2.0)
    }

    pub(crate) fn draw(&self, svg: &mut SvgBuilder, at: Point, palette: &Palette) {
        let center = self.bounds().center();
        let (dx, dy) = (at.x - center.x, at.y - center.y);
        svg.line(
            self.start.x + dx,
            self.start.y + dy,
            self.end.x + dx,
            self.end.y + dy,
            &palette.foreground,
            STROKE_WIDTH,
        );
    }
}

/// A rounded box framing some content.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    bounds: Rect,
    style: Style,
}

impl Frame {
    /// Distance from the content to the outer edge of the frame's stroke.
    pub const BUFFER: f64 = PADDING + STROKE_WIDTH / 2.0;

    pub fn new(content: &Rect, style: Style) -> Self {
        Self {
            bounds: content.expanded(Self::BUFFER),
            style,
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Normal frames are outlined in the foreground over the background;
    /// reversed frames swap the two.
    pub(crate) fn draw(&self, svg: &mut SvgBuilder, at: Point, palette: &Palette) {
        let (stroke, fill) = palette.styled(self.style);
        let width = self.bounds.width();
        let height = self.bounds.height();
        let sw = STROKE_WIDTH;
        svg.rect(
            at.x - width / 2.0 + sw / 2.0,
            at.y - height / 2.0 + sw / 2.0,
            width - sw,
            height - sw,
            BOX_CORNER_RADIUS,
            fill,
            stroke,
            sw,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_buffers_its_content() {
        let content = Rect::new(10.0, 20.0, 30.0, 5.0).unwrap();
        let frame = Frame::new(&content, Style::Normal);
        let buffer = 1.0 + 0.35 / 2.0;
        assert!((frame.bounds().top - (10.0 - buffer)).abs() < 1e-12);
        assert!((frame.bounds().right - (20.0 + buffer)).abs() < 1e-12);
        assert!(frame.bounds().contains(&content));
    }

    #[test]
    fn reversed_frame_swaps_fill_and_stroke() {
        let palette = Palette::new("#111111", "#eeeeee");
        let content = Rect::new(0.0, 4.0, 4.0, 0.0).unwrap();
        for (style, expected) in [
            (Style::Normal, r##"fill="#eeeeee" stroke="#111111""##),
            (Style::Reversed, r##"fill="#111111" stroke="#eeeeee""##),
        ] {
            let frame = Frame::new(&content, style);
            let mut svg = SvgBuilder::new();
            frame.draw(&mut svg, frame.bounds().center(), &palette);
            assert!(svg.build(8.0, 8.0, "8mm", "8mm").contains(expected));
        }
    }

    #[test]
    fn line_draws_between_its_endpoints() {
        let palette = Palette::new("#111111", "#eeeeee");
        let line = Line::new(Point::new(1.0, 2.0), Point::new(5.0, 2.0));
        let mut svg = SvgBuilder::new();
        line.draw(&mut svg, line.bounds().center(), &palette);
        let doc = svg.build(8.0, 8.0, "8mm", "8mm");
        assert!(doc.contains(r#"x1="1" y1="2" x2="5" y2="2""#), "{doc}");
    }
}
