//! Text labels.
//!
//! Text is never shaped. Its extent comes from a fixed approximation of the
//! font's metrics so that layout stays deterministic and independent of the
//! fonts installed wherever the artwork is viewed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::svg_builder::SvgBuilder;
use crate::align::Direction;
use crate::error::{Error, Result};
use crate::model::{Point, Rect};
use crate::palette::{Palette, Style};

/// Font size class for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSize {
    Title,
    Large,
    Small,
}

impl LabelSize {
    /// Font size in millimeters.
    pub fn font_size(self) -> f64 {
        match self {
            LabelSize::Title => FONT_TITLE,
            LabelSize::Large => FONT_LARGE,
            LabelSize::Small => FONT_SMALL,
        }
    }
}

impl FromStr for LabelSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(LabelSize::Title),
            "large" => Ok(LabelSize::Large),
            "small" => Ok(LabelSize::Small),
            other => Err(Error::config(format!("unknown label size '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    bounds: Rect,
    text: String,
    size: LabelSize,
    direction: Direction,
    style: Style,
}

impl Label {
    /// Create a label whose position is given by `anchor`.
    ///
    /// `anchor` is interpreted the way [`crate::align::align`] produces it:
    /// the bottom-center of a label set `Above` something, the top-center of
    /// one set `Below`, and the center of one set to either side.
    pub fn new(text: impl Into<String>, size: LabelSize, direction: Direction, anchor: Point) -> Self {
        let text = text.into();
        let font = size.font_size();
        let width = Self::text_width(&text, size);
        let bounds = match direction {
            Direction::Above => Rect {
                top: anchor.y - font,
                right: anchor.x + width / 2.0,
                bottom: anchor.y,
                left: anchor.x - width / 2.0,
            },
            Direction::Below => Rect {
                top: anchor.y,
                right: anchor.x + width / 2.0,
                bottom: anchor.y + font,
                left: anchor.x - width / 2.0,
            },
            Direction::RightOf | Direction::LeftOf => Rect::centered(anchor, width, font),
        };
        Self {
            bounds,
            text,
            size,
            direction,
            style: Style::Normal,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Approximate advance width of `text` at the given size.
    pub fn text_width(text: &str, size: LabelSize) -> f64 {
        text.chars().count() as f64 * size.font_size() * CHAR_WIDTH_RATIO
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> LabelSize {
        self.size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn draw(&self, svg: &mut SvgBuilder, at: Point, palette: &Palette) {
        let center = self.bounds.center();
        let (dx, dy) = (at.x - center.x, at.y - center.y);
        let font = self.size.font_size();
        let descent = font - font * ASCENT_RATIO;
        let (x, y, anchor, baseline) = match self.direction {
            Direction::Above => (center.x, self.bounds.bottom - descent, "middle", "alphabetic"),
            Direction::Below => (center.x, self.bounds.top, "middle", "hanging"),
            Direction::RightOf => (self.bounds.left, center.y, "start", "middle"),
            Direction::LeftOf => (self.bounds.right, center.y, "end", "middle"),
        };
        let (fill, _) = palette.styled(self.style);
        svg.text(x + dx, y + dy, &self.text, font, fill, anchor, baseline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_character_count() {
        let font = LabelSize::Large.font_size();
        assert!((Label::text_width("LEVEL", LabelSize::Large) - 5.0 * font * 0.6).abs() < 1e-12);
        assert_eq!(Label::text_width("", LabelSize::Small), 0.0);
    }

    #[test]
    fn above_label_sits_on_its_anchor() {
        let label = Label::new("IN", LabelSize::Small, Direction::Above, Point::new(10.0, 20.0));
        let b = label.bounds();
        assert_eq!(b.bottom, 20.0);
        assert!((b.height() - LabelSize::Small.font_size()).abs() < 1e-12);
        assert!((b.center().x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn below_label_hangs_from_its_anchor() {
        let label = Label::new("OUT", LabelSize::Large, Direction::Below, Point::new(5.0, 30.0));
        assert_eq!(label.bounds().top, 30.0);
    }

    #[test]
    fn sideways_label_is_centered_on_anchor() {
        let label = Label::new("MID", LabelSize::Small, Direction::RightOf, Point::new(8.0, 8.0));
        let c = label.bounds().center();
        assert!((c.x - 8.0).abs() < 1e-12);
        assert!((c.y - 8.0).abs() < 1e-12);
    }

    #[test]
    fn anchor_and_baseline_depend_on_direction() {
        let palette = Palette::new("#000000", "#ffffff");
        let cases = [
            (Direction::Above, "text-anchor=\"middle\" dominant-baseline=\"alphabetic\""),
            (Direction::Below, "text-anchor=\"middle\" dominant-baseline=\"hanging\""),
            (Direction::RightOf, "text-anchor=\"start\" dominant-baseline=\"middle\""),
            (Direction::LeftOf, "text-anchor=\"end\" dominant-baseline=\"middle\""),
        ];
        for (direction, expected) in cases {
            let label = Label::new("X", LabelSize::Small, direction, Point::new(4.0, 4.0));
            let mut svg = SvgBuilder::new();
            label.draw(&mut svg, label.bounds().center(), &palette);
            let doc = svg.build(8.0, 8.0, "8mm", "8mm");
            assert!(doc.contains(expected), "{direction}: {doc}");
        }
    }

    #[test]
    fn reversed_label_uses_background_color() {
        let palette = Palette::new("#000000", "#ffffff");
        let label = Label::new("OUT", LabelSize::Large, Direction::Above, Point::new(4.0, 4.0))
            .with_style(Style::Reversed);
        let mut svg = SvgBuilder::new();
        label.draw(&mut svg, label.bounds().center(), &palette);
        assert!(svg.build(8.0, 8.0, "8mm", "8mm").contains("fill=\"#ffffff\""));
    }

    #[test]
    fn unknown_size_is_rejected() {
        assert!(matches!("huge".parse::<LabelSize>(), Err(Error::Configuration(_))));
    }
}
