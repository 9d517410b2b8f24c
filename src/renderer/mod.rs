//! Shape library: every element that can appear on a panel, and how each
//! one draws itself into SVG.
//!
//! Shapes are a closed set. [`Shape`] has one variant per kind; each variant
//! carries its own bounds and sizing, fixed at construction, and draws itself
//! for a given selection (the discrete state: button pressed or not, toggle
//! position, counter value).

pub mod constants;
mod controls;
mod decorations;
mod label;
pub(crate) mod svg_builder;

pub use controls::{Button, Counter, Knob, KnobSize, Port, PortRings, Toggle};
pub use decorations::{Frame, Line};
pub use label::{Label, LabelSize};

use crate::error::Result;
use crate::model::{Point, Rect};
use crate::palette::Palette;
use controls::check_selection;
use svg_builder::SvgBuilder;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Button(Button),
    Knob(Knob),
    Port(Port),
    Toggle(Toggle),
    Counter(Counter),
    Label(Label),
    Line(Line),
    Frame(Frame),
}

impl Shape {
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Button(s) => *s.bounds(),
            Shape::Knob(s) => *s.bounds(),
            Shape::Port(s) => *s.bounds(),
            Shape::Toggle(s) => *s.bounds(),
            Shape::Counter(s) => *s.bounds(),
            Shape::Label(s) => *s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Frame(s) => *s.bounds(),
        }
    }

    /// Number of distinct selections this shape can be drawn in.
    pub fn state_count(&self) -> usize {
        match self {
            Shape::Button(_) => 2,
            Shape::Toggle(t) => t.positions(),
            Shape::Counter(c) => c.labels().len(),
            _ => 1,
        }
    }

    /// The selection used when the shape is drawn as part of a panel.
    pub fn default_selection(&self) -> usize {
        match self {
            Shape::Button(_) => Button::OFF,
            Shape::Toggle(t) => t.selection(),
            Shape::Counter(c) => c.selection(),
            _ => 1,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Shape::Button(_) => "button",
            Shape::Knob(_) => "knob",
            Shape::Port(_) => "port",
            Shape::Toggle(_) => "toggle",
            Shape::Counter(_) => "counter",
            Shape::Label(_) => "label",
            Shape::Line(_) => "line",
            Shape::Frame(_) => "box",
        }
    }

    /// Draw the shape with the center of its bounds at `at`.
    pub(crate) fn draw(
        &self,
        svg: &mut SvgBuilder,
        at: Point,
        selection: usize,
        palette: &Palette,
    ) -> Result<()> {
        check_selection(self.kind(), selection, self.state_count())?;
        match self {
            Shape::Button(s) => s.draw(svg, at, selection == Button::ON, palette),
            Shape::Knob(s) => s.draw(svg, at, palette),
            Shape::Port(s) => s.draw(svg, at, palette),
            Shape::Toggle(s) => s.draw(svg, at, selection, palette)?,
            Shape::Counter(s) => s.draw(svg, at, selection, palette)?,
            Shape::Label(s) => s.draw(svg, at, palette),
            Shape::Line(s) => s.draw(svg, at, palette),
            Shape::Frame(s) => s.draw(svg, at, palette),
        }
        Ok(())
    }

    /// Draw the shape where it was placed, in its default selection.
    pub(crate) fn draw_in_place(&self, svg: &mut SvgBuilder, palette: &Palette) -> Result<()> {
        self.draw(svg, self.bounds().center(), self.default_selection(), palette)
    }
}

macro_rules! shape_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

shape_from!(Button, Knob, Port, Toggle, Counter, Label, Line, Frame);
