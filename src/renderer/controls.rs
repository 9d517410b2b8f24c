//! Interactive controls: buttons, knobs, ports, toggles and counters.
//!
//! Each control owns bounds fixed at construction. Drawing takes the point
//! where the center of those bounds should land, so the same control can be
//! drawn in place on the panel or centered in an image of its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::label::{Label, LabelSize};
use super::svg_builder::SvgBuilder;
use crate::align::{align, Direction};
use crate::error::{Error, Result};
use crate::model::{bounding_box_of, Point, Rect};
use crate::palette::{Palette, Style};

// ═══════════════════════════════════════════════════════════════════════
// Button
// ═══════════════════════════════════════════════════════════════════════

/// A momentary or latching push button. Selection 1 is released, 2 pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    bounds: Rect,
    style: Style,
}

impl Button {
    pub const OFF: usize = 1;
    pub const ON: usize = 2;

    pub fn new(center: Point, style: Style) -> Self {
        Self {
            bounds: Rect::round(center, BUTTON_DIAMETER),
            style,
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn radius(&self) -> f64 {
        BUTTON_DIAMETER / 2.0
    }

    /// The ring is always stroked in the ring color; pressing the button
    /// fills its center with the ring color too.
    pub(crate) fn draw(&self, svg: &mut SvgBuilder, at: Point, pressed: bool, palette: &Palette) {
        let (ring, center) = palette.styled(self.style);
        let fill = if pressed { ring } else { center };
        let r = self.radius() - BUTTON_STROKE_WIDTH / 2.0;
        svg.circle(at.x, at.y, r, fill, ring, BUTTON_STROKE_WIDTH);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Knob
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnobSize {
    Huge,
    Large,
    Medium,
    Small,
    Tiny,
}

impl KnobSize {
    pub fn diameter(self) -> f64 {
        match self {
            KnobSize::Huge => KNOB_HUGE,
            KnobSize::Large => KNOB_LARGE,
            KnobSize::Medium => KNOB_MEDIUM,
            KnobSize::Small => KNOB_SMALL,
            KnobSize::Tiny => KNOB_TINY,
        }
    }
}

impl fmt::Display for KnobSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KnobSize::Huge => "huge",
            KnobSize::Large => "large",
            KnobSize::Medium => "medium",
            KnobSize::Small => "small",
            KnobSize::Tiny => "tiny",
        };
        f.write_str(s)
    }
}

impl FromStr for KnobSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "huge" => Ok(KnobSize::Huge),
            "large" => Ok(KnobSize::Large),
            "medium" => Ok(KnobSize::Medium),
            "small" => Ok(KnobSize::Small),
            "tiny" => Ok(KnobSize::Tiny),
            other => Err(Error::config(format!("unknown knob size '{other}'"))),
        }
    }
}

/// A rotary knob, always drawn with its pointer straight up.
#[derive(Debug, Clone, PartialEq)]
pub struct Knob {
    bounds: Rect,
    size: KnobSize,
}

impl Knob {
    pub fn new(center: Point, size: KnobSize) -> Self {
        Self {
            bounds: Rect::round(center, size.diameter()),
            size,
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn size(&self) -> KnobSize {
        self.size
    }

    pub fn radius(&self) -> f64 {
        self.size.diameter() / 2.0
    }

    pub fn pointer_width(&self) -> f64 {
        self.radius() / 8.0
    }

    /// Distance from the center to the end of the pointer line. The round
    /// cap adds half the pointer width, which keeps it inside the knob.
    pub fn pointer_length(&self) -> f64 {
        self.radius() - self.pointer_width()
    }

    pub(crate) fn draw(&self, svg: &mut SvgBuilder, at: Point, palette: &Palette) {
        let length = self.pointer_length();
        let width = self.pointer_width();
        let radius = self.radius();
        svg.group("knob", |g| {
            g.circle(at.x, at.y, radius, &palette.foreground, "none", 0.0);
            g.line(at.x, at.y, at.x, at.y - length, &palette.background, width);
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Port
// ═══════════════════════════════════════════════════════════════════════

/// A patch jack: sleeve, ring and tip drawn as concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    bounds: Rect,
}

/// Radii of the three circles of a port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortRings {
    pub sleeve: f64,
    pub ring: f64,
    pub tip: f64,
}

impl Port {
    pub fn new(center: Point) -> Self {
        Self {
            bounds: Rect::round(center, PORT_DIAMETER),
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn rings(&self) -> PortRings {
        let sleeve_diameter = PORT_DIAMETER - PORT_STROKE_WIDTH;
        let step = sleeve_diameter / 7.0;
        let ring_diameter = sleeve_diameter - step;
        let tip_diameter = ring_diameter - step;
        PortRings {
            sleeve: sleeve_diameter / 2.0,
            ring: ring_diameter / 2.0,
            tip: tip_diameter / 2.0,
        }
    }

    pub(crate) fn draw(&self, svg: &mut SvgBuilder, at: Point, palette: &Palette) {
        let rings = self.rings();
        let fg = palette.foreground.as_str();
        let bg = palette.background.as_str();
        svg.group("port", |g| {
            g.circle(at.x, at.y, rings.sleeve, bg, fg, PORT_STROKE_WIDTH);
            g.circle(at.x, at.y, rings.ring, fg, fg, PORT_STROKE_WIDTH);
            g.circle(at.x, at.y, rings.tip, bg, fg, PORT_STROKE_WIDTH);
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Toggle
// ═══════════════════════════════════════════════════════════════════════

/// A lever switch with two or more positions. Selection 1 is the bottom
/// position and the highest selection the top one.
#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    bounds: Rect,
    positions: usize,
    selection: usize,
}

impl Toggle {
    pub fn new(center: Point, positions: usize, selection: usize) -> Result<Self> {
        if positions < 2 {
            return Err(Error::config(format!(
                "a toggle needs at least 2 positions, got {positions}"
            )));
        }
        check_selection("toggle", selection, positions)?;
        Ok(Self {
            bounds: Rect::centered(center, TOGGLE_WIDTH, TOGGLE_WIDTH * positions as f64),
            positions,
            selection,
        })
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    fn lever_height(&self) -> f64 {
        self.bounds.width() - 2.0 * TOGGLE_STROKE_WIDTH
    }

    fn lever_distance(&self) -> f64 {
        let interior_height = self.bounds.height() - 2.0 * TOGGLE_STROKE_WIDTH;
        (interior_height - self.lever_height()) / 2.0 - TOGGLE_STROKE_WIDTH
    }

    /// Vertical offset of the knurled lever from the toggle's center.
    pub fn lever_offset(&self, selection: usize) -> Result<f64> {
        check_selection("toggle", selection, self.positions)?;
        Ok(if selection == self.positions {
            -self.lever_distance()
        } else if selection == 1 {
            self.lever_distance()
        } else {
            0.0
        })
    }

    pub(crate) fn draw(
        &self,
        svg: &mut SvgBuilder,
        at: Point,
        selection: usize,
        palette: &Palette,
    ) -> Result<()> {
        let width = self.bounds.width();
        let height = self.bounds.height();
        let sw = TOGGLE_STROKE_WIDTH;
        let lever_y = at.y + self.lever_offset(selection)?;
        let spacing = self.lever_height() / TOGGLE_KNURL_COUNT as f64;
        let knurl_width = spacing / 3.0;
        let half_span = width / 2.0 - 2.0 * sw;
        let fg = palette.foreground.as_str();
        let bg = palette.background.as_str();
        svg.group("toggle", |g| {
            g.rect(
                at.x - width / 2.0 + sw / 2.0,
                at.y - height / 2.0 + sw / 2.0,
                width - sw,
                height - sw,
                TOGGLE_CORNER_RADIUS,
                bg,
                fg,
                sw,
            );
            let middle = (TOGGLE_KNURL_COUNT / 2) as f64;
            for i in 0..TOGGLE_KNURL_COUNT {
                let y = lever_y + (i as f64 - middle) * spacing;
                g.line(at.x - half_span, y, at.x + half_span, y, fg, knurl_width);
            }
        });
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Counter
// ═══════════════════════════════════════════════════════════════════════

/// A button that steps through a list of named values, with the current
/// value's name shown above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    bounds: Rect,
    button: Button,
    labels: Vec<Label>,
    selection: usize,
}

impl Counter {
    pub fn new<S: AsRef<str>>(center: Point, labels: &[S], selection: usize) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::config("a counter needs at least one label"));
        }
        check_selection("counter", selection, labels.len())?;
        let button = Button::new(center, Style::Normal);
        let anchor = align(PADDING, Direction::Above, button.bounds(), 0.0);
        let labels: Vec<Label> = labels
            .iter()
            .map(|text| Label::new(text.as_ref(), LabelSize::Small, Direction::Above, anchor))
            .collect();
        let bounds = bounding_box_of(
            std::iter::once(button.bounds()).chain(labels.iter().map(Label::bounds)),
        )?;
        Ok(Self {
            bounds,
            button,
            labels,
            selection,
        })
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub(crate) fn draw(
        &self,
        svg: &mut SvgBuilder,
        at: Point,
        selection: usize,
        palette: &Palette,
    ) -> Result<()> {
        check_selection("counter", selection, self.labels.len())?;
        let center = self.bounds.center();
        let (dx, dy) = (at.x - center.x, at.y - center.y);
        let label = &self.labels[selection - 1];
        let label_center = label.bounds().center();
        let button_center = self.button.bounds().center();
        svg.group("counter", |g| {
            label.draw(g, Point::new(label_center.x + dx, label_center.y + dy), palette);
            self.button
                .draw(g, Point::new(button_center.x + dx, button_center.y + dy), false, palette);
        });
        Ok(())
    }
}

pub(crate) fn check_selection(kind: &str, selection: usize, count: usize) -> Result<()> {
    if (1..=count).contains(&selection) {
        Ok(())
    } else {
        Err(Error::config(format!(
            "{kind} selection {selection} is outside 1..={count}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new("#111111", "#eeeeee")
    }

    fn drawn(f: impl FnOnce(&mut SvgBuilder)) -> String {
        let mut svg = SvgBuilder::new();
        f(&mut svg);
        svg.build(20.0, 20.0, "20mm", "20mm")
    }

    #[test]
    fn button_states_differ_only_in_fill() {
        let button = Button::new(Point::new(10.0, 10.0), Style::Normal);
        let p = palette();
        let off = drawn(|svg| button.draw(svg, Point::new(10.0, 10.0), false, &p));
        let on = drawn(|svg| button.draw(svg, Point::new(10.0, 10.0), true, &p));
        assert!(off.contains(r##"fill="#eeeeee" stroke="#111111""##));
        assert!(on.contains(r##"fill="#111111" stroke="#111111""##));
        assert_eq!(off.replace("fill=\"#eeeeee\"", "fill=\"#111111\""), on);
    }

    #[test]
    fn reversed_button_swaps_ring_and_center() {
        let button = Button::new(Point::new(10.0, 10.0), Style::Reversed);
        let p = palette();
        let off = drawn(|svg| button.draw(svg, Point::new(10.0, 10.0), false, &p));
        assert!(off.contains(r##"fill="#111111" stroke="#eeeeee""##));
    }

    #[test]
    fn knob_sizes() {
        assert_eq!(KnobSize::Huge.diameter(), 19.0);
        assert_eq!(KnobSize::Large.diameter(), 12.7);
        assert_eq!(KnobSize::Medium.diameter(), 10.0);
        assert_eq!(KnobSize::Small.diameter(), 8.4);
        assert_eq!(KnobSize::Tiny.diameter(), 7.0);
        assert!(matches!("enormous".parse::<KnobSize>(), Err(Error::Configuration(_))));
    }

    #[test]
    fn knob_pointer_stays_inside() {
        let knob = Knob::new(Point::new(0.0, 0.0), KnobSize::Large);
        assert!((knob.pointer_length() - (knob.radius() - knob.pointer_width())).abs() < 1e-12);
        assert!(knob.pointer_length() + knob.pointer_width() / 2.0 <= knob.radius());
    }

    #[test]
    fn port_rings_step_by_a_seventh_of_the_sleeve() {
        let port = Port::new(Point::new(0.0, 0.0));
        let rings = port.rings();
        assert!((PORT_STROKE_WIDTH - 0.21).abs() < 1e-12);
        assert!((rings.sleeve - 4.095).abs() < 1e-9);
        let step = 8.19 / 7.0;
        assert!((rings.ring - (8.19 - step) / 2.0).abs() < 1e-9);
        assert!((rings.tip - (8.19 - 2.0 * step) / 2.0).abs() < 1e-9);
        assert!(rings.sleeve + PORT_STROKE_WIDTH / 2.0 <= port.bounds().width() / 2.0 + 1e-12);
    }

    #[test]
    fn toggle_height_scales_with_positions() {
        let t = Toggle::new(Point::new(5.0, 5.0), 3, 2).unwrap();
        assert_eq!(t.bounds().width(), 3.0);
        assert!((t.bounds().height() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn two_position_offsets_are_negations() {
        let t = Toggle::new(Point::new(5.0, 5.0), 2, 1).unwrap();
        let bottom = t.lever_offset(1).unwrap();
        let top = t.lever_offset(2).unwrap();
        assert!(bottom > 0.0);
        assert_eq!(top, -bottom);
    }

    #[test]
    fn odd_toggle_middle_is_centered() {
        let t = Toggle::new(Point::new(5.0, 5.0), 3, 1).unwrap();
        assert_eq!(t.lever_offset(2).unwrap(), 0.0);
        assert_eq!(t.lever_offset(3).unwrap(), -t.lever_offset(1).unwrap());
    }

    #[test]
    fn lever_offset_rejects_selections_outside_the_positions() {
        let t = Toggle::new(Point::new(5.0, 5.0), 3, 1).unwrap();
        assert!(matches!(t.lever_offset(0), Err(Error::Configuration(_))));
        assert!(matches!(t.lever_offset(4), Err(Error::Configuration(_))));
    }

    #[test]
    fn toggle_rejects_bad_selection() {
        assert!(matches!(
            Toggle::new(Point::new(0.0, 0.0), 2, 3),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Toggle::new(Point::new(0.0, 0.0), 2, 0),
            Err(Error::Configuration(_))
        ));
        assert!(Toggle::new(Point::new(0.0, 0.0), 1, 1).is_err());
    }

    #[test]
    fn toggle_knurls_stay_inside_the_body() {
        let t = Toggle::new(Point::new(0.0, 0.0), 2, 1).unwrap();
        let spacing = t.lever_height() / TOGGLE_KNURL_COUNT as f64;
        let reach = t.lever_distance() + 2.0 * spacing + spacing / 6.0;
        assert!(reach <= t.bounds().height() / 2.0 - TOGGLE_STROKE_WIDTH);
    }

    #[test]
    fn counter_rejects_out_of_range_selection() {
        let result = Counter::new(Point::new(10.0, 10.0), &["A", "B", "C"], 4);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn counter_bounds_cover_button_and_labels() {
        let counter = Counter::new(Point::new(10.0, 30.0), &["SHORT", "A MUCH LONGER"], 1).unwrap();
        assert!(counter.bounds().contains(counter.button().bounds()));
        for label in counter.labels() {
            assert!(counter.bounds().contains(label.bounds()));
        }
        assert_eq!(counter.bounds().bottom, counter.button().bounds().bottom);
    }

    #[test]
    fn counter_draws_only_the_selected_label() {
        let counter = Counter::new(Point::new(10.0, 10.0), &["ONE", "TWO"], 1).unwrap();
        let p = palette();
        let doc = drawn(|svg| counter.draw(svg, counter.bounds().center(), 2, &p).unwrap());
        assert!(doc.contains(">TWO</text>"));
        assert!(!doc.contains(">ONE</text>"));
        assert_eq!(doc.matches("<circle").count(), 1);
    }
}
