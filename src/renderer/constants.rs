//! Shared constants for panel rendering (all lengths in millimeters).

// ── Panel ───────────────────────────────────────────────────────────
pub const PANEL_HEIGHT: f64 = 128.5;
pub const MM_PER_HP: f64 = 5.08;
pub const PX_PER_MM: f64 = 75.0 / 25.4;
pub(crate) const TITLE_Y: f64 = 9.0; // baseline region of the panel name

// ── Spacing ─────────────────────────────────────────────────────────
pub(crate) const PADDING: f64 = 1.0; // gap between a control and its label
pub(crate) const STROKE_WIDTH: f64 = 0.35; // boxes and connectors
pub(crate) const BOX_CORNER_RADIUS: f64 = 1.0;

// ── Controls ────────────────────────────────────────────────────────
pub(crate) const BUTTON_DIAMETER: f64 = 6.0;
pub(crate) const BUTTON_STROKE_WIDTH: f64 = 1.0;
pub(crate) const PORT_DIAMETER: f64 = 8.4;
pub(crate) const PORT_STROKE_WIDTH: f64 = PORT_DIAMETER * 0.025;
pub(crate) const TOGGLE_WIDTH: f64 = 3.0;
pub(crate) const TOGGLE_STROKE_WIDTH: f64 = 0.25;
pub(crate) const TOGGLE_CORNER_RADIUS: f64 = 0.5;
pub(crate) const TOGGLE_KNURL_COUNT: usize = 5;

pub(crate) const KNOB_HUGE: f64 = 19.0;
pub(crate) const KNOB_LARGE: f64 = 12.7;
pub(crate) const KNOB_MEDIUM: f64 = 10.0;
pub(crate) const KNOB_SMALL: f64 = 8.4;
pub(crate) const KNOB_TINY: f64 = 7.0;

// ── Text (sizes given in points at the image resolution) ────────────
pub(crate) const FONT_TITLE: f64 = 12.0 / PX_PER_MM;
pub(crate) const FONT_LARGE: f64 = 9.0 / PX_PER_MM;
pub(crate) const FONT_SMALL: f64 = 7.0 / PX_PER_MM;
pub(crate) const ASCENT_RATIO: f64 = 2.0 / 3.0;
pub(crate) const CHAR_WIDTH_RATIO: f64 = 0.6; // average glyph advance per em
pub(crate) const FONT_FAMILY: &str = "Proxima Nova, Helvetica, Arial, sans-serif";
