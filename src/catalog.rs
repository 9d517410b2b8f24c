//! Concrete panel definitions.
//!
//! Each function replays the fixed sequence of composer calls for one
//! module. Coordinates are literal millimeters.

use crate::align::Direction;
use crate::config::PanelDefinition;
use crate::error::Result;
use crate::palette::{Hsl, Style};
use crate::panel::Panel;
use crate::renderer::{KnobSize, LabelSize};

const STAGE_FOREGROUND: Hsl = Hsl::new(120.0, 1.0, 0.3);
const STAGE_BACKGROUND: Hsl = Hsl::new(120.0, 1.0, 0.97);
const SWAVE_FOREGROUND: Hsl = Hsl::new(16.0, 0.5, 0.4);
const SWAVE_BACKGROUND: Hsl = Hsl::new(16.0, 0.5, 0.97);
const FUNC_FOREGROUND: Hsl = Hsl::new(220.0, 0.6, 0.35);
const FUNC_BACKGROUND: Hsl = Hsl::new(220.0, 0.6, 0.97);

/// Every panel in the catalog, in display order.
pub fn panels() -> Vec<PanelDefinition> {
    vec![
        PanelDefinition::new("Stage", 5.0, STAGE_FOREGROUND, STAGE_BACKGROUND, stage),
        PanelDefinition::new("Booster Stage", 8.0, STAGE_FOREGROUND, STAGE_BACKGROUND, booster_stage),
        PanelDefinition::new("Swave", 4.0, SWAVE_FOREGROUND, SWAVE_BACKGROUND, swave),
        PanelDefinition::new("Func", 3.0, FUNC_FOREGROUND, FUNC_BACKGROUND, func),
    ]
}

fn stage(panel: &mut Panel) -> Result<()> {
    let (left, center, right) = (5.5, 12.7, 19.9);
    panel
        .title("STAGE")?
        .knob(center, 25.0, KnobSize::Large, "LEVEL")?
        .knob(center, 43.5, KnobSize::Large, "CURVE")?
        .knob(center, 62.0, KnobSize::Large, "DURATION")?
        .port(left, 82.0, "DEFER")?
        .output_port(right, 82.0, "ACTIVE")?
        .port(left, 97.0, "TRIG")?
        .output_port(right, 97.0, "EOC")?
        .port(left, 112.0, "IN")?
        .output_port(right, 112.0, "OUT")?;
    Ok(())
}

fn booster_stage(panel: &mut Panel) -> Result<()> {
    let (left, center, right) = (7.0, 20.32, 33.64);
    panel
        .title("BOOSTER STAGE")?
        .knob(center, 25.0, KnobSize::Large, "LEVEL")?
        .toggle(right, 25.0, &["UNI", "BI"], 2)?
        .knob(center, 43.5, KnobSize::Large, "CURVE")?
        .toggle(right, 43.5, &["J", "S"], 1)?
        .knob(center, 62.0, KnobSize::Large, "DURATION")?
        .toggle(right, 62.0, &["1", "10", "100"], 2)?
        .port(left, 25.0, "CV")?
        .port(left, 43.5, "CV")?
        .port(left, 62.0, "CV")?
        .button(left, 82.0, "DEFER", Style::Normal)?
        .button(right, 82.0, "ACTIVE", Style::Reversed)?
        .port(left, 97.0, "DEFER")?
        .output_port(right, 97.0, "ACTIVE")?
        .port(center, 112.0, "IN")?
        .output_port(right, 112.0, "OUT")?;
    Ok(())
}

fn swave(panel: &mut Panel) -> Result<()> {
    let x = 10.16;
    panel
        .title("SWAVE")?
        .toggle(x, 25.0, &["J", "S"], 2)?
        .knob(x, 43.5, KnobSize::Large, "CURVE")?
        .port(x, 62.0, "CV")?
        .connector(x, 66.2, x, 89.4)?
        .port(x, 98.0, "IN")?
        .output_port(x, 112.0, "OUT")?;
    Ok(())
}

fn func(panel: &mut Panel) -> Result<()> {
    let x = 7.62;
    panel
        .title("FUNC")?
        .port(x, 25.0, "IN")?
        .knob(x, 45.0, KnobSize::Medium, "")?
        .counter(x, 62.0, "operator", &["ADD", "MULT"], 1)?
        .counter(x, 76.0, "range", &["0-5", "±5", "0-10", "±10"], 2)?
        .label(x, 88.0, "RANGE", LabelSize::Small, Direction::Below)?
        .output_port(x, 112.0, "OUT")?;
    Ok(())
}
