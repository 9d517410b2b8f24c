//! Panel definitions: what a driver hands in to get a panel built.
//!
//! A definition names the panel, gives its width and colors, and says how
//! to populate it: either a Rust function making composer calls directly, or
//! a list of [`Placement`]s (typically loaded from JSON) replayed in order.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::align::Direction;
use crate::error::Result;
use crate::model::Rect;
use crate::palette::{ColorResolver, Hsl, Palette, Style};
use crate::panel::Panel;
use crate::renderer::{KnobSize, LabelSize};

/// One composer call with its arguments.
///
/// Keyword arguments (sizes, alignments, styles) stay strings here so that a
/// bad keyword is reported as a configuration error when the placement is
/// applied, naming the offending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    Title {
        text: String,
    },
    Label {
        x: f64,
        y: f64,
        text: String,
        #[serde(default = "default_label_size")]
        size: String,
        #[serde(default = "default_alignment")]
        alignment: String,
    },
    Knob {
        x: f64,
        y: f64,
        size: String,
        #[serde(default)]
        label: String,
    },
    Port {
        x: f64,
        y: f64,
        #[serde(default)]
        label: String,
    },
    OutputPort {
        x: f64,
        y: f64,
        #[serde(default)]
        label: String,
    },
    Button {
        x: f64,
        y: f64,
        #[serde(default)]
        label: String,
        #[serde(default = "default_style")]
        style: String,
    },
    Toggle {
        x: f64,
        y: f64,
        labels: Vec<String>,
        selection: usize,
    },
    Counter {
        x: f64,
        y: f64,
        name: String,
        labels: Vec<String>,
        #[serde(default = "default_selection")]
        selection: usize,
    },
    Connector {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Frame {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
        #[serde(default = "default_style")]
        style: String,
    },
}

fn default_label_size() -> String {
    "small".to_string()
}

fn default_alignment() -> String {
    "above".to_string()
}

fn default_style() -> String {
    "normal".to_string()
}

fn default_selection() -> usize {
    1
}

impl Placement {
    /// Make the corresponding call on `panel`.
    pub fn apply(&self, panel: &mut Panel) -> Result<()> {
        match self {
            Placement::Title { text } => panel.title(text)?,
            Placement::Label { x, y, text, size, alignment } => {
                let size: LabelSize = size.parse()?;
                let direction: Direction = alignment.parse()?;
                panel.label(*x, *y, text, size, direction)?
            }
            Placement::Knob { x, y, size, label } => {
                let size: KnobSize = size.parse()?;
                panel.knob(*x, *y, size, label)?
            }
            Placement::Port { x, y, label } => panel.port(*x, *y, label)?,
            Placement::OutputPort { x, y, label } => panel.output_port(*x, *y, label)?,
            Placement::Button { x, y, label, style } => {
                let style: Style = style.parse()?;
                panel.button(*x, *y, label, style)?
            }
            Placement::Toggle { x, y, labels, selection } => {
                panel.toggle(*x, *y, labels.as_slice(), *selection)?
            }
            Placement::Counter { x, y, name, labels, selection } => {
                panel.counter(*x, *y, name, labels.as_slice(), *selection)?
            }
            Placement::Connector { x1, y1, x2, y2 } => panel.connector(*x1, *y1, *x2, *y2)?,
            Placement::Frame { top, right, bottom, left, style } => {
                let style: Style = style.parse()?;
                let content = Rect::new(*top, *right, *bottom, *left)?;
                panel.frame(content, style)?
            }
        };
        Ok(())
    }
}

/// A panel definition as stored in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub name: String,
    pub hp: f64,
    pub foreground: Hsl,
    pub background: Hsl,
    #[serde(default)]
    pub placements: Vec<Placement>,
}

impl PanelConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of panel definitions.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// How a definition populates its panel.
#[derive(Debug, Clone)]
pub enum Builder {
    Calls(fn(&mut Panel) -> Result<()>),
    Placements(Vec<Placement>),
}

/// Everything needed to build one panel.
#[derive(Debug, Clone)]
pub struct PanelDefinition {
    pub name: String,
    pub hp: f64,
    pub foreground: Hsl,
    pub background: Hsl,
    pub builder: Builder,
}

impl PanelDefinition {
    pub fn new(
        name: impl Into<String>,
        hp: f64,
        foreground: Hsl,
        background: Hsl,
        build: fn(&mut Panel) -> Result<()>,
    ) -> Self {
        Self {
            name: name.into(),
            hp,
            foreground,
            background,
            builder: Builder::Calls(build),
        }
    }

    /// Build the panel. It comes back ready to render.
    pub fn build(&self, resolver: &dyn ColorResolver) -> Result<Panel> {
        let palette = Palette::resolve(resolver, self.foreground, self.background);
        let mut panel = Panel::new(self.name.clone(), self.hp, palette)?;
        match &self.builder {
            Builder::Calls(build) => build(&mut panel)?,
            Builder::Placements(placements) => {
                debug!("panel {}: replaying {} placements", panel.slug(), placements.len());
                for placement in placements {
                    placement.apply(&mut panel)?;
                }
            }
        }
        Ok(panel)
    }
}

impl From<PanelConfig> for PanelDefinition {
    fn from(config: PanelConfig) -> Self {
        Self {
            name: config.name,
            hp: config.hp,
            foreground: config.foreground,
            background: config.background,
            builder: Builder::Placements(config.placements),
        }
    }
}
