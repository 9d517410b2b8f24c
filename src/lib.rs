//! panelgen: faceplate and control-image generation for modular
//! synthesizer panels.
//!
//! A panel is described by a sequence of placement calls (knobs, ports,
//! buttons, toggles, counters, labels, connectors, boxes). The crate lays
//! those out, then renders three kinds of SVG document:
//!
//!   - the bare faceplate, in millimeters
//!   - the faceplate with every control drawn, in pixels
//!   - one small image per control per state
//!
//! Deciding where the documents are written is left to the caller.
//!
//! # Example
//! ```
//! use panelgen::{HexResolver, Hsl, PanelDefinition, render_panels};
//!
//! let definition = PanelDefinition::new(
//!     "Blank",
//!     4.0,
//!     Hsl::new(0.0, 0.0, 0.1),
//!     Hsl::new(0.0, 0.0, 0.97),
//!     |panel| {
//!         panel.title("BLANK")?.port(10.16, 100.0, "IN")?;
//!         Ok(())
//!     },
//! );
//! let files = render_panels(&[definition], &HexResolver).unwrap();
//! assert_eq!(files[0].relative_path, "blank/panel.svg");
//! ```

pub mod align;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod palette;
pub mod panel;
pub mod renderer;

use log::info;

pub use align::{align, Direction};
pub use config::{Builder, PanelConfig, PanelDefinition, Placement};
pub use error::{Error, Result};
pub use model::{bounding_box_of, Point, Rect};
pub use output::{bundle, slug, RenderedFile, Units};
pub use palette::{ColorResolver, HexResolver, Hsl, Palette, Style};
pub use panel::{Component, Control, Panel, Role};
pub use renderer::{KnobSize, LabelSize, Shape};

/// Build one panel and render every file for it.
pub fn render_panel(definition: &PanelDefinition, resolver: &dyn ColorResolver) -> Result<Vec<RenderedFile>> {
    let panel = definition.build(resolver)?;
    panel.render_all()
}

/// Build and render each panel in turn, returning all of their files.
///
/// Panels are independent; the first one that fails to build stops the run.
pub fn render_panels(
    definitions: &[PanelDefinition],
    resolver: &dyn ColorResolver,
) -> Result<Vec<RenderedFile>> {
    let mut files = Vec::new();
    for definition in definitions {
        let rendered = render_panel(definition, resolver)?;
        info!("{}: {} files", definition.name, rendered.len());
        files.extend(rendered);
    }
    Ok(files)
}

/// Parse panel definitions from JSON and render them.
pub fn render_json(json: &str, resolver: &dyn ColorResolver) -> Result<Vec<RenderedFile>> {
    let definitions: Vec<PanelDefinition> = PanelConfig::list_from_json(json)?
        .into_iter()
        .map(PanelDefinition::from)
        .collect();
    render_panels(&definitions, resolver)
}
