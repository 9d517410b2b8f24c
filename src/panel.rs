//! Panel composer: lays out one module's faceplate and controls, then
//! renders them.
//!
//! A panel goes through two phases. While building, placement calls append
//! shapes: labels, connectors and boxes to the faceplate layer, interactive
//! bodies to the controls layer. The first render call ends building; from
//! then on the panel is read-only and further placements fail with
//! [`Error::Phase`].

use std::cell::Cell;
use std::collections::HashMap;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::align::{align, Direction};
use crate::error::{Error, Result};
use crate::model::{bounding_box_of, Point, Rect};
use crate::output::{relative_path, slug, RenderedFile, Units};
use crate::palette::{Palette, Style};
use crate::renderer::constants::*;
use crate::renderer::svg_builder::{num, SvgBuilder};
use crate::renderer::{
    Button, Counter, Frame, Knob, KnobSize, Label, LabelSize, Line, Port, Shape, Toggle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Building,
    Rendering,
}

/// What a control is to the module hosting the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Param,
    Input,
    Output,
}

/// An interactive shape with the name its per-state images are filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub name: String,
    pub role: Role,
    /// The text printed next to the control, or the counter's name.
    pub label: String,
    pub shape: Shape,
}

/// One entry of a panel's component manifest: where a module widget has to
/// put a param, input or output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub role: Role,
    pub id: String,
    /// Center in panel millimeters.
    pub center: Point,
}

#[derive(Debug)]
pub struct Panel {
    name: String,
    slug: String,
    width: f64,
    height: f64,
    palette: Palette,
    faceplate: Vec<Shape>,
    controls: Vec<Control>,
    phase: Cell<Phase>,
}

impl Panel {
    /// Create an empty panel `hp` horizontal-pitch units wide.
    pub fn new(name: impl Into<String>, hp: f64, palette: Palette) -> Result<Self> {
        let name = name.into();
        if !(hp.is_finite() && hp > 0.0) {
            return Err(Error::config(format!(
                "panel '{name}' must be a positive number of HP wide, got {hp}"
            )));
        }
        let slug = slug(&name);
        if slug.is_empty() {
            return Err(Error::config(format!("panel name '{name}' has no usable characters")));
        }
        debug!("panel {slug}: {hp} HP");
        Ok(Self {
            name,
            slug,
            width: hp * MM_PER_HP,
            height: PANEL_HEIGHT,
            palette,
            faceplate: Vec::new(),
            controls: Vec::new(),
            phase: Cell::new(Phase::Building),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Width in millimeters.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in millimeters.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn faceplate_layer(&self) -> &[Shape] {
        &self.faceplate
    }

    pub fn controls_layer(&self) -> &[Control] {
        &self.controls
    }

    pub fn is_rendering(&self) -> bool {
        self.phase.get() == Phase::Rendering
    }

    fn ensure_building(&self) -> Result<()> {
        match self.phase.get() {
            Phase::Building => Ok(()),
            Phase::Rendering => Err(Error::Phase(self.name.clone())),
        }
    }

    fn add_decoration(&mut self, shape: impl Into<Shape>) {
        self.faceplate.push(shape.into());
    }

    fn add_control(&mut self, name: String, role: Role, label: &str, shape: impl Into<Shape>) {
        let shape = shape.into();
        debug!("panel {}: {} at {:?}", self.slug, name, shape.bounds().center());
        self.controls.push(Control { name, role, label: label.to_string(), shape });
    }

    /// Put a label `PADDING` away from `reference`. Empty text adds nothing.
    fn add_label(&mut self, text: &str, size: LabelSize, direction: Direction, reference: &Rect) {
        if text.is_empty() {
            return;
        }
        let half_width = Label::text_width(text, size) / 2.0;
        let anchor = align(PADDING, direction, reference, half_width);
        self.add_decoration(Label::new(text, size, direction, anchor));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Placement
    // ═══════════════════════════════════════════════════════════════════

    /// The panel's name, centered at the top.
    pub fn title(&mut self, text: &str) -> Result<&mut Self> {
        self.ensure_building()?;
        let anchor = Point::new(self.width / 2.0, TITLE_Y);
        self.add_decoration(Label::new(text, LabelSize::Title, Direction::Above, anchor));
        Ok(self)
    }

    /// Free-standing text. See [`Label::new`] for how `(x, y)` anchors it.
    pub fn label(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        size: LabelSize,
        direction: Direction,
    ) -> Result<&mut Self> {
        self.ensure_building()?;
        self.add_decoration(Label::new(text, size, direction, placement_point(x, y)?));
        Ok(self)
    }

    pub fn knob(&mut self, x: f64, y: f64, size: KnobSize, label: &str) -> Result<&mut Self> {
        self.ensure_building()?;
        let knob = Knob::new(placement_point(x, y)?, size);
        self.add_label(label, LabelSize::Large, Direction::Above, knob.bounds());
        self.add_control(format!("knob-{size}"), Role::Param, label, knob);
        Ok(self)
    }

    pub fn port(&mut self, x: f64, y: f64, label: &str) -> Result<&mut Self> {
        self.ensure_building()?;
        let port = Port::new(placement_point(x, y)?);
        self.add_label(label, LabelSize::Small, Direction::Above, port.bounds());
        self.add_control("port".to_string(), Role::Input, label, port);
        Ok(self)
    }

    /// A port boxed together with its label in reversed colors, marking it
    /// as an output.
    pub fn output_port(&mut self, x: f64, y: f64, label: &str) -> Result<&mut Self> {
        self.ensure_building()?;
        let port = Port::new(placement_point(x, y)?);
        let anchor = align(PADDING, Direction::Above, port.bounds(), 0.0);
        let label = Label::new(label, LabelSize::Small, Direction::Above, anchor)
            .with_style(Style::Reversed);
        let content = bounding_box_of([port.bounds(), label.bounds()])?;
        self.add_decoration(Frame::new(&content, Style::Reversed));
        let text = label.text().to_string();
        self.add_decoration(label);
        self.add_control("port".to_string(), Role::Output, &text, port);
        Ok(self)
    }

    pub fn button(&mut self, x: f64, y: f64, label: &str, style: Style) -> Result<&mut Self> {
        self.ensure_building()?;
        let button = Button::new(placement_point(x, y)?, style);
        self.add_label(label, LabelSize::Small, Direction::Above, button.bounds());
        let name = match style {
            Style::Normal => "button",
            Style::Reversed => "button-reversed",
        };
        self.add_control(name.to_string(), Role::Param, label, button);
        Ok(self)
    }

    /// A toggle with one label per position: the first below it, the last
    /// above it and, for three positions, the middle one to its right.
    pub fn toggle<S: AsRef<str>>(
        &mut self,
        x: f64,
        y: f64,
        labels: &[S],
        selection: usize,
    ) -> Result<&mut Self> {
        self.ensure_building()?;
        let positions = labels.len();
        if !(2..=3).contains(&positions) {
            return Err(Error::config(format!(
                "a toggle takes 2 or 3 position labels, got {positions}"
            )));
        }
        let toggle = Toggle::new(placement_point(x, y)?, positions, selection)?;
        let bounds = *toggle.bounds();
        self.add_label(labels[0].as_ref(), LabelSize::Small, Direction::Below, &bounds);
        if positions == 3 {
            self.add_label(labels[1].as_ref(), LabelSize::Small, Direction::RightOf, &bounds);
        }
        self.add_label(labels[positions - 1].as_ref(), LabelSize::Small, Direction::Above, &bounds);
        let text: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        self.add_control(format!("toggle-{positions}"), Role::Param, &text.join(" "), toggle);
        Ok(self)
    }

    /// A button that cycles through `labels`, each image showing one of them.
    pub fn counter<S: AsRef<str>>(
        &mut self,
        x: f64,
        y: f64,
        name: &str,
        labels: &[S],
        selection: usize,
    ) -> Result<&mut Self> {
        self.ensure_building()?;
        let counter = Counter::new(placement_point(x, y)?, labels, selection)?;
        let name_slug = slug(name);
        if name_slug.is_empty() {
            return Err(Error::config(format!("counter name '{name}' has no usable characters")));
        }
        self.add_control(format!("counter-{name_slug}"), Role::Param, name, counter);
        Ok(self)
    }

    pub fn connector(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<&mut Self> {
        self.ensure_building()?;
        let start = placement_point(x1, y1)?;
        let end = placement_point(x2, y2)?;
        self.add_decoration(Line::new(start, end));
        Ok(self)
    }

    /// A box around `content`.
    pub fn frame(&mut self, content: Rect, style: Style) -> Result<&mut Self> {
        self.ensure_building()?;
        let content = Rect::new(content.top, content.right, content.bottom, content.left)?;
        self.add_decoration(Frame::new(&content, style));
        Ok(self)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Rendering
    // ═══════════════════════════════════════════════════════════════════

    fn start_rendering(&self) {
        if self.phase.replace(Phase::Rendering) == Phase::Building {
            debug!(
                "panel {}: {} faceplate items, {} controls",
                self.slug,
                self.faceplate.len(),
                self.controls.len()
            );
        }
    }

    fn draw_faceplate(&self, svg: &mut SvgBuilder) -> Result<()> {
        svg.rect(0.0, 0.0, self.width, self.height, 0.0, &self.palette.background, "none", 0.0);
        for shape in &self.faceplate {
            shape.draw_in_place(svg, &self.palette)?;
        }
        Ok(())
    }

    /// The bare faceplate, sized in millimeters.
    pub fn render_faceplate(&self) -> Result<RenderedFile> {
        self.start_rendering();
        let mut svg = SvgBuilder::new();
        self.draw_faceplate(&mut svg)?;
        let markup = svg.build(
            self.width,
            self.height,
            &dimension(self.width, Units::Millimeters),
            &dimension(self.height, Units::Millimeters),
        );
        RenderedFile::new(
            relative_path(&self.slug, "panel"),
            self.width,
            self.height,
            Units::Millimeters,
            markup,
        )
    }

    /// The faceplate with every control drawn in its default state, sized in
    /// pixels.
    pub fn render_full_image(&self) -> Result<RenderedFile> {
        self.start_rendering();
        let mut svg = SvgBuilder::new();
        self.draw_faceplate(&mut svg)?;
        for control in &self.controls {
            control.shape.draw_in_place(&mut svg, &self.palette)?;
        }
        let width = self.width * PX_PER_MM;
        let height = self.height * PX_PER_MM;
        let markup = svg.build(
            self.width,
            self.height,
            &dimension(width, Units::Pixels),
            &dimension(height, Units::Pixels),
        );
        RenderedFile::new(relative_path(&self.slug, "image"), width, height, Units::Pixels, markup)
    }

    /// One image per control per state, each centered in its own bounds.
    ///
    /// Controls that share a name draw identically and are emitted once.
    pub fn render_control_state_files(&self) -> Result<Vec<RenderedFile>> {
        self.start_rendering();
        let mut files: Vec<RenderedFile> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        for control in &self.controls {
            let shape = &control.shape;
            let bounds = shape.bounds();
            let (width, height) = (bounds.width(), bounds.height());
            let states = shape.state_count();
            for selection in 1..=states {
                let name = if states > 1 {
                    format!("{}-{}", control.name, selection)
                } else {
                    control.name.clone()
                };
                let path = relative_path(&self.slug, &name);
                let mut svg = SvgBuilder::new();
                shape.draw(&mut svg, Point::new(width / 2.0, height / 2.0), selection, &self.palette)?;
                let markup = svg.build(
                    width,
                    height,
                    &dimension(width, Units::Millimeters),
                    &dimension(height, Units::Millimeters),
                );
                if let Some(&index) = seen.get(&path) {
                    if files[index].markup != markup {
                        warn!("panel {}: conflicting images for {}", self.slug, path);
                        return Err(Error::config(format!(
                            "two different controls on panel '{}' both render to {}",
                            self.name, path
                        )));
                    }
                    continue;
                }
                trace!("panel {}: {}", self.slug, path);
                seen.insert(path.clone(), files.len());
                files.push(RenderedFile::new(path, width, height, Units::Millimeters, markup)?);
            }
        }
        Ok(files)
    }

    /// Every control's role, identifier and center, in placement order.
    ///
    /// Identifiers are the control's label in upper snake case. Unlabeled
    /// controls fall back to their image name, and a repeated identifier
    /// within one role gets a numeric suffix (`CV`, `CV_2`, ...).
    pub fn components(&self) -> Vec<Component> {
        let mut counts: HashMap<(Role, String), usize> = HashMap::new();
        self.controls
            .iter()
            .map(|control| {
                let base = identifier(&control.label)
                    .or_else(|| identifier(&control.name))
                    .unwrap_or_else(|| "CONTROL".to_string());
                let count = counts.entry((control.role, base.clone())).or_insert(0);
                *count += 1;
                let id = if *count == 1 { base } else { format!("{base}_{count}") };
                Component { role: control.role, id, center: control.shape.bounds().center() }
            })
            .collect()
    }

    /// The component list as JSON, for generating the module's widget code.
    pub fn render_components(&self) -> Result<String> {
        self.start_rendering();
        Ok(serde_json::to_string_pretty(&self.components())?)
    }

    /// Faceplate, full image and every control state file.
    pub fn render_all(&self) -> Result<Vec<RenderedFile>> {
        let mut files = vec![self.render_faceplate()?, self.render_full_image()?];
        files.extend(self.render_control_state_files()?);
        Ok(files)
    }
}

fn identifier(text: &str) -> Option<String> {
    let slug = slug(text);
    (!slug.is_empty()).then(|| slug.replace('-', "_").to_ascii_uppercase())
}

/// A placement position, rejecting non-finite coordinates.
fn placement_point(x: f64, y: f64) -> Result<Point> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(Error::config(format!("placement at ({x}, {y}) is not a finite position")));
    }
    Ok(Point::new(x, y))
}

fn dimension(value: f64, units: Units) -> String {
    format!("{}{}", num(value), units.suffix())
}
