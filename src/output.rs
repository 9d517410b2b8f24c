//! Rendered files and what a driver needs to know about them.
//!
//! Where the bytes end up is the caller's business. This module describes
//! each rendered document and can pack a whole set into a zip archive in
//! memory.

use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::Result;

/// Extension of every rendered file.
pub const EXTENSION: &str = "svg";

/// Unit of a rendered file's declared width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    Millimeters,
    Pixels,
}

impl Units {
    pub fn suffix(self) -> &'static str {
        match self {
            Units::Millimeters => "mm",
            Units::Pixels => "px",
        }
    }
}

/// One rendered SVG document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFile {
    /// `<panel-slug>/<name>.svg`
    pub relative_path: String,
    pub width: f64,
    pub height: f64,
    pub units: Units,
    /// Whether the document contains text, so the driver can decide whether
    /// fonts need embedding or outlining.
    pub has_text: bool,
    pub markup: String,
}

impl RenderedFile {
    /// Wrap rendered markup, checking that it parses and noting whether it
    /// contains any text.
    pub(crate) fn new(
        relative_path: String,
        width: f64,
        height: f64,
        units: Units,
        markup: String,
    ) -> Result<Self> {
        let has_text = contains_text(&markup)?;
        Ok(Self {
            relative_path,
            width,
            height,
            units,
            has_text,
            markup,
        })
    }
}

/// Path of a rendered file, relative to wherever the driver puts output.
pub fn relative_path(panel_slug: &str, name: &str) -> String {
    format!("{}/{}.{}", panel_slug, name, EXTENSION)
}

fn contains_text(markup: &str) -> Result<bool> {
    let doc = roxmltree::Document::parse(markup)?;
    Ok(doc
        .descendants()
        .any(|node| node.is_element() && node.tag_name().name() == "text"))
}

/// Filesystem-safe identifier for a name: lowercase ASCII letters and digits,
/// with every other run of characters collapsed to a single `-`.
pub fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Pack rendered files into a zip archive, one entry per relative path.
pub fn bundle(files: &[RenderedFile]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for file in files {
        zip.start_file(file.relative_path.as_str(), options)?;
        zip.write_all(file.markup.as_bytes())?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    const PLAIN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><circle r="1"/></svg>"#;
    const WITH_TEXT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><g><text>IN</text></g></svg>"#;

    #[test]
    fn slugs() {
        assert_eq!(slug("Booster Stage"), "booster-stage");
        assert_eq!(slug("  Cubic / Tapers!! "), "cubic-tapers");
        assert_eq!(slug("FUNC 6"), "func-6");
        assert_eq!(slug("x"), "x");
        assert_eq!(slug("--"), "");
    }

    #[test]
    fn relative_paths() {
        assert_eq!(relative_path("stage", "port"), "stage/port.svg");
    }

    #[test]
    fn text_is_detected() {
        let plain = RenderedFile::new("a.svg".into(), 1.0, 1.0, Units::Millimeters, PLAIN.into()).unwrap();
        let text = RenderedFile::new("b.svg".into(), 1.0, 1.0, Units::Millimeters, WITH_TEXT.into()).unwrap();
        assert!(!plain.has_text);
        assert!(text.has_text);
    }

    #[test]
    fn malformed_markup_is_rejected() {
        let result = RenderedFile::new("c.svg".into(), 1.0, 1.0, Units::Pixels, "<svg>".into());
        assert!(matches!(result, Err(crate::error::Error::Markup(_))));
    }

    #[test]
    fn bundle_round_trips_entries() {
        let files = vec![
            RenderedFile::new("p/a.svg".into(), 1.0, 1.0, Units::Millimeters, PLAIN.into()).unwrap(),
            RenderedFile::new("p/b.svg".into(), 1.0, 1.0, Units::Millimeters, WITH_TEXT.into()).unwrap(),
        ];
        let bytes = bundle(&files).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive.by_name("p/b.svg").unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, WITH_TEXT);
    }
}
