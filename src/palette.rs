//! Panel colors.
//!
//! A panel is drawn in exactly two colors. They come from HSL triples in the
//! panel definition, resolved by a [`ColorResolver`]; the renderer only ever
//! sees the resulting tokens.

use serde::{Deserialize, Serialize};

/// Hue in degrees, saturation and lightness in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Lightness used for the light variant of a color.
pub const LIGHT_LIGHTNESS: f64 = 0.97;

/// Turns an HSL triple into the two tokens the renderer uses.
pub trait ColorResolver {
    /// The color itself.
    fn dark(&self, hsl: Hsl) -> String;
    /// Same hue and saturation, lightness forced to [`LIGHT_LIGHTNESS`].
    fn light(&self, hsl: Hsl) -> String;
}

/// Resolves colors to `#rrggbb` hex strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexResolver;

impl ColorResolver for HexResolver {
    fn dark(&self, hsl: Hsl) -> String {
        hex(hsl)
    }

    fn light(&self, hsl: Hsl) -> String {
        hex(Hsl { l: LIGHT_LIGHTNESS, ..hsl })
    }
}

fn hex(hsl: Hsl) -> String {
    let (r, g, b) = to_rgb(hsl);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);
    if s == 0.0 {
        let v = channel(l);
        return (v, v, v);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        channel(hue_to_rgb(p, q, h)),
        channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// The two resolved colors a panel is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub foreground: String,
    pub background: String,
}

impl Palette {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }

    /// Foreground is the dark variant of its triple, background the light
    /// variant of its own.
    pub fn resolve(resolver: &dyn ColorResolver, foreground: Hsl, background: Hsl) -> Self {
        Self {
            foreground: resolver.dark(foreground),
            background: resolver.light(background),
        }
    }

    /// Colors for a shape drawn in the given style.
    pub(crate) fn styled(&self, style: Style) -> (&str, &str) {
        match style {
            Style::Normal => (&self.foreground, &self.background),
            Style::Reversed => (&self.background, &self.foreground),
        }
    }
}

/// Whether a shape uses the panel colors as-is or swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Normal,
    Reversed,
}

impl std::str::FromStr for Style {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "normal" => Ok(Style::Normal),
            "reversed" => Ok(Style::Reversed),
            other => Err(crate::error::Error::config(format!("unknown style '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        let r = HexResolver;
        assert_eq!(r.dark(Hsl::new(0.0, 1.0, 0.5)), "#ff0000");
        assert_eq!(r.dark(Hsl::new(120.0, 1.0, 0.5)), "#00ff00");
        assert_eq!(r.dark(Hsl::new(240.0, 1.0, 0.5)), "#0000ff");
        assert_eq!(r.dark(Hsl::new(0.0, 0.0, 0.0)), "#000000");
    }

    #[test]
    fn light_variant_keeps_hue_and_saturation() {
        let r = HexResolver;
        assert_eq!(r.light(Hsl::new(0.0, 0.0, 0.1)), "#f7f7f7");
        assert_eq!(r.light(Hsl::new(0.0, 1.0, 0.2)), r.dark(Hsl::new(0.0, 1.0, LIGHT_LIGHTNESS)));
    }

    #[test]
    fn palette_takes_dark_foreground_and_light_background() {
        let p = Palette::resolve(&HexResolver, Hsl::new(0.0, 0.0, 0.0), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(p, Palette::new("#000000", "#f7f7f7"));
    }

    #[test]
    fn reversed_style_swaps() {
        let p = Palette::new("#111111", "#eeeeee");
        assert_eq!(p.styled(Style::Normal), ("#111111", "#eeeeee"));
        assert_eq!(p.styled(Style::Reversed), ("#eeeeee", "#111111"));
    }
}
