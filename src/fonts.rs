//! Card font faces and measurement.
//!
//! Mirrors the deck's font roles: a body face carrying the icon glyphs,
//! a display face for titles and an accent face for the events type line.
//! Width measurement sums per-glyph horizontal advances, the same numbers
//! the renderer advances its caret by, so measured and painted widths
//! agree exactly.

use ab_glyph::{Font, FontArc, ScaleFont};
use std::path::Path;

use crate::error::CardError;
use crate::text::measure::{FontStyle, Measure};

/// The set of faces one card render needs.
#[derive(Clone)]
pub struct FontSet {
    /// Body text face.
    pub body: FontArc,
    /// True italic body face. When absent, italic runs are drawn with a
    /// synthetic oblique shear of the body face (advances are unchanged).
    pub body_italic: Option<FontArc>,
    /// Title display face.
    pub title: FontArc,
    /// Accent face for the events type line.
    pub accent: FontArc,
}

impl FontSet {
    pub fn from_bytes(
        body: Vec<u8>,
        body_italic: Option<Vec<u8>>,
        title: Vec<u8>,
        accent: Vec<u8>,
    ) -> Result<Self, CardError> {
        Ok(Self {
            body: parse_face("body", body)?,
            body_italic: body_italic
                .map(|bytes| parse_face("body italic", bytes))
                .transpose()?,
            title: parse_face("title", title)?,
            accent: parse_face("accent", accent)?,
        })
    }

    /// Load the conventional face files from an asset directory:
    /// `fonts/body.ttf`, `fonts/title.ttf`, `fonts/accent.ttf` and an
    /// optional `fonts/body-italic.ttf`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CardError> {
        let fonts = dir.join("fonts");
        let italic = std::fs::read(fonts.join("body-italic.ttf")).ok();
        Self::from_bytes(
            std::fs::read(fonts.join("body.ttf"))?,
            italic,
            std::fs::read(fonts.join("title.ttf"))?,
            std::fs::read(fonts.join("accent.ttf"))?,
        )
    }

    /// Body face for a style, falling back to the upright face when no
    /// italic cut is available.
    pub fn body_face(&self, style: FontStyle) -> &FontArc {
        match style {
            FontStyle::Italic => self.body_italic.as_ref().unwrap_or(&self.body),
            FontStyle::Regular => &self.body,
        }
    }

    /// Whether italic runs need a synthetic oblique shear.
    pub fn synthetic_italic(&self) -> bool {
        self.body_italic.is_none()
    }
}

impl Measure for FontSet {
    fn text_width(&self, text: &str, style: FontStyle, font_size: f32) -> f32 {
        advance_width(self.body_face(style), text, font_size)
    }
}

fn parse_face(name: &str, bytes: Vec<u8>) -> Result<FontArc, CardError> {
    FontArc::try_from_vec(bytes).map_err(|err| CardError::Font(format!("{name}: {err}")))
}

/// Sum of horizontal advances for `text` at `font_size` pixels.
pub fn advance_width(font: &FontArc, text: &str, font_size: f32) -> f32 {
    let scaled = font.as_scaled(font_size);
    text.chars()
        .map(|ch| scaled.h_advance(font.glyph_id(ch)))
        .sum()
}
