//! Text measurement capability.
//!
//! Layout and fitting depend only on this trait, never on a drawing
//! surface, so wrapping decisions cannot depend on hidden context state.

/// Style flags a measurement call must honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Italic,
}

impl FontStyle {
    pub fn for_italic(italic: bool) -> FontStyle {
        if italic {
            FontStyle::Italic
        } else {
            FontStyle::Regular
        }
    }
}

/// Width measurement for a run of text at a pixel size.
pub trait Measure {
    fn text_width(&self, text: &str, style: FontStyle, font_size: f32) -> f32;
}

/// Deterministic fixed-advance measurer: every character is `advance_em`
/// of the font size wide, regardless of style. Used by tests and useful
/// for dry-run estimation without font data.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMeasure {
    pub advance_em: f32,
}

impl Default for FixedWidthMeasure {
    fn default() -> Self {
        Self { advance_em: 0.5 }
    }
}

impl Measure for FixedWidthMeasure {
    fn text_width(&self, text: &str, _style: FontStyle, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_em * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_scales_with_font_size() {
        let m = FixedWidthMeasure { advance_em: 0.5 };
        assert_eq!(m.text_width("abcd", FontStyle::Regular, 10.0), 20.0);
        assert_eq!(m.text_width("abcd", FontStyle::Italic, 20.0), 40.0);
    }

    #[test]
    fn test_fixed_width_counts_chars_not_bytes() {
        let m = FixedWidthMeasure { advance_em: 1.0 };
        assert_eq!(m.text_width("или", FontStyle::Regular, 10.0), 30.0);
    }
}
