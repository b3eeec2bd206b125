//! Card geometry constants.
//!
//! Everything derives from the 450×650 base card and scales proportionally
//! for alternate print sizes. Anchors are expressed as fractions of the
//! card rectangle; only the events card carries one absolute padding value
//! (scaled with the card).

use crate::text::fit::{FitState, ShrinkFactors};

/// Card pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardDims {
    pub width: f32,
    pub height: f32,
}

impl CardDims {
    /// The reference card size all anchors were tuned against.
    pub const BASE: CardDims = CardDims {
        width: 450.0,
        height: 650.0,
    };

    /// A proportionally scaled card (1.0 = base size).
    pub fn scaled(factor: f32) -> CardDims {
        CardDims {
            width: Self::BASE.width * factor,
            height: Self::BASE.height * factor,
        }
    }

    pub fn scale(&self) -> f32 {
        self.height / Self::BASE.height
    }

    pub fn title_font_size(&self) -> f32 {
        self.height * 0.05
    }

    /// Fixed horizontal margin of body text blocks.
    pub fn margin_width(&self) -> f32 {
        self.width * 0.0578
    }

    pub fn max_text_width(&self) -> f32 {
        self.width - 2.0 * self.margin_width()
    }

    pub fn px_width(&self) -> u32 {
        self.width.round() as u32
    }

    pub fn px_height(&self) -> u32 {
        self.height.round() as u32
    }

    /// Initial body-text fitting parameters shared by all card types
    /// except for the margin, which is card-type specific.
    fn base_fit(&self, margin: f32) -> FitState {
        FitState {
            font_size: self.height * 0.03,
            interline: self.height * 0.0077,
            margin,
        }
    }
}

/// Source width of the two overlay frame images; the visible crop is
/// always taken from their top-left corner.
pub const OVERLAY_SOURCE_WIDTH: u32 = 759;
/// Source size of the bottom bar strip.
pub const BOTTOM_BAR_SOURCE: (u32, u32) = (454, 18);

/// Geometry of the combat card's dual text box.
#[derive(Debug, Clone, Copy)]
pub struct CombatGeometry {
    pub dims: CardDims,
    /// Shared budget for both text fields.
    pub max_fields_height: f32,
    pub bottom_bar_height: f32,
    /// Extra padding for the foreground frame's triangle cutout.
    pub foreground_triangle: f32,
    /// Extra padding for the background frame's border.
    pub background_border: f32,
    pub title_anchor: (f32, f32),
}

impl CombatGeometry {
    pub fn new(dims: CardDims) -> Self {
        Self {
            dims,
            max_fields_height: dims.height * 0.4,
            bottom_bar_height: dims.height * 0.025,
            foreground_triangle: dims.height * 0.0455,
            background_border: dims.height * 0.0385,
            title_anchor: (dims.width * 0.27, dims.height * 0.077),
        }
    }

    pub fn initial_fit(&self) -> FitState {
        self.dims.base_fit(self.dims.width * 0.05)
    }

    pub fn factors(&self) -> ShrinkFactors {
        ShrinkFactors::COMBAT
    }
}

/// Geometry of the orders card's centered text box.
#[derive(Debug, Clone, Copy)]
pub struct OrdersGeometry {
    pub dims: CardDims,
    pub max_fields_height: f32,
    pub text_top: f32,
    /// Wide margin doubling as the field's vertical padding.
    pub margin: f32,
    pub title_anchor: (f32, f32),
}

impl OrdersGeometry {
    pub fn new(dims: CardDims) -> Self {
        Self {
            dims,
            max_fields_height: dims.height * 0.455,
            text_top: dims.height * 0.54,
            margin: dims.height * 0.1,
            title_anchor: (dims.width * 0.5, dims.height * 0.2325),
        }
    }

    pub fn wrap_width(&self) -> f32 {
        self.dims.width - 2.0 * self.margin
    }

    pub fn initial_fit(&self) -> FitState {
        self.dims.base_fit(self.margin)
    }

    pub fn factors(&self) -> ShrinkFactors {
        ShrinkFactors::SINGLE_FIELD
    }
}

/// Geometry of the events card's text box and type line.
#[derive(Debug, Clone, Copy)]
pub struct EventsGeometry {
    pub dims: CardDims,
    pub max_fields_height: f32,
    pub text_top: f32,
    /// Fixed slack below the text block (20px at base size).
    pub extra_padding: f32,
    pub type_anchor: (f32, f32),
    pub title_anchor: (f32, f32),
}

impl EventsGeometry {
    pub fn new(dims: CardDims) -> Self {
        Self {
            dims,
            max_fields_height: dims.height * 0.278,
            text_top: dims.height * 0.685,
            extra_padding: 20.0 * dims.scale(),
            type_anchor: (dims.width * 0.5, dims.height * 0.573),
            title_anchor: (dims.width * 0.05, dims.height * 0.0735),
        }
    }

    pub fn type_font_size(&self) -> f32 {
        self.dims.title_font_size() * 0.8
    }

    pub fn initial_fit(&self) -> FitState {
        self.dims.base_fit(0.0)
    }

    pub fn factors(&self) -> ShrinkFactors {
        ShrinkFactors::SINGLE_FIELD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dims() {
        let dims = CardDims::BASE;
        assert_eq!(dims.px_width(), 450);
        assert_eq!(dims.px_height(), 650);
        assert_eq!(dims.title_font_size(), 32.5);
        assert!((dims.margin_width() - 26.01).abs() < 0.001);
    }

    #[test]
    fn test_scaled_dims_keep_proportions() {
        let dims = CardDims::scaled(2.0);
        assert_eq!(dims.px_width(), 900);
        assert_eq!(dims.px_height(), 1300);
        assert_eq!(dims.scale(), 2.0);
        assert_eq!(dims.title_font_size(), 65.0);
    }

    #[test]
    fn test_combat_geometry() {
        let geo = CombatGeometry::new(CardDims::BASE);
        assert_eq!(geo.max_fields_height, 260.0);
        assert!((geo.bottom_bar_height - 16.25).abs() < 0.001);
        let fit = geo.initial_fit();
        assert_eq!(fit.font_size, 19.5);
        assert!((fit.interline - 5.005).abs() < 0.001);
        assert_eq!(fit.margin, 22.5);
    }

    #[test]
    fn test_orders_geometry() {
        let geo = OrdersGeometry::new(CardDims::BASE);
        assert!((geo.max_fields_height - 295.75).abs() < 0.001);
        assert_eq!(geo.margin, 65.0);
        assert_eq!(geo.wrap_width(), 320.0);
    }

    #[test]
    fn test_events_geometry_scales_fixed_padding() {
        let geo = EventsGeometry::new(CardDims::scaled(2.0));
        assert_eq!(geo.extra_padding, 40.0);
        assert_eq!(geo.type_font_size(), 52.0);
    }
}
