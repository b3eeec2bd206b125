//! Adaptive shrink-to-fit.
//!
//! Re-measures the card's text fields at progressively smaller font size,
//! interline and vertical margin until everything fits its box budget.
//! The loop is bounded: past the font-size floor or the step cap it fails
//! with [`CardError::FittingDivergence`] instead of spinning.

use log::debug;

use super::emphasis::Item;
use super::layout::{TextLayout, layout};
use super::measure::Measure;
use crate::error::CardError;

/// Font size below which shrinking gives up; smaller text is illegible.
pub const MIN_FONT_SIZE: f32 = 4.0;
/// Hard cap on shrink iterations.
pub const MAX_SHRINK_STEPS: u32 = 256;

/// Mutable fitting parameters. All three shrink together each step and
/// never increase within one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitState {
    pub font_size: f32,
    pub interline: f32,
    /// Vertical margin above and below the text block.
    pub margin: f32,
}

/// Per-step multiplicative shrink factors.
#[derive(Debug, Clone, Copy)]
pub struct ShrinkFactors {
    pub font_size: f32,
    pub interline: f32,
    pub margin: f32,
}

impl ShrinkFactors {
    /// Combat boxes: gentle font shrink, aggressive margin shrink.
    pub const COMBAT: ShrinkFactors = ShrinkFactors {
        font_size: 0.99,
        interline: 0.95,
        margin: 0.8,
    };

    /// Single-field boxes (orders, events): margin untouched.
    pub const SINGLE_FIELD: ShrinkFactors = ShrinkFactors {
        font_size: 0.95,
        interline: 0.97,
        margin: 1.0,
    };
}

/// One text field competing for the box budget.
pub struct FitField<'a> {
    pub items: &'a [Item],
    /// Card-type specific extra vertical padding (frame border, triangle
    /// cutout, fixed slack).
    pub extra_padding: f32,
    /// Wrap width for this field.
    pub max_width: f32,
}

/// How multiple field heights combine against the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Fields stack vertically: their heights sum.
    Stacked,
    /// Only the tallest field counts.
    Tallest,
}

/// A converged fit: final parameters plus layout and height per field.
#[derive(Debug)]
pub struct FitResult {
    pub state: FitState,
    pub layouts: Vec<TextLayout>,
    pub heights: Vec<f32>,
    pub steps: u32,
}

/// Shrink until every populated field fits `max_height`.
///
/// Empty fields contribute zero height. The returned layouts were
/// produced at the final parameters and are ready to paint.
pub fn shrink_to_fit(
    fields: &[FitField<'_>],
    combine: Combine,
    max_height: f32,
    mut state: FitState,
    factors: ShrinkFactors,
    measure: &dyn Measure,
) -> Result<FitResult, CardError> {
    let mut steps = 0u32;
    loop {
        let layouts: Vec<TextLayout> = fields
            .iter()
            .map(|field| layout(field.items, field.max_width, state.font_size, measure))
            .collect();
        let heights: Vec<f32> = fields
            .iter()
            .zip(&layouts)
            .map(|(field, laid)| {
                if field.items.is_empty() {
                    0.0
                } else {
                    laid.block_height(state.font_size, state.interline)
                        + field.extra_padding
                        + 2.0 * state.margin
                }
            })
            .collect();

        let combined = match combine {
            Combine::Stacked => heights.iter().sum::<f32>(),
            Combine::Tallest => heights.iter().fold(0.0f32, |acc, &h| acc.max(h)),
        };
        if combined <= max_height {
            if steps > 0 {
                debug!(
                    "text fit after {steps} shrink steps (font size {:.2}px)",
                    state.font_size
                );
            }
            return Ok(FitResult {
                state,
                layouts,
                heights,
                steps,
            });
        }

        if steps >= MAX_SHRINK_STEPS || state.font_size * factors.font_size < MIN_FONT_SIZE {
            return Err(CardError::FittingDivergence {
                steps,
                font_size: state.font_size,
            });
        }
        state.font_size *= factors.font_size;
        state.interline *= factors.interline;
        state.margin *= factors.margin;
        steps += 1;
    }
}
