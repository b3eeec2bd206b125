//! # Error Types
//!
//! This module defines error types used throughout the starcard library.

use thiserror::Error;

/// Main error type for card rendering operations.
///
/// Every failure is scoped to a single card's draw; the gallery keeps
/// rendering the remaining cards and reports outcomes per card.
#[derive(Debug, Error)]
pub enum CardError {
    /// Artwork or overlay image could not be read or decoded
    #[error("Asset load failure for {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    /// A text manifest could not be parsed at all
    #[error("Malformed text record: {0}")]
    MalformedText(String),

    /// The shrink loop hit its bound before the text fit its box
    #[error("Text fitting diverged after {steps} steps (font size {font_size:.2}px)")]
    FittingDivergence { steps: u32, font_size: f32 },

    /// Font data could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// A card draw task panicked or was cancelled
    #[error("Draw task failed: {0}")]
    Task(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
