//! # Starcard - Trading Card Renderer
//!
//! Starcard renders trading-card images from deck manifests: artwork,
//! overlay frames and rule text composited onto fixed-size RGBA cards.
//! It provides:
//!
//! - **Text pipeline**: icon glyph substitution, markup tokenization and
//!   paragraph-scoped emphasis rules
//! - **Layout**: greedy word wrap with a height estimate the renderer
//!   agrees with exactly
//! - **Fitting**: adaptive shrink-to-fit of font size, interline and
//!   margin against each card's box budget
//! - **Fleet rendering**: one task per card with per-card fault isolation
//!
//! ## Quick Start
//!
//! ```
//! use starcard::text::emphasis::{stylize, EmphasisPolicy};
//! use starcard::text::glyphs::substitute;
//! use starcard::text::layout::layout;
//! use starcard::text::measure::FixedWidthMeasure;
//! use starcard::text::tokenize::tokenize;
//!
//! // Icon codes become body-font glyphs before tokenization.
//! let text = substitute("Атака [B]: +1 к броску");
//! assert_eq!(text, "Атака }: +1 к броску");
//!
//! // Tokenize, apply emphasis, wrap to a width.
//! let items = stylize(&tokenize(&text), &EmphasisPolicy::PreColon);
//! let laid = layout(&items, 200.0, 16.0, &FixedWidthMeasure::default());
//!
//! // The pre-colon span renders italic.
//! assert!(laid.lines[0].segments[0].italic);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`text`] | Substitution, tokenization, emphasis, layout, fitting |
//! | [`geometry`] | Card dimensions and per-type anchors |
//! | [`fonts`] | Font faces and width measurement |
//! | [`render`] | Canvas primitives and card painters |
//! | [`assets`] | Artwork and overlay loading |
//! | [`manifest`] | Deck manifests (`file_names.json`, `text.json`) |
//! | [`gallery`] | Concurrent fleet rendering |
//! | [`error`] | Error types |

pub mod assets;
pub mod error;
pub mod fonts;
pub mod gallery;
pub mod geometry;
pub mod manifest;
pub mod render;
pub mod text;

pub use error::CardError;
