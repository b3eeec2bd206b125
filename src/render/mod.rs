//! Raster output: the RGBA canvas and the per-card-type painters.

pub mod canvas;
pub mod card;
