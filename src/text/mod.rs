//! Text pipeline: glyph substitution, tokenization, emphasis, layout and
//! shrink-to-fit.

pub mod emphasis;
pub mod fit;
pub mod glyphs;
pub mod layout;
pub mod measure;
pub mod tokenize;
