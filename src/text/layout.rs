//! Line layout and height estimation.
//!
//! Greedy wrap over the styled item stream: words accumulate onto the
//! current line while they fit, the overflowing word opens the next line,
//! and a single word is never split. The height estimate walks the
//! committed lines themselves, so the fit controller converges on exactly
//! the lines the renderer paints.

use super::emphasis::Item;
use super::measure::{FontStyle, Measure};

/// A run of words sharing one style, painted left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    pub text: String,
    pub italic: bool,
}

impl StyledSegment {
    pub fn style(&self) -> FontStyle {
        FontStyle::for_italic(self.italic)
    }
}

/// What ended a line, which decides the gap below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// Greedy wrap: the next word did not fit.
    Wrapped,
    /// Explicit `*newline*`.
    Forced,
    /// Explicit `*newpara*`: a full blank line follows.
    Paragraph,
    /// Last committed line of the block.
    Final,
}

/// One wrapped line: styled segments plus its measured width.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub segments: Vec<StyledSegment>,
    pub width: f32,
    pub end: LineEnd,
}

/// The fully wrapped block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<Line>,
}

impl TextLayout {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Painted height of the block.
    ///
    /// Each line contributes its line height plus the gap its ending
    /// dictates; the final line carries one extra line height of bottom
    /// padding. Paragraph gaps are a full blank line with no interline.
    pub fn block_height(&self, font_size: f32, interline: f32) -> f32 {
        let line_height = font_size.floor();
        self.lines
            .iter()
            .map(|line| match line.end {
                LineEnd::Wrapped | LineEnd::Forced => line_height + interline,
                LineEnd::Paragraph | LineEnd::Final => 2.0 * line_height,
            })
            .sum()
    }
}

/// Greedy-wrap the item stream into styled lines.
///
/// Glue semantics: a glued word (the colon) attaches to the previous word
/// with no space and always forms its own segment; the word after it gets
/// a leading space unless it starts a line. Adjacent same-style words
/// merge into one segment. A final (possibly empty) line is always
/// committed so trailing breaks keep their vertical space.
pub fn layout(
    items: &[Item],
    max_width: f32,
    font_size: f32,
    measure: &dyn Measure,
) -> TextLayout {
    let mut lines = Vec::new();
    let mut segments: Vec<StyledSegment> = Vec::new();
    let mut width = 0.0f32;
    // A freshly pushed glued segment must stay standalone.
    let mut last_glued = false;

    for item in items {
        match item {
            Item::LineBreak => {
                commit(&mut lines, &mut segments, &mut width, LineEnd::Forced);
                last_glued = false;
            }
            Item::ParagraphBreak => {
                commit(&mut lines, &mut segments, &mut width, LineEnd::Paragraph);
                last_glued = false;
            }
            Item::Word { text, italic, glue } => {
                let style = FontStyle::for_italic(*italic);
                let spaced = if segments.is_empty() || *glue {
                    text.clone()
                } else {
                    format!(" {text}")
                };
                let advance = measure.text_width(&spaced, style, font_size);

                if width + advance > max_width && !segments.is_empty() {
                    commit(&mut lines, &mut segments, &mut width, LineEnd::Wrapped);
                    width = measure.text_width(text, style, font_size);
                    push_segment(&mut segments, text.clone(), *italic, false);
                } else {
                    push_segment(&mut segments, spaced, *italic, last_glued || *glue);
                    width += advance;
                }
                last_glued = *glue;
            }
        }
    }
    commit(&mut lines, &mut segments, &mut width, LineEnd::Final);
    TextLayout { lines }
}

fn commit(lines: &mut Vec<Line>, segments: &mut Vec<StyledSegment>, width: &mut f32, end: LineEnd) {
    lines.push(Line {
        segments: std::mem::take(segments),
        width: *width,
        end,
    });
    *width = 0.0;
}

fn push_segment(segments: &mut Vec<StyledSegment>, text: String, italic: bool, standalone: bool) {
    if !standalone {
        if let Some(last) = segments.last_mut() {
            if last.italic == italic {
                last.text.push_str(&text);
                return;
            }
        }
    }
    segments.push(StyledSegment { text, italic });
}
