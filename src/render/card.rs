//! Card painters.
//!
//! One parameterized text-block painter plus thin per-card-type wrappers
//! supplying geometry, alignment and overlay frames. All vertical anchors
//! of the combat text boxes are outputs of the fitting step.

use image::{Rgba, RgbaImage};

use crate::error::CardError;
use crate::fonts::{FontSet, advance_width};
use crate::geometry::{
    BOTTOM_BAR_SOURCE, CardDims, CombatGeometry, EventsGeometry, OVERLAY_SOURCE_WIDTH,
    OrdersGeometry,
};
use crate::render::canvas::Canvas;
use crate::text::emphasis::{EmphasisPolicy, Item, plain, stylize};
use crate::text::fit::{Combine, FitField, FitState, shrink_to_fit};
use crate::text::glyphs::substitute;
use crate::text::layout::{LineEnd, TextLayout};
use crate::text::measure::Measure;
use crate::text::tokenize::tokenize;

/// Ink color for all card text.
const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Horizontal alignment of painted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Lines start at the anchor x.
    Left,
    /// Lines are centered on the anchor x.
    Center,
}

/// Shared overlay frames for combat cards.
pub struct CombatOverlays {
    pub background: RgbaImage,
    pub foreground: RgbaImage,
    pub bottom_bar: RgbaImage,
}

/// Paint a combat card: artwork, title, up to two fitted text fields with
/// their cropped frames, and the bottom bar.
pub fn draw_combat_card(
    artwork: &RgbaImage,
    overlays: &CombatOverlays,
    title: &str,
    background_text: &str,
    foreground_text: &str,
    dims: CardDims,
    fonts: &FontSet,
    policy: &EmphasisPolicy,
) -> Result<RgbaImage, CardError> {
    let geo = CombatGeometry::new(dims);
    let bg_items = styled_items(background_text, policy);
    let fg_items = styled_items(foreground_text, policy);

    let wrap_width = dims.max_text_width();
    let fields = [
        FitField {
            items: &bg_items,
            extra_padding: geo.background_border,
            max_width: wrap_width,
        },
        FitField {
            items: &fg_items,
            extra_padding: geo.foreground_triangle,
            max_width: wrap_width,
        },
    ];
    let combine = if !bg_items.is_empty() && !fg_items.is_empty() {
        Combine::Stacked
    } else {
        Combine::Tallest
    };
    let fit = shrink_to_fit(
        &fields,
        combine,
        geo.max_fields_height,
        geo.initial_fit(),
        geo.factors(),
        fonts,
    )?;

    let mut canvas = base_canvas(artwork, dims);
    canvas.draw_text_run(
        &fonts.title,
        title,
        dims.title_font_size(),
        geo.title_anchor.0,
        geo.title_anchor.1,
        TEXT_COLOR,
        false,
    );

    let (bg_height, fg_height) = (fit.heights[0], fit.heights[1]);
    if !bg_items.is_empty() {
        let top = dims.height - (bg_height + fg_height);
        paint_overlay_frame(&mut canvas, &overlays.background, dims, top);
        paint_text_block(
            &mut canvas,
            &fit.layouts[0],
            dims.margin_width(),
            top + fit.state.margin + geo.background_border,
            Align::Left,
            fonts,
            &fit.state,
        );
    }
    if !fg_items.is_empty() {
        let top = dims.height - (fg_height + geo.foreground_triangle * 0.35);
        paint_overlay_frame(&mut canvas, &overlays.foreground, dims, top);
        paint_text_block(
            &mut canvas,
            &fit.layouts[1],
            dims.margin_width(),
            top + fit.state.margin + geo.foreground_triangle,
            Align::Left,
            fonts,
            &fit.state,
        );
    }

    let bar_height = geo.bottom_bar_height.round() as u32;
    canvas.draw_image_region(
        &overlays.bottom_bar,
        BOTTOM_BAR_SOURCE.0,
        BOTTOM_BAR_SOURCE.1,
        0,
        (dims.height - geo.bottom_bar_height).round() as i64,
        dims.px_width(),
        bar_height,
    );
    Ok(canvas.into_image())
}

/// Paint an orders card: artwork, centered title, centered fitted body.
pub fn draw_order_card(
    artwork: &RgbaImage,
    title: &str,
    general_text: &str,
    dims: CardDims,
    fonts: &FontSet,
) -> Result<RgbaImage, CardError> {
    let geo = OrdersGeometry::new(dims);
    let items = plain_items(general_text);
    let fields = [FitField {
        items: &items,
        extra_padding: 0.0,
        max_width: geo.wrap_width(),
    }];
    let fit = shrink_to_fit(
        &fields,
        Combine::Tallest,
        geo.max_fields_height,
        geo.initial_fit(),
        geo.factors(),
        fonts,
    )?;

    let mut canvas = base_canvas(artwork, dims);
    draw_centered_run(
        &mut canvas,
        fonts,
        title,
        dims.title_font_size(),
        geo.title_anchor,
    );
    paint_text_block(
        &mut canvas,
        &fit.layouts[0],
        dims.width * 0.5,
        geo.text_top,
        Align::Center,
        fonts,
        &fit.state,
    );
    Ok(canvas.into_image())
}

/// Paint an events card: artwork, type line, title, left-aligned fitted
/// body.
pub fn draw_event_card(
    artwork: &RgbaImage,
    title: &str,
    general_text: &str,
    type_line: &str,
    dims: CardDims,
    fonts: &FontSet,
) -> Result<RgbaImage, CardError> {
    let geo = EventsGeometry::new(dims);
    let items = plain_items(general_text);
    let fields = [FitField {
        items: &items,
        extra_padding: geo.extra_padding,
        max_width: dims.max_text_width(),
    }];
    let fit = shrink_to_fit(
        &fields,
        Combine::Tallest,
        geo.max_fields_height,
        geo.initial_fit(),
        geo.factors(),
        fonts,
    )?;

    let mut canvas = base_canvas(artwork, dims);
    let type_width = advance_width(&fonts.accent, type_line, geo.type_font_size());
    canvas.draw_text_run(
        &fonts.accent,
        type_line,
        geo.type_font_size(),
        geo.type_anchor.0 - type_width / 2.0,
        geo.type_anchor.1,
        TEXT_COLOR,
        false,
    );
    canvas.draw_text_run(
        &fonts.title,
        title,
        dims.title_font_size(),
        geo.title_anchor.0,
        geo.title_anchor.1,
        TEXT_COLOR,
        false,
    );
    paint_text_block(
        &mut canvas,
        &fit.layouts[0],
        dims.margin_width(),
        geo.text_top,
        Align::Left,
        fonts,
        &fit.state,
    );
    Ok(canvas.into_image())
}

/// Substituted, tokenized and emphasized body text for combat fields.
fn styled_items(text: &str, policy: &EmphasisPolicy) -> Vec<Item> {
    stylize(&tokenize(&substitute(text)), policy)
}

/// Substituted, tokenized body text with no emphasis (orders, events).
fn plain_items(text: &str) -> Vec<Item> {
    plain(&tokenize(&substitute(text)))
}

fn base_canvas(artwork: &RgbaImage, dims: CardDims) -> Canvas {
    let mut canvas = Canvas::new(dims.px_width(), dims.px_height());
    canvas.draw_image_scaled(artwork, 0, 0, dims.px_width(), dims.px_height());
    canvas
}

/// Crop-paint an overlay frame so its visible height runs from the text
/// block's top edge to the card bottom. The source crop height matches
/// the destination height, with a fixed top-left crop origin.
fn paint_overlay_frame(canvas: &mut Canvas, frame: &RgbaImage, dims: CardDims, top: f32) {
    let visible = (dims.height - top).max(0.0).round() as u32;
    canvas.draw_image_region(
        frame,
        OVERLAY_SOURCE_WIDTH,
        visible,
        0,
        top.round() as i64,
        dims.px_width(),
        visible,
    );
}

/// Paint the wrapped lines of one text block, advancing the baseline by
/// the same gaps the height estimate charged for each line ending.
fn paint_text_block(
    canvas: &mut Canvas,
    layout: &TextLayout,
    anchor_x: f32,
    top: f32,
    align: Align,
    fonts: &FontSet,
    state: &FitState,
) {
    let line_height = state.font_size.floor();
    let mut baseline = top + line_height;

    for line in &layout.lines {
        let mut caret = match align {
            Align::Left => anchor_x,
            Align::Center => anchor_x - line.width / 2.0,
        };
        for segment in &line.segments {
            let style = segment.style();
            let oblique = segment.italic && fonts.synthetic_italic();
            canvas.draw_text_run(
                fonts.body_face(style),
                &segment.text,
                state.font_size,
                caret,
                baseline,
                TEXT_COLOR,
                oblique,
            );
            caret += fonts.text_width(&segment.text, style, state.font_size);
        }
        baseline += match line.end {
            LineEnd::Wrapped | LineEnd::Forced => line_height + state.interline,
            LineEnd::Paragraph => 2.0 * line_height,
            LineEnd::Final => 0.0,
        };
    }
}

fn draw_centered_run(
    canvas: &mut Canvas,
    fonts: &FontSet,
    text: &str,
    font_size: f32,
    anchor: (f32, f32),
) {
    let width = advance_width(&fonts.title, text, font_size);
    canvas.draw_text_run(
        &fonts.title,
        text,
        font_size,
        anchor.0 - width / 2.0,
        anchor.1,
        TEXT_COLOR,
        false,
    );
}
