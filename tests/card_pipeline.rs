//! # Pipeline Tests
//!
//! End-to-end checks of the manifest-to-fit pipeline and the concurrent
//! fleet, with width measurement and painting stubbed so no font or
//! artwork binaries are needed.

use async_trait::async_trait;
use image::RgbaImage;
use std::sync::Arc;

use starcard::CardError;
use starcard::gallery::{CardPainter, CardRequest, render_all};
use starcard::geometry::{CardDims, CombatGeometry};
use starcard::manifest::{CardKind, CardTextRecord, FactionText, FileManifest, artwork_path};
use starcard::text::emphasis::{EmphasisPolicy, stylize};
use starcard::text::fit::{Combine, FitField, shrink_to_fit};
use starcard::text::glyphs::substitute;
use starcard::text::measure::FixedWidthMeasure;
use starcard::text::tokenize::tokenize;

const MANIFEST: &str = r#"{
    "expansion": { "folder": ["core"], "name": ["Основной набор"] },
    "faction": { "core": { "folder": ["orks"], "name": ["Орки"] } },
    "cards": { "Combat": ["c1.png", "c2.png"] }
}"#;

const TEXT: &str = r#"{
    "combatText": [
        { "title": "Залп", "general": "Атака [B]: +1 к броску", "unit": "Титан: залп дважды" },
        { "title": "Щит", "general": "Защита (S): отменить попадание", "unit": "" }
    ]
}"#;

#[test]
fn test_manifest_to_fit_pipeline() {
    let manifest = FileManifest::parse(MANIFEST).unwrap();
    let texts = FactionText::parse(TEXT).unwrap();
    let records = texts.records(CardKind::Combat);
    let files = manifest.card_files(CardKind::Combat);
    assert_eq!(files.len(), records.len());

    let dims = CardDims::BASE;
    let geo = CombatGeometry::new(dims);
    let measure = FixedWidthMeasure { advance_em: 0.5 };

    for record in &records {
        let bg = stylize(
            &tokenize(&substitute(&record.general)),
            &EmphasisPolicy::PreColon,
        );
        let fg = stylize(
            &tokenize(&substitute(&record.unit)),
            &EmphasisPolicy::PreColon,
        );
        let fields = [
            FitField {
                items: &bg,
                extra_padding: geo.background_border,
                max_width: dims.max_text_width(),
            },
            FitField {
                items: &fg,
                extra_padding: geo.foreground_triangle,
                max_width: dims.max_text_width(),
            },
        ];
        let combine = if !bg.is_empty() && !fg.is_empty() {
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
            &measure,
        )
        .unwrap();

        let total: f32 = fit.heights.iter().sum();
        assert!(total <= geo.max_fields_height);
        assert_eq!(fit.layouts.len(), 2);
    }

    // The second card has no unit text, so its foreground field is empty.
    let fg = stylize(
        &tokenize(&substitute(&records[1].unit)),
        &EmphasisPolicy::PreColon,
    );
    assert!(fg.is_empty());
}

#[test]
fn test_icon_codes_survive_into_layout_words() {
    let text = substitute("Атака [B] (S): +1");
    assert_eq!(text, "Атака } @: +1");
    let items = stylize(&tokenize(&text), &EmphasisPolicy::PreColon);
    // Everything before the colon is italic, including the icon glyphs.
    let pre_colon_italic = items.iter().take(3).all(|item| {
        matches!(item, starcard::text::emphasis::Item::Word { italic, .. } if *italic)
    });
    assert!(pre_colon_italic);
}

struct CountingPainter;

#[async_trait]
impl CardPainter for CountingPainter {
    async fn paint(&self, kind: CardKind, request: &CardRequest) -> Result<RgbaImage, CardError> {
        if request.text.title.is_empty() {
            return Err(CardError::MalformedText(format!(
                "{}: empty title",
                request.artwork_path
            )));
        }
        let _ = kind;
        Ok(RgbaImage::new(2, 2))
    }
}

#[tokio::test]
async fn test_fleet_renders_manifest_cards_with_fault_isolation() {
    let manifest = FileManifest::parse(MANIFEST).unwrap();
    let texts = FactionText::parse(TEXT).unwrap();

    let mut requests: Vec<CardRequest> = manifest
        .card_files(CardKind::Combat)
        .iter()
        .zip(texts.records(CardKind::Combat))
        .map(|(file, text)| CardRequest {
            artwork_path: artwork_path("core", "orks", CardKind::Combat, file),
            text,
        })
        .collect();
    // A third card with broken text joins the fleet.
    requests.push(CardRequest {
        artwork_path: artwork_path("core", "orks", CardKind::Combat, "c3.png"),
        text: CardTextRecord::default(),
    });

    let outcomes = render_all(Arc::new(CountingPainter), CardKind::Combat, requests).await;
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_ok());
    assert!(matches!(
        outcomes[2].result,
        Err(CardError::MalformedText(_))
    ));
    assert_eq!(
        outcomes.iter().map(|o| o.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}
