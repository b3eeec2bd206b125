//! Concurrent card fleet.
//!
//! Renders a whole card list in parallel with per-card fault isolation:
//! one bad card yields a failed outcome at its index while every other
//! card still renders. Outcomes come back in request order.

use async_trait::async_trait;
use image::RgbaImage;
use log::warn;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::assets::{BACKGROUND_OVERLAY, BOTTOM_BAR, FOREGROUND_OVERLAY, ImageLoader};
use crate::error::CardError;
use crate::fonts::FontSet;
use crate::geometry::CardDims;
use crate::manifest::{CardKind, CardTextRecord};
use crate::render::card::{CombatOverlays, draw_combat_card, draw_event_card, draw_order_card};
use crate::text::emphasis::EmphasisPolicy;

/// One card to render: its artwork path and text.
#[derive(Debug, Clone)]
pub struct CardRequest {
    pub artwork_path: String,
    pub text: CardTextRecord,
}

/// The result of one card, tagged with its request index.
pub struct CardOutcome {
    pub index: usize,
    pub result: Result<RgbaImage, CardError>,
}

/// Renders one card of a given kind.
#[async_trait]
pub trait CardPainter: Send + Sync + 'static {
    async fn paint(&self, kind: CardKind, request: &CardRequest) -> Result<RgbaImage, CardError>;
}

/// The production painter: loads assets through an [`ImageLoader`] and
/// draws onto an RGBA canvas. Combat overlay frames are fetched once and
/// shared across the fleet.
pub struct CanvasPainter {
    loader: Arc<dyn ImageLoader>,
    fonts: Arc<FontSet>,
    dims: CardDims,
    policy: EmphasisPolicy,
    overlays: OnceCell<Arc<CombatOverlays>>,
}

impl CanvasPainter {
    pub fn new(
        loader: Arc<dyn ImageLoader>,
        fonts: Arc<FontSet>,
        dims: CardDims,
        policy: EmphasisPolicy,
    ) -> Self {
        Self {
            loader,
            fonts,
            dims,
            policy,
            overlays: OnceCell::new(),
        }
    }

    async fn overlays(&self) -> Result<Arc<CombatOverlays>, CardError> {
        self.overlays
            .get_or_try_init(|| async {
                let (background, foreground, bottom_bar) = tokio::try_join!(
                    self.loader.load(BACKGROUND_OVERLAY),
                    self.loader.load(FOREGROUND_OVERLAY),
                    self.loader.load(BOTTOM_BAR),
                )?;
                Ok(Arc::new(CombatOverlays {
                    background,
                    foreground,
                    bottom_bar,
                }))
            })
            .await
            .map(Arc::clone)
    }
}

#[async_trait]
impl CardPainter for CanvasPainter {
    async fn paint(&self, kind: CardKind, request: &CardRequest) -> Result<RgbaImage, CardError> {
        let artwork = self.loader.load(&request.artwork_path).await?;
        let text = &request.text;
        match kind {
            CardKind::Combat => {
                let overlays = self.overlays().await?;
                draw_combat_card(
                    &artwork,
                    &overlays,
                    &text.title,
                    &text.general,
                    &text.unit,
                    self.dims,
                    &self.fonts,
                    &self.policy,
                )
            }
            CardKind::Orders => {
                draw_order_card(&artwork, &text.title, &text.general, self.dims, &self.fonts)
            }
            CardKind::Events => draw_event_card(
                &artwork,
                &text.title,
                &text.general,
                &text.kind_line,
                self.dims,
                &self.fonts,
            ),
        }
    }
}

/// Render every request concurrently, one task per card.
///
/// A panicked or failed card becomes an `Err` outcome at its own index;
/// the rest of the fleet is unaffected.
pub async fn render_all(
    painter: Arc<dyn CardPainter>,
    kind: CardKind,
    requests: Vec<CardRequest>,
) -> Vec<CardOutcome> {
    let handles: Vec<_> = requests
        .into_iter()
        .enumerate()
        .map(|(index, request)| {
            let painter = Arc::clone(&painter);
            tokio::spawn(async move { painter.paint(kind, &request).await })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        let result = match handle.await {
            Ok(result) => result,
            Err(join) => {
                warn!("card {index} task aborted: {join}");
                Err(CardError::Task(join.to_string()))
            }
        };
        outcomes.push(CardOutcome { index, result });
    }
    outcomes
}
