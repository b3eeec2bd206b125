//! Asset loading.
//!
//! Artwork and overlay frames come from an asset directory; loading is a
//! capability trait so the gallery can run against stubbed images in
//! tests.

use async_trait::async_trait;
use image::RgbaImage;
use std::path::{Path, PathBuf};

use crate::error::CardError;

/// Overlay frame for the combat background text box.
pub const BACKGROUND_OVERLAY: &str = "pictures/background.png";
/// Overlay frame for the combat foreground text box.
pub const FOREGROUND_OVERLAY: &str = "pictures/foreground.png";
/// Bottom bar strip of combat cards.
pub const BOTTOM_BAR: &str = "pictures/bottom.png";

/// Loads decoded RGBA images by asset-relative path.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, path: &str) -> Result<RgbaImage, CardError>;
}

/// Loads assets from a directory on disk.
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl ImageLoader for FsImageLoader {
    async fn load(&self, path: &str) -> Result<RgbaImage, CardError> {
        let full = self.root.join(path);
        let bytes = tokio::fs::read(&full)
            .await
            .map_err(|err| CardError::AssetLoad {
                path: path.to_string(),
                reason: err.to_string(),
            })?;
        let img = image::load_from_memory(&bytes).map_err(|err| CardError::AssetLoad {
            path: path.to_string(),
            reason: err.to_string(),
        })?;
        Ok(img.to_rgba8())
    }
}
