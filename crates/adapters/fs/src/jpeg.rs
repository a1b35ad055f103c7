//! JPEG renderer backed by the `image` crate.

use std::future::Future;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use homewatch_app::ports::ImageRenderer;
use homewatch_domain::error::HomewatchError;
use homewatch_domain::image::ImageSize;

use crate::error::FsError;

/// Quality used when re-encoding.
pub const DEFAULT_QUALITY: u8 = 100;

/// Decodes and re-encodes JPEGs on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct JpegRenderer {
    quality: u8,
}

impl Default for JpegRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY)
    }
}

impl JpegRenderer {
    /// Create a renderer encoding at `quality` (clamped to 1..=100).
    #[must_use]
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

impl ImageRenderer for JpegRenderer {
    fn render(
        &self,
        jpeg: Vec<u8>,
        size: ImageSize,
    ) -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send {
        let quality = self.quality;
        async move {
            let encoded =
                tokio::task::spawn_blocking(move || encode(&jpeg, size, quality))
                    .await
                    .map_err(FsError::from)??;
            Ok(encoded)
        }
    }
}

fn encode(jpeg: &[u8], size: ImageSize, quality: u8) -> Result<Vec<u8>, FsError> {
    let decoded = image::load_from_memory_with_format(jpeg, ImageFormat::Jpeg)?;
    let (width, height) = size.dimensions(decoded.width(), decoded.height());
    let resized: DynamicImage = match size {
        ImageSize::Full => decoded,
        ImageSize::Half => decoded.resize_exact(width, height, FilterType::Triangle),
    };

    let mut out = Vec::new();
    resized.write_with_encoder(JpegEncoder::new_with_quality(&mut out, quality))?;
    Ok(out)
}
