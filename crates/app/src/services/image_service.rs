//! Image service — serving webcam JPEGs at full or half resolution.

use std::path::PathBuf;

use homewatch_domain::image::{ImageSize, validate_image_name};

use crate::ports::{FileSystem, ImageRenderer};

pub struct ImageService<F, R> {
    fs: F,
    renderer: R,
    dir: PathBuf,
}

impl<F: FileSystem, R: ImageRenderer> ImageService<F, R> {
    /// Create a service serving images from `dir` only.
    pub fn new(fs: F, renderer: R, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            renderer,
            dir: dir.into(),
        }
    }

    /// Render `name` at `size`.
    ///
    /// Fails closed: an unsafe name, a missing file or an undecodable image
    /// all return `None` without telling which.
    #[tracing::instrument(skip(self))]
    pub async fn render(&self, name: &str, size: ImageSize) -> Option<Vec<u8>> {
        let name = match validate_image_name(name) {
            Ok(name) => name,
            Err(err) => {
                tracing::debug!(%err, "rejected image name");
                return None;
            }
        };
        let bytes = match self.fs.read_bytes(&self.dir.join(name)).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(error = ?err, "image unreadable");
                return None;
            }
        };
        match self.renderer.render(bytes, size).await {
            Ok(jpeg) => Some(jpeg),
            Err(err) => {
                tracing::debug!(error = ?err, "image not decodable");
                None
            }
        }
    }
}
