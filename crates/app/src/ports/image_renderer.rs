//! Image renderer port — JPEG decoding and re-encoding.

use std::future::Future;

use homewatch_domain::error::HomewatchError;
use homewatch_domain::image::ImageSize;

/// Re-encodes a JPEG at the requested size.
pub trait ImageRenderer: Send + Sync {
    /// Decode `jpeg` and encode it again at `size`.
    fn render(
        &self,
        jpeg: Vec<u8>,
        size: ImageSize,
    ) -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send;
}
