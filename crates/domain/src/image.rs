//! Webcam image requests — file name guard and output size selection.

use crate::error::ValidationError;

/// Referer fragment identifying the low-resolution webcam page.
const LOW_RES_MARKER: &str = "/l/";

/// Output resolution of a served image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// The original JPEG.
    Full,
    /// Resampled to 50% of both dimensions.
    Half,
}

impl ImageSize {
    /// Pick the size from the page that requested the image.
    #[must_use]
    pub fn from_referer(referer: Option<&str>) -> Self {
        match referer {
            Some(r) if r.contains(LOW_RES_MARKER) => Self::Half,
            _ => Self::Full,
        }
    }

    /// Scale `(width, height)` for this size. Dimensions never drop to zero.
    #[must_use]
    pub fn dimensions(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Self::Full => (width, height),
            Self::Half => ((width / 2).max(1), (height / 2).max(1)),
        }
    }
}

/// Accept only a bare file name: no separators, no parent references.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyImageName`] or
/// [`ValidationError::UnsafeImageName`].
pub fn validate_image_name(name: &str) -> Result<&str, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyImageName);
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ValidationError::UnsafeImageName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_bare_file_name() {
        assert_eq!(validate_image_name("webcam.jpg"), Ok("webcam.jpg"));
    }

    #[test]
    fn should_reject_parent_traversal() {
        assert_eq!(
            validate_image_name("../../etc/passwd"),
            Err(ValidationError::UnsafeImageName)
        );
        assert_eq!(
            validate_image_name("..passwd"),
            Err(ValidationError::UnsafeImageName)
        );
    }

    #[test]
    fn should_reject_path_separators() {
        assert_eq!(
            validate_image_name("a/b.jpg"),
            Err(ValidationError::UnsafeImageName)
        );
        assert_eq!(
            validate_image_name("a\\b.jpg"),
            Err(ValidationError::UnsafeImageName)
        );
    }

    #[test]
    fn should_reject_empty_name() {
        assert_eq!(validate_image_name(""), Err(ValidationError::EmptyImageName));
    }

    #[test]
    fn should_pick_half_size_for_low_res_referer() {
        assert_eq!(
            ImageSize::from_referer(Some("http://cam.local/webcam/l/webcam.html")),
            ImageSize::Half
        );
        assert_eq!(
            ImageSize::from_referer(Some("http://cam.local/webcam/h/webcam.html")),
            ImageSize::Full
        );
        assert_eq!(ImageSize::from_referer(None), ImageSize::Full);
    }

    #[test]
    fn should_halve_dimensions() {
        assert_eq!(ImageSize::Half.dimensions(1920, 1080), (960, 540));
        assert_eq!(ImageSize::Half.dimensions(1, 1), (1, 1));
        assert_eq!(ImageSize::Full.dimensions(640, 480), (640, 480));
    }
}
