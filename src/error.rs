// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageError),
}

/// Reasons an image could not be turned into something the slider can draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The file extension or content is not a known image format.
    UnsupportedFormat,

    /// The file was recognized but decoding failed.
    DecodingFailed(String),

    /// The decoded image has zero width or height.
    Empty,
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::UnsupportedFormat => "error-load-image-unsupported-format",
            ImageError::DecodingFailed(_) => "error-load-image-decoding-failed",
            ImageError::Empty => "error-load-image-empty",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat => write!(f, "Unsupported image format"),
            ImageError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            ImageError::Empty => write!(f, "Image has no pixels"),
        }
    }
}

impl Error {
    /// Returns the i18n message key shown to the user for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-image-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Image(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            image_rs::ImageError::Unsupported(_) => Error::Image(ImageError::UnsupportedFormat),
            other => Error::Image(ImageError::DecodingFailed(other.to_string())),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn image_error_wraps_into_error() {
        let err: Error = ImageError::Empty.into();
        assert!(matches!(err, Error::Image(ImageError::Empty)));
        assert_eq!(format!("{}", err), "Image Error: Image has no pixels");
    }

    #[test]
    fn unsupported_image_crate_error_maps_to_unsupported_format() {
        let source = image_rs::ImageError::Unsupported(
            image_rs::error::UnsupportedError::from_format_and_kind(
                image_rs::error::ImageFormatHint::Unknown,
                image_rs::error::UnsupportedErrorKind::Format(
                    image_rs::error::ImageFormatHint::Unknown,
                ),
            ),
        );
        let err: Error = source.into();
        assert!(matches!(err, Error::Image(ImageError::UnsupportedFormat)));
    }

    #[test]
    fn i18n_keys_are_distinct_per_failure() {
        assert_eq!(
            ImageError::UnsupportedFormat.i18n_key(),
            "error-load-image-unsupported-format"
        );
        assert_eq!(
            ImageError::DecodingFailed(String::new()).i18n_key(),
            "error-load-image-decoding-failed"
        );
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-load-image-io");
    }
}
