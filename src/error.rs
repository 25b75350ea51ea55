use thiserror::Error;

/// Whether a [`PngError`] was caused by bad input or by the encoding itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PngErrorKind {
    /// The input was rejected before anything was encoded.
    Validation,
    /// The input was valid but could not be turned into a PNG.
    Encoding,
}

/// The possible errors when encoding PNG files.
#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum PngError {
    /// The width or height is `0`. Shows the encountered values.
    #[error("Width or height cannot be 0: detected {0} width and {1} height")]
    InvalidWidthHeight(u32, u32),
    /// The width or height exceeds `2^31 - 1`. Shows the encountered values.
    #[error("Width and height cannot exceed 2147483647: detected {0} width and {1} height")]
    DimensionsTooLarge(u32, u32),
    /// The specified width and height do not match the pixel data. Shows specified width and height and actual pixel amount.
    #[error("Specified {0} width and {1} height but input contains {2} pixels")]
    InputHeaderMismatch(u32, u32, usize),
    /// The input data is not divisible into `4` byte pixels. Shows total size of input data in bytes.
    #[error("Malformed input: input data of {0} bytes detected which cannot represent 4 byte pixels")]
    IncorrectInputData(usize),
    /// The compression level is not in `0..=10`. Shows the encountered value.
    #[error("Invalid compression level: {0}, expected 0 to 10")]
    InvalidCompressionLevel(u8),
    /// A color string was not `rrggbb` or `rrggbbaa` hex.
    #[error("Invalid color, expected hex in the form #rrggbb or #rrggbbaa")]
    InvalidColor,
    /// The uncompressed pixel plane does not fit in memory. Shows width and height.
    #[error("Pixel data for {0} width and {1} height exceeds addressable memory")]
    PixelPlaneOverflow(u32, u32),
    /// A chunk payload is longer than its 32bit length field allows. Shows payload size in bytes.
    #[error("Chunk payload of {0} bytes exceeds the 32bit length field")]
    ChunkTooLarge(usize),
}

impl PngError {
    #[must_use]
    pub const fn kind(&self) -> PngErrorKind {
        match self {
            Self::PixelPlaneOverflow(..) | Self::ChunkTooLarge(_) => PngErrorKind::Encoding,
            _ => PngErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PngError, PngErrorKind};
    #[test]
    const fn infallible_kind() {
        assert!(matches!(PngError::InvalidWidthHeight(0, 1).kind(), PngErrorKind::Validation));
        assert!(matches!(PngError::InvalidCompressionLevel(11).kind(), PngErrorKind::Validation));
        assert!(matches!(PngError::PixelPlaneOverflow(1, 1).kind(), PngErrorKind::Encoding));
        assert!(matches!(PngError::ChunkTooLarge(0).kind(), PngErrorKind::Encoding));
    }
    #[test]
    fn display() {
        use alloc::string::ToString;
        assert_eq!(
            PngError::InvalidWidthHeight(0, 4).to_string(),
            "Width or height cannot be 0: detected 0 width and 4 height"
        );
    }
}
