use crate::{
    consts::{BIT_DEPTH, COLOR_TYPE_RGBA, COMPRESSION_METHOD, FILTER_METHOD, INTERLACE_METHOD, MAX_DIMENSION},
    error::PngError,
};

/// The IHDR data of a PNG image.
///
/// Only 8bit RGBA without interlacing is supported so every field apart from width and height is fixed.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PngHeader {
    width: u32,
    height: u32,
}

impl PngHeader {
    /// Generates a [`PngHeader`] for an image of the given size.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the following is true:
    ///
    /// 1: The width or height values are `0`.\
    /// 2: The width or height values are greater than `2^31 - 1`.
    pub const fn new(width: u32, height: u32) -> Result<Self, PngError> {
        if width == 0 || height == 0 {return Err(PngError::InvalidWidthHeight(width, height));}
        if width > MAX_DIMENSION || height > MAX_DIMENSION {return Err(PngError::DimensionsTooLarge(width, height));}
        Ok(Self {width, height})
    }
    /// The width of a PNG image in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }
    /// The height of a PNG image in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
    /// Always `8`.
    #[must_use]
    pub const fn bit_depth(&self) -> u8 {
        BIT_DEPTH
    }
    /// Always `6` (truecolor with alpha).
    #[must_use]
    pub const fn color_type(&self) -> u8 {
        COLOR_TYPE_RGBA
    }
    /// Always `0` (deflate).
    #[must_use]
    pub const fn compression_method(&self) -> u8 {
        COMPRESSION_METHOD
    }
    /// Always `0` (adaptive filtering, with every scanline using filter type None).
    #[must_use]
    pub const fn filter_method(&self) -> u8 {
        FILTER_METHOD
    }
    /// Always `0` (no interlace).
    #[must_use]
    pub const fn interlace_method(&self) -> u8 {
        INTERLACE_METHOD
    }
    /// Convert the header to the 13 byte IHDR chunk payload.
    #[must_use]
    pub const fn to_u8(self) -> [u8; 13] {
        let mut output = [0; 13];
        let width = self.width().to_be_bytes();
        output[0] = width[0];
        output[1] = width[1];
        output[2] = width[2];
        output[3] = width[3];
        let height = self.height().to_be_bytes();
        output[4] = height[0];
        output[5] = height[1];
        output[6] = height[2];
        output[7] = height[3];
        output[8] = self.bit_depth();
        output[9] = self.color_type();
        output[10] = self.compression_method();
        output[11] = self.filter_method();
        output[12] = self.interlace_method();
        output
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::PngError, utils::is_identical};
    use super::PngHeader;
    #[test]
    const fn infallible_to_u8() {
        let header = PngHeader::new(512, 256);
        assert!(header.is_ok());
        if let Ok(header) = header {
            assert!(is_identical(&header.to_u8(), &[0, 0, 2, 0,   // width
                                                    0, 0, 1, 0,   // height
                                                    8,            // bit depth
                                                    6,            // color type
                                                    0,            // compression method
                                                    0,            // filter method
                                                    0])           // interlace method
            );
        }
    }
    #[test]
    const fn good_new() {
        let header = PngHeader::new(1, 4096);
        assert!(header.is_ok());
        if let Ok(header) = header {
            assert!(header.width() == 1);
            assert!(header.height() == 4096);
        }
        assert!(PngHeader::new(2_147_483_647, 2_147_483_647).is_ok());
    }
    #[test]
    const fn bad_width_height() {
        let header = PngHeader::new(0, 7);
        assert!(header.is_err());
        if let Err(PngError::InvalidWidthHeight(width, height)) = header {
            assert!(width == 0);
            assert!(height == 7);
        }
        assert!(PngHeader::new(7, 0).is_err());
    }
    #[test]
    const fn too_large() {
        let header = PngHeader::new(2_147_483_648, 1);
        assert!(header.is_err());
        if let Err(PngError::DimensionsTooLarge(width, height)) = header {
            assert!(width == 2_147_483_648);
            assert!(height == 1);
        }
    }
}
