use alloc::{vec, vec::Vec};

use crate::{error::PngError, header::PngHeader, pixel::Pixel};

/// An in-memory RGBA image, row major, top to bottom.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    header: PngHeader,
    pixels: Vec<Pixel>,
}

impl Image {
    /// An image where every pixel is `pixel`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the width or height values are `0` or greater than `2^31 - 1`,
    /// or if the pixel amount does not fit in memory.
    pub fn solid(width: u32, height: u32, pixel: Pixel) -> Result<Self, PngError> {
        let header = PngHeader::new(width, height)?;
        let amount = pixel_amount(width, height)?;
        Ok(Self {header, pixels: vec![pixel; amount]})
    }
    /// An image from pixels in row major order.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the following is true:
    ///
    /// 1: The width or height values are `0` or greater than `2^31 - 1`.\
    /// 2: The specified width and height calculate to a different amount of pixels than provided.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, PngError> {
        let header = PngHeader::new(width, height)?;
        let amount = pixel_amount(width, height)?;
        if pixels.len() != amount {return Err(PngError::InputHeaderMismatch(width, height, pixels.len()));}
        Ok(Self {header, pixels})
    }
    /// An image from `4` byte (RGBA) pixel data in row major order.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the following is true:
    ///
    /// 1: The amount of bytes in input are not divisible by `4`.\
    /// 2: Any of the conditions of [`Image::from_pixels`].
    pub fn from_rgba(width: u32, height: u32, input: &[u8]) -> Result<Self, PngError> {
        if input.len() % 4 != 0 {return Err(PngError::IncorrectInputData(input.len()));}
        let pixels = input
            .chunks_exact(4)
            .map(|rgba| Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.header.width()
    }
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.header.height()
    }
    #[must_use]
    pub const fn header(&self) -> PngHeader {
        self.header
    }
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
    /// One row of pixels. `None` when `y` is out of bounds.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Pixel]> {
        let width = self.width() as usize;
        let start = (y as usize).checked_mul(width)?;
        self.pixels.get(start..start.checked_add(width)?)
    }
    /// `true` when every pixel is the same.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.pixels.first().map_or(true, |first| self.pixels.iter().all(|pixel| pixel.is_same(*first)))
    }
}

fn pixel_amount(width: u32, height: u32) -> Result<usize, PngError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PngError::PixelPlaneOverflow(width, height))
}
