use alloc::vec::Vec;

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::{
    chunk::Chunk,
    consts::{DEFAULT_COMPRESSION_LEVEL, FILTER_NONE, IDAT, IEND, IHDR, MAX_COMPRESSION_LEVEL, SIGNATURE},
    error::PngError,
    header::PngHeader,
    image::Image,
    pixel::Pixel,
    utils::pixel_plane_len,
};

/// An encoder for single frame 8bit RGBA PNG images.
///
/// Every scanline uses filter type None and the pixel data is stored in a single zlib compressed IDAT chunk.
/// The output is always: signature, IHDR, IDAT, IEND.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PngEncoder {
    level: u8,
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PngEncoder {
    /// An encoder using compression level `6`, the zlib default.
    #[must_use]
    pub const fn new() -> Self {
        Self {level: DEFAULT_COMPRESSION_LEVEL}
    }
    /// Sets the zlib compression level. `0` stores the data uncompressed and `10` is the slowest and smallest.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the level is greater than `10`.
    pub const fn with_compression(mut self, level: u8) -> Result<Self, PngError> {
        if level > MAX_COMPRESSION_LEVEL {return Err(PngError::InvalidCompressionLevel(level));}
        self.level = level;
        Ok(self)
    }
    #[must_use]
    pub const fn compression(&self) -> u8 {
        self.level
    }
    /// Encodes a `width` by `height` image where every pixel is `pixel`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the following is true:
    ///
    /// 1: The width or height values are `0` or greater than `2^31 - 1`.\
    /// 2: The uncompressed pixel data would not fit in memory.
    pub fn encode(&self, width: u32, height: u32, pixel: Pixel) -> Result<Vec<u8>, PngError> {
        let header = PngHeader::new(width, height)?;
        let raw = solid_plane(header, pixel)?;
        self.assemble(header, &raw)
    }
    /// Encodes an [`Image`] with arbitrary pixel data.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the uncompressed pixel data would not fit in memory.
    pub fn encode_image(&self, image: &Image) -> Result<Vec<u8>, PngError> {
        let header = image.header();
        let raw = image_plane(image)?;
        self.assemble(header, &raw)
    }
    fn assemble(&self, header: PngHeader, raw: &[u8]) -> Result<Vec<u8>, PngError> {
        let compressed = compress_to_vec_zlib(raw, self.level);
        log::debug!(
            "encoding {}x{} png: {} raw bytes compressed to {} at level {}",
            header.width(), header.height(), raw.len(), compressed.len(), self.level
        );
        let ihdr = header.to_u8();
        let chunks = [Chunk::new(IHDR, &ihdr)?, Chunk::new(IDAT, &compressed)?, Chunk::new(IEND, &[])?];
        let mut output = Vec::with_capacity(SIGNATURE.len() + ihdr.len() + compressed.len() + chunks.len() * 12);
        output.extend_from_slice(&SIGNATURE);
        for chunk in &chunks {
            chunk.write_to(&mut output);
        }
        Ok(output)
    }
}

/// Encodes a solid `width` by `height` image with the default [`PngEncoder`].
///
/// # Errors
///
/// See [`PngEncoder::encode`].
pub fn encode(width: u32, height: u32, pixel: Pixel) -> Result<Vec<u8>, PngError> {
    PngEncoder::new().encode(width, height, pixel)
}

// one scanline (filter byte followed by `width` pixels) repeated `height` times
fn solid_plane(header: PngHeader, pixel: Pixel) -> Result<Vec<u8>, PngError> {
    let (width, height) = (header.width(), header.height());
    pixel_plane_len(width, height).ok_or(PngError::PixelPlaneOverflow(width, height))?;
    let rgba = pixel.to_u8();
    let mut scanline = Vec::with_capacity(1 + rgba.len() * width as usize);
    scanline.push(FILTER_NONE);
    (0..width).for_each(|_| scanline.extend_from_slice(&rgba));
    Ok(scanline.repeat(height as usize))
}

fn image_plane(image: &Image) -> Result<Vec<u8>, PngError> {
    let (width, height) = (image.width(), image.height());
    let len = pixel_plane_len(width, height).ok_or(PngError::PixelPlaneOverflow(width, height))?;
    let mut raw = Vec::with_capacity(len);
    for row in image.pixels().chunks_exact(width as usize) {
        raw.push(FILTER_NONE);
        row.iter().for_each(|pixel| raw.extend_from_slice(&pixel.to_u8()));
    }
    Ok(raw)
}
