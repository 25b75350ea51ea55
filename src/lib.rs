//! # A minimal PNG encoding library
//!
//! This crate turns 8bit RGBA pixel data into a single frame PNG image.
//!
//! This is a safe `#![no_std]` crate that only requires [alloc].
//!
//! ## Motivation
//!
//! Generating a PNG for an icon or a placeholder asset should not need a full image library.
//! The container is small: an 8 byte signature followed by length prefixed, CRC checked chunks.
//! Every function that can be const is const, including the CRC-32 table and the header layout.
//!
//! ## Scope
//!
//! The encoder only writes what a valid image needs:
//!
//! - an IHDR chunk declaring 8bit truecolor with alpha (color type `6`), no interlacing
//! - one IDAT chunk holding the zlib compressed scanlines, each using filter type None
//! - an empty IEND chunk
//!
//! Decoding, palettes, ancillary chunks, animation and filter selection are out of scope.
//!
//! ## Usage
//!
//! ### Solid color
//!
//! ```
//! use const_png::{encode, Pixel};
//!
//! let png = encode(512, 512, Pixel::from_u32(0x3b82_f6ff))?;
//! assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
//! // png is now a valid image ready to be written to a file
//! # Ok::<(), const_png::PngError>(())
//! ```
//!
//! ### Arbitrary pixels
//!
//! ```
//! use const_png::{Image, PngEncoder};
//!
//! let rgba = [255, 0, 0, 255,   0, 255, 0, 255,
//!             0, 0, 255, 255,   0, 0, 0, 0];
//! let image = Image::from_rgba(2, 2, &rgba)?;
//! let png = PngEncoder::new().with_compression(9)?.encode_image(&image)?;
//! # Ok::<(), const_png::PngError>(())
//! ```
//!
//! Width and height must both be between `1` and `2^31 - 1`.
//! A zero dimension is rejected with [`PngError::InvalidWidthHeight`] instead of producing an empty image.
//!
//! [alloc]: <https://doc.rust-lang.org/alloc/index.html>
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod chunk;
mod consts;
mod crc;
mod encoder;
mod error;
mod header;
mod image;
mod pixel;
mod utils;

pub use crate::chunk::{build_chunk, Chunk};
pub use crate::consts::SIGNATURE;
pub use crate::crc::checksum;
pub use crate::encoder::{encode, PngEncoder};
pub use crate::error::{PngError, PngErrorKind};
pub use crate::header::PngHeader;
pub use crate::image::Image;
pub use crate::pixel::Pixel;
