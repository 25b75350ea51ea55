use core::str::FromStr;

use crate::error::PngError;

/// A single 8bit RGBA pixel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    #[inline]
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {red, green, blue, alpha}
    }
    /// Builds a pixel from a `0xRRGGBBAA` value.
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        let [red, green, blue, alpha] = value.to_be_bytes();
        Self {red, green, blue, alpha}
    }
    /// The pixel as it appears in a scanline: red, green, blue, alpha.
    #[inline]
    #[must_use]
    pub const fn to_u8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
    #[inline]
    #[must_use]
    pub const fn is_same(self, other: Self) -> bool {
        self.red == other.red && self.green == other.green && self.blue == other.blue && self.alpha == other.alpha
    }
}

/// Parses `rrggbb` or `rrggbbaa` hex, with or without a leading `#`. Alpha defaults to `ff`.
impl FromStr for Pixel {
    type Err = PngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let bytes = hex.as_bytes();
        if bytes.len() != 6 && bytes.len() != 8 {return Err(PngError::InvalidColor);}
        let mut channels = [0xff; 4];
        for (channel, pair) in channels.iter_mut().zip(bytes.chunks(2)) {
            *channel = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
        }
        Ok(Self::new(channels[0], channels[1], channels[2], channels[3]))
    }
}

const fn hex_digit(byte: u8) -> Result<u8, PngError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(PngError::InvalidColor),
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::PngError, utils::is_identical};
    use super::Pixel;
    #[test]
    const fn infallible_to_u8() {
        assert!(is_identical(&Pixel::new(59, 130, 246, 255).to_u8(), &[0x3b, 0x82, 0xf6, 0xff]));
    }
    #[test]
    const fn infallible_from_u32() {
        let pixel = Pixel::from_u32(0x3b82_f6ff);
        assert!(pixel.is_same(Pixel::new(59, 130, 246, 255)));
        assert!(!pixel.is_same(Pixel::new(59, 130, 246, 0)));
    }
    #[test]
    fn good_from_str() {
        assert_eq!("#3b82f6ff".parse::<Pixel>(), Ok(Pixel::new(59, 130, 246, 255)));
        assert_eq!("3B82F6".parse::<Pixel>(), Ok(Pixel::new(59, 130, 246, 255)));
        assert_eq!("#0f172a80".parse::<Pixel>(), Ok(Pixel::new(15, 23, 42, 128)));
    }
    #[test]
    fn bad_from_str() {
        assert_eq!("#3b82f".parse::<Pixel>(), Err(PngError::InvalidColor));
        assert_eq!("#3b82f6f".parse::<Pixel>(), Err(PngError::InvalidColor));
        assert_eq!("zz82f6".parse::<Pixel>(), Err(PngError::InvalidColor));
        assert_eq!("".parse::<Pixel>(), Err(PngError::InvalidColor));
    }
}
