pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";
pub const BIT_DEPTH: u8 = 8;
pub const COLOR_TYPE_RGBA: u8 = 6;
pub const COMPRESSION_METHOD: u8 = 0;
pub const FILTER_METHOD: u8 = 0;
pub const INTERLACE_METHOD: u8 = 0;
pub const FILTER_NONE: u8 = 0;
pub const MAX_DIMENSION: u32 = (1 << 31) - 1;
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;
pub const MAX_COMPRESSION_LEVEL: u8 = 10;
pub const CRC_POLYNOMIAL: u32 = 0xedb8_8320;
