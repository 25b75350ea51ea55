use crate::consts::CRC_POLYNOMIAL;

// reflected CRC-32 table, built at compile time
const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0; 256];
    let mut index = 0;
    while index != 256 {
        let mut value = index as u32;
        let mut bit = 0;
        while bit != 8 {
            value = if value & 1 == 1 {(value >> 1) ^ CRC_POLYNOMIAL} else {value >> 1};
            bit += 1;
        }
        table[index] = value;
        index += 1;
    }
    table
}

#[inline]
const fn update(mut crc: u32, bytes: &[u8]) -> u32 {
    let mut index = 0;
    while index != bytes.len() {
        crc = TABLE[((crc ^ bytes[index] as u32) & 0xff) as usize] ^ (crc >> 8);
        index += 1;
    }
    crc
}

/// CRC-32 of `tag ++ payload` as stored at the end of every PNG chunk.
#[must_use]
pub const fn checksum(tag: [u8; 4], payload: &[u8]) -> u32 {
    let crc = update(0xffff_ffff, &tag);
    update(crc, payload) ^ 0xffff_ffff
}

#[cfg(test)]
mod tests {
    use super::{checksum, TABLE};
    #[test]
    const fn infallible_table() {
        assert!(TABLE[0] == 0);
        assert!(TABLE[1] == 0x7707_3096);
        assert!(TABLE[255] == 0x2d02_ef8d);
    }
    #[test]
    const fn infallible_checksum() {
        assert!(checksum(*b"IEND", &[]) == 0xae42_6082);
        // "123456789" split across tag and payload is the standard check value
        assert!(checksum(*b"1234", b"56789") == 0xcbf4_3926);
    }
}
