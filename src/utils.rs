// size in bytes of `height` scanlines of `width` RGBA pixels plus their filter bytes
pub const fn pixel_plane_len(width: u32, height: u32) -> Option<usize> {
    let Some(row) = (width as usize).checked_mul(4) else {return None;};
    let Some(row) = row.checked_add(1) else {return None;};
    row.checked_mul(height as usize)
}

#[cfg(test)]
pub const fn is_identical(first: &[u8], second: &[u8]) -> bool {
    if first.len() != second.len() {return false;}
    let mut index = 0;
    while index != first.len() {
        if first[index] != second[index] {return false;}
        index += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{is_identical, pixel_plane_len};
    #[test]
    const fn infallible_is_identical() {
        assert!(is_identical(&[0, 1, 2, 3], &[0, 1, 2, 3]));
        assert!(!is_identical(&[0, 1, 2, 3], &[0, 1, 2, 4]));
        assert!(!is_identical(&[0, 1, 2], &[0, 1, 2, 3]));
    }
    #[test]
    const fn infallible_pixel_plane_len() {
        assert!(matches!(pixel_plane_len(1, 1), Some(5)));
        assert!(matches!(pixel_plane_len(512, 512), Some(1_049_088)));
        assert!(matches!(pixel_plane_len(4096, 4096), Some(67_112_960)));
    }
}
