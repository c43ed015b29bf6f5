//! ARGB8888 palette and channel helpers.

pub const BACKGROUND: u32 = 0xFFFFFFFF;
pub const BLACK: u32 = 0xFF000000;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;
pub const MAGENTA: u32 = 0xFFFF00FF;
pub const GRAY: u32 = 0xFF808080;

/// Split a packed ARGB color into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    let a = (color >> 24) as u8;
    let r = (color >> 16) as u8;
    let g = (color >> 8) as u8;
    let b = color as u8;
    [r, g, b, a]
}

/// Pack `[r, g, b, a]` bytes into ARGB.
#[inline]
pub fn from_rgba([r, g, b, a]: [u8; 4]) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_order() {
        assert_eq!(to_rgba(0x80112233), [0x11, 0x22, 0x33, 0x80]);
        assert_eq!(from_rgba([0x11, 0x22, 0x33, 0x80]), 0x80112233);
        assert_eq!(from_rgba(to_rgba(MAGENTA)), MAGENTA);
    }
}
