pub use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;

/// Bytes of one pixel as the controller expects them with COLMOD 0x55
#[inline]
pub fn to_be_bytes(color: Rgb565) -> [u8; 2] {
    color.into_storage().to_be_bytes()
}

/// Flatten colours into the big-endian RGB565 byte stream.
pub fn pixel_bytes<I>(colors: I) -> impl Iterator<Item = u8>
where
    I: IntoIterator<Item = Rgb565>,
{
    colors.into_iter().flat_map(to_be_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::RgbColor;

    #[test]
    fn rgb565_is_big_endian() {
        assert_eq!(to_be_bytes(Rgb565::RED), [0xf8, 0x00]);
        assert_eq!(to_be_bytes(Rgb565::GREEN), [0x07, 0xe0]);
        assert_eq!(to_be_bytes(Rgb565::BLUE), [0x00, 0x1f]);
        assert_eq!(to_be_bytes(Rgb565::new(0x10, 0x20, 0x08)), [0x84, 0x08]);
    }

    #[test]
    fn stream_keeps_pixel_order() {
        let bytes: Vec<u8> = pixel_bytes([Rgb565::WHITE, Rgb565::BLACK, Rgb565::BLUE]).collect();
        assert_eq!(bytes, [0xff, 0xff, 0x00, 0x00, 0x00, 0x1f]);
    }
}
