/// Something that can be sampled pixel by pixel, with 16 bits per channel.
///
/// Coordinates are zero-based, `x` in `0..width` and `y` in `0..height`.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);

    /// Sample `[r, g, b, a]` at the given coordinate.
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PixmapError {
    #[error("pixmap of {width}x{height} needs {expected} bytes of data, got {actual}")]
    InvalidLength { width: u32, height: u32, expected: usize, actual: usize },
}

/// An image in the StatusNotifierItem [Icon format].
///
/// Pixels are stored row by row, top to bottom and left to right. Every pixel takes four bytes,
/// in the order alpha, red, green, blue (ARGB32 in network byte order).
///
/// [Icon format]: https://freedesktop.org/wiki/Specifications/StatusNotifierItem/Icons/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Encode a pixel grid, keeping the top 8 bits of every channel.
    pub fn encode(source: &(impl PixelSource + ?Sized)) -> Self {
        let (width, height) = source.dimensions();
        let mut data = Vec::with_capacity(byte_len(width, height));
        for y in 0..height {
            for x in 0..width {
                let [r, g, b, a] = source.rgba16(x, y);
                data.extend_from_slice(&[(a >> 8) as u8, (r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8]);
            }
        }
        Self { width, height, data }
    }

    /// Wrap data that is already in ARGB32 layout.
    pub fn from_argb32(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixmapError> {
        let expected = byte_len(width, height);
        if data.len() != expected {
            return Err(PixmapError::InvalidLength { width, height, expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// A zero-area pixmap.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The `(iiay)` structure sent over dbus.
    pub(crate) fn to_wire(&self) -> (i32, i32, Vec<u8>) {
        // dimensions beyond i32 can't be expressed on the wire anyway
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        (width, height, self.data.clone())
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[cfg(feature = "image")]
impl PixelSource for image::ImageBuffer<image::Rgba<u16>, Vec<u16>> {
    fn dimensions(&self) -> (u32, u32) {
        image::ImageBuffer::dimensions(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        self.get_pixel(x, y).0
    }
}

#[cfg(feature = "image")]
impl PixelSource for image::DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        image::GenericImageView::dimensions(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        use image::DynamicImage::*;
        match self {
            ImageRgba16(img) => img.get_pixel(x, y).0,
            ImageRgb16(img) => {
                let [r, g, b] = img.get_pixel(x, y).0;
                [r, g, b, u16::MAX]
            },
            ImageLumaA16(img) => {
                let [l, a] = img.get_pixel(x, y).0;
                [l, l, l, a]
            },
            ImageLuma16(img) => {
                let [l] = img.get_pixel(x, y).0;
                [l, l, l, u16::MAX]
            },
            // widen so that the top byte is the 8 bit sample
            _ => image::GenericImageView::get_pixel(self, x, y).0.map(|c| u16::from(c) * 0x101),
        }
    }
}
