use image::{GrayImage, Luma};

/// Side length of the square drawing surface, in pixels
pub const CANVAS_SIZE: u32 = 280;

/// Pixel value of the untouched surface (black)
pub const BACKGROUND: u8 = 0;

/// Pixel value of fully covered stroke pixels (white)
pub const FOREGROUND: u8 = 255;

/// Fixed-size grayscale raster owned by [`super::DrawingSurface`].
///
/// Everything outside the `surface` module gets read-only access; the mutating
/// methods are `pub(super)`.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    image: GrayImage,
    /// Bumped on every change so textures can be re-uploaded lazily
    version: u64,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.image.as_raw() == other.image.as_raw()
    }
}

impl Eq for PixelBuffer {}

impl PixelBuffer {
    pub fn new() -> Self {
        Self {
            image: GrayImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Luma([BACKGROUND])),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Row-major pixel values
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.image.get_pixel_checked(x, y).map(|p| p.0[0])
    }

    pub fn is_blank(&self) -> bool {
        self.as_raw().iter().all(|&v| v == BACKGROUND)
    }

    /// Number of pixels that differ from the background
    pub fn lit_pixels(&self) -> usize {
        self.as_raw().iter().filter(|&&v| v != BACKGROUND).count()
    }

    pub(super) fn reset(&mut self) {
        for pixel in self.image.pixels_mut() {
            pixel.0[0] = BACKGROUND;
        }
        self.version += 1;
    }

    /// Raises the pixel to `value` if it is currently darker. Returns whether
    /// anything changed.
    pub(super) fn lighten(&mut self, x: u32, y: u32, value: u8) -> bool {
        match self.image.get_pixel_mut_checked(x, y) {
            Some(pixel) if pixel.0[0] < value => {
                pixel.0[0] = value;
                true
            }
            _ => false,
        }
    }

    pub(super) fn mark_modified(&mut self) {
        self.version += 1;
    }
}
