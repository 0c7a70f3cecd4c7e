//! Lossless transport encoding of the pixel buffer.

use base64::{Engine, engine::general_purpose::STANDARD};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder as _};

use crate::error::EncodeError;
use crate::surface::PixelBuffer;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A PNG of the drawing wrapped in a base64 data URL, ready to drop into a
/// JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedImage {
    data_url: String,
}

impl EncodedImage {
    /// Wraps an existing data URL. Returns `None` for anything that is not a
    /// non-empty PNG data URL.
    pub fn from_data_url(data_url: impl Into<String>) -> Option<Self> {
        let data_url = data_url.into();
        match data_url.strip_prefix(DATA_URL_PREFIX) {
            Some(payload) if !payload.is_empty() => Some(Self { data_url }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.data_url
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.len() <= DATA_URL_PREFIX.len()
    }

    pub fn len(&self) -> usize {
        self.data_url.len()
    }

    /// The PNG bytes carried by the data URL
    pub fn decode_png(&self) -> Result<Vec<u8>, EncodeError> {
        let payload = self
            .data_url
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(EncodeError::NotADataUrl)?;
        Ok(STANDARD.decode(payload)?)
    }
}

/// Serializes a [`PixelBuffer`] as an 8-bit grayscale PNG.
///
/// Compression and filter settings are pinned, so identical buffers always
/// produce byte-identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageEncoder;

impl ImageEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, buffer: &PixelBuffer) -> Result<EncodedImage, EncodeError> {
        let png = self.encode_png(buffer)?;
        let mut data_url = String::with_capacity(DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
        data_url.push_str(DATA_URL_PREFIX);
        STANDARD.encode_string(&png, &mut data_url);
        Ok(EncodedImage { data_url })
    }

    pub fn encode_png(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
        let mut png = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut png, CompressionType::Default, FilterType::Adaptive);
        encoder.write_image(
            buffer.as_raw(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::L8,
        )?;
        Ok(png)
    }
}
