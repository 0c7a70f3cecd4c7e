use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureId, TextureOptions};

use crate::surface::PixelBuffer;

const TEXTURE_NAME: &str = "digit_canvas";

/// Keeps the pixel buffer mirrored in a GPU texture.
///
/// The texture is only re-uploaded when the buffer's version changes, so idle
/// frames cost nothing.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    uploads: u64,
}

// TextureHandle doesn't implement Debug
impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times pixel data was sent to the GPU
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Returns the texture for `buffer`, uploading it first if it changed
    pub fn texture_id(&mut self, ctx: &egui::Context, buffer: &PixelBuffer) -> TextureId {
        if let Some(handle) = &self.texture {
            if self.uploaded_version == Some(buffer.version()) {
                return handle.id();
            }
        }

        let image = to_color_image(buffer);
        let id = match &mut self.texture {
            Some(handle) => {
                handle.set(image, TextureOptions::LINEAR);
                handle.id()
            }
            None => {
                let handle = ctx.load_texture(TEXTURE_NAME, image, TextureOptions::LINEAR);
                let id = handle.id();
                self.texture = Some(handle);
                id
            }
        };
        self.uploaded_version = Some(buffer.version());
        self.uploads += 1;
        id
    }

    /// Paints the canvas into `rect`
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        buffer: &PixelBuffer,
    ) {
        let texture_id = self.texture_id(ctx, buffer);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture_id, rect, uv, Color32::WHITE);
    }
}

pub fn to_color_image(buffer: &PixelBuffer) -> ColorImage {
    ColorImage::from_gray(
        [buffer.width() as usize, buffer.height() as usize],
        buffer.as_raw(),
    )
}
