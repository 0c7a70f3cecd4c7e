//! Pointer strokes rasterized into a fixed-size pixel buffer.

mod buffer;
mod raster;
mod stroke;

use egui::Pos2;

pub use buffer::{BACKGROUND, CANVAS_SIZE, FOREGROUND, PixelBuffer};
pub use raster::STROKE_WIDTH;
pub use stroke::StrokeSession;

/// Owns the pixel buffer and turns begin/extend/end calls into strokes.
///
/// Coordinates are in buffer pixels. Non-finite points are dropped and
/// points outside the surface are clamped to its edge, so none of these
/// operations can fail.
#[derive(Debug, Clone, Default)]
pub struct DrawingSurface {
    buffer: PixelBuffer,
    session: Option<StrokeSession>,
}

impl DrawingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn session(&self) -> Option<&StrokeSession> {
        self.session.as_ref()
    }

    pub fn is_stroking(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a stroke and puts a dot at `point` so taps leave a mark.
    pub fn begin_stroke(&mut self, point: Pos2) {
        let Some(point) = self.clamp(point) else {
            log::debug!("Ignoring stroke start at non-finite point {:?}", point);
            return;
        };
        self.session = Some(StrokeSession::new(point));
        raster::stamp_segment(&mut self.buffer, point, point, STROKE_WIDTH);
    }

    /// Draws a segment from the previous point to `point`. No-op without an
    /// active stroke.
    pub fn extend_stroke(&mut self, point: Pos2) {
        let Some(point) = self.clamp(point) else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let from = session.advance(point);
        raster::stamp_segment(&mut self.buffer, from, point, STROKE_WIDTH);
    }

    pub fn end_stroke(&mut self) {
        self.session = None;
    }

    /// Resets every pixel to the background and drops any active stroke.
    pub fn clear(&mut self) {
        self.buffer.reset();
        self.session = None;
    }

    fn clamp(&self, point: Pos2) -> Option<Pos2> {
        if !point.is_finite() {
            return None;
        }
        Some(Pos2::new(
            point.x.clamp(0.0, self.buffer.width() as f32),
            point.y.clamp(0.0, self.buffer.height() as f32),
        ))
    }
}
