use egui::{Pos2, Vec2};

use super::buffer::{FOREGROUND, PixelBuffer};

/// Width of every stroke, in pixels
pub const STROKE_WIDTH: f32 = 15.0;

/// Stamps a round-capped segment from `a` to `b` into the buffer.
///
/// Pixel intensity falls off linearly over the outermost pixel so edges come
/// out anti-aliased. New coverage only ever brightens a pixel, so overlapping
/// capsules join smoothly. A zero-length segment produces a dot.
pub(super) fn stamp_segment(buffer: &mut PixelBuffer, a: Pos2, b: Pos2, width: f32) -> bool {
    let reach = width / 2.0 + 0.5;
    let (w, h) = (buffer.width() as f32, buffer.height() as f32);

    let min_x = (a.x.min(b.x) - reach).floor().clamp(0.0, w) as u32;
    let max_x = (a.x.max(b.x) + reach).ceil().clamp(0.0, w) as u32;
    let min_y = (a.y.min(b.y) - reach).floor().clamp(0.0, h) as u32;
    let max_y = (a.y.max(b.y) + reach).ceil().clamp(0.0, h) as u32;

    let mut changed = false;
    for y in min_y..max_y {
        for x in min_x..max_x {
            let centre = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (reach - distance_to_segment(centre, a, b)).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let value = (coverage * FOREGROUND as f32).round() as u8;
                changed |= buffer.lighten(x, y, value);
            }
        }
    }

    if changed {
        buffer.mark_modified();
    }
    changed
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab: Vec2 = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
