use digit_canvas::surface::{CANVAS_SIZE, DrawingSurface};
use digit_canvas::{EncodedImage, ImageEncoder};
use egui::Pos2;

fn drawn_surface(points: &[Pos2]) -> DrawingSurface {
    let mut surface = DrawingSurface::new();
    if let Some((first, rest)) = points.split_first() {
        surface.begin_stroke(*first);
        for point in rest {
            surface.extend_stroke(*point);
        }
        surface.end_stroke();
    }
    surface
}

#[test]
fn test_encoding_is_deterministic() {
    let surface = drawn_surface(&[Pos2::new(140.0, 40.0), Pos2::new(140.0, 240.0)]);
    let encoder = ImageEncoder::new();

    let first = encoder.encode(surface.buffer()).unwrap();
    let second = encoder.encode(surface.buffer()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_different_drawings_encode_differently() {
    let encoder = ImageEncoder::new();
    let one = drawn_surface(&[Pos2::new(140.0, 40.0), Pos2::new(140.0, 240.0)]);
    let seven = drawn_surface(&[
        Pos2::new(80.0, 70.0),
        Pos2::new(200.0, 70.0),
        Pos2::new(120.0, 220.0),
    ]);

    let a = encoder.encode(one.buffer()).unwrap();
    let b = encoder.encode(seven.buffer()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_decoded_png_matches_buffer() {
    let surface = drawn_surface(&[Pos2::new(60.0, 60.0), Pos2::new(220.0, 220.0)]);
    let encoded = ImageEncoder::new().encode(surface.buffer()).unwrap();

    let png = encoded.decode_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().into_luma8();

    assert_eq!(decoded.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    assert_eq!(decoded.as_raw(), surface.buffer().as_raw());
}

#[test]
fn test_blank_canvas_still_encodes() {
    let encoded = ImageEncoder::new()
        .encode(DrawingSurface::new().buffer())
        .unwrap();

    assert!(!encoded.is_empty());
    assert!(encoded.as_str().starts_with("data:image/png;base64,"));
}

#[test]
fn test_foreign_data_urls_are_rejected() {
    assert!(EncodedImage::from_data_url("data:image/jpeg;base64,AAAA").is_none());
    assert!(EncodedImage::from_data_url("data:image/png;base64,").is_none());
    assert!(EncodedImage::from_data_url("data:image/png;base64,iVBORw0KGgo=").is_some());
}
