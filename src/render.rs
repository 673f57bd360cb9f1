use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::data::VocBox;

const STROKE_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const STROKE_WIDTH: i32 = 2;

/// Returns a copy of `image` with one hollow rectangle drawn per box; the
/// input is never mutated. `labels` is accepted for signature symmetry with
/// the provider's sample triple and does not influence rendering.
///
/// Boxes that degenerate to non-positive width or height are skipped.
pub fn render_annotation(image: &RgbImage, boxes: &[VocBox], _labels: &[usize]) -> RgbImage {
    let mut out = image.clone();
    for b in boxes {
        // Stroke width is built up from nested 1px rectangles.
        for inset in 0..STROKE_WIDTH {
            let w = b.width() - 2 * inset;
            let h = b.height() - 2 * inset;
            if w <= 0 || h <= 0 {
                continue;
            }
            let rect = Rect::at(b.x1 + inset, b.y1 + inset).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(&mut out, rect, STROKE_COLOR);
        }
    }
    out
}
