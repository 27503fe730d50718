//! Trims the fully transparent border from a sprite and re-pads it with
//! fixed per-side margins on a fresh transparent canvas. Horizontally the
//! sprite ends up tightly framed; the asymmetric vertical margins give every
//! sprite in a batch the same baseline.

use image::{imageops, DynamicImage, RgbaImage};

use crate::config::Margins;

/// Crop an image to the bounding box of its non-transparent pixels, then
/// paste the crop at the margin offset on a transparent canvas enlarged by
/// the margins.
///
/// A fully transparent image has no bounding box and is returned unchanged.
pub fn trim_and_pad(img: &DynamicImage, margins: &Margins) -> RgbaImage {
    let img = img.to_rgba8();

    let Some((min_x, min_y, max_x, max_y)) = alpha_bounding_box(&img) else {
        return img;
    };

    let cropped =
        imageops::crop_imm(&img, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1).to_image();

    let new_w = cropped.width() + margins.left + margins.right;
    let new_h = cropped.height() + margins.top + margins.bottom;

    // RgbaImage::new zero-fills, so the canvas starts fully transparent.
    // Pixels are copied verbatim, not alpha-blended.
    let mut canvas = RgbaImage::new(new_w, new_h);
    for (x, y, pixel) in cropped.enumerate_pixels() {
        canvas.put_pixel(x + margins.left, y + margins.top, *pixel);
    }

    canvas
}

/// Inclusive `(min_x, min_y, max_x, max_y)` bounds of all pixels with
/// non-zero alpha, or `None` if every pixel is transparent.
fn alpha_bounding_box(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }

        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    bounds
}
