//! Crop window math for pannable-cover mode.

use framer_model::geometry::{PanOffset, Rect, Size};

/// Scale at which `image` just covers `target` on both axes.
pub fn cover_scale(image: Size, target: Size) -> f64 {
    (target.width / image.width).max(target.height / image.height)
}

/// Scale at which `image` just fits inside `target` on both axes.
pub fn contain_scale(image: Size, target: Size) -> f64 {
    (target.width / image.width).min(target.height / image.height)
}

/// The sub-rectangle of `image` sampled to fill `target` in pannable-cover
/// mode.
///
/// The window has the target's aspect ratio at cover scale. It starts
/// centered, is shifted by `offset` (in image pixels), and each axis is then
/// clamped to `[0, image - window]` so it never leaves the image however far
/// the offset has been dragged.
///
/// Returns `None` when either size encloses no area.
pub fn crop_window(image: Size, target: Size, offset: PanOffset) -> Option<Rect> {
    if !image.has_area() || !target.has_area() {
        return None;
    }

    let scale = cover_scale(image, target);
    let crop_w = target.width / scale;
    let crop_h = target.height / scale;

    let x = clamp_axis((image.width - crop_w) / 2.0 + offset.x, image.width - crop_w);
    let y = clamp_axis((image.height - crop_h) / 2.0 + offset.y, image.height - crop_h);

    Some(Rect {
        x,
        y,
        width: crop_w,
        height: crop_h,
    })
}

/// Clamp to `[0, max]`; floating error can push `max` a hair below zero.
fn clamp_axis(value: f64, max: f64) -> f64 {
    let max = max.max(0.0);
    if value.is_nan() {
        return max / 2.0;
    }
    value.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_without_offset() {
        // 400x200 image into a 100x100 box: scale 0.5, window 200x200.
        let w = crop_window(
            Size::new(400.0, 200.0),
            Size::new(100.0, 100.0),
            PanOffset::ZERO,
        )
        .unwrap();
        assert_eq!(w, Rect::new(100.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn test_offset_moves_window() {
        let w = crop_window(
            Size::new(400.0, 200.0),
            Size::new(100.0, 100.0),
            PanOffset::new(-40.0, 0.0),
        )
        .unwrap();
        assert_eq!(w.x, 60.0);
    }

    #[test]
    fn test_offset_clamps_at_edges() {
        let image = Size::new(400.0, 200.0);
        let target = Size::new(100.0, 100.0);

        let far_left = crop_window(image, target, PanOffset::new(-10_000.0, 0.0)).unwrap();
        assert_eq!(far_left.x, 0.0);

        let far_right = crop_window(image, target, PanOffset::new(10_000.0, 0.0)).unwrap();
        assert_eq!(far_right.x, 200.0);

        // The covered axis has no slack; vertical drags are absorbed.
        let vertical = crop_window(image, target, PanOffset::new(0.0, 55.0)).unwrap();
        assert_eq!(vertical.y, 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        let image = Size::new(400.0, 200.0);
        assert!(crop_window(image, Size::new(0.0, 100.0), PanOffset::ZERO).is_none());
        assert!(crop_window(Size::new(0.0, 10.0), image, PanOffset::ZERO).is_none());
    }

    #[test]
    fn test_nan_offset_falls_back_to_center() {
        let w = crop_window(
            Size::new(400.0, 200.0),
            Size::new(100.0, 100.0),
            PanOffset::new(f64::NAN, 0.0),
        )
        .unwrap();
        assert_eq!(w.x, 100.0);
    }
}
