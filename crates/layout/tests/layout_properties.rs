//! Property-based invariant tests for the fit-mode layout engine.
//!
//! 1. Contain keeps the whole image inside the region and preserves aspect.
//! 2. Fill-center covers the region on both axes and stays centered.
//! 3. Pannable-cover crop windows never leave the image, whatever the offset.
//! 4. Dragging past a boundary converges to the boundary itself.
//! 5. Tile placements cover the region with `ceil * ceil` cells.
//! 6. Layout is deterministic.

use framer_layout::layout::{compute_layout, DrawPlan};
use framer_layout::pan::crop_window;
use framer_model::fit_mode::FitMode;
use framer_model::geometry::{PanOffset, Rect, Size};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn dim() -> impl Strategy<Value = f64> {
    1.0f64..4_000.0
}

fn region() -> impl Strategy<Value = Rect> {
    (-500.0f64..500.0, -500.0f64..500.0, dim(), dim()).prop_map(|(x, y, w, h)| Rect {
        x,
        y,
        width: w,
        height: h,
    })
}

fn offset() -> impl Strategy<Value = PanOffset> {
    (-1e7f64..1e7, -1e7f64..1e7).prop_map(|(x, y)| PanOffset::new(x, y))
}

fn image_plan(plan: DrawPlan) -> (Rect, Rect) {
    match plan {
        DrawPlan::Image { source, dest } => (source, dest),
        other => panic!("expected image plan, got {other:?}"),
    }
}

// ── 1. Contain ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn contain_fits_inside_and_keeps_aspect(iw in dim(), ih in dim(), target in region()) {
        let (source, dest) = image_plan(compute_layout(
            Size::new(iw, ih), target, FitMode::Contain, PanOffset::ZERO,
        ));

        prop_assert_eq!(source, Rect::from_size(Size::new(iw, ih)));
        let tol = EPS * target.width.max(target.height);
        prop_assert!(dest.x >= target.x - tol);
        prop_assert!(dest.y >= target.y - tol);
        prop_assert!(dest.right() <= target.right() + tol);
        prop_assert!(dest.bottom() <= target.bottom() + tol);

        let ratio = dest.width / dest.height;
        prop_assert!(((ratio - iw / ih) / (iw / ih)).abs() < 1e-9);

        // One axis touches the region edges.
        let touches_w = (dest.width - target.width).abs() <= tol;
        let touches_h = (dest.height - target.height).abs() <= tol;
        prop_assert!(touches_w || touches_h);
    }
}

// ── 2. Fill-center ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fill_center_covers_region(iw in dim(), ih in dim(), target in region()) {
        let (_, dest) = image_plan(compute_layout(
            Size::new(iw, ih), target, FitMode::FillCenter, PanOffset::ZERO,
        ));
        let tol = EPS * target.width.max(target.height);
        prop_assert!(dest.x <= target.x + tol);
        prop_assert!(dest.y <= target.y + tol);
        prop_assert!(dest.right() >= target.right() - tol);
        prop_assert!(dest.bottom() >= target.bottom() - tol);
        prop_assert!((dest.center().x - target.center().x).abs() <= tol);
        prop_assert!((dest.center().y - target.center().y).abs() <= tol);
    }
}

// ── 3. Pannable-cover clamp ────────────────────────────────────────────

proptest! {
    #[test]
    fn crop_window_stays_inside_image(
        iw in dim(), ih in dim(), target in region(), off in offset()
    ) {
        let image = Size::new(iw, ih);
        let (source, dest) = image_plan(compute_layout(
            image, target, FitMode::PannableCover, off,
        ));

        prop_assert_eq!(dest, target);
        let tol = EPS * iw.max(ih);
        prop_assert!(source.x >= 0.0);
        prop_assert!(source.y >= 0.0);
        prop_assert!(source.right() <= iw + tol);
        prop_assert!(source.bottom() <= ih + tol);

        // The window has the region's aspect ratio.
        let window_ratio = source.width / source.height;
        let region_ratio = target.width / target.height;
        prop_assert!(((window_ratio - region_ratio) / region_ratio).abs() < 1e-9);
    }
}

// ── 4. Overshoot converges to the boundary ─────────────────────────────

proptest! {
    #[test]
    fn overshoot_matches_exact_boundary(
        iw in dim(), ih in dim(), bw in dim(), bh in dim(), extra in 1.0f64..1e6
    ) {
        let image = Size::new(iw, ih);
        let target = Size::new(bw, bh);
        let centered = crop_window(image, target, PanOffset::ZERO).unwrap();

        // Offsets that put the window exactly at each corner.
        let to_max_x = iw - centered.width - centered.x;
        let to_max_y = ih - centered.height - centered.y;
        let to_min_x = -centered.x;
        let to_min_y = -centered.y;

        let exact_max = crop_window(image, target, PanOffset::new(to_max_x, to_max_y)).unwrap();
        let past_max = crop_window(
            image, target, PanOffset::new(to_max_x + extra, to_max_y + extra),
        ).unwrap();
        prop_assert!((exact_max.x - past_max.x).abs() < 1e-6);
        prop_assert!((exact_max.y - past_max.y).abs() < 1e-6);

        let exact_min = crop_window(image, target, PanOffset::new(to_min_x, to_min_y)).unwrap();
        let past_min = crop_window(
            image, target, PanOffset::new(to_min_x - extra, to_min_y - extra),
        ).unwrap();
        prop_assert_eq!(past_min.x, 0.0);
        prop_assert_eq!(past_min.y, 0.0);
        prop_assert!(exact_min.x.abs() < 1e-6);
        prop_assert!(exact_min.y.abs() < 1e-6);
    }
}

// ── 5. Tiling ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tiles_cover_region(
        iw in 8.0f64..200.0, ih in 8.0f64..200.0,
        x in -100.0f64..100.0, y in -100.0f64..100.0,
        bw in 1.0f64..600.0, bh in 1.0f64..600.0,
    ) {
        let target = Rect { x, y, width: bw, height: bh };
        let plan = compute_layout(Size::new(iw, ih), target, FitMode::Tile, PanOffset::ZERO);

        let expected = ((bw / iw).ceil() * (bh / ih).ceil()) as usize;
        prop_assert_eq!(plan.tile_count(), expected);

        let placements: Vec<Rect> = plan.tile_placements().collect();
        prop_assert_eq!(placements.len(), expected);
        for tile in &placements {
            prop_assert!(tile.overlaps(&target));
            prop_assert_eq!(tile.width, iw);
            prop_assert_eq!(tile.height, ih);
        }

        let max_right = placements.iter().map(|r| r.right()).fold(f64::MIN, f64::max);
        let max_bottom = placements.iter().map(|r| r.bottom()).fold(f64::MIN, f64::max);
        prop_assert!(max_right >= target.right() - 1e-9);
        prop_assert!(max_bottom >= target.bottom() - 1e-9);
    }
}

// ── 6. Determinism ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn layout_is_deterministic(
        iw in dim(), ih in dim(), target in region(), off in offset(), mode_idx in 0usize..4
    ) {
        let mode = FitMode::ALL[mode_idx];
        let image = Size::new(iw, ih);
        prop_assert_eq!(
            compute_layout(image, target, mode, off),
            compute_layout(image, target, mode, off)
        );
    }
}
