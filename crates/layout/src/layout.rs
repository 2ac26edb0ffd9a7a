//! Fit-mode layout engine.
//!
//! Maps a content image size, a target rectangle, a fit mode, and a pan
//! offset to the draw instructions the compositor executes. Pure function,
//! no drawing.

use serde::{Deserialize, Serialize};

use framer_model::fit_mode::FitMode;
use framer_model::geometry::{PanOffset, Point, Rect, Size};

use crate::pan::{contain_scale, cover_scale, crop_window};

/// Draw instructions for one content image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DrawPlan {
    /// Nothing to draw (degenerate region or image).
    Empty,
    /// Draw `source` (image pixels) scaled into `dest` (surface pixels).
    /// `dest` may extend past the target region; the compositor clips it.
    Image { source: Rect, dest: Rect },
    /// Repeat the whole image at native size, starting at `origin` and
    /// stepping by `tile`, over every cell that touches `area`.
    Tiles { origin: Point, tile: Size, area: Rect },
}

impl DrawPlan {
    pub fn is_empty(&self) -> bool {
        matches!(self, DrawPlan::Empty)
    }

    /// Number of tile placements (0 unless this is a tile plan).
    pub fn tile_count(&self) -> usize {
        match self {
            DrawPlan::Tiles { origin, tile, area } => {
                let (cols, rows) = tile_grid(*origin, *tile, *area);
                cols.saturating_mul(rows)
            }
            _ => 0,
        }
    }

    /// Destination rectangles of each tile, row by row. Empty unless this is
    /// a tile plan.
    pub fn tile_placements(&self) -> TilePlacements {
        match self {
            DrawPlan::Tiles { origin, tile, area } => {
                let (cols, rows) = tile_grid(*origin, *tile, *area);
                TilePlacements {
                    origin: *origin,
                    tile: *tile,
                    cols,
                    rows,
                    next: 0,
                }
            }
            _ => TilePlacements::default(),
        }
    }
}

/// Iterator over tile destination rectangles.
#[derive(Debug, Clone, Default)]
pub struct TilePlacements {
    origin: Point,
    tile: Size,
    cols: usize,
    rows: usize,
    next: usize,
}

impl Iterator for TilePlacements {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        if self.next >= self.cols.saturating_mul(self.rows) {
            return None;
        }
        let col = self.next % self.cols;
        let row = self.next / self.cols;
        self.next += 1;
        Some(Rect {
            x: self.origin.x + col as f64 * self.tile.width,
            y: self.origin.y + row as f64 * self.tile.height,
            width: self.tile.width,
            height: self.tile.height,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cols.saturating_mul(self.rows).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TilePlacements {}

/// Columns and rows needed to cover `area` from `origin`.
fn tile_grid(origin: Point, tile: Size, area: Rect) -> (usize, usize) {
    if !tile.has_area() || area.is_degenerate() {
        return (0, 0);
    }
    let span_x = (area.x - origin.x) + area.width;
    let span_y = (area.y - origin.y) + area.height;
    let cols = (span_x / tile.width).ceil().max(0.0) as usize;
    let rows = (span_y / tile.height).ceil().max(0.0) as usize;
    (cols, rows)
}

/// Compute where and how to draw `image` inside `target`.
///
/// Returns [`DrawPlan::Empty`] when the target or the image encloses no
/// area, before any scale is computed. `offset` only affects
/// [`FitMode::PannableCover`].
pub fn compute_layout(image: Size, target: Rect, mode: FitMode, offset: PanOffset) -> DrawPlan {
    if target.is_degenerate() || !image.has_area() {
        return DrawPlan::Empty;
    }

    match mode {
        FitMode::Contain => centered(image, target, contain_scale(image, target.size())),
        FitMode::FillCenter => centered(image, target, cover_scale(image, target.size())),
        FitMode::PannableCover => match crop_window(image, target.size(), offset) {
            Some(source) => DrawPlan::Image {
                source,
                dest: target,
            },
            None => DrawPlan::Empty,
        },
        FitMode::Tile => DrawPlan::Tiles {
            origin: target.origin(),
            tile: image,
            area: target,
        },
    }
}

/// Whole image at `scale`, centered on the target.
fn centered(image: Size, target: Rect, scale: f64) -> DrawPlan {
    let width = image.width * scale;
    let height = image.height * scale;
    DrawPlan::Image {
        source: Rect::from_size(image),
        dest: Rect {
            x: target.x + (target.width - width) / 2.0,
            y: target.y + (target.height - height) / 2.0,
            width,
            height,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(plan: DrawPlan) -> Rect {
        match plan {
            DrawPlan::Image { dest, .. } => dest,
            other => panic!("expected an image plan, got {other:?}"),
        }
    }

    #[test]
    fn test_contain_letterboxes_wide_image() {
        let plan = compute_layout(
            Size::new(200.0, 100.0),
            Rect::new(10.0, 20.0, 100.0, 100.0),
            FitMode::Contain,
            PanOffset::ZERO,
        );
        assert_eq!(dest(plan), Rect::new(10.0, 45.0, 100.0, 50.0));
    }

    #[test]
    fn test_fill_center_overflows_and_centers() {
        let plan = compute_layout(
            Size::new(200.0, 100.0),
            Rect::new(10.0, 20.0, 100.0, 100.0),
            FitMode::FillCenter,
            PanOffset::ZERO,
        );
        let d = dest(plan);
        assert_eq!(d.width, 200.0);
        assert_eq!(d.height, 100.0);
        assert_eq!(d.x, -40.0);
        assert_eq!(d.y, 20.0);
    }

    #[test]
    fn test_fill_center_ignores_offset() {
        let image = Size::new(200.0, 100.0);
        let target = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            compute_layout(image, target, FitMode::FillCenter, PanOffset::new(50.0, 9.0)),
            compute_layout(image, target, FitMode::FillCenter, PanOffset::ZERO),
        );
    }

    #[test]
    fn test_pannable_cover_fills_box_exactly() {
        let target = Rect::new(5.0, 5.0, 100.0, 50.0);
        let plan = compute_layout(
            Size::new(300.0, 300.0),
            target,
            FitMode::PannableCover,
            PanOffset::new(0.0, 1_000.0),
        );
        match plan {
            DrawPlan::Image { source, dest } => {
                assert_eq!(dest, target);
                assert!((source.width - 300.0).abs() < 1e-9);
                assert!((source.height - 150.0).abs() < 1e-9);
                // Dragged far down: clamped to the bottom of the image.
                assert!((source.y - 150.0).abs() < 1e-9);
                assert!(source.bottom() <= 300.0 + 1e-9);
            }
            other => panic!("unexpected plan {other:?}"),
        }
    }

    #[test]
    fn test_tile_grid_100x50_with_30px_tiles() {
        let plan = compute_layout(
            Size::new(30.0, 30.0),
            Rect::new(0.0, 0.0, 100.0, 50.0),
            FitMode::Tile,
            PanOffset::ZERO,
        );
        assert_eq!(plan.tile_count(), 8);

        let placements: Vec<Rect> = plan.tile_placements().collect();
        assert_eq!(placements.len(), 8);

        let mut xs: Vec<f64> = placements.iter().map(|r| r.x).collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        assert_eq!(xs, vec![0.0, 30.0, 60.0, 90.0]);

        let mut ys: Vec<f64> = placements.iter().map(|r| r.y).collect();
        ys.sort_by(f64::total_cmp);
        ys.dedup();
        assert_eq!(ys, vec![0.0, 30.0]);
    }

    #[test]
    fn test_tiles_start_at_region_corner() {
        let plan = compute_layout(
            Size::new(40.0, 40.0),
            Rect::new(15.0, 25.0, 40.0, 40.0),
            FitMode::Tile,
            PanOffset::ZERO,
        );
        let placements: Vec<Rect> = plan.tile_placements().collect();
        assert_eq!(placements, vec![Rect::new(15.0, 25.0, 40.0, 40.0)]);
    }

    #[test]
    fn test_degenerate_region_draws_nothing() {
        for mode in FitMode::ALL {
            let plan = compute_layout(
                Size::new(30.0, 30.0),
                Rect::new(10.0, 10.0, 0.0, 50.0),
                mode,
                PanOffset::ZERO,
            );
            assert!(plan.is_empty(), "{mode} should be empty");
        }
    }

    #[test]
    fn test_empty_image_draws_nothing() {
        for mode in FitMode::ALL {
            let plan = compute_layout(
                Size::new(0.0, 30.0),
                Rect::new(0.0, 0.0, 100.0, 50.0),
                mode,
                PanOffset::ZERO,
            );
            assert!(plan.is_empty(), "{mode} should be empty");
            assert_eq!(plan.tile_placements().count(), 0);
        }
    }

    #[test]
    fn test_plan_serializes_with_kind_tag() {
        let json = serde_json::to_value(DrawPlan::Empty).unwrap();
        assert_eq!(json["kind"], "empty");
    }
}
