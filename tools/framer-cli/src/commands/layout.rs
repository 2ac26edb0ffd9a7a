//! Print the draw plan for an image and region.

use framer_layout::layout::{compute_layout, DrawPlan};
use framer_model::fit_mode::FitMode;
use framer_model::geometry::{PanOffset, Rect, Size};

pub fn run(image: Size, region: Rect, mode: FitMode, pan: PanOffset) -> anyhow::Result<()> {
    let plan = compute_layout(image, region, mode, pan);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    if let DrawPlan::Tiles { .. } = plan {
        eprintln!("{} tile(s)", plan.tile_count());
    }
    Ok(())
}
