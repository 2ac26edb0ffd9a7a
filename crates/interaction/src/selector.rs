//! Region selection: press, drag, release.
//!
//! While dragging only a preview rectangle is produced; the session's
//! target region changes on release, so a redraw triggered by anything else
//! mid-drag never sees a half-drawn region.

use framer_model::geometry::{Point, Rect};
use framer_model::session::{InteractionState, Session};

/// Start dragging a region from `anchor`.
pub fn begin<R>(session: &mut Session<R>, anchor: Point) {
    tracing::trace!(x = anchor.x, y = anchor.y, "Region drag started");
    session.set_interaction(InteractionState::DrawingRegion { anchor });
}

/// The rectangle currently spanned by the drag.
pub fn preview(anchor: Point, current: Point) -> Rect {
    Rect::from_corners(anchor, current)
}

/// Commit the dragged rectangle as the target region and end the drag.
///
/// Committing resets the pan offset. Zero-area regions are accepted; they
/// simply render no content.
pub fn commit<R>(session: &mut Session<R>, anchor: Point, end: Point) -> Rect {
    let region = Rect::from_corners(anchor, end);
    session.commit_region(region);
    session.set_interaction(InteractionState::Idle);
    tracing::debug!(
        x = region.x,
        y = region.y,
        width = region.width,
        height = region.height,
        "Target region committed"
    );
    region
}
