//! Panning the crop window in pannable-cover mode.
//!
//! The offset accumulates pointer deltas as they arrive and is stored
//! unclamped. The layout engine clamps it when it builds the crop window.

use framer_model::geometry::{PanOffset, Point};
use framer_model::session::{InteractionState, Raster, Session};

/// Whether a press at `p` grabs the content instead of starting a new
/// region: pannable-cover mode, a committed region, a current content item,
/// and `p` inside the region (edges included).
pub fn grabs_content<R: Raster>(session: &Session<R>, p: Point) -> bool {
    session.mode().is_pannable()
        && session.current_content().is_some()
        && session
            .target_region()
            .is_some_and(|region| region.contains(p))
}

/// Start panning from `anchor`.
pub fn begin<R>(session: &mut Session<R>, anchor: Point) {
    tracing::trace!(x = anchor.x, y = anchor.y, "Pan started");
    session.set_interaction(InteractionState::PanningContent { anchor });
}

/// Apply the movement since the last pointer position and re-anchor.
pub fn drag<R>(session: &mut Session<R>, anchor: Point, to: Point) -> PanOffset {
    session.apply_pan_delta(to - anchor);
    session.set_interaction(InteractionState::PanningContent { anchor: to });
    session.pan_offset()
}

/// End the pan; the offset is already applied.
pub fn finish<R>(session: &mut Session<R>) {
    tracing::trace!(offset = ?session.pan_offset(), "Pan finished");
    session.set_interaction(InteractionState::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use framer_model::fit_mode::FitMode;
    use framer_model::geometry::{Rect, Size};

    struct Img;

    impl Raster for Img {
        fn size(&self) -> Size {
            Size::new(400.0, 200.0)
        }
    }

    fn pannable() -> Session<Img> {
        let mut session = Session::new(FitMode::PannableCover);
        session.set_frame(Img);
        session.set_content(vec![Img]);
        session.commit_region(Rect::new(10.0, 10.0, 100.0, 100.0));
        session
    }

    #[test]
    fn test_grab_requires_all_conditions() {
        let inside = Point::new(50.0, 50.0);
        let mut session = pannable();
        assert!(grabs_content(&session, inside));
        assert!(grabs_content(&session, Point::new(110.0, 110.0)));
        assert!(!grabs_content(&session, Point::new(111.0, 50.0)));

        session.set_mode(FitMode::FillCenter);
        assert!(!grabs_content(&session, inside));

        let mut no_content = pannable();
        no_content.set_content(Vec::new());
        assert!(!grabs_content(&no_content, inside));

        let mut no_region = pannable();
        no_region.clear_region();
        assert!(!grabs_content(&no_region, inside));
    }

    #[test]
    fn test_drag_accumulates_incrementally() {
        let mut session = pannable();
        begin(&mut session, Point::new(50.0, 50.0));
        drag(&mut session, Point::new(50.0, 50.0), Point::new(60.0, 45.0));
        let offset = drag(&mut session, Point::new(60.0, 45.0), Point::new(55.0, 40.0));
        assert_eq!(offset, PanOffset::new(5.0, -10.0));
        assert_eq!(
            session.interaction(),
            InteractionState::PanningContent {
                anchor: Point::new(55.0, 40.0)
            }
        );

        finish(&mut session);
        assert_eq!(session.interaction(), InteractionState::Idle);
        assert_eq!(session.pan_offset(), PanOffset::new(5.0, -10.0));
    }
}
