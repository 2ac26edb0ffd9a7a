//! Framer Interaction
//!
//! Turns pointer down/move/up events (already mapped to backing pixels)
//! into edits of a [`Session`]:
//!
//! - **Selector:** Drag out a new target region, with a live preview
//! - **Pan:** Drag inside the region to move the pannable-cover crop window
//!
//! The active gesture is the session's [`InteractionState`], so at most one
//! of drawing and panning can be in progress.

pub mod pan;
pub mod selector;

use serde::{Deserialize, Serialize};

use framer_model::geometry::{PanOffset, Point, Rect};
use framer_model::session::{InteractionState, Raster, Session};

/// A pointer event in backing-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "at", rename_all = "lowercase")]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }

    /// The same event kind at a different position.
    pub fn with_position(&self, p: Point) -> PointerEvent {
        match self {
            PointerEvent::Down(_) => PointerEvent::Down(p),
            PointerEvent::Move(_) => PointerEvent::Move(p),
            PointerEvent::Up(_) => PointerEvent::Up(p),
        }
    }
}

/// What a pointer event did, so the caller knows what to redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Nothing changed.
    Ignored,
    /// A new region drag began at `anchor`.
    DrawingStarted { anchor: Point },
    /// The region being dragged; not committed yet.
    Preview(Rect),
    /// The region was committed to the session.
    RegionCommitted(Rect),
    /// A pan drag began at `anchor`.
    PanStarted { anchor: Point },
    /// The pan offset changed.
    Panned(PanOffset),
    /// The pan drag ended.
    PanFinished,
}

impl PointerOutcome {
    /// Whether the full composite should be re-rendered.
    pub fn needs_render(&self) -> bool {
        matches!(
            self,
            PointerOutcome::RegionCommitted(_) | PointerOutcome::Panned(_)
        )
    }
}

/// Apply one pointer event to the session.
///
/// A press always starts a fresh gesture. Moves and releases outside a
/// gesture are stray events and are ignored.
pub fn handle_pointer<R: Raster>(session: &mut Session<R>, event: PointerEvent) -> PointerOutcome {
    match (session.interaction(), event) {
        (_, PointerEvent::Down(p)) => pointer_down(session, p),
        (InteractionState::DrawingRegion { anchor }, PointerEvent::Move(p)) => {
            PointerOutcome::Preview(selector::preview(anchor, p))
        }
        (InteractionState::DrawingRegion { anchor }, PointerEvent::Up(p)) => {
            PointerOutcome::RegionCommitted(selector::commit(session, anchor, p))
        }
        (InteractionState::PanningContent { anchor }, PointerEvent::Move(p)) => {
            PointerOutcome::Panned(pan::drag(session, anchor, p))
        }
        (InteractionState::PanningContent { .. }, PointerEvent::Up(_)) => {
            pan::finish(session);
            PointerOutcome::PanFinished
        }
        (InteractionState::Idle, PointerEvent::Move(_) | PointerEvent::Up(_)) => {
            PointerOutcome::Ignored
        }
    }
}

fn pointer_down<R: Raster>(session: &mut Session<R>, p: Point) -> PointerOutcome {
    if !session.has_frame() {
        tracing::debug!("Pointer down ignored: no frame loaded");
        session.set_interaction(InteractionState::Idle);
        return PointerOutcome::Ignored;
    }

    if pan::grabs_content(session, p) {
        pan::begin(session, p);
        PointerOutcome::PanStarted { anchor: p }
    } else {
        selector::begin(session, p);
        PointerOutcome::DrawingStarted { anchor: p }
    }
}
