//! The single owned editing session.
//!
//! Every piece of mutable editing state lives here: the frame, the content
//! collection and its cursor, the fit mode, the pan offset, the committed
//! target region, and the pointer interaction state. Mutation goes through
//! methods that apply the reset rules (a new region, item, mode, or frame
//! always zeroes the pan offset) so callers cannot forget them.

use crate::content::{ContentCollection, NavigationState};
use crate::fit_mode::FitMode;
use crate::geometry::{PanOffset, Point, Rect, Size};

/// Anything with intrinsic pixel dimensions that can be composited.
pub trait Raster {
    fn size(&self) -> Size;
}

impl<R: Raster + ?Sized> Raster for &R {
    fn size(&self) -> Size {
        (**self).size()
    }
}

/// What the pointer is currently doing on the surface.
///
/// Exactly one state is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging out a new target region from `anchor`.
    DrawingRegion { anchor: Point },
    /// Panning the crop window; `anchor` is the last pointer position seen.
    PanningContent { anchor: Point },
}

/// Editing state for one frame and its content images.
#[derive(Debug, Clone)]
pub struct Session<R> {
    frame: Option<R>,
    content: ContentCollection<R>,
    mode: FitMode,
    pan_offset: PanOffset,
    target_region: Option<Rect>,
    interaction: InteractionState,
}

impl<R> Default for Session<R> {
    fn default() -> Self {
        Self::new(FitMode::default())
    }
}

impl<R> Session<R> {
    /// Create an empty session using `mode`.
    pub fn new(mode: FitMode) -> Self {
        Self {
            frame: None,
            content: ContentCollection::default(),
            mode,
            pan_offset: PanOffset::ZERO,
            target_region: None,
            interaction: InteractionState::Idle,
        }
    }

    // ── Frame ───────────────────────────────────────────────────────────

    pub fn frame(&self) -> Option<&R> {
        self.frame.as_ref()
    }

    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Replace the frame.
    ///
    /// The previous target region was drawn against the old frame's pixels,
    /// so it is cleared along with the pan offset and any drag in progress.
    pub fn set_frame(&mut self, frame: R) {
        self.frame = Some(frame);
        self.target_region = None;
        self.pan_offset = PanOffset::ZERO;
        self.interaction = InteractionState::Idle;
    }

    // ── Content ─────────────────────────────────────────────────────────

    pub fn content(&self) -> &ContentCollection<R> {
        &self.content
    }

    /// Replace the content collection; the first item becomes current.
    pub fn set_content(&mut self, items: Vec<R>) {
        self.content = ContentCollection::new(items);
        self.pan_offset = PanOffset::ZERO;
    }

    /// The content item currently shown.
    pub fn current_content(&self) -> Option<&R> {
        self.content.current()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.content.current_index()
    }

    /// Select a content item. Returns `true` if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        let changed = self.content.select(index);
        if changed {
            self.pan_offset = PanOffset::ZERO;
        }
        changed
    }

    /// Advance to the next content item. Returns `true` if it moved.
    pub fn select_next(&mut self) -> bool {
        let changed = self.content.select_next();
        if changed {
            self.pan_offset = PanOffset::ZERO;
        }
        changed
    }

    /// Go back to the previous content item. Returns `true` if it moved.
    pub fn select_previous(&mut self) -> bool {
        let changed = self.content.select_previous();
        if changed {
            self.pan_offset = PanOffset::ZERO;
        }
        changed
    }

    pub fn navigation(&self) -> NavigationState {
        self.content.navigation()
    }

    // ── Mode and offset ─────────────────────────────────────────────────

    pub fn mode(&self) -> FitMode {
        self.mode
    }

    /// Change the fit mode. The pan offset is reset even when `mode` equals
    /// the current mode.
    pub fn set_mode(&mut self, mode: FitMode) {
        self.mode = mode;
        self.pan_offset = PanOffset::ZERO;
    }

    pub fn pan_offset(&self) -> PanOffset {
        self.pan_offset
    }

    /// Add a drag delta to the pan offset.
    pub fn apply_pan_delta(&mut self, delta: Point) {
        self.pan_offset.accumulate(delta);
    }

    /// Set the pan offset directly (e.g. from the command line).
    pub fn set_pan_offset(&mut self, offset: PanOffset) {
        self.pan_offset = offset;
    }

    pub fn reset_pan(&mut self) {
        self.pan_offset = PanOffset::ZERO;
    }

    // ── Region ──────────────────────────────────────────────────────────

    pub fn target_region(&self) -> Option<Rect> {
        self.target_region
    }

    /// Commit a new target region and reset the pan offset.
    pub fn commit_region(&mut self, region: Rect) {
        self.target_region = Some(region);
        self.pan_offset = PanOffset::ZERO;
    }

    pub fn clear_region(&mut self) {
        self.target_region = None;
        self.pan_offset = PanOffset::ZERO;
    }

    // ── Interaction ─────────────────────────────────────────────────────

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn set_interaction(&mut self, state: InteractionState) {
        self.interaction = state;
    }
}

impl<R: Raster> Session<R> {
    /// Intrinsic size of the loaded frame.
    pub fn frame_size(&self) -> Option<Size> {
        self.frame.as_ref().map(Raster::size)
    }
}
