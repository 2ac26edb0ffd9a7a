//! Frame compositor: frame, clipped content, and region outline.
//!
//! Draw order is fixed: clear, frame at full surface size, content clipped
//! to the target region, then the outline on top so the clip never hides it.

use framer_common::config::OutlineStyle;
use framer_layout::layout::{compute_layout, DrawPlan};
use framer_model::fit_mode::FitMode;
use framer_model::geometry::{PanOffset, Rect};
use framer_model::session::{Raster, Session};

use crate::surface::Surface;

/// Callback notified with the current content index after each render.
pub type SelectionCallback = Box<dyn Fn(Option<usize>) + Send>;

/// Everything one render needs, borrowed from a session.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a, I> {
    /// Background frame.
    pub frame: &'a I,
    /// Content image to place in the region.
    pub content: Option<&'a I>,
    /// Target region in surface pixels.
    pub region: Option<Rect>,
    /// Layout policy.
    pub mode: FitMode,
    /// Pan offset (pannable-cover only).
    pub offset: PanOffset,
    /// Index of `content` in its collection.
    pub index: Option<usize>,
}

impl<'a, I> Scene<'a, I> {
    /// Borrow a scene from a session; `None` until a frame is loaded.
    pub fn from_session(session: &'a Session<I>) -> Option<Self> {
        Some(Self {
            frame: session.frame()?,
            content: session.current_content(),
            region: session.target_region(),
            mode: session.mode(),
            offset: session.pan_offset(),
            index: session.current_index(),
        })
    }
}

/// What a render drew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    /// Layout used for the content; `Empty` when nothing was drawn.
    pub plan: DrawPlan,
    /// Whether the region outline was stroked.
    pub outlined: bool,
}

/// Draws sessions onto surfaces.
pub struct Compositor {
    outline: OutlineStyle,
    on_selection: Option<SelectionCallback>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(OutlineStyle::default())
    }
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("outline", &self.outline)
            .field("on_selection", &self.on_selection.is_some())
            .finish()
    }
}

impl Compositor {
    pub fn new(outline: OutlineStyle) -> Self {
        Self {
            outline,
            on_selection: None,
        }
    }

    /// Notify `callback` with the current index after every render.
    pub fn with_selection_callback(mut self, callback: SelectionCallback) -> Self {
        self.on_selection = Some(callback);
        self
    }

    pub fn outline(&self) -> &OutlineStyle {
        &self.outline
    }

    /// Render the session. Returns `None` (and draws nothing) when no frame
    /// is loaded.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        session: &Session<S::Image>,
        show_outline: bool,
    ) -> Option<RenderReport> {
        let Some(scene) = Scene::from_session(session) else {
            tracing::debug!("Render skipped: no frame loaded");
            return None;
        };
        Some(self.render_scene(surface, &scene, show_outline))
    }

    /// Render a scene. Exports pass `show_outline = false` so the selection
    /// guide never appears in saved output.
    pub fn render_scene<S: Surface>(
        &self,
        surface: &mut S,
        scene: &Scene<'_, S::Image>,
        show_outline: bool,
    ) -> RenderReport {
        draw_frame(surface, scene.frame);

        let plan = match (scene.content, scene.region) {
            (Some(content), Some(region)) => {
                let plan = compute_layout(content.size(), region, scene.mode, scene.offset);
                if !plan.is_empty() {
                    surface.push_clip(region);
                    draw_plan(surface, content, &plan);
                    surface.pop_clip();
                }
                plan
            }
            _ => DrawPlan::Empty,
        };

        let outlined = match scene.region {
            Some(region) if show_outline => {
                surface.stroke_rect(region, &self.outline);
                true
            }
            _ => false,
        };

        tracing::trace!(mode = %scene.mode, ?plan, outlined, "Scene rendered");

        if let Some(callback) = &self.on_selection {
            callback(scene.index);
        }

        RenderReport { plan, outlined }
    }

    /// Draw the frame and a rectangle being dragged out, without content.
    /// Returns `false` when no frame is loaded.
    pub fn render_preview<S: Surface>(
        &self,
        surface: &mut S,
        session: &Session<S::Image>,
        preview: Rect,
    ) -> bool {
        let Some(frame) = session.frame() else {
            return false;
        };
        draw_frame(surface, frame);
        surface.stroke_rect(preview, &self.outline);
        true
    }
}

fn draw_frame<S: Surface>(surface: &mut S, frame: &S::Image) {
    surface.clear();
    let full = Rect::from_size(surface.size());
    surface.draw_image(frame, Rect::from_size(frame.size()), full);
}

fn draw_plan<S: Surface>(surface: &mut S, content: &S::Image, plan: &DrawPlan) {
    match plan {
        DrawPlan::Empty => {}
        DrawPlan::Image { source, dest } => surface.draw_image(content, *source, *dest),
        DrawPlan::Tiles { .. } => {
            let whole = Rect::from_size(content.size());
            for tile in plan.tile_placements() {
                surface.draw_image(content, whole, tile);
            }
        }
    }
}
