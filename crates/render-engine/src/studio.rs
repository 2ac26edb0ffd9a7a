//! The editing studio: one session wired to a surface and its controls.
//!
//! Every user action goes through here so the surface, the controls, and the
//! session never disagree about what is shown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use framer_common::config::{FramerConfig, OutputFormat};
use framer_common::error::{FramerError, FramerResult};
use framer_interaction::{handle_pointer, PointerEvent, PointerOutcome};
use framer_layout::coords::SurfaceMetrics;
use framer_model::fit_mode::FitMode;
use framer_model::geometry::{PanOffset, Point, Size};
use framer_model::session::{Raster, Session};

use crate::compositor::{Compositor, RenderReport};
use crate::controls::Controls;
use crate::export::{export_filename, render_and_save, ExportOptions, ExportSequencer, ExportSummary};
use crate::sink::SaveSink;
use crate::surface::Surface;

/// A session plus the surface it renders to and the controls it drives.
pub struct Studio<S: Surface, C: Controls> {
    session: Session<S::Image>,
    surface: S,
    metrics: SurfaceMetrics,
    display_pinned: bool,
    compositor: Compositor,
    controls: C,
    export: ExportOptions,
    cancel: Arc<AtomicBool>,
}

impl<S: Surface, C: Controls> Studio<S, C> {
    pub fn new(surface: S, controls: C, mode: FitMode) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let metrics = SurfaceMetrics::unscaled(surface.size());
        Self {
            session: Session::new(mode),
            surface,
            metrics,
            display_pinned: false,
            compositor: Compositor::default(),
            controls,
            export: ExportOptions::default().with_cancel_flag(cancel.clone()),
            cancel,
        }
    }

    /// Build a studio using the configured mode, outline, and export settings.
    pub fn from_config(surface: S, controls: C, config: &FramerConfig) -> Self {
        let mut studio = Self::new(surface, controls, config.default_mode);
        studio.compositor = Compositor::new(config.outline);
        studio.set_export_options(ExportOptions::from_config(&config.export));
        studio
    }

    pub fn session(&self) -> &Session<S::Image> {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    /// Replace the export settings. The studio's cancel flag stays attached.
    pub fn set_export_options(&mut self, options: ExportOptions) {
        self.export = options.with_cancel_flag(self.cancel.clone());
    }

    /// Flag that stops a running batch export before its next item.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Set the frame. The surface takes the frame's pixel size and any
    /// previous region is dropped.
    pub fn load_frame(&mut self, frame: S::Image) {
        let size = frame.size();
        self.surface.resize(size);
        self.metrics.backing = size;
        if !self.display_pinned {
            self.metrics.display = size;
        }
        self.session.set_frame(frame);
        tracing::info!(width = size.width, height = size.height, "Frame loaded");
        self.render();
    }

    /// Replace the content collection, selecting the first item.
    pub fn load_content(&mut self, items: Vec<S::Image>) {
        tracing::info!(items = items.len(), "Content loaded");
        self.session.set_content(items);
        self.sync_controls();
        self.render();
    }

    /// Take a dropped batch: the first image becomes the frame, the rest the
    /// content. Returns `false` (and changes nothing) for an empty drop.
    pub fn load_dropped(&mut self, mut images: Vec<S::Image>) -> bool {
        if images.is_empty() {
            return false;
        }
        let frame = images.remove(0);
        self.load_frame(frame);
        self.load_content(images);
        true
    }

    /// Where the surface is shown and at what size, for pointer mapping.
    /// Until this is called the surface is assumed to be shown 1:1.
    pub fn set_display(&mut self, origin: Point, display: Size) {
        self.display_pinned = true;
        self.metrics.origin = origin;
        self.metrics.display = display;
    }

    /// Handle a pointer event given in display coordinates.
    pub fn pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        let Some(p) = self.metrics.to_backing(event.position()) else {
            return PointerOutcome::Ignored;
        };
        let outcome = handle_pointer(&mut self.session, event.with_position(p));
        match outcome {
            PointerOutcome::Preview(rect) => {
                self.compositor
                    .render_preview(&mut self.surface, &self.session, rect);
            }
            o if o.needs_render() => {
                self.render();
            }
            _ => {}
        }
        outcome
    }

    pub fn set_mode(&mut self, mode: FitMode) {
        tracing::debug!(%mode, "Fit mode selected");
        self.session.set_mode(mode);
        self.render();
    }

    /// Set the pan offset directly, as if dragged there.
    pub fn set_pan_offset(&mut self, offset: PanOffset) {
        self.session.set_pan_offset(offset);
        self.render();
    }

    pub fn select_next(&mut self) -> bool {
        let changed = self.session.select_next();
        self.after_selection(changed)
    }

    pub fn select_previous(&mut self) -> bool {
        let changed = self.session.select_previous();
        self.after_selection(changed)
    }

    pub fn select(&mut self, index: usize) -> bool {
        let changed = self.session.select(index);
        self.after_selection(changed)
    }

    fn after_selection(&mut self, changed: bool) -> bool {
        if changed {
            self.sync_controls();
            self.render();
        }
        changed
    }

    /// Redraw the interactive view, outline included.
    pub fn render(&mut self) -> Option<RenderReport> {
        self.compositor.render(&mut self.surface, &self.session, true)
    }

    /// Push counter, navigation, and highlight to the controls.
    pub fn sync_controls(&mut self) {
        let index = self.session.current_index();
        self.controls
            .set_counter(index, self.session.content().len());
        self.controls.set_navigation(self.session.navigation());
        self.controls.highlight(index);
    }

    /// Render the current item and encode it. The interactive view is
    /// restored afterwards when the outline was hidden.
    pub fn snapshot(&mut self, show_outline: bool, format: OutputFormat) -> FramerResult<Vec<u8>> {
        if self
            .compositor
            .render(&mut self.surface, &self.session, show_outline)
            .is_none()
        {
            return Err(FramerError::render("Nothing to render: no frame loaded"));
        }
        let bytes = self.surface.snapshot(format);
        if !show_outline {
            self.render();
        }
        bytes
    }

    /// Save the current item without its outline, then restore the view.
    ///
    /// Returns the file name used, or `None` when there is no frame.
    pub async fn save_current<K: SaveSink>(&mut self, sink: &mut K) -> FramerResult<Option<String>> {
        if !self.session.has_frame() {
            tracing::debug!("Save skipped: no frame loaded");
            return Ok(None);
        }
        let index = self.session.current_index().unwrap_or(0);
        let filename = export_filename(&self.export.filename_prefix, index, self.export.format);
        let result = render_and_save(
            &self.session,
            &mut self.surface,
            &self.compositor,
            sink,
            self.export.format,
            std::time::Duration::ZERO,
            &filename,
        )
        .await;
        self.render();
        result.map(|()| Some(filename))
    }

    /// Export every content item. Resets the cancel flag first.
    pub async fn export_all<K: SaveSink>(&mut self, sink: &mut K) -> ExportSummary {
        self.cancel.store(false, Ordering::SeqCst);
        ExportSequencer::new(self.export.clone())
            .export_all(
                &mut self.session,
                &mut self.surface,
                &self.compositor,
                sink,
                &mut self.controls,
            )
            .await
    }

    /// Like [`export_all`](Self::export_all), reporting each item to
    /// `progress`.
    pub async fn export_all_with_progress<K: SaveSink>(
        &mut self,
        sink: &mut K,
        progress: crate::export::ProgressCallback,
    ) -> ExportSummary {
        self.cancel.store(false, Ordering::SeqCst);
        ExportSequencer::new(self.export.clone())
            .with_progress(progress)
            .export_all(
                &mut self.session,
                &mut self.surface,
                &self.compositor,
                sink,
                &mut self.controls,
            )
            .await
    }
}
