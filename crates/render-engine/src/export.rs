//! Batch export: render every content item in turn and save the result.
//!
//! One async task owns the session and surface for the whole batch. Items
//! are processed strictly in order; a settle delay separates each render
//! from its snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use framer_common::config::{ExportDefaults, OutputFormat};
use framer_common::error::FramerResult;
use framer_model::session::Session;

use crate::compositor::Compositor;
use crate::controls::{Controls, PROCESSING_STATUS};
use crate::sink::SaveSink;
use crate::surface::Surface;

/// Export parameters.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pause between rendering an item and snapshotting it.
    pub settle_delay: Duration,

    /// Encoding for saved images.
    pub format: OutputFormat,

    /// File name prefix; see [`export_filename`].
    pub filename_prefix: String,

    /// When set to `true`, the batch stops before rendering the next item.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_config(&ExportDefaults::default())
    }
}

impl ExportOptions {
    pub fn from_config(config: &ExportDefaults) -> Self {
        Self {
            settle_delay: config.settle_delay(),
            format: config.format,
            filename_prefix: config.filename_prefix.clone(),
            cancel: None,
        }
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

/// File name for the item at 0-based `index`: `{prefix}-{index + 1}.{ext}`.
pub fn export_filename(prefix: &str, index: usize, format: OutputFormat) -> String {
    format!("{prefix}-{}.{}", index + 1, format.extension())
}

/// An item that could not be exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFailure {
    pub index: usize,
    pub filename: String,
    pub error: String,
}

/// Outcome of a batch export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    /// File names saved, in order.
    pub saved: Vec<String>,

    /// Items whose snapshot or save failed.
    pub failed: Vec<ExportFailure>,

    /// Whether the batch stopped early on the cancel flag.
    pub cancelled: bool,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExportSummary {
    fn begin() -> Self {
        let now = Utc::now();
        Self {
            saved: Vec::new(),
            failed: Vec::new(),
            cancelled: false,
            started_at: now,
            finished_at: now,
        }
    }

    /// True when every item was saved.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && !self.cancelled
    }
}

/// Progress callback, invoked after each item is attempted.
pub type ProgressCallback = Box<dyn Fn(ExportProgress) + Send>;

/// Progress report for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportProgress {
    /// Items attempted so far, including this one.
    pub completed: usize,

    /// Items in the batch.
    pub total: usize,

    pub filename: String,

    /// Whether this item was saved.
    pub saved: bool,
}

/// Runs batch exports.
pub struct ExportSequencer {
    options: ExportOptions,
    progress: Option<ProgressCallback>,
}

impl ExportSequencer {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Render, snapshot, and save every content item.
    ///
    /// Controls are disabled for the duration and re-enabled exactly once
    /// at the end, whatever happened. Navigation is only pushed after that. The interactive view is redrawn with
    /// its outline afterwards.
    pub async fn export_all<S, K, C>(
        &self,
        session: &mut Session<S::Image>,
        surface: &mut S,
        compositor: &Compositor,
        sink: &mut K,
        controls: &mut C,
    ) -> ExportSummary
    where
        S: Surface,
        K: SaveSink,
        C: Controls,
    {
        let mut summary = ExportSummary::begin();
        let total = session.content().len();

        controls.set_enabled(false);
        controls.set_status(PROCESSING_STATUS);

        if !session.has_frame() || total == 0 {
            tracing::info!(
                has_frame = session.has_frame(),
                items = total,
                "Nothing to export"
            );
        } else {
            tracing::info!(
                items = total,
                format = ?self.options.format,
                settle_ms = self.options.settle_delay.as_millis() as u64,
                "Starting batch export"
            );
            self.run(session, surface, compositor, sink, controls, &mut summary)
                .await;
        }

        controls.set_status("");
        controls.set_enabled(true);
        controls.set_navigation(session.navigation());

        compositor.render(surface, session, true);

        summary.finished_at = Utc::now();
        tracing::info!(
            saved = summary.saved.len(),
            failed = summary.failed.len(),
            cancelled = summary.cancelled,
            "Batch export finished"
        );
        summary
    }

    async fn run<S, K, C>(
        &self,
        session: &mut Session<S::Image>,
        surface: &mut S,
        compositor: &Compositor,
        sink: &mut K,
        controls: &mut C,
        summary: &mut ExportSummary,
    ) where
        S: Surface,
        K: SaveSink,
        C: Controls,
    {
        let total = session.content().len();

        for index in 0..total {
            if self.options.is_cancelled() {
                tracing::warn!(index, "Batch export cancelled");
                summary.cancelled = true;
                break;
            }

            session.select(index);
            session.reset_pan();
            controls.set_counter(Some(index), total);
            controls.highlight(Some(index));

            let filename = export_filename(&self.options.filename_prefix, index, self.options.format);
            let result = render_and_save(
                session,
                surface,
                compositor,
                sink,
                self.options.format,
                self.options.settle_delay,
                &filename,
            )
            .await;

            let saved = match result {
                Ok(()) => {
                    summary.saved.push(filename.clone());
                    true
                }
                Err(e) => {
                    tracing::error!(index, filename = %filename, error = %e, "Export item failed");
                    summary.failed.push(ExportFailure {
                        index,
                        filename: filename.clone(),
                        error: e.to_string(),
                    });
                    false
                }
            };

            if let Some(cb) = &self.progress {
                cb(ExportProgress {
                    completed: index + 1,
                    total,
                    filename,
                    saved,
                });
            }
        }
    }
}

/// Render the current item without its outline, wait, then snapshot and
/// save it.
pub(crate) async fn render_and_save<S, K>(
    session: &Session<S::Image>,
    surface: &mut S,
    compositor: &Compositor,
    sink: &mut K,
    format: OutputFormat,
    settle_delay: Duration,
    filename: &str,
) -> FramerResult<()>
where
    S: Surface,
    K: SaveSink,
{
    compositor.render(surface, session, false);
    if !settle_delay.is_zero() {
        tokio::time::sleep(settle_delay).await;
    }
    let bytes = surface.snapshot(format)?;
    sink.save(bytes, filename).await
}
