//! Drawing surfaces.
//!
//! The compositor only talks to the [`Surface`] trait. [`RasterSurface`]
//! (in `raster`) paints real pixels; [`CommandRecorder`] keeps a log of
//! the calls it receives.
//!
//! [`RasterSurface`]: crate::raster::RasterSurface

use serde::{Deserialize, Serialize};

use framer_common::config::{OutlineStyle, OutputFormat};
use framer_common::error::FramerResult;
use framer_model::geometry::{Rect, Size};
use framer_model::session::Raster;

/// A raster drawing target with a fixed-size pixel buffer.
pub trait Surface {
    /// Image type this surface can draw.
    type Image: Raster;

    /// Backing pixel size.
    fn size(&self) -> Size;

    /// Resize the backing buffer. Contents and clips are discarded.
    fn resize(&mut self, size: Size);

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Draw the `source` sub-rectangle of `image` scaled into `dest`,
    /// restricted to the active clip.
    fn draw_image(&mut self, image: &Self::Image, source: Rect, dest: Rect);

    /// Restrict drawing to `rect` (intersected with any active clip).
    fn push_clip(&mut self, rect: Rect);

    /// Drop the most recent clip.
    fn pop_clip(&mut self);

    /// Stroke the border of `rect`, centered on its edges.
    fn stroke_rect(&mut self, rect: Rect, style: &OutlineStyle);

    /// Encode the current contents.
    fn snapshot(&self, format: OutputFormat) -> FramerResult<Vec<u8>>;
}

/// One call received by a [`CommandRecorder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DrawCommand {
    Resize { size: Size },
    Clear,
    DrawImage { image: Size, source: Rect, dest: Rect },
    PushClip { rect: Rect },
    PopClip,
    StrokeRect { rect: Rect, width: f64 },
}

/// A surface that records draw calls instead of painting.
///
/// `snapshot` returns the recorded commands as JSON, so two renders can be
/// compared byte for byte.
#[derive(Debug, Clone)]
pub struct CommandRecorder<I> {
    size: Size,
    commands: Vec<DrawCommand>,
    _image: std::marker::PhantomData<fn(&I)>,
}

impl<I> CommandRecorder<I> {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            _image: std::marker::PhantomData,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of image draws recorded.
    pub fn image_draws(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawImage { .. }))
            .count()
    }
}

impl<I: Raster> Surface for CommandRecorder<I> {
    type Image = I;

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.commands.push(DrawCommand::Resize { size });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_image(&mut self, image: &I, source: Rect, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            image: image.size(),
            source,
            dest,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }

    fn stroke_rect(&mut self, rect: Rect, style: &OutlineStyle) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            width: style.width,
        });
    }

    fn snapshot(&self, _format: OutputFormat) -> FramerResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.commands)?)
    }
}
