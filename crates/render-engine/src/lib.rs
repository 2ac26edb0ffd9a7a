//! Framer Render
//!
//! Composites a content image into a region of a frame image and exports
//! the results.
//!
//! # Pipeline
//!
//! ```text
//! frame.png ─────┐
//!                ├── Frame (full surface)
//! content[i] ────┘         │
//!      │                   ├── Clip to region ── DrawPlan (fit mode, pan)
//!      │                   │
//!      │                   ├── Outline (interactive view only)
//!      │                   ▼
//!      │               Surface ── snapshot (PNG / JPEG)
//!      │                   │
//!      └── for each i ─────┴──▶ SaveSink: framed-photo-{i+1}.png
//! ```

pub mod compositor;
pub mod controls;
pub mod decode;
pub mod export;
pub mod raster;
pub mod sink;
pub mod studio;
pub mod surface;

pub use compositor::{Compositor, RenderReport, Scene, SelectionCallback};
pub use controls::{ConsoleControls, Controls, NoopControls};
pub use decode::{decode_image, load_image, load_images, LoadedImages};
pub use export::*;
pub use raster::{DecodedImage, RasterSurface};
pub use sink::{DirectorySink, MemorySink, SaveSink};
pub use studio::Studio;
pub use surface::{CommandRecorder, DrawCommand, Surface};
