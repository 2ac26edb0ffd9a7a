//! Framer Model
//!
//! Defines the data contracts shared by every Framer crate:
//! - **Geometry:** Points, sizes, and normalized rectangles in backing-pixel space
//! - **Fit modes:** The four layout policies for placing content in a region
//! - **Content:** The ordered content collection and its selection cursor
//! - **Session:** The single owned editing state (frame, content, region,
//!   mode, pan offset, pointer interaction)
//!
//! All coordinates are backing-pixel coordinates of the output surface,
//! never display coordinates.

pub mod content;
pub mod fit_mode;
pub mod geometry;
pub mod session;

pub use content::*;
pub use fit_mode::*;
pub use geometry::*;
pub use session::*;
