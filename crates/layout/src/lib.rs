//! Framer Layout: geometry for placing content in a frame
//!
//! - **Coordinate mapping:** Convert pointer positions from a surface's
//!   displayed size to its backing pixel grid
//! - **Layout engine:** Source crop and destination placement for each fit mode
//! - **Pan clamping:** Keep the pannable-cover crop window inside the image
//!
//! This crate is pure computation, with no I/O and no rendering.
//! All inputs are data; all outputs are data.

pub mod coords;
pub mod layout;
pub mod pan;

pub use coords::{to_backing_coords, SurfaceMetrics};
pub use layout::{compute_layout, DrawPlan};
pub use pan::crop_window;
