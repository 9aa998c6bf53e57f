//! Rendering über eine vom Host bereitgestellte Zeichen-Schnittstelle.

mod cuboid_renderer;
mod types;

pub use cuboid_renderer::{draw_cuboid, render_frame};
pub use types::{Color, DrawCall, DrawRecorder, DrawStyle, RenderAdapter};
