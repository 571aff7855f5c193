//! Rendering module
//!
//! The simulation describes each frame as shape commands on a [`Surface`];
//! backends decide how those shapes reach the screen.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{CommandRecorder, DrawCommand};
pub use scene::draw_frame;
pub use surface::{Color, Drawable, Surface, colors, css_color};
