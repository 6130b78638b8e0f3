pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod debug_lines;
pub mod error;
pub mod layout;
pub mod mesh;
pub mod source;
pub mod tween;

pub use camera::*;
pub use config::*;
pub use controller::*;
pub use debug_lines::*;
pub use error::{CarouselError, Result};
pub use layout::*;
pub use mesh::*;
pub use source::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SEGMENT_WGSL: &str = include_str!("../shaders/segment.wgsl");
pub static DEBUG_WGSL: &str = include_str!("../shaders/debug.wgsl");
