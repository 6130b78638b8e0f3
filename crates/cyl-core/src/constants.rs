// Shared layout and timing defaults used by the core and the web frontend.

// Layout
pub const DEFAULT_GUTTER_FRACTION: f64 = 0.5 / 100.0; // of a full turn
pub const DEFAULT_DUPLICATE_THRESHOLD: usize = 4; // sets this small get doubled
pub const CYLINDER_RADIUS: f32 = 1.0;
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 32; // columns per segment wall

// Timing
pub const DEFAULT_TRANSITION_MS: u32 = 500;
pub const DEFAULT_ASSET_TIMEOUT_MS: u32 = 15_000;

// Camera
pub const CAMERA_FOV_DEG: f32 = 24.0; // vertical
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_INITIAL_Z: f32 = 4.0;
pub const CAMERA_FIT_OFFSET: f32 = 1.0; // >1 leaves a margin around the assembly
pub const CAMERA_FAR_MULTIPLIER: f32 = 3.0;

// Debug overlay
pub const DEBUG_OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // yellow box
pub const DEBUG_WIREFRAME_COLOR: [f32; 4] = [0.6, 0.8, 1.0, 1.0];
pub const DEBUG_ORIGIN_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const DEBUG_ORIGIN_HALF_SIZE: f32 = 0.05;
