// Page-facing names and frontend tuning used by the web build.

// Markup
pub const AUTO_MOUNT_SELECTOR: &str = "[data-cyl]"; // containers mounted by the start hook
pub const FIGURE_SELECTOR: &str = "figure";
pub const IMAGE_SELECTOR: &str = "img";
pub const CAPTION_SELECTOR: &str = "figcaption";
pub const CAPTION_TARGET_SELECTOR: &str = ".cyl-caption"; // optional live caption element
pub const NEXT_BUTTON_SELECTOR: &str = "[data-cyl-next]";
pub const PREV_BUTTON_SELECTOR: &str = "[data-cyl-prev]";
pub const CANVAS_CLASS: &str = "cyl-canvas";

// Lifecycle classes applied to the container
pub const CLASS_LOADING: &str = "cyl-loading";
pub const CLASS_READY: &str = "cyl-ready";
pub const CLASS_FAILED: &str = "cyl-failed";

// Keyboard
pub const KEY_NEXT: &str = "ArrowRight";
pub const KEY_PREV: &str = "ArrowLeft";

// Image loading
pub const CROSS_ORIGIN: &str = "anonymous"; // needed to upload remote images to the GPU
pub const LOAD_TIMEOUT_MARKER: &str = "cyl:load-timeout";

// Rendering
pub const MIN_CANVAS_PX: u32 = 1;
pub const RENDER_ERROR_LOG_EVERY: u32 = 600; // frames between repeats of a persistent render error
