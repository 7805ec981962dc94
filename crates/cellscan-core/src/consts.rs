/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of dilate/erode passes applied by the closing stage.
pub const CLOSE_ITERATIONS: usize = 2;

/// Smallest structuring-element diameter the pipeline accepts.
/// Zero or negative kernel sizes are clamped up to this.
pub const MIN_KERNEL_SIZE: i32 = 1;

/// Default polling rate for the live feed, in frames per second.
pub const DEFAULT_TARGET_FPS: u32 = 30;

/// Default lower HSV hue bound.
pub const DEFAULT_HUE_LO: u8 = 23;

/// Default upper HSV hue bound (179 is the hue ceiling in u8 HSV).
pub const DEFAULT_HUE_HI: u8 = 179;

/// Default lower HSV saturation bound.
pub const DEFAULT_SAT_LO: u8 = 38;

/// Default upper HSV saturation bound.
pub const DEFAULT_SAT_HI: u8 = 255;

/// Default lower HSV value bound.
pub const DEFAULT_VAL_LO: u8 = 43;

/// Default upper HSV value bound.
pub const DEFAULT_VAL_HI: u8 = 187;

/// Default structuring-element diameter for morphological closing.
pub const DEFAULT_KERNEL_SIZE: i32 = 7;

/// Default minimum retained contour area, in square pixels.
pub const DEFAULT_MIN_AREA: f64 = 20.0;

/// Default maximum retained contour area, in square pixels.
pub const DEFAULT_MAX_AREA: f64 = 3515.0;

/// BGR color used to outline retained contours.
pub const CONTOUR_COLOR_BGR: [u8; 3] = [0, 255, 0];

/// BGR color used for centroid index labels.
pub const LABEL_COLOR_BGR: [u8; 3] = [255, 0, 0];

/// Pixel scale factor for the 5x7 digit glyphs drawn at centroids.
pub const LABEL_GLYPH_SCALE: u32 = 2;

/// Offset (up and left of the centroid) at which index labels are drawn.
pub const LABEL_OFFSET_PX: i64 = 10;
