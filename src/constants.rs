//! Baseline tuning constants for the inspection pipeline
//!
//! These are the empirically calibrated defaults carried by the detection
//! and classification stages. They are not physical constants: a different
//! camera or lighting setup may need different values, which is why every
//! constant here is mirrored by a runtime-tunable field in [`crate::config`].

/// Sheet boundary detection parameters
pub mod sheet {
    /// Canny edge detection low threshold (0-255 gradient scale)
    pub const CANNY_LOW_THRESHOLD: f64 = 50.0;

    /// Canny edge detection high threshold
    pub const CANNY_HIGH_THRESHOLD: f64 = 150.0;

    /// Bilateral filter pixel neighborhood diameter
    pub const BILATERAL_DIAMETER: i32 = 9;

    /// Bilateral filter sigma in color space
    pub const BILATERAL_SIGMA_COLOR: f64 = 75.0;

    /// Bilateral filter sigma in coordinate space
    pub const BILATERAL_SIGMA_SPACE: f64 = 75.0;

    /// Polygon approximation epsilon as fraction of contour perimeter
    pub const POLY_APPROX_EPSILON: f64 = 0.04;

    /// Vertex count a contour approximation must hit to qualify as a sheet
    pub const QUAD_VERTEX_COUNT: usize = 4;
}

/// Circular hole detection parameters (Hough circle transform)
pub mod holes {
    /// Inverse ratio of accumulator resolution to image resolution
    pub const DP: f64 = 1.0;

    /// Minimum center-to-center distance between detected circles,
    /// expressed as a divisor of the frame height
    pub const MIN_DIST_DIVISOR: f64 = 4.0;

    /// Accumulator threshold (upper threshold of the internal edge stage)
    pub const ACCUMULATOR_THRESHOLD: f64 = 100.0;

    /// Vote threshold for circle centers; lower values detect more
    /// (and more false) circles
    pub const VOTE_THRESHOLD: f64 = 30.0;

    /// Minimum accepted circle radius in pixels
    pub const MIN_RADIUS: i32 = 10;

    /// Maximum accepted circle radius in pixels
    pub const MAX_RADIUS: i32 = 50;
}

/// Hole classification parameters
pub mod classification {
    /// Minimum value every color channel must exceed for an anodized
    /// (light, desaturated) surface read
    pub const CHANNEL_FLOOR: u8 = 100;

    /// Maximum pairwise channel difference for a near-neutral sample
    pub const PAIRWISE_DELTA_CEILING: u8 = 15;

    /// Canny low threshold for the local edge-density pass; tighter than
    /// the sheet pass since local contrast matters more than global structure
    pub const REGION_CANNY_LOW: f64 = 100.0;

    /// Canny high threshold for the local edge-density pass
    pub const REGION_CANNY_HIGH: f64 = 200.0;

    /// Nonzero edge-pixel count above which a hole region reads as a
    /// chamfered/countersunk shading ring
    pub const EDGE_COUNT_THRESHOLD: i32 = 2000;
}
