//! Configuration structures for the inspection pipeline
//!
//! All tunable parameters of the pipeline, organized per stage. The
//! defaults reproduce the baseline calibration in [`crate::constants`];
//! a host application can override them per camera/lighting setup and
//! persist the result as JSON.
//!
//! ```no_run
//! use sheetscan::InspectionConfig;
//! use std::path::Path;
//!
//! // Load a site-specific calibration, or fall back to the baseline
//! let config = InspectionConfig::from_json_file(Path::new("calibration.json"))
//!     .unwrap_or_default();
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{classification, holes, sheet};

/// Complete pipeline configuration
///
/// Contains all parameters needed to process a frame from input to
/// `DetectionResult`. Can be serialized to/from JSON for reproducible
/// calibration runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InspectionConfig {
    /// Sheet boundary detection configuration
    pub sheet_detection: SheetDetectionConfig,

    /// Hole detection configuration
    pub hole_detection: HoleDetectionConfig,

    /// Hole classification configuration
    pub classification: ClassificationConfig,
}

/// Sheet boundary detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDetectionConfig {
    /// Canny edge detection low threshold
    pub canny_low_threshold: f64,

    /// Canny edge detection high threshold
    pub canny_high_threshold: f64,

    /// Bilateral filter pixel neighborhood diameter
    pub bilateral_diameter: i32,

    /// Bilateral filter sigma in color space
    pub bilateral_sigma_color: f64,

    /// Bilateral filter sigma in coordinate space
    pub bilateral_sigma_space: f64,

    /// Polygon approximation epsilon as fraction of contour perimeter
    pub poly_approx_epsilon: f64,
}

impl Default for SheetDetectionConfig {
    fn default() -> Self {
        Self {
            canny_low_threshold: sheet::CANNY_LOW_THRESHOLD,
            canny_high_threshold: sheet::CANNY_HIGH_THRESHOLD,
            bilateral_diameter: sheet::BILATERAL_DIAMETER,
            bilateral_sigma_color: sheet::BILATERAL_SIGMA_COLOR,
            bilateral_sigma_space: sheet::BILATERAL_SIGMA_SPACE,
            poly_approx_epsilon: sheet::POLY_APPROX_EPSILON,
        }
    }
}

/// Hole detection parameters for the Hough circle transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleDetectionConfig {
    /// Inverse ratio of accumulator resolution to image resolution
    pub dp: f64,

    /// Minimum center-to-center distance between circles, as a divisor of
    /// the frame height (height / divisor pixels)
    pub min_dist_divisor: f64,

    /// Accumulator threshold (upper threshold of the transform's internal
    /// edge stage)
    pub accumulator_threshold: f64,

    /// Vote threshold for accepting circle centers
    pub vote_threshold: f64,

    /// Minimum accepted circle radius in pixels
    pub min_radius: i32,

    /// Maximum accepted circle radius in pixels
    pub max_radius: i32,
}

impl Default for HoleDetectionConfig {
    fn default() -> Self {
        Self {
            dp: holes::DP,
            min_dist_divisor: holes::MIN_DIST_DIVISOR,
            accumulator_threshold: holes::ACCUMULATOR_THRESHOLD,
            vote_threshold: holes::VOTE_THRESHOLD,
            min_radius: holes::MIN_RADIUS,
            max_radius: holes::MAX_RADIUS,
        }
    }
}

/// Hole classification parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Minimum value every color channel must exceed for an anodized read
    pub channel_floor: u8,

    /// Maximum pairwise channel difference for a near-neutral sample
    pub pairwise_delta_ceiling: u8,

    /// Canny low threshold for the local edge-density pass
    pub region_canny_low: f64,

    /// Canny high threshold for the local edge-density pass
    pub region_canny_high: f64,

    /// Edge-pixel count above which a hole region reads as countersunk
    pub edge_count_threshold: i32,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            channel_floor: classification::CHANNEL_FLOOR,
            pairwise_delta_ceiling: classification::PAIRWISE_DELTA_CEILING,
            region_canny_low: classification::REGION_CANNY_LOW,
            region_canny_high: classification::REGION_CANNY_HIGH,
            edge_count_threshold: classification::EDGE_COUNT_THRESHOLD,
        }
    }
}

impl InspectionConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
