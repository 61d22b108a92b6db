//! Local edge-density measurement
//!
//! Counts edge pixels within a sub-region of a frame. Used to tell a
//! chamfered/countersunk hole (whose beveled rim renders as a dense ring
//! of edge responses under tight thresholds) from a sharp-walled one.

use opencv::core::{self, Mat, Rect};
use opencv::imgproc;

use crate::config::ClassificationConfig;
use crate::constants::classification;
use crate::error::{InspectionError, Result};
use crate::frame::to_grayscale;

/// Edge-density analyzer over frame sub-regions
///
/// Runs the same dual-threshold edge operator as sheet detection, but with
/// tighter thresholds: inside a small region, local contrast matters more
/// than global structure.
pub struct EdgeDensityAnalyzer {
    low_threshold: f64,
    high_threshold: f64,
}

impl Default for EdgeDensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDensityAnalyzer {
    /// Create an analyzer with the baseline thresholds
    pub fn new() -> Self {
        Self {
            low_threshold: classification::REGION_CANNY_LOW,
            high_threshold: classification::REGION_CANNY_HIGH,
        }
    }

    /// Create an analyzer with custom Canny thresholds
    pub fn with_thresholds(low_threshold: f64, high_threshold: f64) -> Self {
        Self {
            low_threshold,
            high_threshold,
        }
    }

    /// Create an analyzer from a classification configuration
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self {
            low_threshold: config.region_canny_low,
            high_threshold: config.region_canny_high,
        }
    }

    /// Count nonzero edge pixels within `region`
    ///
    /// The region must already be clamped to the frame bounds by the
    /// caller and cover at least one pixel.
    pub fn count_edge_pixels(&self, frame: &Mat, region: Rect) -> Result<i32> {
        let roi = Mat::roi(frame, region)
            .map_err(|e| InspectionError::opencv("region crop", e))?;

        let gray = to_grayscale(&roi)?;

        let mut edges = Mat::default();
        imgproc::canny_def(&gray, &mut edges, self.low_threshold, self.high_threshold)
            .map_err(|e| InspectionError::opencv("region edge detection", e))?;

        core::count_non_zero(&edges).map_err(|e| InspectionError::opencv("edge pixel count", e))
    }
}
