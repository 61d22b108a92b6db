//! Circular hole detection
//!
//! Locates drilled holes with a Hough circle transform. The voting
//! approach tolerates partial occlusion and lighting gradients better
//! than contour fitting for nearly-circular features.

use opencv::core::{Mat, Vec3f, Vector};
use opencv::imgproc;
use opencv::prelude::*;

use crate::config::HoleDetectionConfig;
use crate::error::{InspectionError, Result};
use crate::frame::to_grayscale;
use crate::types::{Hole, Point2D};

/// Hole detector implementing the Hough circle transform
pub struct HoleDetector {
    config: HoleDetectionConfig,
}

impl Default for HoleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HoleDetector {
    /// Create a new hole detector with the baseline calibration
    pub fn new() -> Self {
        Self {
            config: HoleDetectionConfig::default(),
        }
    }

    /// Create a hole detector with custom parameters
    pub fn with_config(config: HoleDetectionConfig) -> Self {
        Self { config }
    }

    /// Detect circular holes in a frame
    ///
    /// Accepts a grayscale frame or a color frame (converted internally).
    /// The minimum center-to-center separation is `height /
    /// min_dist_divisor` pixels, which suppresses near-duplicate circles
    /// from the same physical hole. Centers and radii are reported in
    /// frame pixel coordinates, rounded to integers; `index` is the
    /// position in the transform's output order.
    ///
    /// An empty vector is the expected outcome for a frame with no holes.
    pub fn detect(&self, frame: &Mat) -> Result<Vec<Hole>> {
        let gray = to_grayscale(frame)?;

        let min_dist = (gray.rows() as f64 / self.config.min_dist_divisor).max(1.0);

        // accumulator_threshold maps to OpenCV's param1 (the upper Canny
        // threshold of the internal edge stage), vote_threshold to param2
        let mut circles = Vector::<Vec3f>::new();
        imgproc::hough_circles(
            &gray,
            &mut circles,
            imgproc::HOUGH_GRADIENT,
            self.config.dp,
            min_dist,
            self.config.accumulator_threshold,
            self.config.vote_threshold,
            self.config.min_radius,
            self.config.max_radius,
        )
        .map_err(|e| InspectionError::opencv("Hough circle transform", e))?;

        let holes = circles
            .iter()
            .enumerate()
            .map(|(index, circle)| Hole {
                center: Point2D::new(circle[0].round() as i32, circle[1].round() as i32),
                radius: circle[2].round() as i32,
                index,
            })
            .collect();

        Ok(holes)
    }
}
