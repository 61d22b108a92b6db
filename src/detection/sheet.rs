//! Sheet boundary detection
//!
//! Finds the largest quadrilateral contour in a frame and reports its
//! bounding rectangle as the sheet outline. Absence of a sheet is the
//! expected "nothing in view" outcome, not an error.

use opencv::core::{Mat, Point, Vector};
use opencv::imgproc;
use opencv::prelude::*;

use crate::config::SheetDetectionConfig;
use crate::constants::sheet::QUAD_VERTEX_COUNT;
use crate::error::{InspectionError, Result};
use crate::frame::to_grayscale;
use crate::types::SheetRegion;

type VectorOfPoint = Vector<Point>;

/// Sheet detector implementing quadrilateral contour extraction
pub struct SheetDetector {
    config: SheetDetectionConfig,
}

impl Default for SheetDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetDetector {
    /// Create a new sheet detector with the baseline calibration
    pub fn new() -> Self {
        Self {
            config: SheetDetectionConfig::default(),
        }
    }

    /// Create a sheet detector with custom parameters
    pub fn with_config(config: SheetDetectionConfig) -> Self {
        Self { config }
    }

    /// Detect the sheet outline in a frame
    ///
    /// Accepts a color frame or an already-derived grayscale copy. The
    /// frame is smoothed with an edge-preserving bilateral filter, edges
    /// are extracted with a dual-threshold Canny pass, and external
    /// contours are approximated to polygons with a tolerance of
    /// `poly_approx_epsilon` times their perimeter. Contours that reduce
    /// to exactly four vertices qualify as sheet candidates; the one with
    /// the largest bounding-rectangle area wins.
    ///
    /// Ties on equal area are broken by contour enumeration order, which
    /// is implementation-defined inside OpenCV and carries no geometric
    /// meaning.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no quadrilateral qualifies, the expected outcome
    /// for a frame with no sheet in view.
    pub fn detect(&self, frame: &Mat) -> Result<Option<SheetRegion>> {
        let gray = to_grayscale(frame)?;

        // Suppress sensor noise while keeping the sheet edges sharp
        let mut smoothed = Mat::default();
        imgproc::bilateral_filter_def(
            &gray,
            &mut smoothed,
            self.config.bilateral_diameter,
            self.config.bilateral_sigma_color,
            self.config.bilateral_sigma_space,
        )
        .map_err(|e| InspectionError::opencv("bilateral filter", e))?;

        let mut edges = Mat::default();
        imgproc::canny_def(
            &smoothed,
            &mut edges,
            self.config.canny_low_threshold,
            self.config.canny_high_threshold,
        )
        .map_err(|e| InspectionError::opencv("Canny edge detection", e))?;

        let mut contours = Vector::<VectorOfPoint>::new();
        imgproc::find_contours_def(
            &edges,
            &mut contours,
            imgproc::RETR_EXTERNAL,
            imgproc::CHAIN_APPROX_SIMPLE,
        )
        .map_err(|e| InspectionError::opencv("contour extraction", e))?;

        let mut best: Option<opencv::core::Rect> = None;
        for contour in contours.iter() {
            let perimeter = imgproc::arc_length(&contour, true)
                .map_err(|e| InspectionError::opencv("perimeter calculation", e))?;
            let epsilon = perimeter * self.config.poly_approx_epsilon;

            let mut approx = VectorOfPoint::new();
            imgproc::approx_poly_dp(&contour, &mut approx, epsilon, true)
                .map_err(|e| InspectionError::opencv("polygon approximation", e))?;

            if approx.len() != QUAD_VERTEX_COUNT {
                continue;
            }

            let rect = imgproc::bounding_rect(&approx)
                .map_err(|e| InspectionError::opencv("bounding rectangle", e))?;

            // Strict comparison keeps the first-enumerated contour on ties
            if best.map_or(true, |b| rect.area() > b.area()) {
                best = Some(rect);
            }
        }

        Ok(best.map(SheetRegion::from))
    }
}
