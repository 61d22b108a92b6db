//! Frame processing orchestration
//!
//! Runs the full per-frame pipeline: sheet detection, hole detection, and
//! per-hole classification. Each call returns a freshly-owned
//! `DetectionResult`; no detection state survives between calls, so
//! re-processing the identical frame yields the identical result.

use log::debug;
use opencv::core::Mat;

use crate::classify::HoleClassifier;
use crate::config::InspectionConfig;
use crate::detection::{HoleDetector, SheetDetector};
use crate::error::Result;
use crate::frame::{to_grayscale, validate};
use crate::types::{ClassifiedHole, DetectionResult};

/// Per-frame processor orchestrating detection and classification
///
/// Single-threaded and synchronous: one frame at a time, no background
/// work, no cross-call state. Intermediate buffers (grayscale copy, edge
/// maps, region crops) are owned per call and released on return, so peak
/// memory stays bounded by a small multiple of one frame regardless of
/// how many frames have been processed. The host is responsible for
/// dropping or queueing frames that arrive while a call is in flight.
pub struct FrameProcessor {
    sheet_detector: SheetDetector,
    hole_detector: HoleDetector,
    classifier: HoleClassifier,
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameProcessor {
    /// Create a processor with the baseline calibration
    pub fn new() -> Self {
        Self::with_config(InspectionConfig::default())
    }

    /// Create a processor with custom parameters
    pub fn with_config(config: InspectionConfig) -> Self {
        Self {
            sheet_detector: SheetDetector::with_config(config.sheet_detection),
            hole_detector: HoleDetector::with_config(config.hole_detection),
            classifier: HoleClassifier::with_config(config.classification),
        }
    }

    /// Process one camera frame
    ///
    /// The frame must be a non-empty color image (at least 3 channels) in
    /// the pipeline's fixed channel order. The grayscale derivative is
    /// computed once and shared by both detectors; classification runs
    /// against the original color frame, in detection order.
    ///
    /// # Errors
    ///
    /// Only malformed input fails: an empty or zero-sized frame, or one
    /// without color channels. "No sheet" and "no holes" are ordinary
    /// results, not errors.
    pub fn process(&self, frame: &Mat) -> Result<DetectionResult> {
        validate(frame)?;

        let gray = to_grayscale(frame)?;

        let sheet = self.sheet_detector.detect(&gray)?;
        match &sheet {
            Some(region) => debug!(
                "sheet detected: {}x{} px at ({}, {})",
                region.width, region.height, region.x, region.y
            ),
            None => debug!("no sheet in view"),
        }

        let holes = self.hole_detector.detect(&gray)?;
        debug!("{} hole(s) detected", holes.len());

        let mut classified = Vec::with_capacity(holes.len());
        for hole in holes {
            let category = self.classifier.classify(&hole, frame)?;
            debug!(
                "hole {} at ({}, {}) r={} classified {:?}",
                hole.index, hole.center.x, hole.center.y, hole.radius, category
            );
            classified.push(ClassifiedHole { hole, category });
        }

        Ok(DetectionResult {
            sheet,
            holes: classified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InspectionError;
    use opencv::core::{Scalar, CV_8UC1, CV_8UC3};
    use opencv::prelude::*;

    #[test]
    fn test_empty_frame_is_rejected() {
        let processor = FrameProcessor::new();
        let frame = Mat::default();
        assert!(matches!(
            processor.process(&frame),
            Err(InspectionError::InvalidFrame { .. })
        ));
    }

    #[test]
    fn test_grayscale_frame_is_rejected() {
        let processor = FrameProcessor::new();
        let frame =
            Mat::new_rows_cols_with_default(240, 320, CV_8UC1, Scalar::all(0.0)).unwrap();
        assert!(matches!(
            processor.process(&frame),
            Err(InspectionError::InvalidFrame { .. })
        ));
    }

    #[test]
    fn test_featureless_frame_yields_empty_result() {
        let processor = FrameProcessor::new();
        let frame =
            Mat::new_rows_cols_with_default(240, 320, CV_8UC3, Scalar::all(40.0)).unwrap();
        let result = processor.process(&frame).unwrap();
        assert_eq!(result.sheet, None);
        assert!(result.holes.is_empty());
        assert!(result.items().is_empty());
    }
}
