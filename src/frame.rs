//! Frame validation and shared derivations
//!
//! Frames arrive from an external camera collaborator as BGR (or BGRA)
//! `Mat`s. The channel order must stay fixed across calls: the classifier
//! thresholds are tuned against it. The pipeline derives grayscale copies
//! and sub-region crops from the borrowed frame; all derived buffers are
//! owned per call and dropped on return.

use opencv::core::Mat;
use opencv::imgproc;
use opencv::prelude::*;

use crate::error::{InspectionError, Result};

/// Reject malformed frames before any processing
///
/// Zero-sized frames or frames without color information indicate a bug in
/// the caller or an upstream acquisition fault, and fail fast rather than
/// being silently tolerated.
pub fn validate(frame: &Mat) -> Result<()> {
    if frame.empty() {
        return Err(InspectionError::invalid_frame("frame is empty"));
    }
    if frame.cols() == 0 || frame.rows() == 0 {
        return Err(InspectionError::invalid_frame(format!(
            "frame has zero dimension: {}x{}",
            frame.cols(),
            frame.rows()
        )));
    }
    if frame.channels() < 3 {
        return Err(InspectionError::invalid_frame(format!(
            "classification needs color information, got {} channel(s)",
            frame.channels()
        )));
    }
    Ok(())
}

/// Derive a single-channel grayscale copy of a frame
///
/// Accepts BGR, BGRA, or already-grayscale input so detectors can be fed
/// either the original frame or a shared grayscale derivative.
pub fn to_grayscale(frame: &Mat) -> Result<Mat> {
    if frame.empty() {
        return Err(InspectionError::invalid_frame("frame is empty"));
    }
    match frame.channels() {
        1 => Ok(frame.clone()),
        3 => {
            let mut gray = Mat::default();
            imgproc::cvt_color_def(frame, &mut gray, imgproc::COLOR_BGR2GRAY)
                .map_err(|e| InspectionError::opencv("grayscale conversion", e))?;
            Ok(gray)
        }
        4 => {
            let mut gray = Mat::default();
            imgproc::cvt_color_def(frame, &mut gray, imgproc::COLOR_BGRA2GRAY)
                .map_err(|e| InspectionError::opencv("grayscale conversion", e))?;
            Ok(gray)
        }
        n => Err(InspectionError::invalid_frame(format!(
            "unsupported channel count: {}",
            n
        ))),
    }
}
