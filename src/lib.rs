//! # sheetscan
//!
//! A Rust crate for inspecting sheet metal from live camera frames.
//!
//! This library analyzes one frame at a time to:
//! - Locate the sheet boundary (largest quadrilateral contour)
//! - Locate circular drilled holes (Hough circle transform)
//! - Classify each hole as plain, countersunk, or anodized from its
//!   center color and local edge density
//!
//! The pipeline is stateless between frames: every call returns a fresh
//! [`DetectionResult`], and any accumulation across frames belongs to the
//! caller. Camera acquisition and on-screen rendering are external
//! collaborators; [`overlay`] offers optional annotation helpers for
//! hosts that want the standard preview style.
//!
//! ## Example
//!
//! ```rust,no_run
//! use opencv::imgcodecs;
//! use sheetscan::inspect_frame;
//!
//! let frame = imgcodecs::imread("workpiece.png", imgcodecs::IMREAD_COLOR)?;
//! let result = inspect_frame(&frame)?;
//!
//! if let Some(sheet) = result.sheet {
//!     println!("sheet: {} x {} px", sheet.width, sheet.height);
//! }
//! for classified in &result.holes {
//!     println!("{}: d={} px", classified.label(), classified.hole.diameter());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use opencv::core::Mat;

pub mod classify;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod frame;
pub mod overlay;
pub mod pipeline;
pub mod types;

pub use classify::{EdgeDensityAnalyzer, HoleClassifier};
pub use config::{
    ClassificationConfig, HoleDetectionConfig, InspectionConfig, SheetDetectionConfig,
};
pub use detection::{HoleDetector, SheetDetector};
pub use error::{InspectionError, Result};
pub use pipeline::FrameProcessor;
pub use types::{
    ClassifiedHole, DetectionItem, DetectionResult, Hole, HoleCategory, Point2D, SheetRegion,
};

/// Inspect a single camera frame with the baseline calibration
///
/// This is the main entry point for one-off use. Hosts processing a
/// continuous feed should construct a [`FrameProcessor`] once and call
/// [`FrameProcessor::process`] per frame to reuse the configured
/// detectors.
///
/// # Errors
///
/// Returns [`InspectionError`] only for malformed input (empty or
/// zero-sized frame, missing color channels) or an OpenCV failure; a
/// frame with no sheet or holes in view produces an ordinary empty
/// result.
pub fn inspect_frame(frame: &Mat) -> Result<DetectionResult> {
    FrameProcessor::new().process(frame)
}
