//! Hole classification
//!
//! Assigns each detected hole a surface-finish/geometry category from two
//! cheap signals: the color at the hole center and the edge density of
//! the surrounding region.

pub mod edges;
pub mod sample;

pub use edges::EdgeDensityAnalyzer;
pub use sample::{sample_at, ChannelSample};

use opencv::core::{Mat, Point, Rect};
use opencv::prelude::*;

use crate::config::ClassificationConfig;
use crate::error::Result;
use crate::types::{Hole, HoleCategory};

/// Hole classifier combining color sampling and local edge density
///
/// Stateless per call: classification of one hole never depends on other
/// holes or on prior frames.
pub struct HoleClassifier {
    config: ClassificationConfig,
    edge_analyzer: EdgeDensityAnalyzer,
}

impl Default for HoleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HoleClassifier {
    /// Create a classifier with the baseline calibration
    pub fn new() -> Self {
        Self::with_config(ClassificationConfig::default())
    }

    /// Create a classifier with custom parameters
    pub fn with_config(config: ClassificationConfig) -> Self {
        let edge_analyzer = EdgeDensityAnalyzer::from_config(&config);
        Self {
            config,
            edge_analyzer,
        }
    }

    /// Classify one hole against the original color frame
    ///
    /// Rules are evaluated in strict priority order; the first match wins:
    ///
    /// 1. the center sample reads light and desaturated: anodized metal
    ///    reflects as near-gray regardless of ambient hue cast;
    /// 2. the square region `[center - r, center + r]` in both axes
    ///    (clamped to frame bounds) exceeds the edge-count threshold: a
    ///    beveled rim renders as a dense shading ring;
    /// 3. otherwise the hole is a plain drilled hole.
    pub fn classify(&self, hole: &Hole, frame: &Mat) -> Result<HoleCategory> {
        let center: Point = hole.center.into();

        let sample = sample_at(frame, center)?;
        if sample.is_light_neutral(
            self.config.channel_floor,
            self.config.pairwise_delta_ceiling,
        ) {
            return Ok(HoleCategory::Anodized);
        }

        let region = sampling_region(center, hole.radius, frame.cols(), frame.rows());
        let edge_count = self.edge_analyzer.count_edge_pixels(frame, region)?;
        if edge_count > self.config.edge_count_threshold {
            return Ok(HoleCategory::Countersunk);
        }

        Ok(HoleCategory::Normal)
    }
}

/// Square sampling region around a hole, clamped to the frame and to at
/// least a 1x1 area so degenerate geometry at a frame corner stays valid
fn sampling_region(center: Point, radius: i32, cols: i32, rows: i32) -> Rect {
    let x0 = (center.x - radius).max(0);
    let y0 = (center.y - radius).max(0);
    let x1 = (center.x + radius).min(cols);
    let y1 = (center.y + radius).min(rows);
    Rect::new(x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
}
