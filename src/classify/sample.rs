//! Single-pixel color sampling
//!
//! Leaf utility reading one pixel's first three channel values from a
//! frame. Out-of-bounds coordinates are a precondition violation and fail
//! fast; the classifier only passes centers that originate from hole
//! detection on the same frame, so they are always in bounds.

use opencv::core::{Mat, Point, Vec3b, Vec4b};
use opencv::prelude::*;

use crate::error::{InspectionError, Result};

/// The first three channel values of one pixel, in the frame's native
/// channel order (BGR for this pipeline; a BGRA frame's alpha is ignored)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSample {
    pub channels: [u8; 3],
}

impl ChannelSample {
    /// True when the sample reads as light and desaturated: every channel
    /// above `floor` and every pairwise channel difference below
    /// `delta_ceiling`. Symmetric in the channels, so the result does not
    /// depend on their order.
    pub fn is_light_neutral(&self, floor: u8, delta_ceiling: u8) -> bool {
        let [c0, c1, c2] = self.channels;
        c0 > floor
            && c1 > floor
            && c2 > floor
            && c0.abs_diff(c1) < delta_ceiling
            && c1.abs_diff(c2) < delta_ceiling
            && c0.abs_diff(c2) < delta_ceiling
    }
}

/// Read the pixel at `point` from a 3- or 4-channel frame
///
/// # Errors
///
/// `PointOutOfBounds` when the point lies outside the frame,
/// `InvalidFrame` when the frame is empty or has fewer than 3 channels.
pub fn sample_at(frame: &Mat, point: Point) -> Result<ChannelSample> {
    if frame.empty() {
        return Err(InspectionError::invalid_frame("frame is empty"));
    }

    let (width, height) = (frame.cols(), frame.rows());
    if point.x < 0 || point.y < 0 || point.x >= width || point.y >= height {
        return Err(InspectionError::PointOutOfBounds {
            x: point.x,
            y: point.y,
            width,
            height,
        });
    }

    match frame.channels() {
        3 => {
            let px = frame
                .at_2d::<Vec3b>(point.y, point.x)
                .map_err(|e| InspectionError::opencv("pixel access", e))?;
            Ok(ChannelSample {
                channels: [px[0], px[1], px[2]],
            })
        }
        4 => {
            let px = frame
                .at_2d::<Vec4b>(point.y, point.x)
                .map_err(|e| InspectionError::opencv("pixel access", e))?;
            Ok(ChannelSample {
                channels: [px[0], px[1], px[2]],
            })
        }
        n => Err(InspectionError::invalid_frame(format!(
            "expected at least 3 channels, got {}",
            n
        ))),
    }
}
