//! Error types for the sheetscan library

use thiserror::Error;

/// Result type alias for sheetscan operations
pub type Result<T> = std::result::Result<T, InspectionError>;

/// Error types for frame inspection operations
///
/// Detection algorithms that find nothing do NOT produce errors: an absent
/// sheet is `None` and an empty hole list is an empty `Vec`. Errors are
/// reserved for malformed input (precondition violations) and for failures
/// inside the underlying OpenCV routines.
#[derive(Error, Debug)]
pub enum InspectionError {
    /// Frame rejected before processing (empty, zero-sized, or too few channels)
    #[error("Invalid frame: {reason}")]
    InvalidFrame { reason: String },

    /// A pixel sample was requested outside the frame bounds
    #[error("Sample point ({x}, {y}) outside frame bounds {width}x{height}")]
    PointOutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// OpenCV operation failed
    #[error("OpenCV error: {operation}")]
    OpenCvError {
        operation: String,
        #[source]
        source: opencv::Error,
    },
}

impl InspectionError {
    /// Create a frame-rejection error with context
    pub fn invalid_frame(reason: impl Into<String>) -> Self {
        Self::InvalidFrame {
            reason: reason.into(),
        }
    }

    /// Create an OpenCV error with context
    pub fn opencv(operation: impl Into<String>, source: opencv::Error) -> Self {
        Self::OpenCvError {
            operation: operation.into(),
            source,
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            InspectionError::InvalidFrame { .. } => {
                "The camera delivered an unusable frame. Please check the camera feed.".to_string()
            }
            InspectionError::PointOutOfBounds { .. } => {
                "Inspection sampled outside the frame. Please report this as a bug.".to_string()
            }
            InspectionError::OpenCvError { .. } => {
                "Frame analysis failed. Please try repositioning the camera.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_frame_message() {
        let err = InspectionError::invalid_frame("zero width");
        assert_eq!(err.to_string(), "Invalid frame: zero width");
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = InspectionError::PointOutOfBounds {
            x: 700,
            y: 10,
            width: 640,
            height: 480,
        };
        assert!(err.to_string().contains("(700, 10)"));
        assert!(err.to_string().contains("640x480"));
    }

    #[test]
    fn test_user_messages_nonempty() {
        let err = InspectionError::invalid_frame("empty");
        assert!(!err.user_message().is_empty());
    }
}
