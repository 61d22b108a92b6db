//! Detection overlay rendering
//!
//! Presentation glue that draws a `DetectionResult` onto a frame the way
//! the operator preview annotates it: sheet rectangle with dimensions,
//! hole circles with center marks and diameters, and a per-hole label of
//! category letter plus 1-based index. The core pipeline never calls this
//! module; it exists for hosts that want the standard annotation style.

use opencv::core::{Mat, Point, Scalar};
use opencv::imgproc;

use crate::error::{InspectionError, Result};
use crate::types::{DetectionResult, HoleCategory};

/// Sheet outline color (blue in BGR)
fn sheet_color() -> Scalar {
    Scalar::new(255.0, 0.0, 0.0, 0.0)
}

/// Caption color for dimension labels (green in BGR)
fn caption_color() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

/// Center-mark color (red in BGR)
fn center_mark_color() -> Scalar {
    Scalar::new(0.0, 0.0, 255.0, 0.0)
}

impl HoleCategory {
    /// Annotation color for this category, in BGR
    pub fn annotation_color(&self) -> Scalar {
        match self {
            HoleCategory::Anodized => Scalar::new(0.0, 0.0, 255.0, 0.0),
            HoleCategory::Countersunk => Scalar::new(0.0, 255.0, 0.0, 0.0),
            HoleCategory::Normal => Scalar::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

/// Draw sheet and hole annotations onto a frame in place
pub fn draw_detections(frame: &mut Mat, result: &DetectionResult) -> Result<()> {
    if let Some(sheet) = result.sheet {
        imgproc::rectangle(
            frame,
            sheet.into(),
            sheet_color(),
            3,
            imgproc::LINE_8,
            0,
        )
        .map_err(|e| InspectionError::opencv("sheet rectangle drawing", e))?;

        imgproc::put_text(
            frame,
            &format!("Sheet: {} x {} px", sheet.width, sheet.height),
            Point::new(sheet.x + 10, sheet.y + 10),
            imgproc::FONT_HERSHEY_SIMPLEX,
            1.0,
            caption_color(),
            2,
            imgproc::LINE_8,
            false,
        )
        .map_err(|e| InspectionError::opencv("sheet caption drawing", e))?;
    }

    for classified in &result.holes {
        let center: Point = classified.hole.center.into();
        let color = classified.category.annotation_color();

        imgproc::circle(
            frame,
            center,
            classified.hole.radius,
            color,
            2,
            imgproc::LINE_8,
            0,
        )
        .map_err(|e| InspectionError::opencv("hole circle drawing", e))?;

        imgproc::circle(frame, center, 3, center_mark_color(), 2, imgproc::LINE_8, 0)
            .map_err(|e| InspectionError::opencv("center mark drawing", e))?;

        imgproc::put_text(
            frame,
            &classified.label(),
            Point::new(center.x + 10, center.y + 10),
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.7,
            color,
            2,
            imgproc::LINE_8,
            false,
        )
        .map_err(|e| InspectionError::opencv("hole label drawing", e))?;

        imgproc::put_text(
            frame,
            &format!("D {} px", classified.hole.diameter()),
            Point::new(center.x + 10, center.y + 35),
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.7,
            caption_color(),
            2,
            imgproc::LINE_8,
            false,
        )
        .map_err(|e| InspectionError::opencv("diameter caption drawing", e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassifiedHole, Hole, Point2D, SheetRegion};
    use opencv::core::{self, CV_8UC3};
    use opencv::prelude::*;

    #[test]
    fn test_draw_marks_pixels() {
        let mut frame =
            Mat::new_rows_cols_with_default(480, 640, CV_8UC3, core::Scalar::all(0.0)).unwrap();

        let result = DetectionResult {
            sheet: Some(SheetRegion {
                x: 100,
                y: 80,
                width: 400,
                height: 300,
            }),
            holes: vec![ClassifiedHole {
                hole: Hole {
                    center: Point2D::new(200, 200),
                    radius: 20,
                    index: 0,
                },
                category: HoleCategory::Anodized,
            }],
        };

        draw_detections(&mut frame, &result).unwrap();

        let mut gray = Mat::default();
        imgproc::cvt_color_def(&frame, &mut gray, imgproc::COLOR_BGR2GRAY).unwrap();
        assert!(core::count_non_zero(&gray).unwrap() > 0);
    }

    #[test]
    fn test_empty_result_draws_nothing() {
        let mut frame =
            Mat::new_rows_cols_with_default(480, 640, CV_8UC3, core::Scalar::all(0.0)).unwrap();

        draw_detections(&mut frame, &DetectionResult::default()).unwrap();

        let mut gray = Mat::default();
        imgproc::cvt_color_def(&frame, &mut gray, imgproc::COLOR_BGR2GRAY).unwrap();
        assert_eq!(core::count_non_zero(&gray).unwrap(), 0);
    }

    #[test]
    fn test_category_colors_are_distinct() {
        let colors = [
            HoleCategory::Normal.annotation_color(),
            HoleCategory::Countersunk.annotation_color(),
            HoleCategory::Anodized.annotation_color(),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
