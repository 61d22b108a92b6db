//! Integration tests for the complete frame inspection pipeline
//!
//! These tests validate the end-to-end workflow on synthetic frames:
//! - Sheet boundary detection and dimension reporting
//! - Hole detection and per-hole classification
//! - Absence handling (no sheet / no holes is not an error)
//! - Idempotence across repeated runs on the identical frame

use opencv::core::{Mat, Point, Rect, Scalar, CV_8UC3};
use opencv::imgproc;
use opencv::prelude::*;

use sheetscan::{inspect_frame, FrameProcessor, HoleCategory, InspectionError};

/// Background gray level for synthetic workbench frames
const BACKGROUND: f64 = 40.0;

fn workbench_frame(rows: i32, cols: i32) -> Mat {
    Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, Scalar::all(BACKGROUND)).unwrap()
}

fn draw_sheet(frame: &mut Mat, rect: Rect) {
    imgproc::rectangle(
        frame,
        rect,
        Scalar::all(255.0),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )
    .unwrap();
}

fn draw_disc(frame: &mut Mat, center: Point, radius: i32, color: Scalar) {
    imgproc::circle(
        frame,
        center,
        radius,
        color,
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )
    .unwrap();
}

/// The standard end-to-end scenario: a 640x480 frame with one 400x300
/// sheet, one gray-filled (anodized) hole and one sharp red (normal) hole
fn scenario_frame() -> Mat {
    let mut frame = workbench_frame(480, 640);
    draw_sheet(&mut frame, Rect::new(100, 80, 400, 300));
    // Gray-filled test pattern: light, desaturated center
    draw_disc(
        &mut frame,
        Point::new(150, 150),
        20,
        Scalar::new(200.0, 200.0, 195.0, 0.0),
    );
    // Sharp-edged saturated disc: fails the neutral test, sparse edges
    draw_disc(
        &mut frame,
        Point::new(400, 300),
        15,
        Scalar::new(0.0, 0.0, 180.0, 0.0),
    );
    frame
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_scenario_detects_sheet_and_both_holes() {
    let result = inspect_frame(&scenario_frame()).unwrap();

    let sheet = result.sheet.expect("sheet should be detected");
    assert!((sheet.width - 400).abs() <= 5, "sheet width: {}", sheet.width);
    assert!(
        (sheet.height - 300).abs() <= 5,
        "sheet height: {}",
        sheet.height
    );

    assert_eq!(result.holes.len(), 2, "both holes should be detected");

    // Output order is the transform's; match holes by position
    let near = |x: i32, y: i32| {
        result
            .holes
            .iter()
            .find(|c| (c.hole.center.x - x).abs() <= 2 && (c.hole.center.y - y).abs() <= 2)
            .unwrap_or_else(|| panic!("no hole near ({}, {})", x, y))
    };

    let anodized = near(150, 150);
    assert_eq!(anodized.category, HoleCategory::Anodized);
    assert!((anodized.hole.radius - 20).abs() <= 3);

    let normal = near(400, 300);
    assert_eq!(normal.category, HoleCategory::Normal);
    assert!((normal.hole.radius - 15).abs() <= 3);
}

#[test]
fn test_scenario_indices_and_items_follow_detection_order() {
    let result = inspect_frame(&scenario_frame()).unwrap();

    for (i, classified) in result.holes.iter().enumerate() {
        assert_eq!(classified.hole.index, i);
        let label = classified.label();
        assert!(label.ends_with(&(i + 1).to_string()));
    }

    // One sheet item plus hole + counterbore per detection
    let items = result.items();
    assert_eq!(items.len(), 1 + result.holes.len() * 2);
}

#[test]
fn test_reprocessing_identical_frame_is_idempotent() {
    let frame = scenario_frame();
    let processor = FrameProcessor::new();

    let first = processor.process(&frame).unwrap();
    let second = processor.process(&frame).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_fresh_processor_matches_reused_processor() {
    let frame = scenario_frame();

    let reused = FrameProcessor::new().process(&frame).unwrap();
    let fresh = inspect_frame(&frame).unwrap();

    assert_eq!(reused, fresh);
}

// ============================================================================
// Absence handling
// ============================================================================

#[test]
fn test_featureless_frame_is_an_empty_result_not_an_error() {
    let frame = workbench_frame(480, 640);
    let result = inspect_frame(&frame).unwrap();

    assert_eq!(result.sheet, None);
    assert!(result.holes.is_empty());
}

#[test]
fn test_holes_without_sheet_are_still_reported() {
    let mut frame = workbench_frame(480, 640);
    draw_disc(
        &mut frame,
        Point::new(320, 240),
        25,
        Scalar::new(200.0, 200.0, 200.0, 0.0),
    );

    let result = inspect_frame(&frame).unwrap();
    assert_eq!(result.sheet, None);
    assert!(!result.holes.is_empty());
}

#[test]
fn test_sheet_without_holes_is_reported_alone() {
    let mut frame = workbench_frame(480, 640);
    draw_sheet(&mut frame, Rect::new(100, 80, 400, 300));

    let result = inspect_frame(&frame).unwrap();
    assert!(result.sheet.is_some());
    assert!(result.holes.is_empty());
}

// ============================================================================
// Precondition violations
// ============================================================================

#[test]
fn test_empty_frame_fails_fast() {
    let frame = Mat::default();
    assert!(matches!(
        inspect_frame(&frame),
        Err(InspectionError::InvalidFrame { .. })
    ));
}

#[test]
fn test_grayscale_frame_fails_fast() {
    let frame = Mat::new_rows_cols_with_default(
        480,
        640,
        opencv::core::CV_8UC1,
        Scalar::all(BACKGROUND),
    )
    .unwrap();
    assert!(matches!(
        inspect_frame(&frame),
        Err(InspectionError::InvalidFrame { .. })
    ));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_result_round_trips_through_json() {
    let result = inspect_frame(&scenario_frame()).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let deserialized: sheetscan::DetectionResult = serde_json::from_str(&json).unwrap();

    assert_eq!(result, deserialized);
}
