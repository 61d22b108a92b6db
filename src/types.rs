//! Data model for per-frame detection results
//!
//! Every value here is created fresh during one `FrameProcessor::process`
//! call and carries no state across frames. The hole `index` is the
//! detection order within its frame only; it is not a stable identity, and
//! any accumulation across frames is the caller's concern.

use opencv::core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate in frame space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2D {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point2D> for Point {
    fn from(p: Point2D) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Axis-aligned bounding rectangle of the detected sheet outline
///
/// Invariants: `width > 0`, `height > 0`, fully inside the frame the sheet
/// was detected in. Absence of a sheet is represented by `Option::None` at
/// the call site, never by a degenerate rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<Rect> for SheetRegion {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl From<SheetRegion> for Rect {
    fn from(r: SheetRegion) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

/// One detected circular hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    /// Circle center in frame pixel coordinates
    pub center: Point2D,
    /// Circle radius in pixels, always positive
    pub radius: i32,
    /// 0-based position in the detector's output for this frame
    pub index: usize,
}

impl Hole {
    /// Hole diameter in pixels
    pub fn diameter(&self) -> i32 {
        self.radius * 2
    }
}

/// Surface-finish/geometry category of a hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleCategory {
    /// Plain sharp-walled drilled hole
    Normal,
    /// Chamfered/countersunk hole with a beveled shading ring
    Countersunk,
    /// Surface-treated hole reflecting as light, desaturated gray
    Anodized,
}

impl HoleCategory {
    /// Single-letter code used in on-screen labels ("H3", "A1", "Z2")
    pub fn label_letter(&self) -> &'static str {
        match self {
            HoleCategory::Normal => "H",
            HoleCategory::Countersunk => "A",
            HoleCategory::Anodized => "Z",
        }
    }
}

/// A hole together with its assigned category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedHole {
    pub hole: Hole,
    pub category: HoleCategory,
}

impl ClassifiedHole {
    /// Display label: category letter plus 1-based index within the frame
    pub fn label(&self) -> String {
        format!("{}{}", self.category.label_letter(), self.hole.index + 1)
    }
}

/// One record in the flat per-frame detection list consumed by a
/// presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionItem {
    /// Sheet outline dimensions in pixels
    Sheet { width: i32, height: i32 },
    /// A detected hole with its diameter
    Hole { position: Point2D, diameter: i32 },
    /// Classification record for the hole at the same position
    Counterbore {
        position: Point2D,
        category: HoleCategory,
    },
}

/// Complete result of processing one frame
///
/// Holes appear in detection order; their `index` fields match their
/// position in the vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DetectionResult {
    /// Detected sheet outline, absent when no quadrilateral qualifies
    pub sheet: Option<SheetRegion>,
    /// Classified holes in detection order
    pub holes: Vec<ClassifiedHole>,
}

impl DetectionResult {
    /// Flatten into the item list a presentation layer records or displays:
    /// at most one sheet record, then a hole record and a counterbore
    /// record per detected hole, in detection order.
    pub fn items(&self) -> Vec<DetectionItem> {
        let mut items = Vec::with_capacity(1 + self.holes.len() * 2);
        if let Some(sheet) = self.sheet {
            items.push(DetectionItem::Sheet {
                width: sheet.width,
                height: sheet.height,
            });
        }
        for classified in &self.holes {
            items.push(DetectionItem::Hole {
                position: classified.hole.center,
                diameter: classified.hole.diameter(),
            });
            items.push(DetectionItem::Counterbore {
                position: classified.hole.center,
                category: classified.category,
            });
        }
        items
    }
}
