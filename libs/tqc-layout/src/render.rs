//! # Render Contract
//!
//! The narrow interface through which an external renderer consumes a
//! [`Circuit`](crate::circuit::Circuit). The layout engine makes no
//! assumption about how records become display objects.

use serde::{Deserialize, Serialize};
use tqc_spec::PrimitiveType;

/// Which base shape a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Cube,
    Edge,
    Pyramid,
    Box,
}

/// Dimensions of a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned box of the given extent, centered on the position.
    Box { size: [f64; 3] },
    /// Cone with a polygonal base, centered on the position.
    Cone {
        radius: f64,
        height: f64,
        radial_segments: u32,
    },
}

/// Outline drawn around boxes (bounding lines) or over cones (wireframe).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: u32,
    pub width: f64,
}

/// One positioned, typed primitive ready for materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRecord {
    pub kind: RecordKind,
    #[serde(rename = "type")]
    pub primitive_type: PrimitiveType,
    pub position: [f64; 3],
    #[serde(flatten)]
    pub shape: Shape,
    pub color: u32,
    pub opacity: f64,
    /// Whether the material honours `opacity`.
    pub transparent: bool,
    /// Euler angles (XYZ order) in radians.
    pub orientation: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Receives records in deterministic traversal order.
pub trait Renderer {
    fn render(&mut self, record: &RenderRecord);
}

/// Renderer that keeps every record; used for snapshots and export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordCollector {
    pub records: Vec<RenderRecord>,
}

impl Renderer for RecordCollector {
    fn render(&mut self, record: &RenderRecord) {
        self.records.push(record.clone());
    }
}

impl<F> Renderer for F
where
    F: FnMut(&RenderRecord),
{
    fn render(&mut self, record: &RenderRecord) {
        self(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RenderRecord {
        RenderRecord {
            kind: RecordKind::Cube,
            primitive_type: PrimitiveType::Primal,
            position: [0.0, 0.0, 0.0],
            shape: Shape::Box {
                size: [1.0, 1.0, 1.0],
            },
            color: 0xffffff,
            opacity: 1.0,
            transparent: false,
            orientation: [0.0, 0.0, 0.0],
            outline: None,
            label: None,
        }
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut collector = RecordCollector::default();
        let mut second = record();
        second.kind = RecordKind::Edge;
        collector.render(&record());
        collector.render(&second);
        assert_eq!(collector.records.len(), 2);
        assert_eq!(collector.records[1].kind, RecordKind::Edge);
    }

    #[test]
    fn test_closure_is_a_renderer() {
        let mut count = 0;
        let mut counter = |_: &RenderRecord| count += 1;
        counter.render(&record());
        counter.render(&record());
        assert_eq!(count, 2);
    }

    #[test]
    fn test_record_serializes_flat_shape() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["shape"], "box");
        assert_eq!(json["size"], serde_json::json!([1.0, 1.0, 1.0]));
        assert_eq!(json["type"], "primal");
        assert!(json.get("outline").is_none());
    }
}
