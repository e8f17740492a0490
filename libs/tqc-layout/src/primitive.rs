//! # Primitives
//!
//! The four base shapes emitted by the layout engine: unit cubes, edges
//! between two lattice sites, cones (square pyramids) and free boxes.
//!
//! Sizes are derived, never set independently, except for the unit cube and
//! explicit boxes (modules and Hadamard blocks).

use crate::error::GeometryError;
use crate::grid::GridPoint;
use crate::render::{Outline, RecordKind, RenderRecord, Shape};
use config::constants::{
    LayoutConfig, AERIAL_OPACITY, CAP_OPACITY, INJECTOR_OPACITY, MODULE_OPACITY, SOLID_OPACITY,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};
use tqc_spec::{Axis, Color, PrimitiveType, VisualOverride};

// =============================================================================
// VISUAL
// =============================================================================

/// Visual parameters before the type color is resolved. `color: None`
/// selects the type's default color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    pub color: Option<Color>,
    pub opacity: f64,
    pub ghost: bool,
}

impl Default for Visual {
    fn default() -> Self {
        Self::solid()
    }
}

impl Visual {
    /// Opaque, type-colored. Default for cubes, edges and Hadamard blocks.
    pub fn solid() -> Self {
        Self {
            color: None,
            opacity: SOLID_OPACITY,
            ghost: false,
        }
    }

    /// Translucent annotation of a planned but unrealized connection.
    pub fn aerial() -> Self {
        Self {
            color: None,
            opacity: AERIAL_OPACITY,
            ghost: true,
        }
    }

    /// Live defect endpoint in the pin color.
    pub fn pin(config: &LayoutConfig) -> Self {
        Self {
            color: Some(Color(config.colors().pin)),
            opacity: INJECTOR_OPACITY,
            ghost: false,
        }
    }

    /// Terminating boundary in the type color.
    pub fn cap() -> Self {
        Self {
            color: None,
            opacity: CAP_OPACITY,
            ghost: true,
        }
    }

    /// Translucent module bounding box.
    pub fn module() -> Self {
        Self {
            color: None,
            opacity: MODULE_OPACITY,
            ghost: true,
        }
    }

    /// Uses `color` unless it is absent or the sentinel.
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        if let Some(explicit) = color.and_then(Color::explicit) {
            self.color = Some(explicit);
        }
        self
    }

    /// Applies an override field by field; absent fields keep this value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tqc_layout::primitive::Visual;
    /// use tqc_spec::VisualOverride;
    ///
    /// let visual = Visual::aerial().overridden(Some(&VisualOverride {
    ///     opacity: Some(0.9),
    ///     ..VisualOverride::default()
    /// }));
    /// assert_eq!(visual.opacity, 0.9);
    /// assert!(visual.ghost);
    /// ```
    pub fn overridden(self, visual: Option<&VisualOverride>) -> Self {
        let Some(visual) = visual else {
            return self;
        };
        Self {
            opacity: visual.opacity.unwrap_or(self.opacity),
            ghost: visual.ghost.unwrap_or(self.ghost),
            ..self.with_color(visual.color)
        }
    }

    /// Resolves the type color.
    pub fn material(&self, kind: PrimitiveType, config: &LayoutConfig) -> Material {
        Material {
            kind,
            color: self
                .color
                .unwrap_or_else(|| kind.default_color(&config.colors())),
            opacity: self.opacity,
            ghost: self.ghost,
        }
    }
}

/// Resolved appearance of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub kind: PrimitiveType,
    pub color: Color,
    pub opacity: f64,
    /// Marks the material as transparent.
    pub ghost: bool,
}

// =============================================================================
// GEOMETRY CAPABILITY
// =============================================================================

/// Shared capability of every primitive: where it is, how big, how turned,
/// and how it looks.
pub trait Geometry {
    fn record_kind(&self) -> RecordKind;

    fn position(&self) -> GridPoint;

    fn shape(&self) -> Shape;

    fn material(&self) -> &Material;

    /// Euler angles (XYZ order) in radians.
    fn orientation(&self) -> DVec3 {
        DVec3::ZERO
    }

    fn label(&self) -> Option<&str> {
        None
    }

    fn to_record(&self, outline: Option<Outline>) -> RenderRecord {
        let material = self.material();
        RenderRecord {
            kind: self.record_kind(),
            primitive_type: material.kind,
            position: self.position().to_array(),
            shape: self.shape(),
            color: material.color.0,
            opacity: material.opacity,
            transparent: material.ghost,
            orientation: self.orientation().to_array(),
            outline,
            label: self.label().map(str::to_string),
        }
    }
}

// =============================================================================
// CUBE
// =============================================================================

/// Unit cube centered on a lattice site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub position: GridPoint,
    pub size: DVec3,
    pub material: Material,
}

impl Cube {
    pub fn new(
        position: GridPoint,
        kind: PrimitiveType,
        visual: &Visual,
        config: &LayoutConfig,
    ) -> Self {
        Self {
            position,
            size: DVec3::splat(config.scale()),
            material: visual.material(kind, config),
        }
    }
}

impl Geometry for Cube {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Cube
    }

    fn position(&self) -> GridPoint {
        self.position
    }

    fn shape(&self) -> Shape {
        Shape::Box {
            size: self.size.to_array(),
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// Bar joining two cubes that differ along exactly one axis.
///
/// Along that axis the size is `|Δ| - scale` so the bar stops at the cube
/// faces; the other two axes are one unit wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub position: GridPoint,
    pub size: DVec3,
    pub axis: Axis,
    pub material: Material,
}

/// Amount an edge is shortened along its axis. Fixed in lattice units, so
/// a scaled cube overlaps the edge ends rather than moving them.
const EDGE_INSET: f64 = 1.0;

impl Edge {
    /// Derives an edge from its endpoints.
    ///
    /// The edge runs `|Δ| - 1` along its axis and is `scale` thick on the
    /// other two.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] unless the endpoints differ along exactly
    /// one axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::LayoutConfig;
    /// use tqc_layout::grid::GridPoint;
    /// use tqc_layout::primitive::{Edge, Visual};
    /// use tqc_spec::PrimitiveType;
    ///
    /// let config = LayoutConfig::default();
    /// let edge = Edge::new(
    ///     GridPoint::new(0.0, 0.0, 0.0),
    ///     GridPoint::new(5.0, 0.0, 0.0),
    ///     PrimitiveType::Primal,
    ///     &Visual::solid(),
    ///     &config,
    /// ).unwrap();
    /// assert_eq!(edge.size.to_array(), [4.0, 1.0, 1.0]);
    /// assert_eq!(edge.position, GridPoint::new(2.5, 0.0, 0.0));
    /// ```
    pub fn new(
        a: GridPoint,
        b: GridPoint,
        kind: PrimitiveType,
        visual: &Visual,
        config: &LayoutConfig,
    ) -> Result<Self, GeometryError> {
        let axis = a.separation_axis(b)?;
        let mut size = DVec3::splat(config.scale());
        size[axis.index()] = (a.component(axis) - b.component(axis)).abs() - EDGE_INSET;
        Ok(Self {
            position: a.midpoint(b),
            size,
            axis,
            material: visual.material(kind, config),
        })
    }
}

impl Geometry for Edge {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Edge
    }

    fn position(&self) -> GridPoint {
        self.position
    }

    fn shape(&self) -> Shape {
        Shape::Box {
            size: self.size.to_array(),
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

// =============================================================================
// PYRAMID
// =============================================================================

/// Square pyramid (four-segment cone) whose apex points along `axis`.
///
/// The two cones of an injector are mirror images; the `reversed` one is
/// turned by π.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pyramid {
    pub position: GridPoint,
    pub radius: f64,
    pub height: f64,
    pub radial_segments: u32,
    pub axis: Axis,
    pub reversed: bool,
    pub material: Material,
}

impl Pyramid {
    pub fn new(
        position: GridPoint,
        height: f64,
        axis: Axis,
        reversed: bool,
        material: Material,
        config: &LayoutConfig,
    ) -> Self {
        Self {
            position,
            radius: config.scale() / SQRT_2,
            height,
            radial_segments: config.cone_radial_segments(),
            axis,
            reversed,
            material,
        }
    }
}

impl Geometry for Pyramid {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Pyramid
    }

    fn position(&self) -> GridPoint {
        self.position
    }

    fn shape(&self) -> Shape {
        Shape::Cone {
            radius: self.radius,
            height: self.height,
            radial_segments: self.radial_segments,
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }

    // The base mesh points along +y; the π/4 turn aligns the square base
    // with the lattice.
    fn orientation(&self) -> DVec3 {
        let r = if self.reversed { PI } else { 0.0 };
        match self.axis {
            Axis::X => DVec3::new(FRAC_PI_4, 0.0, FRAC_PI_2 - r),
            Axis::Y => DVec3::new(r + PI, FRAC_PI_4, 0.0),
            Axis::Z => DVec3::new(r - FRAC_PI_2, FRAC_PI_4, 0.0),
        }
    }
}

// =============================================================================
// BOX
// =============================================================================

/// Free box with explicit size; used for modules and Hadamard blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub position: GridPoint,
    pub size: DVec3,
    pub material: Material,
    pub label: Option<String>,
}

impl Geometry for BoxShape {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Box
    }

    fn position(&self) -> GridPoint {
        self.position
    }

    fn shape(&self) -> Shape {
        Shape::Box {
            size: self.size.to_array(),
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

// =============================================================================
// PRIMITIVE
// =============================================================================

/// Any base shape; bit line rails mix cubes and edges in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Cube(Cube),
    Edge(Edge),
    Pyramid(Pyramid),
    Box(BoxShape),
}

impl Primitive {
    fn geometry(&self) -> &dyn Geometry {
        match self {
            Primitive::Cube(cube) => cube,
            Primitive::Edge(edge) => edge,
            Primitive::Pyramid(pyramid) => pyramid,
            Primitive::Box(shape) => shape,
        }
    }

    pub fn as_cube(&self) -> Option<&Cube> {
        match self {
            Primitive::Cube(cube) => Some(cube),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Primitive::Edge(edge) => Some(edge),
            _ => None,
        }
    }
}

impl Geometry for Primitive {
    fn record_kind(&self) -> RecordKind {
        self.geometry().record_kind()
    }

    fn position(&self) -> GridPoint {
        self.geometry().position()
    }

    fn shape(&self) -> Shape {
        self.geometry().shape()
    }

    fn material(&self) -> &Material {
        self.geometry().material()
    }

    fn orientation(&self) -> DVec3 {
        self.geometry().orientation()
    }

    fn label(&self) -> Option<&str> {
        self.geometry().label()
    }
}

impl From<Cube> for Primitive {
    fn from(value: Cube) -> Self {
        Primitive::Cube(value)
    }
}

impl From<Edge> for Primitive {
    fn from(value: Edge) -> Self {
        Primitive::Edge(value)
    }
}

#[cfg(test)]
mod tests;
