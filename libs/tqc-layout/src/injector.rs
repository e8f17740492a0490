//! # Injectors
//!
//! Defect terminators between two boundary vertices: two cubes inset one
//! unit from each vertex and two cones pointing at each other across the
//! gap. Pins mark live defect endpoints; caps mark terminated boundaries.
//! Both share one geometry and differ only in their default visual.

use crate::error::GeometryError;
use crate::grid::GridPoint;
use crate::primitive::{Cube, Pyramid, Visual};
use config::constants::LayoutConfig;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tqc_spec::{Axis, PrimitiveType, VisualOverride};

/// Pin or cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectorKind {
    Pin,
    Cap,
}

impl InjectorKind {
    pub fn default_visual(self, config: &LayoutConfig) -> Visual {
        match self {
            InjectorKind::Pin => Visual::pin(config),
            InjectorKind::Cap => Visual::cap(),
        }
    }
}

/// A built injector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injector {
    pub kind: InjectorKind,
    /// Endpoints sorted by `(z, y, x)`.
    pub vertices: [GridPoint; 2],
    pub axis: Axis,
    pub distance: f64,
    pub cubes: [Cube; 2],
    pub cones: [Pyramid; 2],
}

impl Injector {
    /// Builds a pin with the pin color unless overridden.
    pub fn pin(
        a: GridPoint,
        b: GridPoint,
        kind: PrimitiveType,
        visual: Option<&VisualOverride>,
        config: &LayoutConfig,
    ) -> Result<Self, GeometryError> {
        Self::new(InjectorKind::Pin, a, b, kind, visual, config)
    }

    /// Builds a translucent cap in the type color unless overridden.
    pub fn cap(
        a: GridPoint,
        b: GridPoint,
        kind: PrimitiveType,
        visual: Option<&VisualOverride>,
        config: &LayoutConfig,
    ) -> Result<Self, GeometryError> {
        Self::new(InjectorKind::Cap, a, b, kind, visual, config)
    }

    /// Builds an injector. The result does not depend on the order of `a`
    /// and `b`.
    ///
    /// # Errors
    ///
    /// [`GeometryError`] when the vertices are not axis aligned or are too
    /// close for the cones to have positive height.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::LayoutConfig;
    /// use tqc_layout::grid::GridPoint;
    /// use tqc_layout::injector::{Injector, InjectorKind};
    /// use tqc_spec::PrimitiveType;
    ///
    /// let config = LayoutConfig::default();
    /// let pin = Injector::new(
    ///     InjectorKind::Pin,
    ///     GridPoint::new(0.0, 5.0, 0.0),
    ///     GridPoint::new(0.0, 0.0, 0.0),
    ///     PrimitiveType::Primal,
    ///     None,
    ///     &config,
    /// ).unwrap();
    /// assert_eq!(pin.vertices[0], GridPoint::new(0.0, 0.0, 0.0));
    /// assert_eq!(pin.cubes[0].position, GridPoint::new(0.0, 1.0, 0.0));
    /// assert_eq!(pin.cubes[1].position, GridPoint::new(0.0, 4.0, 0.0));
    /// ```
    pub fn new(
        kind: InjectorKind,
        a: GridPoint,
        b: GridPoint,
        primitive_type: PrimitiveType,
        visual: Option<&VisualOverride>,
        config: &LayoutConfig,
    ) -> Result<Self, GeometryError> {
        let [low, high] = canonical_pair(a, b);
        let axis = low.separation_axis(high)?;
        let distance = low.chebyshev_distance(high);
        let unit = config.scale();

        let height = (distance - unit * 2.0 - 1.0) / 2.0;
        if height <= 0.0 {
            return Err(GeometryError::InjectorTooShort {
                a: low,
                b: high,
                distance,
            });
        }

        let material = kind
            .default_visual(config)
            .overridden(visual)
            .material(primitive_type, config);

        let cubes = [
            Cube {
                position: low.translated(axis, unit),
                size: DVec3::splat(unit),
                material,
            },
            Cube {
                position: high.translated(axis, -unit),
                size: DVec3::splat(unit),
                material,
            },
        ];

        // Cone centers sit midway between the inset cube face and the
        // injector midpoint.
        let offset = (distance * 0.5 - unit * 1.5) / 2.0 + unit * 1.5;
        let cones = [
            Pyramid::new(
                high.translated(axis, -offset),
                height,
                axis,
                false,
                material,
                config,
            ),
            Pyramid::new(
                low.translated(axis, offset),
                height,
                axis,
                true,
                material,
                config,
            ),
        ];

        Ok(Self {
            kind,
            vertices: [low, high],
            axis,
            distance,
            cubes,
            cones,
        })
    }
}

fn canonical_pair(a: GridPoint, b: GridPoint) -> [GridPoint; 2] {
    let mut pair = [a, b];
    pair.sort_by(GridPoint::canonical_cmp);
    pair
}
