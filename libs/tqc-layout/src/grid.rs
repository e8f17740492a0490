//! # Coordinate System
//!
//! Converts integer lattice indices into render-space positions.
//!
//! A lattice index `[i, j, k]` is scaled by the half pitch and its first and
//! third components are swapped: the logical row axis becomes render `z` and
//! the logical column axis becomes render `x`.

use crate::error::{GeometryError, SpecValidationError};
use config::constants::{LayoutConfig, MAX_LATTICE_INDEX};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tqc_spec::{Axis, LatticeIndex};

/// A position in render space.
///
/// # Example
///
/// ```rust
/// use config::constants::LayoutConfig;
/// use tqc_layout::grid::to_grid;
///
/// let point = to_grid([1, 2, 3], &LayoutConfig::default());
/// assert_eq!(point.to_array(), [7.5, 5.0, 2.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridPoint(pub DVec3);

/// Converts a lattice index to a render position.
pub fn to_grid(index: LatticeIndex, config: &LayoutConfig) -> GridPoint {
    GridPoint::from_lattice(index.map(|c| c as f64), config)
}

/// Accepts a row or column index whose magnitude is within
/// [`MAX_LATTICE_INDEX`].
pub fn bounded_index(value: i64) -> Result<i64, SpecValidationError> {
    if value.checked_abs().is_some_and(|v| v <= MAX_LATTICE_INDEX) {
        Ok(value)
    } else {
        Err(SpecValidationError::IndexOutOfRange {
            value,
            limit: MAX_LATTICE_INDEX,
        })
    }
}

impl GridPoint {
    pub const ORIGIN: GridPoint = GridPoint(DVec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Scales fractional lattice coordinates and swaps the first and third
    /// components.
    pub fn from_lattice(index: [f64; 3], config: &LayoutConfig) -> Self {
        let [i, j, k] = index;
        Self::new(k * config.space(), j * config.space(), i * config.space())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }

    pub fn component(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    /// Returns a copy moved by `amount` along `axis`.
    pub fn translated(self, axis: Axis, amount: f64) -> Self {
        let mut moved = self.0;
        moved[axis.index()] += amount;
        Self(moved)
    }

    /// Returns a copy with the `axis` component replaced.
    pub fn with_component(self, axis: Axis, value: f64) -> Self {
        let mut moved = self.0;
        moved[axis.index()] = value;
        Self(moved)
    }

    pub fn offset(self, delta: DVec3) -> Self {
        Self(self.0 + delta)
    }

    pub fn midpoint(self, other: GridPoint) -> Self {
        Self((self.0 + other.0) / 2.0)
    }

    /// The unique axis along which `self` and `other` differ.
    ///
    /// # Errors
    ///
    /// [`GeometryError::CoincidentEndpoints`] when no axis differs and
    /// [`GeometryError::NotAxisAligned`] when more than one does.
    pub fn separation_axis(self, other: GridPoint) -> Result<Axis, GeometryError> {
        let mut differing = Axis::ALL
            .into_iter()
            .filter(|axis| self.component(*axis) != other.component(*axis));
        match (differing.next(), differing.next()) {
            (Some(axis), None) => Ok(axis),
            (None, _) => Err(GeometryError::CoincidentEndpoints { a: self, b: other }),
            (Some(_), Some(_)) => Err(GeometryError::NotAxisAligned { a: self, b: other }),
        }
    }

    /// Largest per-axis distance to `other`.
    pub fn chebyshev_distance(self, other: GridPoint) -> f64 {
        (self.0 - other.0).abs().max_element()
    }

    /// Orders by `z`, then `y`, then `x`.
    pub fn canonical_cmp(&self, other: &GridPoint) -> Ordering {
        self.z()
            .total_cmp(&other.z())
            .then_with(|| self.y().total_cmp(&other.y()))
            .then_with(|| self.x().total_cmp(&other.x()))
    }
}

impl From<DVec3> for GridPoint {
    fn from(value: DVec3) -> Self {
        Self(value)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
