//! # Error Types
//!
//! Error types for layout construction. All errors are explicit and carry
//! the values that caused them.
//!
//! ## Error Policy
//!
//! - NO guessing: an edge whose endpoints do not differ along exactly one
//!   axis is rejected, never repaired
//! - Fail fast: the first rejected entity aborts the circuit
//! - Errors name the section and index of the offending entity

use crate::grid::GridPoint;
use thiserror::Error;
use tqc_spec::SpecError;

// =============================================================================
// GEOMETRY ERRORS
// =============================================================================

/// A primitive cannot be derived from the supplied points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Both endpoints are the same point.
    #[error("endpoints {a} and {b} coincide")]
    CoincidentEndpoints { a: GridPoint, b: GridPoint },

    /// The endpoints differ along more than one axis.
    #[error("endpoints {a} and {b} differ along more than one axis")]
    NotAxisAligned { a: GridPoint, b: GridPoint },

    /// Injector vertices are too close to fit two cubes and two cones.
    #[error("injector between {a} and {b} is too short (distance {distance})")]
    InjectorTooShort {
        a: GridPoint,
        b: GridPoint,
        distance: f64,
    },
}

// =============================================================================
// SPEC VALIDATION ERRORS
// =============================================================================

/// An entity of the description is well-formed JSON but cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecValidationError {
    /// A braid without targets has no direction.
    #[error("braid on control {control} at column {column} has no targets")]
    EmptyTargets { control: i64, column: i64 },

    /// The control row is listed among its own targets.
    #[error("braid control {control} is also one of its targets")]
    ControlIsTarget { control: i64 },

    /// Targets lie on both sides of the control row.
    #[error("braid targets {targets:?} lie on both sides of control {control}")]
    TargetsStraddleControl { control: i64, targets: Vec<i64> },

    /// A target cannot be reached from the control in whole interval steps.
    #[error("braid target {target} is not a multiple of {interval} rows from control {control}")]
    TargetOffLattice {
        control: i64,
        target: i64,
        interval: i64,
    },

    /// A row or column index too large to lay out.
    #[error("index {value} exceeds the lattice bound of {limit}")]
    IndexOutOfRange { value: i64, limit: i64 },

    /// A bit line range whose minimum exceeds its maximum.
    #[error("bit line on row {row} has inverted range [{min}, {max}]")]
    InvertedRange { row: i64, min: i64, max: i64 },
}

// =============================================================================
// LAYOUT ERROR
// =============================================================================

/// Error returned by the circuit factory.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Spec validation error: {0}")]
    SpecValidation(#[from] SpecValidationError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Wraps an error with the location of the entity that caused it.
    #[error("{section}[{index}]: {source}")]
    Entity {
        section: &'static str,
        index: usize,
        #[source]
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    /// Attaches the section name and entity index.
    pub fn in_entity(self, section: &'static str, index: usize) -> Self {
        Self::Entity {
            section,
            index,
            source: Box::new(self),
        }
    }

    /// Strips entity context and returns the underlying error.
    pub fn root(&self) -> &LayoutError {
        match self {
            LayoutError::Entity { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

// =============================================================================
// TESTS
// =============================================================================
