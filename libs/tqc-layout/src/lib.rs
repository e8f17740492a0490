//! # TQC Layout
//!
//! Deterministic layout engine for braided topological quantum circuits.
//! Turns a [`CircuitSpec`] into positioned, typed 3D primitives.
//!
//! ## Architecture
//!
//! ```text
//! tqc-spec (CircuitSpec) → CircuitFactory → Circuit → Renderer
//! ```
//!
//! ## Geometry
//!
//! - **Grid**: lattice indices scaled by the half pitch, first and third
//!   axes swapped
//! - **Primitives**: cubes, edges, cones and free boxes
//! - **Injectors**: pins and caps terminating defects
//! - **Braids**: closed dual loops routed on two rails
//! - **Bit lines**: parallel primal rails with gaps at braid columns
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::LayoutConfig;
//! use tqc_layout::layout_json;
//!
//! let circuit = layout_json(
//!     r#"{"braidings": [{"control": 0, "targets": [2], "column": 2}]}"#,
//!     &LayoutConfig::default(),
//! ).unwrap();
//! let records = circuit.records();
//! assert_eq!(records.len(), 10 + 2 + 10);
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod bit_line;
pub mod braid;
pub mod circuit;
pub mod error;
pub mod factory;
pub mod grid;
pub mod injector;
pub mod module;
pub mod primitive;
pub mod render;

pub use bit_line::{BitLine, Connectors};
pub use braid::{BraidRequest, BraidingPath, Rail};
pub use circuit::{Circuit, CircuitSummary};
pub use error::{GeometryError, LayoutError, LayoutResult, SpecValidationError};
pub use factory::CircuitFactory;
pub use grid::{to_grid, GridPoint};
pub use injector::{Injector, InjectorKind};
pub use primitive::{BoxShape, Cube, Edge, Geometry, Material, Primitive, Pyramid, Visual};
pub use render::{RecordCollector, RecordKind, RenderRecord, Renderer, Shape};

use config::constants::LayoutConfig;
use tqc_spec::CircuitSpec;

/// Lays out a decoded description.
///
/// # Errors
///
/// The first entity that cannot be laid out, see [`CircuitFactory::create`].
pub fn layout(spec: &CircuitSpec, config: &LayoutConfig) -> LayoutResult<Circuit> {
    CircuitFactory::new(spec, config).create()
}

/// Decodes a JSON description and lays it out.
///
/// # Errors
///
/// [`LayoutError::Spec`] when the text is not a valid description, otherwise
/// as [`layout`].
pub fn layout_json(text: &str, config: &LayoutConfig) -> LayoutResult<Circuit> {
    let spec = CircuitSpec::from_json(text)?;
    layout(&spec, config)
}
