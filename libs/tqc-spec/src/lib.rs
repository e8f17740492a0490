//! # TQC Spec
//!
//! Declarative input schema for topological quantum circuit layouts.
//!
//! ## Architecture
//!
//! ```text
//! JSON → tqc-spec (CircuitSpec) → tqc-layout (Circuit) → renderer
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tqc_spec::{Block, CircuitSpec, PrimitiveType};
//!
//! let spec = CircuitSpec::from_json(r#"{
//!     "logical_qubits": [
//!         {"id": 0, "type": "primal", "blocks": [[[0, 0, 0], [0, 0, 2]]]}
//!     ]
//! }"#).unwrap();
//! let qubit = &spec.logical_qubits[0];
//! assert_eq!(qubit.kind, PrimitiveType::Primal);
//! assert!(matches!(qubit.blocks[0], Block::Chain(_)));
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{SpecError, SpecResult};
pub use schema::{
    AerialEdgeSpec, BitLineSpec, Block, BraidStyle, BraidingSpec, CircuitSpec, ControlBit,
    CubeSpec, EdgeSpec, EntityId, HadamardSpec, InjectorCategory, InjectorRef, InjectorSpec,
    LogicalQubitSpec, ModuleSpec,
};
pub use types::{Axis, Color, LatticeIndex, PrimitiveType, VisualOverride};

#[cfg(test)]
mod tests;
