//! # Circuit Description Schema
//!
//! serde model of a circuit description. Every top-level section is
//! optional and defaults to empty. Integers are lattice indices, not render
//! positions; conversion happens in the layout engine.

use crate::error::SpecError;
use crate::types::{Axis, Color, LatticeIndex, PrimitiveType, VisualOverride};
use serde::{Deserialize, Serialize};

// =============================================================================
// CIRCUIT SPEC
// =============================================================================

/// Root of a circuit description. Read-only input to the layout factory.
///
/// # Example
///
/// ```rust
/// use tqc_spec::CircuitSpec;
///
/// let spec = CircuitSpec::from_json(r#"{"cubes": [{"pos": [0, 0, 0], "type": "primal"}]}"#).unwrap();
/// assert_eq!(spec.cubes.len(), 1);
/// assert!(spec.edges.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitSpec {
    pub logical_qubits: Vec<LogicalQubitSpec>,
    pub cubes: Vec<CubeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub aerial_cubes: Vec<LatticeIndex>,
    pub aerial_edges: Vec<AerialEdgeSpec>,
    pub bit_lines: Vec<BitLineSpec>,
    pub injectors: Vec<InjectorSpec>,
    pub braidings: Vec<BraidingSpec>,
    pub hadamards: Vec<HadamardSpec>,
    pub modules: Vec<ModuleSpec>,
}

impl CircuitSpec {
    /// Decodes a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decodes a description from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SpecError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Harvests the `(control, column)` pair of every braid, in description
    /// order. Bit lines leave a gap at each of these.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tqc_spec::{CircuitSpec, ControlBit};
    ///
    /// let spec = CircuitSpec::from_json(
    ///     r#"{"braidings": [{"control": 2, "targets": [4], "column": 5}]}"#,
    /// ).unwrap();
    /// assert_eq!(spec.control_bits(), vec![ControlBit { control: 2, column: 5 }]);
    /// ```
    pub fn control_bits(&self) -> Vec<ControlBit> {
        self.braidings
            .iter()
            .map(|braiding| ControlBit {
                control: braiding.control,
                column: braiding.column,
            })
            .collect()
    }

    /// True when no section contains any entity.
    pub fn is_empty(&self) -> bool {
        self.logical_qubits.is_empty()
            && self.cubes.is_empty()
            && self.edges.is_empty()
            && self.aerial_cubes.is_empty()
            && self.aerial_edges.is_empty()
            && self.bit_lines.is_empty()
            && self.injectors.is_empty()
            && self.braidings.is_empty()
            && self.hadamards.is_empty()
            && self.modules.is_empty()
    }
}

/// Attachment point of a braid on its control bit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlBit {
    pub control: i64,
    pub column: i64,
}

/// Identifier of a logical qubit or module; descriptions use both numbers
/// and names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Name(String),
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Name(name) => f.write_str(name),
        }
    }
}

// =============================================================================
// LOGICAL QUBITS
// =============================================================================

/// A logical qubit: polyline blocks plus the pins and caps that terminate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalQubitSpec {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(rename = "type")]
    pub kind: PrimitiveType,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub injectors: Vec<InjectorRef>,
    #[serde(default)]
    pub caps: Vec<InjectorRef>,
}

/// One entry of a logical qubit's `blocks` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Block {
    /// Vertices chained into cubes joined by edges.
    Chain(Vec<LatticeIndex>),
    /// Visual override applied to every chain of the qubit.
    Visual { visual: VisualOverride },
    /// An aerial edge between two vertices.
    Aerial { vertices: [LatticeIndex; 2] },
}

/// A pin or cap inside a logical qubit: either a bare vertex pair or a
/// descriptor with an optional visual override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InjectorRef {
    Pair([LatticeIndex; 2]),
    Detailed {
        vertices: [LatticeIndex; 2],
        #[serde(default)]
        visual: Option<VisualOverride>,
    },
}

impl InjectorRef {
    pub fn vertices(&self) -> &[LatticeIndex; 2] {
        match self {
            InjectorRef::Pair(vertices) => vertices,
            InjectorRef::Detailed { vertices, .. } => vertices,
        }
    }

    pub fn visual(&self) -> Option<&VisualOverride> {
        match self {
            InjectorRef::Pair(_) => None,
            InjectorRef::Detailed { visual, .. } => visual.as_ref(),
        }
    }
}

// =============================================================================
// FREESTANDING PRIMITIVES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeSpec {
    pub pos: LatticeIndex,
    #[serde(rename = "type")]
    pub kind: PrimitiveType,
    #[serde(default)]
    pub visual: Option<VisualOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub pos1: LatticeIndex,
    pub pos2: LatticeIndex,
    #[serde(rename = "type")]
    pub kind: PrimitiveType,
    #[serde(default)]
    pub visual: Option<VisualOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerialEdgeSpec {
    pub pos1: LatticeIndex,
    pub pos2: LatticeIndex,
}

// =============================================================================
// BIT LINES
// =============================================================================

/// A bit line on `row` spanning `range` (inclusive) at the given layer.
/// `bridges`, `pins` and `caps` list columns where a vertical connector,
/// pin or cap joins the two rails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitLineSpec {
    pub row: i64,
    pub range: [i64; 2],
    #[serde(default)]
    pub layer: i64,
    #[serde(default)]
    pub bridges: Vec<i64>,
    #[serde(default)]
    pub pins: Vec<i64>,
    #[serde(default)]
    pub caps: Vec<i64>,
}

// =============================================================================
// INJECTORS
// =============================================================================

/// Whether a freestanding injector is a live pin or a terminating cap.
///
/// Any category other than `"pin"` is a cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InjectorCategory {
    Pin,
    #[default]
    Cap,
}

impl From<String> for InjectorCategory {
    fn from(value: String) -> Self {
        if value == "pin" {
            InjectorCategory::Pin
        } else {
            InjectorCategory::Cap
        }
    }
}

impl From<InjectorCategory> for String {
    fn from(value: InjectorCategory) -> Self {
        match value {
            InjectorCategory::Pin => "pin".to_string(),
            InjectorCategory::Cap => "cap".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectorSpec {
    pub pos1: LatticeIndex,
    pub pos2: LatticeIndex,
    #[serde(rename = "type")]
    pub kind: PrimitiveType,
    #[serde(default)]
    pub category: InjectorCategory,
    #[serde(default)]
    pub visual: Option<VisualOverride>,
}

// =============================================================================
// BRAIDINGS
// =============================================================================

/// How a braid is anchored to its control bit line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BraidStyle {
    /// Two bridges one half pitch either side of the column; the loop turns
    /// two pitches wide.
    #[default]
    DoubleBridge,
    /// A single bridge on the column; the loop turns one pitch wide.
    SingleBridge,
}

/// A braid of the defect on row `control` around the `targets` rows at
/// `column`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BraidingSpec {
    pub control: i64,
    pub targets: Vec<i64>,
    pub column: i64,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub style: BraidStyle,
}

// =============================================================================
// ANNOTATIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HadamardSpec {
    pub pos: LatticeIndex,
    #[serde(default)]
    pub visual: Option<VisualOverride>,
}

/// A labelled bounding box. `rotation` permutes the size components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub pos: LatticeIndex,
    pub size: LatticeIndex,
    #[serde(default)]
    pub rotation: Option<[Axis; 3]>,
    #[serde(default)]
    pub visual: Option<VisualOverride>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ModuleSpec {
    /// Size permutation, defaulting to the identity.
    pub fn rotation_or_identity(&self) -> [Axis; 3] {
        self.rotation.unwrap_or(Axis::ALL)
    }
}
