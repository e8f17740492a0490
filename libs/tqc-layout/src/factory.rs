//! # Circuit Factory
//!
//! Walks a [`CircuitSpec`] section by section and accumulates the built
//! primitives into a [`Circuit`].
//!
//! ## Section Order
//!
//! ```text
//! logical_qubits → cubes → edges → bit_lines → injectors → braidings
//!                → hadamards → aerial_cubes → aerial_edges → modules
//! ```
//!
//! Braid `(control, column)` pairs are harvested from the description before
//! any bit line is built. Braid paths are independent of each other and are
//! built in parallel; results are collected in description order.
//!
//! Construction is fail-fast: the first entity that cannot be laid out
//! aborts the whole circuit with a [`LayoutError::Entity`] naming it.

use crate::bit_line::{BitLine, Connectors};
use crate::braid::BraidingPath;
use crate::circuit::Circuit;
use crate::error::{LayoutError, LayoutResult};
use crate::grid::{to_grid, GridPoint};
use crate::injector::Injector;
use crate::module::{hadamard_box, module_box, module_label};
use crate::primitive::{Cube, Edge, Visual};
use config::constants::LayoutConfig;
use rayon::prelude::*;
use tqc_spec::{
    Block, CircuitSpec, ControlBit, InjectorCategory, InjectorRef, LatticeIndex,
    LogicalQubitSpec, PrimitiveType,
};
use tracing::{debug, info};

/// Builds a [`Circuit`] from a description.
///
/// # Example
///
/// ```rust
/// use config::constants::LayoutConfig;
/// use tqc_layout::CircuitFactory;
/// use tqc_spec::CircuitSpec;
///
/// let spec = CircuitSpec::from_json(r#"{
///     "cubes": [{"pos": [0, 0, 0], "type": "primal"}],
///     "edges": [{"pos1": [0, 0, 0], "pos2": [0, 0, 2], "type": "primal"}]
/// }"#).unwrap();
/// let config = LayoutConfig::default();
/// let circuit = CircuitFactory::new(&spec, &config).create().unwrap();
/// assert_eq!(circuit.cubes().len(), 1);
/// assert_eq!(circuit.edges().len(), 1);
/// ```
pub struct CircuitFactory<'a> {
    spec: &'a CircuitSpec,
    config: &'a LayoutConfig,
}

impl<'a> CircuitFactory<'a> {
    pub fn new(spec: &'a CircuitSpec, config: &'a LayoutConfig) -> Self {
        Self { spec, config }
    }

    /// Builds every section in order.
    ///
    /// # Errors
    ///
    /// The first [`LayoutError`] raised by an entity, wrapped with the
    /// entity's section and index.
    pub fn create(&self) -> LayoutResult<Circuit> {
        let mut circuit = Circuit::new(self.config);

        self.create_logical_qubits(&mut circuit)?;
        self.create_cubes(&mut circuit);
        self.create_edges(&mut circuit)?;
        self.create_bit_lines(&mut circuit)?;
        self.create_injectors(&mut circuit)?;
        self.create_braidings(&mut circuit)?;
        self.create_hadamards(&mut circuit);
        self.create_aerial_cubes(&mut circuit);
        self.create_aerial_edges(&mut circuit)?;
        self.create_modules(&mut circuit);

        info!(summary = %circuit.summary(), "circuit laid out");
        Ok(circuit)
    }

    fn grid(&self, index: LatticeIndex) -> GridPoint {
        to_grid(index, self.config)
    }

    // =========================================================================
    // LOGICAL QUBITS
    // =========================================================================

    fn create_logical_qubits(&self, circuit: &mut Circuit) -> LayoutResult<()> {
        debug!(count = self.spec.logical_qubits.len(), "logical qubits");
        for (index, qubit) in self.spec.logical_qubits.iter().enumerate() {
            self.create_logical_qubit(qubit, circuit)
                .map_err(|e| e.in_entity("logical_qubits", index))?;
        }
        Ok(())
    }

    fn create_logical_qubit(
        &self,
        qubit: &LogicalQubitSpec,
        circuit: &mut Circuit,
    ) -> LayoutResult<()> {
        let config = self.config;
        let kind = qubit.kind;

        // The last visual block applies to every chain of the qubit.
        let visual = qubit.blocks.iter().rev().find_map(|block| match block {
            Block::Visual { visual } => Some(visual),
            _ => None,
        });
        let visual = Visual::solid().overridden(visual);

        for block in &qubit.blocks {
            match block {
                Block::Chain(vertices) => {
                    let points: Vec<GridPoint> = vertices.iter().map(|&v| self.grid(v)).collect();
                    for &point in &points {
                        circuit.add_cube(Cube::new(point, kind, &visual, config));
                    }
                    for pair in points.windows(2) {
                        circuit.add_edge(Edge::new(pair[0], pair[1], kind, &visual, config)?);
                    }
                }
                Block::Aerial { vertices: [a, b] } => {
                    circuit.add_aerial_edge(self.aerial_edge(*a, *b)?);
                }
                Block::Visual { .. } => {}
            }
        }

        for pin in &qubit.injectors {
            let (a, b) = self.injector_points(pin);
            circuit.add_injector(Injector::pin(a, b, kind, pin.visual(), config)?);
        }
        for cap in &qubit.caps {
            let (a, b) = self.injector_points(cap);
            circuit.add_injector(Injector::cap(a, b, kind, cap.visual(), config)?);
        }
        Ok(())
    }

    fn injector_points(&self, injector: &InjectorRef) -> (GridPoint, GridPoint) {
        let [a, b] = *injector.vertices();
        (self.grid(a), self.grid(b))
    }

    // =========================================================================
    // FREESTANDING PRIMITIVES
    // =========================================================================

    fn create_cubes(&self, circuit: &mut Circuit) {
        debug!(count = self.spec.cubes.len(), "cubes");
        for cube in &self.spec.cubes {
            let visual = Visual::solid().overridden(cube.visual.as_ref());
            circuit.add_cube(Cube::new(self.grid(cube.pos), cube.kind, &visual, self.config));
        }
    }

    fn create_edges(&self, circuit: &mut Circuit) -> LayoutResult<()> {
        debug!(count = self.spec.edges.len(), "edges");
        for (index, edge) in self.spec.edges.iter().enumerate() {
            let visual = Visual::solid().overridden(edge.visual.as_ref());
            let built = Edge::new(
                self.grid(edge.pos1),
                self.grid(edge.pos2),
                edge.kind,
                &visual,
                self.config,
            )
            .map_err(|e| LayoutError::from(e).in_entity("edges", index))?;
            circuit.add_edge(built);
        }
        Ok(())
    }

    fn create_aerial_cubes(&self, circuit: &mut Circuit) {
        debug!(count = self.spec.aerial_cubes.len(), "aerial cubes");
        for &pos in &self.spec.aerial_cubes {
            circuit.add_aerial_cube(Cube::new(
                self.grid(pos),
                PrimitiveType::Aerial,
                &Visual::aerial(),
                self.config,
            ));
        }
    }

    fn create_aerial_edges(&self, circuit: &mut Circuit) -> LayoutResult<()> {
        debug!(count = self.spec.aerial_edges.len(), "aerial edges");
        for (index, edge) in self.spec.aerial_edges.iter().enumerate() {
            let built = self
                .aerial_edge(edge.pos1, edge.pos2)
                .map_err(|e| e.in_entity("aerial_edges", index))?;
            circuit.add_aerial_edge(built);
        }
        Ok(())
    }

    fn aerial_edge(&self, a: LatticeIndex, b: LatticeIndex) -> LayoutResult<Edge> {
        Ok(Edge::new(
            self.grid(a),
            self.grid(b),
            PrimitiveType::Aerial,
            &Visual::aerial(),
            self.config,
        )?)
    }

    // =========================================================================
    // BIT LINES AND INJECTORS
    // =========================================================================

    fn create_bit_lines(&self, circuit: &mut Circuit) -> LayoutResult<()> {
        debug!(count = self.spec.bit_lines.len(), "bit lines");
        let control_bits: Vec<ControlBit> = self.spec.control_bits();
        for (index, spec) in self.spec.bit_lines.iter().enumerate() {
            let line = BitLine::build(spec, &control_bits, self.config)
                .map_err(|e| e.in_entity("bit_lines", index))?;
            let connectors = Connectors::build(spec, self.config)
                .map_err(|e| LayoutError::from(e).in_entity("bit_lines", index))?;

            circuit.add_bit_line(line);
            connectors
                .bridges
                .into_iter()
                .for_each(|edge| circuit.add_edge(edge));
            connectors
                .injectors
                .into_iter()
                .for_each(|injector| circuit.add_injector(injector));
        }
        Ok(())
    }

    fn create_injectors(&self, circuit: &mut Circuit) -> LayoutResult<()> {
        debug!(count = self.spec.injectors.len(), "injectors");
        for (index, spec) in self.spec.injectors.iter().enumerate() {
            let (a, b) = (self.grid(spec.pos1), self.grid(spec.pos2));
            let visual = spec.visual.as_ref();
            let built = match spec.category {
                InjectorCategory::Pin => Injector::pin(a, b, spec.kind, visual, self.config),
                InjectorCategory::Cap => Injector::cap(a, b, spec.kind, visual, self.config),
            }
            .map_err(|e| LayoutError::from(e).in_entity("injectors", index))?;
            circuit.add_injector(built);
        }
        Ok(())
    }

    // =========================================================================
    // BRAIDINGS
    // =========================================================================

    fn create_braidings(&self, circuit: &mut Circuit) -> LayoutResult<()> {
        debug!(count = self.spec.braidings.len(), "braidings");
        let built: Vec<LayoutResult<BraidingPath>> = self
            .spec
            .braidings
            .par_iter()
            .map(|spec| BraidingPath::build(spec, self.config))
            .collect();

        for (index, braid) in built.into_iter().enumerate() {
            circuit.add_braiding(braid.map_err(|e| e.in_entity("braidings", index))?);
        }
        Ok(())
    }

    // =========================================================================
    // ANNOTATIONS
    // =========================================================================

    fn create_hadamards(&self, circuit: &mut Circuit) {
        debug!(count = self.spec.hadamards.len(), "hadamards");
        for hadamard in &self.spec.hadamards {
            circuit.add_hadamard(hadamard_box(
                self.grid(hadamard.pos),
                hadamard.visual.as_ref(),
                self.config,
            ));
        }
    }

    fn create_modules(&self, circuit: &mut Circuit) {
        debug!(count = self.spec.modules.len(), "modules");
        for module in &self.spec.modules {
            let visual = Visual::module().overridden(module.visual.as_ref());
            let size = self.grid(module.size).0;
            circuit.add_module(module_box(
                self.grid(module.pos),
                size,
                module.rotation_or_identity(),
                &visual,
                module_label(module.id.as_ref(), module.description.as_deref()),
                self.config,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, SpecValidationError};
    use crate::injector::InjectorKind;
    use pretty_assertions::assert_eq;
    use tqc_spec::Color;

    fn build(json: &str) -> LayoutResult<Circuit> {
        let spec = CircuitSpec::from_json(json).unwrap();
        CircuitFactory::new(&spec, &LayoutConfig::default()).create()
    }

    #[test]
    fn test_empty_description_builds_empty_circuit() {
        let circuit = build("{}").unwrap();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_logical_qubit_chain_emits_cube_per_vertex() {
        let circuit = build(
            r#"{"logical_qubits": [{
                "id": 0,
                "type": "primal",
                "blocks": [[[0, 0, 0], [0, 0, 2], [2, 0, 2]]]
            }]}"#,
        )
        .unwrap();
        assert_eq!(circuit.cubes().len(), 3);
        assert_eq!(circuit.edges().len(), 2);
        assert_eq!(circuit.cubes()[0].position, GridPoint::ORIGIN);
        assert_eq!(circuit.edges()[1].position, GridPoint::new(5.0, 0.0, 2.5));
    }

    #[test]
    fn test_logical_qubit_visual_block_applies_to_all_chains() {
        let circuit = build(
            r#"{"logical_qubits": [{
                "type": "dual",
                "blocks": [
                    [[0, 0, 0], [0, 0, 2]],
                    {"visual": {"color": 16711680}},
                    [[4, 0, 0], [4, 0, 2]]
                ]
            }]}"#,
        )
        .unwrap();
        assert!(circuit
            .cubes()
            .iter()
            .all(|cube| cube.material.color == Color(0xff0000)));
    }

    #[test]
    fn test_logical_qubit_aerial_block_and_terminators() {
        let circuit = build(
            r#"{"logical_qubits": [{
                "type": "primal",
                "blocks": [{"vertices": [[0, 0, 0], [0, 2, 0]]}],
                "injectors": [[[0, 0, 0], [0, 2, 0]]],
                "caps": [{"vertices": [[2, 0, 0], [2, 2, 0]], "visual": {"opacity": 0.8}}]
            }]}"#,
        )
        .unwrap();
        assert_eq!(circuit.aerial_edges().len(), 1);
        assert_eq!(circuit.aerial_edges()[0].material.kind, PrimitiveType::Aerial);

        let kinds: Vec<_> = circuit.injectors().iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InjectorKind::Pin, InjectorKind::Cap]);
        assert_eq!(circuit.injectors()[1].cubes[0].material.opacity, 0.8);
        assert!(circuit.injectors()[1].cubes[0].material.ghost);
    }

    #[test]
    fn test_bit_line_gap_follows_braid() {
        let circuit = build(
            r#"{
                "bit_lines": [{"row": 2, "range": [0, 10], "bridges": [3]}],
                "braidings": [{"control": 2, "targets": [4], "column": 5}]
            }"#,
        )
        .unwrap();
        let line = &circuit.bit_lines()[0];
        assert_eq!(line.edges().count(), 8);
        assert_eq!(circuit.edges().len(), 1);
        assert_eq!(circuit.braidings().len(), 1);
    }

    #[test]
    fn test_injector_category() {
        let circuit = build(
            r#"{"injectors": [
                {"pos1": [0, 0, 0], "pos2": [0, 2, 0], "type": "primal", "category": "pin"},
                {"pos1": [0, 0, 2], "pos2": [0, 2, 2], "type": "dual", "category": "other"}
            ]}"#,
        )
        .unwrap();
        let kinds: Vec<_> = circuit.injectors().iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InjectorKind::Pin, InjectorKind::Cap]);
    }

    #[test]
    fn test_aerial_sections() {
        let circuit = build(
            r#"{
                "aerial_cubes": [[0, 0, 0]],
                "aerial_edges": [{"pos1": [0, 0, 0], "pos2": [2, 0, 0]}]
            }"#,
        )
        .unwrap();
        let cube = &circuit.aerial_cubes()[0];
        assert_eq!(cube.material.color, Color(0x008b8b));
        assert_eq!(cube.material.opacity, 0.5);
        assert!(cube.material.ghost);
        assert_eq!(circuit.aerial_edges()[0].position, GridPoint::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn test_modules_and_hadamards() {
        let circuit = build(
            r#"{
                "hadamards": [{"pos": [2, 0, 2]}],
                "modules": [{"id": "cnot", "pos": [0, 0, 0], "size": [2, 2, 4]}]
            }"#,
        )
        .unwrap();
        assert_eq!(circuit.hadamards()[0].position, GridPoint::new(5.0, 0.0, 5.0));

        let module = &circuit.modules()[0];
        assert_eq!(module.size.to_array(), [11.0, 6.0, 6.0]);
        assert_eq!(module.label.as_deref(), Some("cnot"));
    }

    #[test]
    fn test_error_names_offending_entity() {
        let err = build(
            r#"{"edges": [
                {"pos1": [0, 0, 0], "pos2": [0, 0, 2], "type": "primal"},
                {"pos1": [0, 0, 0], "pos2": [2, 0, 2], "type": "primal"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Entity {
                section: "edges",
                index: 1,
                ..
            }
        ));
        assert!(matches!(
            err.root(),
            LayoutError::Geometry(GeometryError::NotAxisAligned { .. })
        ));
    }

    #[test]
    fn test_braid_error_is_reported_in_order() {
        let err = build(
            r#"{"braidings": [
                {"control": 0, "targets": [2], "column": 0},
                {"control": 0, "targets": [], "column": 2},
                {"control": 0, "targets": [0], "column": 4}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Entity {
                section: "braidings",
                index: 1,
                ..
            }
        ));
        assert!(matches!(
            err.root(),
            LayoutError::SpecValidation(SpecValidationError::EmptyTargets { .. })
        ));
    }
}
