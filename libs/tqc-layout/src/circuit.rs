//! # Circuit
//!
//! Aggregate of every primitive built for one description. Each kind keeps
//! its own insertion-ordered collection; a single traversal visits them in
//! a fixed order so renderers always see the same sequence.

use crate::bit_line::BitLine;
use crate::braid::BraidingPath;
use crate::injector::Injector;
use crate::primitive::{BoxShape, Cube, Edge, Geometry};
use crate::render::{Outline, RecordCollector, RecordKind, RenderRecord, Renderer};
use config::constants::LayoutConfig;
use serde::Serialize;
use std::fmt;

/// Built primitives, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Circuit {
    cubes: Vec<Cube>,
    edges: Vec<Edge>,
    aerial_cubes: Vec<Cube>,
    aerial_edges: Vec<Edge>,
    injectors: Vec<Injector>,
    bit_lines: Vec<BitLine>,
    braidings: Vec<BraidingPath>,
    hadamards: Vec<BoxShape>,
    modules: Vec<BoxShape>,
    outline: Option<Outline>,
}

impl Circuit {
    /// Creates an empty circuit that outlines its records when the config
    /// asks for it.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            outline: config.show_outlines().then_some(Outline {
                color: config.colors().outline,
                width: config.outline_width(),
            }),
            ..Self::default()
        }
    }

    pub fn add_cube(&mut self, cube: Cube) {
        self.cubes.push(cube);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn add_aerial_cube(&mut self, cube: Cube) {
        self.aerial_cubes.push(cube);
    }

    pub fn add_aerial_edge(&mut self, edge: Edge) {
        self.aerial_edges.push(edge);
    }

    pub fn add_injector(&mut self, injector: Injector) {
        self.injectors.push(injector);
    }

    pub fn add_bit_line(&mut self, bit_line: BitLine) {
        self.bit_lines.push(bit_line);
    }

    pub fn add_braiding(&mut self, braiding: BraidingPath) {
        self.braidings.push(braiding);
    }

    pub fn add_hadamard(&mut self, hadamard: BoxShape) {
        self.hadamards.push(hadamard);
    }

    pub fn add_module(&mut self, module: BoxShape) {
        self.modules.push(module);
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn aerial_cubes(&self) -> &[Cube] {
        &self.aerial_cubes
    }

    pub fn aerial_edges(&self) -> &[Edge] {
        &self.aerial_edges
    }

    pub fn injectors(&self) -> &[Injector] {
        &self.injectors
    }

    pub fn bit_lines(&self) -> &[BitLine] {
        &self.bit_lines
    }

    pub fn braidings(&self) -> &[BraidingPath] {
        &self.braidings
    }

    pub fn hadamards(&self) -> &[BoxShape] {
        &self.hadamards
    }

    pub fn modules(&self) -> &[BoxShape] {
        &self.modules
    }

    pub fn outline(&self) -> Option<Outline> {
        self.outline
    }

    /// Visits every primitive in render order: cubes, edges, aerial cubes,
    /// aerial edges, injectors, bit lines, braidings, Hadamard blocks and
    /// modules.
    pub fn for_each_geometry(&self, mut visit: impl FnMut(&dyn Geometry)) {
        self.cubes.iter().for_each(|g| visit(g));
        self.edges.iter().for_each(|g| visit(g));
        self.aerial_cubes.iter().for_each(|g| visit(g));
        self.aerial_edges.iter().for_each(|g| visit(g));
        for injector in &self.injectors {
            injector.cubes.iter().for_each(|g| visit(g));
            injector.cones.iter().for_each(|g| visit(g));
        }
        for line in &self.bit_lines {
            line.lower.iter().chain(&line.upper).for_each(|g| visit(g));
        }
        for braid in &self.braidings {
            braid.bits.iter().for_each(|g| visit(g));
            braid.bridges.iter().for_each(|g| visit(g));
            braid.edges.iter().for_each(|g| visit(g));
        }
        self.hadamards.iter().for_each(|g| visit(g));
        self.modules.iter().for_each(|g| visit(g));
    }

    /// Hands every record to `renderer` in render order.
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let outline = self.outline;
        self.for_each_geometry(|geometry| renderer.render(&geometry.to_record(outline)));
    }

    /// All records in render order.
    pub fn records(&self) -> Vec<RenderRecord> {
        let mut collector = RecordCollector::default();
        self.apply(&mut collector);
        collector.records
    }

    pub fn summary(&self) -> CircuitSummary {
        let mut summary = CircuitSummary::default();
        self.for_each_geometry(|geometry| match geometry.record_kind() {
            RecordKind::Cube => summary.cubes += 1,
            RecordKind::Edge => summary.edges += 1,
            RecordKind::Pyramid => summary.pyramids += 1,
            RecordKind::Box => summary.boxes += 1,
        });
        summary.injectors = self.injectors.len();
        summary.bit_lines = self.bit_lines.len();
        summary.braidings = self.braidings.len();
        summary
    }

    pub fn is_empty(&self) -> bool {
        self.summary().total() == 0
    }
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Record counts per kind, plus entity counts of the composite kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CircuitSummary {
    pub cubes: usize,
    pub edges: usize,
    pub pyramids: usize,
    pub boxes: usize,
    pub injectors: usize,
    pub bit_lines: usize,
    pub braidings: usize,
}

impl CircuitSummary {
    /// Number of records a renderer receives.
    pub fn total(&self) -> usize {
        self.cubes + self.edges + self.pyramids + self.boxes
    }
}

impl fmt::Display for CircuitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records ({} cubes, {} edges, {} pyramids, {} boxes)",
            self.total(),
            self.cubes,
            self.edges,
            self.pyramids,
            self.boxes
        )
    }
}
