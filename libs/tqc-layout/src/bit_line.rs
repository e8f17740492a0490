//! # Bit Lines
//!
//! A bit line is a pair of parallel primal rails on one row. Each rail is a
//! chain of cubes every `interval` columns joined by edges, except where a
//! braid attaches to the row: there the edge is left out so the braid's
//! bridges drop into the gap.
//!
//! ```text
//!   upper  ■──■──■  ■──■
//!   lower  ■──■──■  ■──■
//!                 ↑
//!           braid column
//! ```

use crate::error::{GeometryError, LayoutResult, SpecValidationError};
use crate::grid::{bounded_index, GridPoint};
use crate::injector::Injector;
use crate::primitive::{Cube, Edge, Primitive, Visual};
use config::constants::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tqc_spec::{BitLineSpec, ControlBit, PrimitiveType};

/// Rails and connectors of a bit line are always primal.
const BIT_LINE_TYPE: PrimitiveType = PrimitiveType::Primal;

/// A built bit line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitLine {
    pub row: i64,
    pub range: [i64; 2],
    pub layer: i64,
    /// Cubes and edges in emission order.
    pub lower: Vec<Primitive>,
    pub upper: Vec<Primitive>,
}

impl BitLine {
    /// Builds both rails, leaving a gap at every control bit on this row.
    ///
    /// A gap is left between two consecutive cubes when a braid's column is
    /// the column just before the second cube.
    ///
    /// # Errors
    ///
    /// [`SpecValidationError::InvertedRange`] when `range[0] > range[1]`, and
    /// [`SpecValidationError::IndexOutOfRange`] when the row or either end of
    /// the range lies beyond [`MAX_LATTICE_INDEX`](config::constants::MAX_LATTICE_INDEX).
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::LayoutConfig;
    /// use tqc_layout::bit_line::BitLine;
    /// use tqc_spec::{BitLineSpec, ControlBit};
    ///
    /// let spec: BitLineSpec = serde_json::from_str(r#"{"row": 2, "range": [0, 10]}"#).unwrap();
    /// let gaps = [ControlBit { control: 2, column: 5 }];
    /// let line = BitLine::build(&spec, &gaps, &LayoutConfig::default()).unwrap();
    /// assert_eq!(line.lower.len(), 6 + 4);
    /// ```
    pub fn build(
        spec: &BitLineSpec,
        control_bits: &[ControlBit],
        config: &LayoutConfig,
    ) -> LayoutResult<Self> {
        let [min, max] = spec.range;
        bounded_index(spec.row)?;
        bounded_index(min)?;
        bounded_index(max)?;
        if min > max {
            return Err(SpecValidationError::InvertedRange {
                row: spec.row,
                min,
                max,
            }
            .into());
        }

        let gaps: BTreeSet<i64> = control_bits
            .iter()
            .filter(|bit| bit.control == spec.row)
            .map(|bit| bit.column)
            .collect();

        let base = rail_height(spec.layer, config);
        let mut used = BTreeSet::new();
        let lower = build_rail(spec.row, spec.range, base, &gaps, &mut used, config)?;
        let upper = build_rail(
            spec.row,
            spec.range,
            base + config.interval() as f64,
            &gaps,
            &mut used,
            config,
        )?;

        for column in gaps.difference(&used) {
            tracing::warn!(
                row = spec.row,
                column = *column,
                "braid column never falls inside bit line; no gap left"
            );
        }

        Ok(Self {
            row: spec.row,
            range: spec.range,
            layer: spec.layer,
            lower,
            upper,
        })
    }

    /// Cubes of both rails, lower first.
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        self.lower
            .iter()
            .chain(&self.upper)
            .filter_map(Primitive::as_cube)
    }

    /// Edges of both rails, lower first.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.lower
            .iter()
            .chain(&self.upper)
            .filter_map(Primitive::as_edge)
    }
}

/// Lattice `y` index of the lower rail of `layer`.
fn rail_height(layer: i64, config: &LayoutConfig) -> f64 {
    layer as f64 * config.margin()
}

fn rail_point(row: i64, height: f64, column: i64, config: &LayoutConfig) -> GridPoint {
    GridPoint::from_lattice([row as f64, height, column as f64], config)
}

fn build_rail(
    row: i64,
    [min, max]: [i64; 2],
    height: f64,
    gaps: &BTreeSet<i64>,
    used: &mut BTreeSet<i64>,
    config: &LayoutConfig,
) -> Result<Vec<Primitive>, GeometryError> {
    let visual = Visual::solid();
    let mut last = rail_point(row, height, min, config);
    let mut rail = vec![Primitive::from(Cube::new(last, BIT_LINE_TYPE, &visual, config))];

    let interval = config.interval();
    let columns = std::iter::successors(min.checked_add(interval), |c| c.checked_add(interval))
        .take_while(|c| *c <= max);

    for column in columns {
        let pos = rail_point(row, height, column, config);
        rail.push(Cube::new(pos, BIT_LINE_TYPE, &visual, config).into());
        if gaps.contains(&(column - 1)) {
            used.insert(column - 1);
        } else {
            rail.push(Edge::new(last, pos, BIT_LINE_TYPE, &visual, config)?.into());
        }
        last = pos;
    }
    Ok(rail)
}

// =============================================================================
// CONNECTORS
// =============================================================================

/// Vertical pieces joining the two rails at given columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connectors {
    /// Primal edges, one per bridge column.
    pub bridges: Vec<Edge>,
    /// Pins first, then caps.
    pub injectors: Vec<Injector>,
}

impl Connectors {
    /// Builds the bridges, pins and caps listed on a bit line.
    ///
    /// # Errors
    ///
    /// [`GeometryError`] when the rails are too close for an injector.
    pub fn build(spec: &BitLineSpec, config: &LayoutConfig) -> Result<Self, GeometryError> {
        let low = rail_height(spec.layer, config);
        let high = low + config.interval() as f64;
        let span = |column: i64| {
            (
                rail_point(spec.row, low, column, config),
                rail_point(spec.row, high, column, config),
            )
        };

        let bridges = spec
            .bridges
            .iter()
            .map(|&column| {
                let (a, b) = span(column);
                Edge::new(a, b, BIT_LINE_TYPE, &Visual::solid(), config)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pins = spec.pins.iter().map(|&column| {
            let (a, b) = span(column);
            Injector::pin(a, b, BIT_LINE_TYPE, None, config)
        });
        let caps = spec.caps.iter().map(|&column| {
            let (a, b) = span(column);
            Injector::cap(a, b, BIT_LINE_TYPE, None, config)
        });
        let injectors = pins.chain(caps).collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bridges, injectors })
    }
}
