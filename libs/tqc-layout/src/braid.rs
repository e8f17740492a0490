//! # Braid Paths
//!
//! Routes a dual defect loop from a control row around a set of target rows.
//! The loop is built left-handed:
//!
//! ```text
//!   high rail   ┌──────────────────────────┐   return leg
//!               │                          │
//!   low rail  ──┘  target ── skip ── target┘   scan leg
//!   entry ─►
//! ```
//!
//! The scan leg moves along `z`, dropping to the low rail at every target row
//! and lifting to the high rail between targets so that it passes over the
//! rows it does not braid. It then turns along `x` and returns on the high
//! rail, and finally closes back down onto the low rail.
//!
//! Path construction is split into pure steps: [`braid_points`] produces the
//! ordered sites, [`connect_path`] derives the edges.

use crate::error::{GeometryError, LayoutResult, SpecValidationError};
use crate::grid::{bounded_index, GridPoint};
use crate::primitive::{Cube, Edge, Visual};
use config::constants::LayoutConfig;
use serde::{Deserialize, Serialize};
use tqc_spec::{Axis, BraidStyle, BraidingSpec, Color, PrimitiveType};

// =============================================================================
// RAIL STATE
// =============================================================================

/// Height level of the braid while it walks the scan leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rail {
    /// Level of the target rows.
    Low,
    /// One pitch above, crossing rows that are not braided.
    High,
}

impl Rail {
    /// Render height of this rail.
    pub fn height(self, config: &LayoutConfig) -> f64 {
        match self {
            Rail::Low => config.space(),
            Rail::High => config.space() + config.pitch(),
        }
    }
}

/// Rail after visiting a row, and whether a transition point is emitted.
///
/// # Example
///
/// ```rust
/// use tqc_layout::braid::{next_rail, Rail};
///
/// assert_eq!(next_rail(Rail::Low, false), (Rail::High, true));
/// assert_eq!(next_rail(Rail::High, false), (Rail::High, false));
/// assert_eq!(next_rail(Rail::High, true), (Rail::Low, true));
/// ```
pub fn next_rail(current: Rail, is_target: bool) -> (Rail, bool) {
    let next = if is_target { Rail::Low } else { Rail::High };
    (next, next != current)
}

// =============================================================================
// REQUEST
// =============================================================================

/// Validated braid parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraidRequest {
    pub control: i64,
    pub targets: Vec<i64>,
    pub column: i64,
    pub style: BraidStyle,
    /// `+1` when the targets lie at higher rows than the control.
    direction: i64,
    /// The target row farthest from the control.
    far: i64,
}

impl BraidRequest {
    /// Validates the targets against the control row.
    ///
    /// # Errors
    ///
    /// [`SpecValidationError`] when the targets are empty, contain the
    /// control, lie on both sides of it, or are not whole interval steps
    /// away from it. Any index beyond
    /// [`MAX_LATTICE_INDEX`](config::constants::MAX_LATTICE_INDEX) is
    /// rejected before the targets are compared.
    pub fn new(
        control: i64,
        targets: &[i64],
        column: i64,
        style: BraidStyle,
        config: &LayoutConfig,
    ) -> Result<Self, SpecValidationError> {
        let Some(&first) = targets.first() else {
            return Err(SpecValidationError::EmptyTargets { control, column });
        };
        bounded_index(control)?;
        bounded_index(column)?;
        for &target in targets {
            bounded_index(target)?;
        }
        if targets.contains(&control) {
            return Err(SpecValidationError::ControlIsTarget { control });
        }
        let direction = if control < first { 1 } else { -1 };
        if targets.iter().any(|&t| (t - control).signum() != direction) {
            return Err(SpecValidationError::TargetsStraddleControl {
                control,
                targets: targets.to_vec(),
            });
        }
        if let Some(&target) = targets
            .iter()
            .find(|&&t| (t - control) % config.interval() != 0)
        {
            return Err(SpecValidationError::TargetOffLattice {
                control,
                target,
                interval: config.interval(),
            });
        }
        let far = if direction > 0 {
            targets.iter().copied().max()
        } else {
            targets.iter().copied().min()
        }
        .unwrap_or(first);

        Ok(Self {
            control,
            targets: targets.to_vec(),
            column,
            style,
            direction,
            far,
        })
    }

    pub fn from_spec(spec: &BraidingSpec, config: &LayoutConfig) -> Result<Self, SpecValidationError> {
        Self::new(spec.control, &spec.targets, spec.column, spec.style, config)
    }

    pub fn direction(&self) -> i64 {
        self.direction
    }

    /// Number of interval steps between the control and the farthest target.
    fn span(&self, config: &LayoutConfig) -> i64 {
        (self.far - self.control).abs() / config.interval()
    }
}

// =============================================================================
// PATH CONSTRUCTION
// =============================================================================

/// Ordered lattice sites of the braid loop.
///
/// The first and last site are one pitch apart along `x` at the same height
/// and `z`, so a single closing chord completes the loop.
pub fn braid_points(request: &BraidRequest, config: &LayoutConfig) -> Vec<GridPoint> {
    let space = config.space();
    let pitch = config.pitch();
    let d = request.direction as f64;
    let column = request.column as f64 * space;
    let (entry_offset, turn_steps) = match request.style {
        BraidStyle::DoubleBridge => (2.0 * space, 2),
        BraidStyle::SingleBridge => (space, 1),
    };
    let span = request.span(config);

    let mut points = Vec::new();
    let mut rail = Rail::Low;
    let mut pos = GridPoint::new(
        column - entry_offset * d,
        rail.height(config),
        request.control as f64 * space - space * d,
    );

    // Entry.
    points.push(pos);
    pos = pos.translated(Axis::Z, pitch * d);
    points.push(pos);

    // Scan leg.
    for step in 1..=span {
        let row = request.control + step * config.interval() * request.direction;
        let (next, changed) = next_rail(rail, request.targets.contains(&row));
        if changed {
            rail = next;
            pos = pos.with_component(Axis::Y, rail.height(config));
            points.push(pos);
        }
        pos = pos.translated(Axis::Z, pitch * d);
        points.push(pos);
    }

    // Turn-around.
    pos = pos.translated(Axis::Y, pitch);
    points.push(pos);
    for _ in 0..turn_steps {
        pos = pos.translated(Axis::X, pitch * d);
        points.push(pos);
    }

    // Return leg.
    for _ in 0..span {
        pos = pos.translated(Axis::Z, -pitch * d);
        points.push(pos);
    }

    // Closing.
    pos = pos.translated(Axis::Y, -pitch);
    points.push(pos);
    pos = pos.translated(Axis::Z, -pitch * d);
    points.push(pos);
    if request.style == BraidStyle::DoubleBridge {
        pos = pos.translated(Axis::X, -pitch * d);
        points.push(pos);
    }

    points
}

/// Edges of a closed path: the chord from the first to the last site, then
/// one edge per consecutive pair.
pub fn connect_path(
    points: &[GridPoint],
    kind: PrimitiveType,
    visual: &Visual,
    config: &LayoutConfig,
) -> Result<Vec<Edge>, GeometryError> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Ok(Vec::new());
    };
    std::iter::once(Edge::new(first, last, kind, visual, config))
        .chain(
            points
                .windows(2)
                .map(|pair| Edge::new(pair[0], pair[1], kind, visual, config)),
        )
        .collect()
}

/// Vertical primal edges tying the braid to the bit line rails of its
/// control row.
pub fn bridge_edges(request: &BraidRequest, config: &LayoutConfig) -> Result<Vec<Edge>, GeometryError> {
    let column = request.column as f64 * config.space();
    let z = request.control as f64 * config.space();
    let xs = match request.style {
        BraidStyle::DoubleBridge => vec![column - config.space(), column + config.space()],
        BraidStyle::SingleBridge => vec![column],
    };
    xs.into_iter()
        .map(|x| {
            Edge::new(
                GridPoint::new(x, config.pitch(), z),
                GridPoint::new(x, 0.0, z),
                PrimitiveType::Primal,
                &Visual::solid(),
                config,
            )
        })
        .collect()
}

// =============================================================================
// BRAIDING PATH
// =============================================================================

/// A built braid: its sites as dual cubes, the loop edges and the bridges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BraidingPath {
    pub control: i64,
    pub targets: Vec<i64>,
    pub column: i64,
    pub style: BraidStyle,
    pub bits: Vec<Cube>,
    pub bridges: Vec<Edge>,
    /// Closing chord first, then consecutive edges.
    pub edges: Vec<Edge>,
}

impl BraidingPath {
    /// Builds a braid from its description.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::LayoutConfig;
    /// use tqc_layout::braid::BraidingPath;
    /// use tqc_spec::BraidingSpec;
    ///
    /// let spec: BraidingSpec = serde_json::from_str(
    ///     r#"{"control": 0, "targets": [2], "column": 2}"#,
    /// ).unwrap();
    /// let braid = BraidingPath::build(&spec, &LayoutConfig::default()).unwrap();
    /// assert_eq!(braid.bridges.len(), 2);
    /// assert_eq!(braid.edges.len(), braid.bits.len());
    /// ```
    pub fn build(spec: &BraidingSpec, config: &LayoutConfig) -> LayoutResult<Self> {
        let request = BraidRequest::from_spec(spec, config)?;
        Self::from_request(&request, spec.color, config)
    }

    pub fn from_request(
        request: &BraidRequest,
        color: Option<Color>,
        config: &LayoutConfig,
    ) -> LayoutResult<Self> {
        let visual = Visual::solid().with_color(color);
        let points = braid_points(request, config);
        let edges = connect_path(&points, PrimitiveType::Dual, &visual, config)?;
        let bridges = bridge_edges(request, config)?;
        let bits = points
            .into_iter()
            .map(|point| Cube::new(point, PrimitiveType::Dual, &visual, config))
            .collect();

        Ok(Self {
            control: request.control,
            targets: request.targets.clone(),
            column: request.column,
            style: request.style,
            bits,
            bridges,
            edges,
        })
    }
}
