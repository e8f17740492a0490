//! Centralized layout values shared across the circuit geometry pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// LATTICE CONSTANTS
// =============================================================================

/// Edge length of a unit cube. Every cube, and the two minor axes of every
/// edge, have this size.
///
/// # Examples
/// ```
/// use config::constants::SCALE;
/// assert_eq!(SCALE, 1.0);
/// ```
pub const SCALE: f64 = 1.0;

/// Minimum separation between the surfaces of two neighbouring cubes.
///
/// # Examples
/// ```
/// use config::constants::{MARGIN, MIN_MARGIN};
/// assert!(MARGIN >= MIN_MARGIN);
/// ```
pub const MARGIN: f64 = 4.0;

/// Smallest margin that still leaves room for the injector cones.
pub const MIN_MARGIN: f64 = 4.0;

/// Distance between two neighbouring lattice sites of the same kind.
///
/// # Examples
/// ```
/// use config::constants::{MARGIN, PITCH};
/// assert_eq!(PITCH, MARGIN + 1.0);
/// ```
pub const PITCH: f64 = MARGIN + 1.0;

/// Half pitch. Logical lattice indices are multiplied by this value.
///
/// # Examples
/// ```
/// use config::constants::SPACE;
/// assert_eq!(3.0 * SPACE, 7.5);
/// ```
pub const SPACE: f64 = PITCH / 2.0;

/// Index step between a primal site and the next site of the same kind.
pub const INTERVAL: i64 = 2;

/// Largest magnitude accepted for a row or column index of a braid or bit
/// line. Keeps path lengths bounded and index arithmetic in range.
pub const MAX_LATTICE_INDEX: i64 = 1 << 20;

// =============================================================================
// OUTLINE CONSTANTS
// =============================================================================

/// Whether records carry an outline (box helper or cone wireframe).
pub const SHOW_OUTLINES: bool = true;

/// Line width of outlines.
pub const OUTLINE_WIDTH: f64 = 2.0;

/// Radial segments of an injector cone; four gives a square pyramid.
pub const CONE_RADIAL_SEGMENTS: u32 = 4;

// =============================================================================
// OPACITY CONSTANTS
// =============================================================================

/// Opacity of regular cubes, edges and Hadamard boxes.
pub const SOLID_OPACITY: f64 = 1.0;

/// Opacity of aerial cubes and edges.
pub const AERIAL_OPACITY: f64 = 0.5;

/// Opacity of pins. Pins are not transparent, so renderers draw them opaque.
pub const INJECTOR_OPACITY: f64 = 0.1;

/// Opacity of caps.
pub const CAP_OPACITY: f64 = 0.5;

/// Opacity of module bounding boxes.
pub const MODULE_OPACITY: f64 = 0.5;

// =============================================================================
// COLOR TABLE
// =============================================================================

/// Default 24-bit RGB colors per primitive type.
///
/// # Examples
/// ```
/// use config::constants::ColorTable;
/// let colors = ColorTable::default();
/// assert_eq!(colors.pin, 0xff55ff);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    pub primal: u32,
    pub dual: u32,
    pub module: u32,
    pub pin: u32,
    pub aerial: u32,
    pub a_state_distillation: u32,
    pub y_state_distillation: u32,
    /// Color of box outlines and cone wireframes.
    pub outline: u32,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            primal: 0xffffff,
            dual: 0x333333,
            module: 0x008b8b,
            pin: 0xff55ff,
            aerial: 0x008b8b,
            a_state_distillation: 0xffff00,
            y_state_distillation: 0x008000,
            outline: 0x000000,
        }
    }
}

// =============================================================================
// LAYOUT CONFIG
// =============================================================================

/// Immutable snapshot of the layout settings, passed by reference into every
/// geometry builder.
///
/// Fields are private: [`LayoutConfig::new`] and [`Default`] are the only
/// constructors, so every value in use has passed validation.
///
/// # Examples
/// ```
/// use config::constants::LayoutConfig;
/// let config = LayoutConfig::default();
/// assert_eq!(config.pitch(), 5.0);
/// assert_eq!(config.space(), 2.5);
/// ```
///
/// ```compile_fail
/// use config::constants::LayoutConfig;
/// let config = LayoutConfig { interval: 0, ..LayoutConfig::default() };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    scale: f64,
    margin: f64,
    pitch: f64,
    space: f64,
    interval: i64,
    show_outlines: bool,
    outline_width: f64,
    cone_radial_segments: u32,
    colors: ColorTable,
}

impl LayoutConfig {
    /// Builds a configuration from the free lattice parameters, deriving
    /// pitch and half pitch.
    ///
    /// # Examples
    /// ```
    /// use config::constants::LayoutConfig;
    /// let cfg = LayoutConfig::new(6.0, 1.0, 2).expect("valid config");
    /// assert_eq!(cfg.pitch(), 7.0);
    /// assert_eq!(cfg.space(), 3.5);
    /// ```
    pub fn new(margin: f64, scale: f64, interval: i64) -> Result<Self, ConfigError> {
        if margin.is_nan() || margin < MIN_MARGIN {
            return Err(ConfigError::MarginTooSmall(margin));
        }
        if scale.is_nan() || scale <= 0.0 {
            return Err(ConfigError::InvalidScale(scale));
        }
        if interval <= 0 {
            return Err(ConfigError::InvalidInterval(interval));
        }
        let pitch = margin + scale;
        Ok(Self {
            scale,
            margin,
            pitch,
            space: pitch / 2.0,
            interval,
            show_outlines: SHOW_OUTLINES,
            outline_width: OUTLINE_WIDTH,
            cone_radial_segments: CONE_RADIAL_SEGMENTS,
            colors: ColorTable::default(),
        })
    }

    /// Unit cube edge length.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Gap between neighbouring cubes.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// `margin + scale`.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Half pitch; the index-to-position factor.
    pub fn space(&self) -> f64 {
        self.space
    }

    /// Index step between sites of the same kind. Always positive.
    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn show_outlines(&self) -> bool {
        self.show_outlines
    }

    pub fn outline_width(&self) -> f64 {
        self.outline_width
    }

    pub fn cone_radial_segments(&self) -> u32 {
        self.cone_radial_segments
    }

    pub fn colors(&self) -> ColorTable {
        self.colors
    }

    /// Returns a copy with outline emission switched on or off.
    ///
    /// # Examples
    /// ```
    /// use config::constants::LayoutConfig;
    /// let cfg = LayoutConfig::default().with_outlines(false);
    /// assert!(!cfg.show_outlines());
    /// ```
    pub fn with_outlines(mut self, show: bool) -> Self {
        self.show_outlines = show;
        self
    }

    /// Returns a copy using a different color table.
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: SCALE,
            margin: MARGIN,
            pitch: PITCH,
            space: SPACE,
            interval: INTERVAL,
            show_outlines: SHOW_OUTLINES,
            outline_width: OUTLINE_WIDTH,
            cone_radial_segments: CONE_RADIAL_SEGMENTS,
            colors: ColorTable::default(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the margin leaves no room for injector cones.
    MarginTooSmall(f64),
    /// Raised when the cube scale is zero, negative or NaN.
    InvalidScale(f64),
    /// Raised when the index interval is not positive.
    InvalidInterval(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MarginTooSmall(value) => {
                write!(f, "margin must be >= {MIN_MARGIN}: {value}")
            }
            ConfigError::InvalidScale(value) => {
                write!(f, "scale must be positive: {value}")
            }
            ConfigError::InvalidInterval(value) => {
                write!(f, "interval must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
