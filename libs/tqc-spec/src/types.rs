//! # Shared Value Types
//!
//! Small value types used across the schema: lattice indices, axes,
//! primitive types with their default colors, and visual overrides.

use config::constants::ColorTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer lattice coordinates `[i, j, k]` as written in a circuit description.
pub type LatticeIndex = [i64; 3];

// =============================================================================
// AXIS
// =============================================================================

/// One of the three render axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in `x, y, z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in an `[x, y, z]` triple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

// =============================================================================
// COLOR
// =============================================================================

/// 24-bit RGB color. The value `0` means "no override".
///
/// # Example
///
/// ```rust
/// use tqc_spec::Color;
///
/// assert!(Color(0).is_unset());
/// assert!(!Color(0xff0000).is_unset());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// The "use the type default" sentinel.
    pub const UNSET: Color = Color(0);

    pub fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Returns `Some(self)` unless this is the sentinel.
    pub fn explicit(self) -> Option<Color> {
        (!self.is_unset()).then_some(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

// =============================================================================
// PRIMITIVE TYPE
// =============================================================================

/// Semantic type of a primitive. Selects the default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Primal,
    Dual,
    Module,
    Pin,
    Aerial,
    /// Magic-state distillation block for the A state.
    #[serde(alias = "distillation_a")]
    AStateDistillation,
    /// Magic-state distillation block for the Y state.
    #[serde(alias = "distillation_y")]
    YStateDistillation,
}

impl PrimitiveType {
    /// Looks up the default color of this type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::ColorTable;
    /// use tqc_spec::{Color, PrimitiveType};
    ///
    /// let colors = ColorTable::default();
    /// assert_eq!(PrimitiveType::Dual.default_color(&colors), Color(0x333333));
    /// ```
    pub fn default_color(self, colors: &ColorTable) -> Color {
        let rgb = match self {
            PrimitiveType::Primal => colors.primal,
            PrimitiveType::Dual => colors.dual,
            PrimitiveType::Module => colors.module,
            PrimitiveType::Pin => colors.pin,
            PrimitiveType::Aerial => colors.aerial,
            PrimitiveType::AStateDistillation => colors.a_state_distillation,
            PrimitiveType::YStateDistillation => colors.y_state_distillation,
        };
        Color(rgb)
    }
}

// =============================================================================
// VISUAL OVERRIDE
// =============================================================================

/// Per-entity `visual` object. Every field falls back to the kind default
/// independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualOverride {
    pub color: Option<Color>,
    pub opacity: Option<f64>,
    pub ghost: Option<bool>,
}

impl VisualOverride {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.opacity.is_none() && self.ghost.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_matches_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_color_sentinel_is_not_explicit() {
        assert_eq!(Color::UNSET.explicit(), None);
        assert_eq!(Color(0x00ff00).explicit(), Some(Color(0x00ff00)));
    }

    #[test]
    fn test_color_displays_as_hex() {
        assert_eq!(Color(0xff55ff).to_string(), "#ff55ff");
    }

    #[test]
    fn test_primitive_type_accepts_distillation_aliases() {
        let a: PrimitiveType = serde_json::from_str("\"a_state_distillation\"").unwrap();
        let y: PrimitiveType = serde_json::from_str("\"distillation_y\"").unwrap();
        assert_eq!(a, PrimitiveType::AStateDistillation);
        assert_eq!(y, PrimitiveType::YStateDistillation);
    }

    #[test]
    fn test_unknown_primitive_type_is_rejected() {
        assert!(serde_json::from_str::<PrimitiveType>("\"quux\"").is_err());
    }

    #[test]
    fn test_partial_visual_leaves_other_fields_unset() {
        let visual: VisualOverride = serde_json::from_str(r#"{"opacity": 0.3}"#).unwrap();
        assert_eq!(visual.opacity, Some(0.3));
        assert!(visual.color.is_none());
        assert!(visual.ghost.is_none());
        assert!(!visual.is_empty());
        assert!(VisualOverride::default().is_empty());
    }
}
