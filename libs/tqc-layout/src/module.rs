//! # Annotation Boxes
//!
//! Module bounding boxes and Hadamard blocks. Neither is tied to the
//! primitives it sits next to.

use crate::grid::GridPoint;
use crate::primitive::{BoxShape, Visual};
use config::constants::LayoutConfig;
use glam::DVec3;
use tqc_spec::{Axis, EntityId, PrimitiveType, VisualOverride};

/// Builds a module box.
///
/// `size` is permuted by `rotation` (component `i` of the box takes the
/// `rotation[i]` component of `size`) and padded by one unit on every axis.
/// The centre is `position` moved by half of the padded size taken before
/// the permutation; with the identity rotation the lower corner of the box
/// sits at `position`.
///
/// # Example
///
/// ```rust
/// use config::constants::LayoutConfig;
/// use glam::DVec3;
/// use tqc_layout::grid::GridPoint;
/// use tqc_layout::module::module_box;
/// use tqc_layout::primitive::Visual;
/// use tqc_spec::Axis;
///
/// let module = module_box(
///     GridPoint::ORIGIN,
///     DVec3::new(2.0, 3.0, 4.0),
///     [Axis::Y, Axis::X, Axis::Z],
///     &Visual::module(),
///     None,
///     &LayoutConfig::default(),
/// );
/// assert_eq!(module.size.to_array(), [4.0, 3.0, 5.0]);
/// assert_eq!(module.position, GridPoint::new(1.5, 2.0, 2.5));
/// ```
pub fn module_box(
    position: GridPoint,
    size: DVec3,
    rotation: [Axis; 3],
    visual: &Visual,
    label: Option<String>,
    config: &LayoutConfig,
) -> BoxShape {
    let padding = DVec3::splat(config.scale());
    let permuted = DVec3::from_array(rotation.map(|axis| size[axis.index()]));
    BoxShape {
        position: position.offset((size + padding) / 2.0),
        size: permuted + padding,
        material: visual.material(PrimitiveType::Module, config),
        label,
    }
}

/// Label shown on a module: its id, its description, or both.
pub fn module_label(id: Option<&EntityId>, description: Option<&str>) -> Option<String> {
    match (id, description) {
        (Some(id), Some(text)) => Some(format!("{id}: {text}")),
        (Some(id), None) => Some(id.to_string()),
        (None, Some(text)) => Some(text.to_string()),
        (None, None) => None,
    }
}

/// Builds a Hadamard block: a dual box, two pitches long along `x`, centred
/// on `position`.
pub fn hadamard_box(
    position: GridPoint,
    visual: Option<&VisualOverride>,
    config: &LayoutConfig,
) -> BoxShape {
    let space = config.space();
    BoxShape {
        position,
        size: DVec3::new(2.0 * space, 3.5 * space, 4.0 * space),
        material: Visual::solid()
            .overridden(visual)
            .material(PrimitiveType::Dual, config),
        label: None,
    }
}
