//! Tests for the base primitives.

use super::*;
use approx::assert_relative_eq;

fn config() -> LayoutConfig {
    LayoutConfig::default()
}

fn origin() -> GridPoint {
    GridPoint::ORIGIN
}

// =============================================================================
// VISUAL
// =============================================================================

/// A missing color resolves to the type's table entry.
#[test]
fn test_visual_defaults_to_type_color() {
    let material = Visual::solid().material(PrimitiveType::Dual, &config());
    assert_eq!(material.color, Color(0x333333));
    assert_eq!(material.opacity, 1.0);
    assert!(!material.ghost);
}

/// Color zero is the "no override" sentinel.
#[test]
fn test_visual_zero_color_keeps_default() {
    let visual = Visual::solid().overridden(Some(&VisualOverride {
        color: Some(Color(0)),
        ..VisualOverride::default()
    }));
    assert_eq!(visual.color, None);
}

#[test]
fn test_visual_override_is_field_by_field() {
    let visual = Visual::cap().overridden(Some(&VisualOverride {
        color: Some(Color(0x123456)),
        opacity: None,
        ghost: Some(false),
    }));
    assert_eq!(visual.color, Some(Color(0x123456)));
    assert_eq!(visual.opacity, Visual::cap().opacity);
    assert!(!visual.ghost);
}

#[test]
fn test_pin_visual_uses_pin_color() {
    let material = Visual::pin(&config()).material(PrimitiveType::Primal, &config());
    assert_eq!(material.color, Color(config().colors().pin));
    assert!(!material.ghost);
}

// =============================================================================
// CUBE
// =============================================================================

#[test]
fn test_cube_is_unit_sized() {
    let cube = Cube::new(origin(), PrimitiveType::Primal, &Visual::solid(), &config());
    assert_eq!(cube.size, DVec3::ONE);
    assert_eq!(cube.shape(), Shape::Box { size: [1.0, 1.0, 1.0] });
    assert_eq!(cube.orientation(), DVec3::ZERO);
}

// =============================================================================
// EDGE
// =============================================================================

#[test]
fn test_edge_size_and_midpoint_along_each_axis() {
    for axis in Axis::ALL {
        let b = origin().translated(axis, -10.0);
        let edge = Edge::new(origin(), b, PrimitiveType::Primal, &Visual::solid(), &config())
            .unwrap();
        assert_eq!(edge.axis, axis);
        assert_eq!(edge.size[axis.index()], 9.0);
        assert_eq!(edge.size.element_sum(), 11.0);
        assert_eq!(edge.position, origin().translated(axis, -5.0));
    }
}

#[test]
fn test_edge_inset_does_not_follow_scale() {
    let scaled = LayoutConfig::new(4.0, 2.0, 2).unwrap();
    let b = GridPoint::new(5.0, 0.0, 0.0);
    let edge = Edge::new(origin(), b, PrimitiveType::Primal, &Visual::solid(), &scaled).unwrap();
    assert_eq!(edge.size.to_array(), [4.0, 2.0, 2.0]);
    assert_eq!(edge.position, GridPoint::new(2.5, 0.0, 0.0));
}

#[test]
fn test_edge_rejects_coincident_points() {
    let result = Edge::new(origin(), origin(), PrimitiveType::Dual, &Visual::solid(), &config());
    assert!(matches!(result, Err(GeometryError::CoincidentEndpoints { .. })));
}

#[test]
fn test_edge_rejects_diagonal_points() {
    let b = GridPoint::new(5.0, 0.0, 5.0);
    let result = Edge::new(origin(), b, PrimitiveType::Dual, &Visual::solid(), &config());
    assert!(matches!(result, Err(GeometryError::NotAxisAligned { .. })));
}

// =============================================================================
// PYRAMID
// =============================================================================

#[test]
fn test_pyramid_orientations_are_mirrored() {
    let material = Visual::solid().material(PrimitiveType::Primal, &config());
    for axis in Axis::ALL {
        let forward = Pyramid::new(origin(), 1.0, axis, false, material, &config());
        let backward = Pyramid::new(origin(), 1.0, axis, true, material, &config());
        let delta = forward.orientation() - backward.orientation();
        assert_relative_eq!(delta.abs().max_element(), PI);
    }
}

#[test]
fn test_pyramid_orientation_table() {
    let material = Visual::solid().material(PrimitiveType::Primal, &config());
    let z = Pyramid::new(origin(), 1.0, Axis::Z, false, material, &config());
    assert_eq!(z.orientation(), DVec3::new(-FRAC_PI_2, FRAC_PI_4, 0.0));
    let x = Pyramid::new(origin(), 1.0, Axis::X, true, material, &config());
    assert_eq!(x.orientation(), DVec3::new(FRAC_PI_4, 0.0, FRAC_PI_2 - PI));
}

#[test]
fn test_pyramid_is_a_square_cone() {
    let material = Visual::solid().material(PrimitiveType::Primal, &config());
    let cone = Pyramid::new(origin(), 1.5, Axis::Y, false, material, &config());
    match cone.shape() {
        Shape::Cone {
            radius,
            height,
            radial_segments,
        } => {
            assert_relative_eq!(radius, 1.0 / SQRT_2);
            assert_eq!(height, 1.5);
            assert_eq!(radial_segments, 4);
        }
        other => panic!("expected cone, got {other:?}"),
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[test]
fn test_record_carries_material_and_label() {
    let shape = BoxShape {
        position: GridPoint::new(1.0, 2.0, 3.0),
        size: DVec3::new(2.0, 3.0, 4.0),
        material: Visual::module().material(PrimitiveType::Module, &config()),
        label: Some("adder".to_string()),
    };
    let outline = Outline {
        color: 0,
        width: 2.0,
    };
    let record = Primitive::Box(shape).to_record(Some(outline));
    assert_eq!(record.kind, RecordKind::Box);
    assert_eq!(record.position, [1.0, 2.0, 3.0]);
    assert_eq!(record.color, 0x008b8b);
    assert!(record.transparent);
    assert_eq!(record.label.as_deref(), Some("adder"));
    assert_eq!(record.outline, Some(outline));
}
