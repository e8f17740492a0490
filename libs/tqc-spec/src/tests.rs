//! # Tests for Schema Decoding

use super::*;
use pretty_assertions::assert_eq;

// =============================================================================
// SECTION DEFAULTS
// =============================================================================

#[test]
fn test_empty_object_is_empty_spec() {
    let spec = CircuitSpec::from_json("{}").unwrap();
    assert!(spec.is_empty());
    assert_eq!(spec, CircuitSpec::default());
}

#[test]
fn test_unknown_sections_are_ignored() {
    let spec = CircuitSpec::from_json(r#"{"title": "demo", "cubes": []}"#).unwrap();
    assert!(spec.is_empty());
}

#[test]
fn test_invalid_json_is_reported() {
    let err = CircuitSpec::from_json("{\"cubes\": [").unwrap_err();
    assert!(err.to_string().contains("Invalid circuit description"));
}

#[test]
fn test_unknown_type_is_reported() {
    let result = CircuitSpec::from_json(r#"{"cubes": [{"pos": [0, 0, 0], "type": "quux"}]}"#);
    assert!(matches!(result, Err(SpecError::Json(_))));
}

// =============================================================================
// LOGICAL QUBITS
// =============================================================================

#[test]
fn test_logical_qubit_blocks_decode_by_shape() {
    let spec = CircuitSpec::from_json(
        r#"{"logical_qubits": [{
            "id": "q0",
            "type": "dual",
            "blocks": [
                [[0, 0, 0], [2, 0, 0], [2, 0, 2]],
                {"visual": {"color": 16711680}},
                {"vertices": [[0, 2, 0], [0, 2, 2]]}
            ],
            "injectors": [[[0, 0, 0], [0, 0, 4]]],
            "caps": [{"vertices": [[2, 0, 0], [4, 0, 0]], "visual": {"opacity": 0.2}}]
        }]}"#,
    )
    .unwrap();

    let qubit = &spec.logical_qubits[0];
    assert_eq!(qubit.id, Some(EntityId::Name("q0".to_string())));
    assert_eq!(qubit.kind, PrimitiveType::Dual);
    assert_eq!(
        qubit.blocks[0],
        Block::Chain(vec![[0, 0, 0], [2, 0, 0], [2, 0, 2]])
    );
    assert_eq!(
        qubit.blocks[1],
        Block::Visual {
            visual: VisualOverride {
                color: Some(Color(0xff0000)),
                ..VisualOverride::default()
            }
        }
    );
    assert_eq!(
        qubit.blocks[2],
        Block::Aerial {
            vertices: [[0, 2, 0], [0, 2, 2]]
        }
    );

    assert_eq!(qubit.injectors[0].vertices(), &[[0, 0, 0], [0, 0, 4]]);
    assert!(qubit.injectors[0].visual().is_none());
    assert_eq!(qubit.caps[0].visual().and_then(|v| v.opacity), Some(0.2));
}

// =============================================================================
// BIT LINES, INJECTORS, BRAIDINGS
// =============================================================================

#[test]
fn test_bit_line_lists_default_to_empty() {
    let spec =
        CircuitSpec::from_json(r#"{"bit_lines": [{"row": 2, "range": [0, 8], "layer": 0}]}"#)
            .unwrap();
    let line = &spec.bit_lines[0];
    assert_eq!(line.range, [0, 8]);
    assert!(line.bridges.is_empty());
    assert!(line.pins.is_empty());
    assert!(line.caps.is_empty());
}

#[test]
fn test_injector_category_other_than_pin_is_cap() {
    let spec = CircuitSpec::from_json(
        r#"{"injectors": [
            {"pos1": [0, 0, 0], "pos2": [0, 0, 4], "type": "primal", "category": "pin"},
            {"pos1": [0, 0, 0], "pos2": [0, 0, 4], "type": "primal", "category": "terminal"},
            {"pos1": [0, 0, 0], "pos2": [0, 0, 4], "type": "primal"}
        ]}"#,
    )
    .unwrap();
    let categories: Vec<_> = spec.injectors.iter().map(|i| i.category).collect();
    assert_eq!(
        categories,
        vec![
            InjectorCategory::Pin,
            InjectorCategory::Cap,
            InjectorCategory::Cap
        ]
    );
}

#[test]
fn test_braiding_defaults() {
    let spec = CircuitSpec::from_json(
        r#"{"braidings": [
            {"control": 0, "targets": [2, 4], "column": 3},
            {"control": 6, "targets": [4], "column": 7, "color": 255, "style": "single_bridge"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(spec.braidings[0].style, BraidStyle::DoubleBridge);
    assert_eq!(spec.braidings[0].color, None);
    assert_eq!(spec.braidings[1].style, BraidStyle::SingleBridge);
    assert_eq!(spec.braidings[1].color, Some(Color(255)));
    assert_eq!(
        spec.control_bits(),
        vec![
            ControlBit { control: 0, column: 3 },
            ControlBit { control: 6, column: 7 }
        ]
    );
}

// =============================================================================
// MODULES
// =============================================================================

#[test]
fn test_module_rotation_defaults_to_identity() {
    let spec = CircuitSpec::from_json(
        r#"{"modules": [
            {"id": 1, "pos": [0, 0, 0], "size": [2, 3, 4]},
            {"id": "adder", "pos": [0, 0, 0], "size": [2, 3, 4], "rotation": ["y", "x", "z"],
             "description": "ripple carry"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(spec.modules[0].rotation_or_identity(), [Axis::X, Axis::Y, Axis::Z]);
    assert_eq!(spec.modules[1].rotation_or_identity(), [Axis::Y, Axis::X, Axis::Z]);
    assert_eq!(spec.modules[1].description.as_deref(), Some("ripple carry"));
    assert_eq!(spec.modules[0].id.as_ref().map(ToString::to_string), Some("1".to_string()));
}

#[test]
fn test_from_value_matches_from_json() {
    let text = r#"{"aerial_cubes": [[0, 0, 0], [2, 2, 2]]}"#;
    let value: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(
        CircuitSpec::from_value(value).unwrap(),
        CircuitSpec::from_json(text).unwrap()
    );
}
