//! Integration tests for the fixture pipeline
//!
//! These tests pin down the properties the regression fixtures rely on:
//! 1. Builds are byte-for-byte reproducible
//! 2. Bodies appear as plane, pot, then instances in row-major lattice order
//! 3. Instance positions match the lattice formula exactly
//! 4. Instances are independent copies of the template
//! 5. Optional fields appear only where they were set

use rbfixture_core::definition::{blender_jitter, pot, spinning_plane, suzanne};
use rbfixture_core::{
    build_scene, to_json_string, FixtureDefinition, GridShape, Scale, Vec3,
};
use serde_json::Value;

// ==================== Determinism ====================

#[test]
fn test_reference_build_is_byte_identical() {
    let a = build_scene(&FixtureDefinition::default()).unwrap();
    let b = build_scene(&FixtureDefinition::default()).unwrap();
    assert_eq!(
        to_json_string(&a.document).unwrap(),
        to_json_string(&b.document).unwrap()
    );
}

#[test]
fn test_jitter_build_is_byte_identical_for_same_seed() {
    let def = FixtureDefinition::default().with_placement(blender_jitter());
    let a = to_json_string(&build_scene(&def).unwrap().document).unwrap();
    let b = to_json_string(&build_scene(&def).unwrap().document).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_seed_does_not_affect_lattice_output() {
    let a = build_scene(&FixtureDefinition::default()).unwrap();
    let b = build_scene(&FixtureDefinition::default().with_seed(42)).unwrap();
    assert_eq!(a.document, b.document);
}

// ==================== Count and Order ====================

#[test]
fn test_reference_counts() {
    let built = build_scene(&FixtureDefinition::default()).unwrap();
    assert_eq!(built.instance_count, 200);
    assert_eq!(built.document.body_count(), 202);
    assert!(built.file_name().contains("200"));
}

#[test]
fn test_environment_bodies_come_first() {
    let built = build_scene(&FixtureDefinition::default()).unwrap();
    let bodies = built.document.rigid_bodies();
    assert_eq!(bodies[0], spinning_plane());
    assert_eq!(bodies[1], pot());
    assert!(bodies[2..].iter().all(|b| b.mesh == "suzanne/suzanne.obj"));
}

#[test]
fn test_instances_follow_row_major_order_and_formula() {
    let built = build_scene(&FixtureDefinition::default()).unwrap();
    let instances = &built.document.rigid_bodies()[2..];

    let mut i = 0;
    for x in 0..5 {
        for y in 0..8 {
            for z in 0..5 {
                let expected = Vec3::new(
                    0.75 * x as f64 - 1.5,
                    0.51 * y as f64 + 1.0,
                    0.45 * z as f64 - 0.9,
                );
                assert_eq!(
                    instances[i].position, expected,
                    "instance {} at ({}, {}, {})",
                    i, x, y, z
                );
                i += 1;
            }
        }
    }
    assert_eq!(i, instances.len());
}

#[test]
fn test_zero_dimension_leaves_only_environment() {
    for shape in [GridShape::new(0, 8, 5), GridShape::new(5, 0, 5), GridShape::new(5, 8, 0)] {
        let built = build_scene(&FixtureDefinition::default().with_grid(shape)).unwrap();
        assert_eq!(built.instance_count, 0);
        assert_eq!(built.document.body_count(), 2);
    }
}

// ==================== Independence ====================

#[test]
fn test_mutating_one_instance_leaves_others_untouched() {
    let mut built = build_scene(&FixtureDefinition::default()).unwrap();
    let before = built.document.clone();

    built.document.rigid_body_problem.rigid_bodies[10].position.x = 1000.0;

    let after = built.document.rigid_bodies();
    for (i, (old, new)) in before.rigid_bodies().iter().zip(after).enumerate() {
        if i != 10 {
            assert_eq!(old, new, "body {} changed", i);
        }
    }
    assert_eq!(suzanne().position, Vec3::new(1.5, 1.0, 0.0));
}

#[test]
fn test_instances_share_template_fields() {
    let built = build_scene(&FixtureDefinition::default()).unwrap();
    for body in &built.document.rigid_bodies()[2..] {
        assert_eq!(body.scale, Some(Scale::Uniform(0.25)));
        assert!(body.rotation.is_none());
    }
}

// ==================== Schema ====================

#[test]
fn test_optional_fields_only_where_set() {
    let built = build_scene(&FixtureDefinition::default()).unwrap();
    let value: Value = serde_json::from_str(&to_json_string(&built.document).unwrap()).unwrap();
    let bodies = value["rigid_body_problem"]["rigid_bodies"].as_array().unwrap();

    let keys = |i: usize| -> Vec<String> {
        let mut k: Vec<String> = bodies[i].as_object().unwrap().keys().cloned().collect();
        k.sort();
        k
    };

    assert_eq!(
        keys(0),
        vec![
            "angular_velocity", "density", "group_id", "is_dof_fixed", "mesh", "position",
            "rotation", "scale", "torque"
        ]
    );
    assert_eq!(
        keys(1),
        vec!["density", "group_id", "is_dof_fixed", "mesh", "position", "scale"]
    );
    for i in 2..bodies.len() {
        assert_eq!(keys(i), vec!["mesh", "position", "scale"]);
    }
}

#[test]
fn test_top_level_schema() {
    let built = build_scene(&FixtureDefinition::default()).unwrap();
    let value: Value = serde_json::to_value(&built.document).unwrap();

    assert_eq!(value["scene_type"], "distance_barrier_rb_problem");
    assert_eq!(value["solver"], "ipc_solver");
    assert_eq!(value["timestep"], 0.005);
    assert_eq!(value["max_time"], 5.0);
    assert_eq!(value["distance_barrier_constraint"]["initial_barrier_activation_distance"], 0.01);

    let problem = &value["rigid_body_problem"];
    assert_eq!(problem["coefficient_restitution"], -1.0);
    assert_eq!(problem["coefficient_friction"], 0.0);
    assert_eq!(problem["gravity"], serde_json::json!([0.0, -9.8, 0.0]));
    assert_eq!(problem["time_stepper"], "dmv");
    assert_eq!(problem["rigid_bodies"][1]["is_dof_fixed"], true);
    assert_eq!(
        problem["rigid_bodies"][0]["is_dof_fixed"],
        serde_json::json!([true, true, true, true, false, true])
    );
}
