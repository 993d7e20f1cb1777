//! Universal placement properties checked across group shapes.

use atoll_conformance::{
    assert_disjoint, assert_non_negative, assert_symmetric, build_and_pack, horizontal_group,
    positions, table_of, vertical_group,
};
use atoll_diagnostics::DiagnosticSink;
use atoll_model::{ModuleTable, SymmetryGroup};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn configurations() -> Vec<(SymmetryGroup, ModuleTable)> {
    vec![
        (
            vertical_group(&[("a", "a_m"), ("b", "b_m")], &[]),
            table_of(&[("a", 4, 2), ("a_m", 4, 2), ("b", 3, 3), ("b_m", 3, 3)]),
        ),
        (
            vertical_group(&[("d", "d_m")], &["c"]),
            table_of(&[("c", 6, 2), ("d", 2, 2), ("d_m", 2, 2)]),
        ),
        (
            vertical_group(
                &[("p", "p_m"), ("q", "q_m"), ("r", "r_m")],
                &["s1", "s2"],
            ),
            table_of(&[
                ("p", 2, 2),
                ("p_m", 2, 2),
                ("q", 2, 3),
                ("q_m", 2, 3),
                ("r", 2, 1),
                ("r_m", 2, 1),
                ("s1", 4, 2),
                ("s2", 2, 2),
            ]),
        ),
        (
            horizontal_group(&[("d", "d_m")], &["c"]),
            table_of(&[("c", 2, 6), ("d", 2, 2), ("d_m", 2, 2)]),
        ),
        (
            horizontal_group(&[("x", "x_m"), ("y", "y_m")], &[]),
            table_of(&[("x", 1, 5), ("x_m", 1, 5), ("y", 4, 2), ("y_m", 4, 2)]),
        ),
        // Odd dimensions put centers on half-units.
        (
            vertical_group(&[("u", "u_m")], &["v"]),
            table_of(&[("u", 3, 3), ("u_m", 3, 3), ("v", 5, 1)]),
        ),
    ]
}

#[test]
fn accepted_packs_have_non_negative_coordinates() {
    for (group, mut table) in configurations() {
        let (engine, outcome) = build_and_pack(group, &mut table);
        assert!(outcome.accepted, "pack rejected: {:?}", outcome.diagnostics);
        assert_non_negative(engine.group(), &table);
    }
}

#[test]
fn accepted_packs_satisfy_mirror_equations() {
    for (group, mut table) in configurations() {
        let (engine, outcome) = build_and_pack(group, &mut table);
        assert!(outcome.accepted);
        assert_symmetric(engine.group(), outcome.axis.unwrap(), &table);
    }
}

#[test]
fn accepted_packs_are_pairwise_disjoint() {
    for (group, mut table) in configurations() {
        let (engine, outcome) = build_and_pack(group, &mut table);
        assert!(outcome.accepted);
        assert_disjoint(engine.group(), &table);
    }
}

#[test]
fn packing_is_idempotent_without_mutation() {
    for (group, mut table) in configurations() {
        let (mut engine, outcome) = build_and_pack(group, &mut table);
        assert!(outcome.accepted);
        let first = positions(&table);

        let sink = DiagnosticSink::new();
        assert!(engine.pack(&mut table, &sink));
        assert_eq!(first, positions(&table));
    }
}

#[test]
fn self_symmetric_modules_stay_on_boundary_chain() {
    for (group, mut table) in configurations() {
        let self_symmetric: Vec<String> = group.self_symmetric().to_vec();
        let (engine, _) = build_and_pack(group, &mut table);
        let chain = engine.boundary_chain();
        for name in &self_symmetric {
            assert!(
                chain.contains(name),
                "self-symmetric {name} missing from boundary chain {chain:?}"
            );
        }
    }
}

/// Random perturbations between packs never yield an accepted placement
/// that violates the universal properties.
#[test]
fn perturbed_packs_keep_properties_when_accepted() {
    let mut rng = StdRng::seed_from_u64(42);
    for (group, mut table) in configurations() {
        let (mut engine, outcome) = build_and_pack(group, &mut table);
        assert!(outcome.accepted);

        for round in 0..30 {
            match round % 3 {
                0 => {
                    engine.swap_random_nodes(&mut rng);
                }
                1 => {
                    engine.move_random_node(&mut rng);
                }
                _ => {
                    engine.rotate_random_module(&mut table, &mut rng);
                }
            }

            let sink = DiagnosticSink::new();
            if engine.pack(&mut table, &sink) {
                let axis = engine.axis_position().unwrap();
                assert_non_negative(engine.group(), &table);
                assert_symmetric(engine.group(), axis, &table);
                assert_disjoint(engine.group(), &table);
            }
        }
    }
}
