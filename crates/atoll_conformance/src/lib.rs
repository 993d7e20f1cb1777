//! Conformance test helpers for the Atoll placement engine.
//!
//! Provides shared builder functions that assemble symmetry groups and
//! module tables, run the full build-then-pack pipeline, and return
//! structured results for assertion in integration tests.

#![warn(missing_docs)]

use atoll_diagnostics::{Diagnostic, DiagnosticSink, Severity};
use atoll_model::{Module, ModuleTable, SymmetryGroup, SymmetryType};
use atoll_place::{AsfBStarTree, PlaceError};

/// Result of running build-initial-tree followed by a pack.
pub struct PlacementOutcome {
    /// Whether the pack was accepted by validation.
    pub accepted: bool,
    /// The axis computed by the run, if it got that far.
    pub axis: Option<f64>,
    /// All diagnostics emitted during the run.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

/// Builds a module table from `(name, width, height)` triples.
pub fn table_of(mods: &[(&str, i32, i32)]) -> ModuleTable {
    let mut table = ModuleTable::new();
    for &(name, w, h) in mods {
        table.insert(Module::new(name, w, h));
    }
    table
}

/// Builds a vertical group from pair tuples and self-symmetric names.
pub fn vertical_group(pairs: &[(&str, &str)], self_symmetric: &[&str]) -> SymmetryGroup {
    group_of(SymmetryType::Vertical, pairs, self_symmetric)
}

/// Builds a horizontal group from pair tuples and self-symmetric names.
pub fn horizontal_group(pairs: &[(&str, &str)], self_symmetric: &[&str]) -> SymmetryGroup {
    group_of(SymmetryType::Horizontal, pairs, self_symmetric)
}

fn group_of(
    ty: SymmetryType,
    pairs: &[(&str, &str)],
    self_symmetric: &[&str],
) -> SymmetryGroup {
    let mut group = SymmetryGroup::new("conformance", ty);
    for &(rep, partner) in pairs {
        group.add_pair(rep, partner);
    }
    for &name in self_symmetric {
        group.add_self_symmetric(name);
    }
    group
}

/// Builds the initial tree for the group, surfacing construction errors.
pub fn try_build(
    group: SymmetryGroup,
    table: &ModuleTable,
) -> Result<AsfBStarTree, PlaceError> {
    let sink = DiagnosticSink::new();
    let mut engine = AsfBStarTree::new(group);
    engine.build_initial_tree(table, &sink)?;
    Ok(engine)
}

/// Runs the full pipeline: initial tree construction plus one pack.
///
/// Construction is expected to succeed; use [`try_build`] for groups that
/// should fail it.
pub fn build_and_pack(
    group: SymmetryGroup,
    table: &mut ModuleTable,
) -> (AsfBStarTree, PlacementOutcome) {
    let sink = DiagnosticSink::new();
    let mut engine = AsfBStarTree::new(group);
    engine
        .build_initial_tree(table, &sink)
        .expect("initial tree construction should succeed");
    let accepted = engine.pack(table, &sink);

    let diagnostics = sink.diagnostics();
    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    let outcome = PlacementOutcome {
        accepted,
        axis: engine.axis_position(),
        diagnostics,
        error_count,
        warning_count,
    };
    (engine, outcome)
}

/// Asserts that every member of the group sits at non-negative coordinates.
pub fn assert_non_negative(group: &SymmetryGroup, table: &ModuleTable) {
    for name in group.members() {
        let module = table.get(name).expect("member should be in the table");
        assert!(
            module.x() >= 0 && module.y() >= 0,
            "module {name} at negative position ({}, {})",
            module.x(),
            module.y()
        );
    }
}

/// Asserts that no two member rectangles of the group overlap.
pub fn assert_disjoint(group: &SymmetryGroup, table: &ModuleTable) {
    let members = group.members();
    for i in 0..members.len() {
        for j in i + 1..members.len() {
            let a = table.get(members[i]).expect("member in table").rect();
            let b = table.get(members[j]).expect("member in table").rect();
            assert!(
                !a.overlaps(b),
                "modules {} and {} overlap",
                members[i],
                members[j]
            );
        }
    }
}

/// Asserts the mirror equations for every pair and the centering of every
/// self-symmetric module against the given axis.
pub fn assert_symmetric(group: &SymmetryGroup, axis: f64, table: &ModuleTable) {
    let vertical = group.ty() == SymmetryType::Vertical;
    for pair in group.pairs() {
        let rep = table.get(&pair.representative).expect("rep in table");
        let partner = table.get(&pair.partner).expect("partner in table");
        let (sum, gap) = if vertical {
            (
                rep.center_x() + partner.center_x(),
                (rep.center_y() - partner.center_y()).abs(),
            )
        } else {
            (
                rep.center_y() + partner.center_y(),
                (rep.center_x() - partner.center_x()).abs(),
            )
        };
        assert!(
            (sum - 2.0 * axis).abs() <= 1.0,
            "pair ({}, {}): center sum {sum} vs axis {axis}",
            pair.representative,
            pair.partner
        );
        assert!(gap <= 1.0, "pair ({}, {}): orthogonal gap {gap}", pair.representative, pair.partner);
    }
    for name in group.self_symmetric() {
        let module = table.get(name.as_str()).expect("self-symmetric in table");
        let center = if vertical {
            module.center_x()
        } else {
            module.center_y()
        };
        assert!(
            (center - axis).abs() <= 0.5,
            "self-symmetric {name}: center {center} vs axis {axis}"
        );
    }
}

/// Snapshots every module position, for before/after comparisons.
pub fn positions(table: &ModuleTable) -> Vec<(String, i32, i32)> {
    table
        .iter()
        .map(|m| (m.name().to_string(), m.x(), m.y()))
        .collect()
}
