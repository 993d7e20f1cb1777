//! Placement validity predicates.
//!
//! Every predicate reports detail into the sink and answers with a plain
//! `bool`; a failed predicate is a rejected placement, not an engine error.
//! Members missing from the table are reported as warnings and skipped, so a
//! partially constructed group never panics a validation pass.

use atoll_diagnostics::DiagnosticSink;
use atoll_model::{ModuleTable, Rect, SymmetryGroup, SymmetryType};

/// Acceptance tolerance for pair and self-symmetric residuals.
const SYMMETRY_TOLERANCE: f64 = 1.0;

/// Checks that no member of the group has a negative coordinate.
pub fn validate_no_negative(
    group: &SymmetryGroup,
    table: &ModuleTable,
    sink: &DiagnosticSink,
) -> bool {
    for name in group.members() {
        let Some(module) = table.get(name) else {
            sink.warning(format!("cannot check coordinates of missing module {name}"));
            continue;
        };
        if module.x() < 0 || module.y() < 0 {
            sink.error(format!(
                "module {name} has negative coordinates ({}, {})",
                module.x(),
                module.y()
            ));
            return false;
        }
    }
    true
}

/// Checks the mirror equations for pairs and the centering of
/// self-symmetric modules, within a tolerance of 1.0.
pub fn validate_symmetry(
    group: &SymmetryGroup,
    axis: f64,
    table: &ModuleTable,
    sink: &DiagnosticSink,
) -> bool {
    let vertical = group.ty() == SymmetryType::Vertical;

    for pair in group.pairs() {
        let (Some(rep), Some(partner)) =
            (table.get(&pair.representative), table.get(&pair.partner))
        else {
            sink.warning(format!(
                "cannot validate symmetry of pair ({}, {})",
                pair.representative, pair.partner
            ));
            continue;
        };

        let (mirror_sum, ortho_gap) = if vertical {
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
        let mirror_error = (mirror_sum - 2.0 * axis).abs();

        if mirror_error > SYMMETRY_TOLERANCE || ortho_gap > SYMMETRY_TOLERANCE {
            sink.emit(
                atoll_diagnostics::Diagnostic::error(format!(
                    "symmetry violation for pair ({}, {})",
                    pair.representative, pair.partner
                ))
                .with_note(format!("center sum {mirror_sum}, expected {}", 2.0 * axis))
                .with_note(format!("orthogonal gap {ortho_gap}")),
            );
            return false;
        }
    }

    for name in group.self_symmetric() {
        let Some(module) = table.get(name) else {
            sink.warning(format!(
                "cannot validate symmetry of missing self-symmetric module {name}"
            ));
            continue;
        };
        let center = if vertical {
            module.center_x()
        } else {
            module.center_y()
        };
        if (center - axis).abs() > SYMMETRY_TOLERANCE {
            sink.error(format!(
                "self-symmetric module {name} is centered at {center}, axis is at {axis}"
            ));
            return false;
        }
    }
    true
}

/// Checks pairwise that no two member rectangles overlap in their interiors.
pub fn validate_no_overlap(
    group: &SymmetryGroup,
    table: &ModuleTable,
    sink: &DiagnosticSink,
) -> bool {
    let mut rects: Vec<(&str, Rect)> = Vec::new();
    for name in group.members() {
        match table.get(name) {
            Some(module) => rects.push((name, module.rect())),
            None => sink.warning(format!("cannot check overlap of missing module {name}")),
        }
    }

    for i in 0..rects.len() {
        for j in i + 1..rects.len() {
            if rects[i].1.overlaps(rects[j].1) {
                sink.error(format!(
                    "modules {} and {} overlap",
                    rects[i].0, rects[j].0
                ));
                return false;
            }
        }
    }
    true
}

/// Checks that the placed group forms a single edge-connected region.
///
/// The outcome is reported at info severity: the outer optimizer may use it
/// as an acceptance criterion, but a pair-only group split by the axis
/// buffer is still a usable placement.
pub fn validate_connectivity(
    group: &SymmetryGroup,
    table: &ModuleTable,
    sink: &DiagnosticSink,
) -> bool {
    let island = group.is_symmetry_island(table);
    if island {
        sink.info(format!("group {} forms a symmetry island", group.name()));
    } else {
        sink.info(format!(
            "group {} does not form a symmetry island",
            group.name()
        ));
    }
    island
}
