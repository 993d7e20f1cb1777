//! Mirroring of partners and self-symmetric modules across the axis.

use crate::error::PlaceError;
use atoll_diagnostics::DiagnosticSink;
use atoll_model::{ModuleTable, SymmetryGroup, SymmetryType};

/// Writes positions for every non-representative member of the group.
///
/// Pair partners are mirrored across the axis at the representative's
/// orthogonal coordinate; a partner whose dimensions disagree with its
/// representative gets a quarter turn when that makes them match, otherwise
/// a warning is emitted and its current dimensions are used. Self-symmetric
/// modules are centered on the axis with at most 0.5 of residual.
pub(crate) fn project_symmetric(
    group: &SymmetryGroup,
    axis: f64,
    table: &mut ModuleTable,
    sink: &DiagnosticSink,
) -> Result<(), PlaceError> {
    let vertical = group.ty() == SymmetryType::Vertical;

    for pair in group.pairs() {
        let (rep_x, rep_y, rep_w, rep_h, rep_rotated) = {
            let rep = table
                .get(&pair.representative)
                .ok_or_else(|| PlaceError::UnknownModule {
                    name: pair.representative.clone(),
                })?;
            (rep.x(), rep.y(), rep.width(), rep.height(), rep.rotated())
        };
        let partner = table
            .get_mut(&pair.partner)
            .ok_or_else(|| PlaceError::UnknownModule {
                name: pair.partner.clone(),
            })?;

        let mut quarter_turned = false;
        if (partner.width(), partner.height()) != (rep_w, rep_h) {
            if partner.width() == rep_h && partner.height() == rep_w {
                partner.rotate();
                quarter_turned = true;
                sink.info(format!(
                    "rotated {} to match dimensions of {}",
                    pair.partner, pair.representative
                ));
            } else {
                sink.warning(format!(
                    "dimension mismatch between {} and {} cannot be resolved by rotation",
                    pair.representative, pair.partner
                ));
            }
        }

        if vertical {
            let rep_center = rep_x as f64 + rep_w as f64 / 2.0;
            let target_center = 2.0 * axis - rep_center;
            let x = (target_center - partner.width() as f64 / 2.0).round() as i32;
            partner.set_position(x, rep_y);
        } else {
            let rep_center = rep_y as f64 + rep_h as f64 / 2.0;
            let target_center = 2.0 * axis - rep_center;
            let y = (target_center - partner.height() as f64 / 2.0).round() as i32;
            partner.set_position(rep_x, y);
        }

        if !quarter_turned {
            partner.set_rotation(rep_rotated);
        }
    }

    for name in group.self_symmetric() {
        let module = table
            .get_mut(name)
            .ok_or_else(|| PlaceError::UnknownModule { name: name.clone() })?;
        if vertical {
            let x = centered_coordinate(axis, module.width());
            module.set_position(x, module.y());
        } else {
            let y = centered_coordinate(axis, module.height());
            module.set_position(module.x(), y);
        }
    }

    Ok(())
}

/// Integer near-edge coordinate that best centers `extent` on the axis.
///
/// Rounds the exact edge, then if the center still misses the axis by more
/// than 0.25, probes one unit either way and keeps whichever position
/// minimizes the residual. The result's residual never exceeds 0.5.
fn centered_coordinate(axis: f64, extent: i32) -> i32 {
    let half = extent as f64 / 2.0;
    let residual = |edge: i32| (edge as f64 + half - axis).abs();

    let mut best = (axis - half).round() as i32;
    if residual(best) > 0.25 {
        for probe in [best - 1, best + 1] {
            if residual(probe) < residual(best) {
                best = probe;
            }
        }
    }
    best
}
