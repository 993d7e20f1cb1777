//! Symmetry-axis derivation from the packed representatives.

use crate::error::PlaceError;
use atoll_diagnostics::DiagnosticSink;
use atoll_model::{Module, ModuleTable, SymmetryGroup, SymmetryType};

/// Computes the axis position from the packed representative placement.
///
/// With at least one mirror pair, the axis must clear both the rightmost
/// (bottommost) pair representative and, per pair, the minimum position that
/// keeps the mirrored partner's near edge non-negative; a `+1.0` buffer
/// absorbs the rounding applied when partner positions become integers.
/// With only self-symmetric modules, the axis sits past the representative
/// block by half the widest straddling module plus the same buffer.
pub(crate) fn compute_axis(
    group: &SymmetryGroup,
    table: &ModuleTable,
    sink: &DiagnosticSink,
) -> Result<f64, PlaceError> {
    let vertical = group.ty() == SymmetryType::Vertical;
    let near = |m: &Module| if vertical { m.x() } else { m.y() };
    let extent = |m: &Module| if vertical { m.width() } else { m.height() };

    let axis = if !group.pairs().is_empty() {
        let mut far_edge = f64::MIN;
        let mut floor = f64::MIN;
        for pair in group.pairs() {
            let rep = lookup(table, &pair.representative)?;
            let partner = lookup(table, &pair.partner)?;
            far_edge = far_edge.max((near(rep) + extent(rep)) as f64);
            let rep_center = near(rep) as f64 + extent(rep) as f64 / 2.0;
            floor = floor.max((rep_center + extent(partner) as f64 / 2.0) / 2.0);
        }
        far_edge.max(floor) + 1.0
    } else {
        let mut far_edge = f64::MIN;
        for name in group.representatives() {
            let module = lookup(table, name)?;
            far_edge = far_edge.max((near(module) + extent(module)) as f64);
        }
        if far_edge == f64::MIN {
            return Err(PlaceError::EmptyGroup {
                group: group.name().to_string(),
            });
        }
        let mut widest = 0;
        for name in group.self_symmetric() {
            widest = widest.max(extent(lookup(table, name)?));
        }
        far_edge + widest as f64 / 2.0 + 1.0
    };

    sink.info(format!(
        "symmetry axis for group {} at {axis}",
        group.name()
    ));
    Ok(axis)
}

fn lookup<'t>(table: &'t ModuleTable, name: &str) -> Result<&'t Module, PlaceError> {
    table.get(name).ok_or_else(|| PlaceError::UnknownModule {
        name: name.to_string(),
    })
}
