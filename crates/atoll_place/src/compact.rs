//! Post-pack compaction of the representative placement.
//!
//! Packing can leave slack orthogonal to the stacking direction. Compaction
//! translates the representatives to the origin, then sweeps them in
//! coordinate order, sliding each module as far left (then down) as the
//! modules already swept allow. Only representatives move; partners and
//! self-symmetric modules are rebuilt from the compacted placement by the
//! projection stage that follows.

use crate::error::PlaceError;
use atoll_model::{ModuleTable, Rect, SymmetryGroup, SymmetryType};

/// Compacts the representative placement in place.
///
/// Vertical groups compact x first, then y; horizontal groups the reverse,
/// so the dimension orthogonal to the stack always tightens first.
pub(crate) fn compact_representatives(
    group: &SymmetryGroup,
    table: &mut ModuleTable,
) -> Result<(), PlaceError> {
    let mut placed: Vec<(String, Rect)> = Vec::new();
    for name in group.representatives() {
        let module = table.get(name).ok_or_else(|| PlaceError::UnknownModule {
            name: name.to_string(),
        })?;
        placed.push((name.to_string(), module.rect()));
    }
    if placed.is_empty() {
        return Ok(());
    }

    // Translate so the placement starts at the origin.
    let min_x = placed.iter().map(|(_, r)| r.x).fold(i32::MAX, i32::min);
    let min_y = placed.iter().map(|(_, r)| r.y).fold(i32::MAX, i32::min);
    for (_, rect) in &mut placed {
        rect.x -= min_x;
        rect.y -= min_y;
    }

    match group.ty() {
        SymmetryType::Vertical => {
            shift_left(&mut placed);
            shift_down(&mut placed);
        }
        SymmetryType::Horizontal => {
            shift_down(&mut placed);
            shift_left(&mut placed);
        }
    }

    for (name, rect) in &placed {
        table
            .get_mut(name)
            .ok_or_else(|| PlaceError::UnknownModule { name: name.clone() })?
            .set_position(rect.x, rect.y);
    }
    Ok(())
}

/// Slides each module as far left as the already-swept modules allow.
///
/// Modules are visited in ascending x; a module may move left until it would
/// enter any earlier module whose y-span overlaps its own.
fn shift_left(placed: &mut [(String, Rect)]) {
    placed.sort_by_key(|(_, r)| r.x);
    for i in 1..placed.len() {
        let mut floor = 0;
        for j in 0..i {
            let prev = placed[j].1;
            let curr = placed[i].1;
            let y_overlap = prev.y < curr.top() && curr.y < prev.top();
            if y_overlap {
                floor = floor.max(prev.right());
            }
        }
        if floor < placed[i].1.x {
            placed[i].1.x = floor;
        }
    }
}

/// Slides each module as far down as the already-swept modules allow.
fn shift_down(placed: &mut [(String, Rect)]) {
    placed.sort_by_key(|(_, r)| r.y);
    for i in 1..placed.len() {
        let mut floor = 0;
        for j in 0..i {
            let prev = placed[j].1;
            let curr = placed[i].1;
            let x_overlap = prev.x < curr.right() && curr.x < prev.right();
            if x_overlap {
                floor = floor.max(prev.top());
            }
        }
        if floor < placed[i].1.y {
            placed[i].1.y = floor;
        }
    }
}
