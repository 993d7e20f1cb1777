//! BFS packing of the representative tree against the contour.
//!
//! The tree shape encodes the geometry: a left child sits to the right of
//! its parent, a right child sits directly above it. Packing walks the tree
//! breadth-first so every node's parent is positioned first, and consults the
//! contour to decide how high each left child must go.

use crate::contour::Contour;
use crate::error::PlaceError;
use crate::tree::BStarNode;
use atoll_diagnostics::DiagnosticSink;
use atoll_model::ModuleTable;
use std::collections::VecDeque;

/// Assigns positions to every representative in the tree.
///
/// The root lands at `(0, 0)`. A left child is placed at `x + w`, keeping the
/// parent's `y` when the contour under it allows, otherwise lifted onto the
/// contour. A right child is placed at the parent's `x`, directly on top of
/// it. A fresh contour is built for the call and dropped with it.
pub(crate) fn pack_representatives(
    root: &BStarNode,
    table: &mut ModuleTable,
    sink: &DiagnosticSink,
) -> Result<(), PlaceError> {
    let mut contour = Contour::new();
    let mut queue: VecDeque<(&BStarNode, i32, i32)> = VecDeque::new();

    let (w, h) = dims(table, &root.module)?;
    place(table, &root.module, 0, 0)?;
    contour.insert(0, 0, w, h);
    queue.push_back((root, 0, 0));

    let mut placed = 1usize;
    while let Some((node, x, y)) = queue.pop_front() {
        let (w, h) = dims(table, &node.module)?;

        if let Some(left) = node.left.as_deref() {
            let (lw, lh) = dims(table, &left.module)?;
            let lx = checked(x.checked_add(w), &left.module)?;
            checked(lx.checked_add(lw), &left.module)?;
            let lift = contour.max_height_over(lx, lw);
            let ly = if lift <= y { y } else { lift };
            checked(ly.checked_add(lh), &left.module)?;
            place(table, &left.module, lx, ly)?;
            contour.insert(lx, ly, lw, lh);
            queue.push_back((left, lx, ly));
            placed += 1;
        }

        if let Some(right) = node.right.as_deref() {
            let (rw, rh) = dims(table, &right.module)?;
            let ry = checked(y.checked_add(h), &right.module)?;
            checked(x.checked_add(rw), &right.module)?;
            checked(ry.checked_add(rh), &right.module)?;
            place(table, &right.module, x, ry)?;
            contour.insert(x, ry, rw, rh);
            queue.push_back((right, x, ry));
            placed += 1;
        }
    }

    sink.info(format!("packed {placed} representative modules"));
    Ok(())
}

fn checked(value: Option<i32>, name: &str) -> Result<i32, PlaceError> {
    value.ok_or_else(|| PlaceError::CoordinateOverflow {
        name: name.to_string(),
    })
}

fn dims(table: &ModuleTable, name: &str) -> Result<(i32, i32), PlaceError> {
    table
        .get(name)
        .map(|m| (m.width(), m.height()))
        .ok_or_else(|| PlaceError::UnknownModule {
            name: name.to_string(),
        })
}

fn place(table: &mut ModuleTable, name: &str, x: i32, y: i32) -> Result<(), PlaceError> {
    table
        .get_mut(name)
        .ok_or_else(|| PlaceError::UnknownModule {
            name: name.to_string(),
        })?
        .set_position(x, y);
    Ok(())
}
