//! Initial tree construction.
//!
//! The starting tree decides the rough shape of the first packing: for a
//! vertical group the modules should stack (right-child chains), for a
//! horizontal group they should line up (left-child chains). On top of that
//! the tree must keep every self-symmetric module on the boundary branch so
//! the packer gives all of them the same boundary coordinate.

use crate::error::PlaceError;
use crate::tree::{self, BStarNode, Side};
use atoll_model::{ModuleTable, SymmetryGroup, SymmetryType};

/// Builds the starting tree for a group.
///
/// Self-symmetric modules are chained along the boundary branch directly
/// under the root; the remaining representatives are sorted ascending by
/// their minor dimension and inserted alternately extending the chain and
/// spurring off it. The returned tree satisfies both the structural and the
/// boundary invariants.
pub(crate) fn build_initial_tree(
    group: &SymmetryGroup,
    table: &ModuleTable,
) -> Result<Box<BStarNode>, PlaceError> {
    let boundary = Side::boundary_of(group.ty());

    let mut self_sym: Vec<&str> = group.self_symmetric().iter().map(String::as_str).collect();
    for name in &self_sym {
        if !table.contains(name) {
            return Err(PlaceError::UnknownModule {
                name: (*name).to_string(),
            });
        }
    }

    // Pair representatives, sorted ascending by the minor dimension so that
    // early-placed modules leave a low contour for later stacking.
    let mut keyed: Vec<(i32, &str)> = Vec::new();
    for pair in group.pairs() {
        let name = pair.representative.as_str();
        if group.is_self_symmetric(name) {
            continue;
        }
        let module = table.get(name).ok_or_else(|| PlaceError::UnknownModule {
            name: name.to_string(),
        })?;
        let minor = match group.ty() {
            SymmetryType::Vertical => module.height(),
            SymmetryType::Horizontal => module.width(),
        };
        keyed.push((minor, name));
    }
    keyed.sort_by_key(|&(minor, _)| minor);
    let mut others: Vec<&str> = keyed.into_iter().map(|(_, name)| name).collect();

    let root_name = if !others.is_empty() {
        others.remove(0)
    } else if !self_sym.is_empty() {
        self_sym.remove(0)
    } else {
        return Err(PlaceError::EmptyGroup {
            group: group.name().to_string(),
        });
    };
    let mut root = BStarNode::leaf(root_name);

    // Self-symmetric modules form the boundary chain.
    for name in &self_sym {
        tree::append_to_chain(&mut root, boundary, BStarNode::leaf(*name));
    }

    // Remaining representatives alternate between extending the boundary
    // direction and spurring off it; the first one is appended past the
    // self-symmetric chain to keep that chain intact.
    let mut cursor = String::new();
    for (i, name) in others.iter().enumerate() {
        if i == 0 {
            tree::append_to_chain(&mut root, boundary, BStarNode::leaf(*name));
        } else {
            let side = if i % 2 == 0 {
                boundary
            } else {
                boundary.opposite()
            };
            let cursor_vacant = tree::find_node_mut(&mut root, &cursor)
                .map(|n| n.child(side).is_none())
                .unwrap_or(false);
            let target = if cursor_vacant {
                tree::find_node_mut(&mut root, &cursor)
            } else {
                tree::find_vacant_slot(&mut root, side)
            };
            let Some(target) = target else {
                return Err(PlaceError::StructuralInvalid {
                    reason: "no vacant slot during initial construction".to_string(),
                });
            };
            target.set_child(side, BStarNode::leaf(*name));
        }
        cursor = (*name).to_string();
    }

    let representatives = group.representatives();
    tree::validate_structure(&root, &representatives)?;
    tree::validate_boundary(&root, boundary, group.self_symmetric())?;
    Ok(root)
}
