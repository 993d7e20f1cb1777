//! Random tree perturbation for the outer annealing loop.
//!
//! The optimizer driving this engine explores the solution space by mutating
//! the tree between packs. The operators here stay symmetry-feasible: node
//! swaps pair modules of the same class, and a moved self-symmetric leaf
//! reattaches only at the end of the boundary chain. `pack()` still
//! revalidates both invariants, so even a misbehaving caller cannot produce
//! a silently broken placement.

use crate::engine::AsfBStarTree;
use crate::tree::{self, BStarNode, Side};
use atoll_model::ModuleTable;
use rand::Rng;

/// Bounded retries for random pair selection.
const MAX_TRIES: usize = 50;

impl AsfBStarTree {
    /// Rotates a random representative module a quarter turn.
    ///
    /// Returns the rotated module's name; `None` when the group has no
    /// representatives or the pick is missing from the table. The partner of
    /// a rotated pair representative is brought back into agreement by the
    /// next projection.
    pub fn rotate_random_module(
        &self,
        table: &mut ModuleTable,
        rng: &mut impl Rng,
    ) -> Option<String> {
        let representatives = self.group.representatives();
        if representatives.is_empty() {
            return None;
        }
        let name = representatives[rng.gen_range(0..representatives.len())];
        table.get_mut(name)?.rotate();
        Some(name.to_string())
    }

    /// Exchanges the modules held by two random nodes of the same class
    /// (self-symmetric with self-symmetric, others with others).
    ///
    /// Returns `false` when no usable pair was found.
    pub fn swap_random_nodes(&mut self, rng: &mut impl Rng) -> bool {
        let names = match self.root.as_deref() {
            Some(root) => tree::preorder(root),
            None => return false,
        };
        if names.len() < 2 {
            return false;
        }

        let mut pick = None;
        for _ in 0..MAX_TRIES {
            let a = rng.gen_range(0..names.len());
            let b = rng.gen_range(0..names.len());
            if a == b {
                continue;
            }
            if self.group.is_self_symmetric(&names[a]) != self.group.is_self_symmetric(&names[b]) {
                continue;
            }
            pick = Some((a, b));
            break;
        }
        let Some((a, b)) = pick else {
            return false;
        };

        if let Some(root) = self.root.as_deref_mut() {
            swap_payloads(root, &names[a], &names[b]);
        }
        self.refresh_traversals();
        true
    }

    /// Detaches a random non-root leaf and reattaches it at a random vacant
    /// slot; self-symmetric leaves reattach at the boundary chain's end.
    ///
    /// Returns `false` when the tree has no movable leaf.
    pub fn move_random_node(&mut self, rng: &mut impl Rng) -> bool {
        let boundary = Side::boundary_of(self.group.ty());

        let leaves: Vec<String> = match self.root.as_deref() {
            Some(root) => {
                let mut leaves = Vec::new();
                collect_leaves(root, &mut leaves);
                leaves.retain(|name| *name != root.module);
                leaves
            }
            None => return false,
        };
        if leaves.is_empty() {
            return false;
        }

        let name = leaves[rng.gen_range(0..leaves.len())].clone();
        let Some(node) = tree::detach_leaf(&mut self.root, &name) else {
            return false;
        };
        let Some(root) = self.root.as_deref_mut() else {
            // Unreachable for a non-root leaf; restore rather than lose the node.
            self.root = Some(node);
            return false;
        };

        if self.group.is_self_symmetric(&name) {
            tree::append_to_chain(root, boundary, node);
        } else {
            let mut slots = Vec::new();
            collect_vacant_slots(root, &mut slots);
            let (owner, side) = slots[rng.gen_range(0..slots.len())].clone();
            match tree::find_node_mut(root, &owner) {
                Some(owner) => owner.set_child(side, node),
                None => tree::append_to_chain(root, boundary, node),
            }
        }
        self.refresh_traversals();
        true
    }
}

/// Exchanges the module names held by the nodes for `a` and `b`.
fn swap_payloads(node: &mut BStarNode, a: &str, b: &str) {
    if node.module == a {
        node.module = b.to_string();
    } else if node.module == b {
        node.module = a.to_string();
    }
    if let Some(left) = node.left.as_deref_mut() {
        swap_payloads(left, a, b);
    }
    if let Some(right) = node.right.as_deref_mut() {
        swap_payloads(right, a, b);
    }
}

fn collect_leaves(node: &BStarNode, out: &mut Vec<String>) {
    if node.is_leaf() {
        out.push(node.module.clone());
    }
    if let Some(left) = node.left.as_deref() {
        collect_leaves(left, out);
    }
    if let Some(right) = node.right.as_deref() {
        collect_leaves(right, out);
    }
}

fn collect_vacant_slots(node: &BStarNode, out: &mut Vec<(String, Side)>) {
    if node.left.is_none() {
        out.push((node.module.clone(), Side::Left));
    }
    if node.right.is_none() {
        out.push((node.module.clone(), Side::Right));
    }
    if let Some(left) = node.left.as_deref() {
        collect_vacant_slots(left, out);
    }
    if let Some(right) = node.right.as_deref() {
        collect_vacant_slots(right, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoll_diagnostics::DiagnosticSink;
    use atoll_model::{Module, SymmetryGroup, SymmetryType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn built_engine() -> (AsfBStarTree, ModuleTable) {
        let mut group = SymmetryGroup::new("g", SymmetryType::Vertical);
        group.add_self_symmetric("s");
        for name in ["o1", "o2", "o3", "o4"] {
            group.add_pair(name, format!("{name}_m"));
        }
        let mut table = ModuleTable::new();
        table.insert(Module::new("s", 4, 2));
        for (i, name) in ["o1", "o2", "o3", "o4"].iter().enumerate() {
            let dim = i as i32 + 1;
            table.insert(Module::new(*name, dim, dim));
            table.insert(Module::new(format!("{name}_m"), dim, dim));
        }
        let mut engine = AsfBStarTree::new(group);
        let sink = DiagnosticSink::new();
        engine.build_initial_tree(&table, &sink).unwrap();
        (engine, table)
    }

    fn node_set(engine: &AsfBStarTree) -> BTreeSet<String> {
        engine.preorder().iter().cloned().collect()
    }

    #[test]
    fn swap_preserves_membership_and_boundary() {
        let (mut engine, mut table) = built_engine();
        let before = node_set(&engine);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            engine.swap_random_nodes(&mut rng);
            assert_eq!(node_set(&engine), before);
        }
        // The tree is still packable: both invariants hold.
        let sink = DiagnosticSink::new();
        engine.pack(&mut table, &sink);
        assert!(!sink
            .diagnostics()
            .iter()
            .any(|d| d.message.contains("boundary")));
    }

    #[test]
    fn move_preserves_membership_and_boundary() {
        let (mut engine, mut table) = built_engine();
        let before = node_set(&engine);
        let mut rng = StdRng::seed_from_u64(11);

        let mut moved = 0;
        for _ in 0..20 {
            if engine.move_random_node(&mut rng) {
                moved += 1;
            }
            assert_eq!(node_set(&engine), before);
        }
        assert!(moved > 0);

        let sink = DiagnosticSink::new();
        engine.pack(&mut table, &sink);
        assert!(!sink
            .diagnostics()
            .iter()
            .any(|d| d.message.contains("boundary")));
    }

    #[test]
    fn rotate_swaps_module_dimensions() {
        let (engine, mut table) = built_engine();
        let mut rng = StdRng::seed_from_u64(3);
        let name = engine.rotate_random_module(&mut table, &mut rng).unwrap();
        let module = table.get(&name).unwrap();
        assert!(module.rotated());
    }

    #[test]
    fn single_node_tree_has_no_moves() {
        let mut group = SymmetryGroup::new("g", SymmetryType::Vertical);
        group.add_pair("a", "a_m");
        let mut table = ModuleTable::new();
        table.insert(Module::new("a", 2, 2));
        table.insert(Module::new("a_m", 2, 2));
        let mut engine = AsfBStarTree::new(group);
        let sink = DiagnosticSink::new();
        engine.build_initial_tree(&table, &sink).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        assert!(!engine.swap_random_nodes(&mut rng));
        assert!(!engine.move_random_node(&mut rng));
    }

    #[test]
    fn operators_on_unbuilt_engine_are_inert() {
        let group = SymmetryGroup::new("g", SymmetryType::Vertical);
        let mut engine = AsfBStarTree::new(group);
        let mut table = ModuleTable::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(engine.rotate_random_module(&mut table, &mut rng).is_none());
        assert!(!engine.swap_random_nodes(&mut rng));
        assert!(!engine.move_random_node(&mut rng));
    }
}
