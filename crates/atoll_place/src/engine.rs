//! The placement engine for one symmetry group.

use crate::error::PlaceError;
use crate::tree::{self, BStarNode, Side};
use crate::{axis, builder, compact, packer, project, validate};
use atoll_diagnostics::DiagnosticSink;
use atoll_model::{ModuleTable, SymmetryGroup};

/// Symmetry-feasible B*-tree placer for one symmetry group.
///
/// The engine owns the group record and the tree over its representatives;
/// the module table is borrowed per call and only module positions and
/// orientations are written. A typical cycle is
/// [`build_initial_tree`](Self::build_initial_tree) once, then repeated
/// [`pack`](Self::pack) calls with tree perturbations in between.
#[derive(Debug)]
pub struct AsfBStarTree {
    pub(crate) group: SymmetryGroup,
    pub(crate) root: Option<Box<BStarNode>>,
    pub(crate) preorder: Vec<String>,
    pub(crate) inorder: Vec<String>,
    pub(crate) axis: Option<f64>,
}

impl AsfBStarTree {
    /// Creates an engine for the given group. No tree exists yet;
    /// call [`build_initial_tree`](Self::build_initial_tree) before packing.
    pub fn new(group: SymmetryGroup) -> Self {
        Self {
            group,
            root: None,
            preorder: Vec::new(),
            inorder: Vec::new(),
            axis: None,
        }
    }

    /// Returns the symmetry group, including any axis written by packing.
    pub fn group(&self) -> &SymmetryGroup {
        &self.group
    }

    /// Returns the axis computed by the last successful pipeline run.
    pub fn axis_position(&self) -> Option<f64> {
        self.axis
    }

    /// Returns the node names of the last computed pre-order traversal.
    pub fn preorder(&self) -> &[String] {
        &self.preorder
    }

    /// Returns the node names of the last computed in-order traversal.
    pub fn inorder(&self) -> &[String] {
        &self.inorder
    }

    /// Returns the module names along the boundary branch (root included),
    /// or an empty list when no tree has been built.
    ///
    /// Mutation operators driving this engine use the chain to keep
    /// self-symmetric modules where the packer can center them.
    pub fn boundary_chain(&self) -> Vec<String> {
        match self.root.as_deref() {
            Some(root) => tree::boundary_chain(root, Side::boundary_of(self.group.ty()))
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Constructs the starting tree for the group.
    ///
    /// Fails with [`PlaceError::EmptyGroup`] when the group declares no
    /// modules. The resulting tree satisfies the structural and boundary
    /// invariants.
    pub fn build_initial_tree(
        &mut self,
        table: &ModuleTable,
        sink: &DiagnosticSink,
    ) -> Result<(), PlaceError> {
        let root = builder::build_initial_tree(&self.group, table)?;
        self.preorder = tree::preorder(&root);
        self.inorder = tree::inorder(&root);
        self.root = Some(root);
        self.axis = None;
        sink.info(format!(
            "built initial tree for group {} ({} nodes)",
            self.group.name(),
            self.preorder.len()
        ));
        Ok(())
    }

    /// Runs the full pipeline: pack representatives, compact, derive the
    /// axis, mirror the remaining modules, validate.
    ///
    /// Returns `false` when validation rejects the placement or a fatal
    /// error aborted it; fatal errors are additionally reported into the
    /// sink. Module positions are overwritten either way.
    pub fn pack(&mut self, table: &mut ModuleTable, sink: &DiagnosticSink) -> bool {
        match self.try_pack(table, sink) {
            Ok(accepted) => accepted,
            Err(err) => {
                sink.error(err.to_string());
                false
            }
        }
    }

    fn try_pack(
        &mut self,
        table: &mut ModuleTable,
        sink: &DiagnosticSink,
    ) -> Result<bool, PlaceError> {
        let Some(root) = self.root.as_deref() else {
            return Err(PlaceError::StructuralInvalid {
                reason: "tree has not been built".to_string(),
            });
        };
        self.preorder = tree::preorder(root);
        self.inorder = tree::inorder(root);

        // Perturbations between packs can break either invariant.
        let representatives = self.group.representatives();
        tree::validate_structure(root, &representatives)?;
        tree::validate_boundary(
            root,
            Side::boundary_of(self.group.ty()),
            self.group.self_symmetric(),
        )?;

        sink.info(format!(
            "packing group {} ({} representatives)",
            self.group.name(),
            representatives.len()
        ));
        packer::pack_representatives(root, table, sink)?;
        compact::compact_representatives(&self.group, table)?;
        sink.info("compacted representative placement");

        let axis_value = axis::compute_axis(&self.group, table, sink)?;
        self.axis = Some(axis_value);
        self.group.set_axis_position(axis_value);

        project::project_symmetric(&self.group, axis_value, table, sink)?;

        let accepted = validate::validate_no_negative(&self.group, table, sink)
            && validate::validate_symmetry(&self.group, axis_value, table, sink)
            && validate::validate_no_overlap(&self.group, table, sink);
        validate::validate_connectivity(&self.group, table, sink);
        Ok(accepted)
    }

    pub(crate) fn refresh_traversals(&mut self) {
        match self.root.as_deref() {
            Some(root) => {
                self.preorder = tree::preorder(root);
                self.inorder = tree::inorder(root);
            }
            None => {
                self.preorder.clear();
                self.inorder.clear();
            }
        }
    }
}
