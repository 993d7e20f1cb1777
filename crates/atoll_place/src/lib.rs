//! Symmetry-feasible B*-tree placement for analog block layout.
//!
//! This crate places one symmetry group: a set of rectangular modules
//! partitioned into mirror pairs and self-symmetric modules that must share
//! a common axis. The engine keeps a B*-tree over the *representative*
//! modules (one per pair, plus every self-symmetric module) whose structure
//! guarantees a symmetric placement is feasible, packs it against a skyline
//! contour, derives the symmetry axis, and mirrors the remaining modules
//! across it.
//!
//! # Pipeline
//!
//! 1. **Build** — [`AsfBStarTree::build_initial_tree`] constructs a starting
//!    tree with every self-symmetric module on the boundary branch
//! 2. **Pack** — BFS placement of representatives against the contour
//! 3. **Compact** — left/down shifts squeeze slack out of the representatives
//! 4. **Axis + mirror** — the axis is derived and partners / self-symmetric
//!    modules are positioned across it
//! 5. **Validate** — non-negativity, symmetry residuals, and overlap gate the
//!    result
//!
//! # Usage
//!
//! ```ignore
//! use atoll_place::AsfBStarTree;
//!
//! let mut engine = AsfBStarTree::new(group);
//! engine.build_initial_tree(&modules, &sink)?;
//! if engine.pack(&mut modules, &sink) {
//!     // positions in `modules` satisfy the symmetry constraints
//! }
//! ```
//!
//! Between `pack()` calls an outer optimizer may perturb the tree through the
//! operators in [`engine`] (`swap_random_nodes`, `move_random_node`,
//! `rotate_random_module`); `pack()` re-validates the tree each time and
//! reports an unusable placement by returning `false`.

#![warn(missing_docs)]

pub mod contour;
pub mod engine;
pub mod error;
pub mod tree;
pub mod validate;

mod axis;
mod builder;
mod compact;
mod packer;
mod perturb;
mod project;

pub use contour::{Contour, ContourPoint};
pub use engine::AsfBStarTree;
pub use error::PlaceError;
pub use tree::{BStarNode, Side};
