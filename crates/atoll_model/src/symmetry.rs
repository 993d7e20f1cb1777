//! Symmetry-group constraint records.

use crate::geom::Rect;
use crate::table::ModuleTable;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// The orientation of a symmetry group's mirror axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SymmetryType {
    /// Mirror across a vertical line `x = axis`.
    Vertical,
    /// Mirror across a horizontal line `y = axis`.
    Horizontal,
}

impl fmt::Display for SymmetryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymmetryType::Vertical => write!(f, "vertical"),
            SymmetryType::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Two modules related by mirror symmetry.
///
/// The representative is the member stored in the placement tree; the
/// partner's position is derived by mirroring across the group axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymmetryPair {
    /// The module placed directly by the engine.
    pub representative: String,
    /// The module whose position is derived by mirroring.
    pub partner: String,
}

/// A group of modules constrained to be symmetric about a common axis.
///
/// A group enumerates mirror pairs and self-symmetric modules (modules that
/// must straddle the axis with their center on it). The axis position itself
/// is an output of placement, written back via
/// [`set_axis_position`](Self::set_axis_position).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymmetryGroup {
    name: String,
    ty: SymmetryType,
    pairs: Vec<SymmetryPair>,
    self_symmetric: Vec<String>,
    axis_position: Option<f64>,
}

impl SymmetryGroup {
    /// Creates an empty group with the given name and axis orientation.
    pub fn new(name: impl Into<String>, ty: SymmetryType) -> Self {
        Self {
            name: name.into(),
            ty,
            pairs: Vec::new(),
            self_symmetric: Vec::new(),
            axis_position: None,
        }
    }

    /// Returns the group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the axis orientation.
    pub fn ty(&self) -> SymmetryType {
        self.ty
    }

    /// Declares a mirror pair; the first module becomes the representative.
    pub fn add_pair(&mut self, representative: impl Into<String>, partner: impl Into<String>) {
        self.pairs.push(SymmetryPair {
            representative: representative.into(),
            partner: partner.into(),
        });
    }

    /// Declares a self-symmetric module.
    pub fn add_self_symmetric(&mut self, name: impl Into<String>) {
        self.self_symmetric.push(name.into());
    }

    /// Returns the declared mirror pairs in declaration order.
    pub fn pairs(&self) -> &[SymmetryPair] {
        &self.pairs
    }

    /// Returns the self-symmetric module names in declaration order.
    pub fn self_symmetric(&self) -> &[String] {
        &self.self_symmetric
    }

    /// Returns the axis position, if placement has assigned one.
    pub fn axis_position(&self) -> Option<f64> {
        self.axis_position
    }

    /// Records the axis position computed by placement.
    pub fn set_axis_position(&mut self, axis: f64) {
        self.axis_position = Some(axis);
    }

    /// Returns the representative set: pair representatives followed by
    /// self-symmetric modules, in declaration order.
    pub fn representatives(&self) -> Vec<&str> {
        self.pairs
            .iter()
            .map(|p| p.representative.as_str())
            .chain(self.self_symmetric.iter().map(String::as_str))
            .collect()
    }

    /// Returns the partner of a pair representative, if `name` is one.
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.representative == name)
            .map(|p| p.partner.as_str())
    }

    /// Returns `true` if `name` is declared self-symmetric.
    pub fn is_self_symmetric(&self, name: &str) -> bool {
        self.self_symmetric.iter().any(|s| s == name)
    }

    /// Returns every module name in the group: both pair members plus the
    /// self-symmetric modules, in declaration order.
    pub fn members(&self) -> Vec<&str> {
        self.pairs
            .iter()
            .flat_map(|p| [p.representative.as_str(), p.partner.as_str()])
            .chain(self.self_symmetric.iter().map(String::as_str))
            .collect()
    }

    /// Returns `true` if the group's placed modules form a single
    /// edge-connected region (a symmetry island).
    ///
    /// Two modules are adjacent when their rectangles share a boundary edge
    /// of positive length. A group with at most one placed member is an
    /// island. Members missing from the table make the predicate `false`.
    pub fn is_symmetry_island(&self, modules: &ModuleTable) -> bool {
        let members = self.members();
        if members.len() <= 1 {
            return true;
        }

        let mut rects: Vec<Rect> = Vec::with_capacity(members.len());
        for name in &members {
            match modules.get(name) {
                Some(module) => rects.push(module.rect()),
                None => return false,
            }
        }

        // BFS over edge-adjacency from the first member.
        let mut visited = vec![false; rects.len()];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0);

        while let Some(i) = queue.pop_front() {
            for j in 0..rects.len() {
                if !visited[j] && rects[i].touches(rects[j]) {
                    visited[j] = true;
                    queue.push_back(j);
                }
            }
        }

        visited.into_iter().all(|v| v)
    }
}
