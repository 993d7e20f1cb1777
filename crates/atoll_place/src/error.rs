//! Error types for the placement engine.

/// Fatal failures of a placement attempt.
///
/// These abort the current `pack()` call; the outer optimizer treats them
/// like a rejected perturbation and retries with a different tree. Validator
/// rejections (overlap, symmetry residual, negative coordinates) are not
/// errors — they surface as a `false` return from `pack()`.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// The symmetry group declares no modules to place.
    #[error("symmetry group {group} has no modules to place")]
    EmptyGroup {
        /// The offending group's name.
        group: String,
    },

    /// The tree references a module name missing from the module table.
    #[error("module {name} is not in the module table")]
    UnknownModule {
        /// The unresolved module name.
        name: String,
    },

    /// The tree violates uniqueness or membership invariants.
    ///
    /// Indicates a bug in the mutation operators applied between packs.
    #[error("invalid tree structure: {reason}")]
    StructuralInvalid {
        /// Description of the violated invariant.
        reason: String,
    },

    /// A self-symmetric module is not on the group's boundary branch.
    #[error("self-symmetric module {name} is not on the boundary branch")]
    BoundaryInvariant {
        /// The misplaced module's name.
        name: String,
    },

    /// Coordinate arithmetic overflowed the layout grid.
    #[error("coordinate overflow while placing {name}")]
    CoordinateOverflow {
        /// The module whose placement overflowed.
        name: String,
    },
}
