use thiserror::Error;

/// Errors raised while building expressions or regions.
///
/// Every variant is raised before any tokens are produced; builders never
/// return a partially constructed [`crate::Expr`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("cannot coerce {found} into an expression (expected an expression, number or name)")]
    TypeMismatch { found: &'static str },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Structural problems with matrix rows or compound units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("matrix must have at least one row")]
    NoRows,
    #[error("matrix row {row} has no cells")]
    EmptyRow { row: usize },
    #[error("matrix row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("compound unit needs at least one numerator unit")]
    EmptyUnitNumerator,
}

/// A name was requested from one of the static catalogs but is not listed there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("unknown assembly: {0}")]
    UnknownAssembly(String),
}
