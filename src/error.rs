//! Error types for network construction and excitation.

use thiserror::Error;

/// Result alias used by every fallible constructor in the crate.
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Errors that can occur while building or driving a spring network.
///
/// Numerical guards inside a step (near-zero spring length, coincident
/// collision centers) are not errors; they resolve to a zero contribution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Box extents must be non-negative and finite.
    #[error("node extent must be non-negative and finite")]
    InvalidExtent,
    /// Stiffness must be positive and finite.
    #[error("stiffness must be positive and finite")]
    InvalidStiffness,
    /// Rest length must be positive and finite.
    #[error("rest length must be positive and finite")]
    InvalidRestLength,
    /// Wall bounds must satisfy `min < max` on every axis.
    #[error("wall bounds must satisfy min < max on every axis")]
    InvalidBounds,
    /// A link must join two distinct endpoints, at least one of them a node.
    #[error("invalid link: {reason}")]
    InvalidLink { reason: &'static str },
    /// Node index is out of bounds.
    #[error("node index {index} out of bounds (count: {count})")]
    NodeOutOfBounds { index: usize, count: usize },
    /// Grid shape does not cover the node collection exactly.
    #[error("grid shape {cols}x{rows} does not match node count {nodes}")]
    ShapeMismatch { cols: usize, rows: usize, nodes: usize },
    /// Grid dimensions must be at least 1x1.
    #[error("grid must be at least 1x1")]
    InvalidGridDimensions,
    /// A chain needs at least one node, and two when it has no walls.
    #[error("chain needs at least {min} nodes, got {count}")]
    InvalidChainLength { count: usize, min: usize },
    /// Nodes do not fit between the walls with a positive spring gap.
    #[error("nodes do not fit between the walls along axis {axis}")]
    NonPositiveGap { axis: usize },
    /// A wall spring is anchored off the configured walls.
    #[error("wall spring anchor on axis {axis} does not lie on the configured walls")]
    WallMismatch { axis: usize },
    /// A simulation parameter is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}
