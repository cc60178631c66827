//! Rigid domain walls.

use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::link::Endpoint;
use crate::node::Node;
use crate::vec::Vec;

/// Axis-aligned wall rectangle (interval in 1D).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<V: Vec> {
    pub min: V,
    pub max: V,
}

impl<V: Vec> Bounds<V> {
    /// `min` holds the left (and lower) wall, `max` the right (and upper).
    pub fn new(min: V, max: V) -> PhysicsResult<Self> {
        let bounds = Bounds { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        let ordered = (0..V::DIM).all(|axis| self.min.component(axis) < self.max.component(axis));
        if ordered && self.min.is_finite() && self.max.is_finite() {
            Ok(())
        } else {
            Err(PhysicsError::InvalidBounds)
        }
    }

    /// Fail if a wall anchor does not sit on one of these walls.
    ///
    /// Only anchors pinned on a single axis are wall anchors; node ends and
    /// 2D point anchors pass unchecked.
    pub fn check_anchor(&self, endpoint: &Endpoint<V>) -> PhysicsResult<()> {
        let Endpoint::Wall { position, axis: mask } = *endpoint else {
            return Ok(());
        };
        let mut pinned = (0..V::DIM).filter(|&axis| mask.component(axis) > V::Scalar::zero());
        let (Some(axis), None) = (pinned.next(), pinned.next()) else {
            return Ok(());
        };
        let coordinate = position.component(axis);
        if coordinate == self.min.component(axis) || coordinate == self.max.component(axis) {
            Ok(())
        } else {
            Err(PhysicsError::WallMismatch { axis })
        }
    }

    /// Whether a node's whole box lies inside the walls (touching allowed).
    pub fn contains(&self, node: &Node<V>) -> bool {
        let (lo, hi) = (node.box_min(), node.box_max());
        (0..V::DIM).all(|axis| {
            lo.component(axis) >= self.min.component(axis) && hi.component(axis) <= self.max.component(axis)
        })
    }
}

/// How a node that crossed a wall is brought back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WallMode {
    /// Clamp the box back against the wall and reflect the velocity.
    #[default]
    Hard,
    /// Reflect the velocity only; the position is left where the integrator
    /// put it.
    Reflective,
}

/// Push every node back inside `bounds`. Returns the number of wall hits
/// (one per node and axis side).
///
/// On every axis where a box is past a wall its velocity component is
/// negated, whatever its sign.
pub fn enforce_walls<V: Vec>(nodes: &mut [Node<V>], bounds: &Bounds<V>, mode: WallMode) -> usize {
    let mut hits = 0;
    for node in nodes.iter_mut() {
        let half = node.half_extent();
        for axis in 0..V::DIM {
            let lo = bounds.min.component(axis) + half.component(axis);
            let hi = bounds.max.component(axis) - half.component(axis);
            let p = node.position.component(axis);
            let v = node.velocity.component(axis);

            let limit = if p < lo {
                lo
            } else if p > hi {
                hi
            } else {
                continue;
            };

            hits += 1;
            if mode == WallMode::Hard {
                node.position = node.position.with_component(axis, limit);
            }
            node.velocity = node.velocity.with_component(axis, -v);
        }
    }
    hits
}
