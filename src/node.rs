//! Point masses with a rectangular collision box.

use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::vec::Vec;

/// A point mass ("weight") of the network.
///
/// `position` is the center of the node's box; `half_extent` holds the half
/// width (and half height in 2D) used for spring attachment points and for
/// AABB overlap tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<V: Vec> {
    pub position: V,
    pub velocity: V,
    mass: V::Scalar,
    inv_mass: V::Scalar,
    half_extent: V,
}

impl<V: Vec> Node<V> {
    /// Create a node at rest. `size` is the full box extent per axis.
    pub fn new(position: V, mass: V::Scalar, size: V) -> PhysicsResult<Self> {
        if !(mass > V::Scalar::zero()) || !mass.is_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        let valid_size = size.is_finite()
            && (0..V::DIM).all(|axis| size.component(axis) >= V::Scalar::zero());
        if !valid_size {
            return Err(PhysicsError::InvalidExtent);
        }
        Ok(Node {
            position,
            velocity: V::zero(),
            mass,
            inv_mass: V::Scalar::one() / mass,
            half_extent: size.scale(V::Scalar::half()),
        })
    }

    /// Same node with an initial velocity.
    pub fn with_velocity(mut self, velocity: V) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> V::Scalar { self.mass }
    pub fn inv_mass(&self) -> V::Scalar { self.inv_mass }
    pub fn half_extent(&self) -> V { self.half_extent }

    /// Full box extent (width, height).
    pub fn size(&self) -> V {
        self.half_extent.scale(V::Scalar::two())
    }

    /// Lower corner of the bounding box.
    pub fn box_min(&self) -> V {
        self.position - self.half_extent
    }

    /// Upper corner of the bounding box.
    pub fn box_max(&self) -> V {
        self.position + self.half_extent
    }

    /// Add a velocity delta. Positions are left untouched.
    pub fn apply_impulse(&mut self, delta_v: V) {
        self.velocity = self.velocity + delta_v;
    }

    /// ½·m·|v|².
    pub fn kinetic_energy(&self) -> V::Scalar {
        V::Scalar::half() * self.mass * self.velocity.length_sq()
    }

    /// m·v.
    pub fn momentum(&self) -> V {
        self.velocity.scale(self.mass)
    }
}
