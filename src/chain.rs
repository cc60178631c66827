//! Chains of weights strung along the x axis.

use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::link::{Endpoint, Link, Side};
use crate::node::Node;
use crate::topology::{spread, GridShape, Topology};
use crate::vec::Vec;
use crate::walls::Bounds;
use alloc::vec::Vec as AllocVec;

/// Configuration for creating a chain.
#[derive(Clone, Debug)]
pub struct ChainConfig<V: Vec> {
    /// Number of weights.
    pub count: usize,
    pub node_mass: V::Scalar,
    /// Stiffness of every spring in the chain.
    pub stiffness: V::Scalar,
    /// Full box extent of each weight.
    pub node_size: V,
    /// Center line of the chain. Its x component is ignored.
    pub baseline: V,
    /// Attach the end weights to the left and right walls.
    pub walled: bool,
}

impl<V: Vec> ChainConfig<V> {
    /// A walled chain of `count` unit weights with unit stiffness.
    pub fn new(count: usize) -> Self {
        ChainConfig {
            count,
            node_mass: V::Scalar::one(),
            stiffness: V::Scalar::one(),
            node_size: V::splat(V::Scalar::one()),
            baseline: V::zero(),
            walled: true,
        }
    }

    pub fn with_mass(mut self, mass: V::Scalar) -> Self {
        self.node_mass = mass;
        self
    }

    pub fn with_stiffness(mut self, stiffness: V::Scalar) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_node_size(mut self, size: V) -> Self {
        self.node_size = size;
        self
    }

    pub fn with_baseline(mut self, baseline: V) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_walls(mut self, walled: bool) -> Self {
        self.walled = walled;
        self
    }
}

impl<V: Vec> Topology<V> {
    /// Build a chain between the left and right walls of `bounds`.
    ///
    /// Weights are spaced evenly along x. A walled chain gets `count + 1`
    /// springs (wall, weights, wall); a free chain `count - 1` and its end
    /// weights start touching the walls. Every spring starts at its rest
    /// length.
    pub fn chain(config: &ChainConfig<V>, bounds: &Bounds<V>) -> PhysicsResult<Self> {
        let count = config.count;
        let min = if config.walled { 1 } else { 2 };
        if count < min {
            return Err(PhysicsError::InvalidChainLength { count, min });
        }
        bounds.validate()?;

        let (left, right) = (bounds.min.component(0), bounds.max.component(0));
        let (first, pitch) = spread(left, right, count, config.node_size.component(0), config.walled, 0)?;

        let nodes = (0..count)
            .map(|i| {
                let x = first + pitch * V::Scalar::from_usize(i);
                Node::new(config.baseline.with_component(0, x), config.node_mass, config.node_size)
            })
            .collect::<PhysicsResult<AllocVec<_>>>()?;

        let k = config.stiffness;
        let mut links = AllocVec::with_capacity(count + 1);
        if config.walled {
            links.push(Link::from_geometry(Endpoint::wall(0, left), Endpoint::node(0, Side::Left), k, &nodes)?);
        }
        for i in 0..count - 1 {
            links.push(Link::from_geometry(
                Endpoint::node(i, Side::Right),
                Endpoint::node(i + 1, Side::Left),
                k,
                &nodes,
            )?);
        }
        if config.walled {
            links.push(Link::from_geometry(Endpoint::node(count - 1, Side::Right), Endpoint::wall(0, right), k, &nodes)?);
        }

        Topology::new(nodes, links, GridShape::row(count))
    }
}
