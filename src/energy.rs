//! Mechanical energy diagnostics.
//!
//! Read-only sums over a topology: kinetic energy of nodes, potential energy
//! stored in springs, and kinetic energy localized to the grid boundary.

use crate::float::Float;
use crate::topology::{Edge, Topology};
use crate::vec::Vec;

/// Total mechanical energy of a network at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EnergyReport<F: Float> {
    pub kinetic: F,
    pub potential: F,
    pub total: F,
}

impl<F: Float> EnergyReport<F> {
    pub fn new(kinetic: F, potential: F) -> Self {
        EnergyReport { kinetic, potential, total: kinetic + potential }
    }

    /// Relative change of `total` with respect to `reference`. Zero when the
    /// reference energy is zero.
    pub fn drift_from(&self, reference: &EnergyReport<F>) -> F {
        if reference.total == F::zero() {
            return F::zero();
        }
        ((self.total - reference.total) / reference.total).abs()
    }
}

/// Σ ½·m·|v|² over every node.
pub fn kinetic_energy<V: Vec>(topology: &Topology<V>) -> V::Scalar {
    topology.nodes().iter().fold(V::Scalar::zero(), |acc, n| acc + n.kinetic_energy())
}

/// Σ ½·k·(length − rest)² over every link.
pub fn potential_energy<V: Vec>(topology: &Topology<V>) -> V::Scalar {
    let nodes = topology.nodes();
    topology.links().iter().fold(V::Scalar::zero(), |acc, l| acc + l.potential_energy(nodes))
}

pub fn report<V: Vec>(topology: &Topology<V>) -> EnergyReport<V::Scalar> {
    EnergyReport::new(kinetic_energy(topology), potential_energy(topology))
}

/// Potential energy of a single link, `None` if the index is out of range.
pub fn link_potential_energy<V: Vec>(topology: &Topology<V>, link: usize) -> Option<V::Scalar> {
    topology.links().get(link).map(|l| l.potential_energy(topology.nodes()))
}

/// Kinetic energy of every node on the outer ring of the grid. Each node is
/// counted once, corners included.
pub fn boundary_kinetic_energy<V: Vec>(topology: &Topology<V>) -> V::Scalar {
    let shape = topology.shape();
    topology
        .nodes()
        .iter()
        .enumerate()
        .filter(|&(i, _)| shape.is_boundary(i))
        .fold(V::Scalar::zero(), |acc, (_, n)| acc + n.kinetic_energy())
}

/// Kinetic energy of one boundary column or row.
pub fn edge_kinetic_energy<V: Vec>(topology: &Topology<V>, edge: Edge) -> V::Scalar {
    topology
        .shape()
        .edge(edge)
        .fold(V::Scalar::zero(), |acc, i| acc + topology.node(i).kinetic_energy())
}
