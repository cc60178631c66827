//! Spring forces and the state derivative fed to the integrator.

use crate::state::{position_slot, velocity_slot, PositionSource, StateView};
use crate::topology::Topology;
use crate::vec::Vec;

/// Hooke force acting on the end at `attach` of a spring whose other end is
/// at `other`.
///
/// Stretched springs pull `attach` toward `other`, compressed springs push it
/// away. Below `epsilon` the direction is undefined and the force is zero.
pub fn hooke<V: Vec>(attach: V, other: V, stiffness: V::Scalar, rest_length: V::Scalar, epsilon: V::Scalar) -> V {
    let d = attach - other;
    let len = d.length();
    if len < epsilon {
        return V::zero();
    }
    d.scale(-stiffness * (len - rest_length) / len)
}

/// Net spring force on `node`, with every endpoint resolved against
/// `positions`.
pub fn net_force<V, P>(topology: &Topology<V>, positions: &P, node: usize, epsilon: V::Scalar) -> V
where
    V: Vec,
    P: PositionSource<V> + ?Sized,
{
    let nodes = topology.nodes();
    topology
        .incident(node)
        .iter()
        .map(|&l| topology.link(l))
        .filter_map(|link| {
            let (attach, other) = link.ends_for(node, nodes, positions)?;
            Some(hooke(attach, other, link.stiffness(), link.rest_length(), epsilon))
        })
        .fold(V::zero(), |acc, f| acc + f)
}

/// Acceleration of `node`: net force over mass.
pub fn acceleration<V, P>(topology: &Topology<V>, positions: &P, node: usize, epsilon: V::Scalar) -> V
where
    V: Vec,
    P: PositionSource<V> + ?Sized,
{
    net_force(topology, positions, node, epsilon).scale(topology.node(node).inv_mass())
}

/// Time derivative of a flattened state: position slots receive the
/// velocities, velocity slots the accelerations.
///
/// Neighbour positions come from `state` itself, never from the nodes'
/// committed fields, so intermediate RK4 stages stay self-consistent.
pub fn derivative<V: Vec>(topology: &Topology<V>, state: &[V], out: &mut [V], epsilon: V::Scalar) {
    debug_assert_eq!(state.len(), topology.node_count() * 2);
    debug_assert_eq!(out.len(), state.len());
    let view = StateView(state);
    for node in 0..topology.node_count() {
        out[position_slot(node)] = state[velocity_slot(node)];
        out[velocity_slot(node)] = acceleration(topology, &view, node, epsilon);
    }
}
