//! Flattened state vector shared by the force evaluator and the integrator.
//!
//! Node `i` occupies slots `2i` (position) and `2i + 1` (velocity). With
//! `Vec2` that is the `x, y, vx, vy` layout per node; with `Scalar` it is
//! `x, vx`.

use crate::node::Node;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Anything that can report the current center position of node `i`.
///
/// Spring endpoints are resolved through this trait so the same code reads
/// either the committed node state or an intermediate RK4 stage.
pub trait PositionSource<V: Vec> {
    fn position(&self, node: usize) -> V;
}

impl<V: Vec> PositionSource<V> for [Node<V>] {
    fn position(&self, node: usize) -> V {
        self[node].position
    }
}

/// Read-only view over a flattened state vector.
#[derive(Copy, Clone, Debug)]
pub struct StateView<'a, V: Vec>(pub &'a [V]);

impl<V: Vec> PositionSource<V> for StateView<'_, V> {
    fn position(&self, node: usize) -> V {
        self.0[position_slot(node)]
    }
}

impl<'a, V: Vec> StateView<'a, V> {
    pub fn velocity(&self, node: usize) -> V {
        self.0[velocity_slot(node)]
    }

    pub fn node_count(&self) -> usize {
        self.0.len() / 2
    }
}

#[inline]
pub fn position_slot(node: usize) -> usize {
    2 * node
}

#[inline]
pub fn velocity_slot(node: usize) -> usize {
    2 * node + 1
}

/// Copy node kinematics into `state`, resizing it to `2 * nodes.len()`.
pub fn gather<V: Vec>(nodes: &[Node<V>], state: &mut AllocVec<V>) {
    state.clear();
    state.reserve(nodes.len() * 2);
    for node in nodes {
        state.push(node.position);
        state.push(node.velocity);
    }
}

/// Write a state vector back into the nodes.
pub fn scatter<V: Vec>(state: &[V], nodes: &mut [Node<V>]) {
    debug_assert_eq!(state.len(), nodes.len() * 2);
    for (node, slots) in nodes.iter_mut().zip(state.chunks_exact(2)) {
        node.position = slots[0];
        node.velocity = slots[1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn gather_then_scatter_preserves_nodes() {
        let mut nodes = alloc::vec![
            Node::new(Vec2::new(1.0f64, 2.0), 1.0, Vec2::new(1.0, 1.0))
                .unwrap()
                .with_velocity(Vec2::new(3.0, 4.0)),
            Node::new(Vec2::new(5.0f64, 6.0), 1.0, Vec2::new(1.0, 1.0))
                .unwrap()
                .with_velocity(Vec2::new(7.0, 8.0)),
        ];
        let mut state = AllocVec::new();
        gather(&nodes, &mut state);
        assert_eq!(state.len(), 4);
        assert_eq!(StateView(&state).position(1), Vec2::new(5.0, 6.0));
        assert_eq!(StateView(&state).velocity(0), Vec2::new(3.0, 4.0));

        state[position_slot(0)] = Vec2::new(-1.0, -2.0);
        scatter(&state, &mut nodes);
        assert_eq!(nodes[0].position, Vec2::new(-1.0, -2.0));
        assert_eq!(nodes[1].velocity, Vec2::new(7.0, 8.0));
    }
}
