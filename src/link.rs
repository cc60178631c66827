//! Hookean springs between node sides and walls.
//!
//! A link never stores where its ends currently are. Both endpoints are
//! descriptors ("side S of node N" or "wall at C") resolved against a
//! [`PositionSource`] every time the geometry is needed, so an RK4 stage and
//! the committed node state go through the same code.

use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::node::Node;
use crate::state::PositionSource;
use crate::vec::Vec;

/// Attachment point on a node's box, relative to its center.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Center,
    Left,
    Right,
    Bottom,
    Top,
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Side {
    /// Sign of the offset along x and y.
    fn signs(self) -> [f32; 2] {
        match self {
            Side::Center => [0.0, 0.0],
            Side::Left => [-1.0, 0.0],
            Side::Right => [1.0, 0.0],
            Side::Bottom => [0.0, -1.0],
            Side::Top => [0.0, 1.0],
            Side::BottomLeft => [-1.0, -1.0],
            Side::BottomRight => [1.0, -1.0],
            Side::TopLeft => [-1.0, 1.0],
            Side::TopRight => [1.0, 1.0],
        }
    }

    /// Offset of this side from the box center. Axes beyond the vector's
    /// dimension are ignored, so `Top` on a 1D node is its center.
    pub fn offset<V: Vec>(self, half_extent: V) -> V {
        self.signs()
            .into_iter()
            .enumerate()
            .take(V::DIM)
            .fold(V::zero(), |offset, (axis, sign)| {
                offset.with_component(axis, half_extent.component(axis) * V::Scalar::from_f32(sign))
            })
    }
}

/// One end of a link.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Endpoint<V: Vec> {
    /// Attached to `side` of node `node`.
    Node { node: usize, side: Side },
    /// Attached to a wall. Only the coordinates selected by the 0/1 `axis`
    /// mask are fixed at `position`; the rest follow the opposite end, so
    /// the anchor slides along the wall.
    Wall { position: V, axis: V },
}

impl<V: Vec> Endpoint<V> {
    pub fn node(node: usize, side: Side) -> Self {
        Endpoint::Node { node, side }
    }

    /// A fully fixed anchor point.
    pub fn fixed(position: V) -> Self {
        Endpoint::Wall { position, axis: V::splat(V::Scalar::one()) }
    }

    /// Anchor on the wall perpendicular to `axis` at `coordinate`.
    pub fn wall(axis: usize, coordinate: V::Scalar) -> Self {
        Endpoint::Wall {
            position: V::zero().with_component(axis, coordinate),
            axis: V::zero().with_component(axis, V::Scalar::one()),
        }
    }

    /// Index of the attached node, if any.
    pub fn node_index(&self) -> Option<usize> {
        match *self {
            Endpoint::Node { node, .. } => Some(node),
            Endpoint::Wall { .. } => None,
        }
    }

    fn attachment<P: PositionSource<V> + ?Sized>(&self, nodes: &[Node<V>], positions: &P) -> Option<V> {
        match *self {
            Endpoint::Node { node, side } => {
                Some(positions.position(node) + side.offset(nodes[node].half_extent()))
            }
            Endpoint::Wall { .. } => None,
        }
    }

    fn anchor_against(&self, reference: V) -> V {
        match *self {
            Endpoint::Wall { position, axis } => reference + axis.component_mul(position - reference),
            Endpoint::Node { .. } => reference,
        }
    }
}

/// An ideal spring with stiffness `k` and a rest length fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<V: Vec> {
    a: Endpoint<V>,
    b: Endpoint<V>,
    stiffness: V::Scalar,
    rest_length: V::Scalar,
}

impl<V: Vec> Link<V> {
    /// Create a link with an explicit rest length.
    pub fn new(a: Endpoint<V>, b: Endpoint<V>, stiffness: V::Scalar, rest_length: V::Scalar) -> PhysicsResult<Self> {
        if !(stiffness > V::Scalar::zero()) || !stiffness.is_finite() {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !(rest_length > V::Scalar::zero()) || !rest_length.is_finite() {
            return Err(PhysicsError::InvalidRestLength);
        }
        match (a.node_index(), b.node_index()) {
            (None, None) => Err(PhysicsError::InvalidLink { reason: "both ends are walls" }),
            (Some(i), Some(j)) if i == j => Err(PhysicsError::InvalidLink { reason: "both ends on the same node" }),
            _ => Ok(Link { a, b, stiffness, rest_length }),
        }
    }

    /// Create a link whose rest length is the current distance between its
    /// resolved endpoints.
    pub fn from_geometry(a: Endpoint<V>, b: Endpoint<V>, stiffness: V::Scalar, nodes: &[Node<V>]) -> PhysicsResult<Self> {
        for index in [a.node_index(), b.node_index()].into_iter().flatten() {
            if index >= nodes.len() {
                return Err(PhysicsError::NodeOutOfBounds { index, count: nodes.len() });
            }
        }
        // Validate everything but the length first, then measure.
        let probe = Link::new(a, b, stiffness, V::Scalar::one())?;
        let rest_length = probe.current_length(nodes);
        Link::new(a, b, stiffness, rest_length)
    }

    pub fn stiffness(&self) -> V::Scalar { self.stiffness }
    pub fn rest_length(&self) -> V::Scalar { self.rest_length }
    pub fn endpoints(&self) -> (&Endpoint<V>, &Endpoint<V>) { (&self.a, &self.b) }

    /// Node indices this link is attached to (one or two).
    pub fn node_indices(&self) -> impl Iterator<Item = usize> {
        [self.a.node_index(), self.b.node_index()].into_iter().flatten()
    }

    /// World positions of both ends, in `(a, b)` order.
    pub fn resolve<P: PositionSource<V> + ?Sized>(&self, nodes: &[Node<V>], positions: &P) -> (V, V) {
        match (self.a.attachment(nodes, positions), self.b.attachment(nodes, positions)) {
            (Some(pa), Some(pb)) => (pa, pb),
            (Some(pa), None) => (pa, self.b.anchor_against(pa)),
            (None, Some(pb)) => (self.a.anchor_against(pb), pb),
            // Rejected by `Link::new`; resolve to a zero-length spring.
            (None, None) => (V::zero(), V::zero()),
        }
    }

    /// Resolved endpoints from the committed node state.
    pub fn current_endpoints(&self, nodes: &[Node<V>]) -> (V, V) {
        self.resolve(nodes, nodes)
    }

    pub fn current_length(&self, nodes: &[Node<V>]) -> V::Scalar {
        let (pa, pb) = self.current_endpoints(nodes);
        pa.distance(pb)
    }

    /// Current length minus rest length (positive when stretched).
    pub fn extension(&self, nodes: &[Node<V>]) -> V::Scalar {
        self.current_length(nodes) - self.rest_length
    }

    /// ½·k·(current − rest)².
    pub fn potential_energy(&self, nodes: &[Node<V>]) -> V::Scalar {
        let ext = self.extension(nodes);
        V::Scalar::half() * self.stiffness * ext * ext
    }

    /// Attachment of `node` on this link and the opposite end, resolved
    /// against `positions`. `None` when the link does not touch `node`.
    pub fn ends_for<P: PositionSource<V> + ?Sized>(&self, node: usize, nodes: &[Node<V>], positions: &P) -> Option<(V, V)> {
        let (pa, pb) = self.resolve(nodes, positions);
        if self.a.node_index() == Some(node) {
            Some((pa, pb))
        } else if self.b.node_index() == Some(node) {
            Some((pb, pa))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::{Scalar, Vec2};
    use alloc::vec;

    fn square(x: f64, y: f64) -> Node<Vec2<f64>> {
        Node::new(Vec2::new(x, y), 1.0, Vec2::new(2.0, 2.0)).unwrap()
    }

    #[test]
    fn side_offsets_follow_half_extent() {
        let h = Vec2::new(2.0f64, 1.0);
        assert_eq!(Side::Left.offset(h), Vec2::new(-2.0, 0.0));
        assert_eq!(Side::Top.offset(h), Vec2::new(0.0, 1.0));
        assert_eq!(Side::BottomRight.offset(h), Vec2::new(2.0, -1.0));
        assert_eq!(Side::Top.offset(Scalar(3.0f64)), Scalar(0.0));
        assert_eq!(Side::Right.offset(Scalar(3.0f64)), Scalar(3.0));
    }

    #[test]
    fn endpoints_track_node_moves() {
        let mut nodes = vec![square(0.0, 0.0), square(10.0, 0.0)];
        let link = Link::from_geometry(
            Endpoint::node(0, Side::Right),
            Endpoint::node(1, Side::Left),
            5.0,
            &nodes,
        )
        .unwrap();
        assert!((link.rest_length() - 8.0).abs() < 1e-12);

        nodes[1].position = Vec2::new(12.0, 0.0);
        let (pa, pb) = link.current_endpoints(&nodes);
        assert_eq!(pa, Vec2::new(1.0, 0.0));
        assert_eq!(pb, Vec2::new(11.0, 0.0));
        assert!((link.extension(&nodes) - 2.0).abs() < 1e-12);
        assert!((link.potential_energy(&nodes) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn wall_anchor_slides_along_wall() {
        let mut nodes = vec![square(5.0, 3.0)];
        let link = Link::from_geometry(Endpoint::wall(0, 0.0), Endpoint::node(0, Side::Left), 1.0, &nodes).unwrap();
        assert!((link.rest_length() - 4.0).abs() < 1e-12);

        nodes[0].position = Vec2::new(5.0, 7.0);
        let (wall, attach) = link.current_endpoints(&nodes);
        assert_eq!(wall, Vec2::new(0.0, 7.0));
        assert_eq!(attach, Vec2::new(4.0, 7.0));
        assert!(link.extension(&nodes).abs() < 1e-12);
    }

    #[test]
    fn fixed_anchor_does_not_slide() {
        let mut nodes = vec![square(5.0, 0.0)];
        let link = Link::from_geometry(Endpoint::fixed(Vec2::new(0.0, 0.0)), Endpoint::node(0, Side::Left), 1.0, &nodes).unwrap();
        nodes[0].position = Vec2::new(4.0, 3.0);
        let (anchor, _) = link.current_endpoints(&nodes);
        assert_eq!(anchor, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn ends_for_orients_toward_other_end() {
        let nodes = vec![square(0.0, 0.0), square(10.0, 0.0)];
        let link = Link::new(Endpoint::node(0, Side::Right), Endpoint::node(1, Side::Left), 1.0, 8.0).unwrap();
        let (mine, other) = link.ends_for(1, &nodes, &nodes[..]).unwrap();
        assert_eq!(mine, Vec2::new(9.0, 0.0));
        assert_eq!(other, Vec2::new(1.0, 0.0));
        assert!(link.ends_for(2, &nodes, &nodes[..]).is_none());
    }

    #[test]
    fn rejects_degenerate_links() {
        let wall = Endpoint::<Vec2<f32>>::wall(0, 0.0);
        assert_eq!(
            Link::new(wall, wall, 1.0, 1.0),
            Err(PhysicsError::InvalidLink { reason: "both ends are walls" })
        );
        let end = Endpoint::<Vec2<f32>>::node(0, Side::Left);
        assert!(matches!(Link::new(end, Endpoint::node(0, Side::Right), 1.0, 1.0), Err(PhysicsError::InvalidLink { .. })));
        assert_eq!(Link::new(end, wall, 0.0, 1.0), Err(PhysicsError::InvalidStiffness));
        assert_eq!(Link::new(end, wall, 1.0, -1.0), Err(PhysicsError::InvalidRestLength));
    }
}
