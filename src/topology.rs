//! Node/link collections with a per-node adjacency list.

use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::link::Link;
use crate::node::Node;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Logical grid layout of the nodes, row-major: `index = row * cols + col`.
///
/// A chain is a single row. Row 0 sits at the lower wall, column 0 at the
/// left wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub cols: usize,
    pub rows: usize,
}

/// One side of the grid's outer ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl GridShape {
    pub fn new(cols: usize, rows: usize) -> PhysicsResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        Ok(GridShape { cols, rows })
    }

    /// A single row of `count` nodes.
    pub fn row(count: usize) -> Self {
        GridShape { cols: count, rows: 1 }
    }

    /// Number of grid cells, which is the node count the shape expects.
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// `(col, row)` of a node index.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.cols, index / self.cols)
    }

    /// Whether the node sits on the outer ring of the grid.
    pub fn is_boundary(&self, index: usize) -> bool {
        let (col, row) = self.coords(index);
        col == 0 || row == 0 || col + 1 == self.cols || row + 1 == self.rows
    }

    /// Node indices along one edge of the grid.
    pub fn edge(&self, edge: Edge) -> impl Iterator<Item = usize> {
        let shape = *self;
        let (count, fixed) = match edge {
            Edge::Left => (shape.rows, 0),
            Edge::Right => (shape.rows, shape.cols - 1),
            Edge::Bottom => (shape.cols, 0),
            Edge::Top => (shape.cols, shape.rows - 1),
        };
        (0..count).map(move |k| match edge {
            Edge::Left | Edge::Right => shape.index(fixed, k),
            Edge::Bottom | Edge::Top => shape.index(k, fixed),
        })
    }
}

/// The static structure of a network: nodes, links and which links touch
/// which node.
///
/// Nodes and links are fixed once the topology is built; only node
/// kinematics change afterwards.
#[derive(Clone, Debug)]
pub struct Topology<V: Vec> {
    nodes: AllocVec<Node<V>>,
    links: AllocVec<Link<V>>,
    adjacency: AllocVec<AllocVec<usize>>,
    shape: GridShape,
}

impl<V: Vec> Topology<V> {
    /// Assemble a topology from prebuilt parts.
    ///
    /// Fails when `shape` does not cover `nodes` exactly or when a link
    /// references a node that does not exist.
    pub fn new(nodes: AllocVec<Node<V>>, links: AllocVec<Link<V>>, shape: GridShape) -> PhysicsResult<Self> {
        if shape.cols == 0 || shape.rows == 0 {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        if shape.cell_count() != nodes.len() {
            return Err(PhysicsError::ShapeMismatch {
                cols: shape.cols,
                rows: shape.rows,
                nodes: nodes.len(),
            });
        }

        let mut adjacency = alloc::vec![AllocVec::new(); nodes.len()];
        for (link_index, link) in links.iter().enumerate() {
            for node in link.node_indices() {
                let incident: &mut AllocVec<usize> = adjacency
                    .get_mut(node)
                    .ok_or(PhysicsError::NodeOutOfBounds { index: node, count: nodes.len() })?;
                incident.push(link_index);
            }
        }

        log::debug!(
            "topology: {} nodes ({}x{}), {} links",
            nodes.len(),
            shape.cols,
            shape.rows,
            links.len()
        );
        Ok(Topology { nodes, links, adjacency, shape })
    }

    pub fn nodes(&self) -> &[Node<V>] { &self.nodes }
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node<V>] { &mut self.nodes }
    pub fn links(&self) -> &[Link<V>] { &self.links }
    pub fn shape(&self) -> GridShape { self.shape }
    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
    pub fn node(&self, index: usize) -> &Node<V> { &self.nodes[index] }
    pub fn link(&self, index: usize) -> &Link<V> { &self.links[index] }

    /// Indices of the links attached to `node`.
    pub fn incident(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }
}

/// Lay `count` boxes of width `extent` out between `lo` and `hi` along one
/// axis. With `walled`, an equal spring gap is left at both walls and between
/// neighbours; without, the outer boxes touch the walls. Returns the first
/// center and the center-to-center pitch.
pub(crate) fn spread<F: Float>(lo: F, hi: F, count: usize, extent: F, walled: bool, axis: usize) -> PhysicsResult<(F, F)> {
    let free = hi - lo - F::from_usize(count) * extent;
    let gaps = if walled { count + 1 } else { count.saturating_sub(1) };
    if gaps == 0 {
        if free < F::zero() {
            return Err(PhysicsError::NonPositiveGap { axis });
        }
        return Ok((lo + (hi - lo) * F::half(), F::zero()));
    }
    let gap = free / F::from_usize(gaps);
    if !(gap > F::zero()) {
        return Err(PhysicsError::NonPositiveGap { axis });
    }
    let first = if walled { lo + gap + extent * F::half() } else { lo + extent * F::half() };
    Ok((first, extent + gap))
}
