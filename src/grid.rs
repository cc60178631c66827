//! 2D grid of weights with structural, diagonal and wall springs.

use crate::error::PhysicsResult;
use crate::float::Float;
use crate::link::{Endpoint, Link, Side};
use crate::node::Node;
use crate::topology::{spread, GridShape, Topology};
use crate::vec::Vec2;
use crate::walls::Bounds;
use alloc::vec::Vec as AllocVec;

/// Configuration for a grid of weights.
#[derive(Clone, Debug)]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub node_size: Vec2<F>,
    pub node_mass: F,
    /// Stiffness of horizontal, vertical and wall springs.
    pub stiffness: F,
    /// Stiffness of the diagonal cross-links, `None` for no diagonals.
    pub diagonal_stiffness: Option<F>,
    /// Tie the outer ring to the four walls.
    pub walled: bool,
}

impl<F: Float> GridConfig<F> {
    /// A walled grid of unit weights without diagonals.
    pub fn new(cols: usize, rows: usize) -> Self {
        GridConfig {
            cols,
            rows,
            node_size: Vec2::new(F::one(), F::one()),
            node_mass: F::one(),
            stiffness: F::one(),
            diagonal_stiffness: None,
            walled: true,
        }
    }

    pub fn with_node_size(mut self, size: Vec2<F>) -> Self {
        self.node_size = size;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.node_mass = mass;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_diagonals(mut self, stiffness: F) -> Self {
        self.diagonal_stiffness = Some(stiffness);
        self
    }

    pub fn with_walls(mut self, walled: bool) -> Self {
        self.walled = walled;
        self
    }
}

impl<F: Float> Topology<Vec2<F>> {
    /// Build a `cols x rows` grid filling `bounds`.
    ///
    /// Node `(col, row)` has index `row * cols + col`; row 0 is next to the
    /// lower wall. Links:
    /// - horizontal: right side of `(c, r)` to left side of `(c + 1, r)`
    /// - vertical: top of `(c, r)` to bottom of `(c, r + 1)`
    /// - diagonal (optional): facing corners of every cell, both directions
    /// - walls (optional): boundary nodes to the wall they face
    ///
    /// Rest lengths are measured from the initial layout, so the grid starts
    /// at equilibrium.
    pub fn grid(config: &GridConfig<F>, bounds: &Bounds<Vec2<F>>) -> PhysicsResult<Self> {
        let shape = GridShape::new(config.cols, config.rows)?;
        bounds.validate()?;
        let (cols, rows) = (shape.cols, shape.rows);

        let (x0, pitch_x) = spread(bounds.min.x, bounds.max.x, cols, config.node_size.x, config.walled, 0)?;
        let (y0, pitch_y) = spread(bounds.min.y, bounds.max.y, rows, config.node_size.y, config.walled, 1)?;

        let mut nodes = AllocVec::with_capacity(shape.cell_count());
        for row in 0..rows {
            for col in 0..cols {
                let x = x0 + pitch_x * F::from_usize(col);
                let y = y0 + pitch_y * F::from_usize(row);
                nodes.push(Node::new(Vec2::new(x, y), config.node_mass, config.node_size)?);
            }
        }

        let k = config.stiffness;
        let node = |col, row, side| Endpoint::node(shape.index(col, row), side);
        let mut links = AllocVec::new();

        // Horizontal
        for row in 0..rows {
            if config.walled {
                links.push(Link::from_geometry(Endpoint::wall(0, bounds.min.x), node(0, row, Side::Left), k, &nodes)?);
            }
            for col in 0..cols - 1 {
                links.push(Link::from_geometry(node(col, row, Side::Right), node(col + 1, row, Side::Left), k, &nodes)?);
            }
            if config.walled {
                links.push(Link::from_geometry(node(cols - 1, row, Side::Right), Endpoint::wall(0, bounds.max.x), k, &nodes)?);
            }
        }

        // Vertical
        for col in 0..cols {
            if config.walled {
                links.push(Link::from_geometry(Endpoint::wall(1, bounds.min.y), node(col, 0, Side::Bottom), k, &nodes)?);
            }
            for row in 0..rows - 1 {
                links.push(Link::from_geometry(node(col, row, Side::Top), node(col, row + 1, Side::Bottom), k, &nodes)?);
            }
            if config.walled {
                links.push(Link::from_geometry(node(col, rows - 1, Side::Top), Endpoint::wall(1, bounds.max.y), k, &nodes)?);
            }
        }

        // Diagonals
        if let Some(kd) = config.diagonal_stiffness {
            for row in 0..rows - 1 {
                for col in 0..cols - 1 {
                    links.push(Link::from_geometry(
                        node(col, row, Side::TopRight),
                        node(col + 1, row + 1, Side::BottomLeft),
                        kd,
                        &nodes,
                    )?);
                    links.push(Link::from_geometry(
                        node(col + 1, row, Side::TopLeft),
                        node(col, row + 1, Side::BottomRight),
                        kd,
                        &nodes,
                    )?);
                }
            }
        }

        Topology::new(nodes, links, shape)
    }
}
