//! AABB overlap tests and elastic velocity exchange between nearby nodes.

use crate::float::Float;
use crate::node::Node;
use crate::topology::GridShape;
use crate::vec::Vec;

/// Strict box overlap on every axis; touching boxes do not overlap.
pub fn overlaps<V: Vec>(a: &Node<V>, b: &Node<V>) -> bool {
    let gap = a.position - b.position;
    let reach = a.half_extent() + b.half_extent();
    (0..V::DIM).all(|axis| gap.component(axis).abs() < reach.component(axis))
}

/// Elastic collision response along the center-to-center normal.
///
/// Only the normal velocity components are exchanged, using the 1D elastic
/// formulas; momentum and kinetic energy are conserved. The exchange is
/// applied to every overlapping pair, separating or not, so a pair that is
/// still overlapping on the next sub-step is struck again. Coincident centers
/// have no normal and are skipped. Positions are never touched. Returns
/// whether velocities changed.
pub fn resolve_pair<V: Vec>(a: &mut Node<V>, b: &mut Node<V>) -> bool {
    let delta = b.position - a.position;
    let dist = delta.length();
    if dist.is_near_zero(V::Scalar::from_f32(1e-12)) {
        return false;
    }
    let normal = delta.scale(V::Scalar::one() / dist);

    let va = a.velocity.dot(normal);
    let vb = b.velocity.dot(normal);

    let (ma, mb) = (a.mass(), b.mass());
    let total = ma + mb;
    let two = V::Scalar::two();
    let va_after = ((ma - mb) * va + two * mb * vb) / total;
    let vb_after = ((mb - ma) * vb + two * ma * va) / total;

    a.velocity = a.velocity + normal.scale(va_after - va);
    b.velocity = b.velocity + normal.scale(vb_after - vb);
    true
}

/// Mutable references to two distinct nodes.
fn pair_mut<V: Vec>(nodes: &mut [Node<V>], i: usize, j: usize) -> (&mut Node<V>, &mut Node<V>) {
    debug_assert!(i < j);
    let (head, tail) = nodes.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Grid offsets `(dx, dy)` of the partners checked from each node.
///
/// Covers every unordered pair within Manhattan distance `depth` exactly
/// once: `dy >= 0`, and on the node's own row only partners to the right.
pub fn neighbour_offsets(depth: usize) -> impl Iterator<Item = (isize, usize)> {
    let d = depth as isize;
    (0..=depth).flat_map(move |dy| {
        let reach = d - dy as isize;
        let start = if dy == 0 { 1 } else { -reach };
        (start..=reach).map(move |dx| (dx, dy))
    })
}

/// Check every node pair within `depth` grid steps and resolve the
/// overlapping ones. Returns the number of collisions resolved.
///
/// Only grid neighbours are considered; nodes further apart in the layout
/// cannot meet under spring forces in practice.
pub fn resolve_collisions<V: Vec>(nodes: &mut [Node<V>], shape: GridShape, depth: usize) -> usize {
    debug_assert_eq!(nodes.len(), shape.cell_count());
    let mut count = 0;
    for row in 0..shape.rows {
        for col in 0..shape.cols {
            let i = shape.index(col, row);
            for (dx, dy) in neighbour_offsets(depth) {
                let c = col as isize + dx;
                let r = row + dy;
                if c < 0 || c as usize >= shape.cols || r >= shape.rows {
                    continue;
                }
                let j = shape.index(c as usize, r);
                let (lo, hi) = if i < j { (i, j) } else { (j, i) };
                let (a, b) = pair_mut(nodes, lo, hi);
                if overlaps(a, b) && resolve_pair(a, b) {
                    count += 1;
                }
            }
        }
    }
    count
}
