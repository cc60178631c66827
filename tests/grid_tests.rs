use springnet::{Bounds, Edge, GridConfig, GridShape, Topology, Vec2};

fn bounds() -> Bounds<Vec2<f32>> {
    Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(400.0, 300.0)).unwrap()
}

#[test]
fn grid_node_layout_is_row_major() {
    let grid = Topology::grid(&GridConfig::new(6, 4).with_node_size(Vec2::new(20.0, 20.0)), &bounds()).unwrap();
    assert_eq!(grid.node_count(), 24);
    let shape = grid.shape();
    for row in 0..shape.rows {
        for col in 1..shape.cols {
            let left = grid.node(shape.index(col - 1, row)).position;
            let right = grid.node(shape.index(col, row)).position;
            assert!(right.x > left.x);
            assert_eq!(right.y, left.y);
        }
    }
    // Row 0 sits at the lower wall.
    assert!(grid.node(shape.index(0, 0)).position.y < grid.node(shape.index(0, 3)).position.y);
}

#[test]
fn every_link_starts_at_rest() {
    let config = GridConfig::new(6, 4).with_node_size(Vec2::new(20.0, 20.0)).with_diagonals(2.0);
    let grid = Topology::grid(&config, &bounds()).unwrap();
    for link in grid.links() {
        assert!(link.extension(grid.nodes()).abs() < 1e-3, "link not at rest: {:?}", link);
    }
}

#[test]
fn neighbour_counts_match_position() {
    let config = GridConfig::new(6, 4).with_node_size(Vec2::new(20.0, 20.0)).with_diagonals(2.0);
    let grid = Topology::grid(&config, &bounds()).unwrap();
    let shape = grid.shape();
    for index in 0..grid.node_count() {
        let expected = if shape.is_boundary(index) {
            let (col, row) = shape.coords(index);
            let corner = (col == 0 || col + 1 == shape.cols) && (row == 0 || row + 1 == shape.rows);
            // Four structural or wall links plus the diagonals present.
            if corner { 5 } else { 6 }
        } else {
            8
        };
        assert_eq!(grid.incident(index).len(), expected, "node {}", index);
    }
}

#[test]
fn unwalled_grid_has_no_wall_links() {
    let grid = Topology::grid(&GridConfig::new(3, 3).with_walls(false), &bounds()).unwrap();
    assert!(grid.links().iter().all(|l| l.node_indices().count() == 2));
    assert_eq!(grid.link_count(), 12);
}

#[test]
fn edges_list_boundary_columns_and_rows() {
    let shape = GridShape::new(3, 2).unwrap();
    assert_eq!(shape.edge(Edge::Left).collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(shape.edge(Edge::Right).collect::<Vec<_>>(), vec![2, 5]);
    assert_eq!(shape.edge(Edge::Bottom).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(shape.edge(Edge::Top).collect::<Vec<_>>(), vec![3, 4, 5]);
}
