use springnet::{
    Bounds, ChainConfig, Endpoint, GridShape, Link, Node, PhysicsError, Scalar, Side, Topology, Vec2,
};

#[test]
fn walled_chain_correct_counts() {
    let bounds = Bounds::new(Scalar(0.0f64), Scalar(620.0)).unwrap();
    let chain = Topology::chain(&ChainConfig::new(30).with_node_size(Scalar(10.0)), &bounds).unwrap();
    assert_eq!(chain.node_count(), 30);
    assert_eq!(chain.link_count(), 31); // walls + 29 between weights
    assert_eq!(chain.shape(), GridShape::row(30));
    for node in 0..30 {
        assert_eq!(chain.incident(node).len(), 2);
    }
}

#[test]
fn free_chain_ends_have_one_link() {
    let bounds = Bounds::new(Scalar(0.0f64), Scalar(100.0)).unwrap();
    let chain = Topology::chain(&ChainConfig::new(5).with_walls(false), &bounds).unwrap();
    assert_eq!(chain.link_count(), 4);
    assert_eq!(chain.incident(0).len(), 1);
    assert_eq!(chain.incident(2).len(), 2);
    assert_eq!(chain.incident(4).len(), 1);
}

#[test]
fn chain_links_join_facing_sides() {
    let bounds = Bounds::new(Vec2::new(0.0f64, 0.0), Vec2::new(100.0, 50.0)).unwrap();
    let config = ChainConfig::new(3).with_node_size(Vec2::new(10.0, 6.0)).with_baseline(Vec2::new(0.0, 25.0));
    let chain = Topology::chain(&config, &bounds).unwrap();

    let (a, b) = chain.link(1).endpoints();
    assert_eq!(*a, Endpoint::node(0, Side::Right));
    assert_eq!(*b, Endpoint::node(1, Side::Left));

    let (left, right) = chain.link(1).current_endpoints(chain.nodes());
    assert_eq!(left, chain.node(0).position + Vec2::new(5.0, 0.0));
    assert_eq!(right, chain.node(1).position - Vec2::new(5.0, 0.0));
    assert!((left.y - 25.0).abs() < 1e-12);
}

#[test]
fn custom_topology_is_validated() {
    let nodes: Vec<Node<Scalar<f64>>> =
        (0..3).map(|i| Node::new(Scalar(10.0 * i as f64), 1.0, Scalar(1.0)).unwrap()).collect();
    let link = Link::from_geometry(Endpoint::node(0, Side::Right), Endpoint::node(1, Side::Left), 1.0, &nodes).unwrap();

    let err = Topology::new(nodes.clone(), vec![link.clone()], GridShape { cols: 2, rows: 2 }).unwrap_err();
    assert_eq!(err, PhysicsError::ShapeMismatch { cols: 2, rows: 2, nodes: 3 });

    assert_eq!(
        Link::from_geometry(Endpoint::node(0, Side::Right), Endpoint::node(3, Side::Left), 1.0, &nodes),
        Err(PhysicsError::NodeOutOfBounds { index: 3, count: 3 })
    );
    assert!(Topology::new(nodes, vec![link], GridShape::row(3)).is_ok());
}

#[test]
fn chain_rejects_bad_parameters() {
    let bounds = Bounds::new(Scalar(0.0f64), Scalar(100.0)).unwrap();
    assert_eq!(
        Topology::chain(&ChainConfig::new(0), &bounds).unwrap_err(),
        PhysicsError::InvalidChainLength { count: 0, min: 1 }
    );
    assert_eq!(
        Topology::chain(&ChainConfig::new(3).with_mass(0.0), &bounds).unwrap_err(),
        PhysicsError::InvalidMass
    );
    assert_eq!(
        Topology::chain(&ChainConfig::new(3).with_stiffness(-1.0), &bounds).unwrap_err(),
        PhysicsError::InvalidStiffness
    );
}
