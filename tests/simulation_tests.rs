use approx::assert_abs_diff_eq;
use springnet::{
    Bounds, ChainConfig, GridConfig, PhysicsError, Scalar, Simulation, SimulationConfig, Topology, Vec2,
};

fn grid_sim() -> Simulation<Vec2<f64>> {
    let bounds = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(160.0, 100.0)).unwrap();
    let grid = GridConfig::new(5, 3).with_node_size(Vec2::new(10.0, 10.0)).with_stiffness(50.0).with_diagonals(20.0);
    let topology = Topology::grid(&grid, &bounds).unwrap();
    Simulation::new(SimulationConfig::new(bounds), topology).unwrap()
}

#[test]
fn zero_step_is_idempotent() {
    let mut sim = grid_sim();
    sim.push_impulse(7, Vec2::new(3.0, -2.0)).unwrap();
    sim.step(1.0 / 60.0);
    let before = sim.nodes().to_vec();

    sim.step(0.0);
    assert_eq!(sim.nodes(), &before[..]);
    assert_abs_diff_eq!(sim.time(), 1.0 / 60.0);
}

#[test]
fn impulse_changes_velocity_not_position() {
    let mut sim = grid_sim();
    let before = sim.nodes()[3].position;
    sim.push_impulse(3, Vec2::new(0.0, 5.0)).unwrap();
    assert_eq!(sim.nodes()[3].position, before);
    assert_eq!(sim.nodes()[3].velocity, Vec2::new(0.0, 5.0));

    sim.step(0.01);
    assert!(sim.nodes()[3].position.y > before.y);
}

#[test]
fn impulse_out_of_range_fails() {
    let mut sim = grid_sim();
    assert_eq!(
        sim.push_impulse(15, Vec2::new(1.0, 0.0)),
        Err(PhysicsError::NodeOutOfBounds { index: 15, count: 15 })
    );
    assert_eq!(
        sim.push_impulses(&[1, 2, 40], Vec2::new(1.0, 0.0)),
        Err(PhysicsError::NodeOutOfBounds { index: 40, count: 15 })
    );
    assert!(sim.velocities().all(|v| v == Vec2::new(0.0, 0.0)));
}

#[test]
fn symmetric_excitation_gives_mirror_symmetric_motion() {
    let mut sim = grid_sim();
    let shape = sim.topology().shape();
    let mirror = sim.config().bounds.max.x + sim.config().bounds.min.x;
    // Push the middle column straight up.
    let middle: Vec<usize> = (0..shape.rows).map(|row| shape.index(shape.cols / 2, row)).collect();
    sim.push_impulses(&middle, Vec2::new(0.0, 12.0)).unwrap();

    for _ in 0..120 {
        sim.step(1.0 / 60.0);
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                let a = &sim.nodes()[shape.index(col, row)];
                let b = &sim.nodes()[shape.index(shape.cols - 1 - col, row)];
                assert_abs_diff_eq!(a.position.x, mirror - b.position.x, epsilon = 1e-8);
                assert_abs_diff_eq!(a.position.y, b.position.y, epsilon = 1e-8);
                assert_abs_diff_eq!(a.velocity.x, -b.velocity.x, epsilon = 1e-8);
                assert_abs_diff_eq!(a.velocity.y, b.velocity.y, epsilon = 1e-8);
            }
        }
    }
    assert!(sim.kinetic_energy() > 0.0);
}

#[test]
fn advance_runs_fixed_steps() {
    let bounds = Bounds::new(Scalar(0.0f64), Scalar(100.0)).unwrap();
    let topology = Topology::chain(&ChainConfig::new(3).with_node_size(Scalar(5.0)), &bounds).unwrap();
    let config = SimulationConfig::new(bounds).with_fixed_step(0.01).with_sub_steps(2);
    let mut sim = Simulation::new(config, topology).unwrap();

    assert_eq!(sim.advance(0.035), 3);
    assert_eq!(sim.advance(0.004), 0);
    assert_eq!(sim.advance(0.006), 1);
    assert_abs_diff_eq!(sim.time(), 0.04, epsilon = 1e-12);
}

#[test]
fn link_readouts_track_motion() {
    let mut sim = grid_sim();
    // Horizontal link 0 joins the left wall to node 0.
    let rest = sim.link(0).unwrap().rest_length();
    assert_abs_diff_eq!(sim.link_length(0).unwrap(), rest, epsilon = 1e-9);

    sim.push_impulse(0, Vec2::new(-10.0, 0.0)).unwrap();
    sim.step(0.05);
    assert!(sim.link_extension(0).unwrap() < 0.0);
    let (wall, side) = sim.link_endpoints(0).unwrap();
    assert_eq!(wall.x, 0.0);
    assert_abs_diff_eq!(wall.y, side.y);
    assert!(sim.link_potential_energy(0).unwrap() > 0.0);
    assert!(sim.link(10_000).is_none());
}

#[test]
fn walls_must_match_the_topology() {
    let built_on = Bounds::new(Scalar(0.0f64), Scalar(100.0)).unwrap();
    let chain = Topology::chain(&ChainConfig::new(3).with_node_size(Scalar(5.0)), &built_on).unwrap();

    let wider = Bounds::new(Scalar(-500.0), Scalar(500.0)).unwrap();
    assert_eq!(
        Simulation::new(SimulationConfig::new(wider), chain.clone()).err(),
        Some(PhysicsError::WallMismatch { axis: 0 })
    );
    assert!(Simulation::new(SimulationConfig::new(built_on), chain).is_ok());

    // Unwalled topologies carry no anchors to check.
    let free = ChainConfig::new(3).with_node_size(Scalar(5.0)).with_walls(false);
    let free = Topology::chain(&free, &built_on).unwrap();
    assert!(Simulation::new(SimulationConfig::new(wider), free).is_ok());
}

#[test]
fn grid_walls_are_checked_on_both_axes() {
    let built_on = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(160.0, 100.0)).unwrap();
    let grid = Topology::grid(&GridConfig::new(3, 2).with_node_size(Vec2::new(10.0, 10.0)), &built_on).unwrap();
    let taller = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(160.0, 120.0)).unwrap();
    assert_eq!(
        Simulation::new(SimulationConfig::new(taller), grid).err(),
        Some(PhysicsError::WallMismatch { axis: 1 })
    );
}
