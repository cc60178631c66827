//! Stepping façade: sub-stepped RK4, collisions and walls over one network.

use crate::collision::resolve_collisions;
use crate::config::SimulationConfig;
use crate::energy::{self, EnergyReport};
use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::force::derivative;
use crate::integrator::Rk4;
use crate::link::Link;
use crate::node::Node;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::state::{gather, scatter};
use crate::topology::{Edge, Topology};
use crate::vec::Vec;
use crate::walls::enforce_walls;
use alloc::vec::Vec as AllocVec;

/// A spring network together with its immutable configuration.
///
/// # Example
/// ```
/// use springnet::{ChainConfig, Simulation, SimulationConfig, Topology};
/// use springnet::vec::Scalar;
/// use springnet::walls::Bounds;
///
/// let bounds = Bounds::new(Scalar(0.0f64), Scalar(100.0)).unwrap();
/// let chain = Topology::chain(&ChainConfig::new(5).with_node_size(Scalar(4.0)), &bounds).unwrap();
/// let mut sim = Simulation::new(SimulationConfig::new(bounds), chain).unwrap();
///
/// sim.push_impulse(0, Scalar(20.0)).unwrap();
/// for _ in 0..100 {
///     sim.step(0.001);
/// }
/// assert!(sim.energy().total > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<V: Vec> {
    config: SimulationConfig<V>,
    topology: Topology<V>,
    state: AllocVec<V>,
    rk4: Rk4<V>,
    time: V::Scalar,
    accumulator: V::Scalar,
}

impl<V: Vec> Simulation<V> {
    /// Validate `config` against itself and against the topology's wall
    /// anchors, then take ownership of both parts.
    pub fn new(config: SimulationConfig<V>, topology: Topology<V>) -> PhysicsResult<Self> {
        config.validate()?;
        for link in topology.links() {
            let (a, b) = link.endpoints();
            config.bounds.check_anchor(a)?;
            config.bounds.check_anchor(b)?;
        }
        let slots = topology.node_count() * 2;

        if let Some(i) = topology.nodes().iter().position(|n| !config.bounds.contains(n)) {
            log::warn!("node {} starts outside the walls and will be pushed back on the first step", i);
        }
        log::debug!(
            "simulation: {} nodes, {} links, {} sub-steps, collisions {} (depth {}), {:?} walls",
            topology.node_count(),
            topology.link_count(),
            config.sub_steps,
            config.collisions,
            config.collision_depth,
            config.wall_mode
        );

        Ok(Simulation {
            config,
            topology,
            state: AllocVec::with_capacity(slots),
            rk4: Rk4::with_capacity(slots),
            time: V::Scalar::zero(),
            accumulator: V::Scalar::zero(),
        })
    }

    /// Advance by `dt`. Non-positive (or NaN) `dt` leaves the network untouched.
    pub fn step(&mut self, dt: V::Scalar) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    /// Advance by `dt` in `sub_steps` equal increments, reporting progress to
    /// `observer`.
    ///
    /// Each sub-step integrates the whole state with RK4, then resolves
    /// collisions, then enforces the walls.
    pub fn step_observed<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) {
        if !(dt > V::Scalar::zero()) {
            return;
        }
        let sub_steps = self.config.sub_steps;
        let h = dt / V::Scalar::from_usize(sub_steps);
        let shape = self.topology.shape();
        let mut collisions = 0;
        let mut wall_hits = 0;

        for sub in 0..sub_steps {
            gather(self.topology.nodes(), &mut self.state);
            let topology = &self.topology;
            let epsilon = self.config.epsilon;
            self.rk4.step(&mut self.state, h, |s, out| derivative(topology, s, out, epsilon));
            scatter(&self.state, self.topology.nodes_mut());
            observer.on_integrate(sub);

            if self.config.collisions {
                let count = resolve_collisions(self.topology.nodes_mut(), shape, self.config.collision_depth);
                collisions += count;
                observer.on_collisions(count);
            }

            let hits = enforce_walls(self.topology.nodes_mut(), &self.config.bounds, self.config.wall_mode);
            wall_hits += hits;
            observer.on_walls(hits);
        }

        self.time = self.time + dt;
        if !self.is_finite() {
            log::warn!("non-finite node state at t = {}", self.time);
        }
        log::trace!("step dt = {}: {} collisions, {} wall hits", dt, collisions, wall_hits);
        observer.on_step_complete();
    }

    /// Feed wall-clock frame time and run as many `fixed_step` steps as fit.
    /// The remainder carries over to the next call. Returns the number of
    /// steps taken.
    pub fn advance(&mut self, frame_time: V::Scalar) -> usize {
        self.advance_observed(frame_time, &mut NoOpStepObserver)
    }

    pub fn advance_observed<O: StepObserver>(&mut self, frame_time: V::Scalar, observer: &mut O) -> usize {
        if !(frame_time > V::Scalar::zero()) {
            return 0;
        }
        let fixed = self.config.fixed_step;
        self.accumulator = self.accumulator + frame_time;
        let mut steps = 0;
        while self.accumulator >= fixed {
            self.step_observed(fixed, observer);
            self.accumulator = self.accumulator - fixed;
            steps += 1;
        }
        steps
    }

    /// Add `delta_v` to the velocity of node `index`.
    pub fn push_impulse(&mut self, index: usize, delta_v: V) -> PhysicsResult<()> {
        self.check_node(index)?;
        self.topology.nodes_mut()[index].apply_impulse(delta_v);
        Ok(())
    }

    /// Add `delta_v` to every listed node. Either all indices are valid and
    /// every node is pushed, or nothing changes.
    pub fn push_impulses(&mut self, indices: &[usize], delta_v: V) -> PhysicsResult<()> {
        for &index in indices {
            self.check_node(index)?;
        }
        let nodes = self.topology.nodes_mut();
        for &index in indices {
            nodes[index].apply_impulse(delta_v);
        }
        Ok(())
    }

    fn check_node(&self, index: usize) -> PhysicsResult<()> {
        let count = self.topology.node_count();
        if index >= count {
            return Err(PhysicsError::NodeOutOfBounds { index, count });
        }
        Ok(())
    }

    /// Simulated time accumulated by `step`.
    pub fn time(&self) -> V::Scalar { self.time }
    pub fn config(&self) -> &SimulationConfig<V> { &self.config }
    pub fn topology(&self) -> &Topology<V> { &self.topology }
    pub fn nodes(&self) -> &[Node<V>] { self.topology.nodes() }
    pub fn links(&self) -> &[Link<V>] { self.topology.links() }
    pub fn node(&self, index: usize) -> Option<&Node<V>> { self.topology.nodes().get(index) }
    pub fn link(&self, index: usize) -> Option<&Link<V>> { self.topology.links().get(index) }

    pub fn positions(&self) -> impl Iterator<Item = V> + '_ {
        self.topology.nodes().iter().map(|n| n.position)
    }

    pub fn velocities(&self) -> impl Iterator<Item = V> + '_ {
        self.topology.nodes().iter().map(|n| n.velocity)
    }

    /// Current world positions of both ends of a link.
    pub fn link_endpoints(&self, index: usize) -> Option<(V, V)> {
        self.link(index).map(|l| l.current_endpoints(self.nodes()))
    }

    pub fn link_length(&self, index: usize) -> Option<V::Scalar> {
        self.link(index).map(|l| l.current_length(self.nodes()))
    }

    /// Current length minus rest length.
    pub fn link_extension(&self, index: usize) -> Option<V::Scalar> {
        self.link(index).map(|l| l.extension(self.nodes()))
    }

    pub fn kinetic_energy(&self) -> V::Scalar {
        energy::kinetic_energy(&self.topology)
    }

    pub fn potential_energy(&self) -> V::Scalar {
        energy::potential_energy(&self.topology)
    }

    pub fn energy(&self) -> EnergyReport<V::Scalar> {
        energy::report(&self.topology)
    }

    pub fn link_potential_energy(&self, index: usize) -> Option<V::Scalar> {
        energy::link_potential_energy(&self.topology, index)
    }

    pub fn boundary_kinetic_energy(&self) -> V::Scalar {
        energy::boundary_kinetic_energy(&self.topology)
    }

    pub fn edge_kinetic_energy(&self, edge: Edge) -> V::Scalar {
        energy::edge_kinetic_energy(&self.topology, edge)
    }

    /// Whether every position and velocity is finite.
    pub fn is_finite(&self) -> bool {
        self.topology.nodes().iter().all(|n| n.position.is_finite() && n.velocity.is_finite())
    }
}
