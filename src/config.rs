//! Configuration for a simulation run.

use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::vec::Vec;
use crate::walls::{Bounds, WallMode};

/// Immutable parameters of a simulation, fixed before the first step.
///
/// # Builder Pattern
/// ```
/// use springnet::config::SimulationConfig;
/// use springnet::vec::Vec2;
/// use springnet::walls::{Bounds, WallMode};
///
/// let bounds = Bounds::new(Vec2::new(0.0f32, 0.0), Vec2::new(800.0, 600.0)).unwrap();
/// let config = SimulationConfig::new(bounds)
///     .with_sub_steps(12)
///     .with_wall_mode(WallMode::Hard)
///     .with_collision_depth(3)
///     .with_collisions(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<V: Vec> {
    /// Wall rectangle (interval in 1D).
    pub bounds: Bounds<V>,
    /// Equal sub-steps per `step` call. Default: 12.
    pub sub_steps: usize,
    /// What happens when a node crosses a wall. Default: `Hard`.
    pub wall_mode: WallMode,
    /// Resolve inter-node collisions after each sub-step. Default: true.
    pub collisions: bool,
    /// Grid distance searched for collision partners. Default: 3.
    pub collision_depth: usize,
    /// Spring lengths below this produce no force. Default: 1e-4.
    pub epsilon: V::Scalar,
    /// Physics increment used by `Simulation::advance`. Default: 0.00025.
    pub fixed_step: V::Scalar,
}

impl<V: Vec> SimulationConfig<V> {
    /// Create a new config with default values.
    pub fn new(bounds: Bounds<V>) -> Self {
        SimulationConfig {
            bounds,
            sub_steps: 12,
            wall_mode: WallMode::Hard,
            collisions: true,
            collision_depth: 3,
            epsilon: V::Scalar::from_f32(1e-4),
            fixed_step: V::Scalar::from_f32(0.00025),
        }
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Set how nodes that crossed a wall are brought back.
    pub fn with_wall_mode(mut self, mode: WallMode) -> Self {
        self.wall_mode = mode;
        self
    }

    /// Enable or disable inter-node collisions.
    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    /// Set how many grid steps apart two nodes may be and still be tested for overlap.
    pub fn with_collision_depth(mut self, depth: usize) -> Self {
        self.collision_depth = depth;
        self
    }

    /// Set the spring length below which a link exerts no force.
    pub fn with_epsilon(mut self, epsilon: V::Scalar) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the step length used by `Simulation::advance`.
    pub fn with_fixed_step(mut self, step: V::Scalar) -> Self {
        self.fixed_step = step;
        self
    }

    /// Check every field. `Simulation::new` calls this before taking the
    /// config.
    pub fn validate(&self) -> PhysicsResult<()> {
        self.bounds.validate()?;
        if self.sub_steps == 0 {
            return Err(PhysicsError::InvalidConfig { reason: "sub_steps must be at least 1" });
        }
        if !(self.fixed_step > V::Scalar::zero()) || !self.fixed_step.is_finite() {
            return Err(PhysicsError::InvalidConfig { reason: "fixed_step must be positive and finite" });
        }
        if !(self.epsilon >= V::Scalar::zero()) || !self.epsilon.is_finite() {
            return Err(PhysicsError::InvalidConfig { reason: "epsilon must be non-negative and finite" });
        }
        Ok(())
    }
}
