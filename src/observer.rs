//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor stepping (debugging, telemetry, profiling).
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after the RK4 update of sub-step `sub_step`.
    fn on_integrate(&mut self, _sub_step: usize) {}

    /// Called after collision resolution with the number of resolved pairs.
    fn on_collisions(&mut self, _count: usize) {}

    /// Called after wall enforcement with the number of wall hits.
    fn on_walls(&mut self, _count: usize) {}

    /// Called when a `step` call is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Tallies every event it observes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountingObserver {
    pub sub_steps: usize,
    pub collisions: usize,
    pub wall_hits: usize,
    pub steps: usize,
}

impl StepObserver for CountingObserver {
    fn on_integrate(&mut self, _sub_step: usize) {
        self.sub_steps += 1;
    }

    fn on_collisions(&mut self, count: usize) {
        self.collisions += count;
    }

    fn on_walls(&mut self, count: usize) {
        self.wall_hits += count;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
