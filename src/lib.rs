//! Mass-spring networks integrated with RK4, for 1D chains and 2D grids.
//!
//! `springnet` simulates point masses ("weights") joined by ideal Hookean
//! springs, with rigid walls and elastic collisions between neighbouring
//! boxes. The same code drives a 1D chain (`Scalar<F>`) and a 2D grid
//! (`Vec2<F>`).
//!
//! # Features
//!
//! - **RK4 integration**: whole-network fourth-order Runge-Kutta over a flat state vector
//! - **Pull-based springs**: link endpoints are resolved from the state on demand, never cached
//! - **Topologies**: free and walled chains, grids with optional diagonals and walls
//! - **Collisions**: AABB overlap with elastic impulse exchange inside a bounded grid window
//! - **Walls**: hard (clamp + reflect) or reflective boundaries
//! - **Diagnostics**: kinetic, potential and boundary energy
//! - **Observable**: Monitor stepping via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod node;
pub mod state;
pub mod link;
pub mod topology;
pub mod chain;
pub mod grid;
pub mod force;
pub mod integrator;
pub mod collision;
pub mod walls;
pub mod energy;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Scalar, Vec2};
pub use node::Node;
pub use link::{Endpoint, Link, Side};
pub use state::{PositionSource, StateView};
pub use topology::{Edge, GridShape, Topology};
pub use chain::ChainConfig;
pub use grid::GridConfig;
pub use integrator::Rk4;
pub use walls::{Bounds, WallMode};
pub use energy::EnergyReport;
pub use simulation::Simulation;
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver, CountingObserver};
pub use error::{PhysicsError, PhysicsResult};
