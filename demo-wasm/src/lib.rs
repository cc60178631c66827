use springnet::{
    Bounds, ChainConfig, Edge, GridConfig, Scalar, Simulation, SimulationConfig, Topology, Vec2,
};
use wasm_bindgen::prelude::*;

// ---- Chain Demo ----

/// A walled 1D chain, driven by wall-clock frame time.
#[wasm_bindgen]
pub struct ChainDemo {
    sim: Simulation<Scalar<f32>>,
}

#[wasm_bindgen]
impl ChainDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize, width: f32, node_size: f32, stiffness: f32) -> Result<ChainDemo, JsError> {
        let bounds = Bounds::new(Scalar(0.0f32), Scalar(width))?;
        let config = ChainConfig::new(count)
            .with_node_size(Scalar(node_size))
            .with_stiffness(stiffness);
        let topology = Topology::chain(&config, &bounds)?;
        let sim = Simulation::new(SimulationConfig::new(bounds), topology)?;
        Ok(ChainDemo { sim })
    }

    /// Feed one frame of wall-clock time. Returns the number of physics steps run.
    pub fn update(&mut self, frame_time: f32) -> usize {
        self.sim.advance(frame_time)
    }

    pub fn push(&mut self, index: usize, dv: f32) -> Result<(), JsError> {
        self.sim.push_impulse(index, Scalar(dv))?;
        Ok(())
    }

    /// Kick the first weight, as the space bar did in the desktop app.
    pub fn push_first(&mut self, dv: f32) -> Result<(), JsError> {
        self.push(0, dv)
    }

    /// Returns box centers [x0, x1, ...]
    pub fn positions(&self) -> Vec<f32> {
        self.sim.positions().map(|p| p.0).collect()
    }

    /// Returns [left0, right0, left1, right1, ...] spring end coordinates
    pub fn link_endpoints(&self) -> Vec<f32> {
        (0..self.sim.links().len())
            .filter_map(|i| self.sim.link_endpoints(i))
            .flat_map(|(a, b)| [a.0, b.0])
            .collect()
    }

    /// Current minus rest length per spring, for strain coloring.
    pub fn link_extensions(&self) -> Vec<f32> {
        (0..self.sim.links().len()).filter_map(|i| self.sim.link_extension(i)).collect()
    }

    pub fn node_count(&self) -> usize {
        self.sim.nodes().len()
    }

    pub fn node_size(&self) -> f32 {
        self.sim.nodes().first().map_or(0.0, |n| n.size().0)
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.sim.kinetic_energy()
    }

    pub fn potential_energy(&self) -> f32 {
        self.sim.potential_energy()
    }

    pub fn total_energy(&self) -> f32 {
        self.sim.energy().total
    }

    /// Energy stored in the spring tying the last weight to the right wall.
    pub fn last_link_energy(&self) -> f32 {
        let last = self.sim.links().len().saturating_sub(1);
        self.sim.link_potential_energy(last).unwrap_or(0.0)
    }

    pub fn time(&self) -> f32 {
        self.sim.time()
    }
}

// ---- Grid Demo ----

/// A walled 2D grid with diagonal bracing.
#[wasm_bindgen]
pub struct GridDemo {
    sim: Simulation<Vec2<f32>>,
}

#[wasm_bindgen]
impl GridDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(
        cols: usize,
        rows: usize,
        width: f32,
        height: f32,
        node_size: f32,
        stiffness: f32,
        diagonal_stiffness: f32,
    ) -> Result<GridDemo, JsError> {
        let bounds = Bounds::new(Vec2::new(0.0f32, 0.0), Vec2::new(width, height))?;
        let mut config = GridConfig::new(cols, rows)
            .with_node_size(Vec2::new(node_size, node_size))
            .with_stiffness(stiffness);
        if diagonal_stiffness > 0.0 {
            config = config.with_diagonals(diagonal_stiffness);
        }
        let topology = Topology::grid(&config, &bounds)?;
        let sim = Simulation::new(SimulationConfig::new(bounds), topology)?;
        Ok(GridDemo { sim })
    }

    pub fn update(&mut self, frame_time: f32) -> usize {
        self.sim.advance(frame_time)
    }

    pub fn push(&mut self, index: usize, dvx: f32, dvy: f32) -> Result<(), JsError> {
        self.sim.push_impulse(index, Vec2::new(dvx, dvy))?;
        Ok(())
    }

    /// Push every weight of column `col`.
    pub fn push_column(&mut self, col: usize, dvx: f32, dvy: f32) -> Result<(), JsError> {
        let shape = self.sim.topology().shape();
        if col >= shape.cols {
            return Err(JsError::new("column out of range"));
        }
        let indices: Vec<usize> = (0..shape.rows).map(|row| shape.index(col, row)).collect();
        self.sim.push_impulses(&indices, Vec2::new(dvx, dvy))?;
        Ok(())
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        self.sim.positions().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Returns [ax0, ay0, bx0, by0, ax1, ...] spring end coordinates
    pub fn link_endpoints(&self) -> Vec<f32> {
        (0..self.sim.links().len())
            .filter_map(|i| self.sim.link_endpoints(i))
            .flat_map(|(a, b)| [a.x, a.y, b.x, b.y])
            .collect()
    }

    pub fn link_extensions(&self) -> Vec<f32> {
        (0..self.sim.links().len()).filter_map(|i| self.sim.link_extension(i)).collect()
    }

    pub fn cols(&self) -> usize {
        self.sim.topology().shape().cols
    }

    pub fn rows(&self) -> usize {
        self.sim.topology().shape().rows
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.sim.kinetic_energy()
    }

    pub fn potential_energy(&self) -> f32 {
        self.sim.potential_energy()
    }

    pub fn total_energy(&self) -> f32 {
        self.sim.energy().total
    }

    pub fn boundary_energy(&self) -> f32 {
        self.sim.boundary_kinetic_energy()
    }

    /// Kinetic energy of the left and right columns as [left, right].
    pub fn side_energies(&self) -> Vec<f32> {
        vec![self.sim.edge_kinetic_energy(Edge::Left), self.sim.edge_kinetic_energy(Edge::Right)]
    }

    pub fn time(&self) -> f32 {
        self.sim.time()
    }
}
