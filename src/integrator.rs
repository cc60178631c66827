//! Classic fourth-order Runge-Kutta over a flattened state vector.

use crate::float::Float;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// RK4 stepper with reusable scratch buffers.
///
/// The buffers grow to the state length on first use and are reused
/// afterwards, so steady-state stepping does not allocate.
#[derive(Clone, Debug, Default)]
pub struct Rk4<V: Vec> {
    k1: AllocVec<V>,
    k2: AllocVec<V>,
    k3: AllocVec<V>,
    k4: AllocVec<V>,
    stage: AllocVec<V>,
}

impl<V: Vec> Rk4<V> {
    pub fn new() -> Self {
        Rk4 {
            k1: AllocVec::new(),
            k2: AllocVec::new(),
            k3: AllocVec::new(),
            k4: AllocVec::new(),
            stage: AllocVec::new(),
        }
    }

    /// Scratch buffers sized for a state of `len` slots.
    pub fn with_capacity(len: usize) -> Self {
        let mut rk4 = Self::new();
        rk4.resize(len);
        rk4
    }

    fn resize(&mut self, len: usize) {
        for buf in [&mut self.k1, &mut self.k2, &mut self.k3, &mut self.k4, &mut self.stage] {
            buf.resize(len, V::zero());
        }
    }

    /// Advance `state` by `h` in place.
    ///
    /// `derivative(s, out)` must write ds/dt at `s` into `out`; it is called
    /// four times, at `S`, twice at `S + h/2 * k`, and at `S + h * k3`.
    pub fn step<D>(&mut self, state: &mut [V], h: V::Scalar, mut derivative: D)
    where
        D: FnMut(&[V], &mut [V]),
    {
        let n = state.len();
        if self.stage.len() != n {
            self.resize(n);
        }
        let half_h = h * V::Scalar::half();

        derivative(state, &mut self.k1[..]);

        offset(&mut self.stage, state, &self.k1, half_h);
        derivative(&self.stage[..], &mut self.k2[..]);

        offset(&mut self.stage, state, &self.k2, half_h);
        derivative(&self.stage[..], &mut self.k3[..]);

        offset(&mut self.stage, state, &self.k3, h);
        derivative(&self.stage[..], &mut self.k4[..]);

        let sixth = h / V::Scalar::from_f32(6.0);
        let two = V::Scalar::two();
        for i in 0..n {
            let slope = self.k1[i] + self.k2[i].scale(two) + self.k3[i].scale(two) + self.k4[i];
            state[i] = state[i] + slope.scale(sixth);
        }
    }
}

/// `out = base + k * h`
fn offset<V: Vec>(out: &mut [V], base: &[V], k: &[V], h: V::Scalar) {
    for ((o, &b), &d) in out.iter_mut().zip(base).zip(k) {
        *o = b + d.scale(h);
    }
}
