//! Classic 2D Perlin gradient noise.
//!
//! Pure Rust implementation driven by a seeded [`StdRng`], so the same seed
//! always produces the same permutation and gradient tables and therefore
//! bit-identical output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lattice period.
const B: usize = 256;
const BM: i64 = 0xff;
/// Tables are doubled plus two entries so `p[p[x] + y + 1]` never wraps.
const TABLE_LEN: usize = B + B + 2;
/// Shift applied before truncating to the lattice, keeps inputs positive.
const N: f32 = 4096.0;

/// 2D Perlin noise generator.
#[derive(Clone, Debug)]
pub struct Perlin {
    /// Permutation table.
    perm: Vec<usize>,
    /// Unit gradient per lattice slot.
    grad: Vec<[f32; 2]>,
}

impl Perlin {
    /// Build the permutation and gradient tables for `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        let mut perm = vec![0usize; TABLE_LEN];
        let mut grad = vec![[0.0f32; 2]; TABLE_LEN];

        for i in 0..B {
            perm[i] = i;
            grad[i] = Self::random_gradient(&mut rng);
        }

        for i in (1..B).rev() {
            let j = rng.random_range(0..B);
            perm.swap(i, j);
        }

        for i in 0..B + 2 {
            perm[B + i] = perm[i];
            grad[B + i] = grad[i];
        }

        Self { perm, grad }
    }

    /// Sample the noise at `(x, y)`. Output lies roughly in `[-0.7, 0.7]`
    /// and is exactly zero on lattice points.
    pub fn noise(&self, x: f32, y: f32) -> f32 {
        let (bx0, bx1, rx0, rx1) = Self::setup(x);
        let (by0, by1, ry0, ry1) = Self::setup(y);

        let i = self.perm[bx0];
        let j = self.perm[bx1];

        let b00 = self.perm[i + by0];
        let b10 = self.perm[j + by0];
        let b01 = self.perm[i + by1];
        let b11 = self.perm[j + by1];

        let sx = s_curve(rx0);
        let sy = s_curve(ry0);

        let u = dot(self.grad[b00], rx0, ry0);
        let v = dot(self.grad[b10], rx1, ry0);
        let a = lerp(sx, u, v);

        let u = dot(self.grad[b01], rx0, ry1);
        let v = dot(self.grad[b11], rx1, ry1);
        let b = lerp(sx, u, v);

        lerp(sy, a, b)
    }

    /// Lattice cell and fractional offsets for one axis.
    #[inline]
    fn setup(v: f32) -> (usize, usize, f32, f32) {
        let t = v + N;
        let whole = t.floor();
        let b0 = (whole as i64 & BM) as usize;
        let b1 = (b0 + 1) & (BM as usize);
        let r0 = t - whole;
        (b0, b1, r0, r0 - 1.0)
    }

    fn random_gradient(rng: &mut StdRng) -> [f32; 2] {
        loop {
            let x: f32 = rng.random_range(-1.0..1.0);
            let y: f32 = rng.random_range(-1.0..1.0);
            let len = (x * x + y * y).sqrt();
            if len > f32::EPSILON {
                return [x / len, y / len];
            }
        }
    }
}

#[inline]
fn s_curve(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn dot(g: [f32; 2], x: f32, y: f32) -> f32 {
    g[0] * x + g[1] * y
}
