// seed.rs - Random seeding of a fresh grid

use crate::grid::Grid;
use rand::Rng;

/// Chance that a freshly seeded cell starts alive.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.1;

/// Seeds a `width` x `height` grid where every cell is independently alive
/// with `live_probability`.
///
/// The probability is clamped into `[0, 1]` and NaN is read as `0`, so this
/// never fails.
pub fn initialize<R: Rng + ?Sized>(width: usize, height: usize, live_probability: f64, rng: &mut R) -> Grid {
    let p = clamp_probability(live_probability);
    Grid::from_fn(width, height, |_, _| rng.gen_bool(p))
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
