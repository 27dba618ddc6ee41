// stagnation.rs - Advance one generation, reseeding when the picture stops changing

use crate::grid::Grid;
use crate::rules::step;
use crate::seed::initialize;
use rand::Rng;
use std::fmt;

/// Why a generation was thrown away in favour of a fresh seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StagnationReason {
    /// The step produced the grid it started from.
    FixedPoint,
    /// Every cell died.
    Extinct,
    /// The next grid would map onto itself one step later.
    SettlesNext,
}

impl fmt::Display for StagnationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FixedPoint  => "fixed point",
            Self::Extinct     => "extinct",
            Self::SettlesNext => "settles next generation",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    Stepped(Grid),
    Reseeded { grid: Grid, reason: StagnationReason },
}

impl Advance {
    pub fn grid(&self) -> &Grid {
        match self {
            Self::Stepped(grid) | Self::Reseeded { grid, .. } => grid,
        }
    }

    pub fn into_grid(self) -> Grid {
        match self {
            Self::Stepped(grid) | Self::Reseeded { grid, .. } => grid,
        }
    }

    pub fn reseed_reason(&self) -> Option<StagnationReason> {
        match self {
            Self::Stepped(_)              => None,
            Self::Reseeded { reason, .. } => Some(*reason),
        }
    }
}

/// Classifies the transition `current -> next`. Checks run in order and the
/// first hit wins.
///
/// The last check only notices grids that are one step from a fixed point;
/// longer oscillators keep running.
pub fn stagnation(current: &Grid, next: &Grid) -> Option<StagnationReason> {
    if current == next {
        Some(StagnationReason::FixedPoint)
    } else if next.is_dead() {
        Some(StagnationReason::Extinct)
    } else if *next == step(next) {
        Some(StagnationReason::SettlesNext)
    } else {
        None
    }
}

/// Steps `grid` once, or replaces it with a fresh seed of the same size when
/// the step stagnates.
pub fn advance_or_reseed<R: Rng + ?Sized>(grid: &Grid, live_probability: f64, rng: &mut R) -> Advance {
    let next = step(grid);
    match stagnation(grid, &next) {
        None => Advance::Stepped(next),
        Some(reason) => Advance::Reseeded {
            grid: initialize(grid.width(), grid.height(), live_probability, rng),
            reason,
        },
    }
}
