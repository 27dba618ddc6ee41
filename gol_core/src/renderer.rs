// renderer.rs - The animated backdrop: owns the grid, the palette and the cadence

use crate::canvas::Canvas;
use crate::clock::AnimationClock;
use crate::config::{BackdropConfig, ConfigError};
use crate::grid::Grid;
use crate::render::{canvas_size, render};
use crate::seed::initialize;
use crate::stagnation::{StagnationReason, advance_or_reseed};
use crate::theme::{Palette, Theme};
use crate::viewport::ViewportPolicy;
use rand::Rng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
    Running,
    Suspended,
}

/// What one call to [`Renderer::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Grid stepped one generation, then redrawn.
    Advanced,
    /// Grid stagnated and was replaced by a fresh seed, then redrawn.
    Reseeded(StagnationReason),
    /// Not due yet; redrawn only.
    Redrawn,
    /// Nothing happened.
    Suspended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Suspended,
    Resumed,
    Unchanged,
}

/// Game of Life backdrop.
///
/// The host calls [`frame`](Self::frame) once per presented frame. The grid
/// only advances when the animation clock is due; every running frame
/// redraws. Theme and viewport changes are pushed in explicitly.
pub struct Renderer<R = StdRng> {
    config: BackdropConfig,
    policy: ViewportPolicy,
    grid: Grid,
    theme: Theme,
    palette: Palette,
    clock: AnimationClock,
    state: RendererState,
    rng: R,
    generation: u64,
    reseeds: u64,
    redraws: u64,
}

impl<R: Rng> Renderer<R> {
    /// Seeds a grid and starts the cadence at `now`. Starts suspended when
    /// `viewport_width` is too narrow.
    pub fn new(
        config: BackdropConfig,
        theme: Theme,
        viewport_width: f32,
        now: Instant,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let policy = config.viewport_policy();
        let grid = initialize(config.width, config.height, config.live_probability, &mut rng);
        let state = if policy.allows(viewport_width) {
            RendererState::Running
        } else {
            RendererState::Suspended
        };
        info!(width = config.width, height = config.height, %theme, ?state, "backdrop started");

        Ok(Self {
            clock: AnimationClock::new(config.tick_interval(), now),
            config,
            policy,
            grid,
            theme,
            palette: Palette::for_theme(theme),
            state,
            rng,
            generation: 0,
            reseeds: 0,
            redraws: 0,
        })
    }

    /// One host frame: advance if due, then redraw.
    pub fn frame<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) -> FrameOutcome {
        if self.state == RendererState::Suspended {
            return FrameOutcome::Suspended;
        }

        let outcome = if self.clock.tick(now) {
            match self.advance() {
                Some(reason) => FrameOutcome::Reseeded(reason),
                None         => FrameOutcome::Advanced,
            }
        } else {
            FrameOutcome::Redrawn
        };
        self.draw(canvas);
        outcome
    }

    /// Replaces the grid with its successor (or a fresh seed). Returns the
    /// reason when it reseeded.
    pub fn advance(&mut self) -> Option<StagnationReason> {
        let advance = advance_or_reseed(&self.grid, self.config.live_probability, &mut self.rng);
        let reason = advance.reseed_reason();
        self.generation += 1;
        if let Some(reason) = reason {
            self.reseeds += 1;
            debug!(generation = self.generation, %reason, "backdrop reseeded");
        }
        self.grid = advance.into_grid();
        reason
    }

    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        render(&self.grid, &self.palette, self.config.cell_size, canvas);
        self.redraws += 1;
    }

    /// Switches palette and redraws at once, without waiting for the clock.
    pub fn set_theme<C: Canvas + ?Sized>(&mut self, theme: Theme, canvas: &mut C) {
        if theme != self.theme {
            info!(from = %self.theme, to = %theme, "backdrop theme changed");
        }
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
        self.draw(canvas);
    }

    /// Applies the viewport policy to a new width. Resuming restarts the
    /// cadence from `now` so a long pause does not trigger an instant step.
    pub fn resize(&mut self, width: f32, now: Instant) -> Transition {
        match (self.state, self.policy.allows(width)) {
            (RendererState::Running, false) => {
                self.state = RendererState::Suspended;
                info!(width, "backdrop suspended");
                Transition::Suspended
            }
            (RendererState::Suspended, true) => {
                self.state = RendererState::Running;
                self.clock.rebase(now);
                info!(width, "backdrop resumed");
                Transition::Resumed
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RendererState::Running
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Logical size of the surface the renderer paints.
    pub fn canvas_size(&self) -> (f32, f32) {
        canvas_size(&self.grid, self.config.cell_size)
    }

    /// Clock ticks taken so far, reseeds included.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reseeds(&self) -> u64 {
        self.reseeds
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    #[cfg(test)]
    pub(crate) fn replace_grid(&mut self, grid: Grid) {
        assert_eq!((grid.width(), grid.height()), (self.grid.width(), self.grid.height()));
        self.grid = grid;
    }
}
