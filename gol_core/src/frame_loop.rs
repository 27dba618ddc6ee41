// frame_loop.rs - Headless host: drives a Renderer from a tokio task
//
// One task runs "draw a frame, then wait for the next one". Theme and viewport
// changes arrive on watch channels and are handled between frames, so the
// renderer is never touched by two things at once.

use crate::canvas::Canvas;
use crate::renderer::{Renderer, Transition};
use crate::theme::Theme;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

/// Roughly one display refresh.
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(16);

#[derive(Debug, Error)]
pub enum FrameLoopError {
    #[error("frame loop task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Change notifications the loop listens to.
pub struct Signals {
    pub theme: watch::Receiver<Theme>,
    pub viewport_width: watch::Receiver<f32>,
}

/// Sending halves matching [`Signals`], kept by whoever owns the environment.
pub struct SignalSenders {
    pub theme: watch::Sender<Theme>,
    pub viewport_width: watch::Sender<f32>,
}

/// Creates a linked sender/receiver pair seeded with the current values.
pub fn signals(theme: Theme, viewport_width: f32) -> (SignalSenders, Signals) {
    let (theme_tx, theme_rx) = watch::channel(theme);
    let (width_tx, width_rx) = watch::channel(viewport_width);
    (
        SignalSenders { theme: theme_tx, viewport_width: width_tx },
        Signals { theme: theme_rx, viewport_width: width_rx },
    )
}

pub struct FrameLoop;

impl FrameLoop {
    /// Starts the loop on the current tokio runtime.
    pub fn spawn<C, R>(
        renderer: Renderer<R>,
        canvas: C,
        signals: Signals,
        frame_period: Duration,
    ) -> FrameHandle<C, R>
    where
        C: Canvas + Send + 'static,
        R: Rng + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(run(renderer, canvas, signals, frame_period, shutdown_rx));
        FrameHandle { shutdown: shutdown_tx, task }
    }
}

/// Owns the running loop. Dropping it stops the loop after the current frame.
pub struct FrameHandle<C, R> {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<(Renderer<R>, C)>,
}

impl<C, R> FrameHandle<C, R> {
    /// Stops the loop and hands back the renderer and the canvas.
    pub async fn stop(self) -> Result<(Renderer<R>, C), FrameLoopError> {
        // The loop may already have exited on its own; nothing to signal then.
        let _ = self.shutdown.send(());
        Ok(self.task.await?)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

async fn run<C, R>(
    mut renderer: Renderer<R>,
    mut canvas: C,
    mut signals: Signals,
    frame_period: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> (Renderer<R>, C)
where
    C: Canvas,
    R: Rng,
{
    let mut ticker = time::interval(frame_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // A closed channel resolves `changed()` immediately forever; stop polling it.
    let mut theme_open = true;
    let mut viewport_open = true;

    loop {
        let running = renderer.is_running();
        tokio::select! {
            biased;

            _ = &mut shutdown => break,

            changed = signals.theme.changed(), if theme_open => {
                if changed.is_err() {
                    theme_open = false;
                    continue;
                }
                let theme = *signals.theme.borrow_and_update();
                renderer.set_theme(theme, &mut canvas);
            }

            changed = signals.viewport_width.changed(), if viewport_open => {
                if changed.is_err() {
                    viewport_open = false;
                    continue;
                }
                let width = *signals.viewport_width.borrow_and_update();
                if renderer.resize(width, Instant::now().into_std()) == Transition::Resumed {
                    ticker.reset();
                }
            }

            // Not polled while suspended: no frames are scheduled until resumed.
            _ = ticker.tick(), if running => {
                let outcome = renderer.frame(Instant::now().into_std(), &mut canvas);
                trace!(?outcome, "frame");
            }
        }
    }

    (renderer, canvas)
}
