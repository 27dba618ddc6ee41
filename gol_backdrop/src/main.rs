// main.rs - Desktop host for the Game of Life backdrop
//
// Environment:
//   GOL_BACKDROP_CONFIG  optional TOML file with BackdropConfig overrides
//   GOL_BACKDROP_PREFS   preference file (default: backdrop_prefs.toml)
//   RUST_LOG             tracing filter, e.g. `gol_core=debug`

use eframe::egui;
use gol_core::prefs::{self, FileStore};
use gol_core::{BackdropConfig, ConfigError, Renderer, Theme, Transition};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

mod painter;
mod ui;

const DEFAULT_PREFS_PATH: &str = "backdrop_prefs.toml";
const INITIAL_WINDOW: [f32; 2] = [1280.0, 480.0];

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("window failed: {0}")]
    Window(#[from] eframe::Error),
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config() -> Result<BackdropConfig, ConfigError> {
    match std::env::var_os("GOL_BACKDROP_CONFIG") {
        Some(path) => BackdropConfig::load(path),
        None => Ok(BackdropConfig::default()),
    }
}

fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;
    let store = FileStore::new(
        std::env::var_os("GOL_BACKDROP_PREFS").unwrap_or_else(|| DEFAULT_PREFS_PATH.into()),
    );
    let theme = prefs::load_theme(&store);
    info!(%theme, prefs = %store.path().display(), "starting backdrop");

    // The real width is only known once the window exists; start from the
    // requested size and let the first frame correct it.
    let renderer = Renderer::new(config, theme, INITIAL_WINDOW[0], Instant::now(), StdRng::from_entropy())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INITIAL_WINDOW),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life Backdrop",
        options,
        Box::new(move |_cc| Box::new(Backdrop::new(renderer, store))),
    )?;
    Ok(())
}

/// What the backdrop area does on one egui frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
    /// Too narrow: nothing drawn, no repaint requested.
    Hidden,
    /// Recolour right away with a queued theme.
    ApplyTheme(Theme),
    /// Ordinary frame; the clock decides whether the grid steps.
    Advance,
}

impl FrameAction {
    pub fn wants_repaint(self) -> bool {
        self != FrameAction::Hidden
    }
}

/// The window: a page-like panel with the animation pinned top-right.
pub struct Backdrop {
    pub renderer: Renderer,
    pub store: FileStore,
    pub viewport_width: f32,
    pub pending_theme: Option<Theme>,
}

impl Backdrop {
    fn new(renderer: Renderer, store: FileStore) -> Self {
        Self {
            renderer,
            store,
            viewport_width: INITIAL_WINDOW[0],
            pending_theme: None,
        }
    }

    /// Flips and persists the theme; the renderer picks it up on this frame.
    pub fn toggle_theme(&mut self) {
        let current = self.pending_theme.unwrap_or(self.renderer.theme());
        let next = match prefs::toggle_theme(&mut self.store, current) {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, "theme not persisted");
                current.toggled()
            }
        };
        self.pending_theme = Some(next);
    }

    /// Feeds a window width to the renderer if it changed since last frame.
    pub fn observe_viewport(&mut self, width: f32, now: Instant) -> Transition {
        if width == self.viewport_width {
            return Transition::Unchanged;
        }
        self.viewport_width = width;
        self.renderer.resize(width, now)
    }

    /// Picks this frame's action. A theme queued while hidden stays queued
    /// until the renderer runs again.
    pub fn frame_action(&mut self) -> FrameAction {
        if !self.renderer.is_running() {
            return FrameAction::Hidden;
        }
        match self.pending_theme.take() {
            Some(theme) => FrameAction::ApplyTheme(theme),
            None => FrameAction::Advance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol_core::prefs::{PreferenceStore, THEME_KEY};

    fn backdrop(dir: &tempfile::TempDir, theme: Theme) -> Backdrop {
        let renderer = Renderer::new(
            BackdropConfig::default(),
            theme,
            INITIAL_WINDOW[0],
            Instant::now(),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        Backdrop::new(renderer, FileStore::new(dir.path().join("prefs.toml")))
    }

    #[test]
    fn toggle_persists_and_queues_the_theme() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = backdrop(&dir, Theme::Dark);

        app.toggle_theme();
        assert_eq!(app.pending_theme, Some(Theme::Light));
        assert_eq!(app.store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        // A second click before the frame lands flips back.
        app.toggle_theme();
        assert_eq!(app.pending_theme, Some(Theme::Dark));
        assert_eq!(prefs::load_theme(&app.store), Theme::Dark);
    }

    #[test]
    fn theme_toggled_while_hidden_waits_for_resume() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = backdrop(&dir, Theme::Dark);
        let start = Instant::now();

        assert_eq!(app.observe_viewport(900.0, start), Transition::Suspended);
        app.toggle_theme();

        let action = app.frame_action();
        assert_eq!(action, FrameAction::Hidden);
        assert!(!action.wants_repaint());
        assert_eq!(app.pending_theme, Some(Theme::Light));
        assert_eq!(app.renderer.theme(), Theme::Dark);

        // Same width again is not a resize.
        assert_eq!(app.observe_viewport(900.0, start), Transition::Unchanged);
        assert_eq!(app.frame_action(), FrameAction::Hidden);

        assert_eq!(app.observe_viewport(1280.0, start), Transition::Resumed);
        let action = app.frame_action();
        assert_eq!(action, FrameAction::ApplyTheme(Theme::Light));
        assert!(action.wants_repaint());
        assert_eq!(app.pending_theme, None);
        assert_eq!(app.frame_action(), FrameAction::Advance);
    }

    #[test]
    fn running_backdrop_keeps_repainting() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = backdrop(&dir, Theme::Light);

        assert_eq!(app.observe_viewport(INITIAL_WINDOW[0], Instant::now()), Transition::Unchanged);
        let action = app.frame_action();
        assert_eq!(action, FrameAction::Advance);
        assert!(action.wants_repaint());
    }
}
