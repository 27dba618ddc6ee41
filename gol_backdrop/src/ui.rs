// ui.rs - Per-frame update: theme toggle, resize policy, backdrop painting

use crate::{Backdrop, FrameAction};
use crate::painter::PainterCanvas;
use eframe::egui;
use egui::{Align2, Sense, Vec2};
use gol_core::{RendererState, Theme, Transition};
use std::time::Instant;

// Offset of the backdrop from the window's top-right corner
const CORNER_OFFSET: Vec2 = Vec2::new(-20.0, 20.0);

impl eframe::App for Backdrop {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Viewport resize notifications
        if self.observe_viewport(ctx.screen_rect().width(), now) == Transition::Resumed {
            ctx.request_repaint();
        }

        let theme = self.pending_theme.unwrap_or(self.renderer.theme());
        ctx.set_visuals(match theme {
            Theme::Dark  => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life Backdrop");

            ui.horizontal(|ui| {
                let label = match theme {
                    Theme::Dark  => "☀ Light theme",
                    Theme::Light => "🌙 Dark theme",
                };
                if ui.button(label).clicked() {
                    self.toggle_theme();
                }

                ui.separator();

                let status = match self.renderer.state() {
                    RendererState::Running   => "running",
                    RendererState::Suspended => "hidden (window too narrow)",
                };
                ui.label(format!("Backdrop: {status}"));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.renderer.generation()));
                ui.label(format!("Reseeds: {}", self.renderer.reseeds()));
                ui.label(format!("Live cells: {}", self.renderer.grid().live_count()));
            });
        });

        // Taken after the panel so a click on this frame recolours this frame.
        let action = self.frame_action();
        if !action.wants_repaint() {
            // Host schedule released: no repaint requested until a resize resumes us.
            return;
        }

        let (w, h) = self.renderer.canvas_size();
        let opacity = self.renderer.config().opacity;

        egui::Area::new("game-of-life-backdrop")
            .anchor(Align2::RIGHT_TOP, CORNER_OFFSET)
            .interactable(false)
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(Vec2::new(w, h), Sense::hover());
                let mut canvas = PainterCanvas::new(&painter, response.rect.min, opacity);

                match action {
                    FrameAction::ApplyTheme(theme) => self.renderer.set_theme(theme, &mut canvas),
                    FrameAction::Advance => {
                        self.renderer.frame(now, &mut canvas);
                    }
                    FrameAction::Hidden => {}
                }
            });

        ctx.request_repaint();
    }
}
