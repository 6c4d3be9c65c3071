//! Leaderboard Main Application
//! Header, board panel and footer, with sheet loads running in the background.

use crate::board::{BoardEvent, BoardState};
use crate::config::LeaderboardConfig;
use crate::data::{spawn_load, InFlight, LoadOutcome, SheetSource};
use crate::gui::{BoardPanel, BoardPanelAction, Header, HeaderAction};
use egui::{Color32, RichText};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tracing::{info, warn};

const CONTENT_WIDTH: f32 = 512.0;

/// Main application window.
pub struct LeaderboardApp {
    config: LeaderboardConfig,
    source: Arc<dyn SheetSource>,
    state: BoardState,
    header: Header,
    board_panel: BoardPanel,

    // Background loads; every worker gets a clone of `load_tx`
    next_generation: u64,
    load_tx: Sender<LoadOutcome>,
    load_rx: Receiver<LoadOutcome>,
}

impl LeaderboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: LeaderboardConfig,
        source: Arc<dyn SheetSource>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut app = Self::with_source(config, source);
        app.start_load();
        app
    }

    fn with_source(config: LeaderboardConfig, source: Arc<dyn SheetSource>) -> Self {
        let (load_tx, load_rx) = channel();
        Self {
            board_panel: BoardPanel::new(config.show_rank),
            config,
            source,
            state: BoardState::new(),
            header: Header::new(),
            next_generation: 0,
            load_tx,
            load_rx,
        }
    }

    /// Kick off a new load. Any load still in flight is superseded.
    fn start_load(&mut self) {
        self.next_generation += 1;
        let handle = InFlight::new(self.next_generation, self.load_tx.clone());
        info!(generation = handle.generation(), "refreshing leaderboard");

        self.state.apply(BoardEvent::LoadStarted {
            generation: handle.generation(),
        });
        spawn_load(self.source.clone(), self.config.display_limit, handle);
    }

    /// Apply any finished loads to the board
    fn check_load_results(&mut self) {
        while let Ok(outcome) = self.load_rx.try_recv() {
            self.state.apply(outcome.into());
        }
    }

    fn open_report(&self) {
        if let Err(e) = open::that(&self.config.report_url) {
            warn!(url = %self.config.report_url, error = %e, "could not open report");
        }
    }

    fn show_footer(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(
                RichText::new("© 2026 • Industrial Engineering")
                    .size(11.0)
                    .color(Color32::from_rgb(100, 116, 139)),
            );
            ui.add_space(16.0);
        });
    }
}

impl eframe::App for LeaderboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Keep polling the channel while a load is running
        if self.state.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(12.0);
            if self.header.show(ui, self.state.is_loading) == HeaderAction::Refresh {
                self.start_load();
            }
            ui.add_space(12.0);
        });

        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .show(ctx, Self::show_footer);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let margin = ((ui.available_width() - CONTENT_WIDTH) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    ui.vertical(|ui| {
                        ui.set_width(CONTENT_WIDTH.min(ui.available_width()));
                        if self.board_panel.show(ui, &self.state) == BoardPanelAction::OpenReport {
                            self.open_report();
                        }
                    });
                });
            });
        });
    }
}
