//! Board Panel Widget
//! Title, error banner, ranked team cards and the full report button.

use crate::board::{BoardPhase, BoardState};
use crate::data::RankedTeam;
use egui::{Color32, Frame, RichText, Stroke};

const CARD_FILL: Color32 = Color32::from_rgb(11, 11, 11);
const CARD_BORDER: Color32 = Color32::from_rgb(69, 10, 10);
const SCORE_RED: Color32 = Color32::from_rgb(239, 68, 68);
const CARD_SPACING: f32 = 12.0;

/// Central panel listing the top teams.
pub struct BoardPanel {
    show_rank: bool,
}

impl BoardPanel {
    pub fn new(show_rank: bool) -> Self {
        Self { show_rank }
    }

    /// Draw the board for the current state
    pub fn show(&self, ui: &mut egui::Ui, state: &BoardState) -> BoardPanelAction {
        let mut action = BoardPanelAction::None;

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Leaderboard").size(28.0).strong());
        });
        ui.add_space(10.0);

        if let Some(message) = &state.error_message {
            Frame::none()
                .fill(Color32::from_rgb(69, 10, 10))
                .stroke(Stroke::new(1.0, Color32::from_rgb(153, 27, 27)))
                .rounding(8.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(message).color(Color32::from_rgb(248, 113, 113)));
                });
            ui.add_space(10.0);
        }

        if state.teams.is_empty() {
            let placeholder = match state.phase() {
                BoardPhase::Loaded => "No teams on the board yet",
                BoardPhase::Errored => "",
                BoardPhase::Idle | BoardPhase::Loading => "Loading standings…",
            };
            if !placeholder.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(RichText::new(placeholder).size(14.0).color(Color32::GRAY));
                });
            }
        }

        for team in &state.teams {
            self.team_card(ui, team);
            ui.add_space(CARD_SPACING);
        }

        ui.add_space(30.0);
        let report = egui::Button::new(
            RichText::new("View Full Report →")
                .size(16.0)
                .strong()
                .color(Color32::BLACK),
        )
        .fill(Color32::from_rgb(185, 28, 28))
        .rounding(10.0)
        .min_size(egui::vec2(ui.available_width(), 48.0));
        if ui.add(report).clicked() {
            action = BoardPanelAction::OpenReport;
        }

        action
    }

    fn team_card(&self, ui: &mut egui::Ui, team: &RankedTeam) {
        Frame::none()
            .fill(CARD_FILL)
            .stroke(Stroke::new(1.0, CARD_BORDER))
            .rounding(10.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if self.show_rank {
                        ui.label(
                            RichText::new(format!("#{}", team.rank))
                                .size(14.0)
                                .color(Color32::GRAY),
                        );
                        ui.add_space(8.0);
                    }
                    ui.label(RichText::new(&team.team).size(18.0).strong());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(team.score_label())
                                    .size(30.0)
                                    .strong()
                                    .color(SCORE_RED),
                            );
                            ui.label(RichText::new("POINTS").size(9.0).color(Color32::GRAY));
                        });
                    });
                });
            });
    }
}

/// Actions triggered by the board panel
#[derive(Debug, Clone, PartialEq)]
pub enum BoardPanelAction {
    None,
    OpenReport,
}
