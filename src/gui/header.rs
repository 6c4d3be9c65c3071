//! Header Widget
//! Wordmark on the left, sync indicator and refresh button on the right.

use egui::{vec2, Color32, Frame, Pos2, Rect, RichText, Sense, Shape, Stroke};

const ACCENT_RED: Color32 = Color32::from_rgb(220, 38, 38);
const MUTED_RED: Color32 = Color32::from_rgb(252, 165, 165);
const LOGO_SIZE: f32 = 56.0;

/// Top bar of the leaderboard window.
#[derive(Default)]
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Draw the header
    pub fn show(&self, ui: &mut egui::Ui, is_loading: bool) -> HeaderAction {
        let mut action = HeaderAction::None;

        ui.horizontal(|ui| {
            ui.add_space(6.0);
            logo_mark(ui);
            ui.add_space(14.0);
            ui.spacing_mut().item_spacing.x = 0.0;
            wordmark_box(ui, "IE", ACCENT_RED);
            wordmark_box(ui, "CUP", Color32::WHITE);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 10.0;
                ui.add_space(6.0);

                let button = egui::Button::new(RichText::new("Refresh").color(MUTED_RED))
                    .stroke(Stroke::new(1.0, Color32::from_rgb(153, 27, 27)))
                    .rounding(12.0);
                if ui.add(button).clicked() {
                    action = HeaderAction::Refresh;
                }

                if is_loading {
                    ui.label(RichText::new("Syncing…").size(11.0).color(MUTED_RED));
                    ui.spinner();
                }
            });
        });

        action
    }
}

fn logo_mark(ui: &mut egui::Ui) {
    let (rect, response) = ui.allocate_exact_size(vec2(LOGO_SIZE, LOGO_SIZE), Sense::hover());
    ui.painter().extend(logo_shapes(rect));
    response.on_hover_text("Company Logo");
}

/// Trophy emblem on a glowing red disc, fitted inside `rect`.
fn logo_shapes(rect: Rect) -> Vec<Shape> {
    let c = rect.center();
    let r = rect.width().min(rect.height()) / 2.0;
    let at = |x: f32, y: f32| -> Pos2 { c + vec2(x * r, y * r) };

    vec![
        // glow
        Shape::circle_filled(c, r, Color32::from_rgba_unmultiplied(255, 0, 0, 40)),
        Shape::circle_filled(c, r * 0.92, Color32::from_rgba_unmultiplied(255, 0, 0, 70)),
        Shape::circle_filled(c, r * 0.85, Color32::BLACK),
        Shape::circle_stroke(c, r * 0.85, Stroke::new(2.0, ACCENT_RED)),
        // cup
        Shape::convex_polygon(
            vec![at(-0.4, -0.45), at(0.4, -0.45), at(0.22, 0.05), at(-0.22, 0.05)],
            Color32::WHITE,
            Stroke::NONE,
        ),
        Shape::rect_filled(
            Rect::from_min_max(at(-0.06, 0.05), at(0.06, 0.3)),
            0.0,
            Color32::WHITE,
        ),
        Shape::rect_filled(
            Rect::from_min_max(at(-0.28, 0.3), at(0.28, 0.42)),
            1.0,
            ACCENT_RED,
        ),
    ]
}

fn wordmark_box(ui: &mut egui::Ui, text: &str, border: Color32) {
    Frame::none()
        .fill(Color32::BLACK)
        .stroke(Stroke::new(2.0, border))
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .size(36.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
}

/// Actions triggered by the header
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderAction {
    None,
    Refresh,
}
