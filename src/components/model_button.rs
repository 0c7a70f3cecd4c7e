use eframe::egui;

use crate::model::ModelSelector;

/// Toggle button for one model variant
pub struct ModelButton {
    pub model: ModelSelector,
    pub selected: bool,
    /// The service reported that it does not have this model loaded
    pub unavailable: bool,
}

impl ModelButton {
    pub fn new(model: ModelSelector, selected: bool) -> Self {
        Self {
            model,
            selected,
            unavailable: false,
        }
    }

    pub fn unavailable(mut self, unavailable: bool) -> Self {
        self.unavailable = unavailable;
        self
    }

    fn accent(&self) -> egui::Color32 {
        match self.model {
            ModelSelector::Cnn => egui::Color32::from_rgb(37, 99, 235),  // blue
            ModelSelector::Mlp => egui::Color32::from_rgb(147, 51, 234), // purple
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(96.0, 32.0);
        let (rect, mut response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                self.accent()
            } else if response.hovered() {
                egui::Color32::from_gray(40)
            } else {
                egui::Color32::from_gray(30)
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(160)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{} Model", self.model.label()),
                egui::FontId::proportional(14.0),
                text_color,
            );

            if self.unavailable {
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(1.5, egui::Color32::from_rgb(220, 38, 38)),
                );
            }
        }

        if self.unavailable {
            response = response.on_hover_text("Not loaded on the server");
        }
        response
    }
}
