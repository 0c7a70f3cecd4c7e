use eframe::egui;

use crate::model::PredictionResult;

pub const PLACEHOLDER_TEXT: &str = "Draw a digit and click predict";

/// "93.0% confidence"
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.1}% confidence", confidence * 100.0)
}

/// Shows the prediction, a placeholder, or the error overlay
pub fn result_panel(ui: &mut egui::Ui, result: &PredictionResult, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 12.0, egui::Color32::from_rgb(30, 41, 59));

    match result {
        PredictionResult::Idle => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                PLACEHOLDER_TEXT,
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(120),
            );
        }
        PredictionResult::Pending => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Predicting...",
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(180),
            );
        }
        PredictionResult::Success { digit, confidence } => {
            painter.text(
                rect.center_top() + egui::vec2(0.0, 32.0),
                egui::Align2::CENTER_CENTER,
                "PREDICTION",
                egui::FontId::proportional(13.0),
                egui::Color32::from_gray(150),
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                digit.to_string(),
                egui::FontId::proportional(120.0),
                egui::Color32::WHITE,
            );
            painter.text(
                rect.center_bottom() - egui::vec2(0.0, 32.0),
                egui::Align2::CENTER_CENTER,
                format_confidence(*confidence),
                egui::FontId::proportional(14.0),
                egui::Color32::from_rgb(134, 239, 172),
            );
        }
        PredictionResult::Failure { message } => {
            painter.rect_filled(rect, 12.0, egui::Color32::from_rgba_unmultiplied(127, 29, 29, 230));
            let galley = painter.layout(
                message.clone(),
                egui::FontId::proportional(15.0),
                egui::Color32::WHITE,
                rect.width() - 32.0,
            );
            let pos = rect.center() - galley.size() / 2.0;
            painter.galley(pos, galley, egui::Color32::WHITE);
        }
    }
}
