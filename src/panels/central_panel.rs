use eframe::egui;

use super::result_panel::result_panel;
use crate::DigitApp;
use crate::surface::CANVAS_SIZE;

pub fn central_panel(app: &mut DigitApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Handwritten Digit Classifier");
        ui.label("Draw a digit from 0 to 9 and let the model predict it");
        ui.add_space(12.0);

        let canvas_size = egui::vec2(CANVAS_SIZE as f32, CANVAS_SIZE as f32);
        ui.horizontal_top(|ui| {
            let (canvas_rect, _response) = ui.allocate_exact_size(canvas_size, egui::Sense::drag());

            app.handle_canvas_input(ctx, canvas_rect, canvas_size);
            app.render_canvas(ctx, &ui.painter_at(canvas_rect), canvas_rect);

            ui.add_space(24.0);
            result_panel(ui, &app.controller().prediction(), canvas_size);
        });
    });
}
