use eframe::egui;

use crate::DigitApp;
use crate::components::ModelButton;
use crate::model::ModelSelector;
use crate::state::UiEvent;

pub const PREDICT_LABEL: &str = "Predict Digit";
pub const BUSY_LABEL: &str = "Processing...";
pub const WAITING_HINT: &str = "Waiting for the previous request to finish";

pub fn controls_panel(app: &mut DigitApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Model");
            ui.add_space(4.0);

            let selected = app.controller().model();
            ui.horizontal(|ui| {
                for model in ModelSelector::ALL {
                    let unavailable = app
                        .catalog()
                        .is_some_and(|catalog| !catalog.serves(model));
                    let button = ModelButton::new(model, model == selected).unavailable(unavailable);
                    if button.show(ui).clicked() {
                        log::info!("Model selected from UI: {}", model);
                        app.push_event(UiEvent::SelectModel(model));
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.push_event(UiEvent::Clear);
                }

                let busy = !app.controller().submit_enabled();
                let label = if busy { BUSY_LABEL } else { PREDICT_LABEL };
                if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                    app.push_event(UiEvent::Submit);
                }
            });

            // The canvas was cleared but the old request has not resolved yet
            if app.controller().awaiting_discarded() {
                ui.small(WAITING_HINT);
            }

            ui.separator();

            egui::CollapsingHeader::new("Service")
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(format!("Endpoint: {}", app.base_url()));

                    match app.catalog_status() {
                        CatalogStatus::Loading => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label("Fetching model list...");
                            });
                        }
                        CatalogStatus::Failed(reason) => {
                            ui.colored_label(egui::Color32::LIGHT_RED, "Model list unavailable");
                            ui.small(reason);
                        }
                        CatalogStatus::Loaded(names) => {
                            if names.is_empty() {
                                ui.label("The service has no models loaded");
                            }
                            for name in names {
                                ui.label(format!("• {}", name));
                            }
                        }
                        CatalogStatus::NotRequested => {}
                    }

                    if ui.button("Refresh").clicked() {
                        app.refresh_catalog(ctx);
                    }
                });
        });
}

/// What the service section shows about the model catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    NotRequested,
    Loading,
    Failed(String),
    Loaded(Vec<String>),
}
