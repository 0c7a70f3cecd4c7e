mod central_panel;
mod controls_panel;
mod result_panel;

pub use central_panel::central_panel;
pub use controls_panel::{BUSY_LABEL, CatalogStatus, PREDICT_LABEL, WAITING_HINT, controls_panel};
pub use result_panel::{PLACEHOLDER_TEXT, format_confidence, result_panel};
