mod async_state;
mod controller;
mod ui_state;

pub use async_state::{AsyncState, PendingResults};
pub use controller::{Completion, Submission, SubmissionId, UiController, UiEvent};
pub use ui_state::UiState;
