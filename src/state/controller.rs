use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use uuid::Uuid;

use super::UiState;
use crate::client::Classifier;
use crate::encoder::ImageEncoder;
use crate::error::{PredictionError, TransitionError};
use crate::input::CanvasEvent;
use crate::model::{ModelSelector, PredictionResult, PredictionSuccess};
use crate::surface::DrawingSurface;

/// Everything the user can do, as plain data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Canvas(CanvasEvent),
    SelectModel(ModelSelector),
    Clear,
    Submit,
}

impl From<CanvasEvent> for UiEvent {
    fn from(event: CanvasEvent) -> Self {
        Self::Canvas(event)
    }
}

/// Identifies one outbound prediction request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission-{}", self.0)
    }
}

/// A prediction request that has been started but not awaited.
///
/// The caller decides where to drive it (a tokio task in the app, directly in
/// tests) and hands the [`Completion`] back to [`UiController::complete`].
pub struct Submission {
    id: SubmissionId,
    model: ModelSelector,
    request: BoxFuture<'static, Result<PredictionSuccess, PredictionError>>,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("id", &self.id)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl Submission {
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn model(&self) -> ModelSelector {
        self.model
    }

    pub async fn run(self) -> Completion {
        Completion {
            id: self.id,
            outcome: self.request.await,
        }
    }
}

/// The resolved outcome of a [`Submission`]
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub id: SubmissionId,
    pub outcome: Result<PredictionSuccess, PredictionError>,
}

/// Owns the drawing surface and the UI state machine, and is the only thing
/// that talks to the encoder and the classifier.
///
/// All methods run on the UI thread. The only asynchronous part, the request
/// itself, is handed out as a [`Submission`]. At most one submission is in
/// flight at a time.
pub struct UiController {
    surface: DrawingSurface,
    encoder: ImageEncoder,
    classifier: Arc<dyn Classifier>,
    model: ModelSelector,
    state: UiState,
    in_flight: Option<SubmissionId>,
}

impl fmt::Debug for UiController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiController")
            .field("model", &self.model)
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl UiController {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            surface: DrawingSurface::new(),
            encoder: ImageEncoder::new(),
            classifier,
            model: ModelSelector::default(),
            state: UiState::Idle,
            in_flight: None,
        }
    }

    pub fn with_model(mut self, model: ModelSelector) -> Self {
        self.model = model;
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn model(&self) -> ModelSelector {
        self.model
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    /// Whether the submit action should be offered
    pub fn submit_enabled(&self) -> bool {
        self.in_flight.is_none()
    }

    /// A cleared request is still running, so submit stays disabled while
    /// the state no longer shows it
    pub fn awaiting_discarded(&self) -> bool {
        self.in_flight.is_some() && !self.state.is_submitting()
    }

    /// What the result panel should show
    pub fn prediction(&self) -> PredictionResult {
        match &self.state {
            UiState::Idle | UiState::Drawing | UiState::Ready => PredictionResult::Idle,
            UiState::Submitting => PredictionResult::Pending,
            UiState::Result { digit, confidence } => PredictionResult::Success {
                digit: *digit,
                confidence: *confidence,
            },
            UiState::Error { message } => PredictionResult::Failure {
                message: message.clone(),
            },
        }
    }

    /// Applies one user event. Returns a [`Submission`] when the event started
    /// a prediction request.
    pub fn handle(&mut self, event: UiEvent) -> Option<Submission> {
        match event {
            UiEvent::Canvas(canvas_event) => {
                self.handle_canvas(canvas_event);
                None
            }
            UiEvent::SelectModel(model) => {
                self.select_model(model);
                None
            }
            UiEvent::Clear => {
                self.clear();
                None
            }
            UiEvent::Submit => self.submit(),
        }
    }

    pub fn handle_canvas(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown(pos) => {
                if self.state.is_submitting() {
                    return;
                }
                self.surface.begin_stroke(pos);
                if self.surface.is_stroking() {
                    self.apply(UiState::Drawing);
                }
            }
            CanvasEvent::PointerMove(pos) => {
                if self.state.is_drawing() {
                    self.surface.extend_stroke(pos);
                }
            }
            CanvasEvent::PointerUp | CanvasEvent::PointerLeave => {
                if self.state.is_drawing() {
                    self.surface.end_stroke();
                    self.apply(UiState::Ready);
                }
            }
        }
    }

    pub fn select_model(&mut self, model: ModelSelector) {
        if self.model != model {
            log::debug!("Model selection changed: {} -> {}", self.model, model);
            self.model = model;
        }
    }

    /// Wipes the drawing and any result. A request still in flight keeps
    /// submit disabled until it resolves; its outcome is then dropped.
    pub fn clear(&mut self) {
        if let Some(id) = self.in_flight {
            log::info!("Canvas cleared while {} is in flight; its result will be discarded", id);
        }
        self.surface.clear();
        self.apply(UiState::Idle);
    }

    /// Encodes the canvas as it is right now and starts a request for the
    /// selected model. No-op while another request is in flight.
    pub fn submit(&mut self) -> Option<Submission> {
        if let Some(id) = self.in_flight {
            log::debug!("Ignoring submit, {} is still in flight", id);
            return None;
        }

        self.surface.end_stroke();
        if let Err(err) = self.transition_to(UiState::Submitting) {
            log::warn!("Cannot submit: {}", err);
            return None;
        }

        let image = match self.encoder.encode(self.surface.buffer()) {
            Ok(image) => image,
            Err(err) => {
                let err = PredictionError::from(err);
                log::warn!("Prediction aborted: {}", err);
                self.apply(UiState::Error {
                    message: err.user_message().to_owned(),
                });
                return None;
            }
        };

        let id = SubmissionId::new();
        let model = self.model;
        let classifier = Arc::clone(&self.classifier);
        self.in_flight = Some(id);
        log::info!("Starting {} with the {} model", id, model);

        Some(Submission {
            id,
            model,
            request: Box::pin(async move { classifier.classify(model, image).await }),
        })
    }

    /// Feeds the outcome of a [`Submission`] back into the state machine
    pub fn complete(&mut self, completion: Completion) {
        if self.in_flight != Some(completion.id) {
            log::warn!("Dropping completion for unknown {}", completion.id);
            return;
        }
        self.in_flight = None;

        if !self.state.is_submitting() {
            log::info!("Discarding outcome of {}, the canvas was cleared", completion.id);
            return;
        }

        let next = match completion.outcome {
            Ok(PredictionSuccess { digit, confidence }) => {
                log::info!(
                    "{} predicted {} ({:.1}% confidence)",
                    completion.id,
                    digit,
                    confidence * 100.0
                );
                UiState::Result { digit, confidence }
            }
            Err(err) => {
                log::warn!("{} failed: {}", completion.id, err);
                UiState::Error {
                    message: err.user_message().to_owned(),
                }
            }
        };
        self.apply(next);
    }

    /// Validates and performs a state transition. Private so `Submitting`
    /// can only be entered through [`Self::submit`] and `Result` only through
    /// [`Self::complete`].
    fn transition_to(&mut self, new_state: UiState) -> Result<(), TransitionError> {
        if new_state.is_submitting() && self.in_flight.is_some() {
            return Err(TransitionError::Busy);
        }
        if !self.state.can_transition_to(&new_state) {
            return Err(TransitionError::InvalidStateTransition {
                from: self.state.name(),
                to: new_state.name(),
            });
        }
        if self.state != new_state {
            log::debug!("UI state {} -> {}", self.state.name(), new_state.name());
        }
        self.state = new_state;
        Ok(())
    }

    fn apply(&mut self, new_state: UiState) {
        if let Err(err) = self.transition_to(new_state) {
            log::warn!("Rejected UI transition: {}", err);
        }
    }
}
