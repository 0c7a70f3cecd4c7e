use std::sync::Arc;

use eframe::egui;
use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::client::{ModelCatalog, PredictionClient};
use crate::error::PredictionError;
use crate::input::InputHandler;
use crate::model::ModelSelector;
use crate::panels::{self, CatalogStatus};
use crate::renderer::Renderer;
use crate::state::{AsyncState, Submission, UiController, UiEvent};

/// User settings restored between runs. The drawing itself is never stored.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub model: ModelSelector,
}

pub struct DigitApp {
    controller: UiController,
    client: PredictionClient,
    input: InputHandler,
    renderer: Renderer,
    /// Written by spawned tasks, drained at the start of every frame
    async_state: Arc<Mutex<AsyncState>>,
    runtime: Handle,
    catalog: Option<Result<ModelCatalog, PredictionError>>,
    /// Events collected while drawing the panels, applied after them
    events: Vec<UiEvent>,
}

impl DigitApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, client: PredictionClient, runtime: Handle) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let mut app = Self::with_settings(client, runtime, settings);
        app.refresh_catalog(&cc.egui_ctx);
        app
    }

    pub fn with_settings(client: PredictionClient, runtime: Handle, settings: Settings) -> Self {
        let controller = UiController::new(Arc::new(client.clone())).with_model(settings.model);
        Self {
            controller,
            client,
            input: InputHandler::new(),
            renderer: Renderer::new(),
            async_state: Arc::new(Mutex::new(AsyncState::default())),
            runtime,
            catalog: None,
            events: Vec::new(),
        }
    }

    pub fn controller(&self) -> &UiController {
        &self.controller
    }

    pub fn settings(&self) -> Settings {
        Settings {
            model: self.controller.model(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// The last successfully fetched catalog
    pub fn catalog(&self) -> Option<&ModelCatalog> {
        self.catalog.as_ref().and_then(|result| result.as_ref().ok())
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        if self.async_state.lock().loading_catalog {
            return CatalogStatus::Loading;
        }
        match &self.catalog {
            None => CatalogStatus::NotRequested,
            Some(Err(err)) => CatalogStatus::Failed(err.to_string()),
            Some(Ok(catalog)) => {
                CatalogStatus::Loaded(catalog.models.iter().map(|m| m.name.clone()).collect())
            }
        }
    }

    pub fn push_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Translates this frame's pointer input on the canvas into events
    pub fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: egui::Rect,
        canvas_size: egui::Vec2,
    ) {
        let events = self.input.process_input(ctx, canvas_rect, canvas_size);
        self.events.extend(events.into_iter().map(UiEvent::from));
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer
            .render(ctx, painter, rect, self.controller.surface().buffer());
    }

    /// Starts a background fetch of `GET /model_info`
    pub fn refresh_catalog(&mut self, ctx: &egui::Context) {
        {
            let mut state = self.async_state.lock();
            if state.loading_catalog {
                return;
            }
            state.loading_catalog = true;
        }

        let client = self.client.clone();
        let async_state = Arc::clone(&self.async_state);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = client.fetch_model_info().await;
            if let Err(err) = &result {
                log::warn!("Failed to fetch model catalog: {}", err);
            }
            let mut state = async_state.lock();
            state.pending_catalog = Some(result);
            state.loading_catalog = false;
            drop(state);
            ctx.request_repaint();
        });
    }

    /// Applies queued events; a submit spawns the request on the runtime
    pub fn dispatch_events(&mut self, ctx: &egui::Context) {
        for event in std::mem::take(&mut self.events) {
            if let Some(submission) = self.controller.handle(event) {
                self.spawn_submission(submission, ctx);
            }
        }
    }

    fn spawn_submission(&self, submission: Submission, ctx: &egui::Context) {
        let async_state = Arc::clone(&self.async_state);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let completion = submission.run().await;
            async_state.lock().pending_prediction = Some(completion);
            ctx.request_repaint();
        });
    }

    /// Feeds finished background work into the controller
    pub fn process_pending(&mut self) {
        let pending = self.async_state.lock().extract_pending();
        if let Some(completion) = pending.prediction {
            self.controller.complete(completion);
        }
        if let Some(catalog) = pending.catalog {
            self.catalog = Some(catalog);
        }
    }
}

impl eframe::App for DigitApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending();

        panels::controls_panel(self, ctx);
        panels::central_panel(self, ctx);

        self.dispatch_events(ctx);
    }
}
