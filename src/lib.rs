#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod encoder;
pub mod error;
pub mod input;
pub mod model;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;

pub use app::{DigitApp, Settings};
pub use client::{Classifier, ModelCatalog, PredictionClient};
pub use config::ServiceConfig;
pub use encoder::{EncodedImage, ImageEncoder};
pub use error::{ConfigError, EncodeError, PredictionError, TransitionError};
pub use input::{CanvasEvent, InputHandler};
pub use model::{ModelSelector, PredictionResult, PredictionSuccess};
pub use renderer::Renderer;
pub use state::{UiController, UiEvent, UiState};
pub use surface::{DrawingSurface, PixelBuffer};
