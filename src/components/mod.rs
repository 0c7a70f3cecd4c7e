mod model_button;

pub use model_button::ModelButton;
