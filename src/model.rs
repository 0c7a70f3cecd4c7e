use std::fmt;

use serde::{Deserialize, Serialize};

/// Which remote model variant handles the next prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelSelector {
    /// Convolutional network (spatial features)
    #[default]
    Cnn,
    /// Dense multi-layer perceptron
    Mlp,
}

impl ModelSelector {
    pub const ALL: [ModelSelector; 2] = [ModelSelector::Cnn, ModelSelector::Mlp];

    /// Path segment used in `POST /predict/{model}`
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Cnn => "cnn",
            Self::Mlp => "mlp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cnn => "CNN",
            Self::Mlp => "MLP",
        }
    }
}

impl fmt::Display for ModelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated answer from the classification service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionSuccess {
    pub digit: u8,
    pub confidence: f32,
}

/// What the result panel shows. Always derived from the controller state,
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionResult {
    #[default]
    Idle,
    Pending,
    Success { digit: u8, confidence: f32 },
    Failure { message: String },
}
