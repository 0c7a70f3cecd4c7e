/// The states of the digit classifier UI.
///
/// Transitions are validated by [`UiState::can_transition_to`] and performed by
/// [`super::UiController`]. The valid transitions are:
/// ```text
///              pointer-down                 pointer-up / leave
///   ┌──────┐ ─────────────► ┌──────────┐ ──────────────────► ┌─────────┐
///   │ Idle │                │ Drawing  │ ◄────────────────── │  Ready  │
///   └──────┘                └──────────┘    pointer-down     └─────────┘
///      │                         │                                │
///      │ submit                  │ submit                         │ submit
///      ▼                         ▼                                ▼
///   ┌───────────────────────────────────────────────────────────────────┐
///   │                            Submitting                             │
///   └───────────────────────────────────────────────────────────────────┘
///            │ success                                   │ failure
///            ▼                                           ▼
///       ┌──────────┐                                ┌─────────┐
///       │  Result  │                                │  Error  │
///       └──────────┘                                └─────────┘
///
///   Result and Error accept pointer-down (to Drawing) and submit (to Submitting).
///   clear: any state ──► Idle
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    /// Nothing drawn since the last clear, no result
    #[default]
    Idle,
    /// A stroke is in progress
    Drawing,
    /// Something is drawn and no request has been made for it yet
    Ready,
    /// A prediction request is in flight
    Submitting,
    /// The service answered
    Result { digit: u8, confidence: f32 },
    /// The request failed; `message` is safe to show to the user
    Error { message: String },
}

impl UiState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &UiState) -> bool {
        match (self, new_state) {
            // Clearing is always possible
            (_, Self::Idle) => true,

            // Pointer-down starts a stroke unless a request is running
            (Self::Submitting, Self::Drawing) => false,
            (_, Self::Drawing) => true,

            (Self::Drawing, Self::Ready) => true,

            (Self::Submitting, Self::Submitting) => false,
            (_, Self::Submitting) => true,

            (Self::Submitting, Self::Result { .. } | Self::Error { .. }) => true,

            _ => false,
        }
    }

    /// Short name used in logs and transition errors
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing => "Drawing",
            Self::Ready => "Ready",
            Self::Submitting => "Submitting",
            Self::Result { .. } => "Result",
            Self::Error { .. } => "Error",
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
