use crate::catalog::FlowId;
use thiserror::Error;

/// Errors that can occur while building, loading or saving a flow catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not access catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Catalog artifact error: {0}")]
    Artifact(String),

    #[error("Flow '{0}' is not defined in the catalog")]
    FlowNotFound(FlowId),

    #[error("Prediction rule {rule_index} references step {step_index} of flow '{flow}', which does not exist")]
    DanglingStepReference {
        rule_index: usize,
        flow: FlowId,
        step_index: usize,
    },

    #[error("Flow '{0}' is defined more than once")]
    DuplicateFlow(FlowId),
}

/// Failures reported by the speech capture collaborator.
///
/// The display strings are shown to the guest as-is, so they are phrased as
/// user-facing hints rather than diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Microphone access denied")]
    NotAllowed,

    #[error("No speech detected. Try speaking again.")]
    NoSpeech,

    #[error("Network error. Check your connection.")]
    Network,

    #[error("Voice recognition not supported")]
    Unsupported,

    #[error("Failed to start voice recognition")]
    StartFailed,

    #[error("Voice recognition failed. Try again.")]
    Other(String),
}

impl VoiceError {
    /// Maps a platform error code (`not-allowed`, `no-speech`, ...) to a `VoiceError`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "not-allowed" => VoiceError::NotAllowed,
            "no-speech" => VoiceError::NoSpeech,
            "network" => VoiceError::Network,
            other => VoiceError::Other(other.to_string()),
        }
    }
}
