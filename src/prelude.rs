//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the concierge crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use concierge::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Arc::new(Catalog::from_json_file("path/to/catalog.json")?);
//! let engine = PredictiveEngine::new(catalog.clone());
//! let matcher = IntentMatcher::new(catalog);
//!
//! if let Some(prediction) = engine.predict("I need laundry for 3 shirts tomorrow") {
//!     println!("{}: {}", prediction.flow_id, prediction.follow_up_question);
//! }
//! println!("{:?}", matcher.match_intent("I need laundry for 3 shirts tomorrow"));
//! # Ok(())
//! # }
//! ```

// Catalog and configuration
pub use crate::catalog::{Catalog, CatalogArtifact, FlowId, FlowStep, FoodType, MealType, Timing};

// Prediction and matching
pub use crate::engine::{PredictionResult, PredictiveEngine};
pub use crate::matcher::{IntentMatcher, VoiceIntent};

// Conversation
pub use crate::chat::{Booking, ChatSession, PaymentMethod, PaymentStatus, SessionPhase, Transition};
pub use crate::state::{Cursor, FlowState};

// Widgets
pub use crate::render::{DynamicUiRenderer, Interaction, Selection, TextRenderer};
pub use crate::ui::{ComponentKind, UiComponent};

// Voice
pub use crate::voice::{ScriptedCapture, SpeechCapture, VoiceInput};

// Error types
pub use crate::error::{CatalogError, VoiceError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
