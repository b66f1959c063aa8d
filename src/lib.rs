//! # Concierge - Predictive Flow Engine for Guest Service Requests
//!
//! **Concierge** turns free text (typed, voice-transcribed or scanned from a
//! QR code) into a guided, multi-step service-ordering conversation. Each step
//! is described by declarative widget descriptors that a front end renders;
//! the guest's picks are merged into typed slot state until the request can be
//! confirmed, priced and paid for.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Catalog**: `Catalog::builtin()` ships the hotel's flows, menus and
//!     keyword tables. A custom catalog can be loaded from JSON or from a compiled
//!     `CatalogArtifact`.
//! 2.  **Predict**: `PredictiveEngine::predict` maps a line of text to the flow
//!     step to show. `IntentMatcher::match_intent` extracts a service and its
//!     slots from longer requests.
//! 3.  **Converse**: a `ChatSession` feeds text and widget selections through the
//!     engine, tracks the cursor and `FlowState`, and produces the confirmation,
//!     payment prompt and final `Booking`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use concierge::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::builtin());
//! let mut session = ChatSession::new(catalog);
//!
//! // "vegetarian breakfast" names both the food type and the meal,
//! // so the session jumps straight to the menu.
//! session.input_changed("vegetarian breakfast");
//! let view = session.view();
//! println!("{}", view.placeholder);
//!
//! // Order two pancakes from the menu widget.
//! let menu = session.renderer().position_of(ComponentKind::FoodMenuCards).unwrap();
//! session.interact(Interaction::Increment { component: menu, item_id: "pancakes".to_string() });
//! session.interact(Interaction::Increment { component: menu, item_id: "pancakes".to_string() });
//! session.interact(Interaction::Add { component: menu });
//!
//! println!("{}", session.input());
//! ```

pub mod catalog;
pub mod chat;
pub mod data;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod prelude;
pub mod render;
pub mod state;
pub mod ui;
pub mod voice;

#[cfg(feature = "python-bindings")]
mod python;
