//! Common test utilities for building catalogs, sessions and slot state.
use concierge::prelude::*;
use concierge::state::{QuantityEntry, Turnaround};
use std::sync::Arc;

/// The built-in catalog, shared the way the engine expects it.
#[allow(dead_code)]
pub fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

#[allow(dead_code)]
pub fn engine() -> PredictiveEngine {
    PredictiveEngine::new(builtin())
}

#[allow(dead_code)]
pub fn matcher() -> IntentMatcher {
    IntentMatcher::new(builtin())
}

#[allow(dead_code)]
pub fn session() -> ChatSession {
    ChatSession::new(builtin())
}

/// The index of the first rendered component of `kind`, panicking if absent.
#[allow(dead_code)]
pub fn component(session: &ChatSession, kind: ComponentKind) -> usize {
    session
        .renderer()
        .position_of(kind)
        .unwrap_or_else(|| panic!("no {} component is rendered", kind))
}

/// Laundry slots for two shirts and one pair of pants, returned same day.
#[allow(dead_code)]
pub fn same_day_laundry_state() -> FlowState {
    let mut state = FlowState::new();
    state.set_turnaround(Turnaround::SameDay);
    state.merge_quantities(vec![QuantityEntry::new("shirts", 2), QuantityEntry::new("pants", 1)]);
    state
}

/// Walks a session through the laundry flow up to the confirmation card:
/// wash & fold, same day, two shirts and one pair of pants.
#[allow(dead_code)]
pub fn laundry_to_confirmation(session: &mut ChatSession) {
    session.input_changed("laundry");

    let cards = component(session, ComponentKind::ServiceCards);
    session.interact(Interaction::PickCard {
        component: cards,
        card_id: "wash-fold".to_string(),
    });

    let turnaround = component(session, ComponentKind::RadioGroup);
    session.interact(Interaction::Choose {
        component: turnaround,
        value: "same-day".to_string(),
    });

    let items = component(session, ComponentKind::QuantitySelector);
    for item in ["shirts", "shirts", "pants"] {
        session.interact(Interaction::Increment {
            component: items,
            item_id: item.to_string(),
        });
    }
    session.interact(Interaction::Add { component: items });
}

/// Presses the confirm button on the rendered confirmation card.
#[allow(dead_code)]
pub fn confirm(session: &mut ChatSession) -> Transition {
    let card = component(session, ComponentKind::ConfirmationCard);
    session.interact(Interaction::Confirm { component: card })
}
