use super::PredictiveEngine;
use crate::state::{DeliveryTime, FlowState, Slot, Turnaround};
use itertools::Itertools;

/// Slots consulted, in order, when the state does not record which slot changed last.
const RESPONSE_PRIORITY: [Slot; 7] = [
    Slot::FoodType,
    Slot::Service,
    Slot::MealType,
    Slot::Menu,
    Slot::Quantities,
    Slot::Delivery,
    Slot::Turnaround,
];

impl PredictiveEngine {
    /// Phrases a follow-up sentence from the most recently filled slot.
    ///
    /// Falls back to the input text unchanged when no slot has anything to
    /// say about it.
    pub fn contextual_response(&self, text: &str, state: &FlowState) -> String {
        let slot = state
            .last_updated()
            .or_else(|| RESPONSE_PRIORITY.iter().copied().find(|s| state.is_set(*s)));

        match slot {
            Some(Slot::FoodType) => match state.food_type() {
                Some(food) => format!(
                    "I need food service for {}...what meal are you looking for?",
                    food.title().to_lowercase()
                ),
                None => text.to_string(),
            },
            Some(Slot::Service) => match state.service() {
                Some(card) => format!("{}—what specific assistance do you need?", card.title),
                None => text.to_string(),
            },
            Some(Slot::MealType) => match state.meal_type() {
                Some(meal) => {
                    let food = state
                        .food_type()
                        .map(|f| f.title())
                        .unwrap_or("food")
                        .to_lowercase();
                    format!(
                        "I need {} {}...what would you like to order?",
                        food,
                        meal.title().to_lowercase()
                    )
                }
                None => text.to_string(),
            },
            Some(Slot::Menu) if !state.menu().is_empty() => format!(
                "I need {}...how many portions and any add-ons?",
                state.menu().iter().map(|s| s.card.title.as_str()).join(", ")
            ),
            Some(Slot::Quantities) if !state.quantities().is_empty() => format!(
                "Got it! {}. When do you need this completed?",
                state.quantities_summary()
            ),
            Some(Slot::Delivery) => match state.delivery() {
                Some(DeliveryTime::Asap) => {
                    "Perfect! ASAP delivery selected. Ready to confirm your order?".to_string()
                }
                Some(DeliveryTime::OneHour) => {
                    "Perfect! Delivery in 1 hour selected. Ready to confirm your order?".to_string()
                }
                Some(DeliveryTime::TwoHours) => {
                    "Perfect! Delivery in 2 hours selected. Ready to confirm your order?".to_string()
                }
                Some(DeliveryTime::SpecificTime) => {
                    "Perfect! specific time delivery selected. Ready to confirm your order?".to_string()
                }
                None => text.to_string(),
            },
            Some(Slot::Turnaround) => {
                let turnaround = match state.turnaround() {
                    Some(Turnaround::SameDay) => "same day service",
                    Some(Turnaround::NextDay) => "next day delivery",
                    Some(Turnaround::Standard) => "standard delivery",
                    None => return text.to_string(),
                };
                format!("Perfect! {} selected. Ready to confirm your request?", turnaround)
            }
            _ => text.to_string(),
        }
    }
}
