//! The predictive engine: picks the flow and step to surface for a piece of
//! text, and decides which step follows a completed one.
use crate::catalog::{Catalog, FlowId, FlowStep, FoodType, MealType, RuleTarget, RuleTrigger};
use crate::state::FlowState;
use crate::ui::{MenuCard, UiComponent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod response;

/// The step surfaced for a piece of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub flow_id: FlowId,
    pub follow_up_question: String,
    pub predictive_text: String,
    pub ui_components: Vec<UiComponent>,
}

impl PredictionResult {
    fn from_step(flow_id: FlowId, step: FlowStep) -> Self {
        Self {
            flow_id,
            follow_up_question: step.follow_up_question,
            predictive_text: step.predictive_text,
            ui_components: step.ui_components,
        }
    }

    pub fn step(&self) -> FlowStep {
        FlowStep {
            follow_up_question: self.follow_up_question.clone(),
            predictive_text: self.predictive_text.clone(),
            ui_components: self.ui_components.clone(),
        }
    }
}

pub struct PredictiveEngine {
    catalog: Arc<Catalog>,
}

impl PredictiveEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the catalog's prediction rules in order; the first rule that
    /// recognizes the lower-cased, trimmed text decides the result.
    ///
    /// Returns `None` when no rule fires, in which case no widgets are shown
    /// and the guest simply keeps typing.
    pub fn predict(&self, text: &str) -> Option<PredictionResult> {
        let lower = text.trim().to_lowercase();
        log::debug!("Predicting input: {}", lower);

        let rule = self.catalog.rules().iter().find(|rule| match &rule.trigger {
            RuleTrigger::Exact(phrases) => phrases.iter().any(|p| *p == lower),
            RuleTrigger::Contains(keywords) => keywords.iter().any(|k| lower.contains(k.as_str())),
        })?;

        let step = match &rule.target {
            RuleTarget::Custom(step) => step.clone(),
            RuleTarget::Step(index) => self.catalog.lookup(rule.flow).ok()?.steps.get(*index)?.clone(),
        };
        Some(PredictionResult::from_step(rule.flow, step))
    }

    /// The three dishes offered for a food type at a meal.
    pub fn food_menu_items(&self, food_type: FoodType, meal_type: MealType) -> Vec<MenuCard> {
        self.catalog.menu(food_type, meal_type).to_vec()
    }

    /// Like `food_menu_items`, keyed by wire names. An unknown meal yields no
    /// dishes; an unknown food type falls back to vegetarian.
    pub fn food_menu_items_by_name(&self, food_type: &str, meal_type: &str) -> Vec<MenuCard> {
        let Ok(meal) = meal_type.parse::<MealType>() else {
            return Vec::new();
        };
        let food = food_type.parse::<FoodType>().unwrap_or(FoodType::Veg);
        self.food_menu_items(food, meal)
    }

    /// The food-service menu step filled with the dishes for `food_type` and `meal_type`.
    pub fn menu_step(&self, food_type: FoodType, meal_type: Option<MealType>) -> Option<FlowStep> {
        let flow = self.catalog.lookup(FlowId::FoodService).ok()?;
        let cards = meal_type
            .map(|meal| self.food_menu_items(food_type, meal))
            .unwrap_or_default();
        flow.steps.get(2).map(|step| with_menu_cards(step, cards))
    }

    /// The step that follows the completed step `step_index` of `flow`, or
    /// `None` when the flow is complete.
    ///
    /// Food service checks the slot each step collects before moving on;
    /// laundry walks its fixed step list; every other flow ends after its
    /// entry step.
    pub fn next_step(&self, flow: FlowId, step_index: usize, state: &FlowState) -> Option<FlowStep> {
        let next = match flow {
            FlowId::FoodService => self.next_food_step(step_index, state),
            FlowId::LaundryService => self.catalog.lookup(flow).ok()?.steps.get(step_index).cloned(),
            FlowId::GeneralInquiry | FlowId::BreakfastMenu | FlowId::RoomCleaning => None,
        };
        log::debug!(
            "Next step for {} after step {}: {}",
            flow,
            step_index,
            next.as_ref().map_or("<complete>", |s| s.follow_up_question.as_str())
        );
        next
    }

    fn next_food_step(&self, step_index: usize, state: &FlowState) -> Option<FlowStep> {
        let flow = self.catalog.lookup(FlowId::FoodService).ok()?;
        match step_index {
            0 if state.food_type().is_some() => flow.steps.get(1).cloned(),
            1 if state.meal_type().is_some() || state.food_type().is_some() => {
                self.menu_step(state.food_type().unwrap_or(FoodType::Veg), state.meal_type())
            }
            2 if !state.menu().is_empty() => flow.steps.get(3).cloned(),
            3 if !state.quantities().is_empty() => flow.steps.get(4).cloned(),
            _ => None,
        }
    }
}

fn with_menu_cards(step: &FlowStep, cards: Vec<MenuCard>) -> FlowStep {
    let mut step = step.clone();
    for component in &mut step.ui_components {
        if let UiComponent::FoodMenuCards(group) = component {
            group.cards = cards.clone();
        }
    }
    step
}
