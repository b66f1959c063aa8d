//! The flow catalog: every static table the engine consults.
//!
//! A `Catalog` is built once at startup, either from the built-in tables or
//! from a JSON document / compiled artifact, and then shared read-only
//! (usually as an `Arc<Catalog>`) with the matcher, the engine and sessions.
pub mod artifact;
mod builtin;
pub mod definition;

pub use artifact::*;
pub use definition::*;

use crate::error::CatalogError;
use crate::ui::{MenuCard, UiComponent};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub(crate) flows: Vec<ServiceFlow>,
    pub(crate) rules: Vec<PredictionRule>,
    pub(crate) intents: IntentTables,
    pub(crate) menus: Vec<MenuSection>,
    pub(crate) pricing: Pricing,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        builtin::builtin_catalog()
    }

    /// Assembles and validates a catalog from its parts.
    pub fn new(
        flows: Vec<ServiceFlow>,
        rules: Vec<PredictionRule>,
        intents: IntentTables,
        menus: Vec<MenuSection>,
        pricing: Pricing,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            flows,
            rules,
            intents,
            menus,
            pricing,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a catalog from a JSON document.
    ///
    /// Unknown component kinds or flow ids are rejected here, so a loaded
    /// catalog can only ever describe widgets the renderer knows.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    /// Checks the cross references between tables.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for flow in &self.flows {
            if !seen.insert(flow.id) {
                return Err(CatalogError::DuplicateFlow(flow.id));
            }
        }

        for (rule_index, rule) in self.rules.iter().enumerate() {
            if let RuleTarget::Step(step_index) = rule.target {
                let flow = self.lookup(rule.flow)?;
                if step_index >= flow.steps.len() {
                    return Err(CatalogError::DanglingStepReference {
                        rule_index,
                        flow: rule.flow,
                        step_index,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn lookup(&self, id: FlowId) -> Result<&ServiceFlow, CatalogError> {
        self.flows
            .iter()
            .find(|flow| flow.id == id)
            .ok_or(CatalogError::FlowNotFound(id))
    }

    pub fn flows(&self) -> &[ServiceFlow] {
        &self.flows
    }

    pub fn rules(&self) -> &[PredictionRule] {
        &self.rules
    }

    pub fn intents(&self) -> &IntentTables {
        &self.intents
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Replaces the pricing table, e.g. to turn on the same-day surcharge.
    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// The dishes for a food type and meal, or an empty slice if none are listed.
    pub fn menu(&self, food_type: FoodType, meal_type: MealType) -> &[MenuCard] {
        self.menus
            .iter()
            .find(|s| s.food_type == food_type && s.meal_type == meal_type)
            .map(|s| s.cards.as_slice())
            .unwrap_or(&[])
    }

    /// The unit price of a quantity-selector item offered somewhere in a flow.
    pub fn item_price(&self, flow: FlowId, item_id: &str) -> Option<u32> {
        let flow = self.lookup(flow).ok()?;
        flow.steps
            .iter()
            .flat_map(|step| step.ui_components.iter())
            .filter_map(|component| match component {
                UiComponent::QuantitySelector(group) => Some(group),
                _ => None,
            })
            .flat_map(|group| group.items.iter())
            .find(|item| item.id == item_id)
            .map(|item| item.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn dangling_rule_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.rules.push(PredictionRule {
            trigger: RuleTrigger::Contains(vec!["spa".to_string()]),
            flow: FlowId::RoomCleaning,
            target: RuleTarget::Step(9),
        });
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DanglingStepReference { step_index: 9, .. })
        ));
    }
}
