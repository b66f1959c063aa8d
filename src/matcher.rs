//! Keyword intent matching for typed or transcribed guest requests.
use crate::catalog::{Catalog, FlowId, FoodType, KeywordGroup, MealType, Timing};
use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A service request recognized in free text, with whatever slots could be extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceIntent {
    pub service: FlowId,
    /// Fraction of the service's keywords found in the text, in `(0, 1]`.
    pub confidence: f32,
    pub food_type: Option<FoodType>,
    pub meal_type: Option<MealType>,
    pub items: Vec<String>,
    pub quantity: Option<u32>,
    pub timing: Option<Timing>,
}

impl VoiceIntent {
    /// Food type and meal type, in that order, as their wire names.
    pub fn preferences(&self) -> Vec<&'static str> {
        self.food_type
            .map(|f| f.as_str())
            .into_iter()
            .chain(self.meal_type.map(|m| m.as_str()))
            .collect()
    }
}

/// Maps free text to a service flow using the catalog's keyword tables.
///
/// Matching is pure: the same text always yields the same intent.
pub struct IntentMatcher {
    catalog: Arc<Catalog>,
    digits: Regex,
}

impl IntentMatcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            digits: Regex::new(r"\b(\d+)\b").expect("digit pattern is valid"),
        }
    }

    pub fn match_intent(&self, text: &str) -> Option<VoiceIntent> {
        let lower = text.trim().to_lowercase();
        let tables = self.catalog.intents();

        let mut best: Option<(FlowId, f32)> = None;
        for group in &tables.services {
            if group.keywords.is_empty() {
                continue;
            }
            let hits = group
                .keywords
                .iter()
                .filter(|keyword| lower.contains(keyword.as_str()))
                .count();
            if hits == 0 {
                continue;
            }
            let confidence = hits as f32 / group.keywords.len() as f32;
            // Strictly greater: on a tie the earlier service keeps the match.
            if best.is_none_or(|(_, current)| confidence > current) {
                best = Some((group.key, confidence));
            }
        }

        let (service, confidence) = best?;
        log::debug!("Matched '{}' to {} ({:.2})", lower, service, confidence);

        let (food_type, meal_type) = if service == FlowId::FoodService {
            (self.food_type(&lower), self.meal_type(&lower))
        } else {
            (None, None)
        };

        Some(VoiceIntent {
            service,
            confidence,
            food_type,
            meal_type,
            items: self.extract_items(&lower, service),
            quantity: self.extract_quantity(&lower),
            timing: self.extract_timing(&lower),
        })
    }

    /// The first food type whose keywords occur in the text.
    pub fn food_type(&self, text: &str) -> Option<FoodType> {
        first_containing(&self.catalog.intents().food_types, &text.to_lowercase())
    }

    /// The first meal type whose keywords occur in the text.
    pub fn meal_type(&self, text: &str) -> Option<MealType> {
        first_containing(&self.catalog.intents().meal_types, &text.to_lowercase())
    }

    fn extract_items(&self, text: &str, service: FlowId) -> Vec<String> {
        if service != FlowId::LaundryService {
            return Vec::new();
        }
        self.catalog
            .intents()
            .garments
            .iter()
            .filter(|garment| text.contains(garment.as_str()))
            .cloned()
            .collect()
    }

    /// Number words are checked before digits; the first hit wins.
    fn extract_quantity(&self, text: &str) -> Option<u32> {
        let tokens: Vec<&str> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let from_words = self
            .catalog
            .intents()
            .number_words
            .iter()
            .position(|word| tokens.contains(&word.as_str()))
            .map(|index| index as u32 + 1);
        if from_words.is_some() {
            return from_words;
        }

        self.digits
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|quantity| *quantity > 0)
    }

    fn extract_timing(&self, text: &str) -> Option<Timing> {
        self.catalog
            .intents()
            .timings
            .iter()
            .find(|group| group.keywords.iter().any(|kw| contains_phrase(text, kw)))
            .map(|group| group.key)
    }

    /// Renders an intent as a short summary line, e.g.
    /// `laundry service - 3 shirts - tomorrow`.
    pub fn format_voice_input(&self, intent: &VoiceIntent) -> String {
        let mut formatted = intent.service.as_str().replacen('-', " ", 1);

        let preferences = intent.preferences();
        if !preferences.is_empty() {
            formatted.push_str(&format!(" for {}", preferences.join(" ")));
        }

        if !intent.items.is_empty() {
            let items = intent.items.iter().join(", ");
            match intent.quantity {
                Some(quantity) if quantity > 1 => {
                    formatted.push_str(&format!(" - {} {}", quantity, items))
                }
                _ => formatted.push_str(&format!(" - {}", items)),
            }
        }

        if let Some(timing) = intent.timing {
            let timing_text = match timing {
                Timing::Asap => "ASAP",
                Timing::SameDay => "today",
                Timing::NextDay => "tomorrow",
                Timing::SpecificTime => timing.as_str(),
            };
            formatted.push_str(&format!(" - {}", timing_text));
        }

        formatted
    }
}

fn first_containing<K: Copy>(groups: &[KeywordGroup<K>], text: &str) -> Option<K> {
    groups
        .iter()
        .find(|group| group.keywords.iter().any(|kw| text.contains(kw.as_str())))
        .map(|group| group.key)
}

/// True if `phrase` occurs in `text` delimited by non-alphanumeric characters.
fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    text.match_indices(phrase).any(|(start, _)| {
        let end = start + phrase.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
