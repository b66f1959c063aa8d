use crate::ui::UiComponent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a conversational flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowId {
    /// The ambiguous "I need..." opener. It has no steps of its own.
    GeneralInquiry,
    FoodService,
    LaundryService,
    BreakfastMenu,
    RoomCleaning,
}

impl FlowId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowId::GeneralInquiry => "general-inquiry",
            FlowId::FoodService => "food-service",
            FlowId::LaundryService => "laundry-service",
            FlowId::BreakfastMenu => "breakfast-menu",
            FlowId::RoomCleaning => "room-cleaning",
        }
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general-inquiry" => Ok(FlowId::GeneralInquiry),
            "food-service" => Ok(FlowId::FoodService),
            "laundry-service" => Ok(FlowId::LaundryService),
            "breakfast-menu" => Ok(FlowId::BreakfastMenu),
            "room-cleaning" => Ok(FlowId::RoomCleaning),
            other => Err(format!("unknown flow '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodType {
    Veg,
    NonVeg,
}

impl FoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Veg => "veg",
            FoodType::NonVeg => "non-veg",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FoodType::Veg => "Vegetarian",
            FoodType::NonVeg => "Non-Vegetarian",
        }
    }
}

impl FromStr for FoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(FoodType::Veg),
            "non-veg" => Ok(FoodType::NonVeg),
            other => Err(format!("unknown food type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snacks" => Ok(MealType::Snacks),
            other => Err(format!("unknown meal type '{}'", other)),
        }
    }
}

/// When the guest wants a request fulfilled, as extracted from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timing {
    Asap,
    SameDay,
    NextDay,
    SpecificTime,
}

impl Timing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timing::Asap => "asap",
            Timing::SameDay => "same-day",
            Timing::NextDay => "next-day",
            Timing::SpecificTime => "specific-time",
        }
    }
}

/// One step of a flow: the question asked, a hint, and the widgets to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStep {
    pub follow_up_question: String,
    pub predictive_text: String,
    pub ui_components: Vec<UiComponent>,
}

/// A named, ordered sequence of conversational steps for one kind of request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFlow {
    pub id: FlowId,
    pub triggers: Vec<String>,
    pub steps: Vec<FlowStep>,
}

/// A table entry mapping a key to the phrases that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup<K> {
    pub key: K,
    pub keywords: Vec<String>,
}

/// Keyword tables used by the intent matcher. Iteration order is priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentTables {
    pub services: Vec<KeywordGroup<FlowId>>,
    pub food_types: Vec<KeywordGroup<FoodType>>,
    pub meal_types: Vec<KeywordGroup<MealType>>,
    pub timings: Vec<KeywordGroup<Timing>>,
    /// Laundry garments recognized as items.
    pub garments: Vec<String>,
    /// Number words; the word at index `i` means `i + 1`.
    pub number_words: Vec<String>,
}

/// How a prediction rule recognizes its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleTrigger {
    /// The whole (lower-cased, trimmed) input equals one of the phrases.
    Exact(Vec<String>),
    /// The input contains one of the keywords.
    Contains(Vec<String>),
}

/// What a prediction rule surfaces when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleTarget {
    /// A step of the rule's flow, by index.
    Step(usize),
    /// A step that exists only as an entry point, outside the flow's step list.
    Custom(FlowStep),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRule {
    pub trigger: RuleTrigger,
    pub flow: FlowId,
    pub target: RuleTarget,
}

/// The dishes offered for one food type at one meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub food_type: FoodType,
    pub meal_type: MealType,
    pub cards: Vec<crate::ui::MenuCard>,
}

/// A flat estimate shown on the confirmation card before the booking is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub estimated_time: String,
    pub cost: u32,
}

/// Prices and defaults used when a booking is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    /// Used for a food order without a menu selection.
    pub default_item_price: u32,
    /// Used for a garment missing from the laundry price list.
    pub default_garment_price: u32,
    /// Flat cost of requests that have no itemized pricing.
    pub default_service_cost: u32,
    pub same_day_surcharge: u32,
    /// The surcharge is advertised on the turnaround option; it is only
    /// added to the computed cost when this is set.
    pub apply_same_day_surcharge: bool,
    pub food_quote: Quote,
    pub service_quote: Quote,
}
