//! Per-conversation slot state and the step cursor.
use crate::catalog::{FlowId, FoodType, MealType};
use crate::ui::{ChoiceOption, MenuCard, ServiceCard};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names a slot of `FlowState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    FoodType,
    MealType,
    Service,
    Menu,
    Quantities,
    Delivery,
    Turnaround,
    Cleaning,
    Guests,
    Time,
    Date,
}

/// A dish picked from a menu, with how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSelection {
    pub card: MenuCard,
    pub quantity: u32,
}

/// Upper bound on a merged item count.
pub const MAX_ITEM_QUANTITY: u32 = 99;

/// A counted item from a quantity selector, keyed by item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityEntry {
    pub item: String,
    pub quantity: u32,
}

impl QuantityEntry {
    pub fn new(item: &str, quantity: u32) -> Self {
        Self {
            item: item.to_string(),
            quantity,
        }
    }
}

impl fmt::Display for QuantityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.item)
    }
}

/// Food delivery windows offered by the delivery-time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryTime {
    Asap,
    OneHour,
    TwoHours,
    SpecificTime,
}

impl DeliveryTime {
    /// Parses a radio option value. Unknown values mean a specific time.
    pub fn from_value(value: &str) -> Self {
        match value {
            "asap" => DeliveryTime::Asap,
            "1-hour" => DeliveryTime::OneHour,
            "2-hours" => DeliveryTime::TwoHours,
            _ => DeliveryTime::SpecificTime,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            DeliveryTime::Asap => "ASAP delivery",
            DeliveryTime::OneHour => "delivery in 1 hour",
            DeliveryTime::TwoHours => "delivery in 2 hours",
            DeliveryTime::SpecificTime => "specific time delivery",
        }
    }
}

/// Laundry turnaround options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Turnaround {
    SameDay,
    NextDay,
    Standard,
}

impl Turnaround {
    /// Parses a radio option value. Unknown values mean standard turnaround.
    pub fn from_value(value: &str) -> Self {
        match value {
            "same-day" => Turnaround::SameDay,
            "next-day" => Turnaround::NextDay,
            _ => Turnaround::Standard,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Turnaround::SameDay => "same day service",
            Turnaround::NextDay => "next day delivery",
            Turnaround::Standard => "2-3 days standard delivery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Turnaround::SameDay => "Same Day",
            Turnaround::NextDay => "Next Day",
            Turnaround::Standard => "2-3 Days (Standard)",
        }
    }
}

/// The slots collected so far in the active flow.
///
/// This is the only machine-readable record of what the guest chose; the
/// composed input line is derived from it and never read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowState {
    food_type: Option<FoodType>,
    meal_type: Option<MealType>,
    service: Option<ServiceCard>,
    menu: Vec<MenuSelection>,
    quantities: Vec<QuantityEntry>,
    delivery: Option<DeliveryTime>,
    turnaround: Option<Turnaround>,
    cleaning: Vec<ChoiceOption>,
    guests: Option<u32>,
    time: Option<String>,
    date: Option<String>,
    last_updated: Option<Slot>,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn food_type(&self) -> Option<FoodType> {
        self.food_type
    }

    pub fn meal_type(&self) -> Option<MealType> {
        self.meal_type
    }

    pub fn service(&self) -> Option<&ServiceCard> {
        self.service.as_ref()
    }

    pub fn menu(&self) -> &[MenuSelection] {
        &self.menu
    }

    pub fn quantities(&self) -> &[QuantityEntry] {
        &self.quantities
    }

    pub fn delivery(&self) -> Option<DeliveryTime> {
        self.delivery
    }

    pub fn turnaround(&self) -> Option<Turnaround> {
        self.turnaround
    }

    pub fn cleaning(&self) -> &[ChoiceOption] {
        &self.cleaning
    }

    pub fn guests(&self) -> Option<u32> {
        self.guests
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// The slot written by the most recent update.
    pub fn last_updated(&self) -> Option<Slot> {
        self.last_updated
    }

    pub fn is_set(&self, slot: Slot) -> bool {
        match slot {
            Slot::FoodType => self.food_type.is_some(),
            Slot::MealType => self.meal_type.is_some(),
            Slot::Service => self.service.is_some(),
            Slot::Menu => !self.menu.is_empty(),
            Slot::Quantities => !self.quantities.is_empty(),
            Slot::Delivery => self.delivery.is_some(),
            Slot::Turnaround => self.turnaround.is_some(),
            Slot::Cleaning => !self.cleaning.is_empty(),
            Slot::Guests => self.guests.is_some(),
            Slot::Time => self.time.is_some(),
            Slot::Date => self.date.is_some(),
        }
    }

    pub fn set_food_type(&mut self, food_type: FoodType) {
        self.food_type = Some(food_type);
        self.last_updated = Some(Slot::FoodType);
    }

    pub fn set_meal_type(&mut self, meal_type: MealType) {
        self.meal_type = Some(meal_type);
        self.last_updated = Some(Slot::MealType);
    }

    pub fn set_service(&mut self, card: ServiceCard) {
        self.service = Some(card);
        self.last_updated = Some(Slot::Service);
    }

    /// Replaces the menu selection; entries with a zero quantity are dropped.
    pub fn set_menu(&mut self, selections: Vec<MenuSelection>) {
        self.menu = selections.into_iter().filter(|s| s.quantity > 0).collect();
        self.last_updated = Some(Slot::Menu);
    }

    /// Quantity selections aggregate: a new entry for an item already present
    /// replaces its count, other items are appended in order. Counts are
    /// capped at `MAX_ITEM_QUANTITY`.
    pub fn merge_quantities(&mut self, entries: Vec<QuantityEntry>) {
        for mut entry in entries {
            entry.quantity = entry.quantity.min(MAX_ITEM_QUANTITY);
            match self.quantities.iter_mut().find(|q| q.item == entry.item) {
                Some(existing) => existing.quantity = entry.quantity,
                None => self.quantities.push(entry),
            }
        }
        self.quantities.retain(|q| q.quantity > 0);
        self.last_updated = Some(Slot::Quantities);
    }

    pub fn set_delivery(&mut self, delivery: DeliveryTime) {
        self.delivery = Some(delivery);
        self.last_updated = Some(Slot::Delivery);
    }

    pub fn set_turnaround(&mut self, turnaround: Turnaround) {
        self.turnaround = Some(turnaround);
        self.last_updated = Some(Slot::Turnaround);
    }

    /// Adds or removes a checked option, keeping the order options were checked in.
    pub fn toggle_cleaning(&mut self, option: ChoiceOption, checked: bool) {
        self.cleaning.retain(|o| o.value != option.value);
        if checked {
            self.cleaning.push(option);
        }
        self.last_updated = Some(Slot::Cleaning);
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.guests = Some(guests);
        self.last_updated = Some(Slot::Guests);
    }

    pub fn set_time(&mut self, time: &str) {
        self.time = Some(time.to_string());
        self.last_updated = Some(Slot::Time);
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = Some(date.to_string());
        self.last_updated = Some(Slot::Date);
    }

    /// `2 shirts, 1 pants`
    pub fn quantities_summary(&self) -> String {
        self.quantities.iter().join(", ")
    }
}

/// Where the conversation is inside the active flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub flow: FlowId,
    pub step: usize,
}

impl Cursor {
    pub fn start(flow: FlowId) -> Self {
        Self { flow, step: 0 }
    }
}
