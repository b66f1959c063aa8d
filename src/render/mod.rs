//! Interprets `UiComponent` descriptors as interactive widgets.
//!
//! The renderer owns the transient widget state (counters, the highlighted
//! pill, checked boxes) and turns raw interactions into typed `Selection`s
//! for the chat session. It never decides what happens next.
pub mod text;

pub use text::TextRenderer;

use crate::state::{MenuSelection, QuantityEntry};
use crate::ui::{ChoiceOption, ComponentKind, ServiceCard, UiComponent};
use ahash::AHashMap;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Title that switches a radio group to the pill layout.
pub const TIME_SLOT_TITLE: &str = "Select Time Slot";

/// A raw user gesture addressed to the component at index `component`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interaction {
    PickCard { component: usize, card_id: String },
    Increment { component: usize, item_id: String },
    Decrement { component: usize, item_id: String },
    /// The "Add" button of a menu or quantity widget.
    Add { component: usize },
    Choose { component: usize, value: String },
    Toggle { component: usize, value: String, checked: bool },
    Slide { component: usize, value: i64 },
    SetTime { component: usize, value: String },
    SetDate { component: usize, value: String },
    Confirm { component: usize },
}

impl Interaction {
    pub fn component(&self) -> usize {
        match self {
            Interaction::PickCard { component, .. }
            | Interaction::Increment { component, .. }
            | Interaction::Decrement { component, .. }
            | Interaction::Add { component }
            | Interaction::Choose { component, .. }
            | Interaction::Toggle { component, .. }
            | Interaction::Slide { component, .. }
            | Interaction::SetTime { component, .. }
            | Interaction::SetDate { component, .. }
            | Interaction::Confirm { component } => *component,
        }
    }
}

/// A typed selection produced by a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    ServiceCard(ServiceCard),
    MenuItems(Vec<MenuSelection>),
    Quantities(Vec<QuantityEntry>),
    Radio(String),
    Checkbox { option: ChoiceOption, checked: bool },
    Slider(String),
    Time(String),
    Date(String),
    Confirmed,
}

impl Selection {
    /// The kind of widget that emits this selection.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Selection::ServiceCard(_) => ComponentKind::ServiceCards,
            Selection::MenuItems(_) => ComponentKind::FoodMenuCards,
            Selection::Quantities(_) => ComponentKind::QuantitySelector,
            Selection::Radio(_) => ComponentKind::RadioGroup,
            Selection::Checkbox { .. } => ComponentKind::CheckboxGroup,
            Selection::Slider(_) => ComponentKind::Slider,
            Selection::Time(_) => ComponentKind::TimePicker,
            Selection::Date(_) => ComponentKind::DatePicker,
            Selection::Confirmed => ComponentKind::ConfirmationCard,
        }
    }
}

/// How a radio group is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioStyle {
    Pills,
    List,
}

impl RadioStyle {
    pub fn for_title(title: &str) -> Self {
        if title == TIME_SLOT_TITLE {
            RadioStyle::Pills
        } else {
            RadioStyle::List
        }
    }
}

#[derive(Debug, Default)]
pub struct DynamicUiRenderer {
    components: Vec<UiComponent>,
    counts: AHashMap<(usize, String), u32>,
    chosen: AHashMap<usize, String>,
    checked: AHashMap<usize, Vec<String>>,
    sliders: AHashMap<usize, i64>,
}

impl DynamicUiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &[UiComponent] {
        &self.components
    }

    /// Replaces the rendered components and forgets all widget state.
    pub fn set_components(&mut self, components: Vec<UiComponent>) {
        self.components = components;
        self.counts.clear();
        self.chosen.clear();
        self.checked.clear();
        self.sliders.clear();
    }

    pub fn clear(&mut self) {
        self.set_components(Vec::new());
    }

    /// Index of the first component of the given kind.
    pub fn position_of(&self, kind: ComponentKind) -> Option<usize> {
        self.components.iter().position(|c| c.kind() == kind)
    }

    /// Current counter value of an item in a menu or quantity widget.
    pub fn count(&self, component: usize, item_id: &str) -> u32 {
        self.counts
            .get(&(component, item_id.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// The raw per-item counters of a quantity selector, zeros included.
    pub fn quantity_map(&self, component: usize) -> AHashMap<String, u32> {
        match self.components.get(component) {
            Some(UiComponent::QuantitySelector(group)) => group
                .items
                .iter()
                .map(|item| (item.id.clone(), self.count(component, &item.id)))
                .collect(),
            _ => AHashMap::new(),
        }
    }

    /// The highlighted option of a radio group, if any.
    pub fn chosen(&self, component: usize) -> Option<&str> {
        self.chosen.get(&component).map(String::as_str)
    }

    pub fn is_checked(&self, component: usize, value: &str) -> bool {
        self.checked
            .get(&component)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// The slider position, starting at its default.
    pub fn slider_value(&self, component: usize) -> Option<i64> {
        match self.components.get(component) {
            Some(UiComponent::Slider(spec)) => {
                Some(self.sliders.get(&component).copied().unwrap_or(spec.default))
            }
            _ => None,
        }
    }

    /// Applies an interaction to its widget. Gestures that do not fit the
    /// addressed widget are dropped.
    pub fn handle(&mut self, interaction: Interaction) -> Option<Selection> {
        let index = interaction.component();
        let Some(component) = self.components.get(index).cloned() else {
            log::warn!("Interaction for missing component {}", index);
            return None;
        };

        match &component {
            UiComponent::ServiceCards(group) => match interaction {
                Interaction::PickCard { card_id, .. } => group
                    .cards
                    .iter()
                    .find(|card| card.id == card_id)
                    .cloned()
                    .map(Selection::ServiceCard),
                _ => None,
            },
            UiComponent::FoodMenuCards(group) => match interaction {
                Interaction::Increment { item_id, .. } | Interaction::Decrement { item_id, .. }
                    if !group.cards.iter().any(|card| card.id == item_id) =>
                {
                    None
                }
                Interaction::Increment { item_id, .. } => {
                    self.bump(index, item_id, 1);
                    None
                }
                Interaction::Decrement { item_id, .. } => {
                    self.bump(index, item_id, -1);
                    None
                }
                Interaction::Add { .. } => {
                    let picked: Vec<MenuSelection> = group
                        .cards
                        .iter()
                        .filter_map(|card| {
                            let quantity = self.count(index, &card.id);
                            (quantity > 0).then(|| MenuSelection {
                                card: card.clone(),
                                quantity,
                            })
                        })
                        .collect();
                    (!picked.is_empty()).then_some(Selection::MenuItems(picked))
                }
                _ => None,
            },
            UiComponent::QuantitySelector(group) => match interaction {
                Interaction::Increment { item_id, .. } | Interaction::Decrement { item_id, .. }
                    if !group.items.iter().any(|item| item.id == item_id) =>
                {
                    None
                }
                Interaction::Increment { item_id, .. } => {
                    self.bump(index, item_id, 1);
                    None
                }
                Interaction::Decrement { item_id, .. } => {
                    self.bump(index, item_id, -1);
                    None
                }
                Interaction::Add { .. } => {
                    let entries: Vec<QuantityEntry> = group
                        .items
                        .iter()
                        .map(|item| QuantityEntry::new(&item.id, self.count(index, &item.id)))
                        .filter(|entry| entry.quantity > 0)
                        .collect();
                    (!entries.is_empty()).then_some(Selection::Quantities(entries))
                }
                _ => None,
            },
            UiComponent::RadioGroup(group) => match interaction {
                Interaction::Choose { value, .. }
                    if group.options.iter().any(|option| option.value == value) =>
                {
                    self.chosen.insert(index, value.clone());
                    Some(Selection::Radio(value))
                }
                _ => None,
            },
            UiComponent::CheckboxGroup(group) => match interaction {
                Interaction::Toggle { value, checked, .. } => {
                    let option = group.options.iter().find(|o| o.value == value)?.clone();
                    let values = self.checked.entry(index).or_default();
                    values.retain(|v| *v != value);
                    if checked {
                        values.push(value);
                    }
                    Some(Selection::Checkbox { option, checked })
                }
                _ => None,
            },
            UiComponent::Slider(spec) => match interaction {
                Interaction::Slide { value, .. } => {
                    let value = value.clamp(spec.min, spec.max);
                    self.sliders.insert(index, value);
                    Some(Selection::Slider(value.to_string()))
                }
                _ => None,
            },
            UiComponent::TimePicker(_) => match interaction {
                Interaction::SetTime { value, .. } => {
                    match NaiveTime::parse_from_str(&value, "%H:%M") {
                        Ok(_) => Some(Selection::Time(value)),
                        Err(e) => {
                            log::warn!("Ignoring time '{}': {}", value, e);
                            None
                        }
                    }
                }
                _ => None,
            },
            UiComponent::DatePicker(_) => match interaction {
                Interaction::SetDate { value, .. } => {
                    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                        Ok(_) => Some(Selection::Date(value)),
                        Err(e) => {
                            log::warn!("Ignoring date '{}': {}", value, e);
                            None
                        }
                    }
                }
                _ => None,
            },
            UiComponent::ConfirmationCard(_) => match interaction {
                Interaction::Confirm { .. } => Some(Selection::Confirmed),
                _ => None,
            },
        }
    }

    /// Counters never drop below zero.
    fn bump(&mut self, component: usize, item_id: String, delta: i32) {
        let count = self.counts.entry((component, item_id)).or_insert(0);
        *count = count.saturating_add_signed(delta);
    }
}
