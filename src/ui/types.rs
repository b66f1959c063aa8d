use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable card in a `service-cards` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: String,
    pub title: String,
    /// Emoji icon shown on the card.
    pub image: String,
    pub description: String,
}

/// A priced dish in a `food-menu-cards` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCard {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    /// Price in whole dollars.
    pub price: u32,
}

/// A countable line in a `quantity-selector`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityItem {
    pub id: String,
    pub label: String,
    /// Unit price in whole dollars, `0` when the item is free.
    pub price: u32,
}

/// An option of a `radio-group` or `checkbox-group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardGroup {
    pub title: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub title: String,
    /// Left empty in catalog definitions; filled from the menu tables when the step is produced.
    pub cards: Vec<MenuCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityGroup {
    pub title: String,
    pub items: Vec<QuantityItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub title: String,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub title: String,
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpec {
    pub title: String,
    /// `HH:MM`
    pub default_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpec {
    pub title: String,
    /// `YYYY-MM-DD`, or `None` to start empty.
    pub default_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationSpec {
    pub title: String,
    pub summary: String,
    pub estimated_time: String,
    pub cost: String,
}

/// Declarative description of one interactive widget.
///
/// This is the contract between the predictive engine, which produces these
/// values, and the renderer, which interprets them. On the wire each variant
/// is an object keyed by its kebab-case kind name:
///
/// ```json
/// { "radio-group": { "title": "Delivery Time", "options": [ ... ] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiComponent {
    ServiceCards(CardGroup),
    FoodMenuCards(MenuGroup),
    QuantitySelector(QuantityGroup),
    RadioGroup(OptionGroup),
    CheckboxGroup(OptionGroup),
    Slider(SliderSpec),
    TimePicker(TimeSpec),
    DatePicker(DateSpec),
    ConfirmationCard(ConfirmationSpec),
}

/// The kind of a `UiComponent`, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    ServiceCards,
    FoodMenuCards,
    QuantitySelector,
    RadioGroup,
    CheckboxGroup,
    Slider,
    TimePicker,
    DatePicker,
    ConfirmationCard,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::ServiceCards,
        ComponentKind::FoodMenuCards,
        ComponentKind::QuantitySelector,
        ComponentKind::RadioGroup,
        ComponentKind::CheckboxGroup,
        ComponentKind::Slider,
        ComponentKind::TimePicker,
        ComponentKind::DatePicker,
        ComponentKind::ConfirmationCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::ServiceCards => "service-cards",
            ComponentKind::FoodMenuCards => "food-menu-cards",
            ComponentKind::QuantitySelector => "quantity-selector",
            ComponentKind::RadioGroup => "radio-group",
            ComponentKind::CheckboxGroup => "checkbox-group",
            ComponentKind::Slider => "slider",
            ComponentKind::TimePicker => "time-picker",
            ComponentKind::DatePicker => "date-picker",
            ComponentKind::ConfirmationCard => "confirmation-card",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UiComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            UiComponent::ServiceCards(_) => ComponentKind::ServiceCards,
            UiComponent::FoodMenuCards(_) => ComponentKind::FoodMenuCards,
            UiComponent::QuantitySelector(_) => ComponentKind::QuantitySelector,
            UiComponent::RadioGroup(_) => ComponentKind::RadioGroup,
            UiComponent::CheckboxGroup(_) => ComponentKind::CheckboxGroup,
            UiComponent::Slider(_) => ComponentKind::Slider,
            UiComponent::TimePicker(_) => ComponentKind::TimePicker,
            UiComponent::DatePicker(_) => ComponentKind::DatePicker,
            UiComponent::ConfirmationCard(_) => ComponentKind::ConfirmationCard,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            UiComponent::ServiceCards(group) => &group.title,
            UiComponent::FoodMenuCards(group) => &group.title,
            UiComponent::QuantitySelector(group) => &group.title,
            UiComponent::RadioGroup(group) | UiComponent::CheckboxGroup(group) => &group.title,
            UiComponent::Slider(spec) => &spec.title,
            UiComponent::TimePicker(spec) => &spec.title,
            UiComponent::DatePicker(spec) => &spec.title,
            UiComponent::ConfirmationCard(spec) => &spec.title,
        }
    }
}

// Small constructors used by the built-in catalog and by tests.

impl ServiceCard {
    pub fn new(id: &str, title: &str, image: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            image: image.to_string(),
            description: description.to_string(),
        }
    }
}

impl MenuCard {
    pub fn new(id: &str, title: &str, image: &str, description: &str, price: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            image: image.to_string(),
            description: description.to_string(),
            price,
        }
    }
}

impl QuantityItem {
    pub fn new(id: &str, label: &str, price: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            price,
        }
    }
}

impl ChoiceOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}
