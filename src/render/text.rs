use super::{DynamicUiRenderer, RadioStyle};
use crate::ui::UiComponent;
use itertools::Itertools;

/// Formats rendered components as plain text for terminals.
pub struct TextRenderer;

impl TextRenderer {
    /// Formats every component with its index, the way the CLI addresses them.
    pub fn format(renderer: &DynamicUiRenderer) -> String {
        renderer
            .components()
            .iter()
            .enumerate()
            .map(|(index, component)| Self::format_component(renderer, index, component))
            .join("\n")
    }

    fn format_component(renderer: &DynamicUiRenderer, index: usize, component: &UiComponent) -> String {
        let mut out = format!("[{}] {} ({})\n", index, component.title(), component.kind());
        match component {
            UiComponent::ServiceCards(group) => {
                for card in &group.cards {
                    out.push_str(&format!(
                        "    {} {} [{}] - {}\n",
                        card.image, card.title, card.id, card.description
                    ));
                }
            }
            UiComponent::FoodMenuCards(group) => {
                if group.cards.is_empty() {
                    out.push_str("    (no dishes available)\n");
                }
                for card in &group.cards {
                    out.push_str(&format!(
                        "    {} {} [{}] ${} x{} - {}\n",
                        card.image,
                        card.title,
                        card.id,
                        card.price,
                        renderer.count(index, &card.id),
                        card.description
                    ));
                }
            }
            UiComponent::QuantitySelector(group) => {
                for item in &group.items {
                    let price = if item.price > 0 {
                        format!(" (${})", item.price)
                    } else {
                        String::new()
                    };
                    out.push_str(&format!(
                        "    {}{} [{}] x{}\n",
                        item.label,
                        price,
                        item.id,
                        renderer.count(index, &item.id)
                    ));
                }
            }
            UiComponent::RadioGroup(group) => {
                let chosen = renderer.chosen(index);
                match RadioStyle::for_title(&group.title) {
                    RadioStyle::Pills => {
                        let pills = group
                            .options
                            .iter()
                            .map(|o| {
                                if chosen == Some(o.value.as_str()) {
                                    format!("[*{}*]", o.label)
                                } else {
                                    format!("[{}]", o.label)
                                }
                            })
                            .join(" ");
                        out.push_str(&format!("    {}\n", pills));
                    }
                    RadioStyle::List => {
                        for option in &group.options {
                            let mark = if chosen == Some(option.value.as_str()) { "(o)" } else { "( )" };
                            out.push_str(&format!("    {} {} [{}]\n", mark, option.label, option.value));
                        }
                    }
                }
            }
            UiComponent::CheckboxGroup(group) => {
                for option in &group.options {
                    let mark = if renderer.is_checked(index, &option.value) { "[x]" } else { "[ ]" };
                    out.push_str(&format!("    {} {} [{}]\n", mark, option.label, option.value));
                }
            }
            UiComponent::Slider(spec) => {
                let value = renderer.slider_value(index).unwrap_or(spec.default);
                out.push_str(&format!("    {} <-- {} --> {}\n", spec.min, value, spec.max));
            }
            UiComponent::TimePicker(spec) => {
                out.push_str(&format!("    {}\n", spec.default_time));
            }
            UiComponent::DatePicker(spec) => {
                out.push_str(&format!(
                    "    {}\n",
                    spec.default_date.as_deref().unwrap_or("YYYY-MM-DD")
                ));
            }
            UiComponent::ConfirmationCard(spec) => {
                out.push_str(&format!("    {}\n", spec.summary));
                out.push_str(&format!("    Estimated time: {}\n", spec.estimated_time));
                out.push_str(&format!("    Cost: {}\n", spec.cost));
            }
        }
        out
    }
}
