//! The catalog shipped with the crate: four hotel service flows, the
//! predictive rules that enter them, keyword tables and menus.
use super::Catalog;
use super::definition::*;
use crate::ui::*;

pub(super) fn builtin_catalog() -> Catalog {
    Catalog {
        flows: vec![
            food_service(),
            laundry_service(),
            breakfast_menu(),
            room_cleaning(),
        ],
        rules: prediction_rules(),
        intents: intent_tables(),
        menus: menus(),
        pricing: Pricing {
            default_item_price: 15,
            default_garment_price: 5,
            default_service_cost: 25,
            same_day_surcharge: 10,
            apply_same_day_surcharge: false,
            food_quote: Quote {
                estimated_time: "30-45 minutes".to_string(),
                cost: 18,
            },
            service_quote: Quote {
                estimated_time: "2-3 hours".to_string(),
                cost: 25,
            },
        },
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn step(question: &str, hint: &str, components: Vec<UiComponent>) -> FlowStep {
    FlowStep {
        follow_up_question: question.to_string(),
        predictive_text: hint.to_string(),
        ui_components: components,
    }
}

fn cards(title: &str, cards: Vec<ServiceCard>) -> UiComponent {
    UiComponent::ServiceCards(CardGroup {
        title: title.to_string(),
        cards,
    })
}

fn options(title: &str, options: &[(&str, &str)]) -> OptionGroup {
    OptionGroup {
        title: title.to_string(),
        options: options
            .iter()
            .map(|(value, label)| ChoiceOption::new(value, label))
            .collect(),
    }
}

fn quantities(title: &str, items: Vec<QuantityItem>) -> UiComponent {
    UiComponent::QuantitySelector(QuantityGroup {
        title: title.to_string(),
        items,
    })
}

fn food_type_cards() -> UiComponent {
    cards(
        "Food Type",
        vec![
            ServiceCard::new("veg", "Vegetarian", "🥗", "Plant-based dishes and meals"),
            ServiceCard::new("non-veg", "Non-Vegetarian", "🍖", "Meat, fish, and poultry dishes"),
        ],
    )
}

fn meal_type_cards() -> UiComponent {
    cards(
        "Meal Type",
        vec![
            ServiceCard::new("breakfast", "Breakfast", "🍳", "Morning meals and beverages"),
            ServiceCard::new("lunch", "Lunch", "🍽️", "Midday meals and dishes"),
            ServiceCard::new("dinner", "Dinner", "🍷", "Evening meals and fine dining"),
            ServiceCard::new("snacks", "Snacks", "🍿", "Light bites and refreshments"),
        ],
    )
}

fn laundry_cards(title: &str) -> UiComponent {
    cards(
        title,
        vec![
            ServiceCard::new("wash-fold", "Wash & Fold", "👕", "Regular washing and folding"),
            ServiceCard::new("dry-clean", "Dry Cleaning", "🧥", "Professional dry cleaning"),
            ServiceCard::new("pressing", "Pressing Only", "👔", "Iron and press clothes"),
        ],
    )
}

fn food_service() -> ServiceFlow {
    ServiceFlow {
        id: FlowId::FoodService,
        triggers: words(&["food", "eat", "hungry", "order food", "meal", "restaurant", "dining"]),
        steps: vec![
            step(
                "I need food service...what type of cuisine do you prefer?",
                "e.g., vegetarian, non-vegetarian, specific dietary needs",
                vec![food_type_cards()],
            ),
            step(
                "I need food service...what meal are you looking for?",
                "e.g., breakfast, lunch, dinner, snacks",
                vec![meal_type_cards()],
            ),
            step(
                "What would you like to order?",
                "Select from our menu items",
                vec![UiComponent::FoodMenuCards(MenuGroup {
                    title: "Menu Items".to_string(),
                    cards: Vec::new(),
                })],
            ),
            step(
                "How many portions would you like?",
                "Select quantity and any add-ons",
                vec![quantities(
                    "Quantity & Add-ons",
                    vec![
                        QuantityItem::new("portions", "Portions", 0),
                        QuantityItem::new("drinks", "Beverages", 3),
                        QuantityItem::new("desserts", "Desserts", 5),
                    ],
                )],
            ),
            step(
                "When would you like it delivered?",
                "Choose your preferred delivery time",
                vec![UiComponent::RadioGroup(options(
                    "Delivery Time",
                    &[
                        ("asap", "ASAP (30-45 minutes)"),
                        ("1-hour", "In 1 hour"),
                        ("2-hours", "In 2 hours"),
                        ("specific-time", "Specific time"),
                    ],
                ))],
            ),
        ],
    }
}

fn laundry_service() -> ServiceFlow {
    ServiceFlow {
        id: FlowId::LaundryService,
        triggers: words(&["laundry", "pressing", "dry clean", "wash clothes", "clothes"]),
        steps: vec![
            step(
                "When do you need it back?",
                "e.g., same day, next day, standard delivery",
                vec![UiComponent::RadioGroup(options(
                    "Turnaround Time",
                    &[
                        ("same-day", "Same Day (+$10)"),
                        ("next-day", "Next Day"),
                        ("2-3-days", "2-3 Days (Standard)"),
                    ],
                ))],
            ),
            step(
                "How many items do you have?",
                "Select quantities for each item type",
                vec![quantities(
                    "Number of Items",
                    vec![
                        QuantityItem::new("shirts", "Shirts", 5),
                        QuantityItem::new("pants", "Pants", 7),
                        QuantityItem::new("dresses", "Dresses", 12),
                        QuantityItem::new("suits", "Suits", 20),
                    ],
                )],
            ),
        ],
    }
}

fn breakfast_menu() -> ServiceFlow {
    ServiceFlow {
        id: FlowId::BreakfastMenu,
        triggers: words(&["breakfast", "morning food", "what's for breakfast"]),
        steps: vec![
            step(
                "Breakfast—what type would you prefer?",
                "e.g., continental, american, healthy options",
                vec![cards(
                    "Breakfast Options",
                    vec![
                        ServiceCard::new("continental", "Continental Breakfast", "🥐", "Pastries, fruits, coffee"),
                        ServiceCard::new("american", "American Breakfast", "🍳", "Eggs, bacon, toast"),
                        ServiceCard::new("healthy", "Healthy Options", "🥗", "Yogurt, granola, fresh fruits"),
                    ],
                )],
            ),
            step(
                "How many people?",
                "Select number of guests",
                vec![UiComponent::Slider(SliderSpec {
                    title: "Number of People".to_string(),
                    min: 1,
                    max: 6,
                    default: 2,
                })],
            ),
            step(
                "What time would you like it delivered?",
                "e.g., 8:00 AM, 9:30 AM",
                vec![UiComponent::TimePicker(TimeSpec {
                    title: "Delivery Time".to_string(),
                    default_time: "08:00".to_string(),
                })],
            ),
        ],
    }
}

fn room_cleaning() -> ServiceFlow {
    ServiceFlow {
        id: FlowId::RoomCleaning,
        triggers: words(&["clean", "housekeeping", "room service", "tidy"]),
        steps: vec![
            step(
                "Room cleaning—what services do you need?",
                "e.g., make beds, clean bathroom, vacuum",
                vec![UiComponent::CheckboxGroup(options(
                    "Cleaning Services",
                    &[
                        ("beds", "Make beds and change linens"),
                        ("bathroom", "Clean bathroom"),
                        ("vacuum", "Vacuum carpets"),
                        ("dust", "Dust furniture"),
                        ("trash", "Empty trash bins"),
                    ],
                ))],
            ),
            step(
                "When would you like your room cleaned?",
                "e.g., now, this afternoon, tomorrow morning",
                vec![UiComponent::TimePicker(TimeSpec {
                    title: "Preferred Cleaning Time".to_string(),
                    default_time: "14:00".to_string(),
                })],
            ),
        ],
    }
}

fn prediction_rules() -> Vec<PredictionRule> {
    vec![
        PredictionRule {
            trigger: RuleTrigger::Exact(words(&["i need", "i want", "need"])),
            flow: FlowId::GeneralInquiry,
            target: RuleTarget::Custom(step(
                "I need... What service are you looking for?",
                "e.g., laundry, food service, room cleaning",
                vec![cards(
                    "Popular Services",
                    vec![
                        ServiceCard::new("laundry", "Laundry Service", "👕", "Wash, fold, and dry cleaning"),
                        ServiceCard::new("food", "Food Service", "🍽️", "Order meals and beverages"),
                        ServiceCard::new("room-service", "Room Service", "🛎️", "Room cleaning and maintenance"),
                        ServiceCard::new("concierge", "Concierge", "🗝️", "General assistance and information"),
                    ],
                )],
            )),
        },
        // "veg" also covers vegetarian, non-veg and non-vegetarian.
        PredictionRule {
            trigger: RuleTrigger::Contains(words(&["vegetarian", "veg", "non-vegetarian", "non-veg"])),
            flow: FlowId::FoodService,
            target: RuleTarget::Step(1),
        },
        PredictionRule {
            trigger: RuleTrigger::Contains(words(&["breakfast", "lunch", "dinner", "snacks"])),
            flow: FlowId::FoodService,
            target: RuleTarget::Step(0),
        },
        PredictionRule {
            trigger: RuleTrigger::Contains(words(&["shirts", "clothes", "my clothes"])),
            flow: FlowId::LaundryService,
            target: RuleTarget::Custom(step(
                "You need your clothes... What service would you like?",
                "e.g., wash & press, dry clean, express delivery",
                vec![laundry_cards("Clothing Services")],
            )),
        },
        PredictionRule {
            trigger: RuleTrigger::Contains(words(&["food", "eat", "hungry", "meal", "restaurant", "dining"])),
            flow: FlowId::FoodService,
            target: RuleTarget::Step(0),
        },
        PredictionRule {
            trigger: RuleTrigger::Contains(words(&["laundry", "pressing", "dry clean", "wash clothes"])),
            flow: FlowId::LaundryService,
            target: RuleTarget::Custom(step(
                "Laundry—what assistance do you need with your clothes?",
                "e.g., wash & fold, stain removal, urgent delivery",
                vec![laundry_cards("Laundry Services")],
            )),
        },
        PredictionRule {
            trigger: RuleTrigger::Contains(words(&["clean", "housekeeping", "room service", "tidy"])),
            flow: FlowId::RoomCleaning,
            target: RuleTarget::Step(0),
        },
    ]
}

fn intent_tables() -> IntentTables {
    IntentTables {
        services: vec![
            KeywordGroup {
                key: FlowId::FoodService,
                keywords: words(&[
                    "food", "eat", "hungry", "meal", "order", "restaurant", "dining", "breakfast", "lunch",
                    "dinner", "snacks",
                ]),
            },
            KeywordGroup {
                key: FlowId::LaundryService,
                keywords: words(&[
                    "laundry", "wash", "clean", "dry clean", "pressing", "clothes", "shirts", "pants", "suits",
                    "dresses",
                ]),
            },
            KeywordGroup {
                key: FlowId::RoomCleaning,
                keywords: words(&["clean room", "housekeeping", "room service", "tidy", "vacuum", "dust", "bathroom"]),
            },
        ],
        // Non-veg is checked first: every non-veg phrase contains "veg".
        food_types: vec![
            KeywordGroup {
                key: FoodType::NonVeg,
                keywords: words(&["non-veg", "non vegetarian", "non-vegetarian", "meat", "chicken", "beef", "fish"]),
            },
            KeywordGroup {
                key: FoodType::Veg,
                keywords: words(&["veg", "vegetarian", "veggie", "plant based"]),
            },
        ],
        meal_types: vec![
            KeywordGroup {
                key: MealType::Breakfast,
                keywords: words(&["breakfast", "morning meal", "morning food"]),
            },
            KeywordGroup {
                key: MealType::Lunch,
                keywords: words(&["lunch", "midday meal", "afternoon meal"]),
            },
            KeywordGroup {
                key: MealType::Dinner,
                keywords: words(&["dinner", "evening meal", "night food"]),
            },
            KeywordGroup {
                key: MealType::Snacks,
                keywords: words(&["snacks", "snack", "light bite", "appetizer"]),
            },
        ],
        timings: vec![
            KeywordGroup {
                key: Timing::Asap,
                keywords: words(&["asap", "as soon as possible", "immediately", "right now", "urgent"]),
            },
            KeywordGroup {
                key: Timing::SameDay,
                keywords: words(&["today", "same day", "this day"]),
            },
            KeywordGroup {
                key: Timing::NextDay,
                keywords: words(&["tomorrow", "next day", "by tomorrow"]),
            },
            KeywordGroup {
                key: Timing::SpecificTime,
                keywords: words(&["at", "by", "in", "hour", "hours", "minutes"]),
            },
        ],
        garments: words(&["shirts", "pants", "suits", "dresses"]),
        number_words: words(&["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"]),
    }
}

fn section(food_type: FoodType, meal_type: MealType, cards: Vec<MenuCard>) -> MenuSection {
    MenuSection {
        food_type,
        meal_type,
        cards,
    }
}

fn menus() -> Vec<MenuSection> {
    use FoodType::*;
    use MealType::*;

    vec![
        section(Veg, Breakfast, vec![
            MenuCard::new("pancakes", "Pancakes", "🥞", "Fluffy pancakes with syrup", 12),
            MenuCard::new("fruit-bowl", "Fresh Fruit Bowl", "🍓", "Seasonal fresh fruits", 8),
            MenuCard::new("veggie-omelet", "Veggie Omelet", "🍳", "Cheese and vegetable omelet", 10),
        ]),
        section(Veg, Lunch, vec![
            MenuCard::new("veggie-pasta", "Veggie Pasta", "🍝", "Pasta with fresh vegetables", 15),
            MenuCard::new("garden-salad", "Garden Salad", "🥗", "Mixed greens with dressing", 12),
            MenuCard::new("veggie-sandwich", "Veggie Sandwich", "🥪", "Grilled vegetable sandwich", 10),
        ]),
        section(Veg, Dinner, vec![
            MenuCard::new("veggie-pizza", "Veggie Pizza", "🍕", "Pizza with fresh vegetables", 18),
            MenuCard::new("pasta-primavera", "Pasta Primavera", "🍝", "Pasta with seasonal vegetables", 16),
            MenuCard::new("veggie-burger", "Veggie Burger", "🍔", "Plant-based burger with fries", 14),
        ]),
        section(Veg, Snacks, vec![
            MenuCard::new("fruit-smoothie", "Fruit Smoothie", "🥤", "Blended fresh fruit smoothie", 6),
            MenuCard::new("veggie-wrap", "Veggie Wrap", "🌯", "Fresh vegetable wrap", 8),
            MenuCard::new("nachos", "Nachos", "🧇", "Tortilla chips with cheese", 7),
        ]),
        section(NonVeg, Breakfast, vec![
            MenuCard::new("bacon-eggs", "Bacon & Eggs", "🥓", "Crispy bacon with eggs", 14),
            MenuCard::new("chicken-sandwich", "Chicken Sandwich", "🥪", "Grilled chicken sandwich", 12),
            MenuCard::new("meat-omelet", "Meat Omelet", "🍳", "Omelet with ham and cheese", 13),
        ]),
        section(NonVeg, Lunch, vec![
            MenuCard::new("chicken-pasta", "Chicken Pasta", "🍝", "Pasta with grilled chicken", 18),
            MenuCard::new("caesar-salad", "Caesar Salad", "🥗", "Caesar salad with chicken", 15),
            MenuCard::new("club-sandwich", "Club Sandwich", "🥪", "Triple-layer club sandwich", 16),
        ]),
        section(NonVeg, Dinner, vec![
            MenuCard::new("grilled-chicken", "Grilled Chicken", "🍗", "Herb-crusted grilled chicken", 22),
            MenuCard::new("fish-chips", "Fish & Chips", "🍟", "Beer-battered fish with chips", 20),
            MenuCard::new("beef-burger", "Beef Burger", "🍔", "Angus beef burger with fries", 18),
        ]),
        section(NonVeg, Snacks, vec![
            MenuCard::new("chicken-wings", "Chicken Wings", "🍗", "Spicy buffalo wings", 12),
            MenuCard::new("mini-burgers", "Mini Burgers", "🍔", "Slider burgers (3 pieces)", 10),
            MenuCard::new("meat-wrap", "Meat Wrap", "🌯", "Chicken or beef wrap", 11),
        ]),
    ]
}
