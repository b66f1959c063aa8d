mod common;
use common::*;
use concierge::data::UtteranceSet;
use concierge::prelude::*;
use concierge::state::{DeliveryTime, MenuSelection, QuantityEntry, Turnaround};
use concierge::ui::{MenuCard, ServiceCard};

fn single_component(prediction: &PredictionResult) -> &UiComponent {
    assert_eq!(prediction.ui_components.len(), 1);
    &prediction.ui_components[0]
}

#[test]
fn test_general_inquiry_needs_exact_phrase() {
    let engine = engine();
    let prediction = engine.predict("  I NEED ").expect("Expected the general inquiry");
    assert_eq!(prediction.flow_id, FlowId::GeneralInquiry);
    assert_eq!(prediction.follow_up_question, "I need... What service are you looking for?");

    match single_component(&prediction) {
        UiComponent::ServiceCards(group) => {
            assert_eq!(group.title, "Popular Services");
            let ids: Vec<_> = group.cards.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["laundry", "food", "room-service", "concierge"]);
        }
        other => panic!("Unexpected component {:?}", other.kind()),
    }

    assert!(engine.predict("I need a towel").is_none());
}

#[test]
fn test_food_type_rule_precedes_meal_rule() {
    let engine = engine();
    let prediction = engine.predict("non-veg dinner").unwrap();
    assert_eq!(prediction.flow_id, FlowId::FoodService);
    assert_eq!(single_component(&prediction).title(), "Meal Type");

    let meal_only = engine.predict("Dinner").unwrap();
    assert_eq!(meal_only.flow_id, FlowId::FoodService);
    assert_eq!(single_component(&meal_only).title(), "Food Type");
}

#[test]
fn test_breakfast_enters_food_service() {
    let prediction = engine().predict("breakfast").unwrap();
    assert_eq!(prediction.flow_id, FlowId::FoodService);
    assert_eq!(
        prediction.follow_up_question,
        "I need food service...what type of cuisine do you prefer?"
    );
}

#[test]
fn test_clothes_and_laundry_entry_steps() {
    let engine = engine();

    let clothes = engine.predict("iron my shirts").unwrap();
    assert_eq!(clothes.flow_id, FlowId::LaundryService);
    assert_eq!(single_component(&clothes).title(), "Clothing Services");

    let laundry = engine.predict("Dry clean my suit").unwrap();
    assert_eq!(laundry.flow_id, FlowId::LaundryService);
    assert_eq!(
        laundry.follow_up_question,
        "Laundry—what assistance do you need with your clothes?"
    );
    assert_eq!(laundry.predictive_text, "e.g., wash & fold, stain removal, urgent delivery");
    match single_component(&laundry) {
        UiComponent::ServiceCards(group) => {
            assert_eq!(group.title, "Laundry Services");
            assert_eq!(group.cards[0].title, "Wash & Fold");
        }
        other => panic!("Unexpected component {:?}", other.kind()),
    }
}

#[test]
fn test_room_cleaning_entry_step() {
    let prediction = engine().predict("please tidy the room").unwrap();
    assert_eq!(prediction.flow_id, FlowId::RoomCleaning);
    assert_eq!(single_component(&prediction).kind(), ComponentKind::CheckboxGroup);
}

#[test]
fn test_prediction_is_pure() {
    let engine = engine();
    assert_eq!(engine.predict("I'm hungry"), engine.predict("I'm hungry"));
}

#[test]
fn test_builtin_utterances_predict_expected_flows() {
    let engine = engine();
    for utterance in UtteranceSet::default().utterances() {
        let flow = engine.predict(&utterance.text).map(|p| p.flow_id);
        assert_eq!(flow, utterance.expected_flow, "for '{}'", utterance.text);
    }
}

#[test]
fn test_menu_lookup() {
    let engine = engine();
    let ids: Vec<_> = engine
        .food_menu_items(FoodType::Veg, MealType::Lunch)
        .into_iter()
        .map(|card| card.id)
        .collect();
    assert_eq!(ids, vec!["veggie-pasta", "garden-salad", "veggie-sandwich"]);

    let fallback = engine.food_menu_items_by_name("vegan", "dinner");
    assert_eq!(fallback, engine.food_menu_items(FoodType::Veg, MealType::Dinner));
    assert!(engine.food_menu_items_by_name("veg", "brunch").is_empty());
}

#[test]
fn test_menu_step_without_meal_has_no_dishes() {
    let step = engine().menu_step(FoodType::NonVeg, None).unwrap();
    match &step.ui_components[0] {
        UiComponent::FoodMenuCards(group) => assert!(group.cards.is_empty()),
        other => panic!("Unexpected component {:?}", other.kind()),
    }
}

#[test]
fn test_food_steps_wait_for_their_slot() {
    let engine = engine();
    let mut state = FlowState::new();
    assert!(engine.next_step(FlowId::FoodService, 0, &state).is_none());

    state.set_food_type(FoodType::NonVeg);
    let meal = engine.next_step(FlowId::FoodService, 0, &state).unwrap();
    assert_eq!(meal.ui_components[0].title(), "Meal Type");

    state.set_meal_type(MealType::Dinner);
    let menu = engine.next_step(FlowId::FoodService, 1, &state).unwrap();
    match &menu.ui_components[0] {
        UiComponent::FoodMenuCards(group) => {
            assert_eq!(group.cards.len(), 3);
            assert_eq!(group.cards[0].id, "grilled-chicken");
        }
        other => panic!("Unexpected component {:?}", other.kind()),
    }

    assert!(engine.next_step(FlowId::FoodService, 2, &state).is_none());
    state.set_menu(vec![MenuSelection {
        card: MenuCard::new("fish-chips", "Fish & Chips", "🍟", "Beer-battered fish with chips", 20),
        quantity: 1,
    }]);
    let quantities = engine.next_step(FlowId::FoodService, 2, &state).unwrap();
    assert_eq!(quantities.ui_components[0].title(), "Quantity & Add-ons");

    assert!(engine.next_step(FlowId::FoodService, 3, &state).is_none());
    state.merge_quantities(vec![QuantityEntry::new("portions", 1)]);
    let delivery = engine.next_step(FlowId::FoodService, 3, &state).unwrap();
    assert_eq!(delivery.ui_components[0].title(), "Delivery Time");

    state.set_delivery(DeliveryTime::OneHour);
    assert!(engine.next_step(FlowId::FoodService, 4, &state).is_none());
}

#[test]
fn test_meal_without_food_type_defaults_to_vegetarian_menu() {
    let engine = engine();
    let mut state = FlowState::new();
    state.set_meal_type(MealType::Breakfast);
    let menu = engine.next_step(FlowId::FoodService, 1, &state).unwrap();
    match &menu.ui_components[0] {
        UiComponent::FoodMenuCards(group) => assert_eq!(group.cards[0].id, "pancakes"),
        other => panic!("Unexpected component {:?}", other.kind()),
    }
}

#[test]
fn test_laundry_walks_its_step_list() {
    let engine = engine();
    let state = FlowState::new();
    let turnaround = engine.next_step(FlowId::LaundryService, 0, &state).unwrap();
    assert_eq!(turnaround.ui_components[0].title(), "Turnaround Time");
    let items = engine.next_step(FlowId::LaundryService, 1, &state).unwrap();
    assert_eq!(items.ui_components[0].title(), "Number of Items");
    assert!(engine.next_step(FlowId::LaundryService, 2, &state).is_none());
}

#[test]
fn test_other_flows_end_after_entry_step() {
    let engine = engine();
    let state = FlowState::new();
    for flow in [FlowId::GeneralInquiry, FlowId::BreakfastMenu, FlowId::RoomCleaning] {
        assert!(engine.next_step(flow, 0, &state).is_none(), "{} should end", flow);
    }
}

#[test]
fn test_every_flow_terminates() {
    let engine = engine();
    let mut state = FlowState::new();
    state.set_food_type(FoodType::Veg);
    state.set_meal_type(MealType::Snacks);
    state.set_menu(vec![MenuSelection {
        card: MenuCard::new("nachos", "Nachos", "🧇", "Tortilla chips with cheese", 7),
        quantity: 1,
    }]);
    state.merge_quantities(vec![QuantityEntry::new("portions", 1)]);
    state.set_delivery(DeliveryTime::Asap);
    state.set_turnaround(Turnaround::NextDay);

    for flow in engine.catalog().flows() {
        let mut index = 0;
        while engine.next_step(flow.id, index, &state).is_some() {
            index += 1;
            assert!(index <= flow.steps.len(), "{} did not terminate", flow.id);
        }
    }
}

#[test]
fn test_contextual_response_uses_last_slot() {
    let engine = engine();
    let mut state = FlowState::new();
    assert_eq!(engine.contextual_response("laundry", &state), "laundry");

    state.set_food_type(FoodType::Veg);
    assert_eq!(
        engine.contextual_response("veg", &state),
        "I need food service for vegetarian...what meal are you looking for?"
    );

    state.set_meal_type(MealType::Dinner);
    assert_eq!(
        engine.contextual_response("veg", &state),
        "I need vegetarian dinner...what would you like to order?"
    );

    let mut laundry = same_day_laundry_state();
    assert_eq!(
        engine.contextual_response("", &laundry),
        "Got it! 2 shirts, 1 pants. When do you need this completed?"
    );
    laundry.set_turnaround(Turnaround::SameDay);
    assert_eq!(
        engine.contextual_response("", &laundry),
        "Perfect! same day service selected. Ready to confirm your request?"
    );

    let mut service = FlowState::new();
    service.set_service(ServiceCard::new("pressing", "Pressing Only", "👔", "Iron and press clothes"));
    assert_eq!(
        engine.contextual_response("", &service),
        "Pressing Only—what specific assistance do you need?"
    );
}
