mod common;
use common::*;
use concierge::prelude::*;

#[test]
fn test_laundry_request_with_quantity_and_timing() {
    let matcher = matcher();
    let intent = matcher
        .match_intent("I need laundry for 3 shirts tomorrow")
        .expect("Expected a laundry intent");

    assert_eq!(intent.service, FlowId::LaundryService);
    assert_eq!(intent.items, vec!["shirts"]);
    assert_eq!(intent.quantity, Some(3));
    assert_eq!(intent.timing, Some(Timing::NextDay));
    assert!(intent.confidence > 0.0 && intent.confidence <= 1.0);
    assert_eq!(
        matcher.format_voice_input(&intent),
        "laundry service - 3 shirts - tomorrow"
    );
}

#[test]
fn test_room_cleaning_wins_on_confidence() {
    // "clean" is a laundry keyword too, but "clean room" covers a larger
    // share of the room cleaning keywords.
    let intent = matcher().match_intent("clean room please").unwrap();
    assert_eq!(intent.service, FlowId::RoomCleaning);
    assert!(intent.items.is_empty());
}

#[test]
fn test_food_preferences_and_number_words() {
    let matcher = matcher();
    let intent = matcher.match_intent("two veg lunches please").unwrap();

    assert_eq!(intent.service, FlowId::FoodService);
    assert_eq!(intent.food_type, Some(FoodType::Veg));
    assert_eq!(intent.meal_type, Some(MealType::Lunch));
    assert_eq!(intent.quantity, Some(2));
    assert_eq!(intent.preferences(), vec!["veg", "lunch"]);
    assert_eq!(matcher.format_voice_input(&intent), "food service for veg lunch");
}

#[test]
fn test_non_veg_is_not_mistaken_for_veg() {
    let matcher = matcher();
    assert_eq!(matcher.food_type("a non-veg dinner"), Some(FoodType::NonVeg));
    assert_eq!(matcher.food_type("grilled chicken"), Some(FoodType::NonVeg));
    assert_eq!(matcher.food_type("something veggie"), Some(FoodType::Veg));
    assert_eq!(matcher.food_type("anything"), None);
}

#[test]
fn test_timing_words_must_stand_alone() {
    let matcher = matcher();
    let later = matcher.match_intent("pick up my laundry later").unwrap();
    assert_eq!(later.timing, None);

    let at_noon = matcher.match_intent("laundry pickup at noon").unwrap();
    assert_eq!(at_noon.timing, Some(Timing::SpecificTime));

    let urgent = matcher.match_intent("I need my suits pressed asap").unwrap();
    assert_eq!(urgent.timing, Some(Timing::Asap));
    assert_eq!(matcher.format_voice_input(&urgent), "laundry service - suits - ASAP");
}

#[test]
fn test_zero_quantity_is_ignored() {
    let intent = matcher().match_intent("wash 0 shirts").unwrap();
    assert_eq!(intent.quantity, None);
}

#[test]
fn test_single_item_omits_quantity_in_summary() {
    let matcher = matcher();
    let intent = matcher.match_intent("dry clean one suits today").unwrap();
    assert_eq!(intent.quantity, Some(1));
    assert_eq!(matcher.format_voice_input(&intent), "laundry service - suits - today");
}

#[test]
fn test_generic_clothes_are_not_an_item() {
    let matcher = matcher();
    let intent = matcher.match_intent("wash 3 clothes please").unwrap();
    assert_eq!(intent.service, FlowId::LaundryService);
    assert!(intent.items.is_empty());
    assert_eq!(matcher.format_voice_input(&intent), "laundry service");
}

#[test]
fn test_unrelated_text_has_no_intent() {
    let matcher = matcher();
    assert_eq!(matcher.match_intent("what is the wifi password"), None);
    assert_eq!(matcher.match_intent(""), None);
}

#[test]
fn test_matching_is_pure() {
    let matcher = matcher();
    let text = "Could you send dinner for two by 8";
    assert_eq!(matcher.match_intent(text), matcher.match_intent(text));
}
