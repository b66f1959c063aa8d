//! Unit tests for catalog, slot state, bookings, voice input and errors.
mod common;
use chrono::DateTime;
use common::*;
use concierge::catalog::{Pricing, ServiceFlow};
use concierge::chat::{BookingDetails, BookingLedger, request_id_from};
use concierge::prelude::*;
use concierge::state::{DeliveryTime, MenuSelection, QuantityEntry, Slot, Turnaround};
use concierge::ui::{ChoiceOption, MenuCard, ServiceCard};
use concierge::voice::CaptureEvent;

fn timestamp() -> DateTime<chrono::Utc> {
    DateTime::from_timestamp_millis(1_700_000_123_456).expect("valid timestamp")
}

#[test]
fn test_flow_id_parse_and_display() {
    for id in [
        FlowId::GeneralInquiry,
        FlowId::FoodService,
        FlowId::LaundryService,
        FlowId::BreakfastMenu,
        FlowId::RoomCleaning,
    ] {
        assert_eq!(id.to_string().parse::<FlowId>(), Ok(id));
    }
    assert!("spa".parse::<FlowId>().is_err());
    assert_eq!("non-veg".parse::<FoodType>(), Ok(FoodType::NonVeg));
    assert_eq!("snacks".parse::<MealType>(), Ok(MealType::Snacks));
}

#[test]
fn test_catalog_lookup() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.lookup(FlowId::LaundryService).unwrap().steps.len(), 2);
    assert!(matches!(
        catalog.lookup(FlowId::GeneralInquiry),
        Err(CatalogError::FlowNotFound(FlowId::GeneralInquiry))
    ));
}

#[test]
fn test_catalog_item_prices() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.item_price(FlowId::LaundryService, "suits"), Some(20));
    assert_eq!(catalog.item_price(FlowId::FoodService, "desserts"), Some(5));
    assert_eq!(catalog.item_price(FlowId::LaundryService, "socks"), None);
    for garment in &catalog.intents().garments {
        assert!(
            catalog.item_price(FlowId::LaundryService, garment).is_some(),
            "{} is not a priced laundry item",
            garment
        );
    }
    assert_eq!(catalog.menu(FoodType::NonVeg, MealType::Dinner).len(), 3);
}

#[test]
fn test_catalog_json_roundtrip() {
    let catalog = Catalog::builtin();
    let json = catalog.to_json_pretty().expect("Failed to serialize catalog");
    let parsed = Catalog::from_json(&json).expect("Failed to parse catalog");
    assert_eq!(parsed, catalog);
}

#[test]
fn test_catalog_rejects_unknown_component_kind() {
    let json = Catalog::builtin().to_json_pretty().unwrap();
    let broken = json.replace("\"radio-group\"", "\"carousel\"");
    assert!(matches!(
        Catalog::from_json(&broken),
        Err(CatalogError::JsonParseError(_))
    ));
}

#[test]
fn test_catalog_rejects_duplicate_flows() {
    let builtin = Catalog::builtin();
    let laundry: ServiceFlow = builtin.lookup(FlowId::LaundryService).unwrap().clone();
    let result = Catalog::new(
        vec![laundry.clone(), laundry],
        Vec::new(),
        builtin.intents().clone(),
        Vec::new(),
        builtin.pricing().clone(),
    );
    assert!(matches!(
        result,
        Err(CatalogError::DuplicateFlow(FlowId::LaundryService))
    ));
}

#[test]
fn test_catalog_file_missing() {
    let result = Catalog::from_json_file("does/not/exist.json");
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn test_artifact_save_and_load() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.bin");
    let path = path.to_str().unwrap();

    CatalogArtifact::new(Catalog::builtin())
        .save(path)
        .expect("Failed to save artifact");
    let loaded = CatalogArtifact::from_file(path).expect("Failed to load artifact");

    assert_eq!(loaded.format_version, concierge::catalog::ARTIFACT_FORMAT_VERSION);
    assert_eq!(loaded.into_catalog(), Catalog::builtin());
}

#[test]
fn test_artifact_version_mismatch() {
    let artifact = CatalogArtifact {
        format_version: 99,
        catalog: Catalog::builtin(),
    };
    let bytes = artifact.to_bytes().unwrap();
    let err = CatalogArtifact::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, CatalogError::Artifact(_)));
    assert!(err.to_string().contains("Unsupported artifact version 99"));
}

#[test]
fn test_artifact_garbage_bytes() {
    assert!(CatalogArtifact::from_bytes(&[0xff, 0x00, 0x13]).is_err());
}

#[test]
fn test_flow_state_tracks_last_update() {
    let mut state = FlowState::new();
    assert!(state.is_empty());
    assert_eq!(state.last_updated(), None);

    state.set_food_type(FoodType::Veg);
    state.set_meal_type(MealType::Lunch);
    assert_eq!(state.last_updated(), Some(Slot::MealType));
    assert!(state.is_set(Slot::FoodType));
    assert!(!state.is_set(Slot::Menu));
}

#[test]
fn test_flow_state_quantities_merge() {
    let mut state = FlowState::new();
    state.merge_quantities(vec![QuantityEntry::new("shirts", 2), QuantityEntry::new("pants", 1)]);
    state.merge_quantities(vec![QuantityEntry::new("shirts", 4), QuantityEntry::new("suits", 1)]);
    assert_eq!(state.quantities_summary(), "4 shirts, 1 pants, 1 suits");

    state.merge_quantities(vec![QuantityEntry::new("pants", 0)]);
    assert_eq!(state.quantities_summary(), "4 shirts, 1 suits");
}

#[test]
fn test_flow_state_menu_drops_zero_quantities() {
    let mut state = FlowState::new();
    let pancakes = MenuCard::new("pancakes", "Pancakes", "🥞", "Fluffy pancakes with syrup", 12);
    let omelet = MenuCard::new("veggie-omelet", "Veggie Omelet", "🍳", "Cheese and vegetable omelet", 10);
    state.set_menu(vec![
        MenuSelection {
            card: pancakes,
            quantity: 2,
        },
        MenuSelection {
            card: omelet,
            quantity: 0,
        },
    ]);
    assert_eq!(state.menu().len(), 1);
    assert_eq!(state.menu()[0].card.id, "pancakes");
}

#[test]
fn test_flow_state_cleaning_toggles() {
    let mut state = FlowState::new();
    let beds = ChoiceOption::new("beds", "Make beds and change linens");
    let trash = ChoiceOption::new("trash", "Empty trash bins");
    state.toggle_cleaning(beds.clone(), true);
    state.toggle_cleaning(trash.clone(), true);
    state.toggle_cleaning(beds.clone(), false);
    state.toggle_cleaning(trash.clone(), true);
    assert_eq!(state.cleaning(), &[trash]);
}

#[test]
fn test_option_values_parse_with_fallbacks() {
    assert_eq!(DeliveryTime::from_value("1-hour"), DeliveryTime::OneHour);
    assert_eq!(DeliveryTime::from_value("at-noon"), DeliveryTime::SpecificTime);
    assert_eq!(Turnaround::from_value("next-day"), Turnaround::NextDay);
    assert_eq!(Turnaround::from_value("2-3-days"), Turnaround::Standard);
    assert_eq!(Turnaround::SameDay.label(), "Same Day");
}

#[test]
fn test_request_id_uses_last_six_digits() {
    assert_eq!(request_id_from(timestamp()), "REQ123456");
    let early = DateTime::from_timestamp_millis(42).unwrap();
    assert_eq!(request_id_from(early), "REQ000042");
}

#[test]
fn test_laundry_cost_without_surcharge() {
    let catalog = Catalog::builtin();
    let details = BookingDetails::compute(
        &catalog,
        FlowId::LaundryService,
        &same_day_laundry_state(),
        timestamp(),
    );
    assert_eq!(details.service, "Laundry Service");
    assert_eq!(details.items, vec!["2 shirts", "1 pants"]);
    assert_eq!(details.cost, 17);
    assert_eq!(details.cost_label(), "$17");
    assert_eq!(details.turnaround, "Same Day");
    assert_eq!(details.estimated_time, "6-8 hours");
}

#[test]
fn test_laundry_cost_with_surcharge() {
    let builtin = Catalog::builtin();
    let pricing = Pricing {
        apply_same_day_surcharge: true,
        ..builtin.pricing().clone()
    };
    let catalog = builtin.with_pricing(pricing);
    let details = BookingDetails::compute(
        &catalog,
        FlowId::LaundryService,
        &same_day_laundry_state(),
        timestamp(),
    );
    assert_eq!(details.cost, 27);
}

#[test]
fn test_laundry_unknown_garment_uses_default_price() {
    let mut state = FlowState::new();
    state.set_service(ServiceCard::new("dry-clean", "Dry Cleaning", "🧥", "Professional dry cleaning"));
    state.merge_quantities(vec![QuantityEntry::new("towels", 3)]);
    let details = BookingDetails::compute(&Catalog::builtin(), FlowId::LaundryService, &state, timestamp());
    assert_eq!(details.service, "Dry Cleaning");
    assert_eq!(details.cost, 15);
    assert_eq!(details.turnaround, "Standard");
    assert_eq!(details.estimated_time, "2-3 hours");
}

#[test]
fn test_food_cost_defaults_without_selection() {
    let details = BookingDetails::compute(&Catalog::builtin(), FlowId::FoodService, &FlowState::new(), timestamp());
    assert_eq!(details.service, "Food Meal");
    assert_eq!(details.items, vec!["1x Food Item"]);
    assert_eq!(details.cost, 15);
    assert_eq!(details.turnaround, "Standard delivery");
    assert_eq!(details.estimated_time, "45-60 minutes");
}

#[test]
fn test_oversized_menu_quantity_saturates_cost() {
    let catalog = Catalog::builtin();
    let mut state = FlowState::new();
    let club = catalog.menu(FoodType::NonVeg, MealType::Lunch)[2].clone();
    state.set_menu(vec![MenuSelection {
        card: club,
        quantity: u32::MAX,
    }]);
    state.merge_quantities(vec![QuantityEntry::new("desserts", 1)]);

    let details = BookingDetails::compute(&catalog, FlowId::FoodService, &state, timestamp());
    assert_eq!(details.cost, u32::MAX);
}

#[test]
fn test_food_cost_with_portions_and_add_ons() {
    let catalog = Catalog::builtin();
    let mut state = FlowState::new();
    state.set_food_type(FoodType::NonVeg);
    state.set_meal_type(MealType::Lunch);
    let club = catalog.menu(FoodType::NonVeg, MealType::Lunch)[2].clone();
    state.set_menu(vec![MenuSelection {
        card: club,
        quantity: 1,
    }]);
    state.merge_quantities(vec![
        QuantityEntry::new("portions", 2),
        QuantityEntry::new("desserts", 1),
    ]);
    state.set_delivery(DeliveryTime::TwoHours);

    let details = BookingDetails::compute(&catalog, FlowId::FoodService, &state, timestamp());
    assert_eq!(details.service, "Non-Vegetarian Lunch");
    assert_eq!(details.items, vec!["2x Club Sandwich", "1 desserts"]);
    // 16 x 1 x 2 portions + 5 for the dessert
    assert_eq!(details.cost, 37);
    assert_eq!(details.turnaround, "In 2 hours");
    assert_eq!(details.estimated_time, "2 hours");
}

#[test]
fn test_room_cleaning_booking() {
    let mut state = FlowState::new();
    state.toggle_cleaning(ChoiceOption::new("bathroom", "Clean bathroom"), true);
    state.set_time("14:00");
    let details = BookingDetails::compute(&Catalog::builtin(), FlowId::RoomCleaning, &state, timestamp());
    assert_eq!(details.service, "Room Cleaning");
    assert_eq!(details.items, vec!["Clean bathroom"]);
    assert_eq!(details.turnaround, "14:00");
    assert_eq!(details.cost, 25);
}

#[test]
fn test_booking_ledger_newest_first() {
    let catalog = Catalog::builtin();
    let first = BookingDetails::compute(&catalog, FlowId::RoomCleaning, &FlowState::new(), timestamp())
        .into_booking(PaymentMethod::Reception, PaymentStatus::Pending, timestamp());
    let second = BookingDetails::compute(&catalog, FlowId::LaundryService, &same_day_laundry_state(), timestamp())
        .into_booking(PaymentMethod::Card, PaymentStatus::Paid, timestamp());

    let mut ledger = BookingLedger::new();
    ledger.add(first);
    ledger.add(second);

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.bookings()[0].service(), "Laundry Service");
    assert_eq!(ledger.bookings()[0].payment_status(), PaymentStatus::Paid);
    assert!(ledger.find("REQ123456").is_some());

    let printed = ledger.bookings()[0].to_string();
    assert!(printed.contains("Cost: $17"));
    assert!(printed.contains("Payment: card (paid)"));
}

#[test]
fn test_voice_error_messages() {
    assert_eq!(VoiceError::from_code("not-allowed"), VoiceError::NotAllowed);
    assert_eq!(VoiceError::NotAllowed.to_string(), "Microphone access denied");
    assert_eq!(
        VoiceError::from_code("no-speech").to_string(),
        "No speech detected. Try speaking again."
    );
    assert_eq!(
        VoiceError::from_code("aborted").to_string(),
        "Voice recognition failed. Try again."
    );
}

#[test]
fn test_voice_input_delivers_final_transcript_once() {
    let mut voice = VoiceInput::new(ScriptedCapture::new(vec![
        CaptureEvent::Interim("laun".to_string()),
        CaptureEvent::Final("laundry ".to_string()),
        CaptureEvent::Final("please".to_string()),
    ]));
    assert!(voice.state().supported);

    voice.toggle();
    assert!(voice.state().listening);

    assert_eq!(voice.pump(), Some("laundry please".to_string()));
    assert!(!voice.state().listening);
    assert!(voice.state().transcript.is_empty());
    assert_eq!(voice.pump(), None);
}

#[test]
fn test_voice_input_restart_stops_running_capture() {
    let mut voice = VoiceInput::new(ScriptedCapture::saying("laundry please"));
    voice.start();
    voice.start();
    assert_eq!(voice.error(), None);
    assert!(voice.state().listening);

    assert_eq!(voice.pump(), Some("laundry please".to_string()));
    assert_eq!(voice.pump(), None);
    assert!(!voice.state().listening);
}

#[test]
fn test_voice_input_unsupported() {
    let mut voice = VoiceInput::new(ScriptedCapture::unsupported());
    voice.toggle();
    assert!(!voice.state().listening);
    assert_eq!(voice.error(), Some(&VoiceError::Unsupported));
    assert_eq!(voice.pump(), None);
}

#[test]
fn test_voice_input_reports_capture_errors() {
    let mut voice = VoiceInput::new(ScriptedCapture::new(vec![CaptureEvent::Error(VoiceError::NoSpeech)]));
    voice.start();
    assert_eq!(voice.pump(), None);
    assert_eq!(voice.error(), Some(&VoiceError::NoSpeech));
    assert!(!voice.state().listening);

    voice.clear();
    assert_eq!(voice.error(), None);
}

#[test]
fn test_scripted_capture_rejects_double_start() {
    let mut capture = ScriptedCapture::saying("hello");
    assert!(capture.start().is_ok());
    assert_eq!(capture.start(), Err(VoiceError::StartFailed));
    capture.stop();
    assert_eq!(capture.next_event(), Some(CaptureEvent::Final("hello".to_string())));
    assert_eq!(capture.next_event(), Some(CaptureEvent::End));
    assert_eq!(capture.next_event(), None);
}
