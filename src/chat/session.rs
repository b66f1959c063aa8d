//! The chat session: drives a flow from the first keystroke to a booking.
//!
//! A session owns the active flow's cursor and slot state, the rendered
//! widgets, the composed input line, the message log and the booking ledger.
//! Every method runs to completion; the only pending operation is a card
//! payment, which the caller finishes with `complete_payment` after
//! `PAYMENT_DELAY`.
use super::booking::{Booking, BookingDetails, BookingLedger, PaymentMethod, PaymentStatus};
use super::message::ChatLog;
use crate::catalog::{Catalog, FlowId, FlowStep, FoodType, MealType, Timing};
use crate::engine::PredictiveEngine;
use crate::error::VoiceError;
use crate::matcher::IntentMatcher;
use crate::render::{DynamicUiRenderer, Interaction, Selection};
use crate::state::{Cursor, DeliveryTime, FlowState, QuantityEntry, Turnaround};
use crate::ui::{ChoiceOption, ComponentKind, ConfirmationSpec, OptionGroup, UiComponent};
use crate::voice::VoiceState;
use chrono::Utc;
use itertools::Itertools;
use std::sync::Arc;
use std::time::Duration;

/// How long a simulated card payment takes.
pub const PAYMENT_DELAY: Duration = Duration::from_millis(1500);

pub const DEFAULT_PLACEHOLDER: &str = "Ask me anything or tap the mic...";
pub const CONFIRMED_MESSAGE: &str = "Your request has been confirmed!";
pub const CANNED_REPLY: &str = "I understand your request. Let me help you with that.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    FlowActive {
        cursor: Cursor,
        state: FlowState,
    },
    AwaitingPayment {
        details: BookingDetails,
    },
    ProcessingPayment {
        details: BookingDetails,
    },
}

/// What an event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The event was not valid in the current phase.
    Ignored,
    /// No rule matched or the gesture produced nothing; the view is kept.
    Unchanged,
    Reset,
    Started(Cursor),
    Advanced(Cursor),
    /// The flow is complete and the confirmation card is shown.
    ReadyToConfirm,
    AwaitingPayment,
    /// Finish with `complete_payment` once `delay` has passed.
    ProcessingPayment {
        delay: Duration,
    },
    Booked(Booking),
    Sent,
}

/// Everything a front end needs to draw the input area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub input: String,
    pub placeholder: String,
    pub hint: String,
    pub components: Vec<UiComponent>,
}

impl SessionView {
    /// Overlays the state of an ongoing voice capture.
    pub fn with_voice(mut self, voice: &VoiceState) -> Self {
        if let Some(error) = &voice.error {
            self.placeholder = error.to_string();
            self.hint = error.to_string();
        } else if voice.listening {
            self.placeholder = "Listening...".to_string();
            if !voice.interim.is_empty() {
                self.input = voice.interim.clone();
            }
        } else if voice.processing {
            self.placeholder = "Processing...".to_string();
        }
        self
    }
}

pub struct ChatSession {
    catalog: Arc<Catalog>,
    engine: PredictiveEngine,
    matcher: IntentMatcher,
    renderer: DynamicUiRenderer,
    phase: SessionPhase,
    input: String,
    follow_up: String,
    hint: String,
    notice: Option<VoiceError>,
    log: ChatLog,
    ledger: BookingLedger,
}

impl ChatSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            engine: PredictiveEngine::new(catalog.clone()),
            matcher: IntentMatcher::new(catalog.clone()),
            catalog,
            renderer: DynamicUiRenderer::new(),
            phase: SessionPhase::Idle,
            input: String::new(),
            follow_up: String::new(),
            hint: String::new(),
            notice: None,
            log: ChatLog::new(),
            ledger: BookingLedger::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &PredictiveEngine {
        &self.engine
    }

    pub fn matcher(&self) -> &IntentMatcher {
        &self.matcher
    }

    pub fn renderer(&self) -> &DynamicUiRenderer {
        &self.renderer
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// The composed input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn follow_up(&self) -> &str {
        &self.follow_up
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    pub fn cursor(&self) -> Option<Cursor> {
        match &self.phase {
            SessionPhase::FlowActive { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<&FlowState> {
        match &self.phase {
            SessionPhase::FlowActive { state, .. } => Some(state),
            _ => None,
        }
    }

    pub fn is_payment_pending(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::AwaitingPayment { .. } | SessionPhase::ProcessingPayment { .. }
        )
    }

    pub fn view(&self) -> SessionView {
        let notice = self.notice.as_ref().map(|e| e.to_string());
        let placeholder = match &notice {
            Some(message) => message.clone(),
            None if !self.follow_up.is_empty() => self.follow_up.clone(),
            None => DEFAULT_PLACEHOLDER.to_string(),
        };
        let hint = match notice {
            Some(message) => message,
            None if self.input.chars().count() > 2 => self.hint.clone(),
            None => String::new(),
        };
        SessionView {
            input: self.input.clone(),
            placeholder,
            hint,
            components: self.renderer.components().to_vec(),
        }
    }

    /// Handles an edit of the input line.
    ///
    /// Short input clears the flow. Otherwise a matching prediction replaces
    /// whatever flow was active; food requests that already name a food type
    /// (and possibly a meal) skip the steps that would ask for them.
    pub fn input_changed(&mut self, text: &str) -> Transition {
        if self.is_payment_pending() {
            log::warn!("Ignoring input while a payment is pending");
            return Transition::Ignored;
        }
        self.input = text.to_string();
        self.notice = None;

        if text.chars().count() <= 2 {
            self.clear_flow();
            return Transition::Reset;
        }

        let Some(prediction) = self.engine.predict(text) else {
            return Transition::Unchanged;
        };

        let mut cursor = Cursor::start(prediction.flow_id);
        let mut state = FlowState::new();
        let mut step = prediction.step();

        if prediction.flow_id == FlowId::FoodService {
            if let Some(food) = self.matcher.food_type(text) {
                state.set_food_type(food);
                if let Some(meal_step) = self.food_step(1) {
                    cursor.step = 1;
                    step = meal_step;
                }
                if let Some(meal) = self.matcher.meal_type(text) {
                    state.set_meal_type(meal);
                    if let Some(menu_step) = self.engine.menu_step(food, Some(meal)) {
                        cursor.step = 2;
                        step = menu_step;
                    }
                }
            }
        }

        log::debug!("Starting {} at step {}", cursor.flow, cursor.step);
        self.show(&step);
        self.phase = SessionPhase::FlowActive { cursor, state };
        Transition::Started(cursor)
    }

    /// A QR code decodes to a request line, handled like typed input.
    pub fn scan_result(&mut self, text: &str) -> Transition {
        self.input_changed(text)
    }

    /// Handles a final voice transcript: it becomes the input line, and any
    /// slots the matcher can extract are filled in ahead of their steps.
    pub fn voice_transcript(&mut self, text: &str) -> Transition {
        let transition = self.input_changed(text);
        let intent = self.matcher.match_intent(text);

        if let (SessionPhase::FlowActive { cursor, state }, Some(intent)) = (&mut self.phase, intent) {
            match cursor.flow {
                FlowId::LaundryService => {
                    if !intent.items.is_empty() {
                        let quantity = intent.quantity.unwrap_or(1);
                        state.merge_quantities(
                            intent
                                .items
                                .iter()
                                .map(|item| QuantityEntry::new(item, quantity))
                                .collect(),
                        );
                    }
                    match intent.timing {
                        Some(Timing::SameDay) => state.set_turnaround(Turnaround::SameDay),
                        Some(Timing::NextDay) => state.set_turnaround(Turnaround::NextDay),
                        _ => {}
                    }
                }
                FlowId::FoodService => {
                    if intent.timing == Some(Timing::Asap) {
                        state.set_delivery(DeliveryTime::Asap);
                    }
                }
                FlowId::GeneralInquiry | FlowId::BreakfastMenu | FlowId::RoomCleaning => {}
            }
        }
        transition
    }

    /// Surfaces a voice failure next to the input line. Typing keeps working.
    pub fn voice_error(&mut self, error: VoiceError) {
        self.notice = Some(error);
    }

    /// Routes a raw widget gesture through the renderer.
    pub fn interact(&mut self, interaction: Interaction) -> Transition {
        match self.renderer.handle(interaction) {
            Some(selection) => self.select(selection),
            None => Transition::Unchanged,
        }
    }

    /// Applies a widget selection to the current phase.
    pub fn select(&mut self, selection: Selection) -> Transition {
        match std::mem::take(&mut self.phase) {
            SessionPhase::Idle => {
                log::warn!("Ignoring {} selection with no active flow", selection.kind());
                Transition::Ignored
            }
            SessionPhase::FlowActive { cursor, state } => self.select_in_flow(cursor, state, selection),
            SessionPhase::AwaitingPayment { details } => {
                let method = match &selection {
                    Selection::Radio(value) => PaymentMethod::from_value(value),
                    _ => None,
                };
                match method {
                    Some(method) => self.settle(details, method),
                    None => {
                        log::warn!("Ignoring {} selection while awaiting payment", selection.kind());
                        self.phase = SessionPhase::AwaitingPayment { details };
                        Transition::Ignored
                    }
                }
            }
            phase @ SessionPhase::ProcessingPayment { .. } => {
                log::warn!("Ignoring {} selection while a payment is processing", selection.kind());
                self.phase = phase;
                Transition::Ignored
            }
        }
    }

    fn select_in_flow(&mut self, cursor: Cursor, mut state: FlowState, selection: Selection) -> Transition {
        let flow = cursor.flow;
        match &selection {
            Selection::Confirmed => {
                if self.renderer.position_of(ComponentKind::ConfirmationCard).is_none() {
                    log::warn!("Ignoring confirmation before the flow is complete");
                    self.phase = SessionPhase::FlowActive { cursor, state };
                    return Transition::Ignored;
                }
                return self.confirm(flow, state);
            }
            Selection::ServiceCard(card) => match (flow, cursor.step) {
                (FlowId::GeneralInquiry, _) => {
                    let title = card.title.clone();
                    self.phase = SessionPhase::FlowActive { cursor, state };
                    return self.input_changed(&title);
                }
                (FlowId::FoodService, 0) => match card.id.parse::<FoodType>() {
                    Ok(food) => state.set_food_type(food),
                    Err(_) => state.set_service(card.clone()),
                },
                (FlowId::FoodService, 1) => match card.id.parse::<MealType>() {
                    Ok(meal) => state.set_meal_type(meal),
                    Err(_) => state.set_service(card.clone()),
                },
                _ => state.set_service(card.clone()),
            },
            Selection::MenuItems(items) => state.set_menu(items.clone()),
            Selection::Quantities(entries) => state.merge_quantities(entries.clone()),
            Selection::Radio(value) => match flow {
                FlowId::FoodService => state.set_delivery(DeliveryTime::from_value(value)),
                FlowId::LaundryService => state.set_turnaround(Turnaround::from_value(value)),
                _ => state.set_time(value),
            },
            Selection::Checkbox { option, checked } => state.toggle_cleaning(option.clone(), *checked),
            Selection::Slider(value) => match value.parse::<u32>() {
                Ok(guests) => state.set_guests(guests),
                Err(e) => log::warn!("Ignoring slider value '{}': {}", value, e),
            },
            Selection::Time(time) => state.set_time(time),
            Selection::Date(date) => state.set_date(date),
        }

        self.compose_input(flow, &selection, &state);

        match self.engine.next_step(flow, cursor.step, &state) {
            Some(step) => {
                let cursor = Cursor {
                    flow,
                    step: cursor.step + 1,
                };
                self.show(&step);
                self.phase = SessionPhase::FlowActive { cursor, state };
                Transition::Advanced(cursor)
            }
            None => {
                self.show_confirmation(flow);
                self.phase = SessionPhase::FlowActive { cursor, state };
                Transition::ReadyToConfirm
            }
        }
    }

    /// Updates the input line so it reads as the guest's request so far.
    fn compose_input(&mut self, flow: FlowId, selection: &Selection, state: &FlowState) {
        match selection {
            Selection::ServiceCard(_) | Selection::MenuItems(_) => {
                self.input = self.engine.contextual_response(&self.input, state);
            }
            Selection::Quantities(entries) => self.append_input(&entries.iter().join(", ")),
            Selection::Radio(value) => {
                let phrase = match flow {
                    FlowId::FoodService => DeliveryTime::from_value(value).phrase(),
                    FlowId::LaundryService => Turnaround::from_value(value).phrase(),
                    _ => value.as_str(),
                };
                self.append_input(phrase);
            }
            Selection::Checkbox { option, checked: true } => self.append_input(&option.label),
            Selection::Checkbox { checked: false, .. } | Selection::Confirmed => {}
            Selection::Slider(value) => self.append_input(&format!("{} guests", value)),
            Selection::Time(time) => self.append_input(&format!("at {}", time)),
            Selection::Date(date) => self.append_input(&format!("on {}", date)),
        }
    }

    fn append_input(&mut self, phrase: &str) {
        let current = self.input.trim();
        self.input = if current.is_empty() {
            phrase.to_string()
        } else {
            format!("{}, {}", current, phrase)
        };
    }

    fn confirm(&mut self, flow: FlowId, state: FlowState) -> Transition {
        let details = BookingDetails::compute(&self.catalog, flow, &state, Utc::now());
        log::info!(
            "Request {} confirmed for {}, {} due",
            details.request_id,
            flow,
            details.cost_label()
        );

        self.follow_up = format!("How would you like to pay {}?", details.cost_label());
        self.hint = "Pay by card or at reception".to_string();
        self.renderer.set_components(vec![UiComponent::RadioGroup(OptionGroup {
            title: "Payment Method".to_string(),
            options: vec![
                ChoiceOption::new(PaymentMethod::Card.as_str(), "Pay by card"),
                ChoiceOption::new(PaymentMethod::Reception.as_str(), "Pay at reception"),
            ],
        })]);
        self.phase = SessionPhase::AwaitingPayment { details };
        Transition::AwaitingPayment
    }

    /// Picks how to pay for the confirmed request.
    pub fn choose_payment(&mut self, method: PaymentMethod) -> Transition {
        match std::mem::take(&mut self.phase) {
            SessionPhase::AwaitingPayment { details } => self.settle(details, method),
            phase => {
                log::warn!("Ignoring payment choice with nothing to pay for");
                self.phase = phase;
                Transition::Ignored
            }
        }
    }

    fn settle(&mut self, details: BookingDetails, method: PaymentMethod) -> Transition {
        match method {
            PaymentMethod::Card => {
                self.follow_up = "Processing payment...".to_string();
                self.hint.clear();
                self.renderer.clear();
                self.phase = SessionPhase::ProcessingPayment { details };
                Transition::ProcessingPayment { delay: PAYMENT_DELAY }
            }
            PaymentMethod::Reception => self.finalize(details, method, PaymentStatus::Pending),
        }
    }

    /// Completes a card payment started by `choose_payment`.
    pub fn complete_payment(&mut self) -> Transition {
        match std::mem::take(&mut self.phase) {
            SessionPhase::ProcessingPayment { details } => {
                self.finalize(details, PaymentMethod::Card, PaymentStatus::Paid)
            }
            phase => {
                log::warn!("Ignoring payment completion with no payment in progress");
                self.phase = phase;
                Transition::Ignored
            }
        }
    }

    fn finalize(&mut self, details: BookingDetails, method: PaymentMethod, status: PaymentStatus) -> Transition {
        let booking = details.into_booking(method, status, Utc::now());
        let line = match self.input.trim() {
            "" => booking.service().to_string(),
            text => text.to_string(),
        };
        self.log.push_user(&line);
        self.log.push_booking(CONFIRMED_MESSAGE, booking.clone());
        self.ledger.add(booking.clone());
        self.reset();
        Transition::Booked(booking)
    }

    /// Sends the input line as a plain chat message.
    pub fn send_message(&mut self) -> Transition {
        if self.is_payment_pending() {
            log::warn!("Ignoring message while a payment is pending");
            return Transition::Ignored;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Transition::Ignored;
        }
        self.log.push_user(&text);
        self.log.push_bot(CANNED_REPLY);
        self.reset();
        Transition::Sent
    }

    /// Abandons any flow or pending payment and clears the input line.
    pub fn reset(&mut self) {
        self.input.clear();
        self.notice = None;
        self.clear_flow();
    }

    fn clear_flow(&mut self) {
        self.follow_up.clear();
        self.hint.clear();
        self.renderer.clear();
        self.phase = SessionPhase::Idle;
    }

    fn food_step(&self, index: usize) -> Option<FlowStep> {
        self.catalog
            .lookup(FlowId::FoodService)
            .ok()
            .and_then(|flow| flow.steps.get(index).cloned())
    }

    fn show(&mut self, step: &FlowStep) {
        self.follow_up = step.follow_up_question.clone();
        self.hint = step.predictive_text.clone();
        self.renderer.set_components(step.ui_components.clone());
    }

    fn show_confirmation(&mut self, flow: FlowId) {
        let pricing = self.catalog.pricing();
        let quote = if flow == FlowId::FoodService {
            &pricing.food_quote
        } else {
            &pricing.service_quote
        };
        let card = UiComponent::ConfirmationCard(ConfirmationSpec {
            title: "Confirm Request".to_string(),
            summary: self.input.clone(),
            estimated_time: quote.estimated_time.clone(),
            cost: format!("${}", quote.cost),
        });
        self.follow_up = "Got it! Ready to confirm your request?".to_string();
        self.hint = "Review details and confirm".to_string();
        self.renderer.set_components(vec![card]);
    }
}
