//! Booking records and the per-flow cost rules that produce them.
use crate::catalog::{Catalog, FlowId};
use crate::state::{DeliveryTime, FlowState, Turnaround};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Card,
    Reception,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Reception => "reception",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "card" => Some(PaymentMethod::Card),
            "reception" => Some(PaymentMethod::Reception),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
        }
    }
}

/// `REQ` followed by the last six digits of the millisecond timestamp.
pub fn request_id_from(now: DateTime<Utc>) -> String {
    format!("REQ{:06}", now.timestamp_millis().rem_euclid(1_000_000))
}

/// What a confirmed request costs and when it will be done, before payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub request_id: String,
    pub service: String,
    pub items: Vec<String>,
    pub turnaround: String,
    /// Whole dollars.
    pub cost: u32,
    pub estimated_time: String,
}

impl BookingDetails {
    /// Applies the cost rules of `flow` to the collected slots.
    ///
    /// Missing slots fall back to the catalog's defaults; this never fails.
    /// Cost arithmetic saturates at `u32::MAX`.
    pub fn compute(catalog: &Catalog, flow: FlowId, state: &FlowState, now: DateTime<Utc>) -> Self {
        let pricing = catalog.pricing();
        let mut details = Self {
            request_id: request_id_from(now),
            service: "Service Request".to_string(),
            items: Vec::new(),
            turnaround: "Standard".to_string(),
            cost: pricing.default_service_cost,
            estimated_time: pricing.service_quote.estimated_time.clone(),
        };

        match flow {
            FlowId::FoodService => details.price_food(catalog, state),
            FlowId::LaundryService => details.price_laundry(catalog, state),
            FlowId::RoomCleaning => {
                details.service = "Room Cleaning".to_string();
                details.items = state.cleaning().iter().map(|o| o.label.clone()).collect();
                if let Some(time) = state.time() {
                    details.turnaround = time.to_string();
                }
            }
            FlowId::BreakfastMenu => {
                if let Some(card) = state.service() {
                    details.service = card.title.clone();
                }
                if let Some(guests) = state.guests() {
                    details.items.push(format!("{} guests", guests));
                }
                if let Some(time) = state.time() {
                    details.turnaround = time.to_string();
                }
            }
            FlowId::GeneralInquiry => {}
        }
        details
    }

    fn price_food(&mut self, catalog: &Catalog, state: &FlowState) {
        let pricing = catalog.pricing();
        let food = state.food_type().map_or("Food", |f| f.title());
        let meal = state.meal_type().map_or("Meal", |m| m.title());
        self.service = format!("{} {}", food, meal);

        let portions = state
            .quantities()
            .iter()
            .find(|q| q.item == "portions")
            .map(|q| q.quantity)
            .filter(|q| *q > 0)
            .unwrap_or(1);

        if state.menu().is_empty() {
            self.items.push(format!("{}x Food Item", portions));
            self.cost = pricing.default_item_price.saturating_mul(portions);
        } else {
            self.items = state
                .menu()
                .iter()
                .map(|s| format!("{}x {}", s.quantity.saturating_mul(portions), s.card.title))
                .collect();
            self.cost = state
                .menu()
                .iter()
                .fold(0u32, |total, s| total.saturating_add(s.card.price.saturating_mul(s.quantity)))
                .saturating_mul(portions);
        }

        for add_on in state.quantities().iter().filter(|q| q.item != "portions") {
            let price = catalog.item_price(FlowId::FoodService, &add_on.item).unwrap_or(0);
            self.cost = self.cost.saturating_add(price.saturating_mul(add_on.quantity));
            self.items.push(add_on.to_string());
        }

        let (turnaround, estimate) = match state.delivery() {
            Some(DeliveryTime::Asap) => ("ASAP", "30-45 minutes"),
            Some(DeliveryTime::OneHour) => ("In 1 hour", "1 hour"),
            Some(DeliveryTime::TwoHours) => ("In 2 hours", "2 hours"),
            Some(DeliveryTime::SpecificTime) | None => ("Standard delivery", "45-60 minutes"),
        };
        self.turnaround = turnaround.to_string();
        self.estimated_time = estimate.to_string();
    }

    fn price_laundry(&mut self, catalog: &Catalog, state: &FlowState) {
        let pricing = catalog.pricing();
        self.service = state
            .service()
            .map_or_else(|| "Laundry Service".to_string(), |card| card.title.clone());

        if !state.quantities().is_empty() {
            self.items = state.quantities().iter().map(|q| q.to_string()).collect();
            self.cost = state.quantities().iter().fold(0u32, |total, q| {
                let price = catalog
                    .item_price(FlowId::LaundryService, &q.item)
                    .unwrap_or(pricing.default_garment_price);
                total.saturating_add(price.saturating_mul(q.quantity))
            });
        }

        if let Some(turnaround) = state.turnaround() {
            self.turnaround = turnaround.label().to_string();
            self.estimated_time = match turnaround {
                Turnaround::SameDay => "6-8 hours",
                Turnaround::NextDay => "24 hours",
                Turnaround::Standard => "2-3 days",
            }
            .to_string();
            if turnaround == Turnaround::SameDay && pricing.apply_same_day_surcharge {
                self.cost = self.cost.saturating_add(pricing.same_day_surcharge);
            }
        }
    }

    /// `$17`
    pub fn cost_label(&self) -> String {
        format!("${}", self.cost)
    }

    /// Seals the details into a booking once payment has been settled.
    pub fn into_booking(self, method: PaymentMethod, status: PaymentStatus, now: DateTime<Utc>) -> Booking {
        Booking {
            details: self,
            timestamp: now,
            payment_method: method,
            payment_status: status,
        }
    }
}

/// A confirmed and settled request. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    details: BookingDetails,
    timestamp: DateTime<Utc>,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
}

impl Booking {
    pub fn details(&self) -> &BookingDetails {
        &self.details
    }

    pub fn request_id(&self) -> &str {
        &self.details.request_id
    }

    pub fn service(&self) -> &str {
        &self.details.service
    }

    pub fn items(&self) -> &[String] {
        &self.details.items
    }

    pub fn turnaround(&self) -> &str {
        &self.details.turnaround
    }

    pub fn cost(&self) -> u32 {
        self.details.cost
    }

    pub fn estimated_time(&self) -> &str {
        &self.details.estimated_time
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Request {} - {}", self.request_id(), self.service())?;
        if !self.items().is_empty() {
            writeln!(f, "  Items: {}", self.items().iter().join(", "))?;
        }
        writeln!(f, "  Turnaround: {}", self.turnaround())?;
        writeln!(f, "  Estimated time: {}", self.estimated_time())?;
        writeln!(f, "  Cost: {}", self.details.cost_label())?;
        write!(
            f,
            "  Payment: {} ({})",
            self.payment_method.as_str(),
            self.payment_status.as_str()
        )
    }
}

/// Bookings made during a session, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, booking: Booking) {
        log::info!(
            "Booked {} ({}, ${}, {})",
            booking.request_id(),
            booking.service(),
            booking.cost(),
            booking.payment_status().as_str()
        );
        self.bookings.insert(0, booking);
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn find(&self, request_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.request_id() == request_id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
