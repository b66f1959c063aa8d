use super::booking::Booking;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Set on the confirmation message of a booking.
    pub booking: Option<Booking>,
}

/// The conversation transcript, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: &str) -> &ChatMessage {
        self.push(Role::User, content, None)
    }

    pub fn push_bot(&mut self, content: &str) -> &ChatMessage {
        self.push(Role::Bot, content, None)
    }

    pub fn push_booking(&mut self, content: &str, booking: Booking) -> &ChatMessage {
        self.push(Role::Bot, content, Some(booking))
    }

    fn push(&mut self, role: Role, content: &str, booking: Option<Booking>) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
            booking,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
