use crate::catalog::FlowId;
use serde::{Deserialize, Serialize};
use std::fs;

/// One guest request, optionally labelled with the flow it should start.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    #[serde(default)]
    pub expected_flow: Option<FlowId>,
}

impl Utterance {
    pub fn new(text: &str, expected_flow: Option<FlowId>) -> Self {
        Self {
            text: text.to_string(),
            expected_flow,
        }
    }
}

/// A batch of guest requests, matching the JSON written by `utterance-gen`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UtteranceSet {
    pub utterances: Vec<Utterance>,
}

impl UtteranceSet {
    /// Load utterances from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// A small built-in set used when no file is provided.
    pub fn default() -> Self {
        Self {
            utterances: vec![
                Utterance::new("I need", Some(FlowId::GeneralInquiry)),
                Utterance::new("vegetarian breakfast", Some(FlowId::FoodService)),
                Utterance::new("I'm hungry", Some(FlowId::FoodService)),
                Utterance::new("iron my shirts", Some(FlowId::LaundryService)),
                Utterance::new("laundry pickup please", Some(FlowId::LaundryService)),
                Utterance::new("please tidy the room", Some(FlowId::RoomCleaning)),
                Utterance::new("what is the wifi password", None),
            ],
        }
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }
}
