use clap::Parser;
use concierge::catalog::FlowId;
use concierge::data::{Utterance, UtteranceSet};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate guest utterances for the concierge classifier
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_utterances.json")]
    output: String,

    /// How many utterances to generate
    #[arg(short, long, default_value_t = 50)]
    count: usize,

    /// Share of utterances that should match no flow, between 0 and 1
    #[arg(long, default_value_t = 0.1)]
    noise: f64,
}

const OPENERS: &[&str] = &["", "I need ", "Can I get ", "Please arrange ", "I'd like ", "Could you send "];

const FOOD: &[&str] = &[
    "vegetarian breakfast",
    "non-veg dinner",
    "something to eat",
    "a veg lunch",
    "room dining",
    "a meal for two",
    "non-vegetarian snacks",
];

const LAUNDRY: &[&str] = &[
    "laundry pickup",
    "my shirts pressed",
    "dry cleaning for a suit",
    "to wash clothes",
    "pressing for my clothes",
];

const CLEANING: &[&str] = &["housekeeping", "the room cleaned", "someone to tidy up", "room service"];

const TIMINGS: &[&str] = &["", " today", " tomorrow", " asap", " in 2 hours", " by tomorrow"];

const NOISE: &[&str] = &[
    "what is the wifi password",
    "where is the gym",
    "checkout time?",
    "ok",
    "thanks",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.noise) {
        eprintln!("Error: --noise ({}) must be between 0 and 1", cli.noise);
        std::process::exit(1);
    }

    println!("Generating {} utterances (noise share {:.2})...", cli.count, cli.noise);

    let utterances = (0..cli.count)
        .map(|_| generate_utterance(&mut rng, cli.noise))
        .collect::<Vec<_>>();
    let labelled = utterances.iter().filter(|u| u.expected_flow.is_some()).count();

    let set = UtteranceSet { utterances };
    let json_output = serde_json::to_string_pretty(&set)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} utterances ({} labelled) and saved them to '{}'",
        cli.count, labelled, cli.output
    );

    Ok(())
}

fn generate_utterance(rng: &mut ThreadRng, noise: f64) -> Utterance {
    if rng.random_bool(noise) {
        let text = NOISE.choose(rng).copied().unwrap_or("hello");
        return Utterance::new(text, None);
    }

    let (flow, phrases) = match rng.random_range(0..3) {
        0 => (FlowId::FoodService, FOOD),
        1 => (FlowId::LaundryService, LAUNDRY),
        _ => (FlowId::RoomCleaning, CLEANING),
    };
    let opener = OPENERS.choose(rng).copied().unwrap_or("");
    let phrase = phrases.choose(rng).copied().unwrap_or_default();
    let timing = TIMINGS.choose(rng).copied().unwrap_or("");

    Utterance::new(&format!("{}{}{}", opener, phrase, timing), Some(flow))
}
