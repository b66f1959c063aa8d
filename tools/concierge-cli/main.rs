use clap::Parser;
use concierge::catalog::CatalogArtifact;
use concierge::chat::SessionView;
use concierge::data::UtteranceSet;
use concierge::voice::CaptureEvent;
use concierge::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

/// A predictive flow engine for hotel concierge requests
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to a JSON file of utterances to classify
    utterances_path: Option<String>,

    /// Catalog to use instead of the built-in one (`.json` or a compiled `.bin` artifact)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Write the loaded catalog as a compiled artifact to this path
    #[arg(long)]
    export: Option<String>,

    /// Replay a file of chat lines and commands
    #[arg(short, long)]
    script: Option<String>,

    /// Run in interactive mode and chat with the concierge
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let load_start = Instant::now();
    let catalog = load_catalog(cli.catalog.as_deref());
    let load_duration = load_start.elapsed();
    println!(
        "Catalog loaded: {} flows, {} prediction rules in {:?}",
        catalog.flows().len(),
        catalog.rules().len(),
        load_duration
    );

    if let Some(path) = &cli.export {
        CatalogArtifact::new(catalog.clone())
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to export catalog: {}", e)));
        println!("Catalog artifact written to '{}'", path);
    }

    let catalog = Arc::new(catalog);
    if cli.human {
        run_interactive(catalog);
    } else if let Some(script) = cli.script {
        run_script(catalog, &script);
    } else {
        run_batch(catalog, cli.utterances_path);
    }
}

fn load_catalog(path: Option<&str>) -> Catalog {
    let Some(path) = path else {
        return Catalog::builtin();
    };
    let loaded = if path.ends_with(".json") {
        Catalog::from_json_file(path)
    } else {
        CatalogArtifact::from_file(path).map(CatalogArtifact::into_catalog)
    };
    loaded.unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog '{}': {}", path, e)))
}

/// Classifies every utterance and compares it with its expected flow.
fn run_batch(catalog: Arc<Catalog>, utterances_path: Option<String>) {
    let total_start = Instant::now();

    let set = match utterances_path {
        Some(path) => UtteranceSet::from_file(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load utterances from '{}': {}", path, e))),
        None => {
            println!("No utterance file provided. Using the built-in examples.");
            UtteranceSet::default()
        }
    };

    let engine = PredictiveEngine::new(catalog.clone());
    let matcher = IntentMatcher::new(catalog);

    println!("\nClassifying {} utterances...", set.utterances().len());
    let eval_start = Instant::now();
    let mut predicted = 0;
    let mut agreed = 0;
    let mut labelled = 0;
    for utterance in set.utterances() {
        let prediction = engine.predict(&utterance.text);
        let flow = prediction.as_ref().map(|p| p.flow_id);
        if flow.is_some() {
            predicted += 1;
        }
        if utterance.expected_flow.is_some() {
            labelled += 1;
            if utterance.expected_flow == flow {
                agreed += 1;
            }
        }

        println!("\n\"{}\"", utterance.text);
        match &prediction {
            Some(p) => println!("  -> Flow: {} ({})", p.flow_id, p.follow_up_question),
            None => println!("  -> No prediction"),
        }
        if let Some(intent) = matcher.match_intent(&utterance.text) {
            println!(
                "  -> Intent: {} (confidence {:.2})",
                matcher.format_voice_input(&intent),
                intent.confidence
            );
        }
    }
    let eval_duration = eval_start.elapsed();

    println!("\n--- Classification Summary ---");
    println!("Utterances:           {}", set.utterances().len());
    println!("Predicted:            {}", predicted);
    println!("Matched expectation:  {}/{}", agreed, labelled);

    println!("\n--- Performance Summary ---");
    println!("Classification:       {:?}", eval_duration);
    println!("-----------------------------");
    println!("Total Execution:      {:?}", total_start.elapsed());
    println!();
}

fn run_script(catalog: Arc<Catalog>, path: &str) {
    let script = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read script '{}': {}", path, e)));
    let mut session = ChatSession::new(catalog);

    for line in script.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')) {
        println!("> {}", line);
        if !apply_line(&mut session, line) {
            break;
        }
    }
}

/// Runs the CLI in an interactive, human-friendly mode.
fn run_interactive(catalog: Arc<Catalog>) {
    println!("--- Concierge Interactive Mode ---");
    println!("Type a request, or /help for widget commands.");
    let mut session = ChatSession::new(catalog);
    print_view(&session, &session.view());

    while let Some(line) = prompt_for_input("You") {
        if line.is_empty() {
            continue;
        }
        if !apply_line(&mut session, &line) {
            break;
        }
    }
}

/// Applies one chat line or command. Returns `false` when the session should end.
fn apply_line(session: &mut ChatSession, line: &str) -> bool {
    let Some(command) = line.strip_prefix('/') else {
        let transition = session.input_changed(line);
        report(session, transition);
        return true;
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let interaction = match name {
        "quit" | "exit" => return false,
        "help" => {
            print_help();
            return true;
        }
        "reset" => {
            session.reset();
            print_view(session, &session.view());
            return true;
        }
        "bookings" => {
            print_bookings(session);
            return true;
        }
        "send" => {
            let transition = session.send_message();
            report(session, transition);
            return true;
        }
        "scan" => {
            let transition = session.scan_result(&args.join(" "));
            report(session, transition);
            return true;
        }
        "voice" => {
            run_voice(session, &args.join(" "));
            return true;
        }
        "pay" => {
            let Some(method) = args.first().and_then(|m| PaymentMethod::from_value(m)) else {
                println!("Usage: /pay card|reception");
                return true;
            };
            let transition = session.choose_payment(method);
            report(session, transition);
            return true;
        }
        _ => parse_interaction(name, &args),
    };

    match interaction {
        Some(interaction) => {
            let transition = session.interact(interaction);
            report(session, transition);
        }
        None => println!("Unrecognized command '/{}'. Type /help.", command),
    }
    true
}

fn parse_interaction(name: &str, args: &[&str]) -> Option<Interaction> {
    let component = args.first()?.parse::<usize>().ok()?;
    let value = args.get(1).map(|v| v.to_string());
    let interaction = match name {
        "card" => Interaction::PickCard {
            component,
            card_id: value?,
        },
        "inc" => Interaction::Increment {
            component,
            item_id: value?,
        },
        "dec" => Interaction::Decrement {
            component,
            item_id: value?,
        },
        "add" => Interaction::Add { component },
        "choose" => Interaction::Choose {
            component,
            value: value?,
        },
        "check" | "uncheck" => Interaction::Toggle {
            component,
            value: value?,
            checked: name == "check",
        },
        "slide" => Interaction::Slide {
            component,
            value: value?.parse().ok()?,
        },
        "time" => Interaction::SetTime {
            component,
            value: value?,
        },
        "date" => Interaction::SetDate {
            component,
            value: value?,
        },
        "confirm" => Interaction::Confirm { component },
        _ => return None,
    };
    Some(interaction)
}

/// Speaks `text` through a scripted recognizer and feeds the transcript to the session.
fn run_voice(session: &mut ChatSession, text: &str) {
    let capture = if text.is_empty() {
        ScriptedCapture::new(vec![CaptureEvent::Error(VoiceError::NoSpeech)])
    } else {
        ScriptedCapture::saying(text)
    };
    let mut voice = VoiceInput::new(capture);
    voice.toggle();

    match voice.pump() {
        Some(transcript) => {
            println!("(heard: \"{}\")", transcript);
            let transition = session.voice_transcript(&transcript);
            report(session, transition);
        }
        None => {
            if let Some(error) = voice.error() {
                session.voice_error(error.clone());
            }
            print_view(session, &session.view().with_voice(voice.state()));
        }
    }
}

fn report(session: &mut ChatSession, transition: Transition) {
    match transition {
        Transition::Ignored => println!("(ignored)"),
        Transition::ProcessingPayment { delay } => {
            println!("Processing payment...");
            std::thread::sleep(delay);
            let completed = session.complete_payment();
            report(session, completed);
            return;
        }
        Transition::Booked(booking) => {
            println!("\n--- Booking Confirmed ---");
            println!("{}", booking);
        }
        Transition::Sent => {
            if let Some(reply) = session.log().last() {
                println!("Bot: {}", reply.content);
            }
        }
        _ => {}
    }
    print_view(session, &session.view());
}

fn print_view(session: &ChatSession, view: &SessionView) {
    println!();
    if !view.input.is_empty() {
        println!("Input:  {}", view.input);
    }
    println!("Prompt: {}", view.placeholder);
    if !view.hint.is_empty() {
        println!("Hint:   {}", view.hint);
    }
    if !view.components.is_empty() {
        println!("{}", TextRenderer::format(session.renderer()));
    }
}

fn print_bookings(session: &ChatSession) {
    let ledger = session.ledger();
    if ledger.is_empty() {
        println!("No bookings yet.");
        return;
    }
    println!("\n--- Bookings ({}) ---", ledger.len());
    for booking in ledger.bookings() {
        println!("{}\n", booking);
    }
}

fn print_help() {
    println!("Plain text updates the request line. Commands:");
    println!("  /card <i> <id>        pick a service card");
    println!("  /inc <i> <id>         increase a menu or item counter");
    println!("  /dec <i> <id>         decrease a menu or item counter");
    println!("  /add <i>              add the counted items");
    println!("  /choose <i> <value>   choose a radio option");
    println!("  /check <i> <value>    check a box (/uncheck to clear)");
    println!("  /slide <i> <n>        move a slider");
    println!("  /time <i> HH:MM       set a time");
    println!("  /date <i> YYYY-MM-DD  set a date");
    println!("  /confirm <i>          confirm the request");
    println!("  /pay card|reception   choose how to pay");
    println!("  /voice <text>         speak a request");
    println!("  /scan <text>          scan a QR code");
    println!("  /send                 send the line as a message");
    println!("  /bookings             list bookings");
    println!("  /reset                start over");
    println!("  /quit                 exit");
}

/// A helper function to prompt the user and read a line of input. `None` at end of input.
fn prompt_for_input(prompt_text: &str) -> Option<String> {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to flush stdout: {}", e)));

    let read = io::stdin()
        .read_line(&mut line)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read line: {}", e)));
    (read > 0).then(|| line.trim().to_string())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
