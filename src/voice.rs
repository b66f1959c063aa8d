//! Voice capture state, driven by a pluggable speech recognizer.
use crate::error::VoiceError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Something a speech recognizer reports while capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Interim(String),
    Final(String),
    Error(VoiceError),
    /// Capture stopped, by request or after silence.
    End,
}

/// A platform speech recognizer.
pub trait SpeechCapture {
    fn is_supported(&self) -> bool;

    fn start(&mut self) -> Result<(), VoiceError>;

    fn stop(&mut self);

    /// The next pending event, or `None` when nothing is queued.
    fn next_event(&mut self) -> Option<CaptureEvent>;
}

/// Replays a fixed list of events. Used by the CLI and in tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCapture {
    supported: bool,
    running: bool,
    script: VecDeque<CaptureEvent>,
    pending: VecDeque<CaptureEvent>,
}

impl ScriptedCapture {
    /// A recognizer that will replay `events` once started, followed by `End`.
    pub fn new(events: Vec<CaptureEvent>) -> Self {
        Self {
            supported: true,
            running: false,
            script: events.into(),
            pending: VecDeque::new(),
        }
    }

    /// Speaks `text` as a single final result.
    pub fn saying(text: &str) -> Self {
        Self::new(vec![CaptureEvent::Final(text.to_string())])
    }

    pub fn unsupported() -> Self {
        Self::default()
    }
}

impl SpeechCapture for ScriptedCapture {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(&mut self) -> Result<(), VoiceError> {
        if !self.supported {
            return Err(VoiceError::Unsupported);
        }
        if self.running {
            return Err(VoiceError::StartFailed);
        }
        self.running = true;
        self.pending.extend(self.script.drain(..));
        self.pending.push_back(CaptureEvent::End);
        Ok(())
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.pending.retain(|e| matches!(e, CaptureEvent::Final(_)));
            self.pending.push_back(CaptureEvent::End);
        }
    }

    fn next_event(&mut self) -> Option<CaptureEvent> {
        let event = self.pending.pop_front()?;
        if event == CaptureEvent::End {
            self.running = false;
        }
        Some(event)
    }
}

/// Observable voice state, as shown next to the input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceState {
    pub listening: bool,
    pub processing: bool,
    /// Final text accumulated during the current capture.
    pub transcript: String,
    pub interim: String,
    #[serde(skip)]
    pub error: Option<VoiceError>,
    pub supported: bool,
}

pub struct VoiceInput<C: SpeechCapture> {
    capture: C,
    state: VoiceState,
}

impl<C: SpeechCapture> VoiceInput<C> {
    pub fn new(capture: C) -> Self {
        let supported = capture.is_supported();
        Self {
            capture,
            state: VoiceState {
                supported,
                ..VoiceState::default()
            },
        }
    }

    pub fn state(&self) -> &VoiceState {
        &self.state
    }

    pub fn error(&self) -> Option<&VoiceError> {
        self.state.error.as_ref()
    }

    /// Starts a capture. A capture already running is stopped first and its
    /// final text is kept for the new one.
    pub fn start(&mut self) {
        if !self.state.supported {
            self.state.error = Some(VoiceError::Unsupported);
            return;
        }
        if self.state.listening {
            log::debug!("Restarting voice capture");
            self.capture.stop();
            self.drain_events();
        }
        match self.capture.start() {
            Ok(()) => {
                self.state.listening = true;
                self.state.error = None;
            }
            Err(e) => {
                log::warn!("Voice capture failed to start: {}", e);
                self.state.error = Some(e);
            }
        }
    }

    pub fn stop(&mut self) {
        self.capture.stop();
    }

    pub fn toggle(&mut self) {
        if self.state.listening {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Drops the transcript and any error.
    pub fn clear(&mut self) {
        self.state.transcript.clear();
        self.state.interim.clear();
        self.state.error = None;
    }

    /// Processes every queued capture event.
    ///
    /// Once capture has ended with a non-empty transcript, the transcript is
    /// returned and cleared, so each utterance is delivered exactly once.
    pub fn pump(&mut self) -> Option<String> {
        self.drain_events();

        if self.state.listening || self.state.transcript.is_empty() {
            return None;
        }
        let transcript = std::mem::take(&mut self.state.transcript);
        self.clear();
        Some(transcript)
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.capture.next_event() {
            match event {
                CaptureEvent::Interim(text) => self.state.interim = text,
                CaptureEvent::Final(text) => {
                    self.state.transcript.push_str(&text);
                    self.state.interim.clear();
                    self.state.processing = true;
                }
                CaptureEvent::Error(e) => {
                    log::warn!("Voice capture error: {}", e);
                    self.state.error = Some(e);
                    self.state.listening = false;
                    self.state.processing = false;
                }
                CaptureEvent::End => {
                    self.state.listening = false;
                    self.state.processing = false;
                    self.state.interim.clear();
                }
            }
        }
    }
}
