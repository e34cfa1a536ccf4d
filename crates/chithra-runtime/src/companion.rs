//! Mood-aware companion messages
//!
//! Picks a prompt for the current mood and asks a text backend for a short
//! reply, retrying with exponential backoff. Only one request may be in
//! flight at a time. The network client itself belongs to the host.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use chithra_core::{ChithraResult, Mood};

/// Shown while a request is in flight
pub const THINKING_TEXT: &str = "Chithraguptan is thinking...";
/// Backend answered without any candidate text
pub const NO_ANSWER_TEXT: &str = "I'm not sure what to say right now.";
/// Every attempt failed
pub const ERROR_TEXT: &str = "An error occurred. Please try again.";

/// Prompt sent for a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanionPrompt(&'static str);

impl CompanionPrompt {
    pub fn for_mood(mood: Mood) -> Self {
        Self(match mood {
            Mood::Bored => "Provide a fun and engaging activity for a pet that seems bored. The response should be concise and no more than 20 words.",
            Mood::Sad => "Generate a kind and uplifting message to comfort a pet that is sad. The response should be concise and no more than 20 words.",
            Mood::Angry => "Offer a single, calming technique or piece of advice to soothe an angry pet. The response should be concise and no more than 20 words.",
            Mood::Content | Mood::Playful => "Generate a short, playful, and fun fact about a lizard or gecko.",
        })
    }

    pub fn text(&self) -> &'static str {
        self.0
    }
}

/// Exponential backoff schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Wait after failed attempt `attempt` (1-based); `None` after the last one
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt >= self.max_attempts {
            return None;
        }
        let factor = 1u64.checked_shl(attempt - 1).unwrap_or(u64::MAX);
        Some(Duration::from_millis(self.initial_delay_ms.saturating_mul(factor)))
    }
}

/// Admits one request at a time
#[derive(Debug, Clone, Default)]
pub struct CompanionGate {
    busy: Arc<AtomicBool>,
}

/// Held while a request is in flight; reopens the gate on drop
#[derive(Debug)]
pub struct CompanionPermit {
    busy: Arc<AtomicBool>,
}

impl CompanionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> Option<CompanionPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(CompanionPermit {
            busy: Arc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for CompanionPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Text generation service
pub trait CompanionBackend {
    /// `Ok(None)` when the service answered without any candidate
    fn generate(&self, prompt: &str) -> impl Future<Output = ChithraResult<Option<String>>> + Send;
}

/// Outcome of a companion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionReply {
    Answer(String),
    NoAnswer,
    Failed { attempts: u32 },
}

impl CompanionReply {
    /// Text to show the user
    pub fn text(&self) -> &str {
        match self {
            CompanionReply::Answer(text) => text,
            CompanionReply::NoAnswer => NO_ANSWER_TEXT,
            CompanionReply::Failed { .. } => ERROR_TEXT,
        }
    }
}

/// Ask the backend about the current mood
///
/// Returns `None` without contacting the backend when another request
/// holds the gate.
pub async fn ask<B: CompanionBackend>(
    backend: &B,
    gate: &CompanionGate,
    mood: Mood,
    policy: RetryPolicy,
) -> Option<CompanionReply> {
    let _permit = gate.try_begin()?;
    let prompt = CompanionPrompt::for_mood(mood);
    debug!(mood = mood.as_str(), "companion request");

    let mut attempt = 0;
    loop {
        attempt += 1;
        match backend.generate(prompt.text()).await {
            Ok(Some(text)) => return Some(CompanionReply::Answer(text)),
            Ok(None) => return Some(CompanionReply::NoAnswer),
            Err(e) => {
                warn!(attempt, error = %e, "companion request failed");
                match policy.delay_after(attempt) {
                    Some(delay) => tokio::time::sleep(delay).await,
                    None => return Some(CompanionReply::Failed { attempts: attempt }),
                }
            }
        }
    }
}
