//! Set lifecycle events.
//!
//! Policy hooks publish completion and pass transitions on a [`ScoringBus`];
//! the host drains the paired receiver.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, SendError, Sender};

pub const ASSESSMENTS_COMPLETE: &str = "assessments:complete";
pub const ASSESSMENTS_PASSED: &str = "assessments:passed";
pub const BUCKET_COMPLETE: &str = "bucket:complete";
pub const BUCKET_PASSED: &str = "bucket:passed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringEvent {
    pub ts: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub set_id: String,
    pub set_type: String,
}

impl ScoringEvent {
    pub fn with_now(
        event_type: impl Into<String>,
        set_id: impl Into<String>,
        set_type: impl Into<String>,
    ) -> Self {
        Self {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event_type: event_type.into(),
            set_id: set_id.into(),
            set_type: set_type.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringBus {
    sender: Sender<ScoringEvent>,
}

impl ScoringBus {
    pub fn new_pair() -> (Self, Receiver<ScoringEvent>) {
        let (sender, receiver) = channel();
        (Self { sender }, receiver)
    }

    pub fn emit(&self, event: ScoringEvent) -> Result<(), SendError<ScoringEvent>> {
        self.sender.send(event)
    }
}
