//! Highlight events and which one is "now showing".

use serde::{Deserialize, Serialize};

/// A scripted highlight (made shot, turnover, ...) anchored at a playback time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub start_time_seconds: f64,
    pub kind: String,
    pub actor_id: String,
    pub outcome: String,
}

/// Banner colouring derived from an event's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeTone {
    Positive,
    Negative,
    Neutral,
}

impl Event {
    pub fn new(
        start_time_seconds: f64,
        kind: impl Into<String>,
        actor_id: impl Into<String>,
        outcome: impl Into<String>,
    ) -> Self {
        Self {
            start_time_seconds,
            kind: kind.into(),
            actor_id: actor_id.into(),
            outcome: outcome.into(),
        }
    }

    pub fn tone(&self) -> OutcomeTone {
        match self.outcome.to_ascii_lowercase().as_str() {
            "made" | "completed" => OutcomeTone::Positive,
            "blocked" | "lost" => OutcomeTone::Negative,
            _ => OutcomeTone::Neutral,
        }
    }
}

/// Timeline state for one tick. Derived from the clock value alone; nothing is latched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineState<'a> {
    Idle,
    Active(&'a Event),
}

/// Instruction for the host to move its playback clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeekRequest {
    pub target_seconds: f64,
}

#[derive(Debug, Clone, Default)]
pub struct EventTimeline {
    events: Vec<Event>,
    tolerance_seconds: f64,
}

impl EventTimeline {
    pub fn new(events: Vec<Event>, tolerance_seconds: f64) -> Self {
        Self {
            events,
            tolerance_seconds,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The event closest to `time_seconds` among those strictly within tolerance.
    /// Ties go to the earlier entry in the list.
    pub fn active_event(&self, time_seconds: f64) -> Option<&Event> {
        if !time_seconds.is_finite() {
            return None;
        }
        let mut best: Option<(&Event, f64)> = None;
        for event in &self.events {
            let distance = (event.start_time_seconds - time_seconds).abs();
            if distance.is_nan() || distance >= self.tolerance_seconds {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((event, distance));
            }
        }
        best.map(|(event, _)| event)
    }

    pub fn state(&self, time_seconds: f64) -> TimelineState<'_> {
        match self.active_event(time_seconds) {
            Some(event) => TimelineState::Active(event),
            None => TimelineState::Idle,
        }
    }

    /// Ask the host to jump to `event`. Rendering at the new time is an ordinary tick.
    pub fn seek(&self, event: &Event) -> SeekRequest {
        SeekRequest {
            target_seconds: event.start_time_seconds,
        }
    }
}
