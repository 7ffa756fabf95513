//! Entry overlay state machine and its timeline.
//!
//! The controller never touches the DOM. It records what should happen and
//! when; the frame loop polls it with the current time and applies the
//! returned events.
use crate::constants::{EXIT_TRANSITION_MS, REVEAL_BASE_DELAY_MS, REVEAL_STEP_MS};

/// DOM hooks and timings for the entry overlay.
#[derive(Clone, Debug)]
pub struct EntryConfig {
    pub overlay_id: &'static str,
    pub canvas_id: &'static str,
    pub button_id: &'static str,
    pub site_id: &'static str,
    pub reveal_selector: &'static str,
    pub avatar_selector: &'static str,
    pub exit_class: &'static str,
    pub will_reveal_class: &'static str,
    pub reveal_class: &'static str,
    pub exit_delay_ms: f64,
    pub reveal_base_ms: f64,
    pub reveal_step_ms: f64,
    pub avatar_candidates: &'static [&'static str],
}

pub const AVATAR_CANDIDATES: &[&str] = &[
    "assets/avatar.jpg",
    "assets/avatar.jpeg",
    "assets/avatar.png",
];

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            overlay_id: "entry-overlay",
            canvas_id: "orbits",
            button_id: "enter-btn",
            site_id: "site",
            reveal_selector: ".nav, .hero > :not(.name-zoom), .section-title, .section p, .cta-row, .socials, .quote",
            avatar_selector: ".avatar-ring img",
            exit_class: "overlay-exit",
            will_reveal_class: "will-reveal",
            reveal_class: "reveal",
            exit_delay_ms: EXIT_TRANSITION_MS,
            reveal_base_ms: REVEAL_BASE_DELAY_MS,
            reveal_step_ms: REVEAL_STEP_MS,
            avatar_candidates: AVATAR_CANDIDATES,
        }
    }
}

/// Keys that dismiss the overlay.
#[inline]
pub fn is_enter_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntryState {
    Visible,
    Exiting { since_ms: f64 },
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryEvent {
    /// Exit transition finished: remove the overlay and show the site.
    Dismiss,
    /// Add the reveal class to the i-th reveal target.
    Reveal(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scheduled {
    pub due_ms: f64,
    pub event: EntryEvent,
}

/// Pending events ordered by due time; ties keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    queue: Vec<Scheduled>,
}

impl Timeline {
    pub fn schedule(&mut self, due_ms: f64, event: EntryEvent) {
        let at = self.queue.partition_point(|s| s.due_ms <= due_ms);
        self.queue.insert(at, Scheduled { due_ms, event });
    }

    /// Remove and return every event due at or before `now_ms`.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<EntryEvent> {
        let n = self.queue.partition_point(|s| s.due_ms <= now_ms);
        self.queue.drain(..n).map(|s| s.event).collect()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.queue.first().map(|s| s.due_ms)
    }

    pub fn pending(&self) -> &[Scheduled] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

pub struct EntryController {
    state: EntryState,
    timeline: Timeline,
    exit_delay_ms: f64,
    reveal_base_ms: f64,
    reveal_step_ms: f64,
}

impl EntryController {
    pub fn new(config: &EntryConfig) -> Self {
        Self {
            state: EntryState::Visible,
            timeline: Timeline::default(),
            exit_delay_ms: config.exit_delay_ms,
            reveal_base_ms: config.reveal_base_ms,
            reveal_step_ms: config.reveal_step_ms,
        }
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Start the exit transition. Only the first trigger counts; returns
    /// whether this call started it.
    pub fn trigger(&mut self, now_ms: f64) -> bool {
        if self.state != EntryState::Visible {
            log::debug!("[entry] trigger ignored in state {:?}", self.state);
            return false;
        }
        self.state = EntryState::Exiting { since_ms: now_ms };
        self.timeline
            .schedule(now_ms + self.exit_delay_ms, EntryEvent::Dismiss);
        log::info!("[entry] exit triggered");
        true
    }

    /// Events due at `now_ms`, in order. Seeing `Dismiss` moves the
    /// controller to `Revealed`.
    pub fn poll(&mut self, now_ms: f64) -> Vec<EntryEvent> {
        let due = self.timeline.drain_due(now_ms);
        if due.contains(&EntryEvent::Dismiss) {
            self.state = EntryState::Revealed;
        }
        due
    }

    /// Schedule `count` reveals with delays base, base + step, base + 2·step, ...
    pub fn schedule_reveals(&mut self, count: usize, now_ms: f64) {
        for i in 0..count {
            let delay = self.reveal_base_ms + self.reveal_step_ms * i as f64;
            self.timeline.schedule(now_ms + delay, EntryEvent::Reveal(i));
        }
    }

    /// Nothing left to do: overlay gone and every reveal applied.
    pub fn is_done(&self) -> bool {
        self.state == EntryState::Revealed && self.timeline.is_empty()
    }
}
