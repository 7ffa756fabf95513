// Host-side tests for the avatar fallback probe.
// Loaders are mocked; futures are driven with pollster.

use orbit_entry::avatar::*;
use orbit_entry::entry::AVATAR_CANDIDATES;
use std::cell::{Cell, RefCell};

/// Succeeds for the listed bare paths and records every URL it was asked
/// to load.
struct MockLoader {
    succeeds: Vec<&'static str>,
    attempts: RefCell<Vec<String>>,
    cancel_on_load: Option<ProbeHandle>,
    cancel_after_failure: Option<ProbeHandle>,
}

impl MockLoader {
    fn new(succeeds: &[&'static str]) -> Self {
        Self {
            succeeds: succeeds.to_vec(),
            attempts: RefCell::new(Vec::new()),
            cancel_on_load: None,
            cancel_after_failure: None,
        }
    }

    fn attempted_paths(&self) -> Vec<String> {
        self.attempts
            .borrow()
            .iter()
            .map(|u| u.split('?').next().unwrap_or_default().to_string())
            .collect()
    }
}

impl ImageLoader for MockLoader {
    async fn load(&self, src: &str) -> bool {
        self.attempts.borrow_mut().push(src.to_string());
        if let Some(h) = &self.cancel_on_load {
            h.cancel();
        }
        let bare = src.split('?').next().unwrap_or_default();
        let ok = self.succeeds.iter().any(|s| *s == bare);
        if !ok {
            if let Some(h) = &self.cancel_after_failure {
                h.cancel();
            }
        }
        ok
    }
}

fn probe(loader: &MockLoader, handle: &ProbeHandle) -> Option<String> {
    pollster::block_on(probe_first(loader, AVATAR_CANDIDATES, || 1234, handle))
}

#[test]
fn first_candidate_wins_when_it_loads() {
    let loader = MockLoader::new(&["assets/avatar.jpg", "assets/avatar.png"]);
    let got = probe(&loader, &ProbeHandle::new());
    assert_eq!(got.as_deref(), Some("assets/avatar.jpg"));
    assert_eq!(loader.attempted_paths(), vec!["assets/avatar.jpg"]);
}

#[test]
fn falls_through_in_fixed_order_and_stops_at_success() {
    let loader = MockLoader::new(&["assets/avatar.jpeg"]);
    let got = probe(&loader, &ProbeHandle::new());
    assert_eq!(got.as_deref(), Some("assets/avatar.jpeg"));
    assert_eq!(
        loader.attempted_paths(),
        vec!["assets/avatar.jpg", "assets/avatar.jpeg"]
    );
}

#[test]
fn all_failures_leave_source_unchanged() {
    let loader = MockLoader::new(&[]);
    let mut src = String::from("assets/me.jpg");
    if let Some(found) = probe(&loader, &ProbeHandle::new()) {
        src = found;
    }
    assert_eq!(src, "assets/me.jpg");
    assert_eq!(
        loader.attempted_paths(),
        vec!["assets/avatar.jpg", "assets/avatar.jpeg", "assets/avatar.png"]
    );
}

#[test]
fn attempts_carry_cache_busting_query() {
    let loader = MockLoader::new(&["assets/avatar.png"]);
    probe(&loader, &ProbeHandle::new());
    let attempts = loader.attempts.borrow();
    assert_eq!(attempts.len(), 3);
    for url in attempts.iter() {
        assert!(url.ends_with("?v=1234"), "missing cache buster: {url}");
    }
    assert_eq!(cache_busted("a.png", 7), "a.png?v=7");
}

#[test]
fn cancelled_before_start_tries_nothing() {
    let loader = MockLoader::new(&["assets/avatar.jpg"]);
    let handle = ProbeHandle::new();
    handle.cancel();
    assert_eq!(probe(&loader, &handle), None);
    assert!(loader.attempts.borrow().is_empty());
}

#[test]
fn cancel_during_load_discards_result_and_stops() {
    let handle = ProbeHandle::new();
    let mut loader = MockLoader::new(&["assets/avatar.jpg"]);
    loader.cancel_on_load = Some(handle.clone());
    assert_eq!(probe(&loader, &handle), None);
    assert_eq!(loader.attempts.borrow().len(), 1);
    assert!(handle.is_cancelled());
}

#[test]
fn cancel_after_failed_attempt_skips_remaining_candidates() {
    let handle = ProbeHandle::new();
    let mut loader = MockLoader::new(&["assets/avatar.jpeg", "assets/avatar.png"]);
    loader.cancel_after_failure = Some(handle.clone());
    assert_eq!(probe(&loader, &handle), None);
    assert_eq!(loader.attempted_paths(), vec!["assets/avatar.jpg"]);
}

#[test]
fn each_attempt_gets_a_fresh_stamp() {
    let loader = MockLoader::new(&["assets/avatar.png"]);
    let clock = Cell::new(100u64);
    let stamp = || {
        clock.set(clock.get() + 1);
        clock.get()
    };
    let got = pollster::block_on(probe_first(
        &loader,
        AVATAR_CANDIDATES,
        stamp,
        &ProbeHandle::new(),
    ));
    assert_eq!(got.as_deref(), Some("assets/avatar.png"));
    assert_eq!(
        *loader.attempts.borrow(),
        vec![
            "assets/avatar.jpg?v=101",
            "assets/avatar.jpeg?v=102",
            "assets/avatar.png?v=103",
        ]
    );
}

#[test]
fn probe_only_needed_for_broken_images() {
    assert!(!needs_probe(true, 128));
    assert!(needs_probe(true, 0));
    assert!(needs_probe(false, 0));
    assert!(needs_probe(false, 64));
}
