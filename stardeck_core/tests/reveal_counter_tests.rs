//! Integration tests for reveal-triggered counters: the observer's fired set
//! is what guarantees a counter runs at most once per element.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use stardeck_core::counter::CounterAnimation;
use stardeck_core::reveal::RevealObserver;
use stardeck_core::tuning::{self, CounterStyle};

/// The wiring every stats section uses: when a watched id fires, start its
/// counter once.
fn drive(
    observer: &mut RevealObserver,
    counters: &mut HashMap<usize, CounterAnimation>,
    targets: &[(usize, f64, bool)],
    samples: &[(usize, f32)],
    now: Instant,
) {
    observer.update(samples, now);
    for (id, value, large) in targets {
        if observer.has_fired(*id) && !counters.contains_key(id) {
            counters.insert(
                *id,
                CounterAnimation::new(CounterStyle::Deck, *value, *large, now),
            );
        }
    }
}

#[test]
fn test_counters_start_on_visibility_and_finish_exact() {
    let start = Instant::now();
    let mut observer = RevealObserver::new(tuning::DECK.reveal_threshold, Duration::ZERO);
    let targets = [(0, 2_500_000.0, true), (1, 4.5, false), (2, 1234.0, false)];
    for (id, _, _) in &targets {
        observer.observe(*id);
    }
    let mut counters = HashMap::new();

    // Below threshold: nothing starts.
    drive(&mut observer, &mut counters, &targets, &[(0, 0.3)], start);
    assert!(counters.is_empty());

    // Stats section scrolls in.
    let visible = start + Duration::from_millis(100);
    drive(
        &mut observer,
        &mut counters,
        &targets,
        &[(0, 0.8), (1, 0.8), (2, 0.8)],
        visible,
    );
    assert_eq!(counters.len(), 3);

    let done = visible + Duration::from_millis(2000);
    assert_eq!(counters[&0].text_at(done), "2.5");
    assert_eq!(counters[&1].text_at(done), "4.5");
    assert_eq!(counters[&2].text_at(done), "1,234");
}

#[test]
fn test_counter_never_refires_on_second_intersection() {
    let start = Instant::now();
    let mut observer = RevealObserver::new(0.5, Duration::ZERO);
    observer.observe(0);
    let targets = [(0, 1000.0, false)];
    let mut counters = HashMap::new();

    drive(&mut observer, &mut counters, &targets, &[(0, 0.9)], start);
    let first = counters[&0].clone();

    // Scroll away and back: the element intersects again much later.
    let again = start + Duration::from_secs(30);
    drive(&mut observer, &mut counters, &targets, &[(0, 0.9)], again);

    assert_eq!(counters.len(), 1);
    // Still the original run, long finished — not a restarted one.
    assert_eq!(counters[&0].text_at(again), first.text_at(again));
    assert!(counters[&0].is_done(again));
}

#[test]
fn test_slide_elements_cascade() {
    let start = Instant::now();
    let mut observer = RevealObserver::new(0.5, Duration::from_millis(100));
    for id in 0..3 {
        observer.observe(id);
    }

    // The slide becomes current; all three elements cross together.
    observer.update(&[(0, 1.0), (1, 1.0), (2, 1.0)], start);

    assert!(observer.is_revealed(0, start));
    assert!(!observer.is_revealed(1, start + Duration::from_millis(99)));
    assert!(observer.is_revealed(1, start + Duration::from_millis(100)));
    assert!(observer.is_revealed(2, start + Duration::from_millis(200)));
}
