use std::time::{Duration, Instant};

use super::*;

fn lines() -> Vec<String> {
    ["Photographer", "Developer", "Volleyball"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn rotator(now: Instant) -> Rotator {
    Rotator::start(
        lines(),
        Duration::from_millis(2500),
        Duration::from_millis(500),
        Duration::from_millis(3000),
        now,
    )
}

#[test]
fn shows_the_first_line_held() {
    let now = Instant::now();
    let r = rotator(now);
    assert_eq!(r.current(), Some(("Photographer", TaglinePhase::Hold)));
}

#[test]
fn fades_out_before_swapping() {
    let now = Instant::now();
    let mut r = rotator(now);

    // Still inside the first hold.
    r.tick(now + Duration::from_millis(2999));
    assert_eq!(r.current(), Some(("Photographer", TaglinePhase::Hold)));

    // First hold elapsed: the line fades before the text changes.
    r.tick(now + Duration::from_millis(3100));
    assert_eq!(r.current(), Some(("Photographer", TaglinePhase::FadingOut)));

    // Fade elapsed: next line, held.
    r.tick(now + Duration::from_millis(3600));
    assert_eq!(r.current(), Some(("Developer", TaglinePhase::Hold)));
}

#[test]
fn cycles_in_order_and_wraps_to_the_first_line() {
    let now = Instant::now();
    let mut r = rotator(now);

    // Step in 100ms increments over more than one full cycle and record
    // each distinct line that gets held.
    let mut seen: Vec<String> = Vec::new();
    for ms in (0..=16_000).step_by(100) {
        r.tick(now + Duration::from_millis(ms));
        if let Some((line, TaglinePhase::Hold)) = r.current() {
            if seen.last().map(String::as_str) != Some(line) {
                seen.push(line.to_string());
            }
        }
    }

    // The sequence is the list order repeated, wrapping after the last.
    let expected: Vec<String> = lines().into_iter().cycle().take(seen.len()).collect();
    assert!(seen.len() > 3, "did not complete a full cycle: {seen:?}");
    assert_eq!(seen, expected);
}

#[test]
fn empty_list_never_panics() {
    let now = Instant::now();
    let mut r = Rotator::start(
        Vec::new(),
        Duration::from_millis(10),
        Duration::from_millis(10),
        Duration::ZERO,
        now,
    );
    r.tick(now + Duration::from_secs(5));
    assert_eq!(r.current(), None);
}
