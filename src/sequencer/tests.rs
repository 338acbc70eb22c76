use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::PlaybackError;

use super::*;

/// A deck that records transport calls instead of touching audio.
#[derive(Debug, Default)]
struct FakeDeck {
    playing: bool,
    position: u64,
    volume: f32,
    fail_begin: bool,
    begins: usize,
}

impl Deck for FakeDeck {
    fn begin(&mut self) -> Result<(), PlaybackError> {
        if self.fail_begin {
            return Err(PlaybackError::Output("denied".into()));
        }
        self.playing = true;
        self.begins += 1;
        Ok(())
    }

    fn halt(&mut self) {
        self.playing = false;
        self.position = 0;
        self.volume = 0.0;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}

fn decks(n: usize) -> Vec<FakeDeck> {
    (0..n).map(|_| FakeDeck::default()).collect()
}

fn plan() -> FadePlan {
    FadePlan {
        step: 0.02,
        ceiling: 0.3,
        interval: Duration::from_millis(100),
    }
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn shuffled_order_is_a_permutation() {
    for n in 0..=8 {
        let mut order = shuffled_order(n, &mut rng(n as u64));
        assert_eq!(order.len(), n);
        order.sort_unstable();
        assert_eq!(order, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn next_index_never_returns_current_with_multiple_tracks() {
    let mut r = rng(7);
    for len in 2..=6 {
        for current in 0..len {
            for _ in 0..50 {
                assert_ne!(next_index(current, len, &mut r), current);
            }
        }
    }
}

#[test]
fn next_index_with_single_track_always_repeats() {
    let mut r = rng(7);
    for _ in 0..20 {
        assert_eq!(next_index(0, 1, &mut r), 0);
    }
}

#[test]
fn begin_ramps_monotonically_to_the_ceiling() {
    let mut d = decks(3);
    let mut r = rng(1);
    let mut seq = Sequencer::new(3, plan(), &mut r);

    seq.begin(&mut d, &mut r).unwrap();
    let current = seq.current().unwrap();
    assert_eq!(seq.phase(), Phase::FadingIn { level: 0.0 });
    assert_eq!(d[current].volume, 0.0);

    let mut last = 0.0f32;
    let mut ticks = 0;
    while seq.phase() != Phase::Playing {
        seq.tick(&mut d);
        let v = d[current].volume;
        assert!(v >= last, "volume dipped during fade-in");
        assert!(v <= 0.3 + f32::EPSILON, "volume exceeded the ceiling");
        last = v;
        ticks += 1;
        assert!(ticks < 1000, "fade never reached the ceiling");
    }
    assert_eq!(d[current].volume, 0.3);

    // Playing is steady state: further ticks change nothing.
    seq.tick(&mut d);
    assert_eq!(d[current].volume, 0.3);
    assert_eq!(seq.phase(), Phase::Playing);
}

#[test]
fn begin_silences_every_other_deck_first() {
    let mut d = decks(4);
    for deck in &mut d {
        deck.playing = true;
        deck.position = 42;
        deck.volume = 0.3;
    }
    let mut r = rng(3);
    let mut seq = Sequencer::new(4, plan(), &mut r);
    seq.begin(&mut d, &mut r).unwrap();

    let current = seq.current().unwrap();
    for (i, deck) in d.iter().enumerate() {
        if i != current {
            assert!(!deck.playing);
            assert_eq!(deck.position, 0);
            assert_eq!(deck.volume, 0.0);
        }
    }
}

#[test]
fn skip_during_fade_in_cancels_the_fade_and_restarts_from_zero() {
    let mut d = decks(5);
    let mut r = rng(11);
    let mut seq = Sequencer::new(5, plan(), &mut r);

    seq.begin(&mut d, &mut r).unwrap();
    let first = seq.current().unwrap();
    for _ in 0..4 {
        seq.tick(&mut d);
    }
    assert!(matches!(seq.phase(), Phase::FadingIn { .. }));
    d[first].position = 7;

    seq.advance(&mut d, &mut r).unwrap();
    let second = seq.current().unwrap();

    assert_ne!(second, first, "skip picked the same track");
    assert!(!d[first].playing);
    assert_eq!(d[first].position, 0);
    assert_eq!(d[first].volume, 0.0);
    // The new fade starts over from zero.
    assert_eq!(seq.phase(), Phase::FadingIn { level: 0.0 });
    assert_eq!(d[second].volume, 0.0);
    assert!(d[second].playing);
}

#[test]
fn failed_start_leaves_the_sequencer_idle() {
    let mut d = decks(1);
    d[0].fail_begin = true;
    let mut r = rng(5);
    let mut seq = Sequencer::new(1, plan(), &mut r);

    assert!(seq.begin(&mut d, &mut r).is_err());
    assert_eq!(seq.phase(), Phase::Idle);
    assert_eq!(seq.current(), None);
    assert!(!d[0].playing);

    // Ticks while idle are no-ops; no fade was left behind.
    seq.tick(&mut d);
    assert_eq!(d[0].volume, 0.0);
}

#[test]
fn teardown_halts_all_decks_without_fades() {
    let mut d = decks(3);
    let mut r = rng(9);
    let mut seq = Sequencer::new(3, plan(), &mut r);
    seq.begin(&mut d, &mut r).unwrap();
    for _ in 0..3 {
        seq.tick(&mut d);
    }

    seq.teardown(&mut d);
    assert_eq!(seq.phase(), Phase::Stopped);
    for deck in &d {
        assert!(!deck.playing);
        assert_eq!(deck.volume, 0.0);
        assert_eq!(deck.position, 0);
    }

    // Stopped is terminal.
    seq.advance(&mut d, &mut r).unwrap();
    assert_eq!(seq.phase(), Phase::Stopped);
}

#[test]
fn empty_playlist_is_a_no_op() {
    let mut d = decks(0);
    let mut r = rng(2);
    let mut seq = Sequencer::new(0, plan(), &mut r);
    assert!(seq.order().is_empty());
    seq.begin(&mut d, &mut r).unwrap();
    seq.advance(&mut d, &mut r).unwrap();
    seq.tick(&mut d);
    assert_eq!(seq.phase(), Phase::Idle);
}

#[test]
fn five_track_session_shuffles_a_full_permutation() {
    let mut r = rng(13);
    let seq = Sequencer::new(5, plan(), &mut r);
    let mut order = seq.order().to_vec();
    assert_eq!(order.len(), 5);
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn natural_end_starts_a_different_track() {
    let mut d = decks(2);
    let mut r = rng(21);
    let mut seq = Sequencer::new(2, plan(), &mut r);
    seq.begin(&mut d, &mut r).unwrap();
    while seq.phase() != Phase::Playing {
        seq.tick(&mut d);
    }
    let first = seq.current().unwrap();

    seq.advance(&mut d, &mut r).unwrap();
    let second = seq.current().unwrap();
    assert_ne!(first, second);
    assert_eq!(d[second].begins, 1);
}
