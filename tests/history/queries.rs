//! Integration tests for history lookback queries.

use crossup_foundation::{FrameSample, GameInput};
use crossup_history::{DEFAULT_CAPACITY, InputHistory, PlayerHistories};
use proptest::prelude::*;

fn loaded(frames: &[&[GameInput]]) -> InputHistory {
    let mut history = InputHistory::new();
    for inputs in frames {
        history.push(FrameSample::from_inputs(inputs.iter().copied()));
    }
    history
}

// =============================================================================
// Fixture Semantics
// =============================================================================

// The three-frame fixture from the reference: oldest {Right, A}, then
// {DownRight}, then {Right} on the current frame.
fn fixture() -> InputHistory {
    loaded(&[
        &[GameInput::Right, GameInput::A],
        &[GameInput::DownRight],
        &[GameInput::Right],
    ])
}

#[test]
fn pressed_now_after_a_gap_frame() {
    let history = fixture();
    assert!(history.is_pressed(GameInput::Right, 0).unwrap());
}

#[test]
fn not_pressed_where_absent() {
    let history = fixture();
    assert!(!history.is_pressed(GameInput::Right, 1).unwrap());
}

#[test]
fn down_does_not_require_an_edge() {
    let history = fixture();
    assert!(history.is_down(GameInput::Right, 0).unwrap());
    assert!(history.is_down(GameInput::DownRight, 1).unwrap());
    assert!(history.is_down(GameInput::A, 2).unwrap());
    assert!(!history.is_down(GameInput::A, 1).unwrap());
}

#[test]
fn released_sees_the_drop() {
    let history = fixture();
    // A was active at lookback 2 and gone at lookback 1.
    assert!(history.is_released(GameInput::A, 1).unwrap());
    assert!(!history.is_released(GameInput::A, 0).unwrap());
}

// =============================================================================
// Capacity & Lifecycle
// =============================================================================

#[test]
fn capacity_is_constant_and_prefilled() {
    let history = InputHistory::with_capacity(16);
    assert_eq!(history.capacity(), 16);
    for lookback in 0..16 {
        assert!(history.is_idle(lookback).unwrap());
    }
}

#[test]
fn oldest_frame_falls_off() {
    let mut history = InputHistory::with_capacity(3);
    history.push(FrameSample::from_inputs([GameInput::A]));
    history.push(FrameSample::new());
    history.push(FrameSample::new());
    assert!(history.is_down(GameInput::A, 2).unwrap());
    history.push(FrameSample::new());
    assert!(!history.is_down(GameInput::A, 2).unwrap());
}

#[test]
fn out_of_range_lookback_is_an_error_not_a_wraparound() {
    let history = InputHistory::with_capacity(8);
    assert!(history.sample(7).is_ok());
    for query in [
        history.is_down(GameInput::A, 8).is_err(),
        history.is_pressed(GameInput::A, 8).is_err(),
        history.is_released(GameInput::A, 8).is_err(),
        history.is_idle(8).is_err(),
    ] {
        assert!(query);
    }
}

#[test]
fn default_capacity_is_one_hundred() {
    assert_eq!(DEFAULT_CAPACITY, 100);
    assert_eq!(InputHistory::new().capacity(), 100);
}

// =============================================================================
// Player Context
// =============================================================================

#[test]
fn per_player_histories_are_isolated() {
    let mut players = PlayerHistories::with_capacity(2, 10);
    players
        .push(0, FrameSample::from_inputs([GameInput::Down]))
        .unwrap();
    assert!(players.player(0).unwrap().is_down(GameInput::Down, 0).unwrap());
    assert!(players.player(1).unwrap().is_idle(0).unwrap());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn capacity_never_changes(pushes in 0usize..400) {
        let mut history = InputHistory::with_capacity(50);
        for _ in 0..pushes {
            history.push(FrameSample::from_inputs([GameInput::A]));
        }
        prop_assert_eq!(history.capacity(), 50);
        prop_assert!(history.sample(49).is_ok());
        prop_assert!(history.sample(50).is_err());
    }

    #[test]
    fn pressed_implies_down(lookback in 0usize..20) {
        let mut history = InputHistory::with_capacity(20);
        for i in 0..20 {
            let sample = if i % 2 == 0 {
                FrameSample::from_inputs([GameInput::B])
            } else {
                FrameSample::new()
            };
            history.push(sample);
        }
        if history.is_pressed(GameInput::B, lookback).unwrap() {
            prop_assert!(history.is_down(GameInput::B, lookback).unwrap());
        }
    }

    #[test]
    fn pressed_and_released_are_disjoint(lookback in 0usize..20) {
        let mut history = InputHistory::with_capacity(20);
        for i in 0..20 {
            let sample = if i % 3 == 0 {
                FrameSample::from_inputs([GameInput::C])
            } else {
                FrameSample::new()
            };
            history.push(sample);
        }
        let pressed = history.is_pressed(GameInput::C, lookback).unwrap();
        let released = history.is_released(GameInput::C, lookback).unwrap();
        prop_assert!(!(pressed && released));
    }
}
