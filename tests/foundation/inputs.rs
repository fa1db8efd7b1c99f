//! Integration tests for the input alphabet and facing.

use crossup_foundation::{Facing, GameInput};

// =============================================================================
// Notation Alphabet
// =============================================================================

#[test]
fn numpad_layout() {
    assert_eq!(GameInput::from_symbol('2'), Some(GameInput::Down));
    assert_eq!(GameInput::from_symbol('3'), Some(GameInput::DownRight));
    assert_eq!(GameInput::from_symbol('6'), Some(GameInput::Right));
    assert_eq!(GameInput::from_symbol('8'), Some(GameInput::Up));
}

#[test]
fn button_letters() {
    assert_eq!(GameInput::from_symbol('a'), Some(GameInput::A));
    assert_eq!(GameInput::from_symbol('l'), Some(GameInput::Guard));
    assert_eq!(GameInput::from_symbol('e'), None);
}

#[test]
fn every_input_has_a_unique_symbol() {
    let mut symbols: Vec<char> = GameInput::ALL.iter().map(|i| i.symbol()).collect();
    symbols.sort_unstable();
    symbols.dedup();
    assert_eq!(symbols.len(), GameInput::ALL.len());
}

// =============================================================================
// Mirroring
// =============================================================================

#[test]
fn mirrored_pairs() {
    assert_eq!(GameInput::Left.mirrored(), GameInput::Right);
    assert_eq!(GameInput::UpRight.mirrored(), GameInput::UpLeft);
    assert_eq!(GameInput::DownLeft.mirrored(), GameInput::DownRight);
}

#[test]
fn unpaired_inputs_mirror_to_themselves() {
    for input in [GameInput::Up, GameInput::Down, GameInput::C, GameInput::Guard] {
        assert_eq!(input.mirrored(), input);
    }
}

#[test]
fn facing_right_is_identity() {
    for input in GameInput::ALL {
        assert_eq!(input.resolve(Facing::Right), input);
    }
}

#[test]
fn facing_left_resolves_through_the_mirror() {
    for input in GameInput::ALL {
        assert_eq!(input.resolve(Facing::Left), input.mirrored());
    }
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn directions_and_buttons_partition_the_alphabet() {
    for input in GameInput::ALL {
        assert_ne!(input.is_direction(), input.is_button());
    }
    assert_eq!(GameInput::ALL.iter().filter(|i| i.is_direction()).count(), 8);
    assert_eq!(GameInput::ALL.iter().filter(|i| i.is_button()).count(), 5);
}
