//! Frame-stepped scenarios: a move table polled against per-player
//! histories, the way a character state machine drives the engine.

use crossup_command::{Command, CommandRegistry, CommandSpec};
use crossup_foundation::{Facing, FrameSample, GameInput};
use crossup_history::PlayerHistories;

fn spec(name: &str, notation: &str, window: u32) -> CommandSpec {
    CommandSpec {
        name: name.to_string(),
        notation: notation.to_string(),
        window,
    }
}

/// Runs the per-tick loop: push each player's sample, then poll the move
/// table in priority order and return the first hit.
fn tick<'a>(
    players: &mut PlayerHistories,
    registry: &'a CommandRegistry,
    samples: &[FrameSample],
    facing: Facing,
) -> Option<&'a str> {
    for (player, sample) in samples.iter().enumerate() {
        players.push(player, sample.clone()).unwrap();
    }
    registry
        .iter()
        .find(|(_, command)| command.is_executed_for(players, 0, facing).unwrap())
        .map(|(name, _)| name)
}

fn move_table() -> CommandRegistry {
    CommandRegistry::from_specs(&[
        spec("super", "236236a", 30),
        spec("fireball", "236a", 18),
        spec("jab", "a", 1),
    ])
}

#[test]
fn fireball_beats_jab_by_priority() {
    let registry = move_table();
    let mut players = PlayerHistories::new(2);

    let script: &[&[GameInput]] = &[
        &[GameInput::Down],
        &[GameInput::DownRight],
        &[GameInput::Right],
        &[GameInput::A],
    ];

    let mut recognized = None;
    for inputs in script {
        let sample = FrameSample::from_inputs(inputs.iter().copied());
        recognized = tick(
            &mut players,
            &registry,
            &[sample, FrameSample::new()],
            Facing::Right,
        );
    }
    // The final frame completes both the fireball and the jab; the table
    // is priority-ordered, so the fireball wins.
    assert_eq!(recognized, Some("fireball"));
}

#[test]
fn jab_alone_recognizes_as_jab() {
    let registry = move_table();
    let mut players = PlayerHistories::new(2);

    let sample = FrameSample::from_inputs([GameInput::A]);
    let recognized = tick(
        &mut players,
        &registry,
        &[sample, FrameSample::new()],
        Facing::Right,
    );
    assert_eq!(recognized, Some("jab"));
}

#[test]
fn double_quarter_circle_recognizes_as_super() {
    let registry = move_table();
    let mut players = PlayerHistories::new(1);

    let script: &[&[GameInput]] = &[
        &[GameInput::Down],
        &[GameInput::DownRight],
        &[GameInput::Right],
        &[],
        &[GameInput::Down],
        &[GameInput::DownRight],
        &[GameInput::Right],
        &[GameInput::A],
    ];

    let mut recognized = None;
    for inputs in script {
        let sample = FrameSample::from_inputs(inputs.iter().copied());
        recognized = tick(&mut players, &registry, &[sample], Facing::Right);
    }
    assert_eq!(recognized, Some("super"));
}

#[test]
fn players_do_not_see_each_others_inputs() {
    let registry = move_table();
    let mut players = PlayerHistories::new(2);

    // Player 1 does the motion; player 0 is polled.
    let script: &[&[GameInput]] = &[
        &[GameInput::Down],
        &[GameInput::DownRight],
        &[GameInput::Right],
        &[GameInput::A],
    ];
    let mut recognized = None;
    for inputs in script {
        let sample = FrameSample::from_inputs(inputs.iter().copied());
        recognized = tick(
            &mut players,
            &registry,
            &[FrameSample::new(), sample],
            Facing::Right,
        );
    }
    assert_eq!(recognized, None);

    // But player 1's own history recognizes it.
    let fireball = registry.get("fireball").unwrap();
    assert!(fireball.is_executed_for(&players, 1, Facing::Right).unwrap());
}

#[test]
fn evaluation_is_a_pure_query() {
    let command = Command::parse("236a", 18).unwrap();
    let mut players = PlayerHistories::new(1);
    for inputs in [
        vec![GameInput::Down],
        vec![GameInput::DownRight],
        vec![GameInput::Right],
        vec![GameInput::A],
    ] {
        players.push(0, FrameSample::from_inputs(inputs)).unwrap();
    }

    let history = players.player(0).unwrap();
    let first = command.is_executed(history, Facing::Right).unwrap();
    let second = command.is_executed(history, Facing::Right).unwrap();
    assert!(first);
    assert_eq!(first, second);
}

#[test]
fn scene_restart_forgets_the_motion() {
    let registry = move_table();
    let mut players = PlayerHistories::new(1);
    for inputs in [
        vec![GameInput::Down],
        vec![GameInput::DownRight],
        vec![GameInput::Right],
    ] {
        players.push(0, FrameSample::from_inputs(inputs)).unwrap();
    }
    players.reset_all();
    let recognized = tick(
        &mut players,
        &registry,
        &[FrameSample::from_inputs([GameInput::A])],
        Facing::Right,
    );
    assert_eq!(recognized, Some("jab"));
}
