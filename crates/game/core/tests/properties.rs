//! Property-based tests over random action sequences.

use std::collections::HashSet;

use proptest::prelude::*;

use game_core::{
    Action, Direction, GameMode, GameState, NewGame, apply_action, create_initial_game_state,
    tick_game,
};

#[derive(Clone, Debug)]
enum Step {
    Act(Action),
    Tick,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Act(Action::Wait)),
        Just(Step::Act(Action::move_to(Direction::Up))),
        Just(Step::Act(Action::move_to(Direction::Down))),
        Just(Step::Act(Action::move_to(Direction::Left))),
        Just(Step::Act(Action::move_to(Direction::Right))),
        Just(Step::Act(Action::attack_nearest())),
        Just(Step::Act(Action::attack("zombie-0001"))),
        Just(Step::Tick),
    ]
}

fn setup(zombies: u32, companion: bool, endless: bool) -> GameState {
    let mode = if endless {
        GameMode::Endless
    } else {
        GameMode::Classic
    };
    let (state, _) = create_initial_game_state(
        &NewGame::new("prop")
            .with_zombies(zombies)
            .with_companion(companion)
            .with_mode(mode),
    )
    .unwrap();
    state
}

fn run(state: &GameState, step: &Step) -> Option<GameState> {
    match step {
        Step::Act(action) => apply_action(state, "player-1", action).ok(),
        Step::Tick => Some(tick_game(state)),
    }
}

fn assert_tiles_exclusive(state: &GameState) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    let players = state
        .players
        .values()
        .filter(|p| p.alive)
        .map(|p| p.position);
    let zombies = state
        .zombies
        .values()
        .filter(|z| z.alive)
        .map(|z| z.position);
    let companion = state
        .companion
        .iter()
        .filter(|c| c.alive)
        .map(|c| c.position);

    for position in players.chain(zombies).chain(companion) {
        prop_assert!(state.map.is_passable(position), "{position} is not passable");
        prop_assert!(seen.insert(position), "{position} is shared");
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Replaying the same inputs always yields the same snapshots.
    #[test]
    fn replay_is_deterministic(
        zombies in 1u32..=12,
        companion in any::<bool>(),
        endless in any::<bool>(),
        steps in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let mut left = setup(zombies, companion, endless);
        let mut right = setup(zombies, companion, endless);
        prop_assert_eq!(&left, &right);

        for step in &steps {
            let a = run(&left, step);
            let b = run(&right, step);
            prop_assert_eq!(&a, &b);
            if let (Some(a), Some(b)) = (a, b) {
                left = a;
                right = b;
            }
        }
    }

    /// Every successful call advances the tick by exactly one; rejected calls change nothing.
    #[test]
    fn tick_advances_by_one(
        zombies in 1u32..=12,
        companion in any::<bool>(),
        steps in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let mut state = setup(zombies, companion, true);
        for step in &steps {
            let before = state.clone();
            match run(&state, step) {
                Some(next) => {
                    prop_assert_eq!(next.tick, before.tick + 1);
                    state = next;
                }
                None => prop_assert_eq!(&state, &before),
            }
        }
    }

    /// No two living entities ever share a tile, and none stand on a wall.
    #[test]
    fn living_entities_never_overlap(
        zombies in 1u32..=32,
        companion in any::<bool>(),
        endless in any::<bool>(),
        steps in prop::collection::vec(step_strategy(), 0..60),
    ) {
        let mut state = setup(zombies, companion, endless);
        assert_tiles_exclusive(&state)?;
        for step in &steps {
            if let Some(next) = run(&state, step) {
                state = next;
                assert_tiles_exclusive(&state)?;
            }
        }
    }

    /// Terminal statuses never change back.
    #[test]
    fn terminal_status_is_final(
        zombies in 1u32..=4,
        steps in prop::collection::vec(step_strategy(), 0..80),
    ) {
        let mut state = setup(zombies, false, false);
        let mut terminal = None;
        for step in &steps {
            if let Some(next) = run(&state, step) {
                state = next;
            }
            if let Some(status) = terminal {
                prop_assert_eq!(state.status, status);
            } else if state.status.is_terminal() {
                terminal = Some(state.status);
            }
        }
    }
}
