use game_core::{
    Action, Direction, GameMode, GameState, GameStatus, NewGame, Position, RuleError, Zombie,
    ZombieKind, add_player_to_state, apply_action, create_initial_game_state, tick_game,
    to_observation,
};

/// One player at the start tile and a single zombie, replaced by `kind` at `position`.
fn lone_zombie(mode: GameMode, kind: ZombieKind, position: Position, hp: u32) -> GameState {
    let (mut state, _) = create_initial_game_state(&NewGame::new("rules").with_mode(mode))
        .expect("session should be created");
    let zombie = state
        .zombies
        .get_mut("zombie-0001")
        .expect("first zombie should exist");
    *zombie = Zombie::new("zombie-0001", kind, position).with_hp(hp);
    state
}

#[test]
fn killing_the_last_zombie_wins_on_tick_one() {
    let state = lone_zombie(GameMode::Classic, ZombieKind::Normal, Position::new(3, 2), 10);

    let next = apply_action(&state, "player-1", &Action::attack_nearest())
        .expect("attack should succeed");

    assert!(!next.zombies["zombie-0001"].alive);
    assert_eq!(next.status, GameStatus::Won);
    assert_eq!(next.tick, 1);
    assert_eq!(next.players["player-1"].stats.last_attack_tick, 0);
}

#[test]
fn cooldown_is_reported_before_target_lookup() {
    let state = lone_zombie(GameMode::Classic, ZombieKind::Heavy, Position::new(3, 2), 60);
    let state = apply_action(&state, "player-1", &Action::attack_nearest())
        .expect("first attack should succeed");

    let err = apply_action(&state, "player-1", &Action::attack("zombie-9999"))
        .expect_err("second attack should be throttled");
    assert_eq!(err, RuleError::AttackCooldown { remaining: 1 });
    assert_eq!(err.code(), "ATTACK_COOLDOWN");

    let err = apply_action(&state, "player-1", &Action::attack("  "))
        .expect_err("blank target is still throttled");
    assert_eq!(err, RuleError::AttackCooldown { remaining: 1 });

    // Once the cooldown has elapsed, the bogus target surfaces instead.
    let state = tick_game(&state);
    let err = apply_action(&state, "player-1", &Action::attack("zombie-9999"))
        .expect_err("unknown target should be rejected");
    assert_eq!(err.code(), "TARGET_NOT_FOUND");
}

#[test]
fn out_of_range_targets_are_rejected() {
    let state = lone_zombie(GameMode::Classic, ZombieKind::Normal, Position::new(6, 6), 30);
    let err = apply_action(&state, "player-1", &Action::attack("zombie-0001"))
        .expect_err("zombie is too far away");
    assert_eq!(
        err,
        RuleError::TargetOutOfRange {
            target: "zombie-0001".into(),
            distance: 8,
            range: 1,
        }
    );
}

#[test]
fn losing_every_defender_ends_the_game() {
    let mut state = lone_zombie(GameMode::Classic, ZombieKind::Normal, Position::new(3, 2), 30);
    if let Some(player) = state.players.get_mut("player-1") {
        player.hp = 5;
    }

    let next = apply_action(&state, "player-1", &Action::Wait).expect("wait should succeed");
    assert!(!next.players["player-1"].alive);
    assert_eq!(next.status, GameStatus::Lost);

    let err = apply_action(&next, "player-1", &Action::Wait).expect_err("game is over");
    assert_eq!(err, RuleError::GameCompleted);
}

#[test]
fn endless_mode_respawns_a_larger_wave() {
    let state = lone_zombie(GameMode::Endless, ZombieKind::Normal, Position::new(3, 2), 10);

    let next = apply_action(&state, "player-1", &Action::attack_nearest())
        .expect("attack should succeed");

    assert_eq!(next.status, GameStatus::Active);
    assert_eq!(next.wave, 2);
    assert_eq!(next.zombies_alive(), 6);
    // Dead records are kept and new ids continue the sequence.
    assert!(next.zombies.contains_key("zombie-0001"));
    assert!(next.zombies.contains_key("zombie-0007"));
    assert_eq!(next.zombies["zombie-0006"].kind, ZombieKind::Explosive);
}

#[test]
fn explosions_chain_through_adjacent_bombs() {
    let mut state = lone_zombie(GameMode::Classic, ZombieKind::Explosive, Position::new(3, 2), 10);
    let second = state.spawn_zombie(ZombieKind::Explosive, Position::new(4, 2));

    let next = apply_action(&state, "player-1", &Action::attack_nearest())
        .expect("attack should succeed");

    assert!(!next.zombies["zombie-0001"].alive);
    assert!(!next.zombies[&second].alive);
    // Two blasts within radius, 10 damage each.
    assert_eq!(next.players["player-1"].hp, 80);
    assert_eq!(next.status, GameStatus::Won);
}

#[test]
fn companion_and_zombies_act_after_the_player() {
    let (state, _) = create_initial_game_state(
        &NewGame::new("team")
            .with_zombies(2)
            .with_companion(true),
    )
    .expect("session should be created");

    let next = apply_action(&state, "player-1", &Action::move_to(Direction::Down))
        .expect("move should succeed");

    assert_eq!(next.players["player-1"].position, Position::new(2, 3));
    let companion = next.companion.as_ref().expect("companion should exist");
    assert_ne!(companion.position, Position::new(3, 2));
    assert_ne!(next.zombies["zombie-0001"].position, state.zombies["zombie-0001"].position);
}

#[test]
fn joined_players_can_act_and_observe() {
    let (state, _) = create_initial_game_state(&NewGame::new("coop").with_zombies(3))
        .expect("session should be created");
    let (state, guest) =
        add_player_to_state(&state, Some("guest"), Some("Guest")).expect("join should succeed");

    let state = apply_action(&state, &guest.id, &Action::move_to(Direction::Right))
        .expect("guest move should succeed");
    let observation = to_observation(&state, "guest").expect("guest should be observable");

    assert_eq!(observation.you.player.position, Position::new(2, 1));
    assert_eq!(observation.players.len(), 2);
    assert_eq!(observation.tick, 1);
}

#[test]
fn moves_into_walls_and_entities_are_rejected() {
    let (state, _) = create_initial_game_state(&NewGame::new("walls").with_companion(true))
        .expect("session should be created");

    // The companion spawns at (3, 2), right next to the player.
    let err = apply_action(&state, "player-1", &Action::move_to(Direction::Right))
        .expect_err("companion blocks the tile");
    assert_eq!(err, RuleError::MoveOccupied { x: 3, y: 2 });

    let state = apply_action(&state, "player-1", &Action::move_to(Direction::Up))
        .expect("move should succeed");
    let err = apply_action(&state, "player-1", &Action::move_to(Direction::Up))
        .expect_err("border wall");
    assert_eq!(err, RuleError::MoveBlocked { x: 2, y: 0 });
}
