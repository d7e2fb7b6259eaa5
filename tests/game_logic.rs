/// Integration tests for game logic
///
/// These tests drive the engine only through its public commands and
/// snapshots, the same way the terminal front end does.
use invaders::{Command, Direction, Enemy, Engine, Formation, Position, RoundPhase};
use proptest::prelude::*;

/// Ticks until the predicate holds, returning how many ticks it took
fn tick_until(engine: &mut Engine, limit: usize, done: impl Fn(&Engine) -> bool) -> Option<usize> {
    for n in 1..=limit {
        engine.tick();
        if done(engine) {
            return Some(n);
        }
    }
    None
}

#[test]
fn test_fresh_round_layout() {
    let snapshot = Engine::new().snapshot();
    assert_eq!(snapshot.player_x, 275.0);
    assert!(snapshot.projectiles.is_empty());
    assert_eq!(snapshot.enemies.len(), 32);
    assert_eq!(snapshot.enemies[0], Position::new(20.0, 20.0));
    assert_eq!(snapshot.enemies[31], Position::new(300.0, 80.0));
    assert_eq!(snapshot.score, 0);
    assert!(!snapshot.game_over);
}

#[test]
fn test_fired_projectile_removed_when_reaching_top() {
    let mut engine = Engine::new();
    engine.apply(Command::Fire);
    assert_eq!(
        engine.snapshot().projectiles,
        vec![Position::new(297.5, 390.0)]
    );

    let mut last_y = 390.0;
    for _ in 0..38 {
        engine.tick();
        let y = engine.snapshot().projectiles[0].y;
        assert_eq!(y, last_y - 10.0);
        last_y = y;
    }
    assert_eq!(last_y, 10.0);

    engine.tick();
    assert!(engine.snapshot().projectiles.is_empty());
    for _ in 0..10 {
        engine.tick();
        assert!(engine.snapshot().projectiles.is_empty());
    }
}

#[test]
fn test_right_wall_bounce_scenario() {
    let mut engine = Engine::with_formation(Formation::from_enemies(
        vec![
            Enemy::new(580.0, 60.0),
            Enemy::new(500.0, 60.0),
            Enemy::new(100.0, 100.0),
        ],
        Direction::Right,
    ));

    let report = engine.tick();
    assert!(report.bounced);
    assert_eq!(engine.direction(), Direction::Left);
    assert_eq!(
        engine.snapshot().enemies,
        vec![
            Position::new(580.0, 70.0),
            Position::new(500.0, 70.0),
            Position::new(100.0, 110.0),
        ]
    );

    // Heading left now, no descent
    let report = engine.tick();
    assert!(!report.bounced);
    assert_eq!(engine.snapshot().enemies[0], Position::new(570.0, 70.0));
}

#[test]
fn test_burst_fire_scores_each_destroyed_enemy() {
    let mut engine = Engine::new();
    for _ in 0..20 {
        engine.apply(Command::Fire);
        engine.tick();
        engine.tick();
    }
    for _ in 0..40 {
        engine.tick();
    }

    let snapshot = engine.snapshot();
    let destroyed = 32 - snapshot.enemies.len() as u32;
    assert!(destroyed > 0);
    assert_eq!(snapshot.score, destroyed * 10);
}

#[test]
fn test_round_ends_when_grid_reaches_floor() {
    let mut engine = Engine::new();
    let ticks = tick_until(&mut engine, 5_000, Engine::is_game_over);
    assert!(ticks.is_some());

    let snapshot = engine.snapshot();
    assert!(snapshot.game_over);
    assert_eq!(snapshot.phase(), RoundPhase::GameOver);
    assert!(snapshot.enemies.iter().any(|e| e.y + 20.0 >= 400.0));

    // Latched: nothing moves any more
    for _ in 0..10 {
        engine.tick();
        engine.apply(Command::MoveRight);
        engine.apply(Command::Fire);
    }
    assert_eq!(engine.snapshot(), snapshot);

    engine.apply(Command::Restart);
    assert_eq!(engine, Engine::new());
}

#[test]
fn test_clearing_every_enemy() {
    // A lone enemy drifting right meets the shot on the fifth tick
    let mut engine = Engine::with_formation(Formation::from_enemies(
        vec![Enemy::new(230.0, 330.0)],
        Direction::Right,
    ));
    engine.apply(Command::Fire);

    let ticks = tick_until(&mut engine, 50, |e| e.snapshot().is_cleared());
    assert_eq!(ticks, Some(5));
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.snapshot().phase(), RoundPhase::Cleared);
    assert!(!engine.is_game_over());
}

proptest! {
    #[test]
    fn test_player_always_inside_arena(
        moves in prop::collection::vec(
            prop::sample::select(vec![Command::MoveLeft, Command::MoveRight]),
            0..300
        )
    ) {
        let mut engine = Engine::new();
        for command in moves {
            engine.apply(command);
            let x = engine.snapshot().player_x;
            prop_assert!((0.0..=550.0).contains(&x));
        }
    }

    #[test]
    fn test_restart_from_any_state(
        ticks in 0usize..1500,
        shots in prop::collection::vec(0usize..1500, 0..30)
    ) {
        let mut engine = Engine::new();
        for n in 0..ticks {
            if shots.contains(&n) {
                engine.apply(Command::Fire);
            }
            engine.tick();
        }
        engine.apply(Command::Restart);
        prop_assert_eq!(engine.snapshot(), Engine::new().snapshot());
        prop_assert_eq!(engine, Engine::new());
    }
}
