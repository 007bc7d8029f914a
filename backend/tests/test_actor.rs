//! Tests for the scheduled-action protocol and idle resumption
//!
//! These drive a real simulation with directly scheduled actions, so
//! the clear-then-run ordering, exact-ETA firing, replacement, and
//! minimum-delay coercion are all observed through the engine.

use match_simulator_core_rs::{
    Action, ActorKey, Alliance, IdleDecider, Location, MatchConfig, MatchSimulation, RobotConfig,
    RobotTimes, Score,
};

fn one_robot_config(preloaded_cube: bool) -> MatchConfig {
    MatchConfig {
        robots: vec![RobotConfig {
            alliance: Alliance::Red,
            position: 1,
            preloaded_cube,
            times: RobotTimes::default(),
        }],
        humans: vec![],
        floor_cubes: vec![],
        ..MatchConfig::standard()
    }
}

fn robot_key(sim: &MatchSimulation) -> ActorKey {
    sim.state().lookup("RED 1 Robot").unwrap()
}

#[test]
fn test_delayed_effect_fires_exactly_once() {
    let mut config = one_robot_config(false);
    config.floor_cubes = vec![(Location::RedWall, 1)];
    let mut sim = MatchSimulation::new(config).unwrap();
    let key = robot_key(&sim);

    // Schedule "pick up the cube" with delay 2 at time 0.
    sim.schedule_action(key, 2, Action::Pickup, "inc");
    assert_eq!(sim.state().robot(0).slot().label(), "inc");
    assert_eq!(sim.state().robot(0).slot().eta(), Some(2));

    sim.tick().unwrap();
    assert_eq!(sim.state().stock().floor_count(Location::RedWall), 1);
    assert!(!sim.state().robot(0).has_cube());
    assert_eq!(sim.state().robot(0).actions_done(), 0);

    sim.tick().unwrap();
    assert_eq!(sim.state().stock().floor_count(Location::RedWall), 0);
    assert!(sim.state().robot(0).has_cube());
    // Completion hook fired exactly once, and the slot is clear.
    assert_eq!(sim.state().robot(0).actions_done(), 1);
    assert!(sim.state().robot(0).slot().is_idle());
    assert_eq!(sim.state().robot(0).slot().label(), "");
}

#[test]
fn test_superseded_action_never_runs() {
    let mut sim = MatchSimulation::new(one_robot_config(true)).unwrap();
    let key = robot_key(&sim);

    // Schedule a drop, then replace it before it fires.
    sim.schedule_action(key, 5, Action::Drop, "drop the Cube");
    sim.schedule_action(key, 2, Action::Idle, "changed my mind");

    for _ in 0..6 {
        sim.tick().unwrap();
    }
    // The drop was cancelled: the robot still carries its preload and
    // only the replacement action completed.
    assert!(sim.state().robot(0).has_cube());
    assert_eq!(sim.state().robot(0).actions_done(), 1);
}

#[test]
fn test_zero_and_negative_delays_coerced() {
    let mut sim = MatchSimulation::new(one_robot_config(false)).unwrap();
    let key = robot_key(&sim);

    sim.schedule_action(key, 0, Action::Idle, "now-ish");
    assert_eq!(sim.state().robot(0).slot().eta(), Some(1));

    sim.schedule_action(key, -7, Action::Idle, "way overdue");
    assert_eq!(sim.state().robot(0).slot().eta(), Some(1));

    sim.tick().unwrap();
    assert_eq!(sim.state().robot(0).actions_done(), 1);
}

#[test]
fn test_no_decider_robot_stays_inert_all_match() {
    let mut sim = MatchSimulation::new(one_robot_config(false)).unwrap();

    let outcome = sim.run();
    assert_eq!(outcome.score, Score::ZERO);
    assert_eq!(sim.history().len(), 150);
    assert!(sim.history().iter().all(|s| *s == Score::ZERO));
    assert!(sim.state().robot(0).slot().is_idle());
    assert_eq!(sim.state().robot(0).actions_done(), 0);
}

#[test]
fn test_two_robots_race_for_one_cube() {
    let mut config = one_robot_config(false);
    config.robots.push(RobotConfig {
        alliance: Alliance::Red,
        position: 2,
        preloaded_cube: false,
        times: RobotTimes::default(),
    });
    config.floor_cubes = vec![(Location::RedWall, 1)];
    let mut sim = MatchSimulation::new(config).unwrap();

    let first = sim.state().lookup("RED 1 Robot").unwrap();
    let second = sim.state().lookup("RED 2 Robot").unwrap();
    sim.schedule_action(first, 2, Action::Pickup, "pickup");
    sim.schedule_action(second, 2, Action::Pickup, "pickup");

    sim.tick().unwrap();
    sim.tick().unwrap();

    // Registration order decides the race; the loser's effect is a
    // benign no-op and exactly one cube left the floor.
    assert!(sim.state().robot(0).has_cube());
    assert!(!sim.state().robot(1).has_cube());
    assert_eq!(sim.state().stock().floor_count(Location::RedWall), 0);
}

#[test]
fn test_effect_fires_exactly_on_eta_across_phase_boundary() {
    let mut config = one_robot_config(false);
    config.floor_cubes = vec![(Location::RedWall, 1)];
    let mut sim = MatchSimulation::new(config).unwrap();
    let key = robot_key(&sim);

    // Advance into late autonomous, then schedule across the boundary.
    for _ in 0..13 {
        sim.tick().unwrap();
    }
    sim.schedule_action(key, 5, Action::Pickup, "pickup");

    for expected_second in 14..=17 {
        sim.tick().unwrap();
        assert_eq!(sim.seconds(), expected_second);
        assert!(!sim.state().robot(0).has_cube());
    }
    sim.tick().unwrap();
    assert_eq!(sim.seconds(), 18);
    assert!(sim.state().robot(0).has_cube());
}

#[test]
fn test_attachment_drives_decider_immediately() {
    let mut sim = MatchSimulation::new(one_robot_config(false)).unwrap();
    let key = robot_key(&sim);

    sim.set_decider(key, Box::new(IdleDecider));
    // The first action is scheduled at attachment, not on the first tick.
    assert!(!sim.state().robot(0).slot().is_idle());
    assert_eq!(sim.state().robot(0).slot().label(), "done");
    assert_eq!(sim.state().robot(0).slot().eta(), Some(1));
}

#[test]
fn test_terminal_decider_is_idempotent() {
    let mut sim = MatchSimulation::new(one_robot_config(false)).unwrap();
    let key = robot_key(&sim);
    sim.set_decider(key, Box::new(IdleDecider));

    for n in 1..=20 {
        sim.tick().unwrap();
        // Same no-op label, one canonical minimum wait per tick.
        assert_eq!(sim.state().robot(0).slot().label(), "done");
        assert_eq!(sim.state().robot(0).actions_done(), n);
    }
    assert_eq!(sim.total_score(), Score::ZERO);
}

#[test]
#[should_panic(expected = "a decider is already attached")]
fn test_second_attachment_panics() {
    let mut sim = MatchSimulation::new(one_robot_config(false)).unwrap();
    let key = robot_key(&sim);
    sim.set_decider(key, Box::new(IdleDecider));
    sim.set_decider(key, Box::new(IdleDecider));
}
