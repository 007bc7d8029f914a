//! Engine-level tests for vault banking and power-up activation

use match_simulator_core_rs::{
    Action, ActorKey, Alliance, HumanConfig, HumanStation, HumanTimes, MatchConfig,
    MatchSimulation, PowerUpKind, Score,
};

fn station_config() -> MatchConfig {
    MatchConfig {
        robots: vec![],
        humans: vec![HumanConfig {
            alliance: Alliance::Red,
            station: HumanStation::Exchange,
            portal_stock: 0,
            outlet: None,
            times: HumanTimes::default(),
        }],
        floor_cubes: vec![],
        ..MatchConfig::standard()
    }
}

fn human_key(sim: &MatchSimulation) -> ActorKey {
    sim.state().lookup("RED STATION Human").unwrap()
}

#[test]
#[should_panic(expected = "during autonomous")]
fn test_playing_a_powerup_during_autonomous_aborts() {
    let mut sim = MatchSimulation::new(station_config()).unwrap();
    let key = human_key(&sim);
    sim.schedule_action(key, 1, Action::PlayPowerUp(PowerUpKind::Boost), "play Boost");
    sim.tick().unwrap();
}

#[test]
fn test_banking_scores_in_the_same_tick() {
    let mut sim = MatchSimulation::new(station_config()).unwrap();
    let key = human_key(&sim);

    sim.state_mut().stock_mut().push_exchange(Alliance::Red);
    sim.schedule_action(key, 2, Action::MoveCubeToVault(PowerUpKind::Force), "bank");

    let first = sim.tick().unwrap();
    assert_eq!(first.score, Score::ZERO);

    let second = sim.tick().unwrap();
    assert_eq!(second.score, Score::new(5, 0));
    assert_eq!(sim.state().vault(Alliance::Red).total_cubes(), 1);
    assert_eq!(sim.state().stock().exchange_count(Alliance::Red), 0);
}

#[test]
fn test_banking_from_empty_exchange_is_a_noop() {
    let mut sim = MatchSimulation::new(station_config()).unwrap();
    let key = human_key(&sim);

    sim.schedule_action(key, 1, Action::MoveCubeToVault(PowerUpKind::Boost), "bank");
    sim.tick().unwrap();

    assert_eq!(sim.state().vault(Alliance::Red).total_cubes(), 0);
    assert_eq!(sim.state().human(0).actions_done(), 1);
}

#[test]
fn test_boost_activates_and_expires() {
    let mut sim = MatchSimulation::new(station_config()).unwrap();
    let key = human_key(&sim);

    // Two cubes banked: a level-2 boost, targeting the scale.
    sim.state_mut().vault_mut(Alliance::Red).bank_cube(PowerUpKind::Boost);
    sim.state_mut().vault_mut(Alliance::Red).bank_cube(PowerUpKind::Boost);

    while sim.seconds() < 16 {
        sim.tick().unwrap();
    }
    sim.schedule_action(key, 1, Action::PlayPowerUp(PowerUpKind::Boost), "play Boost");
    sim.tick().unwrap(); // t = 17: played, queued, and activated

    assert_eq!(
        sim.state().powerups().active().map(|p| p.kind),
        Some(PowerUpKind::Boost)
    );
    assert!(sim.state().scale().is_boosted());
    assert!(!sim.state().switch(Alliance::Red).is_boosted());

    // The boost window is 10 seconds; it is gone at t = 27.
    while sim.seconds() < 27 {
        sim.tick().unwrap();
    }
    assert!(sim.state().powerups().active().is_none());
    assert!(!sim.state().scale().is_boosted());
}

#[test]
fn test_second_powerup_waits_in_queue() {
    let mut sim = MatchSimulation::new(station_config()).unwrap();
    let key = human_key(&sim);

    sim.state_mut().vault_mut(Alliance::Red).bank_cube(PowerUpKind::Boost);
    sim.state_mut().vault_mut(Alliance::Red).bank_cube(PowerUpKind::Force);

    while sim.seconds() < 16 {
        sim.tick().unwrap();
    }
    sim.schedule_action(key, 1, Action::PlayPowerUp(PowerUpKind::Boost), "play Boost");
    sim.tick().unwrap(); // t = 17: level-1 boost active on the switch
    assert!(sim.state().switch(Alliance::Red).is_boosted());

    sim.schedule_action(key, 1, Action::PlayPowerUp(PowerUpKind::Force), "play Force");
    sim.tick().unwrap(); // t = 18: force queued behind the boost

    assert_eq!(
        sim.state().powerups().active().map(|p| p.kind),
        Some(PowerUpKind::Boost)
    );
    assert_eq!(sim.state().powerups().queued_len(), 1);
    assert!(!sim.state().switch(Alliance::Red).is_forced());

    // Boost expires at t = 27 and the force takes over.
    while sim.seconds() < 27 {
        sim.tick().unwrap();
    }
    assert_eq!(
        sim.state().powerups().active().map(|p| p.kind),
        Some(PowerUpKind::Force)
    );
    assert!(sim.state().switch(Alliance::Red).is_forced());
}

#[test]
fn test_playing_an_empty_column_is_a_noop() {
    let mut sim = MatchSimulation::new(station_config()).unwrap();
    let key = human_key(&sim);

    while sim.seconds() < 16 {
        sim.tick().unwrap();
    }
    sim.schedule_action(key, 1, Action::PlayPowerUp(PowerUpKind::Force), "play Force");
    sim.tick().unwrap();

    assert!(sim.state().powerups().active().is_none());
    assert!(!sim.state().vault(Alliance::Red).column(PowerUpKind::Force).played());
}
