//! Example match scenario.
//!
//! First cut: preload cubes in all robots, drive to earn auto-run
//! points, place cubes on the switches and the scale, ferry cubes into
//! the exchange, and let the red station human bank and play power-ups.

use match_simulator_core_rs::decider::{
    ExchangeRunner, ExchangeThenPark, PortalFeeder, ScalePlacer, SwitchPlacer, VaultLoader,
};
use match_simulator_core_rs::{
    ActorKey, Alliance, MatchConfig, MatchSimulation, SimulationError,
};

fn lookup(sim: &MatchSimulation, name: &str) -> ActorKey {
    sim.state()
        .lookup(name)
        .unwrap_or_else(|| panic!("no actor named {:?}", name))
}

fn build_scenario() -> Result<MatchSimulation, SimulationError> {
    let mut config = MatchConfig::standard();
    for rc in &mut config.robots {
        // Model a slightly slower machine in one alliance: with both #2
        // robots placing on the scale, RED owns it for one second before
        // BLUE matches its cube.
        if rc.alliance == Alliance::Blue && rc.position == 2 {
            rc.times.place += 1;
        }
        if rc.alliance == Alliance::Blue && rc.position == 3 {
            rc.times.extra_drive += 1;
            rc.times.pickup += 2;
            rc.times.drop += 1;
            rc.times.climb += 2;
        }
    }

    let mut sim = MatchSimulation::new(config)?;

    for alliance in Alliance::BOTH {
        let r1 = lookup(&sim, &format!("{} 1 Robot", alliance));
        sim.set_decider(r1, Box::new(SwitchPlacer::new()));
        let r2 = lookup(&sim, &format!("{} 2 Robot", alliance));
        sim.set_decider(r2, Box::new(ScalePlacer::new()));

        let front = lookup(&sim, &format!("{} FRONT PORTAL Human", alliance));
        sim.set_decider(front, Box::new(PortalFeeder::new()));
        let back = lookup(&sim, &format!("{} BACK PORTAL Human", alliance));
        sim.set_decider(back, Box::new(PortalFeeder::new()));
    }

    let red3 = lookup(&sim, "RED 3 Robot");
    sim.set_decider(red3, Box::new(ExchangeRunner::new()));
    let blue3 = lookup(&sim, "BLUE 3 Robot");
    sim.set_decider(blue3, Box::new(ExchangeThenPark::new()));

    let station = lookup(&sim, "RED STATION Human");
    sim.set_decider(station, Box::new(VaultLoader::standard()));

    Ok(sim)
}

fn main() {
    let mut sim = match build_scenario() {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("scenario setup failed: {}", err);
            std::process::exit(1);
        }
    };

    let outcome = sim.run();

    print!("{}", sim.report().render_table());
    println!();
    println!("Final score:    {}", outcome.score);
    println!(
        "Ranking points: {} (auto-quest {:?}, face-the-boss {:?})",
        outcome.ranking, outcome.auto_quest, outcome.face_the_boss
    );
}
