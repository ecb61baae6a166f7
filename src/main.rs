//! Flappy Sim entry point
//!
//! Runs one headless game at 100 Hz with a simple autopilot and prints the
//! final snapshot. Settings may be supplied as a JSON file via
//! `FLAPPY_SETTINGS`; the best score lives in `FLAPPY_BEST` if set.

#[cfg(not(target_arch = "wasm32"))]
use flappy_sim::{
    BestScoreStore, GameLoop, MemoryStore, Settings, WorldSize,
    highscores::JsonFileStore,
    platform::{Clock, FixedDriver, SystemClock},
    sim::UniformSource,
};

/// Simulated seconds before the demo gives up on the autopilot crashing
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SECONDS: f64 = 120.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Sim (headless) starting...");

    let wall = SystemClock::default();
    let settings = load_settings();
    let store: Box<dyn BestScoreStore> = match std::env::var("FLAPPY_BEST") {
        Ok(path) => Box::new(JsonFileStore::new(path)),
        Err(_) => Box::new(MemoryStore::default()),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = GameLoop::with_seed(settings, store, seed);
    let mut driver = FixedDriver::default();

    game.start();
    let ticks = driver.run_for(&mut game, WorldSize::default(), DEMO_SECONDS, |game| {
        for event in game.drain_events() {
            log::debug!("{:?}", event);
        }
        autopilot(game);
    });
    for event in game.drain_events() {
        log::debug!("{:?}", event);
    }

    let snapshot = game.snapshot();
    log::info!(
        "Ran {} ticks in {:.3}s wall time, final phase {:?}",
        ticks,
        wall.now(),
        snapshot.phase
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize snapshot: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Settings {
    let Ok(path) = std::env::var("FLAPPY_SETTINGS") else {
        return Settings::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => Settings::from_json_or_default(&json),
        Err(e) => {
            log::warn!("Could not read {}: {}", path, e);
            Settings::default()
        }
    }
}

/// Jump whenever the actor sinks below the middle of the gap while falling
#[cfg(not(target_arch = "wasm32"))]
fn autopilot<S: BestScoreStore, R: UniformSource>(game: &mut GameLoop<S, R>) {
    let settings = game.settings();
    let gap_mid = game.obstacle().gap_top + settings.obstacle_gap / 2.0;
    let actor = game.actor();
    if actor.vel_y > 0.0 && actor.pos.y > gap_mid + settings.actor_hit_radius / 4.0 {
        game.jump();
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on the web; the host page drives the loop
}
