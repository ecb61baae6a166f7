//! Game loop: phase state machine and the per-tick pipeline
//!
//! Ticks and actions are plain `&mut self` calls, so the borrow checker
//! already serializes them; nothing here blocks or re-enters.

use rand_pcg::Pcg32;

use super::obstacle::{self, PassEvent};
use super::rng::{self, UniformSource};
use super::state::{ActorState, GameEvent, GamePhase, ObstacleState, ScoreState, Snapshot, WorldSize};
use super::{collision, physics, score::ScoreKeeper};
use crate::highscores::BestScoreStore;
use crate::sanitize_dt;
use crate::settings::Settings;

/// Discrete inputs from the player / UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Jump,
    Reset,
}

type Observer = Box<dyn FnMut(&Snapshot)>;

/// Owns one run's state and drives it from clock events
pub struct GameLoop<S: BestScoreStore, R: UniformSource = Pcg32> {
    settings: Settings,
    phase: GamePhase,
    actor: ActorState,
    obstacle: ObstacleState,
    score: ScoreKeeper,
    /// Dimensions from the most recent tick
    world: WorldSize,
    /// Clock reading of the previous tick; `None` until the first tick of a run
    last_time: Option<f64>,
    /// Ticks run since the last start
    time_ticks: u64,
    store: S,
    rng: R,
    events: Vec<GameEvent>,
    observer: Option<Observer>,
}

impl<S: BestScoreStore> GameLoop<S, Pcg32> {
    /// Create a loop with the default seeded generator
    pub fn with_seed(settings: Settings, store: S, seed: u64) -> Self {
        Self::new(settings, store, rng::seeded(seed))
    }
}

impl<S: BestScoreStore, R: UniformSource> GameLoop<S, R> {
    pub fn new(settings: Settings, store: S, mut rng: R) -> Self {
        let settings = if settings.is_valid() {
            settings
        } else {
            log::warn!("Invalid settings supplied, using defaults");
            Settings::default()
        };

        let best = store.load_best_score();
        let gap_top = rng.uniform(settings.min_gap_height, settings.max_gap_height);

        Self {
            actor: ActorState::new(&settings),
            obstacle: ObstacleState::new(gap_top),
            score: ScoreKeeper::with_best(best),
            phase: GamePhase::Ready,
            world: WorldSize::default(),
            last_time: None,
            time_ticks: 0,
            settings,
            store,
            rng,
            events: Vec::new(),
            observer: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    pub fn obstacle(&self) -> &ObstacleState {
        &self.obstacle
    }

    pub fn score(&self) -> ScoreState {
        self.score.state()
    }

    pub fn world(&self) -> WorldSize {
        self.world
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        let score = self.score.state();
        Snapshot {
            phase: self.phase,
            actor_position: self.actor.pos,
            obstacle_offset: self.obstacle.offset,
            obstacle_gap_top: self.obstacle.gap_top,
            current_score: score.current,
            best_score: score.best,
            world: self.world,
        }
    }

    /// Called with a fresh snapshot after every tick and phase change
    pub fn set_observer(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Start => self.start(),
            Action::Jump => self.jump(),
            Action::Reset => self.reset(),
        }
    }

    /// Ready → Active. Ignored in any other phase.
    ///
    /// No clock reference is taken, so the first `on_clock` reading of the
    /// run moves nothing. Use `start_at` when the current time is known.
    pub fn start(&mut self) {
        self.begin_run(None);
    }

    /// Ready → Active with the clock reference stamped at `now`, so the
    /// first `on_clock` reading already integrates a full interval
    pub fn start_at(&mut self, now: f64) {
        self.begin_run(now.is_finite().then_some(now));
    }

    fn begin_run(&mut self, reference: Option<f64>) {
        if self.phase != GamePhase::Ready {
            log::debug!("Ignoring start in {:?}", self.phase);
            return;
        }
        self.phase = GamePhase::Active;
        self.last_time = reference;
        self.time_ticks = 0;
        self.events.push(GameEvent::Started);
        log::info!("Run started (best {})", self.score.best());
        self.notify();
    }

    /// Kick the actor upward. Only meaningful while Active.
    pub fn jump(&mut self) {
        if self.phase != GamePhase::Active {
            log::debug!("Ignoring jump in {:?}", self.phase);
            return;
        }
        physics::apply_impulse(&mut self.actor, self.settings.jump_impulse);
        self.events.push(GameEvent::Jumped);
    }

    /// Ended → Ready with everything but the best score reinitialized
    pub fn reset(&mut self) {
        if self.phase != GamePhase::Ended {
            log::debug!("Ignoring reset in {:?}", self.phase);
            return;
        }
        self.actor = ActorState::new(&self.settings);
        self.obstacle = ObstacleState::new(
            self.rng
                .uniform(self.settings.min_gap_height, self.settings.max_gap_height),
        );
        self.score.reset();
        self.last_time = None;
        self.time_ticks = 0;
        self.phase = GamePhase::Ready;
        self.events.push(GameEvent::Reset);
        log::info!("Reset to ready");
        self.notify();
    }

    /// Feed a clock reading (seconds). dt is measured from the previous
    /// reading, or from the `start_at` time. After a plain `start` the first
    /// reading only establishes the reference.
    ///
    /// Returns true if the pipeline ran.
    pub fn on_clock(&mut self, now: f64, world: WorldSize) -> bool {
        if self.phase != GamePhase::Active {
            self.world = world.sanitized();
            return false;
        }

        let dt = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        if now.is_finite() {
            self.last_time = Some(now);
        }
        self.advance(dt, world)
    }

    /// Run one tick with an explicit dt. Returns true if the pipeline ran.
    pub fn advance(&mut self, dt: f32, world: WorldSize) -> bool {
        self.world = world.sanitized();
        if self.phase != GamePhase::Active {
            return false;
        }

        let clamped = sanitize_dt(dt, self.settings.max_tick_dt);
        if clamped != dt {
            log::debug!("Tick dt {} clamped to {}", dt, clamped);
        }

        // Fast scrolling splits the tick so the pair cannot skip the pass
        // line or jump over the actor
        let substeps = self.settings.substeps(clamped);
        let step_dt = clamped / substeps as f32;
        self.time_ticks += 1;
        for _ in 0..substeps {
            self.run_pipeline(step_dt);
            if self.phase != GamePhase::Active {
                break;
            }
        }
        self.notify();
        true
    }

    /// Gravity, motion, bounds, scroll, recycle, collision, scoring
    fn run_pipeline(&mut self, dt: f32) {
        let settings = &self.settings;
        let world = self.world;

        physics::integrate(&mut self.actor, dt, settings.gravity);
        physics::clamp_to_bounds(
            &mut self.actor,
            world.height,
            settings.ground_height,
            settings.actor_size,
        );

        obstacle::advance(&mut self.obstacle, dt, settings.obstacle_speed);
        obstacle::recycle_if_needed(
            &mut self.obstacle,
            world.width,
            settings.obstacle_width,
            settings.min_gap_height,
            settings.max_gap_height,
            &mut self.rng,
        );

        if collision::test(&self.actor, &self.obstacle, settings, world.width) {
            self.phase = GamePhase::Ended;
            self.events.push(GameEvent::Crashed {
                score: self.score.current(),
            });
            log::info!(
                "Game over after {} ticks: score {}, best {}",
                self.time_ticks,
                self.score.current(),
                self.score.best()
            );
            return;
        }

        if let Some(PassEvent) =
            obstacle::check_passed(&mut self.obstacle, self.actor.pos.x, world.width, settings.obstacle_width)
        {
            let new_best = self.score.on_pass();
            self.events.push(GameEvent::Scored {
                score: self.score.current(),
            });
            if let Some(best) = new_best {
                log::info!("New best score: {}", best);
                self.store.save_best_score(best);
                self.events.push(GameEvent::NewBest { best });
            }
        }
    }

    fn notify(&mut self) {
        if self.observer.is_some() {
            let snapshot = self.snapshot();
            if let Some(observer) = self.observer.as_mut() {
                observer(&snapshot);
            }
        }
    }
}
