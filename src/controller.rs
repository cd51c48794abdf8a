use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{Config, MAX_SPEED, MIN_SPEED};
use crate::engine::{Algorithm, BarArray, SortSession, Stats, Step};
use crate::error::ConfigError;
use crate::generator;
use crate::input::Intent;
use crate::scene::View;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    pub mode: Mode,
    pub paused: bool,
    /// Sort steps per second.
    pub speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the bars, the active session and the UI state for the lifetime of
/// the event loop.
pub struct Controller {
    config: Config,
    rng: SmallRng,
    ui: UiState,
    bars: BarArray,
    session: Option<SortSession>,
    last_step: Option<Instant>,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let bars = generator::generate(&mut rng, config.bars, config.heights())?;
        let ui = UiState {
            mode: Mode::Menu,
            paused: true,
            speed: config.speed,
        };
        Ok(Self {
            config,
            rng,
            ui,
            bars,
            session: None,
            last_step: None,
        })
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn bars(&self) -> &BarArray {
        &self.bars
    }

    pub fn session(&self) -> Option<&SortSession> {
        self.session.as_ref()
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.session.as_ref().map(SortSession::algorithm)
    }

    pub fn stats(&self) -> Stats {
        self.session.as_ref().map(SortSession::stats).unwrap_or_default()
    }

    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(SortSession::is_finished)
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.ui.speed)
    }

    pub fn view(&self) -> View<'_> {
        View {
            mode: self.ui.mode,
            bars: self.bars.bars(),
            algorithm: self.algorithm(),
            stats: self.stats(),
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Result<Flow, ConfigError> {
        match (self.ui.mode, intent) {
            (_, Intent::Quit) => {
                tracing::info!("quit requested");
                return Ok(Flow::Quit);
            }
            (_, Intent::SetSpeed(speed)) => {
                self.ui.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
            }
            (Mode::Menu, Intent::Select(algorithm)) => self.start(algorithm)?,
            (Mode::Running, Intent::TogglePause) => {
                self.ui.paused = !self.ui.paused;
                tracing::info!(paused = self.ui.paused, "toggled pause");
            }
            (Mode::Running, Intent::Reset) => {
                if let Some(algorithm) = self.algorithm() {
                    self.start(algorithm)?;
                }
            }
            (Mode::Running, Intent::ReturnToMenu) => self.return_to_menu(),
            (mode, intent) => {
                tracing::debug!(?mode, ?intent, "intent ignored");
            }
        }
        Ok(Flow::Continue)
    }

    /// Advance the session once if the speed interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<Step> {
        if self.ui.mode != Mode::Running || self.ui.paused {
            return None;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) <= self.step_interval() {
                return None;
            }
        }
        let session = self.session.as_mut()?;
        if session.is_finished() {
            return None;
        }

        let step = session.advance(&mut self.bars).ok()?;
        self.last_step = Some(now);
        if let Step::Finished(_) = step {
            self.ui.paused = true;
        }
        Some(step)
    }

    fn start(&mut self, algorithm: Algorithm) -> Result<(), ConfigError> {
        self.bars = generator::generate(&mut self.rng, self.config.bars, self.config.heights())?;
        self.session = Some(SortSession::new(algorithm));
        self.ui.mode = Mode::Running;
        self.ui.paused = true;
        self.last_step = None;
        tracing::info!(%algorithm, bars = self.bars.len(), "session started");
        Ok(())
    }

    fn return_to_menu(&mut self) {
        self.session = None;
        self.ui = UiState {
            mode: Mode::Menu,
            paused: true,
            speed: self.config.speed,
        };
        self.last_step = None;
        tracing::info!("returned to menu");
    }
}
