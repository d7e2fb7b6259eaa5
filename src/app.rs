use color_eyre::Result;
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};

use crate::clock::TickScheduler;
use crate::config::ShellConfig;
use crate::engine::{Engine, RoundPhase};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};

/// Longest the loop sleeps, so input stays responsive with slow tick periods
const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Which screen the shell is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Playing,
    Paused,
    Cleared,
    GameOver,
}

/// The terminal front end: owns the engine and drives it from input and the clock.
pub struct App {
    running: bool,
    paused: bool,
    engine: Engine,
    scheduler: TickScheduler,
    /// Frames info
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &ShellConfig) -> Self {
        let now = Instant::now();
        let mut scheduler = TickScheduler::new(config.tick_period);
        scheduler.start(now);

        Self {
            running: true,
            paused: false,
            engine: Engine::new(),
            scheduler,
            last_frame_time: now,
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    pub fn screen_state(&self) -> ScreenState {
        if self.paused {
            return ScreenState::Paused;
        }
        match self.engine.snapshot().phase() {
            RoundPhase::Playing => ScreenState::Playing,
            RoundPhase::Cleared => ScreenState::Cleared,
            RoundPhase::GameOver => ScreenState::GameOver,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            let snapshot = self.engine.snapshot();
            let state = self.screen_state();
            terminal.draw(|frame| {
                let view = RenderView {
                    state,
                    snapshot: &snapshot,
                    area: frame.area(),
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events(state)?;
            let actions = self.input_manager.actions().to_vec();
            let now = Instant::now();
            self.process_actions(&actions, now);
            self.advance(now);

            let idle = self
                .scheduler
                .time_until_next(Instant::now())
                .map_or(FRAME_BUDGET, |wait| wait.min(FRAME_BUDGET));
            std::thread::sleep(idle);
        }
        Ok(())
    }

    /// Applies input immediately, independent of tick boundaries
    pub fn process_actions(&mut self, actions: &[InputAction], now: Instant) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    log::info!("Quit requested with score {}", self.engine.score());
                    self.running = false;
                }
                InputAction::Pause => {
                    log::info!("Paused");
                    self.paused = true;
                    self.scheduler.stop();
                }
                InputAction::Resume => {
                    log::info!("Resumed");
                    self.paused = false;
                    self.scheduler.start(now);
                }
                InputAction::Restart => {
                    self.engine.restart();
                    self.paused = false;
                    self.scheduler.stop();
                    self.scheduler.start(now);
                }
                InputAction::MoveLeft | InputAction::MoveRight | InputAction::Fire => {
                    if let Some(command) = action.command() {
                        self.engine.apply(command);
                    }
                }
            }
        }
    }

    /// Runs every tick that fell due, then stops the clock if the round ended
    pub fn advance(&mut self, now: Instant) {
        for _ in 0..self.scheduler.due_ticks(now) {
            if self.engine.tick().game_over {
                break;
            }
        }
        if self.engine.is_game_over() {
            self.scheduler.stop();
        }
    }
}
