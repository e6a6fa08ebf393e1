use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEnd, GameEngine, GameSession};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Notice, Renderer};

/// Which screen the player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// Owns the session lifecycle: Menu -> Playing -> (Win | Lose | ExitToMenu) -> Menu
pub struct App {
    engine: GameEngine,
    screen: Screen,
    session: Option<GameSession>,
    notice: Option<Notice>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    /// Last steering keypress since the previous tick; last one wins
    pending_direction: Option<Direction>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self::from_engine(GameEngine::new(config))
    }

    /// App with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_engine(GameEngine::with_seed(config, seed))
    }

    fn from_engine(engine: GameEngine) -> Self {
        let renderer = Renderer::new(engine.config().clone());
        Self {
            engine,
            screen: Screen::Menu,
            session: None,
            notice: None,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run the event loop with cleanup
        let result = self.run_event_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.engine.config().tick_ms);
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.tick_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.is_session_running() {
                        self.metrics.update();
                    }
                    terminal.draw(|frame| {
                        match self.screen {
                            Screen::Menu => self.renderer.render_menu(frame, &self.metrics),
                            Screen::Playing => {
                                if let Some(session) = &self.session {
                                    self.renderer.render_game(
                                        frame,
                                        session,
                                        &self.metrics,
                                        self.notice.as_ref(),
                                    );
                                }
                            }
                        }
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_key_action(action);
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) {
        // An open notice swallows the next keypress as its acknowledgment,
        // including keys that map to no action
        if self.notice.is_some() {
            self.dismiss_notice();
            return;
        }

        match (self.screen, action) {
            (Screen::Menu, KeyAction::Confirm) => self.start_game(),
            (Screen::Menu, KeyAction::Back) | (_, KeyAction::Quit) => {
                self.should_quit = true;
            }
            (Screen::Playing, KeyAction::Steer(direction)) => {
                self.pending_direction = Some(direction);
            }
            (Screen::Playing, KeyAction::Back) => self.exit_to_menu(),
            _ => {}
        }
    }

    /// Advance the game by one tick, if one is in progress
    fn tick_game(&mut self) {
        if self.screen != Screen::Playing || self.notice.is_some() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.running {
            return;
        }

        let action = self
            .pending_direction
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        let result = self.engine.step(session, action);

        if let Some(end) = result.end {
            let won = end == GameEnd::Win;
            self.metrics.on_game_over(session.score, won);
            self.notice = Some(make_notice(end, session));
        }
    }

    fn start_game(&mut self) {
        self.session = Some(self.engine.reset());
        self.screen = Screen::Playing;
        self.notice = None;
        self.pending_direction = None;
        self.metrics.on_game_start();
    }

    /// Stop ticking immediately and discard the session
    fn exit_to_menu(&mut self) {
        self.session = None;
        self.screen = Screen::Menu;
        self.notice = None;
        self.pending_direction = None;
    }

    fn dismiss_notice(&mut self) {
        self.notice = None;
        self.exit_to_menu();
    }

    fn is_session_running(&self) -> bool {
        self.screen == Screen::Playing
            && self.session.as_ref().is_some_and(|s| s.running)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn make_notice(end: GameEnd, session: &GameSession) -> Notice {
    let length = session.final_length();
    let elapsed = session.elapsed_secs();

    match end {
        GameEnd::Win => Notice {
            title: "You Win".to_string(),
            lines: vec![
                format!("You Win! The snake reaches {length} units!"),
                format!("Time taken: {elapsed:.2} seconds."),
            ],
        },
        GameEnd::Loss(_) => Notice {
            title: "Game Over".to_string(),
            lines: vec![
                format!("Game Over! Snake length: {length} units."),
                format!("Time taken: {elapsed:.2} seconds."),
            ],
        },
    }
}
