use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{info, warn};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block as BlockWidget, Padding},
};
use ratatui_runtime::{Runtime, Screen, ScreenTransition};
use slide2048_engine::{Direction, GameSession, HighScore};

use crate::{
    command::play::screens::NoticeScreen,
    high_score_store::HighScoreStore,
    view::widgets::{GridDisplay, KeyBinding, KeyBindingDisplay, ScoreDisplay, style},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Move(Direction),
    Reset,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return (event.code == KeyCode::Char('c')).then_some(Self::Quit);
        }
        match event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Move(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Move(Direction::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::Move(Direction::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::Move(Direction::Right)),
            KeyCode::Char('r') => Some(Self::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn bindings() -> &'static [KeyBinding<'static>] {
        &[
            (&["←↑↓→", "hjkl"], "Move"),
            (&["r"], "Reset"),
            (&["q", "Esc"], "Quit"),
        ]
    }
}

/// The game itself: grid, score panel and key help.
#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    high_score: HighScore,
    store: HighScoreStore,
}

impl PlayScreen {
    pub fn new(session: GameSession, high_score: HighScore, store: HighScoreStore) -> Self {
        let mut this = Self {
            session,
            high_score,
            store,
        };
        this.record_score();
        this
    }

    fn apply_move(&mut self, direction: Direction) -> ScreenTransition {
        if self.session.session_state().is_game_over() {
            return ScreenTransition::Stay;
        }

        let outcome = self.session.apply_move(direction);
        if outcome.effective {
            self.record_score();
        }

        match NoticeScreen::for_outcome(&outcome, self.session.stats().score()) {
            Some(notice) => ScreenTransition::Push(Box::new(notice)),
            None => ScreenTransition::Stay,
        }
    }

    fn reset(&mut self) {
        info!(
            "reset with score {} after {} moves",
            self.session.stats().score(),
            self.session.stats().moves()
        );
        self.session.reset();
    }

    /// Raises the high score to the current score and persists it if it changed.
    fn record_score(&mut self) {
        if !self.high_score.observe(self.session.stats().score()) {
            return;
        }
        if let Err(e) = self.store.save(self.high_score) {
            warn!(
                "failed to save high score to {}: {e:#}",
                self.store.path().display()
            );
        }
    }

    fn status_line(&self) -> Line<'static> {
        if self.session.session_state().is_game_over() {
            Line::styled("GAME OVER: press r to play again", style::GAME_OVER)
        } else if self.session.has_won() {
            Line::styled("2048 reached! Keep going", style::WIN)
        } else {
            Line::default()
        }
    }
}

impl Screen for PlayScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.request_redraw();
    }

    fn on_inactive(&mut self, _runtime: &mut Runtime) {}

    fn on_close(&mut self, _runtime: &mut Runtime) {
        info!(
            "closing with score {} (high score {})",
            self.session.stats().score(),
            self.high_score.value()
        );
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let Some(action) = event
            .as_key_event()
            .and_then(|event| Action::from_key_event(&event))
        else {
            return ScreenTransition::Stay;
        };
        match action {
            Action::Move(direction) => self.apply_move(direction),
            Action::Reset => {
                self.reset();
                ScreenTransition::Stay
            }
            Action::Quit => ScreenTransition::Exit,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let grid_display = GridDisplay::new(self.session.grid()).block(BlockWidget::bordered());
        let score_display = ScoreDisplay::new(&self.session, self.high_score)
            .block(BlockWidget::bordered().padding(Padding::horizontal(1)));
        let help = KeyBindingDisplay::new(Action::bindings()).block(BlockWidget::bordered());

        let width = grid_display.width() + 1 + score_display.width();
        let main_height = u16::max(grid_display.height(), score_display.height());
        let viewport = frame
            .area()
            .centered(Constraint::Length(width), Constraint::Length(main_height + 5));

        let [title_area, main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(main_height),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(viewport);
        let [grid_area, score_area] = Layout::horizontal([
            Constraint::Length(grid_display.width()),
            Constraint::Length(score_display.width()),
        ])
        .spacing(1)
        .areas(main_area);
        let score_area = score_area.centered_vertically(Constraint::Length(score_display.height()));

        frame.render_widget(Line::styled("2048", style::TITLE).centered(), title_area);
        frame.render_widget(grid_display, grid_area);
        frame.render_widget(score_display, score_area);
        frame.render_widget(self.status_line().centered(), status_area);
        frame.render_widget(help, help_area);
    }
}
