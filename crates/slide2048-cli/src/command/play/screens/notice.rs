use crossterm::event::{Event, KeyCode, KeyEventKind};
use log::debug;
use ratatui::{Frame, text::Line};
use ratatui_runtime::{Runtime, Screen, ScreenTransition};
use slide2048_engine::{MoveOutcome, Tile};

use crate::view::widgets::{NoticeDisplay, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Win,
    GameOver,
}

/// Modal acknowledgment shown over the game.
///
/// The game receives no input until the player dismisses it.
#[derive(Debug)]
pub struct NoticeScreen {
    kind: NoticeKind,
    score: u64,
    next: Option<Box<NoticeScreen>>,
}

impl NoticeScreen {
    pub fn new(kind: NoticeKind, score: u64) -> Self {
        Self {
            kind,
            score,
            next: None,
        }
    }

    /// Returns the notice to show after a move, if any.
    ///
    /// When a single move both wins and ends the game, the game-over notice
    /// follows the win notice.
    pub fn for_outcome(outcome: &MoveOutcome, score: u64) -> Option<Self> {
        let game_over = outcome
            .game_over
            .then(|| Self::new(NoticeKind::GameOver, score));
        if outcome.won {
            Some(Self {
                next: game_over.map(Box::new),
                ..Self::new(NoticeKind::Win, score)
            })
        } else {
            game_over
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }
}

fn is_acknowledgment(event: &Event) -> bool {
    event.as_key_event().is_some_and(|key| {
        key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc)
    })
}

impl Screen for NoticeScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        debug!("showing {:?} notice", self.kind());
        runtime.request_redraw();
    }

    fn on_inactive(&mut self, _runtime: &mut Runtime) {}

    fn on_close(&mut self, _runtime: &mut Runtime) {}

    fn is_overlay(&self) -> bool {
        true
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        if !is_acknowledgment(event) {
            return ScreenTransition::Stay;
        }
        match self.next.take() {
            Some(next) => ScreenTransition::Replace(next),
            None => ScreenTransition::Pop,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let notice = match self.kind {
            NoticeKind::Win => NoticeDisplay::new(" YOU WIN! ", style::WIN)
                .line(format!("You reached {}.", Tile::WINNING))
                .line(format!("Score: {}", self.score))
                .line("")
                .line(Line::styled("Enter: keep playing", style::LABEL)),
            NoticeKind::GameOver => NoticeDisplay::new(" GAME OVER ", style::GAME_OVER)
                .line("No move is possible.")
                .line(format!("Final score: {}", self.score))
                .line("")
                .line(Line::styled("Enter, then r: try again", style::LABEL)),
        };
        frame.render_widget(notice, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use slide2048_engine::Direction;

    use super::*;

    fn outcome(won: bool, game_over: bool) -> MoveOutcome {
        MoveOutcome {
            direction: Direction::Left,
            effective: true,
            merge_sum: 2048,
            spawned: None,
            won,
            game_over,
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_for_outcome() {
        assert!(NoticeScreen::for_outcome(&outcome(false, false), 0).is_none());

        let notice = NoticeScreen::for_outcome(&outcome(true, false), 10).unwrap();
        assert_eq!(notice.kind(), NoticeKind::Win);
        assert!(notice.next.is_none());

        let notice = NoticeScreen::for_outcome(&outcome(false, true), 10).unwrap();
        assert_eq!(notice.kind(), NoticeKind::GameOver);
    }

    #[test]
    fn test_win_then_game_over_chain() {
        let mut runtime = Runtime::new();
        let mut notice = NoticeScreen::for_outcome(&outcome(true, true), 10).unwrap();
        assert_eq!(notice.kind(), NoticeKind::Win);

        match notice.handle_event(&mut runtime, &key(KeyCode::Enter)) {
            ScreenTransition::Replace(next) => assert!(format!("{next:?}").contains("GameOver")),
            other => panic!("expected replace, got {other:?}"),
        }
        assert!(matches!(
            notice.handle_event(&mut runtime, &key(KeyCode::Enter)),
            ScreenTransition::Pop
        ));
    }

    #[test]
    fn test_blocks_other_keys() {
        let mut runtime = Runtime::new();
        let mut notice = NoticeScreen::new(NoticeKind::GameOver, 0);
        for code in [KeyCode::Left, KeyCode::Char('r'), KeyCode::Char('q')] {
            assert!(matches!(
                notice.handle_event(&mut runtime, &key(code)),
                ScreenTransition::Stay
            ));
        }
        assert!(matches!(
            notice.handle_event(&mut runtime, &key(KeyCode::Esc)),
            ScreenTransition::Pop
        ));
    }
}
