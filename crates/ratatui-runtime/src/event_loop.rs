use std::io;

use crossterm::event::{self, Event, KeyEventKind};

use crate::event::TuiEvent;

/// Event loop state management.
///
/// The loop never wakes up on its own: it renders when the screen is dirty and
/// otherwise blocks until the terminal reports an event.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Forces a render before the next terminal event is read.
    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the next event.
    ///
    /// Blocks until a crossterm event occurs unless a render is pending.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }

        let event = event::read()?;
        self.dirty = changes_state(&event);
        Ok(event.into())
    }
}

/// Key releases never change application state, so they do not trigger a redraw.
fn changes_state(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind != KeyEventKind::Release,
        _ => true,
    }
}
