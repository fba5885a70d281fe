//! A small event-driven runtime for ratatui applications.
//!
//! Nothing happens between terminal events: the runtime blocks until the next
//! event, hands it to the application, and redraws once the application's
//! state may have changed.

pub use self::{
    app::App,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod runtime;
mod screen;
