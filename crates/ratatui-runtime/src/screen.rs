use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::{App, Runtime};

/// Individual screen in the application.
///
/// # Lifecycle
///
/// 1. **Created** - Screen is constructed
/// 2. **[`on_active`]** - Screen becomes active (foreground)
/// 3. **Active** - Screen handles events and draws
/// 4. **[`on_inactive`]** - Screen goes to background (Push) or is being removed (Pop/Replace/Exit)
/// 5. **[`on_close`]** - Screen is being removed from stack (Pop/Replace/Exit only)
/// 6. **Dropped** - Screen is destroyed
///
/// # Overlays
///
/// A screen that returns `true` from [`is_overlay`] is drawn on top of the
/// screens below it instead of replacing them, which is how modal dialogs are
/// built. Only the topmost screen receives events.
///
/// ```rust
/// use crossterm::event::Event;
/// use ratatui::Frame;
/// use ratatui_runtime::{Runtime, Screen, ScreenTransition};
///
/// #[derive(Debug)]
/// struct Dialog {}
///
/// impl Screen for Dialog {
///     fn on_active(&mut self, _runtime: &mut Runtime) {}
///     fn on_inactive(&mut self, _runtime: &mut Runtime) {}
///     fn on_close(&mut self, _runtime: &mut Runtime) {}
///
///     fn is_overlay(&self) -> bool {
///         true
///     }
///
///     fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
///         if matches!(event, Event::Key(_)) {
///             ScreenTransition::Pop
///         } else {
///             ScreenTransition::Stay
///         }
///     }
///     fn draw(&self, _frame: &mut Frame) {}
/// }
/// ```
///
/// [`on_active`]: Self::on_active
/// [`on_inactive`]: Self::on_inactive
/// [`on_close`]: Self::on_close
/// [`is_overlay`]: Self::is_overlay
pub trait Screen: fmt::Debug {
    /// Called when this screen becomes active (foreground).
    ///
    /// This is called:
    ///
    /// - On app startup (for the initial screen)
    /// - When this screen is pushed and becomes active
    /// - When popping back to this screen (returning from a child screen)
    fn on_active(&mut self, runtime: &mut Runtime);

    /// Called when this screen becomes inactive (background).
    ///
    /// For Pop/Replace/Exit, [`on_close`] follows immediately.
    ///
    /// [`on_close`]: Self::on_close
    fn on_inactive(&mut self, runtime: &mut Runtime);

    /// Called when this screen is being closed and removed from the stack.
    ///
    /// Not called when another screen is pushed on top. Use this for cleanup
    /// that should only happen when the screen is permanently removed, such as
    /// saving state.
    fn on_close(&mut self, runtime: &mut Runtime);

    /// Returns whether the screens below stay visible while this one is on top.
    fn is_overlay(&self) -> bool {
        false
    }

    /// Handles terminal events and returns transition.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    ///
    /// Current screen goes to background (`on_inactive` called).
    /// When the new screen is popped, current screen is reactivated (`on_active` called).
    Push(Box<dyn Screen>),

    /// Pop the current screen and return to the previous one.
    Pop,

    /// Replace the current screen with a new one.
    Replace(Box<dyn Screen>),

    /// Exit the application.
    Exit,
}

/// Screen stack manager that implements App.
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    /// Creates a new screen stack with an initial screen.
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    /// Applies a screen transition.
    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => return,

            ScreenTransition::Push(mut new_screen) => {
                if let Some(current) = self.screens.last_mut() {
                    current.on_inactive(runtime);
                }
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }

            ScreenTransition::Pop => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_inactive(runtime);
                    old_screen.on_close(runtime);
                }
                if let Some(prev_screen) = self.screens.last_mut() {
                    prev_screen.on_active(runtime);
                }
            }

            ScreenTransition::Replace(mut new_screen) => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_inactive(runtime);
                    old_screen.on_close(runtime);
                }
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }

            ScreenTransition::Exit => {
                while let Some(mut screen) = self.screens.pop() {
                    screen.on_inactive(runtime);
                    screen.on_close(runtime);
                }
                self.should_exit = true;
            }
        }
        runtime.request_redraw();
    }

    /// Returns the screens to draw, bottom first.
    ///
    /// Drawing starts at the topmost screen that is not an overlay.
    fn visible_screens(&self) -> &[Box<dyn Screen + 'a>] {
        let base = self
            .screens
            .iter()
            .rposition(|screen| !screen.is_overlay())
            .unwrap_or(0);
        &self.screens[base..]
    }
}

impl App for ScreenStack<'_> {
    fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(runtime, &event);
            self.apply_transition(runtime, transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        for screen in self.visible_screens() {
            screen.draw(frame);
        }
    }
}
