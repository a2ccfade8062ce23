//! The Elm-architecture application loop: [`Model`], [`Effect`],
//! [`AppRunner`], [`EventLoopDriver`].
//!
//! Everything runs synchronously on the UI thread: each input message is
//! processed to completion (update, effects, draw, diff) before the next
//! one is looked at, which is what makes the editor's drag-paint latch
//! race-free.

use std::collections::VecDeque;

use crate::messages::Msg;
use crate::surface::{diff, Patch, Surface};

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
pub enum Effect {
    /// A one-shot command; its optional result is re-enqueued as a message.
    Cmd(Box<dyn FnOnce() -> Option<Msg>>),
    /// Multiple effects in order.
    Batch(Vec<Effect>),
    /// Signal the application loop to stop.
    End,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cmd(_) => f.write_str("Effect::Cmd(..)"),
            Self::Batch(v) => f.debug_tuple("Effect::Batch").field(&v.len()).finish(),
            Self::End => f.write_str("Effect::End"),
        }
    }
}

/// Convenience constructor for an [`Effect::Cmd`].
pub fn cmd<F>(f: F) -> Effect
where
    F: FnOnce() -> Option<Msg> + 'static,
{
    Effect::Cmd(Box::new(f))
}

// ---------------------------------------------------------------------------
// Model / driver traits
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `surface`.
    fn draw(&self, surface: &Surface);
}

/// A back-end that owns the main event loop and feeds an [`AppRunner`].
pub trait EventLoopDriver {
    fn run(self, runner: AppRunner) -> Result<(), Box<dyn std::error::Error>>;
}

// ---------------------------------------------------------------------------
// AppRunner
// ---------------------------------------------------------------------------

/// Drives a boxed [`Model`]: queues messages, runs effects, and produces
/// frame patches for the driver to flush.
pub struct AppRunner {
    model: Box<dyn Model>,
    prev: Surface,
    curr: Surface,
    queue: VecDeque<Msg>,
    quit: bool,
}

impl AppRunner {
    /// Create a runner for a surface of the given dimensions.
    pub fn new(model: Box<dyn Model>, width: i32, height: i32) -> Self {
        Self {
            model,
            prev: Surface::new(width, height),
            curr: Surface::new(width, height),
            queue: VecDeque::new(),
            quit: false,
        }
    }

    /// Surface dimensions (width, height).
    pub fn size(&self) -> (i32, i32) {
        (self.curr.width(), self.curr.height())
    }

    /// Send [`Msg::Init`] through the model.
    pub fn init(&mut self) {
        self.handle_msg(Msg::Init);
    }

    /// Whether the model asked to stop.
    #[inline]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Feed a message through the model, running any effects it returns.
    /// Command results are re-enqueued and processed before returning.
    pub fn handle_msg(&mut self, msg: Msg) {
        self.queue.push_back(msg);
        while let Some(msg) = self.queue.pop_front() {
            if self.quit {
                return;
            }
            if let Some(effect) = self.model.update(msg) {
                self.run_effect(effect);
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::End => self.quit = true,
            Effect::Cmd(f) => {
                if let Some(msg) = f() {
                    self.queue.push_back(msg);
                }
            }
            Effect::Batch(effects) => {
                for e in effects {
                    if self.quit {
                        return;
                    }
                    self.run_effect(e);
                }
            }
        }
    }

    /// Draw the model, diff against the previous frame, and return the
    /// patch if anything changed.
    pub fn draw_patch(&mut self) -> Option<Patch> {
        if self.quit {
            return None;
        }
        self.model.draw(&self.curr);
        let patch = diff(&self.prev, &self.curr);
        if patch.is_empty() {
            return None;
        }
        self.prev.copy_from(&self.curr);
        Some(patch)
    }
}
