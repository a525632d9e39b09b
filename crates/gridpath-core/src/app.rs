//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].
//!
//! Everything runs on one thread. While the model reports
//! [`animating`](Model::animating), the loop polls input without blocking and
//! then delivers exactly one [`Msg::Tick`], so every animation step is
//! followed by a draw and by a fresh look at pending input.

use std::cell::Cell;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crate::canvas::{Canvas, Frame, Painter};
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Context (stop flag)
// ---------------------------------------------------------------------------

/// Stop flag shared by the loop and the driver for one [`App::run`].
#[derive(Debug)]
pub struct Context {
    done: Cell<bool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Cell::new(false),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.set(true);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state. Implementations finish with
    /// [`Painter::present`].
    fn draw(&self, painter: &mut dyn Painter);

    /// Whether the model wants a [`Msg::Tick`] on every loop iteration.
    fn animating(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait up to `timeout` for input, then send every available message
    /// through `tx` and return. A zero timeout must not block.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a diff frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    /// Canvas width in pixels.
    pub width: i32,
    /// Canvas height in pixels.
    pub height: i32,
    /// How long an idle poll may block waiting for input.
    pub frame_interval: Duration,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    canvas: Canvas,
    frame_interval: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            canvas: Canvas::new(config.width, config.height),
            frame_interval: config.frame_interval,
        }
    }

    /// The canvas the model draws into.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Consume the app, returning the model and driver.
    pub fn into_parts(self) -> (M, D) {
        (self.model, self.driver)
    }

    /// Run the main Model-View-Update loop.
    ///
    /// 1. Initialises the driver.
    /// 2. Sends `Msg::Init` through the model.
    /// 3. Enters the event loop: poll → tick → update → draw → diff → flush.
    /// 4. Stops when the model returns `Effect::End`.
    ///
    /// The driver is closed on every exit path once `init` succeeded.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;

        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let result = self.event_loop(&ctx, &tx, &rx);
        self.driver.close();
        if let Err(e) = &result {
            log::error!("event loop failed: {e}");
        }
        result
    }

    fn event_loop(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
        rx: &Receiver<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.process_pending(rx, ctx)?;

        while !ctx.is_done() {
            let animating = self.model.animating();
            let timeout = if animating {
                Duration::ZERO
            } else {
                self.frame_interval
            };
            self.driver.poll_msgs(ctx, tx, timeout)?;

            if ctx.is_done() {
                break;
            }

            // Queued after the input so a cancel is seen before the step.
            if animating {
                tx.send(Msg::Tick).ok();
            }

            self.process_pending(rx, ctx)?;
        }

        Ok(())
    }

    /// Drain queued messages, update the model, draw, and flush.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            if matches!(msg, Msg::Screen { .. }) {
                self.canvas.invalidate();
            }
            needs_draw = true;
            if let Some(Effect::End) = self.model.update(msg) {
                ctx.cancel();
                return Ok(());
            }
        }

        if needs_draw {
            self.model.draw(&mut self.canvas);
            if let Some(frame) = self.canvas.take_frame() {
                self.driver.flush(frame)?;
            }
        }

        Ok(())
    }
}
