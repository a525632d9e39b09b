//! Crossterm terminal driver for gridpath.
//!
//! Provides a [`CrosstermDriver`] that implements [`gridpath_core::Driver`].
//! One canvas pixel is drawn as [`CELL_W`] terminal columns by one terminal
//! row, which keeps cells roughly square on common fonts.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{self, Color as CtColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{
    Point,
    app::{Context, Driver},
    canvas::Frame,
    messages::{Key, Msg, MouseAction},
    style::Color,
};

/// Terminal columns per canvas pixel.
pub const CELL_W: u16 = 2;

/// Maps a [`gridpath_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Maps a crossterm key event to a gridpath message.
fn key_msg(ev: KeyEvent) -> Option<Msg> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }
    if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }
    let key = match ev.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(Msg::key(key))
}

/// Maps a crossterm mouse event to a gridpath message in canvas pixels.
fn mouse_msg(me: MouseEvent) -> Option<Msg> {
    let action = match me.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
        MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
        MouseEventKind::Down(MouseButton::Middle) => MouseAction::Auxiliary,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Drag(_) => MouseAction::Move,
        MouseEventKind::Moved => MouseAction::Hover,
        _ => return None,
    };
    Some(Msg::mouse(
        action,
        (me.column / CELL_W) as i32,
        me.row as i32,
    ))
}

/// A terminal back-end for gridpath using crossterm.
pub struct CrosstermDriver {
    canvas: Option<(i32, i32)>,
    term_cols: u16,
    term_rows: u16,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            canvas: None,
            term_cols: 0,
            term_rows: 0,
        }
    }

    /// Declare the canvas size so `init` can warn about a small terminal.
    pub fn with_canvas_size(mut self, width: i32, height: i32) -> Self {
        self.canvas = Some((width, height));
        self
    }

    fn check_fit(&self) {
        if let Some((w, h)) = self.canvas {
            let need_cols = w.max(0) as u32 * CELL_W as u32;
            if need_cols > self.term_cols as u32 || h.max(0) as u32 > self.term_rows as u32 {
                log::warn!(
                    "terminal is {}x{}, canvas needs {}x{}; the grid will be clipped",
                    self.term_cols,
                    self.term_rows,
                    need_cols,
                    h
                );
            }
        }
    }

    /// Whether canvas pixel `p` has a terminal cell to go to.
    fn on_screen(&self, p: Point) -> bool {
        p.x >= 0
            && p.y >= 0
            && (p.x as u32 + 1) * (CELL_W as u32) <= self.term_cols as u32
            && (p.y as u32) < self.term_rows as u32
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (cols, rows) = terminal::size()?;
        self.term_cols = cols;
        self.term_rows = rows;
        self.check_fit();

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal initialised at {cols}x{rows}");
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }

            let msg = match event::read()? {
                Event::Key(ev) => key_msg(ev),
                Event::Mouse(me) => mouse_msg(me),
                Event::Resize(w, h) => {
                    self.term_cols = w;
                    self.term_rows = h;
                    execute!(io::stdout(), terminal::Clear(ClearType::All))?;
                    Some(Msg::Screen {
                        width: (w / CELL_W) as i32,
                        height: h as i32,
                    })
                }
                _ => None,
            };

            if let Some(m) = msg {
                tx.send(m).ok();
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout().lock();
        let blank = " ".repeat(CELL_W as usize);

        for fp in frame.pixels.iter().filter(|fp| self.on_screen(fp.pos)) {
            queue!(
                stdout,
                cursor::MoveTo(fp.pos.x as u16 * CELL_W, fp.pos.y as u16),
                SetBackgroundColor(to_ct_color(fp.color)),
                style::Print(&blank)
            )?;
        }

        queue!(stdout, style::ResetColor)?;
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let _ = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
