//! Crossterm rendering of a traversal.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{self, Color, Print, SetBackgroundColor},
    terminal::{self, ClearType},
};
use log::error;
use pathviz_core::{CellKind, Context, Matrix, PathMask, Point, Terrain, UNVISITED, VisitedOrder, WeightMap};
use pathviz_paths::Observer;

/// Raw mode and the alternate screen for as long as the value lives.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        crossterm::execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until a key is pressed.
pub fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(());
        }
    }
}

/// Terminal column and row of a grid cell two columns wide, saturating at
/// the largest coordinate the terminal accepts.
fn screen_pos(x: i32, y: i32) -> (u16, u16) {
    let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
    (clamp(x.saturating_mul(2)), clamp(y))
}

/// Background colour of a cell.
fn cell_color(kind: CellKind, weight: i32, visited: bool, on_path: bool, current: bool) -> Color {
    match kind {
        CellKind::Water => Color::Rgb { r: 30, g: 90, b: 200 },
        CellKind::Source => Color::Rgb { r: 220, g: 60, b: 40 },
        CellKind::Target => Color::Rgb { r: 200, g: 40, b: 200 },
        _ if current => Color::White,
        _ if on_path => Color::Rgb { r: 250, g: 210, b: 40 },
        CellKind::Bridge if visited => Color::Rgb { r: 170, g: 150, b: 170 },
        CellKind::Bridge => Color::Rgb { r: 140, g: 90, b: 40 },
        _ => {
            // Heavier grass is darker.
            let shade = (3 - weight.clamp(1, 3)) as u8 * 30;
            if visited {
                Color::Rgb { r: 120 + shade, g: 200, b: 210 }
            } else {
                Color::Rgb { r: 40, g: 130 + shade, b: 50 }
            }
        }
    }
}

/// An [`Observer`] drawing every snapshot to the terminal.
///
/// Each cell is two columns wide. Pauses double as the input loop: `q` or
/// `Esc` cancels the shared [`Context`].
pub struct TerminalView<'a> {
    terrain: &'a Terrain,
    weights: &'a WeightMap,
    visited: VisitedOrder,
    path: PathMask,
    current: Option<Point>,
    ctx: Context,
    out: Stdout,
    dirty: Matrix<bool>,
}

impl<'a> TerminalView<'a> {
    pub fn new(terrain: &'a Terrain, weights: &'a WeightMap, ctx: Context) -> Self {
        let bounds = terrain.bounds();
        Self {
            terrain,
            weights,
            visited: Matrix::with_bounds(bounds, UNVISITED),
            path: Matrix::with_bounds(bounds, false),
            current: None,
            ctx,
            out: io::stdout(),
            dirty: Matrix::with_bounds(bounds, true),
        }
    }

    /// Redraw the cells that changed since the last call.
    pub fn draw(&mut self) -> io::Result<()> {
        for (p, dirty) in self.dirty.iter() {
            if !dirty {
                continue;
            }
            let color = cell_color(
                self.terrain.at(p).unwrap_or_default(),
                self.weights.at(p).unwrap_or(1),
                self.visited.at(p).is_some_and(|o| o != UNVISITED),
                self.path.at(p) == Some(true),
                self.current == Some(p),
            );
            let (col, row) = screen_pos(p.x, p.y);
            queue!(
                self.out,
                cursor::MoveTo(col, row),
                SetBackgroundColor(color),
                Print("  ")
            )?;
        }
        self.dirty.fill(false);
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }

    /// Write a status line below the grid.
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        let (_, row) = screen_pos(0, self.terrain.height().saturating_add(1));
        queue!(
            self.out,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }

    fn redraw(&mut self) {
        if let Err(e) = self.draw() {
            error!("drawing failed: {e}");
            self.ctx.cancel();
        }
    }

    /// Drain pending key presses, cancelling on `q` or `Esc`.
    fn poll_keys(&mut self, timeout: Duration) -> io::Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(());
            }
            if let Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                self.ctx.cancel();
                return Ok(());
            }
        }
    }
}

impl Observer for TerminalView<'_> {
    fn on_visited(&mut self, visited: &VisitedOrder) {
        for (p, o) in visited.iter() {
            if self.visited.at(p) != Some(o) {
                self.dirty.set(p, true);
            }
        }
        self.visited.clone_from(visited);
        self.redraw();
    }

    fn on_current(&mut self, node: Option<Point>) {
        for p in [self.current, node].into_iter().flatten() {
            self.dirty.set(p, true);
        }
        self.current = node;
    }

    fn on_path(&mut self, path: &PathMask) {
        for (p, on) in path.iter() {
            if self.path.at(p) != Some(on) {
                self.dirty.set(p, true);
            }
        }
        self.path.clone_from(path);
        self.redraw();
    }

    fn pause(&mut self, delay: Duration) {
        if let Err(e) = self.poll_keys(delay) {
            error!("reading input failed: {e}");
            self.ctx.cancel();
        }
    }
}
