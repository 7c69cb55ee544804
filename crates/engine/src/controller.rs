//! Interactive controller - the render / wait / evolve loop as a state machine
//!
//! ```text
//! Init -> Render -> WaitInput --(Q)--> Terminate
//!           ^           |
//!           |        (other)
//!           |           v
//!           +------- Evolve
//! ```
//!
//! Each call to [`Controller::step`] performs exactly one transition, so tests
//! can drive the loop one state at a time with a scripted [`Surface`].

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{evolve, Grid, SimpleRng};
use crate::surface::Surface;
use crate::types::{Tone, ALIVE_GLYPH, BORDER_COLS, BORDER_OFFSET, BORDER_ROWS, STATUS_HINT};

/// Externally visible controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Render,
    WaitInput,
    Evolve,
    Terminate,
}

/// Internal state; the live grid moves between phases by value.
#[derive(Debug)]
enum State {
    Init,
    Render(Grid),
    WaitInput(Grid),
    Evolve(Grid),
    Terminate,
}

/// Owns the surface and the single live grid.
pub struct Controller<S: Surface> {
    surface: S,
    seed: u32,
    generation: u64,
    state: State,
}

impl<S: Surface> Controller<S> {
    pub fn new(surface: S, seed: u32) -> Self {
        Self {
            surface,
            seed,
            generation: 0,
            state: State::Init,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Init => Phase::Init,
            State::Render(_) => Phase::Render,
            State::WaitInput(_) => Phase::WaitInput,
            State::Evolve(_) => Phase::Evolve,
            State::Terminate => Phase::Terminate,
        }
    }

    /// The live grid, if the controller is past Init and not terminated
    pub fn grid(&self) -> Option<&Grid> {
        match &self.state {
            State::Render(g) | State::WaitInput(g) | State::Evolve(g) => Some(g),
            State::Init | State::Terminate => None,
        }
    }

    /// Generations evolved since Init
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Run until the user quits. Returns the generation reached.
    pub fn run(&mut self) -> Result<u64> {
        while self.step()? != Phase::Terminate {}
        Ok(self.generation)
    }

    /// Perform one state transition and return the new phase.
    ///
    /// Stepping a terminated controller does nothing.
    pub fn step(&mut self) -> Result<Phase> {
        let state = std::mem::replace(&mut self.state, State::Terminate);
        self.state = match state {
            State::Init => State::Render(self.init()?),
            State::Render(grid) => {
                self.render(&grid)?;
                State::WaitInput(grid)
            }
            State::WaitInput(grid) => {
                let key = self.surface.read_key()?;
                if key.is_quit() {
                    info!(generation = self.generation, "quit requested");
                    self.surface.release()?;
                    State::Terminate
                } else {
                    State::Evolve(grid)
                }
            }
            State::Evolve(grid) => {
                let next = evolve(&grid);
                self.generation += 1;
                debug!(
                    generation = self.generation,
                    alive = next.alive_count(),
                    "evolved"
                );
                State::Render(next)
            }
            State::Terminate => State::Terminate,
        };
        Ok(self.phase())
    }

    fn init(&mut self) -> Result<Grid> {
        let (rows, cols) = self.surface.query_dimensions()?;
        let n = rows.saturating_sub(BORDER_ROWS) as usize;
        let m = cols.saturating_sub(BORDER_COLS) as usize;

        let mut rng = SimpleRng::new(self.seed);
        let grid = Grid::random(n, m, &mut rng).with_context(|| {
            format!("display of {}x{} is too small for a grid", rows, cols)
        })?;

        info!(
            rows = n,
            cols = m,
            seed = self.seed,
            alive = grid.alive_count(),
            "grid seeded"
        );
        Ok(grid)
    }

    fn render(&mut self, grid: &Grid) -> Result<()> {
        let (n, m) = grid.dimensions();
        let (n, m) = (n as u16, m as u16);

        self.surface.clear();
        self.draw_border(n, m);

        for (r, c) in grid.iter_alive() {
            self.surface.draw_char(
                r as u16 + BORDER_OFFSET,
                c as u16 + BORDER_OFFSET,
                ALIVE_GLYPH,
                Tone::Cell,
            );
        }

        self.draw_status(n, m, grid.alive_count());
        self.surface.refresh()
    }

    /// Frame around an n x m field: rows 0..=n+1, cols 0..=m+1.
    fn draw_border(&mut self, n: u16, m: u16) {
        let bottom = n + 1;
        let right = m + 1;

        for (row, col) in [(0, 0), (0, right), (bottom, 0), (bottom, right)] {
            self.surface.draw_char(row, col, '+', Tone::Border);
        }
        for col in 1..right {
            self.surface.draw_char(0, col, '-', Tone::Border);
            self.surface.draw_char(bottom, col, '-', Tone::Border);
        }
        for row in 1..bottom {
            self.surface.draw_char(row, 0, '|', Tone::Border);
            self.surface.draw_char(row, right, '|', Tone::Border);
        }
    }

    fn draw_status(&mut self, n: u16, m: u16, alive: usize) {
        let row = n + 2;
        let hint_len = STATUS_HINT.chars().count() as u16;
        let hint_col = (m + 1).saturating_sub(hint_len);
        self.surface.draw_str(row, hint_col, STATUS_HINT, Tone::Text);

        let stats = format!("Generation {}  Alive {}", self.generation, alive);
        if (stats.len() as u16) < hint_col {
            self.surface.draw_str(row, 0, &stats, Tone::Text);
        }
    }
}
