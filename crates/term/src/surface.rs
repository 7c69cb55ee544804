//! Crossterm-backed [`Surface`] used by the binary.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    terminal,
};
use tracing::debug;

use crate::engine::Surface;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::input::{is_press, map_key_event};
use crate::renderer::TerminalRenderer;
use crate::types::{Key, Tone};

/// Real terminal: draws into a framebuffer, flushes diffs on refresh.
pub struct TerminalSurface {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl TerminalSurface {
    /// Take over the terminal (raw mode, alternate screen, hidden cursor).
    pub fn enter() -> Result<Self> {
        let (w, h) = terminal::size().context("failed to query terminal size")?;
        let mut renderer = TerminalRenderer::new();
        renderer.enter().context("failed to enter raw mode")?;
        Ok(Self {
            renderer,
            fb: FrameBuffer::new(w, h),
        })
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        if let Ok((w, h)) = terminal::size() {
            self.fb.resize(w, h);
        }
        self.fb.clear(Cell::default());
    }

    fn draw_char(&mut self, row: u16, col: u16, ch: char, tone: Tone) {
        self.fb.put_char(col, row, ch, CellStyle::for_tone(tone));
    }

    fn refresh(&mut self) -> Result<()> {
        self.renderer.draw_swap(&mut self.fb)
    }

    fn query_dimensions(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size().context("failed to query terminal size")?;
        Ok((rows, cols))
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if is_press(&key) => return Ok(map_key_event(key)),
                Event::Resize(cols, rows) => {
                    debug!(rows, cols, "terminal resized");
                    self.renderer.invalidate();
                }
                _ => {}
            }
        }
    }

    fn release(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}
