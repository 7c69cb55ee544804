//! Display surface capability used by the controller.

use anyhow::Result;

use crate::types::{Key, Tone};

/// Something the controller can draw on and read keys from.
///
/// Coordinates are screen (row, col) with (0, 0) at the top-left corner.
/// Drawing is buffered; nothing is guaranteed visible until [`Surface::refresh`].
pub trait Surface {
    /// Blank the whole drawing area.
    fn clear(&mut self);

    /// Put one character at (row, col). Positions outside the surface are ignored.
    fn draw_char(&mut self, row: u16, col: u16, ch: char, tone: Tone);

    /// Put a string starting at (row, col), one column per char.
    fn draw_str(&mut self, row: u16, col: u16, s: &str, tone: Tone) {
        for (i, ch) in s.chars().enumerate() {
            let Ok(dx) = u16::try_from(i) else {
                break;
            };
            self.draw_char(row, col.saturating_add(dx), ch, tone);
        }
    }

    /// Make everything drawn since the last refresh visible.
    fn refresh(&mut self) -> Result<()>;

    /// Current size as (rows, cols).
    fn query_dimensions(&self) -> Result<(u16, u16)>;

    /// Block until exactly one key is pressed.
    fn read_key(&mut self) -> Result<Key>;

    /// Give back any resources held by the surface. Must be idempotent.
    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}
