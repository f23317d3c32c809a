//! Projection of the living set onto the fixed viewport

use std::fmt;

use crate::config::{BoardSize, Glyphs};
use crate::engine::LivingSet;

/// One rendered board: `height` lines of `width` glyphs each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Renders the cells inside `[0, height) x [0, width)` and returns the frame
/// together with the number of cells that were visible.
///
/// Cells outside the viewport are skipped silently.
pub fn render(size: BoardSize, cells: &LivingSet, glyphs: Glyphs) -> (Frame, usize) {
    let mut grid = vec![vec![glyphs.dead; size.width]; size.height];
    let mut visible = 0;

    for cell in cells {
        let (Ok(row), Ok(col)) = (usize::try_from(cell.row), usize::try_from(cell.col)) else {
            continue;
        };
        if row < size.height && col < size.width {
            grid[row][col] = glyphs.alive;
            visible += 1;
        }
    }

    let lines = grid.into_iter().map(|row| row.into_iter().collect()).collect();
    (Frame { lines }, visible)
}
