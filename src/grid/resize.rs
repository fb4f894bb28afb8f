// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grid resizing.
//!
//! Grounded directly in the reference implementation's `tresize`: drop
//! rows from the top of both screens if the cursor would otherwise fall
//! outside the new height, resize every surviving row, allocate any new
//! rows, re-derive tab stops, reset the scroll region, and clamp the
//! cursor.

use crate::error::TermError;
use crate::grid::cell::Glyph;
use crate::grid::term::Grid;

impl Grid {
    /// Resizes the terminal to `col` x `row`, preserving as much content
    /// and cursor context as possible.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidDimensions`] if `col` or `row` is zero;
    /// the terminal is left unchanged in that case.
    pub fn resize(&mut self, col: u16, row: u16) -> Result<(), TermError> {
        if col == 0 || row == 0 {
            return Err(TermError::InvalidDimensions { col, row });
        }
        if col == self.col && row == self.row {
            return Ok(());
        }

        let min_row = row.min(self.row);
        let min_col = col.min(self.col);

        // Slide both screens up if the cursor would fall below the new
        // height, discarding the rows scrolled past.
        let drop = (self.cursor.y as i32 - row as i32 + 1).max(0) as usize;
        if drop > 0 {
            self.primary.drain(0..drop.min(self.primary.len()));
            self.alt.drain(0..drop.min(self.alt.len()));
        }

        let blank_row = |c: u16| vec![Glyph::blank(); c as usize];

        for screen in [&mut self.primary, &mut self.alt] {
            screen.truncate(row as usize);
            for r in screen.iter_mut() {
                r.resize(col as usize, Glyph::blank());
            }
            while screen.len() < row as usize {
                screen.push(blank_row(col));
            }
        }

        self.dirty_primary = vec![true; row as usize];
        self.dirty_alt = vec![true; row as usize];

        if col > self.col {
            self.tabs.resize(col as usize, false);
            self.derive_tab_stops(self.col);
        } else {
            self.tabs.truncate(col as usize);
        }

        self.col = col;
        self.row = row;
        self.top = 0;
        self.bot = row - 1;

        let new_y = self.cursor.y.saturating_sub(drop as u16);
        self.move_to(self.cursor.x, new_y);

        // Clear newly exposed columns/rows so growing doesn't leave stale
        // content outside the previously-visible area, matching `tresize`'s
        // explicit `tclearregion` calls for the grown dimensions.
        if min_col < col && min_row > 0 {
            self.clear_region(min_col, 0, col - 1, min_row.saturating_sub(1));
        }
        if min_row < row {
            self.clear_region(0, min_row, col - 1, row - 1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions_without_mutating_state() {
        let mut term = Grid::new(80, 24).unwrap();
        assert!(term.resize(0, 10).is_err());
        assert_eq!(term.cols(), 80);
        assert_eq!(term.rows(), 24);
    }

    #[test]
    fn shrinking_height_preserves_cursor_relative_content() {
        // S7: cursor at row 20 in an 80x24 terminal, resized to 80x10.
        let mut term = Grid::new(80, 24).unwrap();
        term.set_char(0, 20, 'Z');
        term.cursor.y = 20;
        term.resize(80, 10).unwrap();
        assert_eq!(term.cursor_pos().1, 9);
        assert_eq!(term.cell(0, 9).unwrap().ch, 'Z');
    }

    #[test]
    fn growing_preserves_existing_content() {
        let mut term = Grid::new(5, 3).unwrap();
        term.set_char(0, 0, 'A');
        term.resize(10, 6).unwrap();
        assert_eq!(term.cell(0, 0).unwrap().ch, 'A');
        assert_eq!(term.cols(), 10);
        assert_eq!(term.rows(), 6);
    }
}
