// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The terminal state aggregate: dual screens, cursor, modes, tabs.

use crate::config::TermConfig;
use crate::error::TermError;
use crate::grid::cell::Glyph;
use crate::grid::cursor::{Charset, Cursor};
use crate::grid::modes::TermModes;
use crate::host::MouseMode;

pub(crate) type Row = Vec<Glyph>;

/// Aggregate terminal state: the cell grid (primary and alternate screens),
/// cursor, scroll region, tab stops, and mode flags.
///
/// Deliberately holds no module-level/global state: the reference
/// implementation keeps the CSI/STR accumulators, the two saved-cursor
/// slots, and the I/O file descriptor as process-wide statics, which this
/// type folds into per-instance fields so that multiple independent
/// terminals can coexist in one process.
pub struct Grid {
    pub(crate) primary: Vec<Row>,
    pub(crate) alt: Vec<Row>,
    pub(crate) dirty_primary: Vec<bool>,
    pub(crate) dirty_alt: Vec<bool>,
    pub(crate) alt_active: bool,

    pub(crate) col: u16,
    pub(crate) row: u16,

    pub(crate) cursor: Cursor,
    /// One saved-cursor slot per screen, indexed by `alt_active as usize`.
    pub(crate) saved_cursor: [Cursor; 2],

    pub(crate) top: u16,
    pub(crate) bot: u16,

    pub(crate) tabs: Vec<bool>,
    pub(crate) modes: TermModes,

    /// Charset translation table for designation slots `(`, `)`, `*`, `+`.
    pub(crate) trantbl: [Charset; 4],
    /// Which slot SO/SI/ESC-n/ESC-o currently select.
    pub(crate) charset_idx: usize,

    /// Last printed character, for CSI `b` (REP). Cleared on any control
    /// code processed outside an in-progress string sequence.
    pub(crate) last_char: Option<char>,

    pub(crate) mouse_mode: Option<MouseMode>,

    pub(crate) config: TermConfig,
}

impl Grid {
    /// Creates a new terminal with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidDimensions`] if `col` or `row` is zero.
    pub fn new(col: u16, row: u16) -> Result<Self, TermError> {
        Self::with_config(col, row, TermConfig::default())
    }

    /// Creates a new terminal with an explicit [`TermConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidDimensions`] if `col` or `row` is zero.
    pub fn with_config(col: u16, row: u16, config: TermConfig) -> Result<Self, TermError> {
        if col == 0 || row == 0 {
            return Err(TermError::InvalidDimensions { col, row });
        }
        let blank_row = || vec![Glyph::blank(); col as usize];
        let mut term = Self {
            primary: vec![blank_row(); row as usize],
            alt: vec![blank_row(); row as usize],
            dirty_primary: vec![false; row as usize],
            dirty_alt: vec![false; row as usize],
            alt_active: false,
            col,
            row,
            cursor: Cursor::new(),
            saved_cursor: [Cursor::new(), Cursor::new()],
            top: 0,
            bot: row - 1,
            tabs: vec![false; col as usize],
            modes: TermModes::default(),
            trantbl: [Charset::Usa; 4],
            charset_idx: 0,
            last_char: None,
            mouse_mode: None,
            config,
        };
        term.derive_tab_stops(0);
        term
    }

    pub(crate) fn derive_tab_stops(&mut self, from_col: u16) {
        let width = self.config.tab_width.max(1);
        let mut c = from_col;
        // Align forward to the next multiple of `width` at or after `from_col`.
        if c % width != 0 {
            c += width - (c % width);
        }
        while (c as usize) < self.tabs.len() {
            self.tabs[c as usize] = true;
            c += width;
        }
    }

    /// The currently active screen (primary unless the alternate screen is
    /// active).
    pub(crate) fn screen(&self) -> &[Row] {
        if self.alt_active { &self.alt } else { &self.primary }
    }

    pub(crate) fn screen_mut(&mut self) -> &mut Vec<Row> {
        if self.alt_active { &mut self.alt } else { &mut self.primary }
    }

    pub(crate) fn dirty_mut(&mut self) -> &mut Vec<bool> {
        if self.alt_active { &mut self.dirty_alt } else { &mut self.dirty_primary }
    }

    pub(crate) fn mark_dirty(&mut self, y: u16) {
        if let Some(d) = self.dirty_mut().get_mut(y as usize) {
            *d = true;
        }
    }

    pub(crate) fn mark_all_dirty(&mut self) {
        self.dirty_mut().fill(true);
    }

    /// Reads the glyph at `(x, y)` in the active screen.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<Glyph> {
        self.screen().get(y as usize)?.get(x as usize).copied()
    }

    /// Whether row `y` has unread mutations since the last
    /// [`Self::clear_dirty`].
    #[must_use]
    pub fn is_dirty(&self, y: u16) -> bool {
        self.screen_dirty().get(y as usize).copied().unwrap_or(false)
    }

    fn screen_dirty(&self) -> &[bool] {
        if self.alt_active { &self.dirty_alt } else { &self.dirty_primary }
    }

    /// Clears the dirty flag for row `y`. The core never clears dirty flags
    /// on its own; a host calls this after consuming the row.
    pub fn clear_dirty(&mut self, y: u16) {
        if let Some(d) = self.dirty_mut().get_mut(y as usize) {
            *d = false;
        }
    }

    /// Clears every row's dirty flag on the active screen.
    pub fn clear_all_dirty(&mut self) {
        self.dirty_mut().fill(false);
    }

    /// Current column count.
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.col
    }

    /// Current row count.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.row
    }

    /// Current cursor position, `(x, y)`, both 0-based.
    #[must_use]
    pub const fn cursor_pos(&self) -> (u16, u16) {
        (self.cursor.x, self.cursor.y)
    }

    /// The mouse-tracking mode most recently enabled, if any.
    #[must_use]
    pub const fn mouse_mode(&self) -> Option<MouseMode> {
        self.mouse_mode
    }

    /// Top margin of the current scroll region.
    #[must_use]
    pub(crate) const fn top_row(&self) -> u16 {
        self.top
    }

    pub(crate) fn config_vt_ident(&self) -> Vec<u8> {
        self.config.vt_ident.clone()
    }

    pub(crate) fn set_charset_slot(&mut self, slot: usize, charset: Charset) {
        if let Some(s) = self.trantbl.get_mut(slot) {
            *s = charset;
        }
    }

    pub(crate) const fn active_charset(&self) -> Charset {
        self.trantbl[self.charset_idx]
    }

    /// Sets the scroll region to `[top, bot]` (0-based, inclusive).
    pub(crate) fn set_scroll_region(&mut self, top: u16, bot: u16) {
        self.top = top.min(self.row - 1);
        self.bot = bot.min(self.row - 1);
    }

    pub(crate) fn set_print_mode(&mut self, on: bool) {
        self.modes.set(TermModes::PRINT, on);
    }

    /// Whether MC 5 print mode is currently active (MC 4 turns it back off).
    pub(crate) fn print_mode(&self) -> bool {
        self.modes.contains(TermModes::PRINT)
    }

    pub(crate) const fn cursor_template(&self) -> Glyph {
        self.cursor.template
    }

    pub(crate) fn cursor_template_mut(&mut self) -> &mut Glyph {
        &mut self.cursor.template
    }

    pub(crate) fn cursor_attrs_mut(&mut self) -> &mut crate::grid::cell::CellAttrs {
        &mut self.cursor.template.attrs
    }

    pub(crate) fn set_fg(&mut self, color: crate::grid::cell::Color) {
        self.cursor.template.fg = color;
    }

    pub(crate) fn set_bg(&mut self, color: crate::grid::cell::Color) {
        self.cursor.template.bg = color;
    }

    /// Row-by-row UTF-8 dump with trailing-blank elision, rows separated by
    /// `\n`, no trailing newline. Returns the number of bytes written.
    pub fn dump_to_buffer(&self, out: &mut Vec<u8>) -> usize {
        let start_len = out.len();
        for (i, row) in self.screen().iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            let last_non_blank = row.iter().rposition(|g| g.ch != ' ');
            match last_non_blank {
                Some(end) => {
                    for g in &row[..=end] {
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(g.ch.encode_utf8(&mut buf).as_bytes());
                    }
                }
                None => out.push(b' '),
            }
        }
        out.len() - start_len
    }

    /// Same content as [`Self::dump_to_buffer`], delivered in chunks no
    /// larger than 4096 bytes.
    pub fn dump_to_callback(&self, mut cb: impl FnMut(&[u8])) {
        const CHUNK_SIZE: usize = 4096;
        let mut buf = Vec::new();
        self.dump_to_buffer(&mut buf);
        for chunk in buf.chunks(CHUNK_SIZE) {
            cb(chunk);
        }
    }

    /// UTF-8 text of row `y` with trailing blanks elided (a wholly blank
    /// row still produces a single space).
    #[must_use]
    pub fn dump_line(&self, y: u16) -> String {
        let Some(row) = self.screen().get(y as usize) else { return String::new() };
        match row.iter().rposition(|g| g.ch != ' ') {
            Some(end) => row[..=end].iter().map(|g| g.ch).collect(),
            None => " ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 24).unwrap_err(),
            TermError::InvalidDimensions { col: 0, row: 24 }
        );
        assert_eq!(
            Grid::new(80, 0).unwrap_err(),
            TermError::InvalidDimensions { col: 80, row: 0 }
        );
    }

    #[test]
    fn new_initializes_blank_grid_and_cursor() {
        let term = Grid::new(80, 24).unwrap();
        assert_eq!(term.cursor_pos(), (0, 0));
        assert_eq!(term.cell(0, 0), Some(Glyph::blank()));
        assert_eq!(term.cell(79, 23), Some(Glyph::blank()));
        assert_eq!(term.cell(80, 0), None);
    }

    #[test]
    fn tab_stops_every_eight_columns() {
        let term = Grid::new(40, 5).unwrap();
        let stops: Vec<u16> =
            (0..40).filter(|&c| term.tabs[c as usize]).collect();
        assert_eq!(stops, vec![8, 16, 24, 32]);
    }
}
