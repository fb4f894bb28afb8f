// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A headless VT100/xterm-class terminal emulation core.
//!
//! [`Term`] owns the escape-sequence parser and cell grid; it has no
//! knowledge of a pty, a renderer, or a window system. Feed it bytes from
//! wherever they come from, read back cells and dirty rows, and implement
//! [`host::TermHost`] for the handful of callbacks (bell, title, clipboard,
//! cursor style, outbound replies) that have no sensible default inside
//! the core itself.
//!
//! ```
//! use vt100_core::Term;
//!
//! let mut term = Term::new(80, 24).unwrap();
//! term.feed(b"hello, \x1b[1mworld\x1b[0m");
//! assert_eq!(term.dump_line(0), "hello, world");
//! ```

mod codec;
mod config;
mod error;
mod grid;
mod host;
mod parser;

pub use config::TermConfig;
pub use error::TermError;
pub use grid::{CellAttrs, Charset, Color, Glyph, TermModes};
pub use host::{CursorStyle, MouseMode, NullHost, TermHost};

use grid::Grid;
use parser::Performer;

/// A headless terminal: escape-sequence parser plus cell-grid state.
///
/// Construction can fail ([`TermError::InvalidDimensions`]); every other
/// public method either cannot fail or silently ignores malformed input,
/// matching the reference implementation's own tolerance of garbage bytes
/// from a misbehaving peer.
pub struct Term {
    grid: Grid,
    host: Box<dyn TermHost>,
    parser: vte::Parser,
}

impl Term {
    /// Creates a new terminal with default configuration and a no-op host.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidDimensions`] if `col` or `row` is zero.
    pub fn new(col: u16, row: u16) -> Result<Self, TermError> {
        Self::with_config(col, row, TermConfig::default())
    }

    /// Creates a new terminal with an explicit [`TermConfig`] and a no-op
    /// host.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidDimensions`] if `col` or `row` is zero.
    pub fn with_config(col: u16, row: u16, config: TermConfig) -> Result<Self, TermError> {
        Ok(Self {
            grid: Grid::with_config(col, row, config)?,
            host: Box::new(NullHost),
            parser: vte::Parser::new(),
        })
    }

    /// Installs the host callback object, replacing whatever was set
    /// before (a no-op [`NullHost`] by default).
    pub fn set_host(&mut self, host: impl TermHost + 'static) {
        self.host = Box::new(host);
    }

    /// Feeds raw bytes (from a pty, a recorded session, a test fixture...)
    /// through the escape-sequence parser, mutating the grid and invoking
    /// host callbacks as sequences are recognized.
    ///
    /// The parser carries state across calls, so a multi-byte UTF-8
    /// sequence or an escape sequence split across two `feed` calls
    /// resumes correctly.
    pub fn feed(&mut self, bytes: &[u8]) {
        let mut performer = Performer { term: &mut self.grid, host: &mut *self.host };
        self.parser.advance(&mut performer, bytes);
    }

    /// Resizes the terminal to `col` x `row`, preserving as much content
    /// and cursor context as possible.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidDimensions`] if `col` or `row` is zero;
    /// the terminal is left unchanged in that case.
    pub fn resize(&mut self, col: u16, row: u16) -> Result<(), TermError> {
        self.grid.resize(col, row)
    }

    /// Reads the glyph at `(x, y)` in the active screen.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<Glyph> {
        self.grid.cell(x, y)
    }

    /// Current column count.
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.grid.cols()
    }

    /// Current row count.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.grid.rows()
    }

    /// Current cursor position, `(x, y)`, both 0-based.
    #[must_use]
    pub const fn cursor_pos(&self) -> (u16, u16) {
        self.grid.cursor_pos()
    }

    /// The mouse-tracking mode most recently enabled, if any.
    #[must_use]
    pub const fn mouse_mode(&self) -> Option<MouseMode> {
        self.grid.mouse_mode()
    }

    /// UTF-8 text of row `y` with trailing blanks elided (a wholly blank
    /// row still produces a single space).
    #[must_use]
    pub fn dump_line(&self, y: u16) -> String {
        self.grid.dump_line(y)
    }

    /// Row-by-row UTF-8 dump with trailing-blank elision, rows separated
    /// by `\n`, no trailing newline. Returns the number of bytes written.
    pub fn dump_to_buffer(&self, out: &mut Vec<u8>) -> usize {
        self.grid.dump_to_buffer(out)
    }

    /// Same content as [`Self::dump_to_buffer`], delivered in chunks no
    /// larger than 4096 bytes.
    pub fn dump_to_callback(&self, cb: impl FnMut(&[u8])) {
        self.grid.dump_to_callback(cb);
    }

    /// Whether row `y` has unread mutations since the last
    /// [`Self::clear_dirty`].
    #[must_use]
    pub fn is_dirty(&self, y: u16) -> bool {
        self.grid.is_dirty(y)
    }

    /// Clears the dirty flag for row `y`. The core never clears dirty
    /// flags on its own; a host calls this after consuming the row.
    pub fn clear_dirty(&mut self, y: u16) {
        self.grid.clear_dirty(y);
    }

    /// Clears every row's dirty flag on the active screen.
    pub fn clear_all_dirty(&mut self) {
        self.grid.clear_all_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_prints_plain_text() {
        let mut term = Term::new(20, 2).unwrap();
        term.feed(b"hello");
        assert_eq!(term.dump_line(0), "hello");
    }

    #[test]
    fn feed_handles_sgr_and_csi_cursor_movement() {
        let mut term = Term::new(20, 3).unwrap();
        term.feed(b"\x1b[1mbold\x1b[0m\x1b[3;1Hend");
        assert_eq!(term.dump_line(0), "bold");
        assert!(term.cell(0, 0).unwrap().attrs.contains(CellAttrs::BOLD));
        assert_eq!(term.dump_line(2), "end");
        assert_eq!(term.cursor_pos(), (3, 2));
    }

    #[test]
    fn feed_resumes_escape_sequence_split_across_calls() {
        let mut term = Term::new(20, 2).unwrap();
        term.feed(b"\x1b[1");
        term.feed(b"mX");
        assert!(term.cell(0, 0).unwrap().attrs.contains(CellAttrs::BOLD));
    }

    #[test]
    fn host_receives_bell() {
        use std::rc::Rc;
        use std::cell::Cell;

        struct BellHost(Rc<Cell<bool>>);
        impl TermHost for BellHost {
            fn bell(&mut self) {
                self.0.set(true);
            }
        }

        let rang = Rc::new(Cell::new(false));
        let mut term = Term::new(10, 1).unwrap();
        term.set_host(BellHost(Rc::clone(&rang)));
        term.feed(b"\x07");
        assert!(rang.get());
    }

    #[test]
    fn resize_rejects_zero_dimensions() {
        let mut term = Term::new(10, 10).unwrap();
        assert!(term.resize(0, 5).is_err());
    }
}
