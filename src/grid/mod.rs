// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cell-grid state: the [`Grid`] aggregate and its mutation primitives.

pub mod cell;
pub mod cursor;
pub mod modes;
mod ops;
mod resize;
pub mod term;

pub use cell::{CellAttrs, Color, Glyph};
pub use cursor::Charset;
pub use modes::TermModes;
pub use term::Grid;
