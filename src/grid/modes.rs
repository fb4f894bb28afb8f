// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal-wide mode bits (as opposed to per-cell attributes in [`crate::grid::cell`]).

use bitflags::bitflags;

bitflags! {
    /// Modes that change how input is interpreted, independent of any single
    /// cell. Named after the reference implementation's `MODE_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TermModes: u16 {
        /// DECAWM: autowrap at the last column.
        const WRAP      = 1 << 0;
        /// IRM: insert rather than overwrite when printing.
        const INSERT    = 1 << 1;
        /// LNM / DECOM-adjacent: line feeds also return to column 0.
        const CRLF      = 1 << 3;
        /// SRM: local echo (note the CSI 12 inversion in `parser::csi`).
        const ECHO      = 1 << 4;
        /// MC 4/5: printer passthrough mode.
        const PRINT     = 1 << 5;
        /// UTF-8 input decoding is active (as opposed to raw 8-bit).
        const UTF8      = 1 << 6;
        /// DECSCNM: whole-screen reverse video.
        const REVERSE_VIDEO = 1 << 7;
    }
}

impl Default for TermModes {
    fn default() -> Self {
        Self::WRAP | Self::UTF8
    }
}
