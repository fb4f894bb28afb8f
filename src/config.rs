// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal configuration.
//!
//! The reference implementation hardcodes these as compile-time constants
//! (`tabspaces`, the `"\033[?6c"` identification string); this crate exposes
//! them as a small, explicit config struct instead, since a library has no
//! business baking host policy into constants. There is no file-based
//! configuration layer here: parsing a config file is an external
//! collaborator's job.

/// Tunables for a [`crate::Term`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermConfig {
    /// Spacing, in columns, between default tab stops. Matches the
    /// reference implementation's `tabspaces` (default 8).
    pub tab_width: u16,
    /// Bytes sent in reply to DA (`CSI c`) and DECID (`ESC Z`) when the
    /// request parameter is 0 or absent. Defaults to the classic
    /// VT102-with-advanced-video-option identification `ESC[?6c`.
    pub vt_ident: Vec<u8>,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self { tab_width: 8, vt_ident: b"\x1b[?6c".to_vec() }
    }
}
