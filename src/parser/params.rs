// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI parameter extraction.
//!
//! `vte::Params` does not implement our parsing conventions directly (and
//! the orphan rule prevents implementing foreign traits on it), so this
//! mirrors the teacher's extension-trait pattern: one method per
//! default-substitution rule a CSI final actually needs.

use vte::Params;

/// Extension methods for reading CSI parameters with VT100-appropriate
/// default-substitution rules.
pub(crate) trait ParamsExt {
    /// The `n`th top-level parameter, or `default` if there are fewer than
    /// `n + 1` parameters.
    fn nth_or(&self, n: usize, default: u16) -> u16;

    /// The `n`th top-level parameter, with *missing or zero* substituted by
    /// `default` — the reference implementation's `DEFAULT(p, v)` macro,
    /// used by most cursor-movement and erase sequences.
    fn nth_nonzero_or(&self, n: usize, default: u16) -> u16;

    /// The `n`th top-level parameter with no default substitution at all,
    /// needed where "absent" and "present but zero" are distinct (e.g.
    /// DECSTBM's margin-reset-vs-set disambiguation).
    fn nth_raw_opt(&self, n: usize) -> Option<u16>;
}

impl ParamsExt for Params {
    fn nth_or(&self, n: usize, default: u16) -> u16 {
        self.iter().nth(n).and_then(|p| p.first().copied()).unwrap_or(default)
    }

    fn nth_nonzero_or(&self, n: usize, default: u16) -> u16 {
        match self.iter().nth(n).and_then(|p| p.first().copied()) {
            None | Some(0) => default,
            Some(v) => v,
        }
    }

    fn nth_raw_opt(&self, n: usize) -> Option<u16> {
        self.iter().nth(n).and_then(|p| p.first().copied())
    }
}
