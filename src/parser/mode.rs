// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI `h`/`l` mode set/reset.
//!
//! Grounded in the reference implementation's `tsetmode`. Private (`?`)
//! modes and ANSI modes share a final byte, disambiguated by the leading
//! `?` intermediate `vte` reports.

use crate::grid::modes::TermModes;
use crate::grid::term::Grid;
use crate::host::{MouseMode, TermHost};
use crate::parser::params::ParamsExt;
use vte::Params;

pub(crate) fn set(term: &mut Grid, host: &mut dyn TermHost, params: &Params, intermediates: &[u8], private: bool) {
    apply(term, host, params, intermediates, private, true);
}

pub(crate) fn reset(term: &mut Grid, host: &mut dyn TermHost, params: &Params, intermediates: &[u8], private: bool) {
    apply(term, host, params, intermediates, private, false);
}

fn apply(
    term: &mut Grid,
    host: &mut dyn TermHost,
    params: &Params,
    _intermediates: &[u8],
    private: bool,
    on: bool,
) {
    for group in params.iter() {
        let Some(&mode) = group.first() else { continue };
        if private {
            apply_private(term, host, mode, on);
        } else {
            apply_ansi(term, host, mode, on);
        }
    }
}

fn apply_private(term: &mut Grid, host: &mut dyn TermHost, mode: u16, on: bool) {
    match mode {
        1 => {} // DECCKM: no internal keyboard-input path to affect
        5 => term.modes.set(TermModes::REVERSE_VIDEO, on),
        6 => {
            term.cursor.origin_mode = on;
            if on {
                let top = term.top_row();
                term.move_to(0, top);
            }
        }
        7 => term.modes.set(TermModes::WRAP, on),
        9 => set_mouse(term, host, on, MouseMode::X10),
        1000 => set_mouse(term, host, on, MouseMode::Normal),
        1002 => set_mouse(term, host, on, MouseMode::ButtonEvent),
        1003 => set_mouse(term, host, on, MouseMode::AnyEvent),
        1004 => {} // focus-in/out reporting: no internal state to track
        1005 => set_mouse(term, host, on, MouseMode::Utf8),
        1006 => set_mouse(term, host, on, MouseMode::Sgr),
        1015 => set_mouse(term, host, on, MouseMode::Urxvt),
        1034 => {} // 8-bit input: forwarded conceptually, no state kept
        25 => {} // DECTCEM: cursor visibility is a host rendering concern
        47 | 1047 => {
            if on {
                term.enter_alt_screen();
            } else {
                term.leave_alt_screen();
            }
        }
        1048 => {
            if on {
                term.save_cursor_position();
            } else {
                term.restore_cursor_position();
            }
        }
        1049 => {
            if on {
                term.save_cursor_position();
                term.enter_alt_screen();
            } else {
                term.leave_alt_screen();
                term.restore_cursor_position();
            }
        }
        2004 => {} // bracketed paste: host rendering/input concern
        2 | 3 | 4 | 8 | 12 | 18 | 19 | 42 => {} // explicitly ignored upstream
        other => tracing::warn!(other, on, "unknown private mode"),
    }
}

fn apply_ansi(term: &mut Grid, _host: &mut dyn TermHost, mode: u16, on: bool) {
    match mode {
        2 => {} // KAM: keyboard lock is a host concern
        4 => term.modes.set(TermModes::INSERT, on),
        // SRM is inverted: setting it clears local echo.
        12 => term.modes.set(TermModes::ECHO, !on),
        20 => term.modes.set(TermModes::CRLF, on),
        other => tracing::warn!(other, on, "unknown ANSI mode"),
    }
}

fn set_mouse(term: &mut Grid, host: &mut dyn TermHost, on: bool, mode: MouseMode) {
    term.mouse_mode = if on { Some(mode) } else { None };
    host.set_mouse_mode(term.mouse_mode);
}
