// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0/C1 control-code handling.
//!
//! Mirrors the reference implementation's `tcontrolcode` table. `vte`
//! routes these bytes to [`vte::Perform::execute`]; it has already
//! consumed anything that's part of an in-progress CSI/OSC/DCS sequence by
//! the time this runs, so clearing `last_char` here is always safe.

use crate::grid::term::Grid;
use crate::host::TermHost;

pub(crate) fn dispatch(term: &mut Grid, host: &mut dyn TermHost, byte: u8) {
    match byte {
        0x09 => term.put_tab(1),                    // HT
        0x08 => {                                   // BS
            let (x, y) = term.cursor_pos();
            term.move_to(x.saturating_sub(1), y);
        }
        0x0D => { let y = term.cursor_pos().1; term.move_to(0, y); } // CR
        0x0A | 0x0B | 0x0C => term.newline(false),  // LF/VT/FF
        0x07 => host.bell(),                        // BEL
        0x0E => term.charset_idx = 1,               // SO -> G1
        0x0F => term.charset_idx = 0,                // SI -> G0
        0x1A => {                                    // SUB
            term.print_char('?');
        }
        0x18 => {}                                   // CAN: string cancellation is handled by `vte` itself
        0x85 => term.newline(true),                  // NEL (8-bit form)
        0x88 => {                                    // HTS (8-bit form)
            let x = term.cursor_pos().0;
            term.set_tab_stop(x);
        }
        0x05 | 0x00 | 0x11 | 0x12 | 0x13 | 0x14 | 0x7F => {} // ENQ/NUL/DC1-4/DEL ignored
        _ => tracing::trace!(byte, "unhandled control code"),
    }
    term.last_char = None;
}
