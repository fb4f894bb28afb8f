// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lone-ESC (single final byte, no CSI) dispatch.
//!
//! Mirrors the reference implementation's `eschandle` plus the charset
//! designation handling that precedes it (`ESC ( 0`, `ESC ) B`, ...).

use crate::grid::cursor::Charset;
use crate::grid::term::Grid;
use crate::host::TermHost;

pub(crate) fn dispatch(term: &mut Grid, host: &mut dyn TermHost, intermediates: &[u8], byte: u8) {
    if let [designator @ (b'(' | b')' | b'*' | b'+')] = *intermediates {
        designate_charset(term, *designator, byte);
        return;
    }

    match byte {
        b'D' => term.newline(false),                       // IND
        b'E' => term.newline(true),                         // NEL
        b'H' => { let x = term.cursor_pos().0; term.set_tab_stop(x); } // HTS
        b'M' => reverse_index(term),                        // RI
        b'Z' => {
            let ident = term.config_vt_ident();
            host.write_reply(&ident);
        }
        b'c' => term.reset(),                                // RIS
        b'=' => host.set_keypad_mode(true),                  // DECKPAM
        b'>' => host.set_keypad_mode(false),                 // DECKPNM
        b'7' => term.save_cursor_position(),                 // DECSC
        b'8' => term.restore_cursor_position(),              // DECRC
        b'n' => term.charset_idx = 2,                        // LS2 -> G2
        b'o' => term.charset_idx = 3,                        // LS3 -> G3
        b'\\' => {}                                          // ST, normally consumed by `vte`
        _ => tracing::warn!(byte, "unknown ESC final byte"),
    }
}

fn reverse_index(term: &mut Grid) {
    let (top, y) = (term.top_row(), term.cursor_pos().1);
    if y == top {
        term.scroll_down(1);
    } else {
        term.move_to(term.cursor_pos().0, y.saturating_sub(1));
    }
}

fn designate_charset(term: &mut Grid, designator: u8, byte: u8) {
    let slot = match designator {
        b'(' => 0,
        b')' => 1,
        b'*' => 2,
        b'+' => 3,
        _ => unreachable!("matched above"),
    };
    let charset = match byte {
        b'0' => Charset::Graphic0,
        b'B' => Charset::Usa,
        _ => {
            tracing::warn!(byte, "unknown charset designator");
            return;
        }
    };
    term.set_charset_slot(slot, charset);
}
