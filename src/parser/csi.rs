// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) final-byte dispatch.
//!
//! Grounded in the reference implementation's `csihandle`. `vte` has
//! already split and bounded the parameter list and tracked the private
//! `?` marker (exposed here via `intermediates`); this module only
//! performs the per-final-byte behavior.

use crate::grid::term::Grid;
use crate::host::TermHost;
use crate::parser::mode;
use crate::parser::params::ParamsExt;
use crate::parser::sgr;
use vte::Params;

pub(crate) fn dispatch(
    term: &mut Grid,
    host: &mut dyn TermHost,
    params: &Params,
    intermediates: &[u8],
    action: char,
) {
    let private = intermediates.first() == Some(&b'?');

    match action {
        '@' => term.insert_blank(params.nth_nonzero_or(0, 1)),
        'A' => term.cursor_up(params.nth_nonzero_or(0, 1)),
        'B' => term.cursor_down(params.nth_nonzero_or(0, 1)),
        'C' => term.cursor_forward(params.nth_nonzero_or(0, 1)),
        'D' => term.cursor_backward(params.nth_nonzero_or(0, 1)),
        'E' => {
            term.cursor_down(params.nth_nonzero_or(0, 1));
            term.cursor_to_line_start();
        }
        'F' => {
            term.cursor_up(params.nth_nonzero_or(0, 1));
            term.cursor_to_line_start();
        }
        'G' | '`' => term.cursor_to_column(params.nth_nonzero_or(0, 1) - 1),
        'H' | 'f' => {
            let row = params.nth_nonzero_or(0, 1) - 1;
            let col = params.nth_nonzero_or(1, 1) - 1;
            term.cursor_to_position(row, col);
        }
        'I' => term.put_tab(i32::from(params.nth_nonzero_or(0, 1))),
        'Z' => term.put_tab(-i32::from(params.nth_nonzero_or(0, 1))),
        'J' => erase_in_display(term, params.nth_or(0, 0)),
        'K' => erase_in_line(term, params.nth_or(0, 0)),
        'S' => term.scroll_up(params.nth_nonzero_or(0, 1)),
        'T' => term.scroll_down(params.nth_nonzero_or(0, 1)),
        'L' => term.insert_blank_line(params.nth_nonzero_or(0, 1)),
        'M' => term.delete_line(params.nth_nonzero_or(0, 1)),
        'X' => term.erase_chars(params.nth_nonzero_or(0, 1)),
        'P' => term.delete_char(params.nth_nonzero_or(0, 1)),
        'b' => term.repeat_last_char(params.nth_nonzero_or(0, 1)),
        'c' if params.nth_or(0, 0) == 0 => {
            let ident = term.config_vt_ident();
            host.write_reply(&ident);
        }
        'g' => match params.nth_or(0, 0) {
            0 => { let x = term.cursor_pos().0; term.clear_tab_stop(x); }
            3 => term.clear_all_tab_stops(),
            other => tracing::warn!(other, "unknown TBC parameter"),
        },
        'h' => mode::set(term, host, params, intermediates, private),
        'l' => mode::reset(term, host, params, intermediates, private),
        'm' => sgr::dispatch(term, params),
        'n' => device_status_report(term, host, params),
        'r' => set_scroll_region(term, params),
        's' if !private => term.save_cursor_position(),
        'u' if !private => term.restore_cursor_position(),
        'i' => media_copy(term, host, params),
        ' ' if intermediates.is_empty() || intermediates == [b' '] => {
            request_cursor_style(host, params);
        }
        _ => tracing::warn!(action, "unknown CSI final byte"),
    }
}

/// `ESC[1J` preserves the upstream off-by-one: clearing "above" only runs
/// when the cursor's row is greater than 1, not greater than 0, so issuing
/// it while the cursor sits on row 1 clears nothing above row 0.
fn erase_in_display(term: &mut Grid, mode: u16) {
    let (x, y) = term.cursor_pos();
    let (col, row) = (term.cols(), term.rows());
    match mode {
        0 => {
            term.clear_region(x, y, col - 1, y);
            if y < row - 1 {
                term.clear_region(0, y + 1, col - 1, row - 1);
            }
        }
        1 => {
            if y > 1 {
                term.clear_region(0, 0, col - 1, y - 1);
            }
            term.clear_region(0, y, x, y);
        }
        2 => term.clear_region(0, 0, col - 1, row - 1),
        other => tracing::warn!(other, "unknown ED parameter"),
    }
}

fn erase_in_line(term: &mut Grid, mode: u16) {
    let (x, y) = term.cursor_pos();
    let col = term.cols();
    match mode {
        0 => term.clear_region(x, y, col - 1, y),
        1 => term.clear_region(0, y, x, y),
        2 => term.clear_region(0, y, col - 1, y),
        other => tracing::warn!(other, "unknown EL parameter"),
    }
}

fn device_status_report(term: &mut Grid, host: &mut dyn TermHost, params: &Params) {
    if params.nth_or(0, 0) == 6 {
        let (x, y) = term.cursor_pos();
        let reply = format!("\x1b[{};{}R", y + 1, x + 1);
        host.write_reply(reply.as_bytes());
    }
}

fn set_scroll_region(term: &mut Grid, params: &Params) {
    let top = params.nth_raw_opt(0).unwrap_or(1).max(1) - 1;
    let bot = params.nth_raw_opt(1).unwrap_or(term.rows()).min(term.rows());
    let bot = bot.max(1) - 1;
    if top < bot {
        term.set_scroll_region(top, bot);
        term.move_to_absolute(0, 0);
    }
}

fn media_copy(term: &mut Grid, host: &mut dyn TermHost, params: &Params) {
    match params.nth_or(0, 0) {
        0 | 1 | 2 => {
            let mut buf = Vec::new();
            term.dump_to_buffer(&mut buf);
            host.print_dump(&buf);
        }
        4 => term.set_print_mode(false),
        5 => term.set_print_mode(true),
        other => tracing::warn!(other, "unknown MC parameter"),
    }
}

fn request_cursor_style(host: &mut dyn TermHost, params: &Params) {
    use crate::host::CursorStyle;
    let style = match params.nth_or(0, 1) {
        0 | 1 => CursorStyle::BlinkingBlock,
        2 => CursorStyle::SteadyBlock,
        3 => CursorStyle::BlinkingUnderline,
        4 => CursorStyle::SteadyUnderline,
        5 => CursorStyle::BlinkingBar,
        6 => CursorStyle::SteadyBar,
        other => {
            tracing::warn!(other, "unknown DECSCUSR parameter");
            return;
        }
    };
    host.set_cursor_style(style);
}
