// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `vte::Perform` implementation: the seam between the byte-level scanner
//! and our CSI/ESC/OSC/control dispatch modules.
//!
//! `vte::Parser` owns UTF-8 accumulation and CSI/OSC/DCS/ESC buffering
//! (the same escape-state machine the reference implementation hand-rolls
//! via its `ESC_*` bit flags) and calls back into this type.

use crate::grid::term::Grid;
use crate::host::TermHost;
use crate::parser::{charset, control, csi, esc, osc};
use vte::{Params, Perform};

pub(crate) struct Performer<'a> {
    pub term: &'a mut Grid,
    pub host: &'a mut dyn TermHost,
}

impl Perform for Performer<'_> {
    fn print(&mut self, c: char) {
        if self.term.print_mode() {
            let mut buf = [0u8; 4];
            self.host.print_write(c.encode_utf8(&mut buf).as_bytes());
        }
        let c = if matches!(self.term.active_charset(), crate::grid::cursor::Charset::Graphic0) {
            charset::translate(c)
        } else {
            c
        };
        self.term.print_char(c);
    }

    fn execute(&mut self, byte: u8) {
        if self.term.print_mode() {
            self.host.print_write(&[byte]);
        }
        control::dispatch(self.term, self.host, byte);
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _c: char) {
        // DCS: accepted and discarded, matching `strhandle`'s default case.
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        osc::dispatch(self.term, self.host, params);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, c: char) {
        csi::dispatch(self.term, self.host, params, intermediates, c);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        esc::dispatch(self.term, self.host, intermediates, byte);
    }
}
