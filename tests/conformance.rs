// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end scenarios driven exclusively through the public [`Term`]
//! API — no internal buffer access, matching how a real pty consumer
//! would exercise this crate.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use vt100_core::{CellAttrs, Color, Term, TermHost};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn s1_plain_text_lands_at_origin() {
    init_tracing();
    let mut term = Term::new(80, 24).unwrap();
    term.feed(b"hello");
    assert_eq!(term.dump_line(0), "hello");
    for (x, ch) in "hello".chars().enumerate() {
        assert_eq!(term.cell(x as u16, 0).unwrap().ch, ch);
    }
    assert_eq!(term.cursor_pos(), (5, 0));
}

#[test]
fn s2_autowrap_marks_last_cell_and_continues_on_next_row() {
    let mut term = Term::new(5, 3).unwrap();
    term.feed(b"abcdef");
    assert_eq!(term.dump_line(0), "abcde");
    assert!(term.cell(4, 0).unwrap().attrs.contains(CellAttrs::WRAP));
    assert_eq!(term.dump_line(1), "f");
    assert_eq!(term.cursor_pos(), (1, 1));
}

#[test]
fn s3_cup_then_text_lands_at_target_cell() {
    let mut term = Term::new(80, 24).unwrap();
    term.feed(b"\x1b[3;7H X");
    assert_eq!(term.cell(6, 2).unwrap().ch, ' ');
    assert_eq!(term.cell(7, 2).unwrap().ch, 'X');
    assert_eq!(term.cursor_pos(), (8, 2));
}

#[test]
fn s4_sgr_reset_only_affects_subsequent_cells() {
    let mut term = Term::new(80, 24).unwrap();
    term.feed(b"\x1b[1;31mA\x1b[0mB");
    let a = term.cell(0, 0).unwrap();
    assert!(a.attrs.contains(CellAttrs::BOLD));
    assert_eq!(a.fg, Color::Palette(1));
    let b = term.cell(1, 0).unwrap();
    assert!(b.attrs.is_empty());
    assert_eq!(b.fg, Color::Default);
}

#[test]
fn s5_osc52_decodes_and_forwards_clipboard_payload() {
    let seen = Rc::new(RefCell::new(None));

    struct Forwarder(Rc<RefCell<Option<(u8, Vec<u8>)>>>);
    impl TermHost for Forwarder {
        fn set_clipboard(&mut self, selection: u8, data: &[u8]) {
            *self.0.borrow_mut() = Some((selection, data.to_vec()));
        }
    }

    let mut term = Term::new(80, 24).unwrap();
    term.set_host(Forwarder(Rc::clone(&seen)));
    term.feed(b"\x1b]52;c;aGVsbG8=\x07");

    assert_eq!(seen.borrow().as_ref(), Some(&(b'c', b"hello".to_vec())));
}

#[test]
fn s6_alt_screen_round_trip_preserves_primary_content_and_cursor() {
    let mut term = Term::new(10, 3).unwrap();
    term.feed(b"AAA");
    let cursor_before = term.cursor_pos();

    term.feed(b"\x1b[?1049h");
    term.feed(b"BBB");
    assert_eq!(term.dump_line(0), "BBB");

    term.feed(b"\x1b[?1049l");
    assert_eq!(term.dump_line(0), "AAA");
    assert_eq!(term.cursor_pos(), cursor_before);
}

#[test]
fn mc5_print_mode_echoes_bytes_to_the_host_printer_callback() {
    struct PrinterHost(Rc<RefCell<Vec<u8>>>);

    impl TermHost for PrinterHost {
        fn print_write(&mut self, bytes: &[u8]) {
            self.0.borrow_mut().extend_from_slice(bytes);
        }
    }

    let captured = Rc::new(RefCell::new(Vec::new()));
    let mut term = Term::new(10, 2).unwrap();
    term.set_host(PrinterHost(Rc::clone(&captured)));
    term.feed(b"\x1b[5ihi\x1b[4ibye");

    // `hi` was captured while print mode was on; `bye` was not, since `\x1b[4i`
    // (MC 4) turns it back off before those bytes are printed.
    assert_eq!(captured.borrow().as_slice(), b"hi");
    assert_eq!(term.dump_line(0), "hibye");
}

#[test]
fn s7_shrinking_height_keeps_cursor_relative_content() {
    let mut term = Term::new(80, 24).unwrap();
    term.feed(b"\x1b[21;1HZ");
    assert_eq!(term.cursor_pos(), (1, 20));

    term.resize(80, 10).unwrap();

    assert_eq!(term.cursor_pos().1, 9);
    assert_eq!(term.cell(0, 9).unwrap().ch, 'Z');
}
