// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Property tests for the invariants reachable through the public
//! [`Term`] API (see `src/codec.rs` for the codec-level UTF-8/base64
//! properties, which have no public surface to drive from here).

use proptest::prelude::*;
use vt100_core::{CellAttrs, Term};

/// A small alphabet of byte-level operations a fuzzed session can replay:
/// printable ASCII, a subset of control codes, and a subset of CSI/SGR/
/// mode sequences likely to perturb geometry, wide pairing, and screen
/// state without just reprinting spaces forever.
fn op() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        3 => (b'a'..=b'z').prop_map(|c| vec![c]),
        1 => Just(b"\n".to_vec()),
        1 => Just(b"\r".to_vec()),
        1 => Just(b"\t".to_vec()),
        1 => Just("\u{4E2D}".as_bytes().to_vec()), // wide CJK
        2 => (1u16..20, 1u16..20).prop_map(|(r, c)| format!("\x1b[{r};{c}H").into_bytes()),
        1 => Just(b"\x1b[2J".to_vec()),
        1 => Just(b"\x1b[K".to_vec()),
        1 => (0u16..3).prop_map(|n| format!("\x1b[{n}J").into_bytes()),
        1 => Just(b"\x1b[1m".to_vec()),
        1 => Just(b"\x1b[0m".to_vec()),
    ]
}

proptest! {
    /// Property 1: geometry invariants hold after any sequence of
    /// feed/resize calls.
    #[test]
    fn prop_geometry_invariants_hold(
        ops in prop::collection::vec(op(), 0..40),
        resize_to in prop::option::of((1u16..30, 1u16..15)),
    ) {
        let mut term = Term::new(20, 10).unwrap();
        for bytes in &ops {
            term.feed(bytes);
        }
        if let Some((col, row)) = resize_to {
            term.resize(col, row).unwrap();
            for bytes in &ops {
                term.feed(bytes);
            }
        }

        let (x, y) = term.cursor_pos();
        prop_assert!(x < term.cols());
        prop_assert!(y < term.rows());
        for row in 0..term.rows() {
            // Every column must be addressable, none past `cols()`.
            prop_assert!(term.cell(term.cols(), row).is_none());
            prop_assert!(term.cell(term.cols() - 1, row).is_some());
        }
    }

    /// Property 2: a `WIDE` cell's right neighbor (in bounds) is always
    /// `WDUMMY`, and a `WDUMMY` cell's left neighbor is always `WIDE`.
    #[test]
    fn prop_wide_pairing_never_orphaned(ops in prop::collection::vec(op(), 0..40)) {
        let mut term = Term::new(20, 10).unwrap();
        for bytes in &ops {
            term.feed(bytes);
        }
        for y in 0..term.rows() {
            for x in 0..term.cols() {
                let cell = term.cell(x, y).unwrap();
                if cell.attrs.contains(CellAttrs::WIDE) && x + 1 < term.cols() {
                    prop_assert!(term.cell(x + 1, y).unwrap().attrs.contains(CellAttrs::WDUMMY));
                }
                if cell.attrs.contains(CellAttrs::WDUMMY) && x > 0 {
                    prop_assert!(term.cell(x - 1, y).unwrap().attrs.contains(CellAttrs::WIDE));
                }
            }
        }
    }

    /// Property 5: `ESC[0m` then an SGR parameter sequence produces the
    /// same attribute template as applying that sequence to a fresh
    /// `Term`.
    #[test]
    fn prop_sgr_idempotent_after_reset(codes in prop::collection::vec(1u16..=49, 0..6)) {
        let seq: Vec<u8> = {
            let joined = codes.iter().map(u16::to_string).collect::<Vec<_>>().join(";");
            format!("\x1b[{joined}mX").into_bytes()
        };

        let mut fresh = Term::new(10, 1).unwrap();
        fresh.feed(&seq);

        let mut reset_first = Term::new(10, 1).unwrap();
        reset_first.feed(b"\x1b[0m");
        reset_first.feed(&seq);

        prop_assert_eq!(fresh.cell(0, 0), reset_first.cell(0, 0));
    }

    /// Property 6: scrolling a region up then down by the same amount
    /// restores its content, for `n` not exceeding the region height.
    #[test]
    fn prop_scroll_up_then_down_restores_region(n in 1u16..=8) {
        let mut term = Term::new(10, 8).unwrap();
        term.feed(b"\x1b[1;8r"); // scroll region rows 0..=7 (whole screen)
        for y in 0..8u16 {
            let ch = (b'A' + y as u8) as char;
            term.feed(format!("\x1b[{};1H{ch}", y + 1).as_bytes());
        }
        let before: Vec<char> = (0..8).map(|y| term.cell(0, y).unwrap().ch).collect();

        term.feed(format!("\x1b[{n}S").as_bytes());
        term.feed(format!("\x1b[{n}T").as_bytes());

        let after: Vec<char> = (0..8).map(|y| term.cell(0, y).unwrap().ch).collect();
        prop_assert_eq!(before, after);
    }

    /// Property 7: entering mode 1049, mutating the alternate screen, and
    /// leaving mode 1049 restores the primary screen's content and cursor
    /// position exactly.
    #[test]
    fn prop_alt_screen_round_trip(ops in prop::collection::vec(op(), 0..20)) {
        let mut term = Term::new(15, 6).unwrap();
        term.feed(b"\x1b[2;2Hprimary-marker");
        let before_dump = {
            let mut buf = Vec::new();
            term.dump_to_buffer(&mut buf);
            buf
        };
        let before_cursor = term.cursor_pos();

        term.feed(b"\x1b[?1049h");
        for bytes in &ops {
            term.feed(bytes);
        }
        term.feed(b"\x1b[?1049l");

        let after_dump = {
            let mut buf = Vec::new();
            term.dump_to_buffer(&mut buf);
            buf
        };
        prop_assert_eq!(before_dump, after_dump);
        prop_assert_eq!(before_cursor, term.cursor_pos());
    }
}
