// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) dispatch.
//!
//! Grounded in the reference implementation's `tsetattr`. Both
//! semicolon-separated (`38;5;9`) and colon-separated (`38:5:9`) extended
//! color forms are accepted since `vte::Params` already groups
//! colon-separated values as a single top-level entry.

use crate::grid::cell::{CellAttrs, Color};
use crate::grid::term::Grid;
use vte::Params;

pub(crate) fn dispatch(term: &mut Grid, params: &Params) {
    if params.is_empty() {
        reset(term);
        return;
    }

    // Iterate by index so extended color forms can consume neighboring
    // top-level parameters (the semicolon-separated `38;5;n` case).
    let groups: Vec<&[u16]> = params.iter().collect();
    let mut i = 0;
    while i < groups.len() {
        let group = groups[i];
        let code = group.first().copied().unwrap_or(0);

        // Colon-separated sub-parameters: `38:5:n` or `38:2:r:g:b` arrive
        // as one group.
        if (code == 38 || code == 48) && group.len() > 1 {
            apply_extended_color(term, code, &group[1..]);
            i += 1;
            continue;
        }

        match code {
            0 => reset(term),
            1 => term.cursor_attrs_mut().insert(CellAttrs::BOLD),
            2 => term.cursor_attrs_mut().insert(CellAttrs::FAINT),
            3 => term.cursor_attrs_mut().insert(CellAttrs::ITALIC),
            4 => term.cursor_attrs_mut().insert(CellAttrs::UNDERLINE),
            5 | 6 => term.cursor_attrs_mut().insert(CellAttrs::BLINK),
            7 => term.cursor_attrs_mut().insert(CellAttrs::REVERSE),
            8 => term.cursor_attrs_mut().insert(CellAttrs::INVISIBLE),
            9 => term.cursor_attrs_mut().insert(CellAttrs::STRUCK),
            22 => term.cursor_attrs_mut().remove(CellAttrs::BOLD | CellAttrs::FAINT),
            23 => term.cursor_attrs_mut().remove(CellAttrs::ITALIC),
            24 => term.cursor_attrs_mut().remove(CellAttrs::UNDERLINE),
            25 => term.cursor_attrs_mut().remove(CellAttrs::BLINK),
            27 => term.cursor_attrs_mut().remove(CellAttrs::REVERSE),
            28 => term.cursor_attrs_mut().remove(CellAttrs::INVISIBLE),
            29 => term.cursor_attrs_mut().remove(CellAttrs::STRUCK),
            30..=37 => term.set_fg(Color::Palette((code - 30) as u8)),
            38 => {
                // Semicolon-separated extended form: `38;5;n` or `38;2;r;g;b`.
                i = apply_extended_color_semicolon(term, &groups, i, true);
                continue;
            }
            39 => term.set_fg(Color::Default),
            40..=47 => term.set_bg(Color::Palette((code - 40) as u8)),
            48 => {
                i = apply_extended_color_semicolon(term, &groups, i, false);
                continue;
            }
            49 => term.set_bg(Color::Default),
            90..=97 => term.set_fg(Color::Palette((code - 90) as u8 + 8)),
            100..=107 => term.set_bg(Color::Palette((code - 100) as u8 + 8)),
            _ => tracing::warn!(code, "unknown SGR parameter"),
        }
        i += 1;
    }
}

fn reset(term: &mut Grid) {
    let t = term.cursor_template_mut();
    t.attrs = CellAttrs::empty();
    t.fg = Color::Default;
    t.bg = Color::Default;
}

fn apply_extended_color(term: &mut Grid, code: u16, sub: &[u16]) {
    let color = match sub.first().copied() {
        Some(5) => sub.get(1).map(|&n| Color::Palette(n as u8)),
        Some(2) => match (sub.get(1), sub.get(2), sub.get(3)) {
            (Some(&r), Some(&g), Some(&b)) => Some(Color::Rgb(r as u8, g as u8, b as u8)),
            _ => None,
        },
        _ => None,
    };
    match color {
        Some(c) if code == 38 => term.set_fg(c),
        Some(c) => term.set_bg(c),
        None => tracing::warn!(code, ?sub, "invalid extended SGR color"),
    }
}

/// Handles the semicolon-separated extended-color form, where `38`/`48`,
/// the mode selector, and the color components each arrive as separate
/// top-level parameters. Returns the next index to resume from.
fn apply_extended_color_semicolon(
    term: &mut Grid,
    groups: &[&[u16]],
    start: usize,
    is_fg: bool,
) -> usize {
    let mode = groups.get(start + 1).and_then(|g| g.first().copied());
    match mode {
        Some(5) => {
            if let Some(n) = groups.get(start + 2).and_then(|g| g.first().copied()) {
                let color = Color::Palette(n as u8);
                if is_fg { term.set_fg(color) } else { term.set_bg(color) }
                start + 3
            } else {
                tracing::warn!("truncated 38;5/48;5 SGR sequence");
                groups.len()
            }
        }
        Some(2) => {
            let r = groups.get(start + 2).and_then(|g| g.first().copied());
            let g = groups.get(start + 3).and_then(|g| g.first().copied());
            let b = groups.get(start + 4).and_then(|g| g.first().copied());
            match (r, g, b) {
                (Some(r), Some(g), Some(b)) => {
                    let color = Color::Rgb(r as u8, g as u8, b as u8);
                    if is_fg { term.set_fg(color) } else { term.set_bg(color) }
                    start + 5
                }
                _ => {
                    tracing::warn!("truncated 38;2/48;2 SGR sequence");
                    groups.len()
                }
            }
        }
        _ => {
            tracing::warn!(?mode, "unknown extended SGR color mode");
            groups.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Term;
    use crate::grid::cell::{CellAttrs, Color};

    #[test]
    fn bold_and_red_foreground() {
        let mut term = Term::new(10, 1).unwrap();
        term.feed(b"\x1b[1;31mX");
        let cell = term.cell(0, 0).unwrap();
        assert!(cell.attrs.contains(CellAttrs::BOLD));
        assert_eq!(cell.fg, Color::Palette(1));
    }

    #[test]
    fn reset_after_attrs_restores_default() {
        let mut term = Term::new(10, 1).unwrap();
        term.feed(b"\x1b[1;31m\x1b[0mX");
        let cell = term.cell(0, 0).unwrap();
        assert!(cell.attrs.is_empty());
        assert_eq!(cell.fg, Color::Default);
    }

    #[test]
    fn extended_rgb_background_semicolon_form() {
        let mut term = Term::new(10, 1).unwrap();
        term.feed(b"\x1b[48;2;10;20;30mX");
        assert_eq!(term.cell(0, 0).unwrap().bg, Color::Rgb(10, 20, 30));
    }

    #[test]
    fn extended_palette_background_colon_form() {
        let mut term = Term::new(10, 1).unwrap();
        term.feed(b"\x1b[48:5:9mX");
        assert_eq!(term.cell(0, 0).unwrap().bg, Color::Palette(9));
    }
}
