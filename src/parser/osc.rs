// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC (Operating System Command) body dispatch.
//!
//! Grounded in the reference implementation's `strhandle`. DCS/PM/APC are
//! accepted and discarded by [`super::perform::Performer`] directly since
//! they carry no behavior in scope here; this module only handles OSC.

use crate::codec::base64_decode;
use crate::grid::term::Grid;
use crate::host::TermHost;

pub(crate) fn dispatch(_term: &mut Grid, host: &mut dyn TermHost, params: &[&[u8]]) {
    let Some(&first) = params.first() else { return };
    let number: u32 = std::str::from_utf8(first).ok().and_then(|s| s.parse().ok()).unwrap_or(u32::MAX);

    match number {
        0 | 1 | 2 => {
            if let Some(title) = params.get(1).and_then(|b| std::str::from_utf8(b).ok()) {
                host.set_title(title);
            }
        }
        4 => {
            // `4;n;spec` may repeat as `4;n1;spec1;n2;spec2;...`.
            let mut rest = &params[1..];
            while rest.len() >= 2 {
                if let (Some(index), Some(spec)) =
                    (parse_u8(rest[0]), std::str::from_utf8(rest[1]).ok())
                {
                    host.set_palette(index, spec);
                }
                rest = &rest[2..];
            }
        }
        52 => {
            let selection = params.get(1).and_then(|b| b.first()).copied().unwrap_or(b'c');
            if let Some(payload) = params.get(2) {
                let data = base64_decode(payload);
                host.set_clipboard(selection, &data);
            }
        }
        104 => {
            let index = params.get(1).and_then(|b| parse_u8(b));
            host.reset_palette(index);
        }
        other => tracing::warn!(other, "unknown OSC number"),
    }
}

fn parse_u8(bytes: &[u8]) -> Option<u8> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;

    struct RecordingHost {
        title: Option<String>,
        clipboard: Option<(u8, Vec<u8>)>,
    }

    impl TermHost for RecordingHost {
        fn set_title(&mut self, title: &str) {
            self.title = Some(title.to_string());
        }
        fn set_clipboard(&mut self, selection: u8, data: &[u8]) {
            self.clipboard = Some((selection, data.to_vec()));
        }
    }

    #[test]
    fn dispatches_title() {
        let mut term = Grid::new(10, 1).unwrap();
        let mut host = RecordingHost { title: None, clipboard: None };
        dispatch(&mut term, &mut host, &[b"2", b"my title"]);
        assert_eq!(host.title.as_deref(), Some("my title"));
    }

    #[test]
    fn dispatches_clipboard() {
        let mut term = Grid::new(10, 1).unwrap();
        let mut host = RecordingHost { title: None, clipboard: None };
        dispatch(&mut term, &mut host, &[b"52", b"c", b"aGVsbG8="]);
        assert_eq!(host.clipboard, Some((b'c', b"hello".to_vec())));
    }

    #[test]
    fn unknown_number_does_not_panic() {
        let mut term = Grid::new(10, 1).unwrap();
        let mut host = NullHost;
        dispatch(&mut term, &mut host, &[b"999"]);
    }
}
