// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Host callback surface.
//!
//! Direct, idiomatic-Rust replacement for the reference implementation's
//! `x*` stub functions (`xclipcopy`, `xsetsel`, `xsettitle`,
//! `xsetcolorname`, `xsetcursor`, `xsetpointermotion`, `xsetmode`,
//! `xloadcols`), which exist there only so a real X11 frontend can override
//! them. Every method here defaults to a no-op so a host only implements
//! what it cares about.

/// Requested text cursor rendering style (DECSCUSR).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    BlinkingBlock,
    SteadyBlock,
    BlinkingUnderline,
    SteadyUnderline,
    BlinkingBar,
    SteadyBar,
}

/// A mouse-tracking mode requested via CSI `?9`/`?1000`/`?1002`/`?1003`/
/// `?1005`/`?1006`/`?1015` `h`/`l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMode {
    X10,
    Normal,
    ButtonEvent,
    AnyEvent,
    Utf8,
    Sgr,
    Urxvt,
}

/// Callbacks a [`crate::Term`] invokes for behavior it does not own:
/// drawing, clipboard integration, window title, palette, and outbound
/// replies (DSR/DA/DECID).
pub trait TermHost {
    /// Terminal bell (BEL outside a pending string sequence).
    fn bell(&mut self) {}

    /// OSC 0/1/2: set icon name and/or window title.
    fn set_title(&mut self, _title: &str) {}

    /// OSC 52: clipboard write. `selection` is the raw selection-target
    /// byte from the sequence (`c`, `p`, ...), uninterpreted.
    fn set_clipboard(&mut self, _selection: u8, _data: &[u8]) {}

    /// OSC 4: set palette entry `index` to the color spec string `spec`
    /// (an `rgb:rr/gg/bb`-style string, passed through uninterpreted).
    fn set_palette(&mut self, _index: u8, _spec: &str) {}

    /// OSC 104: reset one palette entry, or all of them if `index` is `None`.
    fn reset_palette(&mut self, _index: Option<u8>) {}

    /// DECSCUSR: requested cursor rendering style.
    fn set_cursor_style(&mut self, _style: CursorStyle) {}

    /// A mouse-tracking mode was enabled or disabled.
    fn set_mouse_mode(&mut self, _mode: Option<MouseMode>) {}

    /// DECKPAM/DECKPNM: application vs. normal keypad mode.
    fn set_keypad_mode(&mut self, _application: bool) {}

    /// Bytes the terminal must write back to its peer (DSR/DA/DECID
    /// replies). This is the one case where the core itself produces
    /// outbound bytes rather than just mutating cell-grid state.
    fn write_reply(&mut self, _bytes: &[u8]) {}

    /// MC (media copy): a printer dump request for `bytes`.
    fn print_dump(&mut self, _bytes: &[u8]) {}

    /// While MC 5 print mode is active, every code point and control byte
    /// processed is additionally echoed here as it would be to a real
    /// attached printer. Distinct from [`Self::print_dump`], which is a
    /// one-shot MC 0/1/2 screen/line/selection dump.
    fn print_write(&mut self, _bytes: &[u8]) {}
}

/// A [`TermHost`] that ignores every callback. Used as the default host
/// and in tests that don't care about host-visible side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl TermHost for NullHost {}
