// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cell content: glyphs, colors, and the per-cell attribute bitset.

use bitflags::bitflags;

bitflags! {
    /// Per-cell rendering attributes, mirroring the reference implementation's
    /// `ATTR_*` bit flags on `Glyph.mode`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellAttrs: u16 {
        const BOLD       = 1 << 0;
        const FAINT      = 1 << 1;
        const ITALIC     = 1 << 2;
        const UNDERLINE  = 1 << 3;
        const BLINK      = 1 << 4;
        const REVERSE    = 1 << 5;
        const INVISIBLE  = 1 << 6;
        const STRUCK     = 1 << 7;
        /// Set on the last cell of a row that was wrapped by autowrap rather
        /// than an explicit newline.
        const WRAP       = 1 << 8;
        /// Owner cell of a double-width character.
        const WIDE       = 1 << 9;
        /// Placeholder cell to the right of a [`Self::WIDE`] owner. Never
        /// addressed independently; see invariant 5.
        const WDUMMY     = 1 << 10;
    }
}

/// A cell foreground or background color.
///
/// A sum type rather than a tagged integer: the reference implementation
/// steals high bits of a 32-bit integer to distinguish palette indices from
/// direct RGB, which has no natural analogue in safe Rust and would just
/// relocate the bug surface the type system can otherwise remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// The host's configured default foreground/background.
    #[default]
    Default,
    /// An index into the 256-color palette (0-15 are the ANSI colors,
    /// 16-255 the extended palette; both share this representation and are
    /// only distinguished by the host's palette table at render time).
    Palette(u8),
    /// A direct 24-bit RGB color.
    Rgb(u8, u8, u8),
}

/// One terminal cell: a code point plus its rendering attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// The displayed character. `'\u{FFFD}'` marks an undecodable input.
    pub ch: char,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Rendering attribute bits.
    pub attrs: CellAttrs,
}

impl Glyph {
    /// A blank cell (space, default colors, no attributes).
    #[must_use]
    pub const fn blank() -> Self {
        Self { ch: ' ', fg: Color::Default, bg: Color::Default, attrs: CellAttrs::empty() }
    }

    /// A blank cell carrying `attrs`' color/attribute template but a space
    /// glyph, used when clearing regions so the cleared cells pick up the
    /// cursor's current SGR state like the reference implementation does.
    #[must_use]
    pub const fn blank_with(template: Self) -> Self {
        Self { ch: ' ', fg: template.fg, bg: template.bg, attrs: CellAttrs::empty() }
    }

    #[must_use]
    pub const fn is_wide(&self) -> bool {
        self.attrs.contains(CellAttrs::WIDE)
    }

    #[must_use]
    pub const fn is_wdummy(&self) -> bool {
        self.attrs.contains(CellAttrs::WDUMMY)
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_space_with_default_colors() {
        let g = Glyph::blank();
        assert_eq!(g.ch, ' ');
        assert_eq!(g.fg, Color::Default);
        assert_eq!(g.bg, Color::Default);
        assert!(g.attrs.is_empty());
    }

    #[test]
    fn blank_with_keeps_colors_drops_glyph_attrs() {
        let template = Glyph {
            ch: 'x',
            fg: Color::Palette(1),
            bg: Color::Rgb(1, 2, 3),
            attrs: CellAttrs::BOLD | CellAttrs::WIDE,
        };
        let blanked = Glyph::blank_with(template);
        assert_eq!(blanked.ch, ' ');
        assert_eq!(blanked.fg, Color::Palette(1));
        assert_eq!(blanked.bg, Color::Rgb(1, 2, 3));
        assert!(blanked.attrs.is_empty());
    }
}
