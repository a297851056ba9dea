#![forbid(unsafe_code)]

//! Colour palette and the colour names used by highlighter rules.

use slate_render::PackedRgba;

/// Drawn for highlight rules that name a colour the palette does not know.
pub const UNKNOWN_COLOR: PackedRgba = PackedRgba::rgb(173, 255, 47);

/// Semantic colour slots, strong and muted variants of each hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_strong: PackedRgba,
    pub fg_strong: PackedRgba,
    pub bg_muted: PackedRgba,
    pub fg_muted: PackedRgba,
    pub red_strong: PackedRgba,
    pub red_muted: PackedRgba,
    pub green_strong: PackedRgba,
    pub green_muted: PackedRgba,
    pub yellow_strong: PackedRgba,
    pub yellow_muted: PackedRgba,
    pub blue_strong: PackedRgba,
    pub blue_muted: PackedRgba,
    pub purple_strong: PackedRgba,
    pub purple_muted: PackedRgba,
    pub aqua_strong: PackedRgba,
    pub aqua_muted: PackedRgba,
    pub orange_strong: PackedRgba,
    pub orange_muted: PackedRgba,
    pub gray: PackedRgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self::gruvbox()
    }
}

impl Palette {
    /// The gruvbox dark palette.
    #[must_use]
    pub const fn gruvbox() -> Self {
        Self {
            bg_strong: PackedRgba::rgb(0x1D, 0x20, 0x19),
            fg_strong: PackedRgba::rgb(0xFB, 0xF1, 0xC7),
            bg_muted: PackedRgba::rgb(0x32, 0x30, 0x2F),
            fg_muted: PackedRgba::rgb(0xBD, 0xAE, 0x93),
            red_strong: PackedRgba::rgb(0xFB, 0x49, 0x34),
            red_muted: PackedRgba::rgb(0xCC, 0x24, 0x1D),
            green_strong: PackedRgba::rgb(0xB8, 0xBB, 0x26),
            green_muted: PackedRgba::rgb(0x98, 0x97, 0x1A),
            yellow_strong: PackedRgba::rgb(0xFA, 0xBD, 0x2F),
            yellow_muted: PackedRgba::rgb(0xD7, 0x99, 0x21),
            blue_strong: PackedRgba::rgb(0x83, 0xA5, 0x98),
            blue_muted: PackedRgba::rgb(0x45, 0x85, 0x88),
            purple_strong: PackedRgba::rgb(0xD3, 0x86, 0x9B),
            purple_muted: PackedRgba::rgb(0xB1, 0x62, 0x86),
            aqua_strong: PackedRgba::rgb(0x8E, 0xC0, 0x7C),
            aqua_muted: PackedRgba::rgb(0x68, 0x9D, 0x6A),
            orange_strong: PackedRgba::rgb(0xFE, 0x80, 0x19),
            orange_muted: PackedRgba::rgb(0xD6, 0x5D, 0x0E),
            gray: PackedRgba::rgb(0x92, 0x83, 0x74),
        }
    }

    /// Resolve a nanorc colour name.
    ///
    /// Names are matched case-insensitively. Returns `None` for names the
    /// palette has no slot for.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<PackedRgba> {
        let color = match name.to_ascii_lowercase().as_str() {
            "red" => self.red_muted,
            "brightred" => self.red_strong,
            "blue" => self.blue_muted,
            "brightblue" => self.blue_strong,
            "green" => self.green_muted,
            "brightgreen" => self.green_strong,
            "yellow" => self.yellow_muted,
            "brightyellow" => self.yellow_strong,
            "cyan" => self.aqua_strong,
            "brightcyan" => self.aqua_muted,
            "magenta" => self.purple_muted,
            "brightmagenta" => self.purple_strong,
            "white" => self.fg_muted,
            "brightwhite" => self.fg_strong,
            "black" => self.bg_strong,
            "brightblack" => self.gray,
            _ => return None,
        };
        Some(color)
    }

    /// Foreground for a rule colour name, [`UNKNOWN_COLOR`] if unknown.
    #[must_use]
    pub fn highlight_fg(&self, name: &str) -> PackedRgba {
        self.named(name).unwrap_or(UNKNOWN_COLOR)
    }
}
