use core::ops::Range;
use std::fmt;

use bitflags::bitflags;

use super::{Font, layout};

bitflags! {
    /// Alignment of text inside its layout box.
    ///
    /// The empty set centers on both axes.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
    pub struct Justification: u32 {
        const LEFT = 0x1;
        const RIGHT = 0x2;
        const TOP = 0x10;
        const BOTTOM = 0x20;

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Justification {
    pub const CENTER: Self = Self::empty();
}

/// Error returned when an integer does not name a [`Direction`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidDirection(pub i32);

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid text direction {}", self.0)
    }
}

impl std::error::Error for InvalidDirection {}

/// Flow direction of laid out text. The discriminants are the C values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(i32)]
pub enum Direction {
    Left = 0,
    Up = 1,
    #[default]
    Right = 2,
    Down = 3,
}

impl Direction {
    /// Up/Down text runs along the vertical axis of its box.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl TryFrom<i32> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            other => Err(InvalidDirection(other)),
        }
    }
}

/// A mutable run of codepoints plus the settings used to lay it out.
///
/// The codepoints are stored with a trailing NUL so C callers can read them
/// as a terminated UTF-32 buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    chars: Vec<char>,
    font: Option<Font>,
    justification: Justification,
    multi_line: bool,
    character_override: Option<char>,
}

impl Text {
    pub fn new() -> Self {
        Self {
            chars: vec!['\0'],
            font: None,
            justification: Justification::CENTER,
            multi_line: false,
            character_override: None,
        }
    }

    pub fn with_font(text: &str, font: Font) -> Self {
        let mut out = Self::new();
        out.set_text(text);
        out.font = Some(font);
        out
    }

    /// Codepoints without the terminator.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars[..self.chars.len() - 1]
    }

    /// Codepoints followed by one NUL.
    #[inline]
    pub fn chars_with_nul(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_chars<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        self.chars.clear();
        self.chars.extend(chars);
        self.chars.push('\0');
    }

    pub fn set_text(&mut self, text: &str) {
        self.set_chars(text.chars());
    }

    /// UTF-8 bytes; invalid sequences become U+FFFD.
    pub fn set_text_bytes(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        self.set_chars(text.chars());
    }

    /// UTF-32 codepoints; invalid scalar values become U+FFFD.
    pub fn set_text_u32(&mut self, codepoints: &[u32]) {
        self.set_chars(
            codepoints
                .iter()
                .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER)),
        );
    }

    #[inline]
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    #[inline]
    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
    }

    #[inline]
    pub fn justification(&self) -> Justification {
        self.justification
    }

    #[inline]
    pub fn set_justification(&mut self, justification: Justification) {
        self.justification = justification;
    }

    #[inline]
    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    #[inline]
    pub fn set_multi_line(&mut self, multi_line: bool) {
        self.multi_line = multi_line;
    }

    #[inline]
    pub fn character_override(&self) -> Option<char> {
        self.character_override
    }

    /// Draws every glyph as `c` (password masking). `None` draws the real text.
    #[inline]
    pub fn set_character_override(&mut self, c: Option<char>) {
        self.character_override = c;
    }

    /// Line ranges for a box `extent` pixels long along the flow axis.
    ///
    /// Single-line text (or text without a font) is one range.
    pub fn line_ranges(&self, extent: f32) -> Vec<Range<usize>> {
        let chars = self.chars();
        let breaks = match (&self.font, self.multi_line) {
            (Some(font), true) => match self.character_override {
                Some(c) => {
                    let masked: Vec<char> =
                        chars.iter().map(|&o| if o == '\n' { o } else { c }).collect();
                    font.line_breaks(&masked, extent)
                }
                None => font.line_breaks(chars, extent),
            },
            _ => Vec::new(),
        };
        layout::line_ranges(chars.len(), &breaks)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── codepoints ────────────────────────────────────────────────────────

    #[test]
    fn stored_text_is_nul_terminated() {
        let mut t = Text::new();
        assert!(t.is_empty());
        assert_eq!(t.chars_with_nul(), &['\0']);

        t.set_text("héllo");
        assert_eq!(t.len(), 5);
        assert_eq!(t.chars_with_nul().last(), Some(&'\0'));
        assert_eq!(t.to_string(), "héllo");
    }

    #[test]
    fn invalid_input_becomes_replacement_char() {
        let mut t = Text::new();
        t.set_text_u32(&[0x41, 0xD800, 0x110000, 0x1F600]);
        assert_eq!(t.chars(), &['A', '\u{FFFD}', '\u{FFFD}', '😀']);

        t.set_text_bytes(&[b'o', b'k', 0xff]);
        assert_eq!(t.chars(), &['o', 'k', '\u{FFFD}']);
    }

    #[test]
    fn line_ranges_without_font_is_single_line() {
        let mut t = Text::new();
        t.set_text("a b c d e f");
        t.set_multi_line(true);
        assert_eq!(t.line_ranges(1.0), vec![0..11]);
    }

    #[test]
    fn multi_line_text_wraps_with_its_font() {
        let font = Font::mono(20.0, 1.0).unwrap();
        let step = font.string_width(&['a'], None).ceil();
        let mut t = Text::with_font("hello world", font);

        assert_eq!(t.line_ranges(6.5 * step), vec![0..11]);
        t.set_multi_line(true);
        assert_eq!(t.line_ranges(6.5 * step), vec![0..6, 6..11]);

        // masked text wraps like the override glyph but keeps the newline
        t.set_text("ab\ncd");
        t.set_character_override(Some('*'));
        assert_eq!(t.line_ranges(1000.0), vec![0..3, 3..5]);
    }

    // ── justification / direction ─────────────────────────────────────────

    #[test]
    fn justification_bits_match_c_values() {
        assert_eq!(Justification::CENTER.bits(), 0);
        assert_eq!(Justification::TOP_LEFT.bits(), 0x11);
        assert_eq!(Justification::BOTTOM_RIGHT.bits(), 0x22);
        assert_eq!(Justification::from_bits_truncate(0x104), Justification::CENTER);
        assert_eq!(Justification::from_bits_truncate(0x21), Justification::BOTTOM_LEFT);
    }

    #[test]
    fn direction_from_c_int() {
        assert_eq!(Direction::try_from(0), Ok(Direction::Left));
        assert_eq!(Direction::try_from(3), Ok(Direction::Down));
        assert_eq!(Direction::try_from(4), Err(InvalidDirection(4)));
        assert_eq!(Direction::try_from(-1), Err(InvalidDirection(-1)));
        assert!(Direction::Up.is_vertical());
        assert!(!Direction::Left.is_vertical());
    }
}
