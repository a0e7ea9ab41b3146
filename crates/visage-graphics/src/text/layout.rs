//! Width measurement and word wrap on top of fontdue's layout engine.
//!
//! Every function lays the chars out with [`fontdue::layout::Layout`] and maps
//! glyph byte offsets back to char indices.

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle};

/// A laid-out run plus the byte offset of each source char.
struct Run {
    layout: Layout<()>,
    char_offsets: Vec<usize>,
}

impl Run {
    fn new<I>(face: &fontdue::Font, px: f32, chars: I, settings: &LayoutSettings) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut text = String::new();
        let mut char_offsets = Vec::new();
        for c in chars {
            char_offsets.push(text.len());
            text.push(c);
        }

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(settings);
        layout.append(&[face], &TextStyle::new(&text, px, 0));
        Self { layout, char_offsets }
    }

    /// Single line: no width limit, `\n` is laid out as a zero-width glyph.
    fn unwrapped<I>(face: &fontdue::Font, px: f32, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let settings = LayoutSettings {
            wrap_hard_breaks: false,
            ..LayoutSettings::default()
        };
        Self::new(face, px, chars, &settings)
    }

    fn glyphs(&self) -> &[GlyphPosition] {
        self.layout.glyphs()
    }

    fn char_index(&self, glyph: &GlyphPosition) -> usize {
        self.char_offsets
            .binary_search(&glyph.byte_offset)
            .unwrap_or_else(|i| i)
    }
}

/// Pen position and advance of a laid-out glyph. Control chars are zero-width.
fn pen_and_advance(face: &fontdue::Font, px: f32, g: &GlyphPosition) -> (f32, f32) {
    if g.char_data.is_control() {
        return (g.x, 0.0);
    }
    let m = face.metrics_indexed(g.key.glyph_index, px);
    (g.x - m.xmin as f32, m.advance_width)
}

/// Width of `chars` on one line. With `character_override`, every glyph is
/// measured as that character instead.
pub fn string_width(face: &fontdue::Font, px: f32, chars: &[char], character_override: Option<char>) -> f32 {
    let run = Run::unwrapped(face, px, chars.iter().map(|&c| character_override.unwrap_or(c)));
    run.glyphs()
        .iter()
        .map(|g| {
            let (pen, advance) = pen_and_advance(face, px, g);
            pen + advance
        })
        .fold(0.0, f32::max)
}

/// Index of the first char whose glyph would cross `width`.
///
/// With `round`, a glyph still fits when its horizontal midpoint fits.
/// Returns `chars.len()` when everything fits.
pub fn width_overflow_index(
    face: &fontdue::Font,
    px: f32,
    chars: &[char],
    width: f32,
    round: bool,
    character_override: Option<char>,
) -> usize {
    let run = Run::unwrapped(face, px, chars.iter().map(|&c| character_override.unwrap_or(c)));
    run.glyphs()
        .iter()
        .find(|g| {
            let (pen, advance) = pen_and_advance(face, px, g);
            let reach = if round { pen + advance * 0.5 } else { pen + advance };
            reach > width
        })
        .map_or(chars.len(), |g| run.char_index(g))
}

/// Start index of every wrapped line after the first.
///
/// Word wrap follows fontdue: lines break at Unicode line-break opportunities,
/// mid-word when a word alone overflows, and after every `\n`. A trailing `\n`
/// opens an empty last line. Every line keeps at least one glyph.
pub fn line_breaks(face: &fontdue::Font, px: f32, chars: &[char], width: f32) -> Vec<usize> {
    let settings = LayoutSettings {
        max_width: Some(width),
        ..LayoutSettings::default()
    };
    let run = Run::new(face, px, chars.iter().copied(), &settings);

    let mut breaks: Vec<usize> = Vec::new();
    if let Some(lines) = run.layout.lines() {
        for line in lines.iter().skip(1) {
            let Some(g) = run.glyphs().get(line.glyph_start) else {
                continue;
            };
            let at = run.char_index(g);
            // an overflow on a line's first glyph repeats the previous start
            if at > breaks.last().copied().unwrap_or(0) && at < chars.len() {
                breaks.push(at);
            }
        }
    }
    if chars.last() == Some(&'\n') {
        breaks.push(chars.len());
    }
    breaks
}

/// Splits `len` chars into line ranges given the break positions.
pub fn line_ranges(len: usize, breaks: &[usize]) -> Vec<core::ops::Range<usize>> {
    let mut ranges = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for &b in breaks {
        ranges.push(start..b);
        start = b;
    }
    ranges.push(start..len);
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::font::{DEJAVU_SANS, DEJAVU_SANS_MONO};

    const PX: f32 = 20.0;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn face(bytes: &[u8]) -> fontdue::Font {
        fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).unwrap()
    }

    // Pen step of every glyph in the monospace face.
    fn mono_step(face: &fontdue::Font) -> f32 {
        face.metrics('a', PX).advance_width.ceil()
    }

    // ── width ─────────────────────────────────────────────────────────────

    #[test]
    fn string_width_grows_by_one_advance_per_glyph() {
        let mono = face(DEJAVU_SANS_MONO);
        let step = mono_step(&mono);
        let advance = mono.metrics('a', PX).advance_width;

        let w = string_width(&mono, PX, &chars("abc"), None);
        assert!((w - (2.0 * step + advance)).abs() < 1.0, "width {w}");
        assert_eq!(string_width(&mono, PX, &[], None), 0.0);
    }

    #[test]
    fn string_width_ignores_newlines() {
        let mono = face(DEJAVU_SANS_MONO);
        assert_eq!(
            string_width(&mono, PX, &chars("ab\nc"), None),
            string_width(&mono, PX, &chars("abc"), None)
        );
    }

    #[test]
    fn override_measures_every_glyph_as_the_override() {
        let sans = face(DEJAVU_SANS);
        let masked = string_width(&sans, PX, &chars("iii"), Some('W'));
        assert_eq!(masked, string_width(&sans, PX, &chars("WWW"), None));
        assert!(masked > string_width(&sans, PX, &chars("iii"), None));
    }

    #[test]
    fn overflow_index_exact_and_rounded() {
        let mono = face(DEJAVU_SANS_MONO);
        let step = mono_step(&mono);
        let s = chars("abcdef");

        assert_eq!(width_overflow_index(&mono, PX, &s, 3.5 * step, false, None), 3);
        // the fourth glyph's midpoint still fits
        assert_eq!(width_overflow_index(&mono, PX, &s, 3.5 * step, true, None), 4);
        assert_eq!(width_overflow_index(&mono, PX, &s, 1000.0, false, None), 6);
        assert_eq!(width_overflow_index(&mono, PX, &s, 0.0, false, None), 0);
    }

    // ── wrapping ──────────────────────────────────────────────────────────

    #[test]
    fn breaks_after_last_space() {
        let mono = face(DEJAVU_SANS_MONO);
        let step = mono_step(&mono);
        assert_eq!(line_breaks(&mono, PX, &chars("hello world"), 6.5 * step), vec![6]);
    }

    #[test]
    fn long_word_breaks_mid_word() {
        let mono = face(DEJAVU_SANS_MONO);
        let step = mono_step(&mono);
        assert_eq!(line_breaks(&mono, PX, &chars("abcdefgh"), 3.5 * step), vec![3, 6]);
    }

    #[test]
    fn line_keeps_at_least_one_glyph() {
        let mono = face(DEJAVU_SANS_MONO);
        assert_eq!(line_breaks(&mono, PX, &chars("abc"), 1.0), vec![1, 2]);
    }

    #[test]
    fn newline_forces_break() {
        let mono = face(DEJAVU_SANS_MONO);
        assert_eq!(line_breaks(&mono, PX, &chars("ab\ncd"), 1000.0), vec![3]);
        assert_eq!(line_breaks(&mono, PX, &chars("ab\n"), 1000.0), vec![3]);
        assert!(line_breaks(&mono, PX, &[], 1000.0).is_empty());
    }

    #[test]
    fn word_after_space_moves_whole() {
        let mono = face(DEJAVU_SANS_MONO);
        let step = mono_step(&mono);
        // "ab " | "cdefg " | "hi"
        assert_eq!(line_breaks(&mono, PX, &chars("ab cdefg hi"), 6.5 * step), vec![3, 9]);
    }

    #[test]
    fn break_indices_are_char_indices() {
        let mono = face(DEJAVU_SANS_MONO);
        let step = mono_step(&mono);
        // multi-byte chars before the break must not shift it
        assert_eq!(line_breaks(&mono, PX, &chars("éé ab"), 3.5 * step), vec![3]);
    }

    #[test]
    fn ranges_cover_whole_string() {
        assert_eq!(line_ranges(11, &[6]), vec![0..6, 6..11]);
        assert_eq!(line_ranges(0, &[]), vec![0..0]);
    }
}
