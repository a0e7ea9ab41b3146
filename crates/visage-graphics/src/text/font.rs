use std::fmt;
use std::sync::Arc;

use super::layout;

/// DejaVu Sans, embedded for callers without font files of their own.
pub const DEJAVU_SANS: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

/// DejaVu Sans Mono, embedded alongside [`DEJAVU_SANS`].
pub const DEJAVU_SANS_MONO: &[u8] = include_bytes!("../../fonts/DejaVuSansMono.ttf");

/// Error returned by [`Font::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// A parsed TrueType/OpenType face at a nominal size and DPI scale.
///
/// Fonts are immutable and cheap to clone: the parsed face and the source
/// bytes are shared. Every metric is in native pixels, measured at
/// `size * dpi_scale`.
#[derive(Clone)]
pub struct Font {
    face: Arc<fontdue::Font>,
    data: Arc<[u8]>,
    size: f32,
    dpi_scale: f32,
}

impl Font {
    /// Parses `bytes` and keeps a copy of them for [`font_data`](Self::font_data).
    pub fn from_bytes(size: f32, bytes: &[u8], dpi_scale: f32) -> Result<Self, FontLoadError> {
        let data: Arc<[u8]> = Arc::from(bytes);
        let face = fontdue::Font::from_bytes(&*data, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self {
            face: Arc::new(face),
            data,
            size,
            dpi_scale,
        })
    }

    /// The embedded DejaVu Sans face.
    pub fn sans(size: f32, dpi_scale: f32) -> Result<Self, FontLoadError> {
        Self::from_bytes(size, DEJAVU_SANS, dpi_scale)
    }

    /// The embedded DejaVu Sans Mono face.
    pub fn mono(size: f32, dpi_scale: f32) -> Result<Self, FontLoadError> {
        Self::from_bytes(size, DEJAVU_SANS_MONO, dpi_scale)
    }

    /// Same face and size at another DPI scale.
    pub fn with_dpi_scale(&self, dpi_scale: f32) -> Self {
        Self {
            dpi_scale,
            ..self.clone()
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }

    /// Raw bytes the font was parsed from.
    #[inline]
    pub fn font_data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn pixel_size(&self) -> f32 {
        self.size * self.dpi_scale
    }

    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        let px = self.pixel_size();
        self.face
            .horizontal_line_metrics(px)
            .map_or(px, |m| m.new_line_size)
    }

    /// Height of the top of `H` above the baseline.
    pub fn capital_height(&self) -> f32 {
        let bounds = self.face.metrics('H', self.pixel_size()).bounds;
        bounds.ymin + bounds.height
    }

    /// Descender depth below the baseline, as a positive distance.
    pub fn lower_dip_height(&self) -> f32 {
        self.face
            .horizontal_line_metrics(self.pixel_size())
            .map_or(0.0, |m| -m.descent)
    }

    /// Width of `chars` on one line. With `character_override`, every glyph
    /// is measured as that character instead.
    pub fn string_width(&self, chars: &[char], character_override: Option<char>) -> f32 {
        layout::string_width(&self.face, self.pixel_size(), chars, character_override)
    }

    pub fn width_overflow_index(
        &self,
        chars: &[char],
        width: f32,
        round: bool,
        character_override: Option<char>,
    ) -> usize {
        layout::width_overflow_index(&self.face, self.pixel_size(), chars, width, round, character_override)
    }

    pub fn line_breaks(&self, chars: &[char], width: f32) -> Vec<usize> {
        layout::line_breaks(&self.face, self.pixel_size(), chars, width)
    }
}

impl PartialEq for Font {
    /// Same parsed face at the same size and scale.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.face, &other.face)
            && self.size == other.size
            && self.dpi_scale == other.dpi_scale
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("size", &self.size)
            .field("dpi_scale", &self.dpi_scale)
            .field("data_len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = Font::from_bytes(12.0, b"definitely not a font", 1.0).unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn empty_bytes_fail_to_parse() {
        assert!(Font::from_bytes(12.0, &[], 2.0).is_err());
    }

    // ── embedded faces ────────────────────────────────────────────────────

    #[test]
    fn embedded_faces_parse() {
        let sans = Font::sans(14.0, 1.0).unwrap();
        let mono = Font::mono(14.0, 1.0).unwrap();
        assert_eq!(sans.font_data(), DEJAVU_SANS);
        assert_eq!(mono.font_data(), DEJAVU_SANS_MONO);
        assert_ne!(sans, mono);
    }

    // ── metrics ───────────────────────────────────────────────────────────

    #[test]
    fn vertical_metrics_are_positive() {
        let font = Font::sans(16.0, 1.0).unwrap();
        let cap = font.capital_height();
        let dip = font.lower_dip_height();

        assert!(cap > 0.0 && cap < 16.0, "capital height {cap}");
        assert!(dip > 0.0 && dip < 16.0, "descender {dip}");
        assert!(font.line_height() >= 16.0);
        assert!(font.line_height() >= cap + dip);
    }

    #[test]
    fn metrics_scale_with_dpi() {
        let font = Font::sans(12.0, 1.0).unwrap();
        let hi = font.with_dpi_scale(2.0);
        let text: Vec<char> = "Hello".chars().collect();

        assert_eq!(hi.size(), 12.0);
        assert!((hi.line_height() - 2.0 * font.line_height()).abs() < 1.0);
        assert!((hi.capital_height() - 2.0 * font.capital_height()).abs() < 1.0);
        assert!(hi.string_width(&text, None) > 1.8 * font.string_width(&text, None));
    }

    #[test]
    fn wrapping_matches_measured_widths() {
        let font = Font::sans(16.0, 1.0).unwrap();
        let text: Vec<char> = "one two three four".chars().collect();
        let width = font.string_width(&text[..7], None) + 1.0;

        let breaks = font.line_breaks(&text, width);
        assert!(!breaks.is_empty());
        for range in layout::line_ranges(text.len(), &breaks) {
            let line: Vec<char> = text[range].iter().copied().filter(|c| !c.is_whitespace()).collect();
            assert!(font.string_width(&line, None) <= width, "{line:?} overflows");
        }
        assert!(font.line_breaks(&text, f32::MAX).is_empty());
    }
}
