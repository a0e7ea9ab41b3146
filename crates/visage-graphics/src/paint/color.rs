use core::cmp::Ordering;
use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Index of each channel inside [`Color::values`].
///
/// Storage order is blue, green, red, alpha. This matches the C struct layout
/// and the little-endian byte order of a packed ARGB pixel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(usize)]
pub enum Channel {
    Blue = 0,
    Green = 1,
    Red = 2,
    Alpha = 3,
}

/// Number of stored channels.
pub const NUM_CHANNELS: usize = 4;

/// Error returned by [`Color::from_hex_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Straight-alpha color with an HDR intensity multiplier.
///
/// Layout is `#[repr(C)]` and bit-identical to `VisageColor` on the C side:
/// four `f32` channels in B, G, R, A order followed by `hdr`.
///
/// Invariant:
/// - channels are normalized to `[0, 1]` when written through the setters;
///   raw construction does not clamp so interpolation overshoot is preserved.
/// - `hdr` scales intensity beyond `1.0` and is never negative via setters.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Color {
    values: [f32; NUM_CHANNELS],
    hdr: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from alpha, red, green and blue components with `hdr = 1`.
    #[inline]
    pub const fn new(alpha: f32, red: f32, green: f32, blue: f32) -> Self {
        Self {
            values: [blue, green, red, alpha],
            hdr: 1.0,
        }
    }

    /// Returns the same color with a different HDR multiplier.
    #[inline]
    pub const fn with_hdr(mut self, hdr: f32) -> Self {
        self.hdr = hdr;
        self
    }

    /// Builds a color from raw channel storage (B, G, R, A) and an HDR multiplier.
    #[inline]
    pub const fn from_raw(values: [f32; NUM_CHANNELS], hdr: f32) -> Self {
        Self { values, hdr }
    }

    /// Creates a color from alpha, hue (degrees), saturation and value.
    ///
    /// Hue wraps around `360`. Saturation and value are clamped to `[0, 1]`.
    pub fn from_ahsv(alpha: f32, hue: f32, saturation: f32, value: f32) -> Self {
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        let h = hue.rem_euclid(360.0) / 60.0;

        let chroma = v * s;
        let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::new(alpha, r + m, g + m, b + m)
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        Self::new(
            unpack(argb >> 24),
            unpack(argb >> 16),
            unpack(argb >> 8),
            unpack(argb),
        )
    }

    /// Unpacks `0xAABBGGRR`.
    #[inline]
    pub fn from_abgr(abgr: u32) -> Self {
        Self::new(
            unpack(abgr >> 24),
            unpack(abgr),
            unpack(abgr >> 8),
            unpack(abgr >> 16),
        )
    }

    /// Unpacks `0xRRGGBB`; alpha is implied opaque and the top byte is ignored.
    #[inline]
    pub fn from_rgb(rgb: u32) -> Self {
        Self::from_argb(0xff00_0000 | (rgb & 0x00ff_ffff))
    }

    /// Parses `RGB`, `ARGB`, `RRGGBB` or `AARRGGBB` hex digits with an optional `#`.
    ///
    /// Short forms expand each digit (`f` becomes `ff`). Forms without alpha are opaque.
    pub fn from_hex_str(hex: &str) -> Result<Self, ColorParseError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(hex.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => "ff".chars().chain(digits.chars().flat_map(|c| [c, c])).collect(),
            4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => format!("ff{digits}"),
            8 => digits.to_string(),
            _ => return Err(ColorParseError(hex.to_string())),
        };

        u32::from_str_radix(&expanded, 16)
            .map(Self::from_argb)
            .map_err(|_| ColorParseError(hex.to_string()))
    }

    /// Packs to `0xAARRGGBB`. HDR is not represented.
    #[inline]
    pub fn to_argb(self) -> u32 {
        (pack(self.alpha()) << 24) | (pack(self.red()) << 16) | (pack(self.green()) << 8) | pack(self.blue())
    }

    /// Packs to `0xAABBGGRR`. HDR is not represented.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        (pack(self.alpha()) << 24) | (pack(self.blue()) << 16) | (pack(self.green()) << 8) | pack(self.red())
    }

    /// Packs to `0xRRGGBB`, dropping alpha.
    #[inline]
    pub fn to_rgb(self) -> u32 {
        self.to_argb() & 0x00ff_ffff
    }

    #[inline]
    pub fn values(&self) -> [f32; NUM_CHANNELS] {
        self.values
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> f32 {
        self.values[channel as usize]
    }

    #[inline]
    pub fn blue(&self) -> f32 {
        self.channel(Channel::Blue)
    }

    #[inline]
    pub fn green(&self) -> f32 {
        self.channel(Channel::Green)
    }

    #[inline]
    pub fn red(&self) -> f32 {
        self.channel(Channel::Red)
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.channel(Channel::Alpha)
    }

    #[inline]
    pub fn hdr(&self) -> f32 {
        self.hdr
    }

    #[inline]
    pub fn set_blue(&mut self, val: f32) {
        self.values[Channel::Blue as usize] = val.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn set_green(&mut self, val: f32) {
        self.values[Channel::Green as usize] = val.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn set_red(&mut self, val: f32) {
        self.values[Channel::Red as usize] = val.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn set_alpha(&mut self, val: f32) {
        self.values[Channel::Alpha as usize] = val.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn set_hdr(&mut self, val: f32) {
        self.hdr = val.max(0.0);
    }

    /// Scales alpha by `mult`.
    #[inline]
    pub fn multiply_alpha(&mut self, mult: f32) {
        self.values[Channel::Alpha as usize] *= mult;
    }

    /// HSV value: the largest of the red, green and blue channels.
    #[inline]
    pub fn value(&self) -> f32 {
        self.blue().max(self.green()).max(self.red())
    }

    /// HSV saturation in `[0, 1]`. Zero for black.
    pub fn saturation(&self) -> f32 {
        let max = self.value();
        if max <= 0.0 {
            return 0.0;
        }
        let min = self.blue().min(self.green()).min(self.red());
        (max - min) / max
    }

    /// HSV hue in degrees, `[0, 360)`. Zero for greys.
    pub fn hue(&self) -> f32 {
        let (r, g, b) = (self.red(), self.green(), self.blue());
        let max = self.value();
        let range = max - r.min(g).min(b);
        if range <= 0.0 {
            return 0.0;
        }

        let sextant = if max == r {
            (g - b) / range
        } else if max == g {
            2.0 + (b - r) / range
        } else {
            4.0 + (r - g) / range
        };

        let degrees = sextant * 60.0;
        if degrees < 0.0 { degrees + 360.0 } else { degrees }
    }

    /// Linear interpolation of every channel and the HDR multiplier.
    ///
    /// Weighted form so that `t = 0` and `t = 1` reproduce the endpoints exactly.
    #[inline]
    pub fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        let lerp = |x: f32, y: f32| x * (1.0 - t) + y * t;
        let mut values = [0.0; NUM_CHANNELS];
        for (i, v) in values.iter_mut().enumerate() {
            *v = lerp(a.values[i], b.values[i]);
        }
        Self {
            values,
            hdr: lerp(a.hdr, b.hdr),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[inline]
fn unpack(byte: u32) -> f32 {
    (byte & 0xff) as f32 / 255.0
}

#[inline]
fn pack(channel: f32) -> u32 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u32
}

/// Total order on channels: `-0.0 == 0.0`, NaN sorts above every number.
fn compare_f32(a: f32, b: f32) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl Ord for Color {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| compare_f32(a, b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or_else(|| compare_f32(self.hdr, other.hdr))
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Color {}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn argb_round_trip_is_exact_for_packed_values() {
        for argb in [0x0000_0000, 0xff00_0066, 0xff00_ffff, 0x8012_3456, 0xffff_ffff] {
            assert_eq!(Color::from_argb(argb).to_argb(), argb);
        }
    }

    #[test]
    fn argb_round_trip_within_quantization() {
        let c = Color::new(0.5, 0.25, 0.75, 0.1);
        let back = Color::from_argb(c.to_argb());
        let step = 0.5 / 255.0 + 1e-6;
        assert!((back.alpha() - c.alpha()).abs() <= step);
        assert!((back.red() - c.red()).abs() <= step);
        assert!((back.green() - c.green()).abs() <= step);
        assert!((back.blue() - c.blue()).abs() <= step);
    }

    #[test]
    fn argb_channel_positions() {
        let c = Color::from_argb(0x11223344);
        assert_eq!(c.alpha(), 0x11 as f32 / 255.0);
        assert_eq!(c.red(), 0x22 as f32 / 255.0);
        assert_eq!(c.green(), 0x33 as f32 / 255.0);
        assert_eq!(c.blue(), 0x44 as f32 / 255.0);
        assert_eq!(c.hdr(), 1.0);
    }

    #[test]
    fn abgr_swaps_red_and_blue() {
        let c = Color::from_abgr(0xff0000ff);
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.blue(), 0.0);
        assert_eq!(c.to_abgr(), 0xff0000ff);
        assert_eq!(c.to_argb(), 0xffff0000);
    }

    #[test]
    fn rgb_implies_opaque_alpha() {
        let c = Color::from_rgb(0x12345678);
        assert_eq!(c.alpha(), 1.0);
        assert_eq!(c.to_rgb(), 0x345678);
    }

    #[test]
    fn storage_order_is_bgra() {
        let c = Color::new(0.4, 0.3, 0.2, 0.1);
        assert_eq!(c.values(), [0.1, 0.2, 0.3, 0.4]);
    }

    // ── hex strings ───────────────────────────────────────────────────────

    #[test]
    fn hex_six_digits_with_hash_is_opaque_red() {
        let c = Color::from_hex_str("#ff0000").unwrap();
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.blue(), 0.0);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn hex_all_lengths() {
        assert_eq!(Color::from_hex_str("0f0").unwrap().to_argb(), 0xff00ff00);
        assert_eq!(Color::from_hex_str("#80f0").unwrap().to_argb(), 0x8800ff00);
        assert_eq!(Color::from_hex_str("00ff00").unwrap().to_argb(), 0xff00ff00);
        assert_eq!(Color::from_hex_str("#4000ff00").unwrap().to_argb(), 0x4000ff00);
    }

    #[test]
    fn hex_rejects_malformed_input() {
        for bad in ["", "#", "ff", "#ff00zz", "12345", "#123456789", "red"] {
            assert!(Color::from_hex_str(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    // ── hsv ───────────────────────────────────────────────────────────────

    #[test]
    fn hsv_of_primaries() {
        let red = Color::from_argb(0xffff0000);
        assert!(approx(red.hue(), 0.0));
        assert!(approx(red.saturation(), 1.0));
        assert!(approx(red.value(), 1.0));

        let green = Color::from_argb(0xff00ff00);
        assert!(approx(green.hue(), 120.0));

        let blue = Color::from_argb(0xff0000ff);
        assert!(approx(blue.hue(), 240.0));
    }

    #[test]
    fn hsv_of_grey_and_black() {
        let grey = Color::new(1.0, 0.5, 0.5, 0.5);
        assert_eq!(grey.hue(), 0.0);
        assert_eq!(grey.saturation(), 0.0);
        assert_eq!(grey.value(), 0.5);
        assert_eq!(Color::BLACK.saturation(), 0.0);
    }

    #[test]
    fn from_ahsv_matches_hsv_accessors() {
        let c = Color::from_ahsv(0.5, 300.0, 0.5, 0.8);
        assert!(approx(c.alpha(), 0.5));
        assert!(approx(c.hue(), 300.0));
        assert!(approx(c.saturation(), 0.5));
        assert!(approx(c.value(), 0.8));
    }

    #[test]
    fn from_ahsv_wraps_hue() {
        let a = Color::from_ahsv(1.0, 30.0, 1.0, 1.0);
        let b = Color::from_ahsv(1.0, 390.0, 1.0, 1.0);
        assert_eq!(a.to_argb(), b.to_argb());
    }

    // ── interpolation / ordering ──────────────────────────────────────────

    #[test]
    fn interpolate_endpoints_are_exact() {
        let a = Color::new(0.2, 0.4, 0.6, 0.8).with_hdr(1.0);
        let b = Color::new(1.0, 0.1, 0.3, 0.9).with_hdr(4.0);
        assert_eq!(Color::interpolate(&a, &b, 0.0), a);
        assert_eq!(Color::interpolate(&a, &b, 1.0), b);

        let mid = Color::interpolate(&a, &b, 0.5);
        assert!(approx(mid.hdr(), 2.5));
        assert!(approx(mid.alpha(), 0.6));
    }

    #[test]
    fn ordering_is_lexicographic_blue_first_then_hdr() {
        let a = Color::new(1.0, 1.0, 1.0, 0.1);
        let b = Color::new(0.0, 0.0, 0.0, 0.2);
        assert!(a < b);

        let c = Color::WHITE.with_hdr(1.0);
        let d = Color::WHITE.with_hdr(2.0);
        assert!(c < d);
        assert_eq!(c.cmp(&c), Ordering::Equal);
    }

    #[test]
    fn ordering_stays_total_with_nan_channels() {
        let low = Color::new(1.0, 0.0, 0.0, 0.2);
        let nan = Color::new(1.0, 0.0, 0.0, f32::NAN);
        let high = Color::new(1.0, 0.0, 0.0, 0.8);

        // NaN must not compare equal to both neighbours
        assert_ne!(low, nan);
        assert_ne!(nan, high);
        assert!(low < high);
        assert!(high < nan);
        assert_eq!(nan.cmp(&nan), Ordering::Equal);

        let mut sorted = vec![nan, high, low];
        sorted.sort();
        assert_eq!(sorted, vec![low, high, nan]);
    }

    #[test]
    fn signed_zero_channels_are_equal() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, -0.0), Color::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn setters_clamp() {
        let mut c = Color::BLACK;
        c.set_red(2.0);
        c.set_alpha(-1.0);
        c.set_hdr(-3.0);
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.alpha(), 0.0);
        assert_eq!(c.hdr(), 0.0);
    }
}
