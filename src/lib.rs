//! Color ramps and a keyed, colorized console logger.
//!
//! - [`generate`] derives a 10 color [`Ramp`] (5 tints, the seed, 4
//!   shades) from a seed color, optionally remapped for dark
//!   backgrounds.
//! - [`PresetColor`]s are expanded once into ramps, see
//!   [`preset_palettes`] and [`colors`].
//! - [`Logger`] prints timestamped messages with a stable color per
//!   key to a [`Console`].
//!
//! # Example
//!
//! ```
//! use huelog::{generate, Options};
//! let ramp = generate("#1677ff", &Options::default()).unwrap();
//! assert_eq!(ramp.to_hex()[0], "#e6f4ff");
//! assert_eq!(huelog::to_hex(ramp.base()), "#1677ff");
//! ```

use rgb::{RGB, RGB8};

mod console;
mod error;
mod logger;
mod palettes;
mod ramp;

pub use console::{Console, ConsoleTheme, Radius, Style, TerminalConsole};
pub use error::{Error, Result};
pub use logger::{ColorAssigner, FormatKey, LogConfig, LogTarget, Logger};
pub use palettes::{colors, preset_dark_palette, preset_dark_palettes,
                   preset_palette, preset_palettes, ColorItem, PresetColor};
pub use ramp::{generate, Options, Ramp, Theme, BASE_INDEX, DEFAULT_BACKGROUND,
               RAMP_LEN};

#[doc(hidden)]
pub use serde_json;

/// Parse any CSS color notation (`#rgb`, `#rrggbb`, named colors,
/// `rgb(…)`, `hsl(…)`, …).  The alpha channel is dropped.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// assert_eq!(huelog::parse_color("red").unwrap(), RGB8::new(255, 0, 0));
/// assert!(huelog::parse_color("not a color").is_err());
/// ```
pub fn parse_color(s: &str) -> Result<RGB8> {
    let c = csscolorparser::parse(s).map_err(|source| {
        Error::InvalidColor { input: s.to_string(), source } })?;
    let [r, g, b, _] = c.to_rgba8();
    Ok(RGB8 { r, g, b })
}

/// Lowercase `#rrggbb` form of `c`, never the 3 digit short form.
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Blend `from` toward `to` by `amount` ∈ \[0, 1\]:
/// `from + (to - from) * amount` per channel.
pub fn mix(from: RGB8, to: RGB8, amount: f64) -> RGB8 {
    let blend = |a: u8, b: u8| {
        (b as f64 - a as f64) * amount + a as f64 };
    quantize(RGB { r: blend(from.r, to.r),
                   g: blend(from.g, to.g),
                   b: blend(from.b, to.b) })
}

/// Round channels in \[0, 255\] to the nearest integer.
fn quantize(c: RGB<f64>) -> RGB8 {
    let q = |x: f64| x.clamp(0., 255.).round() as u8;
    RGB8 { r: q(c.r), g: q(c.g), b: q(c.b) }
}

/// A color in the HSV (a.k.a. HSB) color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, in \[0, 360).
    pub h: f64,
    /// Saturation in \[0, 1\].
    pub s: f64,
    /// Value (brightness) in \[0, 1\].
    pub v: f64,
}

impl Hsv {
    pub fn from_rgb(c: RGB8) -> Hsv {
        let r = c.r as f64 / 255.;
        let g = c.g as f64 / 255.;
        let b = c.b as f64 / 255.;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let s = if max == 0. { 0. } else { d / max };
        let h = {
            if d == 0. { 0. }
            else if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
            else if max == g { (b - r) / d + 2. }
            else { (r - g) / d + 4. } };
        Hsv { h: h / 6. * 360., s, v: max }
    }

    /// Convert back to RGB with channels in \[0, 255\], not rounded.
    ///
    /// Saturation and value are clamped to \[0, 1\] and truncated to
    /// a hundredth of a percent.  The hue is taken modulo 360.
    pub fn to_rgb(&self) -> RGB<f64> {
        let s = percent(self.s);
        let v = percent(self.v);
        let h = self.h.rem_euclid(360.) / 360. * 6.;
        let i = h.floor();
        let f = h - i;
        let p = v * (1. - s);
        let q = v * (1. - f * s);
        let t = v * (1. - (1. - f) * s);
        let (r, g, b) = match i as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        RGB { r: r * 255., g: g * 255., b: b * 255. }
    }

    pub fn to_rgb8(&self) -> RGB8 { quantize(self.to_rgb()) }
}

impl From<RGB8> for Hsv {
    #[inline]
    fn from(c: RGB8) -> Self { Hsv::from_rgb(c) }
}

/// Go through a percentage: clamp to \[0, 100\] %, keep two decimals
/// of the percentage (truncating) and come back to \[0, 1\].
fn percent(x: f64) -> f64 {
    let pct = (x * 100.).clamp(0., 100.);
    let n = (pct * 100.).trunc() / 100.;
    if (n - 100.).abs() < 1e-6 { 1. } else { n / 100. }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(to_hex(RGB8::new(0, 10, 255)), "#000aff");
        assert_eq!(to_hex(RGB8::new(0x11, 0x22, 0x33)), "#112233");
    }

    #[test]
    fn parse_named_and_hex() {
        assert_eq!(parse_color("#1677ff").unwrap(), RGB8::new(0x16, 0x77, 0xff));
        assert_eq!(parse_color("#FA8C16").unwrap(), RGB8::new(0xfa, 0x8c, 0x16));
        assert_eq!(parse_color("#fff").unwrap(), RGB8::new(255, 255, 255));
        assert_eq!(parse_color("blue").unwrap(), RGB8::new(0, 0, 255));
        assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), RGB8::new(1, 2, 3));
    }

    #[test]
    fn parse_error_keeps_input() {
        match parse_color("#12345") {
            Err(Error::InvalidColor { input, .. }) => assert_eq!(input, "#12345"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn hsv_of_primaries() {
        let red = Hsv::from_rgb(RGB8::new(255, 0, 0));
        assert_eq!(red, Hsv { h: 0., s: 1., v: 1. });
        let blue = Hsv::from_rgb(RGB8::new(0, 0, 255));
        assert!((blue.h - 240.).abs() < 1e-9);
        assert_eq!((blue.s, blue.v), (1., 1.));
        let grey = Hsv::from_rgb(RGB8::new(128, 128, 128));
        assert_eq!((grey.h, grey.s), (0., 0.));
    }

    #[test]
    fn hsv_back_to_rgb() {
        for c in [RGB8::new(22, 119, 255), RGB8::new(250, 140, 22),
                  RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)] {
            let hsv = Hsv::from_rgb(c);
            // Saturation and value lose precision below 1e-4.
            let back = hsv.to_rgb8();
            assert!((back.r as i16 - c.r as i16).abs() <= 1, "{c:?} → {back:?}");
            assert!((back.g as i16 - c.g as i16).abs() <= 1, "{c:?} → {back:?}");
            assert!((back.b as i16 - c.b as i16).abs() <= 1, "{c:?} → {back:?}");
        }
    }

    #[test]
    fn to_rgb_clamps_value() {
        let c = Hsv { h: 120., s: 0.5, v: -0.3 }.to_rgb8();
        assert_eq!(c, RGB8::new(0, 0, 0));
    }

    #[test]
    fn mix_endpoints() {
        let a = RGB8::new(20, 20, 20);
        let b = RGB8::new(220, 120, 20);
        assert_eq!(mix(a, b, 0.), a);
        assert_eq!(mix(a, b, 1.), b);
        assert_eq!(mix(a, b, 0.5), RGB8::new(120, 70, 20));
    }
}
