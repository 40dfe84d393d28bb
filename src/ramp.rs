//! Tint/shade ramps in the HSV color space.

use std::fmt;
use std::ops::Index;
use rgb::RGB8;
use crate::{mix, parse_color, to_hex, Hsv, Result};

/// Number of colors in a [`Ramp`].
pub const RAMP_LEN: usize = 10;
/// Position of the seed color in a light [`Ramp`].
pub const BASE_INDEX: usize = 5;

const HUE_STEP: f64 = 2.;
// Saturation step of the tints (and of the darkest shade).
const SATURATION_STEP: f64 = 0.16;
// Saturation step of the other shades.
const SATURATION_STEP2: f64 = 0.05;
const BRIGHTNESS_STEP1: f64 = 0.05;
const BRIGHTNESS_STEP2: f64 = 0.15;
const LIGHT_COLOR_COUNT: usize = 5;
const DARK_COLOR_COUNT: usize = 4;

/// (index in the light ramp, opacity over the background) for each
/// entry of a dark ramp.
const DARK_COLOR_MAP: [(usize, f64); RAMP_LEN] = [
    (7, 0.15), (6, 0.25), (5, 0.3), (5, 0.45), (5, 0.65),
    (5, 0.85), (4, 0.9), (3, 0.95), (2, 0.97), (1, 0.98),
];

/// Background dark ramps are blended over, unless specified.
pub const DEFAULT_BACKGROUND: RGB8 = RGB8 { r: 0x14, g: 0x14, b: 0x14 };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Tints, the seed, then shades.
    #[default]
    Default,
    /// Colors suited to dark surfaces, blended over a background.
    Dark,
}

/// Options of [`generate`] and [`Ramp::from_seed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub theme: Theme,
    /// Only used by [`Theme::Dark`].
    pub background: RGB8,
}

impl Default for Options {
    fn default() -> Self {
        Options { theme: Theme::Default, background: DEFAULT_BACKGROUND }
    }
}

impl Options {
    /// Dark theme over the default `#141414` background.
    pub fn dark() -> Self { Options { theme: Theme::Dark, ..Self::default() } }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn background(mut self, background: RGB8) -> Self {
        self.background = background;
        self
    }

    /// Same as [`Options::background`] with a CSS color string.
    pub fn background_str(self, background: &str) -> Result<Self> {
        Ok(self.background(parse_color(background)?))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone { Tint, Shade }

fn hue(hsv: &Hsv, i: usize, tone: Tone) -> f64 {
    let h = hsv.h.round();
    let step = HUE_STEP * i as f64;
    // Greens, cyans and blues turn the other way.
    let hue = match ((60. ..= 240.).contains(&h), tone) {
        (true, Tone::Tint) | (false, Tone::Shade) => h - step,
        (true, Tone::Shade) | (false, Tone::Tint) => h + step,
    };
    if hue < 0. { hue + 360. }
    else if hue >= 360. { hue - 360. }
    else { hue }
}

fn saturation(hsv: &Hsv, i: usize, tone: Tone) -> f64 {
    if hsv.h == 0. && hsv.s == 0. {
        return hsv.s
    }
    let mut s = match tone {
        Tone::Tint => hsv.s - SATURATION_STEP * i as f64,
        Tone::Shade if i == DARK_COLOR_COUNT => hsv.s + SATURATION_STEP,
        Tone::Shade => hsv.s + SATURATION_STEP2 * i as f64,
    };
    if s > 1. { s = 1. }
    // The lightest tint stays within 0.06 ..= 0.1.
    if tone == Tone::Tint && i == LIGHT_COLOR_COUNT && s > 0.1 { s = 0.1 }
    if s < 0.06 { s = 0.06 }
    to_fixed2(s)
}

fn value(hsv: &Hsv, i: usize, tone: Tone) -> f64 {
    let v = match tone {
        Tone::Tint => hsv.v + BRIGHTNESS_STEP1 * i as f64,
        Tone::Shade => hsv.v - BRIGHTNESS_STEP2 * i as f64,
    };
    to_fixed2(v.min(1.))
}

/// Round to 2 decimals, from the exact decimal expansion of `x`.
fn to_fixed2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}

fn step(hsv: &Hsv, i: usize, tone: Tone) -> RGB8 {
    Hsv { h: hue(hsv, i, tone),
          s: saturation(hsv, i, tone),
          v: value(hsv, i, tone) }.to_rgb8()
}

/// Ten colors derived from a seed.
///
/// For the default theme, indices `0 ..= 4` are tints (lightest
/// first), index [`BASE_INDEX`] is the seed and indices `6 ..= 9` are
/// shades, darkest last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ramp([RGB8; RAMP_LEN]);

impl Ramp {
    /// Return the ramp of `seed`.
    pub fn from_seed(seed: RGB8, opts: &Options) -> Ramp {
        let light = Self::light(seed);
        match opts.theme {
            Theme::Default => light,
            Theme::Dark => light.over(opts.background),
        }
    }

    fn light(seed: RGB8) -> Ramp {
        let hsv = Hsv::from_rgb(seed);
        let mut colors = [seed; RAMP_LEN];
        for i in 1 ..= LIGHT_COLOR_COUNT {
            colors[LIGHT_COLOR_COUNT - i] = step(&hsv, i, Tone::Tint);
        }
        for i in 1 ..= DARK_COLOR_COUNT {
            colors[BASE_INDEX + i] = step(&hsv, i, Tone::Shade);
        }
        Ramp(colors)
    }

    /// Blend entries of `self` over `background` following
    /// `DARK_COLOR_MAP`.
    fn over(&self, background: RGB8) -> Ramp {
        Ramp(DARK_COLOR_MAP.map(|(index, opacity)| {
            // Opacity goes through a percentage first.
            mix(background, self.0[index], opacity * 100. / 100.)
        }))
    }

    #[inline]
    pub fn colors(&self) -> &[RGB8; RAMP_LEN] { &self.0 }

    #[inline]
    pub fn get(&self, i: usize) -> Option<RGB8> { self.0.get(i).copied() }

    /// The entry at [`BASE_INDEX`], the seed for light ramps.
    #[inline]
    pub fn base(&self) -> RGB8 { self.0[BASE_INDEX] }

    /// Colors lighter than the base, lightest first.
    pub fn tints(&self) -> &[RGB8] { &self.0[.. BASE_INDEX] }

    /// Colors darker than the base, darkest last.
    pub fn shades(&self) -> &[RGB8] { &self.0[BASE_INDEX + 1 ..] }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = RGB8> + '_ {
        self.0.iter().copied()
    }

    /// The `#rrggbb` strings of the ramp.
    pub fn to_hex(&self) -> Vec<String> {
        self.iter().map(to_hex).collect()
    }
}

impl Index<usize> for Ramp {
    type Output = RGB8;

    fn index(&self, i: usize) -> &RGB8 { &self.0[i] }
}

impl<'a> IntoIterator for &'a Ramp {
    type Item = &'a RGB8;
    type IntoIter = std::slice::Iter<'a, RGB8>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &c) in self.0.iter().enumerate() {
            if i > 0 { f.write_str(" ")? }
            f.write_str(&to_hex(c))?;
        }
        Ok(())
    }
}

/// Parse `seed` and return its ramp.
///
/// # Example
///
/// ```
/// use huelog::{generate, Options};
/// let dark = generate("#1677ff", &Options::dark()).unwrap();
/// assert_eq!(dark.to_hex()[0], "#111a2c");
/// ```
pub fn generate(seed: &str, opts: &Options) -> Result<Ramp> {
    Ok(Ramp::from_seed(parse_color(seed)?, opts))
}
