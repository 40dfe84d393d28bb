//! Ramps of the preset colors, computed on first use.

pub(crate) mod ty;

use lazy_static::lazy_static;
use crate::ramp::{Options, Ramp, BASE_INDEX, RAMP_LEN};
pub use ty::{ColorItem, PresetColor};

fn build(opts: &Options) -> Vec<(PresetColor, Ramp)> {
    let palettes: Vec<_> = PresetColor::array().into_iter()
        .map(|p| (p, Ramp::from_seed(p.seed(), opts)))
        .collect();
    log::debug!("built {} preset palettes ({:?} theme)",
                palettes.len(), opts.theme);
    palettes
}

lazy_static! {
    static ref PRESET_PALETTES: Vec<(PresetColor, Ramp)> =
        build(&Options::default());

    static ref PRESET_DARK_PALETTES: Vec<(PresetColor, Ramp)> =
        build(&Options::dark());
}

/// All preset ramps, in [`PresetColor::array`] order.
pub fn preset_palettes() -> &'static [(PresetColor, Ramp)] {
    &PRESET_PALETTES
}

/// Dark ramps (over `#141414`) of the presets.
pub fn preset_dark_palettes() -> &'static [(PresetColor, Ramp)] {
    &PRESET_DARK_PALETTES
}

#[inline]
pub fn preset_palette(p: PresetColor) -> &'static Ramp {
    // The cache is built from `PresetColor::array()` hence in
    // discriminant order.
    &PRESET_PALETTES[p as usize].1
}

#[inline]
pub fn preset_dark_palette(p: PresetColor) -> &'static Ramp {
    &PRESET_DARK_PALETTES[p as usize].1
}

/// For every preset palette and every index of `indices`, return the
/// color at that index with a contrasting text color: white for
/// shades, black otherwise.  Indices outside the ramp are skipped.
///
/// # Example
///
/// ```
/// let items = huelog::colors(&[1, 5, 7]);
/// assert_eq!(items.len(), 3 * huelog::PresetColor::LEN);
/// assert_eq!(huelog::to_hex(items[1].color), "#1677ff");
/// ```
pub fn colors(indices: &[usize]) -> Vec<ColorItem> {
    let indices: Vec<usize> = indices.iter().copied()
        .filter(|&i| {
            if i >= RAMP_LEN { log::warn!("no ramp entry at index {i}") }
            i < RAMP_LEN })
        .collect();
    preset_palettes().iter()
        .flat_map(|(_, ramp)| indices.iter().map(move |&i| {
            let text = if i > BASE_INDEX { ColorItem::WHITE }
                       else { ColorItem::BLACK };
            ColorItem::new(ramp[i], text) }))
        .collect()
}
