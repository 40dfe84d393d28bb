use std::fmt::{Display, Formatter};
use std::str::FromStr;
pub(crate) use rgb::RGB8;

/// Named seeds of the preset palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PresetColor {
    Blue,
    Purple,
    Cyan,
    Green,
    Magenta,
    Pink,
    Red,
    Orange,
    Yellow,
    Volcano,
    GeekBlue,
    Gold,
    Lime,
}

impl PresetColor {
    pub const LEN: usize = 13;

    /// All presets, in palette order.
    pub const fn array() -> [PresetColor; PresetColor::LEN] {
        use PresetColor::*;
        [
            Blue, Purple, Cyan, Green, Magenta, Pink, Red, Orange, Yellow,
            Volcano, GeekBlue, Gold, Lime,
        ]
    }

    pub const fn seed(self) -> RGB8 {
        const fn rgb(c: u32) -> RGB8 {
            RGB8 { r: (c >> 16) as u8, g: (c >> 8) as u8, b: c as u8 }
        }
        match self {
            PresetColor::Blue => rgb(0x1677ff),
            PresetColor::Purple => rgb(0x722ed1),
            PresetColor::Cyan => rgb(0x13c2c2),
            PresetColor::Green => rgb(0x52c41a),
            PresetColor::Magenta => rgb(0xeb2f96),
            PresetColor::Pink => rgb(0xeb2f96),
            PresetColor::Red => rgb(0xf5222d),
            PresetColor::Orange => rgb(0xfa8c16),
            PresetColor::Yellow => rgb(0xfadb14),
            PresetColor::Volcano => rgb(0xfa541c),
            PresetColor::GeekBlue => rgb(0x2f54eb),
            PresetColor::Gold => rgb(0xfaad14),
            PresetColor::Lime => rgb(0xa0d911),
        }
    }

    pub fn from_name(n: &str) -> Option<Self> {
        match n {
            "blue" => Some(PresetColor::Blue),
            "purple" => Some(PresetColor::Purple),
            "cyan" => Some(PresetColor::Cyan),
            "green" => Some(PresetColor::Green),
            "magenta" => Some(PresetColor::Magenta),
            "pink" => Some(PresetColor::Pink),
            "red" => Some(PresetColor::Red),
            "orange" => Some(PresetColor::Orange),
            "yellow" => Some(PresetColor::Yellow),
            "volcano" => Some(PresetColor::Volcano),
            "geekblue" => Some(PresetColor::GeekBlue),
            "gold" => Some(PresetColor::Gold),
            "lime" => Some(PresetColor::Lime),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PresetColor::Blue => "blue",
            PresetColor::Purple => "purple",
            PresetColor::Cyan => "cyan",
            PresetColor::Green => "green",
            PresetColor::Magenta => "magenta",
            PresetColor::Pink => "pink",
            PresetColor::Red => "red",
            PresetColor::Orange => "orange",
            PresetColor::Yellow => "yellow",
            PresetColor::Volcano => "volcano",
            PresetColor::GeekBlue => "geekblue",
            PresetColor::Gold => "gold",
            PresetColor::Lime => "lime",
        }
    }
}

impl Display for PresetColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(())
    }
}

/// A color together with a text color readable on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorItem {
    pub color: RGB8,
    pub text_color: RGB8,
}

impl ColorItem {
    pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
    pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

    pub const fn new(color: RGB8, text_color: RGB8) -> Self {
        ColorItem { color, text_color }
    }
}
