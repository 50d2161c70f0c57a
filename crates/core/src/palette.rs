//! The built-in palette, taken from KDE Breeze light.

use reduce_theme_tokens::{
    BackgroundGroup, DecorationGroup, ForegroundGroup, HexColor, ThemeDomain, ThemeTable,
};

const DECORATION: DecorationGroup = DecorationGroup {
    focus: HexColor::from_u32(0x3daee9),
    hover: HexColor::from_u32(0x93cee9),
};

const FOREGROUND: ForegroundGroup = ForegroundGroup {
    active: HexColor::from_u32(0x3daee9),
    inactive: HexColor::from_u32(0x7f8c8d),
    link: HexColor::from_u32(0x2980b9),
    negative: HexColor::from_u32(0xda4453),
    neutral: HexColor::from_u32(0xf67400),
    normal: HexColor::from_u32(0x232629),
    positive: HexColor::from_u32(0x27ae60),
    visited: HexColor::from_u32(0x7f8c8d),
};

pub const BREEZE: ThemeTable = ThemeTable {
    button: ThemeDomain {
        background: BackgroundGroup {
            alternate: HexColor::from_u32(0xbdc3c7),
            normal: HexColor::from_u32(0xeff0f1),
        },
        decoration: DECORATION,
        foreground: FOREGROUND,
    },
    view: ThemeDomain {
        background: BackgroundGroup {
            alternate: HexColor::from_u32(0xeff0f1),
            normal: HexColor::from_u32(0xfcfcfc),
        },
        decoration: DECORATION,
        foreground: FOREGROUND,
    },
};

/// The full token table.
pub fn theme() -> &'static ThemeTable {
    &BREEZE
}
