pub mod table;
pub mod theme;
pub mod types;

pub use table::{BackgroundGroup, DecorationGroup, ForegroundGroup, ThemeDomain, ThemeTable};
pub use theme::{
    BackgroundRole, Category, DecorationRole, ForegroundRole, Slot, Surface, TokenPath,
    TokenPathError,
};
pub use types::{ColorParseError, HexColor};
