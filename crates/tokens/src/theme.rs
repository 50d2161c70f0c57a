use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declares a closed set of lowercase names with string conversions.
macro_rules! name_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

name_enum! {
    /// Top-level UI surface a color applies to.
    Surface {
        Button => "button",
        View => "view",
    }
}

name_enum! {
    /// Property group within a surface.
    Category {
        Background => "background",
        Decoration => "decoration",
        Foreground => "foreground",
    }
}

name_enum! {
    BackgroundRole {
        Alternate => "alternate",
        Normal => "normal",
    }
}

name_enum! {
    DecorationRole {
        Focus => "focus",
        Hover => "hover",
    }
}

name_enum! {
    ForegroundRole {
        Active => "active",
        Inactive => "inactive",
        Link => "link",
        Negative => "negative",
        Neutral => "neutral",
        Normal => "normal",
        Positive => "positive",
        Visited => "visited",
    }
}

/// A role scoped to the category that declares it.
///
/// `normal` exists under both `background` and `foreground`; pairing the
/// role with its category keeps `decoration.normal` unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Background(BackgroundRole),
    Decoration(DecorationRole),
    Foreground(ForegroundRole),
}

impl Slot {
    pub const fn category(self) -> Category {
        match self {
            Slot::Background(_) => Category::Background,
            Slot::Decoration(_) => Category::Decoration,
            Slot::Foreground(_) => Category::Foreground,
        }
    }

    pub const fn role_name(self) -> &'static str {
        match self {
            Slot::Background(role) => role.as_str(),
            Slot::Decoration(role) => role.as_str(),
            Slot::Foreground(role) => role.as_str(),
        }
    }

    /// Resolve a role name within `category`.
    pub fn from_names(category: Category, role: &str) -> Option<Self> {
        match category {
            Category::Background => BackgroundRole::from_name(role).map(Slot::Background),
            Category::Decoration => DecorationRole::from_name(role).map(Slot::Decoration),
            Category::Foreground => ForegroundRole::from_name(role).map(Slot::Foreground),
        }
    }

    /// Every slot, category by category.
    pub fn all() -> impl Iterator<Item = Slot> {
        let background = BackgroundRole::ALL.iter().copied().map(Slot::Background);
        let decoration = DecorationRole::ALL.iter().copied().map(Slot::Decoration);
        let foreground = ForegroundRole::ALL.iter().copied().map(Slot::Foreground);
        background.chain(decoration).chain(foreground)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenPathError {
    #[error("expected surface.category.role, got {0} segment(s)")]
    Segments(usize),
    #[error("unknown surface {0:?}")]
    UnknownSurface(String),
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    #[error("unknown role {role:?} in category {category}")]
    UnknownRole { category: Category, role: String },
}

/// Semantic path to a single color: `surface.category.role`.
///
/// Parses from the dotted form (`button.foreground.active`) or the dashed
/// class-key form (`button-foreground-active`). None of the names contain a
/// `.` or `-`, so both spellings are unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenPath {
    pub surface: Surface,
    pub slot: Slot,
}

impl TokenPath {
    pub const fn new(surface: Surface, slot: Slot) -> Self {
        Self { surface, slot }
    }

    pub const fn category(self) -> Category {
        self.slot.category()
    }

    /// Every declared path in table order: surface, then category, then role.
    pub fn all() -> impl Iterator<Item = TokenPath> {
        Surface::ALL
            .iter()
            .flat_map(|&surface| Slot::all().map(move |slot| TokenPath::new(surface, slot)))
    }

    /// Dashed key used by utility-class generators, e.g.
    /// `button-background-normal`.
    pub fn class_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.surface,
            self.category(),
            self.slot.role_name()
        )
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.surface,
            self.category(),
            self.slot.role_name()
        )
    }
}

impl FromStr for TokenPath {
    type Err = TokenPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = if s.contains('.') { '.' } else { '-' };
        let segments: Vec<&str> = s.split(separator).collect();
        let [surface, category, role] = segments.as_slice() else {
            return Err(TokenPathError::Segments(segments.len()));
        };

        let surface = Surface::from_name(surface)
            .ok_or_else(|| TokenPathError::UnknownSurface((*surface).to_string()))?;
        let category = Category::from_name(category)
            .ok_or_else(|| TokenPathError::UnknownCategory((*category).to_string()))?;
        let slot =
            Slot::from_names(category, role).ok_or_else(|| TokenPathError::UnknownRole {
                category,
                role: (*role).to_string(),
            })?;

        Ok(TokenPath::new(surface, slot))
    }
}
