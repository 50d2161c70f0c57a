use serde::{Deserialize, Serialize};

use crate::theme::{
    BackgroundRole, Category, DecorationRole, ForegroundRole, Slot, Surface, TokenPath,
};
use crate::types::HexColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundGroup {
    pub alternate: HexColor,
    pub normal: HexColor,
}

impl BackgroundGroup {
    pub const fn get(&self, role: BackgroundRole) -> HexColor {
        match role {
            BackgroundRole::Alternate => self.alternate,
            BackgroundRole::Normal => self.normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecorationGroup {
    pub focus: HexColor,
    pub hover: HexColor,
}

impl DecorationGroup {
    pub const fn get(&self, role: DecorationRole) -> HexColor {
        match role {
            DecorationRole::Focus => self.focus,
            DecorationRole::Hover => self.hover,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForegroundGroup {
    pub active: HexColor,
    pub inactive: HexColor,
    pub link: HexColor,
    pub negative: HexColor,
    pub neutral: HexColor,
    pub normal: HexColor,
    pub positive: HexColor,
    pub visited: HexColor,
}

impl ForegroundGroup {
    pub const fn get(&self, role: ForegroundRole) -> HexColor {
        match role {
            ForegroundRole::Active => self.active,
            ForegroundRole::Inactive => self.inactive,
            ForegroundRole::Link => self.link,
            ForegroundRole::Negative => self.negative,
            ForegroundRole::Neutral => self.neutral,
            ForegroundRole::Normal => self.normal,
            ForegroundRole::Positive => self.positive,
            ForegroundRole::Visited => self.visited,
        }
    }
}

/// Color groups for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDomain {
    pub background: BackgroundGroup,
    pub decoration: DecorationGroup,
    pub foreground: ForegroundGroup,
}

impl ThemeDomain {
    pub const fn get(&self, slot: Slot) -> HexColor {
        match slot {
            Slot::Background(role) => self.background.get(role),
            Slot::Decoration(role) => self.decoration.get(role),
            Slot::Foreground(role) => self.foreground.get(role),
        }
    }

    /// The roles of `category` paired with their colors, in declaration
    /// order.
    pub fn group(&self, category: Category) -> Vec<(&'static str, HexColor)> {
        Slot::all()
            .filter(|slot| slot.category() == category)
            .map(|slot| (slot.role_name(), self.get(slot)))
            .collect()
    }
}

/// The complete semantic color table: surface → category → role → color.
///
/// Every level is a fixed record, so the key set is closed, each key appears
/// exactly once and every leaf sits three levels below the root. Serialized
/// documents that break any of those rules fail to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeTable {
    pub button: ThemeDomain,
    pub view: ThemeDomain,
}

impl ThemeTable {
    pub const fn domain(&self, surface: Surface) -> &ThemeDomain {
        match surface {
            Surface::Button => &self.button,
            Surface::View => &self.view,
        }
    }

    pub const fn get(&self, path: TokenPath) -> HexColor {
        self.domain(path.surface).get(path.slot)
    }

    /// Look up a dotted or dashed path. Anything that does not name a
    /// declared token is `None`.
    pub fn lookup(&self, path: &str) -> Option<HexColor> {
        path.parse::<TokenPath>().ok().map(|path| self.get(path))
    }

    /// All tokens in table order.
    pub fn entries(&self) -> impl Iterator<Item = (TokenPath, HexColor)> + '_ {
        TokenPath::all().map(move |path| (path, self.get(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each leaf gets a distinct color so a mixed-up accessor shows up.
    fn domain(base: u32) -> ThemeDomain {
        let c = |offset: u32| HexColor::from_u32(base + offset);
        ThemeDomain {
            background: BackgroundGroup {
                alternate: c(0),
                normal: c(1),
            },
            decoration: DecorationGroup {
                focus: c(2),
                hover: c(3),
            },
            foreground: ForegroundGroup {
                active: c(4),
                inactive: c(5),
                link: c(6),
                negative: c(7),
                neutral: c(8),
                normal: c(9),
                positive: c(10),
                visited: c(11),
            },
        }
    }

    fn table() -> ThemeTable {
        ThemeTable {
            button: domain(0x100000),
            view: domain(0x200000),
        }
    }

    #[test]
    fn typed_get_reaches_each_leaf() {
        let table = table();
        let path = TokenPath::new(Surface::View, Slot::Foreground(ForegroundRole::Visited));
        assert_eq!(table.get(path), HexColor::from_u32(0x20000b));

        let path = TokenPath::new(Surface::Button, Slot::Decoration(DecorationRole::Hover));
        assert_eq!(table.get(path), HexColor::from_u32(0x100003));
    }

    #[test]
    fn entries_cover_every_leaf_once() {
        let table = table();
        let colors: Vec<u32> = table.entries().map(|(_, c)| c.to_u32()).collect();
        assert_eq!(colors.len(), 24);
        let expected: Vec<u32> = (0..12)
            .map(|i| 0x100000 + i)
            .chain((0..12).map(|i| 0x200000 + i))
            .collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn string_lookup_returns_none_for_undeclared() {
        let table = table();
        assert_eq!(
            table.lookup("view.background.normal"),
            Some(HexColor::from_u32(0x200001))
        );
        assert_eq!(
            table.lookup("view-background-normal"),
            Some(HexColor::from_u32(0x200001))
        );
        assert_eq!(table.lookup("button.foreground.disabled"), None);
        assert_eq!(table.lookup("button"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn group_lists_roles_in_order() {
        let table = table();
        let roles: Vec<&str> = table
            .button
            .group(Category::Foreground)
            .into_iter()
            .map(|(role, _)| role)
            .collect();
        assert_eq!(
            roles,
            [
                "active", "inactive", "link", "negative", "neutral", "normal", "positive",
                "visited"
            ]
        );
        assert_eq!(
            table.view.group(Category::Decoration),
            vec![
                ("focus", HexColor::from_u32(0x200002)),
                ("hover", HexColor::from_u32(0x200003)),
            ]
        );
    }

    #[test]
    fn json_roundtrip_is_structurally_equal() {
        let table = table();
        let json = serde_json::to_string(&table).unwrap();
        let back: ThemeTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn rejects_extra_role() {
        let mut value = serde_json::to_value(table()).unwrap();
        value["button"]["foreground"]["disabled"] = serde_json::json!("#000000");
        let err = serde_json::from_value::<ThemeTable>(value).unwrap_err();
        assert!(err.to_string().contains("unknown field `disabled`"));
    }

    #[test]
    fn rejects_missing_role() {
        let mut value = serde_json::to_value(table()).unwrap();
        if let Some(group) = value["view"]["background"].as_object_mut() {
            group.remove("alternate");
        }
        let err = serde_json::from_value::<ThemeTable>(value).unwrap_err();
        assert!(err.to_string().contains("missing field `alternate`"));
    }
}
