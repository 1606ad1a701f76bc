//! Avatar customization and journal themes.
//!
//! Both catalogs are fixed in code. Items and themes can be locked
//! behind a badge; selection validates the unlock against the collected
//! set. The avatar renders as a layered SVG document -- parts stack in a
//! fixed order and colorizable parts substitute the `FILL_COLOR`
//! placeholder with the configured palette color.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::badge::Badge;
use crate::error::ProfileError;

/// A slot of the avatar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AvatarPart {
    Base,
    Hair,
    Eyes,
    Mouth,
    Top,
    Accessory,
}

impl AvatarPart {
    pub const ALL: [AvatarPart; 6] = [
        AvatarPart::Base,
        AvatarPart::Hair,
        AvatarPart::Eyes,
        AvatarPart::Mouth,
        AvatarPart::Top,
        AvatarPart::Accessory,
    ];

    /// Paint order, back to front.
    pub const RENDER_ORDER: [AvatarPart; 6] = [
        AvatarPart::Base,
        AvatarPart::Top,
        AvatarPart::Mouth,
        AvatarPart::Eyes,
        AvatarPart::Hair,
        AvatarPart::Accessory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AvatarPart::Base => "Piele",
            AvatarPart::Hair => "Păr",
            AvatarPart::Eyes => "Ochi",
            AvatarPart::Mouth => "Gură",
            AvatarPart::Top => "Haine",
            AvatarPart::Accessory => "Accesorii",
        }
    }
}

/// Which configured color a colorizable item uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSlot {
    Base,
    Hair,
    Top,
}

/// One catalog item for a slot of the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarItem {
    pub id: &'static str,
    pub part: AvatarPart,
    pub name: &'static str,
    /// SVG fragment in a 0 0 128 128 viewBox; may contain `FILL_COLOR`.
    pub svg: &'static str,
    pub unlocked_by: Option<Badge>,
    pub colorizable: Option<ColorSlot>,
}

pub const SKIN_COLORS: [&str; 5] = ["#f9d5b8", "#f0b78f", "#d69867", "#a86e42", "#7c4a24"];
pub const HAIR_COLORS: [&str; 5] = ["#2d2018", "#5c4033", "#a0522d", "#e3b448", "#8e8e8e"];
pub const CLOTHING_COLORS: [&str; 5] = ["#ef4444", "#3b82f6", "#22c55e", "#a855f7", "#f59e0b"];

/// The full avatar item catalog.
pub fn avatar_items() -> &'static [AvatarItem] {
    static ITEMS: [AvatarItem; 14] = [
        AvatarItem {
            id: "base-round",
            part: AvatarPart::Base,
            name: "Față rotundă",
            svg: r#"<circle cx="64" cy="68" r="44" fill="FILL_COLOR"/>"#,
            unlocked_by: None,
            colorizable: Some(ColorSlot::Base),
        },
        AvatarItem {
            id: "base-oval",
            part: AvatarPart::Base,
            name: "Față ovală",
            svg: r#"<ellipse cx="64" cy="68" rx="38" ry="46" fill="FILL_COLOR"/>"#,
            unlocked_by: None,
            colorizable: Some(ColorSlot::Base),
        },
        AvatarItem {
            id: "hair-short",
            part: AvatarPart::Hair,
            name: "Păr scurt",
            svg: r#"<path d="M24 52 Q64 8 104 52 L104 40 Q64 0 24 40 Z" fill="FILL_COLOR"/>"#,
            unlocked_by: None,
            colorizable: Some(ColorSlot::Hair),
        },
        AvatarItem {
            id: "hair-curly",
            part: AvatarPart::Hair,
            name: "Păr creț",
            svg: r#"<path d="M20 56 Q30 16 64 14 Q98 16 108 56 Q96 36 64 34 Q32 36 20 56 Z" fill="FILL_COLOR"/>"#,
            unlocked_by: None,
            colorizable: Some(ColorSlot::Hair),
        },
        AvatarItem {
            id: "hair-star",
            part: AvatarPart::Hair,
            name: "Păr de visător",
            svg: r#"<path d="M18 58 Q24 6 64 10 Q104 6 110 58 Q88 28 64 30 Q40 28 18 58 Z" fill="FILL_COLOR"/><circle cx="98" cy="22" r="6" fill="#fde047"/>"#,
            unlocked_by: Some(Badge::Visare),
            colorizable: Some(ColorSlot::Hair),
        },
        AvatarItem {
            id: "eyes-dot",
            part: AvatarPart::Eyes,
            name: "Ochi punct",
            svg: r#"<circle cx="48" cy="62" r="5" fill="#1f2937"/><circle cx="80" cy="62" r="5" fill="#1f2937"/>"#,
            unlocked_by: None,
            colorizable: None,
        },
        AvatarItem {
            id: "eyes-spark",
            part: AvatarPart::Eyes,
            name: "Ochi strălucitori",
            svg: r#"<circle cx="48" cy="62" r="6" fill="#1f2937"/><circle cx="50" cy="60" r="2" fill="#ffffff"/><circle cx="80" cy="62" r="6" fill="#1f2937"/><circle cx="82" cy="60" r="2" fill="#ffffff"/>"#,
            unlocked_by: None,
            colorizable: None,
        },
        AvatarItem {
            id: "mouth-smile",
            part: AvatarPart::Mouth,
            name: "Zâmbet",
            svg: r#"<path d="M50 84 Q64 96 78 84" stroke="#7f1d1d" stroke-width="4" fill="none" stroke-linecap="round"/>"#,
            unlocked_by: None,
            colorizable: None,
        },
        AvatarItem {
            id: "mouth-grin",
            part: AvatarPart::Mouth,
            name: "Zâmbet larg",
            svg: r#"<path d="M46 82 Q64 102 82 82 Z" fill="#7f1d1d"/>"#,
            unlocked_by: Some(Badge::Bucurie),
            colorizable: None,
        },
        AvatarItem {
            id: "top-tee",
            part: AvatarPart::Top,
            name: "Tricou",
            svg: r#"<path d="M28 128 L36 104 Q64 94 92 104 L100 128 Z" fill="FILL_COLOR"/>"#,
            unlocked_by: None,
            colorizable: Some(ColorSlot::Top),
        },
        AvatarItem {
            id: "top-hoodie",
            part: AvatarPart::Top,
            name: "Hanorac",
            svg: r#"<path d="M24 128 L32 102 Q64 88 96 102 L104 128 Z" fill="FILL_COLOR"/><path d="M44 104 Q64 116 84 104" stroke="#1f2937" stroke-width="3" fill="none"/>"#,
            unlocked_by: Some(Badge::Prietenie),
            colorizable: Some(ColorSlot::Top),
        },
        AvatarItem {
            id: "accessory-none",
            part: AvatarPart::Accessory,
            name: "Fără accesoriu",
            svg: "",
            unlocked_by: None,
            colorizable: None,
        },
        AvatarItem {
            id: "accessory-glasses",
            part: AvatarPart::Accessory,
            name: "Ochelari",
            svg: r#"<circle cx="48" cy="62" r="11" stroke="#1f2937" stroke-width="3" fill="none"/><circle cx="80" cy="62" r="11" stroke="#1f2937" stroke-width="3" fill="none"/><line x1="59" y1="62" x2="69" y2="62" stroke="#1f2937" stroke-width="3"/>"#,
            unlocked_by: None,
            colorizable: None,
        },
        AvatarItem {
            id: "accessory-crown",
            part: AvatarPart::Accessory,
            name: "Coroană de curaj",
            svg: r#"<path d="M40 30 L48 14 L56 26 L64 10 L72 26 L80 14 L88 30 Z" fill="#fbbf24"/>"#,
            unlocked_by: Some(Badge::Curaj),
            colorizable: None,
        },
    ];
    &ITEMS
}

pub fn item_by_id(id: &str) -> Option<&'static AvatarItem> {
    avatar_items().iter().find(|item| item.id == id)
}

pub fn items_for_part(part: AvatarPart) -> Vec<&'static AvatarItem> {
    avatar_items().iter().filter(|i| i.part == part).collect()
}

/// Whether something gated behind `unlocked_by` is available.
pub fn is_unlocked(unlocked_by: Option<Badge>, collected: &BTreeSet<Badge>) -> bool {
    match unlocked_by {
        Some(badge) => collected.contains(&badge),
        None => true,
    }
}

/// Configured palette colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarColors {
    pub base: String,
    pub hair: String,
    pub top: String,
}

impl AvatarColors {
    fn for_slot(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::Base => &self.base,
            ColorSlot::Hair => &self.hair,
            ColorSlot::Top => &self.top,
        }
    }
}

/// The user's avatar: one item per slot plus the palette colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub parts: BTreeMap<AvatarPart, String>,
    pub colors: AvatarColors,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        let mut parts = BTreeMap::new();
        parts.insert(AvatarPart::Base, "base-round".to_string());
        parts.insert(AvatarPart::Hair, "hair-short".to_string());
        parts.insert(AvatarPart::Eyes, "eyes-dot".to_string());
        parts.insert(AvatarPart::Mouth, "mouth-smile".to_string());
        parts.insert(AvatarPart::Top, "top-tee".to_string());
        parts.insert(AvatarPart::Accessory, "accessory-none".to_string());
        Self {
            parts,
            colors: AvatarColors {
                base: SKIN_COLORS[0].to_string(),
                hair: HAIR_COLORS[0].to_string(),
                top: CLOTHING_COLORS[2].to_string(),
            },
        }
    }
}

impl AvatarConfig {
    /// Equip a catalog item into its slot. Locked items require their
    /// badge in the collected set.
    pub fn set_part(
        &mut self,
        item_id: &str,
        collected: &BTreeSet<Badge>,
    ) -> Result<(), ProfileError> {
        let item =
            item_by_id(item_id).ok_or_else(|| ProfileError::UnknownItem(item_id.to_string()))?;
        if let Some(badge) = item.unlocked_by {
            if !collected.contains(&badge) {
                return Err(ProfileError::Locked {
                    name: item.name.to_string(),
                    badge,
                });
            }
        }
        self.parts.insert(item.part, item.id.to_string());
        Ok(())
    }

    /// Pick a palette color for a slot.
    pub fn set_color(&mut self, slot: ColorSlot, color: &str) -> Result<(), ProfileError> {
        let (palette, name) = match slot {
            ColorSlot::Base => (&SKIN_COLORS[..], "piele"),
            ColorSlot::Hair => (&HAIR_COLORS[..], "păr"),
            ColorSlot::Top => (&CLOTHING_COLORS[..], "haine"),
        };
        if !palette.contains(&color) {
            return Err(ProfileError::UnknownColor {
                slot: name.to_string(),
                color: color.to_string(),
            });
        }
        match slot {
            ColorSlot::Base => self.colors.base = color.to_string(),
            ColorSlot::Hair => self.colors.hair = color.to_string(),
            ColorSlot::Top => self.colors.top = color.to_string(),
        }
        Ok(())
    }

    /// Render the avatar as a standalone SVG document. Unknown or
    /// missing slots are skipped rather than failing the render.
    pub fn to_svg(&self) -> String {
        let mut layers = String::new();
        for part in AvatarPart::RENDER_ORDER {
            let Some(id) = self.parts.get(&part) else {
                continue;
            };
            let Some(item) = item_by_id(id) else {
                continue;
            };
            if item.svg.is_empty() {
                continue;
            }
            let fragment = match item.colorizable {
                Some(slot) => item
                    .svg
                    .replace("FILL_COLOR", self.colors.for_slot(slot)),
                None => item.svg.to_string(),
            };
            layers.push_str("  ");
            layers.push_str(&fragment);
            layers.push('\n');
        }
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 128 128\">\n{layers}</svg>\n"
        )
    }
}

/// A journal color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    /// Text color inside entry cards.
    pub prose: &'static str,
    pub unlocked_by: Option<Badge>,
}

/// The fixed theme catalog. The first theme is the default.
pub fn themes() -> &'static [JournalTheme] {
    static THEMES: [JournalTheme; 4] = [
        JournalTheme {
            id: "clasic",
            name: "Clasic",
            background: "#f8fafc",
            text: "#334155",
            prose: "#475569",
            unlocked_by: None,
        },
        JournalTheme {
            id: "cer",
            name: "Cer senin",
            background: "#e0f2fe",
            text: "#075985",
            prose: "#0369a1",
            unlocked_by: None,
        },
        JournalTheme {
            id: "apus",
            name: "Apus",
            background: "#ffedd5",
            text: "#9a3412",
            prose: "#c2410c",
            unlocked_by: Some(Badge::Bucurie),
        },
        JournalTheme {
            id: "noapte",
            name: "Noapte înstelată",
            background: "#1e1b4b",
            text: "#e0e7ff",
            prose: "#c7d2fe",
            unlocked_by: Some(Badge::Speranta),
        },
    ];
    &THEMES
}

pub fn theme_by_id(id: &str) -> Option<&'static JournalTheme> {
    themes().iter().find(|t| t.id == id)
}

pub fn default_theme() -> &'static JournalTheme {
    &themes()[0]
}

/// Validate a theme selection against the collected badge set.
pub fn select_theme(
    id: &str,
    collected: &BTreeSet<Badge>,
) -> Result<&'static JournalTheme, ProfileError> {
    let theme = theme_by_id(id).ok_or_else(|| ProfileError::UnknownTheme(id.to_string()))?;
    if let Some(badge) = theme.unlocked_by {
        if !collected.contains(&badge) {
            return Err(ProfileError::Locked {
                name: theme.name.to_string(),
                badge,
            });
        }
    }
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_covers_every_slot_with_known_items() {
        let config = AvatarConfig::default();
        for part in AvatarPart::ALL {
            let id = config.parts.get(&part).unwrap();
            assert_eq!(item_by_id(id).unwrap().part, part);
        }
    }

    #[test]
    fn locked_item_requires_its_badge() {
        let mut config = AvatarConfig::default();
        let none = BTreeSet::new();
        assert!(matches!(
            config.set_part("accessory-crown", &none),
            Err(ProfileError::Locked { .. })
        ));

        let mut collected = BTreeSet::new();
        collected.insert(Badge::Curaj);
        config.set_part("accessory-crown", &collected).unwrap();
        assert_eq!(
            config.parts.get(&AvatarPart::Accessory).unwrap(),
            "accessory-crown"
        );
    }

    #[test]
    fn unknown_item_and_color_are_rejected() {
        let mut config = AvatarConfig::default();
        assert!(matches!(
            config.set_part("hair-missing", &BTreeSet::new()),
            Err(ProfileError::UnknownItem(_))
        ));
        assert!(matches!(
            config.set_color(ColorSlot::Hair, "#123456"),
            Err(ProfileError::UnknownColor { .. })
        ));
        config.set_color(ColorSlot::Hair, HAIR_COLORS[3]).unwrap();
        assert_eq!(config.colors.hair, HAIR_COLORS[3]);
    }

    #[test]
    fn svg_render_substitutes_colors_and_layers_in_order() {
        let config = AvatarConfig::default();
        let svg = config.to_svg();
        assert!(svg.starts_with("<svg "));
        assert!(!svg.contains("FILL_COLOR"));
        assert!(svg.contains(SKIN_COLORS[0]));
        // The base paints before the hair.
        let base = svg.find("circle cx=\"64\"").unwrap();
        let hair = svg.find("M24 52").unwrap();
        assert!(base < hair);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AvatarConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"base\":\"base-round\""));
        let back: AvatarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn theme_selection_validates_unlocks() {
        let none = BTreeSet::new();
        assert_eq!(select_theme("clasic", &none).unwrap().id, "clasic");
        assert!(matches!(
            select_theme("noapte", &none),
            Err(ProfileError::Locked { .. })
        ));
        assert!(matches!(
            select_theme("inexistent", &none),
            Err(ProfileError::UnknownTheme(_))
        ));

        let mut collected = BTreeSet::new();
        collected.insert(Badge::Speranta);
        assert_eq!(select_theme("noapte", &collected).unwrap().id, "noapte");
    }
}
