//! Defines the fixed catalog of lifestyle tags offered as search filters.

use serde::Serialize;

/// Symbolic icon reference for a lifestyle tag.
///
/// The rendering surface decides how to draw it; [`TagIcon::glyph`] is the
/// fallback used when no icon font is loaded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TagIcon {
    Waves,
    Umbrella,
    Music,
    Flag,
    Horse,
    Shield,
    Users,
    Leaf,
    Utensils,
    Trees,
}

impl TagIcon {
    /// Returns the icon name, e.g. `"waves"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Waves => "🌊",
            Self::Umbrella => "🏖",
            Self::Music => "🎶",
            Self::Flag => "⛳",
            Self::Horse => "🐎",
            Self::Shield => "🛡",
            Self::Users => "👪",
            Self::Leaf => "🌿",
            Self::Utensils => "🍽",
            Self::Trees => "🌳",
        }
    }
}

/// An immutable entry in the lifestyle catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifestyleTag {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: TagIcon,
    pub accent_color: &'static str,
}

/// The lifestyle catalog, in display order.
pub const LIFESTYLE_TAGS: [LifestyleTag; 10] = [
    LifestyleTag {
        id: "waterfront",
        label: "Waterfront",
        icon: TagIcon::Waves,
        accent_color: "#0e7490",
    },
    LifestyleTag {
        id: "beach-access",
        label: "Beach Access",
        icon: TagIcon::Umbrella,
        accent_color: "#f59e0b",
    },
    LifestyleTag {
        id: "nightlife",
        label: "Nightlife",
        icon: TagIcon::Music,
        accent_color: "#7c3aed",
    },
    LifestyleTag {
        id: "golf",
        label: "Golf",
        icon: TagIcon::Flag,
        accent_color: "#15803d",
    },
    LifestyleTag {
        id: "equestrian",
        label: "Equestrian",
        icon: TagIcon::Horse,
        accent_color: "#92400e",
    },
    LifestyleTag {
        id: "gated-community",
        label: "Gated Community",
        icon: TagIcon::Shield,
        accent_color: "#334155",
    },
    LifestyleTag {
        id: "family",
        label: "Family Friendly",
        icon: TagIcon::Users,
        accent_color: "#db2777",
    },
    LifestyleTag {
        id: "wellness",
        label: "Wellness",
        icon: TagIcon::Leaf,
        accent_color: "#059669",
    },
    LifestyleTag {
        id: "gastronomy",
        label: "Gastronomy",
        icon: TagIcon::Utensils,
        accent_color: "#b91c1c",
    },
    LifestyleTag {
        id: "countryside",
        label: "Countryside",
        icon: TagIcon::Trees,
        accent_color: "#4d7c0f",
    },
];

pub fn lifestyle_tags() -> &'static [LifestyleTag] {
    &LIFESTYLE_TAGS
}

/// Looks up a catalog entry by id. Ids are matched exactly.
pub fn find_tag(id: &str) -> Option<&'static LifestyleTag> {
    LIFESTYLE_TAGS.iter().find(|tag| tag.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_ids_are_unique() {
        assert!(LIFESTYLE_TAGS.iter().map(|tag| tag.id).all_unique());
    }

    #[test]
    fn every_icon_is_used_once() {
        let used = LIFESTYLE_TAGS.iter().map(|tag| tag.icon).collect::<Vec<_>>();
        for icon in TagIcon::iter() {
            assert_eq!(used.iter().filter(|&&u| u == icon).count(), 1, "{icon:?}");
        }
    }

    #[test]
    fn find_tag_matches_exact_ids_only() {
        assert_eq!(find_tag("golf").map(|tag| tag.label), Some("Golf"));
        assert!(find_tag("Golf").is_none());
        assert!(find_tag("heliport").is_none());
    }

    #[test]
    fn icon_names_are_kebab_case() {
        assert_eq!(TagIcon::Waves.name(), "waves");
        assert_eq!(TagIcon::Utensils.name(), "utensils");
    }
}
