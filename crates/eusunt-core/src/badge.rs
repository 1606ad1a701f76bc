//! Badge catalog and the badge resolution seam.
//!
//! Badges are a closed set: ten tied to journaling plans and three to
//! check-in streak milestones. Once collected they are never revoked --
//! the collected set only grows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An unlockable reward identifier.
///
/// Serialized as the Romanian display name so persisted data matches the
/// original journal records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Badge {
    #[serde(rename = "Identitate")]
    Identitate,
    #[serde(rename = "Visare")]
    Visare,
    #[serde(rename = "Recunoștință (Mama)")]
    RecunostintaMama,
    #[serde(rename = "Recunoștință (Tata)")]
    RecunostintaTata,
    #[serde(rename = "Frăție")]
    Fratie,
    #[serde(rename = "Prietenie")]
    Prietenie,
    #[serde(rename = "Bucurie")]
    Bucurie,
    #[serde(rename = "Curaj")]
    Curaj,
    #[serde(rename = "Empatie")]
    Empatie,
    #[serde(rename = "Speranță")]
    Speranta,
    #[serde(rename = "Serie de 3 Zile")]
    Streak3,
    #[serde(rename = "Serie de 7 Zile")]
    Streak7,
    #[serde(rename = "Serie de 30 Zile")]
    Streak30,
}

/// Display metadata for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeInfo {
    pub icon: &'static str,
    pub description: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
}

impl Badge {
    /// Every badge, in gallery order.
    pub const ALL: [Badge; 13] = [
        Badge::Identitate,
        Badge::Visare,
        Badge::RecunostintaMama,
        Badge::RecunostintaTata,
        Badge::Fratie,
        Badge::Prietenie,
        Badge::Bucurie,
        Badge::Curaj,
        Badge::Empatie,
        Badge::Speranta,
        Badge::Streak3,
        Badge::Streak7,
        Badge::Streak30,
    ];

    /// The Romanian display (and persistence) name.
    pub fn name(&self) -> &'static str {
        match self {
            Badge::Identitate => "Identitate",
            Badge::Visare => "Visare",
            Badge::RecunostintaMama => "Recunoștință (Mama)",
            Badge::RecunostintaTata => "Recunoștință (Tata)",
            Badge::Fratie => "Frăție",
            Badge::Prietenie => "Prietenie",
            Badge::Bucurie => "Bucurie",
            Badge::Curaj => "Curaj",
            Badge::Empatie => "Empatie",
            Badge::Speranta => "Speranță",
            Badge::Streak3 => "Serie de 3 Zile",
            Badge::Streak7 => "Serie de 7 Zile",
            Badge::Streak30 => "Serie de 30 Zile",
        }
    }

    pub fn info(&self) -> BadgeInfo {
        match self {
            Badge::Identitate => BadgeInfo {
                icon: "🌟",
                description: "Pentru că ai explorat cine ești tu.",
                bg_color: "#e0f2fe",
                text_color: "#0369a1",
            },
            Badge::Visare => BadgeInfo {
                icon: "☁️",
                description: "Pentru că ai îndrăznit să visezi la viitor.",
                bg_color: "#f3e8ff",
                text_color: "#7e22ce",
            },
            Badge::RecunostintaMama => BadgeInfo {
                icon: "💖",
                description: "Pentru că apreciezi ajutorul mamei.",
                bg_color: "#fce7f3",
                text_color: "#be185d",
            },
            Badge::RecunostintaTata => BadgeInfo {
                icon: "💪",
                description: "Pentru că apreciezi ajutorul tatălui.",
                bg_color: "#dbeafe",
                text_color: "#1d4ed8",
            },
            Badge::Fratie => BadgeInfo {
                icon: "🧑‍🤝‍🧑",
                description: "Pentru că prețuiești legătura cu fratele/sora.",
                bg_color: "#dcfce7",
                text_color: "#15803d",
            },
            Badge::Prietenie => BadgeInfo {
                icon: "🤗",
                description: "Pentru că știi cât de importanți sunt prietenii.",
                bg_color: "#fef9c3",
                text_color: "#a16207",
            },
            Badge::Bucurie => BadgeInfo {
                icon: "😊",
                description: "Pentru că te bucuri de cine ești.",
                bg_color: "#ffedd5",
                text_color: "#c2410c",
            },
            Badge::Curaj => BadgeInfo {
                icon: "🦁",
                description: "Pentru că ai avut curajul să te exprimi.",
                bg_color: "#fee2e2",
                text_color: "#b91c1c",
            },
            Badge::Empatie => BadgeInfo {
                icon: "❤️",
                description: "Pentru că te-ai gândit la ceilalți.",
                bg_color: "#ffe4e6",
                text_color: "#be123c",
            },
            Badge::Speranta => BadgeInfo {
                icon: "✨",
                description: "Pentru că privești cu speranță înainte.",
                bg_color: "#ccfbf1",
                text_color: "#0f766e",
            },
            Badge::Streak3 => BadgeInfo {
                icon: "🥉",
                description: "Serie de 3 zile! Ești pe drumul cel bun!",
                bg_color: "#fef3c7",
                text_color: "#b45309",
            },
            Badge::Streak7 => BadgeInfo {
                icon: "🥈",
                description: "Serie de 7 zile! Un obicei se formează!",
                bg_color: "#f1f5f9",
                text_color: "#334155",
            },
            Badge::Streak30 => BadgeInfo {
                icon: "🥇",
                description: "Serie de 30 zile! Ești un campion al reflecției!",
                bg_color: "#fef9c3",
                text_color: "#a16207",
            },
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a plan's badge to the badge actually awarded for a finished entry.
///
/// The composer treats resolution as a fallible step: a failing resolver
/// surfaces as a recoverable submission error and the session is kept for
/// retry.
pub trait BadgeResolver {
    fn resolve(
        &self,
        plan_badge: Badge,
    ) -> Result<Badge, Box<dyn std::error::Error + Send + Sync>>;
}

/// The badge is pre-determined by the plan. The trait seam stays in place
/// for dynamic badge assignment later.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanBadgeResolver;

impl BadgeResolver for PlanBadgeResolver {
    fn resolve(
        &self,
        plan_badge: Badge,
    ) -> Result<Badge, Box<dyn std::error::Error + Send + Sync>> {
        Ok(plan_badge)
    }
}
