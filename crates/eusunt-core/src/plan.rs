//! The fixed plan catalog.
//!
//! A plan is a template for one guided journal entry: two prompts, an
//! optional list of connector words for the justification stage, colors
//! for themed rendering and the badge awarded on completion. The catalog
//! is immutable and never persisted.

use serde::{Deserialize, Serialize};

use crate::badge::Badge;

/// A fixed template describing one guided journaling flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u32,
    pub title: String,
    pub prompt1: String,
    pub prompt2: String,
    /// Connector words offered in the justification stage. Empty for
    /// two-prompt plans; whether a plan has connectors is fixed for the
    /// whole session, never per item.
    #[serde(default)]
    pub connectors: Vec<String>,
    pub badge: Badge,
    pub bg_color: String,
    pub text_color: String,
}

impl Plan {
    pub fn has_connectors(&self) -> bool {
        !self.connectors.is_empty()
    }

    /// The connector every item starts out with.
    pub fn default_connector(&self) -> Option<&str> {
        self.connectors.first().map(String::as_str)
    }
}

fn plan(
    id: u32,
    title: &str,
    prompt1: &str,
    prompt2: &str,
    connectors: &[&str],
    badge: Badge,
    bg_color: &str,
    text_color: &str,
) -> Plan {
    Plan {
        id,
        title: title.to_string(),
        prompt1: prompt1.to_string(),
        prompt2: prompt2.to_string(),
        connectors: connectors.iter().map(|c| c.to_string()).collect(),
        badge,
        bg_color: bg_color.to_string(),
        text_color: text_color.to_string(),
    }
}

/// The seven built-in plans, in selection order.
pub fn plans() -> Vec<Plan> {
    vec![
        plan(
            1,
            "Eu sunt...",
            "Eu sunt...",
            "...",
            &["datorită", "din cauza"],
            Badge::Identitate,
            "#bae6fd",
            "#075985",
        ),
        plan(
            2,
            "Aș vrea să fiu...",
            "Aș vrea să fiu...",
            "...",
            &["cu ajutorul", "prin"],
            Badge::Visare,
            "#e9d5ff",
            "#6b21a8",
        ),
        plan(
            3,
            "Mama",
            "Mama mă ajută să...",
            "Fără mama aș fi...",
            &[],
            Badge::RecunostintaMama,
            "#fbcfe8",
            "#9d174d",
        ),
        plan(
            4,
            "Tata",
            "Tata mă ajută să...",
            "Fără tata aș fi...",
            &[],
            Badge::RecunostintaTata,
            "#bfdbfe",
            "#1e40af",
        ),
        plan(
            5,
            "Frate/Soră",
            "Sora/fratele mă ajută să...",
            "Fără sora/fratele aș fi...",
            &[],
            Badge::Fratie,
            "#bbf7d0",
            "#166534",
        ),
        plan(
            6,
            "Prietenii",
            "Prietenii mă ajută să...",
            "Fără prietenii mei aș fi...",
            &[],
            Badge::Prietenie,
            "#fef08a",
            "#854d0e",
        ),
        plan(
            7,
            "Bucuria de a fi",
            "Eu sunt...",
            "...și mă bucur că...",
            &[],
            Badge::Bucurie,
            "#fed7aa",
            "#9a3412",
        ),
    ]
}

pub fn plan_by_id(id: u32) -> Option<Plan> {
    plans().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_plans_with_unique_ids() {
        let all = plans();
        assert_eq!(all.len(), 7);
        let mut ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn connector_plans_expose_a_default() {
        let p = plan_by_id(1).unwrap();
        assert!(p.has_connectors());
        assert_eq!(p.default_connector(), Some("datorită"));

        let p = plan_by_id(3).unwrap();
        assert!(!p.has_connectors());
        assert_eq!(p.default_connector(), None);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(plan_by_id(99).is_none());
    }
}
