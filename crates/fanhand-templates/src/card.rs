#![forbid(unsafe_code)]

//! Renderable projection of a host item.

use serde::{Deserialize, Serialize};

/// Image shown when an item has none.
pub const FALLBACK_IMAGE: &str = "icons/svg/item-bag.svg";

/// Palette key used when an item has no domain.
pub const DEFAULT_DOMAIN_KEY: &str = "default";

/// Weapon damage summary shown on a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageInfo {
    /// Roll formula, parts joined with ` + `.
    pub formula: String,
    /// Unique damage-type labels joined with ` / `.
    pub labels: String,
    /// Humanized range, empty when unknown.
    pub range: String,
}

/// Everything a template needs to render one card.
///
/// Built fresh on every refresh; templates never see host objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardViewModel {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    /// Host type tag (`weapon`, `domainCard`, ...).
    pub item_type: String,
    /// Localized type tag.
    pub type_label: String,
    pub level: Option<u32>,
    /// Recall cost, or stress cost when there is none.
    pub cost: Option<i64>,
    /// Description markup as provided by the host.
    pub description_html: String,
    /// Domain key, lowercase.
    pub domain: Option<String>,
    /// Domain-card subtype label (`Ability`, `Spell`, ...).
    pub domain_card_type: Option<String>,
    pub damage: Option<DamageInfo>,
}

impl CardViewModel {
    /// Image reference with the generic fallback applied.
    #[must_use]
    pub fn image_or_fallback(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => FALLBACK_IMAGE,
        }
    }

    /// Palette key: the domain, then the class name for class items.
    #[must_use]
    pub fn domain_key(&self) -> String {
        match self.domain.as_deref() {
            Some(domain) if !domain.is_empty() => domain.to_lowercase(),
            _ if self.item_type == "class" => self.name.to_lowercase(),
            _ => DEFAULT_DOMAIN_KEY.to_owned(),
        }
    }

    #[must_use]
    pub fn is_weapon(&self) -> bool {
        self.item_type == "weapon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_key_prefers_domain() {
        let card = CardViewModel {
            name: "Wizard".into(),
            item_type: "class".into(),
            domain: Some("Arcana".into()),
            ..CardViewModel::default()
        };
        assert_eq!(card.domain_key(), "arcana");
    }

    #[test]
    fn domain_key_falls_back_to_class_name_then_default() {
        let class = CardViewModel {
            name: "Bard".into(),
            item_type: "class".into(),
            ..CardViewModel::default()
        };
        assert_eq!(class.domain_key(), "bard");
        assert_eq!(CardViewModel::default().domain_key(), DEFAULT_DOMAIN_KEY);
    }

    #[test]
    fn empty_image_uses_fallback() {
        let card = CardViewModel {
            image: Some(String::new()),
            ..CardViewModel::default()
        };
        assert_eq!(card.image_or_fallback(), FALLBACK_IMAGE);
    }
}
