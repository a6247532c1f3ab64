#![forbid(unsafe_code)]

//! The improved card template: full-bleed image, a bottom-anchored text block
//! with a divider-framed type line, range text and rich description markup.

use std::fmt::Write as _;

use crate::card::CardViewModel;
use crate::default_template::{DEFAULT_ASSET_ROOT, banner_src, stress_src};
use crate::markup::{
    self, DomainPalette, domain_color, escape_html, format_description, improved_font_size,
};
use crate::registry::CardTemplate;
use crate::styles;

/// Title colors of the improved template.
pub const IMPROVED_PALETTE: DomainPalette = &[
    ("blade", "#a31e21"),
    ("bone", "#5e5e5e"),
    ("codex", "#00bcd4"),
    ("grace", "#c23b8f"),
    ("midnight", "#1a1a2e"),
    ("sage", "#2e8b57"),
    ("splendor", "#d4a017"),
    ("valor", "#e67e22"),
    ("arcana", "#4b0082"),
];

/// Subtype shown for domain cards that do not declare one.
pub const DEFAULT_DOMAIN_CARD_TYPE: &str = "Ability";

/// Improved template, id `improved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImprovedTemplate {
    asset_root: String,
}

impl Default for ImprovedTemplate {
    fn default() -> Self {
        Self::with_asset_root(DEFAULT_ASSET_ROOT)
    }
}

impl ImprovedTemplate {
    #[must_use]
    pub fn with_asset_root(asset_root: impl Into<String>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }

    fn divider_src(&self) -> String {
        format!(
            "{}/templates/improved/assets/imgs/domain-divider.png",
            self.asset_root
        )
    }
}

impl CardTemplate for ImprovedTemplate {
    fn id(&self) -> &str {
        "improved"
    }

    fn name(&self) -> &str {
        "Improved Daggerheart"
    }

    fn render_card(&self, card: &CardViewModel) -> String {
        let domain_key = card.domain_key();
        let description = format_description(&card.description_html);
        let font_size = improved_font_size(description.chars().count());
        let type_label = if card.type_label.is_empty() {
            markup::humanize_key(&card.item_type)
        } else {
            card.type_label.clone()
        };

        let mut html = markup::badges(
            card,
            &banner_src(&self.asset_root, &domain_key),
            &stress_src(&self.asset_root),
        );
        let _ = write!(
            html,
            concat!(
                r#"<div class="card-image-container">"#,
                r#"<img class="card-main-image" src="{image}" draggable="false">"#,
                r#"</div>"#,
                r#"<div class="card-text-content">"#,
                r#"<div class="divider-container">"#,
                r#"<div class="title-bg" style="--divider-url: url('{divider}'); --domain-color: {color};"><div class="title-bg-inner"></div></div>"#,
                r#"<p class="card-type">{type_label}</p>"#,
                r#"</div>"#,
                r#"<div class="card-title">{name}</div>"#,
            ),
            image = escape_html(card.image_or_fallback()),
            divider = escape_html(&self.divider_src()),
            color = domain_color(IMPROVED_PALETTE, &domain_key),
            type_label = escape_html(&type_label),
            name = escape_html(&card.name),
        );
        if card.domain.as_deref().is_some_and(|domain| !domain.is_empty()) {
            let subtype = card
                .domain_card_type
                .as_deref()
                .filter(|subtype| !subtype.is_empty())
                .unwrap_or(DEFAULT_DOMAIN_CARD_TYPE);
            let _ = write!(
                html,
                r#"<p class="domain-card-type">{}</p>"#,
                escape_html(subtype)
            );
        }
        if card.is_weapon()
            && let Some(damage) = card.damage.as_ref().filter(|d| !d.formula.is_empty())
        {
            let _ = write!(
                html,
                r#"<div class="damage-info"><span class="damage-formula">{}</span><span class="damage-labels">{}</span>"#,
                escape_html(&damage.formula),
                escape_html(&damage.labels),
            );
            if !damage.range.is_empty() {
                let _ = write!(
                    html,
                    r#"<span class="damage-range">{}</span>"#,
                    escape_html(&damage.range)
                );
            }
            html.push_str("</div>");
        }
        let _ = write!(
            html,
            r#"<div class="description" style="font-size: {font_size}px;">{description}</div></div>"#
        );
        html
    }

    fn stylesheet(&self) -> String {
        styles::compose(styles::IMPROVED_CARD_STYLESHEET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DamageInfo;

    #[test]
    fn keeps_description_markup() {
        let card = CardViewModel {
            name: "Shield".into(),
            item_type: "armor".into(),
            description_html: "<p>Reduce <strong>1</strong> damage.</p>".into(),
            ..CardViewModel::default()
        };
        let html = ImprovedTemplate::default().render_card(&card);
        assert!(html.contains(
            r#"style="font-size: 14px;"><p>Reduce <strong>1</strong> damage.</p></div>"#
        ));
        assert!(html.contains(r#"<p class="card-type">Armor</p>"#));
        assert!(!html.contains("domain-card-type"));
    }

    #[test]
    fn domain_card_subtype_line() {
        let card = CardViewModel {
            name: "Rune Ward".into(),
            item_type: "domainCard".into(),
            type_label: "Domain Card".into(),
            domain: Some("codex".into()),
            ..CardViewModel::default()
        };
        let html = ImprovedTemplate::default().render_card(&card);
        assert!(html.contains(r#"<p class="domain-card-type">Ability</p>"#));
        assert!(html.contains("--domain-color: #00bcd4;"));
    }

    #[test]
    fn weapon_shows_range() {
        let card = CardViewModel {
            name: "Bow".into(),
            item_type: "weapon".into(),
            damage: Some(DamageInfo {
                formula: "1d8".into(),
                labels: "Physical".into(),
                range: "Far".into(),
            }),
            ..CardViewModel::default()
        };
        let html = ImprovedTemplate::default().render_card(&card);
        assert!(html.contains(r#"<span class="damage-range">Far</span></div>"#));
    }

    #[test]
    fn long_description_uses_small_font() {
        let card = CardViewModel {
            description_html: "x".repeat(1000),
            ..CardViewModel::default()
        };
        let html = ImprovedTemplate::default().render_card(&card);
        assert!(html.contains(r#"style="font-size: 12px;""#));
    }
}
