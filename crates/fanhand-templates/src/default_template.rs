#![forbid(unsafe_code)]

//! The standard card template: image on top, skewed domain-colored title bar,
//! plain-text description sized to fit.

use std::fmt::Write as _;

use crate::card::CardViewModel;
use crate::markup::{
    self, DomainPalette, default_font_size, domain_color, escape_html, format_description,
    strip_tags,
};
use crate::registry::CardTemplate;
use crate::styles;

/// Root under which template assets are served.
pub const DEFAULT_ASSET_ROOT: &str = "modules/happytreedice-daggerheart-card-hand";

/// Title colors of the standard template.
pub const STANDARD_PALETTE: DomainPalette = &[
    ("blade", "#a31e21"),
    ("bone", "#5e5e5e"),
    ("codex", "#d4a017"),
    ("grace", "#c23b8f"),
    ("midnight", "#1a1a2e"),
    ("sage", "#2e8b57"),
    ("splendor", "#00bcd4"),
    ("valor", "#e67e22"),
    ("arcana", "#4b0082"),
];

/// Banner image for a domain.
pub(crate) fn banner_src(asset_root: &str, domain_key: &str) -> String {
    format!("{asset_root}/templates/default/assets/imgs/{domain_key}/banner.avif")
}

/// Cost badge image.
pub(crate) fn stress_src(asset_root: &str) -> String {
    format!("{asset_root}/templates/default/assets/imgs/default/stress-cost.avif")
}

/// Standard template, id `default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTemplate {
    asset_root: String,
}

impl Default for DefaultTemplate {
    fn default() -> Self {
        Self::with_asset_root(DEFAULT_ASSET_ROOT)
    }
}

impl DefaultTemplate {
    #[must_use]
    pub fn with_asset_root(asset_root: impl Into<String>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }
}

impl CardTemplate for DefaultTemplate {
    fn id(&self) -> &str {
        "default"
    }

    fn name(&self) -> &str {
        "Standard Daggerheart"
    }

    fn render_card(&self, card: &CardViewModel) -> String {
        let domain_key = card.domain_key();
        let text = strip_tags(&format_description(&card.description_html));
        let font_size = default_font_size(text.chars().count());

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
                r#"<div class="divider-container">"#,
                r#"<div class="title-bg" style="background-color: {color};"></div>"#,
                r#"<p class="title">{name}</p>"#,
                r#"</div>"#,
                r#"<div class="card-text-content">"#,
            ),
            image = escape_html(card.image_or_fallback()),
            color = domain_color(STANDARD_PALETTE, &domain_key),
            name = escape_html(&card.name),
        );
        if card.is_weapon()
            && let Some(damage) = card.damage.as_ref().filter(|d| !d.formula.is_empty())
        {
            let _ = write!(
                html,
                r#"<div class="damage-info"><span class="damage-formula">{}</span><span class="damage-labels">{}</span></div>"#,
                escape_html(&damage.formula),
                escape_html(&damage.labels),
            );
        }
        let _ = write!(
            html,
            r#"<div class="description" style="font-size: {font_size}px;">{}</div></div>"#,
            escape_html(&text),
        );
        html
    }

    fn stylesheet(&self) -> String {
        styles::compose(styles::DEFAULT_CARD_STYLESHEET)
    }
}
