#![forbid(unsafe_code)]

//! Markup helpers shared by the built-in templates.
//!
//! Everything here is string-in, string-out. Host-provided text is escaped
//! before it lands in markup; host-provided description markup is passed
//! through after enricher unwrapping.

use std::fmt::Write as _;

use crate::card::CardViewModel;

/// DOM id of the panel root.
pub const PANEL_ELEMENT_ID: &str = "daggerheart-hand";
/// DOM id of the panel drag handle (background plate).
pub const DRAG_HANDLE_ELEMENT_ID: &str = "dh-hand-drag-target";
/// DOM id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "daggerheart-hand-styles";

/// Domain → title color, one table per template.
pub type DomainPalette = &'static [(&'static str, &'static str)];

/// Color used for unknown domains.
pub const FALLBACK_DOMAIN_COLOR: &str = "#3d3d3d";

/// Look up a domain color, falling back to [`FALLBACK_DOMAIN_COLOR`].
#[must_use]
pub fn domain_color(palette: DomainPalette, key: &str) -> &'static str {
    palette
        .iter()
        .find(|(domain, _)| *domain == key)
        .map_or(FALLBACK_DOMAIN_COLOR, |(_, color)| color)
}

/// Escape text for use in element content or a quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Text content of a markup fragment: tags removed, common entities decoded.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Unwrap host enrichers into readable text.
///
/// `@Tag[target]{Label}` becomes `Label`, `@Tag[target]` becomes `target`,
/// and inline rolls `[[/r 1d6+2]]` become `1d6+2`. Anything else is kept.
#[must_use]
pub fn format_description(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(pos) = rest.find(['@', '[']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match parse_enricher(tail).or_else(|| parse_inline_roll(tail)) {
            Some((text, consumed)) => {
                out.push_str(text);
                rest = &tail[consumed..];
            }
            None => {
                out.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn parse_enricher(s: &str) -> Option<(&str, usize)> {
    let body = s.strip_prefix('@')?;
    let tag_len = body.find('[')?;
    if tag_len == 0 || !body[..tag_len].chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let after_tag = &body[tag_len + 1..];
    let target_len = after_tag.find(']')?;
    let target = &after_tag[..target_len];
    let consumed = 1 + tag_len + 1 + target_len + 1;
    let after_target = &after_tag[target_len + 1..];
    if let Some(label_body) = after_target.strip_prefix('{')
        && let Some(label_len) = label_body.find('}')
    {
        return Some((&label_body[..label_len], consumed + label_len + 2));
    }
    Some((target, consumed))
}

fn parse_inline_roll(s: &str) -> Option<(&str, usize)> {
    let body = s.strip_prefix("[[")?;
    let inner_len = body.find("]]")?;
    let inner = &body[..inner_len];
    let formula = match inner.strip_prefix('/') {
        Some(command) => command.split_once(' ').map_or("", |(_, formula)| formula),
        None => inner,
    };
    Some((formula.trim(), inner_len + 4))
}

/// Title-case a camelCase, snake_case or kebab-case key:
/// `veryClose` → `Very Close`, `domainCard` → `Domain Card`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut word_start = true;
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            word_start = true;
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            out.push(' ');
            word_start = true;
        }
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = false;
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
    }
    out.trim_end().to_owned()
}

/// Largest description font of the standard template.
pub const DEFAULT_FONT_MAX: u32 = 18;
/// Smallest font any sizing rule produces.
pub const FONT_FLOOR: u32 = 8;

/// Standard sizing: 18px up to 160 characters, then shrinking by a tenth
/// per additional 160 characters.
#[must_use]
pub fn default_font_size(text_len: usize) -> u32 {
    if text_len <= 160 {
        return DEFAULT_FONT_MAX;
    }
    let max = f64::from(DEFAULT_FONT_MAX);
    let ratio = (text_len as f64 / 160.0) / 10.0;
    let size = (max - ratio * max).round();
    if size <= f64::from(FONT_FLOOR) {
        FONT_FLOOR
    } else {
        size as u32
    }
}

/// Improved sizing: 14px up to 360 characters, 12px from 940, linear in
/// between.
#[must_use]
pub fn improved_font_size(text_len: usize) -> u32 {
    const MAX: f64 = 14.0;
    const MIN: f64 = 12.0;
    const SHORT: usize = 360;
    const LONG: usize = 940;
    if text_len <= SHORT {
        return 14;
    }
    if text_len >= LONG {
        return 12;
    }
    let t = (text_len - SHORT) as f64 / (LONG - SHORT) as f64;
    (MAX + (MIN - MAX) * t).round().clamp(MIN, MAX) as u32
}

/// Strings the panel shell needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelShellOptions<'a> {
    pub drag_title: &'a str,
    pub toggle_title: &'a str,
    pub no_actor_text: &'a str,
}

/// Panel root with wrapper, drag plate, collapse toggle and an empty card
/// container showing the "no actor" placeholder.
#[must_use]
pub fn panel_shell(options: &PanelShellOptions<'_>) -> String {
    format!(
        concat!(
            r#"<div id="{panel}">"#,
            r#"<div class="hand-wrapper">"#,
            r#"<div class="hand-background-plate" id="{handle}">"#,
            r#"<div class="drag-handle-area" title="{drag}"></div>"#,
            r#"</div>"#,
            r#"<div class="hand-toggle" title="{toggle}"></div>"#,
            r#"<div class="dh-cards-container">{placeholder}</div>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        panel = PANEL_ELEMENT_ID,
        handle = DRAG_HANDLE_ELEMENT_ID,
        drag = escape_html(options.drag_title),
        toggle = escape_html(options.toggle_title),
        placeholder = placeholder(options.no_actor_text),
    )
}

/// Placeholder shown in the card container.
#[must_use]
pub fn placeholder(text: &str) -> String {
    format!(r#"<div class="no-cards">{}</div>"#, escape_html(text))
}

/// Wrap template output in the draggable card element.
#[must_use]
pub fn card_element(card: &CardViewModel, inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + 128);
    let _ = write!(
        out,
        r#"<div class="dh-card" data-item-id="{}" data-type="{}"><div class="dh-card-scaler">{inner}</div></div>"#,
        escape_html(&card.id),
        escape_html(&card.item_type),
    );
    out
}

/// Level banner and cost badge shared by the built-in templates.
pub(crate) fn badges(card: &CardViewModel, banner_src: &str, stress_src: &str) -> String {
    let mut out = String::new();
    if let Some(level) = card.level.filter(|level| *level > 0) {
        let _ = write!(
            out,
            r#"<img class="card-banner_image" src="{banner_src}"><div class="card-level">{level}</div>"#
        );
    }
    if let Some(cost) = card.cost.filter(|cost| *cost != 0) {
        let _ = write!(
            out,
            r#"<img class="stress_image" src="{stress_src}"><div class="stress_text">{cost}</div>"#
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn strip_tags_keeps_text() {
        assert_eq!(strip_tags("<p>Deal <b>2</b> damage &amp; push</p>"), "Deal 2 damage & push");
    }

    #[test]
    fn enrichers_unwrap() {
        assert_eq!(
            format_description("Make a @UUID[Compendium.x.Item.abc]{Fireball} roll"),
            "Make a Fireball roll"
        );
        assert_eq!(format_description("Roll [[/r 1d6+2]] now"), "Roll 1d6+2 now");
        assert_eq!(format_description("see @Check[agility]"), "see agility");
        assert_eq!(format_description("mail me @ home [ok]"), "mail me @ home [ok]");
    }

    #[test]
    fn humanizes_keys() {
        assert_eq!(humanize_key("veryClose"), "Very Close");
        assert_eq!(humanize_key("domainCard"), "Domain Card");
        assert_eq!(humanize_key("very_far"), "Very Far");
        assert_eq!(humanize_key("melee"), "Melee");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn default_font_shrinks_past_160() {
        assert_eq!(default_font_size(0), 18);
        assert_eq!(default_font_size(160), 18);
        assert_eq!(default_font_size(320), 14);
        assert_eq!(default_font_size(100_000), FONT_FLOOR);
    }

    #[test]
    fn improved_font_interpolates() {
        assert_eq!(improved_font_size(360), 14);
        assert_eq!(improved_font_size(650), 13);
        assert_eq!(improved_font_size(940), 12);
        assert_eq!(improved_font_size(5_000), 12);
    }

    #[test]
    fn unknown_domain_uses_fallback_color() {
        const PALETTE: DomainPalette = &[("blade", "#a31e21")];
        assert_eq!(domain_color(PALETTE, "blade"), "#a31e21");
        assert_eq!(domain_color(PALETTE, "void"), FALLBACK_DOMAIN_COLOR);
    }

    #[test]
    fn card_element_wraps_and_escapes() {
        let card = CardViewModel {
            id: "a\"b".into(),
            item_type: "weapon".into(),
            ..CardViewModel::default()
        };
        assert_eq!(
            card_element(&card, "X"),
            r#"<div class="dh-card" data-item-id="a&quot;b" data-type="weapon"><div class="dh-card-scaler">X</div></div>"#
        );
    }

    #[test]
    fn shell_contains_handle_and_placeholder() {
        let html = panel_shell(&PanelShellOptions {
            drag_title: "Drag",
            toggle_title: "Toggle",
            no_actor_text: "No actor",
        });
        assert!(html.contains(r#"id="dh-hand-drag-target""#));
        assert!(html.contains(r#"<div class="no-cards">No actor</div>"#));
    }
}
