#![forbid(unsafe_code)]

//! Projection of host items into [`CardViewModel`]s.

use fanhand_templates::{CardViewModel, DamageInfo, humanize_key};

use crate::config::HandLabels;
use crate::damage::{damage_formula, damage_labels, range_text};
use crate::host::{ActorSnapshot, HostItem};

/// Recall cost when non-zero, else stress cost when non-zero.
#[must_use]
pub fn card_cost(item: &HostItem) -> Option<i64> {
    item.recall_cost
        .filter(|cost| *cost != 0)
        .or(item.stress_cost.filter(|cost| *cost != 0))
}

/// Build the view model of `item` owned by `actor`.
#[must_use]
pub fn project(item: &HostItem, actor: &ActorSnapshot, labels: &HandLabels) -> CardViewModel {
    let damage = (item.is_weapon() && !item.damage_parts.is_empty()).then(|| DamageInfo {
        formula: damage_formula(&item.damage_parts, &actor.roll_data),
        labels: damage_labels(&item.damage_parts, &labels.damage_types),
        range: range_text(item.range.as_deref(), &labels.ranges),
    });
    let domain = item
        .domain
        .as_deref()
        .filter(|domain| !domain.is_empty())
        .map(str::to_lowercase);
    let domain_card_type = domain.as_ref().map(|_| {
        item.domain_card_type
            .as_deref()
            .filter(|subtype| !subtype.is_empty())
            .map_or_else(|| "Ability".to_owned(), humanize_key)
    });

    CardViewModel {
        id: item.id.clone(),
        name: item.name.clone(),
        image: item.image.clone().filter(|image| !image.is_empty()),
        item_type: item.item_type.clone(),
        type_label: labels
            .item_types
            .get(&item.item_type)
            .cloned()
            .unwrap_or_else(|| humanize_key(&item.item_type)),
        level: item.level.filter(|level| *level > 0),
        cost: card_cost(item),
        description_html: item.description_html.clone(),
        domain,
        domain_card_type,
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DamagePart;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn cost_prefers_recall() {
        let mut item = HostItem {
            recall_cost: Some(0),
            stress_cost: Some(1),
            ..HostItem::default()
        };
        assert_eq!(card_cost(&item), Some(1));
        item.recall_cost = Some(2);
        assert_eq!(card_cost(&item), Some(2));
        item.recall_cost = None;
        item.stress_cost = Some(0);
        assert_eq!(card_cost(&item), None);
    }

    #[test]
    fn weapon_projection() {
        let actor = ActorSnapshot {
            id: "a1".into(),
            roll_data: json!({ "prof": 2 }),
            ..ActorSnapshot::default()
        };
        let item = HostItem {
            id: "w1".into(),
            name: "Longbow".into(),
            item_type: "weapon".into(),
            range: Some("far".into()),
            damage_parts: vec![DamagePart {
                multiplier: Some("prof".into()),
                dice: "d8".into(),
                bonus: 1,
                types: vec!["physical".into()],
                ..DamagePart::default()
            }],
            ..HostItem::default()
        };
        let card = project(&item, &actor, &HandLabels::default());
        assert_eq!(card.type_label, "Weapon");
        assert_eq!(
            card.damage,
            Some(DamageInfo {
                formula: "2d8 + 1".into(),
                labels: "Physical".into(),
                range: "Far".into(),
            })
        );
        assert_eq!(card.domain, None);
        assert_eq!(card.domain_card_type, None);
    }

    #[test]
    fn domain_card_projection() {
        let item = HostItem {
            id: "d1".into(),
            name: "Rune Ward".into(),
            item_type: "domainCard".into(),
            domain: Some("Codex".into()),
            domain_card_type: Some("spell".into()),
            level: Some(1),
            recall_cost: Some(1),
            ..HostItem::default()
        };
        let card = project(&item, &ActorSnapshot::default(), &HandLabels::default());
        assert_eq!(card.domain.as_deref(), Some("codex"));
        assert_eq!(card.domain_card_type.as_deref(), Some("Spell"));
        assert_eq!(card.type_label, "Domain Card");
        assert_eq!(card.level, Some(1));
        assert_eq!(card.cost, Some(1));
        assert_eq!(card.damage, None);
    }
}
