#![forbid(unsafe_code)]

//! Which items make it into the hand, and in what order.

use std::cmp::Ordering;

use crate::host::HostItem;

/// Item types describing the character itself rather than something to play.
pub const STRUCTURAL_TYPES: [&str; 5] = ["class", "subclass", "race", "ancestry", "community"];

#[must_use]
pub fn is_structural(item: &HostItem) -> bool {
    STRUCTURAL_TYPES.contains(&item.item_type.as_str())
}

/// Items with actions, weapons and domain cards.
#[must_use]
pub fn is_playable(item: &HostItem) -> bool {
    item.has_actions() || item.is_weapon() || item.is_domain_card()
}

/// Equipped-only rule: items with an equipped state must be equipped, and
/// domain cards must not sit in the vault.
#[must_use]
pub fn passes_equipment(item: &HostItem, equipped_only: bool) -> bool {
    if !equipped_only {
        return true;
    }
    if item.equipped == Some(false) {
        return false;
    }
    !(item.is_domain_card() && item.in_vault)
}

/// Full visibility predicate.
#[must_use]
pub fn is_visible(item: &HostItem, equipped_only: bool) -> bool {
    !is_structural(item)
        && is_playable(item)
        && passes_equipment(item, equipped_only)
        && item.available
}

/// Sort rank: weapons, then domain cards, then everything else.
#[must_use]
pub fn type_rank(item_type: &str) -> u8 {
    match item_type {
        "weapon" => 1,
        "domainCard" => 2,
        _ => 3,
    }
}

/// Hand order: type rank, then case-insensitive name, then exact name.
#[must_use]
pub fn hand_order(a: &HostItem, b: &HostItem) -> Ordering {
    type_rank(&a.item_type)
        .cmp(&type_rank(&b.item_type))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Visible items in hand order.
#[must_use]
pub fn visible_items(items: &[HostItem], equipped_only: bool) -> Vec<&HostItem> {
    let mut visible: Vec<&HostItem> = items
        .iter()
        .filter(|item| is_visible(item, equipped_only))
        .collect();
    visible.sort_by(|a, b| hand_order(a, b));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str, item_type: &str, name: &str) -> HostItem {
        HostItem {
            id: id.into(),
            name: name.into(),
            item_type: item_type.into(),
            ..HostItem::default()
        }
    }

    fn ids(items: &[&HostItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn structural_types_are_excluded() {
        for kind in STRUCTURAL_TYPES {
            let mut it = item("x", kind, "X");
            it.action_count = 3;
            assert!(!is_visible(&it, false), "{kind} should be hidden");
        }
    }

    #[test]
    fn actionless_loot_is_excluded() {
        let loot = item("l", "loot", "Rope");
        assert!(!is_visible(&loot, false));
        let mut potion = item("p", "consumable", "Potion");
        potion.action_count = 1;
        assert!(is_visible(&potion, false));
        assert!(is_visible(&item("w", "weapon", "Axe"), false));
        assert!(is_visible(&item("d", "domainCard", "Ward"), false));
    }

    #[test]
    fn equipped_only_rules() {
        let mut unequipped = item("w", "weapon", "Axe");
        unequipped.equipped = Some(false);
        let mut vaulted = item("d", "domainCard", "Ward");
        vaulted.in_vault = true;
        let stateless = item("d2", "domainCard", "Bolt");

        assert!(!is_visible(&unequipped, true));
        assert!(!is_visible(&vaulted, true));
        assert!(is_visible(&stateless, true));
        assert!(is_visible(&unequipped, false));
        assert!(is_visible(&vaulted, false));
    }

    #[test]
    fn unavailable_items_are_excluded() {
        let mut it = item("w", "weapon", "Axe");
        it.available = false;
        assert!(!is_visible(&it, false));
    }

    #[test]
    fn sorted_by_rank_then_name() {
        let mut potion = item("p", "consumable", "antidote");
        potion.action_count = 1;
        let items = vec![
            potion,
            item("d1", "domainCard", "Zap"),
            item("w2", "weapon", "bow"),
            item("d2", "domainCard", "arc"),
            item("w1", "weapon", "Axe"),
        ];
        assert_eq!(
            ids(&visible_items(&items, true)),
            vec!["w1", "w2", "d2", "d1", "p"]
        );
    }

    #[test]
    fn case_ties_break_on_exact_name() {
        let items = vec![item("b", "weapon", "axe"), item("a", "weapon", "Axe")];
        assert_eq!(ids(&visible_items(&items, true)), vec!["a", "b"]);
    }
}
