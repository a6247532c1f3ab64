#![forbid(unsafe_code)]

//! Weapon damage text. Formatting only; nothing here rolls dice.

use std::collections::BTreeMap;

use fanhand_templates::humanize_key;
use serde_json::Value;

use crate::host::DamagePart;

/// Formula of one damage part: the custom formula when present, else
/// `<multiplier><dice>[ ± bonus]`. A variable multiplier is resolved from
/// `roll_data` before the dice are appended.
#[must_use]
pub fn part_formula(part: &DamagePart, roll_data: &Value) -> String {
    if let Some(custom) = part.custom_formula.as_deref() {
        return substitute_roll_data(custom, roll_data);
    }
    let multiplier = match part.multiplier.as_deref() {
        Some("flat") | None => part.flat_multiplier.unwrap_or(1).to_string(),
        Some(variable) => lookup(roll_data, variable).unwrap_or_else(|| format!("@{variable}")),
    };
    let bonus = match part.bonus {
        0 => String::new(),
        b if b < 0 => format!(" - {}", b.unsigned_abs()),
        b => format!(" + {b}"),
    };
    format!("{multiplier}{}{bonus}", part.dice)
}

/// All parts joined with ` + `.
#[must_use]
pub fn damage_formula(parts: &[DamagePart], roll_data: &Value) -> String {
    parts
        .iter()
        .map(|part| part_formula(part, roll_data))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Replace `@path.to.value` references with scalars from `roll_data`.
/// Unresolvable references are kept verbatim.
#[must_use]
pub fn substitute_roll_data(formula: &str, roll_data: &Value) -> String {
    let mut out = String::with_capacity(formula.len());
    let mut rest = formula;
    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        let path_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(after.len());
        let path = after[..path_len].trim_end_matches('.');
        match lookup(roll_data, path) {
            Some(value) if !path.is_empty() => {
                out.push_str(&value);
                rest = &after[path.len()..];
            }
            _ => {
                out.push('@');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn lookup(data: &Value, path: &str) -> Option<String> {
    let mut node = data;
    for key in path.split('.') {
        node = node.get(key)?;
    }
    match node {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Unique damage-type labels in first-seen order, joined with ` / `.
/// Types without a label are skipped.
#[must_use]
pub fn damage_labels(parts: &[DamagePart], labels: &BTreeMap<String, String>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for part in parts {
        for kind in &part.types {
            if !seen.contains(&kind.as_str()) {
                seen.push(kind);
            }
        }
    }
    seen.into_iter()
        .filter_map(|kind| labels.get(kind).map(String::as_str))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Localized range, falling back to the humanized key.
#[must_use]
pub fn range_text(range: Option<&str>, labels: &BTreeMap<String, String>) -> String {
    match range {
        Some(key) if !key.is_empty() => labels
            .get(key)
            .cloned()
            .unwrap_or_else(|| humanize_key(key)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn part(multiplier: &str, dice: &str, bonus: i64) -> DamagePart {
        DamagePart {
            multiplier: Some(multiplier.into()),
            dice: dice.into(),
            bonus,
            types: vec!["physical".into()],
            ..DamagePart::default()
        }
    }

    #[test]
    fn flat_multiplier_with_bonus() {
        let mut p = part("flat", "d8", 3);
        p.flat_multiplier = Some(2);
        assert_eq!(part_formula(&p, &Value::Null), "2d8 + 3");
        assert_eq!(part_formula(&part("flat", "d6", -1), &Value::Null), "1d6 - 1");
    }

    #[test]
    fn variable_multiplier_resolves_from_roll_data() {
        let formula = damage_formula(&[part("prof", "d10", 0)], &json!({ "prof": 2 }));
        assert_eq!(formula, "2d10");
        assert_eq!(damage_formula(&[part("prof", "d10", 1)], &json!({})), "@profd10 + 1");
    }

    #[test]
    fn nested_and_missing_variables() {
        let data = json!({ "traits": { "strength": { "value": 3 } } });
        assert_eq!(
            substitute_roll_data("1d6 + @traits.strength.value", &data),
            "1d6 + 3"
        );
        assert_eq!(substitute_roll_data("@missing d4", &data), "@missing d4");
        assert_eq!(substitute_roll_data("mail@", &data), "mail@");
    }

    #[test]
    fn custom_formula_wins_and_parts_join() {
        let custom = DamagePart {
            custom_formula: Some("@level".into()),
            ..DamagePart::default()
        };
        let formula = damage_formula(&[part("flat", "d8", 0), custom], &json!({ "level": 4 }));
        assert_eq!(formula, "1d8 + 4");
    }

    #[test]
    fn labels_are_unique_and_known() {
        let mut magic = part("flat", "d4", 0);
        magic.types = vec!["magical".into(), "physical".into(), "psychic".into()];
        let labels: BTreeMap<String, String> = [
            ("physical".to_owned(), "Physical".to_owned()),
            ("magical".to_owned(), "Magical".to_owned()),
        ]
        .into();
        assert_eq!(
            damage_labels(&[part("flat", "d8", 0), magic], &labels),
            "Physical / Magical"
        );
    }

    #[test]
    fn range_falls_back_to_humanized_key() {
        let labels = BTreeMap::new();
        assert_eq!(range_text(Some("veryFar"), &labels), "Very Far");
        assert_eq!(range_text(None, &labels), "");
    }
}
