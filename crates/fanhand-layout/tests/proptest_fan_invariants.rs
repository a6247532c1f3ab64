//! Property-based invariant tests for the fan layout.
//!
//! 1. One slot per card, indexed in order, z-order = index + 1
//! 2. Margins clamped to [MIN_OVERLAP, MAX_OVERLAP], first margin zero
//! 3. Zero arc angle produces a flat fan
//! 4. Rotations are antisymmetric around the center card
//! 5. Determinism: identical inputs yield identical slots

use fanhand_layout::{FanSlot, MAX_OVERLAP, MIN_OVERLAP, fan_layout, fan_layout_excluding};
use proptest::prelude::*;

fn count_strategy() -> impl Strategy<Value = usize> {
    0usize..64
}

fn width_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-500.0f64..4000.0, Just(600.0), Just(2000.0)]
}

fn angle_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..=45.0, Just(0.0)]
}

proptest! {
    #[test]
    fn slot_count_index_and_z_order(
        count in count_strategy(),
        width in width_strategy(),
        angle in angle_strategy(),
    ) {
        let slots = fan_layout(count, width, angle);
        prop_assert_eq!(slots.len(), count);
        for (i, slot) in slots.iter().enumerate() {
            prop_assert_eq!(slot.index, i);
            prop_assert_eq!(slot.z_index as usize, i + 1);
        }
    }

    #[test]
    fn margins_are_clamped(
        count in count_strategy(),
        width in width_strategy(),
        angle in angle_strategy(),
    ) {
        let slots = fan_layout(count, width, angle);
        if let Some(first) = slots.first() {
            prop_assert_eq!(first.margin_left, 0.0);
        }
        for slot in slots.iter().skip(1) {
            prop_assert!(
                (MIN_OVERLAP..=MAX_OVERLAP).contains(&slot.margin_left),
                "margin {} out of range (count={}, width={})", slot.margin_left, count, width
            );
        }
    }

    #[test]
    fn zero_angle_is_flat(count in count_strategy(), width in width_strategy()) {
        prop_assert!(fan_layout(count, width, 0.0).iter().all(FanSlot::is_flat));
    }

    #[test]
    fn rotation_is_antisymmetric(
        count in 1usize..64,
        width in width_strategy(),
        angle in angle_strategy(),
    ) {
        let slots = fan_layout(count, width, angle);
        for i in 0..count {
            let mirror = count - 1 - i;
            prop_assert!((slots[i].rotation_deg + slots[mirror].rotation_deg).abs() < 1e-9);
            prop_assert!((slots[i].lift_px - slots[mirror].lift_px).abs() < 1e-9);
            prop_assert!(slots[i].lift_px >= 0.0);
        }
    }

    #[test]
    fn layout_is_deterministic(
        count in count_strategy(),
        width in width_strategy(),
        angle in angle_strategy(),
    ) {
        prop_assert_eq!(fan_layout(count, width, angle), fan_layout(count, width, angle));
    }

    #[test]
    fn exclusion_only_removes_slots(
        count in count_strategy(),
        width in width_strategy(),
        angle in angle_strategy(),
        skip in 0usize..64,
    ) {
        let full = fan_layout(count, width, angle);
        let partial = fan_layout_excluding(count, width, angle, |i| i == skip);
        let expected: Vec<FanSlot> = full.into_iter().filter(|s| s.index != skip).collect();
        prop_assert_eq!(partial, expected);
    }
}
