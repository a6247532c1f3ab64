#![no_main]

use fanhand_layout::{MAX_OVERLAP, MIN_OVERLAP, fan_layout};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, f64, i16)| {
    let (count, width, angle) = input;
    let count = usize::from(count);
    let angle = f64::from(angle);
    let slots = fan_layout(count, width, angle);

    assert_eq!(slots.len(), count);
    assert_eq!(slots, fan_layout(count, width, angle), "layout not deterministic");
    for (i, slot) in slots.iter().enumerate() {
        assert_eq!(slot.index, i);
        assert_eq!(slot.z_index as usize, i + 1);
        assert!((MIN_OVERLAP..=MAX_OVERLAP).contains(&slot.margin_left));
        assert!(slot.rotation_deg.is_finite());
        assert!(slot.lift_px.is_finite() && slot.lift_px >= 0.0);
    }
});
