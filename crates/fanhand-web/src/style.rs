#![forbid(unsafe_code)]

//! Declarative inline styles.
//!
//! Behaviors and the layout engine produce plain values; this module turns
//! them into [`ElementStyle`] records the host writes onto elements. A `None`
//! property means "leave untouched".

use std::fmt::Write as _;

use fanhand_layout::FanSlot;

use crate::card_drag::{CardVisual, LIFT_SCALE, LIFT_Z_INDEX};
use crate::panel_drag::PanelVisual;

/// Subset of inline CSS properties the overlay drives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementStyle {
    pub left: Option<String>,
    pub bottom: Option<String>,
    pub margin_left: Option<String>,
    pub transform: Option<String>,
    pub transform_origin: Option<String>,
    pub width: Option<String>,
    pub z_index: Option<String>,
}

impl ElementStyle {
    /// Set `bottom` in pixels.
    #[must_use]
    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(px(bottom));
        self
    }

    /// Property/value pairs in a fixed order, skipping unset properties.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        [
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("margin-left", &self.margin_left),
            ("transform", &self.transform),
            ("transform-origin", &self.transform_origin),
            ("width", &self.width),
            ("z-index", &self.z_index),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
        .collect()
    }

    /// Render as a `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.declarations() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{name}: {value};");
        }
        out
    }
}

/// Format a CSS number: integral values without a fraction, `-0` as `0`.
#[must_use]
pub fn css_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.4}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}

/// Style for a card resting in its fan slot.
#[must_use]
pub fn fan_slot_style(slot: &FanSlot) -> ElementStyle {
    let transform = if slot.is_flat() {
        "none".to_owned()
    } else {
        format!(
            "rotate({}deg) translateY({})",
            css_number(slot.rotation_deg),
            px(slot.lift_px)
        )
    };
    ElementStyle {
        bottom: Some("0px".to_owned()),
        margin_left: Some(px(if slot.index == 0 { 0.0 } else { slot.margin_left })),
        transform: Some(transform),
        z_index: Some(slot.z_index.to_string()),
        ..ElementStyle::default()
    }
}

/// Style for a card given its drag state.
///
/// A resting card with a known slot gets its fan placement; without one the
/// drag transform is simply cleared. A lifted card overrides rotation and
/// stacking.
#[must_use]
pub fn card_style(visual: &CardVisual, slot: Option<&FanSlot>) -> ElementStyle {
    match (visual, slot) {
        (CardVisual::Lifted { offset }, _) => ElementStyle {
            transform: Some(format!(
                "translate3d({}, {}, 0) rotate(0deg) scale({})",
                px(offset.dx),
                px(offset.dy),
                css_number(LIFT_SCALE)
            )),
            z_index: Some(LIFT_Z_INDEX.to_string()),
            ..ElementStyle::default()
        },
        (CardVisual::Resting, Some(slot)) => fan_slot_style(slot),
        (CardVisual::Resting, None) => ElementStyle {
            transform: Some(String::new()),
            z_index: Some(String::new()),
            ..ElementStyle::default()
        },
    }
}

/// Style for the panel root.
#[must_use]
pub fn panel_style(visual: &PanelVisual) -> ElementStyle {
    match *visual {
        PanelVisual::Anchored { left } => ElementStyle {
            left: Some(px(left)),
            transform: Some("translateX(-50%)".to_owned()),
            ..ElementStyle::default()
        },
        PanelVisual::Dragging { left, offset_x } => ElementStyle {
            left: Some(px(left)),
            transform: Some(format!(
                "translate3d(calc(-50% + {}), 0, 0)",
                px(offset_x)
            )),
            ..ElementStyle::default()
        },
    }
}

/// Style for the panel's inner wrapper: UI scale anchored at the bottom
/// edge and a width never below `min_width`.
#[must_use]
pub fn wrapper_style(scale: f64, width: f64, min_width: f64) -> ElementStyle {
    ElementStyle {
        transform: Some(format!("scale({})", css_number(scale))),
        transform_origin: Some("bottom center".to_owned()),
        width: Some(px(width.max(min_width))),
        ..ElementStyle::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanhand_core::geometry::Delta;
    use fanhand_layout::fan_layout;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_drop_fraction_and_negative_zero() {
        assert_eq!(css_number(10.0), "10");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(-2.5), "-2.5");
        assert_eq!(css_number(1.0 / 3.0), "0.3333");
        assert_eq!(css_number(f64::NAN), "0");
    }

    #[test]
    fn worked_example_slot_styles() {
        let slots = fan_layout(5, 800.0, 10.0);
        let first = fan_slot_style(&slots[0]);
        assert_eq!(first.margin_left.as_deref(), Some("0px"));
        assert_eq!(first.transform.as_deref(), Some("rotate(-8deg) translateY(10px)"));
        assert_eq!(first.z_index.as_deref(), Some("1"));

        let center = fan_slot_style(&slots[2]);
        assert_eq!(center.margin_left.as_deref(), Some("-10px"));
        assert_eq!(center.transform.as_deref(), Some("none"));
        assert_eq!(center.bottom.as_deref(), Some("0px"));
    }

    #[test]
    fn flat_layout_has_no_transform() {
        for slot in fan_layout(4, 800.0, 0.0) {
            assert_eq!(fan_slot_style(&slot).transform.as_deref(), Some("none"));
        }
    }

    #[test]
    fn lifted_card_style() {
        let style = card_style(
            &CardVisual::Lifted {
                offset: Delta::new(12.0, -40.0),
            },
            None,
        );
        assert_eq!(
            style.transform.as_deref(),
            Some("translate3d(12px, -40px, 0) rotate(0deg) scale(1.1)")
        );
        assert_eq!(style.z_index.as_deref(), Some("9999"));
    }

    #[test]
    fn panel_styles() {
        assert_eq!(
            panel_style(&PanelVisual::Anchored { left: 520.0 }).to_css(),
            "left: 520px; transform: translateX(-50%);"
        );
        assert_eq!(
            panel_style(&PanelVisual::Dragging {
                left: 400.0,
                offset_x: -30.0,
            })
            .transform
            .as_deref(),
            Some("translate3d(calc(-50% + -30px), 0, 0)")
        );
    }

    #[test]
    fn wrapper_width_has_floor() {
        let style = wrapper_style(1.5, 450.0, 600.0);
        assert_eq!(
            style.to_css(),
            "transform: scale(1.5); transform-origin: bottom center; width: 600px;"
        );
    }

    #[test]
    fn bottom_is_appended_in_order() {
        let css = panel_style(&PanelVisual::Anchored { left: 10.0 })
            .with_bottom(0.0)
            .to_css();
        assert_eq!(css, "left: 10px; bottom: 0px; transform: translateX(-50%);");
    }
}
