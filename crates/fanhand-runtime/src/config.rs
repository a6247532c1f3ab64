#![forbid(unsafe_code)]

//! Hand configuration.
//!
//! A [`HandConfig`] can be built in code, deserialized from any serde format,
//! or loaded from TOML/JSON with the `config-files` feature:
//!
//! ```toml
//! enabled = true
//! template = "improved"
//! arc_angle = 12.0
//! equipped_only = true
//! scale = 1.2
//! width_px = 900.0
//!
//! [labels]
//! no_items = "Nothing to play"
//! ```
//!
//! Values outside their documented ranges are reported by
//! [`HandConfig::validate`] and clamped by [`HandConfig::sanitized`].

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
#[cfg(feature = "config-files")]
use std::path::Path;

use fanhand_templates::DEFAULT_TEMPLATE_ID;
use serde::{Deserialize, Serialize};

/// Allowed arc angle, degrees.
pub const ARC_ANGLE_RANGE: RangeInclusive<f64> = 0.0..=45.0;
/// Allowed UI scale.
pub const SCALE_RANGE: RangeInclusive<f64> = 0.5..=2.0;
/// Allowed panel width, pixels.
pub const WIDTH_RANGE: RangeInclusive<f64> = 600.0..=2000.0;

/// Runtime options of the hand overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandConfig {
    /// Show the overlay at all.
    pub enabled: bool,
    /// Active template id; unknown ids fall back to the default template.
    pub template: String,
    /// Maximum fan rotation in degrees.
    pub arc_angle: f64,
    /// Hide unequipped items and vaulted domain cards.
    pub equipped_only: bool,
    /// UI scale of the panel wrapper.
    pub scale: f64,
    /// Panel width in pixels.
    pub width_px: f64,
    /// Distance of the panel from the bottom edge, pixels.
    pub bottom_px: f64,
    /// User-visible strings.
    pub labels: HandLabels,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            template: DEFAULT_TEMPLATE_ID.to_owned(),
            arc_angle: 10.0,
            equipped_only: true,
            scale: 1.0,
            width_px: 800.0,
            bottom_px: 0.0,
            labels: HandLabels::default(),
        }
    }
}

impl HandConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config-files")]
    pub fn from_toml_str(s: &str) -> Result<Self, HandConfigError> {
        toml::from_str(s).map_err(HandConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, HandConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(HandConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-files")]
    pub fn from_json_str(s: &str) -> Result<Self, HandConfigError> {
        serde_json::from_str(s).map_err(HandConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, HandConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(HandConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check every value against its documented range.
    ///
    /// Returns a list of problems; an empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_range(&mut errors, "arc_angle", self.arc_angle, &ARC_ANGLE_RANGE);
        check_range(&mut errors, "scale", self.scale, &SCALE_RANGE);
        check_range(&mut errors, "width_px", self.width_px, &WIDTH_RANGE);
        if !(self.bottom_px.is_finite() && self.bottom_px >= 0.0) {
            errors.push(format!("bottom_px must be >= 0, got {}", self.bottom_px));
        }
        if self.template.trim().is_empty() {
            errors.push("template must not be empty".into());
        }
        errors
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`HandConfigError::Validation`] listing every problem.
    pub fn validated(self) -> Result<Self, HandConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(HandConfigError::Validation(errors))
        }
    }

    /// A copy with every value forced into its range. Non-finite values take
    /// their default.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();
        config.arc_angle = clamp_or(self.arc_angle, &ARC_ANGLE_RANGE, defaults.arc_angle);
        config.scale = clamp_or(self.scale, &SCALE_RANGE, defaults.scale);
        config.width_px = clamp_or(self.width_px, &WIDTH_RANGE, defaults.width_px);
        config.bottom_px = if self.bottom_px.is_finite() {
            self.bottom_px.max(0.0)
        } else {
            defaults.bottom_px
        };
        if config.template.trim().is_empty() {
            config.template = defaults.template;
        }
        config
    }
}

fn check_range(errors: &mut Vec<String>, name: &str, value: f64, range: &RangeInclusive<f64>) {
    if !range.contains(&value) {
        errors.push(format!(
            "{name} must be in [{}, {}], got {value}",
            range.start(),
            range.end()
        ));
    }
}

fn clamp_or(value: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}

/// User-visible strings, English by default. Hosts with a localization layer
/// fill these from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandLabels {
    /// Tooltip of the drag plate.
    pub drag_title: String,
    /// Tooltip of the collapse toggle.
    pub toggle_title: String,
    /// Placeholder when no actor is available.
    pub no_actor: String,
    /// Placeholder when the actor has nothing to show.
    pub no_items: String,
    /// Preview title for items without a name.
    pub untitled_item: String,
    /// Item type tag → label.
    pub item_types: BTreeMap<String, String>,
    /// Damage type key → label. Types without a label are not shown.
    pub damage_types: BTreeMap<String, String>,
    /// Range key → label.
    pub ranges: BTreeMap<String, String>,
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, label)| ((*key).to_owned(), (*label).to_owned()))
        .collect()
}

impl Default for HandLabels {
    fn default() -> Self {
        Self {
            drag_title: "Drag to move the hand".into(),
            toggle_title: "Collapse or expand the hand".into(),
            no_actor: "No actor selected".into(),
            no_items: "No usable items".into(),
            untitled_item: "Item".into(),
            item_types: table(&[
                ("armor", "Armor"),
                ("consumable", "Consumable"),
                ("domainCard", "Domain Card"),
                ("feature", "Feature"),
                ("loot", "Loot"),
                ("weapon", "Weapon"),
            ]),
            damage_types: table(&[("magical", "Magical"), ("physical", "Physical")]),
            ranges: table(&[
                ("close", "Close"),
                ("far", "Far"),
                ("melee", "Melee"),
                ("veryClose", "Very Close"),
                ("veryFar", "Very Far"),
            ]),
        }
    }
}

/// Errors from loading or validating a [`HandConfig`].
#[derive(Debug)]
pub enum HandConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-files")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config-files")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl fmt::Display for HandConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for HandConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
