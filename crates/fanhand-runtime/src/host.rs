#![forbid(unsafe_code)]

//! Host collaborators.
//!
//! The controller never talks to the virtual tabletop directly. It reads
//! actor data through [`ActorProvider`], triggers item behavior through
//! [`ItemActions`] and persists the panel anchor through [`PositionStore`].
//! Snapshots are plain serde values so a JS host can hand them over as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// One part of a weapon's damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamagePart {
    /// Formula that replaces the computed one when set.
    pub custom_formula: Option<String>,
    /// `flat`, or the roll-data variable multiplying the dice (`prof`).
    pub multiplier: Option<String>,
    /// Multiplier used when `multiplier` is `flat`.
    pub flat_multiplier: Option<i64>,
    /// Die expression, e.g. `d8`.
    pub dice: String,
    /// Flat bonus; negative values subtract.
    pub bonus: i64,
    /// Damage type keys.
    pub types: Vec<String>,
}

impl Default for DamagePart {
    fn default() -> Self {
        Self {
            custom_formula: None,
            multiplier: Some("flat".into()),
            flat_multiplier: Some(1),
            dice: String::new(),
            bonus: 0,
            types: Vec::new(),
        }
    }
}

/// Item data the hand needs, captured at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostItem {
    pub id: String,
    pub name: String,
    /// Host type tag (`weapon`, `domainCard`, `class`, ...).
    pub item_type: String,
    pub image: Option<String>,
    pub description_html: String,
    /// Number of configured actions.
    pub action_count: usize,
    /// `None` when the item type has no equipped state.
    pub equipped: Option<bool>,
    /// Domain card stored in the vault.
    pub in_vault: bool,
    /// The host's own availability verdict.
    pub available: bool,
    pub domain: Option<String>,
    /// Domain-card subtype key (`ability`, `spell`, `grimoire`).
    pub domain_card_type: Option<String>,
    pub level: Option<u32>,
    pub recall_cost: Option<i64>,
    pub stress_cost: Option<i64>,
    pub damage_parts: Vec<DamagePart>,
    /// Range key (`melee`, `veryClose`, ...).
    pub range: Option<String>,
}

impl Default for HostItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            item_type: String::new(),
            image: None,
            description_html: String::new(),
            action_count: 0,
            equipped: None,
            in_vault: false,
            available: true,
            domain: None,
            domain_card_type: None,
            level: None,
            recall_cost: None,
            stress_cost: None,
            damage_parts: Vec::new(),
            range: None,
        }
    }
}

impl HostItem {
    #[must_use]
    pub fn has_actions(&self) -> bool {
        self.action_count > 0
    }

    #[must_use]
    pub fn is_weapon(&self) -> bool {
        self.item_type == "weapon"
    }

    #[must_use]
    pub fn is_domain_card(&self) -> bool {
        self.item_type == "domainCard"
    }

    /// Items that can be used directly; the rest can only be shown in chat.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.has_actions() || self.is_weapon()
    }
}

/// The actor whose hand is shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorSnapshot {
    pub id: String,
    pub name: String,
    /// Roll data used to resolve `@variables` in damage formulas.
    pub roll_data: serde_json::Value,
    pub items: Vec<HostItem>,
}

impl ActorSnapshot {
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&HostItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Read access to the controlled actor.
pub trait ActorProvider {
    /// The actor of the first controlled token, if any.
    fn current_actor(&self) -> Option<ActorSnapshot>;

    /// Whether the user controls a token at all. A token without an actor
    /// shows the "no actor" placeholder instead of hiding the panel.
    fn has_controlled_token(&self) -> bool {
        self.current_actor().is_some()
    }
}

/// Item behavior the host performs.
pub trait ItemActions {
    /// Roll or use the item.
    fn use_item(&mut self, actor_id: &str, item_id: &str) -> Result<(), HostError>;

    /// Post the item card to chat.
    fn post_to_chat(&mut self, actor_id: &str, item_id: &str) -> Result<(), HostError>;

    /// Open the item sheet.
    fn open_sheet(&mut self, actor_id: &str, item_id: &str) -> Result<(), HostError>;
}

/// Saved panel anchor, bottom-anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub left: f64,
}

/// Per-user storage of the panel anchor.
pub trait PositionStore {
    fn load_position(&self) -> Result<Option<PanelPosition>, HostError>;

    fn save_position(&mut self, position: PanelPosition) -> Result<(), HostError>;
}

/// Session-only store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPositionStore {
    position: Option<PanelPosition>,
}

impl MemoryPositionStore {
    #[must_use]
    pub const fn new(position: Option<PanelPosition>) -> Self {
        Self { position }
    }

    #[must_use]
    pub const fn position(&self) -> Option<PanelPosition> {
        self.position
    }
}

impl PositionStore for MemoryPositionStore {
    fn load_position(&self) -> Result<Option<PanelPosition>, HostError> {
        Ok(self.position)
    }

    fn save_position(&mut self, position: PanelPosition) -> Result<(), HostError> {
        self.position = Some(position);
        Ok(())
    }
}

/// Store backed by a JSON file holding `{ "left": <number> }`.
///
/// A missing file means "never saved".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePositionStore {
    path: PathBuf,
}

impl FilePositionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PositionStore for FilePositionStore {
    fn load_position(&self) -> Result<Option<PanelPosition>, HostError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_position(&mut self, position: PanelPosition) -> Result<(), HostError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(&position)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
