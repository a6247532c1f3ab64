#![forbid(unsafe_code)]

//! fanhand public facade.
//!
//! A fanned hand-of-cards overlay for virtual tabletops: pointer drag
//! gestures, a pure fan layout, pluggable card templates and a host-driven
//! hand controller. This crate re-exports the stable surface of the internal
//! crates and offers a prelude.
//!
//! ```
//! use fanhand::prelude::*;
//!
//! let slots = fan_layout(5, 800.0, 10.0);
//! assert_eq!(slots[2].rotation_deg, 0.0);
//! assert_eq!(slots[0].rotation_deg, -8.0);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use fanhand_core::{
    DeterministicClock, InputPhase, InputSource, MonotonicClock, MouseButton, RawInput,
    WallClock,
};

// --- Layout re-exports -----------------------------------------------------

pub use fanhand_layout::{FanRequest, FanSlot, fan_layout, fan_layout_excluding};

// --- Template re-exports ---------------------------------------------------

pub use fanhand_templates::{
    CardTemplate, CardViewModel, DEFAULT_TEMPLATE_ID, DefaultTemplate, ImprovedTemplate,
    TemplateError, TemplateRegistry,
};

// --- Gesture re-exports ----------------------------------------------------

pub use fanhand_web::{
    CardDragBehavior, DragDispatch, ElementStyle, HostCommand, PanelDragBehavior,
    PointerDragController,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use fanhand_runtime::{
    ActorProvider, ActorSnapshot, EventReaction, FilePositionStore, HandConfig, HandConfigError,
    HandController, HandError, HandFrame, HostError, HostEvent, HostItem, ItemActions,
    MemoryPositionStore, PanelPosition, PositionStore, UseOutcome,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for fanhand hosts.
#[derive(Debug)]
pub enum Error {
    /// Template registration or lookup failed.
    Template(TemplateError),
    /// The hand controller could not render.
    #[cfg(feature = "runtime")]
    Hand(HandError),
    /// A host collaborator failed.
    #[cfg(feature = "runtime")]
    Host(HostError),
    /// Configuration could not be loaded or validated.
    #[cfg(feature = "runtime")]
    Config(HandConfigError),
    /// A global tracing subscriber was already installed.
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => write!(f, "{e}"),
            #[cfg(feature = "runtime")]
            Self::Hand(e) => write!(f, "{e}"),
            #[cfg(feature = "runtime")]
            Self::Host(e) => write!(f, "{e}"),
            #[cfg(feature = "runtime")]
            Self::Config(e) => write!(f, "{e}"),
            Self::Logging(msg) => write!(f, "logging setup failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template(e) => Some(e),
            #[cfg(feature = "runtime")]
            Self::Hand(e) => Some(e),
            #[cfg(feature = "runtime")]
            Self::Host(e) => Some(e),
            #[cfg(feature = "runtime")]
            Self::Config(e) => Some(e),
            Self::Logging(_) => None,
        }
    }
}

impl From<TemplateError> for Error {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}

#[cfg(feature = "runtime")]
impl From<HandError> for Error {
    fn from(e: HandError) -> Self {
        Self::Hand(e)
    }
}

#[cfg(feature = "runtime")]
impl From<HostError> for Error {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

#[cfg(feature = "runtime")]
impl From<HandConfigError> for Error {
    fn from(e: HandConfigError) -> Self {
        Self::Config(e)
    }
}

/// Standard result type for fanhand APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Logging --------------------------------------------------------------

/// Install a global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, else `default_directives`
/// (e.g. `"fanhand.hand=debug,warn"`). With the `subscriber-json` feature the
/// output is one JSON object per line.
///
/// # Errors
///
/// Returns [`Error::Logging`] when a global subscriber is already set or the
/// directives do not parse.
#[cfg(feature = "subscriber")]
pub fn install_subscriber(default_directives: &str) -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives)
            .map_err(|e| Error::Logging(e.to_string()))?,
    };

    #[cfg(feature = "subscriber-json")]
    let output = tracing_subscriber::fmt::layer().json().with_target(true);
    #[cfg(not(feature = "subscriber-json"))]
    let output = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;
    tracing::debug!(target: "fanhand", directives = default_directives, "subscriber installed");
    Ok(())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CardTemplate, CardViewModel, ElementStyle, Error, FanSlot, RawInput, Result,
        TemplateRegistry, fan_layout,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{
        ActorProvider, ActorSnapshot, HandConfig, HandController, HostEvent, HostItem,
        ItemActions, PositionStore,
    };

    pub use crate::{core, layout, templates, web};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use fanhand_core as core;
pub use fanhand_layout as layout;
#[cfg(feature = "runtime")]
pub use fanhand_runtime as runtime;
pub use fanhand_templates as templates;
pub use fanhand_web as web;
