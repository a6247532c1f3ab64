#![forbid(unsafe_code)]

//! Runtime for the fanhand overlay.
//!
//! # Role in fanhand
//! `fanhand-runtime` ties the pure pieces together. [`HandController`] reads
//! the controlled actor through host collaborators, keeps the playable items
//! ([`filter`]), projects them into card view models ([`view_model`]),
//! renders them with the active template, lays them out in a fan and routes
//! pointer input to the panel and card drag behaviors.
//!
//! # Host integration
//! The host implements [`ActorProvider`], [`ItemActions`] and
//! [`PositionStore`], forwards its hooks as [`HostEvent`]s and applies the
//! styles and markup found in [`HandFrame`]. Time is host-supplied, so the
//! 50 ms refresh debounce runs the same under a deterministic clock.
//!
//! # Logging
//! Everything is reported through `tracing` under the `fanhand.hand` target.
//! Enable the `drag-trace` feature to also get per-dispatch pointer traces
//! (`fanhand.drag`).

pub mod config;
pub mod controller;
pub mod damage;
pub mod error;
pub mod event;
pub mod filter;
pub mod host;
pub mod view_model;

pub use config::{HandConfig, HandConfigError, HandLabels};
pub use controller::{
    CardFrame, CardPointerResult, FrameContent, HandCard, HandController, HandFrame, Inspection,
    MIN_PANEL_WIDTH, PanelContent, PanelPointerResult, UseOutcome,
};
pub use error::{HandError, HostError};
pub use event::{EventReaction, HostEvent};
pub use host::{
    ActorProvider, ActorSnapshot, DamagePart, FilePositionStore, HostItem, ItemActions,
    MemoryPositionStore, PanelPosition, PositionStore,
};
