#![forbid(unsafe_code)]

//! Core: geometry, normalized pointer input, gesture classification and timing.
//!
//! # Role in fanhand
//! `fanhand-core` is the input layer. It owns the pointer-space geometry
//! types, the normalized [`event::RawInput`] stream that hosts feed from
//! browser mouse/touch events, the pure release classifiers used by the drag
//! behaviors, and the deterministic timing primitives used for debounced
//! refreshes.
//!
//! # How it fits in the system
//! `fanhand-web` builds the drag controllers on top of these types and
//! `fanhand-runtime` drives the [`debounce::Debouncer`] from host time. Nothing
//! in this crate touches a DOM or performs I/O.

pub mod clock;
pub mod debounce;
pub mod event;
pub mod geometry;
pub mod gesture;

pub use clock::{DeterministicClock, MonotonicClock, WallClock};
pub use debounce::{Debouncer, REFRESH_DEBOUNCE};
pub use event::{InputPhase, InputSource, MouseButton, RawInput};
pub use geometry::{Delta, Point};
pub use gesture::{CARD_ACTIVATE_DISTANCE_PX, CardRelease, GestureKind};
