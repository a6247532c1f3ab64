#![forbid(unsafe_code)]

//! `fanhand-web` turns browser pointer lifecycles into drag sessions for the
//! hand panel and its cards.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes normalized
//!   [`RawInput`](fanhand_core::event::RawInput) values and applies the
//!   returned [`HostCommand`]s and [`ElementStyle`]s.
//! - **Deterministic**: no timers, no DOM handles, no globals. Every decision
//!   is visible in the returned dispatch and its log entry.
//! - **Compute then apply**: behaviors expose visual state values; turning
//!   them into inline styles happens in [`style`].

pub mod card_drag;
pub mod panel_drag;
pub mod pointer_drag;
pub mod style;

pub use card_drag::{CardDragBehavior, CardDragUpdate, CardVisual, LIFT_SCALE, LIFT_Z_INDEX};
pub use panel_drag::{PanelDragBehavior, PanelDragUpdate, PanelVisual};
pub use pointer_drag::{
    DocumentListener, DragCallbacks, DragDispatch, DragEvent, DragIgnoredReason, DragLogEntry,
    DragLogOutcome, DragSession, DragTarget, HostCommand, OriginSnapshot, PointerDragController,
};
pub use style::{ElementStyle, card_style, css_number, fan_slot_style, panel_style, wrapper_style};
