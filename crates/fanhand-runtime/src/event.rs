#![forbid(unsafe_code)]

//! Host notifications the controller reacts to.

use crate::controller::UseOutcome;

/// A host lifecycle or data-change notification.
///
/// The embedding environment translates its own hooks into these values and
/// hands them to [`HandController::handle_host_event`](crate::HandController::handle_host_event).
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Token control or selection changed.
    ControlChanged,
    /// An actor document was updated.
    ActorUpdated { actor_id: String },
    /// An item was created, updated or deleted. `parent_actor_id` is `None`
    /// for world items.
    ItemChanged { parent_actor_id: Option<String> },
    /// An item was dropped on the canvas.
    ItemDropped {
        actor_id: Option<String>,
        item_id: String,
    },
    /// The viewport was resized.
    ViewportResized { width: f64 },
    /// The window lost focus; in-flight gestures are abandoned.
    Blur,
}

/// What the controller did with a [`HostEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventReaction {
    /// Not relevant to the current hand.
    Ignored,
    /// The hand was rebuilt immediately.
    Refreshed,
    /// A debounced refresh was scheduled; drive it with
    /// [`tick`](crate::HandController::tick).
    RefreshScheduled,
    /// A dropped item was used.
    ItemUsed(UseOutcome),
    /// The panel anchor was re-seeded from the viewport.
    Repositioned,
    /// Active gestures were cancelled; fetch their cleanup with
    /// [`take_host_commands`](crate::HandController::take_host_commands).
    GesturesCancelled,
}

impl EventReaction {
    /// Whether the event changed anything.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
