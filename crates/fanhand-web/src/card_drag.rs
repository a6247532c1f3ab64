#![forbid(unsafe_code)]

//! Card dragging and flick-to-use.
//!
//! A card follows the pointer freely on both axes in a lifted visual state.
//! On release the total vertical travel decides whether the item is used;
//! either way the card goes back to the hand and the fan is re-laid out.
//! A card is never removed from the hand by the gesture itself.

use fanhand_core::event::RawInput;
use fanhand_core::geometry::{Delta, Point};
use fanhand_core::gesture::{CardRelease, classify_card_release};
use fanhand_layout::FanSlot;

use crate::pointer_drag::{
    DragCallbacks, DragDispatch, DragTarget, OriginSnapshot, PointerDragController,
};

/// Scale applied to a lifted card.
pub const LIFT_SCALE: f64 = 1.1;
/// Stacking order of a lifted card, above every fan slot.
pub const LIFT_Z_INDEX: u32 = 9999;

/// Visual state of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardVisual {
    /// Owned by the fan layout.
    Resting,
    /// Owned by a drag session: free translation, no rotation, scaled up.
    Lifted { offset: Delta },
}

/// Result of feeding one input to a [`CardDragBehavior`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardDragUpdate {
    pub dispatch: DragDispatch,
    /// Set when the session ended with this input.
    pub release: Option<CardRelease>,
}

impl CardDragUpdate {
    /// The item should be used.
    #[must_use]
    pub fn activated(&self) -> bool {
        self.release.is_some_and(|release| release.activate)
    }

    /// The card returned to the hand; the fan must be re-laid out.
    #[must_use]
    pub fn settled(&self) -> bool {
        self.release.is_some_and(|release| release.settle)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CardTrack {
    pre_drag_slot: Option<FanSlot>,
    offset: Option<Delta>,
    release: Option<CardRelease>,
}

impl DragCallbacks for CardTrack {
    fn on_start(&mut self, _point: Point, origin: &OriginSnapshot) {
        self.pre_drag_slot = match *origin {
            OriginSnapshot::CardSlot(slot) => slot,
            OriginSnapshot::PanelLeft(_) => None,
        };
        self.offset = Some(Delta::ZERO);
    }

    fn on_move(&mut self, _point: Point, delta: Delta) {
        self.offset = Some(delta);
    }

    fn on_end(&mut self, _point: Point, delta: Delta) {
        self.offset = None;
        self.release = Some(classify_card_release(delta));
    }

    fn on_cancel(&mut self, _delta: Delta) {
        self.offset = None;
        self.release = Some(CardRelease::CANCELLED);
    }
}

/// Drag behavior for one visible card.
#[derive(Debug, Clone)]
pub struct CardDragBehavior {
    card_id: String,
    controller: PointerDragController,
    track: CardTrack,
}

impl CardDragBehavior {
    #[must_use]
    pub fn new(card_id: impl Into<String>) -> Self {
        let card_id = card_id.into();
        Self {
            controller: PointerDragController::new(DragTarget::Card(card_id.clone())),
            card_id,
            track: CardTrack::default(),
        }
    }

    #[must_use]
    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.controller.is_active()
    }

    /// Underlying pointer controller.
    #[must_use]
    pub const fn controller(&self) -> &PointerDragController {
        &self.controller
    }

    /// Fan slot captured when the current (or last) session started.
    #[must_use]
    pub const fn pre_drag_slot(&self) -> Option<FanSlot> {
        self.track.pre_drag_slot
    }

    /// Current visual state.
    #[must_use]
    pub fn visual(&self) -> CardVisual {
        match self.track.offset {
            Some(offset) if self.controller.is_active() => CardVisual::Lifted { offset },
            _ => CardVisual::Resting,
        }
    }

    /// Feed one pointer input. `resting_slot` is the slot the card currently
    /// occupies; it is snapshotted on press.
    pub fn handle(&mut self, input: &RawInput, resting_slot: Option<FanSlot>) -> CardDragUpdate {
        let dispatch = self
            .controller
            .handle(input, OriginSnapshot::CardSlot(resting_slot));
        self.apply(dispatch)
    }

    /// Interrupt the active session: the card settles without activating.
    pub fn cancel(&mut self) -> CardDragUpdate {
        let dispatch = self.controller.cancel();
        self.apply(dispatch)
    }

    fn apply(&mut self, dispatch: DragDispatch) -> CardDragUpdate {
        if let Some(event) = &dispatch.event {
            event.deliver(&mut self.track);
        }
        CardDragUpdate {
            release: self.track.release.take(),
            dispatch,
        }
    }
}
