#![forbid(unsafe_code)]

//! Horizontal panel dragging.
//!
//! The panel follows the pointer along the x axis only. While a session is
//! active the offset is applied as a temporary transform on top of the
//! committed anchor; on release the offset is folded into a new absolute
//! anchor and reported as a commit so the caller can persist it.

use fanhand_core::event::RawInput;
use fanhand_core::geometry::{Delta, Point};
use fanhand_core::gesture::panel_final_left;

use crate::pointer_drag::{
    DragCallbacks, DragDispatch, DragTarget, OriginSnapshot, PointerDragController,
};

/// Visual state of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelVisual {
    /// At rest on its committed anchor.
    Anchored { left: f64 },
    /// Mid-drag: anchor plus a temporary horizontal offset.
    Dragging { left: f64, offset_x: f64 },
}

/// Result of feeding one input to a [`PanelDragBehavior`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelDragUpdate {
    pub dispatch: DragDispatch,
    /// New anchor to persist, set on release only.
    pub commit: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct PanelTrack {
    anchor_left: f64,
    left_at_start: f64,
    offset_x: f64,
    commit: Option<f64>,
}

impl DragCallbacks for PanelTrack {
    fn on_start(&mut self, _point: Point, origin: &OriginSnapshot) {
        self.left_at_start = match *origin {
            OriginSnapshot::PanelLeft(left) => left,
            OriginSnapshot::CardSlot(_) => self.anchor_left,
        };
        self.offset_x = 0.0;
    }

    fn on_move(&mut self, _point: Point, delta: Delta) {
        self.offset_x = delta.horizontal().dx;
    }

    fn on_end(&mut self, _point: Point, delta: Delta) {
        let final_left = panel_final_left(self.left_at_start, delta);
        self.anchor_left = final_left;
        self.offset_x = 0.0;
        self.commit = Some(final_left);
    }

    fn on_cancel(&mut self, _delta: Delta) {
        self.offset_x = 0.0;
    }
}

/// Drag behavior for the hand panel.
#[derive(Debug, Clone)]
pub struct PanelDragBehavior {
    controller: PointerDragController,
    track: PanelTrack,
}

impl PanelDragBehavior {
    /// Create a behavior anchored at `initial_left` pixels.
    #[must_use]
    pub fn new(initial_left: f64) -> Self {
        Self {
            controller: PointerDragController::new(DragTarget::Panel),
            track: PanelTrack {
                anchor_left: initial_left,
                left_at_start: initial_left,
                offset_x: 0.0,
                commit: None,
            },
        }
    }

    /// Committed anchor.
    #[must_use]
    pub const fn anchor_left(&self) -> f64 {
        self.track.anchor_left
    }

    /// Re-seed the anchor, e.g. from a restored persisted position.
    ///
    /// An in-flight session keeps the anchor it started from.
    pub fn update_position(&mut self, left: f64) {
        self.track.anchor_left = left;
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

    /// Current visual state.
    #[must_use]
    pub fn visual(&self) -> PanelVisual {
        if self.controller.is_active() {
            PanelVisual::Dragging {
                left: self.track.left_at_start,
                offset_x: self.track.offset_x,
            }
        } else {
            PanelVisual::Anchored {
                left: self.track.anchor_left,
            }
        }
    }

    /// Feed one pointer input.
    pub fn handle(&mut self, input: &RawInput) -> PanelDragUpdate {
        let origin = OriginSnapshot::PanelLeft(self.track.anchor_left);
        let dispatch = self.controller.handle(input, origin);
        self.apply(dispatch)
    }

    /// Interrupt the active session, keeping the pre-drag anchor.
    pub fn cancel(&mut self) -> PanelDragUpdate {
        let dispatch = self.controller.cancel();
        self.apply(dispatch)
    }

    fn apply(&mut self, dispatch: DragDispatch) -> PanelDragUpdate {
        if let Some(event) = &dispatch.event {
            event.deliver(&mut self.track);
        }
        PanelDragUpdate {
            commit: self.track.commit.take(),
            dispatch,
        }
    }
}
