#![forbid(unsafe_code)]

//! Deterministic single-pointer drag controller.
//!
//! This module bridges browser mouse/touch lifecycle signals into
//! [`DragEvent`] values while enforcing:
//! - one active session per controller (a second press is ignored, never
//!   queued),
//! - symmetric document-listener management: every listener added on press
//!   is removed on release or cancel, and removal is idempotent,
//! - silent recovery: stray moves and releases are recorded as ignored, never
//!   surfaced as errors.
//!
//! The controller never touches a DOM. Each call returns a [`DragDispatch`]
//! with the [`HostCommand`]s the embedding host must apply, in order.

use fanhand_core::event::{InputPhase, InputSource, RawInput};
use fanhand_core::geometry::{Delta, Point};
use fanhand_core::gesture::GestureKind;
use fanhand_layout::FanSlot;

/// What a drag session is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// The panel's background plate (drag handle).
    Panel,
    /// A card, by item id.
    Card(String),
}

impl DragTarget {
    /// Gesture kind implied by the target.
    #[must_use]
    pub const fn kind(&self) -> GestureKind {
        match self {
            Self::Panel => GestureKind::Panel,
            Self::Card(_) => GestureKind::Card,
        }
    }
}

/// Transform state captured when a session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginSnapshot {
    /// Absolute panel anchor (`left`, px).
    PanelLeft(f64),
    /// Fan slot the card rested in, if it had been laid out.
    CardSlot(Option<FanSlot>),
}

/// Transient state of an in-progress gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub start: Point,
    pub delta: Delta,
    pub target: DragTarget,
    pub kind: GestureKind,
    pub origin: OriginSnapshot,
}

impl DragSession {
    /// Latest known pointer position.
    #[must_use]
    pub fn current(&self) -> Point {
        self.start.offset(self.delta)
    }
}

/// Document-scope listeners a session needs so that drags continue when the
/// pointer leaves the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentListener {
    MouseMove,
    MouseUp,
    TouchMove,
    TouchEnd,
}

impl DocumentListener {
    /// Attach order. Detach uses the same order.
    pub const ALL: [Self; 4] = [Self::MouseMove, Self::MouseUp, Self::TouchMove, Self::TouchEnd];

    /// DOM event name.
    #[must_use]
    pub const fn dom_event(self) -> &'static str {
        match self {
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
        }
    }

    /// Whether the listener may be registered as passive. `touchmove` must
    /// not be, since it cancels page scrolling.
    #[must_use]
    pub const fn passive(self) -> bool {
        !matches!(self, Self::TouchMove)
    }
}

/// Host command emitted by drag controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    AddDocumentListener(DocumentListener),
    RemoveDocumentListener(DocumentListener),
    /// Global indicator: `cursor: grabbing` and the `dragging-active` body
    /// class while on; default cursor while off.
    SetDraggingIndicator(bool),
    /// The `dragging` class on the dragged element.
    SetElementDragging(bool),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ListenerSet {
    attached: bool,
}

impl ListenerSet {
    fn attach(&mut self, out: &mut Vec<HostCommand>) {
        if self.attached {
            return;
        }
        self.attached = true;
        out.extend(DocumentListener::ALL.map(HostCommand::AddDocumentListener));
    }

    fn detach(&mut self, out: &mut Vec<HostCommand>) {
        if !self.attached {
            return;
        }
        self.attached = false;
        out.extend(DocumentListener::ALL.map(HostCommand::RemoveDocumentListener));
    }
}

/// Normalized drag event forwarded to [`DragCallbacks`].
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Start { point: Point, origin: OriginSnapshot },
    Move { point: Point, delta: Delta },
    End { point: Point, delta: Delta },
    Cancel { delta: Delta },
}

impl DragEvent {
    /// Invoke the matching callback.
    pub fn deliver<C: DragCallbacks + ?Sized>(&self, callbacks: &mut C) {
        match *self {
            Self::Start { point, ref origin } => callbacks.on_start(point, origin),
            Self::Move { point, delta } => callbacks.on_move(point, delta),
            Self::End { point, delta } => callbacks.on_end(point, delta),
            Self::Cancel { delta } => callbacks.on_cancel(delta),
        }
    }
}

/// Receiver side of a [`PointerDragController`].
pub trait DragCallbacks {
    fn on_start(&mut self, point: Point, origin: &OriginSnapshot);
    fn on_move(&mut self, point: Point, delta: Delta);
    fn on_end(&mut self, point: Point, delta: Delta);
    /// Session interrupted (blur, `touchcancel`). Defaults to a no-op.
    fn on_cancel(&mut self, _delta: Delta) {}
}

/// Deterministic reason why an incoming input was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIgnoredReason {
    ButtonNotAllowed,
    MissingPoint,
    SessionAlreadyActive,
    NoActiveSession,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragLogOutcome {
    Forwarded,
    Ignored(DragIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DragLogEntry {
    pub phase: InputPhase,
    pub sequence: Option<u64>,
    pub target: DragTarget,
    pub point: Option<Point>,
    pub outcome: DragLogOutcome,
}

/// Result of one pointer dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DragDispatch {
    pub event: Option<DragEvent>,
    pub commands: Vec<HostCommand>,
    /// The host must call `preventDefault()` on the source event.
    pub prevent_default: bool,
    pub log: DragLogEntry,
}

impl DragDispatch {
    fn ignored(
        phase: InputPhase,
        reason: DragIgnoredReason,
        target: &DragTarget,
        point: Option<Point>,
    ) -> Self {
        Self {
            event: None,
            commands: Vec::new(),
            prevent_default: false,
            log: DragLogEntry {
                phase,
                sequence: None,
                target: target.clone(),
                point,
                outcome: DragLogOutcome::Ignored(reason),
            },
        }
    }

    /// Whether the input reached the callbacks.
    #[must_use]
    pub fn is_forwarded(&self) -> bool {
        self.log.outcome == DragLogOutcome::Forwarded
    }
}

/// Single-pointer press/move/release controller for one drag handle.
#[derive(Debug, Clone)]
pub struct PointerDragController {
    target: DragTarget,
    session: Option<DragSession>,
    listeners: ListenerSet,
    next_sequence: u64,
}

impl PointerDragController {
    /// Create an idle controller bound to `target`.
    #[must_use]
    pub fn new(target: DragTarget) -> Self {
        Self {
            target,
            session: None,
            listeners: ListenerSet::default(),
            next_sequence: 1,
        }
    }

    /// The handle this controller is bound to.
    #[must_use]
    pub const fn target(&self) -> &DragTarget {
        &self.target
    }

    /// Active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether document-scope listeners are currently attached.
    #[must_use]
    pub const fn listeners_attached(&self) -> bool {
        self.listeners.attached
    }

    /// Route an input to [`press`](Self::press), [`motion`](Self::motion),
    /// [`release`](Self::release) or [`cancel`](Self::cancel) by phase.
    pub fn handle(&mut self, input: &RawInput, origin: OriginSnapshot) -> DragDispatch {
        match input.phase() {
            InputPhase::Press => self.press(input, origin),
            InputPhase::Motion => self.motion(input),
            InputPhase::Release => self.release(input),
            InputPhase::Cancel => self.cancel(),
        }
    }

    /// Handle a press on the handle.
    pub fn press(&mut self, input: &RawInput, origin: OriginSnapshot) -> DragDispatch {
        let point = input.point();
        if self.session.is_some() {
            return self.finish(DragDispatch::ignored(
                InputPhase::Press,
                DragIgnoredReason::SessionAlreadyActive,
                &self.target,
                point,
            ));
        }
        if !input.is_primary_press() {
            return self.finish(DragDispatch::ignored(
                InputPhase::Press,
                DragIgnoredReason::ButtonNotAllowed,
                &self.target,
                point,
            ));
        }
        let Some(point) = point else {
            return self.finish(DragDispatch::ignored(
                InputPhase::Press,
                DragIgnoredReason::MissingPoint,
                &self.target,
                None,
            ));
        };

        self.session = Some(DragSession {
            start: point,
            delta: Delta::ZERO,
            target: self.target.clone(),
            kind: self.target.kind(),
            origin,
        });
        let mut commands = vec![
            HostCommand::SetElementDragging(true),
            HostCommand::SetDraggingIndicator(true),
        ];
        self.listeners.attach(&mut commands);
        let dispatch = self.forwarded(
            InputPhase::Press,
            Some(point),
            DragEvent::Start { point, origin },
            commands,
            false,
        );
        self.finish(dispatch)
    }

    /// Handle a pointer move anywhere in the document.
    pub fn motion(&mut self, input: &RawInput) -> DragDispatch {
        let point = input.point();
        let Some(start) = self.session.as_ref().map(|session| session.start) else {
            return self.finish(DragDispatch::ignored(
                InputPhase::Motion,
                DragIgnoredReason::NoActiveSession,
                &self.target,
                point,
            ));
        };
        let Some(point) = point else {
            return self.finish(DragDispatch::ignored(
                InputPhase::Motion,
                DragIgnoredReason::MissingPoint,
                &self.target,
                None,
            ));
        };

        let delta = point.delta_from(start);
        if let Some(session) = self.session.as_mut() {
            session.delta = delta;
        }
        let prevent_default = input.source() == InputSource::Touch;
        let dispatch = self.forwarded(
            InputPhase::Motion,
            Some(point),
            DragEvent::Move { point, delta },
            Vec::new(),
            prevent_default,
        );
        self.finish(dispatch)
    }

    /// Handle a release anywhere in the document.
    ///
    /// A release without a point (e.g. an empty `changedTouches`) ends the
    /// session at the last known position.
    pub fn release(&mut self, input: &RawInput) -> DragDispatch {
        let Some(session) = self.session.take() else {
            return self.finish(DragDispatch::ignored(
                InputPhase::Release,
                DragIgnoredReason::NoActiveSession,
                &self.target,
                input.point(),
            ));
        };
        let point = input.point().unwrap_or_else(|| session.current());
        let delta = point.delta_from(session.start);

        let mut commands = Vec::with_capacity(6);
        self.teardown(&mut commands);
        let dispatch = self.forwarded(
            InputPhase::Release,
            Some(point),
            DragEvent::End { point, delta },
            commands,
            false,
        );
        self.finish(dispatch)
    }

    /// End the active session without a release (blur, `touchcancel`,
    /// element removed). No-op when idle.
    pub fn cancel(&mut self) -> DragDispatch {
        let Some(session) = self.session.take() else {
            return self.finish(DragDispatch::ignored(
                InputPhase::Cancel,
                DragIgnoredReason::NoActiveSession,
                &self.target,
                None,
            ));
        };
        let mut commands = Vec::with_capacity(6);
        self.teardown(&mut commands);
        let dispatch = self.forwarded(
            InputPhase::Cancel,
            Some(session.current()),
            DragEvent::Cancel {
                delta: session.delta,
            },
            commands,
            false,
        );
        self.finish(dispatch)
    }

    fn teardown(&mut self, commands: &mut Vec<HostCommand>) {
        commands.push(HostCommand::SetElementDragging(false));
        commands.push(HostCommand::SetDraggingIndicator(false));
        self.listeners.detach(commands);
    }

    fn forwarded(
        &mut self,
        phase: InputPhase,
        point: Option<Point>,
        event: DragEvent,
        commands: Vec<HostCommand>,
        prevent_default: bool,
    ) -> DragDispatch {
        DragDispatch {
            event: Some(event),
            commands,
            prevent_default,
            log: DragLogEntry {
                phase,
                sequence: Some(self.next_sequence()),
                target: self.target.clone(),
                point,
                outcome: DragLogOutcome::Forwarded,
            },
        }
    }

    fn finish(&self, dispatch: DragDispatch) -> DragDispatch {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "fanhand.drag",
            phase = ?dispatch.log.phase,
            sequence = ?dispatch.log.sequence,
            drag_target = ?dispatch.log.target,
            outcome = ?dispatch.log.outcome,
            "pointer dispatch"
        );
        dispatch
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanhand_core::event::MouseButton;
    use pretty_assertions::assert_eq;

    fn controller() -> PointerDragController {
        PointerDragController::new(DragTarget::Panel)
    }

    fn origin() -> OriginSnapshot {
        OriginSnapshot::PanelLeft(0.0)
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl DragCallbacks for Recorder {
        fn on_start(&mut self, point: Point, _origin: &OriginSnapshot) {
            self.calls.push(format!("start {},{}", point.x, point.y));
        }
        fn on_move(&mut self, _point: Point, delta: Delta) {
            self.calls.push(format!("move {},{}", delta.dx, delta.dy));
        }
        fn on_end(&mut self, _point: Point, delta: Delta) {
            self.calls.push(format!("end {},{}", delta.dx, delta.dy));
        }
    }

    #[test]
    fn press_activates_session_and_attaches_listeners() {
        let mut drag = controller();
        let dispatch = drag.press(&RawInput::mouse_down(10.0, 20.0), origin());
        assert!(dispatch.is_forwarded());
        assert!(drag.is_active());
        assert!(drag.listeners_attached());
        assert_eq!(
            dispatch.commands,
            vec![
                HostCommand::SetElementDragging(true),
                HostCommand::SetDraggingIndicator(true),
                HostCommand::AddDocumentListener(DocumentListener::MouseMove),
                HostCommand::AddDocumentListener(DocumentListener::MouseUp),
                HostCommand::AddDocumentListener(DocumentListener::TouchMove),
                HostCommand::AddDocumentListener(DocumentListener::TouchEnd),
            ]
        );
        assert_eq!(dispatch.log.sequence, Some(1));
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut drag = controller();
        let dispatch = drag.press(
            &RawInput::MouseDown {
                button: MouseButton::Secondary,
                position: Point::new(1.0, 1.0),
            },
            origin(),
        );
        assert_eq!(
            dispatch.log.outcome,
            DragLogOutcome::Ignored(DragIgnoredReason::ButtonNotAllowed)
        );
        assert!(dispatch.commands.is_empty());
        assert!(!drag.is_active());
    }

    #[test]
    fn second_press_while_active_is_ignored() {
        let mut drag = controller();
        drag.press(&RawInput::mouse_down(0.0, 0.0), origin());
        let dispatch = drag.press(&RawInput::mouse_down(50.0, 50.0), origin());
        assert_eq!(
            dispatch.log.outcome,
            DragLogOutcome::Ignored(DragIgnoredReason::SessionAlreadyActive)
        );
        assert_eq!(drag.session().map(|s| s.start), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn move_without_session_is_noop() {
        let mut drag = controller();
        let dispatch = drag.motion(&RawInput::mouse_move(5.0, 5.0));
        assert_eq!(dispatch.event, None);
        assert_eq!(
            dispatch.log.outcome,
            DragLogOutcome::Ignored(DragIgnoredReason::NoActiveSession)
        );
    }

    #[test]
    fn move_reports_delta_from_start() {
        let mut drag = controller();
        drag.press(&RawInput::mouse_down(100.0, 100.0), origin());
        let dispatch = drag.motion(&RawInput::mouse_move(130.0, 60.0));
        assert_eq!(
            dispatch.event,
            Some(DragEvent::Move {
                point: Point::new(130.0, 60.0),
                delta: Delta::new(30.0, -40.0),
            })
        );
        assert!(!dispatch.prevent_default);
    }

    #[test]
    fn touch_move_prevents_scrolling() {
        let mut drag = controller();
        drag.press(
            &RawInput::TouchStart {
                touches: vec![Point::new(0.0, 0.0)],
            },
            origin(),
        );
        let dispatch = drag.motion(&RawInput::TouchMove {
            touches: vec![Point::new(3.0, 4.0)],
        });
        assert!(dispatch.prevent_default);
    }

    #[test]
    fn release_is_symmetric_with_press() {
        let mut drag = controller();
        let press = drag.press(&RawInput::mouse_down(0.0, 0.0), origin());
        let release = drag.release(&RawInput::mouse_up(12.0, 0.0));
        let added: Vec<_> = press
            .commands
            .iter()
            .filter_map(|c| match c {
                HostCommand::AddDocumentListener(l) => Some(*l),
                _ => None,
            })
            .collect();
        let removed: Vec<_> = release
            .commands
            .iter()
            .filter_map(|c| match c {
                HostCommand::RemoveDocumentListener(l) => Some(*l),
                _ => None,
            })
            .collect();
        assert_eq!(added, removed);
        assert!(!drag.listeners_attached());
        assert!(release.commands.contains(&HostCommand::SetDraggingIndicator(false)));
    }

    #[test]
    fn duplicate_release_is_safe_noop() {
        let mut drag = controller();
        drag.press(&RawInput::mouse_down(0.0, 0.0), origin());
        drag.release(&RawInput::mouse_up(0.0, 0.0));
        let again = drag.release(&RawInput::mouse_up(0.0, 0.0));
        assert!(again.commands.is_empty());
        assert_eq!(
            again.log.outcome,
            DragLogOutcome::Ignored(DragIgnoredReason::NoActiveSession)
        );
    }

    #[test]
    fn release_without_point_uses_last_position() {
        let mut drag = controller();
        drag.press(
            &RawInput::TouchStart {
                touches: vec![Point::new(10.0, 10.0)],
            },
            origin(),
        );
        drag.motion(&RawInput::TouchMove {
            touches: vec![Point::new(25.0, -5.0)],
        });
        let dispatch = drag.release(&RawInput::TouchEnd { changed: vec![] });
        assert_eq!(
            dispatch.event,
            Some(DragEvent::End {
                point: Point::new(25.0, -5.0),
                delta: Delta::new(15.0, -15.0),
            })
        );
    }

    #[test]
    fn cancel_tears_down_and_reports_last_delta() {
        let mut drag = controller();
        drag.press(&RawInput::mouse_down(0.0, 0.0), origin());
        drag.motion(&RawInput::mouse_move(7.0, 9.0));
        let dispatch = drag.handle(&RawInput::TouchCancel, origin());
        assert_eq!(
            dispatch.event,
            Some(DragEvent::Cancel {
                delta: Delta::new(7.0, 9.0)
            })
        );
        assert!(!drag.is_active());
        assert!(!drag.listeners_attached());
        assert!(!drag.cancel().is_forwarded());
    }

    #[test]
    fn events_deliver_to_callbacks() {
        let mut drag = controller();
        let mut recorder = Recorder::default();
        for input in [
            RawInput::mouse_down(1.0, 2.0),
            RawInput::mouse_move(4.0, 6.0),
            RawInput::mouse_up(5.0, 0.0),
        ] {
            if let Some(event) = drag.handle(&input, origin()).event {
                event.deliver(&mut recorder);
            }
        }
        assert_eq!(recorder.calls, vec!["start 1,2", "move 3,4", "end 4,-2"]);
    }

    #[test]
    fn session_records_kind_and_origin() {
        let mut drag = PointerDragController::new(DragTarget::Card("sword".into()));
        drag.press(&RawInput::mouse_down(0.0, 0.0), OriginSnapshot::CardSlot(None));
        let session = drag.session().expect("session active");
        assert_eq!(session.kind, GestureKind::Card);
        assert_eq!(session.origin, OriginSnapshot::CardSlot(None));
    }
}
