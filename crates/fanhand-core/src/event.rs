#![forbid(unsafe_code)]

//! Normalized pointer input.
//!
//! Hosts translate browser `mousedown`/`mousemove`/`mouseup` and
//! `touchstart`/`touchmove`/`touchend`/`touchcancel` events into [`RawInput`]
//! values. Drag controllers only look at the single point returned by
//! [`RawInput::point`], so mouse and touch share one code path.

use crate::geometry::Point;

/// Mouse button as reported by the DOM `MouseEvent.button` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl MouseButton {
    /// Map a DOM `button` index to a [`MouseButton`].
    #[must_use]
    pub const fn from_dom(button: u16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Which device family produced an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

/// Lifecycle phase of an input relative to a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Press,
    Motion,
    Release,
    Cancel,
}

/// A raw pointer input pushed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    MouseDown { button: MouseButton, position: Point },
    MouseMove { position: Point },
    MouseUp { button: MouseButton, position: Point },
    /// Active touches (`TouchEvent.touches`).
    TouchStart { touches: Vec<Point> },
    /// Active touches (`TouchEvent.touches`).
    TouchMove { touches: Vec<Point> },
    /// Touches that were lifted (`TouchEvent.changedTouches`).
    TouchEnd { changed: Vec<Point> },
    TouchCancel,
}

impl RawInput {
    /// Convenience constructor for a primary-button press.
    #[must_use]
    pub const fn mouse_down(x: f64, y: f64) -> Self {
        Self::MouseDown {
            button: MouseButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a mouse move.
    #[must_use]
    pub const fn mouse_move(x: f64, y: f64) -> Self {
        Self::MouseMove {
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a primary-button release.
    #[must_use]
    pub const fn mouse_up(x: f64, y: f64) -> Self {
        Self::MouseUp {
            button: MouseButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// Gesture phase this input maps to.
    #[must_use]
    pub const fn phase(&self) -> InputPhase {
        match self {
            Self::MouseDown { .. } | Self::TouchStart { .. } => InputPhase::Press,
            Self::MouseMove { .. } | Self::TouchMove { .. } => InputPhase::Motion,
            Self::MouseUp { .. } | Self::TouchEnd { .. } => InputPhase::Release,
            Self::TouchCancel => InputPhase::Cancel,
        }
    }

    /// Device family that produced this input.
    #[must_use]
    pub const fn source(&self) -> InputSource {
        match self {
            Self::MouseDown { .. } | Self::MouseMove { .. } | Self::MouseUp { .. } => {
                InputSource::Mouse
            }
            _ => InputSource::Touch,
        }
    }

    /// The normalized point: the mouse position, or the first touch.
    ///
    /// Returns `None` for touch events carrying no touches and for cancels.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::MouseDown { position, .. }
            | Self::MouseMove { position }
            | Self::MouseUp { position, .. } => Some(*position),
            Self::TouchStart { touches } | Self::TouchMove { touches } => touches.first().copied(),
            Self::TouchEnd { changed } => changed.first().copied(),
            Self::TouchCancel => None,
        }
    }

    /// Whether a press may start a drag: primary mouse button or a touch
    /// carrying at least one point. Non-press inputs report `false`.
    #[must_use]
    pub fn is_primary_press(&self) -> bool {
        match self {
            Self::MouseDown { button, .. } => *button == MouseButton::Primary,
            Self::TouchStart { touches } => !touches.is_empty(),
            _ => false,
        }
    }
}
