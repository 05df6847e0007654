/// Platform-agnostic input events.
///
/// These are fed into
/// [`CameraController::handle_event`](crate::CameraController::handle_event),
/// which routes each variant to the matching handler.
///
/// # Example
///
/// ```ignore
/// let mut requests = Vec::new();
/// let handled = controller.handle_event(
///     InputEvent::KeyDown { key: "ArrowUp" },
///     &mut requests,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent<'a> {
    /// Pointer dragged with a button held.
    PointerDrag {
        /// Which button is held.
        button: MouseButton,
        /// Seconds between the two samples that produced this drag.
        dt: f64,
        /// Horizontal delta in normalized coordinates.
        dx: f64,
        /// Vertical delta in normalized coordinates.
        dy: f64,
    },
    /// Pointer moved (no button requirement).
    PointerMove(PointerSample),
    /// Key pressed. `key` uses the `winit::keyboard::KeyCode` debug
    /// format (`"ArrowUp"`, `"KeyF"`, ...).
    KeyDown {
        /// Physical key string.
        key: &'a str,
    },
    /// Key released.
    KeyUp {
        /// Physical key string.
        key: &'a str,
    },
}

/// One pointer position sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Horizontal position normalized to `[-1, 1]` (0 = view center).
    pub x: f64,
    /// Vertical position normalized to `[-1, 1]` (0 = view center).
    pub y: f64,
    /// Event time in seconds. Must not decrease between samples.
    pub time: f64,
}

impl PointerSample {
    /// Create a sample at normalized `(x, y)` taken at `time` seconds.
    #[must_use]
    pub const fn new(x: f64, y: f64, time: f64) -> Self {
        Self { x, y, time }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Side effects the controller asks of the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerRequest {
    /// Move the pointer back to the center of the view.
    WarpPointerToCenter,
}

/// Receiver for [`ControllerRequest`]s emitted while handling input.
pub trait RequestSink {
    /// Accept one request.
    fn request(&mut self, request: ControllerRequest);
}

impl RequestSink for Vec<ControllerRequest> {
    fn request(&mut self, request: ControllerRequest) {
        self.push(request);
    }
}

/// Sink that drops every request, for hosts that cannot warp the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreRequests;

impl RequestSink for IgnoreRequests {
    fn request(&mut self, _request: ControllerRequest) {}
}
