//! Input handling: event types, the pointer sample history, and the key
//! actions the camera understands.

/// Platform-agnostic input events and the request sink.
pub mod event;
/// Bindable camera key actions.
pub mod keyboard;
/// Two-sample pointer history for first-person look deltas.
pub mod pointer;

pub use event::{
    ControllerRequest, IgnoreRequests, InputEvent, MouseButton, PointerSample,
    RequestSink,
};
pub use keyboard::KeyAction;
pub use pointer::{PointerDelta, PointerHistory};
