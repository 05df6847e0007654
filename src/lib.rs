// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit and first-person camera controller for interactive 3D views.
//!
//! The controller owns a camera's rotation, focus point and orbit distance
//! and turns discrete input (pointer drags, pointer moves, key presses) into
//! an updated camera transform. It knows nothing about windows or GPUs: a
//! host feeds it [`input::InputEvent`]s and asks for
//! [`camera::CameraController::view_matrix`] once per frame.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - the stateful controller
//! - [`camera::CameraMode`] - terrain (orbit) vs. ego (first-person)
//! - [`camera::orientation`] - pure re-leveling and yaw/pitch math
//! - [`options::Options`] - TOML-backed configuration and key bindings
//!
//! # Threading
//!
//! Everything here is synchronous and meant to be driven from the thread
//! that owns the view. Pointer samples must arrive in chronological order;
//! the first-person look delta is computed from the last two of them.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{CameraController, CameraMode};
pub use error::ViewcamError;
pub use input::{ControllerRequest, InputEvent, RequestSink};
pub use options::Options;
