//! # Order Submission
//!
//! Turns the current selections and contact details into one persisted order.
//!
//! ## Structure
//!
//! - [`orchestrator`] - [`OrderSubmitter`] and its [`SubmissionState`] machine
//! - [`clock`] - [`Clock`] for stamping the order date and time
//! - [`error`] - [`SubmissionError`]
//!
//! ## State machine
//!
//! ```text
//! Idle -> Validating -> Persisting -> Succeeded
//!              |              |
//!              +--> Failed <--+
//! ```
//!
//! `Succeeded` and `Failed` are held until the next attempt or [`OrderSubmitter::reset`].
//! A failed attempt never touches the selections beyond dropping those whose product left
//! the catalog, so the customer can retry without re-entering anything.

pub mod clock;
pub mod error;
pub mod orchestrator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SubmissionError;
pub use orchestrator::{OrderSubmitter, SubmissionState};
