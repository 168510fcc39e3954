//! Core onboarding flow types.
//!
//! This module contains the pure building blocks of the flow:
//! - Step identity via the `Step` trait
//! - The `step_enum!` macro for declaring step catalogs
//! - Visit trail tracking with stack semantics
//!
//! Everything here is side-effect free; persistence and navigation
//! policy live in the `sequencer` and `settings` modules.

mod history;
mod macros;
mod step;

pub use history::{StepHistory, Visit};
pub use step::Step;
