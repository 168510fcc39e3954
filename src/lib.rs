//! Intake: onboarding flow sequencing and data capture.
//!
//! Intake is the logic core of a mobile onboarding flow: a sequencer
//! that owns step order, navigation, and branching, and a circular
//! value selector that turns pointer geometry into quantized answers.
//! Rendering is deliberately absent - a presentation layer subscribes
//! to state, draws the active step, and feeds taps and drags back in.
//!
//! # Core Concepts
//!
//! - **Step**: one screen of the flow, with a stable persistence key
//! - **Sequencer**: advance/retreat navigation over a step catalog,
//!   with deterministic answer-driven branching
//! - **Selector**: bidirectional mapping between dial geometry and a
//!   bounded, quantized value
//! - **Settings store**: the key/value collaborator answers are
//!   recorded to and re-seeded from
//!
//! # Example
//!
//! ```rust
//! use intake::sequencer::{Advance, Router, Sequencer};
//! use intake::settings::{Answer, MemoryStore};
//! use intake::step_enum;
//!
//! step_enum! {
//!     pub enum Signup {
//!         Welcome => "welcome",
//!         Goals => "goalSelection",
//!         Dashboard => "dashboard",
//!     }
//!     terminal: [Dashboard]
//! }
//!
//! let mut flow = Sequencer::new(
//!     Signup::catalog(),
//!     Router::catalog_order(Signup::catalog()),
//!     Box::new(MemoryStore::new()),
//! )?;
//!
//! flow.advance(&Signup::Welcome, None)?;
//! let next = flow.advance(&Signup::Goals, Some(Answer::Integer(45)))?;
//! assert_eq!(next, Advance::Step(Signup::Dashboard));
//! assert_eq!(flow.settings().get("goalSelection").as_deref(), Some("45"));
//! # Ok::<(), intake::sequencer::SequencerError>(())
//! ```

pub mod core;
pub mod flow;
pub mod selector;
pub mod sequencer;
pub mod settings;
pub mod snapshot;

// Re-export commonly used types
pub use core::{Step, StepHistory, Visit};
pub use selector::{DialSelector, DragGate, Point};
pub use sequencer::{Advance, Route, Router, Sequencer, SequencerError};
pub use settings::{Answer, MemoryStore, SettingsStore};
pub use snapshot::ProgressSnapshot;
