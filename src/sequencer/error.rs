//! Sequencer error types.

use thiserror::Error;

/// Errors that can occur during flow navigation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequencerError {
    /// A sequencer cannot be built over an empty catalog
    #[error("step catalog is empty")]
    EmptyCatalog,

    /// Advance was called from a terminal step or a completed flow
    #[error("cannot advance from terminal step '{step}'")]
    TerminalStep { step: String },

    /// Advance was called with a step that is no longer current
    /// (double-tap guard - the answer was already recorded)
    #[error("stale advance from '{from}', current step is '{current}'")]
    StaleAdvance { from: String, current: String },

    /// The requested step is not part of the catalog
    #[error("step '{step}' is not in the catalog")]
    UnknownStep { step: String },
}
