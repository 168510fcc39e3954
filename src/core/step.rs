//! Core Step trait for onboarding flow steps.
//!
//! Every screen in an onboarding flow is modeled as a step with a stable
//! string identity. The identity doubles as the persistence key for the
//! answer captured on that screen, so it must never change when the
//! display order of the flow is rearranged.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for onboarding flow steps.
///
/// All methods are pure - no side effects. Steps represent immutable
/// values that describe a position in the onboarding sequence.
///
/// # Required Traits
///
/// - `Clone`: Steps must be cloneable for trail tracking
/// - `PartialEq`: Steps must be comparable for navigation guards
/// - `Debug`: Steps must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Steps must be serializable so progress
///   snapshots survive app relaunches
///
/// # Example
///
/// ```rust
/// use intake::core::Step;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Signup {
///     Welcome,
///     Email,
///     Done,
/// }
///
/// impl Step for Signup {
///     fn key(&self) -> &str {
///         match self {
///             Self::Welcome => "welcome",
///             Self::Email => "emailEntry",
///             Self::Done => "done",
///         }
///     }
///
///     fn is_terminal(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
/// ```
pub trait Step:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the step's stable string identifier.
    ///
    /// This is the persistence key for the step's captured answer. It is
    /// part of the stored-data contract: reordering or renaming screens
    /// must not change it.
    fn key(&self) -> &str;

    /// Check if this is a terminal step.
    ///
    /// Terminal steps are sinks at the end of the flow (e.g. the main
    /// dashboard); the sequencer refuses to advance out of one.
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}
