//! Visit trail tracking for the onboarding flow.
//!
//! The trail records which steps the user has seen, in order. Unlike an
//! append-only audit log it behaves as a stack: advancing pushes a visit,
//! "back" pops one. The first visit is the floor - a started trail is
//! never empty, so the current step is always defined.

use super::step::Step;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of entering a single step.
///
/// # Example
///
/// ```rust
/// use intake::core::{Step, Visit};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Welcome,
/// }
///
/// impl Step for Screen {
///     fn key(&self) -> &str {
///         "welcome"
///     }
/// }
///
/// let visit = Visit {
///     step: Screen::Welcome,
///     entered_at: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Visit<S: Step> {
    /// The step that was entered
    pub step: S,
    /// When the step was entered
    pub entered_at: DateTime<Utc>,
}

/// Ordered stack of visited steps.
///
/// Invariants: once started, the trail is never empty, and the current
/// step is always the most recent visit. `pop` refuses to remove the
/// first visit, which makes "back" at the start of the flow a no-op.
///
/// # Example
///
/// ```rust
/// use intake::core::{Step, StepHistory};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Welcome,
///     Age,
///     Goals,
/// }
///
/// impl Step for Screen {
///     fn key(&self) -> &str {
///         match self {
///             Self::Welcome => "welcome",
///             Self::Age => "ageSelection",
///             Self::Goals => "goalSelection",
///         }
///     }
/// }
///
/// let mut trail = StepHistory::start(Screen::Welcome);
/// trail.push(Screen::Age);
/// trail.push(Screen::Goals);
/// assert_eq!(trail.current(), Some(&Screen::Goals));
///
/// trail.pop();
/// assert_eq!(trail.current(), Some(&Screen::Age));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepHistory<S: Step> {
    visits: Vec<Visit<S>>,
}

impl<S: Step> StepHistory<S> {
    /// Create a trail containing exactly the given starting step.
    pub fn start(step: S) -> Self {
        Self {
            visits: vec![Visit {
                step,
                entered_at: Utc::now(),
            }],
        }
    }

    /// Append a visit for the given step.
    pub fn push(&mut self, step: S) {
        self.visits.push(Visit {
            step,
            entered_at: Utc::now(),
        });
    }

    /// Remove and return the most recent visit.
    ///
    /// Returns `None` without modifying the trail when only the starting
    /// visit remains - retreating past the first step is a no-op.
    pub fn pop(&mut self) -> Option<Visit<S>> {
        if self.visits.len() > 1 {
            self.visits.pop()
        } else {
            None
        }
    }

    /// The most recently visited step.
    pub fn current(&self) -> Option<&S> {
        self.visits.last().map(|v| &v.step)
    }

    /// Steps in visit order.
    pub fn path(&self) -> Vec<&S> {
        self.visits.iter().map(|v| &v.step).collect()
    }

    /// Number of visits on the trail.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Whether the trail holds no visits.
    ///
    /// Only true for a deserialized trail that was never started.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Elapsed time from the first visit to the most recent one.
    ///
    /// Returns `None` for an empty trail.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.visits.first(), self.visits.last()) {
            let duration = last.entered_at.signed_duration_since(first.entered_at);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All visits in order.
    pub fn visits(&self) -> &[Visit<S>] {
        &self.visits
    }
}
