//! Onboarding sequencer: step order, navigation, and answer capture.
//!
//! The sequencer decides which step is active and mediates transitions.
//! It never renders anything; a presentation layer reads `current_step`
//! and `progress` and calls `advance` / `retreat` in response to taps.

use crate::core::{Step, StepHistory};
use crate::settings::{Answer, SettingsStore};
use crate::snapshot::{ProgressSnapshot, SnapshotError};

pub mod error;
pub mod router;

pub use error::SequencerError;
pub use router::{Route, Router};

/// Outcome of a successful advance.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance<S: Step> {
    /// The flow moved to a new step
    Step(S),
    /// The flow ran past its last step and is now complete
    Complete,
}

/// Owns the step catalog, the current step, the visit trail, and the
/// routing policy; records answers through the settings collaborator.
///
/// Navigation invariants:
/// - the trail is appended on advance and popped on retreat, and in the
///   forward flow the current step is always the last trail entry;
/// - the progress fraction is a pure function of the current step's
///   catalog position and is never independently settable;
/// - retreat never re-runs persistence, and a stale advance (double tap
///   after the step already changed) is rejected before any write.
///
/// # Example
///
/// ```rust
/// use intake::sequencer::{Advance, Router, Sequencer};
/// use intake::settings::{Answer, MemoryStore};
/// use intake::step_enum;
///
/// step_enum! {
///     pub enum Mini {
///         Welcome => "welcome",
///         Goals => "goalSelection",
///     }
/// }
///
/// let mut flow = Sequencer::new(
///     Mini::catalog(),
///     Router::catalog_order(Mini::catalog()),
///     Box::new(MemoryStore::new()),
/// )
/// .unwrap();
///
/// let next = flow.advance(&Mini::Welcome, None).unwrap();
/// assert_eq!(next, Advance::Step(Mini::Goals));
///
/// let done = flow.advance(&Mini::Goals, Some(Answer::Integer(45))).unwrap();
/// assert_eq!(done, Advance::Complete);
/// assert_eq!(flow.settings().get("goalSelection").as_deref(), Some("45"));
/// ```
pub struct Sequencer<S: Step> {
    catalog: Vec<S>,
    current: S,
    trail: StepHistory<S>,
    router: Router<S>,
    store: Box<dyn SettingsStore>,
    completed: bool,
}

impl<S: Step + std::fmt::Debug> std::fmt::Debug for Sequencer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("catalog", &self.catalog)
            .field("current", &self.current)
            .field("trail", &self.trail)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

impl<S: Step + 'static> Sequencer<S> {
    /// Create a sequencer positioned at the first catalog step.
    pub fn new(
        catalog: Vec<S>,
        router: Router<S>,
        store: Box<dyn SettingsStore>,
    ) -> Result<Self, SequencerError> {
        let first = catalog.first().cloned().ok_or(SequencerError::EmptyCatalog)?;
        Ok(Self {
            catalog,
            current: first.clone(),
            trail: StepHistory::start(first),
            router,
            store,
            completed: false,
        })
    }

    /// Reset to the given step (default: first in catalog order).
    ///
    /// The trail is reset to contain exactly the new current step and
    /// any completion is cleared. Always succeeds; a step outside the
    /// catalog is rejected so progress stays well defined.
    pub fn start(&mut self, initial: Option<S>) -> Result<(), SequencerError> {
        let step = match initial {
            Some(step) => {
                if !self.catalog.contains(&step) {
                    return Err(SequencerError::UnknownStep {
                        step: format!("{step:?}"),
                    });
                }
                step
            }
            // Catalog is non-empty by construction.
            None => self.catalog[0].clone(),
        };
        self.current = step.clone();
        self.trail = StepHistory::start(step);
        self.completed = false;
        Ok(())
    }

    /// Record the answer for the current step and move forward.
    ///
    /// `from` is the step the caller was showing when the tap fired.
    /// If it no longer matches the current step the call is rejected
    /// before any write, which makes a rapid double tap harmless.
    ///
    /// Routing past the last step returns [`Advance::Complete`]; calling
    /// `advance` again after that, or from a terminal step, fails with
    /// [`SequencerError::TerminalStep`].
    pub fn advance(
        &mut self,
        from: &S,
        answer: Option<Answer>,
    ) -> Result<Advance<S>, SequencerError> {
        if self.completed || self.current.is_terminal() {
            return Err(SequencerError::TerminalStep {
                step: self.current.key().to_string(),
            });
        }
        if from != &self.current {
            return Err(SequencerError::StaleAdvance {
                from: from.key().to_string(),
                current: self.current.key().to_string(),
            });
        }

        if let Some(answer) = answer {
            self.store.set(self.current.key(), &answer.encode());
        }

        match self.router.next(&self.current, self.store.as_ref()) {
            Route::Next(step) => {
                self.trail.push(step.clone());
                self.current = step.clone();
                Ok(Advance::Step(step))
            }
            Route::Complete => {
                self.completed = true;
                Ok(Advance::Complete)
            }
        }
    }

    /// Store an extra value for a multi-field step without navigating.
    ///
    /// The value lands under `"<stepKey>.<subKey>"`.
    pub fn record_field(&mut self, sub_key: &str, answer: Answer) {
        let key = format!("{}.{}", self.current.key(), sub_key);
        self.store.set(&key, &answer.encode());
    }

    /// Move back to the previously visited step.
    ///
    /// Pure navigation - no persistence side effects. Returns the new
    /// current step, or `None` (silent no-op) when already at the start
    /// of the trail.
    pub fn retreat(&mut self) -> Option<&S> {
        self.trail.pop()?;
        self.completed = false;
        // Trail is never emptied by pop.
        self.current = self.trail.current()?.clone();
        Some(&self.current)
    }

    /// Enter a step from a settings/edit context, outside the forward
    /// flow.
    ///
    /// The trail is left untouched so the user's forward position is
    /// preserved; input state for the step is pre-seeded from persisted
    /// values by the question descriptors, not defaults.
    pub fn resume_for_editing(&mut self, step: S) -> Result<(), SequencerError> {
        if !self.catalog.contains(&step) {
            return Err(SequencerError::UnknownStep {
                step: format!("{step:?}"),
            });
        }
        self.current = step;
        Ok(())
    }

    /// The active step.
    pub fn current_step(&self) -> &S {
        &self.current
    }

    /// Monotonic progress fraction in (0.0, 1.0].
    ///
    /// Derived from the current step's position in the canonical catalog
    /// order over the total step count; the final step reads 1.0.
    pub fn progress(&self) -> f64 {
        let position = self
            .catalog
            .iter()
            .position(|s| s == &self.current)
            .unwrap_or(0);
        (position + 1) as f64 / self.catalog.len() as f64
    }

    /// Whether the flow has run past its last step.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The visit trail.
    pub fn history(&self) -> &StepHistory<S> {
        &self.trail
    }

    /// The canonical step catalog.
    pub fn catalog(&self) -> &[S] {
        &self.catalog
    }

    /// Read access to the settings collaborator.
    pub fn settings(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    /// Write access to the settings collaborator.
    pub fn settings_mut(&mut self) -> &mut dyn SettingsStore {
        self.store.as_mut()
    }

    /// Capture the current flow position for later resume.
    ///
    /// Captured answers are not included; they already live in the
    /// settings store under their step keys.
    pub fn snapshot(&self) -> ProgressSnapshot<S> {
        ProgressSnapshot::capture(self.current.clone(), self.trail.clone(), self.completed)
    }

    /// Rebuild a sequencer from a saved snapshot.
    ///
    /// The catalog and router are process-wide configuration and come
    /// from the caller; the snapshot only carries position. The restored
    /// current step must be a catalog member.
    pub fn restore(
        snapshot: ProgressSnapshot<S>,
        catalog: Vec<S>,
        router: Router<S>,
        store: Box<dyn SettingsStore>,
    ) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        if !catalog.contains(&snapshot.current) {
            return Err(SnapshotError::ValidationFailed(format!(
                "step '{}' is not in the catalog",
                snapshot.current.key()
            )));
        }
        Ok(Self {
            catalog,
            current: snapshot.current,
            trail: snapshot.history,
            router,
            store,
            completed: snapshot.completed,
        })
    }
}
