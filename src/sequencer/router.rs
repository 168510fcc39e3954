//! Next-step routing for the onboarding flow.
//!
//! Routing is a pure function of the current step and the answers
//! recorded so far. Keeping it deterministic and side-effect free means
//! resuming a saved flow reproduces identical navigation.

use crate::core::Step;
use crate::settings::SettingsStore;

/// Outcome of routing from a step.
#[derive(Clone, Debug, PartialEq)]
pub enum Route<S: Step> {
    /// Move to the given step
    Next(S),
    /// The flow is finished; no further step exists
    Complete,
}

/// Pure next-step decision function.
///
/// The store reference is shared, so routing can read prior answers but
/// can never write.
///
/// # Example
///
/// ```rust
/// use intake::sequencer::{Route, Router};
/// use intake::settings::MemoryStore;
/// use intake::step_enum;
///
/// step_enum! {
///     pub enum Mini {
///         First => "first",
///         Second => "second",
///     }
/// }
///
/// let router = Router::catalog_order(Mini::catalog());
/// let store = MemoryStore::new();
///
/// assert_eq!(router.next(&Mini::First, &store), Route::Next(Mini::Second));
/// assert_eq!(router.next(&Mini::Second, &store), Route::Complete);
/// ```
pub struct Router<S: Step> {
    decide: Box<dyn Fn(&S, &dyn SettingsStore) -> Route<S> + Send + Sync>,
}

impl<S: Step + 'static> Router<S> {
    /// Create a router from a decision function.
    ///
    /// The function must be deterministic: the same step and the same
    /// recorded answers must always produce the same route.
    pub fn new<F>(decide: F) -> Self
    where
        F: Fn(&S, &dyn SettingsStore) -> Route<S> + Send + Sync + 'static,
    {
        Router {
            decide: Box::new(decide),
        }
    }

    /// Route strictly in catalog declaration order.
    ///
    /// The step after the last catalog entry is `Complete`. A step not
    /// found in the catalog also routes to `Complete`.
    pub fn catalog_order(catalog: Vec<S>) -> Self {
        Self::catalog_order_with_skips(catalog, |_, _| false)
    }

    /// Route in catalog order, passing over steps the predicate rejects.
    ///
    /// The skip predicate is consulted for each candidate in turn, so a
    /// run of consecutive gated steps is skipped as a whole. Running off
    /// the end of the catalog yields `Complete`.
    pub fn catalog_order_with_skips<F>(catalog: Vec<S>, skip: F) -> Self
    where
        F: Fn(&S, &dyn SettingsStore) -> bool + Send + Sync + 'static,
    {
        Self::new(move |current, answers| {
            let position = match catalog.iter().position(|s| s == current) {
                Some(position) => position,
                None => return Route::Complete,
            };
            for candidate in &catalog[position + 1..] {
                if !skip(candidate, answers) {
                    return Route::Next(candidate.clone());
                }
            }
            Route::Complete
        })
    }

    /// Decide the route from the given step.
    pub fn next(&self, current: &S, answers: &dyn SettingsStore) -> Route<S> {
        (self.decide)(current, answers)
    }
}
