//! Per-attribute constraint resolution with memoization.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use pim_model::{Attribute, ConstraintSet, Result, empty_constraints};
use tracing::debug;

use crate::guesser::ConstraintGuesser;

/// Resolves the constraint set of an attribute, asking the guesser at most
/// once per attribute code.
///
/// Entries are never evicted; the cache lives as long as the resolver. A code
/// whose guess failed is not cached and will be guessed again on the next call.
pub struct ConstraintResolver<G> {
    guesser: G,
    constraints: Mutex<HashMap<String, ConstraintSet>>,
}

impl<G: ConstraintGuesser> ConstraintResolver<G> {
    pub fn new(guesser: G) -> Self {
        Self {
            guesser,
            constraints: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the constraints for `attribute`, computing them on first use.
    ///
    /// Unsupported attributes resolve to an empty set without calling
    /// [`ConstraintGuesser::guess`].
    ///
    /// # Errors
    ///
    /// Propagates guesser failures.
    pub fn get_constraints(&self, attribute: &Attribute) -> Result<ConstraintSet> {
        let mut cache = self.lock();
        if let Some(constraints) = cache.get(&attribute.code) {
            return Ok(ConstraintSet::clone(constraints));
        }

        let constraints: ConstraintSet = if self.guesser.supports(attribute) {
            self.guesser.guess(attribute)?.into()
        } else {
            empty_constraints()
        };
        debug!(
            attribute = %attribute.code,
            count = constraints.len(),
            "resolved attribute constraints"
        );
        cache.insert(attribute.code.clone(), ConstraintSet::clone(&constraints));
        Ok(constraints)
    }

    /// Number of attribute codes resolved so far.
    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    pub fn guesser(&self) -> &G {
        &self.guesser
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ConstraintSet>> {
        // The map is only ever inserted into, so a poisoned lock still holds
        // consistent entries.
        self.constraints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
