//! Constraint guessers.
//!
//! A guesser derives the constraints that apply to an attribute from its
//! definition. The default guesser chains small single-purpose guessers.

mod choice;
mod length;
mod not_blank;
mod numeric;
mod pattern;
mod range;
mod typed;

pub use choice::ChoiceGuesser;
pub use length::{DEFAULT_MAX_CHARACTERS, LengthGuesser};
pub use not_blank::NotBlankGuesser;
pub use numeric::NumericGuesser;
pub use pattern::PatternGuesser;
pub use range::RangeGuesser;
pub use typed::TypeGuesser;

use pim_model::{Attribute, Constraint, Result};

/// Derives validation constraints for attributes.
pub trait ConstraintGuesser {
    /// Returns true if this guesser has constraints for the attribute.
    fn supports(&self, attribute: &Attribute) -> bool;

    /// Returns the constraints for a supported attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute definition cannot be turned into
    /// constraints (e.g. an invalid validation pattern).
    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>>;
}

impl<G: ConstraintGuesser + ?Sized> ConstraintGuesser for Box<G> {
    fn supports(&self, attribute: &Attribute) -> bool {
        (**self).supports(attribute)
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        (**self).guess(attribute)
    }
}

/// Guesser delegating to every registered guesser that supports an attribute.
///
/// Constraints are concatenated in registration order.
#[derive(Default)]
pub struct ChainedConstraintGuesser {
    guessers: Vec<Box<dyn ConstraintGuesser + Send + Sync>>,
}

impl ChainedConstraintGuesser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a guesser to the chain.
    pub fn register(&mut self, guesser: impl ConstraintGuesser + Send + Sync + 'static) {
        self.guessers.push(Box::new(guesser));
    }

    #[must_use]
    pub fn with(mut self, guesser: impl ConstraintGuesser + Send + Sync + 'static) -> Self {
        self.register(guesser);
        self
    }

    pub fn len(&self) -> usize {
        self.guessers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guessers.is_empty()
    }
}

impl ConstraintGuesser for ChainedConstraintGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        self.guessers
            .iter()
            .any(|guesser| guesser.supports(attribute))
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        let mut constraints = Vec::new();
        for guesser in &self.guessers {
            if guesser.supports(attribute) {
                constraints.extend(guesser.guess(attribute)?);
            }
        }
        Ok(constraints)
    }
}

/// The standard guesser chain for catalog attributes.
pub fn default_guesser() -> ChainedConstraintGuesser {
    ChainedConstraintGuesser::new()
        .with(NotBlankGuesser)
        .with(TypeGuesser)
        .with(NumericGuesser)
        .with(RangeGuesser)
        .with(LengthGuesser)
        .with(PatternGuesser)
        .with(ChoiceGuesser)
}
