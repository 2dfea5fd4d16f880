//! Validation of imported catalog records.
//!
//! [`ProductImportValidator`] checks each column of an imported product:
//! attribute-backed columns against the attribute's constraints (guessed once
//! per attribute code by a [`ConstraintResolver`]), plain columns against the
//! record's property constraints. Violations are collected per column label.

pub mod checks;
pub mod guesser;
pub mod identifier;
pub mod import;
pub mod resolver;
pub mod validator;

pub use guesser::{ChainedConstraintGuesser, ConstraintGuesser, default_guesser};
pub use identifier::{IdentifierChecker, UniqueIdentifierChecker};
pub use import::{CODE_PROPERTY, EntityImportValidator, ImportValidator, ProductImportValidator};
pub use resolver::ConstraintResolver;
pub use validator::{CODE_LIST_PATTERN, CODE_PATTERN, ConstraintValidator, Validator};
